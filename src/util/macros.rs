#![allow(unused_macros)]
#![allow(unused_imports)]

// Derivation of the missing half of an additive / multiplicative structure.
//
// Each macro takes a type, optionally preceded by a bracketed generics list:
//
//     impl_add_fold!(Pair);
//     impl_mul_fold!([const N: u64] Zn<N>);
//
// A type gets its fold witness from exactly one place (a hand-written impl or
// `impl_*_fold!`), so every collection entry point resolves to that witness.

/// `AddFold` as the left fold of `+`.
#[macro_export]
macro_rules! impl_add_fold {
    ([$($g:tt)*] $t:ty) => {
        impl<$($g)*> $crate::AddFold for $t {
            fn sum_of<I>(first: Self, rest: I) -> Self
            where I: IntoIterator<Item = Self> {
                $crate::fold_by_add(first, rest)
            }
        }
    };
    ($t:ty) => {
        $crate::impl_add_fold!([] $t);
    };
}

/// `Add` as the fold witness applied to `[lhs, rhs]`.
#[macro_export]
macro_rules! impl_add_op {
    ([$($g:tt)*] $t:ty) => {
        impl<$($g)*> std::ops::Add for $t {
            type Output = Self;
            fn add(self, rhs: Self) -> Self {
                $crate::add_by_fold(self, rhs)
            }
        }
    };
    ($t:ty) => {
        $crate::impl_add_op!([] $t);
    };
}

/// `Sub` as `a + (-b)`.
#[macro_export]
macro_rules! impl_sub_op {
    ([$($g:tt)*] $t:ty) => {
        impl<$($g)*> std::ops::Sub for $t {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self {
                self + (-rhs)
            }
        }
    };
    ($t:ty) => {
        $crate::impl_sub_op!([] $t);
    };
}

/// `MulFold` as the left fold of `*`.
#[macro_export]
macro_rules! impl_mul_fold {
    ([$($g:tt)*] $t:ty) => {
        impl<$($g)*> $crate::MulFold for $t {
            fn product_of<I>(first: Self, rest: I) -> Self
            where I: IntoIterator<Item = Self> {
                $crate::fold_by_mul(first, rest)
            }
        }
    };
    ($t:ty) => {
        $crate::impl_mul_fold!([] $t);
    };
}

/// `Mul` as the fold witness applied to `[lhs, rhs]`.
#[macro_export]
macro_rules! impl_mul_op {
    ([$($g:tt)*] $t:ty) => {
        impl<$($g)*> std::ops::Mul for $t {
            type Output = Self;
            fn mul(self, rhs: Self) -> Self {
                $crate::mul_by_fold(self, rhs)
            }
        }
    };
    ($t:ty) => {
        $crate::impl_mul_op!([] $t);
    };
}

/// `Div` as `a * b.inv()`, for types with a total reciprocal.
#[macro_export]
macro_rules! impl_div_op {
    ([$($g:tt)*] $t:ty) => {
        impl<$($g)*> std::ops::Div for $t {
            type Output = Self;
            fn div(self, rhs: Self) -> Self {
                self * $crate::MulGroup::inv(&rhs)
            }
        }
    };
    ($t:ty) => {
        $crate::impl_div_op!([] $t);
    };
}

/// Builds a `NonEmpty` from one or more expressions.
#[macro_export]
macro_rules! nonempty {
    ($head:expr $(, $tail:expr)* $(,)?) => {{
        $crate::NonEmpty::new($head, vec![$($tail),*])
    }};
}

pub use {impl_add_fold, impl_add_op, impl_sub_op, impl_mul_fold, impl_mul_op, impl_div_op, nonempty};
