use crate::{AddSemigroup, AddMonoid, MulSemigroup, MulMonoid, EmptyCollection};

/// Sum / product entry points on arbitrary iterators.
///
/// All of them call the element type's fold witness once over the whole
/// input, and consume the iterator in a single pass.
pub trait AlgIterator: Iterator + Sized {
    fn sum_result(self) -> Result<Self::Item, EmptyCollection>
    where Self::Item: AddSemigroup {
        <Self::Item as AddSemigroup>::sum_result(self)
    }

    fn product_result(self) -> Result<Self::Item, EmptyCollection>
    where Self::Item: MulSemigroup {
        <Self::Item as MulSemigroup>::product_result(self)
    }

    fn sum_or_zero(self) -> Self::Item
    where Self::Item: AddMonoid {
        <Self::Item as AddMonoid>::sum(self)
    }

    fn product_or_one(self) -> Self::Item
    where Self::Item: MulMonoid {
        <Self::Item as MulMonoid>::product(self)
    }

    fn map_and_sum_result<T, F>(self, f: F) -> Result<T, EmptyCollection>
    where T: AddSemigroup, F: FnMut(Self::Item) -> T {
        T::sum_result(self.map(f))
    }

    fn map_and_sum<T, F>(self, f: F) -> T
    where T: AddMonoid, F: FnMut(Self::Item) -> T {
        T::sum(self.map(f))
    }

    fn map_and_product_result<T, F>(self, f: F) -> Result<T, EmptyCollection>
    where T: MulSemigroup, F: FnMut(Self::Item) -> T {
        T::product_result(self.map(f))
    }

    fn map_and_product<T, F>(self, f: F) -> T
    where T: MulMonoid, F: FnMut(Self::Item) -> T {
        T::product(self.map(f))
    }
}

impl<I> AlgIterator for I where I: Iterator {}
