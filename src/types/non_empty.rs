use std::fmt::Display;
use std::ops::Index;
use delegate::delegate;
use itertools::Itertools;
use crate::{AddSemigroup, MulSemigroup, EmptyCollection};

/// A sequence holding at least one element.
///
/// Backed by one contiguous buffer: `head` is index 0, `tail` is a borrowed
/// view of the rest of the same buffer, and `as_slice` / `into_vec` hand out
/// the buffer itself. There are no mutating methods; transformations build a
/// new instance.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct NonEmpty<T> {
    data: Vec<T> // never empty
}

impl<T> NonEmpty<T> {
    pub fn new(head: T, tail: Vec<T>) -> Self {
        let mut data = Vec::with_capacity(1 + tail.len());
        data.push(head);
        data.extend(tail);
        Self { data }
    }

    pub fn singleton(head: T) -> Self {
        Self { data: vec![head] }
    }

    /// `None` if `data` is empty.
    pub fn from_vec(data: Vec<T>) -> Option<Self> {
        if data.is_empty() {
            None
        } else {
            Some(Self { data })
        }
    }

    pub fn from_iter_opt<I>(itr: I) -> Option<Self>
    where I: IntoIterator<Item = T> {
        Self::from_vec(itr.into_iter().collect())
    }

    pub fn head(&self) -> &T {
        &self.data[0]
    }

    pub fn tail(&self) -> &[T] {
        &self.data[1..]
    }

    pub fn last(&self) -> &T {
        &self.data[self.data.len() - 1]
    }

    delegate! {
        to self.data {
            pub fn len(&self) -> usize;
            pub fn iter(&self) -> std::slice::Iter<'_, T>;
            pub fn get(&self, index: usize) -> Option<&T>;
            pub fn as_slice(&self) -> &[T];
        }
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Splits into the head and an iterator over the tail.
    pub fn into_parts(self) -> (T, std::vec::IntoIter<T>) {
        let mut itr = self.data.into_iter();
        let Some(head) = itr.next() else {
            unreachable!("NonEmpty holds at least one element")
        };
        (head, itr)
    }

    pub fn map<U, F>(&self, f: F) -> NonEmpty<U>
    where F: FnMut(&T) -> U {
        let data = self.data.iter().map(f).collect();
        NonEmpty { data }
    }

    /// Applies `init` to the head, then folds the tail with `f`.
    pub fn reduce<U, F0, F>(&self, init: F0, f: F) -> U
    where F0: FnOnce(&T) -> U, F: FnMut(U, &T) -> U {
        self.tail().iter().fold(init(self.head()), f)
    }

    pub fn sum(self) -> T
    where T: AddSemigroup {
        T::sum_nonempty(self)
    }

    pub fn product(self) -> T
    where T: MulSemigroup {
        T::product_nonempty(self)
    }

    /// Sum of `f(x)`; the tail is mapped lazily as the witness consumes it.
    pub fn map_and_sum<S, F>(self, mut f: F) -> S
    where S: AddSemigroup, F: FnMut(T) -> S {
        let (head, tail) = self.into_parts();
        let first = f(head);
        S::sum_of(first, tail.map(f))
    }

    pub fn map_and_product<S, F>(self, mut f: F) -> S
    where S: MulSemigroup, F: FnMut(T) -> S {
        let (head, tail) = self.into_parts();
        let first = f(head);
        S::product_of(first, tail.map(f))
    }
}

impl<T> Index<usize> for NonEmpty<T> {
    type Output = T;
    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<T> AsRef<[T]> for NonEmpty<T> {
    fn as_ref(&self) -> &[T] {
        &self.data
    }
}

impl<T> TryFrom<Vec<T>> for NonEmpty<T> {
    type Error = EmptyCollection;
    fn try_from(data: Vec<T>) -> Result<Self, Self::Error> {
        Self::from_vec(data).ok_or_else(|| EmptyCollection::with_context("NonEmpty from Vec"))
    }
}

impl<T> From<NonEmpty<T>> for Vec<T> {
    fn from(value: NonEmpty<T>) -> Self {
        value.data
    }
}

impl<T> IntoIterator for NonEmpty<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;
    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a NonEmpty<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<T> Display for NonEmpty<T>
where T: Display {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.data.iter().join(", "))
    }
}

#[cfg(feature = "serde")]
impl<T> serde::Serialize for NonEmpty<T>
where T: serde::Serialize {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where S: serde::Serializer {
        self.data.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for NonEmpty<T>
where T: serde::Deserialize<'de> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where D: serde::Deserializer<'de> {
        let data = Vec::<T>::deserialize(deserializer)?;
        Self::from_vec(data).ok_or_else(|| {
            serde::de::Error::invalid_length(0, &"at least one element")
        })
    }
}
