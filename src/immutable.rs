use std::collections::hash_map::{DefaultHasher};
use std::hash::{Hash, Hasher};
use std::ops::{Index};

use super::{Element, NewTup, TupR, TupleError};

/// An immutable tuple of `N` components of type `T`.
///
/// The components are private and there are no mutators; "modifying" an
/// `ImmutableTup` with one of the `with_*()` methods returns a new one. A
/// digest of the components is computed once, at construction, so that
/// comparing unequal tuples is usually cheap. `Hash` still feeds the
/// components, so an `ImmutableTup` hashes like a [`Tup`] with the same
/// components.
///
/// ```
/// use tupl::{ImmutableTup, Tup2R};
/// let a = ImmutableTup::xy(1, 2);
/// let b = a.with_y(3);
/// assert_eq!(*a.y(), 2);
/// assert_eq!(*b.y(), 3);
/// ```
///
/// [`Tup`]: super::Tup
#[derive(Clone)]
pub struct ImmutableTup<T, const N: usize> {
    values: [T; N],
    hash: u64,
}

impl<T: Element, const N: usize> ImmutableTup<T, N> {
    /// Constructs an `ImmutableTup` given its components.
    pub fn new(values: [T; N]) -> Self {
        let mut state = DefaultHasher::new();
        values.hash_components(&mut state);
        Self {values, hash: state.finish()}
    }

    /// Constructs an `ImmutableTup` whose component at index `i` is `f(i)`.
    pub fn from_fn(f: impl FnMut(usize) -> T) -> Self { Self::new(std::array::from_fn(f)) }

    /// Constructs an `ImmutableTup` with clones of the components of any other
    /// tuple.
    pub fn from_tup<O: TupR<T, N> + ?Sized>(other: &O) -> Self where T: Clone {
        Self::new(other.to_array())
    }

    /// Returns a copy of `self` with the component at `index` replaced by
    /// `value`.
    pub fn with_by_index(&self, index: usize, value: T) -> Result<Self, TupleError> where
        T: Clone,
    {
        if index >= N { return Err(TupleError::IndexOutOfBounds {index, dimensions: N}); }
        let mut values = self.values.clone();
        values[index] = value;
        Ok(Self::new(values))
    }

    /// Applies `f` to every component.
    pub fn map<U: Element>(self, f: impl FnMut(T) -> U) -> ImmutableTup<U, N> {
        ImmutableTup::new(self.values.map(f))
    }
}

impl<T, const N: usize> ImmutableTup<T, N> {
    /// Returns the components.
    pub fn into_array(self) -> [T; N] { self.values }
}

impl<T: Element> ImmutableTup<T, 2> {
    /// Constructs a 2-dimensional `ImmutableTup`.
    pub fn xy(x: T, y: T) -> Self { Self::new([x, y]) }

    pub fn with_x(&self, x: T) -> Self where T: Clone {
        Self::new([x, self.values[1].clone()])
    }

    pub fn with_y(&self, y: T) -> Self where T: Clone {
        Self::new([self.values[0].clone(), y])
    }
}

impl<T: Element> ImmutableTup<T, 3> {
    /// Constructs a 3-dimensional `ImmutableTup`.
    pub fn xyz(x: T, y: T, z: T) -> Self { Self::new([x, y, z]) }

    pub fn with_x(&self, x: T) -> Self where T: Clone {
        let [_, y, z] = self.values.clone();
        Self::new([x, y, z])
    }

    pub fn with_y(&self, y: T) -> Self where T: Clone {
        let [x, _, z] = self.values.clone();
        Self::new([x, y, z])
    }

    pub fn with_z(&self, z: T) -> Self where T: Clone {
        let [x, y, _] = self.values.clone();
        Self::new([x, y, z])
    }
}

impl<T, const N: usize> TupR<T, N> for ImmutableTup<T, N> {
    #[inline(always)]
    fn as_slice(&self) -> &[T] { &self.values }
}

impl<T: Element, const N: usize> NewTup<T, N> for ImmutableTup<T, N> {
    fn new_instance(values: [T; N]) -> Self { Self::new(values) }
}

impl<T: Element + Default, const N: usize> Default for ImmutableTup<T, N> {
    fn default() -> Self { Self::from_fn(|_| T::default()) }
}

// ----------------------------------------------------------------------------

impl<T, const N: usize> Index<usize> for ImmutableTup<T, N> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        assert!(index < N, "Index {:?} is out of bounds for {:?} dimensions", index, N);
        &self.values[index]
    }
}

impl<T, const N: usize> IntoIterator for ImmutableTup<T, N> {
    type Item = T;
    type IntoIter = std::array::IntoIter<T, N>;
    fn into_iter(self) -> Self::IntoIter { self.values.into_iter() }
}

impl<'a, T, const N: usize> IntoIterator for &'a ImmutableTup<T, N> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter { self.values.iter() }
}

impl<T, const N: usize> AsRef<[T]> for ImmutableTup<T, N> {
    fn as_ref(&self) -> &[T] { &self.values }
}

// ----------------------------------------------------------------------------

impl<T: Element, const N: usize> PartialEq for ImmutableTup<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.hash == other.hash && self.content_eq(other)
    }
}

impl<T: Element, const N: usize> Eq for ImmutableTup<T, N> {}

impl<T: Element, const N: usize> Hash for ImmutableTup<T, N> {
    fn hash<H: Hasher>(&self, state: &mut H) { self.hash_components(state); }
}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::collections::{HashMap};

    use super::*;
    use super::super::{Tup, Tup3R};

    #[test]
    fn construct() {
        let a = ImmutableTup::xyz(1, 2, 3);
        assert_eq!(a, ImmutableTup::new([1, 2, 3]));
        assert_eq!(a, ImmutableTup::from_tup(&Tup::xyz(1, 2, 3)));
        assert_eq!(a, ImmutableTup::<i32, 3>::from_fn(|i| i as i32 + 1));
        assert_eq!(ImmutableTup::<u8, 2>::default(), ImmutableTup::xy(0, 0));
        assert_eq!(ImmutableTup::<f64, 2>::new_zero(), ImmutableTup::xy(0.0, 0.0));
    }

    #[test]
    fn with() {
        let a = ImmutableTup::xyz('a', 'b', 'c');
        assert_eq!(a.with_x('x'), ImmutableTup::xyz('x', 'b', 'c'));
        assert_eq!(a.with_y('y'), ImmutableTup::xyz('a', 'y', 'c'));
        assert_eq!(a.with_z('z'), ImmutableTup::xyz('a', 'b', 'z'));
        assert_eq!(a.with_by_index(1, 'q'), Ok(ImmutableTup::xyz('a', 'q', 'c')));
        assert_eq!(a.with_by_index(3, 'q'), Err(TupleError::IndexOutOfBounds {index: 3, dimensions: 3}));
        assert_eq!(*a.z(), 'c');
        assert_eq!(a[0], 'a');
    }

    #[test]
    fn cached_hash() {
        let a = ImmutableTup::xy(f32::NAN, 1.5);
        let b = ImmutableTup::xy(f32::NAN, 1.5);
        assert_eq!(a.hash, b.hash);
        assert_eq!(a, b);
        assert_ne!(a, ImmutableTup::xy(f32::NAN, -1.5));
        let mut map = HashMap::new();
        map.insert(a, "a");
        assert_eq!(map.get(&b), Some(&"a"));
    }

    #[test]
    fn map() {
        let a = ImmutableTup::xy(2u8, 3).map(|c| u32::from(c) * 100);
        assert_eq!(a, ImmutableTup::xy(200, 300));
        assert_eq!(a.into_array(), [200, 300]);
    }
}
