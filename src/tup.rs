use std::hash::{Hash, Hasher};
use std::ops::{Index, IndexMut};

use super::{Element, NewTup, TupR, TupW};

/// A mutable tuple of `N` components of type `T`.
///
/// The components are public, so a `Tup` can be built and taken apart
/// directly. Accessors and mutators are provided by the capability traits
/// [`TupR`], [`TupW`] and, for 2 and 3 dimensions, the named traits such as
/// [`Tup2R`] and [`Tup3W`].
///
/// ```
/// use tupl::{Tup, Tup2R, Tup2W};
/// let mut t = Tup::xy(1, 2);
/// t.set_y(5);
/// assert_eq!((*t.x(), *t.y()), (1, 5));
/// assert_eq!(t.0, [1, 5]);
/// assert_eq!(t.to_string(), "(1, 5)");
/// ```
///
/// [`Tup2R`]: super::Tup2R
/// [`Tup3W`]: super::Tup3W
#[derive(Clone, Copy)]
pub struct Tup<T, const N: usize>(pub [T; N]);

impl<T, const N: usize> Tup<T, N> {
    /// Constructs a `Tup` given its components.
    pub const fn new(values: [T; N]) -> Self { Self(values) }

    /// Constructs a `Tup` whose component at index `i` is `f(i)`.
    pub fn from_fn(f: impl FnMut(usize) -> T) -> Self { Self(std::array::from_fn(f)) }

    /// Constructs a `Tup` with clones of the components of any other tuple.
    pub fn from_tup<O: TupR<T, N> + ?Sized>(other: &O) -> Self where T: Clone {
        Self(other.to_array())
    }

    /// Returns the components.
    pub fn into_array(self) -> [T; N] { self.0 }

    /// Applies `f` to every component.
    ///
    /// ```
    /// use tupl::{Tup, Tup2d, Tup2i};
    /// let t: Tup2i = Tup::xy(1, -2);
    /// let u: Tup2d = t.map(f64::from);
    /// assert_eq!(u, Tup::xy(1.0, -2.0));
    /// ```
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Tup<U, N> { Tup(self.0.map(f)) }
}

impl<T> Tup<T, 2> {
    /// Constructs a 2-dimensional `Tup`.
    pub const fn xy(x: T, y: T) -> Self { Self([x, y]) }
}

impl<T> Tup<T, 3> {
    /// Constructs a 3-dimensional `Tup`.
    pub const fn xyz(x: T, y: T, z: T) -> Self { Self([x, y, z]) }
}

impl<T, const N: usize> TupR<T, N> for Tup<T, N> {
    #[inline(always)]
    fn as_slice(&self) -> &[T] { &self.0 }
}

impl<T, const N: usize> TupW<T, N> for Tup<T, N> {
    #[inline(always)]
    fn as_mut_slice(&mut self) -> &mut [T] { &mut self.0 }
}

impl<T, const N: usize> NewTup<T, N> for Tup<T, N> {
    fn new_instance(values: [T; N]) -> Self { Self(values) }
}

impl<T: Default, const N: usize> Default for Tup<T, N> {
    fn default() -> Self { Self::from_fn(|_| T::default()) }
}

// ----------------------------------------------------------------------------

impl<T, const N: usize> Index<usize> for Tup<T, N> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        assert!(index < N, "Index {:?} is out of bounds for {:?} dimensions", index, N);
        &self.0[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for Tup<T, N> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        assert!(index < N, "Index {:?} is out of bounds for {:?} dimensions", index, N);
        &mut self.0[index]
    }
}

impl<T, const N: usize> IntoIterator for Tup<T, N> {
    type Item = T;
    type IntoIter = std::array::IntoIter<T, N>;
    fn into_iter(self) -> Self::IntoIter { self.0.into_iter() }
}

impl<'a, T, const N: usize> IntoIterator for &'a Tup<T, N> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter { self.0.iter() }
}

impl<'a, T, const N: usize> IntoIterator for &'a mut Tup<T, N> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;
    fn into_iter(self) -> Self::IntoIter { self.0.iter_mut() }
}

impl<T, const N: usize> AsRef<[T]> for Tup<T, N> {
    fn as_ref(&self) -> &[T] { &self.0 }
}

impl<T, const N: usize> AsMut<[T]> for Tup<T, N> {
    fn as_mut(&mut self) -> &mut [T] { &mut self.0 }
}

// ----------------------------------------------------------------------------

impl<T: Element, const N: usize> PartialEq for Tup<T, N> {
    fn eq(&self, other: &Self) -> bool { self.content_eq(other) }
}

impl<T: Element, const N: usize> Eq for Tup<T, N> {}

impl<T: Element, const N: usize> Hash for Tup<T, N> {
    fn hash<H: Hasher>(&self, state: &mut H) { self.hash_components(state); }
}

// ----------------------------------------------------------------------------
