use std::hash::{Hash, Hasher};
use std::ops::{Index};

use super::{Element, NewTup, TupR};

/// A lightweight immutable tuple, constructed with one of the `gen*()`
/// factories.
///
/// Unlike [`ImmutableTup`], a `PTup` stores nothing but its components, so it
/// is `Copy` whenever `T` is.
///
/// ```
/// use tupl::{PTup, Tup2R};
/// let p = PTup::gen(3, 4);
/// let q = p;
/// assert_eq!(*p.x() + *q.y(), 7);
/// ```
///
/// [`ImmutableTup`]: super::ImmutableTup
#[derive(Clone, Copy)]
pub struct PTup<T, const N: usize>([T; N]);

impl<T, const N: usize> PTup<T, N> {
    /// Constructs a `PTup` of any arity.
    pub const fn gen_array(values: [T; N]) -> Self { Self(values) }

    /// Constructs a `PTup` with clones of the components of any other tuple.
    pub fn gen_from<O: TupR<T, N> + ?Sized>(other: &O) -> Self where T: Clone {
        Self(other.to_array())
    }

    /// Returns the components.
    pub fn into_array(self) -> [T; N] { self.0 }

    /// Applies `f` to every component.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PTup<U, N> { PTup(self.0.map(f)) }
}

impl<T> PTup<T, 2> {
    /// Constructs a 2-dimensional `PTup`.
    pub const fn gen(x: T, y: T) -> Self { Self([x, y]) }
}

impl<T> PTup<T, 3> {
    /// Constructs a 3-dimensional `PTup`.
    pub const fn gen3(x: T, y: T, z: T) -> Self { Self([x, y, z]) }
}

impl<T, const N: usize> TupR<T, N> for PTup<T, N> {
    #[inline(always)]
    fn as_slice(&self) -> &[T] { &self.0 }
}

impl<T, const N: usize> NewTup<T, N> for PTup<T, N> {
    fn new_instance(values: [T; N]) -> Self { Self(values) }
}

impl<T: Default, const N: usize> Default for PTup<T, N> {
    fn default() -> Self { Self(std::array::from_fn(|_| T::default())) }
}

impl<T, const N: usize> Index<usize> for PTup<T, N> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        assert!(index < N, "Index {:?} is out of bounds for {:?} dimensions", index, N);
        &self.0[index]
    }
}

impl<T, const N: usize> IntoIterator for PTup<T, N> {
    type Item = T;
    type IntoIter = std::array::IntoIter<T, N>;
    fn into_iter(self) -> Self::IntoIter { self.0.into_iter() }
}

impl<'a, T, const N: usize> IntoIterator for &'a PTup<T, N> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter { self.0.iter() }
}

impl<T, const N: usize> AsRef<[T]> for PTup<T, N> {
    fn as_ref(&self) -> &[T] { &self.0 }
}

impl<T: Element, const N: usize> PartialEq for PTup<T, N> {
    fn eq(&self, other: &Self) -> bool { self.content_eq(other) }
}

impl<T: Element, const N: usize> Eq for PTup<T, N> {}

impl<T: Element, const N: usize> Hash for PTup<T, N> {
    fn hash<H: Hasher>(&self, state: &mut H) { self.hash_components(state); }
}
