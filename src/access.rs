//! Capability traits shared by all tuple types.
//!
//! [`TupR`] is the read-only view of a tuple, [`TupW`] is the write-only
//! view, and [`TupC`] (complete) is both. Each of them is parameterised by the
//! component type `T` and the number of dimensions `N`. Arity-specific
//! accessors such as `x()` and `set_y()` live in [`crate::named`].
//!
//! Code that only inspects a tuple should accept `&impl TupR<T, N>`, so that
//! it works equally well with [`Tup`], [`ImmutableTup`], [`PTup`] and plain
//! arrays.
//!
//! [`Tup`]: crate::Tup
//! [`ImmutableTup`]: crate::ImmutableTup
//! [`PTup`]: crate::PTup

use std::hash::{Hasher};

use super::{Element, Tolerance, TupleError, Zero};

/// Read access to the `N` components of a tuple.
///
/// Implementors provide [`TupR::as_slice()`], which must return exactly `N`
/// components. Everything else has a default implementation in terms of it.
pub trait TupR<T, const N: usize> {
    /// The number of components.
    const DIMENSIONS: usize = N;

    /// The components, in index order.
    fn as_slice(&self) -> &[T];

    /// Returns the number of components, which is always `N`.
    fn dimensions(&self) -> usize { N }

    /// Returns the component at `index`.
    ///
    /// ```
    /// use tupl::{Tup, TupR, TupleError};
    /// let t = Tup::xy(3, 4);
    /// assert_eq!(t.get_by_index(1), Ok(&4));
    /// assert_eq!(t.get_by_index(2), Err(TupleError::IndexOutOfBounds {index: 2, dimensions: 2}));
    /// ```
    fn get_by_index(&self, index: usize) -> Result<&T, TupleError> {
        self.as_slice().get(index).ok_or(TupleError::IndexOutOfBounds {index, dimensions: N})
    }

    /// Iterates over the components in index order.
    fn iter(&self) -> std::slice::Iter<'_, T> { self.as_slice().iter() }

    /// Clones the components into the first `N` slots of `dst`. The remaining
    /// slots of `dst` are left untouched.
    fn write_into(&self, dst: &mut [T]) -> Result<(), TupleError> where T: Clone {
        let actual = dst.len();
        let dst = dst.get_mut(..N).ok_or(TupleError::DestinationTooSmall {needed: N, actual})?;
        dst.clone_from_slice(self.as_slice());
        Ok(())
    }

    /// Returns a fresh array containing clones of the components.
    fn to_array(&self) -> [T; N] where T: Clone {
        let components = self.as_slice();
        std::array::from_fn(|i| components[i].clone())
    }

    /// Returns a `Vec` containing clones of the components.
    fn to_vec(&self) -> Vec<T> where T: Clone { self.as_slice().to_vec() }

    /// Returns `true` if the component at `index` is zero.
    fn is_zero_at(&self, index: usize) -> Result<bool, TupleError> where T: Zero {
        Ok(self.get_by_index(index)?.is_zero())
    }

    /// Returns `true` if every component is zero.
    ///
    /// A tuple with no components is zero.
    fn is_zero(&self) -> bool where T: Zero {
        (0..N).all(|i| matches!(self.is_zero_at(i), Ok(true)))
    }

    /// Returns `true` if the component at `index` is within `tolerance` of
    /// zero.
    fn is_zero_at_within(&self, index: usize, tolerance: &T) -> Result<bool, TupleError> where
        T: Tolerance,
    {
        if !tolerance.is_valid_tolerance() { return Err(TupleError::InvalidTolerance); }
        Ok(self.get_by_index(index)?.is_zero_within(tolerance))
    }

    /// Returns `true` if every component is within `tolerance` of zero.
    ///
    /// The tolerance is checked even if there are no components.
    ///
    /// ```
    /// use tupl::{Tup, TupR, TupleError};
    /// let t = Tup::xy(0.001f64, -0.002);
    /// assert_eq!(t.is_zero_within(&0.01), Ok(true));
    /// assert_eq!(t.is_zero_within(&0.0015), Ok(false));
    /// assert_eq!(t.is_zero_within(&-1.0), Err(TupleError::InvalidTolerance));
    /// ```
    fn is_zero_within(&self, tolerance: &T) -> Result<bool, TupleError> where T: Tolerance {
        if !tolerance.is_valid_tolerance() { return Err(TupleError::InvalidTolerance); }
        Ok(self.iter().all(|t| Tolerance::is_zero_within(t, tolerance)))
    }

    /// Structural equality with any other tuple of the same shape.
    fn content_eq<O: TupR<T, N> + ?Sized>(&self, other: &O) -> bool where T: Element {
        self.iter().zip(other.iter()).all(|(a, b)| a.same(b))
    }

    /// Feed the components to `state` in index order. Tuples for which
    /// [`TupR::content_eq()`] is `true` feed the same data.
    fn hash_components<H: Hasher>(&self, state: &mut H) where T: Element {
        for t in self.iter() { t.hash_into(state); }
    }
}

impl<T, const N: usize> TupR<T, N> for [T; N] {
    #[inline(always)]
    fn as_slice(&self) -> &[T] { self }
}

// ----------------------------------------------------------------------------

/// Write access to the `N` components of a tuple.
pub trait TupW<T, const N: usize> {
    /// The components, in index order.
    fn as_mut_slice(&mut self) -> &mut [T];

    /// Replaces the component at `index`.
    fn set_by_index(&mut self, index: usize, value: T) -> Result<(), TupleError> {
        let slot = self.as_mut_slice().get_mut(index)
            .ok_or(TupleError::IndexOutOfBounds {index, dimensions: N})?;
        *slot = value;
        Ok(())
    }

    /// Replaces all the components.
    fn set_all(&mut self, values: [T; N]) {
        for (slot, value) in self.as_mut_slice().iter_mut().zip(values) { *slot = value; }
    }

    /// Replaces all the components with clones of those of `other`.
    fn set_from<O: TupR<T, N> + ?Sized>(&mut self, other: &O) where T: Clone {
        self.as_mut_slice().clone_from_slice(other.as_slice());
    }

    /// Replaces every component with a clone of `value`.
    fn fill(&mut self, value: T) where T: Clone { self.as_mut_slice().fill(value); }
}

impl<T, const N: usize> TupW<T, N> for [T; N] {
    #[inline(always)]
    fn as_mut_slice(&mut self) -> &mut [T] { self }
}

// ----------------------------------------------------------------------------

/// Read and write access to the `N` components of a tuple.
///
/// Implemented automatically for every type that implements both [`TupR`]
/// and [`TupW`].
pub trait TupC<T, const N: usize>: TupR<T, N> + TupW<T, N> {}

impl<T, const N: usize, A: TupR<T, N> + TupW<T, N> + ?Sized> TupC<T, N> for A {}

// ----------------------------------------------------------------------------
