//! Named component accessors for 2- and 3-dimensional tuples.
//!
//! These traits are implemented automatically for every [`TupR`] and
//! [`TupW`] of the right arity, so `x()`, `set_y()` and friends work on all
//! the tuple types in this crate.

use super::{TupR, TupW};

/// Read access to the `x` and `y` components of a 2-dimensional tuple.
pub trait Tup2R<T>: TupR<T, 2> {
    /// Returns the first component.
    fn x(&self) -> &T { &self.as_slice()[0] }
    /// Returns the second component.
    fn y(&self) -> &T { &self.as_slice()[1] }
}

impl<T, A: TupR<T, 2> + ?Sized> Tup2R<T> for A {}

/// Write access to the `x` and `y` components of a 2-dimensional tuple.
pub trait Tup2W<T>: TupW<T, 2> {
    /// Replaces the first component.
    fn set_x(&mut self, x: T) { self.as_mut_slice()[0] = x; }
    /// Replaces the second component.
    fn set_y(&mut self, y: T) { self.as_mut_slice()[1] = y; }

    /// Replaces both components.
    fn set(&mut self, x: T, y: T) { self.set_all([x, y]); }
}

impl<T, A: TupW<T, 2> + ?Sized> Tup2W<T> for A {}

/// Read and write access to the components of a 2-dimensional tuple.
pub trait Tup2C<T>: Tup2R<T> + Tup2W<T> {}

impl<T, A: Tup2R<T> + Tup2W<T> + ?Sized> Tup2C<T> for A {}

// ----------------------------------------------------------------------------

/// Read access to the `x`, `y` and `z` components of a 3-dimensional tuple.
pub trait Tup3R<T>: TupR<T, 3> {
    /// Returns the first component.
    fn x(&self) -> &T { &self.as_slice()[0] }
    /// Returns the second component.
    fn y(&self) -> &T { &self.as_slice()[1] }
    /// Returns the third component.
    fn z(&self) -> &T { &self.as_slice()[2] }
}

impl<T, A: TupR<T, 3> + ?Sized> Tup3R<T> for A {}

/// Write access to the `x`, `y` and `z` components of a 3-dimensional tuple.
pub trait Tup3W<T>: TupW<T, 3> {
    /// Replaces the first component.
    fn set_x(&mut self, x: T) { self.as_mut_slice()[0] = x; }
    /// Replaces the second component.
    fn set_y(&mut self, y: T) { self.as_mut_slice()[1] = y; }
    /// Replaces the third component.
    fn set_z(&mut self, z: T) { self.as_mut_slice()[2] = z; }

    /// Replaces all three components.
    fn set(&mut self, x: T, y: T, z: T) { self.set_all([x, y, z]); }
}

impl<T, A: TupW<T, 3> + ?Sized> Tup3W<T> for A {}

/// Read and write access to the components of a 3-dimensional tuple.
pub trait Tup3C<T>: Tup3R<T> + Tup3W<T> {}

impl<T, A: Tup3R<T> + Tup3W<T> + ?Sized> Tup3C<T> for A {}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn swap<A: Tup2C<u8>>(a: &mut A) {
        let (x, y) = (*a.x(), *a.y());
        a.set(y, x);
    }

    #[test]
    fn two() {
        let mut a = [1u8, 2];
        assert_eq!((*Tup2R::x(&a), *Tup2R::y(&a)), (1, 2));
        swap(&mut a);
        assert_eq!(a, [2, 1]);
        Tup2W::set_x(&mut a, 5);
        Tup2W::set_y(&mut a, 6);
        assert_eq!(a, [5, 6]);
    }

    #[test]
    fn three() {
        let mut a = ['a', 'b', 'c'];
        assert_eq!(*Tup3R::z(&a), 'c');
        Tup3W::set_z(&mut a, 'z');
        let z = *Tup3R::z(&a);
        Tup3W::set(&mut a, 'x', 'y', z);
        assert_eq!(a, ['x', 'y', 'z']);
    }
}
