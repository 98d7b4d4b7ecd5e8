use super::{TupR, Zero};

/// Construct a tuple of type `Self` from its components.
///
/// This is the "new instance" factory shared by all the tuple types, so that
/// generic code can build a tuple of the same kind as one it was given.
///
/// ```
/// use tupl::{NewTup, PTup, Tup, TupR};
/// fn reversed<A: NewTup<u8, 3>>(a: &A) -> A {
///     A::new_instance_with(|i| a.as_slice()[2 - i])
/// }
/// assert_eq!(reversed(&Tup::xyz(1, 2, 3)), Tup::xyz(3, 2, 1));
/// assert_eq!(reversed(&PTup::gen3(1, 2, 3)), PTup::gen3(3, 2, 1));
/// ```
pub trait NewTup<T, const N: usize>: TupR<T, N> + Sized {
    /// Construct a `Self` with components `values`.
    fn new_instance(values: [T; N]) -> Self;

    /// Construct a `Self` with clones of the components of `other`.
    fn new_instance_from<O: TupR<T, N> + ?Sized>(other: &O) -> Self where T: Clone {
        Self::new_instance(other.to_array())
    }

    /// Construct a `Self` from a tuple with a different component type, using
    /// a lossless conversion for each component.
    ///
    /// ```
    /// use tupl::{NewTup, Tup2d, Tup2i, Tup};
    /// let i: Tup2i = Tup::xy(3, -4);
    /// assert_eq!(Tup2d::convert_from(&i), Tup::xy(3.0, -4.0));
    /// ```
    fn convert_from<U, O>(other: &O) -> Self where
        O: TupR<U, N> + ?Sized,
        U: Clone + Into<T>,
    {
        let components = other.as_slice();
        Self::new_instance_with(|i| components[i].clone().into())
    }

    /// Construct a `Self` whose component at each index `i` is `f(i)`.
    ///
    /// `f` is called once for each index, in increasing order.
    fn new_instance_with(f: impl FnMut(usize) -> T) -> Self {
        Self::new_instance(std::array::from_fn(f))
    }

    /// Construct a `Self` whose components are all zero.
    fn new_zero() -> Self where T: Zero {
        Self::new_instance_with(|_| T::zero())
    }
}

// ----------------------------------------------------------------------------
