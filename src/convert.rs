//! Conversions between the tuple types, arrays, slices, `Vec`s and native
//! Rust tuples.
//!
//! ```
//! use tupl::{ImmutableTup, PTup, Tup, TupleError};
//! let t: Tup<i32, 2> = (1, 2).into();
//! let i: ImmutableTup<i32, 2> = t.into();
//! let p: PTup<i32, 2> = i.into();
//! assert_eq!(<(i32, i32)>::from(p), (1, 2));
//!
//! let v = vec![1, 2, 3];
//! assert_eq!(Tup::<i32, 3>::try_from(v.as_slice()), Ok(Tup::xyz(1, 2, 3)));
//! assert_eq!(
//!     PTup::<i32, 2>::try_from(v),
//!     Err(TupleError::DimensionMismatch {expected: 2, actual: 3}),
//! );
//! ```

use super::{Element, ImmutableTup, NewTup, PTup, Tup, TupR, TupleError};

macro_rules! impl_conversions {
    ($tup:ident) => {
        impl<T, const N: usize> From<[T; N]> for $tup<T, N> where Self: NewTup<T, N> {
            fn from(values: [T; N]) -> Self { Self::new_instance(values) }
        }

        impl<T, const N: usize> From<$tup<T, N>> for [T; N] {
            fn from(tup: $tup<T, N>) -> Self { tup.into_array() }
        }

        impl<T> From<(T, T)> for $tup<T, 2> where Self: NewTup<T, 2> {
            fn from((x, y): (T, T)) -> Self { Self::new_instance([x, y]) }
        }

        impl<T> From<$tup<T, 2>> for (T, T) {
            fn from(tup: $tup<T, 2>) -> Self {
                let [x, y] = tup.into_array();
                (x, y)
            }
        }

        impl<T> From<(T, T, T)> for $tup<T, 3> where Self: NewTup<T, 3> {
            fn from((x, y, z): (T, T, T)) -> Self { Self::new_instance([x, y, z]) }
        }

        impl<T> From<$tup<T, 3>> for (T, T, T) {
            fn from(tup: $tup<T, 3>) -> Self {
                let [x, y, z] = tup.into_array();
                (x, y, z)
            }
        }

        impl<'a, T: Clone, const N: usize> TryFrom<&'a [T]> for $tup<T, N> where
            Self: NewTup<T, N>,
        {
            type Error = TupleError;

            fn try_from(values: &'a [T]) -> Result<Self, Self::Error> {
                if values.len() != N {
                    return Err(TupleError::DimensionMismatch {expected: N, actual: values.len()});
                }
                Ok(Self::new_instance_with(|i| values[i].clone()))
            }
        }

        impl<T, const N: usize> TryFrom<Vec<T>> for $tup<T, N> where Self: NewTup<T, N> {
            type Error = TupleError;

            fn try_from(values: Vec<T>) -> Result<Self, Self::Error> {
                let values = <[T; N]>::try_from(values).map_err(|values| {
                    TupleError::DimensionMismatch {expected: N, actual: values.len()}
                })?;
                Ok(Self::new_instance(values))
            }
        }
    };
}

impl_conversions!(Tup);
impl_conversions!(ImmutableTup);
impl_conversions!(PTup);

// ----------------------------------------------------------------------------

macro_rules! impl_cross_conversion {
    ($from:ident => $to:ident) => {
        impl<T, const N: usize> From<$from<T, N>> for $to<T, N> where Self: NewTup<T, N> {
            fn from(tup: $from<T, N>) -> Self { Self::new_instance(tup.into_array()) }
        }
    };
}

impl_cross_conversion!(Tup => ImmutableTup);
impl_cross_conversion!(Tup => PTup);
impl_cross_conversion!(ImmutableTup => Tup);
impl_cross_conversion!(ImmutableTup => PTup);
impl_cross_conversion!(PTup => Tup);
impl_cross_conversion!(PTup => ImmutableTup);

// ----------------------------------------------------------------------------

/// Tuples of different kinds are equal if their components are.
macro_rules! impl_cross_eq {
    ($a:ident == $b:ident) => {
        impl<T: Element, const N: usize> PartialEq<$b<T, N>> for $a<T, N> {
            fn eq(&self, other: &$b<T, N>) -> bool { self.content_eq(other) }
        }
    };
}

impl_cross_eq!(Tup == ImmutableTup);
impl_cross_eq!(Tup == PTup);
impl_cross_eq!(ImmutableTup == Tup);
impl_cross_eq!(ImmutableTup == PTup);
impl_cross_eq!(PTup == Tup);
impl_cross_eq!(PTup == ImmutableTup);

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::collections::hash_map::{DefaultHasher};
    use std::hash::{Hash, Hasher};

    use proptest::prelude::*;

    use super::*;

    fn hash_of<A: Hash>(a: &A) -> u64 {
        let mut state = DefaultHasher::new();
        a.hash(&mut state);
        state.finish()
    }

    fn assert_all_equal(t: Tup<f64, 2>) {
        let i = ImmutableTup::from(t);
        let p = PTup::from(t);
        assert!(t == i && t == p && i == t && i == p && p == t && p == i);
        assert_eq!(hash_of(&t), hash_of(&i));
        assert_eq!(hash_of(&t), hash_of(&p));
    }

    #[test]
    fn arrays() {
        let t: Tup<u8, 4> = [1, 2, 3, 4].into();
        assert_eq!(<[u8; 4]>::from(t), [1, 2, 3, 4]);
        let i = ImmutableTup::from([0.5, 1.5]);
        assert_eq!(<[f64; 2]>::from(i), [0.5, 1.5]);
    }

    #[test]
    fn native_tuples() {
        let p: PTup<char, 3> = ('a', 'b', 'c').into();
        assert_eq!(p, PTup::gen3('a', 'b', 'c'));
        assert_eq!(<(char, char, char)>::from(p), ('a', 'b', 'c'));
        let i: ImmutableTup<i8, 2> = (-1, 1).into();
        assert_eq!(<(i8, i8)>::from(i), (-1, 1));
    }

    #[test]
    fn slices() {
        let values = [1u32, 2, 3];
        assert_eq!(ImmutableTup::<u32, 3>::try_from(&values[..]), Ok(ImmutableTup::xyz(1, 2, 3)));
        assert_eq!(
            Tup::<u32, 2>::try_from(&values[..]),
            Err(TupleError::DimensionMismatch {expected: 2, actual: 3}),
        );
        assert_eq!(
            PTup::<u32, 4>::try_from(values.to_vec()),
            Err(TupleError::DimensionMismatch {expected: 4, actual: 3}),
        );
    }

    #[test]
    fn variants() {
        let t = Tup::xy(String::from("a"), String::from("b"));
        let i = ImmutableTup::from(t.clone());
        let p = PTup::from(i.clone());
        assert!(t.content_eq(&i));
        assert!(i.content_eq(&p));
        assert_eq!(Tup::from(p.clone()), t);
        assert_eq!(ImmutableTup::from(p), i);
        assert_eq!(PTup::from(t.clone()), PTup::from(ImmutableTup::from(t)));
    }

    #[test]
    fn equal_across_variants() {
        assert_all_equal(Tup::xy(1.0, 2.0));
        assert_all_equal(Tup::xy(f64::NAN, -0.0));
        assert!(Tup::xy(1, 2) == PTup::gen(1, 2));
        assert!(ImmutableTup::xy(1, 2) != Tup::xy(2, 1));
        assert!(PTup::gen(0.0, 1.0) != ImmutableTup::xy(-0.0, 1.0));
    }

    proptest! {
        #[test]
        fn vec_round_trip(values in proptest::collection::vec(any::<i64>(), 0..6)) {
            let len = values.len();
            match Tup::<i64, 3>::try_from(values.clone()) {
                Ok(t) => {
                    prop_assert_eq!(len, 3);
                    prop_assert_eq!(t.to_vec(), values);
                },
                Err(e) => {
                    prop_assert_eq!(e, TupleError::DimensionMismatch {expected: 3, actual: len});
                },
            }
        }
    }
}
