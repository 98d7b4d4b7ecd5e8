//! Traits for the types that can be tuple components.
//!
//! Every component type implements [`Element`], which defines structural
//! equality and hashing. Numeric-like component types additionally implement
//! [`Zero`], and the types for which "nearly zero" makes sense implement
//! [`Tolerance`].

use std::hash::{Hash, Hasher};

/// Implemented by types that can be components of a tuple.
///
/// `same()` and `hash_into()` must agree: if `a.same(&b)` then `a` and `b`
/// must feed the same data to the hasher.
///
/// For a type that is already `Eq + Hash`, use [`impl_element`] rather than
/// writing an implementation by hand.
///
/// [`impl_element`]: crate::impl_element
pub trait Element {
    /// Structural equality of two components.
    fn same(&self, other: &Self) -> bool;

    /// Feed this component to `state`.
    fn hash_into<H: Hasher>(&self, state: &mut H);
}

/// Implement [`Element`] for types that are `Eq + Hash`.
///
/// ```
/// use tupl::{impl_element, Tup};
///
/// #[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// struct Colour(u8, u8, u8);
/// impl_element!(Colour);
///
/// let a = Tup::xy(Colour(1, 2, 3), Colour(4, 5, 6));
/// assert_eq!(a, a.clone());
/// ```
#[macro_export]
macro_rules! impl_element {
    ($($t:ty),+ $(,)?) => {
        $(
            impl $crate::Element for $t {
                #[inline(always)]
                fn same(&self, other: &Self) -> bool { self == other }

                #[inline(always)]
                fn hash_into<H: ::std::hash::Hasher>(&self, state: &mut H) {
                    ::std::hash::Hash::hash(self, state);
                }
            }
        )+
    };
}

impl_element!(bool, char);
impl_element!(i8, i16, i32, i64, i128, isize);
impl_element!(u8, u16, u32, u64, u128, usize);
impl_element!(String, &'static str, ());

#[cfg(feature = "decimal")]
impl_element!(rust_decimal::Decimal);

#[cfg(feature = "bigint")]
impl_element!(num_bigint::BigInt, num_bigint::BigUint);

macro_rules! canonical_bits {
    ($v:expr, $t:ty) => {
        if $v.is_nan() { <$t>::NAN.to_bits() } else { $v.to_bits() }
    };
}

/// Floats compare by bit pattern, except that all NaNs are one value.
/// Consequently `NaN` equals `NaN`, and `0.0` differs from `-0.0`.
macro_rules! impl_element_for_float {
    ($t:ty) => {
        impl Element for $t {
            fn same(&self, other: &Self) -> bool {
                canonical_bits!(*self, $t) == canonical_bits!(*other, $t)
            }

            fn hash_into<H: Hasher>(&self, state: &mut H) {
                canonical_bits!(*self, $t).hash(state);
            }
        }
    };
}

impl_element_for_float!(f32);
impl_element_for_float!(f64);

impl<T: Element> Element for Option<T> {
    fn same(&self, other: &Self) -> bool {
        match (self, other) {
            (Some(a), Some(b)) => a.same(b),
            (None, None) => true,
            _ => false,
        }
    }

    fn hash_into<H: Hasher>(&self, state: &mut H) {
        match self {
            Some(t) => { state.write_u8(1); t.hash_into(state); },
            None => state.write_u8(0),
        }
    }
}

impl<T: Element + ?Sized> Element for Box<T> {
    fn same(&self, other: &Self) -> bool { T::same(self, other) }
    fn hash_into<H: Hasher>(&self, state: &mut H) { T::hash_into(self, state) }
}

impl<T: Element> Element for Vec<T> {
    fn same(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other).all(|(a, b)| a.same(b))
    }

    fn hash_into<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        for t in self { t.hash_into(state); }
    }
}

// ----------------------------------------------------------------------------

/// Implemented by component types that have a zero value.
///
/// The zero of `bool` is `false` and the zero of `char` is `'\0'`. For floats,
/// both `0.0` and `-0.0` are zero.
pub trait Zero: Sized {
    /// The zero value.
    fn zero() -> Self;

    /// Returns `true` if `self` is the zero value.
    fn is_zero(&self) -> bool;
}

macro_rules! impl_zero_via_num_traits {
    ($($t:ty),+ $(,)?) => {
        $(
            impl Zero for $t {
                #[inline(always)]
                fn zero() -> Self { num_traits::Zero::zero() }
                #[inline(always)]
                fn is_zero(&self) -> bool { num_traits::Zero::is_zero(self) }
            }
        )+
    };
}

impl_zero_via_num_traits!(i8, i16, i32, i64, i128, isize);
impl_zero_via_num_traits!(u8, u16, u32, u64, u128, usize);
impl_zero_via_num_traits!(f32, f64);

#[cfg(feature = "decimal")]
impl_zero_via_num_traits!(rust_decimal::Decimal);

#[cfg(feature = "bigint")]
impl_zero_via_num_traits!(num_bigint::BigInt, num_bigint::BigUint);

impl Zero for bool {
    fn zero() -> Self { false }
    fn is_zero(&self) -> bool { !*self }
}

impl Zero for char {
    fn zero() -> Self { '\0' }
    fn is_zero(&self) -> bool { *self == '\0' }
}

// ----------------------------------------------------------------------------

/// Implemented by component types that can be compared to zero within a
/// tolerance.
pub trait Tolerance: Zero {
    /// Returns `true` if `self` may be used as a tolerance, i.e. it is
    /// non-negative and not NaN.
    fn is_valid_tolerance(&self) -> bool;

    /// Returns `true` if `|self| <= tolerance`.
    ///
    /// The caller is responsible for checking `tolerance` with
    /// [`Tolerance::is_valid_tolerance()`]. NaN is never within tolerance.
    fn is_zero_within(&self, tolerance: &Self) -> bool;
}

impl Tolerance for f32 {
    fn is_valid_tolerance(&self) -> bool { *self >= 0.0 }
    fn is_zero_within(&self, tolerance: &Self) -> bool { self.abs() <= *tolerance }
}

impl Tolerance for f64 {
    fn is_valid_tolerance(&self) -> bool { *self >= 0.0 }
    fn is_zero_within(&self, tolerance: &Self) -> bool { self.abs() <= *tolerance }
}

#[cfg(feature = "decimal")]
impl Tolerance for rust_decimal::Decimal {
    fn is_valid_tolerance(&self) -> bool { *self >= rust_decimal::Decimal::ZERO }
    fn is_zero_within(&self, tolerance: &Self) -> bool { self.abs() <= *tolerance }
}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::collections::hash_map::{DefaultHasher};

    use proptest::prelude::*;

    use super::*;

    fn hash_of<T: Element>(t: &T) -> u64 {
        let mut state = DefaultHasher::new();
        t.hash_into(&mut state);
        state.finish()
    }

    fn assert_same<T: Element + std::fmt::Debug>(a: T, b: T) {
        assert!(a.same(&b), "{:?} should be the same as {:?}", a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    fn assert_different<T: Element + std::fmt::Debug>(a: T, b: T) {
        assert!(!a.same(&b), "{:?} should differ from {:?}", a, b);
    }

    #[test]
    fn float_equality() {
        assert_same(1.5f64, 1.5);
        assert_same(f64::NAN, f64::NAN);
        assert_same(f32::NAN, -f32::NAN);
        assert_same(f64::from_bits(0x7ff8_0000_0000_0001), f64::NAN);
        assert_different(0.0f64, -0.0);
        assert_different(0.0f32, -0.0);
        assert_different(1.0f32, 2.0);
    }

    #[test]
    fn wrapped_elements() {
        assert_same(Some(3), Some(3));
        assert_same(None::<i32>, None);
        assert_different(Some(3), None);
        assert_same(Box::new(f64::NAN), Box::new(f64::NAN));
        assert_same(vec![1, 2], vec![1, 2]);
        assert_different(vec![1, 2], vec![1, 2, 3]);
        assert_same(String::from("a"), String::from("a"));
    }

    #[test]
    fn zero() {
        assert!(0i8.is_zero());
        assert!(!1u64.is_zero());
        assert!((-0.0f64).is_zero());
        assert!(!f32::NAN.is_zero());
        assert!(false.is_zero());
        assert!(!true.is_zero());
        assert!('\0'.is_zero());
        assert!(!'a'.is_zero());
        assert_eq!(<i32 as Zero>::zero(), 0);
        assert_eq!(<char as Zero>::zero(), '\0');
    }

    #[test]
    fn tolerance() {
        assert!(0.0f64.is_valid_tolerance());
        assert!(!(-1e-9f64).is_valid_tolerance());
        assert!(!f32::NAN.is_valid_tolerance());
        assert!(0.05f64.is_zero_within(&0.1));
        assert!((-0.1f64).is_zero_within(&0.1));
        assert!(!0.2f64.is_zero_within(&0.1));
        assert!(!f64::NAN.is_zero_within(&f64::INFINITY));
    }

    #[cfg(feature = "decimal")]
    #[test]
    fn decimal() {
        use rust_decimal::Decimal;
        assert!(Decimal::ZERO.is_zero());
        assert!(Decimal::new(-5, 2).is_zero_within(&Decimal::new(1, 1)));
        assert!(!Decimal::new(-1, 0).is_valid_tolerance());
        assert_same(Decimal::new(10, 1), Decimal::new(100, 2));
    }

    #[cfg(feature = "bigint")]
    #[test]
    fn bigint() {
        use num_bigint::BigInt;
        assert!(<BigInt as Zero>::zero().is_zero());
        assert_same(BigInt::from(7), BigInt::from(7));
        assert_different(BigInt::from(7), BigInt::from(-7));
    }

    proptest! {
        #[test]
        fn same_floats_hash_equal(a in any::<f64>(), b in any::<f64>()) {
            if a.same(&b) {
                prop_assert_eq!(hash_of(&a), hash_of(&b));
            }
            prop_assert!(a.same(&a));
        }
    }
}
