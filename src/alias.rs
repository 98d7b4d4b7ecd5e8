//! Type aliases for the common combinations of arity and component type.
//!
//! The suffix names the component type: `b` (`i8`), `c` (`char`), `i`
//! (`i32`), `l` (`i64`), `f` (`f32`), `d` (`f64`), `bo` (`bool`), `s`
//! (`String`), `bd` ([`Decimal`]), `bi` ([`BigInt`]) and `o` (any type).
//!
//! `Decimal` components compare by value, ignoring scale: `1.0` equals
//! `1.00`, and both hash the same.
//!
//! [`Decimal`]: https://docs.rs/rust_decimal/latest/rust_decimal/struct.Decimal.html
//! [`BigInt`]: https://docs.rs/num-bigint/latest/num_bigint/struct.BigInt.html

use super::{ImmutableTup, PTup, Tup};

macro_rules! aliases {
    ($(
        $(#[$attr:meta])*
        $t:ty => $tup2:ident, $tup3:ident, $imm2:ident, $imm3:ident, $p2:ident, $p3:ident;
    )*) => {
        $(
            $(#[$attr])* pub type $tup2 = Tup<$t, 2>;
            $(#[$attr])* pub type $tup3 = Tup<$t, 3>;
            $(#[$attr])* pub type $imm2 = ImmutableTup<$t, 2>;
            $(#[$attr])* pub type $imm3 = ImmutableTup<$t, 3>;
            $(#[$attr])* pub type $p2 = PTup<$t, 2>;
            $(#[$attr])* pub type $p3 = PTup<$t, 3>;
        )*
    };
}

aliases! {
    i8 => Tup2b, Tup3b, ImmutableTup2b, ImmutableTup3b, PTup2b, PTup3b;
    char => Tup2c, Tup3c, ImmutableTup2c, ImmutableTup3c, PTup2c, PTup3c;
    i32 => Tup2i, Tup3i, ImmutableTup2i, ImmutableTup3i, PTup2i, PTup3i;
    i64 => Tup2l, Tup3l, ImmutableTup2l, ImmutableTup3l, PTup2l, PTup3l;
    f32 => Tup2f, Tup3f, ImmutableTup2f, ImmutableTup3f, PTup2f, PTup3f;
    f64 => Tup2d, Tup3d, ImmutableTup2d, ImmutableTup3d, PTup2d, PTup3d;
    bool => Tup2bo, Tup3bo, ImmutableTup2bo, ImmutableTup3bo, PTup2bo, PTup3bo;
    String => Tup2s, Tup3s, ImmutableTup2s, ImmutableTup3s, PTup2s, PTup3s;
    #[cfg(feature = "decimal")]
    rust_decimal::Decimal => Tup2bd, Tup3bd, ImmutableTup2bd, ImmutableTup3bd, PTup2bd, PTup3bd;
    #[cfg(feature = "bigint")]
    num_bigint::BigInt => Tup2bi, Tup3bi, ImmutableTup2bi, ImmutableTup3bi, PTup2bi, PTup3bi;
}

pub type Tup2o<T> = Tup<T, 2>;
pub type Tup3o<T> = Tup<T, 3>;
pub type ImmutableTup2o<T> = ImmutableTup<T, 2>;
pub type ImmutableTup3o<T> = ImmutableTup<T, 3>;
pub type PTup2o<T> = PTup<T, 2>;
pub type PTup3o<T> = PTup<T, 3>;

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::{NewTup, Tup2R, Tup2W, Tup3R, TupR, TupleError};

    #[test]
    fn primitives() {
        let mut b: Tup2b = Tup::xy(-128, 127);
        b.set_x(0);
        assert_eq!(b.to_string(), "(0, 127)");
        let c: PTup3c = PTup::gen3('x', 'y', 'z');
        assert_eq!(*c.z(), 'z');
        let l = ImmutableTup2l::xy(i64::MAX, 0);
        assert!(l.is_zero_at(1).unwrap());
        let bo = Tup3bo::new_zero();
        assert!(bo.is_zero());
        let d: Tup3d = Tup::xyz(1e-12, -1e-12, 0.0);
        assert_eq!(d.is_zero_within(&1e-9), Ok(true));
        let f: ImmutableTup2f = ImmutableTup::xy(1.0, 2.0);
        assert_eq!(f.is_zero_within(&-0.5), Err(TupleError::InvalidTolerance));
        let i: PTup2i = (4, 5).into();
        assert_eq!(*i.x() + *i.y(), 9);
    }

    #[test]
    fn objects() {
        let o: Tup2o<Option<u8>> = Tup::xy(Some(1), None);
        assert_eq!(o, Tup::xy(Some(1), None));
        let s: ImmutableTup3s = ImmutableTup::xyz("a".into(), "b".into(), "c".into());
        assert_eq!(s.to_vec().concat(), "abc");
        let v: PTup2o<Vec<u8>> = PTup::gen(vec![1], vec![2, 3]);
        assert_eq!(v.y().len(), 2);
    }

    #[cfg(feature = "decimal")]
    #[test]
    fn decimal() {
        use rust_decimal::Decimal;
        let t: Tup2bd = Tup::xy(Decimal::new(1, 3), Decimal::new(-2, 3));
        assert_eq!(t.is_zero_within(&Decimal::new(1, 2)), Ok(true));
        assert_eq!(t.is_zero_within(&Decimal::new(-1, 2)), Err(TupleError::InvalidTolerance));
        assert_eq!(t.to_string(), "(0.001, -0.002)");
        let scaled: Tup2bd = Tup::xy(Decimal::new(10, 1), Decimal::new(100, 2));
        assert_eq!(scaled, Tup::xy(Decimal::ONE, Decimal::ONE));
        assert_eq!(ImmutableTup3bd::new_zero(), ImmutableTup::xyz(Decimal::ZERO, Decimal::ZERO, Decimal::ZERO));
    }

    #[cfg(feature = "bigint")]
    #[test]
    fn bigint() {
        use num_bigint::BigInt;
        let t: PTup2bi = PTup::gen(BigInt::from(10).pow(30), BigInt::from(0));
        assert!(!t.is_zero());
        assert!(t.is_zero_at(1).unwrap());
        assert_eq!(t.to_string(), "(1000000000000000000000000000000, 0)");
    }
}
