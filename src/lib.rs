//! A pure-Rust library of fixed-arity tuple value types.
//!
//! [`Tup<T, N>`] is a mutable tuple of `N` components of type `T`. It has two
//! immutable siblings: [`ImmutableTup<T, N>`], which caches its hash, and
//! [`PTup<T, N>`], a lightweight `Copy`-able tuple constructed with
//! [`PTup::gen()`]. All three implement structural equality, hashing and
//! formatting, and convert freely into each other, to and from arrays, and
//! to and from native Rust tuples.
//!
//! Behaviour is organised by capability. [`TupR`] gives read access to the
//! components, [`TupW`] gives write access, and [`TupC`] is both. The
//! arity-specific traits [`Tup2R`], [`Tup3W`] and so on add named accessors
//! such as `x()` and `set_z()`. [`NewTup`] lets generic code construct a
//! tuple of the same kind as one it was given. Write your functions in terms
//! of these traits, and they will accept any of the tuple types:
//!
//! ```
//! use tupl::{ImmutableTup, PTup, Tup, Tup2R, TupR};
//!
//! fn cross<A: Tup2R<i32>, B: Tup2R<i32>>(a: &A, b: &B) -> i32 {
//!     a.x() * b.y() - a.y() * b.x()
//! }
//!
//! assert_eq!(cross(&Tup::xy(1, 0), &PTup::gen(0, 1)), 1);
//! assert_eq!(cross(&ImmutableTup::xy(2, 3), &[4, 5]), -2);
//! assert!(Tup::xy(0, 0).is_zero());
//! ```
//!
//! Components must implement [`Element`], which defines their equality and
//! hash. It is implemented for the primitive types, `String`, and (with the
//! default features) `rust_decimal::Decimal` and `num_bigint::BigInt`. Floats
//! follow the boxed-float convention in which `NaN` equals itself and `0.0`
//! differs from `-0.0`. Use [`impl_element`] for your own types. Components
//! that implement [`Zero`] enable [`TupR::is_zero()`], and those that
//! implement [`Tolerance`] enable [`TupR::is_zero_within()`].
//!
//! The module [`alias`] names the common combinations of arity and component
//! type, e.g. [`Tup2i`] and [`ImmutableTup3d`].

mod error;
pub use error::{TupleError};

mod element;
pub use element::{Element, Zero, Tolerance};

pub mod access;
pub use access::{TupR, TupW, TupC};

pub mod named;
pub use named::{Tup2R, Tup2W, Tup2C, Tup3R, Tup3W, Tup3C};

mod new;
pub use new::{NewTup};

mod tup;
pub use tup::{Tup};

mod immutable;
pub use immutable::{ImmutableTup};

mod ptup;
pub use ptup::{PTup};

mod format;

pub mod convert;

#[cfg(feature = "serde")]
mod serialize;

pub mod alias;
pub use alias::*;
