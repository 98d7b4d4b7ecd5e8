//! `serde` support, enabled by the `serde` feature.
//!
//! Every tuple type serializes as a fixed-length sequence of its components,
//! e.g. `[1, 2]` in JSON. Deserialization rejects sequences of any other
//! length.

use std::fmt;
use std::marker::{PhantomData};

use serde::de::{self, Deserialize, Deserializer, IgnoredAny, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeTuple, Serializer};

use super::{ImmutableTup, NewTup, PTup, Tup, TupR};

fn serialize_components<T: Serialize, S: Serializer>(
    components: &[T],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let mut tuple = serializer.serialize_tuple(components.len())?;
    for c in components { tuple.serialize_element(c)?; }
    tuple.end()
}

/// Builds an `A` from a sequence of exactly `N` `T`s.
struct TupVisitor<A, T, const N: usize>(PhantomData<fn() -> (A, T)>);

impl<'de, A, T, const N: usize> Visitor<'de> for TupVisitor<A, T, N> where
    A: NewTup<T, N>,
    T: Deserialize<'de>,
{
    type Value = A;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a sequence of {} components", N)
    }

    fn visit_seq<S: SeqAccess<'de>>(self, mut seq: S) -> Result<A, S::Error> {
        let mut values: Vec<T> = Vec::with_capacity(N);
        for i in 0..N {
            let value = seq.next_element()?.ok_or_else(|| de::Error::invalid_length(i, &self))?;
            values.push(value);
        }
        if seq.next_element::<IgnoredAny>()?.is_some() {
            return Err(de::Error::invalid_length(N + 1, &self));
        }
        let values = <[T; N]>::try_from(values)
            .map_err(|values| de::Error::invalid_length(values.len(), &self))?;
        Ok(A::new_instance(values))
    }
}

macro_rules! impl_serde {
    ($tup:ident) => {
        impl<T: Serialize, const N: usize> Serialize for $tup<T, N> {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serialize_components(self.as_slice(), serializer)
            }
        }

        impl<'de, T: Deserialize<'de>, const N: usize> Deserialize<'de> for $tup<T, N> where
            Self: NewTup<T, N>,
        {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                deserializer.deserialize_tuple(N, TupVisitor::<Self, T, N>(PhantomData))
            }
        }
    };
}

impl_serde!(Tup);
impl_serde!(ImmutableTup);
impl_serde!(PTup);

// ----------------------------------------------------------------------------
