//! `Display` and `Debug` for the tuple types.
//!
//! `Display` writes the components in parentheses, e.g. `(1, 2)`. `Debug`
//! prefixes the type name, e.g. `Tup(1, 2)`, and honours `{:#?}`.

use std::fmt::{self, Debug, Display, Formatter};

use super::{ImmutableTup, PTup, Tup, TupR};

/// Writes `(c0, c1, ...)`, honouring the format flags for each component.
fn display_components<T: Display>(components: &[T], f: &mut Formatter<'_>) -> fmt::Result {
    f.write_str("(")?;
    for (i, c) in components.iter().enumerate() {
        if i > 0 { f.write_str(", ")?; }
        Display::fmt(c, f)?;
    }
    f.write_str(")")
}

fn debug_components<T: Debug>(name: &str, components: &[T], f: &mut Formatter<'_>) -> fmt::Result {
    let mut t = f.debug_tuple(name);
    for c in components { t.field(c); }
    t.finish()
}

macro_rules! impl_format {
    ($tup:ident) => {
        impl<T: Display, const N: usize> Display for $tup<T, N> {
            fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                display_components(self.as_slice(), f)
            }
        }

        impl<T: Debug, const N: usize> Debug for $tup<T, N> {
            fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                debug_components(stringify!($tup), self.as_slice(), f)
            }
        }
    };
}

impl_format!(Tup);
impl_format!(ImmutableTup);
impl_format!(PTup);

// ----------------------------------------------------------------------------
