//! Serialization of [`Predicate`] into the index filter syntax.

use std::fmt;

use super::{FacetValue, Predicate};

impl fmt::Display for FacetValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", unsigned_zero(*n)),
            Self::Text(text) => write!(f, "'{text}'"),
        }
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Equality {
                key,
                operator,
                value,
            } => write!(f, "{key} {operator} {value}"),
            Self::Range { key, lower, upper } => {
                let (lower, upper) = (unsigned_zero(*lower), unsigned_zero(*upper));
                write!(f, "{key} >= {lower} AND {key} <= {upper}")
            }
            Self::Raw { text } => f.write_str(text),
            Self::Or { predicates } => write_joined(f, predicates, " OR ", false),
            Self::And { predicates } => write_joined(f, predicates, " AND ", true),
        }
    }
}

/// Maps `-0.0` to `0.0` so a zero bound never renders as `-0`.
fn unsigned_zero(n: f64) -> f64 {
    if n == 0.0 {
        0.0
    } else {
        n
    }
}

/// Writes `predicates` separated by `separator`.
///
/// Operands of AND are always parenthesized so every facet reads as one
/// group. Operands of OR are parenthesized only when they are compound.
fn write_joined(
    f: &mut fmt::Formatter<'_>,
    predicates: &[Predicate],
    separator: &str,
    always_group: bool,
) -> fmt::Result {
    for (i, predicate) in predicates.iter().enumerate() {
        if i > 0 {
            f.write_str(separator)?;
        }
        if always_group || !predicate.is_leaf() {
            write!(f, "({predicate})")?;
        } else {
            write!(f, "{predicate}")?;
        }
    }
    Ok(())
}
