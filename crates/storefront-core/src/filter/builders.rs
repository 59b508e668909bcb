//! Accumulates facet constraints into an ordered predicate set.

use indexmap::map::Entry;
use indexmap::IndexMap;

use super::{FacetValue, Predicate};
use crate::error::{Error, Result};

/// What a single facet key holds.
#[derive(Debug, Clone, PartialEq)]
enum Facet {
    /// Comparisons combined with OR.
    Group(Vec<Predicate>),
    /// One range or raw clause; replaced wholesale on every write.
    Clause(Predicate),
}

impl Facet {
    fn into_predicate(self) -> Predicate {
        match self {
            Self::Group(predicates) => Predicate::or(predicates),
            Self::Clause(predicate) => predicate,
        }
    }
}

/// Builder for the index filter of one query.
///
/// The builder is an owned value: every method consumes it and hands it
/// back, so a half-built filter is never shared. Facet keys are rendered
/// left to right in the order they were first added; re-writing a key keeps
/// its position.
///
/// ```rust
/// use storefront_core::filter::FilterBuilder;
///
/// let filter = FilterBuilder::new()
///     .add("size", "=", "L")?
///     .add("price", "=", 20)?;
/// assert_eq!(filter.render(), "(size = 'L') AND (price = 20)");
/// # Ok::<(), storefront_core::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterBuilder {
    facets: IndexMap<String, Facet>,
}

impl FilterBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `key operator value` to the OR-group for `key`.
    ///
    /// Calling `add` again with the same key grows the group. If the key
    /// held a raw or range clause, that clause is replaced by a new group.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidFacetValue`] if the value cannot be rendered
    /// (see [`FacetValue::check`]).
    pub fn add(
        mut self,
        key: impl Into<String>,
        operator: impl Into<String>,
        value: impl Into<FacetValue>,
    ) -> Result<Self> {
        let key = key.into();
        let value = value.into();
        value.check(&key)?;

        let predicate = Predicate::compare(key.clone(), operator, value);
        match self.facets.entry(key) {
            Entry::Occupied(mut occupied) => match occupied.get_mut() {
                Facet::Group(group) => group.push(predicate),
                clause @ Facet::Clause(_) => *clause = Facet::Group(vec![predicate]),
            },
            Entry::Vacant(vacant) => {
                vacant.insert(Facet::Group(vec![predicate]));
            }
        }
        Ok(self)
    }

    /// Sets a pre-formatted clause for `key`, replacing whatever the key held.
    ///
    /// The text is written verbatim inside parentheses.
    #[must_use]
    pub fn add_raw(mut self, key: impl Into<String>, raw: impl Into<String>) -> Self {
        self.facets
            .insert(key.into(), Facet::Clause(Predicate::raw(raw)));
        self
    }

    /// Sets an inclusive range `key >= lower AND key <= upper` for `key`,
    /// replacing whatever the key held.
    ///
    /// Bound ordering is not checked.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidFacetValue`] if either bound is not finite.
    pub fn add_range(mut self, key: impl Into<String>, lower: f64, upper: f64) -> Result<Self> {
        let key = key.into();
        for bound in [lower, upper] {
            if !bound.is_finite() {
                return Err(Error::invalid_value(
                    &key,
                    format!("range bound {bound} is not finite"),
                ));
            }
        }
        let predicate = Predicate::range(key.clone(), lower, upper);
        self.facets.insert(key, Facet::Clause(predicate));
        Ok(self)
    }

    /// Returns true if at least one facet has been added.
    #[must_use]
    pub fn has_filter(&self) -> bool {
        !self.facets.is_empty()
    }

    /// Number of facet keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.facets.len()
    }

    /// Returns true if no facet has been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.facets.is_empty()
    }

    /// Facet keys in render order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.facets.keys().map(String::as_str)
    }

    /// Builds the predicate AST, or `None` when no facet was added.
    #[must_use]
    pub fn build(&self) -> Option<Predicate> {
        if self.facets.is_empty() {
            return None;
        }
        let groups = self
            .facets
            .values()
            .cloned()
            .map(Facet::into_predicate)
            .collect();
        Some(Predicate::and(groups))
    }

    /// Renders the filter string.
    ///
    /// An empty builder renders the empty string. Use [`Self::has_filter`]
    /// to tell "no constraint" apart from a rendered filter.
    #[must_use]
    pub fn render(&self) -> String {
        self.build()
            .map(|predicate| predicate.to_string())
            .unwrap_or_default()
    }
}
