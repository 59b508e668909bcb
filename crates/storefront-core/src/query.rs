//! Assembly of vector index queries from facet selections.
//!
//! The index performs nearest-neighbor search, not sorting. A price sort is
//! approximated by a query vector whose last coordinate sits at a price
//! sentinel: nearest neighbors of a low target are cheap products, nearest
//! neighbors of a high target are expensive ones. The result is a bias
//! toward the requested direction, not an exact ordering.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::filter::FilterBuilder;
use crate::validator::ProductFilter;

/// Facet key for product colors.
pub const COLOR_KEY: &str = "color";
/// Facet key for product sizes.
pub const SIZE_KEY: &str = "size";
/// Facet key for product prices.
pub const PRICE_KEY: &str = "price";

/// Target price used when no sort is requested: the typical catalog price.
pub const DEFAULT_MIDPOINT_PRICE: f32 = 25.0;
/// Target price for ascending sort: the cheapest possible product.
pub const DEFAULT_FLOOR_PRICE: f32 = 0.0;
/// Target price for descending sort: the assumed catalog price ceiling.
pub const DEFAULT_CEILING_PRICE: f32 = 50.0;
/// Dimension of the product embeddings stored in the index.
pub const DEFAULT_VECTOR_DIMENSION: usize = 3;
/// Number of products requested per query.
pub const DEFAULT_TOP_K: usize = 12;

/// Requested price ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortMode {
    /// No preference; results gather around the typical price.
    #[default]
    #[serde(rename = "none")]
    None,
    /// Price: low to high.
    #[serde(rename = "Asc")]
    Ascending,
    /// Price: high to low.
    #[serde(rename = "Desc")]
    Descending,
}

/// Price targets written into the last coordinate of the query vector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SortSentinels {
    /// Target for [`SortMode::None`].
    pub midpoint: f32,
    /// Target for [`SortMode::Ascending`].
    pub floor: f32,
    /// Target for [`SortMode::Descending`].
    pub ceiling: f32,
}

impl Default for SortSentinels {
    fn default() -> Self {
        Self {
            midpoint: DEFAULT_MIDPOINT_PRICE,
            floor: DEFAULT_FLOOR_PRICE,
            ceiling: DEFAULT_CEILING_PRICE,
        }
    }
}

impl SortSentinels {
    /// Returns the target price for `mode`.
    #[must_use]
    pub fn target(&self, mode: SortMode) -> f32 {
        match mode {
            SortMode::None => self.midpoint,
            SortMode::Ascending => self.floor,
            SortMode::Descending => self.ceiling,
        }
    }
}

/// A query for the vector index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryRequest {
    /// Maximum number of results.
    pub top_k: usize,
    /// Query vector.
    pub vector: Vec<f32>,
    /// Whether the index should return product metadata.
    pub include_metadata: bool,
    /// Filter expression; absent when no facet constrains the query.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
}

/// Turns facet selections into [`QueryRequest`]s.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryAssembler {
    sentinels: SortSentinels,
    dimension: usize,
    default_top_k: usize,
}

impl Default for QueryAssembler {
    fn default() -> Self {
        Self::new(SortSentinels::default(), DEFAULT_VECTOR_DIMENSION)
    }
}

impl QueryAssembler {
    /// Creates an assembler producing vectors of `dimension` coordinates.
    ///
    /// A dimension of zero is treated as one so the sort target always has
    /// a coordinate to live in.
    #[must_use]
    pub fn new(sentinels: SortSentinels, dimension: usize) -> Self {
        Self {
            sentinels,
            dimension: dimension.max(1),
            default_top_k: DEFAULT_TOP_K,
        }
    }

    /// Sets the top-K used by [`Self::assemble_descriptor`].
    #[must_use]
    pub fn with_default_top_k(mut self, top_k: usize) -> Self {
        self.default_top_k = top_k;
        self
    }

    /// Sort sentinels in use.
    #[must_use]
    pub fn sentinels(&self) -> &SortSentinels {
        &self.sentinels
    }

    /// Top-K used by [`Self::assemble_descriptor`].
    #[must_use]
    pub fn default_top_k(&self) -> usize {
        self.default_top_k
    }

    /// Builds the query vector for `mode`: zeros with the sort target in the
    /// last coordinate.
    #[must_use]
    pub fn sort_vector(&self, mode: SortMode) -> Vec<f32> {
        let mut vector = vec![0.0; self.dimension];
        if let Some(last) = vector.last_mut() {
            *last = self.sentinels.target(mode);
        }
        vector
    }

    /// Builds the facet filter: one OR-group per non-empty facet, plus the
    /// price range, which is always present.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidFacetValue`] if a value cannot be
    /// written into the filter language.
    pub fn filter<C, S>(&self, colors: C, sizes: S, price: [f64; 2]) -> Result<FilterBuilder>
    where
        C: IntoIterator,
        C::Item: AsRef<str>,
        S: IntoIterator,
        S::Item: AsRef<str>,
    {
        let builder = colors
            .into_iter()
            .try_fold(FilterBuilder::new(), |builder, color| {
                builder.add(COLOR_KEY, "=", color.as_ref())
            })?;
        let builder = sizes.into_iter().try_fold(builder, |builder, size| {
            builder.add(SIZE_KEY, "=", size.as_ref())
        })?;
        builder.add_range(PRICE_KEY, price[0], price[1])
    }

    /// Assembles the index query for a facet selection.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidFacetValue`] if a value cannot be
    /// written into the filter language. No partial request is produced.
    pub fn assemble<C, S>(
        &self,
        colors: C,
        sizes: S,
        price: [f64; 2],
        sort: SortMode,
        top_k: usize,
    ) -> Result<QueryRequest>
    where
        C: IntoIterator,
        C::Item: AsRef<str>,
        S: IntoIterator,
        S::Item: AsRef<str>,
    {
        let builder = self.filter(colors, sizes, price)?;
        let filter = builder.has_filter().then(|| builder.render());

        tracing::debug!(filter = ?filter, ?sort, top_k, "Assembled product query");

        Ok(QueryRequest {
            top_k,
            vector: self.sort_vector(sort),
            include_metadata: true,
            filter,
        })
    }

    /// Assembles the query for a validated descriptor with the default top-K.
    ///
    /// # Errors
    ///
    /// See [`Self::assemble`].
    pub fn assemble_descriptor(&self, descriptor: &ProductFilter) -> Result<QueryRequest> {
        self.assemble(
            &descriptor.color,
            &descriptor.size,
            descriptor.price,
            descriptor.sort,
            self.default_top_k,
        )
    }
}
