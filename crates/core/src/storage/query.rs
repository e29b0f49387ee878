use std::fmt;

/// The four supported access strategies, from cheapest to most expensive.
///
/// The tag travels with every cost record so callers can tell which physical
/// access pattern produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupStrategy {
    /// Key condition on the partition key alone, against the base table.
    PrimaryKey,
    /// Key condition on partition and sort key, against the base table.
    CompositeKey,
    /// Key condition on the secondary index, no filter.
    IndexValue,
    /// Key condition on the secondary index plus a residual status filter.
    IndexValueFiltered,
}

impl LookupStrategy {
    /// Stable label used in cost records.
    pub fn as_str(self) -> &'static str {
        match self {
            LookupStrategy::PrimaryKey => "primary-key",
            LookupStrategy::CompositeKey => "primary+sort-key",
            LookupStrategy::IndexValue => "index",
            LookupStrategy::IndexValueFiltered => "index+filter",
        }
    }
}

impl fmt::Display for LookupStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The key condition of a query. Every query carries one: unbounded scans
/// are not expressible in this layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyCondition {
    /// `id = :id` against the base table. Matches the whole partition.
    IdEquals { id: String },
    /// `id = :id AND category = :category` against the base table.
    IdAndCategoryEqual { id: String, category: String },
    /// `value = :value` against the secondary value index.
    ValueEquals { value: i64 },
}

/// A residual filter on `status`, evaluated after the key condition over
/// every item the key condition matched. Does not reduce scan cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusFilter {
    pub status: i64,
}

/// A fully-specified query: strategy tag, key condition, optional residual
/// filter. This is the mapping from logical lookup intent onto a physical
/// access pattern; backends execute it without reinterpreting it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryPlan {
    pub strategy: LookupStrategy,
    pub key: KeyCondition,
    pub filter: Option<StatusFilter>,
}

impl QueryPlan {
    /// Lookup by partition key alone.
    ///
    /// The table key is `(id, category)`, so this matches every item sharing
    /// `id`; callers wanting a single item take the first.
    pub fn by_primary_key(id: impl Into<String>) -> Self {
        Self {
            strategy: LookupStrategy::PrimaryKey,
            key: KeyCondition::IdEquals { id: id.into() },
            filter: None,
        }
    }

    /// Lookup by the full composite key.
    pub fn by_composite_key(id: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            strategy: LookupStrategy::CompositeKey,
            key: KeyCondition::IdAndCategoryEqual {
                id: id.into(),
                category: category.into(),
            },
            filter: None,
        }
    }

    /// Lookup through the secondary value index. The whole predicate lives
    /// in the key condition, so the scanned count equals the returned count.
    pub fn by_index_value(value: i64) -> Self {
        Self {
            strategy: LookupStrategy::IndexValue,
            key: KeyCondition::ValueEquals { value },
            filter: None,
        }
    }

    /// Lookup through the secondary value index with a residual status
    /// filter. The store scans every item in the value partition before
    /// filtering, so the scanned count can exceed the returned count.
    pub fn by_index_value_and_status(status: i64, value: i64) -> Self {
        Self {
            strategy: LookupStrategy::IndexValueFiltered,
            key: KeyCondition::ValueEquals { value },
            filter: Some(StatusFilter { status }),
        }
    }

    /// Whether this plan routes through the secondary index instead of the
    /// base table.
    pub fn uses_index(&self) -> bool {
        matches!(self.key, KeyCondition::ValueEquals { .. })
    }
}

/// The cost record emitted after every query: which strategy ran and how
/// many items the store examined to produce the result. Observability only,
/// never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryCost {
    pub strategy: LookupStrategy,
    pub scanned_count: i32,
}
