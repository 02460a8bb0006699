//! Typed address filters.
//!
//! Operator-facing ping filters accept a trailing `*` to request
//! substring matching. Filters are rendered by the store as
//! parameterized SQL; the pattern value itself never reaches the query
//! text.

/// How a filter value is compared against the column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    Equals,
    Contains,
}

/// Columns a filter may target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    BridgeInterface,
    LogicalInterface,
    Reachability,
}

impl FilterField {
    pub fn column(&self) -> &'static str {
        match self {
            FilterField::BridgeInterface => "bridge_interface",
            FilterField::LogicalInterface => "logical_interface",
            FilterField::Reachability => "reachability",
        }
    }
}

/// One equality/substring condition on snapshot rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressFilter {
    pub field: FilterField,
    pub kind: MatchKind,
    pub value: String,
}

impl AddressFilter {
    pub fn equals(field: FilterField, value: impl Into<String>) -> Self {
        Self {
            field,
            kind: MatchKind::Equals,
            value: value.into(),
        }
    }

    pub fn contains(field: FilterField, value: impl Into<String>) -> Self {
        Self {
            field,
            kind: MatchKind::Contains,
            value: value.into(),
        }
    }

    /// Maps an operator pattern to a filter: a trailing `*` selects
    /// substring matching, anything else is an exact match. Empty
    /// patterns yield no filter.
    pub fn from_pattern(field: FilterField, pattern: &str) -> Option<Self> {
        if pattern.is_empty() {
            return None;
        }
        match pattern.strip_suffix('*') {
            Some(stem) if stem.is_empty() => None,
            Some(stem) => Some(Self::contains(field, stem)),
            None => Some(Self::equals(field, pattern)),
        }
    }
}
