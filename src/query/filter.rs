//! # Filter Expression AST
//!
//! Optional search predicates rendered as a parameterized SQL `WHERE` clause.
//! Columns are fixed identifiers chosen by the query types; values are always
//! bound, never interpolated.

use rusqlite::types::Value;

/// Filter operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOperator {
    /// Equals
    Eq,

    /// Greater than or equal
    Gte,

    /// Less than or equal
    Lte,
}

impl FilterOperator {
    /// Get the SQL operator
    pub fn as_sql(&self) -> &'static str {
        match self {
            FilterOperator::Eq => "=",
            FilterOperator::Gte => ">=",
            FilterOperator::Lte => "<=",
        }
    }
}

/// A single column predicate
#[derive(Debug, Clone, PartialEq)]
pub struct FilterExpr {
    /// Column to filter on
    pub column: &'static str,

    /// Comparison operator
    pub operator: FilterOperator,

    /// Value to compare against
    pub value: Value,
}

impl FilterExpr {
    pub fn new(column: &'static str, operator: FilterOperator, value: impl Into<Value>) -> Self {
        Self {
            column,
            operator,
            value: value.into(),
        }
    }

    /// Create an equality filter
    pub fn eq(column: &'static str, value: impl Into<Value>) -> Self {
        Self::new(column, FilterOperator::Eq, value)
    }

    /// Create a lower-bound filter
    pub fn gte(column: &'static str, value: impl Into<Value>) -> Self {
        Self::new(column, FilterOperator::Gte, value)
    }

    /// Create an upper-bound filter
    pub fn lte(column: &'static str, value: impl Into<Value>) -> Self {
        Self::new(column, FilterOperator::Lte, value)
    }

    /// Render as `column op ?N`
    fn to_sql(&self, placeholder: usize) -> String {
        format!("{} {} ?{}", self.column, self.operator.as_sql(), placeholder)
    }
}

/// A set of filters combined with AND logic
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSet {
    pub filters: Vec<FilterExpr>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn and(mut self, filter: FilterExpr) -> Self {
        self.filters.push(filter);
        self
    }

    /// Add the filter only when a value is present
    pub fn and_some<T>(self, value: Option<T>, build: impl FnOnce(T) -> FilterExpr) -> Self {
        match value {
            Some(v) => self.and(build(v)),
            None => self,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// The `WHERE ...` clause with a leading space, or an empty string.
    ///
    /// Placeholders are numbered from `?1` in filter order.
    pub fn where_clause(&self) -> String {
        if self.filters.is_empty() {
            return String::new();
        }

        let predicates: Vec<String> = self
            .filters
            .iter()
            .enumerate()
            .map(|(i, f)| f.to_sql(i + 1))
            .collect();

        format!(" WHERE {}", predicates.join(" AND "))
    }

    /// Bound values, in placeholder order
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.filters.iter().map(|f| &f.value)
    }
}
