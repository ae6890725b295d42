// src/domain/query.rs
//! Typed filter predicates, ordering and page windows shared by the article
//! and topic listings.
//!
//! A [`QueryPlan`] is built from a sparse filter: only supplied fields turn
//! into predicates, and the same predicate list backs both the row fetch and
//! the count query so that page totals always agree with the page contents.
use crate::domain::errors::{DomainError, DomainResult};
use chrono::{DateTime, Utc};
use std::cmp::Ordering;
use std::fmt;

/// A filterable/sortable column of one entity. Implemented by closed enums so
/// that column names never come from caller input.
pub trait FilterField: Copy + Eq + fmt::Debug + Send + Sync + 'static {
    fn column(self) -> &'static str;

    fn parse(name: &str) -> Option<Self>;
}

/// Gives in-memory access to the value of a field, used to evaluate plans
/// without a database.
pub trait Filterable<F: FilterField> {
    fn field_value(&self, field: F) -> FilterValue;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterValue {
    Int(i64),
    Text(String),
    Timestamp(DateTime<Utc>),
}

impl FilterValue {
    fn compare(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => Some(a.cmp(b)),
            (Self::Text(a), Self::Text(b)) => Some(a.cmp(b)),
            (Self::Timestamp(a), Self::Timestamp(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate<F> {
    Equals {
        field: F,
        value: FilterValue,
    },
    /// Inclusive on both ends; a missing bound is unbounded.
    Range {
        field: F,
        start: Option<FilterValue>,
        end: Option<FilterValue>,
    },
    /// Case-insensitive substring match.
    Contains { field: F, needle: String },
}

impl<F: FilterField> Predicate<F> {
    pub fn field(&self) -> F {
        match self {
            Self::Equals { field, .. }
            | Self::Range { field, .. }
            | Self::Contains { field, .. } => *field,
        }
    }

    pub fn matches<R: Filterable<F>>(&self, record: &R) -> bool {
        let actual = record.field_value(self.field());
        match self {
            Self::Equals { value, .. } => actual == *value,
            Self::Range { start, end, .. } => {
                let above = start.as_ref().is_none_or(|s| {
                    matches!(actual.compare(s), Some(Ordering::Greater | Ordering::Equal))
                });
                let below = end.as_ref().is_none_or(|e| {
                    matches!(actual.compare(e), Some(Ordering::Less | Ordering::Equal))
                });
                above && below
            }
            Self::Contains { needle, .. } => match actual {
                FilterValue::Text(text) => text.to_lowercase().contains(&needle.to_lowercase()),
                _ => false,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// Only an explicit `desc` (any case) sorts descending.
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some(v) if v.trim().eq_ignore_ascii_case("desc") => Self::Descending,
            _ => Self::Ascending,
        }
    }

    pub fn as_sql(self) -> &'static str {
        match self {
            Self::Ascending => "ASC",
            Self::Descending => "DESC",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderBy<F> {
    pub field: F,
    pub direction: SortDirection,
}

impl<F: FilterField> OrderBy<F> {
    /// Parse a caller supplied sort directive. A blank field means "no
    /// ordering"; an unknown field is rejected.
    pub fn parse(field: Option<&str>, direction: Option<&str>) -> DomainResult<Option<Self>> {
        let Some(name) = field.map(str::trim).filter(|s| !s.is_empty()) else {
            return Ok(None);
        };
        let field = F::parse(name)
            .ok_or_else(|| DomainError::Validation(format!("unsupported sort field: {name}")))?;
        Ok(Some(Self {
            field,
            direction: SortDirection::parse(direction),
        }))
    }

    pub fn compare<R: Filterable<F>>(&self, a: &R, b: &R) -> Ordering {
        let ordering = a
            .field_value(self.field)
            .compare(&b.field_value(self.field))
            .unwrap_or(Ordering::Equal);
        match self.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u64,
    limit: u64,
}

impl PageRequest {
    /// Pages below 1 are clamped to 1. The limit must be supplied by the
    /// caller and be positive. The resulting offset must fit in an `i64`,
    /// the widest value the stores accept.
    pub fn new(page: i64, limit: i64) -> DomainResult<Self> {
        if limit <= 0 {
            return Err(DomainError::Validation("limit must be positive".into()));
        }
        let page = page.max(1);
        if (page - 1).checked_mul(limit).is_none() {
            return Err(DomainError::Validation(format!(
                "page {page} is out of range for limit {limit}"
            )));
        }
        Ok(Self {
            page: page.unsigned_abs(),
            limit: limit.unsigned_abs(),
        })
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }

    pub fn offset(&self) -> u64 {
        (self.page - 1).saturating_mul(self.limit)
    }

    pub fn total_pages(&self, total_data: u64) -> u64 {
        total_data.div_ceil(self.limit)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryPlan<F> {
    predicates: Vec<Predicate<F>>,
    order: Option<OrderBy<F>>,
    window: PageRequest,
}

impl<F: FilterField> QueryPlan<F> {
    pub fn new(
        predicates: Vec<Predicate<F>>,
        order: Option<OrderBy<F>>,
        window: PageRequest,
    ) -> Self {
        Self {
            predicates,
            order,
            window,
        }
    }

    pub fn predicates(&self) -> &[Predicate<F>] {
        &self.predicates
    }

    /// Predicates for the matching count query. Always identical to the row
    /// predicates.
    pub fn count_predicates(&self) -> &[Predicate<F>] {
        &self.predicates
    }

    pub fn order(&self) -> Option<&OrderBy<F>> {
        self.order.as_ref()
    }

    pub fn window(&self) -> PageRequest {
        self.window
    }

    pub fn limit(&self) -> u64 {
        self.window.limit()
    }

    pub fn offset(&self) -> u64 {
        self.window.offset()
    }
}

/// Collects predicates, skipping absent, blank or zero-valued inputs.
pub struct PredicateSet<F> {
    predicates: Vec<Predicate<F>>,
}

impl<F: FilterField> PredicateSet<F> {
    pub fn new() -> Self {
        Self {
            predicates: Vec::new(),
        }
    }

    pub fn id_equals(mut self, field: F, id: Option<i64>) -> Self {
        if let Some(id) = id.filter(|id| *id != 0) {
            self.predicates.push(Predicate::Equals {
                field,
                value: FilterValue::Int(id),
            });
        }
        self
    }

    pub fn text_equals(mut self, field: F, value: Option<&str>) -> Self {
        if let Some(value) = value.filter(|v| !v.trim().is_empty()) {
            self.predicates.push(Predicate::Equals {
                field,
                value: FilterValue::Text(value.to_string()),
            });
        }
        self
    }

    pub fn contains(mut self, field: F, needle: Option<&str>) -> Self {
        if let Some(needle) = needle.map(str::trim).filter(|n| !n.is_empty()) {
            self.predicates.push(Predicate::Contains {
                field,
                needle: needle.to_string(),
            });
        }
        self
    }

    pub fn time_range(
        mut self,
        field: F,
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
    ) -> Self {
        if start.is_some() || end.is_some() {
            self.predicates.push(Predicate::Range {
                field,
                start: start.map(FilterValue::Timestamp),
                end: end.map(FilterValue::Timestamp),
            });
        }
        self
    }

    pub fn into_vec(self) -> Vec<Predicate<F>> {
        self.predicates
    }
}

impl<F: FilterField> Default for PredicateSet<F> {
    fn default() -> Self {
        Self::new()
    }
}
