// src/domain/article/filter.rs
use crate::domain::article::entity::Article;
use crate::domain::article::value_objects::ArticleStatus;
use crate::domain::errors::DomainResult;
use crate::domain::query::{
    FilterField, FilterValue, Filterable, OrderBy, PageRequest, PredicateSet, QueryPlan,
};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArticleField {
    Id,
    Title,
    Status,
    AuthorId,
    CreatedAt,
    UpdatedAt,
}

impl FilterField for ArticleField {
    fn column(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Title => "title",
            Self::Status => "status",
            Self::AuthorId => "author_id",
            Self::CreatedAt => "created_at",
            Self::UpdatedAt => "updated_at",
        }
    }

    fn parse(name: &str) -> Option<Self> {
        match name {
            "id" => Some(Self::Id),
            "title" => Some(Self::Title),
            "status" => Some(Self::Status),
            "author_id" => Some(Self::AuthorId),
            "created_at" => Some(Self::CreatedAt),
            "updated_at" => Some(Self::UpdatedAt),
            _ => None,
        }
    }
}

impl Filterable<ArticleField> for Article {
    fn field_value(&self, field: ArticleField) -> FilterValue {
        match field {
            ArticleField::Id => FilterValue::Int(self.id.into()),
            ArticleField::Title => FilterValue::Text(self.title.as_str().to_string()),
            ArticleField::Status => FilterValue::Text(self.status.as_str().to_string()),
            ArticleField::AuthorId => FilterValue::Int(self.author_id.into()),
            ArticleField::CreatedAt => FilterValue::Timestamp(self.created_at),
            ArticleField::UpdatedAt => FilterValue::Timestamp(self.updated_at),
        }
    }
}

/// Sparse listing filter. Every field is optional; pagination is mandatory.
#[derive(Debug, Clone)]
pub struct ArticleFilter {
    pub id: Option<i64>,
    pub title: Option<String>,
    pub status: Option<ArticleStatus>,
    pub author_id: Option<i64>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub order: Option<OrderBy<ArticleField>>,
    pub page: i64,
    pub limit: i64,
}

impl ArticleFilter {
    pub fn new(page: i64, limit: i64) -> Self {
        Self {
            id: None,
            title: None,
            status: None,
            author_id: None,
            start_date: None,
            end_date: None,
            order: None,
            page,
            limit,
        }
    }

    pub fn by_id(id: i64) -> Self {
        Self {
            id: Some(id),
            ..Self::new(1, 1)
        }
    }

    pub fn into_plan(self) -> DomainResult<QueryPlan<ArticleField>> {
        let window = PageRequest::new(self.page, self.limit)?;
        let predicates = PredicateSet::new()
            .id_equals(ArticleField::Id, self.id)
            .contains(ArticleField::Title, self.title.as_deref())
            .text_equals(ArticleField::Status, self.status.map(ArticleStatus::as_str))
            .id_equals(ArticleField::AuthorId, self.author_id)
            .time_range(ArticleField::CreatedAt, self.start_date, self.end_date)
            .into_vec();
        Ok(QueryPlan::new(predicates, self.order, window))
    }
}
