use crate::domain::errors::DomainResult;
use crate::domain::query::{
    FilterField, FilterValue, Filterable, OrderBy, PageRequest, PredicateSet, QueryPlan,
};
use crate::domain::topic::entity::Topic;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopicField {
    Id,
    Name,
    CreatedAt,
    UpdatedAt,
}

impl FilterField for TopicField {
    fn column(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::CreatedAt => "created_at",
            Self::UpdatedAt => "updated_at",
        }
    }

    fn parse(name: &str) -> Option<Self> {
        match name {
            "id" => Some(Self::Id),
            "name" => Some(Self::Name),
            "created_at" => Some(Self::CreatedAt),
            "updated_at" => Some(Self::UpdatedAt),
            _ => None,
        }
    }
}

impl Filterable<TopicField> for Topic {
    fn field_value(&self, field: TopicField) -> FilterValue {
        match field {
            TopicField::Id => FilterValue::Int(self.id.into()),
            TopicField::Name => FilterValue::Text(self.name.as_str().to_string()),
            TopicField::CreatedAt => FilterValue::Timestamp(self.created_at),
            TopicField::UpdatedAt => FilterValue::Timestamp(self.updated_at),
        }
    }
}

#[derive(Debug, Clone)]
pub struct TopicFilter {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub order: Option<OrderBy<TopicField>>,
    pub page: i64,
    pub limit: i64,
}

impl TopicFilter {
    pub fn new(page: i64, limit: i64) -> Self {
        Self {
            id: None,
            name: None,
            order: None,
            page,
            limit,
        }
    }

    pub fn into_plan(self) -> DomainResult<QueryPlan<TopicField>> {
        let window = PageRequest::new(self.page, self.limit)?;
        let predicates = PredicateSet::new()
            .id_equals(TopicField::Id, self.id)
            .contains(TopicField::Name, self.name.as_deref())
            .into_vec();
        Ok(QueryPlan::new(predicates, self.order, window))
    }
}
