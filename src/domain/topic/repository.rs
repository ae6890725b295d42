use crate::domain::errors::DomainResult;
use crate::domain::query::{Predicate, QueryPlan};
use crate::domain::topic::entity::{NewTopic, Topic, TopicUpdate};
use crate::domain::topic::filter::TopicField;
use crate::domain::topic::value_objects::{TopicId, TopicName};
use async_trait::async_trait;

#[async_trait]
pub trait TopicWriteRepository: Send + Sync {
    async fn insert(&self, topic: NewTopic) -> DomainResult<Topic>;
    async fn update(&self, update: TopicUpdate) -> DomainResult<Topic>;
    async fn delete(&self, id: TopicId) -> DomainResult<()>;
}

#[async_trait]
pub trait TopicReadRepository: Send + Sync {
    async fn fetch_page(&self, plan: &QueryPlan<TopicField>) -> DomainResult<Vec<Topic>>;
    async fn count(&self, predicates: &[Predicate<TopicField>]) -> DomainResult<u64>;
    async fn find_by_id(&self, id: TopicId) -> DomainResult<Option<Topic>>;
    async fn find_by_name(&self, name: &TopicName) -> DomainResult<Option<Topic>>;
}
