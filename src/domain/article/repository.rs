use crate::domain::article::entity::{Article, ArticleUpdate, NewArticle};
use crate::domain::article::filter::ArticleField;
use crate::domain::article::value_objects::{ArticleId, ArticleTitle};
use crate::domain::errors::DomainResult;
use crate::domain::query::{Predicate, QueryPlan};
use async_trait::async_trait;

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;
    /// Fails with `DomainError::NotFound` when no row was updated.
    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article>;
    async fn delete(&self, id: ArticleId) -> DomainResult<()>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn fetch_page(&self, plan: &QueryPlan<ArticleField>) -> DomainResult<Vec<Article>>;
    async fn count(&self, predicates: &[Predicate<ArticleField>]) -> DomainResult<u64>;
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;
    async fn find_by_title(&self, title: &ArticleTitle) -> DomainResult<Option<Article>>;
}
