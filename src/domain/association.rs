// src/domain/association.rs
use crate::domain::article::ArticleId;
use crate::domain::errors::DomainResult;
use crate::domain::topic::TopicId;
use async_trait::async_trait;

/// One row of the article/topic join. Its presence means the topic applies to
/// the article; it has no identity beyond the pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArticleTopic {
    pub article_id: ArticleId,
    pub topic_id: TopicId,
}

impl ArticleTopic {
    pub fn new(article_id: ArticleId, topic_id: TopicId) -> Self {
        Self {
            article_id,
            topic_id,
        }
    }
}

#[async_trait]
pub trait ArticleTopicRepository: Send + Sync {
    /// Rows for one article. An article without topics yields an empty list.
    async fn find_by_article(&self, article_id: ArticleId) -> DomainResult<Vec<ArticleTopic>>;
    async fn find_by_topic(&self, topic_id: TopicId) -> DomainResult<Vec<ArticleTopic>>;
    async fn insert(&self, link: ArticleTopic) -> DomainResult<()>;
    async fn delete(&self, link: ArticleTopic) -> DomainResult<()>;
    /// Returns the number of rows removed.
    async fn delete_by_article(&self, article_id: ArticleId) -> DomainResult<u64>;
    /// Returns the number of rows removed; zero is not an error.
    async fn delete_by_topic(&self, topic_id: TopicId) -> DomainResult<u64>;
}
