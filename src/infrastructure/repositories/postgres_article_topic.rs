// src/infrastructure/repositories/postgres_article_topic.rs
use super::map_sqlx;
use crate::domain::article::ArticleId;
use crate::domain::association::{ArticleTopic, ArticleTopicRepository};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::topic::TopicId;
use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresArticleTopicRepository {
    pool: PgPool,
}

impl PostgresArticleTopicRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleTopicRow {
    article_id: i64,
    topic_id: i64,
}

impl TryFrom<ArticleTopicRow> for ArticleTopic {
    type Error = DomainError;

    fn try_from(row: ArticleTopicRow) -> Result<Self, Self::Error> {
        Ok(ArticleTopic::new(
            ArticleId::new(row.article_id)?,
            TopicId::new(row.topic_id)?,
        ))
    }
}

#[async_trait]
impl ArticleTopicRepository for PostgresArticleTopicRepository {
    async fn find_by_article(&self, article_id: ArticleId) -> DomainResult<Vec<ArticleTopic>> {
        let rows = sqlx::query_as::<_, ArticleTopicRow>(
            "SELECT article_id, topic_id FROM article_topics WHERE article_id = $1 ORDER BY topic_id",
        )
        .bind(i64::from(article_id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(ArticleTopic::try_from).collect()
    }

    async fn find_by_topic(&self, topic_id: TopicId) -> DomainResult<Vec<ArticleTopic>> {
        let rows = sqlx::query_as::<_, ArticleTopicRow>(
            "SELECT article_id, topic_id FROM article_topics WHERE topic_id = $1 ORDER BY article_id",
        )
        .bind(i64::from(topic_id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(ArticleTopic::try_from).collect()
    }

    async fn insert(&self, link: ArticleTopic) -> DomainResult<()> {
        sqlx::query("INSERT INTO article_topics (article_id, topic_id) VALUES ($1, $2)")
            .bind(i64::from(link.article_id))
            .bind(i64::from(link.topic_id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(())
    }

    async fn delete(&self, link: ArticleTopic) -> DomainResult<()> {
        let result =
            sqlx::query("DELETE FROM article_topics WHERE article_id = $1 AND topic_id = $2")
                .bind(i64::from(link.article_id))
                .bind(i64::from(link.topic_id))
                .execute(&self.pool)
                .await
                .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound(format!(
                "article {} is not linked to topic {}",
                link.article_id, link.topic_id
            )));
        }
        Ok(())
    }

    async fn delete_by_article(&self, article_id: ArticleId) -> DomainResult<u64> {
        let result = sqlx::query("DELETE FROM article_topics WHERE article_id = $1")
            .bind(i64::from(article_id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(result.rows_affected())
    }

    async fn delete_by_topic(&self, topic_id: TopicId) -> DomainResult<u64> {
        let result = sqlx::query("DELETE FROM article_topics WHERE topic_id = $1")
            .bind(i64::from(topic_id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(result.rows_affected())
    }
}
