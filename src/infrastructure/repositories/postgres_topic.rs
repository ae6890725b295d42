// src/infrastructure/repositories/postgres_topic.rs
use super::filter_sql::{push_order, push_predicates, push_window};
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::query::{Predicate, QueryPlan};
use crate::domain::topic::{
    NewTopic, Topic, TopicField, TopicId, TopicName, TopicReadRepository, TopicUpdate,
    TopicWriteRepository,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const TOPIC_COLUMNS: &str = "id, name, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresTopicWriteRepository {
    pool: PgPool,
}

impl PostgresTopicWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresTopicReadRepository {
    pool: PgPool,
}

impl PostgresTopicReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct TopicRow {
    id: i64,
    name: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<TopicRow> for Topic {
    type Error = DomainError;

    fn try_from(row: TopicRow) -> Result<Self, Self::Error> {
        Ok(Topic {
            id: TopicId::new(row.id)?,
            name: TopicName::new(row.name)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl TopicWriteRepository for PostgresTopicWriteRepository {
    async fn insert(&self, topic: NewTopic) -> DomainResult<Topic> {
        let row = sqlx::query_as::<_, TopicRow>(&format!(
            "INSERT INTO topics (name, created_at, updated_at)
             VALUES ($1, $2, $3)
             RETURNING {TOPIC_COLUMNS}"
        ))
        .bind(topic.name.into_inner())
        .bind(topic.created_at)
        .bind(topic.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Topic::try_from(row)
    }

    async fn update(&self, update: TopicUpdate) -> DomainResult<Topic> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE topics SET updated_at = ");
        builder.push_bind(update.updated_at);

        if let Some(name) = update.name {
            builder.push(", name = ");
            builder.push_bind(name.into_inner());
        }

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(update.id));
        builder.push(" RETURNING ");
        builder.push(TOPIC_COLUMNS);

        let row = builder
            .build_query_as::<TopicRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound(format!("topic {} not found", update.id)))?;

        Topic::try_from(row)
    }

    async fn delete(&self, id: TopicId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM topics WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound(format!("topic {id} not found")));
        }
        Ok(())
    }
}

#[async_trait]
impl TopicReadRepository for PostgresTopicReadRepository {
    async fn fetch_page(&self, plan: &QueryPlan<TopicField>) -> DomainResult<Vec<Topic>> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT {TOPIC_COLUMNS} FROM topics"));
        push_predicates(&mut builder, plan.predicates());
        push_order(&mut builder, plan.order());
        push_window(&mut builder, plan);

        let rows = builder
            .build_query_as::<TopicRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Topic::try_from).collect()
    }

    async fn count(&self, predicates: &[Predicate<TopicField>]) -> DomainResult<u64> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("SELECT COUNT(*) FROM topics");
        push_predicates(&mut builder, predicates);

        let total = builder
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        u64::try_from(total).map_err(|_| DomainError::Persistence("negative topic count".into()))
    }

    async fn find_by_id(&self, id: TopicId) -> DomainResult<Option<Topic>> {
        let row = sqlx::query_as::<_, TopicRow>(&format!(
            "SELECT {TOPIC_COLUMNS} FROM topics WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Topic::try_from).transpose()
    }

    async fn find_by_name(&self, name: &TopicName) -> DomainResult<Option<Topic>> {
        let row = sqlx::query_as::<_, TopicRow>(&format!(
            "SELECT {TOPIC_COLUMNS} FROM topics WHERE name = $1 LIMIT 1"
        ))
        .bind(name.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Topic::try_from).transpose()
    }
}
