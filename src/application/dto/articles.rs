use crate::application::enrichment::EnrichedArticle;
use crate::domain::author::Author;
use crate::domain::topic::Topic;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AuthorDto {
    pub id: i64,
    pub name: String,
}

impl From<Author> for AuthorDto {
    fn from(author: Author) -> Self {
        Self {
            id: author.id.into(),
            name: author.name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TopicSummaryDto {
    pub id: i64,
    pub name: String,
}

impl From<Topic> for TopicSummaryDto {
    fn from(topic: Topic) -> Self {
        Self {
            id: topic.id.into(),
            name: topic.name.into_inner(),
        }
    }
}

/// Article with its author and topics resolved.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleDto {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub status: String,
    pub author: AuthorDto,
    pub topics: Vec<TopicSummaryDto>,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
}

impl From<EnrichedArticle> for ArticleDto {
    fn from(enriched: EnrichedArticle) -> Self {
        let EnrichedArticle {
            article,
            author,
            topics,
        } = enriched;
        Self {
            id: article.id.into(),
            title: article.title.into_inner(),
            content: article.content.into_inner(),
            status: article.status.to_string(),
            author: author.into(),
            topics: topics.into_iter().map(Into::into).collect(),
            created_at: article.created_at,
            updated_at: article.updated_at,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CreatedDto {
    pub id: i64,
}
