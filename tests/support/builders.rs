// tests/support/builders.rs
use chrono::{DateTime, Utc};

use newsdesk_core::domain::article::*;
use newsdesk_core::domain::author::AuthorId;
use newsdesk_core::domain::topic::{Topic, TopicId, TopicName};

use super::mocks::fixed_now;

pub struct ArticleBuilder {
    id: i64,
    title: String,
    content: String,
    status: ArticleStatus,
    author_id: i64,
    created_at: DateTime<Utc>,
}

impl ArticleBuilder {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            title: format!("Article {id}"),
            content: "Body text".into(),
            status: ArticleStatus::Draft,
            author_id: 1,
            created_at: fixed_now(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn status(mut self, status: ArticleStatus) -> Self {
        self.status = status;
        self
    }

    pub fn author(mut self, author_id: i64) -> Self {
        self.author_id = author_id;
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub fn build(self) -> Article {
        Article {
            id: ArticleId::new(self.id).unwrap(),
            title: ArticleTitle::new(self.title).unwrap(),
            content: ArticleContent::new(self.content).unwrap(),
            status: self.status,
            author_id: AuthorId::new(self.author_id).unwrap(),
            created_at: self.created_at,
            updated_at: self.created_at,
        }
    }
}

pub fn topic(id: i64, name: &str) -> Topic {
    Topic {
        id: TopicId::new(id).unwrap(),
        name: TopicName::new(name).unwrap(),
        created_at: fixed_now(),
        updated_at: fixed_now(),
    }
}
