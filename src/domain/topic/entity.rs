use crate::domain::topic::value_objects::{TopicId, TopicName};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topic {
    pub id: TopicId,
    pub name: TopicName,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewTopic {
    pub name: TopicName,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct TopicUpdate {
    pub id: TopicId,
    pub name: Option<TopicName>,
    pub updated_at: DateTime<Utc>,
}

impl TopicUpdate {
    pub fn new(id: TopicId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: None,
            updated_at,
        }
    }

    pub fn with_name(mut self, name: TopicName) -> Self {
        self.name = Some(name);
        self
    }

    pub fn apply_to(&self, topic: &mut Topic) {
        if let Some(name) = &self.name {
            topic.name = name.clone();
        }
        topic.updated_at = self.updated_at;
    }
}
