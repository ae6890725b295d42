// tests/support/mocks/topics.rs
use super::LookupBehaviour;
use super::plan::{count_matching, run_plan};
use async_trait::async_trait;
use newsdesk_core::domain::errors::{DomainError, DomainResult};
use newsdesk_core::domain::query::{Predicate, QueryPlan};
use newsdesk_core::domain::topic::{
    NewTopic, Topic, TopicField, TopicId, TopicName, TopicReadRepository, TopicUpdate,
    TopicWriteRepository,
};
use std::collections::BTreeMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};

/// Topic store implementing both ports. `lookups` governs `find_by_id`.
pub struct InMemoryTopics {
    rows: Mutex<BTreeMap<TopicId, Topic>>,
    next_id: AtomicI64,
    pub lookups: LookupBehaviour,
    pub inserts: AtomicUsize,
    pub deletes: AtomicUsize,
}

impl Default for InMemoryTopics {
    fn default() -> Self {
        Self {
            rows: Mutex::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
            lookups: LookupBehaviour::default(),
            inserts: AtomicUsize::new(0),
            deletes: AtomicUsize::new(0),
        }
    }
}

impl InMemoryTopics {
    pub fn seed(&self, topic: Topic) {
        self.next_id.fetch_max(topic.id.0 + 1, Ordering::SeqCst);
        self.rows.lock().unwrap().insert(topic.id, topic);
    }

    pub fn get(&self, id: i64) -> Option<Topic> {
        self.rows.lock().unwrap().get(&TopicId(id)).cloned()
    }

    pub fn inserts(&self) -> usize {
        self.inserts.load(Ordering::SeqCst)
    }

    fn snapshot(&self) -> Vec<Topic> {
        self.rows.lock().unwrap().values().cloned().collect()
    }
}

#[async_trait]
impl TopicWriteRepository for InMemoryTopics {
    async fn insert(&self, topic: NewTopic) -> DomainResult<Topic> {
        self.inserts.fetch_add(1, Ordering::SeqCst);
        let id = TopicId(self.next_id.fetch_add(1, Ordering::SeqCst));
        let stored = Topic {
            id,
            name: topic.name,
            created_at: topic.created_at,
            updated_at: topic.updated_at,
        };
        self.rows.lock().unwrap().insert(id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, update: TopicUpdate) -> DomainResult<Topic> {
        let mut rows = self.rows.lock().unwrap();
        let topic = rows
            .get_mut(&update.id)
            .ok_or_else(|| DomainError::NotFound(format!("topic {} not found", update.id)))?;
        update.apply_to(topic);
        Ok(topic.clone())
    }

    async fn delete(&self, id: TopicId) -> DomainResult<()> {
        self.deletes.fetch_add(1, Ordering::SeqCst);
        self.rows
            .lock()
            .unwrap()
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound(format!("topic {id} not found")))
    }
}

#[async_trait]
impl TopicReadRepository for InMemoryTopics {
    async fn fetch_page(&self, plan: &QueryPlan<TopicField>) -> DomainResult<Vec<Topic>> {
        Ok(run_plan(self.snapshot(), plan))
    }

    async fn count(&self, predicates: &[Predicate<TopicField>]) -> DomainResult<u64> {
        Ok(count_matching(&self.snapshot(), predicates))
    }

    async fn find_by_id(&self, id: TopicId) -> DomainResult<Option<Topic>> {
        self.lookups.enter(id.0).await?;
        Ok(self.rows.lock().unwrap().get(&id).cloned())
    }

    async fn find_by_name(&self, name: &TopicName) -> DomainResult<Option<Topic>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .values()
            .find(|topic| topic.name == *name)
            .cloned())
    }
}
