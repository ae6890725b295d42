// tests/support/mocks/links.rs
use super::LookupBehaviour;
use async_trait::async_trait;
use newsdesk_core::domain::article::ArticleId;
use newsdesk_core::domain::association::{ArticleTopic, ArticleTopicRepository};
use newsdesk_core::domain::errors::{DomainError, DomainResult};
use newsdesk_core::domain::topic::TopicId;
use std::collections::BTreeSet;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// Association store. `lookups` governs `find_by_article`, keyed by article id.
#[derive(Default)]
pub struct InMemoryArticleTopics {
    rows: Mutex<BTreeSet<(i64, i64)>>,
    stale: Mutex<BTreeSet<(i64, i64)>>,
    failing_topic: Mutex<Option<TopicId>>,
    fail_bulk_delete: AtomicBool,
    pub lookups: LookupBehaviour,
    pub inserts: AtomicUsize,
    pub bulk_deletes: AtomicUsize,
}

impl InMemoryArticleTopics {
    pub fn link(&self, article_id: i64, topic_id: i64) {
        self.rows.lock().unwrap().insert((article_id, topic_id));
    }

    /// Topic ids linked to an article, ascending.
    pub fn topics_of(&self, article_id: i64) -> Vec<i64> {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .filter(|(a, _)| *a == article_id)
            .map(|(_, t)| *t)
            .collect()
    }

    pub fn articles_of(&self, topic_id: i64) -> Vec<i64> {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .filter(|(_, t)| *t == topic_id)
            .map(|(a, _)| *a)
            .collect()
    }

    /// Make every insert of a link to `topic_id` fail.
    pub fn fail_inserts_for(&self, topic_id: i64) {
        *self.failing_topic.lock().unwrap() = Some(TopicId(topic_id));
    }

    /// Report a link from `find_by_topic` that no longer exists, as a read
    /// racing with a concurrent clear would.
    pub fn stale_link(&self, article_id: i64, topic_id: i64) {
        self.stale.lock().unwrap().insert((article_id, topic_id));
    }

    pub fn fail_bulk_deletes(&self) {
        self.fail_bulk_delete.store(true, Ordering::SeqCst);
    }

    pub fn inserts(&self) -> usize {
        self.inserts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ArticleTopicRepository for InMemoryArticleTopics {
    async fn find_by_article(&self, article_id: ArticleId) -> DomainResult<Vec<ArticleTopic>> {
        self.lookups.enter(article_id.0).await?;
        Ok(self
            .topics_of(article_id.0)
            .into_iter()
            .map(|t| ArticleTopic::new(article_id, TopicId(t)))
            .collect())
    }

    async fn find_by_topic(&self, topic_id: TopicId) -> DomainResult<Vec<ArticleTopic>> {
        let stale = self
            .stale
            .lock()
            .unwrap()
            .iter()
            .filter(|(_, t)| *t == topic_id.0)
            .map(|(a, _)| *a)
            .collect::<Vec<_>>();
        Ok(self
            .articles_of(topic_id.0)
            .into_iter()
            .chain(stale)
            .map(|a| ArticleTopic::new(ArticleId(a), topic_id))
            .collect())
    }

    async fn insert(&self, link: ArticleTopic) -> DomainResult<()> {
        self.inserts.fetch_add(1, Ordering::SeqCst);
        if *self.failing_topic.lock().unwrap() == Some(link.topic_id) {
            return Err(DomainError::Persistence(format!(
                "injected failure linking topic {}",
                link.topic_id
            )));
        }
        let fresh = self
            .rows
            .lock()
            .unwrap()
            .insert((link.article_id.0, link.topic_id.0));
        if fresh {
            Ok(())
        } else {
            Err(DomainError::Conflict("article is already linked to topic".into()))
        }
    }

    async fn delete(&self, link: ArticleTopic) -> DomainResult<()> {
        let removed = self
            .rows
            .lock()
            .unwrap()
            .remove(&(link.article_id.0, link.topic_id.0));
        if removed {
            Ok(())
        } else {
            Err(DomainError::NotFound(format!(
                "article {} is not linked to topic {}",
                link.article_id, link.topic_id
            )))
        }
    }

    async fn delete_by_article(&self, article_id: ArticleId) -> DomainResult<u64> {
        self.bulk_deletes.fetch_add(1, Ordering::SeqCst);
        if self.fail_bulk_delete.load(Ordering::SeqCst) {
            return Err(DomainError::Persistence("injected bulk delete failure".into()));
        }
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|(a, _)| *a != article_id.0);
        Ok((before - rows.len()) as u64)
    }

    async fn delete_by_topic(&self, topic_id: TopicId) -> DomainResult<u64> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|(_, t)| *t != topic_id.0);
        Ok((before - rows.len()) as u64)
    }
}
