// tests/support/mocks/articles.rs
use super::plan::{count_matching, run_plan};
use async_trait::async_trait;
use newsdesk_core::domain::article::{
    Article, ArticleField, ArticleId, ArticleReadRepository, ArticleTitle, ArticleUpdate,
    ArticleWriteRepository, NewArticle,
};
use newsdesk_core::domain::errors::{DomainError, DomainResult};
use newsdesk_core::domain::query::{Predicate, QueryPlan};
use std::collections::BTreeMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};
use std::time::Duration;

/// Article store implementing both the read and the write port.
pub struct InMemoryArticles {
    rows: Mutex<BTreeMap<ArticleId, Article>>,
    next_id: AtomicI64,
    read_delay: Mutex<Option<Duration>>,
    pub inserts: AtomicUsize,
    pub updates: AtomicUsize,
    pub deletes: AtomicUsize,
    pub counts: AtomicUsize,
    pub fetches: AtomicUsize,
}

impl Default for InMemoryArticles {
    fn default() -> Self {
        Self {
            rows: Mutex::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
            read_delay: Mutex::new(None),
            inserts: AtomicUsize::new(0),
            updates: AtomicUsize::new(0),
            deletes: AtomicUsize::new(0),
            counts: AtomicUsize::new(0),
            fetches: AtomicUsize::new(0),
        }
    }
}

impl InMemoryArticles {
    pub fn seed(&self, article: Article) {
        self.next_id
            .fetch_max(article.id.0 + 1, Ordering::SeqCst);
        self.rows.lock().unwrap().insert(article.id, article);
    }

    pub fn get(&self, id: i64) -> Option<Article> {
        self.rows.lock().unwrap().get(&ArticleId(id)).cloned()
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    /// Delay applied to `count` and `fetch_page`.
    pub fn slow_reads(&self, delay: Duration) {
        *self.read_delay.lock().unwrap() = Some(delay);
    }

    pub fn inserts(&self) -> usize {
        self.inserts.load(Ordering::SeqCst)
    }

    fn snapshot(&self) -> Vec<Article> {
        self.rows.lock().unwrap().values().cloned().collect()
    }

    async fn read_pause(&self) {
        let delay = *self.read_delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryArticles {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        self.inserts.fetch_add(1, Ordering::SeqCst);
        let id = ArticleId(self.next_id.fetch_add(1, Ordering::SeqCst));
        let stored = Article {
            id,
            title: article.title,
            content: article.content,
            status: article.status,
            author_id: article.author_id,
            created_at: article.created_at,
            updated_at: article.updated_at,
        };
        self.rows.lock().unwrap().insert(id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        self.updates.fetch_add(1, Ordering::SeqCst);
        let mut rows = self.rows.lock().unwrap();
        let article = rows
            .get_mut(&update.id)
            .ok_or_else(|| DomainError::NotFound(format!("article {} not found", update.id)))?;
        update.apply_to(article);
        Ok(article.clone())
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        self.deletes.fetch_add(1, Ordering::SeqCst);
        self.rows
            .lock()
            .unwrap()
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound(format!("article {id} not found")))
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryArticles {
    async fn fetch_page(&self, plan: &QueryPlan<ArticleField>) -> DomainResult<Vec<Article>> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.read_pause().await;
        Ok(run_plan(self.snapshot(), plan))
    }

    async fn count(&self, predicates: &[Predicate<ArticleField>]) -> DomainResult<u64> {
        self.counts.fetch_add(1, Ordering::SeqCst);
        self.read_pause().await;
        Ok(count_matching(&self.snapshot(), predicates))
    }

    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        Ok(self.rows.lock().unwrap().get(&id).cloned())
    }

    async fn find_by_title(&self, title: &ArticleTitle) -> DomainResult<Option<Article>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .values()
            .find(|article| article.title == *title)
            .cloned())
    }
}
