// src/application/enrichment.rs
//! Resolves the author and topics of a page of articles.
//!
//! Each dimension fans out one lookup per distinct key, bounded to
//! `max_in_flight` concurrent requests, and fans the completions back into a
//! keyed map drained by a single consumer. The first failed lookup ends the
//! drain; dropping the stream cancels every lookup still in flight, so a
//! failed pass never yields partially resolved records.
//!
//! Topics take two stages: association rows must be read before the topic
//! ids they reference are known.
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::{
    article::{Article, ArticleId},
    association::ArticleTopicRepository,
    author::{Author, AuthorId, AuthorRepository},
    topic::{Topic, TopicId, TopicReadRepository},
};
use futures::stream::{self, StreamExt, TryStreamExt};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct EnrichedArticle {
    pub article: Article,
    pub author: Author,
    pub topics: Vec<Topic>,
}

pub struct ArticleEnricher {
    author_repo: Arc<dyn AuthorRepository>,
    topic_repo: Arc<dyn TopicReadRepository>,
    association_repo: Arc<dyn ArticleTopicRepository>,
    max_in_flight: usize,
}

impl ArticleEnricher {
    pub fn new(
        author_repo: Arc<dyn AuthorRepository>,
        topic_repo: Arc<dyn TopicReadRepository>,
        association_repo: Arc<dyn ArticleTopicRepository>,
        max_in_flight: usize,
    ) -> Self {
        Self {
            author_repo,
            topic_repo,
            association_repo,
            max_in_flight: max_in_flight.max(1),
        }
    }

    /// Output order matches input order.
    pub async fn enrich(
        &self,
        articles: Vec<Article>,
    ) -> ApplicationResult<Vec<EnrichedArticle>> {
        if articles.is_empty() {
            return Ok(Vec::new());
        }

        let authors = self.resolve_authors(&articles).await?;
        let (links, topics) = self.resolve_topics(&articles).await?;
        debug!(
            articles = articles.len(),
            authors = authors.len(),
            topics = topics.len(),
            "enriched article batch"
        );

        articles
            .into_iter()
            .map(|article| -> ApplicationResult<EnrichedArticle> {
                let author = authors
                    .get(&article.author_id)
                    .cloned()
                    .ok_or_else(|| missing("author", article.author_id))?;
                let article_topics = links
                    .get(&article.id)
                    .map(|ids| {
                        ids.iter()
                            .map(|id| {
                                topics.get(id).cloned().ok_or_else(|| missing("topic", *id))
                            })
                            .collect::<ApplicationResult<Vec<_>>>()
                    })
                    .transpose()?
                    .unwrap_or_default();
                Ok(EnrichedArticle {
                    article,
                    author,
                    topics: article_topics,
                })
            })
            .collect()
    }

    async fn resolve_authors(
        &self,
        articles: &[Article],
    ) -> ApplicationResult<HashMap<AuthorId, Author>> {
        let ids: HashSet<AuthorId> = articles.iter().map(|a| a.author_id).collect();
        stream::iter(ids)
            .map(|id| {
                let repo = Arc::clone(&self.author_repo);
                async move {
                    let author = repo
                        .find_by_id(id)
                        .await?
                        .ok_or_else(|| missing("author", id))?;
                    Ok::<_, ApplicationError>((id, author))
                }
            })
            .buffer_unordered(self.max_in_flight)
            .try_collect()
            .await
    }

    async fn resolve_topics(
        &self,
        articles: &[Article],
    ) -> ApplicationResult<(HashMap<ArticleId, Vec<TopicId>>, HashMap<TopicId, Topic>)> {
        let article_ids: HashSet<ArticleId> = articles.iter().map(|a| a.id).collect();
        let links: HashMap<ArticleId, Vec<TopicId>> = stream::iter(article_ids)
            .map(|article_id| {
                let repo = Arc::clone(&self.association_repo);
                async move {
                    let rows = repo.find_by_article(article_id).await?;
                    let topic_ids = rows.into_iter().map(|row| row.topic_id).collect::<Vec<_>>();
                    Ok::<_, ApplicationError>((article_id, topic_ids))
                }
            })
            .buffer_unordered(self.max_in_flight)
            .try_collect()
            .await?;

        let topic_ids: HashSet<TopicId> = links.values().flatten().copied().collect();
        let topics: HashMap<TopicId, Topic> = stream::iter(topic_ids)
            .map(|id| {
                let repo = Arc::clone(&self.topic_repo);
                async move {
                    let topic = repo
                        .find_by_id(id)
                        .await?
                        .ok_or_else(|| missing("topic", id))?;
                    Ok::<_, ApplicationError>((id, topic))
                }
            })
            .buffer_unordered(self.max_in_flight)
            .try_collect()
            .await?;

        Ok((links, topics))
    }
}

/// A referenced record that the store reports as absent is a broken
/// reference, not a client error.
fn missing(kind: &str, id: impl std::fmt::Display) -> ApplicationError {
    ApplicationError::infrastructure(format!("{kind} {id} referenced by article is missing"))
}
