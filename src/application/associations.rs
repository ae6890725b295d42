// src/application/associations.rs
//! Keeps the article/topic join consistent with article and topic writes.
//!
//! None of these steps run inside a transaction. In particular `replace`
//! deletes and re-inserts separately, and a concurrent reader can observe the
//! intermediate state.
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::{
    article::ArticleId,
    association::{ArticleTopic, ArticleTopicRepository},
    topic::TopicId,
};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, warn};

pub struct TopicAssociationReconciler {
    repo: Arc<dyn ArticleTopicRepository>,
}

impl TopicAssociationReconciler {
    pub fn new(repo: Arc<dyn ArticleTopicRepository>) -> Self {
        Self { repo }
    }

    /// Link a freshly inserted article to its topics. A failure leaves the
    /// article in place and is reported as `IncompleteAssociations`.
    pub async fn attach(
        &self,
        article_id: ArticleId,
        topic_ids: &[TopicId],
    ) -> ApplicationResult<()> {
        self.insert_all(article_id, topic_ids)
            .await
            .map_err(|err| ApplicationError::IncompleteAssociations {
                article_id: article_id.into(),
                message: err.to_string(),
            })
    }

    /// Replace the article's topics with `topic_ids`. Clearing the old rows
    /// is best-effort; inserting the new ones is not.
    pub async fn replace(
        &self,
        article_id: ArticleId,
        topic_ids: &[TopicId],
    ) -> ApplicationResult<()> {
        match self.repo.delete_by_article(article_id).await {
            Ok(removed) => debug!(article_id = %article_id, removed, "cleared topic links"),
            Err(err) => warn!(
                article_id = %article_id,
                error = %err,
                "failed to clear topic links before update"
            ),
        }

        self.insert_all(article_id, topic_ids).await
    }

    /// Remove every link of an article ahead of deleting it.
    pub async fn detach_article(&self, article_id: ArticleId) -> ApplicationResult<()> {
        let removed = self.repo.delete_by_article(article_id).await?;
        debug!(article_id = %article_id, removed, "detached article from topics");
        Ok(())
    }

    /// Remove every link pointing at a topic ahead of deleting it. Links
    /// cleared concurrently by an article update are not an error.
    pub async fn detach_topic(&self, topic_id: TopicId) -> ApplicationResult<()> {
        let removed = self.repo.delete_by_topic(topic_id).await?;
        debug!(topic_id = %topic_id, removed, "detached topic from articles");
        Ok(())
    }

    async fn insert_all(
        &self,
        article_id: ArticleId,
        topic_ids: &[TopicId],
    ) -> ApplicationResult<()> {
        for topic_id in distinct(topic_ids) {
            self.repo
                .insert(ArticleTopic::new(article_id, topic_id))
                .await
                .map_err(|err| {
                    ApplicationError::from(err).with_context(format!(
                        "failed to link article {article_id} to topic {topic_id}"
                    ))
                })?;
        }
        Ok(())
    }
}

/// First occurrence wins, so the stored order follows the request.
fn distinct(topic_ids: &[TopicId]) -> Vec<TopicId> {
    let mut seen = HashSet::with_capacity(topic_ids.len());
    topic_ids
        .iter()
        .copied()
        .filter(|id| seen.insert(*id))
        .collect()
}
