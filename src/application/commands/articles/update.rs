// src/application/commands/articles/update.rs
use super::ArticleCommandService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::{
        article::{ArticleContent, ArticleId, ArticleStatus, ArticleTitle, ArticleUpdate},
        author::AuthorId,
        topic::TopicId,
    },
};
use tracing::info;

/// Partial update. `topic_ids: Some(vec![])` clears every topic; `None`
/// leaves the association set alone.
#[derive(Debug, Default)]
pub struct UpdateArticleCommand {
    pub id: i64,
    pub title: Option<String>,
    pub content: Option<String>,
    pub status: Option<String>,
    pub author_id: Option<i64>,
    pub topic_ids: Option<Vec<i64>>,
}

impl ArticleCommandService {
    pub async fn update_article(&self, command: UpdateArticleCommand) -> ApplicationResult<()> {
        let id = ArticleId::new(command.id)?;
        self.read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found(format!("article {id} not found")))?;

        let UpdateArticleCommand {
            id: _,
            title,
            content,
            status,
            author_id,
            topic_ids,
        } = command;

        let mut update = ArticleUpdate::new(id, self.clock.now());
        if let Some(title) = title {
            update = update.with_title(ArticleTitle::new(title)?);
        }
        if let Some(content) = content {
            update = update.with_content(ArticleContent::new(content)?);
        }
        if let Some(status) = status {
            update = update.with_status(status.parse::<ArticleStatus>()?);
        }
        if let Some(author_id) = author_id {
            update = update.with_author(AuthorId::new(author_id)?);
        }
        let topic_ids = topic_ids
            .map(|ids| ids.into_iter().map(TopicId::new).collect::<Result<Vec<_>, _>>())
            .transpose()?;

        if let Some(topic_ids) = &topic_ids {
            self.associations.replace(id, topic_ids).await?;
        }

        self.write_repo.update(update).await?;
        info!(
            article_id = %id,
            topics_replaced = topic_ids.is_some(),
            "article updated"
        );
        Ok(())
    }
}
