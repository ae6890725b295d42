// src/application/commands/articles/delete.rs
use super::ArticleCommandService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::article::ArticleId,
};
use tracing::info;

pub struct DeleteArticleCommand {
    pub id: i64,
}

impl ArticleCommandService {
    /// Hard delete. Topic links go first so no association outlives its article.
    pub async fn delete_article(&self, command: DeleteArticleCommand) -> ApplicationResult<()> {
        let id = ArticleId::new(command.id)?;
        self.read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found(format!("article {id} not found")))?;

        self.associations.detach_article(id).await?;
        self.write_repo.delete(id).await?;
        info!(article_id = %id, "article deleted");
        Ok(())
    }
}
