// src/application/commands/topics/delete.rs
use super::TopicCommandService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::topic::TopicId,
};
use tracing::info;

pub struct DeleteTopicCommand {
    pub id: i64,
}

impl TopicCommandService {
    pub async fn delete_topic(&self, command: DeleteTopicCommand) -> ApplicationResult<()> {
        let id = TopicId::new(command.id)?;
        self.read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found(format!("topic {id} not found")))?;

        self.associations.detach_topic(id).await?;
        self.write_repo.delete(id).await?;
        info!(topic_id = %id, "topic deleted");
        Ok(())
    }
}
