// src/application/commands/topics/update.rs
use super::TopicCommandService;
use crate::{
    application::error::ApplicationResult,
    domain::topic::{TopicId, TopicName, TopicUpdate},
};
use tracing::info;

#[derive(Debug, Default)]
pub struct UpdateTopicCommand {
    pub id: i64,
    pub name: Option<String>,
}

impl TopicCommandService {
    /// A missing row surfaces as `NotFound` from the store.
    pub async fn update_topic(&self, command: UpdateTopicCommand) -> ApplicationResult<()> {
        let id = TopicId::new(command.id)?;
        let mut update = TopicUpdate::new(id, self.clock.now());
        if let Some(name) = command.name {
            update = update.with_name(TopicName::new(name)?);
        }

        self.write_repo.update(update).await?;
        info!(topic_id = %id, "topic updated");
        Ok(())
    }
}
