// src/application/commands/topics/create.rs
use super::TopicCommandService;
use crate::{
    application::{
        dto::CreatedDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::topic::{NewTopic, TopicName},
};
use tracing::info;

pub struct CreateTopicCommand {
    pub name: String,
}

impl TopicCommandService {
    pub async fn create_topic(&self, command: CreateTopicCommand) -> ApplicationResult<CreatedDto> {
        let name = TopicName::new(command.name)?;
        if self.read_repo.find_by_name(&name).await?.is_some() {
            return Err(ApplicationError::conflict(format!(
                "topic named \"{name}\" already exists"
            )));
        }

        let now = self.clock.now();
        let created = self
            .write_repo
            .insert(NewTopic {
                name,
                created_at: now,
                updated_at: now,
            })
            .await?;
        info!(topic_id = %created.id, "topic created");

        Ok(CreatedDto {
            id: created.id.into(),
        })
    }
}
