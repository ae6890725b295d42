use super::TopicQueryService;
use crate::{
    application::{
        dto::TopicDto,
        error::{ApplicationError, ApplicationResult},
        queries::within_deadline,
    },
    domain::topic::TopicId,
};

pub struct GetTopicByIdQuery {
    pub id: i64,
}

impl TopicQueryService {
    pub async fn get_topic_by_id(&self, query: GetTopicByIdQuery) -> ApplicationResult<TopicDto> {
        let id = TopicId::new(query.id)?;
        within_deadline(self.request_timeout, async {
            self.read_repo
                .find_by_id(id)
                .await?
                .map(TopicDto::from)
                .ok_or_else(|| ApplicationError::not_found(format!("topic {id} not found")))
        })
        .await
    }
}
