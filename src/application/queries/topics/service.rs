use std::sync::Arc;
use std::time::Duration;

use crate::domain::topic::TopicReadRepository;

pub struct TopicQueryService {
    pub(super) read_repo: Arc<dyn TopicReadRepository>,
    pub(super) request_timeout: Duration,
}

impl TopicQueryService {
    pub fn new(read_repo: Arc<dyn TopicReadRepository>, request_timeout: Duration) -> Self {
        Self {
            read_repo,
            request_timeout,
        }
    }
}
