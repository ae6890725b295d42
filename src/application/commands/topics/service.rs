// src/application/commands/topics/service.rs
use std::sync::Arc;

use crate::{
    application::{associations::TopicAssociationReconciler, ports::time::Clock},
    domain::topic::{TopicReadRepository, TopicWriteRepository},
};

pub struct TopicCommandService {
    pub(super) write_repo: Arc<dyn TopicWriteRepository>,
    pub(super) read_repo: Arc<dyn TopicReadRepository>,
    pub(super) associations: Arc<TopicAssociationReconciler>,
    pub(super) clock: Arc<dyn Clock>,
}

impl TopicCommandService {
    pub fn new(
        write_repo: Arc<dyn TopicWriteRepository>,
        read_repo: Arc<dyn TopicReadRepository>,
        associations: Arc<TopicAssociationReconciler>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            associations,
            clock,
        }
    }
}
