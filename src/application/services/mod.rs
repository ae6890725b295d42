// src/application/services/mod.rs
use std::sync::Arc;
use std::time::Duration;

use crate::{
    application::{
        associations::TopicAssociationReconciler,
        commands::{articles::ArticleCommandService, topics::TopicCommandService},
        enrichment::ArticleEnricher,
        ports::time::Clock,
        queries::{articles::ArticleQueryService, topics::TopicQueryService},
    },
    domain::{
        article::{ArticleReadRepository, ArticleWriteRepository},
        association::ArticleTopicRepository,
        author::AuthorRepository,
        topic::{TopicReadRepository, TopicWriteRepository},
    },
};

/// Tunables shared by every service.
#[derive(Debug, Clone, Copy)]
pub struct ServiceSettings {
    pub request_timeout: Duration,
    pub enrichment_max_in_flight: usize,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(30),
            enrichment_max_in_flight: 16,
        }
    }
}

/// Store handles the services are wired from.
#[derive(Clone)]
pub struct Repositories {
    pub article_write: Arc<dyn ArticleWriteRepository>,
    pub article_read: Arc<dyn ArticleReadRepository>,
    pub authors: Arc<dyn AuthorRepository>,
    pub topic_write: Arc<dyn TopicWriteRepository>,
    pub topic_read: Arc<dyn TopicReadRepository>,
    pub article_topics: Arc<dyn ArticleTopicRepository>,
}

pub struct ApplicationServices {
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
    pub topic_commands: Arc<TopicCommandService>,
    pub topic_queries: Arc<TopicQueryService>,
}

impl ApplicationServices {
    pub fn new(repos: Repositories, clock: Arc<dyn Clock>, settings: ServiceSettings) -> Self {
        let associations = Arc::new(TopicAssociationReconciler::new(Arc::clone(
            &repos.article_topics,
        )));

        let enricher = Arc::new(ArticleEnricher::new(
            Arc::clone(&repos.authors),
            Arc::clone(&repos.topic_read),
            Arc::clone(&repos.article_topics),
            settings.enrichment_max_in_flight,
        ));

        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&repos.article_write),
            Arc::clone(&repos.article_read),
            Arc::clone(&associations),
            Arc::clone(&clock),
        ));
        let article_queries = Arc::new(ArticleQueryService::new(
            Arc::clone(&repos.article_read),
            enricher,
            settings.request_timeout,
        ));

        let topic_commands = Arc::new(TopicCommandService::new(
            Arc::clone(&repos.topic_write),
            Arc::clone(&repos.topic_read),
            associations,
            clock,
        ));
        let topic_queries = Arc::new(TopicQueryService::new(
            Arc::clone(&repos.topic_read),
            settings.request_timeout,
        ));

        Self {
            article_commands,
            article_queries,
            topic_commands,
            topic_queries,
        }
    }
}
