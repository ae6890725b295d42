use std::sync::Arc;
use std::time::Duration;

use crate::{application::enrichment::ArticleEnricher, domain::article::ArticleReadRepository};

pub struct ArticleQueryService {
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) enricher: Arc<ArticleEnricher>,
    pub(super) request_timeout: Duration,
}

impl ArticleQueryService {
    pub fn new(
        read_repo: Arc<dyn ArticleReadRepository>,
        enricher: Arc<ArticleEnricher>,
        request_timeout: Duration,
    ) -> Self {
        Self {
            read_repo,
            enricher,
            request_timeout,
        }
    }
}
