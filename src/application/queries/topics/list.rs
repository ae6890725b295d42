use super::TopicQueryService;
use crate::{
    application::{
        dto::{Paginated, TopicDto},
        error::{ApplicationError, ApplicationResult},
        queries::within_deadline,
    },
    domain::{query::OrderBy, topic::TopicFilter},
};

#[derive(Debug, Clone, Default)]
pub struct FetchTopicsQuery {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub sort_by: Option<String>,
    pub sort_dir: Option<String>,
    pub page: i64,
    pub limit: i64,
}

impl TopicQueryService {
    pub async fn fetch_topics(
        &self,
        query: FetchTopicsQuery,
    ) -> ApplicationResult<Paginated<TopicDto>> {
        let order = OrderBy::parse(query.sort_by.as_deref(), query.sort_dir.as_deref())?;
        let plan = TopicFilter {
            id: query.id,
            name: query.name,
            order,
            page: query.page,
            limit: query.limit,
        }
        .into_plan()?;

        within_deadline(self.request_timeout, async {
            let (total, topics) = tokio::try_join!(
                self.read_repo.count(plan.count_predicates()),
                self.read_repo.fetch_page(&plan),
            )?;
            let data = topics.into_iter().map(TopicDto::from).collect();
            Ok::<_, ApplicationError>(Paginated::new(data, plan.window(), total))
        })
        .await
    }
}
