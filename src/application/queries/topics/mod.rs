mod get_by_id;
mod list;
mod service;

pub use get_by_id::GetTopicByIdQuery;
pub use list::FetchTopicsQuery;
pub use service::TopicQueryService;
