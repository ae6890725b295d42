pub mod article;
pub mod association;
pub mod author;
pub mod errors;
pub mod query;
pub mod topic;
