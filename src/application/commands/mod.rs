pub mod articles;
pub mod topics;
