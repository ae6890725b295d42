pub mod associations;
pub mod commands;
pub mod dto;
pub mod enrichment;
pub mod error;
pub mod ports;
pub mod queries;
pub mod services;

pub use error::ApplicationResult;
