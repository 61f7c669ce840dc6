//! Report module - fund versus holdings comparison pipeline.

mod report_model;
mod report_service;

pub use report_model::*;
pub use report_service::*;
