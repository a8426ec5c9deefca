//! Output stage: the server JSON and the operator summary.
pub mod json;
pub mod summary;
