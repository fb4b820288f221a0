//! Shared types for the vacancy aggregator: the normalized posting record
//! and the JSON file store it is persisted in.

mod error;
mod posting;
mod store;

pub use error::{Error, Result};
pub use posting::PostingRecord;
pub use store::{JsonStore, TOP_LIMIT};
