pub mod fixtures;
pub mod pagination;
pub mod record_store;
