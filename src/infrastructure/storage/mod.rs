mod local_store;
mod retention;

pub use local_store::LocalStagingStore;
pub use retention::spawn_retention_sweeper;
