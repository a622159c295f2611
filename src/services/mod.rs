pub mod plan;
pub mod sync_service;

pub use plan::{CourseScope, SyncPlan, SyncStep};
pub use sync_service::{SyncService, SyncStats};
