pub mod dashboard;
pub mod row;
pub mod summary;

pub use dashboard::{DashboardSummary, RemoteSummary, ReturnsPayload};
pub use row::{lookup_field, Row};
pub use summary::{Carrier, CarrierCounts, Summary};
