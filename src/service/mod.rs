pub mod aggregator;
pub mod carrier;
pub mod multiplier;
pub mod photos;
pub mod returns;

pub use aggregator::{aggregate, is_scan_row};
pub use carrier::classify_carrier;
pub use multiplier::{parse_multiplier, MAX_MULTIPLIER};
pub use photos::{PhotoProber, ProbeOutcome};
pub use returns::{DashboardService, ReturnsClient};
