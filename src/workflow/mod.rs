pub mod allocation_flow;
pub mod allocation_request;

pub use allocation_flow::{save_report, seating_stats, AllocationFlow};
pub use allocation_request::{AllocationRequest, SeatingReport, SeatingStats};
