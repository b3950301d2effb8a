//! Customer Pages
//!
//! All customer views are gated by the session's customer id.

pub mod dashboard;
pub mod meters;
pub mod profile;
pub mod transactions;

pub use dashboard::CustomerDashboard;
pub use meters::CustomerMeters;
pub use profile::CustomerProfile;
pub use transactions::CustomerTransactions;
