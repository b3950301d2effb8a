//! Admin Pages
//!
//! All admin views are gated by the session's admin flag.

pub mod billing;
pub mod charges;
pub mod customers;
pub mod dashboard;
pub mod requests;

pub use billing::AdminBilling;
pub use charges::AdminCharges;
pub use customers::AdminCustomers;
pub use dashboard::AdminDashboard;
pub use requests::AdminRequests;
