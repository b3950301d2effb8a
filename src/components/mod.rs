//! UI Components
//!
//! Reusable Leptos components for the portal.

pub mod header;
pub mod loading;
pub mod sidebar;
pub mod status_badge;
pub mod toast;

pub use header::PageHeader;
pub use loading::Loading;
pub use sidebar::{AdminSidebar, CustomerSidebar};
pub use status_badge::StatusBadge;
pub use toast::Toast;
