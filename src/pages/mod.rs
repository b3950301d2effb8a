//! Pages
//!
//! Top-level page components for each route.

pub mod admin;
pub mod customer;
pub mod login;
pub mod signup;

pub use login::Login;
pub use signup::Signup;
