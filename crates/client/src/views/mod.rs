//! View components for the application.

pub mod home;

pub use home::Home;
