pub mod config;
pub mod core;
pub mod desk;
pub mod error;
pub mod models;
pub mod preview;
pub mod store;
pub mod submission;
#[cfg(test)]
pub mod test_helpers;
