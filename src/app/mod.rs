pub mod api;
#[cfg(feature = "cli")]
pub mod commands;
