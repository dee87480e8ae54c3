pub mod calc;
pub mod completions;
pub mod config;
pub mod init;
pub mod profile;
pub mod progress;
pub mod reset;
pub mod status;
pub mod weight;
