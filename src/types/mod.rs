pub mod config;
pub mod intake;
pub mod profile;
pub mod report;
pub mod scoring;
