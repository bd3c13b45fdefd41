//! Serve a local folder of movies and series as a catalog/stream addon over HTTP.

pub mod addon;
pub mod cli;
pub mod config;
pub mod library;
