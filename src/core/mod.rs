//! Core library modules for route-ranker
//!
//! Loading, ranking, prompting and selection, each usable on its own.

pub mod config;
pub mod error;
pub mod loader;
pub mod prompt;
pub mod ranker;
pub mod route;
pub mod selector;
