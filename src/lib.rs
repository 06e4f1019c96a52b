//! ButtonVerse Library
//!
//! This library provides the core functionality of ButtonVerse: the catalog of
//! button style templates, the library builder that expands them into concrete
//! styles, the query filter, JSX snippets and the AI style generator.

// Module declarations
pub mod branding;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod generator;
pub mod models;
pub mod snippet;

#[cfg(feature = "web")]
pub mod web;
