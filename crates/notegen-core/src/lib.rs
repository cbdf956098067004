//! Notegen Core Library
//!
//! Domain logic for the notegen note-taking helper: project layout,
//! note scanning, the keyword glossary and its reconciliation, title
//! sanitization, and transcript retrieval.

pub mod error;
pub mod glossary;
pub mod logging;
pub mod project;
pub mod sanitize;
pub mod scan;
pub mod sync;
pub mod transcript;
pub mod video;
pub mod websites;
