//! Transcript normalization, caching, and AI companion pipeline.
//!
//! The crate turns a video's raw transcript into timed, chapter-flagged
//! segments, caches them behind repository ports, and derives a localized
//! summary plus a set of quick-start questions through pluggable LLM ports.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
