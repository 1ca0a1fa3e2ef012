//! # forum-core
//!
//! Core types and error types for the forum.
//!
//! This crate provides the foundational types shared across all forum crates:
//! - Records for questions, answers, and guest submissions
//! - Fixed enumerated sets (categories, tags, filters, sort orders)
//! - `Selector<T>` for "all or one" filter-bar choices
//! - Moderation status state machine
//! - Relative age labels
//! - Cross-cutting error types

pub mod age;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod selector;
