//! # hearth-core
//!
//! Core types for the Hearth renovation portal.
//!
//! This crate provides the foundational types shared across all Hearth crates:
//! - Entity structs for the four domain objects (customer, project, milestone,
//!   project update)
//! - Closed status enums with display labels and fail-fast parsing
//! - Progress aggregation over a project's milestones
//! - Display-ordering rules shared by both data sources and the renderer
//! - The lightweight authenticated-user identity record

pub mod entities;
pub mod enums;
pub mod errors;
pub mod identity;
pub mod progress;
