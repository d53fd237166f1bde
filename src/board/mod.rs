//! Board state management for Tabula.
//!
//! This module owns the canonical task list and everything derived from it:
//! creating tasks from raw drafts, moving tasks between workflow stages,
//! appending comments, filtering the visible subset, ordering tasks within a
//! stage, and summarising per-stage counts. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
