//! Tabula: a single-user task board engine.
//!
//! This crate implements the task state model behind a small kanban-style
//! board: a canonical task list, the mutations that evolve it (create,
//! re-stage, comment), and the derivation pipeline that turns it into a
//! filtered, ordered, summarised view for a presentation layer.
//!
//! # Architecture
//!
//! Tabula follows hexagonal architecture principles:
//!
//! - **Domain**: Pure board logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (file storage, memory)
//! - **Services**: The board session orchestrating mutate, persist, and
//!   derive-view cycles
//!
//! # Modules
//!
//! - [`board`]: Task list mutations, filtering, ordering, and summaries

pub mod board;
