//! Unit tests for the board module.
//!
//! Tests are organised by pipeline step, covering happy paths, degradation
//! paths, and edge cases for all public APIs.

mod support;
