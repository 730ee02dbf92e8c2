// src/dag/mod.rs

//! Task-dependency graph representation and exterior classification.
//!
//! - [`graph`] holds the forward-edge DAG the mutation processes operate on.
//! - [`exterior`] classifies initial/terminal vertices and checks targets.

pub mod exterior;
pub mod graph;

pub use exterior::{Exterior, exterior_vertices, is_xy_tdg};
pub use graph::Tdg;
