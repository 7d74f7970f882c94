//! Two small graph types and the algorithms over them.
//!
//! * [`graph::DirectedGraph`] is a positively-weighted digraph over dense `usize` vertices,
//!   backed by an adjacency matrix.
//! * [`graph::UndirectedGraph`] is an unweighted graph over arbitrary labels,
//!   backed by adjacency lists.
//!
//! Mutations are permissive: invalid requests such as self-loops or unknown vertices
//! are ignored. Each of them has a strict `try_*` twin that reports a [`GraphError`] instead.
//!
//! Traversals, cycle detection, connectivity and shortest paths live in [`algorithm`]
//! as extension traits, which [`graph::DirectedGraph`] picks up directly.
//! [`graph::UndirectedGraph`] offers them as label-level methods.
//!
//! ```rust
//! use duograph::{algorithm::*, graph::*};
//!
//! let g = DirectedGraph::from_edges(vec![(0, 1, 10), (1, 2, 5), (0, 2, 20)]);
//! let trial: Vec<_> = g.dijkstra(0).iter().map(|d| d.finite()).collect();
//! assert_eq!(trial, vec![Some(0), Some(10), Some(15)]);
//! assert_eq!(g.dfs(0, None), vec![0, 1, 2]);
//! assert!(!g.has_cycle());
//! ```
pub mod algorithm;
mod error;
pub use self::error::*;
pub mod graph;
pub mod interop;
