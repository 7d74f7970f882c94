//! The two graph types and the traits algorithms see them through.
//!
//! # Low-level vertices
//!
//! Algorithms in [`crate::algorithm`] never touch labels.
//! They walk graphs through [`Neighbors`], whose vertices are lightweight `Copy` handles:
//! plain `usize` for [`DirectedGraph`] and [`VertexId`] for the adjacency lists under
//! [`UndirectedGraph`].
//! Algorithm authors may feel free to copy, hash and store them.
//!
//! [`UndirectedGraph`] keeps a 1-1 mapping between its labels and `VertexId`'s,
//! so label-level calls are translated down, run, and translated back up.

mod vertex;
pub use self::vertex::*;
mod edge;
pub use self::edge::*;
mod r#trait;
pub use self::r#trait::*;

pub mod directed;
pub use self::directed::DirectedGraph;
pub mod undirected;
pub use self::undirected::UndirectedGraph;
