//! Graph algorithms, as extension traits over [`crate::graph::Neighbors`].
mod traversal;
pub use self::traversal::*;
mod cycle;
pub use self::cycle::*;
mod components;
pub use self::components::*;
mod shortest_path;
pub use self::shortest_path::*;
