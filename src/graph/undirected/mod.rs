//! The labelled undirected graph and the adjacency lists under it.
mod adjacent_list;
pub use self::adjacent_list::*;
mod labelled;
pub use self::labelled::*;

#[cfg(test)]
pub use self::tests::*;
