use super::WeightedEdge;
use std::{fmt::Debug, hash::Hash};

/// The view every algorithm in [`crate::algorithm`] walks a graph through.
pub trait Neighbors {
    type Vertex: Copy + Eq + Hash + Debug;

    fn vertex_size(&self) -> usize;
    fn iter_vertices(&self) -> Box<dyn Iterator<Item = Self::Vertex> + '_>;
    fn contains_vertex(&self, v: &Self::Vertex) -> bool;
    /// Successors of `v`, smallest first. Empty for unknown vertices.
    fn sorted_neighbors(&self, v: &Self::Vertex) -> Vec<Self::Vertex>;
    /// Whether an edge leads from `from` to `to`. False if either is unknown.
    fn is_adjacent(&self, from: &Self::Vertex, to: &Self::Vertex) -> bool;
}

/// Graphs over dense `usize` vertices whose edges carry weights.
pub trait WeightedGraph: Neighbors<Vertex = usize> {
    fn weighted_out_edges(&self, v: usize) -> Box<dyn Iterator<Item = WeightedEdge> + '_>;
}

pub trait DirectedOrNot {
    const DIRECTED_OR_NOT: bool;
}
