//! Conversions into `petgraph` graphs, to reach the algorithms this crate does not carry.
//!
//! Node indices follow vertex order, so vertex `i` of a [`DirectedGraph`] becomes `NodeIndex::new(i)`.
use crate::graph::*;
use ahash::RandomState;
use petgraph::graph::{Graph, NodeIndex, UnGraph};
use std::{collections::HashMap, hash::Hash};

impl From<&DirectedGraph> for Graph<usize, Weight> {
    fn from(g: &DirectedGraph) -> Self {
        let mut res = Graph::with_capacity(g.vertex_size(), g.edge_size());
        let nodes: Vec<NodeIndex> = g.iter_vertices().map(|v| res.add_node(v)).collect();
        for e in g.iter_edges() {
            res.add_edge(nodes[e.source], nodes[e.sink], e.weight);
        }
        res
    }
}

impl<V> From<&UndirectedGraph<V>> for UnGraph<V, ()>
where
    V: Hash + Eq + Ord + Clone,
{
    fn from(g: &UndirectedGraph<V>) -> Self {
        let mut res = UnGraph::with_capacity(g.vertex_size(), g.edge_size());
        let mut nodes = HashMap::with_hasher(RandomState::new());
        for v in g.iter_vertices() {
            nodes.insert(v, res.add_node(v.clone()));
        }
        for (u, v) in g.iter_edges() {
            if let (Some(a), Some(b)) = (nodes.get(u), nodes.get(v)) {
                res.add_edge(*a, *b, ());
            }
        }
        res
    }
}
