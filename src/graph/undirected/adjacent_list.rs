use crate::{graph::*, GraphError, GraphResult};
use std::collections::BTreeMap;

/// Adjacency lists of a simple undirected graph over [`VertexId`]'s.
///
/// Each list keeps neighbours in the order their edges were added.
/// Iterations over vertices are in the order of insertion, since ids only grow.
#[derive(Debug, Clone, Default)]
pub struct AdjacentListGraph {
    vid_factory: VertexIdFactory,
    adjacency: BTreeMap<VertexId, Vec<VertexId>>,
}

impl DirectedOrNot for AdjacentListGraph {
    const DIRECTED_OR_NOT: bool = false;
}

impl AdjacentListGraph {
    pub fn new() -> Self {
        Self {
            vid_factory: VertexIdFactory::new(),
            adjacency: BTreeMap::new(),
        }
    }

    pub fn add_vertex(&mut self) -> VertexId {
        let vid = self.vid_factory.one_more();
        self.adjacency.insert(vid, vec![]);
        vid
    }

    pub fn add_edge(&mut self, a: VertexId, b: VertexId) -> GraphResult<()> {
        if a == b {
            return Err(GraphError::SelfLoop);
        }
        if !self.contains_vertex(&a) || !self.contains_vertex(&b) {
            return Err(GraphError::MissingVertex);
        }
        if self.contains_edge(&a, &b) {
            return Err(GraphError::DuplicateEdge);
        }
        self.adjacency.entry(a).or_default().push(b);
        self.adjacency.entry(b).or_default().push(a);
        Ok(())
    }

    pub fn remove_edge(&mut self, a: &VertexId, b: &VertexId) -> GraphResult<()> {
        if !self.contains_vertex(a) || !self.contains_vertex(b) {
            return Err(GraphError::MissingVertex);
        }
        if !self.contains_edge(a, b) {
            return Err(GraphError::MissingEdge);
        }
        if let Some(ns) = self.adjacency.get_mut(a) {
            ns.retain(|x| x != b);
        }
        if let Some(ns) = self.adjacency.get_mut(b) {
            ns.retain(|x| x != a);
        }
        Ok(())
    }

    /// Removes `v` and every edge touching it.
    ///
    /// Returns the former neighbours of `v`.
    pub fn remove_vertex(&mut self, v: &VertexId) -> GraphResult<Vec<VertexId>> {
        let ns = self
            .adjacency
            .remove(v)
            .ok_or(GraphError::MissingVertex)?;
        for n in ns.iter() {
            if let Some(back) = self.adjacency.get_mut(n) {
                back.retain(|x| x != v);
            }
        }
        Ok(ns)
    }

    pub fn vertex_size(&self) -> usize {
        self.adjacency.len()
    }

    pub fn iter_vertices(&self) -> Box<dyn Iterator<Item = VertexId> + '_> {
        Box::new(self.adjacency.keys().copied())
    }

    pub fn contains_vertex(&self, v: &VertexId) -> bool {
        self.adjacency.contains_key(v)
    }

    pub fn edge_size(&self) -> usize {
        self.adjacency.values().map(|ns| ns.len()).sum::<usize>() / 2
    }

    /// Every edge exactly once, as `(v, neighbour)` in the order it is first met
    /// when scanning vertices and then their neighbours.
    pub fn iter_edges(&self) -> Box<dyn Iterator<Item = (VertexId, VertexId)> + '_> {
        // (n, v) was met earlier iff n was scanned before v.
        let it = self.adjacency.iter().flat_map(|(v, ns)| {
            ns.iter()
                .filter(move |n| v < *n)
                .map(move |n| (*v, *n))
        });
        Box::new(it)
    }

    pub fn contains_edge(&self, a: &VertexId, b: &VertexId) -> bool {
        self.neighbors(a).contains(b)
    }

    /// Neighbours of `v` in the order their edges were added.
    pub fn neighbors(&self, v: &VertexId) -> &[VertexId] {
        self.adjacency.get(v).map(|ns| ns.as_slice()).unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_are_symmetric() {
        let mut g = AdjacentListGraph::new();
        let a = g.add_vertex();
        let b = g.add_vertex();
        let c = g.add_vertex();
        g.add_edge(b, a).unwrap();
        g.add_edge(c, a).unwrap();
        assert_eq!(g.neighbors(&a), &[b, c]);
        assert_eq!(g.neighbors(&b), &[a]);
        assert_eq!(g.add_edge(a, b), Err(GraphError::DuplicateEdge));
        assert_eq!(g.add_edge(a, a), Err(GraphError::SelfLoop));
        assert_eq!(g.edge_size(), 2);
        let edges: Vec<_> = g.iter_edges().collect();
        assert_eq!(edges, vec![(a, b), (a, c)]);
    }

    #[test]
    fn remove_vertex_strips_neighbours() {
        let mut g = AdjacentListGraph::new();
        let a = g.add_vertex();
        let b = g.add_vertex();
        let c = g.add_vertex();
        g.add_edge(a, b).unwrap();
        g.add_edge(b, c).unwrap();
        assert_eq!(g.remove_vertex(&b), Ok(vec![a, c]));
        assert!(g.neighbors(&a).is_empty());
        assert!(g.neighbors(&c).is_empty());
        assert_eq!(g.remove_vertex(&b), Err(GraphError::MissingVertex));
        assert_eq!(g.remove_edge(&a, &c), Err(GraphError::MissingEdge));
        assert_eq!(g.vertex_size(), 2);
    }
}
