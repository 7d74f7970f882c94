use crate::graph::*;
use ahash::RandomState;
use std::collections::HashSet;

pub trait ConnectedComponents
where
    Self: Neighbors + Sized,
{
    /// Number of maximal sets of vertices reachable from one another.
    ///
    /// Every flood fill started from a vertex not yet seen finds one more component.
    fn count_connected_components(&self) -> usize {
        let mut visited = HashSet::with_hasher(RandomState::new());
        let mut count = 0;
        for root in self.iter_vertices() {
            if !visited.insert(root) {
                continue;
            }
            count += 1;
            let mut stack = vec![root];
            while let Some(v) = stack.pop() {
                for u in self.sorted_neighbors(&v) {
                    if visited.insert(u) {
                        stack.push(u);
                    }
                }
            }
        }
        count
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::undirected::*;
    use quickcheck_macros::quickcheck;

    #[test]
    fn isolated_vertices_count() {
        let mut g = UndirectedGraph::new();
        for v in ["a", "b", "c"] {
            g.add_vertex(v);
        }
        assert_eq!(g.count_connected_components(), 3);
        g.add_edge("a", "c");
        assert_eq!(g.count_connected_components(), 2);
        g.remove_edge(&"c", &"a");
        assert_eq!(g.count_connected_components(), 3);
    }

    #[test]
    fn removing_a_cut_vertex_splits() {
        let mut g = UndirectedGraph::from_edges(vec![("a", "hub"), ("b", "hub"), ("c", "hub")]);
        assert_eq!(g.count_connected_components(), 1);
        g.remove_vertex(&"hub");
        assert_eq!(g.count_connected_components(), 3);
    }

    #[quickcheck]
    fn matches_petgraph(ops: Ops) {
        let g: UndirectedGraph<String> = (&ops).into();
        let pg: petgraph::graph::UnGraph<String, ()> = (&g).into();
        assert_eq!(
            g.count_connected_components(),
            petgraph::algo::connected_components(&pg)
        );
    }
}
