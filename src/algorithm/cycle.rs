use crate::graph::*;
use ahash::RandomState;
use std::collections::HashSet;

pub trait HasCycle
where
    Self: Neighbors + DirectedOrNot + Sized,
{
    /// Whether the graph contains a cycle in any of its components.
    ///
    /// In undirected graphs, going back along the edge just taken does not count.
    fn has_cycle(&self) -> bool {
        if Self::DIRECTED_OR_NOT {
            has_directed_cycle(self)
        } else {
            has_undirected_cycle(self)
        }
    }
}

impl<G: Neighbors + DirectedOrNot> HasCycle for G {}

/// Iterative DFS keeping the vertices of the current path in `on_stack`.
/// Reaching one of them again closes a cycle.
fn has_directed_cycle<G: Neighbors>(graph: &G) -> bool {
    let mut finished = HashSet::with_hasher(RandomState::new());
    let mut on_stack = HashSet::with_hasher(RandomState::new());
    for root in graph.iter_vertices() {
        if finished.contains(&root) {
            continue;
        }
        let mut stack = vec![(root, graph.sorted_neighbors(&root).into_iter())];
        on_stack.insert(root);
        loop {
            let (v, next) = match stack.last_mut() {
                Some((v, succs)) => (*v, succs.next()),
                None => break,
            };
            match next {
                Some(u) if on_stack.contains(&u) => return true,
                Some(u) if finished.contains(&u) => {}
                Some(u) => {
                    on_stack.insert(u);
                    stack.push((u, graph.sorted_neighbors(&u).into_iter()));
                }
                None => {
                    stack.pop();
                    on_stack.remove(&v);
                    finished.insert(v);
                }
            }
        }
    }
    false
}

/// Iterative DFS remembering through which vertex each one was discovered.
/// Meeting a discovered vertex by any other edge closes a cycle.
fn has_undirected_cycle<G: Neighbors>(graph: &G) -> bool {
    let mut visited = HashSet::with_hasher(RandomState::new());
    for root in graph.iter_vertices() {
        if !visited.insert(root) {
            continue;
        }
        let mut stack = vec![(root, None)];
        while let Some((v, parent)) = stack.pop() {
            for u in graph.sorted_neighbors(&v) {
                if Some(u) == parent {
                    continue;
                }
                if !visited.insert(u) {
                    return true;
                }
                stack.push((u, Some(v)));
            }
        }
    }
    false
}
