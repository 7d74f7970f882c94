use crate::graph::*;
use ahash::RandomState;
use log::trace;
use std::collections::{HashSet, VecDeque};

/// Depth-first and breadth-first visits.
///
/// Both pick neighbours smallest first, visit every vertex reachable from `start` exactly once,
/// and stop right after visiting `end` if it is given.
/// An unknown `start` visits nothing.
pub trait Traversal
where
    Self: Neighbors + Sized,
{
    fn dfs(&self, start: Self::Vertex, end: Option<Self::Vertex>) -> Vec<Self::Vertex> {
        let mut res = vec![];
        if !self.contains_vertex(&start) {
            return res;
        }
        let mut visited = HashSet::with_hasher(RandomState::new());
        let mut stack = vec![start];
        while let Some(v) = stack.pop() {
            if visited.insert(v) {
                res.push(v);
                // pushed largest first, so that the smallest pops first
                stack.extend(self.sorted_neighbors(&v).into_iter().rev());
            }
            if Some(v) == end {
                trace!("dfs reached {:?} after {} vertices", v, res.len());
                break;
            }
        }
        res
    }

    fn bfs(&self, start: Self::Vertex, end: Option<Self::Vertex>) -> Vec<Self::Vertex> {
        let mut res = vec![];
        if !self.contains_vertex(&start) {
            return res;
        }
        let mut visited = HashSet::with_hasher(RandomState::new());
        let mut queue = VecDeque::new();
        queue.push_back(start);
        while let Some(v) = queue.pop_front() {
            if visited.insert(v) {
                res.push(v);
                queue.extend(self.sorted_neighbors(&v));
            }
            if Some(v) == end {
                trace!("bfs reached {:?} after {} vertices", v, res.len());
                break;
            }
        }
        res
    }
}

impl<G: Neighbors> Traversal for G {}

pub trait ValidPath
where
    Self: Neighbors + Sized,
{
    /// Whether every vertex of `path` exists and each step follows an edge.
    ///
    /// The empty path is valid in any graph.
    fn is_valid_path(&self, path: &[Self::Vertex]) -> bool {
        path.iter().all(|v| self.contains_vertex(v))
            && path.windows(2).all(|w| self.is_adjacent(&w[0], &w[1]))
    }
}

impl<G: Neighbors> ValidPath for G {}
