use crate::graph::*;
use ahash::RandomState;
use keyed_priority_queue::KeyedPriorityQueue;
use log::trace;
use std::{cmp::Reverse, collections::VecDeque};

/// Length of a shortest path. Unreachable vertices are infinitely far.
///
/// `Finite` distances order before `Infinite`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Distance {
    Finite(Weight),
    Infinite,
}

impl Distance {
    pub fn is_finite(&self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    pub fn finite(&self) -> Option<Weight> {
        match self {
            Distance::Finite(d) => Some(*d),
            Distance::Infinite => None,
        }
    }
}

impl From<Weight> for Distance {
    fn from(d: Weight) -> Self {
        Distance::Finite(d)
    }
}

impl std::fmt::Display for Distance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Distance::Finite(d) => write!(f, "{}", d),
            Distance::Infinite => write!(f, "inf"),
        }
    }
}

/// How relaxations are scheduled. Both give the same distances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShortestPathStrategy {
    /// Always settles the closest pending vertex first, by a decrease-key priority queue.
    #[default]
    Heap,
    /// Relaxes vertices in FIFO order and revisits them whenever they get closer.
    FifoRelaxation,
}

pub trait ShortestPaths
where
    Self: WeightedGraph + Sized,
{
    /// Distances from `source` to every vertex, indexed by vertex.
    ///
    /// An out-of-range `source` reaches nothing.
    fn dijkstra(&self, source: usize) -> Vec<Distance> {
        self.dijkstra_with(source, ShortestPathStrategy::default())
    }

    fn dijkstra_with(&self, source: usize, strategy: ShortestPathStrategy) -> Vec<Distance> {
        let mut dist = vec![Distance::Infinite; self.vertex_size()];
        if source >= dist.len() {
            return dist;
        }
        dist[source] = Distance::Finite(0);
        trace!("shortest paths from {} by {:?}", source, strategy);
        match strategy {
            ShortestPathStrategy::Heap => settle_by_heap(self, source, &mut dist),
            ShortestPathStrategy::FifoRelaxation => relax_in_fifo(self, source, &mut dist),
        }
        dist
    }
}

impl<G: WeightedGraph> ShortestPaths for G {}

fn settle_by_heap<G: WeightedGraph>(graph: &G, source: usize, dist: &mut [Distance]) {
    let mut settled = vec![false; dist.len()];
    let mut queue: KeyedPriorityQueue<usize, Reverse<Weight>, RandomState> =
        KeyedPriorityQueue::with_capacity_and_hasher(dist.len(), RandomState::new());
    queue.push(source, Reverse(0));
    while let Some((v, Reverse(d))) = queue.pop() {
        settled[v] = true;
        for e in graph.weighted_out_edges(v) {
            if settled[e.sink] {
                continue;
            }
            let candidate = d.saturating_add(e.weight);
            if Distance::Finite(candidate) < dist[e.sink] {
                dist[e.sink] = Distance::Finite(candidate);
                // replaces the priority if `e.sink` is already pending
                queue.push(e.sink, Reverse(candidate));
            }
        }
    }
}

fn relax_in_fifo<G: WeightedGraph>(graph: &G, source: usize, dist: &mut [Distance]) {
    let mut pending = vec![false; dist.len()];
    let mut queue = VecDeque::new();
    queue.push_back(source);
    pending[source] = true;
    while let Some(v) = queue.pop_front() {
        pending[v] = false;
        let d = match dist[v] {
            Distance::Finite(d) => d,
            Distance::Infinite => continue,
        };
        for e in graph.weighted_out_edges(v) {
            let candidate = d.saturating_add(e.weight);
            if Distance::Finite(candidate) < dist[e.sink] {
                dist[e.sink] = Distance::Finite(candidate);
                if !pending[e.sink] {
                    pending[e.sink] = true;
                    queue.push_back(e.sink);
                }
            }
        }
    }
}
