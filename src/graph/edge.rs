/// Edge weights of [`super::DirectedGraph`]. A weight of 0 means "no edge".
pub type Weight = u64;

/// Information about a weighted, directed edge.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct WeightedEdge {
    pub source: usize,
    pub sink: usize,
    pub weight: Weight,
}

impl WeightedEdge {
    pub fn new(source: usize, sink: usize, weight: Weight) -> Self {
        Self {
            source,
            sink,
            weight,
        }
    }
}

impl From<WeightedEdge> for (usize, usize, Weight) {
    fn from(e: WeightedEdge) -> Self {
        (e.source, e.sink, e.weight)
    }
}

impl From<(usize, usize, Weight)> for WeightedEdge {
    fn from((source, sink, weight): (usize, usize, Weight)) -> Self {
        Self::new(source, sink, weight)
    }
}
