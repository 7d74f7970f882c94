use crate::{graph::*, GraphError, GraphResult};
use log::debug;

/// A positively-weighted directed graph over vertices `0..n`, backed by an adjacency matrix.
///
/// Vertices are dense and never removed.
/// `matrix[i][j]` is the weight of the edge `i -> j`, or `0` when there is none.
///
/// |                | Complexity        |
/// | -------------- | ----------------- |
/// | `add_vertex`   | $O(\|V\|)$        |
/// | `add_edge`     | $O(1)$            |
/// | `remove_edge`  | $O(1)$            |
/// | `iter_edges`   | $O(\|V\|^2)$      |
/// | `is_adjacent`  | $O(1)$            |
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectedGraph {
    matrix: Vec<Vec<Weight>>,
}

impl DirectedOrNot for DirectedGraph {
    const DIRECTED_OR_NOT: bool = true;
}

impl DirectedGraph {
    pub fn new() -> Self {
        Self { matrix: vec![] }
    }

    /// Builds a graph with just enough vertices to hold every endpoint in `edges`,
    /// then adds the edges in order through [`Self::add_edge`].
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (usize, usize, Weight)>,
    {
        let edges: Vec<_> = edges.into_iter().collect();
        let mut res = Self::new();
        if let Some(top) = edges.iter().map(|(src, snk, _)| *src.max(snk)).max() {
            for _ in 0..=top {
                res.add_vertex();
            }
        }
        for (src, snk, weight) in edges {
            res.add_edge(src, snk, weight);
        }
        res
    }

    /// Appends a vertex without edges.
    ///
    /// Returns the new number of vertices, which is one more than the id of the new vertex.
    pub fn add_vertex(&mut self) -> usize {
        for row in self.matrix.iter_mut() {
            row.push(0);
        }
        let n = self.matrix.len() + 1;
        self.matrix.push(vec![0; n]);
        n
    }

    /// Sets the edge `source -> sink` to `weight`, replacing any edge already there.
    ///
    /// A weight of 0 clears the edge. Self-loops and out-of-range endpoints are ignored.
    pub fn add_edge(&mut self, source: usize, sink: usize, weight: Weight) {
        if let Err(err) = self.try_add_edge(source, sink, weight) {
            debug!("ignore edge {} -> {} ({}): {}", source, sink, weight, err);
        }
    }

    /// [`Self::add_edge`] with the default weight of 1.
    pub fn add_unit_edge(&mut self, source: usize, sink: usize) {
        self.add_edge(source, sink, 1)
    }

    pub fn try_add_edge(&mut self, source: usize, sink: usize, weight: Weight) -> GraphResult<()> {
        self.check_vertex(source)?;
        self.check_vertex(sink)?;
        if source == sink {
            return Err(GraphError::SelfLoop);
        }
        self.matrix[source][sink] = weight;
        Ok(())
    }

    /// Drops the edge `source -> sink` if there is one.
    ///
    /// Out-of-range endpoints are ignored.
    pub fn remove_edge(&mut self, source: usize, sink: usize) {
        if let Err(err) = self.try_remove_edge(source, sink) {
            debug!("ignore removal of {} -> {}: {}", source, sink, err);
        }
    }

    /// Removing an edge that is absent between valid vertices is not an error.
    pub fn try_remove_edge(&mut self, source: usize, sink: usize) -> GraphResult<()> {
        self.check_vertex(source)?;
        self.check_vertex(sink)?;
        self.matrix[source][sink] = 0;
        Ok(())
    }

    pub fn vertices(&self) -> Vec<usize> {
        (0..self.matrix.len()).collect()
    }

    /// All edges in row-major order, i.e., by source and then by sink.
    pub fn iter_edges(&self) -> Box<dyn Iterator<Item = WeightedEdge> + '_> {
        let it = self.matrix.iter().enumerate().flat_map(|(src, row)| {
            row.iter()
                .enumerate()
                .filter(|(_, w)| **w != 0)
                .map(move |(snk, w)| WeightedEdge::new(src, snk, *w))
        });
        Box::new(it)
    }

    pub fn edges(&self) -> Vec<WeightedEdge> {
        self.iter_edges().collect()
    }

    pub fn edge_size(&self) -> usize {
        self.matrix
            .iter()
            .map(|row| row.iter().filter(|w| **w != 0).count())
            .sum()
    }

    pub fn weight(&self, source: usize, sink: usize) -> Option<Weight> {
        self.matrix
            .get(source)
            .and_then(|row| row.get(sink))
            .copied()
            .filter(|w| *w != 0)
    }

    fn check_vertex(&self, vertex: usize) -> GraphResult<()> {
        if vertex < self.matrix.len() {
            Ok(())
        } else {
            Err(GraphError::VertexOutOfRange {
                vertex,
                vertex_size: self.matrix.len(),
            })
        }
    }
}

impl FromIterator<(usize, usize, Weight)> for DirectedGraph {
    fn from_iter<I: IntoIterator<Item = (usize, usize, Weight)>>(iter: I) -> Self {
        Self::from_edges(iter)
    }
}

impl Neighbors for DirectedGraph {
    type Vertex = usize;

    fn vertex_size(&self) -> usize {
        self.matrix.len()
    }

    fn iter_vertices(&self) -> Box<dyn Iterator<Item = usize> + '_> {
        Box::new(0..self.matrix.len())
    }

    fn contains_vertex(&self, v: &usize) -> bool {
        *v < self.matrix.len()
    }

    fn sorted_neighbors(&self, v: &usize) -> Vec<usize> {
        self.weighted_out_edges(*v).map(|e| e.sink).collect()
    }

    fn is_adjacent(&self, from: &usize, to: &usize) -> bool {
        self.weight(*from, *to).is_some()
    }
}

impl WeightedGraph for DirectedGraph {
    fn weighted_out_edges(&self, v: usize) -> Box<dyn Iterator<Item = WeightedEdge> + '_> {
        match self.matrix.get(v) {
            Some(row) => {
                let it = row
                    .iter()
                    .enumerate()
                    .filter(|(_, w)| **w != 0)
                    .map(move |(snk, w)| WeightedEdge::new(v, snk, *w));
                Box::new(it)
            }
            None => Box::new(std::iter::empty()),
        }
    }
}

/// The whole weight matrix with a header of vertex indices.
///
/// ```plain
/// GRAPH (3 vertices):
///    | 0  1  2
/// ------------
///  0 | 0 10 20
///  1 | 0  0  5
///  2 | 0  0  0
/// ```
impl std::fmt::Display for DirectedGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let n = self.matrix.len();
        if n == 0 {
            return writeln!(f, "EMPTY GRAPH");
        }
        writeln!(f, "GRAPH ({} vertices):", n)?;
        write!(f, "   |")?;
        write_row(f, 0..n)?;
        writeln!(f, "{}", "-".repeat(n * 3 + 3))?;
        for (i, row) in self.matrix.iter().enumerate() {
            write!(f, "{:2} |", i)?;
            write_row(f, row.iter())?;
        }
        Ok(())
    }
}

fn write_row<I, T>(f: &mut std::fmt::Formatter<'_>, cells: I) -> std::fmt::Result
where
    I: Iterator<Item = T>,
    T: std::fmt::Display,
{
    for (i, cell) in cells.enumerate() {
        if i > 0 {
            write!(f, " ")?;
        }
        write!(f, "{:2}", cell)?;
    }
    writeln!(f)
}
