use super::AdjacentListGraph;
use crate::{algorithm::*, graph::*, GraphError, GraphResult};
use ahash::RandomState;
use bimap::BiHashMap;
use log::debug;
use std::hash::Hash;

/// A simple undirected graph whose vertices are labels.
///
/// Labels map 1-1 onto [`VertexId`]'s of the [`AdjacentListGraph`] underneath.
/// Vertices iterate in insertion order.
/// A label which is removed and added again counts as newly inserted.
///
/// # Examples
///
/// ```rust
/// use duograph::graph::UndirectedGraph;
///
/// let g: UndirectedGraph<&str> = vec![("A", "B"), ("B", "C"), ("C", "A")]
///     .into_iter()
///     .collect();
/// assert!(g.has_cycle());
/// assert_eq!(g.count_connected_components(), 1);
/// assert_eq!(g.dfs(&"A", None), vec!["A", "B", "C"]);
/// ```
#[derive(Clone)]
pub struct UndirectedGraph<V>
where
    V: Hash + Eq,
{
    lower_graph: AdjacentListGraph,
    labels: BiHashMap<VertexId, V, RandomState, RandomState>,
}

impl<V> Default for UndirectedGraph<V>
where
    V: Hash + Eq + Ord + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V> UndirectedGraph<V>
where
    V: Hash + Eq + Ord + Clone,
{
    pub fn new() -> Self {
        Self {
            lower_graph: AdjacentListGraph::new(),
            labels: BiHashMap::with_hashers(RandomState::new(), RandomState::new()),
        }
    }

    /// Adds every pair through [`Self::add_edge`].
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (V, V)>,
    {
        let mut res = Self::new();
        for (u, v) in edges {
            res.add_edge(u, v);
        }
        res
    }

    pub fn lower_graph(&self) -> &AdjacentListGraph {
        &self.lower_graph
    }

    pub fn id_by_vertex(&self, v: &V) -> Option<VertexId> {
        self.labels.get_by_right(v).copied()
    }

    pub fn vertex_by_id(&self, vid: &VertexId) -> Option<&V> {
        self.labels.get_by_left(vid)
    }

    /// Adds `v` without edges unless it is already there.
    pub fn add_vertex(&mut self, v: V) -> VertexId {
        if let Some(vid) = self.id_by_vertex(&v) {
            return vid;
        }
        let vid = self.lower_graph.add_vertex();
        self.labels.insert(vid, v);
        vid
    }

    /// Links `u` and `v`, adding whichever of them is missing.
    ///
    /// Self-loops are ignored, without adding the vertex.
    /// So are edges which already exist.
    pub fn add_edge(&mut self, u: V, v: V) {
        if let Err(err) = self.try_add_edge(u, v) {
            debug!("ignore edge: {}", err);
        }
    }

    pub fn try_add_edge(&mut self, u: V, v: V) -> GraphResult<()> {
        if u == v {
            return Err(GraphError::SelfLoop);
        }
        let a = self.add_vertex(u);
        let b = self.add_vertex(v);
        self.lower_graph.add_edge(a, b)
    }

    pub fn remove_edge(&mut self, u: &V, v: &V) {
        if let Err(err) = self.try_remove_edge(u, v) {
            debug!("ignore removal of edge: {}", err);
        }
    }

    pub fn try_remove_edge(&mut self, u: &V, v: &V) -> GraphResult<()> {
        let a = self.id_by_vertex(u).ok_or(GraphError::MissingVertex)?;
        let b = self.id_by_vertex(v).ok_or(GraphError::MissingVertex)?;
        self.lower_graph.remove_edge(&a, &b)
    }

    /// Removes `v` along with all edges touching it.
    pub fn remove_vertex(&mut self, v: &V) {
        if let Err(err) = self.try_remove_vertex(v) {
            debug!("ignore removal of vertex: {}", err);
        }
    }

    pub fn try_remove_vertex(&mut self, v: &V) -> GraphResult<()> {
        let (vid, _) = self
            .labels
            .remove_by_right(v)
            .ok_or(GraphError::MissingVertex)?;
        self.lower_graph.remove_vertex(&vid)?;
        Ok(())
    }

    pub fn vertex_size(&self) -> usize {
        self.lower_graph.vertex_size()
    }

    pub fn edge_size(&self) -> usize {
        self.lower_graph.edge_size()
    }

    pub fn contains_vertex(&self, v: &V) -> bool {
        self.labels.contains_right(v)
    }

    pub fn contains_edge(&self, u: &V, v: &V) -> bool {
        match (self.id_by_vertex(u), self.id_by_vertex(v)) {
            (Some(a), Some(b)) => self.lower_graph.contains_edge(&a, &b),
            _ => false,
        }
    }

    /// Vertices in insertion order.
    pub fn iter_vertices(&self) -> Box<dyn Iterator<Item = &V> + '_> {
        let it = self
            .lower_graph
            .iter_vertices()
            .filter_map(move |vid| self.vertex_by_id(&vid));
        Box::new(it)
    }

    pub fn vertices(&self) -> Vec<V> {
        self.iter_vertices().cloned().collect()
    }

    /// Each edge once, see [`AdjacentListGraph::iter_edges`] for the order.
    pub fn iter_edges(&self) -> Box<dyn Iterator<Item = (&V, &V)> + '_> {
        let it = self.lower_graph.iter_edges().filter_map(move |(a, b)| {
            let u = self.vertex_by_id(&a)?;
            let v = self.vertex_by_id(&b)?;
            Some((u, v))
        });
        Box::new(it)
    }

    pub fn edges(&self) -> Vec<(V, V)> {
        self.iter_edges()
            .map(|(u, v)| (u.clone(), v.clone()))
            .collect()
    }

    /// Neighbours of `v` in the order their edges were added. Empty if `v` is unknown.
    pub fn neighbors(&self, v: &V) -> Box<dyn Iterator<Item = &V> + '_> {
        let ns = match self.id_by_vertex(v) {
            Some(vid) => self.lower_graph.neighbors(&vid),
            None => &[],
        };
        Box::new(ns.iter().filter_map(move |n| self.vertex_by_id(n)))
    }

    /// A path is valid if every vertex exists and each step follows an edge.
    /// The empty path is always valid.
    pub fn is_valid_path(&self, path: &[V]) -> bool {
        let ids: Option<Vec<_>> = path.iter().map(|v| self.id_by_vertex(v)).collect();
        match ids {
            Some(ids) => self.by_label().is_valid_path(&ids),
            None => false,
        }
    }

    /// Depth-first visit order from `start`, taking smaller labels first.
    ///
    /// Stops right after visiting `end`. Empty if `start` is unknown.
    pub fn dfs(&self, start: &V, end: Option<&V>) -> Vec<V> {
        self.traverse(start, end, |view, s, e| view.dfs(s, e))
    }

    /// Breadth-first counterpart of [`Self::dfs`].
    pub fn bfs(&self, start: &V, end: Option<&V>) -> Vec<V> {
        self.traverse(start, end, |view, s, e| view.bfs(s, e))
    }

    pub fn count_connected_components(&self) -> usize {
        self.by_label().count_connected_components()
    }

    pub fn has_cycle(&self) -> bool {
        self.by_label().has_cycle()
    }

    fn traverse<F>(&self, start: &V, end: Option<&V>, walk: F) -> Vec<V>
    where
        F: FnOnce(&ByLabel<'_, V>, VertexId, Option<VertexId>) -> Vec<VertexId>,
    {
        let start = match self.id_by_vertex(start) {
            Some(vid) => vid,
            None => return vec![],
        };
        // An unknown end is never reached, so the walk runs to exhaustion.
        let end = end.and_then(|v| self.id_by_vertex(v));
        walk(&self.by_label(), start, end)
            .into_iter()
            .filter_map(|vid| self.vertex_by_id(&vid).cloned())
            .collect()
    }

    fn by_label(&self) -> ByLabel<'_, V> {
        ByLabel { graph: self }
    }
}

impl<V> FromIterator<(V, V)> for UndirectedGraph<V>
where
    V: Hash + Eq + Ord + Clone,
{
    fn from_iter<I: IntoIterator<Item = (V, V)>>(iter: I) -> Self {
        Self::from_edges(iter)
    }
}

impl<V> std::fmt::Debug for UndirectedGraph<V>
where
    V: Hash + Eq + Ord + Clone + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "UndirectedGraph {{")?;
        for v in self.iter_vertices() {
            writeln!(f, "{:?}: {:?}", v, self.neighbors(v).collect::<Vec<_>>())?;
        }
        writeln!(f, "}}")?;
        Ok(())
    }
}

impl<V> UndirectedGraph<V>
where
    V: Hash + Eq,
{
    /// The rendering stays on one line while its body is shorter than this.
    pub const COMPACT_RENDER_WIDTH: usize = 70;
}

/// Each vertex with its neighbours, as `GRAPH: {A: [B, C], B: [A], C: [A]}`.
///
/// Long renderings put one vertex on each line instead.
impl<V> std::fmt::Display for UndirectedGraph<V>
where
    V: Hash + Eq + Ord + Clone + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let lines: Vec<String> = self
            .iter_vertices()
            .map(|v| {
                let ns: Vec<String> = self.neighbors(v).map(|n| n.to_string()).collect();
                format!("{}: [{}]", v, ns.join(", "))
            })
            .collect();
        let body = lines.join("\n  ");
        if body.len() < Self::COMPACT_RENDER_WIDTH {
            write!(f, "GRAPH: {{{}}}", lines.join(", "))
        } else {
            write!(f, "GRAPH: {{\n  {}}}", body)
        }
    }
}

/// Walks the lower graph with neighbours ordered by their labels.
struct ByLabel<'a, V>
where
    V: Hash + Eq,
{
    graph: &'a UndirectedGraph<V>,
}

impl<'a, V> DirectedOrNot for ByLabel<'a, V>
where
    V: Hash + Eq,
{
    const DIRECTED_OR_NOT: bool = false;
}

impl<'a, V> Neighbors for ByLabel<'a, V>
where
    V: Hash + Eq + Ord,
{
    type Vertex = VertexId;

    fn vertex_size(&self) -> usize {
        self.graph.lower_graph.vertex_size()
    }

    fn iter_vertices(&self) -> Box<dyn Iterator<Item = VertexId> + '_> {
        self.graph.lower_graph.iter_vertices()
    }

    fn contains_vertex(&self, v: &VertexId) -> bool {
        self.graph.lower_graph.contains_vertex(v)
    }

    fn sorted_neighbors(&self, v: &VertexId) -> Vec<VertexId> {
        let labels = &self.graph.labels;
        let mut ns = self.graph.lower_graph.neighbors(v).to_vec();
        ns.sort_by(|a, b| labels.get_by_left(a).cmp(&labels.get_by_left(b)));
        ns
    }

    fn is_adjacent(&self, from: &VertexId, to: &VertexId) -> bool {
        self.graph.lower_graph.contains_edge(from, to)
    }
}

impl<'a, V> ConnectedComponents for ByLabel<'a, V> where V: Hash + Eq + Ord {}

#[cfg(test)]
mod tests {
    use crate::{graph::undirected::*, GraphError};
    use quickcheck_macros::*;
    use std::collections::BTreeSet;

    fn triangle() -> UndirectedGraph<String> {
        UndirectedGraph::from_edges(
            vec![("A", "B"), ("B", "C"), ("C", "A")]
                .into_iter()
                .map(|(u, v)| (u.to_string(), v.to_string())),
        )
    }

    fn s(x: &str) -> String {
        x.to_string()
    }

    #[test]
    fn add_edge_creates_vertices() {
        let mut g = UndirectedGraph::new();
        g.add_edge("B", "A");
        assert_eq!(g.vertices(), vec!["B", "A"]);
        assert_eq!(g.edges(), vec![("B", "A")]);
        g.add_edge("A", "B");
        assert_eq!(g.edge_size(), 1);
    }

    #[test]
    fn self_loop_adds_nothing() {
        let _ = env_logger::builder().is_test(true).try_init();
        let mut g = UndirectedGraph::new();
        g.add_edge("A", "A");
        assert_eq!(g.vertex_size(), 0);
        assert_eq!(g.try_add_edge("A", "A"), Err(GraphError::SelfLoop));
        g.add_vertex("A");
        g.add_vertex("A");
        assert_eq!(g.vertices(), vec!["A"]);
    }

    #[test]
    fn remove_edge_needs_both_vertices_and_the_edge() {
        let mut g = triangle();
        assert_eq!(
            g.try_remove_edge(&s("A"), &s("Z")),
            Err(GraphError::MissingVertex)
        );
        g.remove_edge(&s("A"), &s("B"));
        assert!(!g.contains_edge(&s("A"), &s("B")));
        assert!(!g.contains_edge(&s("B"), &s("A")));
        assert_eq!(
            g.try_remove_edge(&s("B"), &s("A")),
            Err(GraphError::MissingEdge)
        );
        assert_eq!(g.edge_size(), 2);
    }

    #[test]
    fn remove_vertex_strips_edges() {
        let mut g = triangle();
        g.remove_vertex(&s("B"));
        assert_eq!(g.vertices(), vec![s("A"), s("C")]);
        assert_eq!(g.edges(), vec![(s("A"), s("C"))]);
        assert_eq!(g.neighbors(&s("A")).collect::<Vec<_>>(), vec![&s("C")]);
        g.remove_vertex(&s("B"));
        assert_eq!(g.try_remove_vertex(&s("B")), Err(GraphError::MissingVertex));
        g.add_vertex(s("B"));
        assert_eq!(g.vertices(), vec![s("A"), s("C"), s("B")]);
    }

    #[test]
    fn edges_once_in_scan_order() {
        let g = triangle();
        assert_eq!(
            g.edges(),
            vec![(s("A"), s("B")), (s("A"), s("C")), (s("B"), s("C"))]
        );
    }

    #[test]
    fn valid_paths() {
        let g = triangle();
        assert!(g.is_valid_path(&[]));
        assert!(UndirectedGraph::<String>::new().is_valid_path(&[]));
        assert!(g.is_valid_path(&[s("A")]));
        assert!(!g.is_valid_path(&[s("Z")]));
        assert!(g.is_valid_path(&[s("A"), s("B"), s("C"), s("A")]));
        assert!(!g.is_valid_path(&[s("A"), s("Z")]));
        assert!(!g.is_valid_path(&[s("A"), s("A")]));
    }

    #[test]
    fn traversals_take_smaller_labels_first() {
        let g = UndirectedGraph::from_edges(vec![
            ("A", "D"),
            ("A", "C"),
            ("C", "B"),
            ("D", "E"),
            ("X", "Y"),
        ]);
        assert_eq!(g.dfs(&"A", None), vec!["A", "C", "B", "D", "E"]);
        assert_eq!(g.bfs(&"A", None), vec!["A", "C", "D", "B", "E"]);
        assert_eq!(g.dfs(&"A", Some(&"B")), vec!["A", "C", "B"]);
        assert_eq!(g.bfs(&"A", Some(&"D")), vec!["A", "C", "D"]);
        assert_eq!(g.dfs(&"A", Some(&"Nope")).len(), 5);
        assert_eq!(g.dfs(&"Q", None), Vec::<&str>::new());
        assert_eq!(g.bfs(&"Q", None), Vec::<&str>::new());
    }

    #[test]
    fn cycles_and_components() {
        let g = triangle();
        assert!(g.has_cycle());
        assert_eq!(g.count_connected_components(), 1);

        let mut g = UndirectedGraph::from_edges(vec![("A", "B"), ("B", "C"), ("X", "Y")]);
        g.add_vertex("Q");
        assert!(!g.has_cycle());
        assert_eq!(g.count_connected_components(), 3);
        g.add_edge("Y", "Z");
        g.add_edge("Z", "X");
        assert!(g.has_cycle());
        assert_eq!(UndirectedGraph::<&str>::new().count_connected_components(), 0);
    }

    #[test]
    fn display_short() {
        assert_eq!(triangle().to_string(), "GRAPH: {A: [B, C], B: [A, C], C: [B, A]}");
        assert_eq!(UndirectedGraph::<&str>::new().to_string(), "GRAPH: {}");
    }

    #[test]
    fn display_long() {
        let g = UndirectedGraph::from_edges(vec![
            ("alpha", "bravo"),
            ("bravo", "charlie"),
            ("charlie", "delta"),
            ("delta", "echo"),
        ]);
        let oracle = "GRAPH: {\n  alpha: [bravo]\n  bravo: [alpha, charlie]\n  charlie: [bravo, delta]\n  delta: [charlie, echo]\n  echo: [delta]}";
        assert_eq!(g.to_string(), oracle);
    }

    #[quickcheck]
    fn edges_follow_ops(ops: Ops) {
        let trial: UndirectedGraph<String> = (&ops).into();
        let mut vertices: Vec<String> = vec![];
        let mut edges = BTreeSet::new();
        for op in ops.iter() {
            match op {
                Op::AddVertex(v) => {
                    if !vertices.contains(v) {
                        vertices.push(v.clone());
                    }
                }
                Op::AddEdge(u, v) => {
                    if u != v {
                        for x in [u, v] {
                            if !vertices.contains(x) {
                                vertices.push(x.clone());
                            }
                        }
                        edges.insert(unordered(u, v));
                    }
                }
                Op::RemoveEdge(u, v) => {
                    edges.remove(&unordered(u, v));
                }
                Op::RemoveVertex(v) => {
                    vertices.retain(|x| x != v);
                    edges.retain(|(a, b)| a != v && b != v);
                }
            }
        }
        assert_eq!(trial.vertices(), vertices);
        let trial_edges: Vec<_> = trial.edges();
        assert_eq!(trial_edges.len(), edges.len());
        let trial_edges: BTreeSet<_> = trial_edges.iter().map(|(u, v)| unordered(u, v)).collect();
        assert_eq!(trial_edges, edges);
        for (u, v) in trial.iter_edges() {
            assert!(trial.neighbors(u).any(|x| x == v));
            assert!(trial.neighbors(v).any(|x| x == u));
        }
    }

    fn unordered(u: &str, v: &str) -> (String, String) {
        if u < v {
            (u.to_string(), v.to_string())
        } else {
            (v.to_string(), u.to_string())
        }
    }
}
