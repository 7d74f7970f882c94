use thiserror::Error;

/// Why a strict mutation was refused.
///
/// The permissive mutations (`add_edge`, `remove_edge`, ...) swallow these after logging them.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    /// Both endpoints of an edge are the same vertex.
    #[error("self-loops are not allowed")]
    SelfLoop,

    /// A vertex id is not below the number of vertices.
    #[error("vertex {vertex} is out of range, the graph has {vertex_size} vertices")]
    VertexOutOfRange { vertex: usize, vertex_size: usize },

    /// The two vertices are already adjacent.
    #[error("edge already exists")]
    DuplicateEdge,

    #[error("vertex does not exist")]
    MissingVertex,

    #[error("edge does not exist")]
    MissingEdge,
}

pub type GraphResult<T> = Result<T, GraphError>;
