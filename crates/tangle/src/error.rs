pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The layout engine declines topologies above a fixed node ceiling.
    /// Recoverable: callers should suppress position-dependent rendering or
    /// request a filtered topology.
    #[error("too many nodes for the graph layout engine: {count} (limit {limit})")]
    TooManyNodes { count: usize, limit: usize },

    /// An edge references a node that is absent from the current node set.
    #[error("edge {edge_id} references a missing node: {node_id}")]
    MissingEndpoint { edge_id: String, node_id: String },
}

impl Error {
    pub fn is_too_many_nodes(&self) -> bool {
        matches!(self, Error::TooManyNodes { .. })
    }
}
