use thicket_collections::CollectionError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("the vertex does not belong to the graph")]
    VertexNotFound,
    #[error("the edge does not belong to the graph")]
    EdgeNotFound,
    #[error("the graph has no vertices")]
    EmptyGraph,
    #[error(transparent)]
    Collection(#[from] CollectionError),
}
