pub mod list_similarity;
pub mod shared_nodes;
