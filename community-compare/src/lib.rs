//! # community-compare
//!
//! Compares the outputs of community-detection methods applied to the same
//! graph. Each method contributes one tabular file (csv or parquet) mapping
//! nodes to community identifiers; the comparison session computes
//! descriptive statistics per method and pairwise similarity scores between
//! methods, then writes delimited report files.
//!
//! ```no_run
//! use community_compare::{CommunityComparison, FileFormat};
//!
//! let cc = CommunityComparison::new("./data", "./report", FileFormat::Parquet)?;
//! cc.create_all_reports()?;
//! # Ok::<(), community_compare::CompareError>(())
//! ```

pub mod algorithms;
pub mod comparison;
pub mod core;
pub mod errors;
pub mod io;
pub mod report;

pub use comparison::{CommunityComparison, ShapeSimilarity, SharedNodesSimilarity};
pub use errors::CompareError;
pub use io::FileFormat;
