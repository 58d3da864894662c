//! File discovery and loading of per-method membership tables.
//!
//! A data directory holds one tabular file per community-detection method;
//! the method is named after the file stem. Two formats are supported, `csv`
//! and `parquet`; asking for anything else fails before any file is touched.

use crate::{core::MembershipTable, errors::CompareError};
use rustc_hash::FxHashSet;
use std::{
    fmt, fs,
    path::{Path, PathBuf},
    str::FromStr,
};
use tracing::{info, warn};

mod csv_loader;
mod parquet_loader;

/// Column holding the node identifier.
pub const NODE_COL: &str = "node";
/// Column holding the community identifier.
pub const COMMUNITY_COL: &str = "community";

const SUPPORTED_EXTENSIONS: &str = "csv, parquet";

/// The tabular formats membership files may come in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Csv,
    Parquet,
}

impl FileFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            FileFormat::Csv => "csv",
            FileFormat::Parquet => "parquet",
        }
    }

    fn load(&self, path: &Path) -> Result<MembershipTable, CompareError> {
        match self {
            FileFormat::Csv => csv_loader::load_csv(path),
            FileFormat::Parquet => parquet_loader::load_parquet(path),
        }
    }
}

impl FromStr for FileFormat {
    type Err = CompareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Ok(FileFormat::Csv),
            "parquet" => Ok(FileFormat::Parquet),
            other => Err(CompareError::UnsupportedFormat {
                extension: other.to_string(),
                supported: SUPPORTED_EXTENSIONS,
            }),
        }
    }
}

impl fmt::Display for FileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Find the membership files with the given format in `data_dir`.
///
/// Returns `(method name, path)` pairs sorted by method name, so downstream
/// pair enumeration and report row order are deterministic.
pub fn discover_method_files(
    data_dir: &Path,
    format: FileFormat,
) -> Result<Vec<(String, PathBuf)>, CompareError> {
    if !data_dir.is_dir() {
        return Err(CompareError::DataDirNotFound(data_dir.to_path_buf()));
    }

    let mut files: Vec<(String, PathBuf)> = vec![];
    for entry in fs::read_dir(data_dir)? {
        let path = entry?.path();
        let matches = path.is_file()
            && path
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case(format.extension()));
        if matches {
            if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                files.push((stem.to_string(), path));
            }
        }
    }
    if files.is_empty() {
        return Err(CompareError::NoDataFiles {
            path: data_dir.to_path_buf(),
            extension: format.extension().to_string(),
        });
    }
    files.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(files)
}

/// Load every method's membership table from `data_dir`.
pub fn load_membership_tables(
    data_dir: &Path,
    format: FileFormat,
) -> Result<Vec<(String, MembershipTable)>, CompareError> {
    let files = discover_method_files(data_dir, format)?;
    info!(
        "found {} data files in {}: {}",
        files.len(),
        data_dir.display(),
        files
            .iter()
            .map(|(method, _)| method.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    );

    let mut tables = Vec::with_capacity(files.len());
    for (method, path) in files {
        let table = format.load(&path)?;
        tables.push((method, table));
    }
    warn_node_coverage(&tables);
    Ok(tables)
}

/// A method whose table misses nodes that other methods cover.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageGap {
    pub method: String,
    /// Nodes present in the union of all methods but absent from this one.
    pub missing: usize,
    /// Size of the union of all methods' node sets.
    pub total_nodes: usize,
}

/// Find every method whose table misses nodes that other methods cover.
///
/// Methods with full coverage are not reported.
pub fn node_coverage_gaps(tables: &[(String, MembershipTable)]) -> Vec<CoverageGap> {
    let all_nodes: FxHashSet<&str> = tables
        .iter()
        .flat_map(|(_, table)| table.nodes())
        .collect();
    tables
        .iter()
        .filter_map(|(method, table)| {
            let covered: FxHashSet<&str> = table.nodes().collect();
            let missing = all_nodes.len() - covered.len();
            (missing > 0).then(|| CoverageGap {
                method: method.clone(),
                missing,
                total_nodes: all_nodes.len(),
            })
        })
        .collect()
}

/// Warn for every method with incomplete node coverage.
pub fn warn_node_coverage(tables: &[(String, MembershipTable)]) {
    for gap in node_coverage_gaps(tables) {
        warn!(
            "method {} misses {} nodes, i.e. {:.2}% of all nodes",
            gap.method,
            gap.missing,
            100.0 * gap.missing as f64 / gap.total_nodes as f64
        );
    }
}
