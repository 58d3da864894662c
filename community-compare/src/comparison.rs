//! Comparison session over a directory of membership files.
//!
//! [`CommunityComparison`] loads every method's table once; each report is
//! recomputed from the immutable loaded tables, so repeated calls are
//! independent and nothing persists beyond the written report files.

use crate::{
    algorithms::{
        list_similarity::{list_similarity_measures, ListSimilarity},
        shared_nodes::{shared_nodes_similarity, SharedNodesTable},
    },
    core::{MembershipTable, MethodSummary},
    errors::CompareError,
    io::{load_membership_tables, FileFormat},
    report,
};
use itertools::Itertools;
use std::{
    cmp::Ordering,
    fs,
    path::{Path, PathBuf},
};
use tracing::info;

/// Shape-based similarity of one method pair.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeSimilarity {
    pub method1: String,
    pub method2: String,
    pub measures: ListSimilarity,
}

/// Shared-node similarity of one method pair, with the full detail table.
#[derive(Debug, Clone, PartialEq)]
pub struct SharedNodesSimilarity {
    pub method1: String,
    pub method2: String,
    pub table: SharedNodesTable,
}

/// One comparison session: the loaded membership tables plus the report
/// target directory.
#[derive(Debug, Clone)]
pub struct CommunityComparison {
    tables: Vec<(String, MembershipTable)>,
    report_dir: PathBuf,
}

impl CommunityComparison {
    /// Load all membership files of `format` found in `data_dir`.
    ///
    /// The report directory is created if absent. Methods are kept sorted by
    /// name, which fixes pair orientation and report row order.
    pub fn new(
        data_dir: impl AsRef<Path>,
        report_dir: impl AsRef<Path>,
        format: FileFormat,
    ) -> Result<Self, CompareError> {
        let tables = load_membership_tables(data_dir.as_ref(), format)?;
        let report_dir = report_dir.as_ref().to_path_buf();
        fs::create_dir_all(&report_dir)?;
        info!("reports will be created in {}", report_dir.display());
        Ok(Self { tables, report_dir })
    }

    /// The method names, sorted.
    pub fn methods(&self) -> impl Iterator<Item = &str> + '_ {
        self.tables.iter().map(|(method, _)| method.as_str())
    }

    /// The membership table loaded for `method`.
    pub fn table(&self, method: &str) -> Result<&MembershipTable, CompareError> {
        self.tables
            .iter()
            .find(|(name, _)| name == method)
            .map(|(_, table)| table)
            .ok_or_else(|| CompareError::MethodNotFound(method.to_string()))
    }

    /// Per-method community statistics.
    pub fn method_summaries(&self) -> Vec<MethodSummary> {
        self.tables
            .iter()
            .map(|(method, table)| MethodSummary::from_table(method, table))
            .collect()
    }

    /// Shape similarity for every 2-combination of methods, sorted by cosine
    /// similarity descending.
    pub fn shape_similarities(&self) -> Vec<ShapeSimilarity> {
        let mut rows: Vec<ShapeSimilarity> = self
            .method_summaries()
            .iter()
            .tuple_combinations()
            .map(|(a, b)| {
                let dist_a: Vec<f64> = a.size_distribution.iter().map(|s| *s as f64).collect();
                let dist_b: Vec<f64> = b.size_distribution.iter().map(|s| *s as f64).collect();
                ShapeSimilarity {
                    method1: a.method.clone(),
                    method2: b.method.clone(),
                    measures: list_similarity_measures(&dist_a, &dist_b),
                }
            })
            .collect();
        rows.sort_by(|x, y| {
            descending_nan_last(x.measures.cosine_similarity, y.measures.cosine_similarity)
        });
        rows
    }

    /// Shared-node similarity for every 2-combination of methods, sorted by
    /// mean score2 descending.
    pub fn shared_node_similarities(&self) -> Vec<SharedNodesSimilarity> {
        let mut rows: Vec<SharedNodesSimilarity> = self
            .tables
            .iter()
            .tuple_combinations()
            .map(|((method1, table1), (method2, table2))| SharedNodesSimilarity {
                method1: method1.clone(),
                method2: method2.clone(),
                table: shared_nodes_similarity(table1, table2),
            })
            .collect();
        rows.sort_by(|x, y| descending_nan_last(x.table.mean_score2, y.table.mean_score2));
        rows
    }

    /// Write all report files: the per-method summary, the two pairwise
    /// similarity summaries, and one shared-nodes detail file per pair.
    ///
    /// Any failure propagates and aborts the run; files already written are
    /// left in place.
    pub fn create_all_reports(&self) -> Result<(), CompareError> {
        info!("creating {} (per-method community statistics)", report::GENERAL_INFO_REPORT);
        report::write_general_info(
            &self.report_dir.join(report::GENERAL_INFO_REPORT),
            &self.method_summaries(),
        )?;

        info!("creating {} (size-distribution similarities)", report::SHAPE_REPORT);
        let shape_rows: Vec<(String, String, ListSimilarity)> = self
            .shape_similarities()
            .into_iter()
            .map(|row| (row.method1, row.method2, row.measures))
            .collect();
        report::write_shape_report(&self.report_dir.join(report::SHAPE_REPORT), &shape_rows)?;

        info!("creating {} (shared-node similarities)", report::SHARED_NODES_REPORT);
        let shared = self.shared_node_similarities();
        for pair in &shared {
            let name = report::pair_report_name(&pair.method1, &pair.method2);
            report::write_shared_nodes_detail(
                &self.report_dir.join(name),
                &pair.method1,
                &pair.method2,
                &pair.table,
            )?;
        }
        let summary_rows: Vec<(String, String, f64, f64)> = shared
            .into_iter()
            .map(|pair| {
                (
                    pair.method1,
                    pair.method2,
                    pair.table.mean_score1,
                    pair.table.mean_score2,
                )
            })
            .collect();
        report::write_shared_nodes_summary(
            &self.report_dir.join(report::SHARED_NODES_REPORT),
            &summary_rows,
        )?;
        Ok(())
    }
}

/// Descending float order with NaN sorted to the end.
fn descending_nan_last(x: f64, y: f64) -> Ordering {
    match (x.is_nan(), y.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => y.total_cmp(&x),
    }
}
