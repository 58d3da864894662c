//! Delimited report serialization.
//!
//! Every derived table is written as a CSV file with a header row. Column
//! names follow the report vocabulary: `method_name`, `no_of_community`,
//! `node_count_<method>`, `prcntg1`/`prcntg2` and so on. Size distributions
//! are encoded in a single `;`-separated field.

use crate::{
    algorithms::{list_similarity::ListSimilarity, shared_nodes::SharedNodesTable},
    core::MethodSummary,
    errors::CompareError,
};
use itertools::Itertools;
use std::path::Path;

/// Name of the per-method summary report file.
pub const GENERAL_INFO_REPORT: &str = "general_info.csv";
/// Name of the shape-based similarity report file.
pub const SHAPE_REPORT: &str = "similarity_shape_based.csv";
/// Name of the shared-nodes-based similarity report file.
pub const SHARED_NODES_REPORT: &str = "similarity_shared_nodes_based.csv";

/// File name of the per-pair shared-nodes detail report.
pub fn pair_report_name(method1: &str, method2: &str) -> String {
    format!("{method1}-{method2}.csv")
}

/// Write the per-method summary table.
pub fn write_general_info(path: &Path, summaries: &[MethodSummary]) -> Result<(), CompareError> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record([
        "method_name",
        "no_of_community",
        "min_node_size",
        "max_node_size",
        "distribution_node_size",
    ])?;
    for summary in summaries {
        writer.write_record([
            summary.method.clone(),
            summary.num_communities.to_string(),
            summary.min_size.to_string(),
            summary.max_size.to_string(),
            summary.size_distribution.iter().join(";"),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

/// Write the all-pairs shape-similarity table.
pub fn write_shape_report(
    path: &Path,
    rows: &[(String, String, ListSimilarity)],
) -> Result<(), CompareError> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record([
        "method1",
        "method2",
        "euclidean_distance",
        "cosine_similarity",
        "pearson_correlation",
        "spearman_correlation",
        "jaccard_similarity",
        "overlap_coefficient",
        "rmsd",
        "manhattan_distance",
    ])?;
    for (method1, method2, sim) in rows {
        writer.write_record([
            method1.clone(),
            method2.clone(),
            sim.euclidean_distance.to_string(),
            sim.cosine_similarity.to_string(),
            sim.pearson_correlation.to_string(),
            sim.spearman_correlation.to_string(),
            sim.jaccard_similarity.to_string(),
            sim.overlap_coefficient.to_string(),
            sim.rmsd.to_string(),
            sim.manhattan_distance.to_string(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

/// Write the all-pairs shared-nodes summary table (mean scores per pair).
pub fn write_shared_nodes_summary(
    path: &Path,
    rows: &[(String, String, f64, f64)],
) -> Result<(), CompareError> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["method1", "method2", "similarity_score1", "similarity_score2"])?;
    for (method1, method2, score1, score2) in rows {
        writer.write_record([
            method1.clone(),
            method2.clone(),
            score1.to_string(),
            score2.to_string(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

/// Write the full shared-nodes detail table for one method pair.
pub fn write_shared_nodes_detail(
    path: &Path,
    method1: &str,
    method2: &str,
    table: &SharedNodesTable,
) -> Result<(), CompareError> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record([
        format!("community_{method1}"),
        format!("community_{method2}"),
        "node_count_shared".to_string(),
        format!("node_count_{method1}"),
        format!("node_count_{method2}"),
        "prcntg1".to_string(),
        "prcntg2".to_string(),
    ])?;
    for row in &table.rows {
        writer.write_record([
            row.community_a.clone(),
            row.community_b.clone(),
            row.shared.to_string(),
            row.size_a.to_string(),
            row.size_b.to_string(),
            row.score1.to_string(),
            row.score2.to_string(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}
