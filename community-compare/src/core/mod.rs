//! Core data model: per-method membership tables and their summaries.

use rustc_hash::FxHashMap;
use serde::Deserialize;

/// A single (node, community) assignment read from a method's data file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MembershipRow {
    pub node: String,
    pub community: String,
}

/// The full (node, community) assignment table produced by one
/// community-detection method.
///
/// Rows are kept in file order; a node is assumed to appear at most once
/// (not enforced). Ids are strings, integer inputs are normalised to their
/// decimal form by the loaders so csv and parquet data join identically.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MembershipTable {
    rows: Vec<MembershipRow>,
}

impl MembershipTable {
    pub fn new(rows: Vec<MembershipRow>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[MembershipRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterator over node ids in this table.
    pub fn nodes(&self) -> impl Iterator<Item = &str> + '_ {
        self.rows.iter().map(|row| row.node.as_str())
    }

    /// Group by community and count members.
    pub fn community_sizes(&self) -> FxHashMap<&str, usize> {
        let mut sizes: FxHashMap<&str, usize> = FxHashMap::default();
        for row in &self.rows {
            *sizes.entry(row.community.as_str()).or_insert(0) += 1;
        }
        sizes
    }

    /// Node id to community id lookup for joins against another method.
    pub fn node_to_community(&self) -> FxHashMap<&str, &str> {
        self.rows
            .iter()
            .map(|row| (row.node.as_str(), row.community.as_str()))
            .collect()
    }
}

/// Descriptive statistics for the communities one method produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodSummary {
    pub method: String,
    pub num_communities: usize,
    pub min_size: usize,
    pub max_size: usize,
    /// Community sizes sorted descending.
    pub size_distribution: Vec<usize>,
}

impl MethodSummary {
    /// Summarise community count and size distribution for `table`.
    pub fn from_table(method: impl Into<String>, table: &MembershipTable) -> Self {
        let mut size_distribution: Vec<usize> = table.community_sizes().into_values().collect();
        size_distribution.sort_unstable_by(|a, b| b.cmp(a));
        Self {
            method: method.into(),
            num_communities: size_distribution.len(),
            min_size: size_distribution.last().copied().unwrap_or(0),
            max_size: size_distribution.first().copied().unwrap_or(0),
            size_distribution,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    fn table(rows: &[(&str, &str)]) -> MembershipTable {
        MembershipTable::new(
            rows.iter()
                .map(|(node, community)| MembershipRow {
                    node: node.to_string(),
                    community: community.to_string(),
                })
                .collect(),
        )
    }

    #[test]
    fn summary_orders_sizes_descending() {
        let t = table(&[
            ("n1", "x"),
            ("n2", "y"),
            ("n3", "x"),
            ("n4", "z"),
            ("n5", "y"),
            ("n6", "x"),
        ]);
        let summary = MethodSummary::from_table("method", &t);
        assert_eq!(summary.num_communities, 3);
        assert_eq!(summary.min_size, 1);
        assert_eq!(summary.max_size, 3);
        assert_eq!(summary.size_distribution, vec![3, 2, 1]);
    }

    #[test]
    fn summary_of_empty_table() {
        let summary = MethodSummary::from_table("empty", &MembershipTable::default());
        assert_eq!(summary.num_communities, 0);
        assert_eq!(summary.size_distribution, Vec::<usize>::new());
    }

    #[test]
    fn node_lookup_covers_all_rows() {
        let t = table(&[("a", "1"), ("b", "1"), ("c", "2")]);
        let lookup = t.node_to_community();
        assert_eq!(lookup.len(), 3);
        assert_eq!(lookup["a"], "1");
        assert_eq!(lookup["c"], "2");
    }
}
