//! # Shared-node similarity
//!
//! Compares two community partitions through node co-membership: an inner
//! join of the two membership tables on node id yields, for every pair of
//! communities (one per method), the count of nodes they share. Each pair is
//! scored with a Dice-like and a Jaccard-like ratio against the communities'
//! sizes within their own methods.

use crate::core::MembershipTable;
use rustc_hash::FxHashMap;

/// One community pair with at least one shared node.
#[derive(Debug, Clone, PartialEq)]
pub struct SharedNodesRow {
    pub community_a: String,
    pub community_b: String,
    /// Number of nodes assigned to `community_a` by one method and
    /// `community_b` by the other.
    pub shared: usize,
    /// Total size of `community_a` within its own method.
    pub size_a: usize,
    /// Total size of `community_b` within its own method.
    pub size_b: usize,
    /// Dice-like ratio: 2·shared / (size_a + size_b). Always in [0, 1].
    pub score1: f64,
    /// Jaccard-like ratio: shared / (size_a + size_b − shared). Always in [0, 1].
    pub score2: f64,
}

/// All overlapping community pairs between two methods, sorted by `score2`
/// descending, with the two mean overlap scores.
#[derive(Debug, Clone, PartialEq)]
pub struct SharedNodesTable {
    pub rows: Vec<SharedNodesRow>,
    /// Mean of `score1` over all rows; `NaN` when the methods share no nodes.
    pub mean_score1: f64,
    /// Mean of `score2` over all rows; `NaN` when the methods share no nodes.
    pub mean_score2: f64,
}

/// Compute the shared-node similarity table for two membership tables.
pub fn shared_nodes_similarity(a: &MembershipTable, b: &MembershipTable) -> SharedNodesTable {
    let b_lookup = b.node_to_community();

    // inner join on node id, grouped by the community pair
    let mut shared_counts: FxHashMap<(&str, &str), usize> = FxHashMap::default();
    for row in a.rows() {
        if let Some(community_b) = b_lookup.get(row.node.as_str()) {
            *shared_counts
                .entry((row.community.as_str(), community_b))
                .or_insert(0) += 1;
        }
    }

    let sizes_a = a.community_sizes();
    let sizes_b = b.community_sizes();

    let mut rows: Vec<SharedNodesRow> = shared_counts
        .into_iter()
        .map(|((community_a, community_b), shared)| {
            let size_a = sizes_a[community_a];
            let size_b = sizes_b[community_b];
            SharedNodesRow {
                community_a: community_a.to_string(),
                community_b: community_b.to_string(),
                shared,
                size_a,
                size_b,
                score1: 2.0 * shared as f64 / (size_a + size_b) as f64,
                score2: shared as f64 / (size_a + size_b - shared) as f64,
            }
        })
        .collect();

    rows.sort_by(|x, y| {
        y.score2
            .total_cmp(&x.score2)
            .then_with(|| y.shared.cmp(&x.shared))
            .then_with(|| x.community_a.cmp(&y.community_a))
            .then_with(|| x.community_b.cmp(&y.community_b))
    });

    let count = rows.len() as f64;
    let mean_score1 = rows.iter().map(|row| row.score1).sum::<f64>() / count;
    let mean_score2 = rows.iter().map(|row| row.score2).sum::<f64>() / count;

    SharedNodesTable {
        rows,
        mean_score1,
        mean_score2,
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::core::MembershipRow;
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

    fn two_partitions() -> (MembershipTable, MembershipTable) {
        // method 1: A = {n1..n4}, B = {n5, n6, n7}, C = {n8, n9}
        let a = table(&[
            ("n1", "A"),
            ("n2", "A"),
            ("n3", "A"),
            ("n4", "A"),
            ("n5", "B"),
            ("n6", "B"),
            ("n7", "B"),
            ("n8", "C"),
            ("n9", "C"),
        ]);
        // method 2: X = {n1..n4}, Y = {n5, n6, n8}, Z = {n7, n9}
        let b = table(&[
            ("n1", "X"),
            ("n2", "X"),
            ("n3", "X"),
            ("n4", "X"),
            ("n5", "Y"),
            ("n6", "Y"),
            ("n8", "Y"),
            ("n7", "Z"),
            ("n9", "Z"),
        ]);
        (a, b)
    }

    #[test]
    fn overlapping_pairs_and_scores() {
        let (a, b) = two_partitions();
        let result = shared_nodes_similarity(&a, &b);

        assert_eq!(result.rows.len(), 5);
        // (A, X) share all four nodes and top the score2 ordering
        assert_eq!(result.rows[0].community_a, "A");
        assert_eq!(result.rows[0].community_b, "X");
        assert_eq!(result.rows[0].shared, 4);
        assert_eq!(result.rows[0].score1, 1.0);
        assert_eq!(result.rows[0].score2, 1.0);
        // (B, Y) share {n5, n6}
        assert_eq!(result.rows[1].community_a, "B");
        assert_eq!(result.rows[1].community_b, "Y");
        assert_eq!(result.rows[1].score2, 0.5);

        let expected_mean1 = (1.0 + 2.0 / 3.0 + 0.5 + 0.4 + 0.4) / 5.0;
        let expected_mean2 = (1.0 + 0.5 + 1.0 / 3.0 + 0.25 + 0.25) / 5.0;
        assert!((result.mean_score1 - expected_mean1).abs() < 1e-12);
        assert!((result.mean_score2 - expected_mean2).abs() < 1e-12);
    }

    #[test]
    fn rows_are_sorted_by_score2_descending() {
        let (a, b) = two_partitions();
        let result = shared_nodes_similarity(&a, &b);
        for pair in result.rows.windows(2) {
            assert!(pair[0].score2 >= pair[1].score2);
        }
    }

    #[test]
    fn scores_stay_within_unit_interval() {
        let (a, b) = two_partitions();
        for row in shared_nodes_similarity(&a, &b).rows {
            assert!(row.score1 > 0.0 && row.score1 <= 1.0);
            assert!(row.score2 > 0.0 && row.score2 <= 1.0);
        }
    }

    #[test]
    fn disjoint_node_sets_give_empty_table() {
        let a = table(&[("n1", "A"), ("n2", "A")]);
        let b = table(&[("m1", "X"), ("m2", "X")]);
        let result = shared_nodes_similarity(&a, &b);
        assert_eq!(result.rows, vec![]);
        assert!(result.mean_score1.is_nan());
        assert!(result.mean_score2.is_nan());
    }

    #[test]
    fn join_is_an_inner_join() {
        // n3 only exists in method 1 and must not contribute
        let a = table(&[("n1", "A"), ("n2", "A"), ("n3", "A")]);
        let b = table(&[("n1", "X"), ("n2", "X")]);
        let result = shared_nodes_similarity(&a, &b);
        assert_eq!(result.rows.len(), 1);
        assert_eq!(result.rows[0].shared, 2);
        assert_eq!(result.rows[0].size_a, 3);
        assert_eq!(result.rows[0].size_b, 2);
    }
}
