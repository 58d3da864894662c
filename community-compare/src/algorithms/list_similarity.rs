//! # Distribution shape similarity
//!
//! Standard distance and similarity measures between two numeric sequences,
//! used to compare community-size distributions. Sequences of different
//! lengths are zero-padded at the tail before any measure is computed.
//!
//! Degenerate inputs (zero-variance or all-zero sequences) yield `NaN` for
//! the measures that are undefined on them; nothing here panics or errors.

/// The eight shape measures computed for a pair of padded sequences.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ListSimilarity {
    pub euclidean_distance: f64,
    pub cosine_similarity: f64,
    pub pearson_correlation: f64,
    pub spearman_correlation: f64,
    /// Jaccard score of the binary presence encodings (values clipped to {0, 1}).
    pub jaccard_similarity: f64,
    /// Σ min(aᵢ, bᵢ) / min(Σa, Σb).
    pub overlap_coefficient: f64,
    pub rmsd: f64,
    pub manhattan_distance: f64,
}

/// Zero-pad the shorter sequence so both have equal length.
pub fn pad_tail_zeros(a: &[f64], b: &[f64]) -> (Vec<f64>, Vec<f64>) {
    let len = a.len().max(b.len());
    let mut a = a.to_vec();
    let mut b = b.to_vec();
    a.resize(len, 0.0);
    b.resize(len, 0.0);
    (a, b)
}

/// Compute all shape measures for two numeric sequences.
///
/// The inputs are padded with [`pad_tail_zeros`] first, so callers may pass
/// distributions of different lengths.
pub fn list_similarity_measures(a: &[f64], b: &[f64]) -> ListSimilarity {
    let (a, b) = pad_tail_zeros(a, b);

    let squared_diff: f64 = a.iter().zip(&b).map(|(x, y)| (x - y) * (x - y)).sum();
    let n = a.len() as f64;

    ListSimilarity {
        euclidean_distance: squared_diff.sqrt(),
        cosine_similarity: cosine(&a, &b),
        pearson_correlation: pearson(&a, &b),
        spearman_correlation: spearman(&a, &b),
        jaccard_similarity: binary_jaccard(&a, &b),
        overlap_coefficient: overlap_coefficient(&a, &b),
        rmsd: (squared_diff / n).sqrt(),
        manhattan_distance: a.iter().zip(&b).map(|(x, y)| (x - y).abs()).sum(),
    }
}

fn cosine(a: &[f64], b: &[f64]) -> f64 {
    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a: f64 = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b: f64 = b.iter().map(|x| x * x).sum::<f64>().sqrt();
    dot / (norm_a * norm_b)
}

fn pearson(a: &[f64], b: &[f64]) -> f64 {
    let n = a.len() as f64;
    let mean_a: f64 = a.iter().sum::<f64>() / n;
    let mean_b: f64 = b.iter().sum::<f64>() / n;
    let cov: f64 = a
        .iter()
        .zip(b)
        .map(|(x, y)| (x - mean_a) * (y - mean_b))
        .sum();
    let var_a: f64 = a.iter().map(|x| (x - mean_a) * (x - mean_a)).sum();
    let var_b: f64 = b.iter().map(|y| (y - mean_b) * (y - mean_b)).sum();
    cov / (var_a.sqrt() * var_b.sqrt())
}

/// Pearson correlation of the rank transforms, with tied values assigned
/// the average of the ranks they span.
fn spearman(a: &[f64], b: &[f64]) -> f64 {
    pearson(&average_ranks(a), &average_ranks(b))
}

fn average_ranks(values: &[f64]) -> Vec<f64> {
    let mut order: Vec<usize> = (0..values.len()).collect();
    order.sort_by(|&i, &j| values[i].total_cmp(&values[j]));

    let mut ranks = vec![0.0; values.len()];
    let mut start = 0;
    while start < order.len() {
        let mut end = start;
        while end + 1 < order.len() && values[order[end + 1]] == values[order[start]] {
            end += 1;
        }
        // ranks are 1-based; ties share the average rank of their span
        let rank = (start + end) as f64 / 2.0 + 1.0;
        for &index in &order[start..=end] {
            ranks[index] = rank;
        }
        start = end + 1;
    }
    ranks
}

fn binary_jaccard(a: &[f64], b: &[f64]) -> f64 {
    let both = a.iter().zip(b).filter(|(x, y)| **x > 0.0 && **y > 0.0).count() as f64;
    let either = a.iter().zip(b).filter(|(x, y)| **x > 0.0 || **y > 0.0).count() as f64;
    both / either
}

fn overlap_coefficient(a: &[f64], b: &[f64]) -> f64 {
    let min_sum: f64 = a.iter().zip(b).map(|(x, y)| x.min(*y)).sum();
    let sum_a: f64 = a.iter().sum();
    let sum_b: f64 = b.iter().sum();
    min_sum / sum_a.min(sum_b)
}
