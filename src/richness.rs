//! Vocabulary-richness statistics
//!
//! Estimates the classic lexical-diversity measures from an n-gram
//! frequency map: hapax counts, Brunet's index, Honoré's statistic,
//! type-token ratio, Sichel's formulation, Yule's measure, and the
//! entropy of the n-gram distribution. The measures are customarily
//! estimated on 1-grams, but any n works.
//!
//! Two formulas deviate from the textbook definitions and must stay
//! that way for comparability with previously published numbers:
//! Brunet is the right-associated `N^(V^-0.172)`, not `(N^V)^-0.172`,
//! and TTR is `V1/V`, not `V/N`.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Vocabulary-richness measures computed from one frequency map.
///
/// Serialized field names match the stat names used in the literature
/// (`V1`, `Brunet`, `TTR`, ...), so a serialized report reads like a
/// results table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RichnessStats {
    /// Hapax legomena: n-grams occurring exactly once
    #[serde(rename = "V1")]
    pub v1: u64,
    /// Hapax dislegomena: n-grams occurring at most twice
    #[serde(rename = "V2")]
    pub v2: u64,
    /// Text size: total n-gram occurrences
    #[serde(rename = "N")]
    pub n: u64,
    /// Vocabulary size: distinct n-grams
    #[serde(rename = "V")]
    pub v: u64,
    /// Brunet's index
    #[serde(rename = "Brunet")]
    pub brunet: f64,
    /// Honoré's statistic
    #[serde(rename = "Honore")]
    pub honore: f64,
    /// Type-token ratio
    #[serde(rename = "TTR")]
    pub ttr: f64,
    /// Sichel's formulation
    #[serde(rename = "Sichel")]
    pub sichel: f64,
    /// Yule's measure
    #[serde(rename = "Yule")]
    pub yule: f64,
    /// Entropy of the n-gram distribution, in bits
    #[serde(rename = "Entropy")]
    pub entropy: f64,
}

/// Compute every richness measure from an n-gram frequency map.
///
/// Pure and total: divisions that would be undefined (empty map, all
/// hapaxes for Honoré) yield the literal value `0` for the affected
/// statistic instead of failing.
pub fn estimate_richness(counts: &FxHashMap<String, u64>) -> RichnessStats {
    let mut v1 = 0u64;
    let mut v2 = 0u64;
    let mut n = 0u64;
    // Frequency of frequencies: count value -> how many distinct n-grams
    // have exactly that count
    let mut freq_of_freqs: FxHashMap<u64, u64> = FxHashMap::default();

    for &reps in counts.values() {
        *freq_of_freqs.entry(reps).or_insert(0) += 1;
        n += reps;
        if reps <= 2 {
            v2 += 1;
            if reps == 1 {
                v1 += 1;
            }
        }
    }
    let v = counts.len() as u64;

    let n_f = n as f64;
    let v_f = v as f64;

    let brunet = if n > 0 && v > 0 {
        n_f.powf(v_f.powf(-0.172))
    } else {
        0.0
    };

    let honore = {
        let denominator = if v > 0 { 1.0 - v1 as f64 / v_f } else { 0.0 };
        if v > 0 && denominator != 0.0 {
            100.0 * n_f.log10() / denominator
        } else {
            0.0
        }
    };

    let (ttr, sichel) = if v > 0 {
        (v1 as f64 / v_f, v2 as f64 / v_f)
    } else {
        (0.0, 0.0)
    };

    let yule = if n > 0 {
        let sum: u64 = freq_of_freqs
            .iter()
            .map(|(&count, &num_grams)| count * count * num_grams)
            .sum();
        1e4 * sum as f64 / n_f - 1.0 / n_f
    } else {
        0.0
    };

    // 0 * log2(0) is taken as 0, so the empty map gets entropy 0 instead
    // of NaN
    let entropy = if n > 0 {
        -counts
            .values()
            .map(|&reps| {
                let p = reps as f64 / n_f;
                if p > 0.0 {
                    p * p.log2()
                } else {
                    0.0
                }
            })
            .sum::<f64>()
    } else {
        0.0
    };

    RichnessStats {
        v1,
        v2,
        n,
        v,
        brunet,
        honore,
        ttr,
        sichel,
        yule,
        entropy,
    }
}
