// Vector angle between two frequency tables.
//
// Each table is a sparse vector indexed by word. The inner product only gets
// contributions from words present in both tables, and since both tables are
// sorted by word we can find those with a single merge-style sweep:
//
//   angle(A, B) = arccos( <A, B> / (|A| * |B|) )
//
// 0 means identical word distributions, pi/2 means no words in common.
//
// All sums are exact u64 with checked arithmetic. Counts are bounded by the
// number of tokens in a resident document, so overflow needs counts near
// 2^32 and is reported as `DistanceError::Overflow` rather than wrapping.

use std::cmp::Ordering;

use tracing::debug;

use super::frequency::FrequencyTable;
use crate::error::DistanceError;

/// Everything the engine derives from one pair of tables.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VectorComparison {
    /// <A, B>
    pub inner_product: u64,
    /// Distinct words present in both tables
    pub shared_words: usize,
    /// Normalized inner product, clamped to [-1, 1]
    pub cosine: f64,
    /// Angle in radians, in [0, pi/2]
    pub angle: f64,
}

/// Result of one merge sweep: the inner product and how many words matched.
struct Sweep {
    sum: u64,
    matches: usize,
}

fn sweep(a: &FrequencyTable, b: &FrequencyTable) -> Result<Sweep, DistanceError> {
    let (a, b) = (a.entries(), b.entries());
    let (mut i, mut j) = (0, 0);
    let mut sum = 0u64;
    let mut matches = 0;

    while i < a.len() && j < b.len() {
        match a[i].word.cmp(&b[j].word) {
            Ordering::Equal => {
                sum = a[i]
                    .count
                    .checked_mul(b[j].count)
                    .and_then(|product| sum.checked_add(product))
                    .ok_or(DistanceError::Overflow)?;
                matches += 1;
                i += 1;
                j += 1;
            }
            Ordering::Less => i += 1,
            Ordering::Greater => j += 1,
        }
    }

    Ok(Sweep { sum, matches })
}

/// Inner product of two frequency tables via a sorted-merge sweep.
///
/// Runs in O(|A| + |B|). Both tables must be sorted by word with no
/// duplicates, which every `FrequencyTable` is by construction.
pub fn inner_product(a: &FrequencyTable, b: &FrequencyTable) -> Result<u64, DistanceError> {
    sweep(a, b).map(|s| s.sum)
}

/// Quadratic double-loop inner product. Reference for the sweep.
pub fn naive_inner_product(a: &FrequencyTable, b: &FrequencyTable) -> u64 {
    let mut sum = 0u64;
    for x in a {
        for y in b {
            if x.word == y.word {
                sum += x.count * y.count;
            }
        }
    }
    sum
}

/// Euclidean length of a table's frequency vector.
pub fn magnitude(table: &FrequencyTable) -> Result<f64, DistanceError> {
    Ok((inner_product(table, table)? as f64).sqrt())
}

/// Run the sweep for <A, B>, |A| and |B| and derive cosine and angle.
///
/// Fails with `ZeroMagnitude` if either table is empty.
pub fn compare_tables(
    a: &FrequencyTable,
    b: &FrequencyTable,
) -> Result<VectorComparison, DistanceError> {
    let cross = sweep(a, b)?;
    let norm_a = inner_product(a, a)?;
    let norm_b = inner_product(b, b)?;

    if norm_a == 0 || norm_b == 0 {
        return Err(DistanceError::ZeroMagnitude);
    }

    // Cauchy-Schwarz equality: the vectors are parallel. Checked on exact
    // integers so floating error can't leave us at 0.99999999...
    let n = cross.sum as u128;
    let cosine = if n * n == norm_a as u128 * norm_b as u128 {
        1.0
    } else {
        let ratio = cross.sum as f64 / ((norm_a as f64).sqrt() * (norm_b as f64).sqrt());
        ratio.clamp(-1.0, 1.0)
    };
    let angle = cosine.acos();

    debug!(
        distinct_a = a.len(),
        distinct_b = b.len(),
        inner_product = cross.sum,
        shared_words = cross.matches,
        cosine,
        angle,
        "Computed vector angle"
    );

    Ok(VectorComparison {
        inner_product: cross.sum,
        shared_words: cross.matches,
        cosine,
        angle,
    })
}

/// Cosine of the angle between two tables, clamped to [-1, 1].
pub fn cosine_similarity(a: &FrequencyTable, b: &FrequencyTable) -> Result<f64, DistanceError> {
    compare_tables(a, b).map(|c| c.cosine)
}

/// Angle in radians between two tables' frequency vectors, in [0, pi/2].
pub fn vector_angle(a: &FrequencyTable, b: &FrequencyTable) -> Result<f64, DistanceError> {
    compare_tables(a, b).map(|c| c.angle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::frequency::FrequencyCounter;
    use std::f64::consts::FRAC_PI_2;

    fn table(text: &str) -> FrequencyTable {
        FrequencyTable::from_tokens(text.split_whitespace())
    }

    #[test]
    fn test_sweep_counts_only_shared_words() {
        let a = table("the cat sat on the mat");
        let b = table("the dog sat on the mat");
        assert_eq!(inner_product(&a, &b).unwrap(), 7);
        assert_eq!(inner_product(&a, &a).unwrap(), 8);
        assert_eq!(inner_product(&b, &b).unwrap(), 8);
    }

    #[test]
    fn test_sweep_matches_naive() {
        let a = table("a a b c d d d e");
        let b = table("b d d f g a");
        assert_eq!(inner_product(&a, &b).unwrap(), naive_inner_product(&a, &b));
        assert_eq!(inner_product(&a, &b).unwrap(), 2 + 1 + 6);
    }

    #[test]
    fn test_magnitude() {
        let a = table("x x x y y y y");
        assert!((magnitude(&a).unwrap() - 5.0).abs() < 1e-12);
        assert_eq!(magnitude(&FrequencyTable::default()).unwrap(), 0.0);
    }

    #[test]
    fn test_self_angle_is_exactly_zero() {
        let a = table("one two two three three three four four four four");
        assert_eq!(vector_angle(&a, &a).unwrap(), 0.0);
    }

    #[test]
    fn test_scaled_vectors_are_parallel() {
        // Same distribution, every count doubled
        let a = table("red blue blue");
        let b = table("red red blue blue blue blue");
        assert_eq!(vector_angle(&a, &b).unwrap(), 0.0);
    }

    #[test]
    fn test_disjoint_vocabularies_are_orthogonal() {
        let a = table("alpha beta");
        let b = table("gamma delta");
        assert_eq!(inner_product(&a, &b).unwrap(), 0);
        let angle = vector_angle(&a, &b).unwrap();
        assert!((angle - FRAC_PI_2).abs() < 1e-12, "Expected pi/2, got {angle}");
    }

    #[test]
    fn test_empty_table_is_an_error() {
        let empty = FrequencyTable::default();
        let a = table("word");
        assert!(matches!(
            vector_angle(&empty, &a),
            Err(DistanceError::ZeroMagnitude)
        ));
        assert!(matches!(
            vector_angle(&a, &empty),
            Err(DistanceError::ZeroMagnitude)
        ));
        assert!(matches!(
            vector_angle(&empty, &empty),
            Err(DistanceError::ZeroMagnitude)
        ));
    }

    #[test]
    fn test_compare_tables_reports_every_quantity() {
        let a = table("the cat sat on the mat");
        let b = table("the dog sat on the mat");
        let result = compare_tables(&a, &b).unwrap();

        assert_eq!(result.inner_product, 7);
        assert_eq!(result.shared_words, 4);
        assert!((result.cosine - 0.875).abs() < 1e-12);
        assert_eq!(result.angle, vector_angle(&a, &b).unwrap());
        assert_eq!(result.cosine, cosine_similarity(&a, &b).unwrap());
    }

    #[test]
    fn test_huge_counts_overflow_instead_of_wrapping() {
        let mut counter = FrequencyCounter::new();
        counter.add_count("x", 1 << 33);
        let big = counter.freeze();

        assert!(matches!(inner_product(&big, &big), Err(DistanceError::Overflow)));
        assert!(matches!(compare_tables(&big, &big), Err(DistanceError::Overflow)));

        // Just under the bound still works
        let mut counter = FrequencyCounter::new();
        counter.add_count("x", u32::MAX as u64);
        let fits = counter.freeze();
        assert_eq!(
            inner_product(&fits, &fits).unwrap(),
            u32::MAX as u64 * u32::MAX as u64
        );
    }

    #[test]
    fn test_cosine_stays_in_range() {
        let a = table("a b c d e f g h");
        let b = table("a a a a a a a a a a a a a b");
        let cos = cosine_similarity(&a, &b).unwrap();
        assert!((0.0..=1.0).contains(&cos));
    }
}
