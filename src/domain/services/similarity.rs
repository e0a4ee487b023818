use crate::domain::DomainError;

/// Threshold below which a norm product is treated as zero.
const DEGENERATE_NORM_EPSILON: f64 = 1e-12;

/// Computes the cosine similarity between two embedding vectors.
///
/// Returns the cosine of the angle between `a` and `b`, clamped to
/// `[-1.0, 1.0]`. The result is magnitude-invariant: scaling either vector
/// by a positive factor does not change it.
///
/// Fails with [`DomainError::DimensionMismatch`] when the vectors differ in
/// length and with [`DomainError::DegenerateInput`] when either vector has
/// zero magnitude.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Result<f32, DomainError> {
    if a.len() != b.len() {
        return Err(DomainError::DimensionMismatch {
            left: a.len(),
            right: b.len(),
        });
    }

    // Accumulate in f64 so long vectors of small components stay stable.
    let mut dot = 0.0_f64;
    let mut norm_a = 0.0_f64;
    let mut norm_b = 0.0_f64;

    for (&x, &y) in a.iter().zip(b.iter()) {
        let x = x as f64;
        let y = y as f64;
        dot = x.mul_add(y, dot);
        norm_a = x.mul_add(x, norm_a);
        norm_b = y.mul_add(y, norm_b);
    }

    let denom = norm_a.sqrt() * norm_b.sqrt();
    if denom < DEGENERATE_NORM_EPSILON {
        return Err(DomainError::DegenerateInput);
    }

    Ok((dot / denom).clamp(-1.0, 1.0) as f32)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f32 = 1e-6;

    #[test]
    fn test_self_similarity_is_one() {
        let v = vec![0.3, -1.2, 4.5, 0.07];

        let similarity = cosine_similarity(&v, &v).unwrap();

        assert!((similarity - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_similarity_is_symmetric() {
        let a = vec![1.0, 2.0, 3.0];
        let b = vec![-2.0, 0.5, 1.5];

        let ab = cosine_similarity(&a, &b).unwrap();
        let ba = cosine_similarity(&b, &a).unwrap();

        assert!((ab - ba).abs() < TOLERANCE);
    }

    #[test]
    fn test_similarity_is_scale_invariant() {
        let a = vec![1.0, 2.0, 3.0];
        let b = vec![-2.0, 0.5, 1.5];
        let scaled: Vec<f32> = a.iter().map(|x| x * 7.5).collect();

        let original = cosine_similarity(&a, &b).unwrap();
        let rescaled = cosine_similarity(&scaled, &b).unwrap();

        assert!((original - rescaled).abs() < TOLERANCE);
    }

    #[test]
    fn test_orthogonal_vectors_score_zero() {
        let similarity = cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]).unwrap();

        assert!(similarity.abs() < TOLERANCE);
        assert_eq!(format!("{:.4}", similarity), "0.0000");
    }

    #[test]
    fn test_opposite_vectors_score_minus_one() {
        let similarity = cosine_similarity(&[2.0, 0.0], &[-1.0, 0.0]).unwrap();

        assert!((similarity + 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_mismatched_dimensions_fail() {
        let result = cosine_similarity(&[1.0, 0.0, 0.0], &[1.0, 0.0]);

        match result {
            Err(DomainError::DimensionMismatch { left, right }) => {
                assert_eq!(left, 3);
                assert_eq!(right, 2);
            }
            other => panic!("Expected dimension mismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_vector_fails() {
        let result = cosine_similarity(&[0.0, 0.0, 0.0], &[1.0, 2.0, 3.0]);

        assert!(matches!(result, Err(DomainError::DegenerateInput)));
    }

    #[test]
    fn test_empty_vectors_fail() {
        let result = cosine_similarity(&[], &[]);

        assert!(matches!(result, Err(DomainError::DegenerateInput)));
    }

    #[test]
    fn test_result_stays_in_unit_interval() {
        // Nearly parallel vectors can push the raw division past 1.0.
        let a = vec![0.1000001, 0.2000002, 0.3000003];
        let b = vec![0.1, 0.2, 0.3];

        let similarity = cosine_similarity(&a, &b).unwrap();

        assert!(similarity <= 1.0);
        assert!(similarity >= -1.0);
    }
}
