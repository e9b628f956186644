//! Euclidean distance between vectors

/// Compute the Euclidean (L2) distance between two vectors.
///
/// Returns `None` when the inputs differ in length or either one is empty;
/// such a pair is not comparable. Squared differences are summed in index
/// order, so identical inputs always produce bit-identical results.
pub fn euclidean_distance(a: &[f32], b: &[f32]) -> Option<f32> {
    if a.len() != b.len() || a.is_empty() {
        return None;
    }

    let sum = a
        .iter()
        .zip(b.iter())
        .map(|(x, y)| {
            let diff = x - y;
            diff * diff
        })
        .fold(0.0f32, |acc, sq| acc + sq);

    Some(sum.sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_euclidean_distance() {
        let dist = euclidean_distance(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]).unwrap();
        assert_relative_eq!(dist, 5.196152, epsilon = 1e-5);
    }

    #[test]
    fn test_euclidean_three_four_five() {
        assert_eq!(euclidean_distance(&[0.0, 0.0], &[3.0, 4.0]), Some(5.0));
    }

    #[test]
    fn test_euclidean_same_vector() {
        let v = [1.0, 2.0, 3.0];
        assert_eq!(euclidean_distance(&v, &v), Some(0.0));
    }

    #[test]
    fn test_symmetry() {
        let a = [0.3, -1.7, 2.2, 9.0];
        let b = [4.1, 0.0, -3.3, 1.5];
        assert_eq!(euclidean_distance(&a, &b), euclidean_distance(&b, &a));
    }

    #[test]
    fn test_dimension_mismatch() {
        assert_eq!(euclidean_distance(&[1.0, 2.0], &[1.0, 2.0, 3.0]), None);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(euclidean_distance(&[], &[]), None);
        assert_eq!(euclidean_distance(&[], &[1.0]), None);
    }
}
