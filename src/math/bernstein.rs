use super::Vector2;

/// Binomial coefficient "n choose k" as a real number.
///
/// Computed as a running product so moderate degrees never overflow the
/// intermediate factorials. Returns `0.0` when `k > n`.
#[must_use]
pub fn binomial(n: u32, k: u32) -> f64 {
    if k > n {
        return 0.0;
    }
    let k = k.min(n - k);
    (1..=k).fold(1.0, |acc, i| acc * f64::from(n - k + i) / f64::from(i))
}

/// The `i`-th Bernstein basis polynomial of degree `n` evaluated at `t`:
/// `C(n, i) * t^i * (1 - t)^(n - i)`.
#[must_use]
pub fn bernstein(n: u32, i: u32, t: f64) -> f64 {
    if i > n {
        return 0.0;
    }
    #[allow(clippy::cast_possible_wrap)]
    let (pi, pn) = (i as i32, (n - i) as i32);
    binomial(n, i) * t.powi(pi) * (1.0 - t).powi(pn)
}

/// Evaluates the Bernstein-form polynomial with coefficients `coords` at `t`
/// by repeated linear interpolation.
///
/// Every intermediate value is a convex combination of the inputs, so the
/// result stays finite for any degree. Returns the zero vector for an empty
/// slice.
#[must_use]
pub fn de_casteljau(coords: &[Vector2], t: f64) -> Vector2 {
    let mut work = coords.to_vec();
    for level in (1..work.len()).rev() {
        for i in 0..level {
            work[i] = work[i] * (1.0 - t) + work[i + 1] * t;
        }
    }
    work.first().copied().unwrap_or_else(Vector2::zeros)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn binomial_small_values() {
        assert_relative_eq!(binomial(0, 0), 1.0);
        assert_relative_eq!(binomial(4, 2), 6.0);
        assert_relative_eq!(binomial(5, 1), 5.0);
        assert_relative_eq!(binomial(10, 3), 120.0);
        assert_relative_eq!(binomial(3, 4), 0.0);
    }

    #[test]
    fn binomial_is_symmetric() {
        for k in 0..=12 {
            assert_relative_eq!(binomial(12, k), binomial(12, 12 - k));
        }
    }

    #[test]
    fn binomial_large_degree_stays_finite() {
        assert!(binomial(200, 100).is_finite());
    }

    #[test]
    fn basis_partitions_unity() {
        for &t in &[0.0, 0.1, 0.37, 0.5, 0.9, 1.0] {
            let sum: f64 = (0..=6).map(|i| bernstein(6, i, t)).sum();
            assert_relative_eq!(sum, 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn basis_at_ends_selects_first_and_last() {
        assert_eq!(bernstein(3, 0, 0.0), 1.0);
        assert_eq!(bernstein(3, 1, 0.0), 0.0);
        assert_eq!(bernstein(3, 3, 1.0), 1.0);
        assert_eq!(bernstein(3, 2, 1.0), 0.0);
    }

    #[test]
    fn de_casteljau_matches_basis_blend() {
        let coords = [
            Vector2::new(0.0, 0.0),
            Vector2::new(30.0, 90.0),
            Vector2::new(-20.0, 15.0),
            Vector2::new(100.0, 40.0),
        ];
        for &t in &[0.0, 0.2, 0.5, 0.77, 1.0] {
            let blend = coords
                .iter()
                .zip(0..=3)
                .fold(Vector2::zeros(), |acc, (c, j)| acc + c * bernstein(3, j, t));
            let p = de_casteljau(&coords, t);
            assert_relative_eq!(p.x, blend.x, epsilon = 1e-9);
            assert_relative_eq!(p.y, blend.y, epsilon = 1e-9);
        }
    }

    #[test]
    fn de_casteljau_hits_end_coefficients_exactly() {
        let coords: Vec<Vector2> = (0..1500)
            .map(|i| Vector2::new(f64::from(i) * 0.5, f64::from(i % 7)))
            .collect();
        assert_eq!(de_casteljau(&coords, 0.0), coords[0]);
        assert_eq!(de_casteljau(&coords, 1.0), coords[1499]);
        assert!(binomial(1499, 749).is_infinite());
    }
}
