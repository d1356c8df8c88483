use num::{BigInt, BigRational, BigUint, One, ToPrimitive, Zero};

/// Exact binomial coefficient C(n, k).
///
/// Iterates over `1..=min(k, n - k)`, multiplying a running numerator by
/// descending values of `n` and a running denominator by the ascending loop
/// counter, with one exact integer division at the end. The iteration bound
/// keeps intermediate products small for large `n`.
///
/// Returns 0 when `k > n`. Corpus totals can exceed what fits in a fixed
/// width product, so the accumulators are `BigUint`.
pub fn choose(n: u64, k: u64) -> BigUint {
    if k > n {
        return BigUint::zero();
    }
    let bound = k.min(n - k);
    let mut numer = BigUint::one();
    let mut denom = BigUint::one();
    let mut n = n;
    for t in 1..=bound {
        numer *= n;
        denom *= t;
        n -= 1;
    }
    numer / denom
}

/// One minus the hypergeometric probability of drawing exactly `successes`
/// occurrences of a token with corpus frequency `freq` in a random sample of
/// `sample_size` tokens from a corpus of `population_size` tokens, scaled by
/// `1 / sample_size`. With `successes = 0` this is the probability that the
/// token appears at least once, which is how HD-D uses it.
///
/// The scaling is part of the HD-D metric definition; the returned value is
/// a dimensionless estimate, not a probability, and does not sum to 1 over
/// anything.
///
/// Degenerate cases return 0.0 instead of faulting: a zero sample size, and
/// a zero denominator C(population_size, sample_size) (possible when the
/// sample is larger than the fitted corpus).
pub fn hyper(successes: u64, sample_size: u64, population_size: u64, freq: u64) -> f64 {
    if sample_size == 0 {
        return 0.0;
    }
    let denom = choose(population_size, sample_size);
    if denom.is_zero() {
        return 0.0;
    }
    let misses = match (
        population_size.checked_sub(freq),
        sample_size.checked_sub(successes),
    ) {
        (Some(rest), Some(draws)) => choose(rest, draws),
        // freq > population or successes > sample: no way to draw, C(..) = 0
        _ => BigUint::zero(),
    };
    let numer = choose(freq, successes) * misses;
    let ratio = BigRational::new(BigInt::from(numer), BigInt::from(denom))
        .to_f64()
        .unwrap_or(0.0);
    (1.0 - ratio) / sample_size as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn choose_u64(n: u64, k: u64) -> u64 {
        choose(n, k).to_u64().expect("fits in u64")
    }

    #[test]
    fn choose_known_small_values() {
        assert_eq!(choose_u64(5, 0), 1);
        assert_eq!(choose_u64(5, 5), 1);
        assert_eq!(choose_u64(5, 2), 10);
        assert_eq!(choose_u64(0, 0), 1);
        assert_eq!(choose_u64(10, 3), 120);
    }

    #[test]
    fn choose_out_of_range_is_zero() {
        assert!(choose(5, 6).is_zero());
        assert!(choose(0, 1).is_zero());
    }

    #[test]
    fn choose_is_symmetric() {
        for n in 0..30u64 {
            for k in 0..=n {
                assert_eq!(choose(n, k), choose(n, n - k), "C({n},{k})");
            }
        }
    }

    #[test]
    fn choose_satisfies_pascal_identity_beyond_u64() {
        // C(200, 100) has 59 digits; verify the big path against Pascal's rule
        let lhs = choose(200, 100);
        let rhs = choose(199, 99) + choose(199, 100);
        assert_eq!(lhs, rhs);
        assert!(lhs.to_u64().is_none(), "value should exceed u64");
    }

    #[test]
    fn hyper_zero_sample_returns_zero() {
        assert_eq!(hyper(0, 0, 100, 7), 0.0);
        assert_eq!(hyper(0, 0, 0, 0), 0.0);
    }

    #[test]
    fn hyper_zero_denominator_returns_zero() {
        // sample larger than the population: C(4, 10) == 0
        assert_eq!(hyper(0, 10, 4, 2), 0.0);
        assert_eq!(hyper(0, 3, 0, 0), 0.0);
    }

    #[test]
    fn hyper_known_value() {
        // pop 5, freq 1, sample 3: (1 - C(4,3)/C(5,3)) / 3 = (1 - 4/10) / 3
        let got = hyper(0, 3, 5, 1);
        assert!((got - 0.6 / 3.0).abs() < 1e-12, "got {got}");
    }

    #[test]
    fn hyper_unique_token_contribution_is_reciprocal_of_length() {
        // Corpus consisting of exactly one text of n all-unique tokens:
        // each type has freq 1, and with sample_size == n the miss term
        // C(n - 1, n) vanishes, so each contribution is exactly 1/n.
        for n in [1u64, 2, 5, 50, 200] {
            let got = hyper(0, n, n, 1);
            assert!((got - 1.0 / n as f64).abs() < 1e-12, "n={n} got {got}");
        }
    }

    #[test]
    fn hyper_common_token_contributes_more_than_rare_token() {
        let rare = hyper(0, 10, 1000, 1);
        let common = hyper(0, 10, 1000, 500);
        assert!(common > rare, "common {common} rare {rare}");
    }
}
