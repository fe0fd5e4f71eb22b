//! Range-safe sampling helpers
//!
//! `Rng::gen_range` panics on empty or non-finite ranges; these fall back to
//! a fixed value instead.

use rand::Rng;

/// Uniform sample in `[low, high)`; `low` when the range is empty or not finite
pub fn uniform<R: Rng>(rng: &mut R, low: f32, high: f32) -> f32 {
    if low.is_finite() && high.is_finite() && high > low {
        rng.gen_range(low..high)
    } else {
        low
    }
}

/// Uniform sample in `[-half, half)`; zero for a non-positive or non-finite range
pub fn symmetric<R: Rng>(rng: &mut R, half: f32) -> f32 {
    if half.is_finite() && half > 0.0 {
        rng.gen_range(-half..half)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_uniform_stays_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for _ in 0..500 {
            let v = uniform(&mut rng, 100.0, 1400.0);
            assert!((100.0..1400.0).contains(&v));
        }
    }

    #[test]
    fn test_symmetric_stays_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for _ in 0..500 {
            let v = symmetric(&mut rng, 40.0);
            assert!((-40.0..40.0).contains(&v));
        }
    }

    #[test]
    fn test_degenerate_ranges_do_not_panic() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        assert_eq!(uniform(&mut rng, 100.0, 100.0), 100.0);
        assert_eq!(uniform(&mut rng, 100.0, 50.0), 100.0);
        assert_eq!(uniform(&mut rng, 100.0, f32::INFINITY), 100.0);
        assert_eq!(uniform(&mut rng, 100.0, f32::NAN), 100.0);
        assert_eq!(symmetric(&mut rng, 0.0), 0.0);
        assert_eq!(symmetric(&mut rng, -5.0), 0.0);
        assert_eq!(symmetric(&mut rng, f32::INFINITY), 0.0);
        assert_eq!(symmetric(&mut rng, f32::NAN), 0.0);
    }
}
