//! Tests for bounded random draws

#[cfg(test)]
mod tests {
    use mapcarve::math::random::{RandomSource, seeded};
    use rand::RngCore;

    // Tests draws stay inside the half-open range
    // Verified by using an inclusive range
    #[test]
    fn test_next_between_half_open() {
        let mut rng = seeded(42);

        for _ in 0..1000 {
            let value = rng.next_between(1, 100);
            assert!((1..100).contains(&value));
        }
        for _ in 0..100 {
            assert_eq!(rng.next_between(5, 6), 5);
        }
    }

    // Tests empty and inverted ranges return the lower bound
    // Verified by sampling an empty range
    #[test]
    fn test_empty_range_returns_min() {
        let mut rng = seeded(1);

        assert_eq!(rng.next_between(7, 7), 7);
        assert_eq!(rng.next_between(9, 3), 9);
        assert_eq!(rng.pick_index(0), 0);
    }

    // Tests the whole range is reachable
    // Verified by excluding the last index
    #[test]
    fn test_pick_index_covers_range() {
        let mut rng = seeded(3);
        let mut seen = [false; 4];

        for _ in 0..200 {
            if let Some(slot) = seen.get_mut(rng.pick_index(4)) {
                *slot = true;
            }
        }

        assert!(seen.iter().all(|&hit| hit));
    }

    // Tests seeded generators replay the same sequence
    // Verified by seeding from entropy
    #[test]
    fn test_seeded_is_deterministic() {
        let mut first = seeded(99);
        let mut second = seeded(99);

        let a: Vec<usize> = (0..20).map(|_| first.next_between(0, 1000)).collect();
        let b: Vec<usize> = (0..20).map(|_| second.next_between(0, 1000)).collect();

        assert_eq!(a, b);
    }

    // Tests unsized generators are accepted through trait objects
    // Verified by requiring a sized generator
    #[test]
    fn test_trait_object_source() {
        let mut rng = seeded(8);
        let source: &mut dyn RngCore = &mut rng;

        for _ in 0..50 {
            assert!(source.pick_index(3) < 3);
        }
    }
}
