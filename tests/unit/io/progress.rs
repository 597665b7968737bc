//! Tests for batch progress tracking

#[cfg(test)]
mod tests {
    use mapcarve::io::progress::ProgressManager;
    use std::time::Duration;

    // Tests a full batch lifecycle
    // Verified by skipping the counter update
    #[test]
    fn test_progress_lifecycle() {
        let mut pm = ProgressManager::new();

        pm.initialize(2);
        pm.start_map(42);
        pm.complete_map(Duration::from_millis(10));
        pm.start_map(43);
        pm.complete_map(Duration::from_millis(10));
        pm.finish();

        assert_eq!(pm.completed(), 2);
    }

    // Tests completions never exceed the batch size
    // Verified by removing the clamp
    #[test]
    fn test_completed_is_clamped() {
        let mut pm = ProgressManager::default();

        pm.initialize(1);
        pm.complete_map(Duration::ZERO);
        pm.complete_map(Duration::ZERO);

        assert_eq!(pm.completed(), 1);
    }

    // Tests reinitializing resets the counter
    // Verified by keeping the previous count
    #[test]
    fn test_initialize_resets() {
        let mut pm = ProgressManager::new();

        pm.initialize(3);
        pm.complete_map(Duration::ZERO);
        pm.initialize(3);

        assert_eq!(pm.completed(), 0);
    }

    // Tests calls before initialization are harmless
    // Verified by unwrapping the missing bar
    #[test]
    fn test_uninitialized_calls() {
        let mut pm = ProgressManager::new();

        pm.start_map(1);
        pm.complete_map(Duration::ZERO);
        pm.finish();

        assert_eq!(pm.completed(), 0);
    }
}
