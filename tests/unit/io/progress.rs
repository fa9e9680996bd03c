//! Tests for progress display over images and rows

#[cfg(test)]
mod tests {
    use photomosaic::io::progress::ProgressManager;

    // Tests a hidden manager still counts steps
    // Verified by skipping the increment when hidden
    #[test]
    fn test_hidden_counts_steps() {
        let progress = ProgressManager::hidden();

        progress.start("images", 3);
        progress.advance("a.jpg");
        progress.advance("b.jpg");

        assert_eq!(progress.position(), 2);
        progress.finish();
    }

    // Tests starting a new run resets the position
    // Verified by not resetting position in start
    #[test]
    fn test_start_resets_position() {
        let progress = ProgressManager::new(false);

        progress.start("rows", 2);
        progress.advance("row 0");
        progress.start("rows", 5);

        assert_eq!(progress.position(), 0);
    }

    // Tests default trait implementation is usable without a terminal
    // Verified by drawing on default construction
    #[test]
    fn test_default_manager() {
        let progress = ProgressManager::default();

        progress.start("rows", 1);
        progress.advance("row 0");
        progress.finish();

        assert_eq!(progress.position(), 1);
    }
}
