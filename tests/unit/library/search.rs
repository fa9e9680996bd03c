//! Tests for linear nearest-match search

#[cfg(test)]
mod tests {
    use photomosaic::MosaicError;
    use photomosaic::library::search::nearest;
    use photomosaic::library::{Library, LibraryEntry};
    use photomosaic::signature::{ColorSample, QuadrantSignature};

    fn uniform(red: u8, green: u8, blue: u8) -> QuadrantSignature {
        let sample = ColorSample::new(red, green, blue);
        QuadrantSignature {
            top_left: sample,
            top_right: sample,
            bot_left: sample,
            bot_right: sample,
        }
    }

    fn library(signatures: &[(&str, QuadrantSignature)]) -> Library {
        signatures
            .iter()
            .map(|(name, signature)| LibraryEntry::new(*name, *signature))
            .collect()
    }

    // Tests a single-entry library always matches that entry
    // Verified by requiring distance below a threshold
    #[test]
    fn test_single_entry_always_matches() {
        let library = library(&[("only.png", uniform(0, 0, 0))]);

        for query in [uniform(0, 0, 0), uniform(255, 255, 255), uniform(9, 200, 3)] {
            let found = library.nearest(&query).unwrap();
            assert_eq!(found.index, 0);
            assert_eq!(found.entry.path.to_str(), Some("only.png"));
        }
    }

    // Tests the closest entry is chosen
    // Verified by keeping the first candidate regardless of distance
    #[test]
    fn test_closest_entry_wins() {
        let library = library(&[
            ("red.png", uniform(255, 0, 0)),
            ("green.png", uniform(0, 255, 0)),
            ("blue.png", uniform(0, 0, 255)),
        ]);

        let found = library.nearest(&uniform(10, 20, 240)).unwrap();

        assert_eq!(found.entry.path.to_str(), Some("blue.png"));
        assert_eq!(found.index, 2);
    }

    // Tests identical signatures resolve to the earliest entry
    // Verified by replacing on equal distance
    #[test]
    fn test_tie_prefers_earliest() {
        let library = library(&[
            ("far.png", uniform(200, 200, 200)),
            ("first.png", uniform(50, 50, 50)),
            ("second.png", uniform(50, 50, 50)),
        ]);

        let found = library.nearest(&uniform(50, 50, 50)).unwrap();

        assert_eq!(found.entry.path.to_str(), Some("first.png"));
        assert!(found.distance.abs() < f64::EPSILON);
    }

    // Tests equidistant but different entries also resolve to the earliest
    // Verified by comparing with less-or-equal
    #[test]
    fn test_equidistant_prefers_earliest() {
        let library = library(&[("dark.png", uniform(90, 90, 90)), ("light.png", uniform(110, 110, 110))]);

        let found = library.nearest(&uniform(100, 100, 100)).unwrap();

        assert_eq!(found.entry.path.to_str(), Some("dark.png"));
    }

    // Tests searching an empty library fails
    // Verified by returning a default entry
    #[test]
    fn test_empty_library_error() {
        let result = nearest(&uniform(0, 0, 0), &[]);

        assert!(matches!(result, Err(MosaicError::EmptyLibrary)));
        assert!(matches!(
            Library::default().nearest(&uniform(1, 1, 1)),
            Err(MosaicError::EmptyLibrary)
        ));
    }
}
