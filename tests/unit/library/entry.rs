//! Tests for library entries and their serialized shape

#[cfg(test)]
mod tests {
    use photomosaic::library::{Library, LibraryEntry};
    use photomosaic::signature::{ColorSample, QuadrantSignature};
    use std::path::Path;

    fn signature(value: u8) -> QuadrantSignature {
        let sample = ColorSample::new(value, value, value);
        QuadrantSignature {
            top_left: sample,
            top_right: sample,
            bot_left: sample,
            bot_right: sample,
        }
    }

    // Tests records use the established field names
    // Verified by removing the serde renames
    #[test]
    fn test_entry_field_names() {
        let entry = LibraryEntry::new("photos/a.jpg", signature(7));

        let json = serde_json::to_value(&entry).unwrap();

        assert_eq!(json["filename"], "photos/a.jpg");
        assert_eq!(json["quadrant_colors"]["top_left"]["red"], 7);
        assert_eq!(json["quadrant_colors"]["bot_right"]["blue"], 7);
        assert!(json.get("path").is_none());
    }

    // Tests a record written by earlier tooling parses
    // Verified by renaming the bottom-left key
    #[test]
    fn test_entry_parses_existing_record() {
        let line = r#"{"filename": "x.jpg", "quadrant_colors": {"top_left": {"red": 1, "green": 2, "blue": 3}, "top_right": {"red": 4, "green": 5, "blue": 6}, "bot_left": {"red": 7, "green": 8, "blue": 9}, "bot_right": {"red": 10, "green": 11, "blue": 12}}}"#;

        let entry: LibraryEntry = serde_json::from_str(line).unwrap();

        assert_eq!(entry.path(), Path::new("x.jpg"));
        assert_eq!(entry.signature.bot_left, ColorSample::new(7, 8, 9));
    }

    // Tests libraries keep insertion order
    // Verified by sorting entries on construction
    #[test]
    fn test_library_preserves_order() {
        let library: Library = ["c.png", "a.png", "b.png"]
            .iter()
            .map(|name| LibraryEntry::new(*name, signature(0)))
            .collect();

        let names: Vec<&Path> = library.iter().map(LibraryEntry::path).collect();

        assert_eq!(
            names,
            vec![Path::new("c.png"), Path::new("a.png"), Path::new("b.png")]
        );
        assert_eq!(library.len(), 3);
        assert!(!library.is_empty());
    }

    // Tests the default library is empty
    // Verified by seeding a placeholder entry
    #[test]
    fn test_library_default_empty() {
        let library = Library::default();

        assert!(library.is_empty());
        assert_eq!(library.entries().len(), 0);
    }
}
