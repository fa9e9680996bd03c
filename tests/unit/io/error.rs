//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use photomosaic::MosaicError;
    use photomosaic::io::error::{computation_error, file_system, invalid_parameter};
    use std::error::Error;
    use std::path::PathBuf;

    // Tests error source chaining works correctly
    // Verified by breaking source chain
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = file_system("/tmp/libfile.txt", "open library")(io_error);

        assert!(error.source().is_some());
        assert!(error.to_string().contains("open library"));
        assert!(error.to_string().contains("/tmp/libfile.txt"));
    }

    // Tests parse errors name the file and line
    // Verified by omitting the line number from the message
    #[test]
    fn test_library_parse_error() {
        let Err(source) = serde_json::from_str::<serde_json::Value>("{") else {
            unreachable!("Expected invalid JSON");
        };
        let error = MosaicError::LibraryParse {
            path: PathBuf::from("libfile.txt"),
            line: 17,
            source,
        };

        let message = error.to_string();
        assert!(message.contains("libfile.txt"));
        assert!(message.contains("line 17"));
        assert!(error.source().is_some());
    }

    // Tests missing reference errors name the file
    // Verified by dropping the path from the message
    #[test]
    fn test_reference_missing_error() {
        let image_error = image::ImageError::IoError(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "gone",
        ));
        let error = MosaicError::ReferenceImageMissing {
            path: PathBuf::from("library/cat.jpg"),
            source: image_error,
        };

        let message = error.to_string();
        assert!(message.contains("library/cat.jpg"));
        assert!(message.contains("gone"));
        assert!(error.source().is_some());
    }

    // Tests the empty library error has a message and no source
    // Verified by returning an empty message
    #[test]
    fn test_empty_library_error() {
        let error = MosaicError::EmptyLibrary;

        assert!(error.to_string().contains("no entries"));
        assert!(error.source().is_none());
    }

    // Tests InvalidParameter error contains all fields
    // Verified by omitting value from message
    #[test]
    fn test_invalid_parameter_error() {
        let error = invalid_parameter("tile_size", &0, &"must be greater than zero");

        let message = error.to_string();
        assert!(message.contains("tile_size"));
        assert!(message.contains("'0'"));
        assert!(message.contains("must be greater than zero"));
    }

    // Tests Computation error formatting
    // Verified by omitting reason from message
    #[test]
    fn test_computation_error() {
        let error = computation_error("pixel view", &"shape mismatch");

        let message = error.to_string();
        assert!(message.contains("pixel view"));
        assert!(message.contains("shape mismatch"));
        assert!(error.source().is_none());
    }
}
