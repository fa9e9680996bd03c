//! Tests for scoped console and file logging

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use photomosaic::io::logging::{LogConfig, LogHandle, log_file_name};
    use tracing_subscriber::filter::LevelFilter;

    // Tests dated log file naming
    // Verified by changing the date format
    #[test]
    fn test_log_file_name() {
        let date = NaiveDate::from_ymd_opt(2024, 8, 1).unwrap();

        assert_eq!(
            log_file_name("photomosaic-library", date),
            "photomosaic-library.log.2024-08-01"
        );
    }

    // Tests the debug flag selects the level
    // Verified by inverting the debug check
    #[test]
    fn test_level() {
        let mut config = LogConfig {
            program: "photomosaic".to_string(),
            debug: false,
            directory: None,
        };
        assert_eq!(config.level(), LevelFilter::INFO);

        config.debug = true;
        assert_eq!(config.level(), LevelFilter::DEBUG);
    }

    // Tests events reach the log file while the handle lives
    // Verified by not attaching the file layer
    #[test]
    fn test_install_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = LogConfig {
            program: "photomosaic-test".to_string(),
            debug: false,
            directory: Some(dir.path().join("logs")),
        };

        let handle = LogHandle::install(&config).unwrap();
        let path = handle.file_path().map(std::path::Path::to_path_buf).unwrap();
        tracing::info!("composing row 7");
        tracing::debug!("hidden below info");
        drop(handle);
        tracing::info!("after teardown");

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(path.starts_with(dir.path().join("logs")));
        assert!(contents.contains("composing row 7"));
        assert!(contents.contains("INFO"));
        assert!(!contents.contains("hidden below info"));
        assert!(!contents.contains("after teardown"));
    }

    // Tests console-only logging creates no file
    // Verified by always opening a log file
    #[test]
    fn test_install_console_only() {
        let config = LogConfig {
            program: "photomosaic-test".to_string(),
            debug: true,
            directory: None,
        };

        let handle = LogHandle::install(&config).unwrap();

        assert!(handle.file_path().is_none());
    }

    // Tests lines carry a local timestamp, the level and the message
    // Verified by restoring the default event format
    #[test]
    fn test_line_format() {
        let dir = tempfile::tempdir().unwrap();
        let config = LogConfig {
            program: "photomosaic-test".to_string(),
            debug: false,
            directory: Some(dir.path().to_path_buf()),
        };

        let handle = LogHandle::install(&config).unwrap();
        let path = handle.file_path().map(std::path::Path::to_path_buf).unwrap();
        tracing::warn!("tile larger than canvas");
        drop(handle);

        let contents = std::fs::read_to_string(&path).unwrap();
        let line = contents.lines().next().unwrap();
        let (timestamp, rest) = line.split_at(23);
        let (seconds, millis) = timestamp.split_at(19);
        assert!(chrono::NaiveDateTime::parse_from_str(seconds, "%Y-%m-%d %H:%M:%S").is_ok());
        assert!(millis.starts_with(',') && millis[1..].chars().all(|c| c.is_ascii_digit()));
        assert_eq!(rest, " WARN - tile larger than canvas");
    }
}
