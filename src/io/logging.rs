//! Scoped logging to the console and a dated log file
//!
//! A [`LogHandle`] is created at the start of a command and dropped at its
//! end. While it lives, `tracing` events on the current thread go to stderr
//! and, optionally, to `<program>.log.<date>` in the log directory.

use crate::io::configuration::{LOG_FILE_DATE_FORMAT, LOG_FILE_INFIX, LOG_TIMESTAMP_FORMAT};
use crate::io::error::{Result, file_system};
use chrono::NaiveDate;
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::subscriber::DefaultGuard;
use tracing::{Event, Subscriber};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::{self, FmtContext, FormatEvent, FormatFields, format};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;

/// Where and how verbosely to log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Name used as the log file prefix
    pub program: String,
    /// Emit debug-level events
    pub debug: bool,
    /// Directory for the dated log file, or `None` for console only
    pub directory: Option<PathBuf>,
}

impl LogConfig {
    /// Maximum level passed to the layers
    pub const fn level(&self) -> LevelFilter {
        if self.debug {
            LevelFilter::DEBUG
        } else {
            LevelFilter::INFO
        }
    }
}

/// Log file name for `program` on `date`, e.g. `photomosaic-compose.log.2024-08-01`
pub fn log_file_name(program: &str, date: NaiveDate) -> String {
    format!(
        "{program}{LOG_FILE_INFIX}{}",
        date.format(LOG_FILE_DATE_FORMAT)
    )
}

/// Active logging setup; events stop being recorded when dropped
pub struct LogHandle {
    _guard: DefaultGuard,
    file: Option<Arc<File>>,
    file_path: Option<PathBuf>,
}

impl LogHandle {
    /// Install console logging, plus file logging if a directory is configured
    ///
    /// The log file is appended to, so repeated runs on one day share it.
    ///
    /// # Errors
    ///
    /// Returns a file system error if the log directory or file cannot be
    /// created
    pub fn install(config: &LogConfig) -> Result<Self> {
        let (file, file_path) = match &config.directory {
            Some(directory) => {
                let (file, path) = open_log_file(directory, &config.program)?;
                (Some(Arc::new(file)), Some(path))
            }
            None => (None, None),
        };

        let console = fmt::layer()
            .event_format(LineFormat)
            .with_writer(std::io::stderr);
        let file_layer = file.as_ref().map(|file| {
            fmt::layer()
                .event_format(LineFormat)
                .with_writer(Arc::clone(file))
                .with_ansi(false)
        });

        let subscriber = tracing_subscriber::registry()
            .with(console)
            .with(file_layer)
            .with(config.level());

        Ok(Self {
            _guard: tracing::subscriber::set_default(subscriber),
            file,
            file_path,
        })
    }

    /// Path of the log file being written, if any
    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }
}

impl Drop for LogHandle {
    fn drop(&mut self) {
        if let Some(file) = &self.file {
            let _ = file.sync_all();
        }
    }
}

/// Formats events as `<local time> LEVEL - message`
#[derive(Debug, Clone, Copy, Default)]
pub struct LineFormat;

impl<S, N> FormatEvent<S, N> for LineFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: format::Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        write!(
            writer,
            "{} {} - ",
            chrono::Local::now().format(LOG_TIMESTAMP_FORMAT),
            event.metadata().level()
        )?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

fn open_log_file(directory: &Path, program: &str) -> Result<(File, PathBuf)> {
    std::fs::create_dir_all(directory).map_err(file_system(directory, "create log directory"))?;
    let path = directory.join(log_file_name(
        program,
        chrono::Local::now().date_naive(),
    ));
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .map_err(file_system(&path, "open log file"))?;
    Ok((file, path))
}
