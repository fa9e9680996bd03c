//! Line-oriented library file reading and writing
//!
//! Each line holds one JSON-encoded [`LibraryEntry`]. Loading is
//! all-or-nothing: the first line that fails to parse aborts the load.

use crate::io::configuration::WriteMode;
use crate::io::error::{MosaicError, Result, file_system};
use crate::library::entry::{Library, LibraryEntry};
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Appends library records to a file opened once per build run
#[derive(Debug)]
pub struct LibraryWriter {
    path: PathBuf,
    writer: BufWriter<File>,
    records_written: usize,
}

impl LibraryWriter {
    /// Open the library file, truncating or appending per `mode`
    ///
    /// # Errors
    ///
    /// Returns a file system error if the file cannot be opened
    pub fn create(path: impl AsRef<Path>, mode: WriteMode) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let mut options = OpenOptions::new();
        options.create(true);
        match mode {
            WriteMode::Truncate => options.write(true).truncate(true),
            WriteMode::Append => options.append(true),
        };
        let file = options
            .open(&path)
            .map_err(file_system(&path, "open library"))?;

        Ok(Self {
            path,
            writer: BufWriter::new(file),
            records_written: 0,
        })
    }

    /// Write one entry as a single line
    ///
    /// # Errors
    ///
    /// Returns an error if the entry cannot be encoded or written
    pub fn write_entry(&mut self, entry: &LibraryEntry) -> Result<()> {
        serde_json::to_writer(&mut self.writer, entry).map_err(|e| {
            MosaicError::Serialization {
                path: self.path.clone(),
                source: e,
            }
        })?;
        self.writer
            .write_all(b"\n")
            .map_err(|e| MosaicError::FileSystem {
                path: self.path.clone(),
                operation: "write library",
                source: e,
            })?;
        self.records_written += 1;
        Ok(())
    }

    /// Number of records written since the file was opened
    pub const fn records_written(&self) -> usize {
        self.records_written
    }

    /// Path of the library file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Flush buffered records to disk
    ///
    /// # Errors
    ///
    /// Returns a file system error if the flush fails
    pub fn finish(mut self) -> Result<()> {
        self.writer
            .flush()
            .map_err(file_system(&self.path, "flush library"))
    }
}

/// Write a whole library to `path`
///
/// # Errors
///
/// Returns an error if the file cannot be opened or any record cannot be written
pub fn write_library(path: impl AsRef<Path>, library: &Library, mode: WriteMode) -> Result<()> {
    let mut writer = LibraryWriter::create(path, mode)?;
    for entry in library {
        writer.write_entry(entry)?;
    }
    writer.finish()
}

/// Parse library records from a reader, one per line
///
/// `origin` names the source in error messages.
///
/// # Errors
///
/// Returns `LibraryParse` with the one-based line number of the first line
/// that is not a valid record, or a file system error if reading fails
pub fn read_library<R: BufRead>(reader: R, origin: &Path) -> Result<Library> {
    let mut entries = Vec::new();
    for (index, line) in reader.split(b'\n').enumerate() {
        let line = line.map_err(|e| MosaicError::FileSystem {
            path: origin.to_path_buf(),
            operation: "read library",
            source: e,
        })?;
        let record = line.strip_suffix(b"\r").unwrap_or(&line[..]);
        let entry = serde_json::from_slice::<LibraryEntry>(record).map_err(|e| {
            MosaicError::LibraryParse {
                path: origin.to_path_buf(),
                line: index + 1,
                source: e,
            }
        })?;
        entries.push(entry);
    }
    Ok(Library::new(entries))
}

/// Load a library file
///
/// # Errors
///
/// Returns a file system error if the file cannot be opened, or
/// `LibraryParse` if any line is malformed
pub fn load_library(path: impl AsRef<Path>) -> Result<Library> {
    let path = path.as_ref();
    let file = File::open(path).map_err(file_system(path, "open library"))?;
    read_library(BufReader::new(file), path)
}
