//! Library building from a list of image files

use crate::io::configuration::{BuildConfig, ThumbnailConfig};
use crate::io::error::{Result, file_system, invalid_parameter};
use crate::io::image::{open_rgb, save_image, square_tile};
use crate::io::progress::ProgressManager;
use crate::library::entry::{Library, LibraryEntry};
use crate::library::store::LibraryWriter;
use crate::signature::{QuadrantSignature, pixel_view};
use crate::spatial::SquareRegion;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Compute the library entry for one image file
///
/// The signature covers the image's centered square. When thumbnails are
/// requested, the square is also resized and saved under the thumbnail
/// directory with the source file name. The decoded image is released before
/// returning.
///
/// # Errors
///
/// Returns an error if:
/// - The image cannot be opened or decoded
/// - The thumbnail cannot be written
pub fn process_image(path: &Path, thumbnails: Option<&ThumbnailConfig>) -> Result<LibraryEntry> {
    let image = open_rgb(path)?;
    let region = SquareRegion::centered(image.width(), image.height());
    let signature = QuadrantSignature::from_pixels(region.slice(pixel_view(&image)?));

    if let Some(thumbnails) = thumbnails {
        let thumbnail_path = thumbnail_path(path, &thumbnails.directory)?;
        save_image(&square_tile(&image, thumbnails.size), &thumbnail_path)?;
        debug!("Saved thumbnail {}", thumbnail_path.display());
    }

    Ok(LibraryEntry::new(path, signature))
}

/// Process `files` in order and record each one in the library file
///
/// Returns the entries written by this run. In append mode, records already
/// present in the file are kept but not returned. An empty file list leaves
/// a library file with no new records.
///
/// # Errors
///
/// Returns an error if:
/// - The configuration is invalid
/// - The library file or thumbnail directory cannot be created
/// - Any image cannot be decoded (the run stops at that image)
/// - Any record cannot be written
pub fn build_library(
    files: &[PathBuf],
    library_path: &Path,
    config: &BuildConfig,
    progress: &ProgressManager,
) -> Result<Library> {
    config.validate()?;
    if let Some(thumbnails) = &config.thumbnails {
        std::fs::create_dir_all(&thumbnails.directory).map_err(file_system(
            &thumbnails.directory,
            "create thumbnail directory",
        ))?;
    }

    let mut writer = LibraryWriter::create(library_path, config.write_mode)?;
    let mut entries = Vec::with_capacity(files.len());
    progress.start("images", files.len() as u64);

    for path in files {
        info!("Processing {}", path.display());
        let entry = process_image(path, config.thumbnails.as_ref())?;
        writer.write_entry(&entry)?;
        entries.push(entry);
        progress.advance(&path.display().to_string());
    }

    info!(
        "Wrote {} records to {}",
        writer.records_written(),
        writer.path().display()
    );
    writer.finish()?;
    progress.finish();

    Ok(Library::new(entries))
}

fn thumbnail_path(source: &Path, directory: &Path) -> Result<PathBuf> {
    let file_name = source.file_name().ok_or_else(|| {
        invalid_parameter(
            "file",
            &source.display(),
            &"has no file name to use for its thumbnail",
        )
    })?;
    Ok(directory.join(file_name))
}
