//! Command-line interface for building libraries and composing mosaics

use crate::io::configuration::{
    BuildConfig, DEFAULT_IMAGE_SIZE, DEFAULT_LIBRARY_FILE, DEFAULT_THUMBNAIL_SIZE,
    DEFAULT_TILE_SIZE, MosaicConfig, OUTPUT_SUFFIX, ThumbnailConfig, WriteMode,
};
use crate::io::error::Result;
use crate::io::image::save_image;
use crate::io::logging::{LogConfig, LogHandle};
use crate::io::progress::ProgressManager;
use crate::library::{build_library, load_library};
use crate::mosaic::compose_file;
use clap::{Args, Parser, Subcommand, value_parser};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "photomosaic")]
#[command(
    author,
    version,
    about = "Build photo mosaics from a library of quadrant color signatures"
)]
/// Command-line arguments shared by both commands
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Suppress progress output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Directory for the dated log file
    #[arg(long, global = true, value_name = "DIR", default_value = ".")]
    pub log_dir: PathBuf,

    /// Log to the console only
    #[arg(long, global = true)]
    pub no_log_file: bool,

    /// Command to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand)]
pub enum Command {
    /// Record the quadrant colors of each image in a library file
    Library(LibraryArgs),
    /// Compose a photo mosaic of an image from a library
    Compose(ComposeArgs),
}

/// Arguments of the `library` command
#[derive(Args)]
pub struct LibraryArgs {
    /// Library file to write
    #[arg(short = 'f', long, default_value = DEFAULT_LIBRARY_FILE)]
    pub libfile: PathBuf,

    /// Add records to an existing library instead of replacing it
    #[arg(short, long)]
    pub append: bool,

    /// Save a square thumbnail of each image into this directory
    #[arg(short, long, value_name = "DIR")]
    pub thumbnails: Option<PathBuf>,

    /// Edge length of saved thumbnails in pixels
    #[arg(long, default_value_t = DEFAULT_THUMBNAIL_SIZE, value_parser = value_parser!(u32).range(1..))]
    pub thumbnail_size: u32,

    /// Image files to process
    #[arg(value_name = "FILES")]
    pub files: Vec<PathBuf>,
}

impl LibraryArgs {
    /// Build configuration described by these arguments
    pub fn build_config(&self) -> BuildConfig {
        BuildConfig {
            write_mode: if self.append {
                WriteMode::Append
            } else {
                WriteMode::Truncate
            },
            thumbnails: self.thumbnails.as_ref().map(|directory| ThumbnailConfig {
                directory: directory.clone(),
                size: self.thumbnail_size,
            }),
        }
    }
}

/// Arguments of the `compose` command
#[derive(Args)]
pub struct ComposeArgs {
    /// Library file to match against
    #[arg(short = 'f', long, default_value = DEFAULT_LIBRARY_FILE)]
    pub libfile: PathBuf,

    /// Edge length of each tile in the output image
    #[arg(short = 'c', long = "tilesize", default_value_t = DEFAULT_TILE_SIZE, value_parser = value_parser!(u32).range(1..))]
    pub tile_size: u32,

    /// Edge length of the square output image
    #[arg(short = 'i', long = "imagesize", default_value_t = DEFAULT_IMAGE_SIZE, value_parser = value_parser!(u32).range(1..))]
    pub image_size: u32,

    /// Output file (defaults to `<input>_mosaic.<ext>` beside the input)
    #[arg(short, long)]
    pub outfile: Option<PathBuf>,

    /// Image to turn into a mosaic
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

impl ComposeArgs {
    /// Mosaic geometry described by these arguments
    pub const fn mosaic_config(&self) -> MosaicConfig {
        MosaicConfig {
            tile_size: self.tile_size,
            image_size: self.image_size,
        }
    }

    /// Where the mosaic will be written
    pub fn output_path(&self) -> PathBuf {
        self.outfile
            .clone()
            .unwrap_or_else(|| get_output_path(&self.file))
    }
}

impl Cli {
    /// Logging setup for the selected command
    pub fn log_config(&self) -> LogConfig {
        let program = match self.command {
            Command::Library(_) => "photomosaic-library",
            Command::Compose(_) => "photomosaic-compose",
        };
        LogConfig {
            program: program.to_string(),
            debug: self.debug,
            directory: (!self.no_log_file).then(|| self.log_dir.clone()),
        }
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Runs one command with logging and progress set up around it
pub struct CommandRunner {
    cli: Cli,
    progress: ProgressManager,
}

impl CommandRunner {
    /// Create a runner for the parsed arguments
    pub fn new(cli: Cli) -> Self {
        let progress = ProgressManager::new(cli.should_show_progress());
        Self { cli, progress }
    }

    /// Run the selected command
    ///
    /// Logging is installed for the duration of the run and any failure is
    /// reported there before being returned, so callers need not print it.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by the command, or a file system error
    /// if the log file cannot be opened
    pub fn run(&self) -> Result<()> {
        let log = match LogHandle::install(&self.cli.log_config()) {
            Ok(log) => log,
            Err(e) => {
                eprintln!("Error: {e}");
                return Err(e);
            }
        };
        if let Some(path) = log.file_path() {
            info!("Logging to {}", path.display());
        }

        let start_time = Instant::now();
        let result = match &self.cli.command {
            Command::Library(args) => self.run_library(args),
            Command::Compose(args) => self.run_compose(args),
        };

        match &result {
            Ok(()) => info!("Finished in {:.1?}", start_time.elapsed()),
            Err(e) => error!("{e}"),
        }
        result
    }

    fn run_library(&self, args: &LibraryArgs) -> Result<()> {
        let library = build_library(
            &args.files,
            &args.libfile,
            &args.build_config(),
            &self.progress,
        )?;
        info!(
            "Library {} updated with {} images",
            args.libfile.display(),
            library.len()
        );
        Ok(())
    }

    fn run_compose(&self, args: &ComposeArgs) -> Result<()> {
        let config = args.mosaic_config();
        config.validate()?;

        let library = load_library(&args.libfile)?;
        info!(
            "Loaded {} entries from {}",
            library.len(),
            args.libfile.display()
        );

        let mosaic = compose_file(&args.file, &library, &config, &self.progress)?;
        let output_path = args.output_path();
        save_image(&mosaic, &output_path)?;
        info!("Saved mosaic to {}", output_path.display());
        Ok(())
    }
}

/// Default mosaic path: the input's stem with `_mosaic` appended
pub fn get_output_path(input_path: &Path) -> PathBuf {
    let stem = input_path.file_stem().unwrap_or_default();
    let output_name = match input_path.extension() {
        Some(extension) => format!(
            "{}{}.{}",
            stem.to_string_lossy(),
            OUTPUT_SUFFIX,
            extension.to_string_lossy()
        ),
        None => format!("{}{}", stem.to_string_lossy(), OUTPUT_SUFFIX),
    };

    if let Some(parent) = input_path.parent() {
        parent.join(output_name)
    } else {
        PathBuf::from(output_name)
    }
}
