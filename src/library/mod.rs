//! Reference image library: building, storage and nearest-match search

/// Library building from image files
pub mod builder;
/// Entry and library types
pub mod entry;
/// Linear nearest-match search
pub mod search;
/// Line-oriented library file format
pub mod store;

pub use builder::build_library;
pub use entry::{Library, LibraryEntry};
pub use search::Match;
pub use store::{LibraryWriter, load_library, read_library, write_library};
