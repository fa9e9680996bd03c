mod error;
mod logging;
mod progress;
