//! hello-md library
//!
//! Renders a timestamped "Hello World" markdown document and writes it to disk.

pub mod clock;
pub mod document;
pub mod error;
pub mod generator;

pub use clock::{Clock, FixedClock, SystemClock};
pub use document::{HelloDocument, is_hello_filename};
pub use error::GenerateError;
pub use generator::{FileGenerator, create_hello_world_file};
