//! Common utilities shared across the pdfchunk crates
//!
//! Error traits, one-shot environment loading and logging setup.

pub mod error;
pub mod init;
pub mod logging;

pub use error::CommonError;
pub use init::initialize_environment;
pub use logging::{LoggingError, LoggingGuards, init_logging};
