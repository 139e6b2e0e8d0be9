//! Error trait shared by the pdfchunk crates
//!
//! Each crate keeps its own `thiserror` enum; [`CommonError`] gives them a
//! common constructor surface that [`impl_common_conversions!`] builds on.

/// Constructors every crate error type provides
pub trait CommonError: std::error::Error + Send + Sync + 'static {
    /// Build the I/O variant
    fn io_error(msg: impl Into<String>) -> Self
    where
        Self: Sized;

    /// Build the configuration variant
    fn config_error(msg: impl Into<String>) -> Self
    where
        Self: Sized;

    /// Build the parse variant
    fn parse_error(msg: impl Into<String>) -> Self
    where
        Self: Sized;

    /// Build the catch-all variant
    fn other_error(msg: impl Into<String>) -> Self
    where
        Self: Sized;
}

/// Implement `From<std::io::Error>` and `From<anyhow::Error>` through [`CommonError`]
///
/// ```no_run
/// # use pdfchunk_common::{CommonError, impl_common_conversions};
/// # #[derive(Debug, thiserror::Error)]
/// # enum MyError {
/// #     #[error("io: {0}")]
/// #     Io(String),
/// #     #[error("other: {0}")]
/// #     Other(String),
/// # }
/// # impl CommonError for MyError {
/// #     fn io_error(msg: impl Into<String>) -> Self { Self::Io(msg.into()) }
/// #     fn config_error(msg: impl Into<String>) -> Self { Self::Other(msg.into()) }
/// #     fn parse_error(msg: impl Into<String>) -> Self { Self::Other(msg.into()) }
/// #     fn other_error(msg: impl Into<String>) -> Self { Self::Other(msg.into()) }
/// # }
/// impl_common_conversions!(MyError);
/// ```
#[macro_export]
macro_rules! impl_common_conversions {
    ($error_type:ident) => {
        impl From<std::io::Error> for $error_type {
            fn from(e: std::io::Error) -> Self {
                <$error_type as $crate::CommonError>::io_error(e.to_string())
            }
        }

        impl From<anyhow::Error> for $error_type {
            fn from(e: anyhow::Error) -> Self {
                <$error_type as $crate::CommonError>::other_error(e.to_string())
            }
        }
    };
}
