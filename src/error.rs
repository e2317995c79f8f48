//! Error types for QR code generation and the surrounding process.

use thiserror::Error;

use crate::ports::SymbolError;

/// Errors returned by [`QrCodeGenerator::generate`](crate::generator::QrCodeGenerator::generate).
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The payload to encode was empty.
    #[error("data must not be empty")]
    DataEmpty,

    /// The resolved size fell outside the configured bounds.
    #[error("size {size} must be between {min} and {max}")]
    SizeOutOfRange {
        /// The offending size.
        size: u32,
        /// Configured lower bound (inclusive).
        min: u32,
        /// Configured upper bound (inclusive).
        max: u32,
    },

    /// The encoder or the PNG serializer failed. The cause is kept for logs only.
    #[error("failed to generate image")]
    EncodingFailed(#[source] EncodeFailure),
}

impl GenerateError {
    /// Whether the error was caused by caller input rather than an internal failure.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::DataEmpty | Self::SizeOutOfRange { .. })
    }
}

/// Underlying cause of [`GenerateError::EncodingFailed`].
#[derive(Debug, Error)]
pub enum EncodeFailure {
    /// The symbol encoder rejected the data.
    #[error("symbol encoding failed: {0}")]
    Symbol(#[from] SymbolError),

    /// PNG serialization failed.
    #[error("png serialization failed: {0}")]
    Png(#[from] image::ImageError),
}

/// Errors raised when building a [`SizePolicy`](crate::policy::SizePolicy).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SizePolicyError {
    /// One of the sizes was zero.
    #[error("{name} must be a positive integer")]
    ZeroSize {
        /// Which setting was zero.
        name: &'static str,
    },

    /// The sizes do not satisfy `min <= default <= max`.
    #[error("size bounds must satisfy min <= default <= max (min={min}, default={default}, max={max})")]
    Inverted {
        /// Configured minimum.
        min: u32,
        /// Configured default.
        default: u32,
        /// Configured maximum.
        max: u32,
    },
}

/// Process-level errors surfaced by `main`.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration error.
    #[error("Config error: {0}")]
    Config(String),

    /// Invalid size bounds in configuration.
    #[error("Config error: {0}")]
    Policy(#[from] SizePolicyError),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// QR code generation failed.
    #[error("{0}")]
    Generate(#[from] GenerateError),

    /// The HTTP server failed to start or stopped unexpectedly.
    #[error("Server error: {0}")]
    Server(String),
}
