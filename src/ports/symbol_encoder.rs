//! Symbol encoder port for turning a payload into a QR raster.

use image::GrayImage;
use thiserror::Error;

/// Errors reported by a [`SymbolEncoder`].
#[derive(Debug, Error)]
pub enum SymbolError {
    /// The payload does not fit in the largest symbol version at the chosen
    /// error-correction level.
    #[error("data too long for a QR symbol")]
    DataTooLong,

    /// Any other encoder failure.
    #[error("{0}")]
    Encoding(String),
}

/// Renders a payload into a square grayscale raster.
///
/// Implementations must be deterministic: the same `(data, size)` always
/// yields the same pixels.
pub trait SymbolEncoder: Send + Sync {
    /// Render `data` into an image that is `size` pixels on each side when the
    /// symbol fits, or the smallest square that holds it otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if the data cannot be encoded.
    fn render(&self, data: &str, size: u32) -> Result<GrayImage, SymbolError>;
}
