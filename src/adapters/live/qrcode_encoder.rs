//! Live symbol encoder backed by the `qrcode` crate.

use image::{imageops, GrayImage, Luma};
use qrcode::types::QrError;
use qrcode::{EcLevel, QrCode};

use crate::ports::symbol_encoder::{SymbolEncoder, SymbolError};

/// Quiet zone width on each side, in modules.
const QUIET_ZONE_MODULES: u32 = 4;

const LIGHT: Luma<u8> = Luma([255]);

/// Encodes payloads at the highest error-correction level and scales the
/// symbol to the requested pixel size.
#[derive(Debug, Default, Clone, Copy)]
pub struct QrcodeEncoder;

impl QrcodeEncoder {
    /// Create a new encoder.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl SymbolEncoder for QrcodeEncoder {
    fn render(&self, data: &str, size: u32) -> Result<GrayImage, SymbolError> {
        let code = QrCode::with_error_correction_level(data.as_bytes(), EcLevel::H)
            .map_err(map_qr_error)?;

        let width = u32::try_from(code.width())
            .map_err(|_| SymbolError::Encoding("symbol width overflows u32".into()))?;
        let scale = (size / (width + 2 * QUIET_ZONE_MODULES)).max(1);

        let symbol =
            code.render::<Luma<u8>>().quiet_zone(true).module_dimensions(scale, scale).build();

        // Too dense for the requested size even at one pixel per module.
        if symbol.width() >= size {
            return Ok(symbol);
        }

        let mut canvas = GrayImage::from_pixel(size, size, LIGHT);
        let offset = i64::from((size - symbol.width()) / 2);
        imageops::overlay(&mut canvas, &symbol, offset, offset);
        Ok(canvas)
    }
}

fn map_qr_error(err: QrError) -> SymbolError {
    match err {
        QrError::DataTooLong => SymbolError::DataTooLong,
        other => SymbolError::Encoding(other.to_string()),
    }
}
