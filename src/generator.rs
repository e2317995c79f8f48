//! QR code generation use case.

use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ExtendedColorType, GrayImage, ImageEncoder};

use crate::error::{EncodeFailure, GenerateError};
use crate::params::validate_data;
use crate::policy::SizePolicy;
use crate::ports::SymbolEncoder;

/// Content type of every image produced by the generator.
pub const PNG_CONTENT_TYPE: &str = "image/png";

/// A request to render a QR code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    /// Payload to encode.
    pub data: String,
    /// Requested pixel size. `None` or `Some(0)` selects the policy default.
    pub size: Option<u32>,
}

impl GenerationRequest {
    /// Create a request.
    #[must_use]
    pub fn new(data: impl Into<String>, size: Option<u32>) -> Self {
        Self { data: data.into(), size }
    }
}

/// An encoded image handed back to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedImage {
    /// Encoded image bytes.
    pub bytes: Vec<u8>,
    /// MIME type of `bytes`.
    pub content_type: &'static str,
}

/// Validates requests, applies the size policy and renders PNG QR codes.
///
/// Holds no mutable state, so one instance can serve concurrent callers.
pub struct QrCodeGenerator {
    policy: SizePolicy,
    encoder: Box<dyn SymbolEncoder>,
}

impl QrCodeGenerator {
    /// Create a generator with the given policy and symbol encoder.
    #[must_use]
    pub fn new(policy: SizePolicy, encoder: Box<dyn SymbolEncoder>) -> Self {
        Self { policy, encoder }
    }

    /// The size policy this generator enforces.
    #[must_use]
    pub fn policy(&self) -> &SizePolicy {
        &self.policy
    }

    /// Render `request` as a PNG QR code.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::SizeOutOfRange`] or [`GenerateError::DataEmpty`]
    /// for invalid input, and [`GenerateError::EncodingFailed`] when encoding
    /// or serialization fails.
    #[tracing::instrument(name = "generate_qr_code", skip_all, fields(data_len = request.data.len()))]
    pub fn generate(&self, request: &GenerationRequest) -> Result<GeneratedImage, GenerateError> {
        let size = self.policy.resolve(request.size).inspect_err(|_| {
            tracing::warn!(
                requested = ?request.size,
                min = self.policy.min_size(),
                max = self.policy.max_size(),
                "size must be between min and max"
            );
        })?;

        validate_data(&request.data).inspect_err(|_| tracing::warn!(size, "data is empty"))?;

        let bytes = self.encode(&request.data, size).map_err(|cause| {
            tracing::error!(size, error = %cause, "failed to generate qr code");
            GenerateError::EncodingFailed(cause)
        })?;

        tracing::debug!(size, bytes = bytes.len(), "generated qr code");
        Ok(GeneratedImage { bytes, content_type: PNG_CONTENT_TYPE })
    }

    fn encode(&self, data: &str, size: u32) -> Result<Vec<u8>, EncodeFailure> {
        let raster = self.encoder.render(data, size)?;
        Ok(write_png(&raster)?)
    }
}

/// Serialize a grayscale raster as PNG with the best compression.
fn write_png(raster: &GrayImage) -> Result<Vec<u8>, image::ImageError> {
    let mut buf = Vec::new();
    PngEncoder::new_with_quality(&mut buf, CompressionType::Best, FilterType::Adaptive)
        .write_image(raster.as_raw(), raster.width(), raster.height(), ExtendedColorType::L8)?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::live::qrcode_encoder::QrcodeEncoder;
    use crate::ports::SymbolError;

    const PNG_SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

    fn generator() -> QrCodeGenerator {
        QrCodeGenerator::new(SizePolicy::default(), Box::new(QrcodeEncoder::new()))
    }

    struct FailingEncoder;

    impl SymbolEncoder for FailingEncoder {
        fn render(&self, _data: &str, _size: u32) -> Result<GrayImage, SymbolError> {
            Err(SymbolError::Encoding("encoder exploded".into()))
        }
    }

    fn dimensions(image: &GeneratedImage) -> (u32, u32) {
        let decoded = image::load_from_memory(&image.bytes).expect("output should decode");
        (decoded.width(), decoded.height())
    }

    #[test]
    fn default_size_when_unspecified() {
        let image = generator().generate(&GenerationRequest::new("hello", None)).unwrap();
        assert_eq!(image.content_type, "image/png");
        assert_eq!(&image.bytes[..8], &PNG_SIGNATURE);
        assert_eq!(dimensions(&image), (256, 256));
    }

    #[test]
    fn zero_size_means_default() {
        let image = generator().generate(&GenerationRequest::new("hello", Some(0))).unwrap();
        assert_eq!(dimensions(&image), (256, 256));
    }

    #[test]
    fn boundary_sizes_succeed() {
        let qr = generator();
        let min = qr.generate(&GenerationRequest::new("x", Some(64))).unwrap();
        assert_eq!(dimensions(&min), (64, 64));

        let max = qr.generate(&GenerationRequest::new("x", Some(2048))).unwrap();
        assert_eq!(dimensions(&max), (2048, 2048));
    }

    #[test]
    fn size_above_max_is_rejected() {
        let err = generator().generate(&GenerationRequest::new("hello", Some(4096))).unwrap_err();
        assert!(matches!(err, GenerateError::SizeOutOfRange { size: 4096, min: 64, max: 2048 }));
    }

    #[test]
    fn size_below_min_is_rejected() {
        let err = generator().generate(&GenerationRequest::new("hello", Some(10))).unwrap_err();
        assert!(matches!(err, GenerateError::SizeOutOfRange { size: 10, min: 64, max: 2048 }));
    }

    #[test]
    fn empty_data_is_rejected() {
        let err = generator().generate(&GenerationRequest::new("", Some(256))).unwrap_err();
        assert!(matches!(err, GenerateError::DataEmpty));

        let err = generator().generate(&GenerationRequest::new("", None)).unwrap_err();
        assert!(matches!(err, GenerateError::DataEmpty));
    }

    #[test]
    fn whitespace_data_is_encoded() {
        assert!(generator().generate(&GenerationRequest::new("   ", None)).is_ok());
    }

    #[test]
    fn size_is_checked_before_data() {
        let err = generator().generate(&GenerationRequest::new("", Some(4096))).unwrap_err();
        assert!(matches!(err, GenerateError::SizeOutOfRange { .. }));
    }

    #[test]
    fn encoder_failure_becomes_encoding_failed() {
        let qr = QrCodeGenerator::new(SizePolicy::default(), Box::new(FailingEncoder));
        let err = qr.generate(&GenerationRequest::new("hello", None)).unwrap_err();

        assert!(!err.is_client_error());
        assert_eq!(err.to_string(), "failed to generate image");
        let cause = std::error::Error::source(&err).unwrap().to_string();
        assert!(cause.contains("encoder exploded"));
    }

    #[test]
    fn oversized_payload_becomes_encoding_failed() {
        let data = "z".repeat(4000);
        let err = generator().generate(&GenerationRequest::new(data, None)).unwrap_err();
        assert!(matches!(
            err,
            GenerateError::EncodingFailed(EncodeFailure::Symbol(SymbolError::DataTooLong))
        ));
    }

    #[test]
    fn output_is_deterministic() {
        let qr = generator();
        let request = GenerationRequest::new("https://example.com", Some(300));
        let first = qr.generate(&request).unwrap();
        let second = qr.generate(&request).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn concurrent_calls_match_sequential() {
        let qr = generator();
        let requests: Vec<GenerationRequest> = (0..8u32)
            .map(|i| GenerationRequest::new(format!("payload-{i}"), Some(64 + i * 32)))
            .collect();
        let sequential: Vec<GeneratedImage> =
            requests.iter().map(|r| qr.generate(r).unwrap()).collect();

        let concurrent: Vec<GeneratedImage> = std::thread::scope(|scope| {
            let qr = &qr;
            let handles: Vec<_> =
                requests.iter().map(|r| scope.spawn(move || qr.generate(r).unwrap())).collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert_eq!(sequential, concurrent);
    }
}
