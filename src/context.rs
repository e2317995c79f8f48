//! Service context that wires the generator to its adapters.

use std::sync::Arc;

use crate::adapters::live::qrcode_encoder::QrcodeEncoder;
use crate::config::Config;
use crate::error::AppError;
use crate::generator::QrCodeGenerator;
use crate::policy::SizePolicy;
use crate::ports::SymbolEncoder;

/// Bundles the shared use-case objects handed to every transport.
#[derive(Clone)]
pub struct ServiceContext {
    /// QR code generator shared across requests.
    pub generator: Arc<QrCodeGenerator>,
}

impl ServiceContext {
    /// Create a context backed by the live `qrcode` encoder.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured size bounds are invalid.
    pub fn live(config: &Config) -> Result<Self, AppError> {
        let policy = config.size_policy()?;
        Ok(Self::with_encoder(policy, Box::new(QrcodeEncoder::new())))
    }

    /// Create a context around an arbitrary symbol encoder.
    #[must_use]
    pub fn with_encoder(policy: SizePolicy, encoder: Box<dyn SymbolEncoder>) -> Self {
        Self { generator: Arc::new(QrCodeGenerator::new(policy, encoder)) }
    }
}
