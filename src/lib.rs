//! QR code generation service.
//!
//! The core is [`generator::QrCodeGenerator`]: it resolves and bounds-checks
//! the requested size, validates the payload, renders the symbol through a
//! [`ports::SymbolEncoder`] and serializes the result as PNG. The HTTP server
//! in [`server`] and the `render` command are thin transports over it.

pub mod adapters;
pub mod cli;
pub mod config;
pub mod context;
pub mod error;
pub mod generator;
pub mod logging;
pub mod output;
pub mod params;
pub mod policy;
pub mod ports;
pub mod server;
