//! Live adapters backed by real encoding libraries.

pub mod qrcode_encoder;
