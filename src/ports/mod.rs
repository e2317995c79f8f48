//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the application core and an
//! external primitive. Implementations live in `src/adapters/`.

pub mod symbol_encoder;

pub use symbol_encoder::{SymbolEncoder, SymbolError};
