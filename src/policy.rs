//! Size policy: default, minimum and maximum output dimensions.

use crate::error::{GenerateError, SizePolicyError};

/// Immutable bounds for the pixel size of generated images.
///
/// The constructor enforces `0 < min_size <= default_size <= max_size`, so a
/// request for the default size is always in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizePolicy {
    default_size: u32,
    min_size: u32,
    max_size: u32,
}

impl SizePolicy {
    /// Build a policy from its three bounds.
    ///
    /// # Errors
    ///
    /// Returns an error if any bound is zero or the bounds are out of order.
    pub fn new(default_size: u32, min_size: u32, max_size: u32) -> Result<Self, SizePolicyError> {
        for (name, value) in
            [("default_size", default_size), ("min_size", min_size), ("max_size", max_size)]
        {
            if value == 0 {
                return Err(SizePolicyError::ZeroSize { name });
            }
        }
        if min_size > default_size || default_size > max_size {
            return Err(SizePolicyError::Inverted {
                min: min_size,
                default: default_size,
                max: max_size,
            });
        }
        Ok(Self { default_size, min_size, max_size })
    }

    /// Size used when a request does not specify one.
    #[must_use]
    pub fn default_size(&self) -> u32 {
        self.default_size
    }

    /// Smallest accepted size (inclusive).
    #[must_use]
    pub fn min_size(&self) -> u32 {
        self.min_size
    }

    /// Largest accepted size (inclusive).
    #[must_use]
    pub fn max_size(&self) -> u32 {
        self.max_size
    }

    /// Resolve a requested size against the policy.
    ///
    /// `None` and `Some(0)` both mean "unspecified" and resolve to the default.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::SizeOutOfRange`] if the resolved size is
    /// outside `[min_size, max_size]`.
    pub fn resolve(&self, requested: Option<u32>) -> Result<u32, GenerateError> {
        let size = match requested {
            None | Some(0) => self.default_size,
            Some(size) => size,
        };
        if size < self.min_size || size > self.max_size {
            return Err(GenerateError::SizeOutOfRange {
                size,
                min: self.min_size,
                max: self.max_size,
            });
        }
        Ok(size)
    }
}

impl Default for SizePolicy {
    fn default() -> Self {
        Self { default_size: 256, min_size: 64, max_size: 2048 }
    }
}
