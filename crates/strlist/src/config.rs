//! List construction parameters.

use crate::error::ListError;

/// Configuration for a [`ListArray`](crate::ListArray).
///
/// Validated by [`ListArray::from_config`](crate::ListArray::from_config);
/// the plain constructors skip validation and normalize instead.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListConfig {
    /// Number of slots allocated up front.
    ///
    /// Default: 10. Must be at least 1.
    pub initial_capacity: usize,
}

impl ListConfig {
    /// Slot count used when the caller does not choose one.
    pub const DEFAULT_CAPACITY: usize = 10;

    /// Smallest slot count a list is ever created with.
    ///
    /// A zero-slot buffer would stay at zero under doubling.
    pub const MIN_CAPACITY: usize = 1;

    /// Create a config with the given initial capacity.
    pub fn new(initial_capacity: usize) -> Self {
        Self { initial_capacity }
    }

    /// Largest slot count whose backing buffer fits in `isize::MAX` bytes.
    pub fn max_capacity() -> usize {
        isize::MAX as usize / std::mem::size_of::<String>()
    }

    /// Check the config without allocating anything.
    ///
    /// Returns `ListError::ZeroCapacity` for a zero capacity and
    /// `ListError::CapacityOverflow` when the buffer would be too large
    /// to address.
    pub fn validate(&self) -> Result<(), ListError> {
        if self.initial_capacity == 0 {
            return Err(ListError::ZeroCapacity);
        }
        if self.initial_capacity > Self::max_capacity() {
            return Err(ListError::CapacityOverflow {
                requested: self.initial_capacity,
            });
        }
        Ok(())
    }
}

impl Default for ListConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}
