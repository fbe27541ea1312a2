//! Error kind and device status codes

/// Status code for a successful operation
pub const DEVICE_OK: i32 = 0;

/// Status code for an invalid argument
pub const DEVICE_INVALID_PARAMETER: i32 = -1001;

/// Errors from the portability primitives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CompatError {
    /// Output buffer missing, empty, or too small for the result
    InvalidArgument,
}

impl CompatError {
    /// Device status code for this error
    pub fn status_code(self) -> i32 {
        match self {
            CompatError::InvalidArgument => DEVICE_INVALID_PARAMETER,
        }
    }
}

impl core::fmt::Display for CompatError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CompatError::InvalidArgument => f.write_str("invalid argument"),
        }
    }
}

/// Result type for the portability primitives
pub type Result<T> = core::result::Result<T, CompatError>;

/// Map a result to the device status code returned across the ABI boundary
pub fn status_of<T>(result: &Result<T>) -> i32 {
    match result {
        Ok(_) => DEVICE_OK,
        Err(e) => e.status_code(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(status_of(&Ok(())), DEVICE_OK);
        assert_eq!(
            status_of::<()>(&Err(CompatError::InvalidArgument)),
            DEVICE_INVALID_PARAMETER
        );
    }
}
