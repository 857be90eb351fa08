//! Error codes for the Supplytrace backend.
//!
//! This module defines all error codes used throughout the application.
//! Add new codes here; never pass ad-hoc strings as error codes.
//!
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! that appear in HTTP responses.

use core::fmt;

/// Centralized error codes for the Supplytrace backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Entity lookups
    /// Manufacturer row missing for the requested id
    ManufacturerNotFound,
    /// Project row missing for the requested id
    ProjectNotFound,
    /// Supplier row missing for the requested id
    SupplierNotFound,
}

impl ErrorCode {
    /// The canonical string for this code, as rendered in HTTP responses.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ManufacturerNotFound => "MANUFACTURER_NOT_FOUND",
            Self::ProjectNotFound => "PROJECT_NOT_FOUND",
            Self::SupplierNotFound => "SUPPLIER_NOT_FOUND",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
