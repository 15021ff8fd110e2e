//! Unified error codes
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Account errors
//! - 2xxx: Department errors
//! - 3xxx: Employee errors
//! - 4xxx: Transfer errors
//! - 5xxx: Request errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility (Rust, TypeScript, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Invalid format
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 1xxx: Account ====================
    /// Account not found
    AccountNotFound = 1001,
    /// Account email already exists
    AccountEmailExists = 1002,
    /// Account email is malformed
    AccountEmailInvalid = 1003,

    // ==================== 2xxx: Department ====================
    /// Department not found
    DepartmentNotFound = 2001,
    /// Department name already exists
    DepartmentNameExists = 2002,

    // ==================== 3xxx: Employee ====================
    /// Employee not found
    EmployeeNotFound = 3001,
    /// Employee id already exists
    EmployeeIdExists = 3002,
    /// Account is already assigned to another employee
    AccountAlreadyAssigned = 3003,

    // ==================== 4xxx: Transfer ====================
    /// Transfer record not found
    TransferNotFound = 4001,
    /// Transfer target equals the current department
    TransferSameDepartment = 4002,

    // ==================== 5xxx: Request ====================
    /// Request not found
    RequestNotFound = 5001,
    /// Request item quantity is out of range
    RequestItemQuantityInvalid = 5002,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Database error
    DatabaseError = 9002,
    /// Configuration error
    ConfigError = 9003,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::RequiredField => "Required field is missing",
            ErrorCode::ValueOutOfRange => "Value is out of range",

            // Account
            ErrorCode::AccountNotFound => "Account not found",
            ErrorCode::AccountEmailExists => "Account email already exists",
            ErrorCode::AccountEmailInvalid => "Account email is malformed",

            // Department
            ErrorCode::DepartmentNotFound => "Department not found",
            ErrorCode::DepartmentNameExists => "Department name already exists",

            // Employee
            ErrorCode::EmployeeNotFound => "Employee not found",
            ErrorCode::EmployeeIdExists => "Employee id already exists",
            ErrorCode::AccountAlreadyAssigned => "Account is already assigned to an employee",

            // Transfer
            ErrorCode::TransferNotFound => "Transfer record not found",
            ErrorCode::TransferSameDepartment => "Employee is already in that department",

            // Request
            ErrorCode::RequestNotFound => "Request not found",
            ErrorCode::RequestItemQuantityInvalid => "Request item quantity must be at least 1",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::DatabaseError => "Database error",
            ErrorCode::ConfigError => "Configuration error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::AlreadyExists),
            5 => Ok(ErrorCode::InvalidRequest),
            6 => Ok(ErrorCode::InvalidFormat),
            7 => Ok(ErrorCode::RequiredField),
            8 => Ok(ErrorCode::ValueOutOfRange),

            // Account
            1001 => Ok(ErrorCode::AccountNotFound),
            1002 => Ok(ErrorCode::AccountEmailExists),
            1003 => Ok(ErrorCode::AccountEmailInvalid),

            // Department
            2001 => Ok(ErrorCode::DepartmentNotFound),
            2002 => Ok(ErrorCode::DepartmentNameExists),

            // Employee
            3001 => Ok(ErrorCode::EmployeeNotFound),
            3002 => Ok(ErrorCode::EmployeeIdExists),
            3003 => Ok(ErrorCode::AccountAlreadyAssigned),

            // Transfer
            4001 => Ok(ErrorCode::TransferNotFound),
            4002 => Ok(ErrorCode::TransferSameDepartment),

            // Request
            5001 => Ok(ErrorCode::RequestNotFound),
            5002 => Ok(ErrorCode::RequestItemQuantityInvalid),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::DatabaseError),
            9003 => Ok(ErrorCode::ConfigError),

            other => Err(InvalidErrorCode(other)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::Success.code(), 0);
        assert_eq!(ErrorCode::ValidationFailed.code(), 2);
        assert_eq!(ErrorCode::NotFound.code(), 3);
        assert_eq!(ErrorCode::AccountEmailExists.code(), 1002);
        assert_eq!(ErrorCode::EmployeeNotFound.code(), 3001);
        assert_eq!(ErrorCode::DatabaseError.code(), 9002);
    }

    #[test]
    fn test_round_trip() {
        for code in [
            ErrorCode::Success,
            ErrorCode::ValidationFailed,
            ErrorCode::AccountNotFound,
            ErrorCode::DepartmentNameExists,
            ErrorCode::EmployeeNotFound,
            ErrorCode::TransferNotFound,
            ErrorCode::RequestItemQuantityInvalid,
            ErrorCode::InternalError,
        ] {
            let raw: u16 = code.into();
            assert_eq!(ErrorCode::try_from(raw), Ok(code));
        }
    }

    #[test]
    fn test_invalid_code() {
        assert_eq!(ErrorCode::try_from(60000), Err(InvalidErrorCode(60000)));
    }
}
