//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Error category classification based on error code ranges
///
/// Categories are determined by the leading digit of the error code:
/// - 0xxx: General errors
/// - 1xxx: Account errors
/// - 2xxx: Department errors
/// - 3xxx: Employee errors
/// - 4xxx: Transfer errors
/// - 5xxx: Request errors
/// - 9xxx: System errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// General errors (0xxx)
    General,
    /// Account errors (1xxx)
    Account,
    /// Department errors (2xxx)
    Department,
    /// Employee errors (3xxx)
    Employee,
    /// Transfer errors (4xxx)
    Transfer,
    /// Request errors (5xxx)
    Request,
    /// System errors (9xxx)
    System,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            0..1000 => Self::General,
            1000..2000 => Self::Account,
            2000..3000 => Self::Department,
            3000..4000 => Self::Employee,
            4000..5000 => Self::Transfer,
            5000..6000 => Self::Request,
            _ => Self::System,
        }
    }
}

impl ErrorCode {
    /// Get the category of this error code
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_ranges() {
        assert_eq!(ErrorCode::NotFound.category(), ErrorCategory::General);
        assert_eq!(
            ErrorCode::AccountEmailExists.category(),
            ErrorCategory::Account
        );
        assert_eq!(
            ErrorCode::DepartmentNotFound.category(),
            ErrorCategory::Department
        );
        assert_eq!(
            ErrorCode::EmployeeNotFound.category(),
            ErrorCategory::Employee
        );
        assert_eq!(
            ErrorCode::TransferNotFound.category(),
            ErrorCategory::Transfer
        );
        assert_eq!(ErrorCode::RequestNotFound.category(), ErrorCategory::Request);
        assert_eq!(ErrorCode::DatabaseError.category(), ErrorCategory::System);
    }
}
