//! Unified error codes for the café menu
//!
//! This module defines all error codes used by the menu server and the admin console.
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Permission errors
//! - 3xxx: Catalog errors (categories, products, announcements, admins)
//! - 4xxx: Media errors (image validation, encoding, blob stores)
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

    // ==================== 1xxx: Auth ====================
    /// Principal is not authenticated
    NotAuthenticated = 1001,
    /// Invalid credentials (email/password)
    InvalidCredentials = 1002,
    /// Token has expired
    TokenExpired = 1003,
    /// Token is invalid
    TokenInvalid = 1004,

    // ==================== 2xxx: Permission ====================
    /// Permission denied
    PermissionDenied = 2001,
    /// Super admin role is required
    SuperAdminRequired = 2002,
    /// An admin cannot delete their own record
    CannotDeleteSelf = 2005,

    // ==================== 3xxx: Catalog ====================
    CategoryNotFound = 3001,
    ProductNotFound = 3002,
    AnnouncementNotFound = 3003,
    AdminNotFound = 3004,
    AdminEmailExists = 3005,
    InvalidDisplayRange = 3006,
    InvalidColor = 3007,
    InvalidPrice = 3008,

    // ==================== 4xxx: Media ====================
    FileTooLarge = 4001,
    UnsupportedFileFormat = 4002,
    InvalidImageFile = 4003,
    NoFileProvided = 4004,
    EmptyFile = 4005,
    ImageEncodingFailed = 4006,
    UploadFailed = 4007,
    BlobNotFound = 4008,
    InvalidBlobUrl = 4009,

    // ==================== 9xxx: System ====================
    InternalError = 9001,
    DatabaseError = 9002,
    NetworkError = 9003,
    ConfigError = 9005,
}

impl ErrorCode {
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::RequiredField => "Required field is missing",
            ErrorCode::ValueOutOfRange => "Value is out of range",

            // Auth
            ErrorCode::NotAuthenticated => "User is not authenticated",
            ErrorCode::InvalidCredentials => "Invalid email or password",
            ErrorCode::TokenExpired => "Authentication token has expired",
            ErrorCode::TokenInvalid => "Authentication token is invalid",

            // Permission
            ErrorCode::PermissionDenied => "Permission denied",
            ErrorCode::SuperAdminRequired => "Super administrator role is required",
            ErrorCode::CannotDeleteSelf => "Cannot delete own account",

            // Catalog
            ErrorCode::CategoryNotFound => "Category not found",
            ErrorCode::ProductNotFound => "Product not found",
            ErrorCode::AnnouncementNotFound => "Announcement not found",
            ErrorCode::AdminNotFound => "Admin not found",
            ErrorCode::AdminEmailExists => "Admin email already exists",
            ErrorCode::InvalidDisplayRange => "Display range start must not be after its end",
            ErrorCode::InvalidColor => "Color must be a #RRGGBB hex value",
            ErrorCode::InvalidPrice => "Price must be positive",

            // Media
            ErrorCode::FileTooLarge => "File too large",
            ErrorCode::UnsupportedFileFormat => "Unsupported file format",
            ErrorCode::InvalidImageFile => "Invalid image file",
            ErrorCode::NoFileProvided => "No file provided",
            ErrorCode::EmptyFile => "Empty file provided",
            ErrorCode::ImageEncodingFailed => "Image encoding failed",
            ErrorCode::UploadFailed => "Image upload failed",
            ErrorCode::BlobNotFound => "Image not found in storage",
            ErrorCode::InvalidBlobUrl => "Invalid image URL",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::DatabaseError => "Database error",
            ErrorCode::NetworkError => "Network error",
            ErrorCode::ConfigError => "Configuration error",
        }
    }

    /// Arabic message shown to customers and admins
    pub const fn message_ar(&self) -> &'static str {
        match self {
            ErrorCode::Success => "تمت العملية بنجاح",
            ErrorCode::InternalError => "حدث خطأ غير متوقع",
            ErrorCode::ValidationFailed
            | ErrorCode::InvalidRequest
            | ErrorCode::InvalidFormat
            | ErrorCode::ValueOutOfRange => "البيانات المدخلة غير صحيحة",
            ErrorCode::RequiredField => "يرجى ملء جميع الحقول المطلوبة",
            ErrorCode::NotFound => "العنصر غير موجود",
            ErrorCode::AlreadyExists => "العنصر موجود بالفعل",

            ErrorCode::NotAuthenticated => "يرجى تسجيل الدخول أولاً",
            ErrorCode::InvalidCredentials => "البريد الإلكتروني أو كلمة المرور غير صحيحة",
            ErrorCode::TokenExpired | ErrorCode::TokenInvalid => {
                "انتهت الجلسة، يرجى تسجيل الدخول مرة أخرى"
            }

            ErrorCode::PermissionDenied => "ليس لديك صلاحية للقيام بهذا الإجراء",
            ErrorCode::SuperAdminRequired => "هذا الإجراء متاح للمشرف العام فقط",
            ErrorCode::CannotDeleteSelf => "لا يمكنك حذف حسابك",

            ErrorCode::CategoryNotFound => "القسم غير موجود",
            ErrorCode::ProductNotFound => "المنتج غير موجود",
            ErrorCode::AnnouncementNotFound => "الإعلان غير موجود",
            ErrorCode::AdminNotFound => "المشرف غير موجود",
            ErrorCode::AdminEmailExists => "البريد الإلكتروني مستخدم بالفعل",
            ErrorCode::InvalidDisplayRange => "تاريخ البداية يجب أن يسبق تاريخ النهاية",
            ErrorCode::InvalidColor => "اللون غير صالح",
            ErrorCode::InvalidPrice => "السعر غير صالح",

            ErrorCode::FileTooLarge => "حجم الصورة كبير جداً (الحد الأقصى 5MB)",
            ErrorCode::UnsupportedFileFormat => "يرجى اختيار صورة فقط",
            ErrorCode::InvalidImageFile | ErrorCode::EmptyFile => "ملف الصورة غير صالح",
            ErrorCode::NoFileProvided => "يرجى اختيار صورة",
            ErrorCode::ImageEncodingFailed => "تعذر معالجة الصورة",
            ErrorCode::UploadFailed => "فشل رفع الصورة",
            ErrorCode::BlobNotFound => "الصورة غير موجودة",
            ErrorCode::InvalidBlobUrl => "رابط الصورة غير صالح",

            ErrorCode::DatabaseError => "تعذر الوصول إلى البيانات",
            ErrorCode::NetworkError => "تعذر الاتصال بالخادم، يرجى المحاولة مرة أخرى",
            ErrorCode::ConfigError => "خطأ في إعدادات النظام",
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
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::AlreadyExists),
            5 => Ok(ErrorCode::InvalidRequest),
            6 => Ok(ErrorCode::InvalidFormat),
            7 => Ok(ErrorCode::RequiredField),
            8 => Ok(ErrorCode::ValueOutOfRange),

            // Auth
            1001 => Ok(ErrorCode::NotAuthenticated),
            1002 => Ok(ErrorCode::InvalidCredentials),
            1003 => Ok(ErrorCode::TokenExpired),
            1004 => Ok(ErrorCode::TokenInvalid),

            // Permission
            2001 => Ok(ErrorCode::PermissionDenied),
            2002 => Ok(ErrorCode::SuperAdminRequired),
            2005 => Ok(ErrorCode::CannotDeleteSelf),

            // Catalog
            3001 => Ok(ErrorCode::CategoryNotFound),
            3002 => Ok(ErrorCode::ProductNotFound),
            3003 => Ok(ErrorCode::AnnouncementNotFound),
            3004 => Ok(ErrorCode::AdminNotFound),
            3005 => Ok(ErrorCode::AdminEmailExists),
            3006 => Ok(ErrorCode::InvalidDisplayRange),
            3007 => Ok(ErrorCode::InvalidColor),
            3008 => Ok(ErrorCode::InvalidPrice),

            // Media
            4001 => Ok(ErrorCode::FileTooLarge),
            4002 => Ok(ErrorCode::UnsupportedFileFormat),
            4003 => Ok(ErrorCode::InvalidImageFile),
            4004 => Ok(ErrorCode::NoFileProvided),
            4005 => Ok(ErrorCode::EmptyFile),
            4006 => Ok(ErrorCode::ImageEncodingFailed),
            4007 => Ok(ErrorCode::UploadFailed),
            4008 => Ok(ErrorCode::BlobNotFound),
            4009 => Ok(ErrorCode::InvalidBlobUrl),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::DatabaseError),
            9003 => Ok(ErrorCode::NetworkError),
            9005 => Ok(ErrorCode::ConfigError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:04}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::Success.code(), 0);
        assert_eq!(ErrorCode::NotAuthenticated.code(), 1001);
        assert_eq!(ErrorCode::PermissionDenied.code(), 2001);
        assert_eq!(ErrorCode::CategoryNotFound.code(), 3001);
        assert_eq!(ErrorCode::UploadFailed.code(), 4007);
        assert_eq!(ErrorCode::InternalError.code(), 9001);
    }

    #[test]
    fn test_try_from_u16() {
        assert_eq!(ErrorCode::try_from(4009), Ok(ErrorCode::InvalidBlobUrl));
        assert_eq!(ErrorCode::try_from(9003), Ok(ErrorCode::NetworkError));
        assert_eq!(ErrorCode::try_from(4242), Err(InvalidErrorCode(4242)));
    }

    #[test]
    fn test_display_format() {
        assert_eq!(ErrorCode::NotFound.to_string(), "E0003");
        assert_eq!(ErrorCode::BlobNotFound.to_string(), "E4008");
    }

    #[test]
    fn test_serde_as_number() {
        let json = serde_json::to_string(&ErrorCode::FileTooLarge).unwrap();
        assert_eq!(json, "4001");
        let code: ErrorCode = serde_json::from_str("3002").unwrap();
        assert_eq!(code, ErrorCode::ProductNotFound);
        assert!(serde_json::from_str::<ErrorCode>("12345").is_err());
    }

    #[test]
    fn test_arabic_messages_present() {
        assert_eq!(
            ErrorCode::FileTooLarge.message_ar(),
            "حجم الصورة كبير جداً (الحد الأقصى 5MB)"
        );
        assert_eq!(ErrorCode::UnsupportedFileFormat.message_ar(), "يرجى اختيار صورة فقط");
        assert!(!ErrorCode::UploadFailed.message_ar().is_empty());
    }
}
