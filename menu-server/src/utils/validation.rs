//! Input validation helpers
//!
//! Centralized text length constants and validation functions for the
//! admin forms. Failures carry the offending field in the error details.

use rust_decimal::Decimal;
use shared::models::{
    AnnouncementCreate, AnnouncementUpdate, CategoryCreate, CategoryTheme, CategoryUpdate,
    DisplayDates, ProductCreate, ProductOptions, ProductUpdate, SiteSettingsUpdate, SocialMedia,
};

use crate::utils::{AppError, ErrorCode};

// ── Text length limits ──────────────────────────────────────────────

/// Entity names: category, product, announcement title, site name
pub const MAX_NAME_LEN: usize = 200;

/// Descriptions
pub const MAX_NOTE_LEN: usize = 500;

/// Icon glyphs (an emoji or a short icon name)
pub const MAX_ICON_LEN: usize = 32;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// Passwords (before hashing)
pub const MIN_PASSWORD_LEN: usize = 8;
pub const MAX_PASSWORD_LEN: usize = 128;

/// URLs / image paths
pub const MAX_URL_LEN: usize = 2048;

// ── Generic helpers ─────────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::invalid_field(
            ErrorCode::RequiredField,
            field,
            format!("{field} must not be empty"),
        ));
    }
    validate_len(value, field, max_len)
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    match value {
        Some(v) => validate_len(v, field, max_len),
        None => Ok(()),
    }
}

fn validate_len(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    let len = value.chars().count();
    if len > max_len {
        return Err(AppError::invalid_field(
            ErrorCode::ValueOutOfRange,
            field,
            format!("{field} is too long ({len} chars, max {max_len})"),
        ));
    }
    Ok(())
}

/// `#RRGGBB`
pub fn validate_color(value: &str, field: &str) -> Result<(), AppError> {
    let valid = value.len() == 7
        && value.starts_with('#')
        && value[1..].chars().all(|c| c.is_ascii_hexdigit());
    if !valid {
        return Err(AppError::invalid_field(
            ErrorCode::InvalidColor,
            field,
            format!("{field} must be a #RRGGBB color, got '{value}'"),
        ));
    }
    Ok(())
}

pub fn validate_theme(theme: &CategoryTheme) -> Result<(), AppError> {
    validate_color(&theme.primary_color, "theme.primaryColor")?;
    validate_color(&theme.secondary_color, "theme.secondaryColor")?;
    validate_color(&theme.background_color, "theme.backgroundColor")
}

pub fn validate_display_dates(range: &DisplayDates) -> Result<(), AppError> {
    if range.start > range.end {
        return Err(AppError::invalid_field(
            ErrorCode::InvalidDisplayRange,
            "displayDates",
            "displayDates.start must not be after displayDates.end",
        ));
    }
    Ok(())
}

fn validate_price(price: Decimal, field: &str) -> Result<(), AppError> {
    if price <= Decimal::ZERO {
        return Err(AppError::invalid_field(
            ErrorCode::InvalidPrice,
            field,
            format!("{field} must be positive"),
        ));
    }
    Ok(())
}

/// Sizes need a name and a positive price
pub fn validate_options(options: &ProductOptions) -> Result<(), AppError> {
    for (i, size) in options.sizes.iter().enumerate() {
        validate_required_text(&size.name, &format!("options.sizes[{i}].name"), MAX_NAME_LEN)?;
        validate_price(size.price, &format!("options.sizes[{i}].price"))?;
    }
    Ok(())
}

fn validate_base_price(price: Option<Decimal>) -> Result<(), AppError> {
    match price {
        Some(p) if p < Decimal::ZERO => Err(AppError::invalid_field(
            ErrorCode::InvalidPrice,
            "basePrice",
            "basePrice must not be negative",
        )),
        _ => Ok(()),
    }
}

fn validate_social(social: &SocialMedia) -> Result<(), AppError> {
    validate_optional_text(&social.instagram, "socialMedia.instagram", MAX_URL_LEN)?;
    validate_optional_text(&social.facebook, "socialMedia.facebook", MAX_URL_LEN)?;
    if let Some(number) = &social.whatsapp
        && !number
            .trim_start_matches('+')
            .chars()
            .all(|c| c.is_ascii_digit())
    {
        return Err(AppError::invalid_field(
            ErrorCode::InvalidFormat,
            "socialMedia.whatsapp",
            "socialMedia.whatsapp must be a phone number",
        ));
    }
    Ok(())
}

/// Reject anything other than `local@domain.tld`-shaped input
pub fn validate_email(email: &str) -> Result<(), AppError> {
    validate_required_text(email, "email", MAX_EMAIL_LEN)?;
    let valid = email
        .trim()
        .split_once('@')
        .is_some_and(|(local, domain)| !local.is_empty() && domain.contains('.') && !domain.starts_with('.'));
    if !valid {
        return Err(AppError::invalid_field(
            ErrorCode::InvalidFormat,
            "email",
            "email is not a valid address",
        ));
    }
    Ok(())
}

pub fn validate_password(password: &str) -> Result<(), AppError> {
    let len = password.chars().count();
    if !(MIN_PASSWORD_LEN..=MAX_PASSWORD_LEN).contains(&len) {
        return Err(AppError::invalid_field(
            ErrorCode::ValueOutOfRange,
            "password",
            format!("password must be {MIN_PASSWORD_LEN}-{MAX_PASSWORD_LEN} characters"),
        ));
    }
    Ok(())
}

// ── Image uploads ───────────────────────────────────────────────────

/// Images must declare an `image/*` type and fit the size cap
pub fn validate_image_upload(content_type: &str, size: usize, max_bytes: usize) -> Result<(), AppError> {
    if size == 0 {
        return Err(AppError::invalid_field(ErrorCode::EmptyFile, "file", "Empty file provided"));
    }
    if !content_type.starts_with("image/") {
        return Err(AppError::invalid_field(
            ErrorCode::UnsupportedFileFormat,
            "file",
            format!("Unsupported file type '{content_type}', expected image/*"),
        ));
    }
    if size > max_bytes {
        return Err(AppError::invalid_field(
            ErrorCode::FileTooLarge,
            "file",
            format!(
                "File too large ({size} bytes). Maximum size is {max_bytes} bytes ({}MB)",
                max_bytes / 1024 / 1024
            ),
        )
        .with_detail("maxBytes", max_bytes));
    }
    Ok(())
}

/// Upload folder: relative, `[a-z0-9_-]` segments
pub fn validate_folder(folder: &str) -> Result<(), AppError> {
    let valid = !folder.is_empty()
        && folder.split('/').all(|segment| {
            !segment.is_empty()
                && segment
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_')
        });
    if !valid {
        return Err(AppError::invalid_field(
            ErrorCode::InvalidFormat,
            "folder",
            format!("Invalid upload folder '{folder}'"),
        ));
    }
    Ok(())
}

// ── Form payloads ───────────────────────────────────────────────────

pub fn validate_category_create(data: &CategoryCreate) -> Result<(), AppError> {
    validate_required_text(&data.name_ar, "nameAr", MAX_NAME_LEN)?;
    validate_optional_text(&data.icon, "icon", MAX_ICON_LEN)?;
    validate_optional_text(&data.image, "image", MAX_URL_LEN)?;
    validate_theme(&data.theme)
}

pub fn validate_category_update(data: &CategoryUpdate) -> Result<(), AppError> {
    if let Some(name) = &data.name_ar {
        validate_required_text(name, "nameAr", MAX_NAME_LEN)?;
    }
    validate_optional_text(&data.icon.clone().flatten(), "icon", MAX_ICON_LEN)?;
    validate_optional_text(&data.image.clone().flatten(), "image", MAX_URL_LEN)?;
    match &data.theme {
        Some(theme) => validate_theme(theme),
        None => Ok(()),
    }
}

pub fn validate_product_create(data: &ProductCreate) -> Result<(), AppError> {
    validate_required_text(&data.name_ar, "nameAr", MAX_NAME_LEN)?;
    validate_required_text(&data.category_id, "categoryId", MAX_NAME_LEN)?;
    validate_optional_text(&data.description_ar, "descriptionAr", MAX_NOTE_LEN)?;
    validate_optional_text(&data.image, "image", MAX_URL_LEN)?;
    validate_base_price(data.base_price)?;
    validate_options(&data.options)
}

pub fn validate_product_update(data: &ProductUpdate) -> Result<(), AppError> {
    if let Some(name) = &data.name_ar {
        validate_required_text(name, "nameAr", MAX_NAME_LEN)?;
    }
    if let Some(category_id) = &data.category_id {
        validate_required_text(category_id, "categoryId", MAX_NAME_LEN)?;
    }
    validate_optional_text(&data.description_ar.clone().flatten(), "descriptionAr", MAX_NOTE_LEN)?;
    validate_optional_text(&data.image.clone().flatten(), "image", MAX_URL_LEN)?;
    validate_base_price(data.base_price.flatten())?;
    match &data.options {
        Some(options) => validate_options(options),
        None => Ok(()),
    }
}

pub fn validate_announcement_create(data: &AnnouncementCreate) -> Result<(), AppError> {
    validate_required_text(&data.title_ar, "titleAr", MAX_NAME_LEN)?;
    validate_optional_text(&data.description_ar, "descriptionAr", MAX_NOTE_LEN)?;
    validate_optional_text(&data.image, "image", MAX_URL_LEN)?;
    match &data.display_dates {
        Some(range) => validate_display_dates(range),
        None => Ok(()),
    }
}

pub fn validate_announcement_update(data: &AnnouncementUpdate) -> Result<(), AppError> {
    if let Some(title) = &data.title_ar {
        validate_required_text(title, "titleAr", MAX_NAME_LEN)?;
    }
    validate_optional_text(&data.description_ar.clone().flatten(), "descriptionAr", MAX_NOTE_LEN)?;
    validate_optional_text(&data.image.clone().flatten(), "image", MAX_URL_LEN)?;
    match &data.display_dates {
        Some(Some(range)) => validate_display_dates(range),
        _ => Ok(()),
    }
}

pub fn validate_settings_update(data: &SiteSettingsUpdate) -> Result<(), AppError> {
    if let Some(name) = &data.site_name_ar {
        validate_required_text(name, "siteName", MAX_NAME_LEN)?;
    }
    validate_optional_text(&data.logo.clone().flatten(), "logo", MAX_URL_LEN)?;
    match &data.social_media {
        Some(social) => validate_social(social),
        None => Ok(()),
    }
}
