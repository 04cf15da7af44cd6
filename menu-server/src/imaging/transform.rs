use std::io::Cursor;

use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use shared::AppError;
use thiserror::Error;

/// Bounds and quality of the re-encoded image
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformOptions {
    pub max_width: u32,
    pub max_height: u32,
    /// JPEG quality in `(0, 1]`
    pub quality: f32,
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self {
            max_width: 1200,
            max_height: 1200,
            quality: 0.8,
        }
    }
}

impl TransformOptions {
    /// Quality on the encoder's 1..=100 scale
    fn jpeg_quality(&self) -> u8 {
        (self.quality * 100.0).round().clamp(1.0, 100.0) as u8
    }
}

#[derive(Debug, Error)]
pub enum TransformError {
    #[error("cannot decode image: {0}")]
    Decode(#[from] image::ImageError),

    #[error("cannot encode image: {0}")]
    Encode(String),

    #[error("image transform task failed: {0}")]
    Task(String),
}

impl From<TransformError> for AppError {
    fn from(err: TransformError) -> Self {
        match err {
            TransformError::Decode(e) => AppError::with_message(
                shared::ErrorCode::InvalidImageFile,
                format!("Invalid image: {}", e),
            ),
            other => AppError::encoding(other.to_string()),
        }
    }
}

/// JPEG output of [`transform`]
#[derive(Debug, Clone)]
pub struct TransformedImage {
    pub bytes: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

/// Dimensions after fitting `(width, height)` inside `(max_width, max_height)`.
///
/// Aspect ratio is preserved and images that already fit keep their size.
///
/// ```
/// # use menu_server::imaging::fit_within;
/// assert_eq!(fit_within((2400, 1600), (1200, 1200)), (1200, 800));
/// assert_eq!(fit_within((800, 600), (1200, 1200)), (800, 600));
/// ```
pub fn fit_within(source: (u32, u32), bounds: (u32, u32)) -> (u32, u32) {
    let (w, h) = source;
    let (max_w, max_h) = bounds;
    if w == 0 || h == 0 {
        return (w, h);
    }

    let ratio = (max_w as f64 / w as f64).min(max_h as f64 / h as f64).min(1.0);
    if ratio >= 1.0 {
        return (w, h);
    }

    let scaled_w = ((w as f64 * ratio).round() as u32).max(1);
    let scaled_h = ((h as f64 * ratio).round() as u32).max(1);
    (scaled_w, scaled_h)
}

/// Decode, bound and re-encode as JPEG. CPU bound; see [`transform_blocking`].
pub fn transform(data: &[u8], options: &TransformOptions) -> Result<TransformedImage, TransformError> {
    let img = image::load_from_memory(data)?;

    let (width, height) = fit_within(
        (img.width(), img.height()),
        (options.max_width, options.max_height),
    );
    let img = if (width, height) == (img.width(), img.height()) {
        img
    } else {
        img.resize_exact(width, height, FilterType::Lanczos3)
    };

    // JPEG has no alpha channel
    let rgb = img.to_rgb8();
    let mut bytes = Vec::new();
    let encoder = JpegEncoder::new_with_quality(Cursor::new(&mut bytes), options.jpeg_quality());
    rgb.write_with_encoder(encoder)
        .map_err(|e| TransformError::Encode(e.to_string()))?;

    Ok(TransformedImage {
        bytes,
        width,
        height,
    })
}

/// [`transform`] on the blocking thread pool
pub async fn transform_blocking(
    data: Vec<u8>,
    options: TransformOptions,
) -> Result<TransformedImage, TransformError> {
    tokio::task::spawn_blocking(move || transform(&data, &options))
        .await
        .map_err(|e| TransformError::Task(e.to_string()))?
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};

    fn png(width: u32, height: u32) -> Vec<u8> {
        let img = RgbImage::from_fn(width, height, |x, y| Rgb([(x % 255) as u8, (y % 255) as u8, 90]));
        let mut out = Vec::new();
        img.write_to(&mut Cursor::new(&mut out), ImageFormat::Png).unwrap();
        out
    }

    fn decoded_dimensions(bytes: &[u8]) -> (u32, u32) {
        let img = image::load_from_memory_with_format(bytes, ImageFormat::Jpeg).unwrap();
        (img.width(), img.height())
    }

    #[test]
    fn fit_within_keeps_small_images() {
        assert_eq!(fit_within((1200, 1200), (1200, 1200)), (1200, 1200));
        assert_eq!(fit_within((10, 3000), (1200, 3000)), (10, 3000));
    }

    #[test]
    fn fit_within_clamps_long_side() {
        assert_eq!(fit_within((3000, 1000), (1200, 1200)), (1200, 400));
        assert_eq!(fit_within((1000, 3000), (1200, 1200)), (400, 1200));
    }

    #[test]
    fn fit_within_uses_tighter_bound() {
        assert_eq!(fit_within((2000, 1500), (1600, 600)), (800, 600));
    }

    #[test]
    fn fit_within_never_collapses_to_zero() {
        assert_eq!(fit_within((10000, 1), (100, 100)), (100, 1));
    }

    #[test]
    fn small_image_keeps_dimensions() {
        let out = transform(&png(320, 200), &TransformOptions::default()).unwrap();
        assert_eq!((out.width, out.height), (320, 200));
        assert_eq!(decoded_dimensions(&out.bytes), (320, 200));
    }

    #[test]
    fn large_image_is_bounded_with_aspect_ratio() {
        let out = transform(&png(1800, 900), &TransformOptions::default()).unwrap();
        assert_eq!(decoded_dimensions(&out.bytes), (1200, 600));
    }

    #[test]
    fn transparent_input_is_flattened_to_jpeg() {
        let img = RgbaImage::from_pixel(40, 40, Rgba([200, 10, 10, 128]));
        let mut data = Vec::new();
        img.write_to(&mut Cursor::new(&mut data), ImageFormat::Png).unwrap();

        let out = transform(&data, &TransformOptions::default()).unwrap();
        assert_eq!(image::guess_format(&out.bytes).unwrap(), ImageFormat::Jpeg);
    }

    #[test]
    fn lower_quality_gives_smaller_output() {
        let data = png(600, 600);
        let high = transform(&data, &TransformOptions { quality: 0.95, ..Default::default() }).unwrap();
        let low = transform(&data, &TransformOptions { quality: 0.3, ..Default::default() }).unwrap();
        assert!(low.bytes.len() < high.bytes.len());
    }

    #[test]
    fn garbage_is_a_decode_error() {
        let err = transform(b"definitely not an image", &TransformOptions::default()).unwrap_err();
        assert!(matches!(err, TransformError::Decode(_)));
    }

    #[tokio::test]
    async fn blocking_variant_matches() {
        let out = transform_blocking(png(50, 2000), TransformOptions::default()).await.unwrap();
        assert_eq!((out.width, out.height), (30, 1200));
    }
}
