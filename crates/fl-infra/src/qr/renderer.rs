use anyhow::{Context, Result};
use async_trait::async_trait;
use image::codecs::png::PngEncoder;
use image::imageops::{self, FilterType};
use image::{ColorType, ImageEncoder, Rgba, RgbaImage};
use qrcode::QrCode;

use fl_core::label::LabelColor;
use fl_core::ports::{LabelRendererPort, RenderError};
use fl_core::{LabelImage, QrPayload, RenderOptions};

use super::parse_ec_level;

/// Draws payloads as square PNG QR codes.
pub struct QrImageRenderer {
    ec_level: qrcode::EcLevel,
}

impl QrImageRenderer {
    pub fn new(ec_level: qrcode::EcLevel) -> Self {
        Self { ec_level }
    }

    pub fn from_level_name(name: &str) -> Result<Self> {
        Ok(Self::new(parse_ec_level(name)?))
    }

    /// Fails when the symbol plus margin has more modules than the label has
    /// pixels, since downscaling would merge modules.
    fn draw(&self, code: &QrCode, options: &RenderOptions) -> Result<RgbaImage, RenderError> {
        let modules = options
            .margin
            .checked_mul(2)
            .and_then(|m| m.checked_add(code.width() as u32))
            .filter(|&modules| modules <= options.size)
            .ok_or_else(|| {
                RenderError::Image(format!(
                    "{}px label cannot hold a {}-module code with margin {}",
                    options.size,
                    code.width(),
                    options.margin
                ))
            })?;
        let module_px = options.size / modules;

        let symbol = code
            .render::<Rgba<u8>>()
            .quiet_zone(false)
            .module_dimensions(module_px, module_px)
            .dark_color(rgba(options.dark))
            .light_color(rgba(options.light))
            .build();

        let edge = modules * module_px;
        let mut canvas = RgbaImage::from_pixel(edge, edge, rgba(options.light));
        let offset = i64::from(options.margin * module_px);
        imageops::overlay(&mut canvas, &symbol, offset, offset);

        if edge == options.size {
            Ok(canvas)
        } else {
            Ok(imageops::resize(
                &canvas,
                options.size,
                options.size,
                FilterType::Nearest,
            ))
        }
    }
}

impl Default for QrImageRenderer {
    fn default() -> Self {
        Self::new(qrcode::EcLevel::M)
    }
}

fn rgba(color: LabelColor) -> Rgba<u8> {
    Rgba(color.0)
}

fn encode_png(image: &RgbaImage) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    PngEncoder::new(&mut bytes)
        .write_image(
            image.as_raw(),
            image.width(),
            image.height(),
            ColorType::Rgba8.into(),
        )
        .context("encode label to png")?;
    Ok(bytes)
}

#[async_trait]
impl LabelRendererPort for QrImageRenderer {
    async fn render(
        &self,
        payload: &QrPayload,
        options: &RenderOptions,
    ) -> Result<LabelImage, RenderError> {
        let code = QrCode::with_error_correction_level(payload.as_str().as_bytes(), self.ec_level)
            .map_err(|e| RenderError::InvalidPayload(e.to_string()))?;
        let image = self.draw(&code, options)?;
        let bytes = encode_png(&image).map_err(|e| RenderError::Image(format!("{e:#}")))?;
        Ok(LabelImage::png(bytes))
    }
}
