use base64::Engine;

/// Rendered label image bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelImage {
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl LabelImage {
    pub fn png(bytes: Vec<u8>) -> Self {
        Self {
            mime_type: "image/png".to_string(),
            bytes,
        }
    }

    /// `data:` URI for embedding into a standalone document.
    pub fn data_uri(&self) -> String {
        format!(
            "data:{};base64,{}",
            self.mime_type,
            base64::engine::general_purpose::STANDARD.encode(&self.bytes)
        )
    }

    pub fn file_extension(&self) -> &str {
        match self.mime_type.as_str() {
            "image/png" => "png",
            _ => "bin",
        }
    }
}

/// RGBA color parsed from `#RRGGBB` or `#RRGGBBAA`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelColor(pub [u8; 4]);

impl LabelColor {
    pub const BLACK: LabelColor = LabelColor([0, 0, 0, 255]);
    pub const WHITE: LabelColor = LabelColor([255, 255, 255, 255]);

    pub fn parse_hex(value: &str) -> Option<Self> {
        let hex = value.trim().strip_prefix('#').unwrap_or(value.trim());
        if !(hex.len() == 6 || hex.len() == 8) || !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        let alpha = if hex.len() == 8 { channel(6)? } else { 255 };
        Some(Self([channel(0)?, channel(2)?, channel(4)?, alpha]))
    }
}

/// Options forwarded to the image renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Target edge length in pixels.
    pub size: u32,
    /// Quiet zone, in modules.
    pub margin: u32,
    pub dark: LabelColor,
    pub light: LabelColor,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            size: 200,
            margin: 1,
            dark: LabelColor::BLACK,
            light: LabelColor::WHITE,
        }
    }
}
