//! QR encoding and PNG rendering on top of the `qrcode` crate.

mod encoder;
mod renderer;

pub use encoder::QrCodeEncoder;
pub use renderer::QrImageRenderer;

use anyhow::{bail, Result};
use qrcode::EcLevel;

/// Parses `L`, `M`, `Q` or `H` (case-insensitive).
pub fn parse_ec_level(value: &str) -> Result<EcLevel> {
    Ok(match value.trim().to_ascii_uppercase().as_str() {
        "L" => EcLevel::L,
        "M" => EcLevel::M,
        "Q" => EcLevel::Q,
        "H" => EcLevel::H,
        other => bail!("unknown QR error correction level '{other}', expected L, M, Q or H"),
    })
}
