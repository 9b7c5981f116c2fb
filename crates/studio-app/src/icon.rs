//! Window icon loading.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use studio_common::PlatformError;
use winit::window::Icon;

/// Load a PNG file as a window icon.
pub fn load_icon(path: &Path) -> Result<Icon, PlatformError> {
    let (rgba, width, height) = decode_png_rgba(path)?;
    Icon::from_rgba(rgba, width, height).map_err(|e| PlatformError::Icon(e.to_string()))
}

/// Decode any 8/16-bit PNG into tightly packed RGBA8.
fn decode_png_rgba(path: &Path) -> Result<(Vec<u8>, u32, u32), PlatformError> {
    let file = File::open(path).map_err(|e| icon_error(path, e))?;
    let mut decoder = png::Decoder::new(BufReader::new(file));
    decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);
    let mut reader = decoder.read_info().map_err(|e| icon_error(path, e))?;

    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf).map_err(|e| icon_error(path, e))?;
    buf.truncate(info.buffer_size());

    let rgba = match info.color_type {
        png::ColorType::Rgba => buf,
        png::ColorType::Rgb => buf
            .chunks_exact(3)
            .flat_map(|px| [px[0], px[1], px[2], 255])
            .collect(),
        png::ColorType::GrayscaleAlpha => buf
            .chunks_exact(2)
            .flat_map(|px| [px[0], px[0], px[0], px[1]])
            .collect(),
        png::ColorType::Grayscale => buf.iter().flat_map(|&v| [v, v, v, 255]).collect(),
        png::ColorType::Indexed => {
            return Err(PlatformError::Icon(format!(
                "{}: palette was not expanded",
                path.display()
            )))
        }
    };

    Ok((rgba, info.width, info.height))
}

fn icon_error(path: &Path, e: impl std::fmt::Display) -> PlatformError {
    PlatformError::Icon(format!("{}: {e}", path.display()))
}
