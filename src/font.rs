use ab_glyph::{Font, FontVec};
use log::debug;

#[derive(Debug)]
pub enum FontError {
    NotFound(String),
    ReadError(std::io::Error),
    InvalidFont(String),
    UnsupportedPlatform,
}

impl std::fmt::Display for FontError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FontError::NotFound(what) => write!(f, "No usable font found: {what}"),
            FontError::ReadError(err) => write!(f, "Failed to read font file: {err}"),
            FontError::InvalidFont(path) => write!(f, "Font file could not be parsed: {path}"),
            FontError::UnsupportedPlatform => write!(f, "Platform not supported"),
        }
    }
}

impl std::error::Error for FontError {}

/// Load the first candidate font that parses and can actually rasterize
/// every character of `text`. Fonts that load but would only draw a
/// .notdef box (e.g. a generic serif face), and bitmap-only color fonts
/// with no outlines to rasterize (e.g. Apple Color Emoji, Noto Color
/// Emoji), are both skipped so a later outline font still gets its turn.
pub fn load_glyph_font(text: &str) -> Result<FontVec, FontError> {
    let candidates = candidate_font_paths();
    if candidates.is_empty() {
        return Err(FontError::UnsupportedPlatform);
    }

    for path in &candidates {
        match load_font(path) {
            Ok(font) => {
                if can_outline(&font, text) {
                    debug!("Using font: {path}");
                    return Ok(font);
                }
                debug!("Font {path} cannot rasterize {text:?}, skipping");
            }
            Err(e) => debug!("Font {path} unavailable: {e}"),
        }
    }

    Err(FontError::NotFound(format!(
        "no candidate font can render {text:?}"
    )))
}

/// True if the font maps every character of `text` to a real glyph that
/// also has outline data to rasterize from.
fn can_outline(font: &FontVec, text: &str) -> bool {
    text.chars().all(|c| {
        let id = font.glyph_id(c);
        id.0 != 0 && font.outline(id).is_some()
    })
}

fn load_font(font_path: &str) -> Result<FontVec, FontError> {
    use std::io::Read;

    let file = std::fs::File::open(font_path).map_err(FontError::ReadError)?;
    let mut reader = std::io::BufReader::new(file);
    let mut font_data = Vec::new();
    reader.read_to_end(&mut font_data).map_err(FontError::ReadError)?;
    FontVec::try_from_vec(font_data).map_err(|_| FontError::InvalidFont(font_path.to_string()))
}

#[cfg(target_os = "macos")]
fn candidate_font_paths() -> Vec<String> {
    [
        "/System/Library/Fonts/Apple Color Emoji.ttc",
        "/Library/Fonts/Apple Color Emoji.ttc",
        "/System/Library/Fonts/Helvetica.ttc",
    ]
    .map(String::from)
    .to_vec()
}

#[cfg(target_os = "linux")]
fn candidate_font_paths() -> Vec<String> {
    [
        "/usr/share/fonts/truetype/noto/NotoColorEmoji.ttf",
        "/usr/share/fonts/noto-color-emoji/NotoColorEmoji.ttf",
        "/usr/share/fonts/google-noto-emoji/NotoColorEmoji.ttf",
        "/usr/share/fonts/truetype/ancient-scripts/Symbola_hint.ttf",
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    ]
    .map(String::from)
    .to_vec()
}

#[cfg(target_os = "windows")]
fn candidate_font_paths() -> Vec<String> {
    let system_path = std::env::var("SYSTEMROOT").unwrap_or("C:\\Windows".to_string());
    vec![
        format!("{system_path}\\Fonts\\seguiemj.ttf"), // Segoe UI Emoji
        format!("{system_path}\\Fonts\\seguisym.ttf"), // Segoe UI Symbol
    ]
}

#[cfg(not(any(target_os = "windows", target_os = "macos", target_os = "linux")))]
fn candidate_font_paths() -> Vec<String> {
    Vec::new()
}
