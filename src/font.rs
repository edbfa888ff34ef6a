//! Font resolution for the icon lettering.
//!
//! A font is picked from an ordered list of platform-conventional font files,
//! falling back to an embedded typeface when none of them is usable. The
//! fallback makes resolution infallible: a machine with no system fonts still
//! produces an icon, just not necessarily in its native typeface.

use rusttype::Font;
use std::fs;
use std::path::Path;

/// Candidate font files, one conventional location per platform, tried in
/// order. The macOS entry is a `.ttc` collection; face 0 is used.
pub const FONT_CANDIDATES: &[&str] = &[
    "/System/Library/Fonts/Helvetica.ttc",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "C:\\Windows\\Fonts\\arialbd.ttf",
];

static FALLBACK_FONT: &[u8] = include_bytes!("../assets/fonts/DejaVuSans-Bold.ttf");

/// Resolve the font used to draw the icon lettering. Never fails.
pub fn resolve() -> Font<'static> {
    resolve_from(FONT_CANDIDATES)
}

/// Resolve from an explicit candidate list; the first path that exists and
/// parses wins. Unreadable or malformed candidates fall through silently to
/// the next entry, and the embedded fallback terminates the chain.
pub fn resolve_from(candidates: &[&str]) -> Font<'static> {
    for path in candidates {
        if let Some(font) = load_font_file(Path::new(path)) {
            return font;
        }
    }

    Font::try_from_bytes(FALLBACK_FONT).expect("embedded fallback font is valid")
}

fn load_font_file(path: &Path) -> Option<Font<'static>> {
    if !path.exists() {
        return None;
    }
    let data = fs::read(path).ok()?;
    // Face index 0 covers both plain .ttf files and .ttc collections.
    Font::try_from_vec_and_index(data, 0)
}
