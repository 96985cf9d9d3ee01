// CJK font fallback
//
// egui's bundled fonts have no CJK glyphs, so a system font is installed as
// the last fallback of both font families.

use crate::error::FontError;
use eframe::egui;
use std::path::{Path, PathBuf};
use std::sync::Arc;

const CJK_FONT_NAME: &str = "cjk-fallback";

const CANDIDATES: &[&str] = &[
    // Linux
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/google-noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/truetype/wqy/wqy-microhei.ttc",
    "/usr/share/fonts/wenquanyi/wqy-microhei/wqy-microhei.ttc",
    // macOS
    "/System/Library/Fonts/PingFang.ttc",
    "/System/Library/Fonts/STHeiti Medium.ttc",
    "/Library/Fonts/Arial Unicode.ttf",
    // Windows
    "C:\\Windows\\Fonts\\msjh.ttc",
    "C:\\Windows\\Fonts\\msyh.ttc",
];

/// Read a font file and check that egui will be able to parse it.
pub fn read_font(path: &Path) -> Result<Vec<u8>, FontError> {
    let bytes = std::fs::read(path).map_err(|source| FontError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    ab_glyph::FontRef::try_from_slice(&bytes).map_err(|source| FontError::Invalid {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(bytes)
}

/// Pick the font to use. A configured path wins when it holds a usable font;
/// otherwise the system candidates are probed in order.
pub fn find_cjk_font(configured: Option<&Path>) -> Option<(PathBuf, Vec<u8>)> {
    if let Some(path) = configured {
        match read_font(path) {
            Ok(bytes) => return Some((path.to_path_buf(), bytes)),
            Err(e) => tracing::warn!(error = %e, "configured CJK font unusable, probing system fonts"),
        }
    }
    CANDIDATES.iter().map(Path::new).filter(|p| p.is_file()).find_map(|path| {
        read_font(path)
            .map_err(|e| tracing::warn!(error = %e, "skipping system font"))
            .ok()
            .map(|bytes| (path.to_path_buf(), bytes))
    })
}

pub fn install_cjk_font(ctx: &egui::Context, configured: Option<&Path>) {
    let Some((path, bytes)) = find_cjk_font(configured) else {
        tracing::warn!("no CJK font found, Chinese text will not render");
        return;
    };

    let mut fonts = egui::FontDefinitions::default();
    fonts.font_data.insert(
        CJK_FONT_NAME.to_owned(),
        Arc::new(egui::FontData::from_owned(bytes)),
    );
    for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
        fonts
            .families
            .entry(family)
            .or_default()
            .push(CJK_FONT_NAME.to_owned());
    }
    ctx.set_fonts(fonts);
    tracing::info!(path = %path.display(), "installed CJK font");
}
