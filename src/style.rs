// Layout constants and theme for the guide

use eframe::egui;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn from_mode(mode: &str) -> Self {
        if mode.eq_ignore_ascii_case("light") {
            Theme::Light
        } else {
            Theme::Dark
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn visuals(self) -> egui::Visuals {
        match self {
            Theme::Light => egui::Visuals::light(),
            Theme::Dark => egui::Visuals::dark(),
        }
    }

    /// Name of the bundled syntect theme for code blocks
    pub fn syntax_theme(self) -> &'static str {
        match self {
            Theme::Light => "base16-ocean.light",
            Theme::Dark => "base16-ocean.dark",
        }
    }

    pub fn accent(self) -> egui::Color32 {
        match self {
            Theme::Light => egui::Color32::from_rgb(37, 99, 235),
            Theme::Dark => egui::Color32::from_rgb(120, 180, 255),
        }
    }
}

// --- Sizing ---
pub const NAV_ROW_HEIGHT: f32 = 28.0;
pub const NAV_INDENT: f32 = 24.0;
pub const DIVIDER_WIDTH: f32 = 4.0;
pub const PROGRESS_HEIGHT: f32 = 4.0;

// --- Sidebar constraints ---
pub const SIDEBAR_MIN: f32 = 200.0;
pub const SIDEBAR_MAX: f32 = 500.0;
pub const SIDEBAR_DEFAULT: f32 = 256.0;
pub const NARROW_BREAKPOINT: f32 = 1024.0;

// --- Comparison tables ---
pub const STACK_COLUMNS_BELOW: f32 = 900.0;

// --- Timing ---
pub const COPY_FEEDBACK_MS: u64 = 2000;

// --- Highlighting ---
pub const HIGHLIGHT_CACHE_ENTRIES: usize = 256;

// --- Colors ---
pub const WARNING_FILL: egui::Color32 = egui::Color32::from_rgb(254, 249, 195);
pub const WARNING_TEXT: egui::Color32 = egui::Color32::from_rgb(133, 77, 14);
pub const DIFFERENCE_TEXT: egui::Color32 = egui::Color32::from_rgb(220, 38, 38);
pub const SIMILARITY_TEXT: egui::Color32 = egui::Color32::from_rgb(22, 163, 74);

// --- Helper functions ---

/// Width of the application viewport in points
pub fn viewport_width(ctx: &egui::Context) -> f32 {
    ctx.input(|i| {
        i.viewport()
            .inner_rect
            .map(|r| r.width())
            .unwrap_or(NARROW_BREAKPOINT)
    })
}

/// Render a label that truncates overflowing text with an ellipsis and uses the provided sense.
pub fn truncated_label_with_sense(
    ui: &mut egui::Ui,
    text: impl Into<egui::WidgetText>,
    sense: egui::Sense,
) -> egui::Response {
    ui.add(egui::Label::new(text).truncate().sense(sense))
}

/// A bulleted line of wrapped text.
pub fn bullet(ui: &mut egui::Ui, marker_color: egui::Color32, text: &str) {
    ui.horizontal_wrapped(|ui| {
        ui.label(egui::RichText::new("•").strong().color(marker_color));
        ui.label(text);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_from_mode_defaults_to_dark() {
        assert_eq!(Theme::from_mode("light"), Theme::Light);
        assert_eq!(Theme::from_mode("LIGHT"), Theme::Light);
        assert_eq!(Theme::from_mode("dark"), Theme::Dark);
        assert_eq!(Theme::from_mode("solarized"), Theme::Dark);
    }

    #[test]
    fn toggle_flips_theme() {
        assert_eq!(Theme::Dark.toggle(), Theme::Light);
        assert_eq!(Theme::Light.toggle().toggle(), Theme::Light);
    }
}
