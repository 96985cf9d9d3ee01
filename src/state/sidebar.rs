// Sidebar state - width and drag-to-resize
use crate::style;

pub struct SidebarState {
    width: f32,
    pub resizing: bool,
}

impl SidebarState {
    pub fn new(width: f32) -> Self {
        Self {
            width: width.clamp(style::SIDEBAR_MIN, style::SIDEBAR_MAX),
            resizing: false,
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn set_width(&mut self, width: f32) {
        self.width = width.clamp(style::SIDEBAR_MIN, style::SIDEBAR_MAX);
    }

    pub fn resize_by(&mut self, delta: f32) {
        self.set_width(self.width + delta);
    }
}

impl Default for SidebarState {
    fn default() -> Self {
        Self::new(style::SIDEBAR_DEFAULT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_is_clamped() {
        let mut sidebar = SidebarState::default();
        assert_eq!(sidebar.width(), 256.0);

        sidebar.set_width(120.0);
        assert_eq!(sidebar.width(), 200.0);
        sidebar.set_width(900.0);
        assert_eq!(sidebar.width(), 500.0);

        sidebar.set_width(300.0);
        sidebar.resize_by(-40.0);
        assert_eq!(sidebar.width(), 260.0);
        sidebar.resize_by(1000.0);
        assert_eq!(sidebar.width(), 500.0);
    }

    #[test]
    fn configured_width_is_clamped_too() {
        assert_eq!(SidebarState::new(10.0).width(), 200.0);
    }
}
