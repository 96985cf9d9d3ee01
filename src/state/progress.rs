// Reading progress of the main content area

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollProgress {
    percent: f32,
}

impl ScrollProgress {
    /// Update from the scroll area's offset, content height and viewport height.
    pub fn update(&mut self, offset: f32, content_height: f32, viewport_height: f32) {
        let scrollable = content_height - viewport_height;
        self.percent = if scrollable > 0.0 {
            (offset / scrollable * 100.0).clamp(0.0, 100.0)
        } else {
            0.0
        };
    }

    pub fn percent(&self) -> f32 {
        self.percent
    }

    pub fn fraction(&self) -> f32 {
        self.percent / 100.0
    }
}
