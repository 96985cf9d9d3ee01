// Keyboard shortcuts

use crate::app::Guide;
use eframe::egui;

impl Guide {
    pub fn handle_input(&mut self, ctx: &egui::Context) {
        // History
        if ctx.input(|i| i.modifiers.alt && i.key_pressed(egui::Key::ArrowLeft)) {
            self.router.go_back();
        }
        if ctx.input(|i| i.modifiers.alt && i.key_pressed(egui::Key::ArrowRight)) {
            self.router.go_forward();
        }

        if self.narrow
            && self.navigation.open
            && ctx.input(|i| i.key_pressed(egui::Key::Escape))
        {
            self.navigation.close();
        }
    }
}
