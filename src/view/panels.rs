// Header, footer and the central content panel

use crate::app::Guide;
use crate::route::{resolve_view, View};
use crate::style;
use eframe::egui;
use std::cell::RefCell;
use std::sync::Arc;

impl Guide {
    pub(crate) fn render_header(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("header_panel").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                if self.narrow && ui.button("☰").on_hover_text("導航").clicked() {
                    self.navigation.toggle_open();
                }

                let back = ui.add_enabled(self.router.can_go_back(), egui::Button::new("⬅"));
                if back.on_hover_text("上一頁 (Alt+←)").clicked() {
                    self.router.go_back();
                }
                let forward = ui.add_enabled(self.router.can_go_forward(), egui::Button::new("➡"));
                if forward.on_hover_text("下一頁 (Alt+→)").clicked() {
                    self.router.go_forward();
                }

                ui.label(
                    egui::RichText::new("Java & Spring Boot 教學平台")
                        .size(18.0)
                        .strong()
                        .color(self.theme.accent()),
                );

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let icon = match self.theme {
                        style::Theme::Dark => "☀",
                        style::Theme::Light => "🌙",
                    };
                    if ui.button(icon).on_hover_text("切換主題").clicked() {
                        self.set_theme(ctx, self.theme.toggle());
                    }
                    style::truncated_label_with_sense(
                        ui,
                        egui::RichText::new(self.router.location().to_string()).monospace().weak(),
                        egui::Sense::hover(),
                    );
                });
            });
            ui.add_space(4.0);
        });
    }

    pub(crate) fn render_footer(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("footer_panel").show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new("Java & Spring Boot 教學平台 | 從 TypeScript 到 Java 的學習之旅")
                        .small()
                        .weak(),
                );
            });
        });
    }

    fn render_progress_bar(&self, ui: &mut egui::Ui) {
        let (rect, response) = ui.allocate_exact_size(
            egui::vec2(ui.available_width(), style::PROGRESS_HEIGHT),
            egui::Sense::hover(),
        );
        let mut filled = rect;
        filled.set_width(rect.width() * self.progress.fraction());
        ui.painter().rect_filled(filled, 0.0, self.theme.accent());
        response.on_hover_text(format!("已閱讀 {:.0}%", self.progress.percent()));
    }

    pub(crate) fn render_content(&mut self, ctx: &egui::Context, next_navigation: &RefCell<Option<String>>) {
        let catalog = Arc::clone(&self.catalog);
        let location = self.router.location().clone();

        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_progress_bar(ui);

            let mut scroll = egui::ScrollArea::vertical()
                .id_salt("content_scroll")
                .auto_shrink([false, false]);
            if std::mem::take(&mut self.reset_scroll) {
                scroll = scroll.vertical_scroll_offset(0.0);
            }

            let output = scroll.show(ui, |ui| {
                ui.add_space(8.0);
                match resolve_view(&catalog, &location) {
                    View::Home => self.render_home(ui, next_navigation),
                    View::TypesDetail => self.render_types_detail(ui, catalog.types_detail()),
                    View::Comparison(page) => self.render_comparison_page(ui, &page),
                    // Redirects are applied before the pass starts
                    View::Redirect(_) => {
                        ui.centered_and_justified(|ui| ui.spinner());
                    }
                }
                ui.add_space(16.0);
            });

            self.progress.update(
                output.state.offset.y,
                output.content_size.y,
                output.inner_rect.height(),
            );
        });
    }
}
