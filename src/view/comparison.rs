// Comparison page: header, quick navigation, comparison tables and tips

use crate::app::Guide;
use crate::content::{CodeExample, ComparisonRecord};
use crate::route::ComparisonPage;
use crate::style;
use eframe::egui;

const LEARNING_TIPS: [&str; 6] = [
    "仔細比較三種語言的語法差異,找出相似的概念",
    "注意每個範例下方的「關鍵差異」和「相似點」說明",
    "可以點擊程式碼區塊右上角的複製按鈕來複製程式碼",
    "使用左側導航列切換不同的學習主題",
    "標記 ❌ 的是從 TypeScript 轉到 Java 特別容易犯錯的地方",
    "標記 ⚠️ 的是需要特別注意的重要概念差異",
];

impl Guide {
    pub(crate) fn render_comparison_page(&mut self, ui: &mut egui::Ui, page: &ComparisonPage<'_>) {
        ui.label(egui::RichText::new(page.title).size(28.0).strong());
        ui.label(egui::RichText::new(page.description).size(16.0).weak());

        if let Some(warning) = page.warning {
            ui.add_space(8.0);
            egui::Frame::new()
                .fill(style::WARNING_FILL)
                .corner_radius(egui::CornerRadius::same(6))
                .inner_margin(egui::Margin::same(12))
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.label(egui::RichText::new(warning).color(style::WARNING_TEXT));
                });
        }

        let anchors = page.anchor_table();
        if !anchors.is_empty() {
            ui.add_space(16.0);
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(egui::RichText::new("📑 快速導航").size(16.0).strong());
                ui.add_space(4.0);
                ui.horizontal_wrapped(|ui| {
                    for entry in anchors.entries() {
                        // Scrolls in place; the location is left unchanged
                        if ui.button(entry.title).clicked() {
                            self.scroll_to = Some(entry.id.to_string());
                        }
                    }
                });
            });
        }

        ui.add_space(16.0);
        let token = page.category.token();
        for (index, (record, anchor)) in page.records.iter().zip(page.anchor_ids()).enumerate() {
            let section = ui
                .scope(|ui| self.render_record(ui, token, index, record))
                .response;

            if let Some(id) = anchor {
                self.sections.register(id);
                if self.scroll_to.as_deref() == Some(id) {
                    ui.scroll_to_rect(section.rect, Some(egui::Align::TOP));
                    self.scroll_to = None;
                    tracing::debug!(anchor = id, "scrolled to section");
                }
            }
            ui.add_space(24.0);
        }

        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(egui::RichText::new("💡 學習提示").size(16.0).strong());
            ui.add_space(4.0);
            let accent = self.theme.accent();
            for tip in LEARNING_TIPS {
                style::bullet(ui, accent, tip);
            }
        });
    }

    fn render_record(&mut self, ui: &mut egui::Ui, token: &str, index: usize, record: &ComparisonRecord) {
        egui::CollapsingHeader::new(egui::RichText::new(&record.title).size(20.0).strong())
            .id_salt((token, index))
            .default_open(true)
            .show(ui, |ui| {
                let columns = record.columns(self.config.ui.show_kotlin);

                if ui.available_width() < style::STACK_COLUMNS_BELOW {
                    for (label, example) in &columns {
                        self.render_code_column(ui, token, index, label, example);
                        ui.add_space(8.0);
                    }
                } else {
                    ui.columns(columns.len(), |uis| {
                        for (ui, (label, example)) in uis.iter_mut().zip(&columns) {
                            self.render_code_column(ui, token, index, label, example);
                        }
                    });
                }

                ui.add_space(12.0);
                egui::Frame::group(ui.style()).show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.label(
                        egui::RichText::new("⚠️ 主要差異")
                            .strong()
                            .color(style::DIFFERENCE_TEXT),
                    );
                    for difference in &record.key_differences {
                        style::bullet(ui, style::DIFFERENCE_TEXT, difference);
                    }
                });

                if !record.similarities.is_empty() {
                    ui.add_space(8.0);
                    egui::Frame::group(ui.style()).show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        ui.label(
                            egui::RichText::new("✅ 相似點")
                                .strong()
                                .color(style::SIMILARITY_TEXT),
                        );
                        for similarity in &record.similarities {
                            style::bullet(ui, style::SIMILARITY_TEXT, similarity);
                        }
                    });
                }
            });
    }

    fn render_code_column(
        &mut self,
        ui: &mut egui::Ui,
        token: &str,
        index: usize,
        label: &str,
        example: &CodeExample,
    ) {
        ui.vertical(|ui| {
            ui.label(egui::RichText::new(label).size(16.0).strong().color(self.theme.accent()));
            let key = format!("{token}/{index}/{label}");
            self.render_code_block(ui, &key, example);
        });
    }
}
