// /types-detail: type systems, per-type comparison cards, pitfalls and practices

use crate::app::Guide;
use crate::content::model::{TypeInfo, TypeSystemSummary};
use crate::content::{TypeComparison, TypesDetail};
use crate::style;
use eframe::egui;

const JAVA_COLOR: egui::Color32 = egui::Color32::from_rgb(234, 88, 12);
const JS_COLOR: egui::Color32 = egui::Color32::from_rgb(37, 99, 235);

const JAVA_MNEMONICS: [(&str, &str); 5] = [
    ("整數", "byte < short < int < long(由小到大)"),
    ("浮點", "double 優先於 float"),
    ("字元", "char 用單引號,String 用雙引號"),
    ("引用", "類別、陣列、介面都是引用型別"),
    ("null", "只能用於引用型別"),
];

const JS_MNEMONICS: [(&str, &str); 5] = [
    ("數字", "只有 number 和 BigInt"),
    ("字串", "單引號、雙引號、反引號都可以"),
    ("布林", "注意 truthy/falsy"),
    ("空值", "null 和 undefined 不同"),
    ("物件", "動態語言,屬性可隨時增減"),
];

fn section_heading(ui: &mut egui::Ui, text: &str) {
    ui.add_space(20.0);
    ui.label(egui::RichText::new(text).size(22.0).strong());
    ui.add_space(8.0);
}

fn render_system(ui: &mut egui::Ui, system: &TypeSystemSummary) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(egui::RichText::new(&system.name).size(18.0).strong());
        ui.label(egui::RichText::new(&system.type_system).weak());
        ui.add_space(6.0);

        ui.label(egui::RichText::new("特性:").strong());
        let text_color = ui.visuals().text_color();
        for feature in &system.features {
            style::bullet(ui, text_color, feature);
        }
        ui.add_space(4.0);
        ui.label(egui::RichText::new("✅ 優點").strong().color(style::SIMILARITY_TEXT));
        for pro in &system.pros {
            style::bullet(ui, style::SIMILARITY_TEXT, pro);
        }
        ui.add_space(4.0);
        ui.label(egui::RichText::new("❌ 缺點").strong().color(style::DIFFERENCE_TEXT));
        for con in &system.cons {
            style::bullet(ui, style::DIFFERENCE_TEXT, con);
        }
    });
}

/// Rows of the per-type property table
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TypeProperty {
    Size,
    Range,
    DefaultValue,
}

impl TypeProperty {
    const ALL: [TypeProperty; 3] = [TypeProperty::Size, TypeProperty::Range, TypeProperty::DefaultValue];

    fn label(self) -> &'static str {
        match self {
            TypeProperty::Size => "大小",
            TypeProperty::Range => "範圍",
            TypeProperty::DefaultValue => "預設值",
        }
    }

    /// The value for `info`, or "-" when the type has none.
    fn value(self, info: &TypeInfo) -> &str {
        let value = match self {
            TypeProperty::Size => info.size.as_deref(),
            TypeProperty::Range => info.range.as_deref(),
            TypeProperty::DefaultValue => info.default_value.as_deref(),
        };
        value.unwrap_or("-")
    }
}

fn render_property_table(ui: &mut egui::Ui, ty: &TypeComparison) {
    use egui_extras::{Column, TableBuilder};

    TableBuilder::new(ui)
        .id_salt(("type_props", &ty.id))
        .striped(true)
        .vscroll(false)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::auto().at_least(60.0))
        .column(Column::remainder().clip(true))
        .column(Column::remainder().clip(true))
        .header(style::NAV_ROW_HEIGHT, |mut header| {
            header.col(|ui| {
                ui.strong("屬性");
            });
            header.col(|ui| {
                ui.label(egui::RichText::new(format!("☕ {}", ty.java.name)).strong().color(JAVA_COLOR));
            });
            header.col(|ui| {
                ui.label(egui::RichText::new(format!("📘 {}", ty.js.name)).strong().color(JS_COLOR));
            });
        })
        .body(|mut body| {
            for property in TypeProperty::ALL {
                body.row(style::NAV_ROW_HEIGHT, |mut row| {
                    row.col(|ui| {
                        ui.label(property.label());
                    });
                    row.col(|ui| {
                        style::truncated_label_with_sense(ui, property.value(&ty.java), egui::Sense::hover());
                    });
                    row.col(|ui| {
                        style::truncated_label_with_sense(ui, property.value(&ty.js), egui::Sense::hover());
                    });
                });
            }
        });
}

fn render_type_info(ui: &mut egui::Ui, label: &str, color: egui::Color32, info: &TypeInfo) {
    ui.label(egui::RichText::new(format!("{label}: {}", info.name)).strong().color(color));
    ui.label(&info.description);
    ui.add_space(4.0);
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.monospace(&info.example);
    });
}

impl Guide {
    pub(crate) fn render_types_detail(&mut self, ui: &mut egui::Ui, detail: &TypesDetail) {
        ui.label(egui::RichText::new("☕ 資料類型完整對比").size(28.0).strong());
        ui.label(
            egui::RichText::new("Java、JavaScript 與 TypeScript 的型別系統與各型別的逐一對照")
                .size(16.0)
                .weak(),
        );

        section_heading(ui, "🔍 型別系統比較");
        if detail.systems.is_empty() {
            ui.weak("沒有資料");
        } else {
            ui.columns(detail.systems.len(), |uis| {
                for (ui, system) in uis.iter_mut().zip(&detail.systems) {
                    render_system(ui, system);
                }
            });
        }

        section_heading(ui, "📋 型別逐一對照");
        ui.horizontal_wrapped(|ui| {
            let all = self.types_detail.selected_category.is_none();
            if ui.selectable_label(all, "全部").clicked() {
                self.types_detail.select_category(None);
            }
            for category in detail.categories() {
                let selected = self.types_detail.selected_category.as_deref() == Some(category);
                if ui.selectable_label(selected, category).clicked() {
                    self.types_detail.select_category(Some(category));
                }
            }
        });
        ui.add_space(8.0);

        let selected = self.types_detail.selected_category.clone();
        for ty in detail.filtered(selected.as_deref()) {
            self.render_type_card(ui, ty);
            ui.add_space(8.0);
        }

        section_heading(ui, "⚠️ 常見陷阱");
        for pitfall in &detail.pitfalls {
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(egui::RichText::new(&pitfall.title).size(16.0).strong());
                ui.columns(2, |uis| {
                    uis[0].label(egui::RichText::new("☕ Java").strong().color(JAVA_COLOR));
                    uis[0].monospace(&pitfall.java);
                    uis[1].label(egui::RichText::new("📘 JavaScript").strong().color(JS_COLOR));
                    uis[1].monospace(&pitfall.javascript);
                });
                ui.horizontal_wrapped(|ui| {
                    ui.label(egui::RichText::new("✅ 解決方案:").strong().color(style::SIMILARITY_TEXT));
                    ui.label(&pitfall.solution);
                });
            });
            ui.add_space(8.0);
        }

        section_heading(ui, "💡 最佳實踐");
        let accent = self.theme.accent();
        for practice in &detail.practices {
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(egui::RichText::new(&practice.title).size(16.0).strong());
                for recommendation in &practice.recommendations {
                    style::bullet(ui, accent, recommendation);
                }
            });
            ui.add_space(8.0);
        }

        section_heading(ui, "📝 快速參考");
        ui.columns(2, |uis| {
            for (ui, (title, color, mnemonics)) in uis.iter_mut().zip([
                ("☕ Java 記憶口訣", JAVA_COLOR, JAVA_MNEMONICS),
                ("📘 JavaScript 記憶口訣", JS_COLOR, JS_MNEMONICS),
            ]) {
                ui.label(egui::RichText::new(title).strong().color(color));
                for (topic, text) in mnemonics {
                    ui.horizontal_wrapped(|ui| {
                        ui.label(egui::RichText::new(format!("• {topic}:")).strong());
                        ui.label(text);
                    });
                }
            }
        });
    }

    fn render_type_card(&mut self, ui: &mut egui::Ui, ty: &TypeComparison) {
        let expanded = self.types_detail.is_expanded(&ty.id);
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.set_width(ui.available_width());
            let chevron = if expanded { "⏷" } else { "⏵" };
            let title = format!("{chevron} {} ↔ {}", ty.java.name, ty.js.name);
            let header = ui.add(
                egui::Label::new(egui::RichText::new(title).size(16.0).strong())
                    .sense(egui::Sense::click()),
            );
            ui.label(egui::RichText::new(&ty.category).small().weak());
            if header.clicked() {
                self.types_detail.toggle_type(&ty.id);
            }

            if !expanded {
                return;
            }

            ui.add_space(6.0);
            render_property_table(ui, ty);
            ui.add_space(6.0);
            ui.columns(2, |uis| {
                render_type_info(&mut uis[0], "☕ Java", JAVA_COLOR, &ty.java);
                render_type_info(&mut uis[1], "📘 JavaScript", JS_COLOR, &ty.js);
            });

            if !ty.notes.is_empty() {
                ui.add_space(6.0);
                ui.label(egui::RichText::new("📌 注意事項").strong());
                let accent = self.theme.accent();
                for note in &ty.notes {
                    style::bullet(ui, accent, note);
                }
            }
            if !ty.pitfalls.is_empty() {
                ui.add_space(6.0);
                ui.label(egui::RichText::new("⚠️ 常見錯誤").strong().color(style::WARNING_TEXT));
                for pitfall in &ty.pitfalls {
                    style::bullet(ui, style::WARNING_TEXT, pitfall);
                }
            }
        });
    }
}
