// Navigation sidebar: recursive tree, active highlighting and the resize divider

use crate::app::Guide;
use crate::nav::{is_active, ExpansionState, NavNode};
use crate::route::Location;
use crate::style;
use eframe::egui;
use std::cell::RefCell;

/// A click in the tree, applied after the panel has been drawn
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavAction {
    Toggle(String),
    Select(String),
}

fn render_nodes(
    ui: &mut egui::Ui,
    nodes: &[NavNode],
    depth: usize,
    current: &Location,
    expansion: &ExpansionState,
    accent: egui::Color32,
    action: &RefCell<Option<NavAction>>,
) {
    for node in nodes {
        let icon = node.icon().map(|i| i.glyph()).unwrap_or("");
        ui.horizontal(|ui| {
            ui.add_space(depth as f32 * style::NAV_INDENT);
            match node {
                NavNode::Branch { id, label, .. } => {
                    let chevron = if expansion.is_expanded(id) { "⏷" } else { "⏵" };
                    let text = format!("{chevron} {icon} {label}");
                    let response = style::truncated_label_with_sense(
                        ui,
                        egui::RichText::new(text).strong(),
                        egui::Sense::click(),
                    );
                    if response.clicked() {
                        *action.borrow_mut() = Some(NavAction::Toggle(id.to_string()));
                    }
                }
                NavNode::Leaf { label, path, .. } => {
                    let active = is_active(path, current);
                    let text = if icon.is_empty() {
                        label.to_string()
                    } else {
                        format!("{icon} {label}")
                    };
                    let rich = if active {
                        egui::RichText::new(text).color(accent).strong()
                    } else {
                        egui::RichText::new(text)
                    };
                    let response = ui.selectable_label(active, rich);
                    if response.clicked() {
                        *action.borrow_mut() = Some(NavAction::Select(path.to_string()));
                    }
                }
            }
        });

        if let NavNode::Branch { id, children, .. } = node {
            if expansion.is_expanded(id) {
                render_nodes(ui, children, depth + 1, current, expansion, accent, action);
            }
        }
    }
}

impl Guide {
    fn render_tree(&self, ui: &mut egui::Ui, action: &RefCell<Option<NavAction>>) {
        egui::ScrollArea::vertical()
            .id_salt("nav_scroll")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.spacing_mut().interact_size.y = style::NAV_ROW_HEIGHT;
                render_nodes(
                    ui,
                    &self.tree,
                    0,
                    self.router.location(),
                    &self.navigation.expansion,
                    self.theme.accent(),
                    action,
                );
            });
    }

    pub(crate) fn render_divider(&mut self, ui: &mut egui::Ui) {
        let size = egui::vec2(style::DIVIDER_WIDTH, ui.available_height());
        let response = ui.allocate_response(size, egui::Sense::drag());

        self.sidebar.resizing = response.dragged();
        if self.sidebar.resizing {
            self.sidebar.resize_by(response.drag_delta().x);
        }

        let highlighted = response.hovered() || self.sidebar.resizing;
        let color = if highlighted {
            ui.visuals().widgets.active.bg_fill
        } else {
            egui::Color32::from_gray(60)
        };
        ui.painter().rect_filled(response.rect, 0.0, color);

        if highlighted {
            ui.ctx().set_cursor_icon(egui::CursorIcon::ResizeHorizontal);
        }
    }

    /// Docked sidebar in wide layouts, overlay window in narrow ones.
    pub(crate) fn render_sidebar(&mut self, ctx: &egui::Context, action: &RefCell<Option<NavAction>>) {
        if self.narrow {
            if !self.navigation.open {
                return;
            }
            let mut open = true;
            egui::Window::new("導航")
                .open(&mut open)
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::LEFT_TOP, [0.0, 0.0])
                .default_width(self.sidebar.width())
                .show(ctx, |ui| self.render_tree(ui, action));
            if !open {
                self.navigation.close();
            }
            return;
        }

        egui::SidePanel::left("nav_panel")
            .exact_width(self.sidebar.width())
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal_top(|ui| {
                    let tree_width = (ui.available_width() - style::DIVIDER_WIDTH).max(0.0);
                    ui.allocate_ui(egui::vec2(tree_width, ui.available_height()), |ui| {
                        ui.set_width(tree_width);
                        ui.vertical(|ui| {
                            ui.add_space(8.0);
                            ui.heading("TypeScript → Java");
                            ui.separator();
                            self.render_tree(ui, action);
                        });
                    });
                    self.render_divider(ui);
                });
            });
    }
}
