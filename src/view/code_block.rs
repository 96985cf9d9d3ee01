// Code blocks: syntect highlighting, copy button and the notes below the code

use crate::app::Guide;
use crate::content::{CodeExample, Language};
use crate::style::{self, Theme};
use eframe::egui;
use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use std::time::Instant;
use syntect::easy::HighlightLines;
use syntect::highlighting::ThemeSet;
use syntect::parsing::{SyntaxReference, SyntaxSet};
use syntect::util::LinesWithEndings;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct HighlightKey {
    code: u64,
    language: Language,
    theme: Theme,
    font_size_bits: u32,
}

impl HighlightKey {
    pub fn new(code: &str, language: Language, theme: Theme, font_size: f32) -> Self {
        let mut hasher = DefaultHasher::new();
        code.hash(&mut hasher);
        Self {
            code: hasher.finish(),
            language,
            theme,
            font_size_bits: font_size.to_bits(),
        }
    }
}

struct CachedJob {
    job: egui::text::LayoutJob,
    used_at: Instant,
}

/// Highlighted layout jobs, so syntect runs once per code block and theme
pub struct HighlightCache {
    cache: HashMap<HighlightKey, CachedJob>,
    max_entries: usize,
}

impl HighlightCache {
    pub fn new(max_entries: usize) -> Self {
        Self {
            cache: HashMap::new(),
            max_entries,
        }
    }

    pub fn get(&mut self, key: &HighlightKey) -> Option<egui::text::LayoutJob> {
        let cached = self.cache.get_mut(key)?;
        cached.used_at = Instant::now();
        Some(cached.job.clone())
    }

    pub fn insert(&mut self, key: HighlightKey, job: egui::text::LayoutJob) {
        // Simple LRU: drop the least recently used entry when full
        if self.cache.len() >= self.max_entries && !self.cache.contains_key(&key) {
            if let Some(oldest) = self
                .cache
                .iter()
                .min_by_key(|(_, v)| v.used_at)
                .map(|(k, _)| *k)
            {
                self.cache.remove(&oldest);
            }
        }
        self.cache.insert(
            key,
            CachedJob {
                job,
                used_at: Instant::now(),
            },
        );
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.cache.len()
    }
}

pub struct Highlighter {
    syntax_set: SyntaxSet,
    theme_set: ThemeSet,
    cache: HighlightCache,
}

impl Highlighter {
    pub fn new() -> Self {
        Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
            theme_set: ThemeSet::load_defaults(),
            cache: HighlightCache::new(style::HIGHLIGHT_CACHE_ENTRIES),
        }
    }

    fn syntax_for(&self, language: Language) -> &SyntaxReference {
        language
            .syntax_candidates()
            .iter()
            .find_map(|ext| self.syntax_set.find_syntax_by_extension(ext))
            .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text())
    }

    pub fn layout_job(
        &mut self,
        code: &str,
        language: Language,
        theme: Theme,
        font_size: f32,
    ) -> egui::text::LayoutJob {
        let key = HighlightKey::new(code, language, theme, font_size);
        if let Some(job) = self.cache.get(&key) {
            return job;
        }
        let job = self.highlight(code, language, theme, font_size);
        self.cache.insert(key, job.clone());
        job
    }

    fn highlight(
        &self,
        code: &str,
        language: Language,
        theme: Theme,
        font_size: f32,
    ) -> egui::text::LayoutJob {
        let font_id = egui::FontId::monospace(font_size);
        let mut job = egui::text::LayoutJob::default();

        let Some(syntax_theme) = self.theme_set.themes.get(theme.syntax_theme()) else {
            tracing::warn!(theme = theme.syntax_theme(), "syntax theme missing, code is not highlighted");
            job.append(
                code,
                0.0,
                egui::TextFormat {
                    font_id,
                    color: theme.visuals().text_color(),
                    ..Default::default()
                },
            );
            return job;
        };

        let syntax = self.syntax_for(language);
        let mut highlighter = HighlightLines::new(syntax, syntax_theme);

        for line in LinesWithEndings::from(code) {
            let ranges = highlighter
                .highlight_line(line, &self.syntax_set)
                .unwrap_or_default();

            for (style, text) in ranges {
                let color = egui::Color32::from_rgb(
                    style.foreground.r,
                    style.foreground.g,
                    style.foreground.b,
                );
                job.append(
                    text,
                    0.0,
                    egui::TextFormat {
                        font_id: font_id.clone(),
                        color,
                        ..Default::default()
                    },
                );
            }
        }
        job
    }
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl Guide {
    /// Render one code example. `key` identifies the block for copy feedback.
    pub(crate) fn render_code_block(&mut self, ui: &mut egui::Ui, key: &str, example: &CodeExample) {
        let code_size = self.config.font.code_font_size;
        let job = self
            .highlighter
            .layout_job(&example.code, example.language, self.theme, code_size);

        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                if let Some(filename) = &example.filename {
                    style::truncated_label_with_sense(
                        ui,
                        egui::RichText::new(filename).monospace().small(),
                        egui::Sense::hover(),
                    );
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let copied = self.copy_feedback.is_copied(key);
                    let icon = if copied { "✔" } else { "📋" };
                    if ui.small_button(icon).on_hover_text("複製程式碼").clicked() {
                        ui.ctx().copy_text(example.code.clone());
                        self.copy_feedback.mark(key);
                        tracing::debug!(block = key, "copied code");
                    }
                });
            });
            ui.separator();

            egui::ScrollArea::horizontal()
                .id_salt(("code", key))
                .auto_shrink([false, true])
                .show(ui, |ui| {
                    ui.label(job);
                });
        });

        if !example.explanation.is_empty() {
            ui.add_space(4.0);
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(egui::RichText::new(&example.explanation).small());
            });
        }

        if !example.highlights.is_empty() {
            ui.add_space(4.0);
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(egui::RichText::new("💡 重點提示").small().strong());
                let accent = self.theme.accent();
                for highlight in &example.highlights {
                    style::bullet(ui, accent, highlight);
                }
            });
        }
    }
}
