// Home page, rendered from embedded markdown

use crate::app::Guide;
use crate::style;
use eframe::egui;
use pulldown_cmark::{Event as MarkdownEvent, HeadingLevel, Parser, Tag, TagEnd};
use std::cell::RefCell;

pub const HOME_MARKDOWN: &str = include_str!("../../content/home.md");

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Inline {
    Text(String),
    Code(String),
    Link { text: String, target: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Block {
    Heading { level: u8, text: String },
    Paragraph(Vec<Inline>),
    Item(Vec<Inline>),
}

fn push_text(inlines: &mut Vec<Inline>, text: &str) {
    if let Some(Inline::Text(last)) = inlines.last_mut() {
        last.push_str(text);
    } else {
        inlines.push(Inline::Text(text.to_string()));
    }
}

/// Flatten markdown into the handful of block kinds the home page draws.
pub fn parse_markdown(source: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut inlines: Vec<Inline> = Vec::new();
    let mut heading: Option<(u8, String)> = None;
    let mut link: Option<(String, String)> = None;
    let mut in_item = false;

    for event in Parser::new(source) {
        match event {
            MarkdownEvent::Start(tag) => match tag {
                Tag::Heading { level, .. } => {
                    let level = match level {
                        HeadingLevel::H1 => 1,
                        HeadingLevel::H2 => 2,
                        HeadingLevel::H3 => 3,
                        HeadingLevel::H4 => 4,
                        HeadingLevel::H5 => 5,
                        HeadingLevel::H6 => 6,
                    };
                    heading = Some((level, String::new()));
                }
                Tag::Item => in_item = true,
                Tag::Link { dest_url, .. } => link = Some((dest_url.to_string(), String::new())),
                _ => {}
            },
            MarkdownEvent::End(tag) => match tag {
                TagEnd::Heading(_) => {
                    if let Some((level, text)) = heading.take() {
                        blocks.push(Block::Heading { level, text });
                    }
                }
                TagEnd::Paragraph if !in_item => {
                    blocks.push(Block::Paragraph(std::mem::take(&mut inlines)));
                }
                TagEnd::Item => {
                    in_item = false;
                    blocks.push(Block::Item(std::mem::take(&mut inlines)));
                }
                TagEnd::Link => {
                    if let Some((target, text)) = link.take() {
                        inlines.push(Inline::Link { text, target });
                    }
                }
                _ => {}
            },
            MarkdownEvent::Text(text) | MarkdownEvent::Code(text) if heading.is_some() => {
                if let Some((_, heading_text)) = heading.as_mut() {
                    heading_text.push_str(&text);
                }
            }
            MarkdownEvent::Text(text) => match link.as_mut() {
                Some((_, link_text)) => link_text.push_str(&text),
                None => push_text(&mut inlines, &text),
            },
            MarkdownEvent::Code(code) => match link.as_mut() {
                Some((_, link_text)) => link_text.push_str(&code),
                None => inlines.push(Inline::Code(code.to_string())),
            },
            MarkdownEvent::SoftBreak | MarkdownEvent::HardBreak => push_text(&mut inlines, " "),
            _ => {}
        }
    }
    blocks
}

fn render_inlines(ui: &mut egui::Ui, inlines: &[Inline], next_navigation: &RefCell<Option<String>>) {
    for inline in inlines {
        match inline {
            Inline::Text(text) => {
                ui.label(text);
            }
            Inline::Code(code) => {
                ui.code(code);
            }
            Inline::Link { text, target } if target.starts_with('/') => {
                if ui.link(egui::RichText::new(text).strong()).clicked() {
                    *next_navigation.borrow_mut() = Some(target.clone());
                }
            }
            Inline::Link { text, target } => {
                ui.hyperlink_to(text, target);
            }
        }
    }
}

impl Guide {
    pub(crate) fn render_home(&self, ui: &mut egui::Ui, next_navigation: &RefCell<Option<String>>) {
        let accent = self.theme.accent();
        for block in &self.home {
            match block {
                Block::Heading { level, text } => {
                    let size = match level {
                        1 => 32.0,
                        2 => 24.0,
                        3 => 18.0,
                        _ => 16.0,
                    };
                    ui.add_space(if *level <= 2 { 16.0 } else { 8.0 });
                    ui.label(egui::RichText::new(text).size(size).strong().color(accent));
                }
                Block::Paragraph(inlines) => {
                    ui.horizontal_wrapped(|ui| render_inlines(ui, inlines, next_navigation));
                    ui.add_space(6.0);
                }
                Block::Item(inlines) => {
                    ui.horizontal_wrapped(|ui| {
                        ui.label(egui::RichText::new("•").strong().color(accent));
                        render_inlines(ui, inlines, next_navigation);
                    });
                }
            }
        }
        ui.add_space(style::NAV_ROW_HEIGHT);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Catalog;
    use crate::route::{resolve_view, Location, View};

    fn links(blocks: &[Block]) -> Vec<&str> {
        blocks
            .iter()
            .flat_map(|b| match b {
                Block::Paragraph(inlines) | Block::Item(inlines) => inlines.as_slice(),
                Block::Heading { .. } => &[],
            })
            .filter_map(|i| match i {
                Inline::Link { target, .. } => Some(target.as_str()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn parses_headings_items_and_links() {
        let blocks = parse_markdown("# Title\n\nSome `code` here\n\n- [Go](/comparison/oop): text\n");
        assert_eq!(
            blocks,
            [
                Block::Heading {
                    level: 1,
                    text: "Title".into()
                },
                Block::Paragraph(vec![
                    Inline::Text("Some ".into()),
                    Inline::Code("code".into()),
                    Inline::Text(" here".into()),
                ]),
                Block::Item(vec![
                    Inline::Link {
                        text: "Go".into(),
                        target: "/comparison/oop".into()
                    },
                    Inline::Text(": text".into()),
                ]),
            ]
        );
    }

    #[test]
    fn home_links_lead_to_real_pages() {
        let catalog = Catalog::load().unwrap();
        let blocks = parse_markdown(HOME_MARKDOWN);
        let targets = links(&blocks);
        assert!(targets.contains(&"/comparison/types"));
        assert!(targets.contains(&"/types-detail"));
        for target in targets {
            let location = Location::parse(target).unwrap();
            assert!(
                !matches!(resolve_view(&catalog, &location), View::Redirect(_)),
                "{target} redirects"
            );
        }
    }
}
