use crate::anchor::{AnchorCoordinator, AnchorOutcome, SectionRegistry};
use crate::config::Config;
use crate::content::Catalog;
use crate::fonts;
use crate::nav::{default_tree, NavNode, NavigationState};
use crate::route::{resolve_view, Location, NavigationEvent, Router, View};
use crate::state::{CopyFeedback, ScrollProgress, SidebarState, TypesDetailState};
use crate::style::{self, Theme};
use crate::view::home::{parse_markdown, Block, HOME_MARKDOWN};
use crate::view::{Highlighter, NavAction};
use eframe::egui;
use std::cell::RefCell;
use std::sync::Arc;
use std::time::Duration;

pub struct Guide {
    pub config: Config,
    pub catalog: Arc<Catalog>,

    // Routing
    pub router: Router,
    pub anchors: AnchorCoordinator,
    pub sections: SectionRegistry,
    /// Anchor id to bring to the top of the viewport on the next pass
    pub scroll_to: Option<String>,
    pub reset_scroll: bool,
    shown_path: Option<String>,

    // Navigation
    pub tree: Vec<NavNode>,
    pub navigation: NavigationState,
    pub narrow: bool,

    // Page state
    pub home: Vec<Block>,
    pub sidebar: SidebarState,
    pub progress: ScrollProgress,
    pub copy_feedback: CopyFeedback,
    pub types_detail: TypesDetailState,

    // Presentation
    pub theme: Theme,
    pub highlighter: Highlighter,
}

impl Guide {
    pub fn new(config: Config, catalog: Catalog, start: Location) -> Self {
        Self {
            catalog: Arc::new(catalog),
            router: Router::new(start),
            anchors: AnchorCoordinator::new(),
            sections: SectionRegistry::default(),
            scroll_to: None,
            reset_scroll: false,
            shown_path: None,
            tree: default_tree(),
            navigation: NavigationState::new(),
            narrow: false,
            home: parse_markdown(HOME_MARKDOWN),
            sidebar: SidebarState::new(config.sidebar.width),
            progress: ScrollProgress::default(),
            copy_feedback: CopyFeedback::new(Duration::from_millis(style::COPY_FEEDBACK_MS)),
            types_detail: TypesDetailState::default(),
            theme: config.theme(),
            highlighter: Highlighter::new(),
            config,
        }
    }

    /// Apply fonts, text sizes and theme to a fresh egui context.
    pub fn setup(&self, ctx: &egui::Context) {
        fonts::install_cjk_font(ctx, self.config.font.cjk_font.as_deref());

        let font_size = self.config.font.font_size;
        let code_size = self.config.font.code_font_size;
        ctx.all_styles_mut(|style| {
            for (text_style, font_id) in style.text_styles.iter_mut() {
                match text_style {
                    egui::TextStyle::Body | egui::TextStyle::Button => font_id.size = font_size,
                    egui::TextStyle::Monospace => font_id.size = code_size,
                    egui::TextStyle::Small => font_id.size = font_size * 0.85,
                    egui::TextStyle::Heading => font_id.size = font_size * 1.5,
                    egui::TextStyle::Name(_) => {}
                }
            }
        });
        ctx.set_visuals(self.theme.visuals());
    }

    pub fn set_theme(&mut self, ctx: &egui::Context, theme: Theme) {
        self.theme = theme;
        ctx.set_visuals(theme.visuals());
    }

    /// Consume pending location changes: re-arm the anchor coordinator and
    /// apply page-controller redirects until the location is stable.
    pub fn sync_route(&mut self) {
        loop {
            let events = self.router.drain_events();
            if events.is_empty() {
                return;
            }
            for event in &events {
                let kind = match event {
                    NavigationEvent::Push(_) => "push",
                    NavigationEvent::Replace(_) => "replace",
                    NavigationEvent::Pop(_) => "pop",
                };
                tracing::info!(location = %event.location(), kind, "location changed");
            }

            let location = self.router.location().clone();
            if self.shown_path.as_deref() != Some(location.path()) {
                self.shown_path = Some(location.path().to_string());
                self.scroll_to = None;
                // With a fragment the anchor decides; an unknown one leaves the offset alone
                if location.fragment().is_none() {
                    self.reset_scroll = true;
                }
            }
            self.anchors.arm(location.fragment(), self.router.generation());

            if let View::Redirect(to) = resolve_view(&self.catalog, &location) {
                tracing::info!(from = %location, to = %to, "redirecting");
                self.router.replace(to);
            }
        }
    }

    /// Navigation from the tree or an in-page link.
    pub fn apply_nav_action(&mut self, action: NavAction) {
        match action {
            NavAction::Toggle(id) => self.navigation.toggle_expand(&id),
            NavAction::Select(path) => {
                let narrow = self.narrow;
                self.navigation.select_leaf(&mut self.router, &path, narrow);
            }
        }
    }

    /// Run after a render pass, with `sections` holding what the pass drew.
    pub fn poll_anchor(&mut self, ctx: &egui::Context) {
        match self.anchors.poll(&self.sections) {
            AnchorOutcome::Idle => {}
            AnchorOutcome::Deferred => ctx.request_repaint(),
            AnchorOutcome::Scroll(id) => {
                tracing::debug!(anchor = %id, "scrolling to anchor");
                self.scroll_to = Some(id);
                ctx.request_repaint();
            }
            AnchorOutcome::NoTarget => {
                tracing::debug!(location = %self.router.location(), "anchor target not rendered");
            }
        }
    }
}

impl eframe::App for Guide {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);
        self.sync_route();

        self.narrow = style::viewport_width(ctx) < self.config.ui.narrow_breakpoint;
        self.sections.begin_pass(self.router.generation());

        // Deferred actions
        let nav_action = RefCell::new(None);
        let next_navigation = RefCell::new(None);

        self.render_header(ctx);
        self.render_footer(ctx);
        self.render_sidebar(ctx, &nav_action);
        self.render_content(ctx, &next_navigation);

        self.poll_anchor(ctx);

        if let Some(action) = nav_action.into_inner() {
            self.apply_nav_action(action);
        }
        if let Some(target) = next_navigation.into_inner() {
            self.apply_nav_action(NavAction::Select(target));
        }

        self.copy_feedback.prune();
        if self.copy_feedback.has_pending() {
            ctx.request_repaint_after(Duration::from_millis(200));
        }
        if self.router.has_pending_events() {
            ctx.request_repaint();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::resolver::{resolve, RouteResult};
    use crate::route::Navigate;

    fn guide(start: &str) -> Guide {
        let catalog = Catalog::load().unwrap();
        let mut guide = Guide::new(Config::default(), catalog, Location::parse(start).unwrap());
        guide.sync_route();
        guide
    }

    fn render_springboot_pass(guide: &mut Guide) {
        guide.sections.begin_pass(guide.router.generation());
        let RouteResult::Found(page) = resolve(&guide.catalog, "springboot") else {
            unreachable!()
        };
        for id in page.anchor_ids().into_iter().flatten() {
            guide.sections.register(id);
        }
    }

    #[test]
    fn unknown_category_redirects_to_root_by_replacement() {
        let mut guide = guide("/comparison/unknown-xyz");
        assert_eq!(guide.router.location(), &Location::root());
        assert!(!guide.router.can_go_back());

        guide.router.navigate("/comparison/oop").unwrap();
        guide.router.navigate("/comparison/nope").unwrap();
        guide.sync_route();
        assert_eq!(guide.router.location(), &Location::root());
        // The bad entry was replaced, so going back lands on the last good page
        assert!(guide.router.go_back());
        assert_eq!(guide.router.location().path(), "/comparison/oop");
    }

    #[test]
    fn deep_link_scrolls_on_the_pass_after_rendering() {
        let mut guide = guide("/comparison/springboot#jpa");
        let ctx = egui::Context::default();

        render_springboot_pass(&mut guide);
        guide.poll_anchor(&ctx);
        assert_eq!(guide.scroll_to.as_deref(), Some("jpa"));
        assert!(!guide.anchors.is_pending());
    }

    #[test]
    fn anchored_leaf_updates_location_and_scroll_target() {
        let mut guide = guide("/comparison/springboot");
        let ctx = egui::Context::default();
        render_springboot_pass(&mut guide);
        guide.poll_anchor(&ctx);
        assert_eq!(guide.scroll_to, None);

        guide.reset_scroll = false;
        guide.apply_nav_action(NavAction::Select("/comparison/springboot#di".into()));
        guide.sync_route();
        assert_eq!(guide.router.location().fragment(), Some("di"));
        // Same path, so the scroll position is kept
        assert!(!guide.reset_scroll);

        render_springboot_pass(&mut guide);
        guide.poll_anchor(&ctx);
        assert_eq!(guide.scroll_to.as_deref(), Some("di"));
    }

    #[test]
    fn unknown_fragment_scrolls_nowhere() {
        let mut guide = guide("/comparison/springboot#nonexistent");
        let ctx = egui::Context::default();
        render_springboot_pass(&mut guide);
        guide.poll_anchor(&ctx);
        render_springboot_pass(&mut guide);
        guide.poll_anchor(&ctx);
        assert_eq!(guide.scroll_to, None);
        assert!(!guide.anchors.is_pending());
    }

    #[test]
    fn unknown_fragment_on_another_page_keeps_scroll() {
        let mut guide = guide("/comparison/types");
        guide.reset_scroll = false;
        guide.apply_nav_action(NavAction::Select("/comparison/springboot#nonexistent".into()));
        guide.sync_route();
        assert_eq!(guide.router.location().path(), "/comparison/springboot");
        assert!(!guide.reset_scroll);

        let ctx = egui::Context::default();
        render_springboot_pass(&mut guide);
        guide.poll_anchor(&ctx);
        render_springboot_pass(&mut guide);
        guide.poll_anchor(&ctx);
        assert_eq!(guide.scroll_to, None);
        assert!(!guide.reset_scroll);
    }

    #[test]
    fn known_fragment_on_another_page_scrolls_to_the_section() {
        let mut guide = guide("/comparison/types");
        guide.reset_scroll = false;
        guide.apply_nav_action(NavAction::Select("/comparison/springboot#aop".into()));
        guide.sync_route();
        assert!(!guide.reset_scroll);

        let ctx = egui::Context::default();
        render_springboot_pass(&mut guide);
        guide.poll_anchor(&ctx);
        assert_eq!(guide.scroll_to.as_deref(), Some("aop"));
    }

    #[test]
    fn changing_page_resets_scroll() {
        let mut guide = guide("/comparison/types");
        guide.reset_scroll = false;
        guide.apply_nav_action(NavAction::Select("/comparison/oop".into()));
        guide.sync_route();
        assert!(guide.reset_scroll);
    }

    #[test]
    fn tree_toggle_action_flips_expansion() {
        let mut guide = guide("/");
        guide.apply_nav_action(NavAction::Toggle("springboot".into()));
        assert!(!guide.navigation.expansion.is_expanded("springboot"));
    }
}
