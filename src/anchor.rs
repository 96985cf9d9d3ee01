// In-page anchors: section id assignment and scroll coordination
//
// The render layer registers the anchor ids it drew during a pass in a
// `SectionRegistry`. After the pass, `AnchorCoordinator::poll` decides whether
// the pending fragment can be scrolled to, needs one more pass, or has no target.

use std::collections::HashSet;

/// One entry of a dataset's anchor table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnchorEntry {
    pub id: &'static str,
    pub title: &'static str,
    /// A record whose title contains this term receives `id`
    pub match_term: &'static str,
}

pub const SPRING_BOOT_SECTIONS: [AnchorEntry; 6] = [
    AnchorEntry {
        id: "di",
        title: "依賴注入 (DI)",
        match_term: "依賴注入",
    },
    AnchorEntry {
        id: "rest",
        title: "REST API 設計",
        match_term: "REST API",
    },
    AnchorEntry {
        id: "jpa",
        title: "資料持久化 (JPA)",
        match_term: "資料持久化",
    },
    AnchorEntry {
        id: "aop",
        title: "AOP 面向切面",
        match_term: "AOP",
    },
    AnchorEntry {
        id: "transaction",
        title: "事務管理",
        match_term: "事務管理",
    },
    AnchorEntry {
        id: "interceptor",
        title: "攔截器與過濾器",
        match_term: "攔截器",
    },
];

#[derive(Clone, Copy, Debug)]
pub struct AnchorTable<'a> {
    entries: &'a [AnchorEntry],
}

impl<'a> AnchorTable<'a> {
    pub fn new(entries: &'a [AnchorEntry]) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &'a [AnchorEntry] {
        self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Assign anchor ids to record titles, returned in record order.
    ///
    /// A record takes the first entry (table order) whose term its title
    /// contains. Ids are unique: if that entry was already claimed by an
    /// earlier record, the record gets no id.
    pub fn assign<'t>(&self, titles: impl IntoIterator<Item = &'t str>) -> Vec<Option<&'static str>> {
        let mut claimed: HashSet<&'static str> = HashSet::new();
        titles
            .into_iter()
            .map(|title| {
                let entry = self.entries.iter().find(|e| title.contains(e.match_term))?;
                claimed.insert(entry.id).then_some(entry.id)
            })
            .collect()
    }
}

/// Anchor ids drawn during the most recent render pass.
#[derive(Debug, Default)]
pub struct SectionRegistry {
    generation: u64,
    rendered: HashSet<String>,
}

impl SectionRegistry {
    /// Start a pass that renders the router state of `generation`.
    pub fn begin_pass(&mut self, generation: u64) {
        self.generation = generation;
        self.rendered.clear();
    }

    pub fn register(&mut self, anchor_id: &str) {
        self.rendered.insert(anchor_id.to_string());
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn contains(&self, anchor_id: &str) -> bool {
        self.rendered.contains(anchor_id)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum AnchorState {
    Idle,
    Armed {
        target: String,
        generation: u64,
        deferred: bool,
    },
}

/// Result of polling the coordinator after a render pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AnchorOutcome {
    /// Nothing pending
    Idle,
    /// Target not rendered yet; poll again after one more pass
    Deferred,
    /// Scroll the section with this id to the top of the viewport
    Scroll(String),
    /// Target never appeared; nothing is scrolled
    NoTarget,
}

#[derive(Debug)]
pub struct AnchorCoordinator {
    state: AnchorState,
}

impl AnchorCoordinator {
    pub fn new() -> Self {
        Self {
            state: AnchorState::Idle,
        }
    }

    /// Re-evaluate after a location change. `generation` is the router
    /// generation the fragment belongs to.
    pub fn arm(&mut self, fragment: Option<&str>, generation: u64) {
        self.state = match fragment {
            Some(target) => AnchorState::Armed {
                target: target.to_string(),
                generation,
                deferred: false,
            },
            None => AnchorState::Idle,
        };
    }

    #[cfg(test)]
    pub fn is_pending(&self) -> bool {
        !matches!(self.state, AnchorState::Idle)
    }

    pub fn poll(&mut self, sections: &SectionRegistry) -> AnchorOutcome {
        let AnchorState::Armed {
            target,
            generation,
            deferred,
        } = &mut self.state
        else {
            return AnchorOutcome::Idle;
        };

        // A pass that drew an older route says nothing about the new one
        if sections.generation() < *generation {
            return AnchorOutcome::Deferred;
        }

        if sections.contains(target) {
            let target = std::mem::take(target);
            self.state = AnchorState::Idle;
            return AnchorOutcome::Scroll(target);
        }

        if !*deferred {
            *deferred = true;
            return AnchorOutcome::Deferred;
        }

        self.state = AnchorState::Idle;
        AnchorOutcome::NoTarget
    }
}

impl Default for AnchorCoordinator {
    fn default() -> Self {
        Self::new()
    }
}
