// Navigation tree state - expansion, active highlighting and leaf selection
use crate::route::{Location, Navigate};
use std::collections::HashSet;

/// Ids of the branch nodes whose children are visible.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExpansionState {
    expanded: HashSet<String>,
}

impl ExpansionState {
    pub fn new<'a>(ids: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            expanded: ids.into_iter().map(str::to_string).collect(),
        }
    }

    /// Flip membership of `id`. Ids absent from the tree are recorded too.
    pub fn toggle(&mut self, id: &str) {
        if !self.expanded.remove(id) {
            self.expanded.insert(id.to_string());
        }
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.contains(id)
    }
}

impl Default for ExpansionState {
    fn default() -> Self {
        Self::new(["comparison", "springboot"])
    }
}

/// Whether a node with target `path` is highlighted at `current`.
///
/// Anchored targets need an exact path and fragment match. Plain targets
/// match the path or a `/`-separated descendant, and only while the current
/// location has no fragment.
pub fn is_active(path: &str, current: &Location) -> bool {
    if let Some((path_part, fragment)) = path.split_once('#') {
        return current.path() == path_part && current.fragment() == Some(fragment);
    }

    if current.fragment().is_some() {
        return false;
    }

    let here = current.path();
    here == path
        || here
            .strip_prefix(path)
            .is_some_and(|rest| rest.starts_with('/'))
}

pub struct NavigationState {
    pub expansion: ExpansionState,
    /// Overlay visibility in narrow layouts; unrelated to per-node expansion
    pub open: bool,
}

impl NavigationState {
    pub fn new() -> Self {
        Self {
            expansion: ExpansionState::default(),
            open: false,
        }
    }

    pub fn toggle_expand(&mut self, id: &str) {
        self.expansion.toggle(id);
    }

    pub fn toggle_open(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Navigate to a leaf's path, falling back to direct assignment if the
    /// navigator rejects it.
    pub fn select_leaf<N: Navigate>(&mut self, navigator: &mut N, path: &str, narrow: bool) {
        if let Err(err) = navigator.navigate(path) {
            tracing::error!(path, error = %err, "navigation failed, assigning location directly");
            navigator.assign_location(path);
        }
        if narrow {
            self.close();
        }
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NavigationError;
    use crate::route::{NavigationEvent, Router};

    fn at(s: &str) -> Location {
        Location::parse(s).unwrap()
    }

    #[test]
    fn default_expansion() {
        let state = ExpansionState::default();
        assert!(state.is_expanded("comparison"));
        assert!(state.is_expanded("springboot"));
        assert!(!state.is_expanded("home"));
    }

    #[test]
    fn double_toggle_restores_membership() {
        let original = ExpansionState::default();
        let mut state = original.clone();
        for id in ["comparison", "home", "not-in-tree"] {
            state.toggle(id);
            assert_ne!(state, original);
            state.toggle(id);
            assert_eq!(state, original);
        }
    }

    #[test]
    fn unknown_ids_are_recorded() {
        let mut state = ExpansionState::default();
        state.toggle("not-in-tree");
        assert!(state.is_expanded("not-in-tree"));
    }

    #[test]
    fn anchored_and_plain_siblings_are_mutually_exclusive() {
        let current = at("/comparison/springboot#di");
        assert!(is_active("/comparison/springboot#di", &current));
        assert!(!is_active("/comparison/springboot", &current));
        assert!(!is_active("/comparison/springboot#rest", &current));

        let current = at("/comparison/springboot");
        assert!(is_active("/comparison/springboot", &current));
        assert!(!is_active("/comparison/springboot#di", &current));
    }

    #[test]
    fn plain_paths_match_descendants_on_segment_boundaries() {
        let current = at("/comparison/springboot");
        assert!(is_active("/comparison", &current));
        assert!(!is_active("/comparison/spring", &current));
        assert!(!is_active("/comparison/springboot/extra", &current));
    }

    #[test]
    fn home_is_only_active_at_root() {
        assert!(is_active("/", &Location::root()));
        assert!(!is_active("/", &at("/comparison/types")));
        assert!(!is_active("/", &at("/#top")));
    }

    #[test]
    fn descendant_with_fragment_is_not_active() {
        assert!(!is_active("/comparison", &at("/comparison/springboot#di")));
    }

    struct FailingNavigator {
        assigned: Vec<String>,
    }

    impl Navigate for FailingNavigator {
        fn navigate(&mut self, target: &str) -> Result<(), NavigationError> {
            Err(NavigationError::RelativeTarget(target.to_string()))
        }

        fn assign_location(&mut self, target: &str) {
            self.assigned.push(target.to_string());
        }
    }

    #[test]
    fn failed_navigation_falls_back_to_assignment() {
        let mut state = NavigationState::new();
        let mut navigator = FailingNavigator { assigned: Vec::new() };
        state.select_leaf(&mut navigator, "/comparison/oop", false);
        assert_eq!(navigator.assigned, ["/comparison/oop"]);
    }

    #[test]
    fn successful_navigation_does_not_assign() {
        let mut state = NavigationState::new();
        let mut router = Router::default();
        router.drain_events();
        state.select_leaf(&mut router, "/comparison/springboot#jpa", false);
        assert_eq!(router.location(), &at("/comparison/springboot#jpa"));
        assert_eq!(
            router.drain_events(),
            [NavigationEvent::Push(at("/comparison/springboot#jpa"))]
        );
    }

    #[test]
    fn router_fallback_for_malformed_leaf_path() {
        let mut state = NavigationState::new();
        let mut router = Router::default();
        router.drain_events();
        state.select_leaf(&mut router, "comparison/oop", false);
        assert_eq!(router.location(), &at("/comparison/oop"));
        assert_eq!(router.drain_events(), [NavigationEvent::Pop(at("/comparison/oop"))]);
    }

    #[test]
    fn selecting_in_narrow_layout_closes_the_overlay() {
        let mut state = NavigationState::new();
        let mut router = Router::default();

        state.toggle_open();
        state.select_leaf(&mut router, "/comparison/types", false);
        assert!(state.open);

        state.select_leaf(&mut router, "/comparison/oop", true);
        assert!(!state.open);
        // Expansion is untouched
        assert_eq!(state.expansion, ExpansionState::default());
    }
}
