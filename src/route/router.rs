// Router - in-app history and location changes
use super::Location;
use crate::error::NavigationError;
use std::collections::VecDeque;

/// A change of the current location, consumed once per frame by the app.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavigationEvent {
    Push(Location),
    Replace(Location),
    /// Back/forward traversal, or the synthetic event sent after a direct assignment
    Pop(Location),
}

impl NavigationEvent {
    pub fn location(&self) -> &Location {
        match self {
            NavigationEvent::Push(loc) | NavigationEvent::Replace(loc) | NavigationEvent::Pop(loc) => {
                loc
            }
        }
    }
}

/// The navigation mechanism used by the sidebar and in-page links.
pub trait Navigate {
    /// Regular navigation; fails for targets that are not well-formed locations.
    fn navigate(&mut self, target: &str) -> Result<(), NavigationError>;

    /// Direct location assignment followed by a synthetic `Pop` event. Never fails.
    fn assign_location(&mut self, target: &str);
}

pub struct Router {
    history: Vec<Location>,
    history_index: usize,
    generation: u64,
    events: VecDeque<NavigationEvent>,
}

impl Router {
    /// The initial location counts as the first navigation event.
    pub fn new(start: Location) -> Self {
        let mut events = VecDeque::new();
        events.push_back(NavigationEvent::Push(start.clone()));
        Self {
            history: vec![start],
            history_index: 0,
            generation: 1,
            events,
        }
    }

    pub fn location(&self) -> &Location {
        &self.history[self.history_index]
    }

    /// Bumped on every location change.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn push(&mut self, location: Location) {
        if *self.location() == location {
            return;
        }
        // Remove any forward history when navigating to a new location
        self.history.truncate(self.history_index + 1);
        self.history.push(location.clone());
        self.history_index += 1;
        self.changed(NavigationEvent::Push(location));
    }

    pub fn replace(&mut self, location: Location) {
        self.history[self.history_index] = location.clone();
        self.changed(NavigationEvent::Replace(location));
    }

    pub fn can_go_back(&self) -> bool {
        self.history_index > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.history_index + 1 < self.history.len()
    }

    pub fn go_back(&mut self) -> bool {
        if !self.can_go_back() {
            return false;
        }
        self.history_index -= 1;
        self.changed(NavigationEvent::Pop(self.location().clone()));
        true
    }

    pub fn go_forward(&mut self) -> bool {
        if !self.can_go_forward() {
            return false;
        }
        self.history_index += 1;
        self.changed(NavigationEvent::Pop(self.location().clone()));
        true
    }

    pub fn has_pending_events(&self) -> bool {
        !self.events.is_empty()
    }

    pub fn drain_events(&mut self) -> Vec<NavigationEvent> {
        self.events.drain(..).collect()
    }

    fn changed(&mut self, event: NavigationEvent) {
        self.generation += 1;
        self.events.push_back(event);
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new(Location::root())
    }
}

impl Navigate for Router {
    fn navigate(&mut self, target: &str) -> Result<(), NavigationError> {
        let location = Location::parse(target)?;
        self.push(location);
        Ok(())
    }

    fn assign_location(&mut self, target: &str) {
        let location = Location::assign(target);
        self.history.truncate(self.history_index + 1);
        self.history.push(location.clone());
        self.history_index += 1;
        self.changed(NavigationEvent::Pop(location));
    }
}
