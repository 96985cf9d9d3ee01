pub mod state;
pub mod tree;

pub use state::{is_active, ExpansionState, NavigationState};
pub use tree::{default_tree, NavNode};
