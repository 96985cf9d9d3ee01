// In-app URL surface: locations, route resolution and history

pub mod location;
pub mod resolver;
pub mod router;

pub use location::Location;
pub use resolver::{resolve_view, Category, ComparisonPage, View};
pub use router::{Navigate, NavigationEvent, Router};
