pub mod clipboard;
pub mod progress;
pub mod sidebar;
pub mod types_detail;

pub use clipboard::CopyFeedback;
pub use progress::ScrollProgress;
pub use sidebar::SidebarState;
pub use types_detail::TypesDetailState;
