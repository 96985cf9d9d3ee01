pub mod code_block;
pub mod comparison;
pub mod home;
pub mod panels;
pub mod sidebar;
pub mod types_detail;

pub use code_block::Highlighter;
pub use sidebar::NavAction;
