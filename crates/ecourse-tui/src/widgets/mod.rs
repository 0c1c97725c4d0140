//! Custom widget components

mod header;
mod help;
pub mod modal_overlay;
mod page_view;
mod sidebar;
mod status_bar;

pub use header::{MainHeader, COURSE_TITLE};
pub use help::HelpOverlay;
pub use page_view::{layout_page, PageLayout, PageView};
pub use sidebar::Sidebar;
pub use status_bar::StatusBar;

// Re-export state types from app layer (used by render/)
pub use ecourse_app::PageViewState;
