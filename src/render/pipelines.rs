pub mod menu_list;

// Re-exports
pub use menu_list::{render_menu_list, render_notifications};
