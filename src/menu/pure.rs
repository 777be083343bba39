pub mod builders;

// Re-exports
pub use builders::{build_main_menu, build_quick_menu, explorer_from_listing};
