pub mod layout;

// Re-exports
pub use layout::{layout_rows, row_y};
