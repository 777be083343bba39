pub mod colors;

// Re-export all colors and functions
pub use colors::{
    apply_theme, BG_DARK, TEXT_HEADER, TEXT_MUTED, TEXT_NOTIFY, TEXT_SELECTED,
};
