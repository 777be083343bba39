pub mod operations;
pub mod pipelines;
pub mod pure;
pub mod types;

// Re-exports
pub use operations::EguiPainter;
pub use pipelines::{render_menu_list, render_notifications};
pub use types::{Rgba, TextPainter};
