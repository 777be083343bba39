pub mod operations;
pub mod pipelines;
pub mod pure;
pub mod types;

// Re-exports
pub use operations::{build_explorer, DirItem, DirectoryLister, FsLister, ListingError};
pub use pipelines::build_submenu;
pub use pure::{build_main_menu, build_quick_menu};
pub use types::{Builtin, Command, Entry, Submenu};
