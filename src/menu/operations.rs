// Menu operations - filesystem access for the explorer

pub mod explorer;

pub use explorer::{build_explorer, DirItem, DirectoryLister, FsLister, ListingError};
