// Explorer builder (I/O: one non-recursive directory read)

use crate::host::Notifier;
use crate::menu::pure::explorer_from_listing;
use crate::menu::types::Entry;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// One item of a directory listing; `name` is the raw file name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirItem {
    pub name: OsString,
    pub is_dir: bool,
}

impl DirItem {
    pub fn dir(name: impl Into<OsString>) -> Self {
        Self {
            name: name.into(),
            is_dir: true,
        }
    }

    pub fn file(name: impl Into<OsString>) -> Self {
        Self {
            name: name.into(),
            is_dir: false,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ListingError {
    #[error("open {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Source of directory listings
pub trait DirectoryLister {
    fn list_directory(&self, path: &Path) -> Result<Vec<DirItem>, ListingError>;
}

/// Lists the real filesystem, sorted by name
#[derive(Debug, Default, Clone, Copy)]
pub struct FsLister;

impl DirectoryLister for FsLister {
    fn list_directory(&self, path: &Path) -> Result<Vec<DirItem>, ListingError> {
        let to_err = |source| ListingError::Io {
            path: path.to_path_buf(),
            source,
        };

        let mut items = Vec::new();
        for entry in std::fs::read_dir(path).map_err(to_err)? {
            let entry = entry.map_err(to_err)?;
            // Follow symlinks so a linked roms folder still opens as a directory
            let name = entry.file_name();
            items.push(if entry.path().is_dir() {
                DirItem::dir(name)
            } else {
                DirItem::file(name)
            });
        }
        items.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(items)
    }
}

/// Build the explorer menu for `path`.
///
/// A failed listing is reported through `notifier` and yields an empty menu.
pub fn build_explorer<L, N>(
    path: &Path,
    lister: &L,
    notifier: &mut N,
    notify_frames: u32,
) -> Entry
where
    L: DirectoryLister + ?Sized,
    N: Notifier + ?Sized,
{
    let items = match lister.list_directory(path) {
        Ok(items) => items,
        Err(e) => {
            log::warn!("explorer: {}", e);
            notifier.notify(&e.to_string(), notify_frames);
            Vec::new()
        }
    };
    explorer_from_listing(path, &items)
}
