pub mod stack;
pub mod types;

// Re-exports
pub use stack::NavigationStack;
pub use types::{NavCommand, ScrollSettings};
