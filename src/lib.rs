//! sandbench: a sandboxed, in-process command shell over a read-only virtual file tree.
//!
//! Two independent components, composable through a shared "active path"
//! selection: [`VirtualFileTree`] for browsing an in-memory hierarchy, and
//! [`ShellState`] for interpreting single-line commands into an append-only
//! scrollback transcript. Nothing here spawns processes, touches a real
//! filesystem, or performs I/O of any kind.

pub mod error;
pub mod shell;
pub mod tree;
pub mod types;

// Re-export
pub use error::{TreeError, TreeResult};
pub use shell::{BANNER, PROMPT, ShellState};
pub use tree::{RenderIter, VirtualFileTree};
pub use types::*;
