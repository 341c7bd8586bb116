/// Interactive console surface
///
/// This module implements the numbered-menu front end. It reads one line per
/// choice, calls into the `HabitTracker` session and prints results. Intents
/// from background tasks (such as Ctrl-C) arrive over a channel and are
/// applied between prompts.

pub mod intents;
pub mod menu;
pub mod render;
pub mod session;

// Re-export main types
pub use intents::{spawn_interrupt_watcher, Intent};
pub use menu::MenuChoice;
pub use session::ConsoleSession;
