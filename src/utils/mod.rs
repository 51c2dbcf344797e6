//! Generic utility primitives with zero domain knowledge.
//!
//! - `command` - Captured process output primitive
//! - `shell` - Shell escaping and quoting
//! - `template` - Command template rendering

pub mod command;
pub mod shell;
pub mod template;
