//! Building blocks of the `parley` binary: CLI, console participant and the
//! demo conversation.

pub mod cli;
pub mod console;
pub mod demo;
