//! Library side of the `anirec` binary: command handlers and the
//! interactive menu, written against generic readers and writers.

pub mod commands;
pub mod interactive;
pub mod output;
