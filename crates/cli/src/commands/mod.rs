pub mod cache;
pub mod config;
pub mod endpoint;
pub mod entries;
pub mod submit;
pub mod test;

use anyhow::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    Completed,
    NoOp,
}

pub type CommandResult = Result<CommandOutcome>;
