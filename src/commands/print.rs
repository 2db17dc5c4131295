//! [`Print`] command — writes a message to the output handler.
//!
//! Script syntax: `Print message`

use crate::command::{Context, ScriptCommand};
use anyhow::Result;
use async_trait::async_trait;

/// Emits the message prefixed with `[Script]: ` so it can be told apart from
/// the interpreter's own diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Print {
    pub message: String,
}

impl Print {
    pub const NAME: &'static str = "Print";
    pub const PREFIX: &'static str = "[Script]: ";
}

#[async_trait(?Send)]
impl ScriptCommand for Print {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn parse(args: &str) -> Result<Self> {
        Ok(Self {
            message: args.to_string(),
        })
    }

    async fn execute(&self, ctx: &mut Context) -> Result<()> {
        ctx.emit(&format!("{}{}", Self::PREFIX, self.message));
        Ok(())
    }
}
