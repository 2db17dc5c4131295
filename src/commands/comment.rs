//! [`Comment`] command — a line that does nothing.
//!
//! Script syntax: `# any text`

use crate::command::{Context, ScriptCommand};
use anyhow::Result;
use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment;

impl Comment {
    pub const NAME: &'static str = "#";
}

#[async_trait(?Send)]
impl ScriptCommand for Comment {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn parse(_args: &str) -> Result<Self> {
        Ok(Self)
    }

    async fn execute(&self, _ctx: &mut Context) -> Result<()> {
        Ok(())
    }
}
