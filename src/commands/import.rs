//! [`Import`] command — runs another script inline.
//!
//! Script syntax: `Import other_script.txt`

use crate::command::{Context, ScriptCommand};
use crate::engine;
use anyhow::Result;
use async_trait::async_trait;

/// Runs the named script to completion with the same shared execution state,
/// so a default delay set before the import applies inside it and one set
/// inside it persists afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Import {
    pub source: String,
}

impl Import {
    pub const NAME: &'static str = "Import";
}

#[async_trait(?Send)]
impl ScriptCommand for Import {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn parse(args: &str) -> Result<Self> {
        Ok(Self {
            source: args.to_string(),
        })
    }

    async fn execute(&self, ctx: &mut Context) -> Result<()> {
        Box::pin(engine::run_import(ctx, &self.source)).await
    }
}
