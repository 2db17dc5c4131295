//! [`Delay`] command — blocks the script for a number of milliseconds.
//!
//! Script syntax: `Delay 500` or `Delay 12.5`

use crate::command::{Context, ScriptCommand, parse_millis};
use anyhow::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Pauses the script before the next line. The argument is plain milliseconds,
/// unlike `Default_Delay` which counts in tens of milliseconds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delay {
    pub duration: Duration,
}

impl Delay {
    pub const NAME: &'static str = "Delay";
}

#[async_trait(?Send)]
impl ScriptCommand for Delay {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn parse(args: &str) -> Result<Self> {
        let millis = parse_millis(Self::NAME, args)?;
        Ok(Self {
            duration: Duration::from_nanos((millis * 1_000_000.0).round() as u64),
        })
    }

    async fn execute(&self, ctx: &mut Context) -> Result<()> {
        ctx.sleep(self.duration).await;
        Ok(())
    }
}
