//! [`DefaultDelay`] command — sets the pause applied after every line.
//!
//! Script syntax: `Default_Delay 10` or `Defaultdelay 10`

use crate::command::{Context, ScriptCommand, parse_count};
use anyhow::Result;
use async_trait::async_trait;
use std::time::Duration;

/// The argument counts in units of ten milliseconds: `Default_Delay 5` makes
/// every following line wait 50 ms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultDelay {
    pub units: u64,
}

impl DefaultDelay {
    pub const NAME: &'static str = "Default_Delay";
    pub const ALIAS: &'static str = "Defaultdelay";
    pub const UNIT_MS: u64 = 10;

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.units.saturating_mul(Self::UNIT_MS))
    }
}

#[async_trait(?Send)]
impl ScriptCommand for DefaultDelay {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn parse(args: &str) -> Result<Self> {
        Ok(Self {
            units: parse_count(Self::NAME, args)?,
        })
    }

    async fn execute(&self, ctx: &mut Context) -> Result<()> {
        let delay = self.delay();
        tracing::debug!(?delay, "default delay set");
        ctx.state_mut().default_delay = delay;
        Ok(())
    }
}
