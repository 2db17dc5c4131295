//! [`ToggleLed`] command — flips the status LED.
//!
//! Script syntax: `Led`

use crate::command::{Context, ScriptCommand};
use anyhow::Result;
use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleLed;

impl ToggleLed {
    pub const NAME: &'static str = "Led";
}

#[async_trait(?Send)]
impl ScriptCommand for ToggleLed {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn parse(_args: &str) -> Result<Self> {
        Ok(Self)
    }

    async fn execute(&self, ctx: &mut Context) -> Result<()> {
        ctx.toggle_led()
    }
}
