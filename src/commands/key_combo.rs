//! [`KeyCombo`] command — the fallback for lines with no command prefix.
//!
//! Script syntax: `CTRL ALT DELETE`, `GUI r`, `ENTER`

use crate::command::{Context, ScriptCommand};
use crate::keycode::KeyCode;
use crate::keys;
use anyhow::Result;
use async_trait::async_trait;

/// Presses every resolved key at once, then releases them all. Tokens that do
/// not resolve are dropped; a line with none left still releases all keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyCombo {
    pub keys: Vec<KeyCode>,
}

impl KeyCombo {
    /// Not a prefix: key combos are whatever no other command claims.
    pub const NAME: &'static str = "keys";
}

#[async_trait(?Send)]
impl ScriptCommand for KeyCombo {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    /// Takes the whole line rather than an argument.
    fn parse(line: &str) -> Result<Self> {
        Ok(Self {
            keys: keys::resolve_line(line),
        })
    }

    async fn execute(&self, ctx: &mut Context) -> Result<()> {
        tracing::trace!(keys = ?self.keys, "key combo");
        ctx.press_combo(&self.keys)
    }
}
