//! [`SendString`] command — types literal text through the keyboard layout.
//!
//! Script syntax: `String text to type`

use crate::command::{Context, ScriptCommand};
use anyhow::Result;
use async_trait::async_trait;

/// Types the rest of the line verbatim. Nothing is tokenized or resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendString {
    pub text: String,
}

impl SendString {
    pub const NAME: &'static str = "String";

    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[async_trait(?Send)]
impl ScriptCommand for SendString {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn parse(args: &str) -> Result<Self> {
        Ok(Self::new(args))
    }

    async fn execute(&self, ctx: &mut Context) -> Result<()> {
        ctx.type_text(&self.text)
    }
}
