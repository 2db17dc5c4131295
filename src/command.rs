//! The [`ScriptCommand`] trait, the [`Command`] variant the parser produces, and
//! the [`Context`] commands receive when executed.

use crate::commands::{Comment, DefaultDelay, Delay, Import, KeyCombo, Print, SendString, ToggleLed};
use crate::device::{Keyboard, Led, ScriptSource};
use crate::keycode::KeyCode;
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use std::io;
use std::sync::Arc;
use std::time::Duration;

pub type OutputHandler = Arc<dyn Fn(&str) + Send + Sync>;

/// What to do with a line whose numeric argument does not parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Log a warning and carry on with the next line.
    #[default]
    Skip,
    /// Stop the whole run, including every script that imported this one.
    Abort,
}

#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// How deep `Import` may nest before further imports are refused.
    pub max_import_depth: usize,
    pub error_policy: ErrorPolicy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_import_depth: 32,
            error_policy: ErrorPolicy::Skip,
        }
    }
}

/// Timing and REPEAT state shared by every script in a run, imports included.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecutionState {
    /// Pause applied after every executed line.
    pub default_delay: Duration,
    /// Last non-REPEAT line, replayed by `REPEAT`.
    pub previous_line: Option<String>,
}

/// Execution context passed to [`ScriptCommand::execute`].
///
/// Bundles the collaborators (keyboard, LED, script source, output handler)
/// with the [`ExecutionState`] that threads through a run.
pub struct Context {
    pub(crate) keyboard: Box<dyn Keyboard>,
    pub(crate) led: Box<dyn Led>,
    pub(crate) sources: Box<dyn ScriptSource>,
    pub(crate) output_handler: OutputHandler,
    pub(crate) state: ExecutionState,
    pub(crate) config: EngineConfig,
    pub(crate) depth: usize,
}

impl Context {
    pub fn state(&self) -> &ExecutionState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut ExecutionState {
        &mut self.state
    }

    /// Hold every key in `keys`, then release them all.
    pub fn press_combo(&mut self, keys: &[KeyCode]) -> Result<()> {
        self.keyboard.press(keys)?;
        self.keyboard.release_all()
    }

    /// Type literal text through the keyboard layout.
    pub fn type_text(&mut self, text: &str) -> Result<()> {
        self.keyboard.write(text)
    }

    pub fn toggle_led(&mut self) -> Result<()> {
        self.led.toggle()
    }

    pub fn open_source(&self, name: &str) -> io::Result<String> {
        self.sources.open(name)
    }

    /// Pass a line through the output handler (stdout by default).
    pub fn emit(&self, text: &str) {
        (self.output_handler)(text);
    }

    pub async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }

    /// Sleep for the configured default delay.
    pub async fn sleep_default(&self) {
        self.sleep(self.state.default_delay).await;
    }

    /// Apply the error policy to a recoverable script error: log and swallow it
    /// under [`ErrorPolicy::Skip`], pass it on under [`ErrorPolicy::Abort`].
    pub(crate) fn recover(&self, err: anyhow::Error) -> Result<()> {
        match self.config.error_policy {
            ErrorPolicy::Skip => {
                tracing::warn!(error = %format!("{err:#}"), depth = self.depth, "skipping line");
                Ok(())
            }
            ErrorPolicy::Abort => Err(err),
        }
    }
}

/// A single script command.
///
/// Each implementation defines `pub const NAME: &'static str`, the literal
/// prefix that selects it, and gets one entry in the parser's `REGISTRY`.
#[async_trait(?Send)]
pub trait ScriptCommand: Into<Command> + 'static {
    /// The command name, accessible at runtime.
    fn name(&self) -> &'static str;

    /// Parse this command from the argument text that follows the keyword and
    /// its delimiter.
    fn parse(args: &str) -> Result<Self>
    where
        Self: Sized;

    /// Parse and wrap in a [`Command`]. This is the function-pointer type the
    /// parser registry stores.
    fn parse_command(args: &str) -> Result<Command>
    where
        Self: Sized,
    {
        Ok(Self::parse(args)?.into())
    }

    async fn execute(&self, ctx: &mut Context) -> Result<()>;
}

/// One classified script line.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Comment(Comment),
    Delay(Delay),
    String(SendString),
    Print(Print),
    Import(Import),
    DefaultDelay(DefaultDelay),
    Led(ToggleLed),
    KeyCombo(KeyCombo),
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Comment(cmd) => cmd.name(),
            Command::Delay(cmd) => cmd.name(),
            Command::String(cmd) => cmd.name(),
            Command::Print(cmd) => cmd.name(),
            Command::Import(cmd) => cmd.name(),
            Command::DefaultDelay(cmd) => cmd.name(),
            Command::Led(cmd) => cmd.name(),
            Command::KeyCombo(cmd) => cmd.name(),
        }
    }

    pub async fn execute(&self, ctx: &mut Context) -> Result<()> {
        match self {
            Command::Comment(cmd) => cmd.execute(ctx).await,
            Command::Delay(cmd) => cmd.execute(ctx).await,
            Command::String(cmd) => cmd.execute(ctx).await,
            Command::Print(cmd) => cmd.execute(ctx).await,
            Command::Import(cmd) => cmd.execute(ctx).await,
            Command::DefaultDelay(cmd) => cmd.execute(ctx).await,
            Command::Led(cmd) => cmd.execute(ctx).await,
            Command::KeyCombo(cmd) => cmd.execute(ctx).await,
        }
    }
}

macro_rules! into_command {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(impl From<$ty> for Command {
            fn from(cmd: $ty) -> Self {
                Command::$variant(cmd)
            }
        })*
    };
}

into_command!(
    Comment(Comment),
    Delay(Delay),
    String(SendString),
    Print(Print),
    Import(Import),
    DefaultDelay(DefaultDelay),
    Led(ToggleLed),
    KeyCombo(KeyCombo),
);

/// Parse a trimmed non-negative millisecond count.
pub(crate) fn parse_millis(keyword: &str, args: &str) -> Result<f64> {
    let value: f64 = args
        .trim()
        .parse()
        .map_err(|_| anyhow!("{keyword}: expected a number, got '{args}'"))?;
    if !value.is_finite() || value < 0.0 {
        return Err(anyhow!("{keyword}: delay must be a non-negative number, got '{args}'"));
    }
    Ok(value)
}

/// Parse a trimmed non-negative integer argument.
pub(crate) fn parse_count(keyword: &str, args: &str) -> Result<u64> {
    args.trim()
        .parse()
        .map_err(|_| anyhow!("{keyword}: expected a non-negative integer, got '{args}'"))
}
