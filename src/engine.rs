use crate::command::{Context, EngineConfig, ExecutionState, OutputHandler};
use crate::device::{Keyboard, Led, ScriptSource};
use crate::parser::{parse_line, repeat_count};
use anyhow::{Result, anyhow};
use std::sync::Arc;

/// The script interpreter: owns the collaborators and the execution state
/// that persists across every run for the lifetime of the engine.
pub struct Engine {
    ctx: Context,
}

impl Engine {
    /// Create an engine whose `Print` output and diagnostics go to stdout.
    pub fn new(
        keyboard: impl Keyboard + 'static,
        led: impl Led + 'static,
        sources: impl ScriptSource + 'static,
    ) -> Self {
        Self::with_handler(keyboard, led, sources, |text| println!("{text}"))
    }

    /// Create an engine with a custom output handler.
    pub fn with_handler<F>(
        keyboard: impl Keyboard + 'static,
        led: impl Led + 'static,
        sources: impl ScriptSource + 'static,
        handler: F,
    ) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        let output_handler: OutputHandler = Arc::new(handler);
        Engine {
            ctx: Context {
                keyboard: Box::new(keyboard),
                led: Box::new(led),
                sources: Box::new(sources),
                output_handler,
                state: ExecutionState::default(),
                config: EngineConfig::default(),
                depth: 0,
            },
        }
    }

    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.ctx.config = config;
        self
    }

    pub fn state(&self) -> &ExecutionState {
        &self.ctx.state
    }

    /// Run the named script to completion.
    ///
    /// A missing script is reported through the output handler and is not an
    /// error. Errors are collaborator failures, or malformed lines when the
    /// error policy is [`Abort`](crate::ErrorPolicy::Abort).
    pub async fn run(&mut self, name: &str) -> Result<()> {
        tracing::info!(script = name, "running script");
        run_source(&mut self.ctx, name).await
    }

    /// Run script text directly, as if it had been read from a source.
    pub async fn run_str(&mut self, content: &str) -> Result<()> {
        run_lines(&mut self.ctx, content).await
    }
}

/// Run an imported script one level deeper than the current one.
pub(crate) async fn run_import(ctx: &mut Context, name: &str) -> Result<()> {
    if ctx.depth >= ctx.config.max_import_depth {
        let err = anyhow!(
            "Import depth limit ({}) reached, not importing {name}",
            ctx.config.max_import_depth
        );
        ctx.emit(&err.to_string());
        return ctx.recover(err);
    }
    ctx.depth += 1;
    let result = run_source(ctx, name).await;
    ctx.depth -= 1;
    result
}

async fn run_source(ctx: &mut Context, name: &str) -> Result<()> {
    let content = match ctx.open_source(name) {
        Ok(content) => content,
        Err(err) => {
            tracing::warn!(script = name, error = %err, "cannot open script");
            ctx.emit(&format!("Unable to open file {name}: {err}"));
            return Ok(());
        }
    };
    run_lines(ctx, &content).await
}

async fn run_lines(ctx: &mut Context, content: &str) -> Result<()> {
    for line in content.lines() {
        let line = line.trim_end();
        tracing::debug!(line, depth = ctx.depth, "line");

        match repeat_count(line) {
            Some(Ok(count)) => repeat_previous(ctx, count).await?,
            Some(Err(err)) => ctx.recover(err)?,
            None => {
                execute_line(ctx, line).await?;
                ctx.state.previous_line = Some(line.to_string());
            }
        }

        ctx.sleep_default().await;
    }
    Ok(())
}

/// Replay the previous non-REPEAT line `count` times, with the default delay
/// after each replay.
///
/// The line is captured once up front: replaying an `Import` runs lines that
/// overwrite `previous_line`, and every iteration must still replay the import.
async fn repeat_previous(ctx: &mut Context, count: u64) -> Result<()> {
    let previous = ctx.state.previous_line.clone();
    for _ in 0..count {
        if let Some(previous) = &previous {
            execute_line(ctx, previous).await?;
        }
        ctx.sleep_default().await;
    }
    Ok(())
}

async fn execute_line(ctx: &mut Context, line: &str) -> Result<()> {
    match parse_line(line) {
        Ok(command) => command.execute(ctx).await,
        Err(err) => ctx.recover(err),
    }
}
