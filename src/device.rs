//! Collaborators the interpreter drives: the keyboard, the status LED and the
//! source of script text.

use crate::keycode::KeyCode;
use crate::layout;
use anyhow::Result;
use std::collections::HashMap;
use std::io;
use std::path::PathBuf;

/// A keyboard that can hold keys down and type literal text.
pub trait Keyboard {
    /// Press every key in `keys`, adding to whatever is already held.
    fn press(&mut self, keys: &[KeyCode]) -> Result<()>;

    /// Release every held key.
    fn release_all(&mut self) -> Result<()>;

    /// Type `text` through the US keyboard layout.
    fn write(&mut self, text: &str) -> Result<()> {
        layout::type_text(self, text)
    }
}

/// The on/off status LED (separate from the PWM breathing LED).
pub trait Led {
    fn toggle(&mut self) -> Result<()>;
}

/// Where `Import` and the top-level run find scripts by name.
pub trait ScriptSource {
    /// Read the whole script. Fails with [`io::ErrorKind::NotFound`] when absent.
    fn open(&self, name: &str) -> io::Result<String>;
}

/// Scripts stored as files below a root directory.
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl ScriptSource for DirSource {
    fn open(&self, name: &str) -> io::Result<String> {
        std::fs::read_to_string(self.root.join(name))
    }
}

/// Scripts held in memory, keyed by name.
#[derive(Default, Clone)]
pub struct MemorySource {
    scripts: HashMap<String, String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a script.
    pub fn with(mut self, name: impl Into<String>, content: impl Into<String>) -> Self {
        self.scripts.insert(name.into(), content.into());
        self
    }
}

impl ScriptSource for MemorySource {
    fn open(&self, name: &str) -> io::Result<String> {
        self.scripts.get(name).cloned().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, format!("no script named {name}"))
        })
    }
}

/// An LED that only exists in the logs.
#[derive(Debug, Default)]
pub struct LoggedLed {
    on: bool,
}

impl LoggedLed {
    pub fn is_on(&self) -> bool {
        self.on
    }
}

impl Led for LoggedLed {
    fn toggle(&mut self) -> Result<()> {
        self.on = !self.on;
        tracing::info!(on = self.on, "status LED toggled");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_source() {
        let source = MemorySource::new().with("a.txt", "String hi\n");
        assert_eq!(source.open("a.txt").unwrap(), "String hi\n");
        let err = source.open("b.txt").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_dir_source() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("payload.txt"), "ENTER\n").unwrap();
        let source = DirSource::new(dir.path());
        assert_eq!(source.open("payload.txt").unwrap(), "ENTER\n");
        assert_eq!(
            source.open("missing.txt").unwrap_err().kind(),
            io::ErrorKind::NotFound
        );
    }

    #[test]
    fn test_logged_led_toggles() {
        let mut led = LoggedLed::default();
        led.toggle().unwrap();
        assert!(led.is_on());
        led.toggle().unwrap();
        assert!(!led.is_on());
    }
}
