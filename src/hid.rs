//! Boot-protocol keyboard reports and a [`Keyboard`] that writes them to any
//! byte sink, such as a Linux USB gadget device (`/dev/hidg0`).
//!
//! Report layout (8 bytes):
//! ```text
//! Byte 0: modifier bitfield (LCtrl, LShift, LAlt, LGui, RCtrl, RShift, RAlt, RGui)
//! Byte 1: reserved
//! Byte 2-7: up to six held key codes
//! ```

use crate::device::Keyboard;
use crate::keycode::KeyCode;
use anyhow::{Context as _, Result};
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

pub const REPORT_SIZE: usize = 8;

/// The set of currently held keys, as sent to the host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyboardReport {
    pub modifier: u8,
    pub keycodes: [u8; 6],
}

impl KeyboardReport {
    /// Add a key to the report. Returns `false` if all six slots were taken.
    pub fn press(&mut self, key: KeyCode) -> bool {
        if let Some(bit) = key.modifier_bit() {
            self.modifier |= bit;
            return true;
        }
        if self.keycodes.contains(&key.usage()) {
            return true;
        }
        match self.keycodes.iter_mut().find(|slot| **slot == 0) {
            Some(slot) => {
                *slot = key.usage();
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        self.modifier == 0 && self.keycodes.iter().all(|&k| k == 0)
    }

    pub fn to_bytes(&self) -> [u8; REPORT_SIZE] {
        let mut buf = [0u8; REPORT_SIZE];
        buf[0] = self.modifier;
        buf[2..].copy_from_slice(&self.keycodes);
        buf
    }
}

/// A keyboard that emits one report per state change.
pub struct HidKeyboard<W: Write> {
    sink: W,
    report: KeyboardReport,
}

impl HidKeyboard<std::fs::File> {
    /// Open a HID gadget device node for writing.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .write(true)
            .open(path)
            .with_context(|| format!("Failed to open HID device: {}", path.display()))?;
        Ok(Self::new(file))
    }
}

impl HidKeyboard<io::Sink> {
    /// A keyboard that only logs its reports.
    pub fn dry_run() -> Self {
        Self::new(io::sink())
    }
}

impl<W: Write> HidKeyboard<W> {
    pub fn new(sink: W) -> Self {
        Self {
            sink,
            report: KeyboardReport::default(),
        }
    }

    pub fn report(&self) -> &KeyboardReport {
        &self.report
    }

    pub fn into_inner(self) -> W {
        self.sink
    }

    fn send(&mut self) -> Result<()> {
        let bytes = self.report.to_bytes();
        tracing::debug!(report = ?bytes, "hid report");
        self.sink
            .write_all(&bytes)
            .and_then(|_| self.sink.flush())
            .context("Failed to write HID report")
    }
}

impl<W: Write> Keyboard for HidKeyboard<W> {
    fn press(&mut self, keys: &[KeyCode]) -> Result<()> {
        for &key in keys {
            if !self.report.press(key) {
                tracing::warn!(%key, "more than six keys held, key dropped");
            }
        }
        self.send()
    }

    fn release_all(&mut self) -> Result<()> {
        self.report.clear();
        self.send()
    }
}
