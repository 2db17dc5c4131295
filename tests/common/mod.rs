use anyhow::Result;
use pico_ducky::{Engine, KeyCode, Keyboard, Led, ScriptSource};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::Instant;

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Press(Vec<KeyCode>),
    ReleaseAll,
    Write(String),
    LedToggled,
}

/// Everything the collaborators saw, each event stamped with the time since
/// the engine was built.
#[derive(Clone, Default)]
pub struct Recording {
    events: Arc<Mutex<Vec<(Duration, Event)>>>,
    output: Arc<Mutex<Vec<String>>>,
}

impl Recording {
    pub fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().iter().map(|(_, e)| e.clone()).collect()
    }

    pub fn timed_events(&self) -> Vec<(Duration, Event)> {
        self.events.lock().unwrap().clone()
    }

    pub fn output(&self) -> Vec<String> {
        self.output.lock().unwrap().clone()
    }
}

struct RecordingKeyboard {
    start: Instant,
    recording: Recording,
}

impl RecordingKeyboard {
    fn push(&self, event: Event) {
        let at = self.start.elapsed();
        self.recording.events.lock().unwrap().push((at, event));
    }
}

impl Keyboard for RecordingKeyboard {
    fn press(&mut self, keys: &[KeyCode]) -> Result<()> {
        self.push(Event::Press(keys.to_vec()));
        Ok(())
    }

    fn release_all(&mut self) -> Result<()> {
        self.push(Event::ReleaseAll);
        Ok(())
    }

    fn write(&mut self, text: &str) -> Result<()> {
        self.push(Event::Write(text.to_string()));
        Ok(())
    }
}

struct RecordingLed(RecordingKeyboard);

impl Led for RecordingLed {
    fn toggle(&mut self) -> Result<()> {
        self.0.push(Event::LedToggled);
        Ok(())
    }
}

/// Build an engine over `sources` whose keyboard, LED and output all land in
/// the returned [`Recording`].
pub fn recording_engine(sources: impl ScriptSource + 'static) -> (Engine, Recording) {
    let recording = Recording::default();
    let start = Instant::now();
    let keyboard = RecordingKeyboard {
        start,
        recording: recording.clone(),
    };
    let led = RecordingLed(RecordingKeyboard {
        start,
        recording: recording.clone(),
    });
    let output = recording.output.clone();
    let engine = Engine::with_handler(keyboard, led, sources, move |text| {
        output.lock().unwrap().push(text.to_string());
    });
    (engine, recording)
}
