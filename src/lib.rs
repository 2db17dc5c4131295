//! # pico-ducky
//!
//! A keystroke-injection script interpreter for USB HID keyboards.
//!
//! Scripts are plain text, one instruction per line. Each line is either a
//! command selected by a literal prefix, a `REPEAT` of the previous line, or a
//! list of key names pressed together as one combo.
//!
//! ## Quick start
//!
//! ```no_run
//! use pico_ducky::{DirSource, Engine, HidKeyboard, LoggedLed};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let keyboard = HidKeyboard::open("/dev/hidg0")?;
//!     let mut engine = Engine::new(keyboard, LoggedLed::default(), DirSource::new("."));
//!     engine.run("payload.txt").await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Script syntax
//!
//! | Line | Effect |
//! |------|--------|
//! | `# text` | Comment |
//! | `Delay 500` | Pause for 500 milliseconds |
//! | `String text` | Type the text verbatim |
//! | `Print text` | Write `[Script]: text` to the output handler |
//! | `Import name` | Run another script with the same shared state |
//! | `Default_Delay 5` / `Defaultdelay 5` | Pause 50 ms (units of 10 ms) after every line |
//! | `Led` | Toggle the status LED |
//! | `REPEAT 3` | Run the previous non-REPEAT line three more times |
//! | `GUI r` | Anything else: press every named key together, then release |
//!
//! Keywords are case-sensitive and their argument starts after exactly one
//! delimiter character. Key names are case-insensitive; unknown names are
//! dropped from the combo.
//!
//! ## Capturing output
//!
//! ```no_run
//! use pico_ducky::{Engine, HidKeyboard, LoggedLed, MemorySource};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let captured = std::sync::Arc::new(std::sync::Mutex::new(Vec::<String>::new()));
//!     let sink = captured.clone();
//!
//!     let source = MemorySource::new().with("hello.txt", "Print hello\n");
//!     let mut engine = Engine::with_handler(
//!         HidKeyboard::dry_run(),
//!         LoggedLed::default(),
//!         source,
//!         move |text| sink.lock().unwrap().push(text.to_string()),
//!     );
//!
//!     engine.run("hello.txt").await?;
//!     assert_eq!(*captured.lock().unwrap(), vec!["[Script]: hello"]);
//!     Ok(())
//! }
//! ```

pub mod command;
pub mod commands;
pub mod device;
pub mod engine;
pub mod hid;
pub mod keycode;
pub mod keys;
pub mod layout;
pub mod leds;
pub mod parser;
pub mod payload;
pub mod trigger;

pub use command::{Command, Context, EngineConfig, ErrorPolicy, ExecutionState, ScriptCommand};
pub use device::{DirSource, Keyboard, Led, LoggedLed, MemorySource, ScriptSource};
pub use engine::Engine;
pub use hid::{HidKeyboard, KeyboardReport};
pub use keycode::KeyCode;
pub use payload::select_payload;
pub use trigger::{Button, StdinButton, monitor_button};
