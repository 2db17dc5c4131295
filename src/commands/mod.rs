mod comment;
mod default_delay;
mod delay;
mod import;
mod key_combo;
mod led;
mod print;
mod string;

pub use comment::Comment;
pub use default_delay::DefaultDelay;
pub use delay::Delay;
pub use import::Import;
pub use key_combo::KeyCombo;
pub use led::ToggleLed;
pub use print::Print;
pub use string::SendString;
