use anyhow::{Context, Result};
use clap::Parser;
use pico_ducky::leds::{TracePwm, breathe};
use pico_ducky::{
    DirSource, Engine, EngineConfig, ErrorPolicy, HidKeyboard, Keyboard, LoggedLed,
    StdinButton, monitor_button, select_payload,
};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "pico-ducky",
    about = "Run keystroke-injection scripts against a USB HID keyboard",
    version
)]
struct Args {
    /// Directory payloads and imported scripts are read from
    #[arg(short = 'd', long, env = "DUCKY_PAYLOAD_DIR", default_value = ".")]
    payload_dir: PathBuf,

    /// Run this script instead of the one picked by the selector switches
    #[arg(short, long)]
    payload: Option<String>,

    /// Mark a payload selector switch (1-4) as active
    #[arg(short, long = "switch", value_parser = clap::value_parser!(u8).range(1..=4))]
    switches: Vec<u8>,

    /// HID gadget device to write keyboard reports to; logs reports only when absent
    #[arg(long, env = "DUCKY_HID_DEVICE")]
    hid_device: Option<PathBuf>,

    /// Deepest allowed Import nesting
    #[arg(long, default_value_t = EngineConfig::default().max_import_depth)]
    max_import_depth: usize,

    /// Abort the run on a malformed line instead of skipping it
    #[arg(long)]
    strict: bool,

    /// Wait for trigger clicks (one per line on stdin) instead of running once
    #[arg(short, long)]
    watch: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let payload = args.payload.clone().unwrap_or_else(|| {
        let mut states = [false; 4];
        for switch in &args.switches {
            states[usize::from(*switch) - 1] = true;
        }
        select_payload(&states).to_string()
    });

    let config = EngineConfig {
        max_import_depth: args.max_import_depth,
        error_policy: if args.strict {
            ErrorPolicy::Abort
        } else {
            ErrorPolicy::Skip
        },
    };

    match &args.hid_device {
        Some(path) => {
            let keyboard = HidKeyboard::open(path)?;
            run(keyboard, &args, config, &payload).await
        }
        None => {
            tracing::info!("no HID device given, reports are only logged");
            run(HidKeyboard::dry_run(), &args, config, &payload).await
        }
    }
}

async fn run(
    keyboard: impl Keyboard + 'static,
    args: &Args,
    config: EngineConfig,
    payload: &str,
) -> Result<()> {
    let sources = DirSource::new(&args.payload_dir);
    let mut engine = Engine::new(keyboard, LoggedLed::default(), sources).with_config(config);

    if !args.watch {
        return engine
            .run(payload)
            .await
            .with_context(|| format!("Failed to run payload: {payload}"));
    }

    let mut button = StdinButton::spawn();
    let mut pwm = TracePwm::default();
    tokio::select! {
        result = monitor_button(&mut button, &mut engine, payload) => {
            result.with_context(|| format!("Failed to run payload: {payload}"))
        }
        _ = breathe(&mut pwm) => Ok(()),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
