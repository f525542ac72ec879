use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use color_eyre::eyre::Context;
use color_eyre::{Result, Section};
use tracing::info;
use translator::{DeviceKind, Direction, Translator};

#[derive(Parser)]
#[command(name = "bridge")]
#[command(version = "1.0")]
#[command(about = "Translates zigbee and HomeKit device state, \
    one JSON message per line")]
struct Cli {
    /// Which way messages are translated
    #[arg(short, long, value_enum)]
    direction: CliDirection,

    /// Device kind of this translator, for example "Light Bulb"
    #[arg(short, long)]
    kind: String,

    /// Read messages from this file instead of stdin
    #[arg(short, long)]
    input: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliDirection {
    ZigbeeToHomekit,
    HomekitToZigbee,
}

impl From<CliDirection> for Direction {
    fn from(direction: CliDirection) -> Self {
        match direction {
            CliDirection::ZigbeeToHomekit => Direction::ZigbeeToHomekit,
            CliDirection::HomekitToZigbee => Direction::HomekitToZigbee,
        }
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;
    logger::setup();

    let Cli {
        direction,
        kind,
        input,
    } = Cli::parse();
    let direction = Direction::from(direction);

    let translator = Translator::new(direction, &kind)
        .wrap_err("Could not set up translator")
        .with_note(|| {
            let supported: Vec<_> = DeviceKind::supported(direction)
                .map(|kind| kind.to_string())
                .collect();
            format!("supported kinds: {}", supported.join(", "))
        })?;
    info!("translating {kind} messages, {direction}");

    let input: Box<dyn BufRead> = match input {
        Some(path) => {
            let file = File::open(&path)
                .wrap_err("Could not open input")
                .with_note(|| format!("path: {}", path.display()))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(io::stdin().lock()),
    };

    bridge::run(&translator, input, io::stdout().lock())
}
