//! Runs a translator over newline delimited JSON messages. Each message
//! looks like `{"payload": {..}, "hap": {"allChars": {..}}}` where `hap` is
//! optional. Every translated message is written as `{"payload": {..}}` on
//! its own line.

use std::io::{BufRead, Write};

use color_eyre::eyre::Context;
use color_eyre::{Result, Section};
use tracing::{instrument, warn};
use translator::{Characteristic, CharacteristicLookup, Direction, Translator};

pub use message::{Hap, Inbound, Outbound};
pub use store::CharacteristicStore;

mod message;
mod store;

/// Stops on io errors, lines that are not a message are logged and
/// skipped.
pub fn run(
    translator: &Translator,
    input: impl BufRead,
    mut output: impl Write,
) -> Result<()> {
    let mut store = CharacteristicStore::default();

    for (line_number, line) in input.lines().enumerate() {
        let line = line.wrap_err("Could not read message")?;
        if line.trim().is_empty() {
            continue;
        }

        let outbound = match handle(translator, &line, &mut store) {
            Ok(outbound) => outbound,
            Err(report) => {
                let line_number = line_number + 1;
                warn!("Skipping message on line {line_number}: {report:?}");
                continue;
            }
        };

        serde_json::to_writer(&mut output, &outbound)
            .wrap_err("Could not write translated message")?;
        writeln!(output).wrap_err("Could not write translated message")?;
        output.flush().wrap_err("Could not flush output")?;
    }

    Ok(())
}

#[instrument(skip(translator, store))]
fn handle(
    translator: &Translator,
    line: &str,
    store: &mut CharacteristicStore,
) -> Result<Outbound> {
    let inbound: Inbound = serde_json::from_str(line)
        .wrap_err("Could not deserialize message")
        .with_note(|| format!("got: {line}"))?;

    let all_chars = inbound.hap.as_ref().map(|hap| &hap.all_chars);
    let payload = {
        let lookup = |characteristic: Characteristic| {
            all_chars
                .and_then(|chars| chars.characteristic(characteristic))
                .or_else(|| store.characteristic(characteristic))
        };
        translator.translate(&inbound.payload, Some(&lookup))
    };

    if translator.direction() == Direction::HomekitToZigbee {
        store.remember(&inbound.payload);
    }

    Ok(Outbound { payload })
}
