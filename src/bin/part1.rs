use anyhow::{Context, Result};
use clap::Parser;
use crossed_wires::{CLIArgs, Error};

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let wires = crossed_wires::read_wires(&args.input_path).with_context(|| {
        format!(
            "Failed to read wires from given file({}).",
            args.input_path.display()
        )
    })?;
    if wires.len() != 2 {
        return Err(Error::InvalidWireCount(wires.len()).into());
    }

    let dist = wires[0].closest_cross_dist(&wires[1]);
    println!(
        "The crossing of the two given wires closest to the origin is {} away by Manhattan distance.",
        dist
    );

    Ok(())
}
