/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use anyhow::Result;
use chess_arbiter::{Cli, Engine, EngineCommand};
use clap::Parser;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut engine = Engine::from_cli(&cli)?;

    // Startup commands run first, in order
    for command in &cli.commands {
        match command.parse::<EngineCommand>() {
            Ok(cmd) => engine.send_command(cmd)?,
            Err(e) => eprintln!("ERROR on input {command:?}:\n{e}"),
        }
    }

    if let Err(e) = engine.run() {
        eprintln!("{} encountered an error: {e}", engine.name());
    }

    Ok(())
}
