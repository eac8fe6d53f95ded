use anyhow::Result;

use crate::args::{Cli, Command};

mod inspect;
mod owner;
mod type_label;

pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Inspect {
            input,
            object_id,
            version,
            config,
            hex_owner,
            surface_unresolved,
        } => inspect::run(inspect::InspectArgs {
            input,
            object_id,
            version,
            config,
            hex_owner,
            surface_unresolved,
        }),
        Command::Owner { raw, hex } => owner::run(&raw, hex),
        Command::TypeLabel { type_string, prefix } => type_label::run(&type_string, prefix.as_deref()),
    }
}
