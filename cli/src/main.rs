#![deny(missing_docs)]

//! # Paramstyle CLI
//!
//! Command Line Interface for OpenAPI parameter styling.
//!
//! Supported Commands:
//! - `encode`: Styles a JSON value as a path, query or header parameter.
//! - `styles`: Lists the recognized style names.

use clap::{Parser, Subcommand};
use paramstyle_core::ParamStyle;

use crate::error::CliResult;

mod encode;
mod error;

#[derive(Parser, Debug)]
#[clap(author, version, about = "OpenAPI parameter styling CLI")]
struct Cli {
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Style a JSON value according to style/explode rules.
    Encode(encode::EncodeArgs),
    /// List the recognized style names.
    Styles,
}

fn main() -> CliResult<()> {
    env_logger::init();
    let cli = Cli::parse();

    match &cli.command {
        Commands::Encode(args) => {
            println!("{}", encode::execute(args)?);
        }
        Commands::Styles => {
            for style in ParamStyle::ALL {
                println!("{}", style);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli_structure() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_encode() {
        let cli = Cli::try_parse_from([
            "paramstyle",
            "encode",
            "--style",
            "form",
            "--explode",
            "false",
            "--name",
            "color",
            r#"{"B":150}"#,
        ])
        .unwrap();
        match cli.command {
            Commands::Encode(args) => {
                assert_eq!(args.explode, Some(false));
                assert_eq!(encode::execute(&args).unwrap(), "color=B,150");
            }
            other => panic!("unexpected command {:?}", other),
        }
    }
}
