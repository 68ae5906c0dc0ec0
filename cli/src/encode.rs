#![deny(missing_docs)]

//! # Encode Command
//!
//! Styles a JSON-described value and prints the wire text.

use crate::error::{CliError, CliResult};
use paramstyle_core::{ParamSpec, ParamStyle};
use std::fs;
use std::path::PathBuf;

/// Arguments for the encode command.
#[derive(clap::Args, Debug, Clone)]
pub struct EncodeArgs {
    /// Serialization style (simple, label, matrix, form, spaceDelimited,
    /// pipeDelimited, deepObject).
    #[clap(long, env = "PARAMSTYLE_STYLE", default_value = "simple")]
    pub style: String,

    /// Explode modifier. Defaults to true for `form`, false otherwise.
    #[clap(long, env = "PARAMSTYLE_EXPLODE")]
    pub explode: Option<bool>,

    /// Parameter name.
    #[clap(long)]
    pub name: String,

    /// JSON value to style. `null` is rejected as absent.
    #[clap(conflicts_with = "input", required_unless_present = "input")]
    pub value: Option<String>,

    /// Read the JSON value from a file instead.
    #[clap(long)]
    pub input: Option<PathBuf>,
}

impl EncodeArgs {
    fn spec(&self) -> CliResult<ParamSpec> {
        let style: ParamStyle = self.style.parse()?;
        let spec = ParamSpec::new(self.name.clone(), style);
        Ok(match self.explode {
            Some(explode) => spec.with_explode(explode),
            None => spec,
        })
    }

    fn load_value(&self) -> CliResult<serde_json::Value> {
        let text = match (&self.value, &self.input) {
            (Some(inline), _) => inline.clone(),
            (None, Some(path)) => {
                log::debug!("reading value from {}", path.display());
                fs::read_to_string(path)?
            }
            (None, None) => {
                return Err(CliError::General(
                    "Either a value or --input must be given".to_string(),
                ))
            }
        };
        Ok(serde_json::from_str(&text)?)
    }
}

/// Executes the encode command, returning the styled text.
///
/// # Arguments
///
/// * `args` - Command arguments.
pub fn execute(args: &EncodeArgs) -> CliResult<String> {
    let spec = args.spec()?;
    let value = args.load_value()?;
    log::debug!(
        "encoding '{}' with style={} explode={}",
        spec.name,
        spec.style,
        spec.explode
    );
    Ok(spec.encode(&value)?)
}
