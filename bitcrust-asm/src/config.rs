use std::env;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::str::FromStr;

use clap::{crate_version, App, AppSettings, Arg, ArgMatches, SubCommand};
use log::Level;
use serde_derive::{Deserialize, Serialize};
use thiserror::Error;


#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read {path}: {source}")]
    Io { path: PathBuf, source: io::Error },

    #[error("malformed config file {path}: {source}")]
    Toml { path: PathBuf, source: toml::de::Error },

    #[error("unknown log level '{0}'")]
    LogLevel(String),
}


#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Hex,
    Json,
}

impl Default for OutputFormat {
    fn default() -> Self {
        OutputFormat::Hex
    }
}

#[derive(Deserialize, Serialize, Debug, Default, PartialEq, Eq)]
pub struct ConfigFile {
    pub log_level: Option<String>,
    pub output:    Option<OutputFormat>,
}

impl ConfigFile {

    /// Reads the config file at `path`; a missing file gives the defaults
    pub fn load(path: &PathBuf) -> Result<ConfigFile, ConfigError> {
        if !path.exists() {
            return Ok(ConfigFile::default());
        }

        let s = fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.clone(), source })?;

        toml::from_str(&s)
            .map_err(|source| ConfigError::Toml { path: path.clone(), source })
    }
}


#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: Level,
    pub output:    OutputFormat,
}

impl<'a, 'b> Config {
    pub fn from_args(matches: &ArgMatches) -> Result<Config, ConfigError> {

        let config_file_path: PathBuf = matches.value_of("config")
            .map(PathBuf::from)
            .unwrap_or_else(default_path);

        let config_from_file = ConfigFile::load(&config_file_path)?;

        let log_level = match matches.occurrences_of("debug") {
            0 => match config_from_file.log_level {
                Some(ref level) => Level::from_str(level)
                    .map_err(|_| ConfigError::LogLevel(level.clone()))?,
                None => Level::Warn,
            },
            1 => Level::Info,
            2 => Level::Debug,
            _ => Level::Trace,
        };

        let output = if matches.is_present("json") {
            OutputFormat::Json
        } else {
            config_from_file.output.unwrap_or_default()
        };

        Ok(Config {
            log_level: log_level,
            output:    output,
        })
    }

    pub fn matches() -> App<'a, 'b> {
        App::new("bitcrust-asm")
            .version(crate_version!())
            .author("Chris M., Tomas W.")
            .about("Assembles scripts and decodes transactions, blocks and hashes from hex")
            .setting(AppSettings::SubcommandRequiredElseHelp)
            .arg(Arg::with_name("config")
                .short("c")
                .long("config")
                .takes_value(true)
                .help("Location of the config file, default: $HOME/.bitcrust-asm.toml"))
            .arg(Arg::with_name("debug")
                .short("d")
                .long("debug")
                .multiple(true)
                .help("Turn debugging information on"))
            .arg(Arg::with_name("json")
                .short("j")
                .long("json")
                .help("Print results as JSON"))
            .subcommand(SubCommand::with_name("assemble")
                .about("Assemble a script to hex")
                .arg(Arg::with_name("script")
                    .help("Script text; read from stdin if absent")
                    .multiple(true)))
            .subcommand(SubCommand::with_name("decode-tx")
                .about("Decode a hex transaction")
                .arg(Arg::with_name("hex")
                    .required(true)))
            .subcommand(SubCommand::with_name("decode-block")
                .about("Decode a hex block")
                .arg(Arg::with_name("hex")
                    .required(true)))
            .subcommand(SubCommand::with_name("hash")
                .about("Parse a hash from hex")
                .arg(Arg::with_name("hex")
                    .required(true))
                .arg(Arg::with_name("name")
                    .short("n")
                    .long("name")
                    .takes_value(true)
                    .default_value("hash")
                    .help("Field name used in errors")))
    }
}

fn default_path() -> PathBuf {
    let mut path = env::var_os("HOME").map(PathBuf::from).unwrap_or_default();
    path.push(".bitcrust-asm.toml");
    path
}
