use serde_derive::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::io;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Control {
    // MIDI controller number to listen to. Values above 127 are accepted but
    // can never match an incoming message.
    pub cc_number: u8,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Config {
    pub control: Control,
}

#[derive(Error, Debug)]
pub struct ParseError {
    pub filename: String,
    pub message: String,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Failed to parse {}: {}", self.filename, self.message)
    }
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    ParseError(ParseError),

    #[error(transparent)]
    TomlDeError(#[from] toml::de::Error),

    #[error(transparent)]
    TomlSerError(#[from] toml::ser::Error),

    #[error(transparent)]
    IOError(#[from] io::Error),

    #[error(transparent)]
    AtomicIOError(#[from] atomicwrites::Error<io::Error>),

    #[error("cannot determine the user configuration directory")]
    NoConfigDir,
}

pub static FILENAME: &str = "ab_switch.toml";

impl Config {
    pub fn new() -> Config {
        Config {
            control: Control { cc_number: 64 },
        }
    }

    /// The per-user configuration file location, e.g.
    /// `~/.config/ab_switch/ab_switch.toml`.
    pub fn default_path() -> Result<PathBuf, Error> {
        let dirs = directories::ProjectDirs::from("", "", "ab_switch").ok_or(Error::NoConfigDir)?;
        Ok(dirs.config_dir().join(FILENAME))
    }

    // If no file is found, returns default config instead of error
    pub fn load(filename: &Path) -> Result<Config, Error> {
        let contents = match fs::read_to_string(filename) {
            Ok(contents) => contents,
            Err(error) if error.kind() == io::ErrorKind::NotFound => return Ok(Config::new()),
            Err(error) => return Err(Error::IOError(error)),
        };
        let config = match toml::from_str(&contents) {
            Ok(contents) => contents,
            Err(error) if error.line_col().is_some() => {
                return Err(Error::ParseError(ParseError {
                    filename: filename.display().to_string(),
                    message: format!("{}", error),
                }));
            }
            Err(error) => return Err(Error::TomlDeError(error)),
        };
        println!("Loaded config from {}", filename.display());
        Ok(config)
    }

    pub fn save(self, filename: &Path) -> Result<(), Error> {
        if let Some(parent) = filename.parent() {
            fs::create_dir_all(parent)?;
        }
        let contents = toml::to_string(&self)?;
        let writer = atomicwrites::AtomicFile::new(filename, atomicwrites::AllowOverwrite);
        writer.write(|f| f.write_all(contents.as_bytes()))?;
        Ok(())
    }
}
