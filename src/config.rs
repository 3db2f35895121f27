//! Command-line configuration for the driver.
//!
//! Flags may be written with one or two leading dashes, and `--file` takes
//! its value either as the next argument or after `=`.

use std::path::PathBuf;

use thiserror::Error;

use crate::lexer::lexer::LexerConfig;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    /// Source file to run, required unless `repl` is set
    pub file: Option<PathBuf>,
    /// Print the token stream
    pub lex: bool,
    /// Print the parsed program
    pub parse: bool,
    /// Print the evaluated value
    pub eval: bool,
    /// Read lines from stdin instead of a file
    pub repl: bool,
    /// Trace every tokenizer step
    pub verbose: bool,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("filepath not provided")]
    MissingFile,
    #[error("flag {flag:?} needs a value")]
    MissingValue { flag: String },
    #[error("flag {flag:?} does not take a value")]
    UnexpectedValue { flag: String },
    #[error("unknown argument {argument:?}")]
    UnknownArgument { argument: String },
}

impl Config {
    /// Parses the arguments following the program name.
    pub fn from_args<I>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = Config::default();
        let mut args = args.into_iter();

        while let Some(argument) = args.next() {
            let Some(flag) = argument
                .strip_prefix("--")
                .or_else(|| argument.strip_prefix('-'))
            else {
                return Err(ConfigError::UnknownArgument { argument });
            };

            let (name, inline_value) = match flag.split_once('=') {
                Some((name, value)) => (name, Some(value.to_string())),
                None => (flag, None),
            };

            let switch = match name {
                "file" => {
                    let value = inline_value.or_else(|| args.next()).filter(|v| !v.is_empty());
                    let Some(value) = value else {
                        return Err(ConfigError::MissingValue {
                            flag: String::from("file"),
                        });
                    };
                    config.file = Some(PathBuf::from(value));
                    continue;
                }
                "lex" => &mut config.lex,
                "parse" => &mut config.parse,
                "eval" => &mut config.eval,
                "repl" => &mut config.repl,
                "verbose" => &mut config.verbose,
                _ => {
                    return Err(ConfigError::UnknownArgument {
                        argument: argument.clone(),
                    })
                }
            };

            if inline_value.is_some() {
                return Err(ConfigError::UnexpectedValue {
                    flag: name.to_string(),
                });
            }
            *switch = true;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.repl && self.file.is_none() {
            return Err(ConfigError::MissingFile);
        }

        Ok(())
    }

    /// Name used for positions in error messages.
    pub fn file_name(&self) -> Option<String> {
        self.file
            .as_ref()
            .and_then(|path| path.file_name())
            .map(|name| name.to_string_lossy().into_owned())
    }

    pub fn lexer_config(&self) -> LexerConfig {
        LexerConfig {
            verbose: self.verbose,
            ..LexerConfig::default()
        }
    }
}
