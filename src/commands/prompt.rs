//! Operator prompts for `init`.
//!
//! Input and output are generic so tests can script the answers.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

pub const DEFAULT_ROOT: &str = "/root";

#[derive(Debug, Error)]
pub enum PromptError {
    #[error("prompt I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("input ended before '{0}' was answered")]
    Eof(&'static str),
}

/// One question asked of the operator.
#[derive(Clone, Copy)]
pub struct Field {
    pub name: &'static str,
    pub message: &'static str,
    pub default: Option<&'static str>,
    pub validate: fn(&str) -> Result<(), String>,
}

fn any_value(_: &str) -> Result<(), String> {
    Ok(())
}

fn absolute_path(value: &str) -> Result<(), String> {
    if Path::new(value).is_absolute() {
        Ok(())
    } else {
        Err(format!("'{}' is not an absolute path", value))
    }
}

pub const ROOT_FIELD: Field = Field {
    name: "root",
    message: "Root path where the app folders are located",
    default: Some(DEFAULT_ROOT),
    validate: any_value,
};

pub const OUTPUT_PATH_FIELD: Field = Field {
    name: "outputPath",
    message: "Absolute path of the nginx conf file generated on each switch",
    default: None,
    validate: absolute_path,
};

/// Answers collected by `init`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitAnswers {
    pub root: String,
    pub output_path: PathBuf,
}

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Ask until the answer is non-empty (or defaulted) and valid.
    pub fn ask(&mut self, field: &Field) -> Result<String, PromptError> {
        loop {
            match field.default {
                Some(default) => write!(self.output, "{}: {} ({}): ", field.name, field.message, default)?,
                None => write!(self.output, "{}: {}: ", field.name, field.message)?,
            }
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(PromptError::Eof(field.name));
            }

            let answer = match (line.trim(), field.default) {
                ("", Some(default)) => default,
                ("", None) => {
                    writeln!(self.output, "{} is required", field.name)?;
                    continue;
                }
                (value, _) => value,
            };

            match (field.validate)(answer) {
                Ok(()) => return Ok(answer.to_string()),
                Err(reason) => writeln!(self.output, "invalid {}: {}", field.name, reason)?,
            }
        }
    }

    /// Collect `root` and `outputPath`.
    pub fn collect_init(&mut self) -> Result<InitAnswers, PromptError> {
        let root = self.ask(&ROOT_FIELD)?;
        let output_path = PathBuf::from(self.ask(&OUTPUT_PATH_FIELD)?);
        Ok(InitAnswers { root, output_path })
    }
}
