//! CLI definition and handlers

use crate::{input, prompt};
use anyhow::{Context, Result};
use caesar_analyzer::{cipher, Dictionary, KeyRecovery};
use caesar_core::{
    AnalyzerConfig, Direction, FrequencyTable, Recovery, Shift, DEFAULT_DICTIONARY_PATH,
};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

/// Accept only paths naming an existing regular file
fn parse_existing_file(s: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(s);
    if path.is_file() {
        Ok(path)
    } else if path.exists() {
        Err(format!("'{}' is not a regular file", s))
    } else {
        Err(format!("'{}' does not exist", s))
    }
}

/// Parse a match threshold in (0, 1]
fn parse_threshold(s: &str) -> Result<f64, String> {
    let t: f64 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;
    if t > 0.0 && t <= 1.0 {
        Ok(t)
    } else {
        Err("threshold must be greater than 0 and at most 1".to_string())
    }
}

/// Caesar cipher with frequency-analysis key recovery
#[derive(Parser, Debug)]
#[command(name = "caesar")]
#[command(
    version,
    about = "Encrypt and decrypt text with the Caesar cipher, or recover an unknown shift by frequency analysis",
    after_help = "\
Examples:
  caesar \"Hello, World!\" 3                 Encrypt literal text
  caesar -d \"Khoor, Zruog!\" 3              Decrypt with a known shift
  caesar -d -f secret.txt                  Recover the shift, write decryption_text
  caesar -d -f \"Wkh fdw\" --path words.txt  Use a custom dictionary
  caesar                                   Interactive mode"
)]
pub struct Cli {
    /// Text to transform, or the path of a file holding it (omit for interactive mode)
    pub text: Option<String>,

    /// Shift amount (0-25); not needed with --freq-analysis
    #[arg(value_parser = clap::value_parser!(u8).range(0..26))]
    pub shift: Option<u8>,

    /// Decrypt instead of encrypt
    #[arg(long, short = 'd')]
    pub decrypt: bool,

    /// Recover the shift by frequency analysis (requires --decrypt)
    #[arg(long, short = 'f', requires = "decrypt")]
    pub freq_analysis: bool,

    /// Dictionary used to validate candidate plaintexts (default: /usr/share/dict/words)
    #[arg(long, value_parser = parse_existing_file)]
    pub path: Option<PathBuf>,

    /// JSON reference frequency table, e.g. {"A": 0.082, ...} (default: English)
    #[arg(long, value_parser = parse_existing_file)]
    pub freq_table: Option<PathBuf>,

    /// JSON analyzer configuration file
    #[arg(long, value_parser = parse_existing_file)]
    pub config: Option<PathBuf>,

    /// Fraction of dictionary words needed to accept a shift
    #[arg(long, value_parser = parse_threshold)]
    pub threshold: Option<f64>,

    /// Strip punctuation from words before dictionary lookup
    #[arg(long)]
    pub strip_punctuation: bool,

    /// Print the recovery result as JSON
    #[arg(long, requires = "freq_analysis")]
    pub json: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,
}

impl Cli {
    /// Checks clap cannot express on its own.
    pub fn validate(&self) -> Result<(), clap::Error> {
        self.validate_with_default_dictionary(Path::new(DEFAULT_DICTIONARY_PATH))
    }

    /// Same as [`Cli::validate`], with the fallback dictionary location supplied by the caller.
    pub fn validate_with_default_dictionary(
        &self,
        default_dictionary: &Path,
    ) -> Result<(), clap::Error> {
        if self.text.is_none() && self.uses_batch_flags() {
            return Err(Cli::command().error(
                ErrorKind::MissingRequiredArgument,
                "TEXT is required with --decrypt, --freq-analysis, --path, --freq-table, \
                 --config, --threshold, --strip-punctuation or --json",
            ));
        }
        if self.text.is_some() && self.shift.is_none() && !self.freq_analysis {
            return Err(Cli::command().error(
                ErrorKind::MissingRequiredArgument,
                "a SHIFT is required unless --freq-analysis is used",
            ));
        }
        if self.freq_analysis && self.path.is_none() && !default_dictionary.is_file() {
            return Err(Cli::command().error(
                ErrorKind::ValueValidation,
                format!(
                    "default dictionary '{}' does not exist; pass --path",
                    default_dictionary.display()
                ),
            ));
        }
        Ok(())
    }

    /// Flags that only make sense with a TEXT argument; interactive mode ignores them.
    fn uses_batch_flags(&self) -> bool {
        self.decrypt
            || self.freq_analysis
            || self.path.is_some()
            || self.freq_table.is_some()
            || self.config.is_some()
            || self.threshold.is_some()
            || self.strip_punctuation
            || self.json
    }

    pub fn direction(&self) -> Direction {
        if self.decrypt {
            Direction::Decrypt
        } else {
            Direction::Encrypt
        }
    }

    pub fn dictionary_path(&self) -> PathBuf {
        self.path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DICTIONARY_PATH))
    }

    /// Config file (if any) with command-line overrides applied.
    pub fn analyzer_config(&self) -> Result<AnalyzerConfig> {
        let mut config = match &self.config {
            Some(path) => AnalyzerConfig::from_json_file(path)?,
            None => AnalyzerConfig::default(),
        };
        if let Some(threshold) = self.threshold {
            config.match_threshold = threshold;
        }
        if self.strip_punctuation {
            config.strip_punctuation = true;
        }
        config.validate()?;
        Ok(config)
    }

    fn reference_table(&self) -> Result<FrequencyTable> {
        Ok(match &self.freq_table {
            Some(path) => FrequencyTable::load(path)?,
            None => FrequencyTable::english(),
        })
    }
}

/// Run with the process's stdin/stdout, writing output files to the working directory.
pub fn run(cli: Cli) -> Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    execute(&cli, &mut stdin.lock(), &mut stdout.lock(), Path::new("."))
}

pub fn execute<R: BufRead, W: Write>(
    cli: &Cli,
    stdin: &mut R,
    out: &mut W,
    output_dir: &Path,
) -> Result<()> {
    let Some(arg) = cli.text.as_deref() else {
        let answers = prompt::collect(stdin, out)?;
        let result = cipher::apply(&answers.text, answers.shift, answers.direction);
        writeln!(out, "{result}")?;
        return Ok(());
    };

    let source = input::resolve(arg);
    let text = input::read(&source)?;
    let direction = cli.direction();

    let result = if cli.freq_analysis {
        if cli.shift.is_some() {
            tracing::warn!("ignoring SHIFT: --freq-analysis recovers it");
        }
        let recovery = recover(cli, &text)?;
        if cli.json {
            writeln!(out, "{}", serde_json::to_string_pretty(&recovery)?)?;
        } else {
            writeln!(out, "Recovered shift: {}", recovery.shift)?;
            writeln!(out, "{}", recovery.plaintext)?;
        }
        recovery.plaintext
    } else {
        // validate() guarantees a shift here; clap has already range-checked it
        let shift = Shift::new(i64::from(cli.shift.unwrap_or_default()))?;
        let result = cipher::apply(&text, shift, direction);
        writeln!(out, "{result}")?;
        result
    };

    if source.is_file() {
        input::write_output(output_dir, direction, &result)?;
    }
    Ok(())
}

fn recover(cli: &Cli, ciphertext: &str) -> Result<Recovery> {
    let table = cli.reference_table()?;
    let config = cli.analyzer_config()?;
    let dict_path = cli.dictionary_path();
    let dictionary = Dictionary::load(&dict_path)?;
    tracing::info!(
        dictionary = %dict_path.display(),
        words = dictionary.len(),
        threshold = config.match_threshold,
        "starting frequency analysis"
    );

    KeyRecovery::new(&table, &dictionary)
        .with_config(config)
        .recover(ciphertext)
        .context("frequency analysis failed")
}
