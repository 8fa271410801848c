use clap::{Args, Parser, Subcommand, ValueEnum};
use crossterm::style::Stylize;
use serde::{Deserialize, Serialize};
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use varna_core::core::alphabet::HALANTA;
use varna_core::core::articulation::SignatureLabels;
use varna_core::{
    clean, fix_anuswara, flatten, join_varna, split_varna, split_varna_flat, syllables, Config,
    Dimension, Nested, Result, Varna, VarnaEngine, VarnaError,
};

#[derive(Parser)]
#[command(name = "varna")]
#[command(about = "Syllables, varna viccheda and articulation of Devanagari text")]
#[command(version)]
#[command(arg_required_else_help = true)]
struct Cli {
    /// JSON configuration file
    #[arg(short = 'c', long, global = true)]
    config: Option<PathBuf>,

    /// Structured JSON output
    #[arg(long, global = true)]
    json: bool,

    /// More log output on stderr (repeatable)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct Input {
    /// Text to process (read from --file or stdin when absent)
    text: Option<String>,

    /// Read the text from a file
    #[arg(short, long)]
    file: Option<PathBuf>,
}

impl Input {
    fn read(&self) -> Result<String> {
        if let Some(text) = &self.text {
            return Ok(text.clone());
        }
        if let Some(path) = &self.file {
            return Ok(std::fs::read_to_string(path)?);
        }
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        Ok(text)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Strip text down to the Devanagari alphabet
    Clean {
        #[command(flatten)]
        input: Input,

        /// Keep dandas and general punctuation
        #[arg(long)]
        punctuation: bool,

        /// Keep Devanagari digits
        #[arg(long)]
        digits: bool,

        /// Drop whitespace as well
        #[arg(long)]
        no_spaces: bool,

        /// Extra characters to keep
        #[arg(long)]
        allow: Option<String>,
    },

    /// Split words into syllables
    Syllables {
        #[command(flatten)]
        input: Input,

        /// One vowel or consonant per syllable
        #[arg(short, long)]
        technical: bool,
    },

    /// Decompose text into varnas
    SplitVarna {
        #[command(flatten)]
        input: Input,

        /// Keep vowel signs and marks as separate tokens
        #[arg(short, long)]
        technical: bool,

        /// Single token list with separators instead of lines and words
        #[arg(long)]
        flat: bool,
    },

    /// Join varnas back into text
    JoinVarna {
        #[command(flatten)]
        input: Input,

        /// The tokens came from a technical split
        #[arg(short, long)]
        technical: bool,
    },

    /// Write anusvara before a stop consonant as the varga nasal
    FixAnuswara {
        #[command(flatten)]
        input: Input,
    },

    /// Name the pratyahara covering a set of letters
    FormPratyahara {
        /// Letters, e.g. "यवरल"
        letters: String,
    },

    /// List the letter sets a pratyahara can denote
    ResolvePratyahara {
        /// Pratyahara, e.g. "यण्"
        name: String,
    },

    /// Label every letter with one articulation dimension
    Ucchaarana {
        #[command(flatten)]
        input: Input,

        #[arg(short, long, value_enum, default_value = "sthaana")]
        dimension: DimensionChoice,

        /// Short category tags instead of Sanskrit names
        #[arg(short, long)]
        abbrev: bool,
    },

    /// Label every letter with all three articulation dimensions
    Signature {
        #[command(flatten)]
        input: Input,

        /// Short category tags instead of Sanskrit names
        #[arg(short, long)]
        abbrev: bool,
    },
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum DimensionChoice {
    /// Place of articulation
    Sthaana,
    /// Internal effort
    Aabhyantara,
    /// External effort
    Baahya,
}

impl From<DimensionChoice> for Dimension {
    fn from(choice: DimensionChoice) -> Self {
        match choice {
            DimensionChoice::Sthaana => Dimension::Sthaana,
            DimensionChoice::Aabhyantara => Dimension::Aabhyantara,
            DimensionChoice::Baahya => Dimension::Baahya,
        }
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Prints `value` as JSON, or the plain rendering otherwise.
fn emit<T: Serialize>(json: bool, value: &T, plain: impl FnOnce() -> String) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(value)?);
    } else {
        println!("{}", plain());
    }
    Ok(())
}

/// Lines, one per text line, with words separated by `" | "`.
fn render_nested<T>(nested: &[Vec<Vec<T>>], item: impl Fn(&T) -> String, sep: &str) -> String {
    nested
        .iter()
        .map(|line| {
            line.iter()
                .map(|word| word.iter().map(&item).collect::<Vec<_>>().join(sep))
                .collect::<Vec<_>>()
                .join(" | ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// JSON output of `split-varna`, with or without `--flat`.
#[derive(Deserialize)]
#[serde(untagged)]
enum SplitJson {
    Flat(Vec<Varna>),
    Nested(Nested<Varna>),
}

/// Reads the plain rendering of a split back into tokens, or its JSON
/// output.
fn parse_tokens(text: &str) -> Result<Vec<Varna>> {
    let trimmed = text.trim();
    if trimmed.starts_with('[') {
        return Ok(match serde_json::from_str(trimmed)? {
            SplitJson::Flat(tokens) => tokens,
            SplitJson::Nested(nested) => flatten(nested),
        });
    }
    let mut tokens = Vec::new();
    for (i, line) in trimmed.lines().filter(|l| !l.trim().is_empty()).enumerate() {
        if i > 0 {
            tokens.push(Varna::Separator('\n'));
        }
        for (j, word) in line.split(" | ").enumerate() {
            if j > 0 {
                tokens.push(Varna::Separator(' '));
            }
            for token in word.split_whitespace() {
                tokens.push(token.parse()?);
            }
        }
    }
    Ok(tokens)
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    debug!(?config, "Configuration loaded");
    let json = cli.json;

    match cli.command {
        Commands::Clean {
            input,
            punctuation,
            digits,
            no_spaces,
            allow,
        } => {
            let mut options = config.clean.clone();
            options.punctuation |= punctuation;
            options.digits |= digits;
            options.spaces &= !no_spaces;
            options.allow.extend(allow.iter().flat_map(|a| a.chars()));
            let cleaned = clean(&input.read()?, &options);
            emit(json, &cleaned, || cleaned.clone())
        }
        Commands::Syllables { input, technical } => {
            let nested = syllables(&input.read()?, technical || config.technical);
            emit(json, &nested, || render_nested(&nested, String::clone, " "))
        }
        Commands::SplitVarna {
            input,
            technical,
            flat,
        } => {
            let text = input.read()?;
            let technical = technical || config.technical;
            let nested = split_varna(&text, technical);
            let plain = || render_nested(&nested, ToString::to_string, " ");
            if flat {
                emit(json, &split_varna_flat(&text, technical), plain)
            } else {
                emit(json, &nested, plain)
            }
        }
        Commands::JoinVarna { input, technical } => {
            let tokens = parse_tokens(&input.read()?)?;
            let joined = join_varna(&tokens, technical || config.technical);
            emit(json, &joined, || joined.clone())
        }
        Commands::FixAnuswara { input } => {
            let fixed = fix_anuswara(&input.read()?);
            emit(json, &fixed, || fixed.clone())
        }
        Commands::FormPratyahara { letters } => {
            let engine = VarnaEngine::new()?;
            let letters: Vec<char> = letters
                .chars()
                .filter(|c| !c.is_whitespace() && *c != ',' && *c != HALANTA)
                .collect();
            let name = engine.form_pratyahara(&letters)?;
            emit(json, &name, || name.to_string())
        }
        Commands::ResolvePratyahara { name } => {
            let engine = VarnaEngine::new()?;
            let sets = engine.resolve_pratyahara(&name);
            if sets.is_empty() {
                return Err(VarnaError::UnresolvedPratyahara(name));
            }
            let sets: Vec<String> = sets.into_iter().map(|set| set.into_iter().collect()).collect();
            emit(json, &sets, || sets.join("\n"))
        }
        Commands::Ucchaarana {
            input,
            dimension,
            abbrev,
        } => {
            let engine = VarnaEngine::new()?;
            let nested = engine.ucchaarana(&input.read()?, dimension.into(), abbrev || config.abbrev);
            emit(json, &nested, || {
                render_nested(&nested, |(letter, label)| format!("{letter}[{label}]"), " ")
            })
        }
        Commands::Signature { input, abbrev } => {
            let engine = VarnaEngine::new()?;
            let abbrev = abbrev || config.abbrev;
            let nested: Vec<Vec<Vec<(String, SignatureLabels)>>> = engine
                .signature(&input.read()?)
                .into_iter()
                .map(|line| {
                    line.into_iter()
                        .map(|word| {
                            word.into_iter()
                                .map(|(letter, signature)| (letter, signature.labels(abbrev)))
                                .collect()
                        })
                        .collect()
                })
                .collect();
            emit(json, &nested, || {
                nested
                    .iter()
                    .flatten()
                    .flatten()
                    .map(|(letter, labels)| {
                        format!(
                            "{letter}\t{}\t{}\t{}",
                            labels.sthaana, labels.aabhyantara, labels.baahya
                        )
                    })
                    .collect::<Vec<_>>()
                    .join("\n")
            })
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}
