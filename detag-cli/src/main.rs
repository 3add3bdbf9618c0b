//! detag — Wortarten-Annotation für deutsche Texte auf der Kommandozeile.
//!
//! Liest Text aus einem Argument, einer Datei oder von Stdin und gibt
//! die Annotation als Zeilen oder als JSON aus.

use std::fs;
use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use detag_core::{GermanParser, ParseOptions, TaggerConfig, Tagset};
use tracing::info;

#[derive(Parser)]
#[command(name = "detag")]
#[command(version, about = "Regelbasierte Wortarten-Annotation für das Deutsche", long_about = None)]
struct Cli {
    /// Tagset der Ausgabe: stts, penn oder universal
    #[arg(short, long, default_value = "penn")]
    tagset: String,

    /// Ressourcen-Verzeichnis (Lexikon, Regeln); sonst eingebaute Daten
    #[arg(short, long, value_name = "DIR")]
    resources: Option<PathBuf>,

    /// Ausgabe als JSON statt als Zeilen
    #[arg(short, long)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Vollständige Annotation: Tokens, Tags, Grundformen
    Parse {
        /// Zu annotierender Text; "-" liest von Stdin
        text: String,

        /// Grundformen mit ausgeben
        #[arg(short, long)]
        lemmata: bool,
    },

    /// Nur (Token, Tag)-Paare
    Tag {
        /// Zu taggender Text; "-" liest von Stdin
        text: String,
    },

    /// Nur Satz- und Tokengrenzen
    Tokenize {
        /// Zu zerlegender Text; "-" liest von Stdin
        text: String,
    },

    /// Die wichtigsten Schlüsselwörter des Textes
    Keywords {
        /// Zu analysierender Text; "-" liest von Stdin
        text: String,

        /// Anzahl der Schlüsselwörter
        #[arg(short = 'n', long, default_value_t = 10)]
        top: usize,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "detag_core=warn,detag=warn".into()),
        )
        .init();

    let cli = Cli::parse();

    let tagset: Tagset = cli
        .tagset
        .parse()
        .with_context(|| format!("unbekanntes Tagset: {}", cli.tagset))?;

    let parser = match &cli.resources {
        Some(dir) => {
            let config = TaggerConfig::from_dir(dir);
            GermanParser::from_files(&config)
                .with_context(|| format!("Ressourcen aus {} nicht ladbar", dir.display()))?
        }
        None => GermanParser::new(),
    };
    info!(tagset = ?tagset, "Annotations-Pipeline bereit");

    match cli.command {
        Commands::Parse { text, lemmata } => {
            let text = read_input(&text)?;
            let opts = ParseOptions {
                tagset,
                lemmata,
                ..Default::default()
            };
            let sentences = parser.parse(&text, &opts);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&sentences)?);
            } else {
                for sentence in &sentences {
                    for word in &sentence.words {
                        match &word.lemma {
                            Some(lemma) => {
                                println!("{}\t{}\t{}", word.word, word.tag.label(), lemma)
                            }
                            None => println!("{}\t{}", word.word, word.tag.label()),
                        }
                    }
                    println!();
                }
            }
        }
        Commands::Tag { text } => {
            let text = read_input(&text)?;
            let tagged = parser.tag(&text, tagset);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&tagged)?);
            } else {
                for sentence in &tagged {
                    let line: Vec<String> = sentence
                        .iter()
                        .map(|(word, tag)| format!("{word}/{tag}"))
                        .collect();
                    println!("{}", line.join(" "));
                }
            }
        }
        Commands::Tokenize { text } => {
            let text = read_input(&text)?;
            let sentences = parser.find_tokens(&text);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&sentences)?);
            } else {
                for sentence in &sentences {
                    println!("{}", sentence.join(" "));
                }
            }
        }
        Commands::Keywords { text, top } => {
            let text = read_input(&text)?;
            let keywords = parser.keywords(&text, top);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&keywords)?);
            } else {
                for keyword in &keywords {
                    println!("{keyword}");
                }
            }
        }
    }

    Ok(())
}

/// "-" liest Stdin, ein existierender Pfad die Datei, sonst gilt das
/// Argument selbst als Text.
fn read_input(arg: &str) -> anyhow::Result<String> {
    if arg == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Stdin nicht lesbar")?;
        return Ok(buffer);
    }
    let path = PathBuf::from(arg);
    if path.is_file() {
        return fs::read_to_string(&path)
            .with_context(|| format!("{} nicht lesbar", path.display()));
    }
    Ok(arg.to_string())
}
