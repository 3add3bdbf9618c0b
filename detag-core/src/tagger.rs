//! # Tagging-Engine — Lexikon, Morphologie- und Kontextregeln
//!
//! Vergibt STTS-Tags in drei Stufen:
//!
//! 1. **Lexikon**: direkter Nachschlag (exakt, dann kleingeschrieben).
//! 2. **Morphologie**: Suffixregeln für unbekannte Wörter
//!    (z. B. "-ung" → `NN`, "-lich" → `ADJD`), längster Treffer gewinnt.
//! 3. **Ratewert**: Zahl → `CARDNUM`, Großschreibung → `NE`, sonst `NN`
//!    (das Standard-Tripel aus der Konfiguration).
//!
//! Anschließend korrigieren Kontextregeln die geratenen Tags anhand des
//! Vorgängertags (nach einem Artikel ist ein unbekanntes
//! großgeschriebenes Wort eher `NN` als `NE`). Lexikontreffer werden von
//! Kontextregeln nicht angefasst.
//!
//! Die vier Ressourcen (Lexikon, Häufigkeiten, Morphologie, Kontext)
//! werden einmal beim Start geladen und danach nur gelesen. Fehlende
//! oder fehlerhafte Dateien sind beim Laden fatal ([`TaggerError`]);
//! zur Laufzeit gibt es keine Fehlerpfade, nur definierte Rückfälle.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use tracing::info;

use crate::lexicon::{SEED_CONTEXT_RULES, SEED_FREQUENCY, SEED_LEXICON, SEED_SUFFIX_RULES};
use crate::tagset::SttsTag;

/// Fehler beim Laden der Tagger-Ressourcen.
#[derive(Debug, thiserror::Error)]
pub enum TaggerError {
    #[error("Ressource {path:?} konnte nicht gelesen werden")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("ungültiger Eintrag in {path:?}, Zeile {line}: {content:?}")]
    MalformedEntry {
        path: PathBuf,
        line: usize,
        content: String,
    },
}

/// Das Standard-Tripel für Wörter ohne Lexikon- oder Regeltreffer.
#[derive(Debug, Clone)]
pub struct DefaultTags {
    /// kleingeschriebenes unbekanntes Wort
    pub word: SttsTag,
    /// großgeschriebenes unbekanntes Wort
    pub name: SttsTag,
    /// Ziffernfolge
    pub number: SttsTag,
}

impl Default for DefaultTags {
    fn default() -> Self {
        Self {
            word: SttsTag::Nn,
            name: SttsTag::Ne,
            number: SttsTag::Cardnum,
        }
    }
}

/// Konstruktionsdaten für einen dateigestützten Tagger: die vier
/// Ressourcenpfade, das Standard-Tripel und die Sprachkennung.
#[derive(Debug, Clone)]
pub struct TaggerConfig {
    pub lexicon: PathBuf,
    pub frequency: PathBuf,
    pub morphology: PathBuf,
    pub context: PathBuf,
    pub default: DefaultTags,
    pub language: String,
}

impl TaggerConfig {
    /// Die vier Ressourcenpfade nach dem Namensschema
    /// `de-lexicon.txt`, `de-frequency.txt`, `de-morphology.txt`,
    /// `de-context.txt` unterhalb von `dir`.
    pub fn from_dir(dir: &Path) -> Self {
        Self {
            lexicon: dir.join("de-lexicon.txt"),
            frequency: dir.join("de-frequency.txt"),
            morphology: dir.join("de-morphology.txt"),
            context: dir.join("de-context.txt"),
            default: DefaultTags::default(),
            language: "de".to_string(),
        }
    }
}

/// Suffixregel aus der Morphologie-Ressource.
#[derive(Debug, Clone)]
struct SuffixRule {
    suffix: String,
    tag: SttsTag,
}

/// Kontextregel: hatte der Vorgänger `prev` und das Wort den Ratewert
/// `from`, wird es zu `to` umgetaggt.
#[derive(Debug, Clone)]
struct ContextRule {
    prev: SttsTag,
    from: SttsTag,
    to: SttsTag,
}

/// Gliederungszeichen wie "1." oder "31.".
static ORDINAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.$").expect("gültiges Muster"));

/// Zahlform: "42", "3,14", "1.234".
static NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+(?:[.,]\d+)*$").expect("gültiges Muster"));

/// Regelbasierter STTS-Tagger.
pub struct BrillTagger {
    lexicon: HashMap<String, SttsTag>,
    frequency: HashMap<String, f64>,
    morphology: Vec<SuffixRule>,
    context: Vec<ContextRule>,
    default: DefaultTags,
    language: String,
}

impl BrillTagger {
    /// Tagger mit den eingebauten Startdaten (siehe [`crate::lexicon`]).
    pub fn builtin() -> Self {
        let lexicon = SEED_LEXICON
            .iter()
            .map(|(w, t)| (w.to_string(), SttsTag::from_label(t)))
            .collect();
        let frequency = SEED_FREQUENCY
            .iter()
            .map(|(w, f)| (w.to_string(), *f))
            .collect();
        let morphology = SEED_SUFFIX_RULES
            .iter()
            .map(|(s, t)| SuffixRule {
                suffix: s.to_string(),
                tag: SttsTag::from_label(t),
            })
            .collect();
        let context = SEED_CONTEXT_RULES
            .iter()
            .map(|(p, f, t)| ContextRule {
                prev: SttsTag::from_label(p),
                from: SttsTag::from_label(f),
                to: SttsTag::from_label(t),
            })
            .collect();
        Self {
            lexicon,
            frequency,
            morphology,
            context,
            default: DefaultTags::default(),
            language: "de".to_string(),
        }
    }

    /// Lädt alle vier Ressourcen aus den konfigurierten Dateien.
    /// Jede Datei: ein Eintrag pro Zeile, `#`-Zeilen und Leerzeilen
    /// werden übersprungen.
    pub fn from_files(config: &TaggerConfig) -> Result<Self, TaggerError> {
        let lexicon = parse_lexicon(&read(&config.lexicon)?, &config.lexicon)?;
        let frequency = parse_frequency(&read(&config.frequency)?, &config.frequency)?;
        let morphology = parse_morphology(&read(&config.morphology)?, &config.morphology)?;
        let context = parse_context(&read(&config.context)?, &config.context)?;
        info!(
            language = %config.language,
            lexicon = lexicon.len(),
            morphology = morphology.len(),
            context = context.len(),
            "Tagger-Ressourcen geladen"
        );
        Ok(Self {
            lexicon,
            frequency,
            morphology,
            context,
            default: config.default.clone(),
            language: config.language.clone(),
        })
    }

    /// Sprachkennung ("de").
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Korpushäufigkeiten, für die Schlüsselwortsuche.
    pub fn frequency(&self) -> &HashMap<String, f64> {
        &self.frequency
    }

    /// Vergibt für jedes Wort genau ein STTS-Tag. Das Ergebnis hat
    /// dieselbe Länge und Reihenfolge wie die Eingabe.
    pub fn find_tags(&self, words: &[String]) -> Vec<SttsTag> {
        let mut tags = Vec::with_capacity(words.len());
        let mut guessed = Vec::with_capacity(words.len());
        for word in words {
            let (tag, was_guessed) = self.tag_word(word);
            tags.push(tag);
            guessed.push(was_guessed);
        }
        // Kontextregeln nur auf Ratewerte anwenden
        for i in 1..tags.len() {
            if !guessed[i] {
                continue;
            }
            for rule in &self.context {
                if tags[i - 1] == rule.prev && tags[i] == rule.from {
                    tags[i] = rule.to.clone();
                    break;
                }
            }
        }
        tags
    }

    /// Ein einzelnes Wort taggen. Das zweite Element sagt, ob das Tag
    /// nur geraten wurde (und damit für Kontextregeln freigegeben ist).
    fn tag_word(&self, word: &str) -> (SttsTag, bool) {
        if let Some(tag) = punctuation_tag(word) {
            return (tag, false);
        }
        if ORDINAL.is_match(word) {
            return (SttsTag::Linum, false);
        }
        if NUMBER.is_match(word) {
            return (self.default.number.clone(), false);
        }
        if let Some(tag) = self.lexicon.get(word) {
            return (tag.clone(), false);
        }
        let lower = word.to_lowercase();
        if let Some(tag) = self.lexicon.get(&lower) {
            return (tag.clone(), false);
        }
        // Morphologie: längster passender Suffix
        let mut best: Option<&SuffixRule> = None;
        for rule in &self.morphology {
            if lower.ends_with(&rule.suffix)
                && lower.chars().count() > rule.suffix.chars().count() + 1
                && best.map_or(true, |b| rule.suffix.len() > b.suffix.len())
            {
                best = Some(rule);
            }
        }
        if let Some(rule) = best {
            return (rule.tag.clone(), false);
        }
        // Ratewert nach Großschreibung
        let capitalized = word.chars().next().is_some_and(char::is_uppercase);
        if capitalized {
            (self.default.name.clone(), true)
        } else {
            (self.default.word.clone(), true)
        }
    }
}

/// STTS-Tags für reine Interpunktionstokens.
fn punctuation_tag(token: &str) -> Option<SttsTag> {
    if token.chars().any(char::is_alphanumeric) {
        return None;
    }
    let tag = match token {
        "." | "…" => SttsTag::SentEnd,
        "," => SttsTag::Comma,
        ";" => SttsTag::Semicolon,
        ":" => SttsTag::Colon,
        "!" => SttsTag::Exclam,
        "?" => SttsTag::Question,
        "(" | "[" | "{" => SttsTag::ParenOpen,
        ")" | "]" | "}" => SttsTag::ParenClose,
        "„" | "‚" | "«" | "‹" => SttsTag::QuoteOpen,
        "\"" | "'" | "“" | "”" | "‘" | "’" | "»" | "›" => SttsTag::QuoteClose,
        _ => SttsTag::Xy,
    };
    Some(tag)
}

fn read(path: &Path) -> Result<String, TaggerError> {
    fs::read_to_string(path).map_err(|source| TaggerError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Zeilen einer Ressource: Inhalt ohne Kommentare und Leerzeilen,
/// mit Original-Zeilennummer.
fn entries(content: &str) -> impl Iterator<Item = (usize, &str)> {
    content
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
}

fn parse_lexicon(content: &str, path: &Path) -> Result<HashMap<String, SttsTag>, TaggerError> {
    let mut lexicon = HashMap::new();
    for (line, text) in entries(content) {
        let mut parts = text.split_whitespace();
        match (parts.next(), parts.next(), parts.next()) {
            (Some(word), Some(tag), None) => {
                lexicon.insert(word.to_string(), SttsTag::from_label(tag));
            }
            _ => {
                return Err(TaggerError::MalformedEntry {
                    path: path.to_path_buf(),
                    line,
                    content: text.to_string(),
                })
            }
        }
    }
    Ok(lexicon)
}

fn parse_frequency(content: &str, path: &Path) -> Result<HashMap<String, f64>, TaggerError> {
    let mut frequency = HashMap::new();
    for (line, text) in entries(content) {
        let malformed = || TaggerError::MalformedEntry {
            path: path.to_path_buf(),
            line,
            content: text.to_string(),
        };
        let mut parts = text.split_whitespace();
        let word = parts.next().ok_or_else(malformed)?;
        let value: f64 = parts
            .next()
            .and_then(|v| v.parse().ok())
            .ok_or_else(malformed)?;
        frequency.insert(word.to_string(), value);
    }
    Ok(frequency)
}

fn parse_morphology(content: &str, path: &Path) -> Result<Vec<SuffixRule>, TaggerError> {
    let mut rules = Vec::new();
    for (line, text) in entries(content) {
        let mut parts = text.split_whitespace();
        match (parts.next(), parts.next(), parts.next()) {
            (Some(suffix), Some(tag), None) => rules.push(SuffixRule {
                suffix: suffix.to_string(),
                tag: SttsTag::from_label(tag),
            }),
            _ => {
                return Err(TaggerError::MalformedEntry {
                    path: path.to_path_buf(),
                    line,
                    content: text.to_string(),
                })
            }
        }
    }
    Ok(rules)
}

fn parse_context(content: &str, path: &Path) -> Result<Vec<ContextRule>, TaggerError> {
    let mut rules = Vec::new();
    for (line, text) in entries(content) {
        let mut parts = text.split_whitespace();
        match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(prev), Some(from), Some(to), None) => rules.push(ContextRule {
                prev: SttsTag::from_label(prev),
                from: SttsTag::from_label(from),
                to: SttsTag::from_label(to),
            }),
            _ => {
                return Err(TaggerError::MalformedEntry {
                    path: path.to_path_buf(),
                    line,
                    content: text.to_string(),
                })
            }
        }
    }
    Ok(rules)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag_one(tagger: &BrillTagger, word: &str) -> SttsTag {
        tagger.find_tags(&[word.to_string()]).remove(0)
    }

    #[test]
    fn test_lexicon_lookup() {
        let tagger = BrillTagger::builtin();
        assert_eq!(tag_one(&tagger, "kommt"), SttsTag::Vvfin);
        assert_eq!(tag_one(&tagger, "Unglück"), SttsTag::Nn);
        assert_eq!(tag_one(&tagger, "und"), SttsTag::Kon);
    }

    #[test]
    fn test_lowercase_fallback_lookup() {
        let tagger = BrillTagger::builtin();
        // Satzanfang: "Ein" steht nur kleingeschrieben im Lexikon
        assert_eq!(tag_one(&tagger, "Ein"), SttsTag::Art);
    }

    #[test]
    fn test_default_heuristics() {
        let tagger = BrillTagger::builtin();
        assert_eq!(tag_one(&tagger, "Zzzz"), SttsTag::Ne);
        assert_eq!(tag_one(&tagger, "zzzz"), SttsTag::Nn);
        assert_eq!(tag_one(&tagger, "42"), SttsTag::Cardnum);
        assert_eq!(tag_one(&tagger, "3,14"), SttsTag::Cardnum);
        assert_eq!(tag_one(&tagger, "31."), SttsTag::Linum);
    }

    #[test]
    fn test_punctuation_tags() {
        let tagger = BrillTagger::builtin();
        assert_eq!(tag_one(&tagger, "."), SttsTag::SentEnd);
        assert_eq!(tag_one(&tagger, ","), SttsTag::Comma);
        assert_eq!(tag_one(&tagger, "?"), SttsTag::Question);
        assert_eq!(tag_one(&tagger, "("), SttsTag::ParenOpen);
    }

    #[test]
    fn test_morphology_suffix_rules() {
        let tagger = BrillTagger::builtin();
        assert_eq!(tag_one(&tagger, "Verspätung"), SttsTag::Nn);
        assert_eq!(tag_one(&tagger, "freundlich"), SttsTag::Adjd);
        assert_eq!(tag_one(&tagger, "studieren"), SttsTag::Vvinf);
    }

    #[test]
    fn test_context_rule_corrects_guess() {
        let tagger = BrillTagger::builtin();
        let words: Vec<String> = ["die", "Szbwma"].iter().map(|s| s.to_string()).collect();
        let tags = tagger.find_tags(&words);
        // ohne Kontextregel wäre das unbekannte Wort NE
        assert_eq!(tags[1], SttsTag::Nn);
    }

    #[test]
    fn test_context_rule_not_applied_to_lexicon_hits() {
        let tagger = BrillTagger::builtin();
        let words: Vec<String> = ["die", "Schweiz"].iter().map(|s| s.to_string()).collect();
        let tags = tagger.find_tags(&words);
        assert_eq!(tags[1], SttsTag::Ne);
    }

    #[test]
    fn test_output_length_matches_input() {
        let tagger = BrillTagger::builtin();
        let words: Vec<String> = ["Ein", "Wort", "nach", "dem", "anderen", "."]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(tagger.find_tags(&words).len(), words.len());
    }

    #[test]
    fn test_parse_lexicon_format() {
        let path = Path::new("test-lexicon.txt");
        let lexicon = parse_lexicon("# Kommentar\nHaus NN\n\nkommt VVFIN\n", path).unwrap();
        assert_eq!(lexicon.get("Haus"), Some(&SttsTag::Nn));
        assert_eq!(lexicon.get("kommt"), Some(&SttsTag::Vvfin));
    }

    #[test]
    fn test_parse_lexicon_rejects_malformed_line() {
        let path = Path::new("test-lexicon.txt");
        let err = parse_lexicon("Haus NN extra Spalte\n", path).unwrap_err();
        match err {
            TaggerError::MalformedEntry { line, .. } => assert_eq!(line, 1),
            other => panic!("unerwarteter Fehler: {other:?}"),
        }
    }

    #[test]
    fn test_parse_frequency_rejects_bad_number() {
        let path = Path::new("test-frequency.txt");
        assert!(parse_frequency("der abc\n", path).is_err());
        assert!(parse_frequency("der 0.9\n", path).is_ok());
    }

    #[test]
    fn test_from_files_missing_file_is_fatal() {
        let config = TaggerConfig {
            lexicon: PathBuf::from("/nonexistent/de-lexicon.txt"),
            frequency: PathBuf::from("/nonexistent/de-frequency.txt"),
            morphology: PathBuf::from("/nonexistent/de-morphology.txt"),
            context: PathBuf::from("/nonexistent/de-context.txt"),
            default: DefaultTags::default(),
            language: "de".to_string(),
        };
        assert!(matches!(
            BrillTagger::from_files(&config),
            Err(TaggerError::Io { .. })
        ));
    }
}
