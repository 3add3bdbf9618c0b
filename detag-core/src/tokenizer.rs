//! # Tokenisierung mit Abkürzungs-Unterdrückung
//!
//! Zerlegt Rohtext in Sätze aus Einzeltokens (Wörter, Interpunktion).
//! Die Satzgrenzenerkennung stützt sich auf eine Unterdrückungsliste:
//! ein Punkt unmittelbar nach einer gelisteten Abkürzung beendet den
//! Satz **nicht**.
//!
//! Die Liste enthält Titel ("Dr.", "Prof."), lateinische Abkürzungen
//! ("etc.", "i.e."), gängige deutsche Abkürzungen ("bzw.", "vgl."),
//! juristische Abkürzungen ("BGBl.", "ABl."), zweiteilige Abkürzungen
//! mit innerem Leerzeichen ("z. B.") sowie die Ordinalzahlen "0." bis
//! "31.", damit Datumsangaben keine Satzgrenzen erzeugen.
//!
//! ## Beispiel
//!
//! ```rust
//! use detag_core::tokenizer::{find_tokens, TokenizerOptions};
//!
//! let sentences = find_tokens("Dr. Müller kam. Er blieb.", &TokenizerOptions::default());
//! assert_eq!(sentences.len(), 2);
//! assert_eq!(sentences[0], vec!["Dr.", "Müller", "kam", "."]);
//! ```

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Abkürzungen, nach denen ein Punkt keine Satzgrenze ist.
/// Die Ordinalzahlen "0." bis "31." kommen zur Laufzeit dazu.
const GERMAN_ABBREVIATIONS: &[&str] = &[
    "Abs.", "Abt.", "Ass.", "Br.", "Ch.", "Chr.", "Cie.", "Co.", "Dept.", "Diff.",
    "Dr.", "Eidg.", "Exp.", "Fam.", "Fr.", "Hrsg.", "Inc.", "Inv.", "Jh.", "Jt.", "Kt.",
    "Mio.", "Mrd.", "Mt.", "Mte.", "Nr.", "Nrn.", "Ord.", "Ph.", "Phil.", "Pkt.",
    "Prof.", "Pt.", "S.", "St.", "Stv.", "Tit.", "VII.", "al.", "begr.", "bzw.",
    "chem.", "dent.", "dipl.", "e.g.", "ehem.", "etc.", "excl.", "exkl.", "gem.", "hum.",
    "i.e.", "incl.", "ing.", "inkl.", "int.", "iur.", "lic.", "med.", "no.", "oec.",
    "phil.", "phys.", "pp.", "psych.", "publ.", "rer.", "sc.", "soz.", "spez.", "stud.",
    "theol.", "usw.", "v.", "vet.", "vgl.", "vol.", "wiss.",
    "d.h.", "h.c.", "o.ä.", "u.a.", "z.B.", "z.T.", "z.Zt.",
    "z. B.", "d. h.", "h. c.", "o. ä.", "u. a.", "z. T.", "z. Zt.",
    "BGBl.", "ABl.", "Bundesgesetzbl.", "BAnz.", "Dipl.-Ing.", "Ing.", "grad.", "bzgl.",
];

/// Die Standardliste, einmal beim ersten Zugriff gebaut und danach
/// unveränderlich (prozessweiter Lesezugriff ohne Sperren).
pub static DEFAULT_ABBREVIATIONS: LazyLock<HashSet<String>> = LazyLock::new(|| {
    let mut set: HashSet<String> = GERMAN_ABBREVIATIONS.iter().map(|s| s.to_string()).collect();
    for day in 0u32..=31 {
        set.insert(format!("{day}."));
    }
    set
});

/// Zahlen mit Dezimal- oder Tausendertrennzeichen: "3,14", "1.234".
static NUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+(?:[.,]\d+)*$").expect("gültiges Muster"));

/// Abkürzungsform mit inneren Punkten: "z.B.", "i.d.R.".
static INNER_PERIOD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:\p{L}{1,4}\.){2,}$").expect("gültiges Muster"));

/// Konfiguration des Tokenisierers.
///
/// Beide Felder haben dokumentierte Voreinstellungen: die deutsche
/// Abkürzungsliste und eine leere Ersetzungstabelle. Wer eigene Werte
/// setzt, überschreibt die Voreinstellung vollständig.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenizerOptions {
    /// Zeichenketten, nach denen ein Punkt keine Satzgrenze ist.
    pub abbreviations: HashSet<String>,
    /// Textersetzungen, die vor der Zerlegung angewendet werden.
    pub replace: HashMap<String, String>,
}

impl Default for TokenizerOptions {
    fn default() -> Self {
        Self {
            abbreviations: DEFAULT_ABBREVIATIONS.clone(),
            replace: HashMap::new(),
        }
    }
}

/// Zeichen, die am Tokenanfang abgetrennt werden.
const OPENERS: &[char] = &['(', '[', '{', '"', '\'', '„', '‚', '«', '‹', '“', '‘'];

/// Zeichen, die am Tokenende abgetrennt werden.
const TRAILERS: &[char] = &[
    '.', ',', ';', ':', '!', '?', ')', ']', '}', '"', '\'', '“', '”', '’', '»', '›', '…',
];

/// Schließende Zeichen, die nach einem Satzendezeichen noch zum selben
/// Satz gehören (`Er kam."` bleibt ein Satz).
const CLOSERS: &[&str] = &["\"", "'", "”", "“", "’", ")", "]", "}", "»", "›"];

/// Satzendezeichen.
const TERMINATORS: &[&str] = &[".", "!", "?", "…"];

/// Zerlegt Text in Sätze aus Tokens.
///
/// Interpunktion wird von Wörtern abgetrennt, außer der Punkt gehört zu
/// einer Abkürzung aus `opts.abbreviations` oder zu einer Zahl. Die
/// Ersetzungstabelle `opts.replace` wird vor der Zerlegung angewendet.
pub fn find_tokens(text: &str, opts: &TokenizerOptions) -> Vec<Vec<String>> {
    let mut text = text.to_string();
    for (from, to) in &opts.replace {
        text = text.replace(from.as_str(), to);
    }

    let chunks: Vec<&str> = text.split_whitespace().collect();
    let mut sentences: Vec<Vec<String>> = Vec::new();
    let mut current: Vec<String> = Vec::new();
    let mut pending_close = false;

    let mut i = 0;
    while i < chunks.len() {
        // Zweiteilige Abkürzungen ("z. B.") über die Chunk-Grenze zusammenfassen
        let mut emitted: Vec<String> = Vec::new();
        if let Some(next) = chunks.get(i + 1) {
            if merge_two_word(chunks[i], next, &opts.abbreviations, &mut emitted) {
                i += 2;
            }
        }
        if emitted.is_empty() {
            split_chunk(chunks[i], &opts.abbreviations, &mut emitted);
            i += 1;
        }

        for token in emitted {
            let is_closer = CLOSERS.contains(&token.as_str());
            if pending_close && !is_closer {
                sentences.push(std::mem::take(&mut current));
                pending_close = false;
            }
            if TERMINATORS.contains(&token.as_str()) {
                pending_close = true;
            }
            current.push(token);
        }
    }

    if !current.is_empty() {
        sentences.push(current);
    }
    sentences
}

/// Fasst zwei Chunks zu einer zweiteiligen Abkürzung ("z. B.")
/// zusammen, auch wenn am zweiten Chunk noch Interpunktion hängt
/// ("z. B.,"). Liefert `true`, wenn zusammengefasst wurde.
fn merge_two_word(
    first: &str,
    next: &str,
    abbreviations: &HashSet<String>,
    out: &mut Vec<String>,
) -> bool {
    let mut core = next;
    let mut trailing: Vec<String> = Vec::new();
    loop {
        let joined = format!("{first} {core}");
        if abbreviations.contains(&joined) {
            out.push(joined);
            out.extend(trailing.into_iter().rev());
            return true;
        }
        match core.chars().last() {
            Some(last) if core.chars().count() > 1 && TRAILERS.contains(&last) => {
                trailing.push(last.to_string());
                core = &core[..core.len() - last.len_utf8()];
            }
            _ => return false,
        }
    }
}

/// Trennt führende und nachlaufende Interpunktion von einem Chunk ab.
fn split_chunk(chunk: &str, abbreviations: &HashSet<String>, out: &mut Vec<String>) {
    let mut core = chunk;

    // führende Zeichen einzeln abtrennen
    while let Some(first) = core.chars().next() {
        if core.chars().count() > 1 && OPENERS.contains(&first) {
            out.push(first.to_string());
            core = &core[first.len_utf8()..];
        } else {
            break;
        }
    }

    // nachlaufende Zeichen abtrennen, solange der Rest keine geschützte Form ist
    let mut trailing: Vec<String> = Vec::new();
    while let Some(last) = core.chars().last() {
        if keep_intact(core, abbreviations) {
            break;
        }
        if core.chars().count() > 1 && TRAILERS.contains(&last) {
            trailing.push(last.to_string());
            core = &core[..core.len() - last.len_utf8()];
        } else {
            break;
        }
    }

    if !core.is_empty() {
        out.push(core.to_string());
    }
    out.extend(trailing.into_iter().rev());
}

/// Formen, deren Punkt zum Token gehört: gelistete Abkürzungen, Zahlen
/// und Mehrfachabkürzungen mit inneren Punkten.
fn keep_intact(token: &str, abbreviations: &HashSet<String>) -> bool {
    abbreviations.contains(token) || NUMERIC.is_match(token) || INNER_PERIOD.is_match(token)
}
