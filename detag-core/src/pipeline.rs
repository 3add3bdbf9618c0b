//! # Annotations-Pipeline
//!
//! [`GermanParser`] verbindet Tokenisierer, Tagging-Engine, Tagset-
//! Abbildung und Lemmatisierung zu einer synchronen Pipeline:
//!
//! 1. **Tokenisierung**: Text → Sätze aus Tokens (Abkürzungsliste).
//! 2. **Tagging**: Tokens → STTS-Tags. Das Lexikon führt die Schweizer
//!    Schreibung, deshalb wird "ß" vor dem Nachschlag durch "ss"
//!    ersetzt und die Originalform danach wiederhergestellt — für
//!    Aufrufer unsichtbar.
//! 3. **Tagset-Wahl**: STTS unverändert, Penn über die feste Tabelle,
//!    Universal über die Ausnahmegruppen.
//! 4. **Lemmatisierung** (optional): Grundform je Token, kleingeschrieben.
//!
//! Anzahl und Reihenfolge der Tokens bleiben über alle Stufen exakt
//! erhalten. Die Pipeline hält keinen veränderlichen Zustand; ein
//! [`GermanParser`] kann von mehreren Threads gleichzeitig gelesen
//! werden, [`GermanParser::parse_many`] nutzt das für unabhängige Texte.
//!
//! ## Beispiel
//!
//! ```rust
//! use detag_core::{GermanParser, ParseOptions, Tagset};
//!
//! let parser = GermanParser::new();
//! let opts = ParseOptions {
//!     tagset: Tagset::Universal,
//!     lemmata: true,
//!     ..Default::default()
//! };
//! let sentences = parser.parse("Ein Unglück kommt selten allein.", &opts);
//! assert_eq!(sentences[0].words.len(), 6);
//! assert_eq!(sentences[0].words[2].lemma.as_deref(), Some("kommen"));
//! ```

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::inflect::GermanInflector;
use crate::keywords;
use crate::lemma::derive_lemma;
use crate::tagger::{BrillTagger, TaggerConfig, TaggerError};
use crate::tagset::{stts_to_penn, stts_to_universal, AnyTag, SttsTag, Tagset};
use crate::tokenizer::{find_tokens, TokenizerOptions};

/// Ein annotiertes Token: Oberflächenform, Tag im gewünschten Tagset
/// und (falls angefordert) die kleingeschriebene Grundform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Word {
    pub word: String,
    pub tag: AnyTag,
    pub lemma: Option<String>,
}

/// Ein Satz als geordnete Tokenfolge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sentence {
    pub words: Vec<Word>,
}

impl Sentence {
    /// Projektion auf (Oberflächenform, Tag-Label)-Paare.
    pub fn tagged_pairs(&self) -> Vec<(String, String)> {
        self.words
            .iter()
            .map(|w| (w.word.clone(), w.tag.label().to_string()))
            .collect()
    }
}

/// Optionen für [`GermanParser::parse`], mit dokumentierten
/// Voreinstellungen: Penn-Tagset, keine Lemmata, deutsche
/// Abkürzungsliste.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ParseOptions {
    /// Tagset der Ausgabe.
    pub tagset: Tagset,
    /// Grundformen mit ableiten.
    pub lemmata: bool,
    /// Tokenisierer-Konfiguration.
    pub tokenizer: TokenizerOptions,
}

/// Die Annotations-Pipeline für deutsche Texte.
pub struct GermanParser {
    tagger: BrillTagger,
    inflector: GermanInflector,
}

impl GermanParser {
    /// Pipeline mit den eingebauten Startdaten.
    pub fn new() -> Self {
        Self {
            tagger: BrillTagger::builtin(),
            inflector: GermanInflector::new(),
        }
    }

    /// Pipeline mit dateigestützten Ressourcen. Fehlende oder
    /// fehlerhafte Dateien sind hier fatal; zur Laufzeit gibt es
    /// keine Fehlerpfade mehr.
    pub fn from_files(config: &TaggerConfig) -> Result<Self, TaggerError> {
        Ok(Self {
            tagger: BrillTagger::from_files(config)?,
            inflector: GermanInflector::new(),
        })
    }

    /// Zerlegt Text in Sätze aus Tokens (deutsche Abkürzungsliste).
    pub fn find_tokens(&self, text: &str) -> Vec<Vec<String>> {
        find_tokens(text, &TokenizerOptions::default())
    }

    /// Wie [`GermanParser::find_tokens`], mit eigener Konfiguration.
    pub fn find_tokens_with(&self, text: &str, opts: &TokenizerOptions) -> Vec<Vec<String>> {
        find_tokens(text, opts)
    }

    /// Taggt eine bereits tokenisierte Wortfolge im gewünschten Tagset.
    /// Ausgabe-Länge und -Reihenfolge entsprechen exakt der Eingabe.
    pub fn find_tags(&self, words: &[String], tagset: Tagset) -> Vec<Word> {
        self.stts_tags(words)
            .into_iter()
            .zip(words.iter())
            .map(|(stts, word)| Word {
                word: word.clone(),
                tag: convert(stts, tagset),
                lemma: None,
            })
            .collect()
    }

    /// Die komplette Pipeline: tokenisieren, taggen, Tagset abbilden,
    /// optional lemmatisieren.
    pub fn parse(&self, text: &str, opts: &ParseOptions) -> Vec<Sentence> {
        let sentences = find_tokens(text, &opts.tokenizer);
        debug!(sentences = sentences.len(), "Text tokenisiert");
        sentences
            .into_iter()
            .map(|tokens| {
                let stts = self.stts_tags(&tokens);
                let words = tokens
                    .into_iter()
                    .zip(stts)
                    .map(|(word, stts)| {
                        let lemma = opts
                            .lemmata
                            .then(|| derive_lemma(&word, &stts, &self.inflector));
                        Word {
                            tag: convert(stts, opts.tagset),
                            word,
                            lemma,
                        }
                    })
                    .collect();
                Sentence { words }
            })
            .collect()
    }

    /// Tokenisiert und taggt, reduziert auf (Oberflächenform, Tag)-Paare
    /// pro Satz.
    pub fn tag(&self, text: &str, tagset: Tagset) -> Vec<Vec<(String, String)>> {
        let opts = ParseOptions {
            tagset,
            ..Default::default()
        };
        self.parse(text, &opts)
            .iter()
            .map(Sentence::tagged_pairs)
            .collect()
    }

    /// Die `top` bestbewerteten Schlüsselwörter des Textes, gewichtet
    /// mit der Korpushäufigkeit des Taggers.
    pub fn keywords(&self, text: &str, top: usize) -> Vec<String> {
        keywords::find_keywords(text, top, self.tagger.frequency())
    }

    /// Annotiert mehrere unabhängige Texte parallel. Jeder Text
    /// durchläuft die Pipeline für sich; das Ergebnis steht in
    /// Eingabereihenfolge.
    pub fn parse_many(&self, texts: &[&str], opts: &ParseOptions) -> Vec<Vec<Sentence>> {
        texts.par_iter().map(|text| self.parse(text, opts)).collect()
    }

    /// STTS-Tags über die Engine, mit transparenter "ß"→"ss"-Ersetzung.
    /// Getaggt wird die Ersatzform, zurück kommt ein Tag je Original-Token.
    fn stts_tags(&self, words: &[String]) -> Vec<SttsTag> {
        let swapped: Vec<String> = words.iter().map(|w| w.replace('ß', "ss")).collect();
        self.tagger.find_tags(&swapped)
    }
}

impl Default for GermanParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Tagset-Auswahl: STTS ist die Identität, Penn die feste Tabelle,
/// Universal die Abbildung mit Ausnahmegruppen.
fn convert(stts: SttsTag, tagset: Tagset) -> AnyTag {
    match tagset {
        Tagset::Stts => AnyTag::Stts(stts),
        Tagset::Penn => AnyTag::Penn(stts_to_penn(&stts)),
        Tagset::Universal => AnyTag::Universal(stts_to_universal(&stts)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(sentence: &Sentence) -> Vec<&str> {
        sentence.words.iter().map(|w| w.tag.label()).collect()
    }

    #[test]
    fn test_end_to_end_universal_with_lemmata() {
        let parser = GermanParser::new();
        let opts = ParseOptions {
            tagset: Tagset::Universal,
            lemmata: true,
            ..Default::default()
        };
        let sentences = parser.parse("Ein Unglück kommt selten allein.", &opts);
        assert_eq!(sentences.len(), 1);
        let words = &sentences[0].words;
        assert_eq!(words.len(), 6);
        assert_eq!(words[0].word, "Ein");
        assert_eq!(words[0].tag.label(), "DET");
        assert_eq!(words[2].word, "kommt");
        assert_eq!(words[2].tag.label(), "VERB");
        assert_eq!(words[2].lemma.as_deref(), Some("kommen"));
        assert_eq!(words[5].word, ".");
        assert_eq!(words[5].tag.label(), "PUNC");
    }

    #[test]
    fn test_eszett_roundtrip_restores_surface_forms() {
        let parser = GermanParser::new();
        let opts = ParseOptions::default();
        let sentences = parser.parse("Die Straße ist groß.", &opts);
        let words = &sentences[0].words;
        // Oberflächenformen unverändert, obwohl intern "ss" getaggt wurde
        let surfaces: Vec<&str> = words.iter().map(|w| w.word.as_str()).collect();
        assert_eq!(surfaces, vec!["Die", "Straße", "ist", "groß", "."]);
        // das Lexikon kennt nur "Strasse"/"gross" — die Tags stimmen trotzdem
        assert_eq!(words[1].tag.label(), "NN");
        assert_eq!(words[3].tag.label(), "JJ");
    }

    #[test]
    fn test_token_count_and_order_preserved() {
        let parser = GermanParser::new();
        let tokens: Vec<String> = ["Wrdlbrmpfd", "äöü", "42", "Qxy"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let words = parser.find_tags(&tokens, Tagset::Penn);
        assert_eq!(words.len(), tokens.len());
        for (word, token) in words.iter().zip(tokens.iter()) {
            assert_eq!(&word.word, token);
        }
    }

    #[test]
    fn test_tagset_selection() {
        let parser = GermanParser::new();
        let tokens: Vec<String> = ["ohne"].iter().map(|s| s.to_string()).collect();
        assert_eq!(
            parser.find_tags(&tokens, Tagset::Stts)[0].tag.label(),
            "APPR"
        );
        assert_eq!(parser.find_tags(&tokens, Tagset::Penn)[0].tag.label(), "IN");
        assert_eq!(
            parser.find_tags(&tokens, Tagset::Universal)[0].tag.label(),
            "ADP"
        );
    }

    #[test]
    fn test_lemmata_only_when_requested() {
        let parser = GermanParser::new();
        let without = parser.parse("Die Kinder spielen.", &ParseOptions::default());
        assert!(without[0].words.iter().all(|w| w.lemma.is_none()));

        let opts = ParseOptions {
            lemmata: true,
            ..Default::default()
        };
        let with = parser.parse("Die Kinder spielen.", &opts);
        for word in &with[0].words {
            let lemma = word.lemma.as_deref().expect("Lemma fehlt");
            assert_eq!(lemma, lemma.to_lowercase());
        }
        // NNS → Singular
        assert_eq!(with[0].words[1].lemma.as_deref(), Some("kind"));
    }

    #[test]
    fn test_lemma_identical_across_tagsets() {
        let parser = GermanParser::new();
        let mut lemmas = Vec::new();
        for tagset in [Tagset::Stts, Tagset::Penn, Tagset::Universal] {
            let opts = ParseOptions {
                tagset,
                lemmata: true,
                ..Default::default()
            };
            let parsed = parser.parse("Ein Unglück kommt selten allein.", &opts);
            lemmas.push(
                parsed[0]
                    .words
                    .iter()
                    .map(|w| w.lemma.clone().unwrap())
                    .collect::<Vec<_>>(),
            );
        }
        assert_eq!(lemmas[0], lemmas[1]);
        assert_eq!(lemmas[1], lemmas[2]);
    }

    #[test]
    fn test_tag_projection() {
        let parser = GermanParser::new();
        let tagged = parser.tag("Der Hund bellt.", Tagset::Penn);
        assert_eq!(tagged.len(), 1);
        assert_eq!(tagged[0][0], ("Der".to_string(), "DT".to_string()));
        assert_eq!(tagged[0][1].0, "Hund");
    }

    #[test]
    fn test_sentence_boundaries_respect_abbreviations() {
        let parser = GermanParser::new();
        let sentences = parser.parse("Dr. Müller kam.", &ParseOptions::default());
        assert_eq!(sentences.len(), 1);
        let sentence_labels = labels(&sentences[0]);
        assert_eq!(sentence_labels.last(), Some(&"."));
    }

    #[test]
    fn test_parse_many_matches_sequential() {
        let parser = GermanParser::new();
        let texts = ["Es regnet.", "Der Hund bellt.", "Dr. Müller kam."];
        let opts = ParseOptions {
            lemmata: true,
            ..Default::default()
        };
        let parallel = parser.parse_many(&texts, &opts);
        let sequential: Vec<_> = texts.iter().map(|t| parser.parse(t, &opts)).collect();
        assert_eq!(parallel, sequential);
    }

    #[test]
    fn test_keywords_from_builtin_frequency() {
        let parser = GermanParser::new();
        let keywords =
            parser.keywords("Fußball, Fußball und noch mehr Fußball für alle.", 3);
        assert_eq!(keywords.first().map(String::as_str), Some("fußball"));
    }

    #[test]
    fn test_sentence_serializes_to_json() {
        let parser = GermanParser::new();
        let opts = ParseOptions {
            tagset: Tagset::Universal,
            lemmata: true,
            ..Default::default()
        };
        let sentences = parser.parse("Es regnet.", &opts);
        let json = serde_json::to_string(&sentences).expect("serialisierbar");
        assert!(json.contains("\"word\":\"regnet\""));
        let back: Vec<Sentence> = serde_json::from_str(&json).expect("deserialisierbar");
        assert_eq!(back, sentences);
    }
}
