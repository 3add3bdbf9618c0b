//! # detag-core — Regelbasierte Wortarten-Annotation für das Deutsche
//!
//! Dieser Crate implementiert eine vollständige Pipeline zur
//! Wortarten-Annotation deutschsprachiger Texte. Er ist bewusst
//! didaktisch und modular aufgebaut: jede Stufe ist für sich nutzbar
//! und testbar, die Pipeline verbindet sie zu einer Gesamtansicht.
//!
//! ## Architektur
//!
//! Das System folgt einer linearen Pipeline, in der der Text Schritt
//! für Schritt transformiert wird:
//!
//! 1.  **Eingabe**: Rohtext (String).
//! 2.  **Tokenisierung** ([`tokenizer`]): Der Text wird in Sätze aus
//!     Tokens zerlegt; eine deutsche Abkürzungsliste (inklusive
//!     Ordnungszahlen wie "31.") verhindert falsche Satzgrenzen.
//! 3.  **Tagging** ([`tagger`]): Jedes Token bekommt ein STTS-Tag —
//!     Lexikon zuerst, dann Suffixregeln, dann Kontextregeln.
//! 4.  **Tagset-Abbildung** ([`tagset`]): STTS, Penn Treebank II oder
//!     das Universal-Tagset, über feste Tabellen mit deutschen
//!     Ausnahmegruppen.
//! 5.  **Lemmatisierung** ([`lemma`], [`inflect`]): Grundformen nach
//!     Wortart, immer kleingeschrieben.
//!
//! ## Beispiel
//!
//! ```rust
//! use detag_core::{GermanParser, ParseOptions, Tagset};
//!
//! // 1. Pipeline mit den eingebauten Ressourcen
//! let parser = GermanParser::new();
//!
//! // 2. Zu annotierender Text
//! let text = "Ein Unglück kommt selten allein.";
//!
//! // 3. Annotation im Universal-Tagset, mit Grundformen
//! let opts = ParseOptions {
//!     tagset: Tagset::Universal,
//!     lemmata: true,
//!     ..Default::default()
//! };
//! let sentences = parser.parse(text, &opts);
//!
//! // 4. Ausgabe der annotierten Tokens
//! for word in &sentences[0].words {
//!     println!("{} / {} ({:?})", word.word, word.tag.label(), word.lemma);
//! }
//! ```
//!
//! ## Hauptmodule
//!
//! - [`pipeline`]: Orchestrator, der alle Stufen verbindet.
//! - [`tokenizer`]: Satz- und Tokengrenzen.
//! - [`tagset`]: Tag-Typen und die Abbildungen zwischen den Tagsets.
//! - [`tagger`]: Die Brill-artige Tagging-Engine mit ihren Ressourcen.
//! - [`lexicon`]: Eingebaute Startdaten (Lexikon, Regeln, Häufigkeiten).
//! - [`inflect`] / [`lemma`]: Flexionsrückbau und Lemma-Auswahl.
//! - [`keywords`]: Häufigkeitsgewichtete Schlüsselwörter.

pub mod inflect;
pub mod keywords;
pub mod lemma;
pub mod lexicon;
pub mod pipeline;
pub mod tagger;
pub mod tagset;
pub mod tokenizer;

pub use inflect::{GermanInflector, Inflector};
pub use lemma::derive_lemma;
pub use pipeline::{GermanParser, ParseOptions, Sentence, Word};
pub use tagger::{BrillTagger, DefaultTags, TaggerConfig, TaggerError};
pub use tagset::{AnyTag, PennTag, SttsTag, Tagset, UniversalTag};
pub use tokenizer::{find_tokens, TokenizerOptions};
