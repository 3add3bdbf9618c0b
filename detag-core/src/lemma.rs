//! # Lemmatisierung — Regelauswahl nach Wortart
//!
//! Leitet für ein getaggtes Token die Grundform ab. Die Regelauswahl
//! richtet sich nach der Penn-Klasse des STTS-Tags, erste Übereinstimmung
//! gewinnt:
//!
//! | Tag-Klasse  | Regel                                   |
//! |-------------|-----------------------------------------|
//! | `DT*`/`JJ*` | prädikative Grundform                   |
//! | `NNS`       | Singularbildung                         |
//! | `VB*`/`MD*` | Infinitiv, bei Fehlschlag Oberflächenform |
//! | sonst       | Oberflächenform                         |
//!
//! Das Ergebnis ist immer kleingeschrieben. Kein Token-Lemma hängt von
//! einem anderen Token ab; der Durchlauf ist pro Token unabhängig.

use crate::inflect::Inflector;
use crate::tagset::{stts_to_penn, SttsTag};

/// Leitet die Grundform für ein Token ab. Oberflächenform und Tag
/// bleiben unberührt; das Lemma kommt als neues Feld ans Token.
///
/// Ein fehlgeschlagener Infinitiv-Nachschlag (unbekanntes Verb) ist kein
/// Fehler: das Lemma fällt auf die kleingeschriebene Oberflächenform
/// zurück.
pub fn derive_lemma<I: Inflector>(word: &str, tag: &SttsTag, inflector: &I) -> String {
    let penn = stts_to_penn(tag);
    let label = penn.label();
    let lemma = if label.starts_with("DT") || label.starts_with("JJ") {
        inflector.predicative(word)
    } else if label == "NNS" {
        inflector.singularize(word)
    } else if label.starts_with("VB") || label.starts_with("MD") {
        inflector
            .conjugate_infinitive(word)
            .unwrap_or_else(|| word.to_string())
    } else {
        word.to_string()
    };
    lemma.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inflect::GermanInflector;

    #[test]
    fn test_plural_noun_singularized() {
        let inf = GermanInflector::new();
        assert_eq!(derive_lemma("Tische", &SttsTag::Nns, &inf), "tisch");
        assert_eq!(derive_lemma("Frauen", &SttsTag::Nns, &inf), "frau");
    }

    #[test]
    fn test_verb_conjugated_to_infinitive() {
        let inf = GermanInflector::new();
        assert_eq!(derive_lemma("kommt", &SttsTag::Vvfin, &inf), "kommen");
        assert_eq!(derive_lemma("ist", &SttsTag::Vafin, &inf), "sein");
        assert_eq!(derive_lemma("kann", &SttsTag::Vmfin, &inf), "können");
    }

    #[test]
    fn test_unknown_verb_falls_back_to_surface() {
        let inf = GermanInflector::new();
        // kein Suffix greift, keine Ausnahme: Oberflächenform, kleingeschrieben
        assert_eq!(derive_lemma("Xyz", &SttsTag::Vvfin, &inf), "xyz");
    }

    #[test]
    fn test_adjective_and_article_predicative() {
        let inf = GermanInflector::new();
        assert_eq!(derive_lemma("großes", &SttsTag::Adja, &inf), "groß");
        assert_eq!(derive_lemma("Eine", &SttsTag::Art, &inf), "ein");
    }

    #[test]
    fn test_no_rule_keeps_surface_lowercased() {
        let inf = GermanInflector::new();
        assert_eq!(derive_lemma("Unglück", &SttsTag::Nn, &inf), "unglück");
        assert_eq!(derive_lemma("selten", &SttsTag::Adv, &inf), "selten");
    }

    #[test]
    fn test_lemma_always_lowercase() {
        let inf = GermanInflector::new();
        for (word, tag) in [
            ("HAUS", SttsTag::Nn),
            ("Kommt", SttsTag::Vvfin),
            ("GROSSE", SttsTag::Adja),
        ] {
            let lemma = derive_lemma(word, &tag, &inf);
            assert_eq!(lemma, lemma.to_lowercase());
        }
    }
}
