//! # Flexion — Grundformen für Adjektive, Nomen und Verben
//!
//! Reine Zeichenkettenfunktionen ohne Seiteneffekte, gebündelt hinter dem
//! [`Inflector`]-Trait. Die mitgelieferte [`GermanInflector`]-Implementierung
//! arbeitet regelbasiert: kleine Ausnahmetabellen plus Suffixregeln. Eine
//! fehlgeschlagene Rückführung ist kein Fehler, sondern ein definierter
//! Rückfall (`None` bei [`Inflector::conjugate_infinitive`]).

/// Schnittstelle zur Flexionsbibliothek.
///
/// Der Lemmatisierer kennt nur diese drei Operationen; eine andere
/// Implementierung (etwa mit vollem Formenlexikon) kann eingesteckt
/// werden, ohne den Rest des Systems zu ändern.
pub trait Inflector {
    /// Prädikative Grundform eines Adjektivs oder Artikels: "großes" → "groß".
    fn predicative(&self, word: &str) -> String;

    /// Singularform eines Nomens: "Tische" → "Tisch".
    fn singularize(&self, noun: &str) -> String;

    /// Infinitiv eines konjugierten Verbs: "kommt" → "kommen".
    ///
    /// `None`, wenn keine Regel greift (unbekanntes Verb) — der Aufrufer
    /// fällt dann auf die Oberflächenform zurück.
    fn conjugate_infinitive(&self, verb: &str) -> Option<String>;
}

/// Unregelmäßige Verbformen → Infinitiv. Deckt die Hilfs- und Modalverben
/// sowie häufige starke Verben ab; alles Übrige behandeln die Suffixregeln.
const IRREGULAR_INFINITIVES: &[(&str, &str)] = &[
    ("bin", "sein"),
    ("bist", "sein"),
    ("ist", "sein"),
    ("sind", "sein"),
    ("seid", "sein"),
    ("sei", "sein"),
    ("war", "sein"),
    ("warst", "sein"),
    ("waren", "sein"),
    ("wart", "sein"),
    ("gewesen", "sein"),
    ("habe", "haben"),
    ("hast", "haben"),
    ("hat", "haben"),
    ("habt", "haben"),
    ("hatte", "haben"),
    ("hattest", "haben"),
    ("hatten", "haben"),
    ("gehabt", "haben"),
    ("werde", "werden"),
    ("wirst", "werden"),
    ("wird", "werden"),
    ("werdet", "werden"),
    ("wurde", "werden"),
    ("wurden", "werden"),
    ("geworden", "werden"),
    ("kann", "können"),
    ("kannst", "können"),
    ("könnt", "können"),
    ("konnte", "können"),
    ("konnten", "können"),
    ("gekonnt", "können"),
    ("muss", "müssen"),
    ("musst", "müssen"),
    ("müsst", "müssen"),
    ("musste", "müssen"),
    ("mussten", "müssen"),
    ("darf", "dürfen"),
    ("darfst", "dürfen"),
    ("dürft", "dürfen"),
    ("durfte", "dürfen"),
    ("will", "wollen"),
    ("willst", "wollen"),
    ("wollt", "wollen"),
    ("wollte", "wollen"),
    ("wollten", "wollen"),
    ("soll", "sollen"),
    ("sollst", "sollen"),
    ("sollte", "sollen"),
    ("sollten", "sollen"),
    ("mag", "mögen"),
    ("magst", "mögen"),
    ("mögt", "mögen"),
    ("mochte", "mögen"),
    ("möchte", "mögen"),
    ("weiß", "wissen"),
    ("weiss", "wissen"),
    ("wusste", "wissen"),
    ("gibt", "geben"),
    ("gab", "geben"),
    ("gegeben", "geben"),
    ("kam", "kommen"),
    ("kamen", "kommen"),
    ("gekommen", "kommen"),
    ("ging", "gehen"),
    ("gingen", "gehen"),
    ("gegangen", "gehen"),
    ("sieht", "sehen"),
    ("sah", "sehen"),
    ("gesehen", "sehen"),
    ("nimmt", "nehmen"),
    ("nahm", "nehmen"),
    ("genommen", "nehmen"),
    ("heißt", "heißen"),
    ("heisst", "heissen"),
];

/// Unregelmäßige Pluralformen → Singular (Umlautplurale, die Suffixregeln
/// nicht rückführen können). Kleingeschrieben abgelegt.
const IRREGULAR_SINGULARS: &[(&str, &str)] = &[
    ("männer", "mann"),
    ("häuser", "haus"),
    ("bücher", "buch"),
    ("länder", "land"),
    ("städte", "stadt"),
    ("väter", "vater"),
    ("mütter", "mutter"),
    ("brüder", "bruder"),
    ("töchter", "tochter"),
    ("züge", "zug"),
    ("plätze", "platz"),
    ("bäume", "baum"),
    ("füsse", "fuss"),
    ("füße", "fuß"),
    ("hände", "hand"),
    ("wörter", "wort"),
];

/// Regelbasierte Flexion für das Deutsche.
#[derive(Debug, Clone, Copy, Default)]
pub struct GermanInflector;

impl GermanInflector {
    pub fn new() -> Self {
        GermanInflector
    }
}

impl Inflector for GermanInflector {
    fn predicative(&self, word: &str) -> String {
        let w = word.to_lowercase();
        for suffix in ["em", "en", "er", "es", "e"] {
            if let Some(stem) = w.strip_suffix(suffix) {
                if stem.chars().count() >= 3 {
                    return stem.to_string();
                }
            }
        }
        w
    }

    fn singularize(&self, noun: &str) -> String {
        let lower = noun.to_lowercase();
        for (plural, singular) in IRREGULAR_SINGULARS {
            if lower == *plural {
                return singular.to_string();
            }
        }
        // "Lehrerinnen" → "Lehrerin"
        if let Some(stem) = noun.strip_suffix("nen") {
            if stem.ends_with("in") {
                return stem.to_string();
            }
        }
        // "Familien" → "Familie"
        if let Some(stem) = noun.strip_suffix("ien") {
            return format!("{stem}ie");
        }
        for suffix in ["en", "er", "e", "n", "s"] {
            if let Some(stem) = noun.strip_suffix(suffix) {
                if stem.chars().count() >= 3 {
                    return stem.to_string();
                }
            }
        }
        noun.to_string()
    }

    fn conjugate_infinitive(&self, verb: &str) -> Option<String> {
        let w = verb.to_lowercase();
        for (form, infinitive) in IRREGULAR_INFINITIVES {
            if w == *form {
                return Some((*infinitive).to_string());
            }
        }
        // bereits Infinitiv
        if w.ends_with("en") || w.ends_with("eln") || w.ends_with("ern") {
            return Some(w);
        }
        for suffix in ["est", "et", "st", "te", "t", "e"] {
            if let Some(stem) = w.strip_suffix(suffix) {
                if stem.chars().count() < 2 || !stem.chars().all(char::is_alphabetic) {
                    continue;
                }
                // "sammelt" → "sammeln", "wandert" → "wandern"
                if stem.ends_with("el") || stem.ends_with("er") {
                    return Some(format!("{stem}n"));
                }
                return Some(format!("{stem}en"));
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predicative_strips_declension() {
        let inf = GermanInflector::new();
        assert_eq!(inf.predicative("großes"), "groß");
        assert_eq!(inf.predicative("guten"), "gut");
        assert_eq!(inf.predicative("schnellem"), "schnell");
        assert_eq!(inf.predicative("kleine"), "klein");
    }

    #[test]
    fn test_predicative_base_form_untouched() {
        let inf = GermanInflector::new();
        assert_eq!(inf.predicative("schnell"), "schnell");
    }

    #[test]
    fn test_singularize_suffix_rules() {
        let inf = GermanInflector::new();
        assert_eq!(inf.singularize("Tische"), "Tisch");
        assert_eq!(inf.singularize("Frauen"), "Frau");
        assert_eq!(inf.singularize("Kinder"), "Kind");
        assert_eq!(inf.singularize("Autos"), "Auto");
        assert_eq!(inf.singularize("Familien"), "Familie");
        assert_eq!(inf.singularize("Lehrerinnen"), "Lehrerin");
    }

    #[test]
    fn test_singularize_irregular() {
        let inf = GermanInflector::new();
        assert_eq!(inf.singularize("Häuser"), "haus");
        assert_eq!(inf.singularize("Männer"), "mann");
    }

    #[test]
    fn test_conjugate_regular() {
        let inf = GermanInflector::new();
        assert_eq!(inf.conjugate_infinitive("kommt"), Some("kommen".into()));
        assert_eq!(inf.conjugate_infinitive("gehst"), Some("gehen".into()));
        assert_eq!(inf.conjugate_infinitive("arbeitet"), Some("arbeiten".into()));
        assert_eq!(inf.conjugate_infinitive("sammelt"), Some("sammeln".into()));
    }

    #[test]
    fn test_conjugate_irregular() {
        let inf = GermanInflector::new();
        assert_eq!(inf.conjugate_infinitive("ist"), Some("sein".into()));
        assert_eq!(inf.conjugate_infinitive("hat"), Some("haben".into()));
        assert_eq!(inf.conjugate_infinitive("kann"), Some("können".into()));
    }

    #[test]
    fn test_conjugate_infinitive_passthrough() {
        let inf = GermanInflector::new();
        assert_eq!(inf.conjugate_infinitive("kommen"), Some("kommen".into()));
        assert_eq!(inf.conjugate_infinitive("sammeln"), Some("sammeln".into()));
    }

    #[test]
    fn test_conjugate_unknown_is_none() {
        let inf = GermanInflector::new();
        assert_eq!(inf.conjugate_infinitive("xyz"), None);
        assert_eq!(inf.conjugate_infinitive("123"), None);
    }
}
