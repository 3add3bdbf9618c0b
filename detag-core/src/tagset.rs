//! # Tagsets — STTS, Penn Treebank II und Universal
//!
//! Das Lexikon und der Tagger arbeiten mit dem Stuttgart/Tübinger Tagset (STTS).
//! Für die Interoperabilität mit anderen Werkzeugen wird jedes STTS-Tag in zwei
//! standardisierte Vokabulare übersetzt:
//!
//! | Tagset    | Granularität          | Beispiel ("ohne")       |
//! |-----------|-----------------------|-------------------------|
//! | STTS      | fein, deutsch-spezifisch | `APPR`               |
//! | Penn      | fein, sprachübergreifend | `IN`                 |
//! | Universal | grob, sprachunabhängig   | `ADP`                |
//!
//! ## Abbildungsregeln
//!
//! - STTS → Penn ist eine feste Tabelle. Unbekannte Tags werden **unverändert**
//!   durchgereicht (Identitäts-Fallback, niemals ein Fehler), damit ungesehene
//!   Labels aus dem Lexikon die Annotation nicht abbrechen.
//! - STTS → Universal prüft zuerst vier linguistische Ausnahmegruppen
//!   (Konjunktionen, Partikeln, zwei Pronomengruppen), die die generische
//!   Penn-Abbildung für das Deutsche falsch einordnen würde, und fällt sonst
//!   auf Penn → Universal zurück.
//!
//! Die vier Ausnahmegruppen sind paarweise disjunkt; ein Eigenschaftstest
//! unten sichert das ab.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Auswahl des Ausgabe-Tagsets für die Annotation.
///
/// Geschlossene Aufzählung: unbekannte Namen werden beim Parsen abgewiesen
/// statt stillschweigend falsch zu taggen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tagset {
    /// STTS-Tags unverändert ausgeben (Identitätsabbildung).
    Stts,
    /// Penn-Treebank-II-Tags (Voreinstellung).
    Penn,
    /// Grobes Universal-Tagset (NOUN, VERB, ADJ, ...).
    Universal,
}

impl Default for Tagset {
    fn default() -> Self {
        Tagset::Penn
    }
}

/// Fehler beim Parsen eines Tagset-Namens.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unbekanntes Tagset: {0:?} (erwartet: stts, penn, universal)")]
pub struct UnknownTagset(pub String);

impl FromStr for Tagset {
    type Err = UnknownTagset;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "stts" => Ok(Tagset::Stts),
            "penn" | "ptb" => Ok(Tagset::Penn),
            "universal" => Ok(Tagset::Universal),
            other => Err(UnknownTagset(other.to_string())),
        }
    }
}

/// Ein Tag aus dem Stuttgart/Tübinger Tagset, wie es das Lexikon liefert.
///
/// Die Variante [`SttsTag::Other`] ist das Schlupfloch für Labels, die nicht
/// im geschlossenen Vokabular stehen: sie laufen unverändert durch alle
/// Abbildungen, statt einen Fehler auszulösen.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SttsTag {
    /// Adjektiv (unspezifiziert)
    Adj,
    /// attributives Adjektiv: das *große* Haus
    Adja,
    /// prädikatives Adjektiv: er ist *schnell*
    Adjd,
    /// Adverb: *schon*
    Adv,
    /// Präposition: *in* der Stadt
    Appr,
    /// Präposition mit Artikel: *im* Haus
    Apprart,
    /// Postposition: der Sache *wegen*
    Appo,
    /// Zirkumposition rechts: von jetzt *an*
    Apzr,
    /// Artikel: *der*, *die*, *eine*
    Art,
    /// bestimmter Artikel: *der*, *die*
    Artdef,
    /// unbestimmter Artikel: *eine*
    Artind,
    /// Kardinalzahl als Wort: *zwei*
    Card,
    /// Kardinalzahl als Ziffer: *3*
    Cardnum,
    /// Konjunktion mit zu-Infinitiv: *um* zu leben
    Koui,
    /// unterordnende Konjunktion: *weil*, *damit*, *ob*
    Kous,
    /// nebenordnende Konjunktion: *und*, *oder*, *aber*
    Kon,
    /// Vergleichskonjunktion: *als*, *wie*
    Kokom,
    /// Konjunktionaladverb: *usw.*
    Kons,
    /// normales Nomen, Singular: *Tisch*, *Herr*
    Nn,
    /// normales Nomen, Plural: *Tischen*, *Herren*
    Nns,
    /// Eigenname: *Hans*, *Hamburg*
    Ne,
    /// substituierendes Demonstrativpronomen: *dieser*, *jener*
    Pds,
    /// attribuierendes Demonstrativpronomen: *jener* Mensch
    Pdat,
    /// substituierendes Indefinitpronomen: *keiner*, *viele*
    Pis,
    /// attribuierendes Indefinitpronomen: *kein* Mensch
    Piat,
    /// Indefinitpronomen mit Determiner: die *beiden* Brüder
    Pidat,
    /// Personalpronomen: *ich*, *er*, *ihm*
    Pper,
    /// substituierendes Possessivpronomen: *meins*, *deiner*
    Ppos,
    /// attribuierendes Possessivpronomen: *mein* Buch
    Pposat,
    /// substituierendes Relativpronomen: der Hund, *der* bellt
    Prels,
    /// attribuierendes Relativpronomen: der Mann, *dessen* Hund bellt
    Prelat,
    /// Reflexivpronomen: erinnere *dich*
    Prf,
    /// substituierendes Interrogativpronomen: *wer*
    Pws,
    /// attribuierendes Interrogativpronomen: *wessen*, *welche*
    Pwat,
    /// adverbiales Interrogativpronomen: *warum*, *wo*, *wann*
    Pwav,
    /// Pronominaladverb: *dafür*, *deswegen*, *trotzdem*
    Pav,
    /// "zu" vor Infinitiv: *zu* gehen
    Ptkzu,
    /// Negationspartikel: *nicht*
    Ptkneg,
    /// abgetrennter Verbzusatz: pass *auf*!
    Ptkvz,
    /// Antwortpartikel: *ja*, *nein*, *danke*, *bitte*
    Ptkant,
    /// Gradpartikel: *am* schönsten, *zu* schnell
    Ptka,
    /// finites Vollverb: du *gehst*
    Vvfin,
    /// finites Hilfsverb: du *bist*
    Vafin,
    /// Vollverb-Infinitiv: *gehen*, *ankommen*
    Vvinf,
    /// Hilfsverb-Infinitiv: *werden*, *sein*
    Vainf,
    /// Infinitiv mit zu: *anzukommen*
    Vvizu,
    /// Imperativ Vollverb: *komm*!
    Vvimp,
    /// Imperativ Hilfsverb: *sei* ruhig!
    Vaimp,
    /// Partizip Perfekt Vollverb: *gegangen*
    Vvpp,
    /// Partizip Perfekt Hilfsverb: *gewesen*
    Vapp,
    /// finites Modalverb: *dürfen*
    Vmfin,
    /// Modalverb-Infinitiv: *wollen*
    Vminf,
    /// Partizip Perfekt Modalverb: *gekonnt*
    Vmpp,
    /// Markup/Sonderzeichen
    Sgml,
    /// Fremdsprachliches Material
    Fm,
    /// Interjektion: *ach*, *tja*
    Itj,
    /// Nichtwort
    Xy,
    /// unbekanntes Material
    Xx,
    /// Gliederungszeichen: *1.*
    Linum,
    /// Komma
    Comma,
    /// Doppelpunkt
    Colon,
    /// Ausrufezeichen
    Exclam,
    /// schließende Klammer
    ParenClose,
    /// öffnende Klammer
    ParenOpen,
    /// Fragezeichen
    Question,
    /// schließendes Anführungszeichen
    QuoteClose,
    /// öffnendes Anführungszeichen
    QuoteOpen,
    /// Satzendepunkt
    SentEnd,
    /// Semikolon
    Semicolon,
    /// Label außerhalb des geschlossenen Vokabulars
    Other(String),
}

impl SttsTag {
    /// Textdarstellung des Tags, wie sie im Lexikon steht.
    pub fn label(&self) -> &str {
        match self {
            SttsTag::Adj => "ADJ",
            SttsTag::Adja => "ADJA",
            SttsTag::Adjd => "ADJD",
            SttsTag::Adv => "ADV",
            SttsTag::Appr => "APPR",
            SttsTag::Apprart => "APPRART",
            SttsTag::Appo => "APPO",
            SttsTag::Apzr => "APZR",
            SttsTag::Art => "ART",
            SttsTag::Artdef => "ARTDEF",
            SttsTag::Artind => "ARTIND",
            SttsTag::Card => "CARD",
            SttsTag::Cardnum => "CARDNUM",
            SttsTag::Koui => "KOUI",
            SttsTag::Kous => "KOUS",
            SttsTag::Kon => "KON",
            SttsTag::Kokom => "KOKOM",
            SttsTag::Kons => "KONS",
            SttsTag::Nn => "NN",
            SttsTag::Nns => "NNS",
            SttsTag::Ne => "NE",
            SttsTag::Pds => "PDS",
            SttsTag::Pdat => "PDAT",
            SttsTag::Pis => "PIS",
            SttsTag::Piat => "PIAT",
            SttsTag::Pidat => "PIDAT",
            SttsTag::Pper => "PPER",
            SttsTag::Ppos => "PPOS",
            SttsTag::Pposat => "PPOSAT",
            SttsTag::Prels => "PRELS",
            SttsTag::Prelat => "PRELAT",
            SttsTag::Prf => "PRF",
            SttsTag::Pws => "PWS",
            SttsTag::Pwat => "PWAT",
            SttsTag::Pwav => "PWAV",
            SttsTag::Pav => "PAV",
            SttsTag::Ptkzu => "PTKZU",
            SttsTag::Ptkneg => "PTKNEG",
            SttsTag::Ptkvz => "PTKVZ",
            SttsTag::Ptkant => "PTKANT",
            SttsTag::Ptka => "PTKA",
            SttsTag::Vvfin => "VVFIN",
            SttsTag::Vafin => "VAFIN",
            SttsTag::Vvinf => "VVINF",
            SttsTag::Vainf => "VAINF",
            SttsTag::Vvizu => "VVIZU",
            SttsTag::Vvimp => "VVIMP",
            SttsTag::Vaimp => "VAIMP",
            SttsTag::Vvpp => "VVPP",
            SttsTag::Vapp => "VAPP",
            SttsTag::Vmfin => "VMFIN",
            SttsTag::Vminf => "VMINF",
            SttsTag::Vmpp => "VMPP",
            SttsTag::Sgml => "SGML",
            SttsTag::Fm => "FM",
            SttsTag::Itj => "ITJ",
            SttsTag::Xy => "XY",
            SttsTag::Xx => "XX",
            SttsTag::Linum => "LINUM",
            SttsTag::Comma => "C",
            SttsTag::Colon => "Co",
            SttsTag::Exclam => "Ex",
            SttsTag::ParenClose => "Pc",
            SttsTag::ParenOpen => "Po",
            SttsTag::Question => "Q",
            SttsTag::QuoteClose => "QMc",
            SttsTag::QuoteOpen => "QMo",
            SttsTag::SentEnd => "S",
            SttsTag::Semicolon => "Se",
            SttsTag::Other(s) => s,
        }
    }

    /// Parst ein Label aus dem Lexikon. Unbekannte Labels landen in
    /// [`SttsTag::Other`] und laufen unverändert durch alle Abbildungen.
    pub fn from_label(s: &str) -> SttsTag {
        match s {
            "ADJ" => SttsTag::Adj,
            "ADJA" => SttsTag::Adja,
            "ADJD" => SttsTag::Adjd,
            "ADV" => SttsTag::Adv,
            "APPR" => SttsTag::Appr,
            "APPRART" => SttsTag::Apprart,
            "APPO" => SttsTag::Appo,
            "APZR" => SttsTag::Apzr,
            "ART" => SttsTag::Art,
            "ARTDEF" => SttsTag::Artdef,
            "ARTIND" => SttsTag::Artind,
            "CARD" => SttsTag::Card,
            "CARDNUM" => SttsTag::Cardnum,
            "KOUI" => SttsTag::Koui,
            "KOUS" => SttsTag::Kous,
            "KON" => SttsTag::Kon,
            "KOKOM" => SttsTag::Kokom,
            "KONS" => SttsTag::Kons,
            "NN" => SttsTag::Nn,
            "NNS" => SttsTag::Nns,
            "NE" => SttsTag::Ne,
            "PDS" => SttsTag::Pds,
            "PDAT" => SttsTag::Pdat,
            "PIS" => SttsTag::Pis,
            "PIAT" => SttsTag::Piat,
            "PIDAT" => SttsTag::Pidat,
            "PPER" => SttsTag::Pper,
            "PPOS" => SttsTag::Ppos,
            "PPOSAT" => SttsTag::Pposat,
            "PRELS" => SttsTag::Prels,
            "PRELAT" => SttsTag::Prelat,
            "PRF" => SttsTag::Prf,
            "PWS" => SttsTag::Pws,
            "PWAT" => SttsTag::Pwat,
            "PWAV" => SttsTag::Pwav,
            "PAV" => SttsTag::Pav,
            "PTKZU" => SttsTag::Ptkzu,
            "PTKNEG" => SttsTag::Ptkneg,
            "PTKVZ" => SttsTag::Ptkvz,
            "PTKANT" => SttsTag::Ptkant,
            "PTKA" => SttsTag::Ptka,
            "VVFIN" => SttsTag::Vvfin,
            "VAFIN" => SttsTag::Vafin,
            "VVINF" => SttsTag::Vvinf,
            "VAINF" => SttsTag::Vainf,
            "VVIZU" => SttsTag::Vvizu,
            "VVIMP" => SttsTag::Vvimp,
            "VAIMP" => SttsTag::Vaimp,
            "VVPP" => SttsTag::Vvpp,
            "VAPP" => SttsTag::Vapp,
            "VMFIN" => SttsTag::Vmfin,
            "VMINF" => SttsTag::Vminf,
            "VMPP" => SttsTag::Vmpp,
            "SGML" => SttsTag::Sgml,
            "FM" => SttsTag::Fm,
            "ITJ" => SttsTag::Itj,
            "XY" => SttsTag::Xy,
            "XX" => SttsTag::Xx,
            "LINUM" => SttsTag::Linum,
            "C" => SttsTag::Comma,
            "Co" => SttsTag::Colon,
            "Ex" => SttsTag::Exclam,
            "Pc" => SttsTag::ParenClose,
            "Po" => SttsTag::ParenOpen,
            "Q" => SttsTag::Question,
            "QMc" => SttsTag::QuoteClose,
            "QMo" => SttsTag::QuoteOpen,
            "S" => SttsTag::SentEnd,
            "Se" => SttsTag::Semicolon,
            other => SttsTag::Other(other.to_string()),
        }
    }
}

impl fmt::Display for SttsTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Ein Penn-Treebank-II-Tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PennTag {
    /// Adjektiv
    Jj,
    /// Adverb
    Rb,
    /// Präposition / unterordnende Konjunktion
    In,
    /// Determiner
    Dt,
    /// Kardinalzahl
    Cd,
    /// Nomen, Singular
    Nn,
    /// Nomen, Plural
    Nns,
    /// Eigenname
    Nnp,
    /// Personalpronomen
    Prp,
    /// Possessivpronomen (`PRP$`)
    PrpPoss,
    /// wh-Determiner
    Wdt,
    /// wh-Pronomen
    Wp,
    /// wh-Adverb
    Wrb,
    /// "to"
    To,
    /// Partikel
    Rp,
    /// Interjektion
    Uh,
    /// Verb, Grundform/finit
    Vb,
    /// Verb, Partizip Perfekt
    Vbn,
    /// Modalverb
    Md,
    /// nebenordnende Konjunktion
    Cc,
    /// Symbol
    Sym,
    /// Fremdwort
    Fw,
    /// Gliederungszeichen
    Ls,
    /// Komma
    Comma,
    /// Doppelpunkt/Semikolon
    Colon,
    /// Satzende (`.`)
    SentEnd,
    /// schließende Klammer
    ParenClose,
    /// öffnende Klammer
    ParenOpen,
    /// Anführungszeichen
    Quote,
    /// durchgereichtes Label ohne Penn-Entsprechung
    Other(String),
}

impl PennTag {
    /// Textdarstellung des Tags.
    pub fn label(&self) -> &str {
        match self {
            PennTag::Jj => "JJ",
            PennTag::Rb => "RB",
            PennTag::In => "IN",
            PennTag::Dt => "DT",
            PennTag::Cd => "CD",
            PennTag::Nn => "NN",
            PennTag::Nns => "NNS",
            PennTag::Nnp => "NNP",
            PennTag::Prp => "PRP",
            PennTag::PrpPoss => "PRP$",
            PennTag::Wdt => "WDT",
            PennTag::Wp => "WP",
            PennTag::Wrb => "WRB",
            PennTag::To => "TO",
            PennTag::Rp => "RP",
            PennTag::Uh => "UH",
            PennTag::Vb => "VB",
            PennTag::Vbn => "VBN",
            PennTag::Md => "MD",
            PennTag::Cc => "CC",
            PennTag::Sym => "SYM",
            PennTag::Fw => "FW",
            PennTag::Ls => "LS",
            PennTag::Comma => ",",
            PennTag::Colon => ":",
            PennTag::SentEnd => ".",
            PennTag::ParenClose => ")",
            PennTag::ParenOpen => "(",
            PennTag::Quote => "\"",
            PennTag::Other(s) => s,
        }
    }
}

impl fmt::Display for PennTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Ein Tag aus dem groben Universal-Tagset (Petrov et al.).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UniversalTag {
    /// Nomen
    Noun,
    /// Verb
    Verb,
    /// Adjektiv
    Adj,
    /// Adverb
    Adv,
    /// Pronomen
    Pron,
    /// Determiner/Artikel
    Det,
    /// Adposition
    Adp,
    /// Zahlwort
    Num,
    /// Konjunktion
    Conj,
    /// Interjektion
    Intj,
    /// Partikel
    Prt,
    /// Interpunktion
    Punc,
    /// Rest
    X,
}

impl UniversalTag {
    /// Textdarstellung des Tags.
    pub fn label(&self) -> &'static str {
        match self {
            UniversalTag::Noun => "NOUN",
            UniversalTag::Verb => "VERB",
            UniversalTag::Adj => "ADJ",
            UniversalTag::Adv => "ADV",
            UniversalTag::Pron => "PRON",
            UniversalTag::Det => "DET",
            UniversalTag::Adp => "ADP",
            UniversalTag::Num => "NUM",
            UniversalTag::Conj => "CONJ",
            UniversalTag::Intj => "INTJ",
            UniversalTag::Prt => "PRT",
            UniversalTag::Punc => "PUNC",
            UniversalTag::X => "X",
        }
    }
}

impl fmt::Display for UniversalTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Ein Tag aus einem der drei Tagsets, wie er am Token hängt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "tagset", content = "tag")]
#[serde(rename_all = "snake_case")]
pub enum AnyTag {
    Stts(SttsTag),
    Penn(PennTag),
    Universal(UniversalTag),
}

impl AnyTag {
    /// Textdarstellung, unabhängig vom Tagset.
    pub fn label(&self) -> &str {
        match self {
            AnyTag::Stts(t) => t.label(),
            AnyTag::Penn(t) => t.label(),
            AnyTag::Universal(t) => t.label(),
        }
    }
}

impl fmt::Display for AnyTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Konjunktionsartige STTS-Tags, die Universal als CONJ führt.
pub const CONJUNCTION_GROUP: [SttsTag; 4] =
    [SttsTag::Kon, SttsTag::Koui, SttsTag::Kous, SttsTag::Kokom];

/// Partikelartige STTS-Tags, die Universal als PRT führt.
pub const PARTICLE_GROUP: [SttsTag; 4] =
    [SttsTag::Ptkzu, SttsTag::Ptkneg, SttsTag::Ptkvz, SttsTag::Ptkant];

/// Demonstrativ-, Indefinit-, Personal- und Possessivpronomen.
/// Die generische Penn-Abbildung schickt mehrere davon nach DT.
pub const PRONOUN_GROUP_DET: [SttsTag; 8] = [
    SttsTag::Pds,
    SttsTag::Pdat,
    SttsTag::Pis,
    SttsTag::Piat,
    SttsTag::Pidat,
    SttsTag::Pper,
    SttsTag::Ppos,
    SttsTag::Pposat,
];

/// Relativ-, Reflexiv- und Interrogativpronomen sowie Pronominaladverbien.
pub const PRONOUN_GROUP_REL: [SttsTag; 7] = [
    SttsTag::Prels,
    SttsTag::Prelat,
    SttsTag::Prf,
    SttsTag::Pws,
    SttsTag::Pwat,
    SttsTag::Pwav,
    SttsTag::Pav,
];

/// Übersetzt ein STTS-Tag in ein Penn-Treebank-II-Tag.
///
/// Beispiel: ohne/APPR → ohne/IN. Unbekannte Labels ([`SttsTag::Other`])
/// werden unverändert durchgereicht.
pub fn stts_to_penn(tag: &SttsTag) -> PennTag {
    match tag {
        SttsTag::Adj | SttsTag::Adja | SttsTag::Adjd => PennTag::Jj,
        SttsTag::Adv | SttsTag::Pav | SttsTag::Ptkneg | SttsTag::Ptka => PennTag::Rb,
        SttsTag::Appr
        | SttsTag::Apprart
        | SttsTag::Appo
        | SttsTag::Apzr
        | SttsTag::Koui
        | SttsTag::Kous
        | SttsTag::Kokom
        | SttsTag::Kons => PennTag::In,
        SttsTag::Art
        | SttsTag::Artdef
        | SttsTag::Artind
        | SttsTag::Pds
        | SttsTag::Pdat
        | SttsTag::Pis
        | SttsTag::Piat
        | SttsTag::Pidat => PennTag::Dt,
        SttsTag::Card | SttsTag::Cardnum => PennTag::Cd,
        SttsTag::Kon => PennTag::Cc,
        SttsTag::Nn | SttsTag::Xy | SttsTag::Xx => PennTag::Nn,
        SttsTag::Nns => PennTag::Nns,
        SttsTag::Ne => PennTag::Nnp,
        SttsTag::Pper | SttsTag::Prf => PennTag::Prp,
        SttsTag::Ppos | SttsTag::Pposat => PennTag::PrpPoss,
        SttsTag::Prels | SttsTag::Prelat => PennTag::Wdt,
        SttsTag::Pws | SttsTag::Pwat => PennTag::Wp,
        SttsTag::Pwav => PennTag::Wrb,
        SttsTag::Ptkzu => PennTag::To,
        SttsTag::Ptkvz => PennTag::Rp,
        SttsTag::Ptkant | SttsTag::Itj => PennTag::Uh,
        SttsTag::Vvfin
        | SttsTag::Vafin
        | SttsTag::Vvinf
        | SttsTag::Vainf
        | SttsTag::Vvizu
        | SttsTag::Vvimp
        | SttsTag::Vaimp => PennTag::Vb,
        SttsTag::Vvpp | SttsTag::Vapp => PennTag::Vbn,
        SttsTag::Vmfin | SttsTag::Vminf | SttsTag::Vmpp => PennTag::Md,
        SttsTag::Sgml => PennTag::Sym,
        SttsTag::Fm => PennTag::Fw,
        SttsTag::Linum => PennTag::Ls,
        SttsTag::Comma => PennTag::Comma,
        SttsTag::Colon | SttsTag::Semicolon => PennTag::Colon,
        SttsTag::Exclam | SttsTag::Question | SttsTag::SentEnd => PennTag::SentEnd,
        SttsTag::ParenClose => PennTag::ParenClose,
        SttsTag::ParenOpen => PennTag::ParenOpen,
        SttsTag::QuoteClose | SttsTag::QuoteOpen => PennTag::Quote,
        SttsTag::Other(s) => PennTag::Other(s.clone()),
    }
}

/// Generische Penn → Universal-Abbildung.
///
/// Arbeitet auf dem Label, damit auch durchgereichte Fremd-Tags wie `VBZ`
/// noch sinnvoll eingeordnet werden; alles Unbekannte wird X.
pub fn penn_to_universal(tag: &PennTag) -> UniversalTag {
    match tag.label() {
        "NN" | "NNS" | "NNP" | "NNPS" => UniversalTag::Noun,
        "MD" | "VB" | "VBD" | "VBG" | "VBN" | "VBP" | "VBZ" => UniversalTag::Verb,
        "JJ" | "JJR" | "JJS" => UniversalTag::Adj,
        "RB" | "RBR" | "RBS" | "WRB" => UniversalTag::Adv,
        "PRP" | "PRP$" | "WP" | "WP$" => UniversalTag::Pron,
        "DT" | "PDT" | "WDT" | "EX" => UniversalTag::Det,
        "IN" => UniversalTag::Adp,
        "CD" => UniversalTag::Num,
        "CC" => UniversalTag::Conj,
        "UH" => UniversalTag::Intj,
        "RP" | "TO" => UniversalTag::Prt,
        "SYM" | "LS" | "." | "!" | "?" | "," | ":" | ";" | "(" | ")" | "\"" | "#" | "$" => {
            UniversalTag::Punc
        }
        _ => UniversalTag::X,
    }
}

/// Übersetzt ein STTS-Tag in ein Universal-Tag.
///
/// Beispiel: ohne/APPR → ohne/ADP. Vier Ausnahmegruppen werden vor der
/// generischen Abbildung geprüft, weil Penn die deutschen Konjunktionen,
/// Partikeln und Pronomen teilweise anders einordnet.
pub fn stts_to_universal(tag: &SttsTag) -> UniversalTag {
    if CONJUNCTION_GROUP.contains(tag) {
        return UniversalTag::Conj;
    }
    if PARTICLE_GROUP.contains(tag) {
        return UniversalTag::Prt;
    }
    if PRONOUN_GROUP_DET.contains(tag) || PRONOUN_GROUP_REL.contains(tag) {
        return UniversalTag::Pron;
    }
    penn_to_universal(&stts_to_penn(tag))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_entries() {
        assert_eq!(stts_to_penn(&SttsTag::Appr), PennTag::In);
        assert_eq!(stts_to_penn(&SttsTag::Art), PennTag::Dt);
        assert_eq!(stts_to_penn(&SttsTag::Nn), PennTag::Nn);
        assert_eq!(stts_to_penn(&SttsTag::Nns), PennTag::Nns);
        assert_eq!(stts_to_penn(&SttsTag::Ne), PennTag::Nnp);
        assert_eq!(stts_to_penn(&SttsTag::Vvfin), PennTag::Vb);
        assert_eq!(stts_to_penn(&SttsTag::Vmfin), PennTag::Md);
        assert_eq!(stts_to_penn(&SttsTag::Kon), PennTag::Cc);
        assert_eq!(stts_to_penn(&SttsTag::SentEnd), PennTag::SentEnd);
        assert_eq!(stts_to_penn(&SttsTag::Comma), PennTag::Comma);
    }

    #[test]
    fn test_unknown_passes_through_unchanged() {
        let tag = SttsTag::from_label("GIBTSNICHT");
        assert_eq!(tag, SttsTag::Other("GIBTSNICHT".to_string()));
        let penn = stts_to_penn(&tag);
        assert_eq!(penn.label(), "GIBTSNICHT");
        // Identitäts-Fallback ist idempotent
        let again = stts_to_penn(&SttsTag::from_label(penn.label()));
        assert_eq!(again.label(), penn.label());
    }

    #[test]
    fn test_conjunction_override() {
        for tag in &CONJUNCTION_GROUP {
            assert_eq!(
                stts_to_universal(tag),
                UniversalTag::Conj,
                "{} muss CONJ ergeben",
                tag
            );
        }
        // Ohne die Ausnahme würde KOUS über IN auf ADP landen
        assert_eq!(penn_to_universal(&stts_to_penn(&SttsTag::Kous)), UniversalTag::Adp);
    }

    #[test]
    fn test_particle_override() {
        for tag in &PARTICLE_GROUP {
            assert_eq!(stts_to_universal(tag), UniversalTag::Prt);
        }
    }

    #[test]
    fn test_pronoun_overrides() {
        for tag in PRONOUN_GROUP_DET.iter().chain(PRONOUN_GROUP_REL.iter()) {
            assert_eq!(
                stts_to_universal(tag),
                UniversalTag::Pron,
                "{} muss PRON ergeben",
                tag
            );
        }
    }

    #[test]
    fn test_override_groups_are_disjoint() {
        let groups: [&[SttsTag]; 4] = [
            &CONJUNCTION_GROUP,
            &PARTICLE_GROUP,
            &PRONOUN_GROUP_DET,
            &PRONOUN_GROUP_REL,
        ];
        for (i, a) in groups.iter().enumerate() {
            for b in groups.iter().skip(i + 1) {
                for tag in a.iter() {
                    assert!(!b.contains(tag), "{} steht in zwei Gruppen", tag);
                }
            }
        }
    }

    #[test]
    fn test_universal_fallthrough() {
        assert_eq!(stts_to_universal(&SttsTag::Art), UniversalTag::Det);
        assert_eq!(stts_to_universal(&SttsTag::Vvfin), UniversalTag::Verb);
        assert_eq!(stts_to_universal(&SttsTag::Nn), UniversalTag::Noun);
        assert_eq!(stts_to_universal(&SttsTag::Appr), UniversalTag::Adp);
        assert_eq!(stts_to_universal(&SttsTag::SentEnd), UniversalTag::Punc);
        assert_eq!(
            stts_to_universal(&SttsTag::Other("MYSTERY".into())),
            UniversalTag::X
        );
    }

    #[test]
    fn test_penn_label_fallback_mapping() {
        // durchgereichte Fremd-Tags werden über ihr Label eingeordnet
        assert_eq!(penn_to_universal(&PennTag::Other("VBZ".into())), UniversalTag::Verb);
        assert_eq!(penn_to_universal(&PennTag::Other("???".into())), UniversalTag::X);
    }

    #[test]
    fn test_label_roundtrip() {
        for label in ["ADJA", "APPRART", "PPOSAT", "VVIZU", "QMo", "Se"] {
            assert_eq!(SttsTag::from_label(label).label(), label);
        }
    }

    #[test]
    fn test_tagset_from_str() {
        assert_eq!("penn".parse::<Tagset>(), Ok(Tagset::Penn));
        assert_eq!("UNIVERSAL".parse::<Tagset>(), Ok(Tagset::Universal));
        assert_eq!("stts".parse::<Tagset>(), Ok(Tagset::Stts));
        assert!("klingonisch".parse::<Tagset>().is_err());
    }
}
