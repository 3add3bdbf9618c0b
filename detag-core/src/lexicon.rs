//! # Eingebaute Startdaten
//!
//! Ein kompaktes Lexikon samt Suffix- und Kontextregeln, damit der
//! Tagger ohne externe Datendateien arbeitet. Produktionsdaten werden
//! über [`crate::tagger::TaggerConfig`] aus Dateien geladen; die
//! Tabellen hier decken die häufigsten Funktionswörter und genug
//! Inhaltswörter für Tests und Demos ab.
//!
//! Die Einträge verwenden die Schweizer Schreibung ("ss" statt "ß"),
//! weil der Tagger alle Eingaben vor dem Nachschlag entsprechend
//! umschreibt.

/// Wort → STTS-Tag. Ein Tag pro Wort (die häufigste Lesart).
pub const SEED_LEXICON: &[(&str, &str)] = &[
    // Artikel
    ("der", "ART"),
    ("die", "ART"),
    ("das", "ART"),
    ("dem", "ART"),
    ("den", "ART"),
    ("des", "ART"),
    ("ein", "ART"),
    ("eine", "ART"),
    ("einen", "ART"),
    ("einem", "ART"),
    ("einer", "ART"),
    ("eines", "ART"),
    // Konjunktionen
    ("und", "KON"),
    ("oder", "KON"),
    ("aber", "KON"),
    ("sondern", "KON"),
    ("denn", "KON"),
    ("weil", "KOUS"),
    ("damit", "KOUS"),
    ("ob", "KOUS"),
    ("dass", "KOUS"),
    ("wenn", "KOUS"),
    ("obwohl", "KOUS"),
    ("als", "KOKOM"),
    ("wie", "KOKOM"),
    ("um", "KOUI"),
    ("usw.", "KONS"),
    // Präpositionen
    ("in", "APPR"),
    ("an", "APPR"),
    ("auf", "APPR"),
    ("mit", "APPR"),
    ("von", "APPR"),
    ("bei", "APPR"),
    ("nach", "APPR"),
    ("aus", "APPR"),
    ("für", "APPR"),
    ("ohne", "APPR"),
    ("gegen", "APPR"),
    ("über", "APPR"),
    ("unter", "APPR"),
    ("vor", "APPR"),
    ("zwischen", "APPR"),
    ("durch", "APPR"),
    ("seit", "APPR"),
    ("wegen", "APPR"),
    ("während", "APPR"),
    ("im", "APPRART"),
    ("am", "APPRART"),
    ("zum", "APPRART"),
    ("zur", "APPRART"),
    ("beim", "APPRART"),
    ("vom", "APPRART"),
    ("ins", "APPRART"),
    ("ans", "APPRART"),
    // Pronomen
    ("ich", "PPER"),
    ("du", "PPER"),
    ("er", "PPER"),
    ("sie", "PPER"),
    ("es", "PPER"),
    ("wir", "PPER"),
    ("ihr", "PPER"),
    ("ihm", "PPER"),
    ("ihn", "PPER"),
    ("ihnen", "PPER"),
    ("mich", "PPER"),
    ("mir", "PPER"),
    ("dich", "PPER"),
    ("dir", "PPER"),
    ("uns", "PPER"),
    ("euch", "PPER"),
    ("sich", "PRF"),
    ("mein", "PPOSAT"),
    ("meine", "PPOSAT"),
    ("meinen", "PPOSAT"),
    ("dein", "PPOSAT"),
    ("deine", "PPOSAT"),
    ("seine", "PPOSAT"),
    ("seinen", "PPOSAT"),
    ("ihre", "PPOSAT"),
    ("unser", "PPOSAT"),
    ("euer", "PPOSAT"),
    ("meins", "PPOS"),
    ("deiner", "PPOS"),
    ("dieser", "PDAT"),
    ("diese", "PDAT"),
    ("dieses", "PDAT"),
    ("diesen", "PDAT"),
    ("jener", "PDAT"),
    ("jene", "PDAT"),
    ("kein", "PIAT"),
    ("keine", "PIAT"),
    ("keinen", "PIAT"),
    ("keiner", "PIS"),
    ("viele", "PIS"),
    ("niemand", "PIS"),
    ("man", "PIS"),
    ("alle", "PIAT"),
    ("beiden", "PIDAT"),
    ("wer", "PWS"),
    ("wessen", "PWAT"),
    ("welche", "PWAT"),
    ("warum", "PWAV"),
    ("wo", "PWAV"),
    ("wann", "PWAV"),
    ("dafür", "PAV"),
    ("dabei", "PAV"),
    ("deswegen", "PAV"),
    ("trotzdem", "PAV"),
    // Partikeln
    ("zu", "PTKZU"),
    ("nicht", "PTKNEG"),
    ("ja", "PTKANT"),
    ("nein", "PTKANT"),
    ("danke", "PTKANT"),
    ("bitte", "PTKANT"),
    // Adverbien
    ("schon", "ADV"),
    ("noch", "ADV"),
    ("sehr", "ADV"),
    ("auch", "ADV"),
    ("nur", "ADV"),
    ("hier", "ADV"),
    ("dort", "ADV"),
    ("heute", "ADV"),
    ("morgen", "ADV"),
    ("gestern", "ADV"),
    ("immer", "ADV"),
    ("oft", "ADV"),
    ("selten", "ADV"),
    ("allein", "ADV"),
    ("bald", "ADV"),
    ("dann", "ADV"),
    ("jetzt", "ADV"),
    ("wieder", "ADV"),
    ("fast", "ADV"),
    ("so", "ADV"),
    // Hilfs- und Modalverben
    ("ist", "VAFIN"),
    ("sind", "VAFIN"),
    ("bin", "VAFIN"),
    ("bist", "VAFIN"),
    ("seid", "VAFIN"),
    ("war", "VAFIN"),
    ("waren", "VAFIN"),
    ("sein", "VAINF"),
    ("hat", "VAFIN"),
    ("habe", "VAFIN"),
    ("habt", "VAFIN"),
    ("hatte", "VAFIN"),
    ("hatten", "VAFIN"),
    ("haben", "VAINF"),
    ("wird", "VAFIN"),
    ("wurde", "VAFIN"),
    ("wurden", "VAFIN"),
    ("werden", "VAINF"),
    ("gewesen", "VAPP"),
    ("kann", "VMFIN"),
    ("muss", "VMFIN"),
    ("will", "VMFIN"),
    ("soll", "VMFIN"),
    ("darf", "VMFIN"),
    ("mag", "VMFIN"),
    ("möchte", "VMFIN"),
    ("konnte", "VMFIN"),
    ("musste", "VMFIN"),
    ("wollte", "VMFIN"),
    ("sollte", "VMFIN"),
    ("durfte", "VMFIN"),
    ("können", "VMINF"),
    ("müssen", "VMINF"),
    ("wollen", "VMINF"),
    ("sollen", "VMINF"),
    ("dürfen", "VMINF"),
    ("mögen", "VMINF"),
    ("gekonnt", "VMPP"),
    // Vollverben
    ("kommt", "VVFIN"),
    ("kam", "VVFIN"),
    ("kommen", "VVINF"),
    ("geht", "VVFIN"),
    ("ging", "VVFIN"),
    ("gehen", "VVINF"),
    ("sagt", "VVFIN"),
    ("sagte", "VVFIN"),
    ("sagen", "VVINF"),
    ("sieht", "VVFIN"),
    ("sah", "VVFIN"),
    ("sehen", "VVINF"),
    ("macht", "VVFIN"),
    ("machte", "VVFIN"),
    ("machen", "VVINF"),
    ("gibt", "VVFIN"),
    ("gab", "VVFIN"),
    ("geben", "VVINF"),
    ("steht", "VVFIN"),
    ("stand", "VVFIN"),
    ("stehen", "VVINF"),
    ("bleibt", "VVFIN"),
    ("blieb", "VVFIN"),
    ("bleiben", "VVINF"),
    ("heisst", "VVFIN"),
    ("regnet", "VVFIN"),
    ("arbeitet", "VVFIN"),
    ("spielt", "VVFIN"),
    ("kauft", "VVFIN"),
    ("lebt", "VVFIN"),
    ("liegt", "VVFIN"),
    ("gegangen", "VVPP"),
    ("gekommen", "VVPP"),
    ("gesehen", "VVPP"),
    ("gemacht", "VVPP"),
    ("anzukommen", "VVIZU"),
    // Adjektive
    ("gross", "ADJD"),
    ("grosse", "ADJA"),
    ("grossen", "ADJA"),
    ("grosser", "ADJA"),
    ("grosses", "ADJA"),
    ("klein", "ADJD"),
    ("kleine", "ADJA"),
    ("kleinen", "ADJA"),
    ("schnell", "ADJD"),
    ("schön", "ADJD"),
    ("schöne", "ADJA"),
    ("gut", "ADJD"),
    ("gute", "ADJA"),
    ("guten", "ADJA"),
    ("neu", "ADJD"),
    ("neue", "ADJA"),
    ("alt", "ADJD"),
    ("alte", "ADJA"),
    ("jung", "ADJD"),
    ("gesund", "ADJD"),
    // Nomen
    ("Haus", "NN"),
    ("Mann", "NN"),
    ("Frau", "NN"),
    ("Kind", "NN"),
    ("Stadt", "NN"),
    ("Tisch", "NN"),
    ("Herr", "NN"),
    ("Jahr", "NN"),
    ("Zeit", "NN"),
    ("Tag", "NN"),
    ("Nacht", "NN"),
    ("Leben", "NN"),
    ("Welt", "NN"),
    ("Land", "NN"),
    ("Hand", "NN"),
    ("Wasser", "NN"),
    ("Geld", "NN"),
    ("Arbeit", "NN"),
    ("Schule", "NN"),
    ("Buch", "NN"),
    ("Auto", "NN"),
    ("Hund", "NN"),
    ("Katze", "NN"),
    ("Unglück", "NN"),
    ("Glück", "NN"),
    ("Liebe", "NN"),
    ("Strasse", "NN"),
    ("Fussball", "NN"),
    ("Apfel", "NN"),
    ("Obst", "NN"),
    ("Dezember", "NN"),
    // Nomen im Plural
    ("Häuser", "NNS"),
    ("Männer", "NNS"),
    ("Frauen", "NNS"),
    ("Kinder", "NNS"),
    ("Bücher", "NNS"),
    ("Tische", "NNS"),
    ("Jahre", "NNS"),
    ("Tage", "NNS"),
    ("Autos", "NNS"),
    ("Äpfel", "NNS"),
    ("Städte", "NNS"),
    // Eigennamen
    ("Hans", "NE"),
    ("Anna", "NE"),
    ("Peter", "NE"),
    ("Müller", "NE"),
    ("Schmidt", "NE"),
    ("Hamburg", "NE"),
    ("Berlin", "NE"),
    ("München", "NE"),
    ("Deutschland", "NE"),
    ("Österreich", "NE"),
    ("Schweiz", "NE"),
    ("Europa", "NE"),
    // Zahlwörter
    ("eins", "CARD"),
    ("zwei", "CARD"),
    ("drei", "CARD"),
    ("vier", "CARD"),
    ("fünf", "CARD"),
    ("sechs", "CARD"),
    ("sieben", "CARD"),
    ("acht", "CARD"),
    ("neun", "CARD"),
    ("zehn", "CARD"),
    // Interjektionen
    ("ach", "ITJ"),
    ("tja", "ITJ"),
    ("oh", "ITJ"),
];

/// Suffix → STTS-Tag für Wörter außerhalb des Lexikons,
/// längster Treffer gewinnt.
pub const SEED_SUFFIX_RULES: &[(&str, &str)] = &[
    ("ung", "NN"),
    ("heit", "NN"),
    ("keit", "NN"),
    ("schaft", "NN"),
    ("tion", "NN"),
    ("chen", "NN"),
    ("lein", "NN"),
    ("ismus", "NN"),
    ("isch", "ADJA"),
    ("lich", "ADJD"),
    ("sam", "ADJD"),
    ("haft", "ADJD"),
    ("bar", "ADJD"),
    ("los", "ADJD"),
    ("ieren", "VVINF"),
    ("weise", "ADV"),
];

/// Kontextregeln `(Vortag, bisheriges Tag, neues Tag)` für Wörter, die
/// nur per Ratewert getaggt wurden: nach Artikel, Pronomen oder
/// attributivem Adjektiv ist ein großgeschriebenes Unbekanntes eher ein
/// normales Nomen als ein Eigenname.
pub const SEED_CONTEXT_RULES: &[(&str, &str, &str)] = &[
    ("ART", "NE", "NN"),
    ("APPRART", "NE", "NN"),
    ("PPOSAT", "NE", "NN"),
    ("PIAT", "NE", "NN"),
    ("PDAT", "NE", "NN"),
    ("ADJA", "NE", "NN"),
];

/// Relative Korpushäufigkeit der häufigsten Wortformen. Dämpft
/// Funktionswörter bei der Schlüsselwortsuche.
pub const SEED_FREQUENCY: &[(&str, f64)] = &[
    ("der", 1.0),
    ("die", 0.96),
    ("und", 0.92),
    ("in", 0.88),
    ("den", 0.84),
    ("von", 0.80),
    ("zu", 0.78),
    ("das", 0.76),
    ("mit", 0.73),
    ("sich", 0.70),
    ("des", 0.68),
    ("auf", 0.66),
    ("für", 0.64),
    ("ist", 0.62),
    ("im", 0.60),
    ("dem", 0.58),
    ("nicht", 0.56),
    ("ein", 0.54),
    ("eine", 0.52),
    ("als", 0.50),
    ("auch", 0.48),
    ("es", 0.46),
    ("an", 0.44),
    ("werden", 0.42),
    ("aus", 0.40),
    ("er", 0.39),
    ("hat", 0.38),
    ("dass", 0.37),
    ("sie", 0.36),
    ("nach", 0.35),
    ("wird", 0.34),
    ("bei", 0.33),
    ("einer", 0.32),
    ("um", 0.31),
    ("am", 0.30),
    ("sind", 0.29),
    ("noch", 0.28),
    ("wie", 0.27),
    ("einem", 0.26),
    ("über", 0.25),
    ("einen", 0.24),
    ("so", 0.23),
    ("zum", 0.22),
    ("war", 0.21),
    ("haben", 0.20),
    ("nur", 0.19),
    ("oder", 0.18),
    ("aber", 0.17),
    ("vor", 0.16),
    ("zur", 0.15),
    ("bis", 0.14),
    ("mehr", 0.13),
    ("durch", 0.12),
    ("man", 0.11),
    ("sein", 0.10),
    ("wurde", 0.09),
    ("jahr", 0.05),
    ("zeit", 0.05),
];

/// Stoppwörter für die Schlüsselwortsuche.
pub const STOPWORDS: &[&str] = &[
    "aber", "alle", "als", "also", "auch", "auf", "aus", "bei", "bin", "bis", "bist",
    "das", "dass", "dein", "dem", "den", "der", "des", "dich", "die", "dir", "doch",
    "dort", "durch", "ein", "eine", "einem", "einen", "einer", "eines", "er", "es",
    "euch", "für", "hat", "hatte", "hier", "ich", "ihr", "ihre", "im", "in", "ist",
    "ja", "jede", "jetzt", "kann", "kein", "man", "mein", "mich", "mir", "mit",
    "muss", "nach", "nein", "nicht", "noch", "nur", "ob", "oder", "ohne", "schon",
    "sehr", "sein", "sich", "sie", "sind", "so", "soll", "über", "um", "und", "uns",
    "vom", "von", "vor", "war", "waren", "was", "wenn", "wer", "wie", "wir", "wird",
    "zu", "zum", "zur",
];
