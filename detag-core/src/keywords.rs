//! # Schlüsselwortsuche
//!
//! Häufigkeitsbasiertes Ranking: Wörter werden kleingeschrieben gezählt,
//! Stoppwörter, Kurzwörter und Zahlen fallen raus, und die Termfrequenz
//! wird mit der inversen Korpushäufigkeit gewichtet, damit Allerwelts-
//! wörter nicht oben landen. Das Ranking ist deterministisch: bei
//! gleicher Punktzahl gewinnt das zuerst aufgetretene Wort.

use std::collections::HashMap;

use unicode_segmentation::UnicodeSegmentation;

use crate::lexicon::STOPWORDS;

/// Liefert die `top` bestbewerteten Schlüsselwörter des Textes,
/// absteigend sortiert.
pub fn find_keywords(text: &str, top: usize, frequency: &HashMap<String, f64>) -> Vec<String> {
    let mut order: Vec<String> = Vec::new();
    let mut counts: HashMap<String, usize> = HashMap::new();

    for word in text.unicode_words() {
        let lower = word.to_lowercase();
        if lower.chars().count() < 3 {
            continue;
        }
        if lower.chars().all(|c| c.is_numeric()) {
            continue;
        }
        if STOPWORDS.contains(&lower.as_str()) {
            continue;
        }
        if !counts.contains_key(&lower) {
            order.push(lower.clone());
        }
        *counts.entry(lower).or_insert(0) += 1;
    }

    let mut scored: Vec<(String, f64)> = order
        .into_iter()
        .map(|word| {
            let tf = counts[&word] as f64;
            let damp = 1.0 - frequency.get(&word).copied().unwrap_or(0.0).min(1.0);
            (word, tf * damp)
        })
        .collect();
    // stabil: gleiche Punktzahl behält die Erstauftretens-Reihenfolge
    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    scored.into_iter().take(top).map(|(word, _)| word).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_most_frequent_word_wins() {
        let freq = HashMap::new();
        let text = "Fußball ist toll. Fußball verbindet. Musik auch, aber Fußball gewinnt.";
        let keywords = find_keywords(text, 3, &freq);
        assert_eq!(keywords[0], "fußball");
    }

    #[test]
    fn test_stopwords_and_short_words_filtered() {
        let freq = HashMap::new();
        let keywords = find_keywords("der die und ab zu Haus", 10, &freq);
        assert_eq!(keywords, vec!["haus"]);
    }

    #[test]
    fn test_numbers_filtered() {
        let freq = HashMap::new();
        let keywords = find_keywords("1234 5678 Haus", 10, &freq);
        assert_eq!(keywords, vec!["haus"]);
    }

    #[test]
    fn test_corpus_frequency_damps_common_words() {
        let mut freq = HashMap::new();
        freq.insert("leben".to_string(), 0.9);
        // beide zweimal, aber "leben" ist im Korpus häufig
        let keywords = find_keywords("Leben Leben Musik Musik", 2, &freq);
        assert_eq!(keywords, vec!["musik", "leben"]);
    }

    #[test]
    fn test_top_limits_result() {
        let freq = HashMap::new();
        let keywords = find_keywords("Haus Baum Auto Hund Katze", 2, &freq);
        assert_eq!(keywords.len(), 2);
    }
}
