use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

// ---------------------------------------------------------------------------
// Data structures
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Grammar,
    Style,
    Clarity,
}

impl Category {
    /// Severity for pattern-table suggestions is fixed by category.
    fn derived_severity(self) -> Severity {
        match self {
            Category::Grammar => Severity::Error,
            Category::Style => Severity::Warning,
            Category::Clarity => Severity::Info,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    pub id: String,
    #[serde(rename = "type")]
    pub category: Category,
    pub severity: Severity,
    pub original_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replacement: Option<String>,
    pub explanation: String,
    pub start_index: usize,
    pub end_index: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WritingStatistics {
    pub word_count: usize,
    pub character_count: usize,
    pub character_count_no_spaces: usize,
    pub sentence_count: usize,
    pub paragraph_count: usize,
    pub average_words_per_sentence: f64,
    pub readability_score: i32,
    pub readability_band: String,
    pub reading_time_minutes: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WritingAnalysis {
    pub suggestions: Vec<Suggestion>,
    pub stats: WritingStatistics,
}

// ---------------------------------------------------------------------------
// Thresholds
// ---------------------------------------------------------------------------

struct Thresholds {
    suggestion_cap: usize,
    long_sentence_words: usize,
    variety_max_words: usize,
    reading_wpm: usize,
    band_very_easy_min: i32,
    band_easy_min: i32,
    band_fairly_easy_min: i32,
    band_standard_min: i32,
    band_fairly_difficult_min: i32,
    band_difficult_min: i32,
}

static TH: Thresholds = Thresholds {
    suggestion_cap: 8,
    long_sentence_words: 25,
    variety_max_words: 8,
    reading_wpm: 200,
    band_very_easy_min: 90,
    band_easy_min: 80,
    band_fairly_easy_min: 70,
    band_standard_min: 60,
    band_fairly_difficult_min: 50,
    band_difficult_min: 30,
};

// ---------------------------------------------------------------------------
// Fixed tables
// ---------------------------------------------------------------------------

static TRANSITION_WORDS: [&str; 5] = [
    "However,",
    "Moreover,",
    "Furthermore,",
    "In addition,",
    "Nevertheless,",
];

static STRONG_ADJECTIVES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    [
        ("good", "excellent"),
        ("bad", "terrible"),
        ("big", "enormous"),
        ("small", "tiny"),
        ("important", "crucial"),
        ("interesting", "fascinating"),
        ("nice", "wonderful"),
    ]
    .into_iter()
    .collect()
});

// ---------------------------------------------------------------------------
// Compiled patterns
// ---------------------------------------------------------------------------

enum Rewrite {
    None,
    Fixed(&'static str),
    StrongerAdjective,
}

struct PatternRule {
    regex: Regex,
    category: Category,
    explanation: &'static str,
    rewrite: Rewrite,
}

static PATTERN_RULES: Lazy<Vec<PatternRule>> = Lazy::new(|| {
    vec![
        PatternRule {
            regex: Regex::new(r"(?i)\bi\s+am\s+\w+ing\b").unwrap(),
            category: Category::Grammar,
            explanation: "Consider using simple present tense instead of present continuous",
            rewrite: Rewrite::None,
        },
        PatternRule {
            regex: Regex::new(r"(?i)\bthere\s+is\s+\w+\s+that\b").unwrap(),
            category: Category::Style,
            explanation: "Consider removing \"there is\" for more direct writing",
            rewrite: Rewrite::None,
        },
        PatternRule {
            regex: Regex::new(r"(?i)\bvery\s+(\w+)\b").unwrap(),
            category: Category::Style,
            explanation: "Consider using a stronger adjective instead of \"very\"",
            rewrite: Rewrite::StrongerAdjective,
        },
        PatternRule {
            regex: Regex::new(r"(?i)\bin\s+order\s+to\b").unwrap(),
            category: Category::Clarity,
            explanation: "Consider using \"to\" instead of \"in order to\"",
            rewrite: Rewrite::Fixed("to"),
        },
        PatternRule {
            regex: Regex::new(r"(?i)\bdue\s+to\s+the\s+fact\s+that\b").unwrap(),
            category: Category::Clarity,
            explanation: "Consider using \"because\" instead",
            rewrite: Rewrite::Fixed("because"),
        },
        PatternRule {
            regex: Regex::new(r"(?i)\ba\s+lot\s+of\b").unwrap(),
            category: Category::Style,
            explanation: "Consider using \"many\", \"much\", or \"numerous\"",
            rewrite: Rewrite::Fixed("many"),
        },
        PatternRule {
            regex: Regex::new(r"(?i)\bthat\s+that\b").unwrap(),
            category: Category::Grammar,
            explanation: "Remove one \"that\" to avoid repetition",
            rewrite: Rewrite::Fixed("that"),
        },
        PatternRule {
            regex: Regex::new(r"(?i)\bmore\s+better\b").unwrap(),
            category: Category::Grammar,
            explanation: "Use \"better\" instead of \"more better\"",
            rewrite: Rewrite::Fixed("better"),
        },
    ]
});

static VERY_PREFIX_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^very\s+").unwrap());

static PASSIVE_VOICE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(was|were|is|are|been|being)\s+\w*ed\b").unwrap());

static SENTENCE_SPLIT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+").unwrap());

static PARAGRAPH_SPLIT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n\s*\n").unwrap());

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn split_sentences(text: &str) -> Vec<&str> {
    SENTENCE_SPLIT_RE
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Synonym lookup for `very <adjective>`; falls back to dropping the "very".
fn stronger_adjective(matched: &str) -> String {
    let adjective = VERY_PREFIX_RE.replace(matched, "").to_lowercase();
    match STRONG_ADJECTIVES.get(adjective.as_str()) {
        Some(stronger) => (*stronger).to_string(),
        None => VERY_PREFIX_RE.replace(matched, "").into_owned(),
    }
}

impl Rewrite {
    fn apply(&self, matched: &str) -> Option<String> {
        match self {
            Rewrite::None => None,
            Rewrite::Fixed(replacement) => Some((*replacement).to_string()),
            Rewrite::StrongerAdjective => Some(stronger_adjective(matched)),
        }
    }
}

// ---------------------------------------------------------------------------
// Pattern-table suggestions
// ---------------------------------------------------------------------------

fn pattern_suggestions(text: &str) -> Vec<Suggestion> {
    let mut suggestions = Vec::new();

    for (rule_index, rule) in PATTERN_RULES.iter().enumerate() {
        for (match_index, m) in rule.regex.find_iter(text).enumerate() {
            suggestions.push(Suggestion {
                id: format!("{rule_index}-{match_index}"),
                category: rule.category,
                severity: rule.category.derived_severity(),
                original_text: m.as_str().to_string(),
                replacement: rule.rewrite.apply(m.as_str()),
                explanation: rule.explanation.to_string(),
                start_index: m.start(),
                end_index: m.end(),
            });
        }
    }
    suggestions
}

// ---------------------------------------------------------------------------
// Sentence-level heuristics
// ---------------------------------------------------------------------------

fn sentence_suggestions(text: &str) -> Vec<Suggestion> {
    let mut suggestions = Vec::new();

    for (index, sentence) in split_sentences(text).into_iter().enumerate() {
        // Offsets point at the first occurrence of the sentence text;
        // verbatim duplicate sentences collide on the earlier one.
        let start = match text.find(sentence) {
            Some(pos) => pos,
            None => continue,
        };
        let end = start + sentence.len();
        let words = word_count(sentence);

        if PASSIVE_VOICE_RE.is_match(sentence) {
            suggestions.push(Suggestion {
                id: format!("passive-{index}"),
                category: Category::Style,
                severity: Severity::Warning,
                original_text: sentence.to_string(),
                replacement: None,
                explanation: "Consider using active voice for more engaging writing".to_string(),
                start_index: start,
                end_index: end,
            });
        }

        if words > TH.long_sentence_words {
            suggestions.push(Suggestion {
                id: format!("long-sentence-{index}"),
                category: Category::Clarity,
                severity: Severity::Info,
                original_text: sentence.to_string(),
                replacement: None,
                explanation:
                    "Consider breaking this long sentence into shorter ones for better readability"
                        .to_string(),
                start_index: start,
                end_index: end,
            });
        }

        if index > 0 && words < TH.variety_max_words {
            let transition = TRANSITION_WORDS[index % TRANSITION_WORDS.len()];
            suggestions.push(Suggestion {
                id: format!("variety-{index}"),
                category: Category::Style,
                severity: Severity::Info,
                original_text: sentence.to_string(),
                replacement: Some(format!("{transition} {}", sentence.to_lowercase())),
                explanation: "Consider varying sentence structure for better flow".to_string(),
                start_index: start,
                end_index: end,
            });
        }
    }
    suggestions
}

// ---------------------------------------------------------------------------
// Readability
// ---------------------------------------------------------------------------

/// Vowel-run syllable estimate with a silent-e adjustment, minimum one
/// syllable per word.
fn estimate_syllables(word: &str) -> usize {
    let lower = word.to_lowercase();
    let mut count = 0usize;
    let mut previous_was_vowel = false;

    for c in lower.chars() {
        let is_vowel = matches!(c, 'a' | 'e' | 'i' | 'o' | 'u');
        if is_vowel && !previous_was_vowel {
            count += 1;
        }
        previous_was_vowel = is_vowel;
    }
    if lower.ends_with('e') && count > 1 {
        count -= 1;
    }
    count.max(1)
}

// Flesch-style approximation. Zero words is defined as 0, not NaN.
fn readability_score(words: &[&str], average_sentence_length: f64) -> i32 {
    if words.is_empty() {
        return 0;
    }
    let total_syllables: usize = words.iter().map(|w| estimate_syllables(w)).sum();
    let average_syllables = total_syllables as f64 / words.len() as f64;
    let raw = 206.835 - 1.015 * average_sentence_length - 84.6 * average_syllables;
    (raw.round() as i32).clamp(0, 100)
}

pub fn readability_band(score: i32) -> &'static str {
    if score >= TH.band_very_easy_min {
        "very easy"
    } else if score >= TH.band_easy_min {
        "easy"
    } else if score >= TH.band_fairly_easy_min {
        "fairly easy"
    } else if score >= TH.band_standard_min {
        "standard"
    } else if score >= TH.band_fairly_difficult_min {
        "fairly difficult"
    } else if score >= TH.band_difficult_min {
        "difficult"
    } else {
        "very difficult"
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Scan `text` against the pattern table and sentence heuristics, returning
/// at most eight suggestions: pattern matches first (table order, then match
/// order), then per-sentence findings in sentence order.
pub fn analyze(text: &str) -> Vec<Suggestion> {
    let mut suggestions = pattern_suggestions(text);
    suggestions.extend(sentence_suggestions(text));
    suggestions.truncate(TH.suggestion_cap);
    suggestions
}

pub fn compute_statistics(text: &str) -> WritingStatistics {
    let words: Vec<&str> = text.split_whitespace().collect();
    let sentence_count = split_sentences(text).len();
    let paragraph_count = PARAGRAPH_SPLIT_RE
        .split(text)
        .filter(|p| !p.trim().is_empty())
        .count();

    let word_count = words.len();
    let average = if sentence_count > 0 {
        word_count as f64 / sentence_count as f64
    } else {
        0.0
    };
    let score = readability_score(&words, average);

    WritingStatistics {
        word_count,
        character_count: text.chars().count(),
        character_count_no_spaces: text.chars().filter(|c| !c.is_whitespace()).count(),
        sentence_count,
        paragraph_count,
        average_words_per_sentence: (average * 10.0).round() / 10.0,
        readability_score: score,
        readability_band: readability_band(score).to_string(),
        reading_time_minutes: word_count.div_ceil(TH.reading_wpm),
    }
}

pub fn analyze_document(text: &str) -> WritingAnalysis {
    WritingAnalysis {
        suggestions: analyze(text),
        stats: compute_statistics(text),
    }
}

/// Replace the first occurrence of the suggestion's flagged text. Returns
/// `None` when the suggestion carries no replacement.
pub fn apply_suggestion(text: &str, suggestion: &Suggestion) -> Option<String> {
    let replacement = suggestion.replacement.as_deref()?;
    Some(text.replacen(&suggestion.original_text, replacement, 1))
}

/// Remove a suggestion by id; unknown ids are a no-op.
pub fn dismiss_suggestion(suggestions: &mut Vec<Suggestion>, id: &str) {
    suggestions.retain(|s| s.id != id);
}
