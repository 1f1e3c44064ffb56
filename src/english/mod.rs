/// English word inflection — pluralization and indefinite articles.
///
/// These back the list-derived actions. Both are pure functions over plain
/// lowercase-ish English nouns; they use small rule tables rather than a full
/// morphological model, which covers word-list vocabulary well.

const UNCOUNTABLE: &[&str] = &[
    "advice",
    "deer",
    "equipment",
    "fish",
    "information",
    "money",
    "moose",
    "news",
    "rice",
    "series",
    "sheep",
    "species",
];

const IRREGULAR: &[(&str, &str)] = &[
    ("child", "children"),
    ("die", "dice"),
    ("foot", "feet"),
    ("goose", "geese"),
    ("man", "men"),
    ("mouse", "mice"),
    ("ox", "oxen"),
    ("person", "people"),
    ("tooth", "teeth"),
    ("woman", "women"),
];

// -f/-fe nouns that pluralize with a plain "s" instead of "ves".
const KEEP_F: &[&str] = &["belief", "chef", "chief", "proof", "roof", "safe"];

// -o nouns that take "es"; the rest take "s" (piano, photo, ...).
const O_TAKES_ES: &[&str] = &["echo", "hero", "potato", "tomato", "torpedo", "veto"];

/// Plural form of an English noun.
pub fn pluralize(noun: &str) -> String {
    let noun = noun.trim();
    if noun.is_empty() {
        return String::new();
    }
    let lower = noun.to_lowercase();

    if UNCOUNTABLE.contains(&lower.as_str()) {
        return noun.to_string();
    }
    if let Some((_, plural)) = IRREGULAR.iter().find(|(s, _)| *s == lower) {
        return (*plural).to_string();
    }

    if lower.ends_with('s')
        || lower.ends_with("sh")
        || lower.ends_with("ch")
        || lower.ends_with('x')
        || lower.ends_with('z')
    {
        return format!("{}es", noun);
    }
    if lower.ends_with('y') && !ends_with_vowel_then(&lower, 'y') {
        return format!("{}ies", &noun[..noun.len() - 1]);
    }
    if lower.ends_with("fe") && !KEEP_F.contains(&lower.as_str()) {
        return format!("{}ves", &noun[..noun.len() - 2]);
    }
    if lower.ends_with('f') && !KEEP_F.contains(&lower.as_str()) {
        return format!("{}ves", &noun[..noun.len() - 1]);
    }
    if lower.ends_with('o') && O_TAKES_ES.contains(&lower.as_str()) {
        return format!("{}es", noun);
    }

    format!("{}s", noun)
}

fn ends_with_vowel_then(word: &str, last: char) -> bool {
    let mut chars = word.chars().rev();
    if chars.next() != Some(last) {
        return false;
    }
    matches!(chars.next(), Some('a' | 'e' | 'i' | 'o' | 'u'))
}

// Vowel-initial words that still take "a" (pronounced with a consonant
// sound), matched by prefix against the lowercased first word.
const A_EXCEPTIONS: &[&str] = &[
    "eu", "ewe", "once", "one", "ouija", "ubiq", "ufo", "uke", "unanim", "uni", "ura", "use",
    "usu", "ute", "uti",
];

// Consonant-initial words that take "an" (silent h).
const AN_EXCEPTIONS: &[&str] = &["heir", "honest", "honor", "honour", "hour"];

/// Prefix a phrase with its indefinite article ("a " or "an "), chosen from
/// the phrase's first word. An empty phrase comes back empty.
pub fn articlize(phrase: &str) -> String {
    let trimmed = phrase.trim();
    let Some(first_word) = trimmed.split_whitespace().next() else {
        return String::new();
    };
    format!("{} {}", indefinite_article(first_word), trimmed)
}

fn indefinite_article(word: &str) -> &'static str {
    let lower = word.to_lowercase();
    let starts_with_vowel = matches!(lower.chars().next(), Some('a' | 'e' | 'i' | 'o' | 'u'));

    if starts_with_vowel {
        if A_EXCEPTIONS.iter().any(|p| lower.starts_with(p)) {
            "a"
        } else {
            "an"
        }
    } else if AN_EXCEPTIONS.iter().any(|p| lower.starts_with(p)) {
        "an"
    } else {
        "a"
    }
}
