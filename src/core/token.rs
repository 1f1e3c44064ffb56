/// Placeholder tokenizer and classifier.
///
/// The scanner extracts `{{ ... }}` occurrences from a template; the
/// classifier sorts each one into a call form or a bare reference using a
/// two-production grammar. Token contents are only ever matched against these
/// shapes and compared to registered names — never evaluated.

/// One placeholder occurrence in a template.
#[derive(Debug, Clone, PartialEq)]
pub struct Placeholder {
    /// The matched token exactly as it appears, braces included.
    pub raw: String,
    /// The interior with braces stripped and surrounding whitespace trimmed.
    pub action: String,
}

/// A classified placeholder interior.
#[derive(Debug, Clone, PartialEq)]
pub enum ActionExpr {
    /// `name(arg, arg, ...)` — identifier immediately followed by a
    /// parenthesized argument list, nothing before or after.
    Call { name: String, args_text: String },
    /// Anything else; resolved as a registry lookup of the whole text.
    Bare(String),
}

/// Scan a template for all non-overlapping placeholder tokens in
/// earliest-start order.
///
/// A token opens with `{{` and closes at the earliest following `}}` that
/// leaves a non-empty interior, so `{{}}` is not a token and survives
/// untouched. Nesting is not recognized; an inner `{{` simply becomes part of
/// the interior text.
pub fn scan(template: &str) -> Vec<Placeholder> {
    let mut tokens = Vec::new();
    let mut pos = 0;

    while let Some(open) = template[pos..].find("{{") {
        let open = pos + open;
        let interior_start = open + 2;
        match find_close(template, interior_start) {
            Some(close) => {
                let raw = template[open..close + 2].to_string();
                let action = template[interior_start..close].trim().to_string();
                tokens.push(Placeholder { raw, action });
                pos = close + 2;
            }
            None => break,
        }
    }

    tokens
}

/// Earliest `}}` at or after `from` that leaves a non-empty interior.
fn find_close(template: &str, from: usize) -> Option<usize> {
    let mut search = from;
    while let Some(rel) = template[search..].find("}}") {
        let idx = search + rel;
        if idx > from {
            return Some(idx);
        }
        // Empty interior; step past the first '}' and keep looking.
        search = idx + 1;
    }
    None
}

/// Classify a trimmed placeholder interior.
///
/// The call-form production is deliberately narrow: one or more identifier
/// characters, `(`, an interior with no parentheses at all, then `)` as the
/// very last character. Nested or unbalanced parentheses fail the production
/// and fall through to `Bare`, which will not match any registered name.
pub fn classify(action: &str) -> ActionExpr {
    if let Some(open) = action.find('(') {
        let name = &action[..open];
        let interior = &action[open + 1..];
        if !name.is_empty()
            && name.chars().all(is_identifier_char)
            && action.ends_with(')')
            && !interior[..interior.len() - 1].contains(['(', ')'])
        {
            return ActionExpr::Call {
                name: name.to_string(),
                args_text: interior[..interior.len() - 1].to_string(),
            };
        }
    }
    ActionExpr::Bare(action.to_string())
}

fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
