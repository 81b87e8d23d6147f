//! Line-anchored `key = value` splitting without an HCL grammar

use std::sync::LazyLock;

use regex::Regex;

/// Declaration key at the start of a line, followed by `=`
static DECLARATION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^([A-Za-z0-9_]+)[ \t]*=[ \t]*").expect("Invalid declaration regex")
});

/// One `key = value` occurrence in source text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawDeclaration {
    pub key: String,
    /// Everything up to the next declaration, untouched
    pub raw_value: String,
}

impl RawDeclaration {
    /// Value with surrounding whitespace removed
    pub fn value(&self) -> &str {
        self.raw_value.trim()
    }

    /// Render as a `key=value` token
    pub fn to_token(&self) -> String {
        format!("{}={}", self.key, self.value())
    }
}

/// Split text into declarations, in source order
///
/// Values are not validated: multi-line values and nested braces are kept
/// verbatim, duplicate keys are all emitted, and a key with nothing after
/// `=` gets an empty value.
pub fn split_declarations(text: &str) -> Vec<RawDeclaration> {
    // (key, match start, value start)
    let spans: Vec<(&str, usize, usize)> = DECLARATION_REGEX
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let key = caps.get(1)?;
            Some((key.as_str(), whole.start(), whole.end()))
        })
        .collect();

    spans
        .iter()
        .enumerate()
        .map(|(i, (key, _, value_start))| {
            let value_end = spans
                .get(i + 1)
                .map(|(_, next_start, _)| *next_start)
                .unwrap_or(text.len());

            RawDeclaration {
                key: key.to_string(),
                raw_value: text[*value_start..value_end].to_string(),
            }
        })
        .collect()
}

/// Split text and render each declaration as `key=value`
pub fn split_declarations_to_strings(text: &str) -> Vec<String> {
    split_declarations(text)
        .iter()
        .map(RawDeclaration::to_token)
        .collect()
}
