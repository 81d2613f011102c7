use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde_json::Value;
use thiserror::Error;

/// 词条：释义 + 提示，键为规范化后的单词。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    pub translation: String,
    pub hint: String,
}

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("word source is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("word source must be a flat JSON object")]
    NotAnObject,
    #[error("entry {key:?} must be a [translation, hint] pair")]
    BadEntry { key: String },
    #[error("entry {key:?} contains a non-string element")]
    NonString { key: String },
    #[error("key {key:?} normalizes to an empty string")]
    EmptyKey { key: String },
    #[error("key {key:?} collides with an existing entry after normalization")]
    DuplicateKey { key: String },
}

/// 规范化后再套用的标准词形替换表。值必须本身是规范形，
/// 否则 normalize 不再幂等。
static DEFAULT_ALIASES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([("colour", "color"), ("grey", "gray"), ("centre", "center")])
});

/// Strips whitespace and semicolons, lowercases, then rewrites known
/// alternate forms to their canonical spelling.
pub fn normalize(raw: &str) -> String {
    normalize_with(raw, &DEFAULT_ALIASES)
}

fn normalize_with(raw: &str, aliases: &HashMap<&'static str, &'static str>) -> String {
    let stripped: String = raw
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ';')
        .collect();
    let lowered = stripped.to_lowercase();
    match aliases.get(lowered.as_str()) {
        Some(canonical) => (*canonical).to_string(),
        None => lowered,
    }
}

/// Ordered word list for one drill run. Entry order is the source file's key
/// order, with compound keys (`"Child/Children"`) expanded in place so each
/// surface form becomes its own entry sharing the compound's value.
///
/// Read-only after load; a reload builds a fresh bank.
#[derive(Debug, Default)]
pub struct WordBank {
    entries: Vec<(String, WordEntry)>,
    positions: HashMap<String, usize>,
}

impl WordBank {
    pub fn from_json(raw: &str) -> Result<Self, FormatError> {
        let value: Value = serde_json::from_str(raw)?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> Result<Self, FormatError> {
        let object = match value {
            Value::Object(map) => map,
            _ => return Err(FormatError::NotAnObject),
        };

        let mut bank = WordBank::default();
        for (raw_key, raw_entry) in object {
            let entry = parse_entry(&raw_key, &raw_entry)?;
            for part in raw_key.split('/') {
                let key = normalize(part);
                if key.is_empty() {
                    return Err(FormatError::EmptyKey {
                        key: raw_key.clone(),
                    });
                }
                if bank.positions.contains_key(&key) {
                    return Err(FormatError::DuplicateKey {
                        key: raw_key.clone(),
                    });
                }
                bank.positions.insert(key.clone(), bank.entries.len());
                bank.entries.push((key, entry.clone()));
            }
        }
        Ok(bank)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn first(&self) -> Option<&str> {
        self.entries.first().map(|(key, _)| key.as_str())
    }

    /// The key following `key` in drill order; `None` past the last entry or
    /// for a key that is not in the bank.
    pub fn next(&self, key: &str) -> Option<&str> {
        let position = *self.positions.get(key)?;
        self.entries
            .get(position + 1)
            .map(|(next_key, _)| next_key.as_str())
    }

    /// Exact match against normalized keys. The caller must have run the
    /// answer through the same [`normalize`] the bank was built with.
    pub fn lookup(&self, normalized: &str) -> Option<&str> {
        self.positions
            .get(normalized)
            .map(|&position| self.entries[position].0.as_str())
    }

    pub fn entry(&self, key: &str) -> Option<&WordEntry> {
        self.positions
            .get(key)
            .map(|&position| &self.entries[position].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &WordEntry)> {
        self.entries
            .iter()
            .map(|(key, entry)| (key.as_str(), entry))
    }
}

fn parse_entry(raw_key: &str, value: &Value) -> Result<WordEntry, FormatError> {
    let pair = match value {
        Value::Array(items) if items.len() == 2 => items,
        _ => {
            return Err(FormatError::BadEntry {
                key: raw_key.to_string(),
            })
        }
    };
    let translation = pair[0].as_str().ok_or_else(|| FormatError::NonString {
        key: raw_key.to_string(),
    })?;
    let hint = pair[1].as_str().ok_or_else(|| FormatError::NonString {
        key: raw_key.to_string(),
    })?;
    Ok(WordEntry {
        translation: translation.to_string(),
        hint: hint.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_bank() -> WordBank {
        WordBank::from_json(
            r#"{"dog": ["狗", "dog hint"], "Child/Children": ["孩子", "child hint"]}"#,
        )
        .unwrap()
    }

    #[test]
    fn normalize_strips_and_lowercases() {
        assert_eq!(normalize("Be ; "), "be");
        assert_eq!(normalize("be"), "be");
        assert_eq!(normalize(" C hil;d"), "child");
    }

    #[test]
    fn normalize_applies_alias_table() {
        assert_eq!(normalize("Colour "), "color");
        assert_eq!(normalize("color"), "color");
    }

    #[test]
    fn compound_keys_expand_in_order() {
        let bank = sample_bank();
        let keys: Vec<&str> = bank.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, vec!["dog", "child", "children"]);
    }

    #[test]
    fn compound_parts_share_the_value() {
        let bank = sample_bank();
        assert_eq!(bank.entry("child"), bank.entry("children"));
        assert_eq!(bank.entry("child").unwrap().translation, "孩子");
        assert_eq!(bank.entry("children").unwrap().hint, "child hint");
    }

    #[test]
    fn navigation_follows_insertion_order() {
        let bank = sample_bank();
        assert_eq!(bank.first(), Some("dog"));
        assert_eq!(bank.next("dog"), Some("child"));
        assert_eq!(bank.next("child"), Some("children"));
        assert_eq!(bank.next("children"), None);
        assert_eq!(bank.next("missing"), None);
    }

    #[test]
    fn lookup_matches_normalized_keys_only() {
        let bank = sample_bank();
        assert_eq!(bank.lookup("children"), Some("children"));
        assert_eq!(bank.lookup("Children"), None);
        assert_eq!(bank.lookup("kids"), None);
    }

    #[test]
    fn empty_object_is_a_valid_empty_bank() {
        let bank = WordBank::from_json("{}").unwrap();
        assert!(bank.is_empty());
        assert_eq!(bank.first(), None);
    }

    #[test]
    fn top_level_array_is_rejected() {
        let err = WordBank::from_json(r#"["dog"]"#).unwrap_err();
        assert!(matches!(err, FormatError::NotAnObject));
    }

    #[test]
    fn entry_with_wrong_arity_is_rejected() {
        let err = WordBank::from_json(r#"{"dog": ["狗"]}"#).unwrap_err();
        assert!(matches!(err, FormatError::BadEntry { .. }));
    }

    #[test]
    fn entry_with_non_string_element_is_rejected() {
        let err = WordBank::from_json(r#"{"dog": ["狗", 3]}"#).unwrap_err();
        assert!(matches!(err, FormatError::NonString { .. }));
    }

    #[test]
    fn key_normalizing_to_empty_is_rejected() {
        let err = WordBank::from_json(r#"{" ; ": ["x", "y"]}"#).unwrap_err();
        assert!(matches!(err, FormatError::EmptyKey { .. }));
    }

    #[test]
    fn colliding_normalized_keys_are_rejected() {
        let err = WordBank::from_json(r#"{"be": ["是", "h1"], "Be ;": ["是", "h2"]}"#).unwrap_err();
        assert!(matches!(err, FormatError::DuplicateKey { .. }));
    }

    #[test]
    fn source_key_order_is_preserved() {
        let bank = WordBank::from_json(
            r#"{"zebra": ["斑马", "z"], "apple": ["苹果", "a"], "mouse": ["鼠", "m"]}"#,
        )
        .unwrap();
        let keys: Vec<&str> = bank.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, vec!["zebra", "apple", "mouse"]);
    }
}
