//! Controlled-vocabulary lookups.

use std::borrow::Cow;

use framer_model::{KeyPreparation, Vocabulary};

/// Prepare raw input for an exact-match lookup.
pub fn prepare_key(raw: &str, preparation: KeyPreparation) -> Cow<'_, str> {
    match preparation {
        KeyPreparation::Verbatim => Cow::Borrowed(raw),
        KeyPreparation::Trim => Cow::Borrowed(raw.trim()),
        KeyPreparation::SourceCode => Cow::Owned(raw.trim().trim_matches('.').to_uppercase()),
    }
}

/// Map a legacy code through a vocabulary.
///
/// Matching is exact and case-sensitive after key preparation. Unknown codes
/// and codes explicitly mapped to nothing are both missing.
pub fn lookup(value: Option<&str>, vocabulary: Vocabulary) -> Option<String> {
    let key = prepare_key(value?, vocabulary.key_preparation());
    vocabulary
        .entries()
        .iter()
        .find(|(code, _)| *code == &*key)
        .and_then(|(_, mapped)| mapped.map(str::to_string))
}
