//! Accent folding for filter text and cell values.
//!
//! Lower-cases the input and maps diacritic variants of a fixed Latin letter
//! set to their base letter, so that a user typing `cafe` still matches a
//! cell holding `Café`. The mapping table is deliberately closed: letters
//! outside it (e.g. `ā`) pass through unchanged.

use aho_corasick::{AhoCorasick, MatchKind};
use lazy_static::lazy_static;

use crate::error::{GridFilterError, Result};

/// Diacritic variant -> base letter. Keys are lowercase; folding lower-cases
/// the input first so uppercase variants land here too.
const FOLD_TABLE: &[(&str, &str)] = &[
    ("à", "a"),
    ("á", "a"),
    ("â", "a"),
    ("ã", "a"),
    ("ä", "a"),
    ("å", "a"),
    ("æ", "ae"),
    ("ç", "c"),
    ("è", "e"),
    ("é", "e"),
    ("ê", "e"),
    ("ë", "e"),
    ("ì", "i"),
    ("í", "i"),
    ("î", "i"),
    ("ï", "i"),
    ("ñ", "n"),
    ("ò", "o"),
    ("ó", "o"),
    ("ô", "o"),
    ("õ", "o"),
    ("ö", "o"),
    ("œ", "oe"),
    ("ù", "u"),
    ("ú", "u"),
    ("û", "u"),
    ("ü", "u"),
    ("ý", "y"),
    ("ÿ", "y"),
];

/// Character-mapping folder built over the fixed diacritic table.
pub struct AccentFolder {
    ac: AhoCorasick,
    replacements: Vec<&'static str>,
}

impl AccentFolder {
    /// Build a folder from the fixed table.
    pub fn new() -> Result<Self> {
        let keys: Vec<&str> = FOLD_TABLE.iter().map(|(k, _)| *k).collect();
        let replacements: Vec<&'static str> = FOLD_TABLE.iter().map(|(_, v)| *v).collect();

        let ac = AhoCorasick::builder()
            .match_kind(MatchKind::LeftmostLongest)
            .build(&keys)
            .map_err(|e| GridFilterError::Anyhow(anyhow::Error::from(e)))?;

        Ok(Self { ac, replacements })
    }

    /// Lower-case `input` and fold every mapped diacritic.
    pub fn fold(&self, input: &str) -> String {
        let lower = input.to_lowercase();
        self.ac.replace_all(&lower, &self.replacements)
    }
}

lazy_static! {
    // The table is static, so the automaton build cannot fail at runtime.
    static ref FOLDER: AccentFolder = AccentFolder::new().expect("static fold table");
}

/// Fold accents using the shared folder instance.
pub fn fold_accents(input: &str) -> String {
    FOLDER.fold(input)
}
