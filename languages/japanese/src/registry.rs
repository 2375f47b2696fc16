use std::collections::{BTreeMap, HashMap};

use crate::verb::{VerbEnding, VerbForm};

/// Replacements for one verb form.
///
/// Regular A verbs swap their dictionary ending for a per-ending value,
/// regular B verbs swap `る` for a single value, irregular verbs are replaced
/// whole by lexeme.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConjugationTable {
    regular_a: HashMap<VerbEnding, String>,
    regular_b: Option<String>,
    irregular: HashMap<String, String>,
}

impl ConjugationTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_regular_a(&mut self, ending: VerbEnding, replacement: impl Into<String>) {
        self.regular_a.insert(ending, replacement.into());
    }

    pub fn set_regular_b(&mut self, replacement: impl Into<String>) {
        self.regular_b = Some(replacement.into());
    }

    pub fn set_irregular(&mut self, lexeme: impl Into<String>, replacement: impl Into<String>) {
        self.irregular.insert(lexeme.into(), replacement.into());
    }

    pub fn regular_a(&self, ending: VerbEnding) -> Option<&str> {
        self.regular_a.get(&ending).map(String::as_str)
    }

    pub fn regular_b(&self) -> Option<&str> {
        self.regular_b.as_deref()
    }

    pub fn irregular(&self, lexeme: &str) -> Option<&str> {
        self.irregular.get(lexeme).map(String::as_str)
    }

    /// Irregular lexemes this table knows
    pub fn lexemes(&self) -> impl Iterator<Item = &str> {
        self.irregular.keys().map(String::as_str)
    }
}

/// Conjugation tables keyed by verb form.
///
/// Built once from table sources and read-only afterwards; hand it to a
/// [`crate::JapaneseConjugator`].
#[derive(Debug, Clone, Default)]
pub struct ConjugationRegistry {
    tables: BTreeMap<VerbForm, ConjugationTable>,
}

impl ConjugationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `table` for `form`, returning the table it replaced
    pub fn insert(&mut self, form: VerbForm, table: ConjugationTable) -> Option<ConjugationTable> {
        self.tables.insert(form, table)
    }

    pub fn get(&self, form: &VerbForm) -> Option<&ConjugationTable> {
        self.tables.get(form)
    }

    pub fn contains(&self, form: &VerbForm) -> bool {
        self.tables.contains_key(form)
    }

    /// Registered forms, greatest (plain positive) last within each form name
    pub fn forms(&self) -> impl Iterator<Item = &VerbForm> {
        self.tables.keys()
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Merge `other` in; its tables replace ours for the same form
    pub fn extend(&mut self, other: ConjugationRegistry) {
        self.tables.extend(other.tables);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_lookups() {
        let mut table = ConjugationTable::new();
        table.set_regular_a(VerbEnding::Mu, "みます");
        table.set_regular_b("ます");
        table.set_irregular("する", "します");

        assert_eq!(table.regular_a(VerbEnding::Mu), Some("みます"));
        assert_eq!(table.regular_a(VerbEnding::Ku), None);
        assert_eq!(table.regular_b(), Some("ます"));
        assert_eq!(table.irregular("する"), Some("します"));
        assert_eq!(table.irregular("くる"), None);
    }

    #[test]
    fn later_tables_win() {
        let form = VerbForm::dictionary();
        let mut first = ConjugationTable::new();
        first.set_regular_b("る");
        let mut second = ConjugationTable::new();
        second.set_regular_b("るる");

        let mut registry = ConjugationRegistry::new();
        registry.insert(form, first);

        let mut more = ConjugationRegistry::new();
        more.insert(form, second);
        registry.extend(more);

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get(&form).unwrap().regular_b(), Some("るる"));
    }

    #[test]
    fn forms_are_ordered() {
        let mut registry = ConjugationRegistry::new();
        for form in VerbForm::all() {
            registry.insert(form, ConjugationTable::new());
        }

        let forms: Vec<VerbForm> = registry.forms().copied().collect();
        assert_eq!(forms.len(), 8);
        assert!(forms.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(forms[3], VerbForm::dictionary());
    }
}
