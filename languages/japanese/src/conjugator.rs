use std::sync::Arc;

use yomi_core::{ConjugationResult, Conjugator};

use crate::error::ConjugationError;
use crate::registry::{ConjugationRegistry, ConjugationTable};
use crate::verb::{Inflection, Verb, VerbForm};

/// Table-driven conjugation over a shared registry
#[derive(Debug, Clone)]
pub struct JapaneseConjugator {
    registry: Arc<ConjugationRegistry>,
}

impl JapaneseConjugator {
    pub fn new(registry: impl Into<Arc<ConjugationRegistry>>) -> Self {
        Self {
            registry: registry.into(),
        }
    }

    pub fn registry(&self) -> &ConjugationRegistry {
        &self.registry
    }

    /// Conjugate `verb` into `form`.
    ///
    /// Regular verbs keep their base and swap the ending for the table value;
    /// irregular verbs are replaced whole, in both written and pronounced form.
    pub fn conjugate(
        &self,
        verb: &Verb,
        form: &VerbForm,
    ) -> Result<ConjugationResult, ConjugationError> {
        let table = self
            .registry
            .get(form)
            .ok_or(ConjugationError::FormNotRegistered(*form))?;

        let (written, pronounced) = inflect(verb.inflection(), form, table)?;
        tracing::debug!("Conjugated '{}' to {}: {}", verb.written_form(), form, written);

        Ok(ConjugationResult {
            written,
            pronounced,
            definition: format!("{} ({})", verb.definition(), form),
            form_label: form.to_string(),
        })
    }

    /// Every registered form of `verb`, in form order
    pub fn conjugate_all(
        &self,
        verb: &Verb,
    ) -> Vec<(VerbForm, Result<ConjugationResult, ConjugationError>)> {
        self.registry
            .forms()
            .map(|form| (*form, self.conjugate(verb, form)))
            .collect()
    }
}

impl Conjugator for JapaneseConjugator {
    type Verb = Verb;
    type Form = VerbForm;
    type Error = ConjugationError;

    fn conjugate(
        &self,
        verb: &Self::Verb,
        form: &Self::Form,
    ) -> Result<ConjugationResult, Self::Error> {
        JapaneseConjugator::conjugate(self, verb, form)
    }
}

fn inflect(
    inflection: &Inflection,
    form: &VerbForm,
    table: &ConjugationTable,
) -> Result<(String, String), ConjugationError> {
    match inflection {
        Inflection::RegularA {
            written_base,
            pronounced_base,
            ending,
        } => {
            let replacement =
                table
                    .regular_a(*ending)
                    .ok_or_else(|| ConjugationError::MissingEnding {
                        form: *form,
                        ending: ending.to_string(),
                    })?;
            Ok((
                format!("{written_base}{replacement}"),
                format!("{pronounced_base}{replacement}"),
            ))
        }
        Inflection::RegularB {
            written_base,
            pronounced_base,
        } => {
            let replacement = table
                .regular_b()
                .ok_or(ConjugationError::MissingRegularB(*form))?;
            Ok((
                format!("{written_base}{replacement}"),
                format!("{pronounced_base}{replacement}"),
            ))
        }
        Inflection::Irregular { lexeme } => {
            let replacement =
                table
                    .irregular(lexeme)
                    .ok_or_else(|| ConjugationError::MissingLexeme {
                        form: *form,
                        lexeme: lexeme.clone(),
                    })?;
            Ok((replacement.to_string(), replacement.to_string()))
        }
    }
}
