use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::VerbError;

/// Grammatical category a verb can be conjugated into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FormName {
    PresentIndicative,
    PastIndicative,
}

impl FormName {
    pub const ALL: [FormName; 2] = [FormName::PresentIndicative, FormName::PastIndicative];

    pub fn as_str(&self) -> &'static str {
        match self {
            FormName::PresentIndicative => "Present Indicative",
            FormName::PastIndicative => "Past Indicative",
        }
    }
}

impl FromStr for FormName {
    type Err = VerbError;

    /// Case and spacing insensitive: "present indicative", "PRESENT_INDICATIVE"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '_')
            .flat_map(char::to_lowercase)
            .collect();

        match key.as_str() {
            "presentindicative" => Ok(FormName::PresentIndicative),
            "pastindicative" => Ok(FormName::PastIndicative),
            _ => Err(VerbError::UnknownForm(s.to_string())),
        }
    }
}

impl fmt::Display for FormName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A form name plus politeness and polarity.
///
/// Ordering compares the form name first, then plain above polite, then
/// positive above negative, so the plain positive variant of a form is the
/// greatest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VerbForm {
    form: FormName,
    is_plain: bool,
    is_positive: bool,
}

impl VerbForm {
    pub fn new(is_plain: bool, is_positive: bool, form: FormName) -> Self {
        Self {
            form,
            is_plain,
            is_positive,
        }
    }

    /// Build from a form name string; fails on unrecognized names
    pub fn parse(is_plain: bool, is_positive: bool, form: &str) -> Result<Self, VerbError> {
        Ok(Self::new(is_plain, is_positive, form.parse()?))
    }

    /// Plain positive present: the dictionary form itself
    pub fn dictionary() -> Self {
        Self::new(true, true, FormName::PresentIndicative)
    }

    pub fn is_plain(&self) -> bool {
        self.is_plain
    }

    pub fn is_positive(&self) -> bool {
        self.is_positive
    }

    pub fn form(&self) -> FormName {
        self.form
    }

    /// Every combination of politeness and polarity for every form name
    pub fn all() -> impl Iterator<Item = VerbForm> {
        FormName::ALL.into_iter().flat_map(|form| {
            [(true, true), (true, false), (false, true), (false, false)]
                .into_iter()
                .map(move |(plain, positive)| VerbForm::new(plain, positive, form))
        })
    }
}

impl fmt::Display for VerbForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_plain {
            f.write_str("Polite ")?;
        }
        if !self.is_positive {
            f.write_str("Negative ")?;
        }
        f.write_str(self.form.as_str())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    const PRESENT: &str = "Present Indicative";
    const PAST: &str = "Past Indicative";

    #[test]
    fn parse_known_form() {
        let form = VerbForm::parse(true, true, PRESENT).unwrap();
        assert!(form.is_plain());
        assert!(form.is_positive());
        assert_eq!(form.form().as_str(), PRESENT);
        assert_eq!(form, VerbForm::dictionary());
    }

    #[test]
    fn parse_unknown_form_fails() {
        assert_eq!(
            VerbForm::parse(true, true, "Invalid Form"),
            Err(VerbError::UnknownForm("Invalid Form".to_string()))
        );
    }

    #[test]
    fn parse_is_lenient_about_case_and_separators() {
        assert_eq!("PAST_INDICATIVE".parse::<FormName>(), Ok(FormName::PastIndicative));
        assert_eq!("past  indicative".parse::<FormName>(), Ok(FormName::PastIndicative));
    }

    #[test]
    fn equality_and_hash_follow_fields() {
        let forms: HashSet<VerbForm> = VerbForm::all().collect();
        assert_eq!(forms.len(), 8);
        assert!(forms.contains(&VerbForm::parse(true, true, PRESENT).unwrap()));
        assert_ne!(
            VerbForm::parse(true, true, PAST).unwrap(),
            VerbForm::dictionary()
        );
    }

    #[test]
    fn plain_is_greater_than_polite() {
        let plain = VerbForm::parse(true, true, PRESENT).unwrap();
        let polite = VerbForm::parse(false, true, PRESENT).unwrap();
        assert!(plain > polite);
    }

    #[test]
    fn positive_is_greater_than_negative() {
        let positive = VerbForm::parse(true, true, PRESENT).unwrap();
        let negative = VerbForm::parse(true, false, PRESENT).unwrap();
        assert!(positive > negative);
    }

    #[test]
    fn politeness_outranks_polarity() {
        let plain_negative = VerbForm::parse(true, false, PRESENT).unwrap();
        let polite_positive = VerbForm::parse(false, true, PRESENT).unwrap();
        assert!(plain_negative > polite_positive);
    }

    #[test]
    fn form_name_outranks_everything() {
        let present = VerbForm::parse(true, true, PRESENT).unwrap();
        let past = VerbForm::parse(false, false, PAST).unwrap();
        assert!(past > present);
    }

    #[test]
    fn display_labels() {
        assert_eq!(VerbForm::dictionary().to_string(), PRESENT);
        assert_eq!(
            VerbForm::parse(false, true, PRESENT).unwrap().to_string(),
            "Polite Present Indicative"
        );
        assert_eq!(
            VerbForm::parse(true, false, PRESENT).unwrap().to_string(),
            "Negative Present Indicative"
        );
        assert_eq!(
            VerbForm::parse(false, false, PAST).unwrap().to_string(),
            "Polite Negative Past Indicative"
        );
    }
}
