use yomi_core::CardFace;

use crate::conjugator::JapaneseConjugator;
use crate::error::ConjugationError;
use crate::kanji_dictionary::KanjiDictionary;
use crate::loader::TableLoader;
use crate::registry::ConjugationRegistry;
use crate::verb::{FormName, Verb, VerbClass, VerbForm};
use crate::word::Word;

fn form(is_plain: bool, is_positive: bool, name: &str) -> VerbForm {
    VerbForm::parse(is_plain, is_positive, name).unwrap()
}

#[test]
fn test_reference_conjugations() {
    let conjugator = JapaneseConjugator::new(TableLoader::shared().unwrap());

    let nomu = Verb::new("飲む", "のむ", "to drink", VerbClass::RegularA).unwrap();
    let miru = Verb::new("見る", "みる", "to see", VerbClass::RegularB).unwrap();
    let suru = Verb::new("する", "する", "to do", VerbClass::Irregular).unwrap();

    let polite_present = form(false, true, "Present Indicative");
    let plain_past = form(true, true, "Past Indicative");

    assert_eq!(
        conjugator.conjugate(&nomu, &polite_present).unwrap().written,
        "飲みます"
    );
    assert_eq!(conjugator.conjugate(&miru, &plain_past).unwrap().written, "見た");
    assert_eq!(
        conjugator.conjugate(&suru, &polite_present).unwrap().written,
        "します"
    );
}

#[test]
fn test_verb_from_built_word() {
    let mut kanji = KanjiDictionary::new();
    let yomu = kanji.create('読', "read").with_reading("よ");
    let word = Word::builder()
        .kanji(yomu)
        .kana("む")
        .build("to read", &mut kanji)
        .unwrap();

    let verb = Verb::from_word(&word, VerbClass::RegularA).unwrap();
    let conjugator = JapaneseConjugator::new(TableLoader::shared().unwrap());
    let result = conjugator
        .conjugate(&verb, &form(false, false, "Past Indicative"))
        .unwrap();

    assert_eq!(result.written_form(), "読みませんでした");
    assert_eq!(result.pronounced_form(), "よみませんでした");
    assert_eq!(result.definition(), "to read (Polite Negative Past Indicative)");
}

#[test]
fn test_isolated_registry_from_custom_source() {
    let source = "\
Form,Plain,Positive,く,RegularB,する
Past Indicative,TRUE,FALSE,かなかった,なかった,しなかった
";
    let mut registry = ConjugationRegistry::new();
    TableLoader::default().load_str(&mut registry, source).unwrap();
    let conjugator = JapaneseConjugator::new(registry);

    let kaku = Verb::new("書く", "かく", "to write", VerbClass::RegularA).unwrap();
    let plain_negative_past = VerbForm::new(true, false, FormName::PastIndicative);
    assert_eq!(
        conjugator.conjugate(&kaku, &plain_negative_past).unwrap().written,
        "書かなかった"
    );

    // Only the one row was loaded
    assert_eq!(
        conjugator.conjugate(&kaku, &VerbForm::dictionary()),
        Err(ConjugationError::FormNotRegistered(VerbForm::dictionary()))
    );
}

#[test]
fn test_extra_source_extends_embedded_table() {
    let mut registry = TableLoader::load_embedded().unwrap();
    let extra = "\
Form,Plain,Positive,ある
Present Indicative,TRUE,FALSE,ない
";
    TableLoader::default().load_str(&mut registry, extra).unwrap();
    let conjugator = JapaneseConjugator::new(registry);

    let aru = Verb::new("ある", "ある", "to exist", VerbClass::Irregular).unwrap();
    let negative = VerbForm::new(true, false, FormName::PresentIndicative);
    assert_eq!(conjugator.conjugate(&aru, &negative).unwrap().written, "ない");

    // The replaced row no longer carries the regular columns
    let nomu = Verb::new("飲む", "のむ", "to drink", VerbClass::RegularA).unwrap();
    assert!(matches!(
        conjugator.conjugate(&nomu, &negative),
        Err(ConjugationError::MissingEnding { .. })
    ));
    assert!(conjugator.conjugate(&nomu, &VerbForm::dictionary()).is_ok());
}

#[test]
fn test_table_cells_are_normalized() {
    // Half-width katakana and stray spaces are folded before use
    let source = "Form,Plain,Positive, ｽﾙ \nPresent Indicative, true ,TRUE, ｽﾙ\n";
    let registry = TableLoader::default().parse(source).unwrap();
    let table = registry.get(&VerbForm::dictionary()).unwrap();
    assert_eq!(table.irregular("スル"), Some("スル"));
}
