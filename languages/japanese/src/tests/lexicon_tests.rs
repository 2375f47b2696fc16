use crate::error::LexiconError;
use crate::kanji_dictionary::KanjiDictionary;
use crate::word::{Word, WordBuilder};
use crate::word_dictionary::WordDictionary;

/// Build a word of kanji read as given, created through `dict`'s own kanji
fn build(dict: &mut WordDictionary, parts: &[(char, &str)], definition: &str) -> Word {
    let mut builder = WordBuilder::new();
    for (character, furigana) in parts {
        builder = builder.kanji(dict.kanji_mut().with_reading(*character, furigana));
    }
    builder.build(definition, dict.kanji_mut()).unwrap()
}

#[test]
fn test_reading_overtakes_after_more_words() {
    let mut kanji = KanjiDictionary::new();
    let sei = kanji.create('生', "life").with_reading("せい");
    let nama = kanji.with_reading('生', "なま");

    for word in ["先生", "学生"] {
        kanji.attach(&sei, word).unwrap();
    }
    assert_eq!(kanji.lookup('生').unwrap().readings().collect::<Vec<_>>(), vec!["せい"]);

    for word in ["生物", "生卵", "生ビール"] {
        kanji.attach(&nama, word).unwrap();
    }

    let entry = kanji.lookup('生').unwrap();
    assert_eq!(entry.readings().collect::<Vec<_>>(), vec!["なま", "せい"]);
    assert_eq!(entry.num_words_for("なま"), 3);
    assert_eq!(entry.num_words_for("せい"), 2);
    assert_eq!(entry.num_words(), 5);
}

#[test]
fn test_create_twice_keeps_one_entry_with_latest_meaning() {
    let mut kanji = KanjiDictionary::new();
    kanji.create('日', "sun");
    kanji.create('日', "day");

    assert_eq!(kanji.len(), 1);
    assert_eq!(kanji.lookup('日').unwrap().meaning(), "day");
}

#[test]
fn test_get_never_fails() {
    let mut kanji = KanjiDictionary::new();
    assert!(kanji.lookup('月').is_none());
    assert_eq!(kanji.get('月').meaning(), "?");
    assert_eq!(kanji.len(), 1);
}

#[test]
fn test_one_person_round_trip() {
    let mut dict = WordDictionary::new(KanjiDictionary::new());
    dict.kanji_mut().create('一', "one");
    dict.kanji_mut().create('人', "person");

    let word = build(&mut dict, &[('一', "ひと"), ('人', "り")], "one person");
    assert_eq!(word.written_form(), "一人");
    assert_eq!(word.pronounced_form(), "ひとり");

    let id = dict.put(word).unwrap();
    let stored = dict.word(id).unwrap();
    assert_eq!(stored.definition(), "one person");
    assert_eq!(
        dict.kanji().lookup('人').unwrap().words_for("り"),
        vec!["一人"]
    );
}

#[test]
fn test_duplicate_put_and_conflict_lifecycle() {
    let mut dict = WordDictionary::new(KanjiDictionary::new());

    let first = build(&mut dict, &[('今', "いま")], "now");
    let id = dict.put(first).unwrap();
    let duplicate = build(&mut dict, &[('今', "いま")], "now");
    assert_eq!(dict.put(duplicate).unwrap(), id);

    let conflicting = build(&mut dict, &[('今', "こん")], "present");
    assert!(matches!(
        dict.put(conflicting),
        Err(LexiconError::Conflict { .. })
    ));
    // The failed put leaves the stored word's kanji state alone
    let entry = dict.kanji().lookup('今').unwrap();
    assert_eq!(entry.num_words_for("いま"), 1);
    assert_eq!(entry.num_words_for("こん"), 0);

    assert!(dict.destroy("今").unwrap());
    let again = build(&mut dict, &[('今', "こん")], "present");
    let new_id = dict.put(again).unwrap();
    assert_ne!(new_id, id);
    assert_eq!(dict.get("今").unwrap().pronounced_form(), "こん");
}

#[test]
fn test_attempt_on_attached_reading_records() {
    let mut dict = WordDictionary::new(KanjiDictionary::new());
    let word = build(&mut dict, &[('水', "みず")], "water");
    dict.put(word).unwrap();

    dict.attempt("水", true).unwrap();
    dict.attempt("水", false).unwrap();

    let score = dict.kanji().lookup('水').unwrap().score("みず");
    assert_eq!(score.attempts(), 2);
    assert_eq!(score.successes(), 1);
    assert_eq!(score.failures(), 1);
    assert_eq!(score.display_rate(), "50.00%");
}

#[test]
fn test_attempt_on_never_attached_reading_fails() {
    let mut kanji = KanjiDictionary::new();
    let binding = kanji.with_reading('水', "すい");

    assert_eq!(
        kanji.attempt(&binding, true),
        Err(LexiconError::ReadingNotAttached {
            character: '水',
            furigana: "すい".to_string(),
        })
    );
    assert_eq!(kanji.score(&binding).attempts(), 0);
}

#[test]
fn test_attempt_on_emptied_reading_still_records() {
    let mut dict = WordDictionary::new(KanjiDictionary::new());
    let word = build(&mut dict, &[('水', "みず")], "water");
    dict.put(word).unwrap();
    dict.destroy("水").unwrap();

    let binding = dict.kanji_mut().with_reading('水', "みず");
    dict.kanji_mut().attempt(&binding, true).unwrap();
    assert_eq!(dict.kanji().score(&binding).attempts(), 1);
    assert_eq!(dict.kanji().lookup('水').unwrap().num_words(), 0);
}

#[test]
fn test_word_attempt_in_foreign_dictionary_records_nothing() {
    let mut home = WordDictionary::new(KanjiDictionary::new());
    let word = build(&mut home, &[('一', "ひと"), ('人', "り")], "one person");

    let mut other = KanjiDictionary::new();
    other.create('一', "one");
    other.create('人', "person");

    assert_eq!(
        word.attempt(&mut other, true),
        Err(LexiconError::ForeignKanji { character: '一' })
    );
    assert_eq!(other.lookup('一').unwrap().total_score().attempts(), 0);

    word.attempt(home.kanji_mut(), true).unwrap();
    assert_eq!(home.kanji().lookup('一').unwrap().score("ひと").attempts(), 1);
    assert_eq!(home.kanji().lookup('人').unwrap().score("り").attempts(), 1);
}
