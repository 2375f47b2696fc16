mod conjugation_tests;
mod lexicon_tests;
