//! Property tests for guess marking, plus sanity checks on the bundled
//! word lists.

use proptest::prelude::*;
use wordmaze::wordle::{process_guess, Mark, WordList};

proptest! {
    #[test]
    fn one_mark_per_guess_letter(guess in "[a-z]{6}", answer in "[a-z]{6}") {
        prop_assert_eq!(process_guess(&guess, &answer).len(), 6);
    }

    #[test]
    fn correct_marks_are_exactly_the_position_matches(
        guess in "[a-z]{6}",
        answer in "[a-z]{6}",
    ) {
        let marks = process_guess(&guess, &answer);
        for ((g, a), &mark) in guess.chars().zip(answer.chars()).zip(marks.iter()) {
            prop_assert_eq!(mark == Mark::Correct, g == a);
        }
    }

    #[test]
    fn marked_letters_never_exceed_answer_multiplicity(
        guess in "[a-z]{6}",
        answer in "[a-z]{6}",
    ) {
        let marks = process_guess(&guess, &answer);
        for letter in 'a'..='z' {
            let claimed = guess
                .chars()
                .zip(marks.iter())
                .filter(|&(g, &mark)| g == letter && mark != Mark::Incorrect)
                .count();
            let available = answer.chars().filter(|&a| a == letter).count();
            prop_assert!(
                claimed <= available,
                "{} marks for '{}' but only {} in {}",
                claimed,
                letter,
                available,
                answer
            );
        }
    }

    #[test]
    fn guessing_the_answer_is_all_correct(answer in "[a-z]{6}") {
        let marks = process_guess(&answer, &answer);
        prop_assert!(marks.iter().all(|&mark| mark == Mark::Correct));
    }

    #[test]
    fn marking_ignores_case(guess in "[a-z]{6}", answer in "[a-z]{6}") {
        let upper = guess.to_uppercase();
        prop_assert_eq!(process_guess(&guess, &answer), process_guess(&upper, &answer));
    }
}

#[test]
fn bundled_answers_are_guessable() {
    let vocab = WordList::load(concat!(env!("CARGO_MANIFEST_DIR"), "/vocab.txt")).unwrap();
    let answers = WordList::load(concat!(env!("CARGO_MANIFEST_DIR"), "/answers.txt")).unwrap();
    assert!(!answers.is_empty());

    let text = std::fs::read_to_string(concat!(env!("CARGO_MANIFEST_DIR"), "/answers.txt")).unwrap();
    for word in text.lines().map(str::trim).filter(|line| !line.is_empty()) {
        assert_eq!(word.chars().count(), 6, "{} is not six letters", word);
        assert!(vocab.contains(word), "{} missing from the vocabulary", word);
    }
}
