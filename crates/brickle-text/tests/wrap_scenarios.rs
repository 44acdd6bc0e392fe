//! End-to-end wrapping scenarios through the public API.

use brickle_text::wrap::wrap;

#[test]
fn short_label_is_untouched() {
    assert_eq!(wrap("move 10 steps", 20), "move 10 steps");
}

#[test]
fn five_words_balance_across_three_lines() {
    let wrapped = wrap("the quick brown fox jumps", 10);
    assert_eq!(wrapped, "the quick\nbrown fox\njumps");

    // Every line lands near the ten-cell target.
    for line in wrapped.split('\n') {
        assert!(line.len() <= 13, "line {line:?} strays far from target");
    }
}

#[test]
fn oversized_word_widens_the_limit() {
    // A 34-char word cannot be split; the limit widens to fit it.
    let word = "supercalifragilisticexpialidocious";
    assert_eq!(wrap(word, 5), word);
}

#[test]
fn punctuation_attracts_breaks() {
    let wrapped = wrap("Hello, world! Nice day.", 8);
    let lines: Vec<&str> = wrapped.split('\n').collect();
    assert_eq!(lines, ["Hello,", "world!", "Nice day."]);
}

#[test]
fn each_input_line_wraps_on_its_own() {
    // "a" is already short; only "bb ccc" gets re-wrapped.
    assert_eq!(wrap("a\nbb ccc", 2), "a\nbb\nccc");
}

#[test]
fn words_are_preserved_verbatim() {
    let label = "when green flag clicked, broadcast start and wait";
    let wrapped = wrap(label, 12);
    let original: Vec<&str> = label.split_whitespace().collect();
    let result: Vec<&str> = wrapped.split_whitespace().collect();
    assert_eq!(original, result);
}

#[test]
fn zero_limit_degrades_to_word_width() {
    // Non-positive budgets widen to the widest word instead of panicking
    // or splitting.
    let wrapped = wrap("ab cd", 0);
    let original: Vec<&str> = ["ab", "cd"].to_vec();
    let result: Vec<&str> = wrapped.split_whitespace().collect();
    assert_eq!(original, result);
    for line in wrapped.split('\n') {
        assert!(!line.is_empty());
    }
}
