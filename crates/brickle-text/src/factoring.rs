#![forbid(unsafe_code)]

//! Common affix detection for sibling block labels.
//!
//! When several blocks in a category share leading or trailing words
//! ("set x to", "set y to", ...), the toolbox factors the shared words
//! out and shows them once. These helpers find how much of a label set
//! can be factored without ever splitting a word: a cut is only valid at
//! a space, and the space after a word counts into the affix.
//!
//! All lengths are in characters, matching how labels are indexed.

/// Length of the shortest string in the slice. Zero for an empty slice.
#[must_use]
pub fn shortest_string_length<S: AsRef<str>>(strings: &[S]) -> usize {
    strings
        .iter()
        .map(|s| s.as_ref().chars().count())
        .min()
        .unwrap_or(0)
}

/// Length of the common prefix, cut at a word boundary.
///
/// Words may not be split; any space after a word is included in the
/// length. A single-element slice returns that string's full length.
#[must_use]
pub fn common_word_prefix<S: AsRef<str>>(strings: &[S]) -> usize {
    let Some((first, rest)) = strings.split_first() else {
        return 0;
    };
    let first: Vec<char> = first.as_ref().chars().collect();
    if rest.is_empty() {
        return first.len();
    }

    let rest: Vec<Vec<char>> = rest.iter().map(|s| s.as_ref().chars().collect()).collect();
    let max = shortest_string_length(strings);

    let mut word_prefix = 0;
    for len in 0..max {
        let letter = first[len];
        for other in &rest {
            if other[len] != letter {
                return word_prefix;
            }
        }
        if letter == ' ' {
            word_prefix = len + 1;
        }
    }

    // The shortest string matched in full. It still only counts as a
    // word-aligned prefix if every longer string continues with a space.
    for other in &rest {
        if let Some(&letter) = other.get(max) {
            if letter != ' ' {
                return word_prefix;
            }
        }
    }

    max
}

/// Length of the common suffix, cut at a word boundary.
///
/// Mirror of [`common_word_prefix`], measured from the end of each
/// string.
#[must_use]
pub fn common_word_suffix<S: AsRef<str>>(strings: &[S]) -> usize {
    let Some((first, rest)) = strings.split_first() else {
        return 0;
    };
    let first: Vec<char> = first.as_ref().chars().collect();
    if rest.is_empty() {
        return first.len();
    }

    let rest: Vec<Vec<char>> = rest.iter().map(|s| s.as_ref().chars().collect()).collect();
    let max = shortest_string_length(strings);

    let mut word_suffix = 0;
    for len in 0..max {
        let letter = first[first.len() - 1 - len];
        for other in &rest {
            if other[other.len() - 1 - len] != letter {
                return word_suffix;
            }
        }
        if letter == ' ' {
            word_suffix = len + 1;
        }
    }

    for other in &rest {
        if other.len() > max {
            let letter = other[other.len() - 1 - max];
            if letter != ' ' {
                return word_suffix;
            }
        }
    }

    max
}
