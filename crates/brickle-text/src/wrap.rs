#![forbid(unsafe_code)]

//! Greedy line-wrap optimizer for block labels.
//!
//! Block labels are rendered inside a fixed pixel budget that the layout
//! engine translates into a character-cell `limit`. Rather than greedy
//! first-fit filling, the optimizer searches for the break placement that
//! best balances line widths, with bonuses for breaking after punctuation.
//!
//! The search runs in three stages per line of input:
//! 1. seed breaks evenly for a target line count,
//! 2. hill-climb by relocating single breaks to adjacent gaps until no
//!    relocation improves the score,
//! 3. raise the target line count and repeat until the score regresses,
//!    then keep the previous (best) arrangement.
//!
//! The limit is a soft target: words are never split, so it is widened to
//! the widest single word before optimizing.
//!
//! # Example
//! ```
//! use brickle_text::wrap::wrap;
//!
//! assert_eq!(wrap("the quick brown fox jumps", 10), "the quick\nbrown fox\njumps");
//!
//! // Short lines pass through untouched.
//! assert_eq!(wrap("fox", 10), "fox");
//! ```

use smallvec::SmallVec;
use unicode_width::UnicodeWidthStr;

/// Line endings that read as the close of a sentence.
const SENTENCE_ENDINGS: [char; 3] = ['.', '?', '!'];

/// Line endings that read as the close of a clause or bracket group.
const CLAUSE_ENDINGS: [char; 5] = [',', ';', ')', ']', '}'];

// =========================================================================
// BreakDecision
// =========================================================================

/// What separates two adjacent words in a candidate wrapping.
///
/// A candidate holds exactly `words - 1` decisions, one per gap. The
/// optimizer only relocates `Break` entries, it never adds or removes
/// them while refining a fixed line count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreakDecision {
    /// Render a single space between the two words.
    Space,
    /// End the line after the left word.
    Break,
}

// =========================================================================
// WrapObjective
// =========================================================================

/// Scoring weights for candidate wrappings. Higher scores are better;
/// only relative comparisons matter.
///
/// The defaults penalize deviation from the target width superlinearly,
/// penalize ragged lines relative to the longest one, and reward lines
/// that end after punctuation.
#[derive(Debug, Clone, PartialEq)]
pub struct WrapObjective {
    /// Weight on each line's deviation from the target width.
    pub width_weight: f64,
    /// Exponent applied to the width deviation (superlinear).
    pub deviation_power: f64,
    /// Exponent applied to a line's shortfall against the longest line.
    pub evenness_power: f64,
    /// Bonus for ending a line after sentence punctuation, as a fraction
    /// of the limit.
    pub sentence_bonus: f64,
    /// Bonus for ending a line after clause punctuation, as a fraction
    /// of the limit.
    pub clause_bonus: f64,
    /// Flat bonus when the final line is no longer than the one before
    /// it. All else being equal, a trailing long line looks wrong.
    pub last_line_bonus: f64,
}

impl Default for WrapObjective {
    fn default() -> Self {
        Self {
            width_weight: 2.0,
            deviation_power: 1.5,
            evenness_power: 1.5,
            sentence_bonus: 1.0 / 3.0,
            clause_bonus: 1.0 / 4.0,
            last_line_bonus: 0.5,
        }
    }
}

// =========================================================================
// Word
// =========================================================================

/// A whitespace-delimited token with its measured cell width.
#[derive(Debug, Clone, Copy)]
struct Word<'a> {
    text: &'a str,
    width: usize,
}

impl<'a> Word<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            text,
            width: text.width(),
        }
    }

    /// Final character, used for the punctuation bonus.
    fn trailing_char(&self) -> Option<char> {
        self.text.chars().next_back()
    }
}

// =========================================================================
// Public entry points
// =========================================================================

/// Wrap text to the specified width.
///
/// Input lines are wrapped independently: wrapping never merges or splits
/// across pre-existing line feeds. Inserted breaks use `\n`; remaining
/// inter-word gaps collapse to single spaces. Words are never split, so
/// the limit is widened to the widest word of each line before
/// optimizing.
///
/// Lines already at or below the limit (and lines with no words at all)
/// pass through unchanged.
#[must_use]
pub fn wrap(text: &str, limit: usize) -> String {
    wrap_with_objective(text, limit, &WrapObjective::default())
}

/// Wrap text with explicit scoring weights.
#[must_use]
pub fn wrap_with_objective(text: &str, limit: usize, objective: &WrapObjective) -> String {
    let lines: Vec<String> = text
        .split('\n')
        .map(|line| wrap_line(line, limit, objective))
        .collect();
    lines.join("\n")
}

// =========================================================================
// Line-count driver
// =========================================================================

/// Wrap a single line (no embedded line feeds).
///
/// Tries successively larger line counts, refining each to a local
/// optimum, and stops as soon as adding a line no longer improves the
/// score. Returns the arrangement from the last improving attempt.
fn wrap_line(line: &str, limit: usize, objective: &WrapObjective) -> String {
    // Short text, no need to wrap.
    if line.width() <= limit {
        return line.to_string();
    }

    let words: Vec<Word<'_>> = line.split_whitespace().map(Word::new).collect();
    if words.is_empty() {
        return line.to_string();
    }

    // The limit is a soft target: never smaller than the widest word.
    let widest = words.iter().map(|w| w.width).max().unwrap_or(0);
    let limit = limit.max(widest);

    let mut last_score = f64::NEG_INFINITY;
    let mut last_text = line.to_string();
    let mut line_count = 1usize;

    loop {
        let breaks = improve_breaks(&words, seed_breaks(words.len(), line_count), limit, objective);
        let score = score_breaks(&words, &breaks, limit, objective);
        tracing::trace!(line_count, score, "wrap attempt");

        // Terminates because line width is bounded below by word width,
        // so the score must eventually stop improving.
        if score <= last_score {
            return last_text;
        }
        last_score = score;
        last_text = render_breaks(&words, &breaks);
        line_count += 1;
    }
}

// =========================================================================
// Break seeding
// =========================================================================

/// Seed a break sequence with evenly spaced breaks for the requested
/// line count.
///
/// The `+ 1.5` offset biases breaks slightly early, which acts as the
/// deliberate tie-break for uneven divisions.
fn seed_breaks(word_count: usize, line_count: usize) -> Vec<BreakDecision> {
    let gap_count = word_count.saturating_sub(1);
    let mut breaks = Vec::with_capacity(gap_count);

    let steps = word_count as f64 / line_count as f64;
    let mut inserted = 1usize;
    for i in 0..gap_count {
        if (inserted as f64) < (i as f64 + 1.5) / steps {
            inserted += 1;
            breaks.push(BreakDecision::Break);
        } else {
            breaks.push(BreakDecision::Space);
        }
    }

    breaks
}

// =========================================================================
// Scoring
// =========================================================================

/// Score a candidate wrapping. Pure function of its inputs; larger is
/// better.
fn score_breaks(
    words: &[Word<'_>],
    breaks: &[BreakDecision],
    limit: usize,
    objective: &WrapObjective,
) -> f64 {
    // Accumulate line widths and the character each break lands after.
    let mut line_widths: SmallVec<[usize; 8]> = SmallVec::new();
    let mut line_punctuation: SmallVec<[char; 8]> = SmallVec::new();
    let mut current = 0usize;

    for (i, word) in words.iter().enumerate() {
        current += word.width;
        match breaks.get(i) {
            Some(BreakDecision::Break) => {
                line_widths.push(current);
                line_punctuation.push(word.trailing_char().unwrap_or(' '));
                current = 0;
            }
            Some(BreakDecision::Space) => current += 1,
            None => {} // Last word: no separator follows.
        }
    }
    line_widths.push(current);

    let max_width = line_widths.iter().copied().max().unwrap_or(0);
    let limit_f = limit as f64;

    let mut score = 0.0;
    for (i, &width) in line_widths.iter().enumerate() {
        // Optimize for width: penalize deviation from the target.
        score -= objective.width_weight
            * (limit_f - width as f64).abs().powf(objective.deviation_power);
        // Optimize for even lines: penalize shortfall against the longest.
        score -= ((max_width - width) as f64).powf(objective.evenness_power);
        // Optimize for structure: reward line endings after punctuation.
        // The final line has no break after it, so no bonus applies.
        if let Some(&punctuation) = line_punctuation.get(i) {
            if SENTENCE_ENDINGS.contains(&punctuation) {
                score += limit_f * objective.sentence_bonus;
            } else if CLAUSE_ENDINGS.contains(&punctuation) {
                score += limit_f * objective.clause_bonus;
            }
        }
    }

    // All else being equal, the last line should not be longer than the
    // previous line.  For example, this looks wrong:
    // aaa bbb
    // ccc ddd eee
    if line_widths.len() > 1 {
        let last = line_widths[line_widths.len() - 1];
        let previous = line_widths[line_widths.len() - 2];
        if last <= previous {
            score += objective.last_line_bonus;
        }
    }

    score
}

// =========================================================================
// Local search
// =========================================================================

/// Hill-climb over adjacent break relocations until a local optimum.
///
/// Every adjacent gap pair with differing decisions is a candidate swap;
/// swapping relocates one break by one word without changing the break
/// count. Each pass applies the best strictly-improving swap (first found
/// wins on ties) and rescans, stopping when no swap improves the score.
///
/// Not guaranteed globally optimal; the restricted neighborhood is the
/// accepted trade for speed on short label text.
fn improve_breaks(
    words: &[Word<'_>],
    mut breaks: Vec<BreakDecision>,
    limit: usize,
    objective: &WrapObjective,
) -> Vec<BreakDecision> {
    let mut best_score = score_breaks(words, &breaks, limit, objective);

    loop {
        let mut best_swap = None;
        for i in 0..breaks.len().saturating_sub(1) {
            if breaks[i] == breaks[i + 1] {
                continue;
            }
            // The decisions differ, so swapping toggles both.
            breaks.swap(i, i + 1);
            let candidate = score_breaks(words, &breaks, limit, objective);
            breaks.swap(i, i + 1);

            if candidate > best_score {
                best_score = candidate;
                best_swap = Some(i);
            }
        }

        match best_swap {
            // Found an improvement.  See if it may be improved further.
            Some(i) => breaks.swap(i, i + 1),
            // No improvements found.  Done.
            None => return breaks,
        }
    }
}

// =========================================================================
// Rendering
// =========================================================================

/// Reassemble words into text with the given break decisions.
fn render_breaks(words: &[Word<'_>], breaks: &[BreakDecision]) -> String {
    let mut text = String::new();
    for (i, word) in words.iter().enumerate() {
        text.push_str(word.text);
        match breaks.get(i) {
            Some(BreakDecision::Break) => text.push('\n'),
            Some(BreakDecision::Space) => text.push(' '),
            None => {}
        }
    }
    text
}
