//! Text the reader speaks: banners, ordinals, and card reports.

use tarot_core::Card;

/// Centre `text` in `width` columns, padding with `fill`.
///
/// Extra padding goes to the right. Text wider than `width` is returned as is.
pub fn center(text: &str, width: usize, fill: char) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    let left = (width - len) / 2;
    let right = width - len - left;
    let mut out = String::with_capacity(width);
    out.extend(std::iter::repeat_n(fill, left));
    out.push_str(text);
    out.extend(std::iter::repeat_n(fill, right));
    out
}

/// A three-line title banner: rule, centred upper-case title, rule.
pub fn banner(title: &str, width: usize) -> [String; 3] {
    let rule = "~".repeat(width);
    [rule.clone(), center(&title.to_uppercase(), width, ' '), rule]
}

/// A single-line section heading, e.g. `~~~~ CELTIC CROSS ~~~~`.
pub fn subtitle(text: &str, width: usize) -> String {
    center(&format!(" {} ", text.to_uppercase()), width, '~')
}

/// English ordinal for a 1-based position: "first", "second", ... "21st".
pub fn ordinal(n: usize) -> String {
    const WORDS: [&str; 20] = [
        "first",
        "second",
        "third",
        "fourth",
        "fifth",
        "sixth",
        "seventh",
        "eighth",
        "ninth",
        "tenth",
        "eleventh",
        "twelfth",
        "thirteenth",
        "fourteenth",
        "fifteenth",
        "sixteenth",
        "seventeenth",
        "eighteenth",
        "nineteenth",
        "twentieth",
    ];
    if let Some(word) = n.checked_sub(1).and_then(|i| WORDS.get(i)) {
        return (*word).to_string();
    }
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}

/// Trim a name and capitalise it: first letter upper case, the rest lower.
///
/// Blank input becomes "Stranger".
pub fn capitalize(name: &str) -> String {
    let mut chars = name.trim().chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => "Stranger".to_string(),
    }
}

/// The prompt before drawing the card for position `index` of `total`.
pub fn draw_prompt(index: usize, total: usize) -> String {
    let which = if index + 1 == total {
        "final".to_string()
    } else {
        ordinal(index + 1)
    };
    format!("Hit enter to draw the {which} card.")
}

/// What the position at `index` stands for.
pub fn position_line(index: usize, label: &str) -> String {
    let label = label.trim();
    if label.is_empty() {
        format!("The {} position represents the situation.", ordinal(index + 1))
    } else {
        format!(
            "The {} position represents {label} the situation.",
            ordinal(index + 1)
        )
    }
}

/// Which card was drawn, noting a reversal.
pub fn drawn_line(card: &Card) -> String {
    format!("You have drawn {card}.")
}

/// The card's meaning for its orientation.
pub fn meaning_line(card: &Card) -> String {
    format!("It signifies {}.", card.meaning().to_lowercase())
}
