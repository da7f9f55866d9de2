//! Numbered menus: render options, read a number, re-prompt until valid.

use crate::console::{Console, Tone};
use crate::error::{ReadingError, ReadingResult};

/// The prompt shown after a menu.
pub const MENU_PROMPT: &str = "Choose a number > ";

/// Options for every yes/no question, in menu order.
pub const YES_NO: [&str; 2] = ["no", "yes"];

/// Why a menu answer was rejected. Always recovered by re-prompting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MenuError {
    /// The answer was not a whole number.
    #[error("Please enter a number.")]
    NotANumber,

    /// The number does not match any option.
    #[error("That number is out of range.")]
    OutOfRange,
}

/// Parse a 1-based menu answer into a 0-based option index.
pub fn parse_selection(input: &str, option_count: usize) -> Result<usize, MenuError> {
    let number: i64 = input.trim().parse().map_err(|_| MenuError::NotANumber)?;
    let index = usize::try_from(number)
        .ok()
        .and_then(|n| n.checked_sub(1))
        .ok_or(MenuError::OutOfRange)?;
    if index < option_count {
        Ok(index)
    } else {
        Err(MenuError::OutOfRange)
    }
}

/// Render options as a 1-based numbered list.
pub fn render_menu<C, S>(console: &mut C, options: &[S]) -> ReadingResult<()>
where
    C: Console + ?Sized,
    S: AsRef<str>,
{
    for (i, option) in options.iter().enumerate() {
        console.menu_option(i + 1, option.as_ref())?;
    }
    console.blank()
}

/// Show a menu and block until the user picks a valid option.
///
/// Invalid answers are reported and the menu is shown again, with no limit
/// on retries.
pub fn choose<'a, C, S>(console: &mut C, options: &'a [S]) -> ReadingResult<&'a str>
where
    C: Console + ?Sized,
    S: AsRef<str>,
{
    if options.is_empty() {
        return Err(ReadingError::EmptyMenu);
    }

    loop {
        render_menu(console, options)?;
        console.prompt(MENU_PROMPT)?;
        let answer = console.read_line()?;
        console.blank()?;

        match parse_selection(&answer, options.len()) {
            Ok(index) => {
                let selected = options[index].as_ref();
                tracing::debug!(selected, "menu selection");
                return Ok(selected);
            }
            Err(err) => {
                tracing::warn!(answer = answer.as_str(), %err, "rejected menu selection");
                console.say(Tone::Warning, &err.to_string())?;
                console.blank()?;
            }
        }
    }
}

/// Ask a yes/no question as a two-option menu. Returns true for "yes".
pub fn confirm<C: Console + ?Sized>(console: &mut C) -> ReadingResult<bool> {
    Ok(choose(console, &YES_NO)? == "yes")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    use crate::console::LineConsole;

    type TestConsole = LineConsole<Cursor<Vec<u8>>, Vec<u8>>;

    fn console(input: &str) -> TestConsole {
        LineConsole::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output(c: TestConsole) -> String {
        String::from_utf8(c.into_writer()).unwrap()
    }

    #[test]
    fn parse_valid() {
        assert_eq!(parse_selection("1", 2), Ok(0));
        assert_eq!(parse_selection(" 2 ", 2), Ok(1));
    }

    #[test]
    fn parse_rejects_non_numbers() {
        assert_eq!(parse_selection("abc", 2), Err(MenuError::NotANumber));
        assert_eq!(parse_selection("", 2), Err(MenuError::NotANumber));
        assert_eq!(parse_selection("1.5", 2), Err(MenuError::NotANumber));
    }

    #[test]
    fn parse_rejects_out_of_range() {
        assert_eq!(parse_selection("0", 2), Err(MenuError::OutOfRange));
        assert_eq!(parse_selection("-1", 2), Err(MenuError::OutOfRange));
        assert_eq!(parse_selection("3", 2), Err(MenuError::OutOfRange));
        assert_eq!(
            parse_selection("99999999999999999999", 2),
            Err(MenuError::NotANumber)
        );
    }

    #[test]
    fn choose_reprompts_until_valid() {
        let mut c = console("abc\n5\n2\n");
        let picked = choose(&mut c, &["no", "yes"]).unwrap();
        assert_eq!(picked, "yes");

        let out = output(c);
        assert_eq!(out.matches(MENU_PROMPT).count(), 3);
        assert_eq!(out.matches("  [1] no").count(), 3);
        assert!(out.contains("Please enter a number."));
        assert!(out.contains("That number is out of range."));
    }

    #[test]
    fn choose_first_try() {
        let mut c = console("1\n");
        let options = vec!["Past, Present, Future (3 cards)".to_string()];
        assert_eq!(
            choose(&mut c, &options).unwrap(),
            "Past, Present, Future (3 cards)"
        );
        assert!(!output(c).contains("out of range"));
    }

    #[test]
    fn choose_input_closed() {
        let mut c = console("7\n");
        let result = choose(&mut c, &YES_NO);
        assert!(matches!(result, Err(ReadingError::InputClosed)));
    }

    #[test]
    fn choose_empty_menu() {
        let mut c = console("1\n");
        let options: [&str; 0] = [];
        assert!(matches!(
            choose(&mut c, &options),
            Err(ReadingError::EmptyMenu)
        ));
    }

    #[test]
    fn confirm_yes_and_no() {
        let mut c = console("2\n1\n");
        assert!(confirm(&mut c).unwrap());
        assert!(!confirm(&mut c).unwrap());
    }
}
