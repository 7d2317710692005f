//! Interactive session.
//!
//! A line-oriented stand-in for the converter window: `convert` walks through the
//! three form fields (an empty answer keeps the previous value), `search <term>`
//! filters the directory, `list` reprints it. Errors are printed and the session
//! continues; EOF or `quit` ends it.
use std::io::{BufRead, Write};
use std::str::FromStr;

use currency_common::{RateSource, Result};
use log::debug;
use strum_macros::{Display, EnumString};

use crate::view::{AppState, Feedback};

const HELP: &str = "\
Commands:
  convert          fill in base currency, target currency and amount, then convert
  search <term>    filter the country/currency directory (empty term shows all)
  list             show the current directory listing
  help             show this help
  quit | exit      leave";

/// Keywords understood at the shell prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ShellCommand {
    Convert,
    Search,
    List,
    Help,
    #[strum(serialize = "quit", serialize = "exit")]
    Quit,
}

/// Run the session until `quit` or end of input.
pub fn run<S, R, W>(source: &S, state: &mut AppState, mut input: R, mut out: W) -> Result<()>
where
    S: RateSource + ?Sized,
    R: BufRead,
    W: Write,
{
    writeln!(out, "Currency converter. Type 'help' for commands.")?;

    while let Some(line) = prompt(&mut input, &mut out, "> ")? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };
        let Ok(command) = ShellCommand::from_str(word) else {
            writeln!(out, "Unknown command '{}'. Type 'help' for commands.", word)?;
            continue;
        };
        debug!("shell command: {} {:?}", command, rest);

        match command {
            ShellCommand::Convert => {
                if !fill_form(state, &mut input, &mut out)? {
                    break;
                }
                render_feedback(&mut out, &state.convert(source))?;
            }
            ShellCommand::Search => {
                state.set_search(rest);
                render_listing(&mut out, state)?;
            }
            ShellCommand::List => render_listing(&mut out, state)?,
            ShellCommand::Help => writeln!(out, "{}", HELP)?,
            ShellCommand::Quit => break,
        }
    }
    Ok(())
}

/// Print a form outcome: the result line, or the error as a dialog would show it.
pub fn render_feedback<W: Write>(out: &mut W, feedback: &Feedback) -> Result<()> {
    match feedback {
        Feedback::Result(text) => writeln!(out, "{}", text)?,
        Feedback::Error(message) => writeln!(out, "Error: {}", message)?,
    }
    Ok(())
}

/// Print the directory listing held by `state`.
pub fn render_listing<W: Write>(out: &mut W, state: &AppState) -> Result<()> {
    if state.listing().is_empty() {
        writeln!(out, "No matches for '{}'.", state.search_input())?;
    }
    for entry in state.listing() {
        writeln!(out, "{}", entry)?;
    }
    Ok(())
}

/// Prompt for each form field. Returns `false` if input ended first.
fn fill_form<R: BufRead, W: Write>(state: &mut AppState, input: &mut R, out: &mut W) -> Result<bool> {
    let fields = [
        ("Base currency", &mut state.base_input),
        ("Target currency", &mut state.target_input),
        ("Amount", &mut state.amount_input),
    ];
    for (label, field) in fields {
        let text = if field.is_empty() {
            format!("{}: ", label)
        } else {
            format!("{} [{}]: ", label, field)
        };
        let Some(line) = prompt(input, out, &text)? else {
            return Ok(false);
        };
        let value = line.trim_end_matches(['\r', '\n']);
        if !value.trim().is_empty() {
            *field = value.to_string();
        }
    }
    Ok(true)
}

fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, text: &str) -> Result<Option<String>> {
    write!(out, "{}", text)?;
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

#[cfg(test)]
mod tests {
    use super::*;
    use currency_common::{ConverterError, RateMapping};
    use rstest::rstest;
    use std::cell::RefCell;

    struct RecordingProvider {
        bases: RefCell<Vec<String>>,
    }

    impl RecordingProvider {
        fn new() -> Self {
            Self { bases: RefCell::new(Vec::new()) }
        }
    }

    impl RateSource for RecordingProvider {
        fn latest(&self, base: &str) -> Result<RateMapping> {
            self.bases.borrow_mut().push(base.to_string());
            match base {
                "USD" => Ok(RateMapping::new("USD", [("EUR", 0.9), ("GBP", 0.8)])),
                _ => Err(ConverterError::Provider("unsupported-code".to_string())),
            }
        }
    }

    fn session(script: &str) -> (String, AppState, Vec<String>) {
        let provider = RecordingProvider::new();
        let mut state = AppState::new();
        let mut out = Vec::new();
        run(&provider, &mut state, script.as_bytes(), &mut out).unwrap();
        (String::from_utf8(out).unwrap(), state, provider.bases.into_inner())
    }

    #[rstest]
    #[case("convert", ShellCommand::Convert)]
    #[case("SEARCH", ShellCommand::Search)]
    #[case("List", ShellCommand::List)]
    #[case("exit", ShellCommand::Quit)]
    #[case("quit", ShellCommand::Quit)]
    fn parses_keywords(#[case] word: &str, #[case] expected: ShellCommand) {
        assert_eq!(ShellCommand::from_str(word).unwrap(), expected);
    }

    #[test]
    fn converts_through_the_form() {
        let (out, state, bases) = session("convert\nUSD\nEUR\n50\nquit\n");
        assert!(out.contains("50.0 USD = 45.00 EUR\n"));
        assert_eq!(state.result_label(), "50.0 USD = 45.00 EUR");
        assert_eq!(bases, vec!["USD".to_string()]);
    }

    #[test]
    fn blank_answers_keep_previous_values() {
        let (out, _, bases) = session("convert\nUSD\nEUR\n50\nconvert\n\nGBP\n\n");
        assert!(out.contains("Target currency [EUR]: "));
        assert!(out.contains("50.0 USD = 40.00 GBP\n"));
        assert_eq!(bases.len(), 2);
    }

    #[test]
    fn unresolvable_name_prints_error_and_skips_fetch() {
        let (out, state, bases) = session("convert\nusd\nEuropean Euro\n50\n");
        assert!(out.contains("Error: Invalid target currency: 'European Euro'"));
        assert!(bases.is_empty());
        assert!(state.result_label().is_empty());
    }

    #[test]
    fn provider_error_is_reported() {
        let (out, _, bases) = session("convert\nEUR\nUSD\n1\n");
        assert!(out.contains("Error: Error fetching exchange rates: unsupported-code"));
        assert_eq!(bases, vec!["EUR".to_string()]);
    }

    #[test]
    fn search_filters_listing() {
        let (out, state, _) = session("search japan\n");
        assert!(out.contains("Japan - Yen (JPY)\n"));
        assert_eq!(state.search_input(), "japan");
        assert_eq!(state.listing().len(), 1);
    }

    #[test]
    fn search_without_match() {
        let (out, _, _) = session("search qqqq\n");
        assert!(out.contains("No matches for 'qqqq'."));
    }

    #[test]
    fn unknown_command_keeps_session_alive() {
        let (out, _, _) = session("frobnicate\nhelp\n");
        assert!(out.contains("Unknown command 'frobnicate'"));
        assert!(out.contains("Commands:"));
    }

    #[test]
    fn eof_inside_form_ends_session() {
        let (out, state, bases) = session("convert\nUSD\n");
        assert!(out.ends_with("Target currency: "));
        assert_eq!(state.base_input, "USD");
        assert!(bases.is_empty());
    }
}
