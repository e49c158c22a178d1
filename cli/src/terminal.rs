//! Interactive picker on the terminal.
//!
//! The picker draws on stderr so stdout carries only the selected key.

use crate::keys::command_for;
use crossterm::event::{self, Event};
use crossterm::style::{Attribute, Color, Print, PrintStyledContent, Stylize};
use crossterm::terminal::{
    self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{cursor, execute, queue};
use lockr_search::{InteractiveSession, SessionOutcome, SessionView, ViewStatus};
use std::io::{self, Write};
use tracing::debug;

const HELP: &str = "Use ↑/↓ to navigate, Enter to select, Esc to cancel";

/// Raw mode plus alternate screen, restored on drop.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        if let Err(err) = execute!(io::stderr(), EnterAlternateScreen, cursor::Hide) {
            let _ = terminal::disable_raw_mode();
            return Err(err);
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stderr(), LeaveAlternateScreen, cursor::Show);
        let _ = terminal::disable_raw_mode();
    }
}

/// Runs the picker until the user accepts or cancels.
pub fn pick(session: InteractiveSession) -> io::Result<SessionOutcome> {
    let _guard = TerminalGuard::enter()?;
    let mut stderr = io::stderr();
    let events = std::iter::from_fn(|| Some(event::read()));

    drive(session, events, |view| draw(&mut stderr, view))
}

/// Feeds events into the session, redrawing after each one.
///
/// Running out of events counts as a cancellation.
pub fn drive<I, D>(
    mut session: InteractiveSession,
    events: I,
    mut redraw: D,
) -> io::Result<SessionOutcome>
where
    I: IntoIterator<Item = io::Result<Event>>,
    D: FnMut(&SessionView) -> io::Result<()>,
{
    redraw(&session.view())?;

    for event in events {
        let command = match event? {
            Event::Key(key) => command_for(key),
            Event::Resize(..) => None,
            _ => continue,
        };
        if let Some(command) = command {
            if let Some(outcome) = session.apply(command) {
                return Ok(outcome);
            }
        }
        redraw(&session.view())?;
    }

    debug!("event stream ended before a selection");
    session.cancel();
    Ok(SessionOutcome::Cancelled)
}

fn draw(out: &mut impl Write, view: &SessionView) -> io::Result<()> {
    queue!(
        out,
        cursor::MoveTo(0, 0),
        Clear(ClearType::All),
        PrintStyledContent("Search: ".green().bold()),
        PrintStyledContent(view.query.as_str().white().on(Color::DarkGrey)),
        Print("█"),
    )?;

    let mut row: u16 = 2;
    match view.status {
        ViewStatus::NoMatches => {
            queue!(
                out,
                cursor::MoveTo(0, row),
                PrintStyledContent("No matches found".red().italic())
            )?;
            row += 1;
        }
        ViewStatus::Empty => {
            queue!(
                out,
                cursor::MoveTo(0, row),
                PrintStyledContent("Nothing to search".dark_grey())
            )?;
            row += 1;
        }
        ViewStatus::Results => {
            for result in &view.rows {
                queue!(out, cursor::MoveTo(0, row))?;
                let marker = if result.selected { "❯ " } else { "  " };
                queue!(out, PrintStyledContent(marker.cyan()))?;
                for segment in &result.segments {
                    let styled = if segment.highlighted {
                        segment.text.as_str().yellow().attribute(Attribute::Bold)
                    } else if result.selected {
                        segment.text.as_str().black().on_cyan()
                    } else {
                        segment.text.as_str().white()
                    };
                    queue!(out, PrintStyledContent(styled))?;
                }
                queue!(
                    out,
                    Print(" "),
                    PrintStyledContent(result.metadata.as_str().dark_grey())
                )?;
                row += 1;
            }
            if view.overflow > 0 {
                let more = format!("... and {} more results", view.overflow);
                queue!(
                    out,
                    cursor::MoveTo(0, row),
                    PrintStyledContent(more.dark_grey())
                )?;
                row += 1;
            }
        }
    }

    queue!(
        out,
        cursor::MoveTo(0, row + 1),
        PrintStyledContent(HELP.dark_grey())
    )?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use lockr_core::types::{Candidate, Key};

    fn session(keys: &[&str]) -> InteractiveSession {
        InteractiveSession::new(
            keys.iter()
                .map(|k| Candidate::new(Key::try_new(k.to_string()).unwrap()))
                .collect(),
        )
    }

    fn key(code: KeyCode) -> io::Result<Event> {
        Ok(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    fn typed(text: &str) -> Vec<io::Result<Event>> {
        text.chars().map(|c| key(KeyCode::Char(c))).collect()
    }

    #[test]
    fn test_drive_selects_after_typing() {
        let mut events = typed("strip");
        events.push(key(KeyCode::Enter));

        let outcome = drive(
            session(&["api_key_github", "api_key_stripe"]),
            events,
            |_| Ok(()),
        )
        .unwrap();

        match outcome {
            SessionOutcome::Selected(candidate) => assert_eq!(candidate.label(), "api_key_stripe"),
            SessionOutcome::Cancelled => panic!("expected a selection"),
        }
    }

    #[test]
    fn test_drive_redraws_every_event() {
        let mut frames = Vec::new();
        let mut events = typed("ab");
        events.push(key(KeyCode::Down));
        events.push(key(KeyCode::Esc));

        let outcome = drive(session(&["abc", "abd"]), events, |view| {
            frames.push(view.query.clone());
            Ok(())
        })
        .unwrap();

        assert_eq!(outcome, SessionOutcome::Cancelled);
        assert_eq!(frames, vec!["", "a", "ab", "ab"]);
    }

    #[test]
    fn test_drive_cancels_when_events_run_out() {
        let outcome = drive(session(&["abc"]), typed("a"), |_| Ok(())).unwrap();

        assert_eq!(outcome, SessionOutcome::Cancelled);
    }

    #[test]
    fn test_drive_propagates_read_errors() {
        let events = vec![Err(io::Error::other("tty closed"))];

        let err = drive(session(&["abc"]), events, |_| Ok(())).unwrap_err();

        assert_eq!(err.to_string(), "tty closed");
    }

    #[test]
    fn test_draw_writes_rows_and_overflow() {
        let keys: Vec<String> = (0..8).map(|i| format!("key_{i}")).collect();
        let refs: Vec<&str> = keys.iter().map(String::as_str).collect();
        let view = session(&refs).view();
        let mut buf = Vec::new();

        draw(&mut buf, &view).unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("key_0"));
        assert!(text.contains("... and 3 more results"));
        assert!(text.contains(HELP));
    }
}
