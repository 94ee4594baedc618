//! Query prompt shown before a content search
//!
//! Reads keys in raw mode so Ctrl-C arrives as a key and maps to a clean
//! cancellation.

use std::io::{self, Write};

use crossterm::{
    cursor::{MoveTo, MoveToColumn},
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal::{self, Clear, ClearType},
};

use crate::error::Result;

/// Source of content-search queries
pub trait QueryPrompt {
    /// `None` when the operator cancels
    fn ask(&mut self) -> Result<Option<String>>;
}

/// Result of feeding one key to [`LineInput`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Continue,
    Submit(String),
    Cancel,
}

/// Single-line editor state
#[derive(Debug, Default)]
pub struct LineInput {
    buffer: String,
}

impl LineInput {
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> InputEvent {
        match key.code {
            KeyCode::Char('c') | KeyCode::Char('d')
                if key.modifiers.contains(KeyModifiers::CONTROL) =>
            {
                InputEvent::Cancel
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.buffer.clear();
                InputEvent::Continue
            }
            KeyCode::Esc => InputEvent::Cancel,
            KeyCode::Enter => InputEvent::Submit(std::mem::take(&mut self.buffer)),
            KeyCode::Backspace => {
                self.buffer.pop();
                InputEvent::Continue
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.buffer.push(c);
                InputEvent::Continue
            }
            _ => InputEvent::Continue,
        }
    }
}

/// Interactive prompt on stderr
#[derive(Debug, Default)]
pub struct TerminalPrompt;

impl QueryPrompt for TerminalPrompt {
    fn ask(&mut self) -> Result<Option<String>> {
        let mut err = io::stderr();
        execute!(
            err,
            Clear(ClearType::All),
            MoveTo(0, 0),
            SetForegroundColor(Color::Cyan),
            SetAttribute(Attribute::Bold),
            Print("Content Search Mode"),
            ResetColor,
            SetAttribute(Attribute::Reset),
            Print("  enter text to search for (ripgrep), Esc to quit\r\n"),
        )?;

        terminal::enable_raw_mode()?;
        let answer = read_answer(&mut err);
        terminal::disable_raw_mode()?;
        execute!(err, Print("\r\n"))?;

        answer
    }
}

fn read_answer(out: &mut impl Write) -> Result<Option<String>> {
    let mut input = LineInput::default();
    loop {
        execute!(
            out,
            MoveToColumn(0),
            Clear(ClearType::CurrentLine),
            SetForegroundColor(Color::Green),
            Print("Search Query: "),
            ResetColor,
            Print(input.buffer()),
        )?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        match input.handle_key(key) {
            InputEvent::Continue => {}
            InputEvent::Submit(answer) => return Ok(Some(answer)),
            InputEvent::Cancel => return Ok(None),
        }
    }
}
