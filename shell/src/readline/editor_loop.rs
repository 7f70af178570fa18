// Copyright (c) 2025 The Iris Authors. Licensed under Apache License, Version 2.0.

//! The coordinator. See [`EditorLoop`].

use crate::{CRLF, DEBUG_SHELL_MOD, KeyDecoder, KeyEvent, LineBuffer, PlatformFamily,
            Renderer};
use std::io::{self, Read, Write};

/// What [`EditorLoop::readline()`] hands back to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadlineEvent {
    /// The user pressed Enter. The buffer has been reset for the next line.
    Line(String),

    /// The user pressed `Ctrl+C`. No line is committed.
    Interrupted,

    /// The input stream ended (only happens with piped or synthetic input). Whatever
    /// was being edited is discarded.
    Eof,
}

/// States of the editing session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum_macros::Display)]
pub enum EditorState {
    #[default]
    Editing,
    /// Transient: the line is being handed to the caller. The loop goes straight
    /// back to [`EditorState::Editing`] with an empty buffer.
    Committing,
    /// `Ctrl+C` was pressed. The next [`EditorLoop::readline()`] call starts over.
    Cancelled,
}

/// Pulls keys from a [`KeyDecoder`], applies them to the [`LineBuffer`], and redraws
/// with the [`Renderer`] after every single transition.
///
/// | Key                               | Action                           | Next state   |
/// |-----------------------------------|----------------------------------|--------------|
/// | `Printable(c)`                    | [`LineBuffer::insert()`]         | `Editing`    |
/// | `Backspace`, `MetaBackspace`      | [`LineBuffer::delete_left()`]    | `Editing`    |
/// | `ArrowLeft`                       | [`LineBuffer::move_left()`]      | `Editing`    |
/// | `ArrowRight`                      | [`LineBuffer::move_right()`]     | `Editing`    |
/// | `ArrowUp`, `ArrowDown`            | none (reserved)                  | `Editing`    |
/// | `Enter`                           | [`LineBuffer::commit_and_reset()`], return the line | `Editing` |
/// | `ControlC`                        | return [`ReadlineEvent::Interrupted`] | `Cancelled` |
/// | `Unrecognized(_)`                 | none                             | `Editing`    |
///
/// This is a session loop: after a line is committed, the same instance keeps
/// editing the next one until the caller stops calling [`EditorLoop::readline()`].
#[derive(Debug)]
pub struct EditorLoop {
    prompt: String,
    decoder: Box<dyn KeyDecoder>,
    line_buffer: LineBuffer,
    state: EditorState,
}

impl EditorLoop {
    pub fn new(prompt: impl Into<String>, decoder: Box<dyn KeyDecoder>) -> Self {
        Self {
            prompt: prompt.into(),
            decoder,
            line_buffer: LineBuffer::new(),
            state: EditorState::Editing,
        }
    }

    #[must_use]
    pub fn prompt(&self) -> &str { &self.prompt }

    #[must_use]
    pub fn state(&self) -> EditorState { self.state }

    #[must_use]
    pub fn line_buffer(&self) -> &LineBuffer { &self.line_buffer }

    #[must_use]
    pub fn platform_family(&self) -> PlatformFamily { self.decoder.platform_family() }

    /// Redraw the current frame.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the terminal fails.
    pub fn render(&self, term: &mut dyn Write) -> io::Result<()> {
        Renderer::render(
            term,
            &self.prompt,
            self.line_buffer.text(),
            self.line_buffer.index(),
        )
    }

    /// Edit one line. Blocks on `input` until Enter, `Ctrl+C`, or the end of the
    /// stream.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from `input` or writing to `term` fails. Keys that
    /// don't decode are not errors.
    pub fn readline(
        &mut self,
        input: &mut dyn Read,
        term: &mut dyn Write,
    ) -> io::Result<ReadlineEvent> {
        if self.state == EditorState::Cancelled {
            self.line_buffer = LineBuffer::new();
            self.state = EditorState::Editing;
        }

        self.render(term)?;

        loop {
            let Some(key) = self.decoder.next_key(input)? else {
                self.line_buffer = LineBuffer::new();
                term.write_all(CRLF.as_bytes())?;
                term.flush()?;
                tracing::info!(message = "End of input");
                return Ok(ReadlineEvent::Eof);
            };

            if let Some(event) = self.apply_key(key, term)? {
                return Ok(event);
            }
        }
    }

    /// Apply one key, then redraw. Returns `Some` when the key ends the line.
    ///
    /// [`EditorState::Cancelled`] is terminal: keys are ignored (nothing is edited or
    /// drawn) until [`EditorLoop::readline()`] starts a new line.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the terminal fails.
    pub fn apply_key(
        &mut self,
        key: KeyEvent,
        term: &mut dyn Write,
    ) -> io::Result<Option<ReadlineEvent>> {
        if self.state == EditorState::Cancelled {
            return Ok(None);
        }

        let event = match key {
            KeyEvent::Printable(ch) => {
                self.line_buffer.insert(ch);
                None
            }
            KeyEvent::Backspace | KeyEvent::MetaBackspace => {
                self.line_buffer.delete_left();
                None
            }
            KeyEvent::ArrowLeft => {
                self.line_buffer.move_left();
                None
            }
            KeyEvent::ArrowRight => {
                self.line_buffer.move_right();
                None
            }
            // Reserved for history navigation.
            KeyEvent::ArrowUp | KeyEvent::ArrowDown => None,
            KeyEvent::Enter => {
                self.state = EditorState::Committing;
                let line = self.line_buffer.commit_and_reset();
                // Leave the committed frame on screen; the next frame starts below it.
                term.write_all(CRLF.as_bytes())?;
                tracing::info!(message = "Line committed", chars = line.chars().count());
                Some(ReadlineEvent::Line(line))
            }
            KeyEvent::ControlC => {
                self.state = EditorState::Cancelled;
                tracing::info!(message = "Cancelled", pending = %self.line_buffer.text());
                Some(ReadlineEvent::Interrupted)
            }
            KeyEvent::Unrecognized(ref bytes) => {
                DEBUG_SHELL_MOD.then(|| {
                    // % is Display, ? is Debug.
                    tracing::debug!(message = "Ignoring unrecognized key", bytes = ?bytes);
                });
                None
            }
        };

        self.render(term)?;

        match self.state {
            EditorState::Committing => self.state = EditorState::Editing,
            EditorState::Cancelled => {
                term.write_all(CRLF.as_bytes())?;
                term.flush()?;
            }
            EditorState::Editing => {}
        }

        DEBUG_SHELL_MOD.then(|| {
            tracing::debug!(
                message = "EditorLoop::apply_key",
                state = %self.state,
                index = self.line_buffer.index(),
                len = self.line_buffer.len()
            );
        });

        Ok(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ANSI_ESC, decoder_for};
    use iris_test_fixtures::{InputBytesMock, StdoutMock};
    use pretty_assertions::assert_eq;
    use smallvec::smallvec;

    const ERASE_LINE: &str = "\x1b[2K";

    fn unix_editor() -> EditorLoop { EditorLoop::new("> ", decoder_for(PlatformFamily::Unix)) }

    fn count_frames(stdout_mock: &StdoutMock) -> usize {
        stdout_mock
            .get_copy_of_buffer_as_string()
            .matches(ERASE_LINE)
            .count()
    }

    #[test]
    fn test_insert_move_left_insert_commit() {
        let mut editor = unix_editor();
        let mut input = InputBytesMock::new(b"ab\x1b[Dc\r");
        let mut stdout_mock = StdoutMock::default();

        let event = editor.readline(&mut input, &mut stdout_mock).unwrap();

        assert_eq!(event, ReadlineEvent::Line("acb".into()));
        assert_eq!(editor.line_buffer().text(), "");
        assert_eq!(editor.line_buffer().index(), editor.line_buffer().min_index());
        assert_eq!(editor.state(), EditorState::Editing);
    }

    #[test]
    fn test_one_frame_per_transition() {
        let mut editor = unix_editor();
        // 5 keys: a, b, Left, c, Enter. Plus the initial frame.
        let mut input = InputBytesMock::new(b"ab\x1b[Dc\r");
        let mut stdout_mock = StdoutMock::default();

        editor.readline(&mut input, &mut stdout_mock).unwrap();

        assert_eq!(count_frames(&stdout_mock), 6);
    }

    #[test]
    fn test_frames_show_cursor_position() {
        let mut editor = unix_editor();
        let mut stdout_mock = StdoutMock::default();

        editor.apply_key(KeyEvent::Printable('a'), &mut stdout_mock).unwrap();
        editor.apply_key(KeyEvent::Printable('b'), &mut stdout_mock).unwrap();
        stdout_mock.clear();
        editor.apply_key(KeyEvent::ArrowLeft, &mut stdout_mock).unwrap();

        assert_eq!(
            stdout_mock.get_copy_of_buffer_as_string(),
            "\r\x1b[2K> ab\x1b[1D"
        );
    }

    #[test]
    fn test_enter_leaves_committed_line_and_draws_fresh_prompt() {
        let mut editor = unix_editor();
        let mut stdout_mock = StdoutMock::default();

        editor.apply_key(KeyEvent::Printable('x'), &mut stdout_mock).unwrap();
        stdout_mock.clear();
        let event = editor.apply_key(KeyEvent::Enter, &mut stdout_mock).unwrap();

        assert_eq!(event, Some(ReadlineEvent::Line("x".into())));
        assert_eq!(stdout_mock.get_copy_of_buffer_as_string(), "\r\n\r\x1b[2K> ");
    }

    #[test]
    fn test_control_c_cancels_without_committing() {
        let mut editor = unix_editor();
        let mut input = InputBytesMock::new(b"half\x03more\r");
        let mut stdout_mock = StdoutMock::default();

        let event = editor.readline(&mut input, &mut stdout_mock).unwrap();

        assert_eq!(event, ReadlineEvent::Interrupted);
        assert_eq!(editor.state(), EditorState::Cancelled);
        // Nothing after Ctrl+C was read.
        assert_eq!(input.remaining(), 5);
        assert!(stdout_mock.get_copy_of_buffer_as_string().ends_with("> half\r\n"));
    }

    #[test]
    fn test_control_c_on_empty_line() {
        let mut editor = unix_editor();
        let mut input = InputBytesMock::new(b"\x03");
        let mut stdout_mock = StdoutMock::default();

        let event = editor.readline(&mut input, &mut stdout_mock).unwrap();

        assert_eq!(event, ReadlineEvent::Interrupted);
    }

    #[test]
    fn test_readline_after_cancel_starts_fresh() {
        let mut editor = unix_editor();
        let mut input = InputBytesMock::new(b"abc\x03xyz\r");
        let mut stdout_mock = StdoutMock::default();

        assert_eq!(
            editor.readline(&mut input, &mut stdout_mock).unwrap(),
            ReadlineEvent::Interrupted
        );
        assert_eq!(
            editor.readline(&mut input, &mut stdout_mock).unwrap(),
            ReadlineEvent::Line("xyz".into())
        );
    }

    #[test]
    fn test_keys_after_cancel_are_ignored() {
        let mut editor = unix_editor();
        let mut stdout_mock = StdoutMock::default();

        editor.apply_key(KeyEvent::Printable('a'), &mut stdout_mock).unwrap();
        let event = editor.apply_key(KeyEvent::ControlC, &mut stdout_mock).unwrap();
        assert_eq!(event, Some(ReadlineEvent::Interrupted));
        stdout_mock.clear();

        for key in [
            KeyEvent::Printable('b'),
            KeyEvent::Backspace,
            KeyEvent::Enter,
            KeyEvent::ControlC,
        ] {
            let event = editor.apply_key(key, &mut stdout_mock).unwrap();
            assert_eq!(event, None);
        }

        assert_eq!(editor.state(), EditorState::Cancelled);
        assert_eq!(editor.line_buffer().text(), "a");
        assert_eq!(stdout_mock.get_copy_of_buffer_as_string(), "");
    }

    #[test]
    fn test_up_down_and_unrecognized_are_noops() {
        let mut editor = unix_editor();
        let mut stdout_mock = StdoutMock::default();

        editor.apply_key(KeyEvent::Printable('q'), &mut stdout_mock).unwrap();
        let before = editor.line_buffer().clone();

        for key in [
            KeyEvent::ArrowUp,
            KeyEvent::ArrowDown,
            KeyEvent::Unrecognized(smallvec![ANSI_ESC, b'[', b'Z']),
        ] {
            let event = editor.apply_key(key, &mut stdout_mock).unwrap();
            assert_eq!(event, None);
            assert_eq!(editor.line_buffer(), &before);
            assert_eq!(editor.state(), EditorState::Editing);
        }
    }

    #[test]
    fn test_backspace_and_meta_backspace_delete_one_char() {
        let mut editor = unix_editor();
        let mut input = InputBytesMock::new(b"abcd\x7f\x1b\x7f\r");
        let mut stdout_mock = StdoutMock::default();

        let event = editor.readline(&mut input, &mut stdout_mock).unwrap();

        assert_eq!(event, ReadlineEvent::Line("ab".into()));
    }

    #[test]
    fn test_session_yields_many_lines() {
        let mut editor = unix_editor();
        let mut input = InputBytesMock::new(b"one\rtwo\n\rthree");
        let mut stdout_mock = StdoutMock::default();

        let mut events = vec![];
        loop {
            let event = editor.readline(&mut input, &mut stdout_mock).unwrap();
            let done = event == ReadlineEvent::Eof;
            events.push(event);
            if done {
                break;
            }
        }

        assert_eq!(
            events,
            vec![
                ReadlineEvent::Line("one".into()),
                ReadlineEvent::Line("two".into()),
                ReadlineEvent::Line(String::new()),
                ReadlineEvent::Eof,
            ]
        );
        // The partial "three" is discarded at the end of input.
        assert!(editor.line_buffer().is_empty());
    }

    #[test]
    fn test_windows_key_table() {
        let mut editor = EditorLoop::new("> ", decoder_for(PlatformFamily::Windows));
        let mut input = InputBytesMock::new(b"ab\xe0Kc\x08d\r");
        let mut stdout_mock = StdoutMock::default();

        let event = editor.readline(&mut input, &mut stdout_mock).unwrap();

        assert_eq!(event, ReadlineEvent::Line("adb".into()));
        assert_eq!(editor.platform_family(), PlatformFamily::Windows);
    }

    #[test]
    fn test_write_error_propagates() {
        struct BrokenTerm;
        impl Write for BrokenTerm {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::Error::from(io::ErrorKind::BrokenPipe))
            }
            fn flush(&mut self) -> io::Result<()> { Ok(()) }
        }

        let mut editor = unix_editor();
        let mut input = InputBytesMock::new(b"a");
        let error = editor.readline(&mut input, &mut BrokenTerm).unwrap_err();
        assert_eq!(error.kind(), io::ErrorKind::BrokenPipe);
    }
}
