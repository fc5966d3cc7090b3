//! TUI application state and logic

use crate::clipboard::{Clipboard, Osc52Clipboard, copy_quietly};
use crate::core::{Catalog, WordRecord};
use crate::sequencer::ShuffleSequencer;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a> {
    pub catalog: &'a Catalog,
    pub sequencer: ShuffleSequencer,
    /// Catalog index of the word on screen
    pub current: usize,
    pub show_definition: bool,
    pub messages: Vec<Message>,
    pub words_seen: usize,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
}

impl<'a> App<'a> {
    /// Create the app and draw the first word
    #[must_use]
    pub fn new(catalog: &'a Catalog, mut sequencer: ShuffleSequencer) -> Self {
        let current = sequencer.draw();

        Self {
            catalog,
            sequencer,
            current,
            show_definition: true,
            messages: vec![Message {
                text: format!(
                    "{} words shuffled. Each appears once before any repeats.",
                    catalog.len()
                ),
                style: MessageStyle::Info,
            }],
            words_seen: 1,
            should_quit: false,
        }
    }

    /// The record currently on screen
    #[must_use]
    pub fn current_record(&self) -> &WordRecord {
        &self.catalog[self.current]
    }

    pub fn next_word(&mut self) {
        let finished_cycle = self.sequencer.remaining_in_cycle() == 0;
        self.current = self.sequencer.draw();
        self.words_seen += 1;

        if finished_cycle {
            self.add_message(
                &format!(
                    "Seen all {} words! Reshuffled for round {}.",
                    self.catalog.len(),
                    self.sequencer.cycles_completed() + 1
                ),
                MessageStyle::Success,
            );
        }
    }

    pub fn toggle_definition(&mut self) {
        self.show_definition = !self.show_definition;
    }

    /// Discard the rest of the round and show the first word of a new one
    pub fn reshuffle(&mut self) {
        self.sequencer.reset();
        self.current = self.sequencer.draw();
        self.words_seen += 1;
        self.add_message("Reshuffled!", MessageStyle::Info);
    }

    /// Copy the current word; failures are ignored
    pub fn copy_current<C: Clipboard + ?Sized>(&mut self, clipboard: &mut C) {
        let text = self.current_record().copy_text();
        if copy_quietly(clipboard, &text) {
            self.add_message(&format!("Copied: {text}"), MessageStyle::Success);
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// 1-based number of the current shuffle round
    #[must_use]
    pub fn round(&self) -> u64 {
        self.sequencer.cycles_completed() + 1
    }

    /// Apply a key press
    pub fn handle_key<C: Clipboard + ?Sized>(&mut self, key: KeyEvent, clipboard: &mut C) {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('n' | ' ') | KeyCode::Enter | KeyCode::Right => {
                self.next_word();
            }
            KeyCode::Char('d') => {
                self.toggle_definition();
            }
            KeyCode::Char('c') => {
                self.copy_current(clipboard);
            }
            KeyCode::Char('r') => {
                self.reshuffle();
            }
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        log::error!("TUI exited with error: {err}");
    }

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    let mut clipboard = Osc52Clipboard::stdout();

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key(key, &mut clipboard);
        }

        if app.should_quit {
            break;
        }
    }

    log::info!("Session ended after {} words", app.words_seen);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingClipboard {
        copied: Vec<String>,
    }

    impl Clipboard for RecordingClipboard {
        fn set_text(&mut self, text: &str) -> io::Result<()> {
            self.copied.push(text.to_string());
            Ok(())
        }
    }

    struct BrokenClipboard;

    impl Clipboard for BrokenClipboard {
        fn set_text(&mut self, _text: &str) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::Unsupported, "no clipboard"))
        }
    }

    fn catalog() -> Catalog {
        Catalog::new(vec![
            WordRecord::new("lucid")
                .unwrap()
                .with_part_of_speech("adj.")
                .with_definition("easily understood"),
            WordRecord::new("terse").unwrap(),
            WordRecord::new("abate").unwrap().with_definition("to lessen"),
        ])
        .unwrap()
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn new_app_shows_a_word() {
        let catalog = catalog();
        let app = App::new(&catalog, ShuffleSequencer::seeded(catalog.len(), 1).unwrap());
        assert!(app.current < catalog.len());
        assert_eq!(app.words_seen, 1);
        assert!(app.show_definition);
        assert_eq!(app.round(), 1);
    }

    #[test]
    fn next_word_walks_whole_catalog_before_repeating() {
        let catalog = catalog();
        let mut app = App::new(&catalog, ShuffleSequencer::seeded(catalog.len(), 2).unwrap());
        let mut seen = vec![app.current];
        app.next_word();
        seen.push(app.current);
        app.next_word();
        seen.push(app.current);
        seen.sort_unstable();
        assert_eq!(seen, vec![0, 1, 2]);
        assert_eq!(app.round(), 1);
    }

    #[test]
    fn finishing_a_round_posts_message() {
        let catalog = catalog();
        let mut app = App::new(&catalog, ShuffleSequencer::seeded(catalog.len(), 3).unwrap());
        app.next_word();
        app.next_word();
        app.next_word();
        assert_eq!(app.round(), 2);
        let last = app.messages.last().unwrap();
        assert_eq!(last.style, MessageStyle::Success);
        assert!(last.text.contains("round 2"));
    }

    #[test]
    fn toggle_definition_does_not_draw() {
        let catalog = catalog();
        let mut app = App::new(&catalog, ShuffleSequencer::seeded(catalog.len(), 4).unwrap());
        let before = app.current;
        app.handle_key(press(KeyCode::Char('d')), &mut RecordingClipboard::default());
        assert!(!app.show_definition);
        assert_eq!(app.current, before);
        assert_eq!(app.sequencer.drawn_in_cycle(), 1);
        app.toggle_definition();
        assert!(app.show_definition);
    }

    #[test]
    fn copy_writes_current_record() {
        let catalog = catalog();
        let mut app = App::new(&catalog, ShuffleSequencer::seeded(catalog.len(), 5).unwrap());
        let mut clipboard = RecordingClipboard::default();
        app.handle_key(press(KeyCode::Char('c')), &mut clipboard);
        assert_eq!(clipboard.copied, [app.current_record().copy_text()]);
        assert!(app.messages.last().unwrap().text.starts_with("Copied: "));
    }

    #[test]
    fn copy_failure_is_silent() {
        let catalog = catalog();
        let mut app = App::new(&catalog, ShuffleSequencer::seeded(catalog.len(), 6).unwrap());
        let messages_before = app.messages.len();
        app.copy_current(&mut BrokenClipboard);
        assert_eq!(app.messages.len(), messages_before);
        assert!(!app.should_quit);
    }

    #[test]
    fn reshuffle_starts_new_round() {
        let catalog = catalog();
        let mut app = App::new(&catalog, ShuffleSequencer::seeded(catalog.len(), 7).unwrap());
        app.handle_key(press(KeyCode::Char('r')), &mut RecordingClipboard::default());
        assert_eq!(app.round(), 2);
        assert_eq!(app.sequencer.drawn_in_cycle(), 1);
        assert_eq!(app.words_seen, 2);
    }

    #[test]
    fn next_keys() {
        let catalog = catalog();
        let mut app = App::new(&catalog, ShuffleSequencer::seeded(catalog.len(), 8).unwrap());
        let mut clipboard = RecordingClipboard::default();
        for code in [KeyCode::Char('n'), KeyCode::Char(' '), KeyCode::Enter, KeyCode::Right] {
            app.handle_key(press(code), &mut clipboard);
        }
        assert_eq!(app.words_seen, 5);
    }

    #[test]
    fn quit_keys() {
        let catalog = catalog();
        for key in [
            press(KeyCode::Char('q')),
            press(KeyCode::Esc),
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        ] {
            let mut app = App::new(&catalog, ShuffleSequencer::seeded(catalog.len(), 9).unwrap());
            let mut clipboard = RecordingClipboard::default();
            app.handle_key(key, &mut clipboard);
            assert!(app.should_quit);
            assert!(clipboard.copied.is_empty());
        }
    }

    #[test]
    fn key_release_is_ignored() {
        let catalog = catalog();
        let mut app = App::new(&catalog, ShuffleSequencer::seeded(catalog.len(), 10).unwrap());
        let mut release = press(KeyCode::Char('n'));
        release.kind = KeyEventKind::Release;
        app.handle_key(release, &mut RecordingClipboard::default());
        assert_eq!(app.words_seen, 1);
    }

    #[test]
    fn message_log_is_bounded() {
        let catalog = catalog();
        let mut app = App::new(&catalog, ShuffleSequencer::seeded(catalog.len(), 11).unwrap());
        for i in 0..20 {
            app.add_message(&format!("message {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages.last().unwrap().text, "message 19");
    }
}
