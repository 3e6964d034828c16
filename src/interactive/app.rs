//! TUI application state and logic

use crate::core::{Code, Color, Feedback};
use crate::game::{Board, GameConfig, Outcome};
use crate::solver::{GuessStrategist, StrategyType};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use rustc_hash::FxHashMap;
use std::io;

/// Longest input line accepted, enough for `R, B, Y, G` style entries
const MAX_INPUT: usize = 16;

/// Application state
pub struct App {
    pub config: GameConfig,
    pub board: Board,
    pub strategist: GuessStrategist<StrategyType>,
    pub hint: Option<Code>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
    rng: StdRng,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub turn_distribution: FxHashMap<usize, usize>,
}

impl App {
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        let mut rng = config.rng();
        let board = Board::new(Code::generate_random_unique(&mut rng), config.turn_limit);
        let strategist = GuessStrategist::new(config.strategy, StdRng::from_rng(&mut rng));

        Self {
            config,
            board,
            strategist,
            hint: None,
            input_buffer: String::new(),
            messages: vec![
                Message {
                    text: "Welcome! A secret of 4 different colors has been chosen.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Type colors as letters, e.g. 'R B Y G', then press Enter".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Guessing,
            rng,
        }
    }

    /// Dispatch a key press
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::GameOver => match code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('n') | KeyCode::Enter => self.new_game(),
                _ => {}
            },
            InputMode::Guessing => match code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                KeyCode::Tab => self.request_hint(),
                KeyCode::Esc => self.input_buffer.clear(),
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => self.submit_guess(),
                KeyCode::Char(c) if is_input_char(c) && self.input_buffer.len() < MAX_INPUT => {
                    self.input_buffer.push(c.to_ascii_uppercase());
                }
                _ => {}
            },
        }
    }

    /// Score the typed guess and check for the end of the game
    pub fn submit_guess(&mut self) {
        let input = std::mem::take(&mut self.input_buffer);

        let guess = match Code::parse(&input) {
            Ok(guess) => guess,
            Err(e) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
                return;
            }
        };

        let Ok(feedback) = self.board.add_guess(guess) else {
            self.add_message("The game is over, press 'n' for a new one", MessageStyle::Error);
            return;
        };
        self.hint = None;

        if let Err(e) = self.strategist.observe_guess(guess, feedback) {
            self.add_message(&format!("Hints unavailable: {e}"), MessageStyle::Error);
        }

        self.add_message(
            &format!(
                "Turn {}: {} {}",
                self.board.turns_elapsed(),
                guess,
                feedback
            ),
            MessageStyle::Info,
        );

        match self.board.outcome() {
            Outcome::Won { turns } => {
                self.stats.total_games += 1;
                self.stats.games_won += 1;
                *self.stats.turn_distribution.entry(turns).or_insert(0) += 1;
                self.input_mode = InputMode::GameOver;
                self.add_message(
                    &format!(
                        "🎉 Cracked in {turns} {}!",
                        if turns == 1 { "turn" } else { "turns" }
                    ),
                    MessageStyle::Success,
                );
            }
            Outcome::Lost => {
                self.stats.total_games += 1;
                self.input_mode = InputMode::GameOver;
                self.add_message(
                    &format!("Out of turns! The secret was {}", self.board.secret().names()),
                    MessageStyle::Error,
                );
            }
            Outcome::InProgress => {}
        }
    }

    /// Ask the solver what it would play next
    pub fn request_hint(&mut self) {
        match self.strategist.next_guess() {
            Ok(hint) => {
                self.hint = Some(hint);
                self.add_message(&format!("Hint: try {hint}"), MessageStyle::Info);
            }
            Err(e) => self.add_message(&format!("No hint available: {e}"), MessageStyle::Error),
        }
    }

    pub fn new_game(&mut self) {
        let secret = Code::generate_random_unique(&mut self.rng);
        self.board = Board::new(secret, self.config.turn_limit);
        self.strategist = GuessStrategist::new(self.config.strategy, StdRng::from_rng(&mut self.rng));
        self.hint = None;
        self.input_buffer.clear();
        self.messages.clear();
        self.input_mode = InputMode::Guessing;
        self.add_message("New game started! A new secret has been chosen.", MessageStyle::Info);
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

    /// Guesses and feedback so far
    #[must_use]
    pub fn history(&self) -> &[(Code, Feedback)] {
        self.board.history()
    }

    /// Codes still consistent with what the solver has deduced
    #[must_use]
    pub fn possible_codes(&self) -> usize {
        self.strategist.tracker().possible_codes()
    }
}

fn is_input_char(c: char) -> bool {
    Color::from_code(c).is_some() || matches!(c, ' ' | ',' | ';' | '-' | '|' | '/')
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
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key.code, key.modifiers);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(GameConfig::default().with_seed(12))
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(KeyCode::Char(c), KeyModifiers::NONE);
        }
    }

    #[test]
    fn typing_filters_and_uppercases() {
        let mut app = app();
        type_text(&mut app, "r b xy,g");
        assert_eq!(app.input_buffer, "R B Y,G");

        app.handle_key(KeyCode::Backspace, KeyModifiers::NONE);
        assert_eq!(app.input_buffer, "R B Y,");

        app.handle_key(KeyCode::Esc, KeyModifiers::NONE);
        assert!(app.input_buffer.is_empty());
    }

    #[test]
    fn invalid_guess_is_reported() {
        let mut app = app();
        type_text(&mut app, "RRBY");
        app.handle_key(KeyCode::Enter, KeyModifiers::NONE);

        assert!(app.history().is_empty());
        let last = app.messages.last().unwrap();
        assert_eq!(last.style, MessageStyle::Error);
        assert!(last.text.contains("unique"));
    }

    #[test]
    fn winning_guess_ends_game() {
        let mut app = app();
        let secret = app.board.secret().to_string();
        type_text(&mut app, &secret);
        app.handle_key(KeyCode::Enter, KeyModifiers::NONE);

        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.turn_distribution.get(&1), Some(&1));

        app.handle_key(KeyCode::Char('n'), KeyModifiers::NONE);
        assert_eq!(app.input_mode, InputMode::Guessing);
        assert!(app.history().is_empty());
    }

    #[test]
    fn losing_reveals_secret() {
        let mut app = App::new(GameConfig::default().with_seed(4).with_turn_limit(1));
        let secret = *app.board.secret();
        let wrong = Code::all().into_iter().find(|c| *c != secret).unwrap();

        type_text(&mut app, &wrong.to_string());
        app.handle_key(KeyCode::Enter, KeyModifiers::NONE);

        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 0);
        assert!(app.messages.last().unwrap().text.contains(&secret.names()));
    }

    #[test]
    fn hint_follows_the_game() {
        let mut app = app();
        app.handle_key(KeyCode::Tab, KeyModifiers::NONE);
        assert!(app.hint.is_some());

        let hint = app.hint.unwrap().to_string();
        type_text(&mut app, &hint);
        app.handle_key(KeyCode::Enter, KeyModifiers::NONE);

        assert_eq!(app.history().len(), 1);
        assert!(app.hint.is_none());
        assert!(app.possible_codes() <= 360);
    }

    #[test]
    fn quit_keys() {
        let mut ctrl_c = app();
        ctrl_c.handle_key(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(ctrl_c.should_quit);

        let mut q = app();
        q.handle_key(KeyCode::Char('q'), KeyModifiers::NONE);
        assert!(q.should_quit);
    }

    #[test]
    fn messages_are_capped() {
        let mut app = app();
        for i in 0..10 {
            app.add_message(&format!("message {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages[0].text, "message 5");
    }
}
