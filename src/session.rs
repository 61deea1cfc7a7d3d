use crate::error::GameError;
use crate::grid::{self, LetterTile, GRID_SIZE};
use crate::highscore::HighScoreStore;
use crate::roster::{Character, CharacterPool, DEFAULT_CHARACTERS};
use crate::round::{Round, Submission};
use crate::scoring;
use crate::word::{format_name, CaseMode};
use chrono::prelude::*;
use directories::ProjectDirs;
use std::collections::HashSet;
use std::fs::OpenOptions;
use std::io::{self, Write};

#[derive(Debug, Clone, PartialEq)]
pub struct SessionSettings {
    pub case_mode: CaseMode,
    pub total_rounds: usize,
    pub grid_size: usize,
    pub roster: Vec<Character>,
    pub excluded_names: Vec<String>,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            case_mode: CaseMode::Upper,
            total_rounds: 5,
            grid_size: GRID_SIZE,
            roster: DEFAULT_CHARACTERS.iter().copied().map(Character::new).collect(),
            excluded_names: vec!["naruto".to_string()],
        }
    }
}

impl From<&crate::config::Config> for SessionSettings {
    fn from(cfg: &crate::config::Config) -> Self {
        Self {
            case_mode: cfg.case_mode,
            total_rounds: cfg.total_rounds,
            excluded_names: cfg.excluded_characters.clone(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    InProgress,
    Finished,
}

/// State-change notifications for the rendering layer.
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    CharacterPresented { name: String, target_word: String },
    LetterGridReady { tiles: Vec<LetterTile> },
    LetterResult { submission: Submission, typed_so_far: String },
    HintRequested { letter: char },
    RoundComplete { score: i64, is_last_round: bool },
    SessionComplete { final_score: i64, is_new_high_score: bool },
}

pub trait SessionObserver {
    fn on_event(&mut self, event: &GameEvent);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundSummary {
    pub score: i64,
    pub mistakes: u32,
    pub is_last_round: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SessionSummary {
    pub final_score: i64,
    pub per_round_scores: Vec<i64>,
    pub is_new_high_score: bool,
}

/// Orchestrates a run of `total_rounds` spelling rounds: draws characters,
/// owns the active `Round`, scores completions, and settles the high score
/// when the last round finishes.
///
/// All calls are synchronous; the front-end decides when a completed word
/// is acknowledged by calling `complete_round`, typically once its
/// celebration animation has played out.
pub struct GameSession {
    settings: SessionSettings,
    pool: CharacterPool,
    store: Box<dyn HighScoreStore>,
    observer: Option<Box<dyn SessionObserver>>,
    used_names: HashSet<String>,
    round: Option<Round>,
    tiles: Vec<LetterTile>,
    round_scores: Vec<i64>,
    round_mistakes: Vec<u32>,
    round_index: usize,
    state: SessionState,
    summary: Option<SessionSummary>,
}

impl std::fmt::Debug for GameSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameSession")
            .field("settings", &self.settings)
            .field("pool", &self.pool)
            .field("store", &"<dyn HighScoreStore>")
            .field("observer", &self.observer.as_ref().map(|_| "<dyn SessionObserver>"))
            .field("used_names", &self.used_names)
            .field("round", &self.round)
            .field("tiles", &self.tiles)
            .field("round_scores", &self.round_scores)
            .field("round_mistakes", &self.round_mistakes)
            .field("round_index", &self.round_index)
            .field("state", &self.state)
            .field("summary", &self.summary)
            .finish()
    }
}

impl GameSession {
    pub fn new(
        settings: SessionSettings,
        store: Box<dyn HighScoreStore>,
    ) -> Result<Self, GameError> {
        let pool = CharacterPool::new(settings.roster.clone(), &settings.excluded_names)?;

        Ok(Self {
            settings,
            pool,
            store,
            observer: None,
            used_names: HashSet::new(),
            round: None,
            tiles: Vec::new(),
            round_scores: Vec::new(),
            round_mistakes: Vec::new(),
            round_index: 0,
            state: SessionState::InProgress,
            summary: None,
        })
    }

    pub fn set_observer(&mut self, observer: Box<dyn SessionObserver>) {
        self.observer = Some(observer);
    }

    fn notify(&mut self, event: GameEvent) {
        if let Some(observer) = self.observer.as_mut() {
            observer.on_event(&event);
        }
    }

    /// Draw the next character and open a fresh round for it.
    pub fn start_round(&mut self) -> Result<(), GameError> {
        if self.state == SessionState::Finished {
            return Err(GameError::SessionFinished);
        }

        let character = self.pool.draw_next(&mut self.used_names);
        let target_word = format_name(character.name(), self.settings.case_mode);

        self.tiles = grid::generate(&target_word, self.settings.case_mode, self.settings.grid_size);
        self.round = Some(Round::new(target_word.clone()));

        self.notify(GameEvent::CharacterPresented {
            name: character.name().to_string(),
            target_word,
        });
        let tiles = self.tiles.clone();
        self.notify(GameEvent::LetterGridReady { tiles });

        Ok(())
    }

    /// Feed one clicked (or typed) letter into the active round.
    ///
    /// Non-alphabetic glyphs and clicks with no round open are ignored
    /// without any state change.
    pub fn submit_letter_click(&mut self, glyph: char) -> Option<Submission> {
        if !glyph.is_ascii_alphabetic() {
            return None;
        }

        let round = self.round.as_mut()?;
        let submission = round.submit_letter(glyph);
        let typed_so_far = round.typed_so_far().to_string();

        self.notify(GameEvent::LetterResult {
            submission,
            typed_so_far,
        });
        if let Some(letter) = submission.hint {
            self.notify(GameEvent::HintRequested { letter });
        }

        Some(submission)
    }

    /// Score the completed round and advance the session. On the last
    /// round this finalizes the session and settles the high score;
    /// storage failures are swallowed and read as "no new high score".
    pub fn complete_round(&mut self) -> Result<RoundSummary, GameError> {
        let round = self.round.as_ref().ok_or(GameError::NoActiveRound)?;
        if !round.is_complete() {
            return Err(GameError::RoundNotComplete);
        }

        let elapsed_secs = round.elapsed().as_secs_f64();
        let mistakes = round.mistakes();
        let score = scoring::score_round(elapsed_secs, mistakes);

        self.round_scores.push(score);
        self.round_mistakes.push(mistakes);
        self.round_index += 1;
        self.round = None;
        self.tiles.clear();

        let is_last_round = self.round_index >= self.settings.total_rounds;
        self.notify(GameEvent::RoundComplete {
            score,
            is_last_round,
        });

        if is_last_round {
            self.state = SessionState::Finished;

            let final_score = scoring::finalize_session(&self.round_scores)
                .expect("at least one round completed");
            let is_new_high_score = self.store.set_if_greater(final_score);

            self.summary = Some(SessionSummary {
                final_score,
                per_round_scores: self.round_scores.clone(),
                is_new_high_score,
            });
            self.notify(GameEvent::SessionComplete {
                final_score,
                is_new_high_score,
            });
        }

        Ok(RoundSummary {
            score,
            mistakes,
            is_last_round,
        })
    }

    /// Discard the active round, e.g. when the player returns to the menu.
    /// Nothing was persisted mid-round, so there is nothing to roll back.
    pub fn abandon_round(&mut self) {
        self.round = None;
        self.tiles.clear();
    }

    /// Back to a fresh session. Settings (including the case mode, a user
    /// preference) are kept.
    pub fn reset_session(&mut self) {
        self.round = None;
        self.tiles.clear();
        self.round_scores.clear();
        self.round_mistakes.clear();
        self.round_index = 0;
        self.used_names.clear();
        self.state = SessionState::InProgress;
        self.summary = None;
    }

    /// 1-based progress for the "Character 2/5" display.
    pub fn progress(&self) -> (usize, usize) {
        (
            (self.round_index + 1).min(self.settings.total_rounds),
            self.settings.total_rounds,
        )
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn current_round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    pub fn tiles(&self) -> &[LetterTile] {
        &self.tiles
    }

    pub fn per_round_scores(&self) -> &[i64] {
        &self.round_scores
    }

    pub fn summary(&self) -> Option<&SessionSummary> {
        self.summary.as_ref()
    }

    pub fn high_score(&self) -> i64 {
        self.store.high_score()
    }

    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    /// Append the finished session to the results log under the config
    /// directory. A no-op until the session is finished.
    pub fn save_results(&self) -> io::Result<()> {
        let summary = match &self.summary {
            Some(s) => s,
            None => return Ok(()),
        };

        if let Some(proj_dirs) = ProjectDirs::from("", "", "chalkspell") {
            let config_dir = proj_dirs.config_dir();
            let log_path = config_dir.join("log.csv");

            std::fs::create_dir_all(config_dir)?;

            // If the log file doesn't exist, we need to emit a header
            let needs_header = !log_path.exists();

            let mut log_file = OpenOptions::new()
                .write(true)
                .append(true)
                .create(true)
                .open(log_path)?;

            if needs_header {
                writeln!(log_file, "date,rounds,mistakes,final_score")?;
            }

            let total_mistakes: u32 = self.round_mistakes.iter().sum();

            writeln!(
                log_file,
                "{},{},{},{}",
                Local::now().format("%c"),
                self.settings.total_rounds,
                total_mistakes,
                summary.final_score,
            )?;
        }

        Ok(())
    }
}
