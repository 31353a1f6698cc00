use std::fmt;
use std::time::Duration;

use rand::rngs::ThreadRng;
use rand::Rng;
use tracing::{info, warn};

use crate::{
    boss::Boss,
    config::GameConfig,
    error::{GameError, Result},
    language::WordBank,
    runtime::{Clock, InputSource, KeyInput},
    session::{LevelOutcome, LevelSession, SessionEnd},
    ui::Renderer,
};

/// Running totals carried from level to level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    pub score: u64,
    pub lives: u32,
    /// Level currently being played, 1-based.
    pub level: u32,
}

impl GameState {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            score: 0,
            lives: config.starting_lives,
            level: 1,
        }
    }
}

/// Final report printed after the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSummary {
    pub score: u64,
    pub levels_cleared: u32,
    pub lives: u32,
    pub victory: bool,
    pub aborted: bool,
}

impl GameSummary {
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        if self.aborted {
            lines.push("Game exited by user.".to_string());
            lines.push(String::new());
        }
        lines.push(if self.victory {
            "CONGRATULATIONS! You defeated all the bosses!".to_string()
        } else {
            "You ran out of lives or quit the game.".to_string()
        });
        lines.push(String::new());
        lines.push(format!("Final Score: {}", self.score));
        lines.push(format!("You reached Level: {}", self.levels_cleared));
        lines.push(String::new());
        lines.push("Thanks for playing!".to_string());
        lines
    }
}

impl fmt::Display for GameSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lines().join("\n"))
    }
}

/// Plays levels in order until the player wins, runs out of lives or quits.
pub struct Game<G: Rng = ThreadRng> {
    config: GameConfig,
    words: WordBank,
    state: GameState,
    rng: G,
}

impl Game<ThreadRng> {
    pub fn new(config: GameConfig, words: WordBank) -> Result<Self> {
        Self::with_rng(config, words, rand::thread_rng())
    }
}

impl<G: Rng> Game<G> {
    /// Validates the rules and word lists up front so bad data fails before
    /// the terminal changes mode.
    pub fn with_rng(config: GameConfig, words: WordBank, rng: G) -> Result<Self> {
        config.validate()?;
        words.validate()?;
        Ok(Self {
            state: GameState::new(&config),
            config,
            words,
            rng,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn is_over(&self) -> bool {
        self.state.lives == 0 || self.state.level > self.config.total_levels
    }

    pub fn is_victory(&self) -> bool {
        self.state.lives > 0 && self.state.level > self.config.total_levels
    }

    /// Apply a level result: a pass scores and advances, a failure costs a
    /// life and the same level is retried.
    pub fn apply(&mut self, outcome: LevelOutcome) {
        match outcome {
            LevelOutcome::Passed => {
                self.state.score += self.config.points_per_boss;
                self.state.level += 1;
            }
            LevelOutcome::Failed => {
                self.state.lives = self.state.lives.saturating_sub(1);
            }
        }
        info!(
            score = self.state.score,
            lives = self.state.lives,
            level = self.state.level,
            "progress updated"
        );
    }

    pub fn summary(&self, aborted: bool) -> GameSummary {
        GameSummary {
            score: self.state.score,
            levels_cleared: self.state.level.saturating_sub(1),
            lives: self.state.lives,
            victory: self.is_victory(),
            aborted,
        }
    }

    /// How long the game-over screen stays up. An aborted run exits at once.
    pub fn closing_pause(&self, summary: &GameSummary) -> Duration {
        if summary.aborted {
            Duration::ZERO
        } else {
            self.config.result_pause
        }
    }

    /// Show the welcome screen and wait for Enter. Returns `false` when the
    /// player interrupts instead.
    pub fn welcome<I, R, C>(&mut self, input: &mut I, renderer: &mut R, clock: &C) -> Result<bool>
    where
        I: InputSource + ?Sized,
        R: Renderer + ?Sized,
        C: Clock + ?Sized,
    {
        renderer.clear()?;
        renderer.draw_welcome(&self.config)?;
        loop {
            match input.poll()? {
                Some(KeyInput::Interrupt) => return Ok(false),
                Some(KeyInput::Enter) => return Ok(true),
                Some(_) => {}
                None => clock.sleep(self.config.tick),
            }
        }
    }

    /// Run levels until the game is decided or interrupted.
    pub fn play<I, R, C>(
        &mut self,
        input: &mut I,
        renderer: &mut R,
        clock: &C,
    ) -> Result<GameSummary>
    where
        I: InputSource + ?Sized,
        R: Renderer + ?Sized,
        C: Clock + ?Sized,
    {
        while !self.is_over() {
            let level = self.state.level;
            let boss = Boss::for_level(level).ok_or(GameError::MissingBoss(level))?;
            let words = self
                .words
                .select_words(level, self.config.words_per_boss, &mut self.rng)?;

            renderer.clear()?;
            let mut session =
                LevelSession::new(level, boss, words, clock.now(), self.config.level_time);
            match session.run(&self.state, &self.config, input, renderer, clock)? {
                SessionEnd::Resolved(outcome) => self.apply(outcome),
                SessionEnd::Aborted => {
                    warn!(score = self.state.score, level, "game aborted");
                    return Ok(self.summary(true));
                }
            }
        }

        let summary = self.summary(false);
        info!(
            score = summary.score,
            victory = summary.victory,
            "game finished"
        );
        Ok(summary)
    }

    /// Welcome screen, every level, then the game-over screen.
    pub fn run<I, R, C>(&mut self, input: &mut I, renderer: &mut R, clock: &C) -> Result<GameSummary>
    where
        I: InputSource + ?Sized,
        R: Renderer + ?Sized,
        C: Clock + ?Sized,
    {
        let summary = if self.welcome(input, renderer, clock)? {
            self.play(input, renderer, clock)?
        } else {
            warn!("interrupted at the welcome screen");
            self.summary(true)
        };

        renderer.clear()?;
        renderer.draw_game_over(&summary)?;
        Ok(summary)
    }
}
