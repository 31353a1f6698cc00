use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::{
    boss::Boss,
    config::GameConfig,
    error::Result,
    game::GameState,
    runtime::{Clock, InputSource, KeyInput},
    ui::{Hud, Renderer},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Running,
    Passed,
    Failed,
}

impl SessionState {
    pub fn outcome(&self) -> Option<LevelOutcome> {
        match self {
            SessionState::Running => None,
            SessionState::Passed => Some(LevelOutcome::Passed),
            SessionState::Failed => Some(LevelOutcome::Failed),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum LevelOutcome {
    Passed,
    Failed,
}

/// How a call to [`LevelSession::run`] ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    Resolved(LevelOutcome),
    Aborted,
}

/// What a single key did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEffect {
    WordCompleted,
    Missed,
    Edited,
    Ignored,
    Interrupted,
}

/// One level: a timed run through a fixed list of target words.
#[derive(Debug, Clone)]
pub struct LevelSession {
    level: u32,
    boss: &'static Boss,
    words: Vec<String>,
    next_word: usize,
    input: String,
    started_at: Instant,
    time_limit: Duration,
    state: SessionState,
}

impl LevelSession {
    pub fn new(
        level: u32,
        boss: &'static Boss,
        words: Vec<String>,
        started_at: Instant,
        time_limit: Duration,
    ) -> Self {
        Self {
            level,
            boss,
            words,
            next_word: 0,
            input: String::new(),
            started_at,
            time_limit,
            state: SessionState::Running,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn words_left(&self) -> usize {
        self.words.len().saturating_sub(self.next_word)
    }

    /// The word to type next, or `None` once every word is done.
    pub fn current_word(&self) -> Option<&str> {
        self.words.get(self.next_word).map(String::as_str)
    }

    pub fn remaining(&self, now: Instant) -> Duration {
        self.time_limit
            .saturating_sub(now.saturating_duration_since(self.started_at))
    }

    /// Settle the level if it is over. Exhausting the words wins even when the
    /// timer ran out in the same tick.
    pub fn resolve(&mut self, now: Instant) -> Option<LevelOutcome> {
        if self.state == SessionState::Running {
            if self.words_left() == 0 {
                self.state = SessionState::Passed;
            } else if self.remaining(now).is_zero() {
                self.state = SessionState::Failed;
            }
        }
        self.state.outcome()
    }

    pub fn apply_key(&mut self, key: KeyInput) -> KeyEffect {
        if key == KeyInput::Interrupt {
            return KeyEffect::Interrupted;
        }
        if self.state != SessionState::Running {
            return KeyEffect::Ignored;
        }

        match key {
            KeyInput::Enter => {
                let typed = self.input.trim().to_lowercase();
                self.input.clear();
                match self.current_word() {
                    Some(target) if typed == target => {
                        debug!(level = self.level, word = target, "word completed");
                        self.next_word += 1;
                        KeyEffect::WordCompleted
                    }
                    _ => KeyEffect::Missed,
                }
            }
            KeyInput::Backspace => match self.input.pop() {
                Some(_) => KeyEffect::Edited,
                None => KeyEffect::Ignored,
            },
            KeyInput::Char(c) if !c.is_control() => {
                self.input.push(c);
                KeyEffect::Edited
            }
            KeyInput::Char(_) | KeyInput::Interrupt => KeyEffect::Ignored,
        }
    }

    pub fn hud(&self, progress: &GameState, total_levels: u32, now: Instant) -> Hud {
        Hud {
            level: self.level,
            total_levels,
            score: progress.score,
            lives: progress.lives,
            seconds_left: self.remaining(now).as_secs(),
            words_left: self.words_left(),
        }
    }

    /// Drive the level loop until it passes, fails or is interrupted.
    ///
    /// Each tick checks for a win, then for a timeout, then takes at most one
    /// key, then draws and sleeps. A completed word skips the draw and sleep so
    /// the win check runs before anything looks at the next word.
    pub fn run<I, R, C>(
        &mut self,
        progress: &GameState,
        config: &GameConfig,
        input: &mut I,
        renderer: &mut R,
        clock: &C,
    ) -> Result<SessionEnd>
    where
        I: InputSource + ?Sized,
        R: Renderer + ?Sized,
        C: Clock + ?Sized,
    {
        info!(
            level = self.level,
            boss = self.boss.name,
            words = self.words.len(),
            "level started"
        );

        loop {
            let now = clock.now();

            if let Some(outcome) = self.resolve(now) {
                info!(level = self.level, %outcome, "level resolved");
                renderer.clear()?;
                renderer.draw_level_result(self.boss, outcome)?;
                clock.sleep(config.result_pause);
                return Ok(SessionEnd::Resolved(outcome));
            }

            if let Some(key) = input.poll()? {
                match self.apply_key(key) {
                    KeyEffect::Interrupted => {
                        warn!(level = self.level, "level interrupted");
                        return Ok(SessionEnd::Aborted);
                    }
                    KeyEffect::WordCompleted => continue,
                    KeyEffect::Missed | KeyEffect::Edited | KeyEffect::Ignored => {}
                }
            }

            let Some(target) = self.current_word() else {
                continue;
            };
            let hud = self.hud(progress, config.total_levels, now);
            renderer.draw_frame(&hud, self.boss, target, &self.input)?;
            clock.sleep(config.tick);
        }
    }
}
