pub mod plain;
pub mod tui;

pub use plain::PlainRenderer;
pub use tui::TuiRenderer;

use std::io;

use crate::{boss::Boss, config::GameConfig, game::GameSummary, session::LevelOutcome};

const HEART: &str = "❤";
pub const RULE_WIDTH: usize = 50;

/// Status shown above the boss while a level runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hud {
    pub level: u32,
    pub total_levels: u32,
    pub score: u64,
    pub lives: u32,
    /// Whole seconds left, floored.
    pub seconds_left: u64,
    pub words_left: usize,
}

impl Hud {
    pub fn hearts(&self) -> String {
        HEART.repeat(self.lives as usize)
    }

    pub fn status_line(&self) -> String {
        format!(
            " Level: {}/{} | Score: {} | Lives: {}",
            self.level,
            self.total_levels,
            self.score,
            self.hearts()
        )
    }

    pub fn timer_line(&self) -> String {
        format!(
            " Time Left: {:02}s | Words to Defeat Boss: {}",
            self.seconds_left, self.words_left
        )
    }
}

/// Drawing surface for the game. Every call draws a complete screen.
pub trait Renderer {
    fn clear(&mut self) -> io::Result<()>;

    fn draw_welcome(&mut self, config: &GameConfig) -> io::Result<()>;

    fn draw_frame(&mut self, hud: &Hud, boss: &Boss, prompt: &str, input: &str) -> io::Result<()>;

    fn draw_level_result(&mut self, boss: &Boss, outcome: LevelOutcome) -> io::Result<()>;

    fn draw_game_over(&mut self, summary: &GameSummary) -> io::Result<()>;
}

pub fn welcome_lines(config: &GameConfig) -> Vec<String> {
    vec![
        "WELCOME TO TYPING BOSS RUSH!".to_string(),
        String::new(),
        "Defeat the bosses by typing the words shown.".to_string(),
        format!(
            "You have {} lives and {} seconds per level.",
            config.starting_lives,
            config.level_time.as_secs()
        ),
        String::new(),
        "Press Enter to start...".to_string(),
    ]
}

pub fn level_result_lines(boss: &Boss, outcome: LevelOutcome) -> Vec<String> {
    match outcome {
        LevelOutcome::Passed => vec![format!("*** {} DEFEATED! ***", boss.name.to_uppercase())],
        LevelOutcome::Failed => vec![
            "*** TIME'S UP! ***".to_string(),
            "You lost a life.".to_string(),
        ],
    }
}

pub fn prompt_line(prompt: &str) -> String {
    format!("Type this word: -> {prompt} <-")
}

pub fn input_line(input: &str) -> String {
    format!(" > {input}")
}
