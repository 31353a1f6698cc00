use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    queue,
    terminal::{Clear, ClearType},
};

use super::{input_line, level_result_lines, prompt_line, welcome_lines, Hud, Renderer, RULE_WIDTH};
use crate::{boss::Boss, config::GameConfig, game::GameSummary, session::LevelOutcome};

const BANNER_WIDTH: usize = 40;

/// Line-oriented renderer for output that is not a terminal.
///
/// Level frames are only written when their text changes, so a pipe sees one
/// frame per keystroke or per second of countdown rather than one per tick.
pub struct PlainRenderer<W: Write> {
    out: W,
    last_frame: Option<String>,
}

impl<W: Write> PlainRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            last_frame: None,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_screen(&mut self, lines: &[String]) -> io::Result<()> {
        self.clear()?;
        for line in lines {
            writeln!(self.out, "{line}")?;
        }
        self.out.flush()
    }
}

fn banner(title: &str) -> Vec<String> {
    let rule = "=".repeat(BANNER_WIDTH);
    vec![rule.clone(), format!("{title:^width$}", width = BANNER_WIDTH), rule]
}

pub fn frame_lines(hud: &Hud, boss: &Boss, prompt: &str, input: &str) -> Vec<String> {
    let rule = "=".repeat(RULE_WIDTH);
    let mut lines = vec![
        rule.clone(),
        hud.status_line(),
        hud.timer_line(),
        rule,
        String::new(),
        format!("--- BOSS: {} ---", boss.name),
    ];
    lines.extend(boss.art_lines().map(str::to_string));
    lines.push(String::new());
    lines.push(prompt_line(prompt));
    lines.push(input_line(input));
    lines
}

impl<W: Write> Renderer for PlainRenderer<W> {
    fn clear(&mut self) -> io::Result<()> {
        queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))
    }

    fn draw_welcome(&mut self, config: &GameConfig) -> io::Result<()> {
        self.last_frame = None;
        let mut text = welcome_lines(config).into_iter();
        let mut lines = banner(&text.next().unwrap_or_default());
        lines.extend(text);
        self.write_screen(&lines)
    }

    fn draw_frame(&mut self, hud: &Hud, boss: &Boss, prompt: &str, input: &str) -> io::Result<()> {
        let lines = frame_lines(hud, boss, prompt, input);
        let text = lines.join("\n");
        if self.last_frame.as_deref() == Some(text.as_str()) {
            return Ok(());
        }
        self.write_screen(&lines)?;
        self.last_frame = Some(text);
        Ok(())
    }

    fn draw_level_result(&mut self, boss: &Boss, outcome: LevelOutcome) -> io::Result<()> {
        self.last_frame = None;
        let mut lines = Vec::new();
        if outcome == LevelOutcome::Passed {
            lines.push(format!("--- BOSS: {} ---", boss.name));
            lines.extend(boss.art_lines().map(str::to_string));
        }
        lines.push(String::new());
        lines.extend(level_result_lines(boss, outcome));
        self.write_screen(&lines)
    }

    fn draw_game_over(&mut self, summary: &GameSummary) -> io::Result<()> {
        self.last_frame = None;
        let mut lines = banner("GAME OVER");
        lines.extend(summary.lines());
        self.write_screen(&lines)
    }
}
