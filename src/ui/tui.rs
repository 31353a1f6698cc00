use std::io;

use ratatui::{
    backend::Backend,
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
    Terminal,
};
use unicode_width::UnicodeWidthStr;

use super::{input_line, level_result_lines, welcome_lines, Hud, Renderer};
use crate::{boss::Boss, config::GameConfig, game::GameSummary, session::LevelOutcome};

const TITLE: &str = " Typing Boss Rush ";
const LOW_TIME_SECS: u64 = 10;

/// Full-screen renderer for an interactive terminal.
pub struct TuiRenderer<B: Backend> {
    terminal: Terminal<B>,
}

impl<B: Backend> TuiRenderer<B> {
    pub fn new(backend: B) -> io::Result<Self> {
        Ok(Self {
            terminal: Terminal::new(backend)?,
        })
    }

    pub fn backend(&self) -> &B {
        self.terminal.backend()
    }

    fn draw_widget<W>(&mut self, widget: W) -> io::Result<()>
    where
        W: Widget,
    {
        self.terminal.draw(|f| f.render_widget(widget, f.area()))?;
        Ok(())
    }
}

impl<B: Backend> Renderer for TuiRenderer<B> {
    fn clear(&mut self) -> io::Result<()> {
        self.terminal.clear()
    }

    fn draw_welcome(&mut self, config: &GameConfig) -> io::Result<()> {
        let lines = welcome_lines(config);
        self.draw_widget(&MessageView {
            title: TITLE,
            boss: None,
            lines: &lines,
            style: Style::default().fg(Color::Cyan),
        })
    }

    fn draw_frame(&mut self, hud: &Hud, boss: &Boss, prompt: &str, input: &str) -> io::Result<()> {
        self.draw_widget(&FrameView {
            hud,
            boss,
            prompt,
            input,
        })
    }

    fn draw_level_result(&mut self, boss: &Boss, outcome: LevelOutcome) -> io::Result<()> {
        let lines = level_result_lines(boss, outcome);
        let (shown_boss, color) = match outcome {
            LevelOutcome::Passed => (Some(boss), Color::Green),
            LevelOutcome::Failed => (None, Color::Red),
        };
        self.draw_widget(&MessageView {
            title: TITLE,
            boss: shown_boss,
            lines: &lines,
            style: Style::default().fg(color),
        })
    }

    fn draw_game_over(&mut self, summary: &GameSummary) -> io::Result<()> {
        let lines = summary.lines();
        let color = if summary.victory {
            Color::Green
        } else {
            Color::Yellow
        };
        self.draw_widget(&MessageView {
            title: " GAME OVER ",
            boss: None,
            lines: &lines,
            style: Style::default().fg(color),
        })
    }
}

/// Boss art with every line padded to the widest one, so centering the
/// paragraph keeps the drawing intact.
fn padded_art(boss: &Boss) -> Vec<Line<'static>> {
    let width = boss
        .art_lines()
        .map(UnicodeWidthStr::width)
        .max()
        .unwrap_or(0);
    boss.art_lines()
        .map(|line| {
            let pad = width.saturating_sub(line.width());
            Line::from(format!("{line}{}", " ".repeat(pad)))
        })
        .collect()
}

/// One tick of a running level.
pub struct FrameView<'a> {
    pub hud: &'a Hud,
    pub boss: &'a Boss,
    pub prompt: &'a str,
    pub input: &'a str,
}

impl Widget for &FrameView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let bold_style = Style::default().add_modifier(Modifier::BOLD);
        let target_style = bold_style.fg(Color::Yellow);
        let dim_style = Style::default().add_modifier(Modifier::DIM);
        let timer_style = if self.hud.seconds_left < LOW_TIME_SECS {
            bold_style.fg(Color::Red)
        } else {
            Style::default()
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(4), // hud
                Constraint::Min(3),    // boss
                Constraint::Length(3), // prompt
                Constraint::Length(3), // input
            ])
            .split(area);

        Paragraph::new(vec![
            Line::from(self.hud.status_line()),
            Line::from(Span::styled(self.hud.timer_line(), timer_style)),
        ])
        .block(Block::default().borders(Borders::ALL).title(TITLE))
        .render(chunks[0], buf);

        Paragraph::new(padded_art(self.boss))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" BOSS: {} ", self.boss.name)),
            )
            .render(chunks[1], buf);

        Paragraph::new(Line::from(vec![
            Span::raw("Type this word: -> "),
            Span::styled(self.prompt, target_style),
            Span::raw(" <-"),
        ]))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL))
        .render(chunks[2], buf);

        Paragraph::new(Line::from(vec![
            Span::styled(input_line(self.input), bold_style),
            Span::styled("_", dim_style),
        ]))
        .block(Block::default().borders(Borders::ALL))
        .render(chunks[3], buf);
    }
}

/// Centered text screen, optionally topped with a boss.
pub struct MessageView<'a> {
    pub title: &'a str,
    pub boss: Option<&'a Boss>,
    pub lines: &'a [String],
    pub style: Style,
}

impl Widget for &MessageView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut text: Vec<Line> = Vec::new();
        if let Some(boss) = self.boss {
            text.push(Line::from(format!("--- BOSS: {} ---", boss.name)));
            text.extend(padded_art(boss));
            text.push(Line::default());
        }
        text.extend(
            self.lines
                .iter()
                .map(|l| Line::from(Span::styled(l.as_str(), self.style))),
        );

        let height = (text.len() as u16).saturating_add(2).min(area.height);
        let top = area.height.saturating_sub(height) / 2;
        let inner = Rect::new(area.x, area.y + top, area.width, height);

        Paragraph::new(text)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(self.title)
                    .style(Style::default().add_modifier(Modifier::BOLD)),
            )
            .render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;

    fn rendered(buffer: &Buffer) -> String {
        buffer
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    fn hud() -> Hud {
        Hud {
            level: 4,
            total_levels: 25,
            score: 300,
            lives: 2,
            seconds_left: 42,
            words_left: 6,
        }
    }

    #[test]
    fn test_frame_view_renders_all_parts() {
        let hud = hud();
        let boss = Boss::for_level(4).unwrap();
        let view = FrameView {
            hud: &hud,
            boss,
            prompt: "bed",
            input: "be",
        };
        let area = Rect::new(0, 0, 80, 30);
        let mut buffer = Buffer::empty(area);

        (&view).render(area, &mut buffer);

        let text = rendered(&buffer);
        assert!(text.contains("Level: 4/25 | Score: 300"));
        assert!(text.contains("Time Left: 42s"));
        assert!(text.contains("BOSS: Spike"));
        assert!(text.contains("Type this word: -> bed <-"));
        assert!(text.contains(" > be"));
    }

    #[test]
    fn test_frame_view_small_area() {
        let hud = hud();
        let view = FrameView {
            hud: &hud,
            boss: Boss::for_level(9).unwrap(),
            prompt: "bed",
            input: "",
        };
        let area = Rect::new(0, 0, 20, 5);
        let mut buffer = Buffer::empty(area);

        (&view).render(area, &mut buffer);

        assert_eq!(*buffer.area(), area);
    }

    #[test]
    fn test_padded_art_lines_share_width() {
        let boss = Boss::for_level(9).unwrap();
        let widths: Vec<usize> = padded_art(boss).iter().map(Line::width).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn test_renderer_draws_through_backend() {
        let mut renderer = TuiRenderer::new(TestBackend::new(80, 30)).unwrap();
        let hud = hud();

        renderer
            .draw_frame(&hud, Boss::for_level(1).unwrap(), "act", "a")
            .unwrap();

        let text = rendered(renderer.backend().buffer());
        assert!(text.contains("Slime Blob"));
        assert!(text.contains("-> act <-"));
    }

    #[test]
    fn test_renderer_message_screens() {
        let mut renderer = TuiRenderer::new(TestBackend::new(80, 30)).unwrap();
        let boss = Boss::for_level(25).unwrap();

        renderer.draw_welcome(&GameConfig::default()).unwrap();
        assert!(rendered(renderer.backend().buffer()).contains("WELCOME TO TYPING BOSS RUSH!"));

        renderer
            .draw_level_result(boss, LevelOutcome::Passed)
            .unwrap();
        assert!(rendered(renderer.backend().buffer()).contains("THE WORD MASTER DEFEATED!"));

        renderer
            .draw_level_result(boss, LevelOutcome::Failed)
            .unwrap();
        assert!(rendered(renderer.backend().buffer()).contains("You lost a life."));

        let summary = GameSummary {
            score: 2500,
            levels_cleared: 25,
            lives: 1,
            victory: true,
            aborted: false,
        };
        renderer.clear().unwrap();
        renderer.draw_game_over(&summary).unwrap();
        let text = rendered(renderer.backend().buffer());
        assert!(text.contains("GAME OVER"));
        assert!(text.contains("Final Score: 2500"));
    }
}
