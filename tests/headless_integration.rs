use std::cell::RefCell;
use std::collections::VecDeque;
use std::io;
use std::rc::Rc;
use std::time::Duration;

use bossrush::{
    boss::Boss,
    language::{Tier, WordBank},
    runtime::{InputSource, KeyInput, ManualClock},
    session::LevelOutcome,
    ui::{Hud, Renderer},
    Game, GameConfig, GameSummary,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

// Headless runs of the whole game: a virtual clock, a recording renderer and
// a scripted typist that reads the prompt off the last drawn frame.

#[derive(Debug, Clone, PartialEq)]
enum Drawn {
    Welcome,
    Frame {
        level: u32,
        prompt: String,
        words_left: usize,
        lives: u32,
        score: u64,
    },
    LevelResult(LevelOutcome),
    GameOver(GameSummary),
}

#[derive(Debug, Default, Clone)]
struct Screen(Rc<RefCell<Vec<Drawn>>>);

impl Screen {
    fn push(&self, d: Drawn) {
        self.0.borrow_mut().push(d);
    }

    fn len(&self) -> usize {
        self.0.borrow().len()
    }

    /// The prompt on screen, if the latest drawing is a level frame.
    fn current_prompt(&self) -> Option<String> {
        match self.0.borrow().last() {
            Some(Drawn::Frame { prompt, .. }) => Some(prompt.clone()),
            _ => None,
        }
    }

    fn events(&self) -> Vec<Drawn> {
        self.0.borrow().clone()
    }

    fn results(&self) -> Vec<LevelOutcome> {
        self.events()
            .into_iter()
            .filter_map(|d| match d {
                Drawn::LevelResult(o) => Some(o),
                _ => None,
            })
            .collect()
    }

    /// The first frame of every level attempt.
    fn attempt_openers(&self) -> Vec<Drawn> {
        let events = self.events();
        let mut openers = Vec::new();
        let mut fresh = true;
        for d in events {
            match d {
                Drawn::Frame { .. } if fresh => {
                    openers.push(d);
                    fresh = false;
                }
                Drawn::LevelResult(_) => fresh = true,
                _ => {}
            }
        }
        openers
    }
}

struct RecordingRenderer {
    screen: Screen,
}

impl Renderer for RecordingRenderer {
    fn clear(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn draw_welcome(&mut self, _config: &GameConfig) -> io::Result<()> {
        self.screen.push(Drawn::Welcome);
        Ok(())
    }

    fn draw_frame(&mut self, hud: &Hud, _boss: &Boss, prompt: &str, _input: &str) -> io::Result<()> {
        self.screen.push(Drawn::Frame {
            level: hud.level,
            prompt: prompt.to_string(),
            words_left: hud.words_left,
            lives: hud.lives,
            score: hud.score,
        });
        Ok(())
    }

    fn draw_level_result(&mut self, _boss: &Boss, outcome: LevelOutcome) -> io::Result<()> {
        self.screen.push(Drawn::LevelResult(outcome));
        Ok(())
    }

    fn draw_game_over(&mut self, summary: &GameSummary) -> io::Result<()> {
        self.screen.push(Drawn::GameOver(summary.clone()));
        Ok(())
    }
}

/// Presses Enter on the welcome screen, then types `words` prompts correctly,
/// then sends `then` (if any) and goes quiet.
struct Typist {
    screen: Screen,
    queue: VecDeque<KeyInput>,
    words: usize,
    then: Option<KeyInput>,
    synced_at: usize,
}

impl Typist {
    fn new(screen: Screen, words: usize, then: Option<KeyInput>) -> Self {
        Self {
            screen,
            queue: VecDeque::from([KeyInput::Enter]),
            words,
            then,
            synced_at: 0,
        }
    }
}

impl InputSource for Typist {
    fn poll(&mut self) -> io::Result<Option<KeyInput>> {
        if let Some(key) = self.queue.pop_front() {
            if self.queue.is_empty() {
                self.synced_at = self.screen.len();
            }
            return Ok(Some(key));
        }
        // wait for a frame drawn after our last Enter before reading the prompt
        if self.screen.len() <= self.synced_at {
            return Ok(None);
        }
        if self.words == 0 {
            return Ok(self.then.take());
        }
        match self.screen.current_prompt() {
            Some(prompt) => {
                self.words -= 1;
                self.queue.extend(prompt.chars().map(KeyInput::Char));
                self.queue.push_back(KeyInput::Enter);
                self.poll()
            }
            None => Ok(None),
        }
    }
}

fn config() -> GameConfig {
    GameConfig::default().with_result_pause(Duration::ZERO)
}

fn play(bank: WordBank, words: usize, then: Option<KeyInput>) -> (GameSummary, Screen, ManualClock) {
    let screen = Screen::default();
    let mut renderer = RecordingRenderer {
        screen: screen.clone(),
    };
    let mut typist = Typist::new(screen.clone(), words, then);
    let clock = ManualClock::new();

    let mut game = Game::with_rng(config(), bank, StdRng::seed_from_u64(2024)).unwrap();
    let summary = game.run(&mut typist, &mut renderer, &clock).unwrap();
    (summary, screen, clock)
}

#[test]
fn two_word_level_passes_and_scores() {
    let bank = WordBank::from_lists([
        (Tier::Easy, vec!["act", "air"]),
        (Tier::Medium, vec!["able"]),
        (Tier::Hard, vec!["ability"]),
        (Tier::Expert, vec!["abbreviation"]),
    ]);

    let (summary, screen, _) = play(bank, 2, Some(KeyInput::Interrupt));

    assert_eq!(screen.results(), vec![LevelOutcome::Passed]);
    assert_eq!(summary.score, 100);
    assert_eq!(summary.levels_cleared, 1);
    assert_eq!(summary.lives, 3);
    assert!(summary.aborted);

    // level 2 opened with the new score, then the interrupt ended the run
    let openers = screen.attempt_openers();
    assert!(matches!(
        openers.last(),
        Some(Drawn::Frame { level: 2, score: 100, .. })
    ));
    assert!(matches!(screen.events().last(), Some(Drawn::GameOver(_))));
}

#[test]
fn timeout_with_one_word_left_costs_a_life() {
    let (summary, screen, clock) = play(WordBank::builtin().unwrap(), 9, None);

    // nine words typed, then silence: the first attempt fails with one left
    let events = screen.events();
    let first_fail = events
        .iter()
        .position(|d| *d == Drawn::LevelResult(LevelOutcome::Failed))
        .unwrap();
    assert!(matches!(
        events[first_fail - 1],
        Drawn::Frame {
            level: 1,
            words_left: 1,
            ..
        }
    ));
    assert!(events[..first_fail]
        .iter()
        .all(|d| *d != Drawn::LevelResult(LevelOutcome::Passed)));

    // every retry stays on level 1 with a full, freshly drawn list
    let openers = screen.attempt_openers();
    assert_eq!(openers.len(), 3);
    for (attempt, opener) in openers.iter().enumerate() {
        match opener {
            Drawn::Frame {
                level,
                words_left,
                lives,
                ..
            } => {
                assert_eq!(*level, 1);
                assert_eq!(*words_left, 10);
                assert_eq!(*lives, 3 - attempt as u32);
            }
            other => panic!("expected a frame, got {other:?}"),
        }
    }
    let prompts: Vec<&str> = openers
        .iter()
        .filter_map(|d| match d {
            Drawn::Frame { prompt, .. } => Some(prompt.as_str()),
            _ => None,
        })
        .collect();
    assert!(prompts.windows(2).any(|w| w[0] != w[1]));

    // three failures end the game
    assert_eq!(screen.results(), vec![LevelOutcome::Failed; 3]);
    assert!(!summary.victory);
    assert!(!summary.aborted);
    assert_eq!(summary.lives, 0);
    assert_eq!(summary.score, 0);
    assert_eq!(summary.levels_cleared, 0);
    assert!(clock.elapsed() >= Duration::from_secs(180));
}

#[test]
fn three_failures_end_in_defeat() {
    let (summary, screen, _) = play(WordBank::builtin().unwrap(), 0, None);

    assert_eq!(screen.results(), vec![LevelOutcome::Failed; 3]);
    assert_eq!(
        summary,
        GameSummary {
            score: 0,
            levels_cleared: 0,
            lives: 0,
            victory: false,
            aborted: false,
        }
    );
}

#[test]
fn interrupt_mid_level_keeps_progress() {
    let (summary, screen, _) = play(WordBank::builtin().unwrap(), 12, Some(KeyInput::Interrupt));

    assert_eq!(screen.results(), vec![LevelOutcome::Passed]);
    assert!(summary.aborted);
    assert!(!summary.victory);
    assert_eq!(summary.score, 100);
    assert_eq!(summary.levels_cleared, 1);
    assert_eq!(summary.lives, 3);
    assert!(screen.events().iter().any(|d| matches!(
        d,
        Drawn::Frame {
            level: 2,
            words_left: 8,
            ..
        }
    )));
}

#[test]
fn typing_every_word_wins_all_levels() {
    let (summary, screen, _) = play(WordBank::builtin().unwrap(), 250, None);

    assert!(summary.victory);
    assert!(!summary.aborted);
    assert_eq!(summary.score, 2500);
    assert_eq!(summary.levels_cleared, 25);
    assert_eq!(summary.lives, 3);
    assert_eq!(screen.results().len(), 25);
    assert!(screen
        .results()
        .iter()
        .all(|o| *o == LevelOutcome::Passed));
}

#[test]
fn frames_show_words_from_the_level_tier() {
    let bank = WordBank::builtin().unwrap();
    let (_, screen, _) = play(bank.clone(), 250, None);

    for d in screen.events() {
        if let Drawn::Frame { level, prompt, .. } = d {
            let tier = Tier::for_level(level);
            assert!(
                bank.words(tier).contains(&prompt),
                "{prompt} is not a {tier} word"
            );
        }
    }
}
