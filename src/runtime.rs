use std::cell::Cell;
use std::collections::VecDeque;
use std::io::{self, Read};
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// A single key as the level loop sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    Char(char),
    Enter,
    Backspace,
    /// Ctrl+C, or the input stream going away. Ends the whole run.
    Interrupt,
}

impl KeyInput {
    /// Map a raw character from a byte stream.
    pub fn from_char(c: char) -> Self {
        match c {
            '\r' | '\n' => KeyInput::Enter,
            '\x08' | '\x7f' => KeyInput::Backspace,
            '\x03' => KeyInput::Interrupt,
            c => KeyInput::Char(c),
        }
    }

    /// Map a crossterm key event. Keys the game has no use for yield `None`.
    pub fn from_key_event(key: KeyEvent) -> Option<Self> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') | KeyCode::Char('C') if ctrl => Some(KeyInput::Interrupt),
            KeyCode::Char('h') if ctrl => Some(KeyInput::Backspace),
            KeyCode::Char(_) if ctrl => None,
            KeyCode::Char(c) => Some(KeyInput::Char(c)),
            KeyCode::Enter => Some(KeyInput::Enter),
            KeyCode::Backspace => Some(KeyInput::Backspace),
            _ => None,
        }
    }
}

/// Source of player keystrokes.
pub trait InputSource {
    /// Return at most one pending key without blocking.
    fn poll(&mut self) -> io::Result<Option<KeyInput>>;
}

/// Production input for an interactive terminal in raw mode.
#[derive(Debug, Default)]
pub struct CrosstermInput;

impl CrosstermInput {
    pub fn new() -> Self {
        Self
    }
}

impl InputSource for CrosstermInput {
    fn poll(&mut self) -> io::Result<Option<KeyInput>> {
        if !event::poll(Duration::ZERO)? {
            return Ok(None);
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                Ok(KeyInput::from_key_event(key))
            }
            _ => Ok(None),
        }
    }
}

/// Input for when stdin is not a terminal.
///
/// A reader thread decodes the stream into characters and hands them over a
/// channel, so polling never blocks. Once the stream ends every poll reports
/// [`KeyInput::Interrupt`].
pub struct PipedInput {
    rx: Receiver<char>,
}

impl PipedInput {
    pub fn new<R: Read + Send + 'static>(reader: R) -> Self {
        let (tx, rx) = mpsc::channel();
        std::thread::spawn(move || forward_chars(reader, tx));
        Self { rx }
    }

    pub fn stdin() -> Self {
        Self::new(io::stdin())
    }
}

fn forward_chars<R: Read>(reader: R, tx: Sender<char>) {
    let mut pending: Vec<u8> = Vec::with_capacity(4);
    for byte in reader.bytes() {
        let Ok(byte) = byte else { break };
        pending.push(byte);

        for c in drain_decoded(&mut pending) {
            if tx.send(c).is_err() {
                return;
            }
        }
    }
    if !pending.is_empty() {
        let _ = tx.send(char::REPLACEMENT_CHARACTER);
    }
}

/// Decode as much of `pending` as possible. An invalid sequence becomes one
/// U+FFFD and only its own bytes are dropped; an incomplete tail stays put.
fn drain_decoded(pending: &mut Vec<u8>) -> Vec<char> {
    let mut decoded = Vec::new();
    loop {
        match std::str::from_utf8(pending) {
            Ok(s) => {
                decoded.extend(s.chars());
                pending.clear();
                return decoded;
            }
            Err(e) => {
                let valid = e.valid_up_to();
                decoded.extend(String::from_utf8_lossy(&pending[..valid]).chars());
                match e.error_len() {
                    Some(bad) => {
                        decoded.push(char::REPLACEMENT_CHARACTER);
                        pending.drain(..valid + bad);
                    }
                    None => {
                        pending.drain(..valid);
                        return decoded;
                    }
                }
            }
        }
    }
}

impl InputSource for PipedInput {
    fn poll(&mut self) -> io::Result<Option<KeyInput>> {
        match self.rx.try_recv() {
            Ok(c) => Ok(Some(KeyInput::from_char(c))),
            Err(TryRecvError::Empty) => Ok(None),
            Err(TryRecvError::Disconnected) => Ok(Some(KeyInput::Interrupt)),
        }
    }
}

/// Pre-recorded input for tests. `None` entries model ticks with no key.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    queue: VecDeque<Option<KeyInput>>,
}

impl ScriptedInput {
    pub fn new<I: IntoIterator<Item = KeyInput>>(keys: I) -> Self {
        Self {
            queue: keys.into_iter().map(Some).collect(),
        }
    }

    /// Keys for every character of `text`, with `\n` as Enter.
    pub fn from_text(text: &str) -> Self {
        Self::new(text.chars().map(KeyInput::from_char))
    }

    pub fn push(&mut self, key: KeyInput) {
        self.queue.push_back(Some(key));
    }

    pub fn type_text(&mut self, text: &str) {
        self.queue
            .extend(text.chars().map(|c| Some(KeyInput::from_char(c))));
    }

    pub fn idle(&mut self, ticks: usize) {
        self.queue.extend(std::iter::repeat(None).take(ticks));
    }

    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> io::Result<Option<KeyInput>> {
        Ok(self.queue.pop_front().flatten())
    }
}

/// Wall-clock reads and frame pacing.
pub trait Clock {
    fn now(&self) -> Instant;
    fn sleep(&self, duration: Duration);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn sleep(&self, duration: Duration) {
        if !duration.is_zero() {
            std::thread::sleep(duration);
        }
    }
}

/// Virtual clock: `sleep` advances time instantly.
#[derive(Debug)]
pub struct ManualClock {
    origin: Instant,
    offset: Cell<Duration>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            offset: Cell::new(Duration::ZERO),
        }
    }

    pub fn advance(&self, duration: Duration) {
        self.offset.set(self.offset.get() + duration);
    }

    pub fn elapsed(&self) -> Duration {
        self.offset.get()
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.origin + self.offset.get()
    }

    fn sleep(&self, duration: Duration) {
        self.advance(duration);
    }
}
