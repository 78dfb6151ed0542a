//! Held-key repeat for terminal environments.
//!
//! Terminals rarely deliver key-release events, so a held movement key is
//! reconstructed from its presses plus a release timeout. While a key counts
//! as held, its intent auto-repeats: nothing until the initial delay (DAS)
//! expires, then one repeat per interval (ARR). Horizontal movement and soft
//! drop repeat independently, each on its own timer.

use std::time::Instant;

use arrayvec::ArrayVec;
use crossterm::event::{KeyCode, KeyEvent};

use crate::input::map::intent_for_key;
use crate::types::{
    Intent, DEFAULT_ARR_MS, DEFAULT_DAS_MS, SOFT_DROP_ARR_MS, SOFT_DROP_DAS_MS,
};

// In terminals without key-release events, a short timeout prevents a single
// tap from turning into a sustained "held" state that keeps repeating.
const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u32 = 150;

/// Delay-then-repeat timing for one held axis.
#[derive(Debug, Clone)]
struct RepeatTimer {
    delay_ms: u32,
    interval_ms: u32,
    held_ms: u32,
    acc_ms: u32,
}

impl RepeatTimer {
    fn new(delay_ms: u32, interval_ms: u32) -> Self {
        Self {
            delay_ms,
            interval_ms: interval_ms.max(1),
            held_ms: 0,
            acc_ms: 0,
        }
    }

    fn restart(&mut self) {
        self.held_ms = 0;
        self.acc_ms = 0;
    }

    /// Advance while held; returns the number of repeats now due. Only time
    /// past the initial delay counts toward repeats.
    fn advance(&mut self, elapsed_ms: u32) -> u32 {
        let was_held_ms = self.held_ms;
        self.held_ms = self.held_ms.saturating_add(elapsed_ms);
        if self.held_ms < self.delay_ms {
            return 0;
        }
        self.acc_ms += if was_held_ms < self.delay_ms {
            self.held_ms - self.delay_ms
        } else {
            elapsed_ms
        };
        let due = self.acc_ms / self.interval_ms;
        self.acc_ms %= self.interval_ms;
        due
    }
}

/// Tracks held movement keys and emits their repeat intents.
#[derive(Debug, Clone)]
pub struct InputHandler {
    /// Currently held horizontal intent (MoveLeft or MoveRight).
    horizontal: Option<Intent>,
    horizontal_timer: RepeatTimer,
    soft_drop_held: bool,
    soft_drop_timer: RepeatTimer,
    last_key_time: Instant,
    key_release_timeout_ms: u32,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::with_config(DEFAULT_DAS_MS, DEFAULT_ARR_MS)
    }

    pub fn with_config(das_delay: u32, arr_rate: u32) -> Self {
        Self {
            horizontal: None,
            horizontal_timer: RepeatTimer::new(das_delay, arr_rate),
            soft_drop_held: false,
            soft_drop_timer: RepeatTimer::new(SOFT_DROP_DAS_MS, SOFT_DROP_ARR_MS),
            last_key_time: Instant::now(),
            key_release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    pub fn key_release_timeout_ms(&self) -> u32 {
        self.key_release_timeout_ms
    }

    /// The movement intent a key code maps to, if any. Derived from the
    /// same table the one-shot mapping uses, so every movement key the map
    /// advertises is tracked here too.
    fn movement_intent(code: KeyCode) -> Option<Intent> {
        match intent_for_key(KeyEvent::from(code)) {
            Some(intent @ (Intent::MoveLeft | Intent::MoveRight | Intent::SoftDrop)) => {
                Some(intent)
            }
            _ => None,
        }
    }

    /// Register a key press. Returns the intent to apply immediately, or
    /// None when the key was already held (its repeats come from
    /// [`update`](Self::update)).
    pub fn handle_key_press(&mut self, code: KeyCode) -> Option<Intent> {
        let intent = Self::movement_intent(code)?;
        self.last_key_time = Instant::now();
        match intent {
            Intent::SoftDrop => {
                if self.soft_drop_held {
                    return None;
                }
                self.soft_drop_held = true;
                self.soft_drop_timer.restart();
            }
            _ => {
                if self.horizontal == Some(intent) {
                    return None;
                }
                self.horizontal = Some(intent);
                self.horizontal_timer.restart();
            }
        }
        Some(intent)
    }

    pub fn handle_key_release(&mut self, code: KeyCode) {
        match Self::movement_intent(code) {
            Some(Intent::SoftDrop) => {
                self.soft_drop_held = false;
                self.soft_drop_timer.restart();
            }
            Some(intent) => {
                if self.horizontal == Some(intent) {
                    self.horizontal = None;
                    self.horizontal_timer.restart();
                }
            }
            None => {}
        }
    }

    /// Advance time and collect the repeats that are due.
    pub fn update(&mut self, elapsed_ms: u32) -> ArrayVec<Intent, 32> {
        let mut intents = ArrayVec::new();

        // Auto-release when the terminal never reports releases.
        let since_last_key = self.last_key_time.elapsed().as_millis() as u32;
        if since_last_key > self.key_release_timeout_ms {
            self.horizontal = None;
            self.horizontal_timer.restart();
            self.soft_drop_held = false;
            self.soft_drop_timer.restart();
        }

        if let Some(intent) = self.horizontal {
            for _ in 0..self.horizontal_timer.advance(elapsed_ms) {
                let _ = intents.try_push(intent);
            }
        }
        if self.soft_drop_held {
            for _ in 0..self.soft_drop_timer.advance(elapsed_ms) {
                let _ = intents.try_push(Intent::SoftDrop);
            }
        }

        intents
    }

    pub fn reset(&mut self) {
        self.horizontal = None;
        self.soft_drop_held = false;
        self.horizontal_timer.restart();
        self.soft_drop_timer.restart();
        self.last_key_time = Instant::now();
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
