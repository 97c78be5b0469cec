//! Game state and transition events
//!
//! All mutable run state lives here, owned by one coordinator and mutated
//! only inside the per-frame update. Side effects (sounds, overlay changes)
//! are surfaced as events the shell drains each frame and fires without the
//! core awaiting them.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::grid::Camera;
use super::path::TrackPath;
use crate::consts::GAME_OVER_VOICE_DELAY;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Widget constructed, tunnel animating behind the menu
    NotStarted,
    /// Active run
    Running,
    /// Run ended; restart returns to Running
    GameOver,
}

/// Fire-and-forget side-effect hooks, drained by the shell each frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// First start from the menu
    Started,
    /// Restart after a game over
    Restarted,
    /// Ship left the track; impact cue at the GameOver transition
    Impact,
    /// Delayed voice cue, fired only if the run is still over
    GameOverVoice,
}

/// Complete game state for one run
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Direction draws for the path generator
    rng: Pcg32,
    pub phase: GamePhase,
    pub camera: Camera,
    pub path: TrackPath,
    /// Seconds remaining until the game-over voice cue fires
    voice_timer: Option<f32>,
    /// Transition events since the last drain
    events: Vec<GameEvent>,
}

impl GameState {
    /// Create a fresh game in `NotStarted`. The track is seeded immediately
    /// so the tunnel animates behind the menu.
    pub fn new(seed: u64) -> Self {
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::NotStarted,
            camera: Camera::default(),
            path: TrackPath::new(),
            voice_timer: None,
            events: Vec::new(),
        };
        state.reset_run();
        state
    }

    /// Start or restart command from the menu overlay
    pub fn start(&mut self) {
        let restarting = self.phase == GamePhase::GameOver;
        self.reset_run();
        self.phase = GamePhase::Running;
        self.events.push(if restarting {
            GameEvent::Restarted
        } else {
            GameEvent::Started
        });
        log::info!("run started (seed {})", self.seed);
    }

    /// Row counter doubles as the score
    pub fn score(&self) -> u32 {
        self.camera.y_loop
    }

    /// Events accumulated since the last drain, in emission order
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    fn reset_run(&mut self) {
        self.camera = Camera::default();
        self.path.reset();
        self.path.advance(0, &mut self.rng);
        self.voice_timer = None;
    }

    pub(crate) fn advance_path(&mut self, current_row: u32) {
        self.path.advance(current_row, &mut self.rng);
    }

    pub(crate) fn enter_game_over(&mut self) {
        self.phase = GamePhase::GameOver;
        self.events.push(GameEvent::Impact);
        self.voice_timer = Some(GAME_OVER_VOICE_DELAY);
        log::info!("game over at score {}", self.score());
    }

    /// Count down the one-shot voice cue. The phase is re-checked at fire
    /// time: a fast restart clears the timer, but the check also covers a
    /// shell that re-injects state between frames.
    pub(crate) fn tick_voice_timer(&mut self, dt: f32) {
        if let Some(remaining) = self.voice_timer {
            let remaining = remaining - dt;
            if remaining <= 0.0 {
                self.voice_timer = None;
                if self.phase == GamePhase::GameOver {
                    self.events.push(GameEvent::GameOverVoice);
                }
            } else {
                self.voice_timer = Some(remaining);
            }
        }
    }
}
