//! Engine module - the authoritative falling-piece simulation
//!
//! The engine owns the grid, the active piece, the randomizer and the
//! session counters, and exposes deterministic transitions for the host to
//! drive: timed stepping, player intents, and read-only render queries. It
//! never self-schedules and performs no I/O, so it can run under a terminal
//! loop, a test, or a benchmark unchanged.
//!
//! Lifecycle: `Ready -> Running -> GameOver`. A blocked spawn is the sole
//! loss condition; the only way back to Running is [`Engine::reset`].

use crate::core::config::EngineConfig;
use crate::core::rng::Randomizer;
use crate::core::scoring::{drop_interval_ms, level_for_lines, line_clear_score};
use crate::core::shape::Shape;
use crate::core::Board;
use crate::types::{Intent, PieceKind};

/// The piece currently under player control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivePiece {
    pub kind: PieceKind,
    /// Current rotated occupancy matrix
    pub shape: Shape,
    /// Grid position of the matrix's top-left corner
    pub x: i8,
    pub y: i8,
}

impl ActivePiece {
    /// A freshly spawned piece, horizontally centered on row 0.
    fn spawned(kind: PieceKind, cols: u8) -> Self {
        let shape = Shape::canonical(kind);
        let x = ((cols - shape.width()) / 2) as i8;
        Self { kind, shape, x, y: 0 }
    }

    /// Iterate the piece's filled cells in grid coordinates.
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.shape
            .cells()
            .map(move |(dx, dy)| (self.x + dx, self.y + dy))
    }
}

/// The board simulation engine.
#[derive(Debug, Clone)]
pub struct Engine {
    config: EngineConfig,
    board: Board,
    active: Option<ActivePiece>,
    randomizer: Randomizer,
    score: u32,
    lines: u32,
    level: u32,
    /// Accumulated time toward the next gravity drop
    drop_timer_ms: u32,
    started: bool,
    game_over: bool,
}

impl Engine {
    /// Create a new engine in the Ready state.
    pub fn new(config: EngineConfig) -> Self {
        let board = Board::new(config.cols, config.rows);
        let randomizer = Randomizer::new(config.policy, config.seed);
        Self {
            board,
            randomizer,
            config,
            active: None,
            score: 0,
            lines: 0,
            level: 1,
            drop_timer_ms: 0,
            started: false,
            game_over: false,
        }
    }

    /// Enter the Running state and spawn the first piece.
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        self.spawn();
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<&ActivePiece> {
        self.active.as_ref()
    }

    /// The kind that will spawn after the active piece locks.
    pub fn next_kind(&self) -> PieceKind {
        self.randomizer.peek()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Current gravity interval, derived from the level.
    pub fn drop_interval_ms(&self) -> u32 {
        drop_interval_ms(
            self.level,
            self.config.base_drop_ms,
            self.config.drop_step_ms,
            self.config.min_drop_ms,
        )
    }

    /// Draw the next kind and install it at the spawn position.
    ///
    /// If the spawn position collides with existing grid content the session
    /// ends instead: `game_over` is set and no piece is installed. This is
    /// the sole loss condition.
    pub fn spawn(&mut self) -> bool {
        let kind = self.randomizer.draw();
        let piece = ActivePiece::spawned(kind, self.config.cols);

        if !self.board.fits(&piece.shape, piece.x, piece.y) {
            self.active = None;
            self.game_over = true;
            return false;
        }

        self.active = Some(piece);
        self.drop_timer_ms = 0;
        true
    }

    /// Try to translate the active piece by (dx, dy). Commits and returns
    /// true when the candidate position is collision-free; otherwise state
    /// is unchanged.
    pub fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        let Some(active) = self.active.as_mut() else {
            return false;
        };
        let (nx, ny) = (active.x + dx, active.y + dy);
        if self.board.fits(&active.shape, nx, ny) {
            active.x = nx;
            active.y = ny;
            return true;
        }
        false
    }

    /// Try to rotate the active piece 90 degrees, with a bounded wall-kick
    /// search.
    ///
    /// Horizontal offsets are tried nearest-first, left before right at
    /// equal distance (0, -1, +1, -2, +2, ...), up to the rotated shape's
    /// width. If no offset fits, shape and position are left untouched.
    pub fn try_rotate(&mut self, clockwise: bool) -> bool {
        let Some(active) = self.active.as_mut() else {
            return false;
        };
        let rotated = if clockwise {
            active.shape.rotated_cw()
        } else {
            active.shape.rotated_ccw()
        };

        let limit = rotated.width() as i8;
        let kicks = std::iter::once(0).chain((1..=limit).flat_map(|d| [-d, d]));
        for dx in kicks {
            if self.board.fits(&rotated, active.x + dx, active.y) {
                active.shape = rotated;
                active.x += dx;
                return true;
            }
        }
        false
    }

    /// The row the active piece would land on after an immediate hard drop.
    /// Computed by probing the collision predicate; no state is mutated.
    pub fn ghost_y(&self) -> Option<i8> {
        let active = self.active.as_ref()?;
        let mut y = active.y;
        while self.board.fits(&active.shape, active.x, y + 1) {
            y += 1;
        }
        Some(y)
    }

    /// Merge the active piece into the grid, clear full rows, update the
    /// session counters, and spawn the next piece.
    ///
    /// Invoked when a down-move is blocked. Panics (via the board) if a
    /// merge target is already occupied; the collision guard makes that
    /// unreachable.
    pub fn lock_and_advance(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };
        self.board
            .lock_cells(&active.shape, active.x, active.y, active.kind);

        let cleared = self.board.clear_full_rows();
        if !cleared.is_empty() {
            self.lines += cleared.len() as u32;
            self.score = self
                .score
                .saturating_add(line_clear_score(cleared.len(), self.config.line_bonus));
            self.level = level_for_lines(self.lines, self.config.lines_per_level);
        }

        self.spawn();
    }

    /// Drop the active piece straight down until blocked, then lock it.
    /// One atomic operation from the caller's perspective; returns the
    /// number of rows travelled.
    pub fn hard_drop(&mut self) -> u32 {
        if self.active.is_none() {
            return 0;
        }
        let mut distance = 0;
        while self.try_move(0, 1) {
            distance += 1;
        }
        self.lock_and_advance();
        distance
    }

    /// Advance simulation time. Once the accumulated time exceeds the
    /// current drop interval, one down-move is attempted (or the piece is
    /// locked if blocked) and the accumulator resets. Returns true when a
    /// gravity event fired.
    pub fn step(&mut self, elapsed_ms: u32) -> bool {
        if !self.started || self.game_over || self.active.is_none() {
            return false;
        }

        self.drop_timer_ms = self.drop_timer_ms.saturating_add(elapsed_ms);
        if self.drop_timer_ms < self.drop_interval_ms() {
            return false;
        }

        self.drop_timer_ms = 0;
        if !self.try_move(0, 1) {
            self.lock_and_advance();
        }
        true
    }

    /// Dispatch a player intent. Always a no-op returning false before
    /// `start` and after game over.
    pub fn apply_intent(&mut self, intent: Intent) -> bool {
        if !self.started || self.game_over {
            return false;
        }
        match intent {
            Intent::MoveLeft => self.try_move(-1, 0),
            Intent::MoveRight => self.try_move(1, 0),
            Intent::SoftDrop => self.try_move(0, 1),
            Intent::HardDrop => {
                self.hard_drop();
                true
            }
            Intent::RotateCw => self.try_rotate(true),
            Intent::RotateCcw => self.try_rotate(false),
        }
    }

    /// Full session reset: fresh grid, continued RNG stream, zeroed
    /// counters. Re-enters Running immediately.
    pub fn reset(&mut self) {
        let config = EngineConfig {
            seed: self.randomizer.state(),
            ..self.config.clone()
        };
        *self = Self::new(config);
        self.start();
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::RandomizerPolicy;

    fn running_engine(seed: u32) -> Engine {
        let mut engine = Engine::new(EngineConfig::with_seed(seed));
        engine.start();
        engine
    }

    /// Replace the active piece, bypassing the randomizer. Test-only.
    fn force_active(engine: &mut Engine, kind: PieceKind) {
        engine.active = Some(ActivePiece::spawned(kind, engine.config.cols));
    }

    #[test]
    fn new_engine_is_ready_and_zeroed() {
        let engine = Engine::new(EngineConfig::default());
        assert!(!engine.started());
        assert!(!engine.game_over());
        assert!(engine.active().is_none());
        assert_eq!(engine.score(), 0);
        assert_eq!(engine.lines(), 0);
        assert_eq!(engine.level(), 1);
    }

    #[test]
    fn start_spawns_a_piece_once() {
        let mut engine = Engine::new(EngineConfig::default());
        engine.start();
        assert!(engine.started());
        let first = engine.active().copied();
        assert!(first.is_some());

        // start is idempotent
        engine.start();
        assert_eq!(engine.active().copied(), first);
    }

    #[test]
    fn spawn_centers_each_kind_horizontally() {
        // x = floor((cols - width) / 2) on a 10-wide grid
        for (kind, expected_x) in [
            (PieceKind::I, 3), // width 4
            (PieceKind::O, 4), // width 2
            (PieceKind::T, 3), // width 3
            (PieceKind::S, 3),
            (PieceKind::Z, 3),
            (PieceKind::J, 3),
            (PieceKind::L, 3),
        ] {
            let piece = ActivePiece::spawned(kind, 10);
            assert_eq!(piece.x, expected_x, "{kind:?}");
            assert_eq!(piece.y, 0, "{kind:?}");
        }
    }

    #[test]
    fn o_piece_spawns_without_collision_on_empty_grid() {
        let mut engine = running_engine(1);
        force_active(&mut engine, PieceKind::O);
        let active = engine.active().copied().expect("active piece");
        assert_eq!((active.x, active.y), (4, 0));
        assert!(engine.board.fits(&active.shape, active.x, active.y));
    }

    #[test]
    fn wide_boards_start_without_a_false_game_over() {
        let mut engine = Engine::new(EngineConfig {
            cols: 120,
            rows: 40,
            seed: 11,
            ..EngineConfig::default()
        });
        engine.start();

        assert!(!engine.game_over());
        let active = engine.active().expect("piece after start");
        assert_eq!(active.x, ((120 - active.shape.width()) / 2) as i8);
        assert!(engine.board.fits(&active.shape, active.x, active.y));

        // And the session actually plays.
        engine.hard_drop();
        assert!(!engine.game_over());
    }

    #[test]
    fn blocked_spawn_ends_the_session_without_installing_a_piece() {
        let mut engine = running_engine(1);
        // Occupy the whole spawn row so any kind collides immediately.
        for x in 0..10 {
            engine.board.set(x, 0, Some(PieceKind::I));
        }

        assert!(!engine.spawn());
        assert!(engine.game_over());
        assert!(engine.active().is_none());
    }

    #[test]
    fn move_left_at_wall_fails_and_position_is_unchanged() {
        let mut engine = running_engine(1);
        while engine.try_move(-1, 0) {}
        let active = engine.active().copied().expect("active piece");
        assert_eq!(active.x, 0);

        assert!(!engine.try_move(-1, 0));
        assert_eq!(engine.active().copied().expect("active piece").x, 0);
    }

    #[test]
    fn try_move_commits_only_valid_positions() {
        let mut engine = running_engine(1);
        let x0 = engine.active().expect("active").x;

        assert!(engine.try_move(1, 0));
        assert_eq!(engine.active().expect("active").x, x0 + 1);
        assert!(engine.try_move(-1, 0));
        assert_eq!(engine.active().expect("active").x, x0);

        // Up is always blocked at the spawn row.
        assert!(!engine.try_move(0, -1));
        assert_eq!(engine.active().expect("active").y, 0);
    }

    #[test]
    fn four_rotations_restore_the_active_shape() {
        for kind in PieceKind::ALL {
            let mut engine = running_engine(1);
            force_active(&mut engine, kind);
            // Center vertically so no kick interferes.
            for _ in 0..8 {
                engine.try_move(0, 1);
            }
            let before = engine.active().copied().expect("active piece");

            for _ in 0..4 {
                assert!(engine.try_rotate(true), "{kind:?}");
            }
            let after = engine.active().copied().expect("active piece");
            assert_eq!(after.shape, before.shape, "{kind:?}");
        }
    }

    #[test]
    fn failed_rotation_leaves_shape_and_position_untouched() {
        let mut engine = running_engine(1);
        force_active(&mut engine, PieceKind::I);

        // Box the I piece into a 4-wide, 1-tall slot at the floor: the
        // vertical rotation cannot fit anywhere on that row.
        for x in 0..10 {
            for y in 16..19 {
                if !(3..7).contains(&x) {
                    engine.board.set(x, y, Some(PieceKind::Z));
                }
            }
        }
        for _ in 0..19 {
            engine.try_move(0, 1);
        }
        let before = engine.active().copied().expect("active piece");
        assert_eq!(before.y, 19);

        assert!(!engine.try_rotate(true));
        assert_eq!(engine.active().copied().expect("active piece"), before);
    }

    #[test]
    fn rotation_kicks_off_the_left_wall() {
        let mut engine = running_engine(1);
        force_active(&mut engine, PieceKind::I);
        // Stand the I up, then push it against the left wall.
        assert!(engine.try_move(0, 1));
        assert!(engine.try_rotate(true));
        while engine.try_move(-1, 0) {}
        assert_eq!(engine.active().expect("active").x, 0);

        // Rotating back to horizontal at x=0 fits without a kick on an
        // empty board, so block columns 1..4 to force the search.
        let y = engine.active().expect("active").y;
        for x in 1..4 {
            for dy in 0..4 {
                engine.board.set(x, y + dy, Some(PieceKind::Z));
            }
        }
        let before = engine.active().copied().expect("active piece");
        let rotated = engine.try_rotate(true);
        let after = engine.active().copied().expect("active piece");
        if rotated {
            // Kick committed a collision-free placement.
            assert!(engine.board.fits(&after.shape, after.x, after.y));
            assert_ne!(after.shape, before.shape);
        } else {
            assert_eq!(after, before);
        }
    }

    #[test]
    fn rotation_never_commits_a_colliding_position() {
        // Exhaustive-ish probe: rotate every kind at every horizontal
        // position on a board with a jagged floor and verify the result
        // always fits.
        let mut engine = running_engine(7);
        for x in 0..10i8 {
            engine.board.set(x, 19, Some(PieceKind::I));
            if x % 3 == 0 {
                engine.board.set(x, 18, Some(PieceKind::I));
            }
        }

        for kind in PieceKind::ALL {
            for x in -2..12i8 {
                force_active(&mut engine, kind);
                let active = engine.active.as_mut().expect("active piece");
                active.x = x;
                active.y = 15;
                if !engine.board.fits(
                    &engine.active.expect("active").shape,
                    x,
                    15,
                ) {
                    continue;
                }
                engine.try_rotate(true);
                let after = engine.active.expect("active piece");
                assert!(
                    engine.board.fits(&after.shape, after.x, after.y),
                    "{kind:?} at x={x}"
                );
            }
        }
    }

    #[test]
    fn lock_merges_cells_and_spawns_next() {
        let mut engine = running_engine(1);
        while engine.try_move(0, 1) {}
        let active = engine.active().copied().expect("active piece");
        let cells: Vec<_> = active.cells().collect();

        engine.lock_and_advance();

        for (x, y) in cells {
            assert_eq!(engine.board.get(x, y), Some(Some(active.kind)));
        }
        assert!(engine.active().is_some());
        assert!(!engine.game_over());
    }

    #[test]
    fn o_lock_completes_and_clears_the_bottom_row() {
        let mut engine = running_engine(1);
        // Row 19 fully occupied except columns 3 and 4.
        for x in 0..10 {
            if x != 3 && x != 4 {
                engine.board.set(x, 19, Some(PieceKind::I));
            }
        }
        // Leave a marker in row 18 to observe the downward shift.
        engine.board.set(0, 18, Some(PieceKind::T));

        force_active(&mut engine, PieceKind::O);
        let active = engine.active.as_mut().expect("active piece");
        active.x = 3;

        engine.hard_drop();

        assert_eq!(engine.lines(), 1);
        assert_eq!(engine.score(), 100);
        // Row 19 now holds what used to be row 18 (marker plus the O's
        // upper half); the cleared content is gone and row 0 is empty.
        assert_eq!(engine.board.get(0, 19), Some(Some(PieceKind::T)));
        assert_eq!(engine.board.get(3, 19), Some(Some(PieceKind::O)));
        assert!(!engine.board.is_row_full(19));
        for x in 0..10 {
            assert_eq!(engine.board.get(x, 0), Some(None));
        }
    }

    #[test]
    fn multi_row_clear_scores_per_line() {
        let mut engine = running_engine(1);
        // Rows 18 and 19 full except columns 4-5; an O fills both at once.
        for x in 0..10 {
            if x != 4 && x != 5 {
                engine.board.set(x, 18, Some(PieceKind::J));
                engine.board.set(x, 19, Some(PieceKind::J));
            }
        }
        force_active(&mut engine, PieceKind::O);

        engine.hard_drop();

        assert_eq!(engine.lines(), 2);
        assert_eq!(engine.score(), 200);
        for y in 0..20 {
            assert!(!engine.board.is_row_full(y));
        }
    }

    #[test]
    fn level_rises_every_threshold_and_speeds_up_gravity() {
        let mut engine = running_engine(1);
        assert_eq!(engine.drop_interval_ms(), 1000);

        // Four lines already cleared this session; the next clear levels up.
        engine.lines = 4;
        for x in 0..10 {
            if x != 4 && x != 5 {
                engine.board.set(x, 19, Some(PieceKind::J));
            }
        }
        force_active(&mut engine, PieceKind::O);
        engine.hard_drop();

        assert_eq!(engine.lines(), 5);
        assert_eq!(engine.level(), 2);
        assert_eq!(engine.drop_interval_ms(), 900);
    }

    #[test]
    fn hard_drop_travels_to_the_floor_and_locks() {
        let mut engine = running_engine(1);
        force_active(&mut engine, PieceKind::O);

        let distance = engine.hard_drop();
        assert_eq!(distance, 18); // 20 rows minus the O's height

        assert_eq!(engine.board.get(4, 18), Some(Some(PieceKind::O)));
        assert_eq!(engine.board.get(4, 19), Some(Some(PieceKind::O)));
        assert!(engine.active().is_some());
    }

    #[test]
    fn ghost_matches_hard_drop_landing_row() {
        let mut engine = running_engine(1);
        force_active(&mut engine, PieceKind::O);
        engine.board.set(4, 15, Some(PieceKind::I));

        let ghost = engine.ghost_y().expect("ghost row");
        assert_eq!(ghost, 13); // lands on top of the obstacle

        // Probing must not have moved the piece.
        assert_eq!(engine.active().expect("active").y, 0);

        engine.hard_drop();
        assert_eq!(engine.board.get(4, 14), Some(Some(PieceKind::O)));
        assert_eq!(engine.board.get(4, 13), Some(Some(PieceKind::O)));
    }

    #[test]
    fn step_fires_only_after_the_interval_accumulates() {
        let mut engine = running_engine(1);
        let y0 = engine.active().expect("active").y;

        assert!(!engine.step(999));
        assert_eq!(engine.active().expect("active").y, y0);

        assert!(engine.step(1));
        assert_eq!(engine.active().expect("active").y, y0 + 1);

        // Accumulator reset: another sub-interval step does nothing.
        assert!(!engine.step(999));
        assert_eq!(engine.active().expect("active").y, y0 + 1);
    }

    #[test]
    fn step_locks_a_grounded_piece() {
        let mut engine = running_engine(1);
        force_active(&mut engine, PieceKind::O);
        while engine.try_move(0, 1) {}

        assert!(engine.step(1000));
        // Locked at the floor and a fresh piece spawned at the top.
        assert_eq!(engine.board.get(4, 19), Some(Some(PieceKind::O)));
        assert_eq!(engine.active().expect("active").y, 0);
    }

    #[test]
    fn step_is_inert_before_start_and_after_game_over() {
        let mut engine = Engine::new(EngineConfig::default());
        assert!(!engine.step(10_000));

        engine.start();
        engine.game_over = true;
        assert!(!engine.step(10_000));
    }

    #[test]
    fn intents_are_ignored_after_game_over() {
        let mut engine = running_engine(1);
        engine.game_over = true;
        let board_before = engine.board.clone();
        let active_before = engine.active;

        for intent in [
            Intent::MoveLeft,
            Intent::MoveRight,
            Intent::SoftDrop,
            Intent::HardDrop,
            Intent::RotateCw,
            Intent::RotateCcw,
        ] {
            assert!(!engine.apply_intent(intent), "{intent:?}");
        }
        assert_eq!(engine.board, board_before);
        assert_eq!(engine.active, active_before);
        assert_eq!(engine.score(), 0);
    }

    #[test]
    fn intent_dispatch_maps_to_primitives() {
        let mut engine = running_engine(1);
        let x0 = engine.active().expect("active").x;

        assert!(engine.apply_intent(Intent::MoveRight));
        assert_eq!(engine.active().expect("active").x, x0 + 1);
        assert!(engine.apply_intent(Intent::MoveLeft));
        assert_eq!(engine.active().expect("active").x, x0);
        assert!(engine.apply_intent(Intent::SoftDrop));
        assert_eq!(engine.active().expect("active").y, 1);
        assert!(engine.apply_intent(Intent::HardDrop));
        assert_eq!(engine.active().expect("active").y, 0);
    }

    #[test]
    fn score_is_monotonic_across_a_busy_session() {
        let mut engine = running_engine(9);
        let mut last_score = 0;
        for i in 0..300 {
            match i % 5 {
                0 => {
                    engine.apply_intent(Intent::MoveLeft);
                }
                1 => {
                    engine.apply_intent(Intent::RotateCw);
                }
                2 => {
                    engine.apply_intent(Intent::MoveRight);
                }
                _ => {
                    engine.apply_intent(Intent::HardDrop);
                }
            }
            assert!(engine.score() >= last_score);
            last_score = engine.score();
            if engine.game_over() {
                break;
            }
        }
    }

    #[test]
    fn stacking_to_the_top_eventually_ends_the_game() {
        let mut engine = running_engine(3);
        for _ in 0..500 {
            engine.apply_intent(Intent::HardDrop);
            if engine.game_over() {
                break;
            }
        }
        assert!(engine.game_over());
        assert!(engine.active().is_none());
    }

    #[test]
    fn reset_returns_to_running_with_zeroed_session() {
        let mut engine = running_engine(5);
        engine.score = 700;
        engine.lines = 9;
        engine.level = 2;
        engine.game_over = true;

        engine.reset();

        assert!(engine.started());
        assert!(!engine.game_over());
        assert_eq!(engine.score(), 0);
        assert_eq!(engine.lines(), 0);
        assert_eq!(engine.level(), 1);
        assert!(engine.active().is_some());
        for y in 0..20 {
            for x in 0..10 {
                if engine
                    .active()
                    .map(|a| a.cells().any(|(ax, ay)| ax == x && ay == y))
                    .unwrap_or(false)
                {
                    continue;
                }
                assert_eq!(engine.board.get(x, y), Some(None));
            }
        }
    }

    #[test]
    fn equal_seeds_produce_equal_piece_sequences() {
        let mut a = running_engine(12345);
        let mut b = running_engine(12345);
        for _ in 0..30 {
            assert_eq!(
                a.active().map(|p| p.kind),
                b.active().map(|p| p.kind)
            );
            a.apply_intent(Intent::HardDrop);
            b.apply_intent(Intent::HardDrop);
            if a.game_over() {
                assert!(b.game_over());
                break;
            }
        }
    }

    #[test]
    fn uniform_policy_runs_a_full_session() {
        let mut engine = Engine::new(EngineConfig {
            policy: RandomizerPolicy::Uniform,
            seed: 77,
            ..EngineConfig::default()
        });
        engine.start();
        for _ in 0..200 {
            engine.apply_intent(Intent::HardDrop);
            if engine.game_over() {
                break;
            }
        }
        assert!(engine.game_over());
    }

    #[test]
    fn next_kind_previews_the_following_spawn() {
        let mut engine = running_engine(42);
        for _ in 0..10 {
            let preview = engine.next_kind();
            engine.apply_intent(Intent::HardDrop);
            if engine.game_over() {
                break;
            }
            assert_eq!(engine.active().expect("active").kind, preview);
        }
    }
}
