//! Game session: the controller that owns one play-through.
//!
//! `GameSession` holds the board, the state, the scheduler and the
//! rendering surface. Hosts feed it clicks and the passage of time:
//!
//! ```
//! use rust_pairs::core::{BoardSize, GameConfig};
//! use rust_pairs::input::ClickTarget;
//! use rust_pairs::render::HtmlSurface;
//! use rust_pairs::session::GameSession;
//!
//! let config = GameConfig::new(BoardSize::new(2).unwrap()).with_seed(1);
//! let mut session = GameSession::new(config, HtmlSurface::new()).unwrap();
//!
//! session.click(ClickTarget::card(0));
//! assert!(session.state().started);
//!
//! session.advance(1000);
//! assert_eq!(session.state().total_time, 1);
//! assert_eq!(session.surface().timer(), "time: 1 sec");
//! ```
//!
//! ## Deferred work
//!
//! Every move schedules an unflip `unflip_delay_ms` later, match or not;
//! until it fires `flipped_count` stays at 2 and further card clicks are
//! dropped. Filling the board schedules the win announcement
//! `win_delay_ms` later, which also stops the clock. All of these hold
//! handles in the scheduler, so [`GameSession::reset`] can cancel them.

use tracing::{debug, info, trace};

use crate::board::{Board, BoardGenerator};
use crate::cards::CardIndex;
use crate::core::{GameConfig, GameError, GameRng, GameState};
use crate::input::{ClickResult, ClickTarget, InputHandler};
use crate::render::{moves_text, timer_text, Surface};
use crate::rules::{self, FlipOutcome, WinSummary};
use crate::timers::{Fired, Scheduler, TaskKind, TimerHandle};

/// One play session bound to a rendering surface.
pub struct GameSession<S: Surface> {
    config: GameConfig,
    rng: GameRng,
    board: Board,
    state: GameState,
    scheduler: Scheduler,
    surface: S,
    /// Outstanding unflip after the latest move.
    pending_unflip: Option<TimerHandle>,
    /// Outstanding win announcement.
    pending_win: Option<TimerHandle>,
}

impl<S: Surface> GameSession<S> {
    /// Generate a board and render it onto `surface`.
    pub fn new(config: GameConfig, mut surface: S) -> Result<Self, GameError> {
        let mut rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let board = BoardGenerator::generate(config.size, &mut rng)?;
        surface.replace_board(&board);

        Ok(Self {
            config,
            rng,
            board,
            state: GameState::new(),
            scheduler: Scheduler::new(),
            surface,
            pending_unflip: None,
            pending_win: None,
        })
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    #[must_use]
    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    /// Seed of the RNG that dealt the current board.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Virtual time since the session was created.
    #[must_use]
    pub fn elapsed_ms(&self) -> u64 {
        self.scheduler.now_ms()
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.state.finished
    }

    /// Is a win announcement scheduled but not yet shown?
    #[must_use]
    pub fn win_pending(&self) -> bool {
        self.pending_win.is_some()
    }

    /// Final score, once the win has been declared.
    #[must_use]
    pub fn summary(&self) -> Option<WinSummary> {
        self.state.finished.then_some(WinSummary {
            moves: self.state.total_moves,
            seconds: self.state.total_time,
        })
    }

    // === Input ===

    /// Route a classified click.
    pub fn click(&mut self, target: ClickTarget) -> ClickResult {
        InputHandler::dispatch(self, target)
    }

    /// Start the clock. Returns false if the game had already started.
    pub fn start_game(&mut self) -> bool {
        if self.state.started {
            trace!("start ignored: already started");
            return false;
        }

        self.state.started = true;
        self.surface.disable_start();
        let tick = self
            .scheduler
            .set_interval(TaskKind::Tick, self.config.timings.tick_ms);
        self.state.timer = Some(tick);
        debug!(%tick, "game started");
        true
    }

    /// Flip a card, starting the game on the first flip.
    pub fn flip_card(&mut self, card: CardIndex) -> FlipOutcome {
        if let Some(reason) = rules::rejection(&self.board, &self.state, card) {
            trace!(%card, ?reason, "flip ignored");
            return FlipOutcome::Ignored(reason);
        }

        self.start_game();
        let outcome = rules::apply_flip(&mut self.board, &mut self.state, card);

        match outcome {
            FlipOutcome::Ignored(_) => return outcome,
            FlipOutcome::FirstFlipped(index) => self.render_card(index),
            FlipOutcome::Matched { first, second }
            | FlipOutcome::Mismatched { first, second }
            | FlipOutcome::Won { first, second } => {
                self.render_card(first);
                self.render_card(second);
                let handle = self
                    .scheduler
                    .set_timeout(TaskKind::Unflip, self.config.timings.unflip_delay_ms);
                self.pending_unflip = Some(handle);
            }
        }

        if outcome.is_win() && self.pending_win.is_none() {
            let handle = self
                .scheduler
                .set_timeout(TaskKind::DeclareWin, self.config.timings.win_delay_ms);
            self.pending_win = Some(handle);
            debug!(moves = self.state.total_moves, "board cleared");
        }

        outcome
    }

    // === Time ===

    /// Let `ms` of host time pass, firing every task that falls due.
    ///
    /// Returns the tasks that fired, in order.
    pub fn advance(&mut self, ms: u64) -> Vec<Fired> {
        let deadline = self.scheduler.now_ms().saturating_add(ms);
        let mut fired = Vec::new();
        while let Some(task) = self.scheduler.pop_due(deadline) {
            self.fire(task);
            fired.push(task);
        }
        self.scheduler.settle(deadline);
        fired
    }

    fn fire(&mut self, task: Fired) {
        match task.kind {
            TaskKind::Tick => {
                self.state.total_time = self.state.total_time.saturating_add(1);
                self.surface.set_moves(&moves_text(self.state.total_moves));
                self.surface.set_timer(&timer_text(self.state.total_time));
            }
            TaskKind::Unflip => {
                for index in self.board.unflip_unmatched() {
                    self.render_card(index);
                }
                self.state.clear_flipped();
                if self.pending_unflip == Some(task.handle) {
                    self.pending_unflip = None;
                }
                trace!(at_ms = task.at_ms, "unflipped");
            }
            TaskKind::DeclareWin => self.declare_win(),
        }
    }

    fn declare_win(&mut self) {
        self.pending_win = None;
        self.state.finished = true;
        self.surface.mark_finished();

        let summary = WinSummary {
            moves: self.state.total_moves,
            seconds: self.state.total_time,
        };
        self.surface.show_win(&summary);

        if let Some(tick) = self.state.timer.take() {
            self.scheduler.cancel(tick);
        }
        info!(moves = summary.moves, seconds = summary.seconds, "game won");
    }

    // === Lifecycle ===

    /// Cancel all pending work and deal a new board.
    pub fn reset(&mut self) -> Result<(), GameError> {
        self.scheduler.cancel_all();
        self.pending_unflip = None;
        self.pending_win = None;

        self.board = BoardGenerator::generate(self.config.size, &mut self.rng)?;
        self.state = GameState::new();

        self.surface.clear_status();
        self.surface.replace_board(&self.board);
        debug!("session reset");
        Ok(())
    }

    fn render_card(&mut self, index: CardIndex) {
        if let Some(card) = self.board.card(index) {
            self.surface.set_card_face(card);
        }
    }
}
