//! Terminal host for the pairs game.
//!
//! Reads one command per line from stdin:
//!
//! - `<n>`: click card `n`
//! - `start`: click the start control
//! - `wait <ms>`: let virtual time pass
//! - `show`: redraw the board
//! - `reset`: deal a new board
//! - `quit`
//!
//! Wall-clock time between commands is fed to the session as well, scaled
//! by `--time-scale`.

use std::io::{self, BufRead, Write};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use rust_pairs::{
    Board, BoardSize, Card, CardFace, CardIndex, ClickResult, ClickTarget, FlipOutcome,
    GameConfig, GameSession, Surface, SymbolId, WinSummary,
};

#[derive(Debug, Parser)]
#[command(name = "pairs", about = "Memory-matching game in the terminal")]
struct Args {
    /// Board side length; must be even and at least 2.
    #[arg(long, default_value = "4")]
    size: String,

    /// RNG seed for a reproducible deal.
    #[arg(long)]
    seed: Option<u64>,

    /// Multiplier applied to wall-clock time between commands.
    #[arg(long, default_value_t = 1.0, value_parser = parse_time_scale)]
    time_scale: f64,
}

/// Longest stretch of virtual time a single command may let pass (one day).
const MAX_STEP_MS: u64 = 24 * 60 * 60 * 1000;

const MAX_TIME_SCALE: f64 = 1000.0;

fn parse_time_scale(raw: &str) -> Result<f64, String> {
    let scale: f64 = raw.trim().parse().map_err(|_| format!("`{raw}` is not a number"))?;
    if !scale.is_finite() || !(0.0..=MAX_TIME_SCALE).contains(&scale) {
        return Err(format!("time scale must be between 0 and {MAX_TIME_SCALE}"));
    }
    Ok(scale)
}

/// Wall-clock milliseconds to feed the session, capped at [`MAX_STEP_MS`].
fn scaled_step(elapsed_secs: f64, scale: f64) -> u64 {
    let ms = elapsed_secs * 1000.0 * scale;
    if ms.is_nan() {
        0
    } else {
        ms.clamp(0.0, MAX_STEP_MS as f64) as u64
    }
}

/// Prints display updates to stdout.
#[derive(Default)]
struct TerminalSurface {
    columns: usize,
    cards: Vec<(SymbolId, CardFace)>,
    moves: String,
    timer: String,
    start_disabled: bool,
}

impl TerminalSurface {
    fn draw(&self) {
        let mut out = String::new();
        for (i, (symbol, face)) in self.cards.iter().enumerate() {
            let cell = match face {
                CardFace::FaceDown => format!("[{i:>2}]"),
                CardFace::Flipped => format!(" {} ", symbol.glyph()),
                CardFace::Matched => format!("({})", symbol.glyph()),
            };
            out.push_str(&cell);
            out.push(if (i + 1) % self.columns.max(1) == 0 { '\n' } else { ' ' });
        }
        print!("{out}");
        println!("{} | {}", self.moves, self.timer);
    }

    fn target_for(&self, index: usize) -> ClickTarget {
        match self.cards.get(index) {
            Some((_, face)) => ClickTarget::CardFace {
                card: CardIndex::new(index),
                container_flipped: *face != CardFace::FaceDown,
            },
            None => ClickTarget::Other,
        }
    }
}

impl Surface for TerminalSurface {
    fn replace_board(&mut self, board: &Board) {
        self.columns = board.size().get();
        self.cards = board.cards().iter().map(|c| (c.symbol, c.face)).collect();
    }

    fn set_card_face(&mut self, card: &Card) {
        if let Some(slot) = self.cards.get_mut(card.index.raw()) {
            slot.1 = card.face;
        }
    }

    fn set_moves(&mut self, text: &str) {
        self.moves = text.to_string();
    }

    fn set_timer(&mut self, text: &str) {
        self.timer = text.to_string();
    }

    fn disable_start(&mut self) {
        self.start_disabled = true;
    }

    fn mark_finished(&mut self) {
        println!("-- board finished --");
    }

    fn show_win(&mut self, summary: &WinSummary) {
        println!("{summary}");
    }

    fn clear_status(&mut self) {
        self.moves = rust_pairs::render::moves_text(0);
        self.timer = rust_pairs::render::timer_text(0);
        self.start_disabled = false;
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let size = BoardSize::from_attribute(Some(&args.size)).context("invalid --size")?;
    let mut config = GameConfig::new(size);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let mut surface = TerminalSurface::default();
    surface.clear_status();
    let mut session = GameSession::new(config, surface).context("failed to deal board")?;
    println!("seed {}", session.seed());
    session.surface().draw();

    let scale = args.time_scale;
    let mut last = Instant::now();
    let stdin = io::stdin();

    for line in stdin.lock().lines() {
        let line = line.context("failed to read stdin")?;

        let now = Instant::now();
        let wall_ms = scaled_step(now.duration_since(last).as_secs_f64(), scale);
        last = now;
        session.advance(wall_ms);

        let mut words = line.split_whitespace();
        match (words.next(), words.next()) {
            (None, _) => continue,
            (Some("quit"), _) => break,
            (Some("show"), _) => {}
            (Some("reset"), _) => {
                session.reset().context("failed to deal board")?;
                println!("seed {}", session.seed());
            }
            (Some("start"), _) => {
                let disabled = session.surface().start_disabled;
                if session.click(ClickTarget::StartControl { disabled }) == ClickResult::Started {
                    println!("clock started");
                }
            }
            (Some("wait"), Some(ms)) => match ms.parse::<u64>() {
                Ok(ms) => {
                    if ms > MAX_STEP_MS {
                        println!("waiting {MAX_STEP_MS} ms at most");
                    }
                    session.advance(ms.min(MAX_STEP_MS));
                }
                Err(_) => println!("wait takes milliseconds"),
            },
            (Some(word), _) => match word.parse::<usize>() {
                Ok(index) => {
                    let target = session.surface().target_for(index);
                    match session.click(target) {
                        ClickResult::Flip(FlipOutcome::Matched { .. }) => println!("match!"),
                        ClickResult::Flip(FlipOutcome::Won { .. }) => println!("last pair!"),
                        ClickResult::Flip(FlipOutcome::Mismatched { .. }) => println!("no match"),
                        ClickResult::Ignored => println!("ignored"),
                        _ => {}
                    }
                }
                Err(_) => println!("unknown command: {word}"),
            },
        }

        session.surface().draw();
        io::stdout().flush().context("failed to flush stdout")?;
    }

    Ok(())
}
