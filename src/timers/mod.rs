//! Deferred callbacks.
//!
//! The browser game leans on three host timers: a one-second repeating
//! tick, a one-shot unflip three seconds after each move, and a one-shot
//! win announcement one second after the board fills. Here they are tasks
//! on a virtual clock that the host pumps with [`Scheduler::pop_due`], so
//! every pending task has a handle and can be cancelled.

mod scheduler;

pub use scheduler::{Fired, Scheduler, TaskKind, TimerHandle};
