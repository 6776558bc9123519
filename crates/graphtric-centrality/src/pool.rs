//! Bounded worker pool for the parallel engine.
//!
//! # Fan-out / fan-in
//!
//! [`WorkerPool::fan_in`] runs one unit of work per input item on the pool
//! and funnels every emitted value through a bounded channel to a single
//! consumer on the calling thread:
//!
//! ```text
//!   units ──par_iter──▶ [worker 0..k] ──emit──▶ sync_channel(cap) ──▶ consume()
//! ```
//!
//! The producers are one task spawned into an `in_place_scope` on the pool;
//! the calling thread stays outside the pool and drains while they work. A
//! full channel only stalls a producer until the consumer catches up. The
//! channel closes when the last sender clone is dropped, which is exactly
//! when every unit has finished, so the drain loop doubles as the barrier.
//!
//! No thread is created per call. Peak concurrency is the pool size plus the
//! draining caller, never the number of units.

use std::sync::mpsc::{self, SyncSender};

use anyhow::{Context, Result};
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};

/// Handle units use to send results to the consumer.
pub struct Emitter<'a, U>(&'a SyncSender<U>);

impl<U> Emitter<'_, U> {
    /// Send one value to the consumer, blocking while the channel is full.
    pub fn emit(&self, item: U) {
        // The receiver outlives every producer unless the consumer panicked,
        // in which case that panic is already unwinding the caller.
        let _ = self.0.send(item);
    }
}

/// Fixed-size rayon pool.
#[derive(Debug)]
pub struct WorkerPool {
    pool: ThreadPool,
}

impl WorkerPool {
    /// Build a pool with `threads` workers; `0` means one per logical CPU.
    ///
    /// # Errors
    ///
    /// Returns an error if the OS refuses to spawn the worker threads.
    pub fn new(threads: usize) -> Result<Self> {
        let pool = ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("graphtric-worker-{i}"))
            .build()
            .context("Failed to build centrality worker pool")?;

        Ok(Self { pool })
    }

    /// Number of worker threads.
    #[must_use]
    pub fn threads(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Run `op` inside the pool, so rayon parallel iterators in it use these
    /// workers. Blocks until `op` returns.
    pub fn install<R, F>(&self, op: F) -> R
    where
        R: Send,
        F: FnOnce() -> R + Send,
    {
        self.pool.install(op)
    }

    /// Run `produce(index, unit, emitter)` for every unit on the pool and
    /// feed every emitted value to `consume` on the calling thread.
    ///
    /// Returns once every unit has finished and the channel is drained.
    /// `capacity` bounds the channel; `0` is treated as 1.
    pub fn fan_in<T, U, P, C>(&self, units: &[T], capacity: usize, produce: P, mut consume: C)
    where
        T: Sync,
        U: Send,
        P: Fn(usize, &T, &Emitter<'_, U>) + Sync,
        C: FnMut(U),
    {
        let (tx, rx) = mpsc::sync_channel::<U>(capacity.max(1));
        let produce = &produce;

        self.pool.in_place_scope(|scope| {
            scope.spawn(move |_| {
                units
                    .par_iter()
                    .enumerate()
                    .for_each_with(tx, |tx, (i, unit)| produce(i, unit, &Emitter(tx)));
            });

            for item in rx {
                consume(item);
            }
        });
    }
}
