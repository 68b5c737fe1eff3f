//! # Staged Task Core Traits
//!
//! This module defines the building blocks for work that is spread across many
//! ticks instead of blocking a single one.
//!
//! ## Core Components
//! - `StagedTask`: A unit of work advanced one bounded step at a time
//! - `TaskProgress`: What a step reports back to the driver
//!
//! ## Task Lifecycle
//! 1. A `StagedTask` is created with everything it needs except the shared context
//! 2. The driver calls `step()` once per tick, lending the context mutably
//! 3. Each step reports `InProgress` until the final one reports `Complete`
//! 4. Stepping a completed task is a no-op that keeps reporting `Complete`
//! 5. A step that fails returns the error and does not advance the task
//!
//! Cancellation is simply not calling `step()` again.

use crate::engine_state::error::Result;

/// Progress reported by a single [`StagedTask::step`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TaskProgress {
    /// Work remains; `completed` of `total` units are done.
    InProgress {
        /// Units of work finished so far.
        completed: usize,
        /// Units of work in total.
        total: usize,
    },
    /// Every unit of work is done.
    Complete,
}

impl TaskProgress {
    /// Whether the task has finished.
    pub fn is_complete(&self) -> bool {
        matches!(self, TaskProgress::Complete)
    }
}

/// A trait representing work that advances in bounded steps.
///
/// # Implementation Guidelines
/// - A step should do a fixed, small amount of work (one chunk, one mesh)
/// - State the task needs between steps lives in the task itself
/// - State shared with the rest of the engine is passed in as `Context`
pub trait StagedTask {
    /// The engine state a step reads and writes.
    type Context;

    /// Performs one unit of work.
    ///
    /// # Arguments
    /// * `context` - Shared engine state lent to the task for this step
    ///
    /// # Returns
    /// The progress after this step.
    ///
    /// # Errors
    /// Fails when the step's work could not be applied to the context.
    fn step(&mut self, context: &mut Self::Context) -> Result<TaskProgress>;
}
