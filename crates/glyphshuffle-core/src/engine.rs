#![forbid(unsafe_code)]

//! The shuffle engine: scramble/resolve state machine over one text block.
//!
//! One engine owns the line/cell hierarchy for one block, built once from
//! the splitter output. Triggering an effect schedules every cell's first
//! scramble step at an independent uniform random delay in `[0, duration]`;
//! the ripple across the text comes entirely from those decorrelated start
//! delays. Cells never animate in lockstep, and no cross-cell coordination
//! exists beyond a shared finished counter. The host drives the pass by
//! calling [`ShuffleEngine::advance`] with a time delta each frame.
//!
//! # Invariants
//!
//! 1. `total_chars` equals the sum of all lines' cell counts, fixed at
//!    construction.
//! 2. `is_animating` is true for the exact span from trigger acceptance to
//!    the last cell's resolution; no second pass can start while it is true.
//! 3. Each cell sees exactly [`MAX_CELL_ITERATIONS`] steps per pass, its
//!    iteration index increasing by one each step.
//! 4. After a completed pass, every cell's `state == original`.
//! 5. Within one cell, steps run strictly in order; across cells, completion
//!    order is unspecified.
//!
//! # Failure Modes
//!
//! - Unknown effect name: silent no-op ([`EffectKind::parse`] boundary).
//! - Trigger while animating: silently dropped, never queued.
//! - Empty block (`total_chars == 0`): triggers are rejected before the
//!   busy flag is set, so the flag can never be observed true. The explicit
//!   guard matters: a bare `finished == total_chars` completion check is
//!   vacuously true at zero and would otherwise clear a flag that nothing
//!   else will.

use std::time::Duration;

use tracing::{debug, trace};

use crate::cell::{Cell, ElemId, Line, NO_PREVIOUS_CELL};
use crate::effect::{EffectKind, StepTask, MAX_CELL_ITERATIONS};
use crate::glyphs;
use crate::rng::{RandomSource, XorShift64};
use crate::scheduler::Scheduler;
use crate::split::SplitText;
use crate::tween::{StaggerOrder, StaggerSpec, TweenSink};

/// Default total pass duration.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(750);

/// Fixed fade-out length used by [`ShuffleEngine::reset_cells`].
const RESET_FADE: Duration = Duration::from_millis(500);

/// Total stagger span of one line's reset fade-out.
const RESET_STAGGER_SPAN: Duration = Duration::from_secs(1);

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

/// Scramble/resolve animation engine for one text block.
pub struct ShuffleEngine {
    lines: Vec<Line>,
    total_chars: usize,
    duration: Duration,
    is_animating: bool,
    finished: usize,
    scheduler: Scheduler<StepTask>,
    rng: Box<dyn RandomSource>,
}

impl std::fmt::Debug for ShuffleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShuffleEngine")
            .field("lines", &self.lines.len())
            .field("total_chars", &self.total_chars)
            .field("is_animating", &self.is_animating)
            .field("finished", &self.finished)
            .field("pending_steps", &self.scheduler.pending())
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

impl ShuffleEngine {
    /// Build the line/cell hierarchy from `split` output, with the default
    /// random source.
    #[must_use]
    pub fn new(split: SplitText) -> Self {
        Self::with_rng(split, Box::new(XorShift64::default()))
    }

    /// Build with an explicit random source (tests script it; hosts can
    /// seed it).
    #[must_use]
    pub fn with_rng(split: SplitText, rng: Box<dyn RandomSource>) -> Self {
        let mut lines = Vec::with_capacity(split.lines.len());
        let mut total_chars = 0;

        for (line_position, split_line) in split.lines.into_iter().enumerate() {
            let mut line = Line::new(line_position);
            // The char counter resets per line; it is not global.
            let mut char_count = 0usize;
            for word in split_line.words {
                for leaf in word.chars {
                    let previous = if char_count == 0 {
                        NO_PREVIOUS_CELL
                    } else {
                        char_count as i32 - 1
                    };
                    line.push(Cell::new(leaf.elem, leaf.glyph, char_count, previous));
                    char_count += 1;
                }
            }
            total_chars += char_count;
            lines.push(line);
        }

        Self {
            lines,
            total_chars,
            duration: DEFAULT_DURATION,
            is_animating: false,
            finished: 0,
            scheduler: Scheduler::new(),
            rng,
        }
    }

    /// Set the total pass duration (builder).
    #[must_use]
    pub fn duration(mut self, duration: Duration) -> Self {
        self.set_duration(duration);
        self
    }

    /// Set the total pass duration.
    pub fn set_duration(&mut self, duration: Duration) {
        self.duration = duration;
    }
}

// ---------------------------------------------------------------------------
// Inspection
// ---------------------------------------------------------------------------

impl ShuffleEngine {
    /// The block's lines in reading order.
    #[inline]
    #[must_use]
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Total cell count across all lines; the completion target.
    #[inline]
    #[must_use]
    pub fn total_chars(&self) -> usize {
        self.total_chars
    }

    /// Whether a triggered pass is still in flight.
    #[inline]
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.is_animating
    }

    /// Cells resolved so far in the current pass.
    #[inline]
    #[must_use]
    pub fn finished_cells(&self) -> usize {
        self.finished
    }

    /// Scheduled steps not yet run.
    #[inline]
    #[must_use]
    pub fn pending_steps(&self) -> usize {
        self.scheduler.pending()
    }

    /// The currently displayed content of the whole block.
    #[must_use]
    pub fn text(&self) -> String {
        let mut out = String::new();
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            out.push_str(&line.text());
        }
        out
    }
}

// ---------------------------------------------------------------------------
// Triggering
// ---------------------------------------------------------------------------

impl ShuffleEngine {
    /// Run `kind` unless a pass is already in flight or the block is empty.
    /// Both rejections are silent by contract: rapid re-triggers are an
    /// expected input, not an error.
    pub fn trigger(&mut self, kind: EffectKind, sink: &mut dyn TweenSink) {
        if self.is_animating {
            trace!(effect = kind.name(), "trigger dropped: pass in flight");
            return;
        }
        if self.total_chars == 0 {
            trace!(effect = kind.name(), "trigger dropped: empty block");
            return;
        }

        self.is_animating = true;
        debug!(
            effect = kind.name(),
            total_chars = self.total_chars,
            duration_ms = self.duration.as_millis() as u64,
            "pass started"
        );
        match kind {
            EffectKind::ScrambleResolve => self.begin_scramble_resolve(sink),
        }
    }

    /// [`trigger`](Self::trigger) by wire name; unknown names are dropped.
    pub fn trigger_named(&mut self, name: &str, sink: &mut dyn TweenSink) {
        match EffectKind::parse(name) {
            Some(kind) => self.trigger(kind, sink),
            None => trace!(effect = name, "trigger dropped: unknown effect"),
        }
    }

    /// Hide every cell immediately, masking leftover visual state from any
    /// prior pass.
    pub fn clear_cells(&self, sink: &mut dyn TweenSink) {
        for line in &self.lines {
            for cell in line.cells() {
                sink.set_opacity(cell.elem(), 0.0);
            }
        }
    }

    /// Fade every line's cells out with a randomized per-line stagger.
    ///
    /// Visual only: displayed content, the finished counter, and the busy
    /// flag are untouched. The next pass's own clear step is what re-hides
    /// content before rescrambling.
    pub fn reset_cells(&mut self, sink: &mut dyn TweenSink) {
        trace!("reset: fading cells out");
        for line in &self.lines {
            if line.is_empty() {
                continue;
            }
            let elems: Vec<ElemId> = line.cells().iter().map(Cell::elem).collect();
            let stagger = StaggerSpec {
                span: RESET_STAGGER_SPAN,
                order: StaggerOrder::Random {
                    seed: self.rng.next_u64(),
                },
            };
            sink.fade_staggered(&elems, 0.0, RESET_FADE, stagger);
        }
    }
}

// ---------------------------------------------------------------------------
// Pass execution
// ---------------------------------------------------------------------------

impl ShuffleEngine {
    /// Advance the virtual clock by `dt`, running every step that falls due.
    ///
    /// A step may schedule its successor inside the same window; releases
    /// stay causally ordered because the scheduler moves its clock to each
    /// released deadline before the step runs.
    pub fn advance(&mut self, dt: Duration, sink: &mut dyn TweenSink) {
        let horizon = self.scheduler.now().saturating_add(dt);
        while let Some(task) = self.scheduler.pop_due(horizon) {
            self.run_step(task, sink);
        }
        self.scheduler.advance_to(horizon);
    }

    fn begin_scramble_resolve(&mut self, sink: &mut dyn TweenSink) {
        self.finished = 0;
        self.clear_cells(sink);
        for (line_index, line) in self.lines.iter().enumerate() {
            for cell_index in 0..line.len() {
                let delay = self.rng.next_delay(self.duration);
                self.scheduler.schedule_in(
                    delay,
                    StepTask {
                        line: line_index,
                        cell: cell_index,
                        iteration: 0,
                    },
                );
            }
        }
    }

    fn run_step(&mut self, task: StepTask, sink: &mut dyn TweenSink) {
        let Some(cell) = self
            .lines
            .get_mut(task.line)
            .and_then(|line| line.cell_mut(task.cell))
        else {
            return;
        };
        let elem = cell.elem();

        if task.iteration == MAX_CELL_ITERATIONS - 1 {
            cell.restore();
            self.finished += 1;
            if self.finished == self.total_chars {
                self.is_animating = false;
                debug!(total_chars = self.total_chars, "pass complete");
            }
        } else {
            cell.set(glyphs::scramble_glyph(self.rng.as_mut()));
        }
        sink.fade(elem, 1.0, self.duration);

        let next = task.iteration + 1;
        if next < MAX_CELL_ITERATIONS {
            self.scheduler.schedule_in(
                self.duration / 10,
                StepTask {
                    iteration: next,
                    ..task
                },
            );
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
