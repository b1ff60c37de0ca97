#![forbid(unsafe_code)]

//! Tween sink contract: one-way opacity requests to the animation collaborator.
//!
//! The engine's own correctness never depends on when (or whether) a
//! visual tween actually runs; it only tracks its own counters and state.
//! The sink is therefore a pure notification target: nothing is ever read
//! back, and implementations are free to drop requests on the floor (see
//! [`NullSink`]). Tests assert against the request stream with
//! [`RecordingSink`], the same poll-the-queue style the engine's milestone
//! events use elsewhere, rather than wiring up callbacks.

use std::time::Duration;

use crate::cell::ElemId;

// ---------------------------------------------------------------------------
// Stagger vocabulary
// ---------------------------------------------------------------------------

/// Order in which a staggered batch starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StaggerOrder {
    /// Batch order.
    Sequential,
    /// Randomized order derived from `seed`.
    Random {
        seed: u64,
    },
}

/// Distribution of start offsets across a batch of elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaggerSpec {
    /// Total span the start offsets occupy.
    pub span: Duration,
    /// Start order across the batch.
    pub order: StaggerOrder,
}

// ---------------------------------------------------------------------------
// Contract
// ---------------------------------------------------------------------------

/// Animation/tweening collaborator, consumed fire-and-forget.
pub trait TweenSink {
    /// Set `elem`'s opacity immediately.
    fn set_opacity(&mut self, elem: ElemId, opacity: f32);

    /// Animate `elem`'s opacity to `target` over `duration`.
    fn fade(&mut self, elem: ElemId, target: f32, duration: Duration);

    /// Animate a batch of elements to `target`, start offsets spread over
    /// the batch per `stagger`.
    fn fade_staggered(
        &mut self,
        elems: &[ElemId],
        target: f32,
        duration: Duration,
        stagger: StaggerSpec,
    );
}

// ---------------------------------------------------------------------------
// Provided sinks
// ---------------------------------------------------------------------------

/// Sink that discards every request.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl TweenSink for NullSink {
    fn set_opacity(&mut self, _elem: ElemId, _opacity: f32) {}

    fn fade(&mut self, _elem: ElemId, _target: f32, _duration: Duration) {}

    fn fade_staggered(
        &mut self,
        _elems: &[ElemId],
        _target: f32,
        _duration: Duration,
        _stagger: StaggerSpec,
    ) {
    }
}

/// One recorded tween request.
#[derive(Debug, Clone, PartialEq)]
pub enum TweenRequest {
    Set {
        elem: ElemId,
        opacity: f32,
    },
    Fade {
        elem: ElemId,
        target: f32,
        duration: Duration,
    },
    FadeStaggered {
        elems: Vec<ElemId>,
        target: f32,
        duration: Duration,
        stagger: StaggerSpec,
    },
}

/// Sink that records every request for later assertion.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    requests: Vec<TweenRequest>,
}

impl RecordingSink {
    /// Create an empty recording sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests recorded so far, in arrival order.
    #[must_use]
    pub fn requests(&self) -> &[TweenRequest] {
        &self.requests
    }

    /// Take all recorded requests, clearing the log.
    pub fn drain(&mut self) -> Vec<TweenRequest> {
        std::mem::take(&mut self.requests)
    }

    /// Number of `Fade` requests recorded for `elem`.
    #[must_use]
    pub fn fades_for(&self, elem: ElemId) -> usize {
        self.requests
            .iter()
            .filter(|req| matches!(req, TweenRequest::Fade { elem: e, .. } if *e == elem))
            .count()
    }
}

impl TweenSink for RecordingSink {
    fn set_opacity(&mut self, elem: ElemId, opacity: f32) {
        self.requests.push(TweenRequest::Set { elem, opacity });
    }

    fn fade(&mut self, elem: ElemId, target: f32, duration: Duration) {
        self.requests.push(TweenRequest::Fade {
            elem,
            target,
            duration,
        });
    }

    fn fade_staggered(
        &mut self,
        elems: &[ElemId],
        target: f32,
        duration: Duration,
        stagger: StaggerSpec,
    ) {
        self.requests.push(TweenRequest::FadeStaggered {
            elems: elems.to_vec(),
            target,
            duration,
            stagger,
        });
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const MS_500: Duration = Duration::from_millis(500);

    #[test]
    fn recording_sink_keeps_arrival_order() {
        let mut sink = RecordingSink::new();
        sink.set_opacity(ElemId(0), 0.0);
        sink.fade(ElemId(0), 1.0, MS_500);

        assert_eq!(
            sink.requests(),
            &[
                TweenRequest::Set {
                    elem: ElemId(0),
                    opacity: 0.0
                },
                TweenRequest::Fade {
                    elem: ElemId(0),
                    target: 1.0,
                    duration: MS_500
                },
            ]
        );
    }

    #[test]
    fn drain_clears_log() {
        let mut sink = RecordingSink::new();
        sink.set_opacity(ElemId(1), 0.0);
        assert_eq!(sink.drain().len(), 1);
        assert!(sink.requests().is_empty());
    }

    #[test]
    fn fades_for_counts_one_element() {
        let mut sink = RecordingSink::new();
        sink.fade(ElemId(1), 1.0, MS_500);
        sink.fade(ElemId(2), 1.0, MS_500);
        sink.fade(ElemId(1), 1.0, MS_500);
        assert_eq!(sink.fades_for(ElemId(1)), 2);
        assert_eq!(sink.fades_for(ElemId(3)), 0);
    }

    #[test]
    fn null_sink_accepts_everything() {
        let mut sink = NullSink;
        sink.set_opacity(ElemId(0), 0.0);
        sink.fade(ElemId(0), 1.0, MS_500);
        sink.fade_staggered(
            &[ElemId(0), ElemId(1)],
            0.0,
            MS_500,
            StaggerSpec {
                span: Duration::from_secs(1),
                order: StaggerOrder::Random { seed: 1 },
            },
        );
    }
}
