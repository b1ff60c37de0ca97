#![forbid(unsafe_code)]

//! Trigger binding: one element's configuration wired to one engine.
//!
//! The binder is the glue between page events and the engine: it owns the
//! per-element [`TriggerConfig`], performs attach-time initialization, and
//! translates [`PageEvent`]s into trigger/reset calls. Like the engine, it
//! runs on hand-cranked time: the load-trigger delay is a countdown
//! consumed by [`TriggerBinder::advance`], which also drives the engine's
//! clock.

use std::time::Duration;

use tracing::trace;

use glyphshuffle_core::{EffectKind, ShuffleEngine, TweenSink};

use crate::config::{TriggerConfig, TriggerKind};
use crate::scroll::{RegionId, ScrollObserver, ScrollRegion, ScrollSignal};

/// Effect every page trigger fires.
const BOUND_EFFECT: EffectKind = EffectKind::ScrambleResolve;

// ---------------------------------------------------------------------------
// Events
// ---------------------------------------------------------------------------

/// A page event routed to one bound element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageEvent {
    /// The page finished loading.
    Load,
    /// The element was clicked.
    Click,
    /// The element's scroll region reported a signal.
    Scroll(ScrollSignal),
}

// ---------------------------------------------------------------------------
// Binder
// ---------------------------------------------------------------------------

/// Wires one engine to one element's trigger configuration.
#[derive(Debug)]
pub struct TriggerBinder {
    config: TriggerConfig,
    /// Remaining wait before the load-triggered pass, once `Load` arrives.
    pending_load: Option<Duration>,
    /// Whether a once-only scroll region has already fired.
    scroll_fired: bool,
}

impl TriggerBinder {
    /// Bind `engine` to `config`.
    ///
    /// Attach-time initialization: the engine takes the configured duration,
    /// and load/scroll-triggered blocks are pre-hidden so their text stays
    /// invisible until the first pass fires.
    pub fn attach(
        config: TriggerConfig,
        engine: &mut ShuffleEngine,
        sink: &mut dyn TweenSink,
    ) -> Self {
        engine.set_duration(config.duration);
        if matches!(config.trigger, TriggerKind::Load | TriggerKind::Scroll) {
            engine.clear_cells(sink);
        }
        trace!(trigger = ?config.trigger, "element bound");
        Self {
            config,
            pending_load: None,
            scroll_fired: false,
        }
    }

    /// The bound configuration.
    #[must_use]
    pub fn config(&self) -> &TriggerConfig {
        &self.config
    }

    /// Register this element's trigger region, when its kind scrolls.
    pub fn register_scroll(&self, observer: &mut dyn ScrollObserver) -> Option<RegionId> {
        (self.config.trigger == TriggerKind::Scroll).then(|| {
            observer.register(ScrollRegion {
                once: self.config.scroll_once,
            })
        })
    }

    /// Route one page event. Events that don't match the configured trigger
    /// kind are ignored.
    pub fn handle(
        &mut self,
        event: PageEvent,
        engine: &mut ShuffleEngine,
        sink: &mut dyn TweenSink,
    ) {
        match (self.config.trigger, event) {
            (TriggerKind::Load, PageEvent::Load) => {
                self.pending_load = Some(self.config.delay);
            }
            (TriggerKind::Click, PageEvent::Click) => {
                engine.trigger(BOUND_EFFECT, sink);
            }
            (TriggerKind::Scroll, PageEvent::Scroll(ScrollSignal::Enter)) => {
                if self.config.scroll_once && self.scroll_fired {
                    return;
                }
                self.scroll_fired = true;
                engine.trigger(BOUND_EFFECT, sink);
            }
            (TriggerKind::Scroll, PageEvent::Scroll(ScrollSignal::LeaveBack)) => {
                if !self.config.scroll_once {
                    engine.reset_cells(sink);
                }
            }
            _ => {}
        }
    }

    /// Advance binder and engine time by `dt`.
    ///
    /// When the load countdown expires inside the window, the engine is
    /// advanced to the expiry instant first, so the pass starts exactly
    /// `delay` after the load event rather than at the window's edge.
    pub fn advance(&mut self, dt: Duration, engine: &mut ShuffleEngine, sink: &mut dyn TweenSink) {
        if let Some(remaining) = self.pending_load {
            if dt >= remaining {
                self.pending_load = None;
                engine.advance(remaining, sink);
                engine.trigger(BOUND_EFFECT, sink);
                engine.advance(dt - remaining, sink);
                return;
            }
            self.pending_load = Some(remaining - dt);
        }
        engine.advance(dt, sink);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::splitter::GraphemeSplitter;
    use glyphshuffle_core::{RecordingSink, TextSplitter, TweenRequest};

    const MS_100: Duration = Duration::from_millis(100);
    const MIN_1: Duration = Duration::from_secs(60);

    fn engine(text: &str) -> ShuffleEngine {
        ShuffleEngine::new(GraphemeSplitter::new().split(text))
    }

    fn config(trigger: TriggerKind) -> TriggerConfig {
        TriggerConfig {
            trigger,
            duration: MS_100,
            ..TriggerConfig::default()
        }
    }

    #[test]
    fn attach_applies_duration() {
        let mut eng = engine("HI");
        let mut sink = RecordingSink::new();
        let binder = TriggerBinder::attach(config(TriggerKind::Click), &mut eng, &mut sink);
        assert_eq!(binder.config().duration, MS_100);
    }

    #[test]
    fn attach_prehides_load_and_scroll_blocks() {
        for kind in [TriggerKind::Load, TriggerKind::Scroll] {
            let mut eng = engine("HI");
            let mut sink = RecordingSink::new();
            let _ = TriggerBinder::attach(config(kind), &mut eng, &mut sink);
            let sets = sink
                .requests()
                .iter()
                .filter(|req| matches!(req, TweenRequest::Set { .. }))
                .count();
            assert_eq!(sets, 2, "{kind:?} should pre-hide every cell");
        }
    }

    #[test]
    fn attach_leaves_click_blocks_visible() {
        let mut eng = engine("HI");
        let mut sink = RecordingSink::new();
        let _ = TriggerBinder::attach(config(TriggerKind::Click), &mut eng, &mut sink);
        assert!(sink.requests().is_empty());
    }

    #[test]
    fn click_triggers_immediately() {
        let mut eng = engine("HI");
        let mut sink = RecordingSink::new();
        let mut binder = TriggerBinder::attach(config(TriggerKind::Click), &mut eng, &mut sink);

        binder.handle(PageEvent::Click, &mut eng, &mut sink);
        assert!(eng.is_animating());
    }

    #[test]
    fn click_ignored_for_other_trigger_kinds() {
        let mut eng = engine("HI");
        let mut sink = RecordingSink::new();
        let mut binder = TriggerBinder::attach(config(TriggerKind::Load), &mut eng, &mut sink);

        binder.handle(PageEvent::Click, &mut eng, &mut sink);
        assert!(!eng.is_animating());
    }

    #[test]
    fn load_waits_out_the_configured_delay() {
        let mut eng = engine("HI");
        let mut sink = RecordingSink::new();
        let mut cfg = config(TriggerKind::Load);
        cfg.delay = Duration::from_millis(500);
        let mut binder = TriggerBinder::attach(cfg, &mut eng, &mut sink);

        binder.handle(PageEvent::Load, &mut eng, &mut sink);
        assert!(!eng.is_animating());

        binder.advance(Duration::from_millis(400), &mut eng, &mut sink);
        assert!(!eng.is_animating(), "delay not yet elapsed");

        binder.advance(Duration::from_millis(100), &mut eng, &mut sink);
        assert!(eng.is_animating(), "pass fires at the delay boundary");

        binder.advance(MIN_1, &mut eng, &mut sink);
        assert!(!eng.is_animating());
        assert_eq!(eng.text(), "HI");
    }

    #[test]
    fn load_never_fires_without_the_load_event() {
        let mut eng = engine("HI");
        let mut sink = RecordingSink::new();
        let mut binder = TriggerBinder::attach(config(TriggerKind::Load), &mut eng, &mut sink);

        binder.advance(MIN_1, &mut eng, &mut sink);
        assert!(!eng.is_animating());
    }

    #[test]
    fn scroll_once_fires_a_single_pass() {
        let mut eng = engine("HI");
        let mut sink = RecordingSink::new();
        let mut binder = TriggerBinder::attach(config(TriggerKind::Scroll), &mut eng, &mut sink);

        binder.handle(PageEvent::Scroll(ScrollSignal::Enter), &mut eng, &mut sink);
        assert!(eng.is_animating());
        binder.advance(MIN_1, &mut eng, &mut sink);

        binder.handle(PageEvent::Scroll(ScrollSignal::Enter), &mut eng, &mut sink);
        assert!(!eng.is_animating(), "once-region ignores later entries");
    }

    #[test]
    fn repeatable_scroll_replays_and_resets() {
        let mut eng = engine("HI");
        let mut sink = RecordingSink::new();
        let mut cfg = config(TriggerKind::Scroll);
        cfg.scroll_once = false;
        let mut binder = TriggerBinder::attach(cfg, &mut eng, &mut sink);

        binder.handle(PageEvent::Scroll(ScrollSignal::Enter), &mut eng, &mut sink);
        binder.advance(MIN_1, &mut eng, &mut sink);
        assert!(!eng.is_animating());

        binder.handle(
            PageEvent::Scroll(ScrollSignal::LeaveBack),
            &mut eng,
            &mut sink,
        );
        let faded = sink
            .requests()
            .iter()
            .any(|req| matches!(req, TweenRequest::FadeStaggered { .. }));
        assert!(faded, "leave-back fades the block out");

        binder.handle(PageEvent::Scroll(ScrollSignal::Enter), &mut eng, &mut sink);
        assert!(eng.is_animating(), "re-entering replays the pass");
    }

    #[test]
    fn once_region_ignores_leave_back() {
        let mut eng = engine("HI");
        let mut sink = RecordingSink::new();
        let mut binder = TriggerBinder::attach(config(TriggerKind::Scroll), &mut eng, &mut sink);

        sink.drain();
        binder.handle(
            PageEvent::Scroll(ScrollSignal::LeaveBack),
            &mut eng,
            &mut sink,
        );
        assert!(sink.requests().is_empty());
    }

    #[test]
    fn register_scroll_only_for_scroll_kind() {
        let mut eng = engine("HI");
        let mut sink = RecordingSink::new();
        let mut observer = crate::scroll::RecordingObserver::new();

        let binder = TriggerBinder::attach(config(TriggerKind::Click), &mut eng, &mut sink);
        assert_eq!(binder.register_scroll(&mut observer), None);

        let binder = TriggerBinder::attach(config(TriggerKind::Scroll), &mut eng, &mut sink);
        assert_eq!(binder.register_scroll(&mut observer), Some(0));
        assert!(observer.regions()[0].once);
    }
}
