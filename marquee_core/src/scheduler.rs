// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The frame-loop driver owning every belt on a page.
//!
//! One [`Scheduler`] is created per page. Containers are handed to
//! [`register`](Scheduler::register), which builds the strip and returns a
//! [`BeltId`]; from then on the scheduler owns the surface and its
//! [`BeltState`]. Each backend tick calls [`frame`](Scheduler::frame), which
//! derives a clamped `dt` from the shared [`FrameClock`], steps every belt in
//! registration order, and hands the result to a [`Presenter`]. Input arrives
//! through [`dispatch`](Scheduler::dispatch) between frames and only flips
//! flags; position integration happens exclusively in `frame`.

use alloc::vec::Vec;

use crate::backend::{BeltFrame, Presenter};
use crate::belt::{BeltId, BeltState, FocusFrame, TrackSurface, focus, geometry};
use crate::clock::{FrameClock, FrameTick};
use crate::config::{BeltConfig, SchedulerConfig};
use crate::interaction::{self, Command, Routed};
use crate::time::Timebase;
use crate::trace::{
    BuildEvent, CommandEvent, FrameEvent, SkipEvent, SkipReason, SnapBeginEvent,
    SnapSettledEvent, Tracer,
};

/// One registered belt.
#[derive(Debug)]
struct Entry<S> {
    id: BeltId,
    surface: S,
    state: BeltState,
    config: BeltConfig,
    focus: FocusFrame,
}

/// Drives every belt on a page from a single frame callback.
///
/// There is no process-wide registry: the scheduler is an explicit object,
/// usually shared with event handlers through `Rc<RefCell<_>>` by the
/// backend.
#[derive(Debug)]
pub struct Scheduler<S> {
    config: SchedulerConfig,
    clock: FrameClock,
    belts: Vec<Entry<S>>,
}

impl<S: TrackSurface> Scheduler<S> {
    /// Creates a scheduler with no belts, reading ticks in `timebase`.
    #[must_use]
    pub fn new(config: SchedulerConfig, timebase: Timebase) -> Self {
        Self {
            config,
            clock: FrameClock::new(timebase, config.max_step),
            belts: Vec::new(),
        }
    }

    /// Returns the shared motion configuration.
    #[must_use]
    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Builds the strip on `surface` and takes ownership of it as a new belt.
    ///
    /// Returns `None` (and traces the reason) when motion is reduced or the
    /// surface has fewer than two original items. In both cases the surface
    /// is dropped without being modified.
    pub fn register(
        &mut self,
        mut surface: S,
        belt: BeltConfig,
        tracer: &mut Tracer<'_>,
    ) -> Option<BeltId> {
        let items = surface.original_count();
        let skip = if self.config.reduced_motion {
            Some(SkipReason::ReducedMotion)
        } else if items < 2 {
            Some(SkipReason::TooFewItems)
        } else {
            None
        };
        if let Some(reason) = skip {
            tracer.belt_skipped(&SkipEvent { reason, items });
            return None;
        }

        let id = BeltId(u32::try_from(self.belts.len()).ok()?);
        let geo = geometry::build(&mut surface, 0.0, &self.config)?;
        let speed = belt.speed_for(geo.loop_length);
        tracer.belt_built(&BuildEvent {
            belt: id,
            loop_length: geo.loop_length,
            speed,
            copies: geo.copies,
            extent: geo.extent,
            rebuilt: false,
        });

        self.belts.push(Entry {
            id,
            surface,
            state: BeltState::new(geo.loop_length, speed, belt.controls),
            config: belt,
            focus: FocusFrame::default(),
        });
        Some(id)
    }

    /// Advances every belt to `tick` and presents the result.
    ///
    /// Belts are stepped in registration order with the same `dt`. A belt
    /// whose loop length is not positive is skipped.
    pub fn frame<P>(&mut self, tick: &FrameTick, presenter: &mut P, tracer: &mut Tracer<'_>)
    where
        P: Presenter<S> + ?Sized,
    {
        let dt = self.clock.advance(tick.now);
        let mut belts_moved = 0_u32;

        for entry in &mut self.belts {
            if entry.state.loop_length() <= 0.0 {
                continue;
            }
            let outcome = entry.state.step(dt, &self.config);
            if outcome.moved {
                belts_moved += 1;
            }
            if outcome.settled {
                tracer.snap_settled(&SnapSettledEvent {
                    belt: entry.id,
                    frame_index: tick.frame_index,
                    position: entry.state.position(),
                });
            }

            let mut focused = false;
            if outcome.refocus && entry.state.has_controls() {
                if focus::compute(
                    &entry.surface,
                    entry.state.position(),
                    &self.config,
                    &mut entry.focus,
                ) {
                    entry.state.set_centered(entry.focus.centered);
                    focused = true;
                } else {
                    // No layout yet; try again on the next idle frame.
                    entry.state.request_focus();
                }
            }

            presenter.apply(
                &entry.surface,
                &BeltFrame {
                    id: entry.id,
                    offset: entry.state.offset(),
                    moved: outcome.moved,
                    paused: entry.state.is_paused(),
                    focus: focused.then_some(&entry.focus),
                },
            );
        }

        tracer.frame(&FrameEvent::new(tick, dt, belts_moved));
    }

    /// Routes `command` to the belt `id`.
    ///
    /// Returns `false` for an unknown belt or a command the belt ignores.
    pub fn dispatch(&mut self, id: BeltId, command: Command, tracer: &mut Tracer<'_>) -> bool {
        let Some(entry) = self.entry_mut(id) else {
            return false;
        };
        let from = entry.state.position();
        let routed = interaction::route(&mut entry.state, &entry.surface, command);
        tracer.command(&CommandEvent {
            belt: id,
            command,
            routed,
        });
        match routed {
            Routed::Snap { item, target } => {
                tracer.snap_begin(&SnapBeginEvent {
                    belt: id,
                    item,
                    from,
                    target,
                });
                true
            }
            Routed::Applied => true,
            Routed::Ignored => false,
        }
    }

    /// Rebuilds every belt's strip after the viewport changed size.
    ///
    /// Loop length and speed are updated in place; positions and snap
    /// targets are renormalized into the new loop.
    pub fn resize(&mut self, tracer: &mut Tracer<'_>) {
        for entry in &mut self.belts {
            let previous = entry.state.loop_length();
            let Some(geo) = geometry::build(&mut entry.surface, previous, &self.config) else {
                continue;
            };
            let speed = entry.config.speed_for(geo.loop_length);
            entry.state.remeasure(geo.loop_length, speed);
            tracer.belt_built(&BuildEvent {
                belt: entry.id,
                loop_length: geo.loop_length,
                speed,
                copies: geo.copies,
                extent: geo.extent,
                rebuilt: true,
            });
        }
    }

    /// Forgets the previous tick so the next frame steps by zero.
    pub fn reset_clock(&mut self) {
        self.clock.reset();
    }

    /// State of belt `id`.
    #[must_use]
    pub fn state(&self, id: BeltId) -> Option<&BeltState> {
        self.entry(id).map(|e| &e.state)
    }

    /// Surface of belt `id`.
    #[must_use]
    pub fn surface(&self, id: BeltId) -> Option<&S> {
        self.entry(id).map(|e| &e.surface)
    }

    /// Options belt `id` was registered with.
    #[must_use]
    pub fn belt_config(&self, id: BeltId) -> Option<&BeltConfig> {
        self.entry(id).map(|e| &e.config)
    }

    /// Focus results from the last time the calculator ran for belt `id`.
    #[must_use]
    pub fn focus(&self, id: BeltId) -> Option<&FocusFrame> {
        self.entry(id).map(|e| &e.focus)
    }

    /// Number of registered belts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.belts.len()
    }

    /// Whether no belt has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.belts.is_empty()
    }

    /// Ids of every registered belt, in registration order.
    pub fn ids(&self) -> impl Iterator<Item = BeltId> + '_ {
        self.belts.iter().map(|e| e.id)
    }

    fn entry(&self, id: BeltId) -> Option<&Entry<S>> {
        self.belts.get(id.0 as usize)
    }

    fn entry_mut(&mut self, id: BeltId) -> Option<&mut Entry<S>> {
        self.belts.get_mut(id.0 as usize)
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;
    use crate::belt::testing::StripDouble;
    use crate::belt::{BeltMode, normalize};
    use crate::interaction::Direction;
    use crate::time::HostTime;

    #[derive(Debug, Default)]
    struct RecordingPresenter {
        frames: Vec<(BeltId, f64, bool, Option<usize>)>,
    }

    impl Presenter<StripDouble> for RecordingPresenter {
        fn apply(&mut self, _surface: &StripDouble, frame: &BeltFrame<'_>) {
            self.frames.push((
                frame.id,
                frame.offset,
                frame.paused,
                frame.focus.and_then(|f| f.centered),
            ));
        }
    }

    fn scheduler() -> Scheduler<StripDouble> {
        Scheduler::new(SchedulerConfig::site(), Timebase::MICROS)
    }

    fn tick(ms: u64, frame_index: u64) -> FrameTick {
        FrameTick {
            now: HostTime(ms * 1000),
            frame_index,
        }
    }

    /// Runs frames 16 ms apart starting after `start_ms`; returns the time
    /// of the last frame.
    fn run(
        s: &mut Scheduler<StripDouble>,
        p: &mut RecordingPresenter,
        start_ms: u64,
        frames: u64,
    ) -> u64 {
        let mut t = start_ms;
        for i in 0..frames {
            t += 16;
            s.frame(&tick(t, i), p, &mut Tracer::none());
        }
        t
    }

    /// Five 200-wide cards in a 600-wide container; loop 1000.
    fn card_belt(s: &mut Scheduler<StripDouble>) -> BeltId {
        let strip = StripDouble::uniform(600.0, 0.0, 200.0, 5);
        s.register(strip, BeltConfig::cards(), &mut Tracer::none())
            .expect("five cards form a belt")
    }

    #[test]
    fn register_builds_and_returns_sequential_ids() {
        let mut s = scheduler();
        let tags = StripDouble::uniform(400.0, 10.0, 90.0, 3);
        let a = s.register(tags, BeltConfig::tags(), &mut Tracer::none());
        let b = card_belt(&mut s);
        assert_eq!(a.map(BeltId::index), Some(0));
        assert_eq!(b.index(), 1);
        assert_eq!(s.len(), 2);
        assert_eq!(s.ids().collect::<Vec<_>>(), [BeltId(0), BeltId(1)]);

        let state = s.state(BeltId(0)).unwrap();
        assert!((state.loop_length() - 300.0).abs() < 1e-9, "3 × (90 + 10)");
        assert!((state.speed() - 10.0).abs() < 1e-9, "loop / 30 s");
        assert!(!state.has_controls());
        assert!(s.state(b).unwrap().has_controls());
        assert!(s.surface(BeltId(0)).unwrap().extent() >= 400.0 * 2.2);
    }

    #[test]
    fn register_skips_small_or_reduced_motion() {
        let mut s = scheduler();
        let single = StripDouble::uniform(400.0, 10.0, 90.0, 1);
        assert_eq!(s.register(single, BeltConfig::tags(), &mut Tracer::none()), None);

        let mut still = Scheduler::new(
            SchedulerConfig::site().with_reduced_motion(true),
            Timebase::MICROS,
        );
        let strip = StripDouble::uniform(400.0, 10.0, 90.0, 6);
        assert_eq!(still.register(strip, BeltConfig::tags(), &mut Tracer::none()), None);
        assert!(s.is_empty() && still.is_empty(), "nothing registered");
    }

    #[test]
    fn rolling_belts_advance_by_clamped_dt() {
        let mut s = scheduler();
        let tags = StripDouble::uniform(400.0, 10.0, 90.0, 3);
        let id = s.register(tags, BeltConfig::tags(), &mut Tracer::none()).unwrap();
        let mut p = RecordingPresenter::default();

        s.frame(&tick(1_000, 0), &mut p, &mut Tracer::none());
        assert_eq!(s.state(id).unwrap().position(), 0.0, "first frame steps by zero");
        s.frame(&tick(1_040, 1), &mut p, &mut Tracer::none());
        s.frame(&tick(9_000, 2), &mut p, &mut Tracer::none());
        // 40 ms + 50 ms (clamped) at 10 px/s.
        let pos = s.state(id).unwrap().position();
        assert!((pos - 0.9).abs() < 1e-9, "got {pos}");
        let (_, offset, paused, focus) = *p.frames.last().unwrap();
        assert!((offset + 0.9).abs() < 1e-9, "offset is negated position");
        assert!(!paused);
        assert_eq!(focus, None, "tag belts carry no focus");
    }

    #[test]
    fn card_belt_reports_focus_while_rolling() {
        let mut s = scheduler();
        card_belt(&mut s);
        let mut p = RecordingPresenter::default();
        run(&mut s, &mut p, 0, 2);
        assert!(p.frames.iter().all(|f| f.3.is_some()), "focus every frame");
        assert_eq!(p.frames[0].3, Some(1), "item centered at position 0");
    }

    #[test]
    fn advance_snaps_to_neighbor_and_resumes() {
        let mut s = scheduler();
        let id = card_belt(&mut s);
        let mut p = RecordingPresenter::default();
        s.frame(&tick(0, 0), &mut p, &mut Tracer::none());
        assert_eq!(s.state(id).unwrap().centered(), Some(1));

        assert!(s.dispatch(id, Command::Advance(Direction::Next), &mut Tracer::none()));
        assert_eq!(s.state(id).unwrap().snap_target(), Some(200.0));

        let mut t = 0;
        let mut frames = 0;
        let mut last = s.state(id).unwrap().position();
        while s.state(id).unwrap().is_snapping() {
            t += 16;
            frames += 1;
            s.frame(&tick(t, frames), &mut p, &mut Tracer::none());
            let pos = s.state(id).unwrap().position();
            assert!(pos >= last, "monotone approach: {last} → {pos}");
            last = pos;
            assert!(frames < 200, "snap must settle in bounded frames");
        }
        let state = s.state(id).unwrap();
        assert_eq!(state.position(), 200.0, "lands exactly on target");
        assert!(!state.is_paused(), "not hovered, so rolling resumes");
        assert_eq!(p.frames.last().unwrap().3, Some(2), "neighbor now centered");
    }

    #[test]
    fn hover_holds_position_except_when_scrubbing() {
        let mut s = scheduler();
        let id = card_belt(&mut s);
        let mut p = RecordingPresenter::default();
        let t = run(&mut s, &mut p, 0, 3);

        s.dispatch(id, Command::HoverEnter, &mut Tracer::none());
        let t = run(&mut s, &mut p, t, 120);
        let state = s.state(id).unwrap();
        assert!(!state.is_snapping(), "hover snap settled");
        assert!(state.is_paused(), "still hovered, so still paused");
        let rest = state.position();

        let t = run(&mut s, &mut p, t, 10);
        assert_eq!(s.state(id).unwrap().position(), rest, "idle while hovered");
        assert!(p.frames.last().unwrap().2, "paused indicator set");

        s.dispatch(id, Command::HoldStart(Direction::Next), &mut Tracer::none());
        assert_eq!(s.state(id).unwrap().mode(), BeltMode::Scrubbing);
        run(&mut s, &mut p, t, 1);
        let speed = s.state(id).unwrap().speed();
        let expected = normalize(rest - 1.25 * speed * 0.016, 1000.0);
        let pos = s.state(id).unwrap().position();
        assert!((pos - expected).abs() < 1e-6, "scrub backwards: {pos} vs {expected}");
    }

    #[test]
    fn hover_on_tag_belt_freezes_it() {
        let mut s = scheduler();
        let tags = StripDouble::uniform(400.0, 10.0, 90.0, 3);
        let id = s.register(tags, BeltConfig::tags(), &mut Tracer::none()).unwrap();
        let mut p = RecordingPresenter::default();
        let t = run(&mut s, &mut p, 0, 5);
        s.dispatch(id, Command::HoverEnter, &mut Tracer::none());
        let before = s.state(id).unwrap().position();
        let t = run(&mut s, &mut p, t, 5);
        assert_eq!(s.state(id).unwrap().position(), before, "paused");
        // Holds only apply to belts with controls.
        assert!(!s.dispatch(id, Command::HoldStart(Direction::Previous), &mut Tracer::none()));
        s.dispatch(id, Command::HoverLeave, &mut Tracer::none());
        run(&mut s, &mut p, t, 2);
        assert!(s.state(id).unwrap().position() > before, "rolling resumed");
    }

    #[test]
    fn dispatch_to_unknown_belt_is_rejected() {
        let mut s = scheduler();
        assert!(!s.dispatch(BeltId(3), Command::HoverEnter, &mut Tracer::none()));
    }

    #[test]
    fn resize_rebuilds_and_keeps_position_in_loop() {
        let mut s = scheduler();
        let tags = StripDouble::uniform(400.0, 10.0, 90.0, 3);
        let id = s.register(tags, BeltConfig::tags(), &mut Tracer::none()).unwrap();
        let mut p = RecordingPresenter::default();
        run(&mut s, &mut p, 0, 20);
        let before = s.surface(id).unwrap().len();

        s.resize(&mut Tracer::none());
        let state = s.state(id).unwrap();
        assert!((state.loop_length() - 300.0).abs() < 1e-9, "same items, same loop");
        assert!(state.position() < state.loop_length());
        assert_eq!(s.surface(id).unwrap().len(), before, "no accumulation");
    }
}
