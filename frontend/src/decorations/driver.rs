use std::collections::HashMap;

use rand::Rng;

use super::board::{OverlayBoard, RevealStep, SpawnOutcome, SpawnTicket};
use super::config::DecorationConfig;
use super::overlay::{OverlayId, OverlayKind};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecorationMsg {
    Spawn(OverlayKind),
    Expire(OverlayId),
    Reveal(OverlayId),
}

/// Timer backend of the driver. Dropping a returned handle cancels the timer.
pub trait Scheduler {
    type Repeating;
    type Once;

    fn every(&self, period_ms: u32, msg: DecorationMsg) -> Self::Repeating;
    fn after(&self, delay_ms: u32, msg: DecorationMsg) -> Self::Once;
    fn send_now(&self, msg: DecorationMsg);
}

/// Every pending timer of the layer, keyed by overlay where it belongs to one.
pub struct TimerSet<S: Scheduler> {
    spawn: Vec<S::Repeating>,
    expiry: HashMap<OverlayId, S::Once>,
    reveal: HashMap<OverlayId, S::Repeating>,
}

impl<S: Scheduler> Default for TimerSet<S> {
    fn default() -> Self {
        Self {
            spawn: Vec::new(),
            expiry: HashMap::new(),
            reveal: HashMap::new(),
        }
    }
}

impl<S: Scheduler> TimerSet<S> {
    pub fn start(&mut self, scheduler: &S, config: &DecorationConfig) {
        self.stop();
        for kind in [OverlayKind::Icon, OverlayKind::Snippet] {
            self.spawn.push(scheduler.every(config.lane(kind).spawn_every_ms, DecorationMsg::Spawn(kind)));
            scheduler.send_now(DecorationMsg::Spawn(kind));
        }
    }

    pub fn arm(&mut self, scheduler: &S, ticket: &SpawnTicket) {
        let id = ticket.id;
        self.expiry.insert(id, scheduler.after(ticket.lifetime_ms, DecorationMsg::Expire(id)));
        if let Some(every) = ticket.reveal_every_ms {
            self.reveal.insert(id, scheduler.every(every, DecorationMsg::Reveal(id)));
        }
    }

    pub fn stop_reveal(&mut self, id: OverlayId) {
        self.reveal.remove(&id);
    }

    /// Drops both timers of one overlay, whichever path removed it.
    pub fn cancel(&mut self, id: OverlayId) {
        self.expiry.remove(&id);
        self.reveal.remove(&id);
    }

    pub fn stop(&mut self) {
        self.spawn.clear();
        self.expiry.clear();
        self.reveal.clear();
    }

    pub fn is_running(&self) -> bool {
        !self.spawn.is_empty()
    }

    pub fn pending(&self) -> usize {
        self.spawn.len() + self.expiry.len() + self.reveal.len()
    }
}

/// Board plus the timers that drive it. The component owns one of these and
/// forwards every message; tests drive it with a virtual clock.
pub struct DecorationDriver<S: Scheduler, R> {
    board: OverlayBoard<R>,
    timers: TimerSet<S>,
}

impl<S: Scheduler, R: Rng> DecorationDriver<S, R> {
    pub fn new(board: OverlayBoard<R>) -> Self {
        Self { board, timers: TimerSet::default() }
    }

    pub fn board(&self) -> &OverlayBoard<R> {
        &self.board
    }

    pub fn timers(&self) -> &TimerSet<S> {
        &self.timers
    }

    pub fn start(&mut self, scheduler: &S) {
        self.timers.start(scheduler, self.board.config());
    }

    /// Applies one timer message. Returns whether the overlays changed.
    pub fn handle(&mut self, scheduler: &S, msg: DecorationMsg, now_ms: f64) -> bool {
        match msg {
            DecorationMsg::Spawn(kind) => {
                if !self.timers.is_running() {
                    return false;
                }
                match self.board.try_spawn(kind, now_ms) {
                    SpawnOutcome::Spawned(ticket) => {
                        if ticket.degraded {
                            log::trace!("decorations: {:?} {:?} placed without a free spot", kind, ticket.id);
                        }
                        self.timers.arm(scheduler, &ticket);
                        true
                    }
                    SpawnOutcome::AtCapacity | SpawnOutcome::EmptyPalette => false,
                }
            }
            DecorationMsg::Expire(id) => {
                self.timers.cancel(id);
                self.board.expire(id)
            }
            DecorationMsg::Reveal(id) => match self.board.reveal_tick(id) {
                RevealStep::Advanced { .. } => true,
                RevealStep::Complete | RevealStep::Gone => {
                    self.timers.stop_reveal(id);
                    false
                }
            },
        }
    }

    /// Drops every overlay and timer, then starts over with `config`.
    pub fn restart(&mut self, scheduler: &S, config: DecorationConfig) {
        self.stop();
        self.board.reconfigure(config);
        self.start(scheduler);
    }

    pub fn stop(&mut self) {
        self.timers.stop();
        self.board.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decorations::config::ViewportClass;
    use crate::decorations::palette::{Glyph, IconSwatch, Palette};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::cell::{Cell, RefCell};
    use std::collections::HashSet;
    use std::rc::Rc;

    const ONE_ICON: [IconSwatch; 1] = [IconSwatch { glyph: Glyph::Zap, color: "#fbbf24" }];
    const ONE_SNIPPET: [&str; 1] = ["ok();"];

    fn tiny_palette() -> Palette {
        Palette { icons: &ONE_ICON, snippets: &ONE_SNIPPET, snippet_colors: &["#3b82f6"] }
    }

    fn icon_config(max_concurrent: usize, spawn_every_ms: u32, lifetime_ms: u32) -> DecorationConfig {
        let mut config = DecorationConfig::for_viewport(ViewportClass::Wide);
        config.icons.max_concurrent = max_concurrent;
        config.icons.spawn_every_ms = spawn_every_ms;
        config.icons.linger_ms = lifetime_ms;
        config
    }

    struct Entry {
        due: u64,
        seq: u64,
        msg: DecorationMsg,
        period: Option<u32>,
        live: Rc<Cell<bool>>,
    }

    #[derive(Default)]
    struct Clock {
        now: u64,
        seq: u64,
        queue: Vec<Entry>,
    }

    /// Timers on a virtual clock, fired in (due, scheduling order) like the
    /// browser does for callbacks registered for the same instant.
    #[derive(Clone, Default)]
    struct VirtualScheduler(Rc<RefCell<Clock>>);

    /// Cancels its timer on drop, like a gloo handle.
    struct Handle(Rc<Cell<bool>>);

    impl Drop for Handle {
        fn drop(&mut self) {
            self.0.set(false);
        }
    }

    impl VirtualScheduler {
        fn push(&self, delay_ms: u32, msg: DecorationMsg, period: Option<u32>) -> Rc<Cell<bool>> {
            let mut clock = self.0.borrow_mut();
            let live = Rc::new(Cell::new(true));
            clock.seq += 1;
            let entry = Entry {
                due: clock.now + u64::from(delay_ms),
                seq: clock.seq,
                msg,
                period,
                live: live.clone(),
            };
            clock.queue.push(entry);
            live
        }

        fn now(&self) -> u64 {
            self.0.borrow().now
        }

        /// Next live timer due at or before `until`. Repeating timers are
        /// re-queued before the message is handed out.
        fn next_due(&self, until: u64) -> Option<DecorationMsg> {
            let mut clock = self.0.borrow_mut();
            clock.queue.retain(|entry| entry.live.get());
            let index = clock
                .queue
                .iter()
                .enumerate()
                .filter(|(_, entry)| entry.due <= until)
                .min_by_key(|(_, entry)| (entry.due, entry.seq))
                .map(|(index, _)| index)?;
            let entry = clock.queue.swap_remove(index);
            let msg = entry.msg;
            clock.now = entry.due;
            if let Some(period) = entry.period {
                clock.seq += 1;
                let seq = clock.seq;
                clock.queue.push(Entry { due: entry.due + u64::from(period), seq, ..entry });
            }
            Some(msg)
        }

        fn live_timers(&self) -> usize {
            self.0.borrow().queue.iter().filter(|entry| entry.live.get()).count()
        }
    }

    impl Scheduler for VirtualScheduler {
        type Repeating = Handle;
        type Once = Handle;

        fn every(&self, period_ms: u32, msg: DecorationMsg) -> Handle {
            Handle(self.push(period_ms, msg, Some(period_ms)))
        }

        fn after(&self, delay_ms: u32, msg: DecorationMsg) -> Handle {
            Handle(self.push(delay_ms, msg, None))
        }

        fn send_now(&self, msg: DecorationMsg) {
            self.push(0, msg, None);
        }
    }

    struct Harness {
        scheduler: VirtualScheduler,
        driver: DecorationDriver<VirtualScheduler, StdRng>,
        fired: Vec<(u64, DecorationMsg)>,
        history: Vec<HashSet<u64>>,
    }

    impl Harness {
        fn started(config: DecorationConfig, palette: Palette) -> Self {
            let scheduler = VirtualScheduler::default();
            let board = OverlayBoard::new(config, palette, StdRng::seed_from_u64(2024));
            let mut driver = DecorationDriver::new(board);
            driver.start(&scheduler);
            Self { scheduler, driver, fired: Vec::new(), history: Vec::new() }
        }

        fn run_until(&mut self, until: u64) {
            while let Some(msg) = self.scheduler.next_due(until) {
                let now = self.scheduler.now();
                self.fired.push((now, msg));
                self.driver.handle(&self.scheduler, msg, now as f64);
                self.history.push(self.live_ids());
            }
            self.scheduler.0.borrow_mut().now = until;
        }

        fn live_ids(&self) -> HashSet<u64> {
            self.driver.board().overlays().map(|o| o.id.0).collect()
        }

        fn live(&self, kind: OverlayKind) -> usize {
            self.driver.board().live_count(kind)
        }

        fn fired_since(&self, since: u64) -> Vec<DecorationMsg> {
            self.fired.iter().filter(|(at, _)| *at > since).map(|(_, msg)| *msg).collect()
        }
    }

    fn icons_only(max_concurrent: usize, spawn_every_ms: u32, lifetime_ms: u32) -> DecorationConfig {
        let mut config = icon_config(max_concurrent, spawn_every_ms, lifetime_ms);
        config.snippets.max_concurrent = 0;
        config
    }

    #[test]
    fn lifetime_window_spawns_exactly_two() {
        let mut harness = Harness::started(icons_only(1, 100, 1000), tiny_palette());

        harness.run_until(50);
        assert_eq!(harness.live(OverlayKind::Icon), 1);
        assert_eq!(harness.driver.board().overlays().next().map(|o| o.id), Some(OverlayId(0)));

        harness.run_until(1050);
        let live: Vec<OverlayId> = harness.driver.board().overlays().map(|o| o.id).collect();
        assert_eq!(live, vec![OverlayId(1)]);
        assert_eq!(harness.driver.board().ids_created(), 2);
    }

    #[test]
    fn capacity_holds_at_every_step() {
        let mut harness = Harness::started(icon_config(2, 100, 1000), tiny_palette());
        let snippet_cap = harness.driver.board().config().snippets.max_concurrent;
        let mut max_icons = 0;
        for step in 1..=400 {
            harness.run_until(step * 50);
            max_icons = max_icons.max(harness.live(OverlayKind::Icon));
            assert!(harness.live(OverlayKind::Snippet) <= snippet_cap);
        }
        assert_eq!(max_icons, 2);
        for live in &harness.history {
            assert!(live.len() <= 2 + snippet_cap);
        }
    }

    #[test]
    fn ids_are_never_reused() {
        let mut harness = Harness::started(DecorationConfig::for_viewport(ViewportClass::Wide), Palette::default());

        let mut seen: Vec<u64> = Vec::new();
        let mut last_live: HashSet<u64> = HashSet::new();
        for step in 1..=300 {
            harness.run_until(step * 50);
            let live = harness.live_ids();
            for id in live.difference(&last_live) {
                assert!(!seen.contains(id), "id {id} came back");
                seen.push(*id);
            }
            last_live = live;
        }
        assert!(seen.len() > 20);
        assert!(seen.iter().all(|id| *id < harness.driver.board().ids_created()));
    }

    #[test]
    fn every_overlay_leaves_on_time() {
        let mut harness = Harness::started(DecorationConfig::for_viewport(ViewportClass::Wide), Palette::default());
        for step in 1..=200 {
            let now = step * 37;
            harness.run_until(now);
            for overlay in harness.driver.board().overlays() {
                assert!(overlay.expires_at_ms() > now as f64, "{:?} outlived its lifetime", overlay.id);
            }
        }
    }

    #[test]
    fn stop_silences_every_timer() {
        let mut harness = Harness::started(DecorationConfig::for_viewport(ViewportClass::Wide), Palette::default());
        harness.run_until(1_000);
        assert!(harness.driver.board().overlays().count() > 0);
        assert!(harness.driver.timers().pending() > 0);

        harness.driver.stop();
        assert_eq!(harness.driver.timers().pending(), 0);
        assert_eq!(harness.scheduler.live_timers(), 0);

        harness.run_until(60_000);
        assert!(harness.fired_since(1_000).is_empty());
        assert_eq!(harness.driver.board().overlays().count(), 0);
    }

    #[test]
    fn expiry_cancels_a_running_reveal() {
        let mut harness = Harness::started(DecorationConfig::for_viewport(ViewportClass::Wide), Palette::default());
        harness.run_until(0);
        let snippet = harness
            .driver
            .board()
            .overlays()
            .find(|o| o.kind() == OverlayKind::Snippet)
            .map(|o| o.id);
        let Some(id) = snippet else {
            panic!("snippet did not spawn");
        };

        // Two ticks in, well before the text is fully typed.
        harness.run_until(60);
        assert_eq!(harness.driver.board().get(id).map(|o| o.shown().chars().count()), Some(2));

        let scheduler = harness.scheduler.clone();
        assert!(harness.driver.handle(&scheduler, DecorationMsg::Expire(id), 60.0));
        harness.run_until(10_000);

        let stray: Vec<DecorationMsg> = harness
            .fired_since(60)
            .into_iter()
            .filter(|msg| matches!(msg, DecorationMsg::Reveal(x) | DecorationMsg::Expire(x) if *x == id))
            .collect();
        assert!(stray.is_empty(), "{stray:?} fired after expiry");
        assert!(harness.driver.board().get(id).is_none());
    }

    #[test]
    fn reveal_ticker_stops_once_typed() {
        let mut harness = Harness::started(DecorationConfig::for_viewport(ViewportClass::Wide), tiny_palette());
        harness.run_until(0);
        let Some(id) = harness.driver.board().overlays().find(|o| o.kind() == OverlayKind::Snippet).map(|o| o.id)
        else {
            panic!("snippet did not spawn");
        };

        let lifetime = harness.driver.board().get(id).map(|o| o.lifetime_ms).unwrap_or_default();
        harness.run_until(u64::from(lifetime) + 1);
        let reveals = harness
            .fired
            .iter()
            .filter(|(_, msg)| *msg == DecorationMsg::Reveal(id))
            .count();
        // One tick per char, plus the tick that finds it complete.
        assert_eq!(reveals, ONE_SNIPPET[0].chars().count() + 1);
    }

    #[test]
    fn restart_drops_old_overlays_and_timers() {
        let mut harness = Harness::started(DecorationConfig::for_viewport(ViewportClass::Wide), Palette::default());
        harness.run_until(500);
        let before: HashSet<u64> = harness.live_ids();
        assert!(!before.is_empty());

        let mark = harness.history.len();
        let scheduler = harness.scheduler.clone();
        harness.driver.restart(&scheduler, DecorationConfig::for_viewport(ViewportClass::Narrow));
        assert_eq!(harness.driver.board().overlays().count(), 0);
        assert_eq!(harness.driver.board().config(), &DecorationConfig::for_viewport(ViewportClass::Narrow));

        harness.run_until(20_000);
        for msg in harness.fired_since(500) {
            if let DecorationMsg::Expire(id) | DecorationMsg::Reveal(id) = msg {
                assert!(!before.contains(&id.0), "timer of {id:?} outlived the restart");
            }
        }
        let narrow = DecorationConfig::for_viewport(ViewportClass::Narrow);
        for live in &harness.history[mark..] {
            assert!(live.len() <= narrow.icons.max_concurrent + narrow.snippets.max_concurrent);
        }
    }

    #[test]
    fn spawn_after_stop_is_ignored() {
        let scheduler = VirtualScheduler::default();
        let board = OverlayBoard::new(icon_config(3, 100, 1000), tiny_palette(), StdRng::seed_from_u64(1));
        let mut driver: DecorationDriver<VirtualScheduler, StdRng> = DecorationDriver::new(board);
        assert!(!driver.handle(&scheduler, DecorationMsg::Spawn(OverlayKind::Icon), 0.0));

        driver.start(&scheduler);
        assert!(driver.handle(&scheduler, DecorationMsg::Spawn(OverlayKind::Icon), 0.0));
        driver.stop();
        assert!(!driver.handle(&scheduler, DecorationMsg::Spawn(OverlayKind::Icon), 0.0));
        assert_eq!(driver.board().overlays().count(), 0);
        assert_eq!(driver.board().ids_created(), 1);
    }
}
