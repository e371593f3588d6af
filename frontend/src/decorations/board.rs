use rand::Rng;

use super::config::{DecorationConfig, LaneConfig};
use super::overlay::{Overlay, OverlayContent, OverlayId, OverlayKind, RevealState};
use super::palette::Palette;
use super::placement::{sample_position, Occupant};

const FALLBACK_SNIPPET_COLOR: &str = "#111111";

/// What the caller must schedule after a successful spawn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpawnTicket {
    pub id: OverlayId,
    pub kind: OverlayKind,
    /// Single-shot expiry delay, measured from the spawn.
    pub lifetime_ms: u32,
    /// Repeating reveal tick for snippets.
    pub reveal_every_ms: Option<u32>,
    pub degraded: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SpawnOutcome {
    Spawned(SpawnTicket),
    AtCapacity,
    EmptyPalette,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealStep {
    Advanced { shown: usize, total: usize },
    Complete,
    /// The overlay expired first; the ticker should just stop.
    Gone,
}

/// Live overlays of the hero background, one list per kind.
///
/// The board is plain state. It never arms timers itself: `try_spawn` hands
/// back a [`SpawnTicket`] describing the expiry and reveal timers the driver
/// has to arm, and the driver calls back into `expire` / `reveal_tick`.
pub struct OverlayBoard<R> {
    config: DecorationConfig,
    palette: Palette,
    rng: R,
    next_id: u64,
    icons: Vec<Overlay>,
    snippets: Vec<Overlay>,
}

impl<R: Rng> OverlayBoard<R> {
    pub fn new(config: DecorationConfig, palette: Palette, rng: R) -> Self {
        Self {
            config,
            palette,
            rng,
            next_id: 0,
            icons: Vec::new(),
            snippets: Vec::new(),
        }
    }

    pub fn config(&self) -> &DecorationConfig {
        &self.config
    }

    /// Swaps the tuning. Live overlays keep the lifetime they were born with.
    pub fn reconfigure(&mut self, config: DecorationConfig) {
        self.config = config;
    }

    fn lane_mut(&mut self, kind: OverlayKind) -> &mut Vec<Overlay> {
        match kind {
            OverlayKind::Icon => &mut self.icons,
            OverlayKind::Snippet => &mut self.snippets,
        }
    }

    fn lane(&self, kind: OverlayKind) -> &[Overlay] {
        match kind {
            OverlayKind::Icon => &self.icons,
            OverlayKind::Snippet => &self.snippets,
        }
    }

    pub fn live_count(&self, kind: OverlayKind) -> usize {
        self.lane(kind).len()
    }

    /// Number of ids handed out so far. Ids run `0..ids_created()`.
    pub fn ids_created(&self) -> u64 {
        self.next_id
    }

    /// Icons first, then snippets, each in spawn order.
    pub fn overlays(&self) -> impl Iterator<Item = &Overlay> {
        self.icons.iter().chain(self.snippets.iter())
    }

    pub fn get(&self, id: OverlayId) -> Option<&Overlay> {
        self.overlays().find(|o| o.id == id)
    }

    fn draw_range(&mut self, (min, max): (f64, f64)) -> f64 {
        min + self.rng.gen::<f64>() * (max - min)
    }

    pub fn try_spawn(&mut self, kind: OverlayKind, now_ms: f64) -> SpawnOutcome {
        let lane: LaneConfig = *self.config.lane(kind);
        let palette_len = match kind {
            OverlayKind::Icon => self.palette.icons.len(),
            OverlayKind::Snippet => self.palette.snippets.len(),
        };
        if palette_len == 0 {
            return SpawnOutcome::EmptyPalette;
        }
        if self.live_count(kind) >= lane.max_concurrent {
            return SpawnOutcome::AtCapacity;
        }

        let occupants: Vec<Occupant> = self.lane(kind).iter().map(Overlay::occupant).collect();
        let placement = sample_position(&occupants, palette_len, &lane.placement, &mut self.rng);
        let palette_index = placement.content;

        let (content, lifetime_ms) = match kind {
            OverlayKind::Icon => {
                let swatch = self.palette.icons[palette_index];
                let size_px = self.draw_range(lane.size_px);
                (
                    OverlayContent::Icon { glyph: swatch.glyph, color: swatch.color, size_px },
                    lane.linger_ms,
                )
            }
            OverlayKind::Snippet => {
                let text = self.palette.snippets[palette_index];
                let color = match self.palette.snippet_colors.len() {
                    0 => FALLBACK_SNIPPET_COLOR,
                    n => self.palette.snippet_colors[self.rng.gen_range(0..n)],
                };
                let width_px = self.draw_range(lane.width_px);
                let font_px = self.draw_range(lane.size_px);
                let typing_ms = lane.reveal_every_ms.unwrap_or(0) * text.chars().count() as u32;
                (
                    OverlayContent::Snippet { text, color, font_px, width_px, revealed: 0 },
                    typing_ms + lane.linger_ms,
                )
            }
        };

        let id = OverlayId(self.next_id);
        self.next_id += 1;
        self.lane_mut(kind).push(Overlay {
            id,
            palette_index,
            position: placement.position,
            content,
            spawned_at_ms: now_ms,
            lifetime_ms,
        });

        SpawnOutcome::Spawned(SpawnTicket {
            id,
            kind,
            lifetime_ms,
            reveal_every_ms: match kind {
                OverlayKind::Icon => None,
                OverlayKind::Snippet => lane.reveal_every_ms,
            },
            degraded: placement.degraded,
        })
    }

    /// Removes the overlay with `id`. Returns false when it was already gone.
    pub fn expire(&mut self, id: OverlayId) -> bool {
        let before = self.icons.len() + self.snippets.len();
        self.icons.retain(|o| o.id != id);
        self.snippets.retain(|o| o.id != id);
        before != self.icons.len() + self.snippets.len()
    }

    pub fn reveal_tick(&mut self, id: OverlayId) -> RevealStep {
        let Some(overlay) = self.snippets.iter_mut().find(|o| o.id == id) else {
            return RevealStep::Gone;
        };
        if overlay.reveal_state() == RevealState::Complete {
            return RevealStep::Complete;
        }
        match &mut overlay.content {
            OverlayContent::Snippet { text, revealed, .. } => {
                *revealed += 1;
                RevealStep::Advanced { shown: *revealed, total: text.chars().count() }
            }
            OverlayContent::Icon { .. } => RevealStep::Complete,
        }
    }

    pub fn clear(&mut self) {
        self.icons.clear();
        self.snippets.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decorations::config::ViewportClass;
    use crate::decorations::palette::{Glyph, IconSwatch};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

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

    fn board(config: DecorationConfig, palette: Palette) -> OverlayBoard<StdRng> {
        OverlayBoard::new(config, palette, StdRng::seed_from_u64(2024))
    }

    #[test]
    fn skipped_spawn_at_capacity_is_a_no_op() {
        let mut board = board(icon_config(1, 100, 1000), tiny_palette());
        assert!(matches!(board.try_spawn(OverlayKind::Icon, 0.0), SpawnOutcome::Spawned(_)));
        assert_eq!(board.try_spawn(OverlayKind::Icon, 10.0), SpawnOutcome::AtCapacity);
        assert_eq!(board.ids_created(), 1);
    }

    #[test]
    fn empty_palette_never_spawns() {
        let mut board = board(DecorationConfig::for_viewport(ViewportClass::Wide), Palette::EMPTY);
        assert_eq!(board.try_spawn(OverlayKind::Icon, 0.0), SpawnOutcome::EmptyPalette);
        assert_eq!(board.try_spawn(OverlayKind::Snippet, 0.0), SpawnOutcome::EmptyPalette);
        assert_eq!(board.ids_created(), 0);
    }

    #[test]
    fn removal_is_idempotent() {
        let mut board = board(icon_config(3, 100, 1000), tiny_palette());
        board.try_spawn(OverlayKind::Icon, 0.0);
        board.try_spawn(OverlayKind::Snippet, 0.0);
        assert!(board.expire(OverlayId(0)));
        let after_first: Vec<Overlay> = board.overlays().cloned().collect();
        assert!(!board.expire(OverlayId(0)));
        assert!(!board.expire(OverlayId(99)));
        assert_eq!(board.overlays().cloned().collect::<Vec<_>>(), after_first);
    }

    #[test]
    fn reveal_grows_one_char_at_a_time() {
        let mut board = board(DecorationConfig::for_viewport(ViewportClass::Wide), tiny_palette());
        let SpawnOutcome::Spawned(ticket) = board.try_spawn(OverlayKind::Snippet, 0.0) else {
            panic!("snippet did not spawn");
        };
        assert_eq!(ticket.reveal_every_ms, Some(30));
        let total = ONE_SNIPPET[0].chars().count();

        let mut previous = 0;
        loop {
            match board.reveal_tick(ticket.id) {
                RevealStep::Advanced { shown, total: t } => {
                    assert_eq!(t, total);
                    assert_eq!(shown, previous + 1);
                    assert!(shown <= total);
                    previous = shown;
                }
                RevealStep::Complete => break,
                RevealStep::Gone => panic!("snippet vanished"),
            }
        }
        assert_eq!(previous, total);
        assert_eq!(board.get(ticket.id).map(Overlay::shown), Some(ONE_SNIPPET[0]));
        assert_eq!(board.reveal_tick(ticket.id), RevealStep::Complete);
    }

    #[test]
    fn reveal_after_expiry_is_silent() {
        let mut board = board(DecorationConfig::for_viewport(ViewportClass::Wide), tiny_palette());
        let SpawnOutcome::Spawned(ticket) = board.try_spawn(OverlayKind::Snippet, 0.0) else {
            panic!("snippet did not spawn");
        };
        board.reveal_tick(ticket.id);
        assert!(board.expire(ticket.id));
        assert_eq!(board.reveal_tick(ticket.id), RevealStep::Gone);
    }

    #[test]
    fn snippet_lifetime_covers_typing_plus_linger() {
        let mut board = board(DecorationConfig::for_viewport(ViewportClass::Wide), tiny_palette());
        let SpawnOutcome::Spawned(ticket) = board.try_spawn(OverlayKind::Snippet, 0.0) else {
            panic!("snippet did not spawn");
        };
        let chars = ONE_SNIPPET[0].chars().count() as u32;
        assert_eq!(ticket.lifetime_ms, chars * 30 + 2700);

        let SpawnOutcome::Spawned(icon) = board.try_spawn(OverlayKind::Icon, 0.0) else {
            panic!("icon did not spawn");
        };
        assert_eq!(icon.lifetime_ms, 2500);
        assert_eq!(icon.reveal_every_ms, None);
    }

    #[test]
    fn icons_render_before_snippets() {
        let mut board = board(DecorationConfig::for_viewport(ViewportClass::Wide), tiny_palette());
        board.try_spawn(OverlayKind::Snippet, 0.0);
        board.try_spawn(OverlayKind::Icon, 0.0);
        let kinds: Vec<OverlayKind> = board.overlays().map(Overlay::kind).collect();
        assert_eq!(kinds, vec![OverlayKind::Icon, OverlayKind::Snippet]);
    }

    #[test]
    fn spawned_sizes_stay_in_range() {
        let config = DecorationConfig::for_viewport(ViewportClass::Narrow);
        let mut board = board(config, Palette::default());
        for _ in 0..config.icons.max_concurrent {
            board.try_spawn(OverlayKind::Icon, 0.0);
        }
        for _ in 0..config.snippets.max_concurrent {
            board.try_spawn(OverlayKind::Snippet, 0.0);
        }
        for overlay in board.overlays() {
            match overlay.content {
                OverlayContent::Icon { size_px, .. } => {
                    assert!(size_px >= config.icons.size_px.0 && size_px < config.icons.size_px.1)
                }
                OverlayContent::Snippet { font_px, width_px, revealed, .. } => {
                    assert!(font_px >= config.snippets.size_px.0 && font_px < config.snippets.size_px.1);
                    assert!(width_px >= config.snippets.width_px.0 && width_px < config.snippets.width_px.1);
                    assert_eq!(revealed, 0);
                }
            }
        }
        assert_eq!(board.live_count(OverlayKind::Icon), config.icons.max_concurrent);
    }

    #[test]
    fn clear_drops_everything_but_keeps_counter() {
        let mut board = board(DecorationConfig::for_viewport(ViewportClass::Wide), tiny_palette());
        board.try_spawn(OverlayKind::Icon, 0.0);
        board.try_spawn(OverlayKind::Snippet, 0.0);
        board.clear();
        assert_eq!(board.overlays().count(), 0);
        let SpawnOutcome::Spawned(next) = board.try_spawn(OverlayKind::Icon, 0.0) else {
            panic!("icon did not spawn");
        };
        assert_eq!(next.id, OverlayId(2));
    }
}
