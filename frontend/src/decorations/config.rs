use super::overlay::OverlayKind;
use super::placement::{PlacementRules, Region};

/// Coarse viewport width class. Small screens get fewer, slower overlays.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewportClass {
    Narrow,
    Wide,
}

impl ViewportClass {
    pub const NARROW_BELOW_PX: f64 = 640.0;

    pub fn from_width(width_px: f64) -> Self {
        if width_px < Self::NARROW_BELOW_PX {
            ViewportClass::Narrow
        } else {
            ViewportClass::Wide
        }
    }
}

/// Header copy and buttons sit here.
pub const SAFE_ZONE: Region = Region::new((22.0, 62.0), (18.0, 82.0));
pub const MIN_DISTANCE: f64 = 10.0;
pub const DUPLICATE_TOLERANCE: f64 = 2.0;
pub const RETRY_BUDGET: u32 = 10;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LaneConfig {
    pub max_concurrent: usize,
    pub spawn_every_ms: u32,
    /// Icons: total lifetime. Snippets: how long the text stays after it is fully typed.
    pub linger_ms: u32,
    /// Snippets only.
    pub reveal_every_ms: Option<u32>,
    /// Icon pixel size or snippet font size, `(min, max)`.
    pub size_px: (f64, f64),
    /// Snippet box width, `(min, max)`. Unused for icons.
    pub width_px: (f64, f64),
    pub placement: PlacementRules,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DecorationConfig {
    pub icons: LaneConfig,
    pub snippets: LaneConfig,
}

fn rules(spawn_region: Region) -> PlacementRules {
    PlacementRules {
        spawn_region,
        safe_zone: SAFE_ZONE,
        min_distance: MIN_DISTANCE,
        duplicate_tolerance: DUPLICATE_TOLERANCE,
        retry_budget: RETRY_BUDGET,
    }
}

impl DecorationConfig {
    pub fn for_viewport(class: ViewportClass) -> Self {
        let icon_region = Region::new((10.0, 80.0), (5.0, 85.0));
        let snippet_region = Region::new((15.0, 75.0), (10.0, 80.0));
        match class {
            ViewportClass::Wide => Self {
                icons: LaneConfig {
                    max_concurrent: 12,
                    spawn_every_ms: 400,
                    linger_ms: 2500,
                    reveal_every_ms: None,
                    size_px: (32.0, 56.0),
                    width_px: (0.0, 0.0),
                    placement: rules(icon_region),
                },
                snippets: LaneConfig {
                    max_concurrent: 3,
                    spawn_every_ms: 1200,
                    linger_ms: 2700,
                    reveal_every_ms: Some(30),
                    size_px: (13.0, 15.0),
                    width_px: (120.0, 160.0),
                    placement: rules(snippet_region),
                },
            },
            ViewportClass::Narrow => Self {
                icons: LaneConfig {
                    max_concurrent: 6,
                    spawn_every_ms: 700,
                    linger_ms: 2500,
                    reveal_every_ms: None,
                    size_px: (20.0, 36.0),
                    width_px: (0.0, 0.0),
                    placement: rules(icon_region),
                },
                snippets: LaneConfig {
                    max_concurrent: 2,
                    spawn_every_ms: 1800,
                    linger_ms: 2700,
                    reveal_every_ms: Some(45),
                    size_px: (11.0, 13.0),
                    width_px: (90.0, 120.0),
                    placement: rules(snippet_region),
                },
            },
        }
    }

    pub fn lane(&self, kind: OverlayKind) -> &LaneConfig {
        match kind {
            OverlayKind::Icon => &self.icons,
            OverlayKind::Snippet => &self.snippets,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_viewport_width() {
        assert_eq!(ViewportClass::from_width(375.0), ViewportClass::Narrow);
        assert_eq!(ViewportClass::from_width(639.9), ViewportClass::Narrow);
        assert_eq!(ViewportClass::from_width(640.0), ViewportClass::Wide);
        assert_eq!(ViewportClass::from_width(1440.0), ViewportClass::Wide);
    }

    #[test]
    fn narrow_screens_are_calmer() {
        let wide = DecorationConfig::for_viewport(ViewportClass::Wide);
        let narrow = DecorationConfig::for_viewport(ViewportClass::Narrow);
        for kind in [OverlayKind::Icon, OverlayKind::Snippet] {
            assert!(narrow.lane(kind).max_concurrent < wide.lane(kind).max_concurrent);
            assert!(narrow.lane(kind).spawn_every_ms > wide.lane(kind).spawn_every_ms);
            assert!(narrow.lane(kind).size_px.1 < wide.lane(kind).size_px.1);
        }
        assert_eq!(wide.icons.reveal_every_ms, None);
        assert!(narrow.snippets.reveal_every_ms > wide.snippets.reveal_every_ms);
    }

    #[test]
    fn spawn_regions_are_wider_than_safe_zone() {
        let config = DecorationConfig::for_viewport(ViewportClass::Wide);
        for lane in [config.icons, config.snippets] {
            let region = lane.placement.spawn_region;
            assert!(region.top.0 < SAFE_ZONE.top.0 && region.top.1 > SAFE_ZONE.top.1);
            assert!(region.left.0 < SAFE_ZONE.left.0);
        }
    }
}
