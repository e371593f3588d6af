use rand::Rng;

/// A point in percentage space of the hero region.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Position {
    pub top: f64,
    pub left: f64,
}

impl Position {
    pub fn new(top: f64, left: f64) -> Self {
        Self { top, left }
    }

    pub fn distance(&self, other: &Position) -> f64 {
        ((self.top - other.top).powi(2) + (self.left - other.left).powi(2)).sqrt()
    }
}

/// Axis-aligned rectangle in percent, `(min, max)` per axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Region {
    pub top: (f64, f64),
    pub left: (f64, f64),
}

impl Region {
    pub const fn new(top: (f64, f64), left: (f64, f64)) -> Self {
        Self { top, left }
    }

    /// Strict interior test. A point sitting exactly on an edge is outside.
    pub fn contains(&self, pos: &Position) -> bool {
        pos.top > self.top.0 && pos.top < self.top.1 && pos.left > self.left.0 && pos.left < self.left.1
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Position {
        Position {
            top: self.top.0 + rng.gen::<f64>() * (self.top.1 - self.top.0),
            left: self.left.0 + rng.gen::<f64>() * (self.left.1 - self.left.0),
        }
    }
}

/// A live overlay of the same kind, as seen by the sampler.
/// `content` is the palette index, used for the duplicate check.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Occupant {
    pub position: Position,
    pub content: usize,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacementRules {
    pub spawn_region: Region,
    pub safe_zone: Region,
    pub min_distance: f64,
    pub duplicate_tolerance: f64,
    pub retry_budget: u32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub position: Position,
    /// Palette index drawn together with the position.
    pub content: usize,
    /// Set when the retry budget ran out and the last draw was taken as-is.
    pub degraded: bool,
}

impl PlacementRules {
    fn crowds(&self, candidate: &Position, content: usize, existing: &[Occupant]) -> bool {
        existing.iter().any(|other| {
            let near_duplicate = other.content == content
                && (other.position.top - candidate.top).abs() < self.duplicate_tolerance
                && (other.position.left - candidate.left).abs() < self.duplicate_tolerance;
            other.position.distance(candidate) < self.min_distance || near_duplicate
        })
    }

    pub fn accepts(&self, candidate: &Position, content: usize, existing: &[Occupant]) -> bool {
        !self.safe_zone.contains(candidate) && !self.crowds(candidate, content, existing)
    }
}

fn draw<R: Rng + ?Sized>(contents: usize, rules: &PlacementRules, rng: &mut R) -> (usize, Position) {
    let content = rng.gen_range(0..contents.max(1));
    (content, rules.spawn_region.sample(rng))
}

/// Rejection sampling with a bounded retry budget.
///
/// Each attempt draws a palette index in `0..contents` and a candidate from the
/// spawn region, and the first pair that clears the safe zone and keeps its
/// distance from `existing` wins. When none does, the last draw is returned with
/// `degraded` set: a visual overlap beats a missed spawn.
///
/// `contents` must be non-zero; callers check for an empty palette first.
pub fn sample_position<R: Rng + ?Sized>(
    existing: &[Occupant],
    contents: usize,
    rules: &PlacementRules,
    rng: &mut R,
) -> Placement {
    let (mut content, mut position) = draw(contents, rules, rng);
    if rules.retry_budget == 0 {
        return Placement { position, content, degraded: true };
    }

    for attempt in 0..rules.retry_budget {
        if attempt > 0 {
            (content, position) = draw(contents, rules, rng);
        }
        if rules.accepts(&position, content, existing) {
            return Placement { position, content, degraded: false };
        }
    }

    Placement { position, content, degraded: true }
}
