use super::palette::Glyph;
use super::placement::{Occupant, Position};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OverlayId(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OverlayKind {
    Icon,
    Snippet,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealState {
    Revealing,
    Complete,
}

#[derive(Clone, Debug, PartialEq)]
pub enum OverlayContent {
    Icon {
        glyph: Glyph,
        color: &'static str,
        size_px: f64,
    },
    Snippet {
        text: &'static str,
        color: &'static str,
        font_px: f64,
        width_px: f64,
        /// Number of chars currently typed out.
        revealed: usize,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Overlay {
    pub id: OverlayId,
    /// Palette index the content was drawn from.
    pub palette_index: usize,
    pub position: Position,
    pub content: OverlayContent,
    pub spawned_at_ms: f64,
    pub lifetime_ms: u32,
}

impl Overlay {
    pub fn kind(&self) -> OverlayKind {
        match self.content {
            OverlayContent::Icon { .. } => OverlayKind::Icon,
            OverlayContent::Snippet { .. } => OverlayKind::Snippet,
        }
    }

    pub fn occupant(&self) -> Occupant {
        Occupant { position: self.position, content: self.palette_index }
    }

    pub fn expires_at_ms(&self) -> f64 {
        self.spawned_at_ms + f64::from(self.lifetime_ms)
    }

    /// Typed prefix of a snippet. Icons have no text.
    pub fn shown(&self) -> &'static str {
        match self.content {
            OverlayContent::Snippet { text, revealed, .. } => match text.char_indices().nth(revealed) {
                Some((end, _)) => &text[..end],
                None => text,
            },
            OverlayContent::Icon { .. } => "",
        }
    }

    pub fn reveal_state(&self) -> RevealState {
        match self.content {
            OverlayContent::Snippet { text, revealed, .. } if revealed < text.chars().count() => {
                RevealState::Revealing
            }
            _ => RevealState::Complete,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snippet(text: &'static str, revealed: usize) -> Overlay {
        Overlay {
            id: OverlayId(0),
            palette_index: 0,
            position: Position::new(10.0, 10.0),
            content: OverlayContent::Snippet { text, color: "#111111", font_px: 13.0, width_px: 120.0, revealed },
            spawned_at_ms: 0.0,
            lifetime_ms: 1000,
        }
    }

    #[test]
    fn shown_prefix_counts_chars() {
        assert_eq!(snippet("emit('done');", 0).shown(), "");
        assert_eq!(snippet("emit('done');", 4).shown(), "emit");
        assert_eq!(snippet("héllo", 2).shown(), "hé");
        assert_eq!(snippet("héllo", 5).shown(), "héllo");
    }

    #[test]
    fn reveal_state_follows_prefix() {
        assert_eq!(snippet("abc", 2).reveal_state(), RevealState::Revealing);
        assert_eq!(snippet("abc", 3).reveal_state(), RevealState::Complete);
    }
}
