use yew::prelude::*;

/// Stroke icons drawn in the hero background.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Glyph {
    Code,
    Cloud,
    Database,
    Zap,
    Settings,
    Cpu,
    Server,
    Smartphone,
    Palette,
}

impl Glyph {
    /// Path data on a 24x24 viewbox.
    pub fn paths(&self) -> &'static [&'static str] {
        match self {
            Glyph::Code => &["M16 18l6-6-6-6", "M8 6l-6 6 6 6"],
            Glyph::Cloud => &["M17.5 19H9a7 7 0 1 1 6.71-9h1.79a4.5 4.5 0 1 1 0 9Z"],
            Glyph::Database => &[
                "M3 5a9 3 0 1 0 18 0a9 3 0 1 0 -18 0",
                "M3 5V19A9 3 0 0 0 21 19V5",
                "M3 12A9 3 0 0 0 21 12",
            ],
            Glyph::Zap => &["M13 2L3 14h9l-1 8 10-12h-9l1-8z"],
            Glyph::Settings => &[
                "M12.22 2h-.44a2 2 0 0 0-2 2v.18a2 2 0 0 1-1 1.73l-.43.25a2 2 0 0 1-2 0l-.15-.08a2 2 0 0 0-2.73.73l-.22.38a2 2 0 0 0 .73 2.73l.15.1a2 2 0 0 1 1 1.72v.51a2 2 0 0 1-1 1.74l-.15.09a2 2 0 0 0-.73 2.73l.22.38a2 2 0 0 0 2.73.73l.15-.08a2 2 0 0 1 2 0l.43.25a2 2 0 0 1 1 1.73V20a2 2 0 0 0 2 2h.44a2 2 0 0 0 2-2v-.18a2 2 0 0 1 1-1.73l.43-.25a2 2 0 0 1 2 0l.15.08a2 2 0 0 0 2.73-.73l.22-.39a2 2 0 0 0-.73-2.73l-.15-.08a2 2 0 0 1-1-1.74v-.5a2 2 0 0 1 1-1.74l.15-.09a2 2 0 0 0 .73-2.73l-.22-.38a2 2 0 0 0-2.73-.73l-.15.08a2 2 0 0 1-2 0l-.43-.25a2 2 0 0 1-1-1.73V4a2 2 0 0 0-2-2z",
                "M9 12a3 3 0 1 0 6 0a3 3 0 1 0 -6 0",
            ],
            Glyph::Cpu => &[
                "M6 4h12a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H6a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
                "M9 9h6v6H9z",
                "M15 2v2M15 20v2M2 15h2M2 9h2M20 15h2M20 9h2M9 2v2M9 20v2",
            ],
            Glyph::Server => &[
                "M4 2h16a2 2 0 0 1 2 2v4a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V4a2 2 0 0 1 2-2z",
                "M4 14h16a2 2 0 0 1 2 2v4a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2v-4a2 2 0 0 1 2-2z",
                "M6 6h.01M6 18h.01",
            ],
            Glyph::Smartphone => &[
                "M7 2h10a2 2 0 0 1 2 2v16a2 2 0 0 1-2 2H7a2 2 0 0 1-2-2V4a2 2 0 0 1 2-2z",
                "M12 18h.01",
            ],
            Glyph::Palette => &[
                "M12 22a10 10 0 1 1 10-10c0 2.76-2.24 4-5 4h-1.5a1.5 1.5 0 0 0-1.1 2.5A1.5 1.5 0 0 1 12 22z",
                "M13.5 6.5h.01M17.5 10.5h.01M8.5 7.5h.01M6.5 12.5h.01",
            ],
        }
    }

    pub fn render(&self, class: &'static str, style: String) -> Html {
        html! {
            <svg
                xmlns="http://www.w3.org/2000/svg"
                viewBox="0 0 24 24"
                fill="none"
                stroke="currentColor"
                stroke-width="2"
                stroke-linecap="round"
                stroke-linejoin="round"
                {class}
                {style}
            >
                { for self.paths().iter().map(|d| html! { <path d={*d} /> }) }
            </svg>
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IconSwatch {
    pub glyph: Glyph,
    pub color: &'static str,
}

pub const TECH_ICONS: [IconSwatch; 9] = [
    IconSwatch { glyph: Glyph::Code, color: "#f15a22" },
    IconSwatch { glyph: Glyph::Cloud, color: "#6366f1" },
    IconSwatch { glyph: Glyph::Database, color: "#a78bfa" },
    IconSwatch { glyph: Glyph::Zap, color: "#fbbf24" },
    IconSwatch { glyph: Glyph::Settings, color: "#f15a22" },
    IconSwatch { glyph: Glyph::Cpu, color: "#10b981" },
    IconSwatch { glyph: Glyph::Server, color: "#6366f1" },
    IconSwatch { glyph: Glyph::Smartphone, color: "#f15a22" },
    IconSwatch { glyph: Glyph::Palette, color: "#a78bfa" },
];

pub const CODE_SNIPPETS: [&str; 21] = [
    "const sum = (a, b) => a + b;",
    "useState(false);",
    "return <Component />;",
    "msg.payload = 42; // n8n",
    "const data = await fetch(url);",
    "console.log('Ready!');",
    "if (user) return true;",
    "setTimeout(fn, 1000);",
    "const [x, setX] = useState(0);",
    "workflow.on('start'); // n8n",
    "items.map(i => i.done);",
    "return input * 2;",
    "const node = new Node();",
    "const res = await api.get('/users');",
    "const flow = $node[\"HTTP Request\"].json; // n8n",
    "props => <Button {...props} />;",
    "const ctx = useContext(AppCtx);",
    "emit('done'); // n8n",
    "const el = document.getElementById('id');",
    "return <h1>Hello</h1>;",
    "const fn = () => {};",
];

pub const SNIPPET_COLORS: [&str; 7] = [
    "#f15a22", // orange
    "#ef4444", // red
    "#22c55e", // green
    "#3b82f6", // blue
    "#111111", // black
    "#a78bfa", // purple
    "#ec4899", // pink
];

/// Content the board draws from. Borrowed so tests can swap in tiny palettes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub icons: &'static [IconSwatch],
    pub snippets: &'static [&'static str],
    pub snippet_colors: &'static [&'static str],
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            icons: &TECH_ICONS,
            snippets: &CODE_SNIPPETS,
            snippet_colors: &SNIPPET_COLORS,
        }
    }
}

impl Palette {
    pub const EMPTY: Palette = Palette { icons: &[], snippets: &[], snippet_colors: &[] };
}
