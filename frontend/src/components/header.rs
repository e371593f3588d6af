use web_sys::window;
use yew::prelude::*;
use yew_hooks::use_window_scroll;

use super::reveal::scroll_to_section;
use crate::config::SITE_NAME;
use crate::content::NAV_SECTIONS;

/// Scroll offset past which the header turns opaque.
const SCROLLED_AFTER: f64 = 50.0;
/// Viewport line a section has to cross to be the active one.
const ACTIVE_LINE: f64 = 100.0;

/// Section extents in viewport coordinates, in page order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionRect {
    pub id: &'static str,
    pub top: f64,
    pub bottom: f64,
}

/// First section that spans the active line, if any.
pub fn active_section(rects: &[SectionRect]) -> Option<&'static str> {
    rects
        .iter()
        .find(|rect| rect.top <= ACTIVE_LINE && rect.bottom >= ACTIVE_LINE)
        .map(|rect| rect.id)
}

fn measure_sections() -> Vec<SectionRect> {
    let Some(document) = window().and_then(|w| w.document()) else {
        return Vec::new();
    };
    NAV_SECTIONS
        .iter()
        .filter_map(|section| {
            let rect = document.get_element_by_id(section.id)?.get_bounding_client_rect();
            Some(SectionRect {
                id: section.id,
                top: rect.top(),
                bottom: rect.bottom(),
            })
        })
        .collect()
}

#[function_component(Header)]
pub fn header() -> Html {
    let (_, scroll_y) = use_window_scroll();
    let menu_open = use_state(|| false);
    let active = use_state(|| "home");

    {
        let active = active.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(id) = active_section(&measure_sections()) {
                    active.set(id);
                }
                || ()
            },
            scroll_y as i64,
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    let nav_item = |id: &'static str, label: &'static str, mobile: bool| {
        let menu_open = menu_open.clone();
        let onclick = Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            scroll_to_section(id);
            menu_open.set(false);
        });
        let base = if mobile { "mobile-nav-link" } else { "nav-link" };
        let class = classes!(base, (*active == id).then_some("active"));
        html! {
            <a href={format!("#{id}")} {class} {onclick}>{ label }</a>
        }
    };

    html! {
        <header class={classes!("site-header", (scroll_y > SCROLLED_AFTER).then_some("scrolled"))}>
            <div class="header-inner">
                <a href="#home" class="brand" onclick={Callback::from(|e: MouseEvent| {
                    e.prevent_default();
                    scroll_to_section("home");
                })}>
                    <span class="brand-mark">{"</>"}</span>
                    <span class="brand-name">{ SITE_NAME }</span>
                </a>
                <nav class="desktop-nav">
                    { for NAV_SECTIONS.iter().map(|s| nav_item(s.id, s.label, false)) }
                </nav>
                <button class="menu-toggle" aria-label="Toggle menu" onclick={toggle_menu}>
                    { if *menu_open { "✕" } else { "☰" } }
                </button>
            </div>
            if *menu_open {
                <nav class="mobile-nav">
                    { for NAV_SECTIONS.iter().map(|s| nav_item(s.id, s.label, true)) }
                </nav>
            }
            <style>
                {r#"
                .site-header {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    transition: background-color 0.3s ease, box-shadow 0.3s ease;
                    background: transparent;
                }
                .site-header.scrolled {
                    background: rgba(255, 255, 255, 0.95);
                    backdrop-filter: blur(8px);
                    box-shadow: 0 2px 12px rgba(0, 0, 0, 0.08);
                }
                .header-inner {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 1rem 1.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .brand {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    font-weight: 700;
                    font-size: 1.25rem;
                    color: #111827;
                    text-decoration: none;
                }
                .brand-mark {
                    font-family: ui-monospace, monospace;
                    color: #2563eb;
                }
                .desktop-nav {
                    display: flex;
                    gap: 2rem;
                }
                .nav-link, .mobile-nav-link {
                    color: #374151;
                    text-decoration: none;
                    font-weight: 500;
                    transition: color 0.2s ease;
                }
                .nav-link:hover, .nav-link.active,
                .mobile-nav-link:hover, .mobile-nav-link.active {
                    color: #2563eb;
                }
                .menu-toggle {
                    display: none;
                    background: none;
                    border: none;
                    font-size: 1.5rem;
                    cursor: pointer;
                }
                .mobile-nav {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                    padding: 1rem 1.5rem 1.5rem;
                    background: #ffffff;
                    box-shadow: 0 8px 16px rgba(0, 0, 0, 0.08);
                }
                @media (max-width: 768px) {
                    .desktop-nav { display: none; }
                    .menu-toggle { display: block; }
                }
                "#}
            </style>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(id: &'static str, top: f64, bottom: f64) -> SectionRect {
        SectionRect { id, top, bottom }
    }

    #[test]
    fn picks_section_spanning_the_line() {
        let rects = [
            rect("home", -900.0, -20.0),
            rect("about", -20.0, 640.0),
            rect("services", 640.0, 1400.0),
        ];
        assert_eq!(active_section(&rects), Some("about"));
    }

    #[test]
    fn edges_are_inclusive() {
        assert_eq!(active_section(&[rect("blog", 100.0, 900.0)]), Some("blog"));
        assert_eq!(active_section(&[rect("blog", -500.0, 100.0)]), Some("blog"));
    }

    #[test]
    fn first_match_wins_on_overlap() {
        let rects = [rect("portfolio", 0.0, 200.0), rect("blog", 50.0, 800.0)];
        assert_eq!(active_section(&rects), Some("portfolio"));
    }

    #[test]
    fn nothing_spans_the_line() {
        let rects = [rect("home", -900.0, 40.0), rect("about", 160.0, 900.0)];
        assert_eq!(active_section(&rects), None);
        assert_eq!(active_section(&[]), None);
    }
}
