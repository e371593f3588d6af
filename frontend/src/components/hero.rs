use gloo_timers::callback::Timeout;
use yew::prelude::*;
use yew_hooks::use_window_size;

use super::reveal::section_link;
use crate::content::HERO_FEATURES;
use crate::decorations::config::ViewportClass;
use crate::decorations::layer::DecorationLayer;

/// Delay before the hero copy fades in.
const ENTRANCE_DELAY_MS: u32 = 100;

#[function_component(Hero)]
pub fn hero() -> Html {
    let visible = use_state(|| false);
    let (width, _) = use_window_size();
    let viewport = ViewportClass::from_width(width);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(ENTRANCE_DELAY_MS, move || visible.set(true));
                move || drop(timeout)
            },
            (),
        );
    }

    let stage = |step: &'static str| classes!("hero-stage", step, visible.then_some("visible"));

    html! {
        <section id="home" class="hero">
            <DecorationLayer {viewport} />
            <div class="hero-content">
                <div class={stage("stage-badge")}>
                    <span class="hero-badge">{"Leading IT Solutions & Automation"}</span>
                </div>
                <h1 class={stage("stage-heading")}>
                    {"Transform Your Business with"}
                    <span class="hero-accent">{"CodByt Solutions"}</span>
                </h1>
                <p class={classes!(stage("stage-copy"), "hero-subheading")}>
                    {"We specialize in SaaS development, automation workflows, and full-stack applications \
                      that drive growth and efficiency for businesses of all sizes."}
                </p>
                <div class={classes!(stage("stage-cta"), "hero-actions")}>
                    <button class="cta-primary" onclick={section_link("contact")}>
                        {"Start Your Journey →"}
                    </button>
                    <button class="cta-secondary" onclick={section_link("portfolio")}>
                        {"View Our Work"}
                    </button>
                </div>
                <div class="hero-features">
                    { for HERO_FEATURES.iter().map(|feature| html! {
                        <div class="feature-card">
                            { feature.glyph.render("feature-icon", String::new()) }
                            <h3>{ feature.title }</h3>
                            <p>{ feature.description }</p>
                        </div>
                    }) }
                </div>
            </div>
            <style>
                {r#"
                .hero {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    overflow: hidden;
                    padding: 7rem 1.5rem 4rem;
                    background: linear-gradient(135deg, #f0fdfa 0%, #eff6ff 50%, #ffffff 100%);
                }
                .hero-content {
                    position: relative;
                    z-index: 1;
                    max-width: 960px;
                    text-align: center;
                }
                .hero-stage {
                    opacity: 0;
                    transform: translateY(2rem);
                    transition: opacity 1s ease, transform 1s ease;
                }
                .hero-stage.visible {
                    opacity: 1;
                    transform: translateY(0);
                }
                .stage-heading { transition-delay: 0.4s; }
                .stage-copy { transition-delay: 0.8s; }
                .stage-cta { transition-delay: 1s; }
                .hero-badge {
                    display: inline-block;
                    padding: 0.5rem 1rem;
                    border-radius: 9999px;
                    background: #ccfbf1;
                    color: #0f766e;
                    font-size: 0.875rem;
                    font-weight: 500;
                    margin-bottom: 2rem;
                }
                .hero h1 {
                    font-size: clamp(3rem, 8vw, 6rem);
                    font-weight: 700;
                    line-height: 1.1;
                    color: #111827;
                    margin-bottom: 1.5rem;
                }
                .hero-accent {
                    display: block;
                    background: linear-gradient(90deg, #14b8a6, #06b6d4, #0d9488);
                    -webkit-background-clip: text;
                    background-clip: text;
                    color: transparent;
                }
                .hero-subheading {
                    font-size: clamp(1rem, 2.2vw, 1.5rem);
                    color: #4b5563;
                    line-height: 1.6;
                    max-width: 56rem;
                    margin: 0 auto 3rem;
                }
                .hero-actions {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1rem;
                    justify-content: center;
                    margin-bottom: 4rem;
                }
                .cta-primary, .cta-secondary {
                    padding: 1rem 2rem;
                    border-radius: 0.5rem;
                    font-weight: 600;
                    font-size: 1.125rem;
                    cursor: pointer;
                    transition: transform 0.2s ease, box-shadow 0.2s ease;
                }
                .cta-primary {
                    border: none;
                    color: #ffffff;
                    background: linear-gradient(90deg, #14b8a6, #06b6d4);
                }
                .cta-secondary {
                    border: 2px solid #d1d5db;
                    color: #374151;
                    background: #ffffff;
                }
                .cta-primary:hover, .cta-secondary:hover {
                    transform: translateY(-4px);
                    box-shadow: 0 12px 24px rgba(20, 184, 166, 0.2);
                }
                .hero-features {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                    gap: 2rem;
                }
                .feature-card {
                    background: #eff6ff;
                    border: 1px solid #dbeafe;
                    border-radius: 1rem;
                    padding: 2rem;
                    box-shadow: 0 8px 20px rgba(0, 0, 0, 0.06);
                    transition: transform 0.2s ease;
                }
                .feature-card:hover { transform: translateY(-0.75rem) scale(1.05); }
                .feature-icon {
                    width: 2rem;
                    height: 2rem;
                    color: #2563eb;
                    margin: 0 auto 1rem;
                    display: block;
                }
                .feature-card h3 { font-weight: 600; color: #111827; margin-bottom: 0.5rem; }
                .feature-card p { font-size: 0.875rem; color: #4b5563; }
                "#}
            </style>
        </section>
    }
}
