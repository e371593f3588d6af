use gloo_timers::callback::{Interval, Timeout};
use rand::rngs::StdRng;
use rand::SeedableRng;
use yew::html::Scope;
use yew::prelude::*;

use super::board::OverlayBoard;
use super::config::{DecorationConfig, ViewportClass};
use super::driver::{DecorationDriver, DecorationMsg, Scheduler};
use super::overlay::{Overlay, OverlayContent};
use super::palette::Palette;

#[derive(Properties, PartialEq)]
pub struct DecorationLayerProps {
    pub viewport: ViewportClass,
}

impl Scheduler for Scope<DecorationLayer> {
    type Repeating = Interval;
    type Once = Timeout;

    fn every(&self, period_ms: u32, msg: DecorationMsg) -> Interval {
        let link = self.clone();
        Interval::new(period_ms, move || link.send_message(msg))
    }

    fn after(&self, delay_ms: u32, msg: DecorationMsg) -> Timeout {
        let link = self.clone();
        Timeout::new(delay_ms, move || link.send_message(msg))
    }

    fn send_now(&self, msg: DecorationMsg) {
        self.send_message(msg);
    }
}

/// Animated icons and typed code snippets behind the hero copy.
pub struct DecorationLayer {
    driver: DecorationDriver<Scope<DecorationLayer>, StdRng>,
}

impl Component for DecorationLayer {
    type Message = DecorationMsg;
    type Properties = DecorationLayerProps;

    fn create(ctx: &Context<Self>) -> Self {
        let config = DecorationConfig::for_viewport(ctx.props().viewport);
        let board = OverlayBoard::new(config, Palette::default(), StdRng::from_entropy());
        let mut driver = DecorationDriver::new(board);
        driver.start(ctx.link());
        Self { driver }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        self.driver.handle(ctx.link(), msg, js_sys::Date::now())
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().viewport == old_props.viewport {
            return false;
        }
        log::debug!("decorations: viewport now {:?}, restarting", ctx.props().viewport);
        self.driver.restart(ctx.link(), DecorationConfig::for_viewport(ctx.props().viewport));
        true
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="decoration-layer" aria-hidden="true">
                { for self.driver.board().overlays().map(render_overlay) }
                <style>
                    {r#"
                    .decoration-layer {
                        position: absolute;
                        inset: 0;
                        width: 100%;
                        height: 100%;
                        z-index: 0;
                        pointer-events: none;
                        user-select: none;
                    }
                    .floating-icon,
                    .typed-snippet {
                        position: absolute;
                        animation: float-pop 2.5s ease-in-out forwards;
                        z-index: 0;
                    }
                    .floating-icon {
                        filter: blur(0.5px);
                        opacity: 0.5;
                    }
                    .typed-snippet {
                        font-family: ui-monospace, SFMono-Regular, Menlo, monospace;
                        white-space: pre;
                        line-height: 1.375;
                        opacity: 0.8;
                        overflow: hidden;
                    }
                    @keyframes float-pop {
                        0% { transform: translateY(12px) scale(0.8); }
                        20% { transform: translateY(0) scale(1); }
                        100% { transform: translateY(-16px) scale(1); }
                    }
                    "#}
                </style>
            </div>
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.driver.stop();
    }
}

fn render_overlay(overlay: &Overlay) -> Html {
    let at = format!("top: {:.2}%; left: {:.2}%;", overlay.position.top, overlay.position.left);
    match &overlay.content {
        OverlayContent::Icon { glyph, color, size_px } => {
            let style = format!("{at} width: {size_px:.0}px; height: {size_px:.0}px; color: {color};");
            html! { <span key={overlay.id.0}>{ glyph.render("floating-icon", style) }</span> }
        }
        OverlayContent::Snippet { color, font_px, width_px, .. } => {
            let style = format!("{at} width: {width_px:.0}px; font-size: {font_px:.1}px; color: {color};");
            html! {
                <pre key={overlay.id.0} class="typed-snippet" style={style}>{ overlay.shown() }</pre>
            }
        }
    }
}
