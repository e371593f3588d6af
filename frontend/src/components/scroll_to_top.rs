use yew::prelude::*;
use yew_hooks::use_window_scroll;

use super::reveal::scroll_to_top;

const SHOW_AFTER: f64 = 300.0;

#[function_component(ScrollToTop)]
pub fn scroll_to_top_button() -> Html {
    let (_, scroll_y) = use_window_scroll();

    if scroll_y <= SHOW_AFTER {
        return html! {};
    }

    html! {
        <>
            <button class="scroll-to-top" aria-label="Scroll to top" onclick={Callback::from(|_: MouseEvent| scroll_to_top())}>
                {"↑"}
            </button>
            <style>
                {r#"
                .scroll-to-top {
                    position: fixed;
                    right: 1.5rem;
                    bottom: 1.5rem;
                    z-index: 50;
                    width: 3rem;
                    height: 3rem;
                    border: none;
                    border-radius: 9999px;
                    color: #ffffff;
                    font-size: 1.25rem;
                    cursor: pointer;
                    background: linear-gradient(90deg, #14b8a6, #06b6d4);
                    box-shadow: 0 8px 20px rgba(20, 184, 166, 0.3);
                    transition: transform 0.3s ease;
                }
                .scroll-to-top:hover { transform: translateY(-4px) scale(1.1); }
                "#}
            </style>
        </>
    }
}
