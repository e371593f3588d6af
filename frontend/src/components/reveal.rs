use wasm_bindgen::prelude::*;
use web_sys::{
    window, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions,
};
use yew::prelude::*;

/// Share of the element that has to be on screen before it counts as seen.
const REVEAL_THRESHOLD: f64 = 0.1;

/// Flips to `true` the first time `node` scrolls into view and stays there.
#[hook]
pub fn use_reveal(node: NodeRef) -> bool {
    let revealed = use_state(|| false);
    {
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let watch = node.cast::<Element>().and_then(|element| {
                    let on_intersect = Closure::wrap(Box::new(
                        move |entries: js_sys::Array, observer: IntersectionObserver| {
                            let seen = entries
                                .iter()
                                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                                .any(|entry| entry.is_intersecting());
                            if seen {
                                revealed.set(true);
                                observer.disconnect();
                            }
                        },
                    )
                        as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

                    let observer = IntersectionObserver::new_with_options(
                        on_intersect.as_ref().unchecked_ref(),
                        &observer_options(),
                    )
                    .ok()?;
                    observer.observe(&element);
                    Some((observer, on_intersect))
                });

                move || {
                    // The closure has to outlive the observer.
                    if let Some((observer, _on_intersect)) = watch {
                        observer.disconnect();
                    }
                }
            },
            node,
        );
    }
    *revealed
}

#[deny(deprecated)]
fn observer_options() -> IntersectionObserverInit {
    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    options
}

/// Class list for a section that fades in once revealed.
pub fn reveal_class(base: &'static str, revealed: bool) -> Classes {
    classes!(base, "reveal", revealed.then_some("revealed"))
}

/// Smooth-scrolls the element with the given id into view, if it exists.
#[deny(deprecated)]
pub fn scroll_to_section(id: &str) {
    let Some(element) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        log::debug!("scroll target #{id} not on page");
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

#[deny(deprecated)]
pub fn scroll_to_top() {
    if let Some(window) = window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

/// Onclick handler for in-page anchors.
pub fn section_link(id: &'static str) -> Callback<MouseEvent> {
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        scroll_to_section(id);
    })
}
