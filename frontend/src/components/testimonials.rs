use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use super::reveal::{reveal_class, use_reveal};
use crate::content::{Testimonial, TESTIMONIALS};

/// Testimonials per page.
pub const GROUP_SIZE: usize = 3;
const TRANSITION_MS: u32 = 300;

/// Looping pager over groups of testimonials. Moves are refused while a
/// transition is still running.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    groups: usize,
    transitioning: bool,
}

impl Carousel {
    pub fn new(items: usize) -> Self {
        Self {
            index: 0,
            groups: items.div_ceil(GROUP_SIZE),
            transitioning: false,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn groups(&self) -> usize {
        self.groups
    }

    pub fn is_transitioning(&self) -> bool {
        self.transitioning
    }

    pub fn next(&mut self) -> bool {
        let groups = self.groups;
        self.move_to(|index| (index + 1) % groups)
    }

    pub fn prev(&mut self) -> bool {
        let groups = self.groups;
        self.move_to(|index| (index + groups - 1) % groups)
    }

    pub fn go_to(&mut self, target: usize) -> bool {
        if target >= self.groups {
            return false;
        }
        self.move_to(|_| target)
    }

    pub fn settle(&mut self) {
        self.transitioning = false;
    }

    fn move_to(&mut self, step: impl FnOnce(usize) -> usize) -> bool {
        if self.transitioning || self.groups == 0 {
            return false;
        }
        self.index = step(self.index);
        self.transitioning = true;
        true
    }
}

pub enum CarouselAction {
    Next,
    Prev,
    GoTo(usize),
    Settle,
}

impl Reducible for Carousel {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut carousel = *self;
        let changed = match action {
            CarouselAction::Next => carousel.next(),
            CarouselAction::Prev => carousel.prev(),
            CarouselAction::GoTo(index) => carousel.go_to(index),
            CarouselAction::Settle => {
                carousel.settle();
                self.transitioning
            }
        };
        if changed {
            Rc::new(carousel)
        } else {
            self
        }
    }
}

/// Which of the five stars are filled for a rating.
pub fn star_fill(rating: u8) -> [bool; 5] {
    std::array::from_fn(|i| i < usize::from(rating))
}

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    let section = use_node_ref();
    let revealed = use_reveal(section.clone());
    let carousel = use_reducer(|| Carousel::new(TESTIMONIALS.len()));

    {
        let dispatcher = carousel.dispatcher();
        use_effect_with_deps(
            move |transitioning: &bool| {
                let timeout = transitioning
                    .then(|| Timeout::new(TRANSITION_MS, move || dispatcher.dispatch(CarouselAction::Settle)));
                move || drop(timeout)
            },
            carousel.is_transitioning(),
        );
    }

    let send = |action: fn() -> CarouselAction| {
        let dispatcher = carousel.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(action()))
    };
    let current = carousel.index();
    let busy = carousel.is_transitioning();
    let track = format!("transform: translateX(-{}%);", current * 100);

    html! {
        <section id="testimonials" class="testimonials" ref={section}>
            <div class="section-inner">
                <div class={reveal_class("section-heading", revealed)}>
                    <h2>{"Client "}<span class="accent">{"Testimonials"}</span></h2>
                    <p>{"Hear from our satisfied clients about their experience working with CodByt."}</p>
                </div>
                <div class="carousel">
                    <button class="carousel-nav prev" aria-label="Previous testimonials"
                        disabled={busy} onclick={send(|| CarouselAction::Prev)}>{"‹"}</button>
                    <div class="carousel-window">
                        <div class={classes!("carousel-track", busy.then_some("moving"))} style={track}>
                            { for TESTIMONIALS.chunks(GROUP_SIZE).map(|group| html! {
                                <div class="carousel-group">
                                    { for group.iter().map(testimonial_card) }
                                </div>
                            }) }
                        </div>
                    </div>
                    <button class="carousel-nav next" aria-label="Next testimonials"
                        disabled={busy} onclick={send(|| CarouselAction::Next)}>{"›"}</button>
                </div>
                <div class="carousel-dots">
                    { for (0..carousel.groups()).map(|group| {
                        let dispatcher = carousel.dispatcher();
                        let onclick = Callback::from(move |_: MouseEvent| dispatcher.dispatch(CarouselAction::GoTo(group)));
                        html! {
                            <button
                                class={classes!("dot", (group == current).then_some("active"))}
                                aria-label={format!("Go to testimonial group {}", group + 1)}
                                {onclick}
                            />
                        }
                    }) }
                </div>
            </div>
            <style>
                {r#"
                .testimonials {
                    padding: 6rem 1.5rem;
                    background: linear-gradient(180deg, #f0fdfa 0%, #ffffff 100%);
                }
                .carousel {
                    position: relative;
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                }
                .carousel-window {
                    overflow: hidden;
                    flex: 1;
                }
                .carousel-track {
                    display: flex;
                    transition: transform 0.3s ease-in-out, opacity 0.3s ease;
                }
                .carousel-track.moving { opacity: 0.5; }
                .carousel-group {
                    flex: 0 0 100%;
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                    gap: 1.5rem;
                    padding: 0.5rem;
                }
                .testimonial-card {
                    background: #ffffff;
                    border-radius: 1rem;
                    padding: 2rem;
                    box-shadow: 0 8px 20px rgba(0, 0, 0, 0.06);
                }
                .stars { color: #d1d5db; margin-bottom: 1rem; letter-spacing: 0.1rem; }
                .stars .filled { color: #facc15; }
                .testimonial-card blockquote {
                    color: #374151;
                    line-height: 1.6;
                    font-style: italic;
                    margin-bottom: 1.5rem;
                }
                .testimonial-author { font-weight: 700; color: #111827; }
                .testimonial-role { font-size: 0.875rem; color: #6b7280; }
                .carousel-nav {
                    width: 3rem;
                    height: 3rem;
                    border-radius: 50%;
                    border: none;
                    background: #ffffff;
                    box-shadow: 0 4px 12px rgba(0, 0, 0, 0.1);
                    font-size: 1.5rem;
                    cursor: pointer;
                }
                .carousel-nav:disabled { opacity: 0.5; cursor: default; }
                .carousel-dots {
                    display: flex;
                    justify-content: center;
                    gap: 0.5rem;
                    margin-top: 2rem;
                }
                .dot {
                    width: 0.75rem;
                    height: 0.75rem;
                    border-radius: 9999px;
                    border: none;
                    background: #d1d5db;
                    cursor: pointer;
                    transition: width 0.3s ease, background 0.3s ease;
                }
                .dot.active { width: 2rem; background: #14b8a6; }
                "#}
            </style>
        </section>
    }
}

fn testimonial_card(testimonial: &Testimonial) -> Html {
    html! {
        <div class="testimonial-card" key={testimonial.id}>
            <div class="stars" aria-label={format!("{} out of 5", testimonial.rating)}>
                { for star_fill(testimonial.rating).into_iter().map(|filled| html! {
                    <span class={classes!(filled.then_some("filled"))}>{"★"}</span>
                }) }
            </div>
            <blockquote>{ format!("\u{201c}{}\u{201d}", testimonial.content) }</blockquote>
            <div class="testimonial-author">{ testimonial.name }</div>
            <div class="testimonial-role">{ format!("{}, {}", testimonial.position, testimonial.company) }</div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_round_up() {
        assert_eq!(Carousel::new(8).groups(), 3);
        assert_eq!(Carousel::new(9).groups(), 3);
        assert_eq!(Carousel::new(1).groups(), 1);
        assert_eq!(Carousel::new(0).groups(), 0);
    }

    #[test]
    fn next_and_prev_wrap() {
        let mut carousel = Carousel::new(8);
        assert!(carousel.prev());
        assert_eq!(carousel.index(), 2);
        carousel.settle();
        assert!(carousel.next());
        assert_eq!(carousel.index(), 0);
        carousel.settle();
        assert!(carousel.next());
        assert_eq!(carousel.index(), 1);
    }

    #[test]
    fn moves_are_refused_mid_transition() {
        let mut carousel = Carousel::new(8);
        assert!(carousel.next());
        assert!(carousel.is_transitioning());
        assert!(!carousel.next());
        assert!(!carousel.prev());
        assert!(!carousel.go_to(0));
        assert_eq!(carousel.index(), 1);
        carousel.settle();
        assert!(carousel.go_to(0));
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn go_to_rejects_out_of_range() {
        let mut carousel = Carousel::new(8);
        assert!(!carousel.go_to(3));
        assert!(!carousel.is_transitioning());
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn empty_carousel_never_moves() {
        let mut carousel = Carousel::new(0);
        assert!(!carousel.next());
        assert!(!carousel.prev());
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn reducer_settles_and_keeps_identity_on_refusal() {
        let state = Rc::new(Carousel::new(8));
        let moved = state.clone().reduce(CarouselAction::Next);
        assert_eq!(moved.index(), 1);
        let refused = moved.clone().reduce(CarouselAction::Next);
        assert!(Rc::ptr_eq(&moved, &refused));
        let settled = refused.reduce(CarouselAction::Settle);
        assert!(!settled.is_transitioning());
        assert_eq!(settled.index(), 1);
    }

    #[test]
    fn stars_fill_up_to_rating() {
        assert_eq!(star_fill(5), [true; 5]);
        assert_eq!(star_fill(3), [true, true, true, false, false]);
        assert_eq!(star_fill(0), [false; 5]);
    }
}
