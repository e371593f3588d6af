use gloo_timers::callback::{Interval, Timeout};
use web_sys::HtmlElement;
use yew::prelude::*;

use super::reveal::{reveal_class, use_reveal};
use crate::content::{SKILLS, STATS, VALUES};

const COUNTER_DELAY_MS: u32 = 500;
const COUNTER_TICK_MS: u32 = 30;
/// Ticks a counter needs to reach its target.
pub const COUNTER_STEPS: u32 = 50;
const MARQUEE_TICK_MS: u32 = 20;

/// Value shown after `tick` steps of `target / COUNTER_STEPS` each.
pub fn counter_value(target: u32, tick: u32) -> u32 {
    let reached = u64::from(target) * u64::from(tick) / u64::from(COUNTER_STEPS);
    reached.min(u64::from(target)) as u32
}

/// Wait before the counters take their next step, or `None` once they are done
/// or still off screen. The first step waits out the entrance delay.
pub fn counter_delay(revealed: bool, tick: u32) -> Option<u32> {
    match (revealed, tick) {
        (false, _) => None,
        (true, tick) if tick >= COUNTER_STEPS => None,
        (true, 0) => Some(COUNTER_DELAY_MS),
        (true, _) => Some(COUNTER_TICK_MS),
    }
}

/// Next scroll offset of the skills strip; jumps back to the start at the end.
pub fn marquee_next(scroll_left: f64, visible_width: f64, content_width: f64) -> f64 {
    if scroll_left + visible_width >= content_width - 1.0 {
        0.0
    } else {
        scroll_left + 1.0
    }
}

#[function_component(About)]
pub fn about() -> Html {
    let section = use_node_ref();
    let revealed = use_reveal(section.clone());
    let tick = use_state(|| 0u32);

    {
        let current = *tick;
        let tick = tick.clone();
        use_effect_with_deps(
            move |&(revealed, current): &(bool, u32)| {
                let timeout = counter_delay(revealed, current)
                    .map(|delay| Timeout::new(delay, move || tick.set(current + 1)));
                move || drop(timeout)
            },
            (revealed, current),
        );
    }

    html! {
        <section id="about" class="about" ref={section}>
            <div class="section-inner">
                <div class={reveal_class("section-heading", revealed)}>
                    <h2>{"About "}<span class="accent">{"CodByt"}</span></h2>
                    <p>
                        {"We are a team of passionate developers, designers, and automation experts \
                          dedicated to transforming businesses through innovative technology solutions."}
                    </p>
                </div>

                <div class="stats-grid">
                    { for STATS.iter().map(|stat| html! {
                        <div class={reveal_class("stat-card", revealed)}>
                            <div class="stat-value">
                                { format!("{}{}", counter_value(stat.target, *tick), stat.suffix) }
                            </div>
                            <div class="stat-label">{ stat.label }</div>
                        </div>
                    }) }
                </div>

                <div class="values-grid">
                    { for VALUES.iter().map(|value| html! {
                        <div class={reveal_class("value-card", revealed)}>
                            <h3>{ value.title }</h3>
                            <p>{ value.description }</p>
                        </div>
                    }) }
                </div>

                <SkillsMarquee />
            </div>
            <style>
                {r#"
                .about {
                    padding: 6rem 1.5rem;
                    background: #ffffff;
                }
                .stats-grid, .values-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                    gap: 2rem;
                    margin-bottom: 5rem;
                }
                .stat-card, .value-card {
                    background: #eff6ff;
                    border: 1px solid #dbeafe;
                    border-radius: 1rem;
                    padding: 2rem;
                }
                .stat-card { text-align: center; }
                .stat-value {
                    font-size: 1.875rem;
                    font-weight: 700;
                    color: #111827;
                    margin-bottom: 0.5rem;
                }
                .stat-label { color: #4b5563; }
                .value-card h3 {
                    font-size: 1.25rem;
                    font-weight: 700;
                    color: #111827;
                    margin-bottom: 1rem;
                }
                .value-card p { color: #4b5563; line-height: 1.6; }
                "#}
            </style>
        </section>
    }
}

#[function_component(SkillsMarquee)]
fn skills_marquee() -> Html {
    let strip = use_node_ref();
    let paused = use_state(|| false);

    {
        let strip = strip.clone();
        use_effect_with_deps(
            move |paused: &bool| {
                let interval = (!*paused).then(|| {
                    Interval::new(MARQUEE_TICK_MS, move || {
                        if let Some(el) = strip.cast::<HtmlElement>() {
                            let next = marquee_next(
                                f64::from(el.scroll_left()),
                                f64::from(el.offset_width()),
                                f64::from(el.scroll_width()),
                            );
                            el.set_scroll_left(next as i32);
                        }
                    })
                });
                move || drop(interval)
            },
            *paused,
        );
    }

    html! {
        <div class="skills">
            <h3>{"Our Expertise"}</h3>
            <div
                class="skills-strip"
                ref={strip}
                onmouseenter={pause_on(&paused, true)}
                onmouseleave={pause_on(&paused, false)}
                onfocusin={pause_on(&paused, true)}
                onfocusout={pause_on(&paused, false)}
            >
                { for SKILLS.iter().map(|skill| html! {
                    <div class="skill-chip" tabindex="0">
                        { skill.glyph.render("skill-icon", format!("color: {};", skill.color)) }
                        <span>{ skill.name }</span>
                    </div>
                }) }
            </div>
            <style>
                {r#"
                .skills h3 {
                    text-align: center;
                    font-size: 1.5rem;
                    font-weight: 700;
                    color: #111827;
                    margin-bottom: 2rem;
                }
                .skills-strip {
                    display: flex;
                    gap: 2rem;
                    overflow-x: auto;
                    white-space: nowrap;
                    scrollbar-width: none;
                    padding-bottom: 0.5rem;
                }
                .skills-strip::-webkit-scrollbar { display: none; }
                .skill-chip {
                    flex-shrink: 0;
                    display: inline-flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 0.75rem;
                    padding: 2.5rem 3rem;
                    border-radius: 1rem;
                    background: linear-gradient(90deg, #dbeafe, #f3e8ff);
                    font-weight: 600;
                    font-size: 1.25rem;
                    color: #1f2937;
                }
                .skill-icon { width: 2.5rem; height: 2.5rem; }
                "#}
            </style>
        </div>
    }
}

fn pause_on<E: 'static>(paused: &UseStateHandle<bool>, value: bool) -> Callback<E> {
    let paused = paused.clone();
    Callback::from(move |_: E| paused.set(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_starts_at_zero_and_lands_on_target() {
        for target in [150, 200, 99] {
            assert_eq!(counter_value(target, 0), 0);
            assert_eq!(counter_value(target, COUNTER_STEPS), target);
            assert_eq!(counter_value(target, COUNTER_STEPS + 10), target);
        }
    }

    #[test]
    fn counter_is_floored() {
        // 99 / 50 = 1.98 per tick
        assert_eq!(counter_value(99, 1), 1);
        assert_eq!(counter_value(99, 2), 3);
        assert_eq!(counter_value(150, 1), 3);
        assert_eq!(counter_value(200, 25), 100);
    }

    #[test]
    fn counter_never_decreases() {
        let values: Vec<u32> = (0..=COUNTER_STEPS).map(|t| counter_value(99, t)).collect();
        assert!(values.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn counters_wait_for_reveal_then_tick() {
        assert_eq!(counter_delay(false, 0), None);
        assert_eq!(counter_delay(false, 7), None);
        assert_eq!(counter_delay(true, 0), Some(500));
        assert_eq!(counter_delay(true, 1), Some(30));
        assert_eq!(counter_delay(true, COUNTER_STEPS - 1), Some(30));
        assert_eq!(counter_delay(true, COUNTER_STEPS), None);
    }

    #[test]
    fn counter_schedule_reaches_targets_in_expected_time() {
        let mut tick = 0;
        let mut elapsed = 0;
        while let Some(delay) = counter_delay(true, tick) {
            elapsed += delay;
            tick += 1;
        }
        assert_eq!(tick, COUNTER_STEPS);
        assert_eq!(elapsed, 500 + 30 * (COUNTER_STEPS - 1));
        for stat in &STATS {
            assert_eq!(counter_value(stat.target, tick), stat.target);
        }
    }

    #[test]
    fn marquee_advances_then_wraps() {
        assert_eq!(marquee_next(0.0, 400.0, 1200.0), 1.0);
        assert_eq!(marquee_next(798.0, 400.0, 1200.0), 799.0);
        assert_eq!(marquee_next(799.0, 400.0, 1200.0), 0.0);
        // Strip narrower than its box never moves.
        assert_eq!(marquee_next(0.0, 400.0, 300.0), 0.0);
    }
}
