use yew::prelude::*;

use super::reveal::{reveal_class, section_link, use_reveal};
use crate::content::{Service, SERVICES};

#[function_component(Services)]
pub fn services() -> Html {
    let section = use_node_ref();
    let revealed = use_reveal(section.clone());

    html! {
        <section id="services" class="services" ref={section}>
            <div class="section-inner">
                <div class={reveal_class("section-heading", revealed)}>
                    <h2>{"Our "}<span class="accent">{"Services"}</span></h2>
                    <p>
                        {"Comprehensive IT solutions designed to accelerate your business growth \
                          and digital transformation journey."}
                    </p>
                </div>
                <div class="services-grid">
                    { for SERVICES.iter().enumerate().map(|(i, service)| service_card(service, i, revealed)) }
                </div>
                <div class={reveal_class("services-cta", revealed)}>
                    <h3>{"Ready to Transform Your Business?"}</h3>
                    <p>{"Let's discuss how our solutions can drive your success forward."}</p>
                    <button onclick={section_link("contact")}>{"Get Started Today"}</button>
                </div>
            </div>
            <style>
                {r#"
                .services {
                    padding: 6rem 1.5rem;
                    background: linear-gradient(180deg, #f9fafb 0%, #eff6ff 100%);
                }
                .services-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
                    gap: 2rem;
                    margin-bottom: 4rem;
                }
                .service-card {
                    background: #ffffff;
                    border-radius: 1rem;
                    padding: 2rem;
                    box-shadow: 0 8px 20px rgba(0, 0, 0, 0.06);
                    transition: transform 0.3s ease, box-shadow 0.3s ease;
                }
                .service-card:hover {
                    transform: translateY(-0.5rem);
                    box-shadow: 0 16px 32px rgba(37, 99, 235, 0.12);
                }
                .service-badge {
                    width: 4rem;
                    height: 4rem;
                    border-radius: 0.75rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    margin-bottom: 1.5rem;
                    color: #ffffff;
                }
                .service-icon { width: 2rem; height: 2rem; }
                .service-card h3 {
                    font-size: 1.25rem;
                    font-weight: 700;
                    margin-bottom: 1rem;
                }
                .service-card p {
                    color: #4b5563;
                    line-height: 1.6;
                    margin-bottom: 1.5rem;
                }
                .service-card ul {
                    list-style: none;
                    display: grid;
                    gap: 0.5rem;
                }
                .service-card li::before {
                    content: "•";
                    color: #2563eb;
                    margin-right: 0.5rem;
                }
                .services-cta {
                    text-align: center;
                    padding: 3rem 2rem;
                    border-radius: 1rem;
                    color: #ffffff;
                    background: linear-gradient(90deg, #2563eb, #9333ea);
                }
                .services-cta h3 { font-size: 1.875rem; font-weight: 700; margin-bottom: 1rem; }
                .services-cta p { font-size: 1.25rem; color: #dbeafe; margin-bottom: 1.5rem; }
                .services-cta button {
                    background: #ffffff;
                    color: #2563eb;
                    border: none;
                    padding: 0.75rem 2rem;
                    border-radius: 0.5rem;
                    font-weight: 600;
                    cursor: pointer;
                }
                "#}
            </style>
        </section>
    }
}

fn service_card(service: &Service, index: usize, revealed: bool) -> Html {
    let (from, to) = service.gradient;
    let badge = format!("background: linear-gradient(135deg, {from}, {to});");
    let delay = format!("transition-delay: {}ms;", index * 100);
    html! {
        <div class={reveal_class("service-card", revealed)} style={delay}>
            <div class="service-badge" style={badge}>
                { service.glyph.render("service-icon", String::new()) }
            </div>
            <h3>{ service.title }</h3>
            <p>{ service.description }</p>
            <ul>
                { for service.features.iter().map(|feature| html! { <li>{ *feature }</li> }) }
            </ul>
        </div>
    }
}
