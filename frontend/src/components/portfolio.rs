use yew::prelude::*;

use super::reveal::{reveal_class, section_link, use_reveal};
use crate::content::{Project, PROJECTS};

#[function_component(Portfolio)]
pub fn portfolio() -> Html {
    let section = use_node_ref();
    let revealed = use_reveal(section.clone());

    html! {
        <section id="portfolio" class="portfolio" ref={section}>
            <div class="section-inner">
                <div class={reveal_class("section-heading", revealed)}>
                    <h2>{"Our "}<span class="accent">{"Portfolio"}</span></h2>
                    <p>
                        {"Discover how we've helped businesses transform their operations \
                          with innovative technology solutions."}
                    </p>
                </div>
                <div class="projects-grid">
                    { for PROJECTS.iter().map(|project| project_card(project, revealed)) }
                </div>
                <div class={reveal_class("portfolio-cta", revealed)}>
                    <h3>{"Have a Project in Mind?"}</h3>
                    <p>{"Let's create something amazing together. Our team is ready to bring your vision to life."}</p>
                    <button onclick={section_link("contact")}>{"Start Your Project"}</button>
                </div>
            </div>
            <style>
                {r#"
                .portfolio {
                    padding: 6rem 1.5rem;
                    background: #ffffff;
                }
                .projects-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
                    gap: 2rem;
                    margin-bottom: 4rem;
                }
                .project-card {
                    border-radius: 1rem;
                    overflow: hidden;
                    background: #ffffff;
                    box-shadow: 0 8px 20px rgba(0, 0, 0, 0.08);
                    transition: transform 0.2s ease;
                }
                .project-card:hover { transform: translateY(-0.5rem); }
                .project-card img {
                    width: 100%;
                    height: 12rem;
                    object-fit: cover;
                }
                .project-body { padding: 1.5rem; }
                .project-category {
                    display: inline-block;
                    background: #f3f4f6;
                    color: #374151;
                    padding: 0.25rem 0.75rem;
                    border-radius: 9999px;
                    font-size: 0.875rem;
                    font-weight: 500;
                    margin-bottom: 0.75rem;
                }
                .project-body h3 { font-size: 1.25rem; font-weight: 700; margin-bottom: 0.75rem; }
                .project-body p { color: #4b5563; line-height: 1.6; margin-bottom: 1rem; }
                .tech-tags { display: flex; flex-wrap: wrap; gap: 0.5rem; margin-bottom: 1rem; }
                .tech-tags span {
                    background: #f3f4f6;
                    padding: 0.25rem 0.5rem;
                    border-radius: 0.25rem;
                    font-size: 0.875rem;
                }
                .project-body h4 { font-weight: 600; margin-bottom: 0.5rem; }
                .project-body ul { list-style: none; font-size: 0.875rem; color: #4b5563; }
                .project-body li::before {
                    content: "";
                    display: inline-block;
                    width: 0.375rem;
                    height: 0.375rem;
                    border-radius: 50%;
                    background: #06b6d4;
                    margin-right: 0.5rem;
                    vertical-align: middle;
                }
                .portfolio-cta {
                    text-align: center;
                    padding: 2rem;
                    border-radius: 1rem;
                    background: linear-gradient(90deg, #f9fafb, #f0fdfa);
                }
                .portfolio-cta h3 { font-size: 1.875rem; font-weight: 700; margin-bottom: 1rem; }
                .portfolio-cta p { font-size: 1.25rem; color: #4b5563; margin-bottom: 1.5rem; }
                .portfolio-cta button {
                    border: none;
                    color: #ffffff;
                    background: linear-gradient(90deg, #14b8a6, #06b6d4);
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

fn project_card(project: &Project, revealed: bool) -> Html {
    html! {
        <article class={reveal_class("project-card", revealed)}>
            <img src={project.image} alt={project.title} loading="lazy" />
            <div class="project-body">
                <span class="project-category">{ project.category }</span>
                <h3>{ project.title }</h3>
                <p>{ project.description }</p>
                <div class="tech-tags">
                    { for project.technologies.iter().map(|tech| html! { <span>{ *tech }</span> }) }
                </div>
                <h4>{"Key Results:"}</h4>
                <ul>
                    { for project.results.iter().map(|result| html! { <li>{ *result }</li> }) }
                </ul>
            </div>
        </article>
    }
}
