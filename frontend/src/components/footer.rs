use chrono::{Datelike, Utc};
use yew::prelude::*;
use yew_router::prelude::*;

use super::reveal::section_link;
use crate::config::{CONTACT_EMAIL, SITE_NAME, SUPPORT_EMAIL};
use crate::content::{FOOTER_SERVICES, NAV_SECTIONS};
use crate::Route;

const SOCIAL_LINKS: [(&str, &str); 3] = [
    ("GitHub", "https://github.com/codbyt"),
    ("LinkedIn", "https://www.linkedin.com/company/codbyt"),
    ("Twitter", "https://twitter.com/codbyt"),
];

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Utc::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div class="footer-brand">
                    <div class="brand">
                        <span class="brand-mark">{"</>"}</span>
                        <span class="brand-name">{ SITE_NAME }</span>
                    </div>
                    <p>
                        {"Transforming businesses through innovative IT solutions, automation, \
                          and cutting-edge technology."}
                    </p>
                    <div class="social-links">
                        { for SOCIAL_LINKS.iter().map(|(label, href)| html! {
                            <a href={*href} aria-label={*label} target="_blank" rel="noopener noreferrer">{ *label }</a>
                        }) }
                    </div>
                </div>
                <div>
                    <h3>{"Quick Links"}</h3>
                    <ul>
                        { for NAV_SECTIONS.iter().map(|section| html! {
                            <li>
                                <a href={format!("#{}", section.id)} onclick={section_link(section.id)}>
                                    { section.label }
                                </a>
                            </li>
                        }) }
                    </ul>
                </div>
                <div>
                    <h3>{"Our Services"}</h3>
                    <ul>
                        { for FOOTER_SERVICES.iter().map(|service| html! { <li>{ *service }</li> }) }
                    </ul>
                </div>
                <div>
                    <h3>{"Contact Info"}</h3>
                    <ul>
                        <li><a href={format!("mailto:{CONTACT_EMAIL}")}>{ CONTACT_EMAIL }</a></li>
                        <li><a href={format!("mailto:{SUPPORT_EMAIL}")}>{ SUPPORT_EMAIL }</a></li>
                    </ul>
                </div>
            </div>
            <div class="footer-bottom">
                <p>{ format!("© {year} {SITE_NAME}. All rights reserved. Built with passion for innovation.") }</p>
                <div class="legal-links">
                    <Link<Route> to={Route::Privacy}>{"Privacy Policy"}</Link<Route>>
                    <Link<Route> to={Route::Terms}>{"Terms of Service"}</Link<Route>>
                </div>
            </div>
            <style>
                {r#"
                .site-footer {
                    background: #111827;
                    color: #d1d5db;
                    padding: 4rem 1.5rem 2rem;
                }
                .footer-grid {
                    max-width: 1200px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
                    gap: 2.5rem;
                }
                .site-footer h3 {
                    color: #ffffff;
                    font-size: 1.125rem;
                    font-weight: 600;
                    margin-bottom: 1.5rem;
                }
                .site-footer ul { list-style: none; display: grid; gap: 0.75rem; }
                .site-footer a { color: #d1d5db; text-decoration: none; transition: color 0.3s ease; }
                .site-footer a:hover { color: #60a5fa; }
                .footer-brand .brand {
                    display: flex;
                    gap: 0.5rem;
                    font-size: 1.5rem;
                    font-weight: 700;
                    color: #ffffff;
                    margin-bottom: 1rem;
                }
                .footer-brand .brand-mark { color: #60a5fa; font-family: ui-monospace, monospace; }
                .footer-brand p { line-height: 1.6; margin-bottom: 1.5rem; }
                .social-links { display: flex; gap: 1rem; }
                .social-links a {
                    padding: 0.5rem 0.75rem;
                    border-radius: 0.5rem;
                    background: #1f2937;
                    font-size: 0.875rem;
                }
                .footer-bottom {
                    max-width: 1200px;
                    margin: 3rem auto 0;
                    padding-top: 2rem;
                    border-top: 1px solid #1f2937;
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: space-between;
                    gap: 1rem;
                    font-size: 0.875rem;
                    color: #9ca3af;
                }
                .legal-links { display: flex; gap: 1.5rem; }
                "#}
            </style>
        </footer>
    }
}
