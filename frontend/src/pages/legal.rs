use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::{CONTACT_EMAIL, SITE_NAME};
use crate::seo::{Seo, SeoMeta};
use crate::Route;

#[derive(Properties, PartialEq)]
struct LegalPageProps {
    title: &'static str,
    description: &'static str,
    path: &'static str,
    children: Children,
}

/// Shared frame of the static legal pages: head tags, brand bar and a way home.
#[function_component(LegalPage)]
fn legal_page(props: &LegalPageProps) -> Html {
    let navigator = use_navigator();

    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    let go_home = Callback::from(move |_: MouseEvent| match &navigator {
        Some(navigator) => navigator.push(&Route::Home),
        None => log::warn!("legal: no router navigator, cannot leave page"),
    });
    let meta = SeoMeta::titled(props.title, props.description, props.path);

    html! {
        <div class="legal-page">
            <Seo {meta} />
            <div class="legal-bar">
                <span class="legal-brand">{ SITE_NAME }</span>
                <button class="back-home" onclick={go_home}>{"Back to Home"}</button>
            </div>
            <div class="legal-content">
                <h1>{ props.title }</h1>
                { for props.children.iter() }
            </div>
            <style>
                {r#"
                .legal-page {
                    min-height: 100vh;
                    padding: 2rem 1rem 4rem;
                    background: linear-gradient(135deg, #f8fafc, #eff6ff, #faf5ff);
                }
                .legal-bar {
                    max-width: 48rem;
                    margin: 0 auto 2rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .legal-brand {
                    font-size: 1.5rem;
                    font-weight: 700;
                    background: linear-gradient(90deg, #2563eb, #9333ea);
                    -webkit-background-clip: text;
                    background-clip: text;
                    color: transparent;
                }
                .back-home {
                    padding: 0.5rem 1rem;
                    border: none;
                    border-radius: 0.5rem;
                    background: #2563eb;
                    color: #ffffff;
                    font-weight: 600;
                    cursor: pointer;
                }
                .back-home:hover { background: #1d4ed8; }
                .legal-content {
                    max-width: 48rem;
                    margin: 0 auto;
                    padding: 2rem;
                    border-radius: 1rem;
                    background: #ffffff;
                    color: #1f2937;
                    line-height: 1.7;
                    box-shadow: 0 10px 25px rgba(0, 0, 0, 0.08);
                }
                .legal-content h1 {
                    font-size: 2.25rem;
                    text-align: center;
                    margin-bottom: 2rem;
                }
                .legal-content h2 {
                    font-size: 1.5rem;
                    font-weight: 600;
                    margin: 2rem 0 0.5rem;
                }
                .legal-content p { margin-bottom: 1rem; }
                .legal-content ul { margin: 0 0 1rem 1.5rem; }
                .legal-content a { color: #2563eb; }
                "#}
            </style>
        </div>
    }
}

#[function_component(PrivacyPolicy)]
pub fn privacy_policy() -> Html {
    html! {
        <LegalPage
            title="Privacy Policy"
            description="How CodByt collects, uses and protects the information you share with us through this website."
            path="/privacy"
        >
            <p>
                {"This website is operated by CodByt to present our software development, automation and \
                  consulting services. The privacy of our visitors matters to us, and this policy explains \
                  what information we collect and how we use it."}
            </p>
            <p>
                {"If you have questions about this policy, contact us at "}
                <a href={format!("mailto:{CONTACT_EMAIL}")}>{ CONTACT_EMAIL }</a>
                {"."}
            </p>

            <h2>{"Updates to this Policy"}</h2>
            <p>
                {"When this policy changes, the revised version is posted on this page. Material changes \
                  are announced on the home page before they take effect."}
            </p>

            <h2>{"Information We Collect"}</h2>
            <p>{"Every request to this website is recorded in a server log with the following data:"}</p>
            <ul>
                <li>{"Browser and device information"}</li>
                <li>{"The referring website"}</li>
                <li>{"Operating system"}</li>
                <li>{"Country of access"}</li>
                <li>{"Pages requested, with date and time"}</li>
                <li>{"IP address of the requesting device"}</li>
            </ul>
            <p>
                {"When you use the contact form we receive the name, email address, company and message \
                  you enter. We use them only to answer your inquiry."}
            </p>

            <h2>{"Our Commitment"}</h2>
            <ul>
                <li>{"We limit collection to what we need to answer you and run our business."}</li>
                <li>{"Only staff who need your information to serve you can access it."}</li>
                <li>{"We keep commercially reasonable security standards to protect it."}</li>
                <li>{"We correct inaccurate information promptly on request."}</li>
            </ul>

            <h2>{"Third-Party Services"}</h2>
            <p>
                {"Contact form submissions are delivered through a third-party form service, which \
                  forwards them to our inbox and does not use them for any other purpose."}
            </p>

            <h2>{"Cookies"}</h2>
            <p>
                {"This website does not set tracking cookies. Your browser may keep technical storage \
                  needed to load the site."}
            </p>
        </LegalPage>
    }
}

#[function_component(TermsOfService)]
pub fn terms_of_service() -> Html {
    html! {
        <LegalPage
            title="Terms and Conditions"
            description="The terms that govern your use of the CodByt website and the information published on it."
            path="/terms"
        >
            <p>
                {"These Terms and Conditions govern the use of this website and the information and \
                  services offered on it. By using the site you agree to be bound by them and by all \
                  applicable laws and regulations."}
            </p>
            <p>
                {"We may change these terms at any time, effective when posted. If you violate them, we \
                  may end your use of the site and take appropriate legal action."}
            </p>

            <h2>{"Copyright and Trademark Notice"}</h2>
            <p>
                {"All material on this site is copyrighted by CodByt unless stated otherwise. It may not \
                  be reproduced, distributed or transferred in any form without our prior written \
                  agreement."}
            </p>
            <p>
                <strong>{"Permitted Use: "}</strong>
                {"You may view and keep a copy of pages for your own personal use. Any other \
                  reproduction, publication or modification needs our written permission and must \
                  credit CodByt."}
            </p>

            <h2>{"General Legal Notice and Liability Disclaimer"}</h2>
            <p>
                {"The site and its information are provided \u{201c}as is.\u{201d} We make every effort to \
                  keep them accurate, but we do not guarantee their completeness or timeliness. Rely on \
                  them only after an independent review by qualified experts."}
            </p>
            <p>
                {"Links to external sites are provided for convenience. CodByt does not control or endorse \
                  those sites and is not responsible for their content."}
            </p>
            <p>
                {"CodByt is not liable for damages of any kind arising from the use of, or reliance on, \
                  information published here or on linked sites."}
            </p>

            <h2>{"Severability"}</h2>
            <p>
                {"If any provision of these terms is invalid or unenforceable, the remaining provisions \
                  stay in effect as if the invalid provision had been omitted."}
            </p>
        </LegalPage>
    }
}
