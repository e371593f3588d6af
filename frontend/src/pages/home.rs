use yew::prelude::*;

use crate::components::{
    about::About, blog::Blog, contact::Contact, footer::Footer, header::Header, hero::Hero,
    portfolio::Portfolio, scroll_to_top::ScrollToTop, services::Services,
    testimonials::Testimonials,
};
use crate::seo::{self, SchemaKind, Seo, SeoAuditReport, SeoMeta, StructuredData};

/// Keywords the landing page is tuned for.
const TARGET_KEYWORDS: [&str; 5] = [
    "SaaS development",
    "automation",
    "full-stack development",
    "IT solutions",
    "business automation",
];

#[function_component(Home)]
pub fn home() -> Html {
    let meta = SeoMeta::default();
    let audit_title = AttrValue::from(meta.full_title());
    let audit_description = AttrValue::from(meta.description.clone());

    html! {
        <div class="home">
            <Seo {meta} />
            <StructuredData kind={SchemaKind::Organization} data={seo::organization()} />
            <StructuredData kind={SchemaKind::WebSite} data={seo::website()} />
            <StructuredData kind={SchemaKind::Service} data={seo::service()} />
            <SeoAuditReport
                title={audit_title}
                description={audit_description}
                keywords={TARGET_KEYWORDS.to_vec()}
            />
            <Header />
            <main>
                <Hero />
                <About />
                <Services />
                <Portfolio />
                <Testimonials />
                <Blog />
                <Contact />
            </main>
            <Footer />
            <ScrollToTop />
        </div>
    }
}
