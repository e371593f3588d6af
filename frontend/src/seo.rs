use gloo_timers::callback::Timeout;
use serde_json::{json, Map, Value};
use web_sys::{window, Document};
use yew::prelude::*;

use crate::config::{self, SITE_NAME};

/// Marks every head element this module owns, so re-applying replaces them.
const MANAGED_ATTR: &str = "data-seo";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageKind {
    Website,
    Article,
}

impl PageKind {
    fn as_str(&self) -> &'static str {
        match self {
            PageKind::Website => "website",
            PageKind::Article => "article",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SeoMeta {
    pub title: String,
    pub description: String,
    pub keywords: String,
    pub image: String,
    pub url: String,
    pub kind: PageKind,
    pub author: String,
    pub published: Option<String>,
    pub modified: Option<String>,
    pub section: Option<String>,
    pub tags: Vec<String>,
}

impl Default for SeoMeta {
    fn default() -> Self {
        Self {
            title: "CodByt - IT SaaS & Automation Agency | Transform Your Business".to_string(),
            description: "CodByt specializes in SaaS solutions, automation workflows, and full-stack development. Transform your business with cutting-edge IT solutions.".to_string(),
            keywords: "SaaS development, automation, full-stack development, web development, IT solutions, business automation, React, Node.js, TypeScript".to_string(),
            image: format!("{}/og-image.jpg", config::site_url()),
            url: config::site_url().to_string(),
            kind: PageKind::Website,
            author: "CodByt Team".to_string(),
            published: None,
            modified: None,
            section: None,
            tags: Vec::new(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HeadTag {
    Name { name: &'static str, content: String },
    Property { property: &'static str, content: String },
    HttpEquiv { header: &'static str, content: String },
    Link { rel: &'static str, href: String, cross_origin: bool },
}

impl SeoMeta {
    pub fn titled(title: &str, description: &str, path: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            url: format!("{}{}", config::site_url(), path),
            ..Self::default()
        }
    }

    pub fn full_title(&self) -> String {
        if self.title.contains(SITE_NAME) {
            self.title.clone()
        } else {
            format!("{} | {}", self.title, SITE_NAME)
        }
    }

    pub fn full_keywords(&self) -> String {
        self.keywords
            .split(", ")
            .filter(|k| !k.is_empty())
            .map(str::to_string)
            .chain(self.tags.iter().cloned())
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn tags(&self) -> Vec<HeadTag> {
        let title = self.full_title();
        let name = |name, content: &str| HeadTag::Name { name, content: content.to_string() };
        let prop = |property, content: &str| HeadTag::Property { property, content: content.to_string() };
        let link = |rel, href: &str, cross_origin| HeadTag::Link { rel, href: href.to_string(), cross_origin };

        let mut tags = vec![
            name("description", &self.description),
            name("keywords", &self.full_keywords()),
            name("author", &self.author),
            name("robots", "index, follow"),
            link("canonical", &self.url, false),
            prop("og:type", self.kind.as_str()),
            prop("og:url", &self.url),
            prop("og:title", &title),
            prop("og:description", &self.description),
            prop("og:image", &self.image),
            prop("og:site_name", SITE_NAME),
            prop("og:locale", "en_US"),
        ];
        if !self.author.is_empty() {
            tags.push(prop("og:author", &self.author));
        }
        if let Some(published) = &self.published {
            tags.push(prop("article:published_time", published));
        }
        if let Some(modified) = &self.modified {
            tags.push(prop("article:modified_time", modified));
        }
        if let Some(section) = &self.section {
            tags.push(prop("article:section", section));
        }
        tags.extend(self.tags.iter().map(|tag| prop("article:tag", tag)));

        tags.extend([
            prop("twitter:card", "summary_large_image"),
            prop("twitter:url", &self.url),
            prop("twitter:title", &title),
            prop("twitter:description", &self.description),
            prop("twitter:image", &self.image),
            prop("twitter:site", "@codbyt"),
            prop("twitter:creator", "@codbyt"),
            name("language", "en"),
            name("revisit-after", "7 days"),
            name("distribution", "global"),
            name("rating", "general"),
            name("theme-color", "#0d9488"),
            name("msapplication-TileColor", "#0d9488"),
            name("apple-mobile-web-app-capable", "yes"),
            name("apple-mobile-web-app-status-bar-style", "default"),
            name("apple-mobile-web-app-title", SITE_NAME),
            name("format-detection", "telephone=no"),
            HeadTag::HttpEquiv { header: "X-Content-Type-Options", content: "nosniff".to_string() },
            HeadTag::HttpEquiv { header: "Referrer-Policy", content: "strict-origin-when-cross-origin".to_string() },
            link("sitemap", "/sitemap.xml", false),
        ]);

        for origin in ["https://fonts.googleapis.com", "https://fonts.gstatic.com", "https://images.pexels.com", "https://api.web3forms.com"] {
            tags.push(link("preconnect", origin, true));
            tags.push(link("dns-prefetch", origin.trim_start_matches("https:"), false));
        }
        tags
    }
}

fn managed_element(document: &Document, tag: &str) -> Option<web_sys::Element> {
    let element = document.create_element(tag).ok()?;
    element.set_attribute(MANAGED_ATTR, "").ok()?;
    Some(element)
}

fn clear_managed(document: &Document, selector: &str) {
    if let Ok(nodes) = document.query_selector_all(selector) {
        for i in 0..nodes.length() {
            if let Some(node) = nodes.item(i) {
                if let Some(parent) = node.parent_node() {
                    let _ = parent.remove_child(&node);
                }
            }
        }
    }
}

/// Writes the title and replaces every managed head tag.
pub fn apply(meta: &SeoMeta) {
    let Some(document) = window().and_then(|w| w.document()) else { return };
    let Some(head) = document.head() else { return };

    document.set_title(&meta.full_title());
    clear_managed(&document, &format!("meta[{MANAGED_ATTR}], link[{MANAGED_ATTR}]"));

    for tag in meta.tags() {
        let element = match &tag {
            HeadTag::Link { .. } => managed_element(&document, "link"),
            _ => managed_element(&document, "meta"),
        };
        let Some(element) = element else { continue };
        let _ = match &tag {
            HeadTag::Name { name, content } => element
                .set_attribute("name", name)
                .and_then(|_| element.set_attribute("content", content)),
            HeadTag::Property { property, content } => element
                .set_attribute("property", property)
                .and_then(|_| element.set_attribute("content", content)),
            HeadTag::HttpEquiv { header, content } => element
                .set_attribute("http-equiv", header)
                .and_then(|_| element.set_attribute("content", content)),
            HeadTag::Link { rel, href, cross_origin } => element
                .set_attribute("rel", rel)
                .and_then(|_| element.set_attribute("href", href))
                .and_then(|_| if *cross_origin { element.set_attribute("crossorigin", "anonymous") } else { Ok(()) }),
        };
        let _ = head.append_child(&element);
    }
    log::debug!("seo: applied head tags for {}", meta.url);
}

#[derive(Properties, PartialEq)]
pub struct SeoProps {
    #[prop_or_default]
    pub meta: SeoMeta,
}

#[function_component(Seo)]
pub fn seo(props: &SeoProps) -> Html {
    use_effect_with_deps(
        move |meta: &SeoMeta| {
            apply(meta);
            || ()
        },
        props.meta.clone(),
    );
    html! {}
}

// JSON-LD

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SchemaKind {
    Organization,
    WebSite,
    Service,
    Article,
}

impl SchemaKind {
    fn as_str(&self) -> &'static str {
        match self {
            SchemaKind::Organization => "Organization",
            SchemaKind::WebSite => "WebSite",
            SchemaKind::Service => "Service",
            SchemaKind::Article => "Article",
        }
    }
}

/// `@context` and `@type` first, then the caller's fields.
pub fn structured_data(kind: SchemaKind, data: &Value) -> Value {
    let mut object = Map::new();
    object.insert("@context".to_string(), json!("https://schema.org"));
    object.insert("@type".to_string(), json!(kind.as_str()));
    if let Value::Object(fields) = data {
        for (key, value) in fields {
            object.insert(key.clone(), value.clone());
        }
    }
    Value::Object(object)
}

pub fn organization() -> Value {
    json!({
        "name": SITE_NAME,
        "description": "IT SaaS and Automation Agency specializing in full-stack development and business solutions",
        "url": config::site_url(),
        "logo": format!("{}/logo.png", config::site_url()),
        "contactPoint": {
            "@type": "ContactPoint",
            "contactType": "Customer Service",
            "email": config::CONTACT_EMAIL
        },
        "sameAs": [
            "https://linkedin.com/company/codbyt",
            "https://twitter.com/codbyt",
            "https://github.com/codbyt"
        ]
    })
}

pub fn website() -> Value {
    json!({
        "name": SITE_NAME,
        "description": "Leading IT SaaS & Automation Agency",
        "url": config::site_url(),
        "potentialAction": {
            "@type": "SearchAction",
            "target": format!("{}/search?q={{search_term_string}}", config::site_url()),
            "query-input": "required name=search_term_string"
        }
    })
}

pub fn service() -> Value {
    json!({
        "name": "SaaS Development Services",
        "description": "Custom SaaS solutions, automation workflows, and full-stack development",
        "provider": { "@type": "Organization", "name": SITE_NAME },
        "areaServed": "Worldwide",
        "serviceType": "Software Development",
        "offers": { "@type": "Offer", "price": "Contact for quote", "priceCurrency": "USD" }
    })
}

pub fn apply_structured_data(kind: SchemaKind, data: &Value) {
    let Some(document) = window().and_then(|w| w.document()) else { return };
    let Some(head) = document.head() else { return };
    let id = format!("ld-{}", kind.as_str().to_lowercase());

    let script = match document.get_element_by_id(&id) {
        Some(existing) => existing,
        None => {
            let Ok(script) = document.create_element("script") else { return };
            let _ = script.set_attribute("type", "application/ld+json");
            script.set_id(&id);
            let _ = head.append_child(&script);
            script
        }
    };
    script.set_text_content(Some(&structured_data(kind, data).to_string()));
}

#[derive(Properties, PartialEq)]
pub struct StructuredDataProps {
    pub kind: SchemaKind,
    pub data: Value,
}

#[function_component(StructuredData)]
pub fn structured_data_tag(props: &StructuredDataProps) -> Html {
    use_effect_with_deps(
        move |(kind, data): &(SchemaKind, Value)| {
            apply_structured_data(*kind, data);
            || ()
        },
        (props.kind, props.data.clone()),
    );
    html! {}
}

// Development audit

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DocumentStats {
    pub h1: u32,
    pub h2: u32,
    pub h3: u32,
    pub images: u32,
    pub images_with_alt: u32,
    pub internal_links: u32,
    pub external_links: u32,
}

impl DocumentStats {
    pub fn collect() -> Option<Self> {
        let document = window()?.document()?;
        let count = |selector: &str| document.query_selector_all(selector).map(|n| n.length()).unwrap_or(0);
        Some(Self {
            h1: count("h1"),
            h2: count("h2"),
            h3: count("h3"),
            images: count("img"),
            images_with_alt: count("img[alt]"),
            internal_links: count("a[href^=\"/\"]"),
            external_links: count("a[href^=\"http\"]"),
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SeoAudit {
    pub title_len: usize,
    pub title_optimal: bool,
    pub title_has_brand: bool,
    pub description_len: usize,
    pub description_optimal: bool,
    pub description_has_keywords: bool,
    pub keyword_count: usize,
    pub keywords_optimal: bool,
}

pub fn audit(title: &str, description: &str, keywords: &[&str]) -> SeoAudit {
    let title_len = title.chars().count();
    let description_len = description.chars().count();
    let lowered = description.to_lowercase();
    SeoAudit {
        title_len,
        title_optimal: (30..=60).contains(&title_len),
        title_has_brand: title.contains(SITE_NAME),
        description_len,
        description_optimal: (120..=160).contains(&description_len),
        description_has_keywords: keywords.iter().any(|k| lowered.contains(&k.to_lowercase())),
        keyword_count: keywords.len(),
        keywords_optimal: (3..=8).contains(&keywords.len()),
    }
}

impl SeoAudit {
    pub fn recommendations(&self, stats: &DocumentStats) -> Vec<&'static str> {
        let mut out = Vec::new();
        if !self.title_optimal {
            out.push("Title should be between 30-60 characters");
        }
        if !self.title_has_brand {
            out.push("Title should mention the brand");
        }
        if !self.description_optimal {
            out.push("Description should be between 120-160 characters");
        }
        if !self.description_has_keywords {
            out.push("Description should include target keywords");
        }
        if !self.keywords_optimal {
            out.push("Use between 3 and 8 target keywords");
        }
        if stats.h1 > 1 {
            out.push("Should have only one H1 tag per page");
        }
        if stats.images > 0 && stats.images_with_alt != stats.images {
            out.push("All images should have alt attributes");
        }
        out
    }
}

#[derive(Properties, PartialEq)]
pub struct SeoAuditProps {
    pub title: AttrValue,
    pub description: AttrValue,
    pub keywords: Vec<&'static str>,
}

/// Logs an SEO report a second after mount. Renders nothing; inert in release builds.
#[function_component(SeoAuditReport)]
pub fn seo_audit_report(props: &SeoAuditProps) -> Html {
    use_effect_with_deps(
        move |(title, description, keywords): &(AttrValue, AttrValue, Vec<&'static str>)| {
            let report = audit(title, description, keywords);
            let timeout = cfg!(debug_assertions).then(|| {
                Timeout::new(1_000, move || {
                    let stats = DocumentStats::collect().unwrap_or_default();
                    gloo_console::log!("SEO Analysis:", format!("{report:?}"), format!("{stats:?}"));
                    let recommendations = report.recommendations(&stats);
                    if !recommendations.is_empty() {
                        gloo_console::log!("SEO Recommendations:", recommendations.join("; "));
                    }
                })
            });
            move || drop(timeout)
        },
        (props.title.clone(), props.description.clone(), props.keywords.clone()),
    );
    html! {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_gets_brand_suffix_once() {
        let meta = SeoMeta::titled("Privacy Policy", "", "/privacy");
        assert_eq!(meta.full_title(), "Privacy Policy | CodByt");
        assert_eq!(SeoMeta::default().full_title(), SeoMeta::default().title);
    }

    #[test]
    fn keywords_absorb_tags() {
        let meta = SeoMeta {
            keywords: "SaaS, automation".to_string(),
            tags: vec!["n8n".to_string()],
            ..SeoMeta::default()
        };
        assert_eq!(meta.full_keywords(), "SaaS, automation, n8n");
    }

    #[test]
    fn article_metas_only_when_present() {
        let website = SeoMeta::default().tags();
        assert!(!website.iter().any(|t| matches!(t, HeadTag::Property { property, .. } if property.starts_with("article:"))));

        let article = SeoMeta {
            kind: PageKind::Article,
            published: Some("2024-06-10".to_string()),
            section: Some("AI".to_string()),
            tags: vec!["gpt".to_string(), "vision".to_string()],
            ..SeoMeta::default()
        }
        .tags();
        let article_tags = article
            .iter()
            .filter(|t| matches!(t, HeadTag::Property { property: "article:tag", .. }))
            .count();
        assert_eq!(article_tags, 2);
        assert!(article.contains(&HeadTag::Property { property: "og:type", content: "article".to_string() }));
        assert!(article.contains(&HeadTag::Property {
            property: "article:published_time",
            content: "2024-06-10".to_string()
        }));
    }

    #[test]
    fn canonical_and_preconnect_links() {
        let meta = SeoMeta::titled("Terms of Service", "", "/terms");
        let tags = meta.tags();
        assert!(tags.contains(&HeadTag::Link { rel: "canonical", href: meta.url.clone(), cross_origin: false }));
        assert!(tags.contains(&HeadTag::Link {
            rel: "dns-prefetch",
            href: "//api.web3forms.com".to_string(),
            cross_origin: false
        }));
        assert!(tags.contains(&HeadTag::Link {
            rel: "preconnect",
            href: "https://api.web3forms.com".to_string(),
            cross_origin: true
        }));
    }

    #[test]
    fn structured_data_puts_schema_keys_first() {
        let value = structured_data(SchemaKind::Organization, &organization());
        assert_eq!(value["@context"], "https://schema.org");
        assert_eq!(value["@type"], "Organization");
        assert_eq!(value["name"], SITE_NAME);
        assert_eq!(value["contactPoint"]["@type"], "ContactPoint");
        let text = value.to_string();
        assert!(text.starts_with("{\"@context\""));
    }

    #[test]
    fn structured_data_ignores_non_objects() {
        let value = structured_data(SchemaKind::Service, &json!(["not", "an", "object"]));
        assert_eq!(value.as_object().map(|o| o.len()), Some(2));
    }

    #[test]
    fn audit_flags_short_copy() {
        let report = audit("Home", "Too short.", &["SaaS"]);
        assert!(!report.title_optimal);
        assert!(!report.title_has_brand);
        assert!(!report.description_optimal);
        assert!(!report.keywords_optimal);
        let stats = DocumentStats { h1: 2, images: 3, images_with_alt: 2, ..DocumentStats::default() };
        let recs = report.recommendations(&stats);
        assert!(recs.contains(&"Should have only one H1 tag per page"));
        assert!(recs.contains(&"All images should have alt attributes"));
        assert!(recs.contains(&"Description should include target keywords"));
    }

    #[test]
    fn audit_accepts_tuned_copy() {
        let title = "CodByt - SaaS & Automation Agency for Growing Teams";
        let description = "CodByt builds SaaS platforms, automation workflows and full-stack applications that help growing businesses move faster with less manual work.";
        let report = audit(title, description, &["SaaS", "automation", "full-stack"]);
        assert!(report.title_optimal, "title is {} chars", report.title_len);
        assert!(report.description_optimal, "description is {} chars", report.description_len);
        assert!(report.description_has_keywords);
        assert!(report.keywords_optimal);
        assert!(report.recommendations(&DocumentStats::default()).is_empty());
    }
}
