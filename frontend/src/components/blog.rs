use chrono::NaiveDate;
use yew::prelude::*;

use super::reveal::{reveal_class, use_reveal};
use crate::content::{BlogPost, BLOG_POSTS};

pub const ALL_CATEGORIES: &str = "All";

/// "All" followed by each distinct category, in first-seen order.
pub fn categories(posts: &[BlogPost]) -> Vec<&'static str> {
    let mut seen = vec![ALL_CATEGORIES];
    for post in posts {
        if !seen.contains(&post.category) {
            seen.push(post.category);
        }
    }
    seen
}

pub fn filter_posts<'a>(posts: &'a [BlogPost], category: &str) -> Vec<&'a BlogPost> {
    posts
        .iter()
        .filter(|post| category == ALL_CATEGORIES || post.category == category)
        .collect()
}

/// `2024-06-10` as `June 10, 2024`. Anything unparseable is shown as is.
pub fn format_date(iso: &str) -> String {
    NaiveDate::parse_from_str(iso, "%Y-%m-%d")
        .map(|date| date.format("%B %-d, %Y").to_string())
        .unwrap_or_else(|_| iso.to_string())
}

#[function_component(Blog)]
pub fn blog() -> Html {
    let section = use_node_ref();
    let revealed = use_reveal(section.clone());
    let active = use_state(|| ALL_CATEGORIES);

    let posts = filter_posts(&BLOG_POSTS, &active);
    let (featured, rest) = match posts.split_first() {
        Some((first, rest)) => (Some(*first), rest),
        None => (None, &[][..]),
    };

    html! {
        <section id="blog" class="blog" ref={section}>
            <div class="section-inner">
                <div class={reveal_class("section-heading", revealed)}>
                    <h2>{"Latest "}<span class="accent">{"Insights"}</span></h2>
                    <p>
                        {"Stay updated with the latest trends, best practices, and insights \
                          from the world of technology and business automation."}
                    </p>
                </div>
                <div class="category-tabs">
                    { for categories(&BLOG_POSTS).into_iter().map(|category| {
                        let active_handle = active.clone();
                        let onclick = Callback::from(move |_: MouseEvent| active_handle.set(category));
                        html! {
                            <button class={classes!("category-tab", (*active == category).then_some("active"))} {onclick}>
                                { category }
                            </button>
                        }
                    }) }
                </div>
                if let Some(post) = featured {
                    <article class={reveal_class("featured-post", revealed)}>
                        <img src={post.image} alt={post.title} />
                        <div class="featured-body">
                            <span class="post-category">{ post.category }</span>
                            <h3>{ post.title }</h3>
                            <p>{ post.excerpt }</p>
                            <div class="post-meta">
                                <span>{ post.author }</span>
                                <span>{ format_date(post.date) }</span>
                                <span>{ post.read_time }</span>
                            </div>
                            <a href={post.url} target="_blank" rel="noopener noreferrer" class="read-more">
                                {"Read Full Article →"}
                            </a>
                        </div>
                    </article>
                } else {
                    <p class="no-posts">{"No articles in this category yet."}</p>
                }
                <div class="posts-grid">
                    { for rest.iter().map(|post| post_card(post, revealed)) }
                </div>
            </div>
            <style>
                {r#"
                .blog {
                    padding: 6rem 1.5rem;
                    background: #ffffff;
                }
                .category-tabs {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 1rem;
                    margin-bottom: 3rem;
                }
                .category-tab {
                    padding: 0.5rem 1.5rem;
                    border-radius: 9999px;
                    border: none;
                    background: #f3f4f6;
                    color: #374151;
                    font-weight: 500;
                    cursor: pointer;
                    transition: background 0.2s ease, color 0.2s ease;
                }
                .category-tab.active {
                    color: #ffffff;
                    background: linear-gradient(90deg, #14b8a6, #06b6d4);
                }
                .featured-post {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
                    border-radius: 1rem;
                    overflow: hidden;
                    box-shadow: 0 12px 28px rgba(0, 0, 0, 0.08);
                    margin-bottom: 3rem;
                }
                .featured-post img { height: 100%; min-height: 16rem; object-fit: cover; }
                .featured-body { padding: 2rem; }
                .featured-body h3 { font-size: 1.75rem; font-weight: 700; margin: 1rem 0; }
                .post-category {
                    display: inline-block;
                    background: #ccfbf1;
                    color: #0f766e;
                    padding: 0.25rem 0.75rem;
                    border-radius: 9999px;
                    font-size: 0.875rem;
                }
                .post-meta {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1rem;
                    font-size: 0.875rem;
                    color: #6b7280;
                    margin: 1rem 0;
                }
                .read-more { color: #0d9488; font-weight: 600; text-decoration: none; }
                .posts-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                    gap: 2rem;
                }
                .post-card {
                    border-radius: 1rem;
                    overflow: hidden;
                    box-shadow: 0 8px 20px rgba(0, 0, 0, 0.06);
                }
                .post-card img { height: 12rem; width: 100%; object-fit: cover; }
                .post-card-body { padding: 1.5rem; }
                .post-card-body h3 { font-size: 1.125rem; font-weight: 700; margin: 0.75rem 0; }
                .post-card-body p { color: #4b5563; font-size: 0.95rem; line-height: 1.6; }
                .no-posts { text-align: center; color: #6b7280; margin-bottom: 3rem; }
                "#}
            </style>
        </section>
    }
}

fn post_card(post: &BlogPost, revealed: bool) -> Html {
    html! {
        <article class={reveal_class("post-card", revealed)} key={post.url}>
            <img src={post.image} alt={post.title} loading="lazy" />
            <div class="post-card-body">
                <span class="post-category">{ post.category }</span>
                <h3>{ post.title }</h3>
                <p>{ post.excerpt }</p>
                <div class="post-meta">
                    <span>{ post.author }</span>
                    <span>{ format_date(post.date) }</span>
                    <span>{ post.read_time }</span>
                </div>
                <a href={post.url} target="_blank" rel="noopener noreferrer" class="read-more">
                    {"Read More →"}
                </a>
            </div>
        </article>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_start_with_all_and_stay_distinct() {
        assert_eq!(
            categories(&BLOG_POSTS),
            vec!["All", "AI & Machine Learning", "Productivity", "Cloud & Edge", "Security"]
        );
        assert_eq!(categories(&[]), vec!["All"]);
    }

    #[test]
    fn all_keeps_every_post_in_order() {
        let posts = filter_posts(&BLOG_POSTS, ALL_CATEGORIES);
        assert_eq!(posts.len(), BLOG_POSTS.len());
        assert_eq!(posts[0].date, "2024-06-10");
    }

    #[test]
    fn filter_matches_category_exactly() {
        let posts = filter_posts(&BLOG_POSTS, "Security");
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].author, "Michael Lee");
        assert!(filter_posts(&BLOG_POSTS, "security").is_empty());
    }

    #[test]
    fn dates_read_naturally() {
        assert_eq!(format_date("2024-06-10"), "June 10, 2024");
        assert_eq!(format_date("2024-04-30"), "April 30, 2024");
        assert_eq!(format_date("2024-05-05"), "May 5, 2024");
        assert_eq!(format_date("soon"), "soon");
    }
}
