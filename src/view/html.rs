//! HTML fragments for the blog section and the project cards.

use std::fmt::Write;

use crate::board::{Board, CardCounters, Project};
use crate::stats::Counter;

use super::{
    EMPTY_MESSAGE, FAILED_MESSAGE, FALLBACK_LINK_TEXT, FeedPanel, LOADING_MESSAGE, PostCard,
    VIEW_ALL_TEXT,
};

const EXTERNAL: &str = r#"target="_blank" rel="noopener noreferrer""#;

/// Text shown in a counter that has not been written.
const UNLOADED: &str = "-";

/// Escapes text for use in element content and quoted attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// The blog section: a header linking to the full blog, then the panel.
pub fn render_feed_html(panel: &FeedPanel, blog_url: &str) -> String {
    let mut html = String::from("<section id=\"blog\">\n");
    let _ = writeln!(
        html,
        "  <div class=\"blog-header\"><h2>Blog</h2><a href=\"{}\" {}>{}</a></div>",
        escape(blog_url),
        EXTERNAL,
        VIEW_ALL_TEXT
    );
    html.push_str("<div id=\"blog-posts\">\n");
    match panel {
        FeedPanel::Loading => {
            let _ = writeln!(
                html,
                "  <div class=\"blog-loading\"><p>{}</p></div>",
                LOADING_MESSAGE
            );
        }
        FeedPanel::Empty => {
            let _ = writeln!(
                html,
                "  <div class=\"blog-empty\"><p>{}</p></div>",
                EMPTY_MESSAGE
            );
        }
        FeedPanel::Failed { blog_url } => {
            let _ = writeln!(
                html,
                "  <div class=\"blog-error\">\n    <p>{}</p>\n    <a href=\"{}\" {}>{}</a>\n  </div>",
                FAILED_MESSAGE,
                escape(blog_url),
                EXTERNAL,
                FALLBACK_LINK_TEXT
            );
        }
        FeedPanel::Posts(cards) => {
            for card in cards {
                render_post_card(&mut html, card);
            }
        }
    }
    html.push_str("</div>\n</section>\n");
    html
}

fn render_post_card(html: &mut String, card: &PostCard) {
    let _ = writeln!(html, "  <article class=\"post-card\">");
    let _ = writeln!(
        html,
        "    <h3 class=\"post-card-title\"><a href=\"{}\" {}>{}</a></h3>",
        escape(&card.url),
        EXTERNAL,
        escape(&card.title)
    );
    let _ = writeln!(
        html,
        "    <div class=\"post-card-meta\"><span>{}</span><span>•</span><span>{}</span></div>",
        escape(&card.date_label),
        escape(&card.reading_label)
    );
    let _ = writeln!(
        html,
        "    <p class=\"post-card-excerpt\">{}</p>",
        escape(&card.excerpt)
    );
    html.push_str("    <div class=\"post-card-tags\">");
    for tag in &card.tags.shown {
        let _ = write!(html, "<span class=\"tag\">{}</span>", escape(tag));
    }
    if let Some(more) = card.tags.overflow_label() {
        let _ = write!(html, "<span class=\"tag-more\">{}</span>", more);
    }
    html.push_str("</div>\n  </article>\n");
}

pub fn render_board_html(board: &Board) -> String {
    let counters = board.snapshot();
    let mut html = String::from("<div id=\"projects\">\n");
    for (project, card_counters) in board.projects().iter().zip(counters.iter()) {
        render_project_card(&mut html, project, card_counters);
    }
    html.push_str("</div>\n");
    html
}

fn render_project_card(html: &mut String, project: &Project, counters: &CardCounters) {
    match project.repo_id() {
        Some(repo) => {
            let _ = writeln!(
                html,
                "  <div class=\"project-card\" data-github-owner=\"{}\" data-github-repo=\"{}\">",
                escape(&repo.owner),
                escape(&repo.repo)
            );
        }
        None => html.push_str("  <div class=\"project-card\">\n"),
    }
    let _ = writeln!(html, "    <h3>{}</h3>", escape(&project.name));
    if !project.description.is_empty() {
        let _ = writeln!(html, "    <p>{}</p>", escape(&project.description));
    }
    if !project.tags.is_empty() {
        html.push_str("    <div class=\"project-tags\">");
        for tag in &project.tags {
            let _ = write!(html, "<span class=\"tag\">{}</span>", escape(tag));
        }
        html.push_str("</div>\n");
    }
    if project.repo_id().is_some() {
        html.push_str("    <div class=\"project-stats\">");
        for counter in [Counter::Stars, Counter::Downloads] {
            match counters.get(counter) {
                Some(text) => {
                    let _ = write!(
                        html,
                        "<span data-stat=\"{}\" data-loaded=\"true\">{}</span>",
                        counter,
                        escape(text)
                    );
                }
                None => {
                    let _ = write!(html, "<span data-stat=\"{}\">{}</span>", counter, UNLOADED);
                }
            }
        }
        html.push_str("</div>\n");
    }
    if let Some(url) = &project.github_url {
        let _ = writeln!(html, "    <a href=\"{}\" {}>Code</a>", escape(url), EXTERNAL);
    }
    if let Some(url) = &project.deploy_url {
        let _ = writeln!(
            html,
            "    <a href=\"{}\" {}>Live Demo</a>",
            escape(url),
            EXTERNAL
        );
    }
    html.push_str("  </div>\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::TagChips;
    use crate::stats::{RepoId, StatsTarget};

    const BLOG: &str = "https://blog.example.com";

    fn card(title: &str, tags: usize) -> PostCard {
        let tags: Vec<String> = (0..tags).map(|i| format!("t{}", i)).collect();
        PostCard {
            title: title.into(),
            url: "https://blog.example.com/post/".into(),
            date_label: "Mar 5, 2024".into(),
            reading_label: "5 min read".into(),
            excerpt: "Excerpt".into(),
            tags: TagChips::from_tags(&tags, 3),
        }
    }

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<script>alert("x&y")</script>'"#),
            "&lt;script&gt;alert(&quot;x&amp;y&quot;)&lt;/script&gt;&#39;"
        );
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn test_feed_posts_html() {
        let html = render_feed_html(
            &FeedPanel::Posts(vec![card("A <b>", 6), card("B", 1)]),
            BLOG,
        );

        assert_eq!(html.matches("<article class=\"post-card\">").count(), 2);
        assert!(html.contains("A &lt;b&gt;"));
        assert!(html.contains("<span>Mar 5, 2024</span>"));
        assert!(html.contains("<span>5 min read</span>"));
        assert_eq!(html.matches("<span class=\"tag\">").count(), 4);
        assert!(html.contains("<span class=\"tag-more\">+3</span>"));
        assert!(html.contains(EXTERNAL));
    }

    #[test]
    fn test_feed_states_html() {
        let loading = render_feed_html(&FeedPanel::Loading, BLOG);
        assert!(loading.contains(LOADING_MESSAGE));

        let empty = render_feed_html(&FeedPanel::Empty, BLOG);
        assert!(empty.contains(EMPTY_MESSAGE));
        assert!(!empty.contains(FAILED_MESSAGE));

        let failed = render_feed_html(
            &FeedPanel::Failed {
                blog_url: BLOG.into(),
            },
            BLOG,
        );
        assert!(failed.contains(FAILED_MESSAGE));
        assert!(failed.contains("href=\"https://blog.example.com\""));
        assert!(failed.contains(FALLBACK_LINK_TEXT));
        assert!(!failed.contains("post-card"));
    }

    #[test]
    fn test_feed_header_links_to_blog_in_every_state() {
        let panels = [
            FeedPanel::Loading,
            FeedPanel::Empty,
            FeedPanel::Posts(vec![card("A", 1)]),
            FeedPanel::Failed {
                blog_url: BLOG.into(),
            },
        ];
        for panel in &panels {
            let html = render_feed_html(panel, "https://blog.example.com/?a=1&b=2");
            assert!(html.starts_with("<section id=\"blog\">"));
            assert!(html.contains(&format!(
                "<a href=\"https://blog.example.com/?a=1&amp;b=2\" {}>{}</a>",
                EXTERNAL, VIEW_ALL_TEXT
            )));
        }
    }

    #[test]
    fn test_board_html_counters() {
        let plain = Project {
            id: "p".into(),
            name: "Static site".into(),
            deploy_url: Some("https://example.com".into()),
            ..Default::default()
        };
        let board = Board::new(vec![Project::for_repo("t", &RepoId::new("me", "tool")), plain]);
        board.write_counter(0, Counter::Stars, "1.2K");

        let html = render_board_html(&board);

        assert!(html.contains("data-github-owner=\"me\" data-github-repo=\"tool\""));
        assert!(html.contains("<span data-stat=\"stars\" data-loaded=\"true\">1.2K</span>"));
        assert!(html.contains("<span data-stat=\"downloads\">-</span>"));
        assert!(html.contains("href=\"https://github.com/me/tool\""));
        assert!(html.contains("Live Demo"));
        // Only the card with a repository gets counters
        assert_eq!(html.matches("project-stats").count(), 1);
    }
}
