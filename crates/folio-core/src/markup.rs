use std::sync::OnceLock;

use regex::Regex;

/// Wraps `url` and `label` in anchor markup. External links open in a new
/// context with `noopener noreferrer` so the target gets no handle on the opener.
pub fn create_link(url: &str, label: &str) -> String {
    create_link_with(url, label, true)
}

pub fn create_link_with(url: &str, label: &str, external: bool) -> String {
    let target = if external {
        " target=\"_blank\" rel=\"noopener noreferrer\""
    } else {
        ""
    };
    format!(
        "<a href=\"{}\" class=\"terminal-link\"{}>{}</a>",
        escape(url),
        target,
        escape(label)
    )
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Text(String),
    Link { href: String, label: String },
}

static ANCHOR_RE: OnceLock<Regex> = OnceLock::new();

fn anchor_re() -> &'static Regex {
    ANCHOR_RE.get_or_init(|| {
        Regex::new(r#"<a href="([^"]*)"[^>]*>(.*?)</a>"#).expect("anchor pattern is valid")
    })
}

/// Splits one line of output into plain text and link segments.
pub fn parse_markup(line: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut last = 0;
    for caps in anchor_re().captures_iter(line) {
        let (Some(whole), Some(href), Some(label)) = (caps.get(0), caps.get(1), caps.get(2))
        else {
            continue;
        };
        if whole.start() > last {
            segments.push(Segment::Text(line[last..whole.start()].to_string()));
        }
        segments.push(Segment::Link {
            href: unescape(href.as_str()),
            label: unescape(label.as_str()),
        });
        last = whole.end();
    }
    if last < line.len() {
        segments.push(Segment::Text(line[last..].to_string()));
    }
    segments
}

/// Renders markup as plain text, `label (href)` for every link.
pub fn to_plain_text(text: &str) -> String {
    text.split('\n')
        .map(|line| {
            parse_markup(line)
                .into_iter()
                .map(|segment| match segment {
                    Segment::Text(text) => text,
                    Segment::Link { href, label } => format!("{label} ({href})"),
                })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

fn unescape(value: &str) -> String {
    value
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn external_link_carries_tabnabbing_protection() {
        assert_eq!(
            create_link("https://example.com/", "[Live Demo]"),
            "<a href=\"https://example.com/\" class=\"terminal-link\" target=\"_blank\" rel=\"noopener noreferrer\">[Live Demo]</a>"
        );
    }

    #[test]
    fn internal_link_has_no_target() {
        assert_eq!(
            create_link_with("/about", "about", false),
            "<a href=\"/about\" class=\"terminal-link\">about</a>"
        );
    }

    #[test]
    fn link_attributes_are_escaped() {
        let link = create_link("https://x.dev/?a=\"1\"&b=<2>", "<b>hi</b>");
        assert!(link.contains("href=\"https://x.dev/?a=&quot;1&quot;&amp;b=&lt;2&gt;\""));
        assert!(link.contains(">&lt;b&gt;hi&lt;/b&gt;</a>"));
        assert!(!link.contains("<b>"));
    }

    #[test]
    fn parse_markup_splits_text_and_links() {
        let line = format!(
            "Links:       {}  {}",
            create_link("https://demo.dev/", "[Live Demo]"),
            create_link("https://github.com/x", "[GitHub]")
        );
        assert_eq!(
            parse_markup(&line),
            vec![
                Segment::Text("Links:       ".to_string()),
                Segment::Link {
                    href: "https://demo.dev/".to_string(),
                    label: "[Live Demo]".to_string(),
                },
                Segment::Text("  ".to_string()),
                Segment::Link {
                    href: "https://github.com/x".to_string(),
                    label: "[GitHub]".to_string(),
                },
            ]
        );
    }

    #[test]
    fn escaped_values_come_back_unescaped() {
        let line = create_link("https://x.dev/?q=a&b", "a \"quoted\" label");
        assert_eq!(
            parse_markup(&line),
            vec![Segment::Link {
                href: "https://x.dev/?q=a&b".to_string(),
                label: "a \"quoted\" label".to_string(),
            }]
        );
    }

    #[test]
    fn plain_text_rendering_keeps_lines() {
        let text = format!("first\nmail: {}", create_link("mailto:a@b.c", "a@b.c"));
        assert_eq!(to_plain_text(&text), "first\nmail: a@b.c (mailto:a@b.c)");
    }
}
