//! Injection of rendered regions into the static page.
//!
//! The page markup is owned by the site, not by this crate: the only contract
//! is a fixed set of element ids. Injection replaces the inner HTML of the
//! element carrying each id and leaves everything else byte-for-byte intact.

use std::ops::Range;

use tracing::debug;

use crate::render::sections::RegionUpdate;

/// Applies every update to `template`. Ids missing from the page are skipped.
pub fn inject(template: &str, updates: &[RegionUpdate]) -> String {
    let mut page = template.to_string();
    for update in updates {
        match inner_range(&page, update.id) {
            Some(range) => page.replace_range(range, &update.html),
            None => debug!("Page has no injectable element with id '{}'", update.id),
        }
    }
    page
}

/// Byte range of the inner HTML of the element with `id="…"`.
fn inner_range(page: &str, id: &str) -> Option<Range<usize>> {
    let needle = format!(r#"id="{id}""#);

    let attr_at = page.match_indices(&needle).map(|(i, _)| i).find(|&i| {
        page[..i]
            .chars()
            .next_back()
            .is_some_and(char::is_whitespace)
    })?;

    let open_at = page[..attr_at].rfind('<')?;
    let tag_name: String = page[open_at + 1..]
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric() || *c == '-')
        .collect();
    if tag_name.is_empty() {
        return None;
    }

    let open_end = attr_at + page[attr_at..].find('>')?;
    if page[..open_end].ends_with('/') {
        return None;
    }
    let content_start = open_end + 1;
    let content_end = matching_close(page, content_start, &tag_name)?;
    Some(content_start..content_end)
}

/// Offset of the closing tag that balances an element opened just before
/// `from`. Nested elements of the same name are counted.
fn matching_close(page: &str, from: usize, tag_name: &str) -> Option<usize> {
    let open = format!("<{tag_name}");
    let close = format!("</{tag_name}");
    let mut depth = 1usize;
    let mut cursor = from;

    while let Some(offset) = page[cursor..].find('<') {
        let at = cursor + offset;
        let rest = &page[at..];
        if rest.starts_with(&close) && ends_name(&rest[close.len()..]) {
            depth -= 1;
            if depth == 0 {
                return Some(at);
            }
        } else if rest.starts_with(&open) && ends_name(&rest[open.len()..]) {
            depth += 1;
        }
        cursor = at + 1;
    }
    None
}

fn ends_name(rest: &str) -> bool {
    rest.chars()
        .next()
        .is_some_and(|c| c == '>' || c == '/' || c.is_whitespace())
}

/// Adds `class` to the root `<html>` element.
pub fn set_root_class(page: &str, class: &str) -> String {
    let Some(open_at) = page.find("<html") else {
        return page.to_string();
    };
    let Some(tag_len) = page[open_at..].find('>') else {
        return page.to_string();
    };
    let tag = &page[open_at..open_at + tag_len];

    let mut out = String::with_capacity(page.len() + class.len() + 9);
    match tag.find(r#"class=""#) {
        Some(class_at) => {
            let value_at = open_at + class_at + r#"class=""#.len();
            out.push_str(&page[..value_at]);
            out.push_str(class);
            out.push(' ');
            out.push_str(&page[value_at..]);
        }
        None => {
            let insert_at = open_at + tag_len;
            out.push_str(&page[..insert_at]);
            out.push_str(&format!(r#" class="{class}""#));
            out.push_str(&page[insert_at..]);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn update(id: &'static str, html: &str) -> RegionUpdate {
        RegionUpdate {
            id,
            html: html.to_string(),
        }
    }

    #[test]
    fn test_replaces_inner_html_only() {
        let page = r#"<section><div id="skills-list" class="grid"><p>Loading…</p></div></section>"#;
        let out = inject(page, &[update("skills-list", "<ul><li>Rust</li></ul>")]);
        assert_eq!(
            out,
            r#"<section><div id="skills-list" class="grid"><ul><li>Rust</li></ul></div></section>"#
        );
    }

    #[test]
    fn test_handles_nested_same_name_tags() {
        let page = r#"<div id="experience-list"><div class="item">static</div><div>more</div></div><div id="after">x</div>"#;
        let out = inject(page, &[update("experience-list", "new")]);
        assert_eq!(out, r#"<div id="experience-list">new</div><div id="after">x</div>"#);
    }

    #[test]
    fn test_unknown_id_leaves_page_untouched() {
        let page = r#"<p id="year">2020</p>"#;
        assert_eq!(inject(page, &[update("contact-email", "x")]), page);
    }

    #[test]
    fn test_ignores_lookalike_attributes() {
        let page = r#"<p data-id="year">keep</p><span id="year">2020</span>"#;
        let out = inject(page, &[update("year", "2026")]);
        assert_eq!(out, r#"<p data-id="year">keep</p><span id="year">2026</span>"#);
    }

    #[test]
    fn test_multiple_updates() {
        let page = r#"<span id="year"></span><p id="about-summary"></p><p id="about-profile">old</p>"#;
        let out = inject(
            page,
            &[
                update("year", "2026"),
                update("about-summary", "<p>Hi</p>"),
                update("about-profile", ""),
            ],
        );
        assert_eq!(
            out,
            r#"<span id="year">2026</span><p id="about-summary"><p>Hi</p></p><p id="about-profile"></p>"#
        );
    }

    #[test]
    fn test_root_class_added() {
        assert_eq!(
            set_root_class(r#"<html lang="en"><body></body></html>"#, "light"),
            r#"<html lang="en" class="light"><body></body></html>"#
        );
        assert_eq!(
            set_root_class(r#"<html class="js"><body></body></html>"#, "light"),
            r#"<html class="light js"><body></body></html>"#
        );
        assert_eq!(set_root_class("<body></body>", "light"), "<body></body>");
    }
}
