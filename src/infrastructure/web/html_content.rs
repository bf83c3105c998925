use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use crate::infrastructure::text_processing::collapse_whitespace;

/// Main-content candidates, most specific first.
const CONTENT_SELECTORS: &[&str] = &[
    "article",
    "main",
    "[role='main']",
    ".post-content",
    ".entry-content",
    ".article-content",
    ".content",
    "#content",
    "#main",
];

static NON_CONTENT: LazyLock<Option<Selector>> =
    LazyLock::new(|| Selector::parse("script, style, header, footer, nav, aside").ok());
static PARAGRAPH: LazyLock<Option<Selector>> = LazyLock::new(|| Selector::parse("p").ok());
static BODY: LazyLock<Option<Selector>> = LazyLock::new(|| Selector::parse("body").ok());
static CONTENT_REGIONS: LazyLock<Vec<Selector>> = LazyLock::new(|| {
    CONTENT_SELECTORS
        .iter()
        .filter_map(|s| Selector::parse(s).ok())
        .collect()
});

/// Extracts the readable text of an HTML page.
///
/// Scripts, styles and page chrome (header, footer, nav, aside) are removed
/// first. The first element matching [`CONTENT_SELECTORS`] is used as the
/// content region, falling back to `<body>`. Inside the region, paragraph
/// text is preferred when any `<p>` exists. The result is
/// whitespace-normalized and may be empty.
pub fn extract_main_text(html: &str) -> String {
    let mut document = Html::parse_document(html);
    strip_non_content(&mut document);

    let text = match content_region(&document) {
        Some(region) => region_text(region),
        None => join_text(document.root_element()),
    };

    collapse_whitespace(&text)
}

fn strip_non_content(document: &mut Html) {
    let Some(non_content) = NON_CONTENT.as_ref() else {
        return;
    };
    let ids: Vec<_> = document.select(non_content).map(|el| el.id()).collect();
    for id in ids {
        if let Some(mut node) = document.tree.get_mut(id) {
            node.detach();
        }
    }
}

fn content_region(document: &Html) -> Option<ElementRef<'_>> {
    CONTENT_REGIONS
        .iter()
        .find_map(|selector| document.select(selector).next())
        .or_else(|| document.select(BODY.as_ref()?).next())
}

fn region_text(region: ElementRef<'_>) -> String {
    let paragraphs: Vec<String> = match PARAGRAPH.as_ref() {
        Some(paragraph) => region.select(paragraph).map(join_text).collect(),
        None => Vec::new(),
    };

    if paragraphs.is_empty() {
        join_text(region)
    } else {
        paragraphs.join("\n")
    }
}

fn join_text(element: ElementRef<'_>) -> String {
    element.text().collect::<Vec<_>>().join(" ")
}
