//! Title and description from captured HTML.

use dom_query::{Document, Selection};

use crate::error::SiteError;

/// Display metadata recovered from a captured page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
}

/// Extracts the document title and the `<meta name="description">` content.
///
/// The title is the text of the first `<title>` element with ASCII whitespace
/// stripped and collapsed; a page without one has an empty title. The
/// description is the `content` attribute of the first description meta inside
/// `<head>`, returned verbatim. A page without one there fails with
/// [`SiteError::MissingDescription`], even if the body carries such a meta.
pub fn extract_page(html: &str) -> Result<PageMetadata, SiteError> {
    let doc = Document::from(html);

    let title = doc
        .select("title")
        .nodes()
        .first()
        .map(|node| collapse_whitespace(&Selection::from(*node).text()))
        .unwrap_or_default();

    let description = first_attr(&doc, r#"head meta[name="description"]"#, "content")
        .ok_or(SiteError::MissingDescription)?;

    Ok(PageMetadata { title, description })
}

/// `Some(value)` for the first match of `selector`; an element without the
/// attribute yields an empty value.
fn first_attr(doc: &Document, selector: &str, attr: &str) -> Option<String> {
    let node = *doc.select(selector).nodes().first()?;
    let elem = Selection::from(node);
    Some(elem.attr(attr).map(|v| v.to_string()).unwrap_or_default())
}

fn collapse_whitespace(text: &str) -> String {
    text.split_ascii_whitespace().collect::<Vec<_>>().join(" ")
}
