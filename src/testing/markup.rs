//! logos-based markup scanner for assertions on rendered output.
//!
//! Only as much HTML as the widgets emit: start/end tags with quoted
//! attributes, void elements, text, and `<!...>` declarations. Elements are
//! matched by a tag stack; an end tag closes everything opened after its
//! matching start tag.

use std::collections::{BTreeSet, HashMap};
use std::ops::Range;

use logos::Logos;

use crate::dom::WidgetId;

/// Top-level markup token.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum MarkupToken {
    /// `<!DOCTYPE html>`, `<!-- ... -->`.
    #[regex(r"<![^>]*>")]
    Declaration,

    /// Start tag including attributes: `<p id='id_1' class='x'>`.
    #[regex(r#"<[a-zA-Z][a-zA-Z0-9-]*([^>'"]|'[^']*'|"[^"]*")*>"#)]
    StartTag,

    /// End tag: `</p>`.
    #[regex(r"</[a-zA-Z][a-zA-Z0-9-]*[ \t\n\r]*>")]
    EndTag,

    /// Character data between tags.
    #[regex(r"[^<]+")]
    Text,
}

/// Token inside a start tag.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\n\r\f/]+")]
enum AttrToken {
    #[regex(r#"[^ \t\n\r\f/='"<>]+"#)]
    Word,

    #[token("=")]
    Eq,

    #[regex(r"'[^']*'")]
    SingleQuoted,

    #[regex(r#""[^"]*""#)]
    DoubleQuoted,
}

const VOID_ELEMENTS: &[&str] = &["br", "hr", "img", "input", "link", "meta"];

/// One element found in markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub attributes: HashMap<String, String>,
    /// Byte range of the whole element, start tag through end tag.
    pub span: Range<usize>,
}

impl Element {
    /// The element's id as a widget id, if it is one.
    pub fn widget_id(&self) -> Option<WidgetId> {
        self.id.as_deref().and_then(WidgetId::parse)
    }
}

/// Every element in `markup`, in document order.
pub fn elements(markup: &str) -> Vec<Element> {
    let mut found: Vec<Element> = Vec::new();
    let mut open: Vec<usize> = Vec::new();

    for (token, span) in MarkupToken::lexer(markup).spanned() {
        match token {
            Ok(MarkupToken::StartTag) => {
                let source = &markup[span.clone()];
                let (tag, attributes) = parse_start_tag(source);
                let closed = source.ends_with("/>") || VOID_ELEMENTS.contains(&tag.as_str());
                let classes = attributes
                    .get("class")
                    .map(|c| c.split_whitespace().map(str::to_owned).collect())
                    .unwrap_or_default();
                found.push(Element {
                    id: attributes.get("id").cloned(),
                    tag,
                    classes,
                    attributes,
                    span,
                });
                if !closed {
                    open.push(found.len() - 1);
                }
            }
            Ok(MarkupToken::EndTag) => {
                let name = markup[span.clone()]
                    .trim_start_matches("</")
                    .trim_end_matches('>')
                    .trim()
                    .to_ascii_lowercase();
                if !open.iter().any(|&i| found[i].tag == name) {
                    continue;
                }
                while let Some(index) = open.pop() {
                    found[index].span.end = span.end;
                    if found[index].tag == name {
                        break;
                    }
                }
            }
            _ => {}
        }
    }
    found
}

/// Widget ids of every element carrying one, in document order.
pub fn element_ids(markup: &str) -> Vec<WidgetId> {
    elements(markup)
        .iter()
        .filter_map(Element::widget_id)
        .collect()
}

/// Id of the first element in `markup`.
pub fn root_id(markup: &str) -> Option<WidgetId> {
    elements(markup).first().and_then(Element::widget_id)
}

/// Byte range of the element with id `id`.
pub fn find_element(markup: &str, id: WidgetId) -> Option<Range<usize>> {
    let wanted = id.to_string();
    elements(markup)
        .into_iter()
        .find(|e| e.id.as_deref() == Some(wanted.as_str()))
        .map(|e| e.span)
}

/// All text content, unescaped and concatenated.
pub fn text_content(markup: &str) -> String {
    MarkupToken::lexer(markup)
        .spanned()
        .filter(|(token, _)| *token == Ok(MarkupToken::Text))
        .map(|(_, span)| unescape(&markup[span]))
        .collect()
}

/// Every class name used in `markup`.
pub fn class_names(markup: &str) -> BTreeSet<String> {
    elements(markup)
        .into_iter()
        .flat_map(|e| e.classes)
        .collect()
}

fn parse_start_tag(source: &str) -> (String, HashMap<String, String>) {
    let inner = source
        .trim_start_matches('<')
        .trim_end_matches('>')
        .trim_end_matches('/');
    let mut lexer = AttrToken::lexer(inner);
    let mut tag = String::new();
    let mut attributes = HashMap::new();
    let mut pending: Option<String> = None;
    let mut expecting_value = false;

    while let Some(token) = lexer.next() {
        let slice = lexer.slice();
        match token {
            Ok(AttrToken::Word) if tag.is_empty() => tag = slice.to_ascii_lowercase(),
            Ok(AttrToken::Eq) => expecting_value = pending.is_some(),
            Ok(AttrToken::Word | AttrToken::SingleQuoted | AttrToken::DoubleQuoted)
                if expecting_value =>
            {
                let value = match token {
                    Ok(AttrToken::Word) => slice,
                    _ => &slice[1..slice.len() - 1],
                };
                if let Some(name) = pending.take() {
                    attributes.insert(name, unescape(value));
                }
                expecting_value = false;
            }
            Ok(AttrToken::Word) => {
                if let Some(name) = pending.replace(slice.to_ascii_lowercase()) {
                    attributes.insert(name, String::new());
                }
            }
            _ => {}
        }
    }
    if let Some(name) = pending {
        attributes.insert(name, String::new());
    }
    (tag, attributes)
}

fn unescape(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&#39;", "'")
        .replace("&quot;", "\"")
        .replace("&amp;", "&")
}
