//! The display surface: a host document holding named containers.
//!
//! Each commit replaces a container's inner HTML wholesale. The document
//! can be serialized to a standalone HTML page for viewing.

use std::cell::RefCell;
use std::rc::Rc;

use html_escape::{encode_double_quoted_attribute, encode_text};

const STYLESHEETS: &[&str] = &[
    "https://cdn.jsdelivr.net/npm/tailwindcss@2/dist/tailwind.min.css",
    "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/5.15.4/css/all.min.css",
];

/// Shared handle to one container's content.
#[derive(Debug, Clone, Default)]
pub struct Element {
    inner: Rc<RefCell<String>>,
}

impl Element {
    pub fn set_inner_html(&self, html: &str) {
        let mut inner = self.inner.borrow_mut();
        inner.clear();
        inner.push_str(html);
    }

    pub fn inner_html(&self) -> String {
        self.inner.borrow().clone()
    }
}

#[derive(Debug, Clone, Default)]
pub struct Document {
    elements: Vec<(String, Element)>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_root(id: &str) -> Self {
        let mut document = Self::new();
        document.insert(id);
        document
    }

    /// Add an empty container, returning the existing one if the id is taken.
    pub fn insert(&mut self, id: &str) -> Element {
        if let Some(element) = self.element_by_id(id) {
            return element;
        }
        let element = Element::default();
        self.elements.push((id.to_string(), element.clone()));
        element
    }

    pub fn element_by_id(&self, id: &str) -> Option<Element> {
        self.elements
            .iter()
            .find(|(element_id, _)| element_id == id)
            .map(|(_, element)| element.clone())
    }

    /// Serialize the whole document as an HTML page.
    pub fn to_html(&self, title: &str) -> String {
        let mut html = String::from("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
        html.push_str(&format!("<title>{}</title>\n", encode_text(title)));
        for href in STYLESHEETS {
            html.push_str(&format!("<link rel=\"stylesheet\" href=\"{}\">\n", href));
        }
        html.push_str("</head>\n<body>\n");
        for (id, element) in &self.elements {
            html.push_str(&format!(
                "<div id=\"{}\">{}</div>\n",
                encode_double_quoted_attribute(id),
                element.inner_html()
            ));
        }
        html.push_str("</body>\n</html>\n");
        html
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_handles_share_content() {
        let document = Document::with_root("root");
        let a = document.element_by_id("root").unwrap();
        let b = document.element_by_id("root").unwrap();

        a.set_inner_html("<p>one</p>");
        assert_eq!(b.inner_html(), "<p>one</p>");

        b.set_inner_html("<p>two</p>");
        assert_eq!(a.inner_html(), "<p>two</p>");
    }

    #[test]
    fn test_missing_element() {
        let document = Document::with_root("root");
        assert!(document.element_by_id("app").is_none());
    }

    #[test]
    fn test_insert_is_idempotent() {
        let mut document = Document::new();
        let first = document.insert("root");
        first.set_inner_html("x");
        let second = document.insert("root");
        assert_eq!(second.inner_html(), "x");
    }

    #[test]
    fn test_to_html_wraps_containers() {
        let document = Document::with_root("root");
        document
            .element_by_id("root")
            .unwrap()
            .set_inner_html("<h1>Hi</h1>");

        let html = document.to_html("Kacker <News>");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Kacker &lt;News&gt;</title>"));
        assert!(html.contains("<div id=\"root\"><h1>Hi</h1></div>"));
        assert!(html.contains("tailwind"));
    }
}
