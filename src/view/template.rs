use crate::app::{KackerError, Result};
use crate::dom::{Document, Element};

const TOKEN_OPEN: &str = "{{__";
const TOKEN_CLOSE: &str = "__}}";

/// Placeholder token for `name`, e.g. `{{__title__}}`.
pub fn placeholder(name: &str) -> String {
    format!("{}{}{}", TOKEN_OPEN, name, TOKEN_CLOSE)
}

/// Names of the placeholder tokens in `html`, in order of appearance.
fn placeholder_names(html: &str) -> Vec<String> {
    let mut names = Vec::new();
    let mut rest = html;
    while let Some(start) = rest.find(TOKEN_OPEN) {
        let after = &rest[start + TOKEN_OPEN.len()..];
        match after.find(TOKEN_CLOSE) {
            Some(end) => {
                names.push(after[..end].to_string());
                rest = &after[end + TOKEN_CLOSE.len()..];
            }
            None => break,
        }
    }
    names
}

/// Buffered rendering against an immutable master template.
///
/// A render cycle accumulates fragments, resolves placeholders in the
/// working copy, then commits. Committing resets the working copy so the
/// same instance can render again.
#[derive(Debug)]
pub struct Template {
    container: Element,
    master: String,
    working: String,
    fragments: Vec<String>,
    /// Master placeholders not yet set in this cycle.
    pending: Vec<String>,
}

impl Template {
    /// Bind a master template to the container `container_id`.
    ///
    /// Fails with [`KackerError::ContainerNotFound`] if the document has no
    /// such container.
    pub fn new(document: &Document, container_id: &str, master: impl Into<String>) -> Result<Self> {
        let container = document
            .element_by_id(container_id)
            .ok_or_else(|| KackerError::ContainerNotFound(container_id.to_string()))?;
        let master = master.into();

        Ok(Self {
            container,
            working: master.clone(),
            pending: placeholder_names(&master),
            master,
            fragments: Vec::new(),
        })
    }

    pub fn add_fragment(&mut self, html: impl Into<String>) {
        self.fragments.push(html.into());
    }

    /// Join the accumulated fragments in append order and clear them.
    pub fn consume_fragments(&mut self) -> String {
        std::mem::take(&mut self.fragments).concat()
    }

    /// Replace the first `{{__name__}}` in the working copy. Missing
    /// placeholders are ignored.
    pub fn set_placeholder(&mut self, name: &str, value: &str) {
        let token = placeholder(name);
        match self.working.find(&token) {
            Some(start) => {
                self.working.replace_range(start..start + token.len(), value);
                if let Some(index) = self.pending.iter().position(|pending| pending == name) {
                    self.pending.remove(index);
                }
            }
            None => tracing::debug!("Placeholder {} not present in template", token),
        }
    }

    /// Master placeholders not yet set since the last commit.
    ///
    /// Tokens that arrive inside inserted values are not counted.
    pub fn unresolved_placeholders(&self) -> Vec<&str> {
        self.pending.iter().map(String::as_str).collect()
    }

    /// Write the working copy to the container and reset it to the master.
    pub fn commit(&mut self) {
        let unresolved = self.unresolved_placeholders();
        if !unresolved.is_empty() {
            tracing::warn!("Committing with unresolved placeholders: {:?}", unresolved);
        }
        self.container.set_inner_html(&self.working);
        self.working.clone_from(&self.master);
        self.pending = placeholder_names(&self.master);
    }

    pub fn working_copy(&self) -> &str {
        &self.working
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MASTER: &str = "<h1>{{__title__}}</h1><ul>{{__items__}}</ul><a>{{__next__}}</a>";

    fn template() -> (Document, Template) {
        let document = Document::with_root("root");
        let template = Template::new(&document, "root", MASTER).unwrap();
        (document, template)
    }

    fn root_html(document: &Document) -> String {
        document.element_by_id("root").unwrap().inner_html()
    }

    #[test]
    fn test_missing_container_fails() {
        let document = Document::with_root("root");
        let err = Template::new(&document, "app", MASTER).unwrap_err();
        assert!(matches!(err, KackerError::ContainerNotFound(id) if id == "app"));
    }

    #[test]
    fn test_consume_fragments_joins_in_order_and_clears() {
        let (_document, mut template) = template();
        template.add_fragment("<li>a</li>");
        template.add_fragment("<li>b</li>");

        assert_eq!(template.consume_fragments(), "<li>a</li><li>b</li>");
        assert_eq!(template.consume_fragments(), "");
    }

    #[test]
    fn test_set_placeholder_replaces_first_occurrence_only() {
        let document = Document::with_root("root");
        let mut template =
            Template::new(&document, "root", "{{__x__}}-{{__x__}}").unwrap();
        template.set_placeholder("x", "1");
        assert_eq!(template.working_copy(), "1-{{__x__}}");
        template.set_placeholder("x", "2");
        assert_eq!(template.working_copy(), "1-2");
    }

    #[test]
    fn test_set_placeholder_missing_name_is_noop() {
        let (_document, mut template) = template();
        template.set_placeholder("absent", "value");
        assert_eq!(template.working_copy(), MASTER);
    }

    #[test]
    fn test_commit_writes_and_resets() {
        let (document, mut template) = template();
        template.set_placeholder("next", "2");
        template.set_placeholder("items", "<li>a</li>");
        template.set_placeholder("title", "News");
        template.commit();

        assert_eq!(root_html(&document), "<h1>News</h1><ul><li>a</li></ul><a>2</a>");
        assert_eq!(template.working_copy(), MASTER);
    }

    #[test]
    fn test_all_placeholders_set_leaves_no_tokens() {
        let (document, mut template) = template();
        for name in ["items", "title", "next"] {
            template.set_placeholder(name, "v");
        }
        assert!(template.unresolved_placeholders().is_empty());
        template.commit();
        assert!(!root_html(&document).contains("{{__"));
    }

    #[test]
    fn test_unresolved_placeholders_lists_names() {
        let (_document, mut template) = template();
        template.set_placeholder("items", "");
        assert_eq!(template.unresolved_placeholders(), vec!["title", "next"]);
    }

    #[test]
    fn test_token_inside_value_is_not_unresolved() {
        let (_document, mut template) = template();
        template.set_placeholder("items", "<li>use {{__x__}} in docs</li>");
        template.set_placeholder("title", "T");
        template.set_placeholder("next", "2");
        assert!(template.unresolved_placeholders().is_empty());
    }

    #[test]
    fn test_value_token_does_not_satisfy_later_placeholder() {
        let (_document, mut template) = template();
        template.set_placeholder("items", "{{__title__}}");
        template.set_placeholder("next", "2");
        assert_eq!(template.unresolved_placeholders(), vec!["title"]);
    }

    #[test]
    fn test_commit_restores_pending_names() {
        let (_document, mut template) = template();
        for name in ["items", "title", "next"] {
            template.set_placeholder(name, "v");
        }
        template.commit();
        assert_eq!(template.unresolved_placeholders(), vec!["title", "items", "next"]);
    }

    #[test]
    fn test_rerender_after_commit() {
        let (document, mut template) = template();
        for round in 1..=2 {
            template.add_fragment(format!("<li>{}</li>", round));
            let items = template.consume_fragments();
            template.set_placeholder("items", &items);
            template.set_placeholder("title", "T");
            template.set_placeholder("next", &round.to_string());
            template.commit();
        }
        assert_eq!(root_html(&document), "<h1>T</h1><ul><li>2</li></ul><a>2</a>");
    }
}
