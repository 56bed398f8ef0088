use std::collections::BTreeMap;

use super::{Document, Element};

/// Children of a [MemoryElement]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    Text(String),
    Html(String),
}

impl Content {
    pub fn as_str(&self) -> &str {
        match self {
            Content::Text(s) | Content::Html(s) => s.as_str(),
        }
    }
}

impl Default for Content {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct MemoryElement {
    content: Content,
    hidden: bool,
    class_name: String,
}

impl MemoryElement {
    pub fn content(&self) -> &Content {
        &self.content
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }
}

impl Element for MemoryElement {
    fn set_text_content(&mut self, text: &str) {
        self.content = Content::Text(text.to_owned());
    }

    fn set_inner_html(&mut self, html: &str) {
        self.content = Content::Html(html.to_owned());
    }

    fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    fn set_class_name(&mut self, class_name: &str) {
        self.class_name = class_name.to_owned();
    }
}

/// Element tree kept in memory, keyed by element id
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct MemoryDocument {
    elements: BTreeMap<String, MemoryElement>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a document holding one empty element per id
    pub fn with_ids(ids: &[&str]) -> Self {
        let mut doc = Self::new();
        for id in ids {
            doc.insert(id);
        }
        doc
    }

    /// Add an empty element, replacing any element with the same id
    pub fn insert(&mut self, id: &str) -> &mut MemoryElement {
        let element = self.elements.entry(id.to_owned()).or_default();
        *element = MemoryElement::default();
        element
    }

    pub fn element(&self, id: &str) -> Option<&MemoryElement> {
        self.elements.get(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &MemoryElement)> {
        self.elements.iter().map(|(id, el)| (id.as_str(), el))
    }
}

impl Document for MemoryDocument {
    type Element = MemoryElement;

    fn get_element_by_id(&mut self, id: &str) -> Option<&mut MemoryElement> {
        self.elements.get_mut(id)
    }
}
