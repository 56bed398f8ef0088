//! Helpers mutating page elements looked up by id
//!
//! The element tree is owned by the caller and handed in as a [Document]. Looking up an id
//! that does not exist is not an error: every helper silently does nothing in that case.

mod memory;
pub use memory::{Content, MemoryDocument, MemoryElement};

/// A single element of a [Document]
pub trait Element {
    /// Replace the children of this element with a text node
    fn set_text_content(&mut self, text: &str);

    /// Replace the children of this element with parsed markup
    fn set_inner_html(&mut self, html: &str);

    /// Toggle the hidden presentation state (`display: none`)
    fn set_hidden(&mut self, hidden: bool);

    /// Replace the class attribute
    fn set_class_name(&mut self, class_name: &str);
}

/// Element tree with id lookup
pub trait Document {
    type Element: Element;

    fn get_element_by_id(&mut self, id: &str) -> Option<&mut Self::Element>;
}

fn with_element<D: Document + ?Sized>(doc: &mut D, id: &str, f: impl FnOnce(&mut D::Element)) {
    match doc.get_element_by_id(id) {
        Some(element) => f(element),
        None => trace!(id = %id, "element not found"),
    }
}

pub fn set_text<D: Document + ?Sized>(doc: &mut D, id: &str, text: &str) {
    with_element(doc, id, |el| el.set_text_content(text));
}

pub fn set_html<D: Document + ?Sized>(doc: &mut D, id: &str, html: &str) {
    with_element(doc, id, |el| el.set_inner_html(html));
}

pub fn set_visible<D: Document + ?Sized>(doc: &mut D, id: &str, visible: bool) {
    with_element(doc, id, |el| el.set_hidden(!visible));
}

pub fn set_class<D: Document + ?Sized>(doc: &mut D, id: &str, class_name: &str) {
    with_element(doc, id, |el| el.set_class_name(class_name));
}
