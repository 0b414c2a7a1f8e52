use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use super::Content;
use crate::types::{ClassList, Tag};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    // Identity
    pub id: String,
    pub tag: Tag,

    // Styling hooks
    pub classes: ClassList,

    // Attributes (`data-*`, `src`, `value`, `required`, ...)
    pub attrs: HashMap<String, String>,

    // Content
    pub content: Content,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            id: generate_id("el"),
            tag: Tag::Div,
            classes: ClassList::new(),
            attrs: HashMap::new(),
            content: Content::None,
        }
    }
}

impl Element {
    pub fn new(tag: impl Into<Tag>) -> Self {
        let tag = tag.into();
        Self {
            id: generate_id(tag.name()),
            tag,
            ..Default::default()
        }
    }

    pub fn body() -> Self {
        Self::new(Tag::Body)
    }

    pub fn div() -> Self {
        Self::new(Tag::Div)
    }

    pub fn span(text: impl Into<String>) -> Self {
        Self::new(Tag::Span).text(text)
    }

    pub fn table() -> Self {
        Self::new(Tag::Table)
    }

    pub fn thead() -> Self {
        Self::new(Tag::THead)
    }

    pub fn tbody() -> Self {
        Self::new(Tag::TBody)
    }

    pub fn tr() -> Self {
        Self::new(Tag::Tr)
    }

    pub fn th(text: impl Into<String>) -> Self {
        Self::new(Tag::Th).text(text)
    }

    pub fn td(text: impl Into<String>) -> Self {
        Self::new(Tag::Td).text(text)
    }

    pub fn form() -> Self {
        Self::new(Tag::Form)
    }

    pub fn input() -> Self {
        Self::new(Tag::Input)
    }

    pub fn button(text: impl Into<String>) -> Self {
        Self::new(Tag::Button).text(text)
    }

    pub fn img() -> Self {
        Self::new(Tag::Img)
    }

    pub fn template() -> Self {
        Self::new(Tag::Template)
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    // Classes
    pub fn class(mut self, name: &str) -> Self {
        for part in name.split_whitespace() {
            self.classes.add(part);
        }
        self
    }

    pub fn has_class(&self, name: &str) -> bool {
        self.classes.contains(name)
    }

    // Attributes
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }

    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).map(String::as_str)
    }

    pub fn set_attr(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attrs.insert(key.into(), value.into());
    }

    pub fn remove_attr(&mut self, key: &str) -> Option<String> {
        self.attrs.remove(key)
    }

    // Text
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.content = Content::Text(text.into());
        self
    }

    /// Replace whatever content the element has with a single text run.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.content = Content::Text(text.into());
    }

    /// Concatenated text of this element and all descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match &self.content {
            Content::None => {}
            Content::Text(text) => out.push_str(text),
            Content::Children(children) => {
                for child in children {
                    child.collect_text(out);
                }
            }
        }
    }

    // Children
    pub fn child(mut self, child: Element) -> Self {
        self.append_child(child);
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        match &mut self.content {
            Content::Children(children) => children.extend(new_children),
            _ => self.content = Content::Children(new_children.into_iter().collect()),
        }
        self
    }

    /// Append a child, replacing text content if there was any.
    pub fn append_child(&mut self, child: Element) {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
    }

    pub fn child_elements(&self) -> &[Element] {
        self.content.children()
    }
}
