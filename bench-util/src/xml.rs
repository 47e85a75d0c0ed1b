//! XML element model and helpers for benchmark definition files.
//!
//! Elements follow the tag/attributes/text/tail layout of benchmark
//! definitions: `text` is the character data before the first child and
//! `tail` the character data following an element inside its parent.
//! Children are shared references, so a shallow copy of an element sees
//! every later change made to its children.

use bench_core::{BenchError, Result};
use indexmap::IndexMap;
use quick_xml::escape::partial_escape;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::cell::RefCell;
use std::fmt::{Display, Write as _};
use std::rc::Rc;

pub type ElementRef = Rc<RefCell<Element>>;

const PRETTY_INDENT: &str = "  ";

#[derive(Debug, Default, PartialEq)]
pub struct Element {
    pub tag: String,
    pub attributes: IndexMap<String, String>,
    pub text: Option<String>,
    pub tail: Option<String>,
    children: Vec<ElementRef>,
}

fn xml_error(e: impl Display) -> BenchError {
    BenchError::Xml(e.to_string())
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn into_ref(self) -> ElementRef {
        Rc::new(RefCell::new(self))
    }

    /// Value of attribute `name`, if present.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(name.into(), value.into());
    }

    pub fn append(&mut self, child: ElementRef) {
        self.children.push(child);
    }

    pub fn children(&self) -> &[ElementRef] {
        &self.children
    }

    /// Direct children whose tag equals `tag`, in document order.
    pub fn find_all(&self, tag: &str) -> Vec<ElementRef> {
        self.children
            .iter()
            .filter(|child| child.borrow().tag == tag)
            .cloned()
            .collect()
    }

    /// New element with the same tag and attributes that shares this
    /// element's children. Text and tail are not carried over.
    pub fn shallow_copy(&self) -> Element {
        Element {
            tag: self.tag.clone(),
            attributes: self.attributes.clone(),
            text: None,
            tail: None,
            children: self.children.clone(),
        }
    }

    /// Parse a document and return its root element.
    ///
    /// Comments, processing instructions and the XML declaration are dropped.
    pub fn parse(xml: &str) -> Result<Element> {
        let mut reader = Reader::from_str(xml);
        let mut stack: Vec<Element> = Vec::new();
        let mut root: Option<Element> = None;

        loop {
            match reader.read_event().map_err(xml_error)? {
                Event::Start(start) => stack.push(Self::from_start(&start)?),
                Event::Empty(start) => {
                    let element = Self::from_start(&start)?;
                    Self::close(element, &mut stack, &mut root)?;
                }
                Event::End(_) => {
                    let element = stack
                        .pop()
                        .ok_or_else(|| xml_error("closing tag without matching opening tag"))?;
                    Self::close(element, &mut stack, &mut root)?;
                }
                Event::Text(text) => {
                    let text = text.unescape().map_err(xml_error)?;
                    Self::push_text(&mut stack, &text);
                }
                Event::CData(data) => {
                    let text = String::from_utf8(data.into_inner().into_owned())?;
                    Self::push_text(&mut stack, &text);
                }
                Event::Eof => break,
                _ => {}
            }
        }

        if let Some(open) = stack.last() {
            return Err(xml_error(format!("unclosed element <{}>", open.tag)));
        }
        root.ok_or_else(|| xml_error("document has no root element"))
    }

    fn from_start(start: &BytesStart<'_>) -> Result<Element> {
        let tag = std::str::from_utf8(start.name().as_ref())
            .map_err(xml_error)?
            .to_string();
        let mut element = Element::new(tag);

        for attribute in start.attributes() {
            let attribute = attribute.map_err(xml_error)?;
            let name = std::str::from_utf8(attribute.key.as_ref())
                .map_err(xml_error)?
                .to_string();
            let value = attribute.unescape_value().map_err(xml_error)?.into_owned();
            element.attributes.insert(name, value);
        }
        Ok(element)
    }

    fn close(element: Element, stack: &mut [Element], root: &mut Option<Element>) -> Result<()> {
        match stack.last_mut() {
            Some(parent) => parent.append(element.into_ref()),
            None if root.is_none() => *root = Some(element),
            None => return Err(xml_error("document has more than one root element")),
        }
        Ok(())
    }

    // Character data belongs to the open element's text until it has a
    // child; after that it extends the tail of its last child.
    fn push_text(stack: &mut [Element], text: &str) {
        let Some(current) = stack.last_mut() else {
            return;
        };
        if let Some(last) = current.children.last() {
            let mut last = last.borrow_mut();
            last.tail.get_or_insert_with(String::new).push_str(text);
        } else {
            current.text.get_or_insert_with(String::new).push_str(text);
        }
    }

    /// Compact serialization without a declaration or added whitespace.
    pub fn to_xml_string(&self) -> String {
        let mut out = String::new();
        self.write_compact(&mut out);
        out
    }

    fn write_compact(&self, out: &mut String) {
        self.write_open_tag(out);
        let has_text = self.text.as_deref().is_some_and(|t| !t.is_empty());
        if !has_text && self.children.is_empty() {
            out.push_str("/>");
            return;
        }

        out.push('>');
        if let Some(text) = &self.text {
            out.push_str(&partial_escape(text));
        }
        for child in &self.children {
            let child = child.borrow();
            child.write_compact(out);
            if let Some(tail) = &child.tail {
                out.push_str(&partial_escape(tail));
            }
        }
        let _ = write!(out, "</{}>", self.tag);
    }

    /// Pretty-printed document with two-space indentation.
    ///
    /// Whitespace-only character data is dropped; an element whose only
    /// content is text keeps it on the same line as its tags.
    pub fn to_pretty_string(&self) -> String {
        let mut out = String::from("<?xml version=\"1.0\" ?>\n");
        self.write_pretty(&mut out, "");
        out
    }

    fn write_pretty(&self, out: &mut String, indent: &str) {
        out.push_str(indent);
        self.write_open_tag(out);

        let meaningful = |text: &Option<String>| {
            text.as_deref()
                .filter(|t| !t.trim().is_empty())
                .map(str::to_string)
        };

        if self.children.is_empty() {
            match meaningful(&self.text) {
                Some(text) => {
                    let _ = writeln!(out, ">{}</{}>", partial_escape(&text), self.tag);
                }
                None => out.push_str("/>\n"),
            }
            return;
        }

        out.push_str(">\n");
        let child_indent = format!("{}{}", indent, PRETTY_INDENT);
        if let Some(text) = meaningful(&self.text) {
            let _ = writeln!(out, "{}{}", child_indent, partial_escape(&text));
        }
        for child in &self.children {
            let child = child.borrow();
            child.write_pretty(out, &child_indent);
            if let Some(tail) = meaningful(&child.tail) {
                let _ = writeln!(out, "{}{}", child_indent, partial_escape(&tail));
            }
        }
        let _ = writeln!(out, "{}</{}>", indent, self.tag);
    }

    fn write_open_tag(&self, out: &mut String) {
        let _ = write!(out, "<{}", self.tag);
        for (name, value) in &self.attributes {
            let _ = write!(
                out,
                " {}=\"{}\"",
                name,
                partial_escape(value).replace('"', "&quot;")
            );
        }
    }
}

/// For every child of `elem` tagged `tag`, the values of `attributes` (in the
/// given order) followed by the child's text. Absent values are skipped.
pub fn get_list_from_xml(elem: &Element, tag: &str, attributes: &[&str]) -> Vec<String> {
    let mut values = Vec::new();
    for option in elem.find_all(tag) {
        let option = option.borrow();
        values.extend(
            attributes
                .iter()
                .filter_map(|name| option.get(name).map(str::to_string)),
        );
        values.extend(option.text.clone());
    }
    values
}

/// [`get_list_from_xml`] for the usual `<option name="...">value</option>` children.
pub fn get_options_from_xml(elem: &Element) -> Vec<String> {
    get_list_from_xml(elem, "option", &["name"])
}

/// Shallow copy: same tag and attributes, same child references.
pub fn get_copy_of_xml_elem(elem: &Element) -> Element {
    elem.shallow_copy()
}

/// Pretty-printed XML text for `elem`.
pub fn xml_to_string(elem: &Element) -> String {
    elem.to_pretty_string()
}
