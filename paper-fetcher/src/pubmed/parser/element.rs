//! Minimal element tree built from `quick_xml::Reader` events
//!
//! Each `PubmedArticle` is read into an [`XmlElement`] subtree so field
//! lookups can search "anywhere below the article" the way EFetch consumers
//! expect, without modelling the full MEDLINE schema.

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

/// Create a configured `Reader` from a string slice.
///
/// `expand_empty_elements(true)` turns `<tag/>` into `Start` + `End` events so
/// empty elements take the same path as populated ones.
pub(crate) fn make_reader(content: &str) -> Reader<&[u8]> {
    let mut reader = Reader::from_str(content);
    reader.config_mut().expand_empty_elements = true;
    reader
}

/// Failure while reading one element subtree
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ReadError {
    /// Text inside the element could not be decoded. The reader has still
    /// consumed the whole element and can carry on with its siblings.
    Content(String),
    /// The document is not well-formed; reading cannot continue.
    Syntax(String),
}

/// One XML element with its direct text and child elements
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct XmlElement {
    pub name: String,
    /// Direct text content as written. `None` when the element holds no text.
    pub text: Option<String>,
    pub children: Vec<XmlElement>,
}

impl XmlElement {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            text: None,
            children: Vec::new(),
        }
    }

    fn push_text(&mut self, fragment: &str) {
        match &mut self.text {
            Some(text) => text.push_str(fragment),
            None => self.text = Some(fragment.to_string()),
        }
    }

    /// Text content, or `""` for an element without any
    pub fn text_or_empty(&self) -> &str {
        self.text.as_deref().unwrap_or_default()
    }

    /// Direct children with the given tag name, in document order
    pub fn children_named<'a, 'n>(
        &'a self,
        name: &'n str,
    ) -> impl Iterator<Item = &'a XmlElement> + use<'a, 'n> {
        self.children.iter().filter(move |child| child.name == name)
    }

    /// Text of the first direct child with the given tag name
    ///
    /// `None` only when no such child exists; a child without text reads as `""`.
    pub fn child_text(&self, name: &str) -> Option<&str> {
        self.children
            .iter()
            .find(|child| child.name == name)
            .map(XmlElement::text_or_empty)
    }

    /// All elements below this one, depth-first in document order
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants {
            stack: self.children.iter().rev().collect(),
        }
    }

    /// First descendant with the given tag name
    pub fn find(&self, name: &str) -> Option<&XmlElement> {
        self.descendants().find(|element| element.name == name)
    }

    /// Every descendant with the given tag name, in document order
    pub fn find_all<'a, 'n>(
        &'a self,
        name: &'n str,
    ) -> impl Iterator<Item = &'a XmlElement> + use<'a, 'n> {
        self.descendants().filter(move |element| element.name == name)
    }

    /// Text of the first descendant with the given tag name
    ///
    /// `None` only when no such descendant exists; one without text reads as `""`.
    pub fn find_text(&self, name: &str) -> Option<&str> {
        self.find(name).map(XmlElement::text_or_empty)
    }
}

/// Pre-order iterator over an element's descendants
pub(crate) struct Descendants<'a> {
    stack: Vec<&'a XmlElement>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a XmlElement;

    fn next(&mut self) -> Option<Self::Item> {
        let element = self.stack.pop()?;
        self.stack.extend(element.children.iter().rev());
        Some(element)
    }
}

fn element_name(start: &BytesStart) -> String {
    String::from_utf8_lossy(start.name().as_ref()).into_owned()
}

/// Read the element whose `Event::Start` was just consumed into a tree.
///
/// Always consumes events up to and including the matching `Event::End`,
/// unless the document turns out to be malformed. A text node that fails to
/// unescape marks the whole subtree as [`ReadError::Content`].
pub(crate) fn read_element(
    reader: &mut Reader<&[u8]>,
    start: &BytesStart,
) -> Result<XmlElement, ReadError> {
    let mut stack = vec![XmlElement::new(element_name(start))];
    let mut content_error: Option<String> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => stack.push(XmlElement::new(element_name(&e))),
            Ok(Event::Empty(e)) => {
                if let Some(parent) = stack.last_mut() {
                    parent.children.push(XmlElement::new(element_name(&e)));
                }
            }
            Ok(Event::Text(e)) => match e.unescape() {
                Ok(text) => {
                    if let Some(current) = stack.last_mut() {
                        current.push_text(&text);
                    }
                }
                Err(err) => {
                    if content_error.is_none() {
                        content_error = Some(format!(
                            "Failed to decode text in <{}>: {}",
                            stack.last().map(|el| el.name.as_str()).unwrap_or_default(),
                            err
                        ));
                    }
                }
            },
            Ok(Event::CData(e)) => {
                if let Some(current) = stack.last_mut() {
                    current.push_text(&String::from_utf8_lossy(&e));
                }
            }
            Ok(Event::End(_)) => {
                let Some(done) = stack.pop() else {
                    return Err(ReadError::Syntax("Unbalanced end tag".to_string()));
                };

                match stack.last_mut() {
                    Some(parent) => parent.children.push(done),
                    None => {
                        return match content_error {
                            Some(message) => Err(ReadError::Content(message)),
                            None => Ok(done),
                        };
                    }
                }
            }
            Ok(Event::Eof) => {
                return Err(ReadError::Syntax(format!(
                    "Unexpected end of document inside <{}>",
                    stack.first().map(|el| el.name.as_str()).unwrap_or_default()
                )));
            }
            Err(e) => return Err(ReadError::Syntax(e.to_string())),
            _ => {}
        }
    }
}
