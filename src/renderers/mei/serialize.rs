//! Text serialization of an [`MeiDocument`]
//!
//! One element per line, one tab per nesting level. `xml:id` is always the
//! first attribute; elements with neither children nor text self-close.

use quick_xml::escape::escape;

use super::config::INDENT;
use super::document::{MeiDocument, NodeId, XML_ID};

/// Serialize the whole document, declaration included
pub fn to_xml_string(doc: &MeiDocument) -> String {
    let mut xml = String::with_capacity(doc.len() * 48);
    xml.push_str(&format!(
        "<?xml version=\"{}\" encoding=\"{}\"?>\n",
        doc.declaration.version, doc.declaration.encoding
    ));

    if let Some(root) = doc.root() {
        write_node(doc, root, 0, &mut xml);
    }

    xml
}

fn write_node(doc: &MeiDocument, id: NodeId, depth: usize, xml: &mut String) {
    let node = doc.node(id);
    let indent = INDENT.repeat(depth);

    xml.push_str(&indent);
    xml.push('<');
    xml.push_str(&node.tag);
    push_attribute(xml, XML_ID, &node.id);
    for (name, value) in &node.attributes {
        push_attribute(xml, name, value);
    }

    match (&node.text, node.children.is_empty()) {
        (None, true) => xml.push_str(" />\n"),
        (Some(text), true) => {
            xml.push('>');
            xml.push_str(&escape(text.as_str()));
            push_close(xml, &node.tag);
        }
        (text, false) => {
            xml.push('>');
            if let Some(text) = text {
                xml.push_str(&escape(text.as_str()));
            }
            xml.push('\n');
            for child in &node.children {
                write_node(doc, *child, depth + 1, xml);
            }
            xml.push_str(&indent);
            push_close(xml, &node.tag);
        }
    }
}

fn push_attribute(xml: &mut String, name: &str, value: &str) {
    xml.push(' ');
    xml.push_str(name);
    xml.push_str("=\"");
    xml.push_str(&escape(value));
    xml.push('"');
}

fn push_close(xml: &mut String, tag: &str) {
    xml.push_str("</");
    xml.push_str(tag);
    xml.push_str(">\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderers::mei::MeiBuilder;

    #[test]
    fn test_layout_and_indentation() {
        let mut b = MeiBuilder::new();
        let root = b.create_root("mei");
        b.set_attribute(root, "meiversion", "3.0.0");
        let head = b.create_child(root, "meiHead");
        let name = b.create_child(head, "name");
        b.set_text(name, "App 1.0");
        b.create_child(root, "music");

        let xml = to_xml_string(&b.finish());
        let expected = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
<mei xml:id=\"m-1\" meiversion=\"3.0.0\">\n\
\t<meiHead xml:id=\"m-2\">\n\
\t\t<name xml:id=\"m-3\">App 1.0</name>\n\
\t</meiHead>\n\
\t<music xml:id=\"m-4\" />\n\
</mei>\n";
        assert_eq!(xml, expected);
    }

    #[test]
    fn test_escaping() {
        let mut b = MeiBuilder::new();
        let root = b.create_root("title");
        b.set_attribute(root, "label", "\"A\" & B");
        b.set_text(root, "Song & Dance <Test>");

        let xml = to_xml_string(&b.finish());
        assert!(xml.contains("label=\"&quot;A&quot; &amp; B\""));
        assert!(xml.contains(">Song &amp; Dance &lt;Test&gt;</title>"));
    }

    #[test]
    fn test_empty_document_is_declaration_only() {
        let xml = to_xml_string(&MeiDocument::default());
        assert_eq!(xml, "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    }
}
