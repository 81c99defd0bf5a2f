//! Markup node tree and serializer
//!
//! The renderer builds a tree of [`TableNode`]s and serializes it in a
//! single depth-first pass. The tree is built once and serialized once per
//! render; each node exclusively owns its children.

/// Tags serialized without a closing tag
const VOID_TAGS: &[&str] = &["input", "br", "hr", "img"];

/// A single markup element with attributes, content and child nodes
///
/// Attribute order is insertion order so output is reproducible. Class
/// tokens accumulate separately and serialize as one space-joined `class`
/// attribute. Text content is escaped on serialization; raw content (the
/// embedded client script) is emitted verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableNode {
	tag: String,
	attributes: Vec<(String, String)>,
	classes: Vec<String>,
	text: Option<String>,
	raw: Option<String>,
	children: Vec<TableNode>,
}

impl TableNode {
	/// Creates an empty element with the given tag name
	pub fn new(tag: impl Into<String>) -> Self {
		Self {
			tag: tag.into(),
			..Self::default()
		}
	}

	/// Creates an element already holding a single child
	pub fn with_child(tag: impl Into<String>, child: TableNode) -> Self {
		let mut node = Self::new(tag);
		node.children.push(child);
		node
	}

	/// Returns the tag name
	pub fn tag(&self) -> &str {
		&self.tag
	}

	/// Sets an attribute, replacing any previous value for the same name
	///
	/// An empty value serializes as a bare attribute (`disabled` rather than
	/// `disabled=""`).
	pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
		let name = name.into();
		let value = value.into();
		match self.attributes.iter_mut().find(|(n, _)| *n == name) {
			Some(entry) => entry.1 = value,
			None => self.attributes.push((name, value)),
		}
	}

	/// Returns an attribute value, if set
	pub fn attr(&self, name: &str) -> Option<&str> {
		self.attributes
			.iter()
			.find(|(n, _)| n == name)
			.map(|(_, v)| v.as_str())
	}

	/// Returns true when the attribute is present
	pub fn has_attr(&self, name: &str) -> bool {
		self.attributes.iter().any(|(n, _)| n == name)
	}

	/// Appends a class token
	pub fn add_class(&mut self, class: impl Into<String>) {
		self.classes.push(class.into());
	}

	/// Appends a class token only when the condition holds
	pub fn add_class_if(&mut self, class: impl Into<String>, condition: bool) {
		if condition {
			self.classes.push(class.into());
		}
	}

	/// Returns the accumulated class tokens in insertion order
	pub fn classes(&self) -> &[String] {
		&self.classes
	}

	/// Returns true when the class token has been added
	pub fn has_class(&self, class: &str) -> bool {
		self.classes.iter().any(|c| c == class)
	}

	/// Sets escaped text content
	pub fn set_text(&mut self, text: impl Into<String>) {
		self.text = Some(text.into());
	}

	/// Returns the text content, if set
	pub fn text(&self) -> Option<&str> {
		self.text.as_deref()
	}

	/// Sets raw markup content emitted without escaping
	pub fn set_raw(&mut self, raw: impl Into<String>) {
		self.raw = Some(raw.into());
	}

	/// Appends a child node
	pub fn add_child(&mut self, child: TableNode) {
		self.children.push(child);
	}

	/// Returns the child nodes in order
	pub fn children(&self) -> &[TableNode] {
		&self.children
	}

	/// Finds the first node with the given tag, depth-first, self included
	pub fn find(&self, tag: &str) -> Option<&TableNode> {
		if self.tag == tag {
			return Some(self);
		}
		self.children.iter().find_map(|child| child.find(tag))
	}

	/// Serializes this node and its subtree to markup
	///
	/// Depth-first, pre-order: the opening tag with its attributes, then the
	/// text or raw content, then each child in sequence order, then the
	/// closing tag. Void elements self-close and emit no content.
	pub fn to_html(&self) -> String {
		let mut out = String::new();
		self.write(&mut out);
		out
	}

	fn write(&self, out: &mut String) {
		out.push('<');
		out.push_str(&self.tag);
		if !self.classes.is_empty() {
			out.push_str(" class=\"");
			out.push_str(&escape_attr(&self.classes.join(" ")));
			out.push('"');
		}
		for (name, value) in &self.attributes {
			out.push(' ');
			out.push_str(name);
			if !value.is_empty() {
				out.push_str("=\"");
				out.push_str(&escape_attr(value));
				out.push('"');
			}
		}
		if VOID_TAGS.contains(&self.tag.as_str()) {
			out.push_str(" />");
			return;
		}
		out.push('>');
		if let Some(text) = &self.text {
			out.push_str(&escape_text(text));
		}
		if let Some(raw) = &self.raw {
			out.push_str(raw);
		}
		for child in &self.children {
			child.write(out);
		}
		out.push_str("</");
		out.push_str(&self.tag);
		out.push('>');
	}
}

/// Serializes a root node set into a single markup string
///
/// The renderer always produces exactly one root; the sequence form mirrors
/// that contract and concatenates in order if callers build their own sets.
pub fn serialize(nodes: &[TableNode]) -> String {
	nodes.iter().map(TableNode::to_html).collect()
}

/// Escapes a string for use in an HTML attribute value
fn escape_attr(value: &str) -> String {
	value
		.replace('&', "&amp;")
		.replace('"', "&quot;")
		.replace('<', "&lt;")
		.replace('>', "&gt;")
}

/// Escapes a string for use as element text content
fn escape_text(value: &str) -> String {
	value
		.replace('&', "&amp;")
		.replace('<', "&lt;")
		.replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_nested_serialization() {
		let mut root = TableNode::new("div");
		let mut table = TableNode::new("table");
		let mut row = TableNode::new("tr");
		row.set_text("cell");
		table.add_child(row);
		root.add_child(table);

		assert_eq!(
			serialize(&[root]),
			"<div><table><tr>cell</tr></table></div>"
		);
	}

	#[test]
	fn test_children_render_in_sequence_order() {
		let mut parent = TableNode::new("tr");
		for text in ["a", "b", "c"] {
			let mut cell = TableNode::new("td");
			cell.set_text(text);
			parent.add_child(cell);
		}
		assert_eq!(parent.to_html(), "<tr><td>a</td><td>b</td><td>c</td></tr>");
	}

	#[test]
	fn test_class_tokens_join_in_order() {
		let mut node = TableNode::new("table");
		node.add_class("table");
		node.add_class_if("table-striped", true);
		node.add_class_if("table-bordered", false);
		node.add_class("Custom");
		assert_eq!(
			node.to_html(),
			"<table class=\"table table-striped Custom\"></table>"
		);
	}

	#[test]
	fn test_bare_attribute() {
		let mut node = TableNode::new("a");
		node.set_attr("disabled", "");
		assert_eq!(node.to_html(), "<a disabled></a>");
	}

	#[test]
	fn test_void_element_self_closes() {
		let mut node = TableNode::new("input");
		node.set_attr("type", "hidden");
		node.set_attr("value", "a=1&b=2");
		assert_eq!(
			node.to_html(),
			"<input type=\"hidden\" value=\"a=1&amp;b=2\" />"
		);
	}

	#[test]
	fn test_text_is_escaped_raw_is_not() {
		let mut caption = TableNode::new("caption");
		caption.set_text("a < b");
		assert_eq!(caption.to_html(), "<caption>a &lt; b</caption>");

		let mut script_holder = TableNode::new("div");
		script_holder.set_raw("<script>x()</script>");
		assert_eq!(
			script_holder.to_html(),
			"<div><script>x()</script></div>"
		);
	}

	#[test]
	fn test_set_attr_replaces() {
		let mut node = TableNode::new("a");
		node.set_attr("id", "one");
		node.set_attr("id", "two");
		assert_eq!(node.attr("id"), Some("two"));
		assert_eq!(node.to_html(), "<a id=\"two\"></a>");
	}

	#[test]
	fn test_find_depth_first() {
		let inner = TableNode::new("tbody");
		let table = TableNode::with_child("table", inner);
		let root = TableNode::with_child("div", table);
		assert!(root.find("tbody").is_some());
		assert!(root.find("tfoot").is_none());
	}
}
