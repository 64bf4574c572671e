//! Additional-info sub-document for the `ADDINFO` field.
//!
//! The gateway accepts an optional XML sub-document alongside the flat
//! request fields. The request model treats the serialized form as an opaque
//! string; this module owns producing that string deterministically, so the
//! same block always signs to the same bytes.

use serde::{Deserialize, Serialize};

/// XML namespace of the additional-info request document.
pub const ADDINFO_XMLNS: &str = "http://gpe.cz/gpwebpay/additionalInfo/request/v1";

/// Schema version used when none is given.
pub const DEFAULT_ADDINFO_VERSION: &str = "4.0";

/// Ordered additional-info block, serialized into the `ADDINFO` field.
///
/// Items serialize as one element per entry, in insertion order. Item names
/// become element names and must be valid XML names; item values are
/// escaped.
///
/// # Examples
///
/// ```rust
/// use gpwebpay_lib::AddInfoBlock;
///
/// let block = AddInfoBlock::default()
///     .with_item("cardholderName", "Jan Novák")
///     .with_item("email", "jan@example.com");
/// let xml = block.to_xml();
/// assert!(xml.starts_with("<additionalInfoRequest"));
/// assert!(xml.contains("<email>jan@example.com</email>"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddInfoBlock {
    version: String,
    items: Vec<(String, String)>,
}

impl AddInfoBlock {
    /// Create an empty block with the given schema version.
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            items: Vec::new(),
        }
    }

    /// Append an item, consuming and returning the block for chaining.
    pub fn with_item(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.add_item(name, value);
        self
    }

    /// Append an item.
    pub fn add_item(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.items.push((name.into(), value.into()));
    }

    /// Schema version attribute.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Iterate over items in insertion order.
    pub fn items(&self) -> impl Iterator<Item = (&str, &str)> {
        self.items
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Serialize into the gateway's XML form.
    ///
    /// The output is deterministic: same block, same bytes. This matters
    /// because the serialized string is part of the signed parameter set.
    pub fn to_xml(&self) -> String {
        let mut xml = format!(
            "<additionalInfoRequest xmlns=\"{}\" version=\"{}\">",
            ADDINFO_XMLNS,
            escape_xml(&self.version)
        );
        for (name, value) in &self.items {
            xml.push('<');
            xml.push_str(name);
            xml.push('>');
            xml.push_str(&escape_xml(value));
            xml.push_str("</");
            xml.push_str(name);
            xml.push('>');
        }
        xml.push_str("</additionalInfoRequest>");
        xml
    }
}

impl Default for AddInfoBlock {
    fn default() -> Self {
        Self::new(DEFAULT_ADDINFO_VERSION)
    }
}

/// Escape a text node or attribute value.
fn escape_xml(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_block_serializes_to_bare_envelope() {
        let block = AddInfoBlock::default();
        assert_eq!(
            block.to_xml(),
            format!(
                "<additionalInfoRequest xmlns=\"{}\" version=\"4.0\"></additionalInfoRequest>",
                ADDINFO_XMLNS
            )
        );
    }

    #[test]
    fn items_serialize_in_insertion_order() {
        let block = AddInfoBlock::new("5.0")
            .with_item("b", "2")
            .with_item("a", "1");
        let xml = block.to_xml();

        let b_pos = xml.find("<b>").unwrap();
        let a_pos = xml.find("<a>").unwrap();
        assert!(b_pos < a_pos, "insertion order must survive serialization");
        assert!(xml.contains("version=\"5.0\""));
    }

    #[test]
    fn values_are_escaped() {
        let block = AddInfoBlock::default().with_item("note", "a<b & \"c\"");
        let xml = block.to_xml();
        assert!(xml.contains("<note>a&lt;b &amp; &quot;c&quot;</note>"));
    }

    #[test]
    fn serialization_is_deterministic() {
        let block = AddInfoBlock::default()
            .with_item("x", "1")
            .with_item("y", "2");
        assert_eq!(block.to_xml(), block.clone().to_xml());
    }
}
