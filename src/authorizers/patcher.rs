//! Authorizers document patching

use super::identity::NodeIdentity;
use crate::error::{BootstrapError, Result};
use std::fs;
use std::path::Path;
use xmltree::{Element, EmitterConfig, XMLNode};

/// Element the identity entries are appended under
pub const AUTHORIZER_ELEMENT: &str = "authorizer";

const PROPERTY_ELEMENT: &str = "property";
const NAME_ATTRIBUTE: &str = "name";

/// Append identity entries to an authorizers document.
///
/// Pure transform over the document text; no I/O happens here. Everything
/// already in the document survives; the new
/// `property` elements land after the existing children of `authorizer`, in
/// index order. Entries are appended unconditionally, so patching a document
/// that already carries identity entries duplicates them.
pub fn patch_document(document: &str, entries: &[NodeIdentity]) -> Result<String> {
    let mut root = Element::parse(document.as_bytes())?;

    let authorizer = root
        .get_mut_child(AUTHORIZER_ELEMENT)
        .ok_or_else(|| BootstrapError::ElementNotFound(AUTHORIZER_ELEMENT.to_string()))?;

    for entry in entries {
        let mut property = Element::new(PROPERTY_ELEMENT);
        property
            .attributes
            .insert(NAME_ATTRIBUTE.to_string(), entry.key());
        property.children.push(XMLNode::Text(entry.principal.clone()));
        authorizer.children.push(XMLNode::Element(property));
    }

    serialize(&root)
}

/// Patch the authorizers file in place
pub fn patch_file(path: &Path, entries: &[NodeIdentity]) -> Result<()> {
    let document = fs::read_to_string(path)?;
    let patched = patch_document(&document, entries)?;
    fs::write(path, patched)?;

    tracing::info!(
        "Appended {} node identity entries to {}",
        entries.len(),
        path.display()
    );
    Ok(())
}

/// Patch the authorizers file and return the result without touching it
pub fn render_file(path: &Path, entries: &[NodeIdentity]) -> Result<String> {
    let document = fs::read_to_string(path)?;
    let patched = patch_document(&document, entries)?;

    tracing::debug!(
        "Rendered {} with {} node identity entries",
        path.display(),
        entries.len()
    );
    Ok(patched)
}

/// Serialize the tree with indentation and an XML declaration
fn serialize(root: &Element) -> Result<String> {
    let mut out = Vec::new();
    let config = EmitterConfig::new().perform_indent(true);
    root.write_with_config(&mut out, config)?;

    String::from_utf8(out)
        .map_err(|e| BootstrapError::Internal(format!("serialized XML is not UTF-8: {}", e)))
}
