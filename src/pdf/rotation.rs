use crate::degree::Degree;
use crate::pdf::document::inherited_attribute;
use anyhow::{Context, Result};
use lopdf::{Document, Object, ObjectId};

/// Set the `/Rotate` entry of a page, replacing whatever rotation it had.
pub fn set_rotation(doc: &mut Document, page_id: ObjectId, degree: Degree) -> Result<()> {
    let page = doc
        .get_dictionary_mut(page_id)
        .with_context(|| format!("Page object {:?} is not a dictionary", page_id))?;
    page.set("Rotate", Object::Integer(i64::from(degree.get())));
    Ok(())
}

/// Effective rotation of a page, following the page tree for inherited
/// values. Missing or malformed entries count as no rotation.
pub fn page_rotation(doc: &Document, page_id: ObjectId) -> Degree {
    let Ok(page) = doc.get_dictionary(page_id) else {
        return Degree::ZERO;
    };
    let value = match page.get(b"Rotate") {
        Ok(value) => Some(value.clone()),
        Err(_) => inherited_attribute(doc, page, b"Rotate"),
    };
    value
        .and_then(|v| v.as_i64().ok())
        .and_then(Degree::from_rotate)
        .unwrap_or(Degree::ZERO)
}
