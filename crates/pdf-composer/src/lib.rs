//! PDF composition utilities.
//!
//! This crate provides low-level PDF manipulation using lopdf:
//! - Deep object copying between documents with cycle detection
//! - Importing a page of one document as a Form XObject of another, so a
//!   separately rendered graphic can be placed on a page like an image

mod error;

pub use error::ComposerError;

use lopdf::{Dictionary, Document, Object, ObjectId, Stream, dictionary};
use std::collections::HashMap;

/// Manages the state of copying objects between documents.
struct ObjectCopier<'a> {
    source_doc: &'a Document,
    target_doc: &'a mut Document,
    id_map: HashMap<ObjectId, ObjectId>,
}

impl<'a> ObjectCopier<'a> {
    fn new(source_doc: &'a Document, target_doc: &'a mut Document) -> Self {
        Self {
            source_doc,
            target_doc,
            id_map: HashMap::new(),
        }
    }

    /// Deep copies an object and everything it references into the target.
    /// Each source object is copied at most once.
    fn copy_object(&mut self, source_id: ObjectId) -> Result<ObjectId, lopdf::Error> {
        if let Some(target_id) = self.id_map.get(&source_id) {
            return Ok(*target_id);
        }

        // Reserve the target id before recursing so that reference cycles
        // (Page -> Parent -> Kids -> Page) terminate.
        let new_id = self.target_doc.add_object(Object::Null);
        self.id_map.insert(source_id, new_id);

        let obj = self.source_doc.get_object(source_id)?.clone();
        let new_obj = self.remap_references(obj)?;

        match self.target_doc.objects.get_mut(&new_id) {
            Some(target_obj) => *target_obj = new_obj,
            None => return Err(lopdf::Error::ObjectNotFound(new_id)),
        }

        Ok(new_id)
    }

    /// Replaces every `Object::Reference` inside `obj` with the id of its copy
    /// in the target document.
    fn remap_references(&mut self, obj: Object) -> Result<Object, lopdf::Error> {
        match obj {
            Object::Reference(id) => Ok(Object::Reference(self.copy_object(id)?)),
            Object::Array(arr) => {
                let new_arr = arr
                    .into_iter()
                    .map(|o| self.remap_references(o))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Object::Array(new_arr))
            }
            Object::Dictionary(mut dict) => {
                for (_, value) in dict.iter_mut() {
                    *value = self.remap_references(value.clone())?;
                }
                Ok(Object::Dictionary(dict))
            }
            Object::Stream(mut stream) => {
                for (_, value) in stream.dict.iter_mut() {
                    *value = self.remap_references(value.clone())?;
                }
                Ok(Object::Stream(stream))
            }
            _ => Ok(obj),
        }
    }
}

/// A page imported as a reusable form. `width` and `height` come from the
/// source page's MediaBox, in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormXObject {
    pub id: ObjectId,
    pub width: f32,
    pub height: f32,
}

/// Copies page `page_number` (1-based) of `source` into `target` as a Form
/// XObject.
///
/// The page's content streams are concatenated into the form's stream, its
/// resources are deep-copied, and its MediaBox becomes the form's BBox. The
/// caller draws the form with `cm` + `Do` from any page of `target`.
pub fn import_page_as_form(
    target: &mut Document,
    source: &Document,
    page_number: u32,
) -> Result<FormXObject, ComposerError> {
    let page_id = *source
        .get_pages()
        .get(&page_number)
        .ok_or(ComposerError::PageNotFound(page_number))?;
    let page = source.get_dictionary(page_id)?;

    let bbox = media_box(source, page)?;
    let width = bbox[2] - bbox[0];
    let height = bbox[3] - bbox[1];
    if width <= 0.0 || height <= 0.0 {
        return Err(ComposerError::Other(format!(
            "Page {page_number} has an empty MediaBox"
        )));
    }

    let content = source.get_page_content(page_id)?;

    let mut copier = ObjectCopier::new(source, target);
    let resources = match inherited(source, page, b"Resources") {
        Some(obj) => copier.remap_references(obj.clone())?,
        None => Object::Dictionary(Dictionary::new()),
    };

    let form = Stream::new(
        dictionary! {
            "Type" => "XObject",
            "Subtype" => "Form",
            "BBox" => bbox.iter().map(|v| Object::Real(*v)).collect::<Vec<_>>(),
            "Resources" => resources,
        },
        content,
    );
    let id = target.add_object(form);
    log::debug!(
        "Imported page {} as form {:?} ({}x{})",
        page_number,
        id,
        width,
        height
    );

    Ok(FormXObject { id, width, height })
}

/// Looks a key up on the page, then on its ancestors in the page tree.
fn inherited<'a>(doc: &'a Document, page: &'a Dictionary, key: &[u8]) -> Option<&'a Object> {
    let mut node = page;
    for _ in 0..32 {
        if let Ok(value) = node.get(key) {
            return match value {
                Object::Reference(id) => doc.get_object(*id).ok(),
                other => Some(other),
            };
        }
        let parent = node.get(b"Parent").and_then(Object::as_reference).ok()?;
        node = doc.get_dictionary(parent).ok()?;
    }
    None
}

fn media_box(doc: &Document, page: &Dictionary) -> Result<[f32; 4], ComposerError> {
    let values = inherited(doc, page, b"MediaBox")
        .ok_or_else(|| ComposerError::Other("Page has no MediaBox".to_string()))?
        .as_array()?;
    if values.len() != 4 {
        return Err(ComposerError::Other(format!(
            "MediaBox has {} entries",
            values.len()
        )));
    }
    let mut bbox = [0.0f32; 4];
    for (slot, value) in bbox.iter_mut().zip(values) {
        *slot = value.as_float()?;
    }
    Ok(bbox)
}
