use anyhow::{Context, Result};
use lopdf::{Dictionary, Document, Object, ObjectId};
use std::collections::BTreeSet;

/// Page attributes a page may inherit from its ancestors in the page tree.
const INHERITABLE: [&[u8]; 4] = [b"Resources", b"MediaBox", b"CropBox", b"Rotate"];

/// Guards against cyclic `Parent` chains in damaged files.
const MAX_TREE_DEPTH: usize = 64;

pub struct PdfDocument {
    pub doc: Document,
    pub path: String,
}

impl PdfDocument {
    /// Parse an in-memory PDF. `path` is only used in error messages.
    pub fn from_bytes(bytes: &[u8], path: &str) -> Result<Self> {
        let doc =
            Document::load_mem(bytes).with_context(|| format!("Failed to parse PDF: {}", path))?;
        Ok(PdfDocument {
            doc,
            path: path.to_string(),
        })
    }

    pub fn page_count(&self) -> u32 {
        self.doc.get_pages().len() as u32
    }

    /// Get 1-indexed page object IDs
    pub fn page_ids(&self) -> Vec<(u32, ObjectId)> {
        page_ids(&self.doc)
    }

    /// Copy every page, in order, into a brand new document.
    ///
    /// Each copied page gets its inherited attributes written onto it and is
    /// re-parented under a fresh page tree. Objects the pages reference are
    /// carried over with their original ids; the old page tree, catalog and
    /// anything only reachable from them are left behind.
    pub fn copy_pages(&self) -> Result<Document> {
        let source = &self.doc;
        let mut out = Document::with_version(source.version.clone());
        out.max_id = source.max_id;
        let pages_id = out.new_object_id();

        let mut pages = Vec::new();
        for (number, page_id) in self.page_ids() {
            let mut page = source
                .get_dictionary(page_id)
                .with_context(|| format!("Page {} of {} is not a dictionary", number, self.path))?
                .clone();
            for key in INHERITABLE {
                if !page.has(key) {
                    if let Some(value) = inherited_attribute(source, &page, key) {
                        page.set(key.to_vec(), value);
                    }
                }
            }
            page.set("Parent", Object::Reference(pages_id));
            pages.push((page_id, page));
        }

        for id in referenced_objects(source, &pages) {
            if let Some(object) = source.objects.get(&id) {
                out.objects.insert(id, object.clone());
            }
        }

        let kids: Vec<Object> = pages.iter().map(|(id, _)| Object::Reference(*id)).collect();
        let count = kids.len() as i64;
        for (page_id, page) in pages {
            out.objects.insert(page_id, Object::Dictionary(page));
        }

        let page_tree = Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Pages".to_vec())),
            ("Kids", Object::Array(kids)),
            ("Count", Object::Integer(count)),
        ]);
        out.objects.insert(pages_id, Object::Dictionary(page_tree));

        let catalog_id = out.add_object(Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Catalog".to_vec())),
            ("Pages", Object::Reference(pages_id)),
        ]));
        out.trailer.set("Root", Object::Reference(catalog_id));

        Ok(out)
    }

    /// Serialize a document to bytes
    pub fn to_bytes(doc: &mut Document) -> Result<Vec<u8>> {
        let mut bytes = Vec::new();
        doc.save_to(&mut bytes).context("Failed to serialize PDF")?;
        Ok(bytes)
    }
}

/// 1-indexed page object IDs of `doc`, in page order
pub fn page_ids(doc: &Document) -> Vec<(u32, ObjectId)> {
    let mut pages: Vec<_> = doc.get_pages().into_iter().collect();
    pages.sort_by_key(|(num, _)| *num);
    pages
}

/// Look `key` up on the ancestors of `page`, nearest first.
pub fn inherited_attribute(doc: &Document, page: &Dictionary, key: &[u8]) -> Option<Object> {
    let mut parent = page.get(b"Parent").and_then(Object::as_reference).ok();
    for _ in 0..MAX_TREE_DEPTH {
        let node = doc.get_dictionary(parent?).ok()?;
        if let Ok(value) = node.get(key) {
            return Some(value.clone());
        }
        parent = node.get(b"Parent").and_then(Object::as_reference).ok();
    }
    None
}

/// Ids of every object reachable from the given pages, not counting the
/// pages themselves or page tree and catalog nodes.
fn referenced_objects(doc: &Document, pages: &[(ObjectId, Dictionary)]) -> BTreeSet<ObjectId> {
    let page_ids: BTreeSet<ObjectId> = pages.iter().map(|(id, _)| *id).collect();
    let mut seen = BTreeSet::new();
    let mut stack = Vec::new();
    for (_, page) in pages {
        for (key, value) in page.iter() {
            if key.as_slice() != b"Parent" {
                push_references(value, &mut stack);
            }
        }
    }

    while let Some(id) = stack.pop() {
        if page_ids.contains(&id) || seen.contains(&id) {
            continue;
        }
        let Some(object) = doc.objects.get(&id) else {
            continue;
        };
        if is_tree_node(object) {
            continue;
        }
        seen.insert(id);
        push_references(object, &mut stack);
    }

    seen
}

fn push_references(object: &Object, stack: &mut Vec<ObjectId>) {
    match object {
        Object::Reference(id) => stack.push(*id),
        Object::Array(items) => {
            for item in items {
                push_references(item, stack);
            }
        }
        Object::Dictionary(dict) => {
            for (_, value) in dict.iter() {
                push_references(value, stack);
            }
        }
        Object::Stream(stream) => {
            for (_, value) in stream.dict.iter() {
                push_references(value, stack);
            }
        }
        _ => {}
    }
}

fn is_tree_node(object: &Object) -> bool {
    let dict = match object {
        Object::Dictionary(dict) => dict,
        _ => return false,
    };
    matches!(
        dict.get(b"Type"),
        Ok(Object::Name(name)) if name.as_slice() == b"Pages" || name.as_slice() == b"Catalog"
    )
}
