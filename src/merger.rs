use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use lopdf::{Document, Object, ObjectId};

use crate::error::{Edge2PdfError, Result};

/// Concatenates the input documents' pages, in input order, into one PDF.
/// Zero inputs is an error: nothing to merge must not produce an empty file.
pub fn merge(inputs: &[PathBuf], output: &Path) -> Result<()> {
    if inputs.is_empty() {
        return Err(Edge2PdfError::Merge(
            "no input files to merge".to_string(),
        ));
    }

    let mut max_id = 1;
    let mut pages: Vec<(ObjectId, Object)> = Vec::new();
    let mut objects: BTreeMap<ObjectId, Object> = BTreeMap::new();

    for input in inputs {
        let mut doc = Document::load(input).map_err(|e| {
            Edge2PdfError::Merge(format!("cannot read \"{}\": {}", input.display(), e))
        })?;

        // Move every document into one object id space.
        doc.renumber_objects_with(max_id);
        max_id = doc.max_id + 1;

        for (_, object_id) in doc.get_pages() {
            let object = doc
                .get_object(object_id)
                .map_err(|e| {
                    Edge2PdfError::Merge(format!(
                        "invalid page object in \"{}\": {}",
                        input.display(),
                        e
                    ))
                })?
                .to_owned();

            pages.push((object_id, object));
        }

        objects.extend(doc.objects);
    }

    if pages.is_empty() {
        return Err(Edge2PdfError::Merge(
            "input documents contain no pages".to_string(),
        ));
    }

    let mut document = Document::with_version("1.5");

    let mut catalog_object: Option<(ObjectId, Object)> = None;
    let mut pages_object: Option<(ObjectId, Object)> = None;

    for (object_id, object) in objects {
        match object.type_name().unwrap_or("") {
            "Catalog" => {
                catalog_object = Some((
                    catalog_object.map(|(id, _)| id).unwrap_or(object_id),
                    object,
                ));
            }
            "Pages" => {
                if let Ok(dictionary) = object.as_dict() {
                    let mut dictionary = dictionary.clone();
                    if let Some((_, ref existing)) = pages_object {
                        if let Ok(existing) = existing.as_dict() {
                            dictionary.extend(existing);
                        }
                    }

                    pages_object = Some((
                        pages_object.map(|(id, _)| id).unwrap_or(object_id),
                        Object::Dictionary(dictionary),
                    ));
                }
            }
            // Page objects are re-inserted below with their new parent.
            "Page" => {}
            // Outlines would carry dangling references after the merge.
            "Outlines" | "Outline" => {}
            _ => {
                document.objects.insert(object_id, object);
            }
        }
    }

    let (pages_id, pages_root) = pages_object.ok_or_else(|| {
        Edge2PdfError::Merge("no page tree found in input documents".to_string())
    })?;

    for (object_id, object) in &pages {
        if let Ok(dictionary) = object.as_dict() {
            let mut dictionary = dictionary.clone();
            dictionary.set("Parent", pages_id);
            document
                .objects
                .insert(*object_id, Object::Dictionary(dictionary));
        }
    }

    let (catalog_id, catalog_root) = catalog_object.ok_or_else(|| {
        Edge2PdfError::Merge("no catalog found in input documents".to_string())
    })?;

    let mut pages_dictionary = pages_root
        .as_dict()
        .map_err(|e| Edge2PdfError::Merge(e.to_string()))?
        .clone();
    pages_dictionary.set("Count", pages.len() as i64);
    pages_dictionary.set(
        "Kids",
        pages
            .iter()
            .map(|(id, _)| Object::Reference(*id))
            .collect::<Vec<_>>(),
    );
    document
        .objects
        .insert(pages_id, Object::Dictionary(pages_dictionary));

    let mut catalog_dictionary = catalog_root
        .as_dict()
        .map_err(|e| Edge2PdfError::Merge(e.to_string()))?
        .clone();
    catalog_dictionary.set("Pages", pages_id);
    catalog_dictionary.remove(b"Outlines");
    document
        .objects
        .insert(catalog_id, Object::Dictionary(catalog_dictionary));

    document.trailer.set("Root", catalog_id);
    document.max_id = document.objects.len() as u32;
    document.renumber_objects();
    document.compress();

    document.save(output).map_err(|e| {
        Edge2PdfError::Merge(format!("cannot write \"{}\": {}", output.display(), e))
    })?;

    Ok(())
}
