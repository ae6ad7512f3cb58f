use crate::labels::{order_number, Error, LabelPage, PageReport, Placement};
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, ObjectId};

const ANNOTATION_FONT: &[u8] = b"F_SKU";

/// Loads the document and extracts one `LabelPage` per page. A page whose
/// text cannot be decoded keeps a `None` order number instead of failing the
/// batch; an unloadable document fails it entirely.
pub fn read_pages(bytes: &[u8]) -> Result<Vec<LabelPage>, Error> {
    let doc = Document::load_mem(bytes)?;

    let mut pages = Vec::new();
    for (page_number, _object_id) in doc.get_pages() {
        let order = match doc.extract_text(&[page_number]) {
            Ok(text) => order_number::extract_order_number(&text),
            Err(err) => {
                tracing::warn!(
                    page = page_number,
                    "could not extract page text: {:?}",
                    err
                );
                None
            }
        };
        pages.push(LabelPage {
            page_number,
            order_number: order,
        });
    }

    Ok(pages)
}

/// Writes each planned annotation onto its page and serializes the result.
/// Pages without an annotation keep their original content; the page count
/// never changes.
pub fn annotate(
    bytes: &[u8],
    reports: &[PageReport],
    placement: &Placement,
) -> Result<Vec<u8>, Error> {
    let mut doc = Document::load_mem(bytes)?;
    let page_map = doc.get_pages();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });

    for report in reports {
        let Some(annotation) = report.annotation.as_deref() else {
            continue;
        };
        let Some(&page_id) = page_map.get(&report.page_number) else {
            continue;
        };

        register_font(&mut doc, page_id, font_id)?;
        append_text(&mut doc, page_id, annotation, placement)?;
    }

    let mut out = Vec::new();
    doc.save_to(&mut out)?;
    Ok(out)
}

fn register_font(doc: &mut Document, page_id: ObjectId, font_id: ObjectId) -> Result<(), Error> {
    let resources = doc.get_or_create_resources(page_id)?.as_dict_mut()?;
    if !resources.has(b"Font") {
        resources.set("Font", lopdf::Dictionary::new());
    }
    let fonts = resources.get_mut(b"Font")?.as_dict_mut()?;
    fonts.set(ANNOTATION_FONT, Object::Reference(font_id));
    Ok(())
}

fn append_text(
    doc: &mut Document,
    page_id: ObjectId,
    text: &str,
    placement: &Placement,
) -> Result<(), Error> {
    let data = doc.get_page_content(page_id)?;
    let mut content = Content::decode(&data)?;

    content.operations.push(Operation::new("q", vec![]));
    content.operations.push(Operation::new("BT", vec![]));
    content.operations.push(Operation::new(
        "Tf",
        vec![
            Object::Name(ANNOTATION_FONT.to_vec()),
            placement.font_size.into(),
        ],
    ));
    content.operations.push(Operation::new(
        "Td",
        vec![placement.x.into(), placement.y.into()],
    ));
    content
        .operations
        .push(Operation::new("Tj", vec![Object::string_literal(text)]));
    content.operations.push(Operation::new("ET", vec![]));
    content.operations.push(Operation::new("Q", vec![]));

    let encoded = content.encode()?;
    doc.change_page_content(page_id, encoded)?;
    Ok(())
}
