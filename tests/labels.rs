use facil_uno::labels::{
    annotate, extract_order_number, plan, read_pages, ColumnRoles, CsvTable, LabelPage, Placement,
};
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};

//  Unit tests over the label-matching transform

fn label_pdf(texts: &[&str]) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut kids: Vec<Object> = Vec::new();
    for text in texts {
        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 12.into()]),
                Operation::new("Td", vec![50.into(), 600.into()]),
                Operation::new("Tj", vec![Object::string_literal(*text)]),
                Operation::new("ET", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(
            dictionary! {},
            content.encode().expect("encode content"),
        ));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
        });
        kids.push(page_id.into());
    }

    let pages = dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => texts.len() as i32,
        "Resources" => resources_id,
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages));
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).expect("save pdf");
    bytes
}

fn table() -> CsvTable {
    CsvTable::parse(
        "SKU,Cliente,Numero de orden,Cantidad\n\
         SKU-001,ACME,4521,3\n\
         SKU-002,ACME,1234,\n",
    )
    .expect("parse csv")
}

#[test]
fn extraction_priority_follows_the_spec_examples() {
    assert_eq!(
        extract_order_number("N° Interno: #1234"),
        Some("1234".to_string())
    );
    assert_eq!(extract_order_number("#5678"), Some("5678".to_string()));
    assert_eq!(extract_order_number("Pedido sin numero"), None);
}

#[test]
fn example_row_produces_quantity_annotation() {
    let pages = [
        LabelPage {
            page_number: 1,
            order_number: Some("4521".to_string()),
        },
        LabelPage {
            page_number: 2,
            order_number: Some("9999".to_string()),
        },
    ];
    let roles = ColumnRoles {
        sku: 0,
        order: 2,
        quantity: 3,
    };
    let reports = plan(&pages, &table(), &roles);

    assert_eq!(reports[0].annotation.as_deref(), Some("SKU-001 (x3)"));
    assert_eq!(reports[1].annotation, None);
}

#[test]
fn detected_columns_match_explicit_ones() {
    let table = table();
    let detected = ColumnRoles::resolve(&table.headers, None, None, None).expect("resolve");
    assert_eq!(
        detected,
        ColumnRoles {
            sku: 0,
            order: 2,
            quantity: 3
        }
    );
}

#[test]
fn page_count_is_preserved_and_output_is_deterministic() {
    let pdf = label_pdf(&["Interno: #4521", "Sin datos de pedido", "Interno: #1234"]);

    let pages = read_pages(&pdf).expect("read pages");
    assert_eq!(pages.len(), 3);

    let roles = ColumnRoles {
        sku: 0,
        order: 2,
        quantity: 3,
    };
    let reports = plan(&pages, &table(), &roles);

    let first = annotate(&pdf, &reports, &Placement::default()).expect("annotate");
    let second = annotate(&pdf, &reports, &Placement::default()).expect("annotate again");

    let output = Document::load_mem(&first).expect("load output");
    assert_eq!(output.get_pages().len(), 3);
    assert_eq!(first, second);

    // the planning step is deterministic on its own as well
    assert_eq!(reports, plan(&pages, &table(), &roles));
}

#[test]
fn synthetic_pages_yield_their_order_numbers() {
    let pdf = label_pdf(&["N Interno: #7777", "texto sin numero"]);
    let pages = read_pages(&pdf).expect("read pages");

    assert_eq!(pages[0].order_number.as_deref(), Some("7777"));
    assert_eq!(pages[1].order_number, None);
}

#[test]
fn garbage_input_aborts_without_output() {
    assert!(read_pages(b"definitely not a pdf").is_err());
    assert!(CsvTable::parse("").is_err());
}
