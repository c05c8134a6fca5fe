mod common;

use common::{dinner_menu, items_only, tight_style, FailingMeasurer, FixedMeasurer};
use menu_core::{
    BlockKind, BuiltinFont, DisplayLanguageSet, DocumentAssembler, DrawKind, FontSpec, Item,
    Language, LayoutError, LayoutStyle, LocalizedText, MeasureError, MenuDocument, PageGeometry,
    Section, TextMeasurer, TextRole,
};

const EPS: f64 = 1e-9;

#[test]
fn three_short_items_share_first_column() {
    let measurer = FixedMeasurer::new(0.05, 0.6);
    let doc = items_only(3, 1, DisplayLanguageSet::english_only());
    let layout = DocumentAssembler::new(&measurer).assemble(&doc).unwrap();

    let items: Vec<_> = layout.placements_of(BlockKind::Item).collect();
    assert_eq!(items.len(), 3);
    for p in &items {
        assert_eq!((p.page, p.column), (0, 0));
        assert!((p.height - 0.6).abs() < EPS);
    }
    assert!(items[0].y < items[1].y && items[1].y < items[2].y);

    let names: Vec<&str> = layout
        .text_runs()
        .filter(|t| t.role == TextRole::ItemName)
        .map(|t| t.text.as_str())
        .collect();
    assert_eq!(names, vec!["Dish 1", "Dish 2", "Dish 3"]);
}

#[test]
fn ten_items_split_five_per_column() {
    // Letter with half-inch margins: a 10in column holds five 2in items.
    let measurer = FixedMeasurer::new(0.05, 2.0);
    let doc = items_only(10, 2, DisplayLanguageSet::english_only());
    let layout = DocumentAssembler::new(&measurer)
        .with_style(tight_style())
        .assemble(&doc)
        .unwrap();

    assert_eq!(layout.page_count(), 1);
    let columns: Vec<usize> = layout
        .placements_of(BlockKind::Item)
        .map(|p| {
            assert_eq!(p.page, 0);
            p.column
        })
        .collect();
    assert_eq!(columns, vec![0, 0, 0, 0, 0, 1, 1, 1, 1, 1]);
    assert!(layout.warnings.is_empty());
}

#[test]
fn wrapped_description_height_is_line_count_times_line_height() {
    let measurer = FixedMeasurer::new(0.1, 0.25);
    // Seven nine-letter words fit a 7.5in line, eight do not.
    let description = vec!["abcdefghi"; 28].join(" ");
    let font = FontSpec::new(BuiltinFont::TimesRoman, 12.0);
    let wrapped = measurer.wrap_to_width(&description, &font, 7.5).unwrap();
    assert_eq!(wrapped.len(), 4);

    let mut doc = MenuDocument::new(LocalizedText::default());
    doc.display_languages = DisplayLanguageSet::english_only();
    doc.sections.push(
        Section::new(LocalizedText::default()).with_item(
            Item::new(LocalizedText::default(), "")
                .with_description(LocalizedText::new(description.clone(), "")),
        ),
    );

    let layout = DocumentAssembler::new(&measurer).assemble(&doc).unwrap();
    let item = layout.placements_of(BlockKind::Item).next().unwrap();
    assert!((item.height - wrapped.len() as f64 * 0.25).abs() < EPS);
}

#[test]
fn last_language_cannot_be_disabled() {
    let mut languages = DisplayLanguageSet::bilingual();
    assert!(languages.toggle(Language::En));
    assert_eq!(languages, DisplayLanguageSet::spanish_only());

    assert!(!languages.toggle(Language::Es));
    assert!(!languages.set(Language::Es, false));
    assert_eq!(languages, DisplayLanguageSet::spanish_only());
}

#[test]
fn layout_is_deterministic() {
    let measurer = FixedMeasurer::new(0.07, 0.2);
    let doc = dinner_menu();
    let assembler = DocumentAssembler::new(&measurer);
    assert_eq!(assembler.assemble(&doc).unwrap(), assembler.assemble(&doc).unwrap());
}

#[test]
fn every_item_is_placed_once() {
    let measurer = FixedMeasurer::new(0.07, 0.3);
    let mut doc = dinner_menu();
    let extra = doc.sections[1].clone();
    for _ in 0..12 {
        doc.sections.push(extra.clone());
    }
    doc.layout.columns = 3;

    let layout = DocumentAssembler::new(&measurer).assemble(&doc).unwrap();
    assert!(layout.page_count() > 1);
    assert_eq!(layout.placements_of(BlockKind::Item).count(), doc.item_count());
    assert_eq!(
        layout.placements_of(BlockKind::SectionHeader).count(),
        doc.sections.len()
    );
}

#[test]
fn cursor_only_moves_forward() {
    let measurer = FixedMeasurer::new(0.07, 0.3);
    let mut doc = dinner_menu();
    let extra = doc.sections[0].clone();
    for _ in 0..20 {
        doc.sections.push(extra.clone());
    }
    doc.layout.columns = 2;

    let layout = DocumentAssembler::new(&measurer).assemble(&doc).unwrap();
    let bottom = layout.frame.content_bottom();
    for pair in layout.placements.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        assert!((a.page, a.column) <= (b.page, b.column));
        if (a.page, a.column) == (b.page, b.column) {
            assert!(b.y >= a.y + a.height - EPS);
        }
    }
    for p in &layout.placements {
        assert!(p.page < layout.page_count());
        assert!(p.column < layout.frame.columns);
        assert!(p.overflow || p.y + p.height <= bottom + EPS);
    }
}

#[test]
fn english_line_precedes_spanish_line() {
    let measurer = FixedMeasurer::new(0.07, 0.2);
    let layout = DocumentAssembler::new(&measurer)
        .assemble(&dinner_menu())
        .unwrap();

    let y_of = |text: &str, role: TextRole| {
        layout
            .text_runs()
            .find(|t| t.text == text && t.role == role)
            .map(|t| t.y)
            .unwrap()
    };
    assert!(y_of("Starters", TextRole::SectionTitle) < y_of("Entradas", TextRole::SectionTitle));
    assert!(y_of("Tortilla Soup", TextRole::ItemName) < y_of("Sopa de Tortilla", TextRole::ItemName));

    let spanish = layout
        .text_runs()
        .find(|t| t.text == "Entradas")
        .unwrap();
    assert_eq!(spanish.language, Some(Language::Es));
    assert!(spanish.font.font.is_italic());
}

#[test]
fn hidden_language_draws_nothing() {
    let measurer = FixedMeasurer::new(0.07, 0.2);
    let mut doc = dinner_menu();
    doc.display_languages = DisplayLanguageSet::spanish_only();
    let layout = DocumentAssembler::new(&measurer).assemble(&doc).unwrap();

    assert!(layout
        .text_runs()
        .all(|t| t.language != Some(Language::En)));
    // "Fish Tacos" has no Spanish name; its price still gets a line.
    assert_eq!(layout.placements_of(BlockKind::Item).count(), doc.item_count());
    assert!(layout.text_runs().any(|t| t.text == "$18" && t.role == TextRole::Price));
}

#[test]
fn oversized_item_is_forced_onto_fresh_column() {
    let measurer = FixedMeasurer::new(0.1, 0.5);
    let tall = vec!["x"; 30].join("\n");
    let mut doc = MenuDocument::new(LocalizedText::default());
    doc.display_languages = DisplayLanguageSet::english_only();
    doc.sections.push(
        Section::new(LocalizedText::default())
            .with_item(Item::new(LocalizedText::new("Before", ""), ""))
            .with_item(
                Item::new(LocalizedText::new("Tasting Menu", ""), "$90")
                    .with_description(LocalizedText::new(tall, "")),
            )
            .with_item(Item::new(LocalizedText::new("After", ""), "")),
    );

    let layout = DocumentAssembler::new(&measurer)
        .with_style(tight_style())
        .assemble(&doc)
        .unwrap();

    let items: Vec<_> = layout.placements_of(BlockKind::Item).collect();
    assert_eq!(items.len(), 3);
    assert!(!items[0].overflow);
    assert!(items[1].overflow);
    assert_eq!((items[1].page, items[1].column), (1, 0));
    assert!((items[1].y - layout.frame.content_top()).abs() < EPS);
    assert_eq!(items[2].page, 2);

    assert_eq!(layout.warnings.len(), 1);
    let warning = &layout.warnings[0];
    assert_eq!(warning.page, 1);
    assert!(warning.block.contains("Tasting Menu"));
    assert!(warning.height > warning.available);
}

#[test]
fn measurement_failure_aborts_the_run() {
    let measurer = FailingMeasurer { bad: '☃' };
    let mut doc = dinner_menu();
    doc.sections[1]
        .items
        .push(Item::new(LocalizedText::new("Snowman ☃", ""), "$1"));

    match DocumentAssembler::new(&measurer).assemble(&doc) {
        Err(LayoutError::Measurement { text, source }) => {
            assert!(text.contains('☃'));
            assert_eq!(source, MeasureError::MissingGlyph { ch: '☃' });
        }
        other => panic!("expected a measurement error, got {:?}", other),
    }
}

#[test]
fn too_many_columns_is_rejected() {
    let measurer = FixedMeasurer::new(0.1, 0.2);
    let mut doc = dinner_menu();
    doc.layout = PageGeometry {
        columns: 4,
        ..PageGeometry::default()
    };
    assert!(matches!(
        DocumentAssembler::new(&measurer).assemble(&doc),
        Err(LayoutError::InvalidGeometry(_))
    ));
}

#[test]
fn negative_spacing_is_rejected_before_layout() {
    let measurer = FixedMeasurer::new(0.05, 0.5);
    let doc = items_only(4, 1, DisplayLanguageSet::english_only());
    let style = LayoutStyle {
        item_spacing: -1.0,
        ..LayoutStyle::default()
    };
    match DocumentAssembler::new(&measurer).with_style(style).assemble(&doc) {
        Err(LayoutError::InvalidStyle(msg)) => assert!(msg.contains("item_spacing")),
        other => panic!("expected a style error, got {:?}", other),
    }
}

#[test]
fn trailing_newline_adds_no_line() {
    let measurer = FixedMeasurer::new(0.05, 0.25);
    let mut doc = items_only(1, 1, DisplayLanguageSet::english_only());
    doc.sections[0].items[0].description = LocalizedText::new("Fresh\n", "");
    let layout = DocumentAssembler::new(&measurer)
        .with_style(tight_style())
        .assemble(&doc)
        .unwrap();

    let item = layout.placements_of(BlockKind::Item).next().unwrap();
    // One name line and one description line.
    assert!((item.height - 0.5).abs() < EPS);
    let descriptions = layout
        .text_runs()
        .filter(|t| t.role == TextRole::ItemDescription)
        .count();
    assert_eq!(descriptions, 1);
}

#[test]
fn wide_price_gets_its_own_line_above_the_name() {
    // A 7.5in column and a 7in price leave no room for the name beside it.
    let measurer = FixedMeasurer::new(0.05, 0.25);
    let mut doc = items_only(1, 1, DisplayLanguageSet::english_only());
    doc.sections[0].items[0].price = "x".repeat(140);
    let layout = DocumentAssembler::new(&measurer)
        .with_style(tight_style())
        .assemble(&doc)
        .unwrap();

    let price = layout.text_runs().find(|t| t.role == TextRole::Price).unwrap();
    let name = layout.text_runs().find(|t| t.role == TextRole::ItemName).unwrap();
    assert!(price.y + 0.25 <= name.y + EPS);
    assert_eq!(name.text, "Dish 1");
    assert!(!layout
        .instructions()
        .any(|i| matches!(i.kind, DrawKind::Leader(_))));
}
