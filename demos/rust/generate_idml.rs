use menu_core::{
    BuiltinMetrics, DisplayLanguageSet, DocumentAssembler, IdmlEmitter, Language, MenuDocument,
};

fn main() {
    std::fs::create_dir_all("output").unwrap();
    let path = "output/rust-menu.idml";

    let mut menu = MenuDocument::from_json(include_str!("../menus/dinner.json")).unwrap();

    // Print the Spanish edition only.
    let mut languages = DisplayLanguageSet::bilingual();
    languages.toggle(Language::En);
    menu.display_languages = languages;

    let metrics = BuiltinMetrics::new();
    let file = std::fs::File::create(path).unwrap();
    let export = DocumentAssembler::new(&metrics)
        .export(&menu, IdmlEmitter::new(std::io::BufWriter::new(file)))
        .unwrap();

    println!("Written {} page(s) to {}", export.page_count, path);
}
