use menu_core::describe::{self, FoodCategory};
use menu_core::{
    BuiltinMetrics, DocumentAssembler, FontFamily, Item, ItemStyle, Language, LocalizedText,
    MenuDocument, PdfEmitter, Section,
};

/// Item with generated descriptions in both languages.
fn dish(en: &str, es: &str, price: &str, variant: usize) -> Item {
    let category = FoodCategory::detect(en);
    let description = LocalizedText::new(
        describe::generate(en, category, Language::En, variant).unwrap_or_default(),
        describe::generate(es, category, Language::Es, variant).unwrap_or_default(),
    );
    Item::new(LocalizedText::new(en, es), price).with_description(description)
}

fn main() {
    std::fs::create_dir_all("output").unwrap();
    let path = "output/rust-menu.pdf";

    let mut menu = MenuDocument::new(LocalizedText::new("Harbor Grill", "Parrilla del Puerto"));
    menu.description = LocalizedText::new("Lunch and dinner", "Almuerzo y cena");
    menu.layout.columns = 2;
    menu.theme.font_family = FontFamily::SansSerif;
    menu.theme.item_style = ItemStyle::Separated;

    menu.sections.push(
        Section::new(LocalizedText::new("Starters", "Entradas"))
            .with_item(dish("Clam Chowder", "Sopa de Almejas", "$9", 0))
            .with_item(dish("House Salad", "Ensalada de la Casa", "$8", 1))
            .with_item(dish("Crab Cakes", "Pastelitos de Cangrejo", "$14", 2)),
    );
    menu.sections.push(
        Section::new(LocalizedText::new("Mains", "Platos Fuertes"))
            .with_item(dish("Grilled Salmon", "Salmón a la Parrilla", "$27", 0))
            .with_item(dish("Ribeye Steak", "Bistec Ribeye", "$34", 1).with_image("images/ribeye.jpg"))
            .with_item(dish("Chicken Marsala", "Pollo Marsala", "$22", 2))
            .with_item(dish("Seafood Paella", "Paella de Mariscos", "$31", 0))
            .with_item(dish("Spaghetti Carbonara", "Espagueti a la Carbonara", "$19", 1)),
    );
    menu.sections.push(
        Section::new(LocalizedText::new("Desserts", "Postres"))
            .with_item(dish("Chocolate Cake", "Pastel de Chocolate", "$9", 0))
            .with_item(dish("Key Lime Pie", "Pay de Limón", "$8", 1)),
    );

    let metrics = BuiltinMetrics::new();
    let export = DocumentAssembler::new(&metrics)
        .export(&menu, PdfEmitter::create(path).unwrap().set_info("Subject", "Menu"))
        .unwrap();

    for warning in &export.warnings {
        eprintln!("warning: {}", warning);
    }
    println!("Written {} page(s) to {}", export.page_count, path);
}
