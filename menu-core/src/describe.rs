//! Canned item descriptions, one small table per food category.
//!
//! Lookup only: nothing here is called during layout.

use serde::{Deserialize, Serialize};

use crate::model::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FoodCategory {
    Appetizer,
    Soup,
    Salad,
    Pasta,
    Rice,
    Seafood,
    Chicken,
    Beef,
    Pork,
    Vegetarian,
    Dessert,
    Beverage,
    #[default]
    Default,
}

impl FoodCategory {
    pub const ALL: [FoodCategory; 13] = [
        FoodCategory::Appetizer,
        FoodCategory::Soup,
        FoodCategory::Salad,
        FoodCategory::Pasta,
        FoodCategory::Rice,
        FoodCategory::Seafood,
        FoodCategory::Chicken,
        FoodCategory::Beef,
        FoodCategory::Pork,
        FoodCategory::Vegetarian,
        FoodCategory::Dessert,
        FoodCategory::Beverage,
        FoodCategory::Default,
    ];

    /// Guess a category from keywords in an English item name. Rules
    /// are tried in order; the first match wins.
    pub fn detect(english_name: &str) -> FoodCategory {
        const RULES: &[(&[&str], FoodCategory)] = &[
            (&["soup", "chowder", "bisque"], FoodCategory::Soup),
            (&["salad"], FoodCategory::Salad),
            (&["pasta", "spaghetti", "fettuccine"], FoodCategory::Pasta),
            (&["rice", "risotto", "paella"], FoodCategory::Rice),
            (&["fish", "shrimp", "lobster", "crab"], FoodCategory::Seafood),
            (&["chicken"], FoodCategory::Chicken),
            (&["beef", "steak"], FoodCategory::Beef),
            (&["pork"], FoodCategory::Pork),
            (&["cake", "ice cream", "dessert"], FoodCategory::Dessert),
            (&["appetizer", "starter"], FoodCategory::Appetizer),
        ];

        let name = english_name.to_lowercase();
        RULES
            .iter()
            .find(|(words, _)| words.iter().any(|w| name.contains(w)))
            .map_or(FoodCategory::Default, |(_, category)| *category)
    }

    fn templates(&self, language: Language) -> &'static [&'static str; 3] {
        let table = match language {
            Language::En => &EN,
            Language::Es => &ES,
        };
        &table[*self as usize]
    }
}

/// Description for `name` from the category's templates. `variant`
/// picks a template modulo the table size, so the same arguments always
/// give the same text. Returns `None` when `name` is blank.
pub fn generate(
    name: &str,
    category: FoodCategory,
    language: Language,
    variant: usize,
) -> Option<String> {
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    let templates = category.templates(language);
    Some(templates[variant % templates.len()].replace("{name}", name))
}

const EN: [[&str; 3]; 13] = [
    // appetizer
    [
        "Start your meal with our delicious {name}, a perfect appetizer to awaken your taste buds with its rich flavors and exquisite presentation.",
        "Our {name} is the ideal way to begin your dining experience, featuring fresh ingredients and a harmonious blend of flavors that will leave you wanting more.",
        "This delightful {name} sets the stage for an unforgettable meal, combining traditional techniques with innovative touches for a truly remarkable starter.",
    ],
    // soup
    [
        "Our hearty {name} is simmered to perfection, combining fresh ingredients and aromatic herbs for a comforting and flavorful experience.",
        "Warm up with our delicious {name}, a rich and satisfying soup made from scratch daily using only the finest ingredients.",
        "This exquisite {name} features a velvety texture and complex flavors, creating a harmonious balance that will delight your palate.",
    ],
    // salad
    [
        "Our crisp and refreshing {name} combines garden-fresh ingredients with a light, tangy dressing for a perfect balance of flavors and textures.",
        "Experience the vibrant flavors of our {name}, featuring seasonal produce and a house-made dressing that elevates this salad to new heights.",
        "This colorful {name} is a celebration of freshness, with crisp vegetables, premium toppings, and a delicate dressing that enhances every bite.",
    ],
    // pasta
    [
        "Our {name} features perfectly cooked pasta tossed in a rich, flavorful sauce made from traditional recipes passed down through generations.",
        "Indulge in our delicious {name}, where al dente pasta meets a sumptuous sauce created with premium ingredients for an authentic taste experience.",
        "This classic {name} showcases the perfect harmony between tender pasta and our signature sauce, creating a dish that's both comforting and sophisticated.",
    ],
    // rice
    [
        "Our flavorful {name} combines perfectly cooked rice with premium ingredients, creating a satisfying dish that's both aromatic and delicious.",
        "Experience the rich flavors of our {name}, where each grain of rice is infused with a harmonious blend of spices and complementary ingredients.",
        "This exquisite {name} showcases the versatility of rice, elevated with carefully selected ingredients and expert preparation techniques.",
    ],
    // seafood
    [
        "Our {name} features the freshest catch of the day, prepared with precision to highlight its natural flavors and delicate texture.",
        "Indulge in our exceptional {name}, where premium seafood is enhanced with complementary ingredients and expert cooking techniques.",
        "This outstanding {name} celebrates the bounty of the sea, prepared in a way that preserves its freshness while adding subtle, complementary flavors.",
    ],
    // chicken
    [
        "Our tender and juicy {name} is prepared to perfection, featuring succulent chicken enhanced with a harmonious blend of seasonings and accompaniments.",
        "Experience the exceptional flavor of our {name}, where quality chicken is transformed through expert preparation and complementary ingredients.",
        "This delicious {name} showcases chicken at its finest, with a perfect balance of tenderness, flavor, and thoughtful preparation.",
    ],
    // beef
    [
        "Our premium {name} features carefully selected beef, cooked to your preference and enhanced with rich, complementary flavors.",
        "Indulge in our exceptional {name}, where high-quality beef is the star, prepared with precision and paired with thoughtfully chosen accompaniments.",
        "This outstanding {name} celebrates the natural flavor of fine beef, elevated through expert preparation and complementary ingredients.",
    ],
    // pork
    [
        "Our tender {name} features succulent pork prepared with care to enhance its natural flavors and create a truly satisfying dish.",
        "Experience the exceptional taste of our {name}, where quality pork is transformed through expert preparation and complementary ingredients.",
        "This delicious {name} showcases pork at its finest, with a perfect balance of tenderness, flavor, and thoughtful preparation.",
    ],
    // vegetarian
    [
        "Our vibrant {name} celebrates the bounty of fresh vegetables, combining diverse textures and flavors for a satisfying vegetarian experience.",
        "Indulge in our creative {name}, where plant-based ingredients are transformed into a dish that's both nutritious and incredibly flavorful.",
        "This thoughtfully prepared {name} proves that vegetarian cuisine can be both exciting and satisfying, with layers of flavor in every bite.",
    ],
    // dessert
    [
        "Our decadent {name} provides the perfect sweet ending to your meal, combining rich flavors and exquisite textures for a memorable dessert experience.",
        "Indulge your sweet tooth with our delicious {name}, a dessert that balances sweetness with complexity for a truly satisfying finale.",
        "This irresistible {name} showcases the art of dessert-making, with careful attention to flavor, texture, and presentation.",
    ],
    // beverage
    [
        "Our refreshing {name} is the perfect accompaniment to your meal, offering a balanced blend of flavors to complement your dining experience.",
        "Quench your thirst with our delicious {name}, crafted with quality ingredients for a beverage that's both refreshing and flavorful.",
        "This exceptional {name} elevates your dining experience with its thoughtful preparation and perfect balance of flavors.",
    ],
    // default
    [
        "Our delicious {name} is prepared with the finest ingredients, creating a perfect balance of flavors that will delight your taste buds.",
        "Experience the authentic taste of our {name}, carefully crafted by our expert chefs using traditional techniques and premium ingredients.",
        "Indulge in our mouthwatering {name}, a customer favorite that combines rich flavors and perfect textures for an unforgettable dining experience.",
    ],
];

const ES: [[&str; 3]; 13] = [
    // appetizer
    [
        "Comience su comida con nuestro delicioso {name}, un aperitivo perfecto para despertar sus papilas gustativas con sus ricos sabores y exquisita presentación.",
        "Nuestro {name} es la forma ideal de comenzar su experiencia gastronómica, con ingredientes frescos y una armoniosa mezcla de sabores que le dejará con ganas de más.",
        "Este delicioso {name} prepara el escenario para una comida inolvidable, combinando técnicas tradicionales con toques innovadores para un entrante verdaderamente extraordinario.",
    ],
    // soup
    [
        "Nuestra sustanciosa {name} está cocida a fuego lento hasta la perfección, combinando ingredientes frescos y hierbas aromáticas para una experiencia reconfortante y sabrosa.",
        "Caliéntese con nuestra deliciosa {name}, una sopa rica y satisfactoria hecha desde cero diariamente usando solo los mejores ingredientes.",
        "Esta exquisita {name} presenta una textura aterciopelada y sabores complejos, creando un equilibrio armonioso que deleitará su paladar.",
    ],
    // salad
    [
        "Nuestra crujiente y refrescante {name} combina ingredientes frescos del jardín con un aderezo ligero y ácido para un equilibrio perfecto de sabores y texturas.",
        "Experimente los vibrantes sabores de nuestra {name}, con productos de temporada y un aderezo casero que eleva esta ensalada a nuevas alturas.",
        "Esta colorida {name} es una celebración de frescura, con vegetales crujientes, coberturas premium y un delicado aderezo que realza cada bocado.",
    ],
    // pasta
    [
        "Nuestra {name} presenta pasta perfectamente cocida bañada en una salsa rica y sabrosa elaborada con recetas tradicionales transmitidas de generación en generación.",
        "Deléitese con nuestra deliciosa {name}, donde la pasta al dente se encuentra con una suntuosa salsa creada con ingredientes premium para una auténtica experiencia de sabor.",
        "Esta clásica {name} muestra la perfecta armonía entre la pasta tierna y nuestra salsa distintiva, creando un plato que es a la vez reconfortante y sofisticado.",
    ],
    // rice
    [
        "Nuestro sabroso {name} combina arroz perfectamente cocido con ingredientes premium, creando un plato satisfactorio que es tanto aromático como delicioso.",
        "Experimente los ricos sabores de nuestro {name}, donde cada grano de arroz está infundido con una mezcla armoniosa de especias e ingredientes complementarios.",
        "Este exquisito {name} muestra la versatilidad del arroz, elevado con ingredientes cuidadosamente seleccionados y técnicas de preparación expertas.",
    ],
    // seafood
    [
        "Nuestro {name} presenta la pesca más fresca del día, preparada con precisión para resaltar sus sabores naturales y delicada textura.",
        "Deléitese con nuestro excepcional {name}, donde los mariscos premium se realzan con ingredientes complementarios y técnicas de cocina expertas.",
        "Este excepcional {name} celebra la generosidad del mar, preparado de una manera que preserva su frescura mientras añade sabores sutiles y complementarios.",
    ],
    // chicken
    [
        "Nuestro tierno y jugoso {name} está preparado a la perfección, presentando pollo suculento realzado con una mezcla armoniosa de condimentos y acompañamientos.",
        "Experimente el sabor excepcional de nuestro {name}, donde el pollo de calidad se transforma a través de una preparación experta e ingredientes complementarios.",
        "Este delicioso {name} muestra el pollo en su máxima expresión, con un equilibrio perfecto de ternura, sabor y preparación cuidadosa.",
    ],
    // beef
    [
        "Nuestro premium {name} presenta carne de res cuidadosamente seleccionada, cocinada a su preferencia y realzada con sabores ricos y complementarios.",
        "Deléitese con nuestro excepcional {name}, donde la carne de res de alta calidad es la estrella, preparada con precisión y emparejada con acompañamientos cuidadosamente elegidos.",
        "Este excepcional {name} celebra el sabor natural de la carne de res fina, elevada a través de una preparación experta e ingredientes complementarios.",
    ],
    // pork
    [
        "Nuestro tierno {name} presenta cerdo suculento preparado con cuidado para realzar sus sabores naturales y crear un plato verdaderamente satisfactorio.",
        "Experimente el sabor excepcional de nuestro {name}, donde el cerdo de calidad se transforma a través de una preparación experta e ingredientes complementarios.",
        "Este delicioso {name} muestra el cerdo en su máxima expresión, con un equilibrio perfecto de ternura, sabor y preparación cuidadosa.",
    ],
    // vegetarian
    [
        "Nuestro vibrante {name} celebra la generosidad de vegetales frescos, combinando diversas texturas y sabores para una experiencia vegetariana satisfactoria.",
        "Deléitese con nuestro creativo {name}, donde los ingredientes de origen vegetal se transforman en un plato que es tanto nutritivo como increíblemente sabroso.",
        "Este {name} preparado cuidadosamente demuestra que la cocina vegetariana puede ser tanto emocionante como satisfactoria, con capas de sabor en cada bocado.",
    ],
    // dessert
    [
        "Nuestro decadente {name} proporciona el perfecto final dulce para su comida, combinando sabores ricos y texturas exquisitas para una experiencia de postre memorable.",
        "Consienta su gusto por lo dulce con nuestro delicioso {name}, un postre que equilibra la dulzura con la complejidad para un final verdaderamente satisfactorio.",
        "Este irresistible {name} muestra el arte de la elaboración de postres, con atención cuidadosa al sabor, textura y presentación.",
    ],
    // beverage
    [
        "Nuestra refrescante {name} es el acompañamiento perfecto para su comida, ofreciendo una mezcla equilibrada de sabores para complementar su experiencia gastronómica.",
        "Sacie su sed con nuestro delicioso {name}, elaborado con ingredientes de calidad para una bebida que es tanto refrescante como sabrosa.",
        "Este excepcional {name} eleva su experiencia gastronómica con su preparación cuidadosa y equilibrio perfecto de sabores.",
    ],
    // default
    [
        "Nuestro delicioso {name} está preparado con los mejores ingredientes, creando un equilibrio perfecto de sabores que deleitará su paladar.",
        "Experimente el auténtico sabor de nuestro {name}, cuidadosamente elaborado por nuestros chefs expertos utilizando técnicas tradicionales e ingredientes premium.",
        "Deléitese con nuestro apetitoso {name}, un favorito de los clientes que combina ricos sabores y texturas perfectas para una experiencia gastronómica inolvidable.",
    ],
];
