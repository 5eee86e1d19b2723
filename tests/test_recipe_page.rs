use recipe_scaler::extractors::extract_document;
use recipe_scaler::{scale_html, RecipeScaler, ScaleError, ServingControl};

fn create_recipe_page(servings: &str, ingredients: &[&str]) -> String {
    let items: String = ingredients
        .iter()
        .map(|item| format!("<li>{}</li>\n", item))
        .collect();

    format!(
        r#"
        <!DOCTYPE html>
        <html>
        <head><title>Vanillekipferl</title></head>
        <body>
            <h2>Vanillekipferl</h2>
            <p><strong>Portionen:</strong> {servings}</p>
            <h3>Zutaten:</h3>
            <ul>
                {items}
            </ul>
            <h3>Zubereitung:</h3>
            <ol><li>Teig kneten und kalt stellen.</li></ol>
        </body>
        </html>
        "#
    )
}

#[test]
fn test_extract_heading_list_page() {
    let html = create_recipe_page(
        "4-6 Portionen",
        &["200 g Mehl", "1 Päckchen Vanillezucker", "Puderzucker zum Bestäuben"],
    );

    let document = extract_document(&html).unwrap();
    assert_eq!(document.base_portions, 4);
    assert_eq!(
        document.ingredients,
        vec!["200 g Mehl", "1 Päckchen Vanillezucker", "Puderzucker zum Bestäuben"]
    );
}

#[test]
fn test_scale_page_to_target() {
    let html = create_recipe_page(
        "4 Portionen",
        &["200 g Mehl", "1 Päckchen Vanillezucker", "Puderzucker zum Bestäuben"],
    );

    let scaled = scale_html(&html, 1).unwrap();
    assert_eq!(scaled.base_portions, 4);
    assert_eq!(scaled.target_portions, 1);
    assert_eq!(scaled.label, "1 Portion");
    assert_eq!(
        scaled.ingredients,
        vec!["50 g Mehl", "1/2 Päckchen Vanillezucker", "Puderzucker zum Bestäuben"]
    );
}

#[test]
fn test_scale_page_with_json_ld_only() {
    let html = r#"
        <!DOCTYPE html>
        <html>
        <head>
            <script type="application/ld+json">
            {
                "@context": "https://schema.org",
                "@type": "Recipe",
                "name": "Zimtsterne",
                "recipeYield": "30 Stück",
                "recipeIngredient": ["3 Stück Eiweiß", "250 g Puderzucker", "1 TL Zimt"]
            }
            </script>
        </head>
        <body><h1>Zimtsterne</h1></body>
        </html>
    "#;

    let scaled = RecipeScaler::builder()
        .html(html)
        .base_portions(3)
        .target_portions(2)
        .build()
        .unwrap();

    assert_eq!(scaled.base_portions, 3);
    assert_eq!(
        scaled.ingredients,
        vec!["2 Stück Eiweiß", "166,67 g Puderzucker", "2/3 TL Zimt"]
    );
}

#[test]
fn test_page_without_recipe() {
    let html = "<html><body><p>Frohe Weihnachten!</p></body></html>";
    assert!(matches!(
        scale_html(html, 4),
        Err(ScaleError::NoExtractorMatched)
    ));
}

#[test]
fn test_target_outside_bounds() {
    let html = create_recipe_page("4 Portionen", &["200 g Mehl"]);
    assert!(matches!(
        scale_html(&html, 21),
        Err(ScaleError::InvalidArgument(_))
    ));
}

#[test]
fn test_stepping_through_control() {
    let html = create_recipe_page("2 Portionen", &["1 EL Honig", "3 Stück Eier"]);
    let document = extract_document(&html).unwrap();
    let mut control = ServingControl::new(document.base_portions, 1, 20).unwrap();

    let rendered: Vec<Vec<String>> = [control.decrement(), control.decrement(), control.increment()]
        .into_iter()
        .map(|portions| {
            RecipeScaler::builder()
                .lines(document.ingredients.clone())
                .base_portions(document.base_portions)
                .target_portions(portions)
                .build()
                .unwrap()
                .ingredients
        })
        .collect();

    assert_eq!(rendered[0], vec!["1/2 EL Honig", "2 Stück Eier"]);
    assert_eq!(rendered[1], vec!["1/2 EL Honig", "2 Stück Eier"]);
    assert_eq!(rendered[2], vec!["1 EL Honig", "3 Stück Eier"]);
}
