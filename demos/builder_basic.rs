//! Basic builder usage
//!
//! Scales a short cookie recipe from four to six portions and prints
//! every step of the serving control.

use recipe_scaler::{RecipeScaler, ServingControl};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let ingredients = [
        "250 g Mehl",
        "125 g Butter",
        "1 Päckchen Vanillezucker",
        "1 Prise Salz",
        "Puderzucker zum Bestäuben",
    ];

    println!("=== 4 -> 6 Portionen ===");
    let scaled = RecipeScaler::builder()
        .lines(ingredients)
        .base_portions(4)
        .target_portions(6)
        .build()?;
    for line in &scaled.ingredients {
        println!("  {}", line);
    }

    println!("\n=== Stepping down ===");
    let mut control = ServingControl::new(4, 1, 20)?;
    while control.can_decrement() {
        let portions = control.decrement();
        let scaled = RecipeScaler::builder()
            .lines(ingredients)
            .base_portions(4)
            .target_portions(portions)
            .build()?;
        println!("{}: {}", scaled.label, scaled.ingredients.join(", "));
    }

    Ok(())
}
