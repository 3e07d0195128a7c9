use crate::models::{FoodItem, Meal, NutritionTargets, WeekPlan};

/// Display the daily targets a plan was generated against.
pub fn display_targets(targets: &NutritionTargets) {
    println!();
    println!("=== Daily Targets ===");
    println!(
        "{} kcal | protein {} g, carbs {} g, fat {} g",
        targets.calories, targets.protein, targets.carbs, targets.fat
    );
    println!();
}

/// Display a single meal as an indented item list with totals.
pub fn display_meal(label: &str, meal: &Meal) {
    if meal.is_empty() {
        println!("  {:<10} (nothing suitable)", label);
        return;
    }

    let names: Vec<&str> = meal.items.iter().map(|i| i.name.as_str()).collect();
    println!(
        "  {:<10} {:>5.0} kcal  {}",
        label,
        meal.total_calories,
        names.join(", ")
    );
}

/// Display a full week plan, one block per day.
pub fn display_week_plan(plan: &WeekPlan) {
    println!();
    println!("=== Weekly Meal Plan ===");

    for day in &plan.days {
        println!();
        println!("--- {} ---", day.day);
        for (slot, meal) in day.meals.meals() {
            display_meal(slot.as_str(), meal);
        }
    }

    println!();
    println!("--- Summary ---");
    let distinct = plan.distinct_food_ids().len();
    let avg_daily: f64 = plan
        .days
        .iter()
        .map(|d| {
            d.meals
                .meals()
                .iter()
                .map(|(_, m)| m.total_calories)
                .sum::<f64>()
        })
        .sum::<f64>()
        / plan.days.len().max(1) as f64;

    println!("Distinct foods used: {}", distinct);
    println!("Average daily calories: {:.0}", avg_daily);
    println!();
}

/// Display a simple list of catalog foods.
pub fn display_food_list(foods: &[FoodItem]) {
    if foods.is_empty() {
        println!("Catalog is empty.");
        return;
    }

    println!();
    println!("=== Catalog ({} items) ===", foods.len());
    println!();

    let max_name_len = foods.iter().map(|f| f.name.len()).max().unwrap_or(10);
    for food in foods {
        let slots: Vec<&str> = food.categories.iter().map(|s| s.as_str()).collect();
        println!(
            "  {:<width$} {:>5.0} kcal  P:{:<4.0} C:{:<4.0} F:{:<4.0} [{}]{}",
            food.name,
            food.calories,
            food.protein,
            food.carbs,
            food.fat,
            slots.join("/"),
            if food.veg { " veg" } else { "" },
            width = max_name_len
        );
    }
    println!();
}
