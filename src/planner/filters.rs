use crate::models::{FoodItem, PreferenceProfile};

/// Reduce the catalog to items this user can be served.
///
/// Allergy terms match loosely: a term drops an item when it appears as a
/// case-insensitive substring of the name or of any tag. Over-filtering
/// is the safe direction for allergens. Dislikes match the item id or
/// display name exactly.
///
/// An empty result is valid; downstream slots degrade to empty meals.
pub fn filter_catalog<'a>(items: &'a [FoodItem], prefs: &PreferenceProfile) -> Vec<&'a FoodItem> {
    items
        .iter()
        .filter(|item| !prefs.vegetarian_only || item.veg)
        .filter(|item| !matches_allergy(item, &prefs.allergies))
        .filter(|item| !is_disliked(item, &prefs.dislikes))
        .collect()
}

fn matches_allergy(item: &FoodItem, allergies: &[String]) -> bool {
    if allergies.is_empty() {
        return false;
    }

    let name = item.name.to_lowercase();
    allergies.iter().any(|allergy| {
        let term = allergy.to_lowercase();
        name.contains(&term) || item.tags.iter().any(|tag| tag.to_lowercase().contains(&term))
    })
}

fn is_disliked(item: &FoodItem, dislikes: &[String]) -> bool {
    dislikes
        .iter()
        .any(|entry| entry == &item.id || entry == &item.name)
}
