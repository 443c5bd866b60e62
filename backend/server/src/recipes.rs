//! # Recipe Catalog
//!
//! Static list of recipes and the ingredients each needs. A recipe is
//! recommended only when every ingredient name is present in stock; quantity
//! and expiration are not considered.
use std::collections::HashSet;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Recipe {
    pub name: String,
    pub ingredients: Vec<String>,
}

impl Recipe {
    pub fn new(name: &str, ingredients: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            ingredients: ingredients.iter().map(|i| i.to_string()).collect(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct RecipeCatalog {
    recipes: Vec<Recipe>,
}

impl Default for RecipeCatalog {
    fn default() -> Self {
        Self::new(vec![
            Recipe::new("Salada", &["Tomato", "Lettuce", "Olive Oil"]),
            Recipe::new("Omelete", &["Egg", "Cheese", "Ham"]),
            Recipe::new("Smoothie", &["Milk", "Banana", "Honey"]),
        ])
    }
}

impl RecipeCatalog {
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self { recipes }
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Recipe names whose ingredients are all in `available`, in catalog order.
    pub fn recommend<'a, I>(&self, available: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let available: HashSet<&str> = available.into_iter().collect();

        self.recipes
            .iter()
            .filter(|recipe| {
                recipe
                    .ingredients
                    .iter()
                    .all(|ingredient| available.contains(ingredient.as_str()))
            })
            .map(|recipe| recipe.name.clone())
            .collect()
    }
}
