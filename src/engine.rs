//! The filter-and-render engine state machine.
//!
//! Every user action is a [`Command`] passed to [`Finder::dispatch`]. The
//! visible drink list is never stored; it is recomputed from the current
//! state whenever it is asked for.

use log::debug;

use crate::filter::{available_ingredients, compute_matches, find_drink};
use crate::model::{Catalog, Category, Drink, MatchMode};

/// One user action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    SwitchCategory(Category),
    AddIngredient(String),
    RemoveIngredient(String),
    SetMatchMode(MatchMode),
    ClearFilters,
    SelectDrink(String),
    CloseDetail,
}

/// Whether the catalog has been installed yet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Loading,
    Ready,
}

/// Browsing state for the drink list
#[derive(Debug, Clone)]
pub struct Finder {
    catalog: Option<Catalog>,
    category: Category,
    selected: Vec<String>,
    mode: MatchMode,
    detail: Option<Drink>,
}

impl Default for Finder {
    fn default() -> Self {
        Self::new(Category::default(), MatchMode::default())
    }
}

impl Finder {
    /// A finder with no catalog yet
    pub fn new(category: Category, mode: MatchMode) -> Self {
        Self {
            catalog: None,
            category,
            selected: Vec::new(),
            mode,
            detail: None,
        }
    }

    /// A finder that is ready to browse `catalog`
    pub fn with_catalog(catalog: Catalog) -> Self {
        let mut finder = Self::default();
        finder.install_catalog(catalog);
        finder
    }

    /// Finish the initial load.
    pub fn install_catalog(&mut self, catalog: Catalog) {
        debug!(
            "Installing catalog with {} cocktails and {} mocktails",
            catalog.cocktail_drinks.len(),
            catalog.mocktail_drinks.len()
        );
        self.catalog = Some(catalog);
    }

    pub fn phase(&self) -> Phase {
        if self.catalog.is_some() {
            Phase::Ready
        } else {
            Phase::Loading
        }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    pub fn match_mode(&self) -> MatchMode {
        self.mode
    }

    pub fn detail(&self) -> Option<&Drink> {
        self.detail.as_ref()
    }

    /// The full drink list of the active category
    pub fn drinks(&self) -> &[Drink] {
        self.catalog
            .as_ref()
            .map(|c| c.drinks(self.category))
            .unwrap_or(&[])
    }

    /// Ingredient vocabulary of the active category
    pub fn vocabulary(&self) -> &[String] {
        self.catalog
            .as_ref()
            .map(|c| c.ingredients(self.category))
            .unwrap_or(&[])
    }

    /// Drinks to display for the current selection and mode
    pub fn matches(&self) -> Vec<&Drink> {
        compute_matches(self.drinks(), &self.selected, self.mode)
    }

    /// Picker options for the current selection
    pub fn available_ingredients(&self) -> Vec<String> {
        available_ingredients(self.vocabulary(), &self.selected)
    }

    pub fn dispatch(&mut self, command: Command) {
        debug!("Dispatching {:?}", command);
        match command {
            Command::SwitchCategory(category) => self.switch_category(category),
            Command::AddIngredient(name) => self.add_ingredient(name),
            Command::RemoveIngredient(name) => self.remove_ingredient(&name),
            Command::SetMatchMode(mode) => self.set_match_mode(mode),
            Command::ClearFilters => self.clear_filters(),
            Command::SelectDrink(name) => self.select_drink(&name),
            Command::CloseDetail => self.close_detail(),
        }
    }

    /// Apply a command and return the new state.
    pub fn apply(mut self, command: Command) -> Self {
        self.dispatch(command);
        self
    }

    /// Clears the selection even when `category` is already active.
    pub fn switch_category(&mut self, category: Category) {
        self.category = category;
        self.selected.clear();
    }

    /// Duplicates and blank names are ignored.
    pub fn add_ingredient(&mut self, name: impl Into<String>) {
        let name = name.into();
        if name.trim().is_empty() {
            debug!("Ignoring blank ingredient");
            return;
        }
        if !self.selected.contains(&name) {
            self.selected.push(name);
        }
    }

    pub fn remove_ingredient(&mut self, name: &str) {
        self.selected.retain(|s| s != name);
    }

    pub fn set_match_mode(&mut self, mode: MatchMode) {
        self.mode = mode;
    }

    /// Empty the selection and go back to matching any ingredient.
    pub fn clear_filters(&mut self) {
        self.selected.clear();
        self.mode = MatchMode::Any;
    }

    /// Open the detail view for a drink of the active category.
    ///
    /// Unknown names leave the state untouched.
    pub fn select_drink(&mut self, name: &str) {
        match find_drink(self.drinks(), name).cloned() {
            Some(drink) => self.detail = Some(drink),
            None => debug!("No drink matches '{}'", name),
        }
    }

    pub fn close_detail(&mut self) {
        self.detail = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fallback::fallback_catalog;

    fn names(finder: &Finder) -> Vec<String> {
        finder.matches().iter().map(|d| d.name.clone()).collect()
    }

    #[test]
    fn test_loading_phase_has_no_drinks() {
        let finder = Finder::default();
        assert_eq!(finder.phase(), Phase::Loading);
        assert!(finder.matches().is_empty());
        assert!(finder.available_ingredients().is_empty());
    }

    #[test]
    fn test_install_catalog_makes_ready() {
        let finder = Finder::with_catalog(fallback_catalog());
        assert_eq!(finder.phase(), Phase::Ready);
        assert_eq!(finder.category(), Category::Cocktails);
        assert_eq!(names(&finder), vec!["Americano"]);
    }

    #[test]
    fn test_add_ingredient_filters_and_ignores_duplicates() {
        let mut finder = Finder::with_catalog(fallback_catalog());
        finder.dispatch(Command::AddIngredient("Campari".to_string()));
        finder.dispatch(Command::AddIngredient("Campari".to_string()));
        assert_eq!(finder.selected(), ["Campari"]);
        assert_eq!(names(&finder), vec!["Americano"]);

        finder.dispatch(Command::RemoveIngredient("Campari".to_string()));
        finder.dispatch(Command::AddIngredient("Vodka".to_string()));
        assert!(finder.matches().is_empty());
    }

    #[test]
    fn test_blank_ingredient_is_ignored() {
        let mut finder = Finder::with_catalog(fallback_catalog());
        finder.dispatch(Command::AddIngredient("Vodka".to_string()));
        assert!(finder.matches().is_empty());

        finder.dispatch(Command::AddIngredient(String::new()));
        finder.dispatch(Command::AddIngredient("   ".to_string()));
        assert_eq!(finder.selected(), ["Vodka"]);
        assert!(finder.matches().is_empty());

        finder.dispatch(Command::SetMatchMode(MatchMode::Only));
        finder.dispatch(Command::AddIngredient("\t".to_string()));
        assert_eq!(finder.selected(), ["Vodka"]);
        assert!(finder.matches().is_empty());
    }

    #[test]
    fn test_remove_missing_ingredient_is_noop() {
        let mut finder = Finder::with_catalog(fallback_catalog());
        finder.add_ingredient("Gin");
        finder.remove_ingredient("Rum");
        assert_eq!(finder.selected(), ["Gin"]);
    }

    #[test]
    fn test_selected_ingredients_leave_the_picker() {
        let mut finder = Finder::with_catalog(fallback_catalog());
        finder.add_ingredient("Rum");
        assert_eq!(
            finder.available_ingredients(),
            vec!["Gin", "Tequila", "Vodka", "Whiskey"]
        );
    }

    #[test]
    fn test_switch_category_clears_selection() {
        let mut finder = Finder::with_catalog(fallback_catalog());
        finder.add_ingredient("Vodka");

        finder.dispatch(Command::SwitchCategory(Category::Mocktails));
        assert!(finder.selected().is_empty());
        assert_eq!(names(&finder), vec!["Virgin Mojito"]);
        assert_eq!(
            finder.available_ingredients(),
            vec!["Fruit Juice", "Mint", "Soda Water", "Sugar Syrup"]
        );

        // Same category again still clears
        finder.add_ingredient("Mint");
        finder.dispatch(Command::SwitchCategory(Category::Mocktails));
        assert!(finder.selected().is_empty());
    }

    #[test]
    fn test_clear_filters_resets_mode() {
        let mut finder = Finder::with_catalog(fallback_catalog())
            .apply(Command::SetMatchMode(MatchMode::All))
            .apply(Command::AddIngredient("Campari".to_string()));
        assert_eq!(finder.match_mode(), MatchMode::All);

        finder.dispatch(Command::ClearFilters);
        assert!(finder.selected().is_empty());
        assert_eq!(finder.match_mode(), MatchMode::Any);
    }

    #[test]
    fn test_select_drink_by_normalized_name() {
        let mut finder = Finder::with_catalog(fallback_catalog())
            .apply(Command::SwitchCategory(Category::Mocktails));

        finder.dispatch(Command::SelectDrink("virgin-mojito!!".to_string()));
        assert_eq!(finder.detail().unwrap().name, "Virgin Mojito");

        finder.dispatch(Command::CloseDetail);
        assert!(finder.detail().is_none());
    }

    #[test]
    fn test_select_unknown_drink_is_silent() {
        let mut finder = Finder::with_catalog(fallback_catalog());
        finder.select_drink("Americano");
        finder.select_drink("Virgin Mojito");
        // Mocktail is not in the active category, the open detail stays
        assert_eq!(finder.detail().unwrap().name, "Americano");
    }
}
