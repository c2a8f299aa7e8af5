//! Static place catalog and emergency directory, both embedded at build time.

use std::collections::HashSet;

use crate::models::place::{Category, EmergencyContact, Place};

const CATALOG_JSON: &str = include_str!("../data/catalog.json");
const CONTACTS_JSON: &str = include_str!("../data/emergency_contacts.json");

pub const DEFAULT_SEARCH_LIMIT: usize = 20;
pub const MAX_SEARCH_LIMIT: usize = 60;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("malformed catalog data: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("duplicate place id {0}")]
    DuplicateId(String),
}

#[derive(Debug, Clone)]
pub struct Catalog {
    places: Vec<Place>,
    contacts: Vec<EmergencyContact>,
}

impl Catalog {
    pub fn load() -> Result<Self, CatalogError> {
        Self::from_json(CATALOG_JSON, CONTACTS_JSON)
    }

    pub fn from_json(places: &str, contacts: &str) -> Result<Self, CatalogError> {
        let places: Vec<Place> = serde_json::from_str(places)?;
        let contacts = serde_json::from_str(contacts)?;

        let mut ids = HashSet::new();
        if let Some(dup) = places.iter().find(|p| !ids.insert(p.id.as_str())) {
            return Err(CatalogError::DuplicateId(dup.id.clone()));
        }

        Ok(Self { places, contacts })
    }

    pub fn all(&self) -> &[Place] {
        &self.places
    }

    pub fn by_category(&self, category: Category) -> Vec<&Place> {
        self.places
            .iter()
            .filter(|p| p.category == category)
            .collect()
    }

    pub fn get(&self, id: &str) -> Option<&Place> {
        self.places.iter().find(|p| p.id == id)
    }

    pub fn emergency_contacts(&self) -> &[EmergencyContact] {
        &self.contacts
    }

    /// Every whitespace token of `query` must occur somewhere in the place's
    /// text. Places whose title contains the whole query rank first, then
    /// those whose description does; ties keep catalog order.
    pub fn search(&self, query: &str, category: Option<Category>, limit: usize) -> Vec<&Place> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }
        let tokens: Vec<&str> = query.split_whitespace().collect();

        let mut hits: Vec<(bool, bool, &Place)> = self
            .places
            .iter()
            .filter(|p| category.map_or(true, |c| p.category == c))
            .filter_map(|p| {
                let text = haystack(p);
                if !tokens.iter().all(|t| text.contains(t)) {
                    return None;
                }
                let in_title = p.title.to_lowercase().contains(&query);
                let in_description = p.description.to_lowercase().contains(&query);
                Some((in_title, in_description, p))
            })
            .collect();

        hits.sort_by_key(|&(in_title, in_description, _)| (!in_title, !in_description));

        hits.into_iter()
            .take(limit.min(MAX_SEARCH_LIMIT))
            .map(|(_, _, p)| p)
            .collect()
    }
}

fn haystack(place: &Place) -> String {
    format!(
        "{} {} {} {} {} {}",
        place.title,
        place.description,
        place.category.as_str(),
        place.tags.join(" "),
        place.location,
        place.district
    )
    .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::load().expect("embedded catalog parses")
    }

    fn ids<'a>(places: &[&'a Place]) -> Vec<&'a str> {
        places.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn embedded_data_loads() {
        let catalog = catalog();
        assert!(catalog.all().len() >= 30);
        assert!(!catalog.emergency_contacts().is_empty());
        assert!(catalog.get("hundru-falls").is_some());
    }

    #[test]
    fn empty_query_finds_nothing() {
        assert!(catalog().search("   ", None, 20).is_empty());
    }

    #[test]
    fn all_tokens_must_match() {
        let catalog = catalog();
        let hits = catalog.search("waterfall ranchi", None, 60);
        assert!(!hits.is_empty());
        for place in &hits {
            let text = haystack(place);
            assert!(text.contains("waterfall") && text.contains("ranchi"));
        }
        assert!(catalog.search("waterfall atlantis", None, 60).is_empty());
    }

    #[test]
    fn title_matches_rank_first() {
        let catalog = catalog();
        let hits = catalog.search("Falls", None, 60);
        let first_non_title = hits
            .iter()
            .position(|p| !p.title.to_lowercase().contains("falls"))
            .unwrap_or(hits.len());
        assert!(hits[..first_non_title]
            .iter()
            .all(|p| p.title.to_lowercase().contains("falls")));
        assert!(hits[first_non_title..]
            .iter()
            .all(|p| !p.title.to_lowercase().contains("falls")));
    }

    #[test]
    fn description_matches_rank_before_tag_matches() {
        let places = r#"[
            {"id":"a","title":"Alpha","description":"quiet","category":"destination","tags":["sunset"],"location":"X","district":"X","image_url":"","latitude":0,"longitude":0},
            {"id":"b","title":"Beta","description":"best sunset view","category":"destination","tags":[],"location":"X","district":"X","image_url":"","latitude":0,"longitude":0},
            {"id":"c","title":"Sunset Point","description":"","category":"destination","tags":[],"location":"X","district":"X","image_url":"","latitude":0,"longitude":0}
        ]"#;
        let catalog = Catalog::from_json(places, "[]").unwrap();
        assert_eq!(ids(&catalog.search("sunset", None, 10)), vec!["c", "b", "a"]);
    }

    #[test]
    fn category_filter_and_limit() {
        let catalog = catalog();
        let temples = catalog.search("pilgrimage", Some(Category::Temple), 60);
        assert!(temples.iter().all(|p| p.category == Category::Temple));
        assert!(!temples.is_empty());
        assert_eq!(catalog.search("a", None, 3).len(), 3);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let places = r#"[
            {"id":"a","title":"A","description":"","category":"temple","location":"","district":"","image_url":"","latitude":0,"longitude":0},
            {"id":"a","title":"B","description":"","category":"temple","location":"","district":"","image_url":"","latitude":0,"longitude":0}
        ]"#;
        assert!(matches!(
            Catalog::from_json(places, "[]"),
            Err(CatalogError::DuplicateId(id)) if id == "a"
        ));
    }
}
