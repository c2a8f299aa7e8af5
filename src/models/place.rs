use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Destination,
    Festival,
    Temple,
    Valley,
    Waterfall,
    Wildlife,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Destination => "destination",
            Category::Festival => "festival",
            Category::Temple => "temple",
            Category::Valley => "valley",
            Category::Waterfall => "waterfall",
            Category::Wildlife => "wildlife",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Place {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: Category,
    #[serde(default)]
    pub tags: Vec<String>,
    pub location: String,
    pub district: String,
    pub image_url: String,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Serialize)]
pub struct PlaceDetails<'a> {
    #[serde(flatten)]
    pub place: &'a Place,
    pub map_embed_url: Option<String>,
    pub directions_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmergencyContact {
    pub service: String,
    pub number: String,
    pub description: String,
    pub available_24x7: bool,
}

#[derive(Debug, Deserialize)]
pub struct PlaceFilter {
    pub category: Option<Category>,
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
    pub category: Option<Category>,
    pub limit: Option<usize>,
}
