use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyId(pub u64);

impl std::fmt::Display for PropertyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for PropertyId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(PropertyId)
    }
}

/// Listing card projection, as returned by `GET /properties` and
/// `GET /properties/favorites/me`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PropertySummary {
    pub id: PropertyId,
    pub title: String,
    pub location: String,
    pub price: f64,
    pub surface: f64,
    #[serde(default)]
    pub images: Vec<String>,
}

impl PropertySummary {
    pub fn cover_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: PropertyId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub location: String,
    pub price: f64,
    pub surface: f64,
    #[serde(default)]
    pub bedrooms: u32,
    #[serde(default)]
    pub floor: Option<i32>,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub construction_year: Option<u32>,
    #[serde(default)]
    pub has_elevator: bool,
    #[serde(default)]
    pub has_cellar: bool,
    #[serde(default)]
    pub images: Vec<String>,
}

impl Default for Property {
    fn default() -> Self {
        Self {
            id: PropertyId(0),
            title: String::new(),
            description: String::new(),
            location: String::new(),
            price: 0.0,
            surface: 0.0,
            bedrooms: 0,
            floor: None,
            kind: String::new(),
            construction_year: None,
            has_elevator: false,
            has_cellar: false,
            images: Vec::new(),
        }
    }
}

impl From<&Property> for PropertySummary {
    fn from(property: &Property) -> Self {
        Self {
            id: property.id,
            title: property.title.clone(),
            location: property.location.clone(),
            price: property.price,
            surface: property.surface,
            images: property.images.clone(),
        }
    }
}
