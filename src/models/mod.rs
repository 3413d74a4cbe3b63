use serde::{Deserialize, Serialize};

/// Origin of an accommodation record
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Provenance {
    /// Curated record from the hosted store
    Local,
    /// Live result from the third-party booking search
    ThirdParty,
}

/// A photo attached to an accommodation, in display order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Photo {
    pub url: String,
    #[serde(default)]
    pub is_main: bool,
}

/// Live pricing block carried only by third-party records
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LivePricing {
    pub base_rate: f64,
    pub discount_percent: Option<f64>,
    pub available: bool,
}

/// Curated accommodation from the hosted relational store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocalStay {
    pub id: String,
    pub name: String,
    /// Village or port name, free text
    pub location: String,
    pub description: String,
    /// Tags from the fixed category vocabulary; unknown tags are inert
    #[serde(default)]
    pub category_tags: Vec<String>,
    pub price_per_night: f64,
    /// Review rating on a 0-5 scale
    pub rating: f64,
    pub stars: Option<u8>,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub photos: Vec<Photo>,
}

/// Live accommodation returned by the third-party booking search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LiveStay {
    pub id: String,
    pub name: String,
    pub location: String,
    pub description: Option<String>,
    /// Provider review score on a 0-10 scale
    pub review_score: f64,
    pub stars: Option<u8>,
    pub price_per_night: f64,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub has_wifi: bool,
    #[serde(default)]
    pub has_pool: bool,
    #[serde(default)]
    pub has_parking: bool,
    pub pricing: LivePricing,
    #[serde(default)]
    pub photos: Vec<Photo>,
}

/// Core accommodation record
///
/// The two provenances carry different optional fields and are never
/// intermixed in a single record, so they are separate variants rather
/// than one struct full of options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "provenance", rename_all = "snake_case")]
pub enum Accommodation {
    Local(LocalStay),
    ThirdParty(LiveStay),
}

impl Accommodation {
    pub fn provenance(&self) -> Provenance {
        match self {
            Accommodation::Local(_) => Provenance::Local,
            Accommodation::ThirdParty(_) => Provenance::ThirdParty,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Accommodation::Local(stay) => &stay.id,
            Accommodation::ThirdParty(stay) => &stay.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Accommodation::Local(stay) => &stay.name,
            Accommodation::ThirdParty(stay) => &stay.name,
        }
    }

    /// URL slug derived from the name: lowercased, runs of anything
    /// non-alphanumeric collapsed to single dashes
    pub fn slug(&self) -> String {
        let mut slug = String::with_capacity(self.name().len());
        let mut last_dash = true;
        for c in self.name().chars() {
            if c.is_alphanumeric() {
                slug.extend(c.to_lowercase());
                last_dash = false;
            } else if !last_dash {
                slug.push('-');
                last_dash = true;
            }
        }
        if slug.ends_with('-') {
            slug.pop();
        }
        slug
    }

    pub fn location(&self) -> &str {
        match self {
            Accommodation::Local(stay) => &stay.location,
            Accommodation::ThirdParty(stay) => &stay.location,
        }
    }

    pub fn description(&self) -> Option<&str> {
        match self {
            Accommodation::Local(stay) => Some(&stay.description),
            Accommodation::ThirdParty(stay) => stay.description.as_deref(),
        }
    }

    pub fn price_per_night(&self) -> f64 {
        match self {
            Accommodation::Local(stay) => stay.price_per_night,
            Accommodation::ThirdParty(stay) => stay.price_per_night,
        }
    }

    /// Rating on a common 0-5 scale; third-party review scores are 0-10
    /// and get halved here
    pub fn rating(&self) -> f64 {
        match self {
            Accommodation::Local(stay) => stay.rating,
            Accommodation::ThirdParty(stay) => stay.review_score / 2.0,
        }
    }

    pub fn stars(&self) -> Option<u8> {
        match self {
            Accommodation::Local(stay) => stay.stars,
            Accommodation::ThirdParty(stay) => stay.stars,
        }
    }

    pub fn amenities(&self) -> &[String] {
        match self {
            Accommodation::Local(stay) => &stay.amenities,
            Accommodation::ThirdParty(stay) => &stay.amenities,
        }
    }

    /// Category tags; third-party records carry none
    pub fn category_tags(&self) -> &[String] {
        match self {
            Accommodation::Local(stay) => &stay.category_tags,
            Accommodation::ThirdParty(_) => &[],
        }
    }

    pub fn photos(&self) -> &[Photo] {
        match self {
            Accommodation::Local(stay) => &stay.photos,
            Accommodation::ThirdParty(stay) => &stay.photos,
        }
    }

    /// The photo flagged as main, falling back to the first photo
    pub fn main_photo(&self) -> Option<&Photo> {
        let photos = self.photos();
        photos.iter().find(|p| p.is_main).or_else(|| photos.first())
    }
}
