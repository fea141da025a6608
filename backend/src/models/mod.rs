use serde::{Deserialize, Serialize};

/// Which side of the trade a listing is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ListingType {
    #[default]
    Sale,
    Buy,
}

impl ListingType {
    pub fn label(self) -> &'static str {
        match self {
            ListingType::Sale => "Satılık",
            ListingType::Buy => "Alıcı",
        }
    }
}

/// Transaction-type selector applied to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TypeFilter {
    #[default]
    All,
    Sale,
    Buy,
}

impl TypeFilter {
    pub fn admits(self, kind: ListingType) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Sale => kind == ListingType::Sale,
            TypeFilter::Buy => kind == ListingType::Buy,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub members: u64,
    pub category: String,
    pub price: u64,
    #[serde(rename = "type")]
    pub kind: ListingType,
    pub contact: String,
    pub featured: bool,
}

/// A validated draft that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewListing {
    pub name: String,
    pub description: String,
    pub members: u64,
    pub category: String,
    pub price: u64,
    pub kind: ListingType,
    pub contact: String,
}

impl NewListing {
    pub fn into_listing(self, id: u64) -> Listing {
        Listing {
            id,
            name: self.name,
            description: self.description,
            members: self.members,
            category: self.category,
            price: self.price,
            kind: self.kind,
            contact: self.contact,
            featured: false, // only seed data is ever featured
        }
    }
}

/// Raw form contents, exactly as typed by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Draft {
    pub name: String,
    pub description: String,
    pub members: String,
    pub category: String,
    pub price: String,
    #[serde(rename = "type")]
    pub kind: ListingType,
    pub contact: String,
}

pub fn seed_listings() -> Vec<Listing> {
    vec![
        Listing {
            id: 1,
            name: "Kripto Para Türkiye".to_string(),
            description: "Aktif kripto para topluluğu, günlük analizler ve tartışmalar".to_string(),
            members: 15420,
            category: "Kripto".to_string(),
            price: 2500,
            kind: ListingType::Sale,
            contact: "@kriptoturk".to_string(),
            featured: true,
        },
        Listing {
            id: 2,
            name: "Teknoloji Haberleri".to_string(),
            description: "Son teknoloji haberleri ve incelemeler".to_string(),
            members: 8750,
            category: "Teknoloji".to_string(),
            price: 1200,
            kind: ListingType::Sale,
            contact: "@techtr".to_string(),
            featured: false,
        },
        Listing {
            id: 3,
            name: "Oyun Topluluğu Arıyorum".to_string(),
            description: "Aktif oyuncu topluluğu satın almak istiyorum".to_string(),
            members: 0,
            category: "Oyun".to_string(),
            price: 800,
            kind: ListingType::Buy,
            contact: "@gamebuyer".to_string(),
            featured: false,
        },
    ]
}
