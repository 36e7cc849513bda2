// Company domain model
use std::collections::HashMap;

/// Snapshot of a simulated company as reported by the realm API.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Company {
    pub id: i64,
    pub realm: i64,
    pub name: String,
    pub logo: String,
    pub level: i64,
    pub tier: i64,
    pub year: i64,
    pub date_joined: String,
    pub date_reset: String,
    pub country: String,
    pub rank: i64,
    pub rating: String,
    pub value: f64,
    pub building_value: f64,
    pub total_buildings: i64,
    pub workers: i64,
    pub administration_overhead: f64,
    pub patents_value: f64,
    pub bonds_sold: f64,
    pub buildings: HashMap<String, i64>,
    pub tags: HashMap<String, String>,
    pub updated_at: String,
}

/// Realm and company identifiers for one lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyQuery {
    pub realm: String,
    pub company: String,
}

impl CompanyQuery {
    /// Both identifiers must be present and non-blank.
    pub fn new(realm: Option<&str>, company: Option<&str>) -> Option<Self> {
        let realm = realm.map(str::trim).filter(|r| !r.is_empty())?;
        let company = company.map(str::trim).filter(|c| !c.is_empty())?;
        Some(Self {
            realm: realm.to_string(),
            company: company.to_string(),
        })
    }
}
