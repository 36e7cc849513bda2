// Response decoder - maps SimcoTools JSON bodies onto domain records
use crate::domain::company::Company;
use crate::domain::history::HistoryEntry;
use crate::error::FetchError;
use serde::{Deserialize, Deserializer};
use std::collections::HashMap;

/// `null` and missing fields both fall back to the zero value.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Default, Deserialize)]
struct CompanyResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    company: CompanyInfo,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct CompanyInfo {
    #[serde(deserialize_with = "null_as_default")]
    id: i64,
    #[serde(deserialize_with = "null_as_default")]
    realm: i64,
    #[serde(deserialize_with = "null_as_default")]
    name: String,
    #[serde(deserialize_with = "null_as_default")]
    logo: String,
    #[serde(deserialize_with = "null_as_default")]
    level: i64,
    #[serde(deserialize_with = "null_as_default")]
    tier: i64,
    #[serde(deserialize_with = "null_as_default")]
    year: i64,
    #[serde(deserialize_with = "null_as_default")]
    date_joined: String,
    #[serde(deserialize_with = "null_as_default")]
    date_reset: String,
    #[serde(deserialize_with = "null_as_default")]
    country: String,
    #[serde(deserialize_with = "null_as_default")]
    rank: i64,
    #[serde(deserialize_with = "null_as_default")]
    rating: String,
    #[serde(deserialize_with = "null_as_default")]
    value: f64,
    #[serde(deserialize_with = "null_as_default")]
    building_value: f64,
    #[serde(deserialize_with = "null_as_default")]
    total_buildings: i64,
    #[serde(deserialize_with = "null_as_default")]
    workers: i64,
    #[serde(deserialize_with = "null_as_default")]
    administration_overhead: f64,
    #[serde(deserialize_with = "null_as_default")]
    patents_value: f64,
    #[serde(deserialize_with = "null_as_default")]
    bonds_sold: f64,
    #[serde(deserialize_with = "null_as_default")]
    buildings: HashMap<String, i64>,
    #[serde(deserialize_with = "null_as_default")]
    tags: HashMap<String, String>,
    #[serde(deserialize_with = "null_as_default")]
    updated_at: String,
}

impl From<CompanyInfo> for Company {
    fn from(c: CompanyInfo) -> Self {
        Self {
            id: c.id,
            realm: c.realm,
            name: c.name,
            logo: c.logo,
            level: c.level,
            tier: c.tier,
            year: c.year,
            date_joined: c.date_joined,
            date_reset: c.date_reset,
            country: c.country,
            rank: c.rank,
            rating: c.rating,
            value: c.value,
            building_value: c.building_value,
            total_buildings: c.total_buildings,
            workers: c.workers,
            administration_overhead: c.administration_overhead,
            patents_value: c.patents_value,
            bonds_sold: c.bonds_sold,
            buildings: c.buildings,
            tags: c.tags,
            updated_at: c.updated_at,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct HistoryResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    history: Vec<HistoryItem>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct HistoryItem {
    #[serde(deserialize_with = "null_as_default")]
    date: String,
    #[serde(deserialize_with = "null_as_default")]
    value: f64,
}

pub fn decode_company(body: &[u8]) -> Result<Company, FetchError> {
    let response: CompanyResponse = serde_json::from_slice(body)?;
    Ok(response.company.into())
}

/// An empty list is a successful decode; callers decide what "no data" means.
pub fn decode_history(body: &[u8]) -> Result<Vec<HistoryEntry>, FetchError> {
    let response: HistoryResponse = serde_json::from_slice(body)?;
    Ok(response
        .history
        .into_iter()
        .map(|item| HistoryEntry::new(item.date, item.value))
        .collect())
}
