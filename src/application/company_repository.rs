// Repository trait for company data access
use crate::domain::company::{Company, CompanyQuery};
use crate::domain::history::HistoryEntry;
use crate::error::FetchError;
use async_trait::async_trait;

#[async_trait]
pub trait CompanyRepository: Send + Sync {
    /// Current snapshot of one company
    async fn fetch_company(&self, query: &CompanyQuery) -> Result<Company, FetchError>;

    /// Value history in whatever order the source returns it
    async fn fetch_history(&self, query: &CompanyQuery) -> Result<Vec<HistoryEntry>, FetchError>;
}
