// Company service - Use cases for the company snapshot and its value history
use crate::application::company_repository::CompanyRepository;
use crate::domain::company::{Company, CompanyQuery};
use crate::domain::history::{RenderableSeries, Series};
use crate::error::FetchError;
use crate::infrastructure::config::HistorySettings;
use std::sync::Arc;

#[derive(Clone)]
pub struct CompanyService {
    repository: Arc<dyn CompanyRepository>,
    history_settings: HistorySettings,
}

impl CompanyService {
    pub fn new(repository: Arc<dyn CompanyRepository>, history_settings: HistorySettings) -> Self {
        Self {
            repository,
            history_settings,
        }
    }

    pub fn history_settings(&self) -> &HistorySettings {
        &self.history_settings
    }

    pub async fn company(&self, query: &CompanyQuery) -> Result<Company, FetchError> {
        self.repository.fetch_company(query).await
    }

    /// Fetch and normalize the value history. An empty history is an error here
    /// so nothing downstream ever sees an empty series.
    pub async fn value_history(&self, query: &CompanyQuery) -> Result<RenderableSeries, FetchError> {
        let entries = self.repository.fetch_history(query).await?;
        if entries.is_empty() {
            return Err(FetchError::EmptyHistory);
        }

        let series = Series::from_entries(&entries, self.history_settings.timestamp_policy)?
            .to_renderable();
        tracing::debug!("Normalized {} history samples", series.len());
        Ok(series)
    }
}
