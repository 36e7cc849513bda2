// SimcoTools API repository implementation
use crate::application::company_repository::CompanyRepository;
use crate::domain::company::{Company, CompanyQuery};
use crate::domain::history::HistoryEntry;
use crate::error::FetchError;
use crate::infrastructure::config::ApiSettings;
use crate::infrastructure::decoder::{decode_company, decode_history};
use anyhow::Context;
use async_trait::async_trait;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct SimcoRepository {
    base_url: String,
    client: reqwest::Client,
}

impl SimcoRepository {
    pub fn new(settings: &ApiSettings) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn company_url(&self, query: &CompanyQuery) -> String {
        format!(
            "{}/v1/realms/{}/companies/{}/",
            self.base_url,
            urlencoding::encode(&query.realm),
            urlencoding::encode(&query.company)
        )
    }

    fn history_url(&self, query: &CompanyQuery) -> String {
        format!("{}history", self.company_url(query))
    }

    /// GET `url` and read the whole body.
    async fn get_body(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        tracing::debug!("Requesting {}", url);

        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "*/*")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::debug!("{} answered {}: {}", url, status, body);
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(FetchError::ResponseBody)?;
        tracing::debug!("Received {} bytes from {}", body.len(), url);
        Ok(body.to_vec())
    }
}

#[async_trait]
impl CompanyRepository for SimcoRepository {
    async fn fetch_company(&self, query: &CompanyQuery) -> Result<Company, FetchError> {
        let body = self.get_body(&self.company_url(query)).await?;
        decode_company(&body)
    }

    async fn fetch_history(&self, query: &CompanyQuery) -> Result<Vec<HistoryEntry>, FetchError> {
        let body = self.get_body(&self.history_url(query)).await?;
        let entries = decode_history(&body)?;
        tracing::debug!(
            "Decoded {} history entries for company {} in realm {}",
            entries.len(),
            query.company,
            query.realm
        );
        Ok(entries)
    }
}
