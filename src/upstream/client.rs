use crate::config::UpstreamConfig;
use crate::error::{AppError, Result};
use crate::metrics::{UPSTREAM_REQUESTS_TOTAL, UPSTREAM_REQUEST_DURATION_SECONDS};
use crate::models::{Artist, ConcertDates, LocationIndex, LocationSet, Profile, Relation};
use crate::upstream::RecordSource;
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::{Duration, Instant};
use tracing::{debug, error};

/// [`RecordSource`] backed by the public JSON API
#[derive(Clone)]
pub struct HttpRecordSource {
    pub(crate) client: Client,
    pub(crate) base_url: String,
    pub(crate) timeout_secs: u64,
}

impl HttpRecordSource {
    /// Create a new client for `config.base_url`
    pub fn new(config: &UpstreamConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout_secs: config.timeout_secs,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `{base_url}{path}` and decode the JSON body.
    ///
    /// `endpoint` is the low-cardinality label used for metrics.
    async fn get_json<T: DeserializeOwned>(&self, endpoint: &str, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        let started = Instant::now();

        let result = self.fetch_and_decode(&url).await;

        UPSTREAM_REQUEST_DURATION_SECONDS
            .with_label_values(&[endpoint])
            .observe(started.elapsed().as_secs_f64());

        match &result {
            Ok(_) => {
                UPSTREAM_REQUESTS_TOTAL
                    .with_label_values(&[endpoint, "success"])
                    .inc();
                debug!(url = %url, "Upstream fetch succeeded");
            }
            Err(e) => {
                UPSTREAM_REQUESTS_TOTAL
                    .with_label_values(&[endpoint, "failure"])
                    .inc();
                error!(url = %url, error = %e, "Upstream fetch failed");
            }
        }

        result
    }

    async fn fetch_and_decode<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                AppError::upstream(
                    url,
                    format!("request timed out after {} seconds", self.timeout_secs),
                )
            } else if e.is_connect() {
                AppError::upstream(url, format!("failed to connect: {}", e))
            } else {
                AppError::upstream(url, format!("request failed: {}", e))
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::upstream(
                url,
                format!("non-success status {}", status),
            ));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| AppError::upstream(url, format!("error decoding response: {}", e)))
    }
}

#[async_trait]
impl RecordSource for HttpRecordSource {
    async fn fetch_artists(&self) -> Result<Vec<Artist>> {
        self.get_json("artists", "/artists").await
    }

    async fn fetch_locations(&self) -> Result<Vec<LocationSet>> {
        let index: LocationIndex = self.get_json("locations", "/locations").await?;
        Ok(index.index)
    }

    async fn fetch_profile(&self, id: u32) -> Result<Profile> {
        let artist_path = format!("/artists/{}", id);
        let locations_path = format!("/locations/{}", id);
        let dates_path = format!("/dates/{}", id);
        let relation_path = format!("/relation/{}", id);

        let (artist, locations, dates, relation) = tokio::try_join!(
            self.get_json::<Artist>("artist", &artist_path),
            self.get_json::<LocationSet>("location", &locations_path),
            self.get_json::<ConcertDates>("dates", &dates_path),
            self.get_json::<Relation>("relation", &relation_path),
        )?;

        Ok(Profile {
            artist,
            locations,
            dates,
            relation,
        })
    }
}
