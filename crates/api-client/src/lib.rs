use crate::error::ClientError;
use analyzer::{
    DashboardQuery, DashboardSnapshot, FilterPredicate, IndexDetail, IndexView, QuadrantsView,
    StatisticsView,
};
use async_trait::async_trait;
use core_types::{Category, SortKey};
use reqwest::Url;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::json;

pub mod error;
pub mod live;
pub mod responses;
// --- Public API ---
pub use live::{LiveDashboard, Outcome, SequenceGuard, Ticket};
pub use responses::{Envelope, HealthResponse};

/// The abstract interface to a dashboard server.
/// The live session only depends on this trait, so the transport (HTTP or
/// an in-process mock) can be swapped out.
#[async_trait]
pub trait DashboardClient: Send + Sync {
    async fn health(&self) -> Result<HealthResponse, ClientError>;

    async fn indices(&self) -> Result<Vec<IndexView>, ClientError>;

    async fn filter(&self, predicate: &FilterPredicate) -> Result<Vec<IndexView>, ClientError>;

    async fn statistics(&self, predicate: &FilterPredicate) -> Result<StatisticsView, ClientError>;

    async fn quadrants(&self, predicate: &FilterPredicate) -> Result<QuadrantsView, ClientError>;

    async fn top_performers(
        &self,
        metric: SortKey,
        limit: Option<usize>,
    ) -> Result<Vec<IndexView>, ClientError>;

    async fn index_detail(&self, name: &str) -> Result<IndexDetail, ClientError>;

    async fn compare(&self, names: &[String]) -> Result<Vec<IndexView>, ClientError>;

    async fn categories(&self) -> Result<Vec<Category>, ClientError>;

    async fn dashboard(&self, query: &DashboardQuery) -> Result<DashboardSnapshot, ClientError>;
}

/// A `DashboardClient` for the `web-server` JSON API.
#[derive(Debug, Clone)]
pub struct HttpDashboardClient {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpDashboardClient {
    /// `base_url` is the server root, e.g. `http://localhost:5002`.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let parsed = Url::parse(base_url)
            .map_err(|e| ClientError::InvalidBaseUrl(format!("{base_url}: {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") || parsed.cannot_be_a_base() {
            return Err(ClientError::InvalidBaseUrl(format!(
                "{base_url}: expected an http(s) URL"
            )));
        }

        Ok(Self {
            client: reqwest::Client::builder().build()?,
            base_url: parsed,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The base URL with `segments` appended, each one percent-encoded.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ClientError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T, ClientError> {
        Self::send(self.client.get(self.endpoint(segments)?)).await
    }

    async fn get_with<T: DeserializeOwned, Q: Serialize + ?Sized>(
        &self,
        segments: &[&str],
        query: &Q,
    ) -> Result<T, ClientError> {
        let request = self.client.get(self.endpoint(segments)?).query(query);
        Self::send(request).await
    }

    async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        segments: &[&str],
        body: &B,
    ) -> Result<T, ClientError> {
        let request = self.client.post(self.endpoint(segments)?).json(body);
        Self::send(request).await
    }

    async fn send<T: DeserializeOwned>(request: reqwest::RequestBuilder) -> Result<T, ClientError> {
        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        let envelope: Envelope<T> = serde_json::from_str(&text).map_err(|e| {
            ClientError::Deserialization(format!(
                "{e}. Status: {status}. Original text: {text}"
            ))
        })?;

        if !status.is_success() && envelope.success {
            return Err(ClientError::Api {
                status: status.as_u16(),
                message: text,
            });
        }
        envelope.into_result(status.as_u16())
    }
}

#[async_trait]
impl DashboardClient for HttpDashboardClient {
    async fn health(&self) -> Result<HealthResponse, ClientError> {
        let response = self.client.get(self.endpoint(&["api", "health"])?).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Api {
                status: status.as_u16(),
                message: response.text().await?,
            });
        }
        Ok(response.json().await?)
    }

    async fn indices(&self) -> Result<Vec<IndexView>, ClientError> {
        self.get(&["api", "indices"]).await
    }

    async fn filter(&self, predicate: &FilterPredicate) -> Result<Vec<IndexView>, ClientError> {
        self.post(&["api", "indices", "filter"], predicate).await
    }

    async fn statistics(&self, predicate: &FilterPredicate) -> Result<StatisticsView, ClientError> {
        self.get_with(&["api", "statistics"], predicate).await
    }

    async fn quadrants(&self, predicate: &FilterPredicate) -> Result<QuadrantsView, ClientError> {
        self.get_with(&["api", "quadrants"], predicate).await
    }

    async fn top_performers(
        &self,
        metric: SortKey,
        limit: Option<usize>,
    ) -> Result<Vec<IndexView>, ClientError> {
        let mut query = vec![("metric", metric.as_str().to_string())];
        if let Some(limit) = limit {
            query.push(("limit", limit.to_string()));
        }
        self.get_with(&["api", "top-performers"], &query).await
    }

    async fn index_detail(&self, name: &str) -> Result<IndexDetail, ClientError> {
        self.get(&["api", "index", name]).await
    }

    async fn compare(&self, names: &[String]) -> Result<Vec<IndexView>, ClientError> {
        self.post(&["api", "compare"], &json!({ "indices": names })).await
    }

    async fn categories(&self) -> Result<Vec<Category>, ClientError> {
        self.get(&["api", "categories"]).await
    }

    async fn dashboard(&self, query: &DashboardQuery) -> Result<DashboardSnapshot, ClientError> {
        self.post(&["api", "dashboard"], query).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_must_be_http() {
        assert!(matches!(
            HttpDashboardClient::new("localhost:5002"),
            Err(ClientError::InvalidBaseUrl(_))
        ));
        assert!(matches!(
            HttpDashboardClient::new("mailto:ops@example.com"),
            Err(ClientError::InvalidBaseUrl(_))
        ));
    }

    #[test]
    fn malformed_base_url_is_rejected_up_front() {
        assert!(matches!(
            HttpDashboardClient::new("http://bad host:x"),
            Err(ClientError::InvalidBaseUrl(_))
        ));
    }

    #[test]
    fn endpoints_extend_the_base_path() {
        let client = HttpDashboardClient::new("http://localhost:5002/").unwrap();
        assert_eq!(
            client.endpoint(&["api", "indices"]).unwrap().as_str(),
            "http://localhost:5002/api/indices"
        );

        let prefixed = HttpDashboardClient::new("http://localhost:5002/dash/").unwrap();
        assert_eq!(
            prefixed.endpoint(&["api", "categories"]).unwrap().as_str(),
            "http://localhost:5002/dash/api/categories"
        );
    }

    #[test]
    fn path_segments_are_percent_encoded() {
        let client = HttpDashboardClient::new("http://localhost:5002").unwrap();
        assert_eq!(
            client.endpoint(&["api", "index", "NIFTY 50/X"]).unwrap().path(),
            "/api/index/NIFTY%2050%2FX"
        );
    }
}
