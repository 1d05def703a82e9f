//! Where search queries go

use std::future::Future;
use url::Url;

use crate::employee::EmployeeSummary;
use crate::error::SearchError;
use crate::Result;

/// Read-only employee lookup.
///
/// The controller only needs "query in, ordered summaries out"; the HTTP
/// implementation below talks to the portal, tests plug in a stub.
pub trait SearchBackend: Send + Sync + 'static {
    fn search(&self, query: &str) -> impl Future<Output = Result<Vec<EmployeeSummary>>> + Send;
}

/// `GET <endpoint>?q=<query>` returning a JSON array of summaries
#[derive(Clone)]
pub struct HttpSearchBackend {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpSearchBackend {
    pub fn new(endpoint: Url) -> Self {
        Self::with_client(reqwest::Client::new(), endpoint)
    }

    pub fn with_client(client: reqwest::Client, endpoint: Url) -> Self {
        Self { client, endpoint }
    }

    pub fn parse(endpoint: &str) -> Result<Self> {
        Ok(Self::new(Url::parse(endpoint)?))
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl SearchBackend for HttpSearchBackend {
    fn search(&self, query: &str) -> impl Future<Output = Result<Vec<EmployeeSummary>>> + Send {
        let request = self.client.get(self.endpoint.clone()).query(&[("q", query)]);

        async move {
            let response = request.send().await?;

            if !response.status().is_success() {
                return Err(SearchError::Status(response.status().as_u16()));
            }

            Ok(response.json::<Vec<EmployeeSummary>>().await?)
        }
    }
}
