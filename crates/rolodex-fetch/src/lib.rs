// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result, anyhow, bail};
use reqwest::StatusCode;
use reqwest::blocking::Client as HttpClient;
use rolodex_app::RawBatch;
use serde::Deserialize;
use std::time::Duration;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://randomuser.me/api/";
pub const DEFAULT_BATCH_SIZE: usize = 12;
pub const MAX_BATCH_SIZE: usize = 5_000;

/// Only the fields a directory record is built from.
const INCLUDED_FIELDS: &str = "name,email,location,picture,phone,dob";

#[derive(Debug, Clone)]
pub struct Client {
    base_url: Url,
    results: usize,
    nationalities: Vec<String>,
    seed: Option<String>,
    timeout: Duration,
    http: HttpClient,
}

impl Client {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let trimmed = base_url.trim();
        if trimmed.is_empty() {
            bail!("api.base_url must not be empty");
        }
        let base_url =
            Url::parse(trimmed).with_context(|| format!("parse api.base_url {trimmed:?}"))?;
        if !matches!(base_url.scheme(), "http" | "https") {
            bail!(
                "api.base_url {trimmed:?} must use http or https, got {:?}",
                base_url.scheme()
            );
        }

        let http = HttpClient::builder()
            .timeout(timeout)
            .build()
            .context("build HTTP client")?;

        Ok(Self {
            base_url,
            results: DEFAULT_BATCH_SIZE,
            nationalities: Vec::new(),
            seed: None,
            timeout,
            http,
        })
    }

    pub fn with_results(mut self, results: usize) -> Result<Self> {
        if !(1..=MAX_BATCH_SIZE).contains(&results) {
            bail!("api.results must be between 1 and {MAX_BATCH_SIZE}, got {results}");
        }
        self.results = results;
        Ok(self)
    }

    pub fn with_nationalities<S: AsRef<str>>(mut self, nationalities: &[S]) -> Self {
        self.nationalities = nationalities
            .iter()
            .map(|code| code.as_ref().trim().to_ascii_lowercase())
            .filter(|code| !code.is_empty())
            .collect();
        self
    }

    pub fn with_seed(mut self, seed: Option<&str>) -> Self {
        self.seed = seed
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(str::to_owned);
        self
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    pub fn results(&self) -> usize {
        self.results
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn request_url(&self) -> Url {
        let mut url = self.base_url.clone();
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("results", &self.results.to_string());
            query.append_pair("inc", INCLUDED_FIELDS);
            if !self.nationalities.is_empty() {
                query.append_pair("nat", &self.nationalities.join(","));
            }
            if let Some(seed) = &self.seed {
                query.append_pair("seed", seed);
            }
        }
        url
    }

    pub fn fetch_batch(&self) -> Result<RawBatch> {
        let url = self.request_url();
        tracing::info!(%url, "fetching employee batch");

        let response = self
            .http
            .get(url)
            .send()
            .map_err(|error| connection_error(self.base_url.as_str(), error))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(clean_error_response(status, &body));
        }

        let body = response.text().context("read people response")?;
        let batch = decode_batch(&body)?;
        tracing::info!(count = batch.results.len(), "received employee batch");
        Ok(batch)
    }
}

/// Decodes a people response. The API reports some failures as a 200 with an
/// `error` member instead of `results`.
pub fn decode_batch(body: &str) -> Result<RawBatch> {
    if let Ok(envelope) = serde_json::from_str::<ApiErrorEnvelope>(body)
        && let Some(error) = envelope.error
        && !error.is_empty()
    {
        bail!("people API error: {error}");
    }
    serde_json::from_str(body).context("decode people batch")
}

fn connection_error(base_url: &str, error: reqwest::Error) -> anyhow::Error {
    anyhow!(
        "cannot reach {} -- check the network connection or [api].base_url ({})",
        base_url,
        error
    )
}

fn clean_error_response(status: StatusCode, body: &str) -> anyhow::Error {
    if let Ok(parsed) = serde_json::from_str::<ApiErrorEnvelope>(body)
        && let Some(error) = parsed.error
        && !error.is_empty()
    {
        return anyhow!("server error ({}): {}", status.as_u16(), error);
    }

    if !body.is_empty() && body.len() < 100 && !body.contains('{') {
        return anyhow!("server error ({}): {}", status.as_u16(), body.trim());
    }

    anyhow!("server returned {}", status.as_u16())
}

#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::{Client, clean_error_response, decode_batch};
    use anyhow::Result;
    use reqwest::StatusCode;
    use std::time::Duration;

    fn client() -> Result<Client> {
        Client::new("https://randomuser.me/api/", Duration::from_secs(1))
    }

    #[test]
    fn request_url_carries_batch_parameters() -> Result<()> {
        let client = client()?
            .with_results(12)?
            .with_nationalities(&["US", " gb ", ""])
            .with_seed(Some("directory"));
        let url = client.request_url();
        let pairs = url
            .query_pairs()
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect::<Vec<_>>();

        assert_eq!(url.path(), "/api/");
        assert!(pairs.contains(&("results".to_owned(), "12".to_owned())));
        assert!(pairs.contains(&("nat".to_owned(), "us,gb".to_owned())));
        assert!(pairs.contains(&("seed".to_owned(), "directory".to_owned())));
        assert!(pairs.contains(&(
            "inc".to_owned(),
            "name,email,location,picture,phone,dob".to_owned()
        )));
        Ok(())
    }

    #[test]
    fn request_url_omits_optional_parameters() -> Result<()> {
        let url = client()?.with_seed(Some("  ")).request_url();
        let keys = url
            .query_pairs()
            .map(|(key, _)| key.into_owned())
            .collect::<Vec<_>>();
        assert_eq!(keys, vec!["results".to_owned(), "inc".to_owned()]);
        Ok(())
    }

    #[test]
    fn new_rejects_empty_and_non_http_urls() {
        let empty = Client::new("  ", Duration::from_secs(1)).expect_err("empty url");
        assert!(empty.to_string().contains("must not be empty"));

        let ftp = Client::new("ftp://example.com/api", Duration::from_secs(1))
            .expect_err("ftp url");
        assert!(ftp.to_string().contains("http or https"));
    }

    #[test]
    fn with_results_rejects_out_of_range_sizes() -> Result<()> {
        assert!(client()?.with_results(0).is_err());
        assert!(client()?.with_results(5_001).is_err());
        assert_eq!(client()?.with_results(50)?.results(), 50);
        Ok(())
    }

    #[test]
    fn decode_batch_surfaces_api_error_member() {
        let error = decode_batch(r#"{"error":"Uh oh, something has gone wrong."}"#)
            .expect_err("error envelope should fail");
        assert!(error.to_string().contains("something has gone wrong"));
    }

    #[test]
    fn decode_batch_reads_results() -> Result<()> {
        let batch = decode_batch(r#"{"results":[{"email":"a@b.c"}],"info":{"seed":"x"}}"#)?;
        assert_eq!(batch.results.len(), 1);
        assert_eq!(batch.results[0].email.as_deref(), Some("a@b.c"));
        Ok(())
    }

    #[test]
    fn decode_batch_rejects_garbage() {
        let error = decode_batch("<html>").expect_err("html should fail");
        assert!(error.to_string().contains("decode people batch"));
    }

    #[test]
    fn clean_error_response_prefers_structured_message() {
        let structured = clean_error_response(StatusCode::BAD_GATEWAY, r#"{"error":"upstream"}"#);
        assert_eq!(structured.to_string(), "server error (502): upstream");

        let plain = clean_error_response(StatusCode::SERVICE_UNAVAILABLE, "busy\n");
        assert_eq!(plain.to_string(), "server error (503): busy");

        let opaque = clean_error_response(StatusCode::INTERNAL_SERVER_ERROR, "");
        assert_eq!(opaque.to_string(), "server returned 500");
    }
}
