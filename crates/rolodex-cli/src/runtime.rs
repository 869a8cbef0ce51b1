// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::config::Config;
use anyhow::{Context, Result};
use rolodex_app::RawBatch;
use rolodex_fetch::Client;
use rolodex_testkit::PeopleFaker;
use rolodex_tui::{DirectoryRuntime, InternalEvent};
use std::sync::mpsc::Sender;
use std::thread;

const DEMO_SEED: u64 = 20_260_214;

pub fn http_client(config: &Config) -> Result<Client> {
    Ok(Client::new(config.api_base_url(), config.api_timeout()?)?
        .with_results(config.api_results())?
        .with_nationalities(config.api_nationalities())
        .with_seed(config.api_seed()))
}

/// Fetches batches from the people API on a worker thread so the UI keeps
/// drawing while the request is in flight.
pub struct HttpRuntime {
    client: Client,
}

impl HttpRuntime {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

impl DirectoryRuntime for HttpRuntime {
    fn fetch_batch(&mut self) -> Result<RawBatch> {
        self.client.fetch_batch()
    }

    fn spawn_fetch(&mut self, request_id: u64, tx: Sender<InternalEvent>) -> Result<()> {
        let client = self.client.clone();
        thread::Builder::new()
            .name("rolodex-fetch".to_owned())
            .spawn(move || {
                let event = InternalEvent::fetch_result(request_id, client.fetch_batch());
                if tx.send(event).is_err() {
                    tracing::debug!(request_id, "fetch finished after the UI closed");
                }
            })
            .context("spawn fetch worker")?;
        Ok(())
    }
}

/// Offline runtime for `--demo`: every fetch returns a fresh generated batch.
pub struct DemoRuntime {
    faker: PeopleFaker,
    size: usize,
}

impl DemoRuntime {
    pub fn new(size: usize) -> Self {
        Self {
            faker: PeopleFaker::new(DEMO_SEED),
            size,
        }
    }
}

impl DirectoryRuntime for DemoRuntime {
    fn fetch_batch(&mut self) -> Result<RawBatch> {
        tracing::info!(size = self.size, "generating demo batch");
        Ok(self.faker.batch(self.size))
    }
}

#[cfg(test)]
mod tests {
    use super::{DemoRuntime, HttpRuntime, http_client};
    use crate::config::Config;
    use anyhow::{Result, anyhow};
    use rolodex_app::EmployeeStore;
    use rolodex_fetch::Client;
    use rolodex_testkit::{PeopleFaker, batch_json};
    use rolodex_tui::{DirectoryRuntime, InternalEvent};
    use std::sync::mpsc;
    use std::thread;
    use std::time::Duration;
    use tiny_http::{Header, Response, Server};

    #[test]
    fn demo_runtime_produces_loadable_batches() -> Result<()> {
        let mut runtime = DemoRuntime::new(12);
        let first = runtime.fetch_batch()?;
        let second = runtime.fetch_batch()?;

        assert_eq!(EmployeeStore::populate(&first.results)?.size(), 12);
        assert_ne!(first, second);
        Ok(())
    }

    #[test]
    fn demo_runtime_reports_through_the_channel() -> Result<()> {
        let mut runtime = DemoRuntime::new(3);
        let (tx, rx) = mpsc::channel();
        runtime.spawn_fetch(7, tx)?;

        match rx.recv_timeout(Duration::from_secs(1))? {
            InternalEvent::BatchLoaded { request_id, batch } => {
                assert_eq!(request_id, 7);
                assert_eq!(batch.results.len(), 3);
            }
            other => panic!("unexpected event {other:?}"),
        }
        Ok(())
    }

    #[test]
    fn http_client_follows_config() -> Result<()> {
        let client = http_client(&Config::default())?;
        assert_eq!(client.base_url(), "https://randomuser.me/api/");
        assert_eq!(client.results(), 12);
        assert_eq!(client.timeout(), Duration::from_secs(10));
        Ok(())
    }

    #[test]
    fn http_runtime_fetches_on_a_worker_thread() -> Result<()> {
        let server =
            Server::http("127.0.0.1:0").map_err(|error| anyhow!("start mock server: {error}"))?;
        let addr = format!("http://{}/api/", server.server_addr());
        let body = batch_json(&PeopleFaker::new(12).batch(4))?;

        let handle = thread::spawn(move || {
            let request = server.recv().expect("request expected");
            let response = Response::from_string(body).with_status_code(200).with_header(
                Header::from_bytes("Content-Type", "application/json")
                    .expect("valid content type header"),
            );
            request.respond(response).expect("response should succeed");
        });

        let client = Client::new(&addr, Duration::from_secs(2))?.with_results(4)?;
        let mut runtime = HttpRuntime::new(client);
        let (tx, rx) = mpsc::channel();
        runtime.spawn_fetch(3, tx)?;

        match rx.recv_timeout(Duration::from_secs(5))? {
            InternalEvent::BatchLoaded { request_id, batch } => {
                assert_eq!(request_id, 3);
                assert_eq!(batch.results.len(), 4);
            }
            other => panic!("unexpected event {other:?}"),
        }
        handle.join().expect("server thread should join");
        Ok(())
    }

    #[test]
    fn http_runtime_reports_unreachable_host() -> Result<()> {
        let client = Client::new("http://127.0.0.1:1/api/", Duration::from_millis(50))?;
        let mut runtime = HttpRuntime::new(client);
        let (tx, rx) = mpsc::channel();
        runtime.spawn_fetch(1, tx)?;

        match rx.recv_timeout(Duration::from_secs(5))? {
            InternalEvent::BatchFailed { request_id, error } => {
                assert_eq!(request_id, 1);
                assert!(error.contains("cannot reach"));
            }
            other => panic!("unexpected event {other:?}"),
        }
        Ok(())
    }
}
