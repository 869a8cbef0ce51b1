// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Result, anyhow};
use rolodex_app::EmployeeStore;
use rolodex_fetch::Client;
use rolodex_testkit::{PeopleFaker, batch_json};
use std::thread;
use std::time::Duration;
use tiny_http::{Header, Response, Server};

fn json_response(body: String, status: u16) -> Response<std::io::Cursor<Vec<u8>>> {
    Response::from_string(body)
        .with_status_code(status)
        .with_header(
            Header::from_bytes("Content-Type", "application/json")
                .expect("valid content type header"),
        )
}

#[test]
fn unreachable_host_error_names_the_base_url() {
    let client = Client::new("http://127.0.0.1:1/api/", Duration::from_millis(50))
        .expect("client should initialize");

    let error = client
        .fetch_batch()
        .expect_err("fetch should fail for unreachable endpoint");
    let message = error.to_string();
    assert!(message.contains("cannot reach"));
    assert!(message.contains("[api].base_url"));
}

#[test]
fn fetch_batch_decodes_a_full_batch() -> Result<()> {
    let server =
        Server::http("127.0.0.1:0").map_err(|error| anyhow!("start mock server: {error}"))?;
    let addr = format!("http://{}/api/", server.server_addr());
    let batch = PeopleFaker::new(17).batch(12);
    let body = batch_json(&batch)?;

    let handle = thread::spawn(move || {
        let request = server.recv().expect("request expected");
        let url = request.url().to_owned();
        assert!(url.starts_with("/api/?"));
        assert!(url.contains("results=12"));
        assert!(url.contains("nat=us"));
        assert!(url.contains("seed=acme"));
        request
            .respond(json_response(body, 200))
            .expect("response should succeed");
    });

    let client = Client::new(&addr, Duration::from_secs(1))?
        .with_results(12)?
        .with_nationalities(&["us"])
        .with_seed(Some("acme"));
    let fetched = client.fetch_batch()?;
    assert_eq!(fetched, batch);
    assert_eq!(EmployeeStore::populate(&fetched.results)?.size(), 12);

    handle.join().expect("server thread should join");
    Ok(())
}

#[test]
fn error_envelope_with_ok_status_fails() -> Result<()> {
    let server =
        Server::http("127.0.0.1:0").map_err(|error| anyhow!("start mock server: {error}"))?;
    let addr = format!("http://{}/api/", server.server_addr());

    let handle = thread::spawn(move || {
        let request = server.recv().expect("request expected");
        request
            .respond(json_response(
                r#"{"error":"Uh oh, something has gone wrong."}"#.to_owned(),
                200,
            ))
            .expect("response should succeed");
    });

    let client = Client::new(&addr, Duration::from_secs(1))?;
    let error = client.fetch_batch().expect_err("envelope should fail");
    assert!(error.to_string().contains("people API error"));

    handle.join().expect("server thread should join");
    Ok(())
}

#[test]
fn server_error_status_is_reported() -> Result<()> {
    let server =
        Server::http("127.0.0.1:0").map_err(|error| anyhow!("start mock server: {error}"))?;
    let addr = format!("http://{}/api/", server.server_addr());

    let handle = thread::spawn(move || {
        let request = server.recv().expect("request expected");
        request
            .respond(Response::from_string("maintenance").with_status_code(503))
            .expect("response should succeed");
    });

    let client = Client::new(&addr, Duration::from_secs(1))?;
    let error = client.fetch_batch().expect_err("503 should fail");
    assert_eq!(error.to_string(), "server error (503): maintenance");

    handle.join().expect("server thread should join");
    Ok(())
}

#[test]
fn truncated_body_fails_to_decode() -> Result<()> {
    let server =
        Server::http("127.0.0.1:0").map_err(|error| anyhow!("start mock server: {error}"))?;
    let addr = format!("http://{}/api/", server.server_addr());

    let handle = thread::spawn(move || {
        let request = server.recv().expect("request expected");
        request
            .respond(json_response(r#"{"results":[{"name":"#.to_owned(), 200))
            .expect("response should succeed");
    });

    let client = Client::new(&addr, Duration::from_secs(1))?;
    let error = client.fetch_batch().expect_err("truncated body should fail");
    assert!(format!("{error:#}").contains("decode people batch"));

    handle.join().expect("server thread should join");
    Ok(())
}
