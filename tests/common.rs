#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use redmine_timelog::errors::{AppError, AppResult};
use redmine_timelog::models::TimeEntry;
use redmine_timelog::redmine::TimeEntrySink;
use redmine_timelog::config::Config;
use redmine_timelog::redmine::RedmineClient;
use reqwest::blocking::Client;
use std::env;
use std::fs;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::path::PathBuf;
use std::thread::{self, JoinHandle};

/// The three-row log from the import walkthrough: two billable rows for
/// issue 5 around an unbillable break.
pub const SAMPLE_LOG: &str = "\
year,month,day,hour,minute,action,redmine task id
2020,1,1,9,0,task A,5
,,,10,0,break,
,,,11,0,task A,5
";

pub fn rit() -> Command {
    cargo_bin_cmd!("redmine-import-timelog")
}

/// Write `content` to a unique file inside the system temp dir.
pub fn temp_file(name: &str, ext: &str, content: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_redmine_timelog.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::write(&p, content).expect("write temp file");
    p
}

/// Temp path that is guaranteed not to exist.
pub fn missing_file(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_redmine_timelog.missing", name));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub fn write_config(name: &str, base_address: &str, time_zone: &str) -> String {
    temp_file(
        name,
        "yaml",
        &format!(
            "redmine-base-address: {}\napi-key: test-key\ntime-zone: {}\n",
            base_address, time_zone
        ),
    )
}

/// Records every entry it is asked to create.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub entries: Vec<TimeEntry>,
}

impl TimeEntrySink for RecordingSink {
    fn create_time_entry(&mut self, entry: &TimeEntry) -> AppResult<()> {
        self.entries.push(entry.clone());
        Ok(())
    }
}

/// Accepts `accept` entries, then answers like a Redmine validation failure.
#[derive(Debug)]
pub struct FailingSink {
    pub accept: usize,
    pub calls: usize,
    pub entries: Vec<TimeEntry>,
}

impl FailingSink {
    pub fn after(accept: usize) -> Self {
        Self {
            accept,
            calls: 0,
            entries: Vec::new(),
        }
    }
}

impl TimeEntrySink for FailingSink {
    fn create_time_entry(&mut self, entry: &TimeEntry) -> AppResult<()> {
        self.calls += 1;
        if self.entries.len() >= self.accept {
            return Err(AppError::Api {
                status: 422,
                message: "Activity cannot be blank".to_string(),
            });
        }
        self.entries.push(entry.clone());
        Ok(())
    }
}

/// Minimal HTTP server answering one canned `(status line, body)` per
/// connection, in order. The handle yields the raw requests it received.
pub fn serve(responses: Vec<(&'static str, &'static str)>) -> (String, JoinHandle<Vec<String>>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind test server");
    let base = format!("http://{}", listener.local_addr().expect("local addr"));

    let handle = thread::spawn(move || {
        let mut requests = Vec::new();
        for (status, body) in responses {
            let (mut stream, _) = listener.accept().expect("accept");
            requests.push(read_request(&mut stream));
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            stream.write_all(response.as_bytes()).expect("write response");
        }
        requests
    });

    (base, handle)
}

fn read_request(stream: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    loop {
        let n = stream.read(&mut chunk).expect("read request");
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);

        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            let head = String::from_utf8_lossy(&buf[..pos]).to_lowercase();
            let len = head
                .lines()
                .find_map(|l| l.strip_prefix("content-length:"))
                .and_then(|v| v.trim().parse::<usize>().ok())
                .unwrap_or(0);
            if buf.len() >= pos + 4 + len {
                break;
            }
        }
    }
    String::from_utf8_lossy(&buf).to_string()
}

/// Client for the loopback test server; ignores any proxy set in the environment.
pub fn loopback_client(cfg: &Config) -> RedmineClient {
    RedmineClient::with_builder(cfg, Client::builder().no_proxy()).expect("build client")
}
