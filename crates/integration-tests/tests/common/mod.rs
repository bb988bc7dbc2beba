//! In-process fake beanstalkd for end-to-end tests

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use beanschk_core::domain::ServerAddress;

/// How the fake answers `stats-tube <name>`
#[derive(Clone)]
pub enum StatsReply {
    Ready(String),
    NotFound,
    /// Raw reply line(s), sent verbatim
    Raw(String),
    /// Ready count sent only after a delay
    Slow(Duration, u64),
    /// Close the socket instead of answering
    HangUp,
}

/// Fake server state; cloned handles share the command log
#[derive(Clone, Default)]
pub struct FakeBeanstalkd {
    tubes: Vec<(String, StatsReply)>,
    list_reply: Option<String>,
    received: Arc<Mutex<Vec<String>>>,
}

impl FakeBeanstalkd {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tube(mut self, name: &str, ready: u64) -> Self {
        self.tubes
            .push((name.to_string(), StatsReply::Ready(ready.to_string())));
        self
    }

    pub fn tube_with(mut self, name: &str, reply: StatsReply) -> Self {
        self.tubes.push((name.to_string(), reply));
        self
    }

    /// Replace the `list-tubes` reply with a raw line
    pub fn list_reply(mut self, raw: &str) -> Self {
        self.list_reply = Some(raw.to_string());
        self
    }

    pub fn received(&self) -> Vec<String> {
        self.received.lock().unwrap().clone()
    }

    /// Serve a single connection on an ephemeral loopback port
    pub async fn start(&self) -> (ServerAddress, JoinHandle<()>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        let fake = self.clone();

        let handle = tokio::spawn(async move {
            let (socket, _) = listener.accept().await.unwrap();
            let mut socket = BufReader::new(socket);

            loop {
                let mut line = String::new();
                if socket.read_line(&mut line).await.unwrap_or(0) == 0 {
                    break;
                }
                let command = line.trim_end().to_string();
                fake.received.lock().unwrap().push(command.clone());

                if let Some(delay) = fake.delay_for(&command) {
                    tokio::time::sleep(delay).await;
                }
                let Some(reply) = fake.reply_to(&command) else {
                    break;
                };
                if socket.get_mut().write_all(reply.as_bytes()).await.is_err() {
                    break;
                }
            }
        });

        (ServerAddress::new("127.0.0.1", port), handle)
    }

    fn stats_reply(&self, name: &str) -> StatsReply {
        self.tubes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, r)| r.clone())
            .unwrap_or(StatsReply::NotFound)
    }

    fn delay_for(&self, command: &str) -> Option<Duration> {
        let name = command.strip_prefix("stats-tube ")?;
        match self.stats_reply(name) {
            StatsReply::Slow(delay, _) => Some(delay),
            _ => None,
        }
    }

    /// `None` means hang up
    fn reply_to(&self, command: &str) -> Option<String> {
        if command == "list-tubes" {
            if let Some(raw) = &self.list_reply {
                return Some(raw.clone());
            }
            let mut body = String::from("---\n");
            for (name, _) in &self.tubes {
                body.push_str(&format!("- {}\n", name));
            }
            return Some(ok(&body));
        }

        if let Some(name) = command.strip_prefix("stats-tube ") {
            return match self.stats_reply(name) {
                StatsReply::Ready(ready) => Some(ok(&stats_body(name, &ready))),
                StatsReply::Slow(_, ready) => Some(ok(&stats_body(name, &ready.to_string()))),
                StatsReply::NotFound => Some("NOT_FOUND\r\n".to_string()),
                StatsReply::Raw(raw) => Some(raw),
                StatsReply::HangUp => None,
            };
        }

        // quit, or anything unexpected
        None
    }
}

pub fn ok(body: &str) -> String {
    format!("OK {}\r\n{}\r\n", body.len(), body)
}

pub fn stats_body(name: &str, ready: &str) -> String {
    format!(
        "---\nname: {}\ncurrent-urgent-jobs: 0\ncurrent-jobs-ready: {}\n\
current-jobs-reserved: 0\ncurrent-jobs-delayed: 0\ncurrent-jobs-buried: 0\n\
total-jobs: 12345\ncurrent-using: 1\ncurrent-waiting: 0\ncurrent-watching: 1\n\
pause: 0\ncmd-delete: 100\ncmd-pause-tube: 0\npause-time-left: 0\n",
        name, ready
    )
}
