#![allow(dead_code)]

use futures::channel::oneshot;
use robocoach::api::Transport;
use robocoach::api::TransportError;
use robocoach::camera::Camera;
use robocoach::camera::PermissionError;
use robocoach::coach::Orchestrator;
use robocoach::config::Config;
use robocoach::detection::Frame;
use robocoach::detection::Landmark;
use std::cell::Cell;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

pub fn init() {
    env_logger::builder().is_test(true).try_init().ok();
}

type Body = Result<String, TransportError>;

enum Reply {
    Now(Body),
    Later(oneshot::Receiver<Body>),
}

/// Stand-in for the remote service: replies are queued per endpoint and
/// every request body is kept for inspection.
#[derive(Default)]
pub struct Script {
    analyze: RefCell<VecDeque<Reply>>,
    chat: RefCell<VecDeque<Reply>>,
    calls: RefCell<Vec<(String, serde_json::Value)>>,
}

impl Script {
    pub fn analyze(&self, json: serde_json::Value) -> &Self {
        self.analyze.borrow_mut().push_back(Reply::Now(Ok(json.to_string())));
        self
    }
    pub fn analyze_fails(&self, e: TransportError) -> &Self {
        self.analyze.borrow_mut().push_back(Reply::Now(Err(e)));
        self
    }
    pub fn analyze_raw(&self, body: &str) -> &Self {
        self.analyze.borrow_mut().push_back(Reply::Now(Ok(body.to_string())));
        self
    }
    pub fn analyze_later(&self) -> oneshot::Sender<Body> {
        let (tx, rx) = oneshot::channel();
        self.analyze.borrow_mut().push_back(Reply::Later(rx));
        tx
    }
    pub fn chat(&self, text: &str) -> &Self {
        let body = serde_json::json!({ "response": text }).to_string();
        self.chat.borrow_mut().push_back(Reply::Now(Ok(body)));
        self
    }
    pub fn chat_fails(&self, e: TransportError) -> &Self {
        self.chat.borrow_mut().push_back(Reply::Now(Err(e)));
        self
    }
    pub fn chat_later(&self) -> oneshot::Sender<Body> {
        let (tx, rx) = oneshot::channel();
        self.chat.borrow_mut().push_back(Reply::Later(rx));
        tx
    }

    /// Bodies posted to endpoints whose URL ends with `path`.
    pub fn calls(&self, path: &str) -> Vec<serde_json::Value> {
        self.calls
            .borrow()
            .iter()
            .filter(|(url, _)| url.ends_with(path))
            .map(|(_, body)| body.clone())
            .collect()
    }
}

#[async_trait::async_trait(?Send)]
impl Transport for Script {
    async fn post(&self, url: &str, body: String) -> Result<String, TransportError> {
        let json = serde_json::from_str(&body).expect("request body is json");
        self.calls.borrow_mut().push((url.to_string(), json));
        let queue = if url.ends_with(robocoach::ANALYZE_PATH) {
            &self.analyze
        } else {
            &self.chat
        };
        let reply = queue.borrow_mut().pop_front();
        match reply {
            Some(Reply::Now(body)) => body,
            Some(Reply::Later(rx)) => rx
                .await
                .unwrap_or_else(|_| Err(TransportError::Network(String::from("dropped")))),
            None => Err(TransportError::Network(format!("unscripted request to {}", url))),
        }
    }
}

pub fn coach(script: &Rc<Script>) -> Orchestrator<Rc<Script>> {
    init();
    Orchestrator::new(script.clone(), &Config::default())
}

pub fn hand_in_frame() -> Frame {
    Frame::from(vec![vec![Landmark::default(); 21]])
}

pub fn reply(text: &str) -> Body {
    Ok(serde_json::json!({ "response": text }).to_string())
}

/// Camera that grants or denies access and counts how often it was asked.
pub struct FakeCamera {
    pub grant: bool,
    pub opened: Cell<usize>,
}

impl FakeCamera {
    pub fn new(grant: bool) -> Self {
        Self {
            grant,
            opened: Cell::new(0),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl Camera for FakeCamera {
    async fn open(&self) -> Result<(), PermissionError> {
        self.opened.set(self.opened.get() + 1);
        match self.grant {
            true => Ok(()),
            false => Err(PermissionError(String::from("Permission denied"))),
        }
    }
}
