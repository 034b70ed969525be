use crate::connection::{HttpRequest, HttpResponse, SendMessage};
use crate::error::Error;
use bytes::Bytes;
use http::{Response, StatusCode};
use serde_json::Value;
use std::cell::RefCell;
use std::collections::VecDeque;

/// Replays canned responses in order and keeps every request it was given.
#[derive(Default)]
pub struct FakeSender {
    responses: RefCell<VecDeque<(StatusCode, Bytes)>>,
    requests: RefCell<Vec<HttpRequest>>,
}

impl FakeSender {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, status: u16, body: Value) -> Self {
        self.responses.borrow_mut().push_back((
            StatusCode::from_u16(status).unwrap(),
            Bytes::from(body.to_string()),
        ));
        self
    }

    pub fn reply_raw(self, status: u16, body: &'static str) -> Self {
        self.responses
            .borrow_mut()
            .push_back((StatusCode::from_u16(status).unwrap(), Bytes::from(body)));
        self
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests
            .borrow()
            .iter()
            .map(|req| {
                let mut copy = http::Request::builder()
                    .method(req.method().clone())
                    .uri(req.uri().clone());
                for (key, value) in req.headers() {
                    copy = copy.header(key, value);
                }
                copy.body(req.body().clone()).unwrap()
            })
            .collect()
    }

    pub fn urls(&self) -> Vec<String> {
        self.requests
            .borrow()
            .iter()
            .map(|req| req.uri().to_string())
            .collect()
    }
}

impl SendMessage<HttpRequest, Result<HttpResponse, Error>> for FakeSender {
    fn send(&self, data: HttpRequest) -> Result<HttpResponse, Error> {
        self.requests.borrow_mut().push(data);
        let (status, body) = self
            .responses
            .borrow_mut()
            .pop_front()
            .expect("no canned response left");
        Ok(Response::builder().status(status).body(body)?)
    }
}
