use crate::connection::{HttpRequest, HttpResponse, SendMessage};
use crate::error::Error;
use http::Response;
use reqwest::blocking::Client;
use reqwest::blocking::Request;
use std::convert::TryFrom;

impl SendMessage<HttpRequest, Result<HttpResponse, Error>> for Client {
    fn send(&self, data: HttpRequest) -> Result<HttpResponse, Error> {
        let req: Request = Request::try_from(data)?;
        trace!("Sending {} {}", req.method(), req.url());
        let response = self.execute(req)?;
        let status = response.status();
        let body = response.bytes()?;
        debug!("Received status {} with {} bytes", status, body.len());
        Ok(Response::builder().status(status).body(body)?)
    }
}
