pub(crate) mod http;

#[cfg(test)]
pub(crate) mod fake;

use crate::error::Error;
use bytes::Bytes;

pub type HttpRequest = ::http::Request<Vec<u8>>;
pub type HttpResponse = ::http::Response<Bytes>;

pub trait SendMessage<T, R> {
    fn send(&self, data: T) -> R;
}

/// Anything able to carry one HTTP request/response pair.
pub trait HttpSender: SendMessage<HttpRequest, Result<HttpResponse, Error>> {}

impl<T> HttpSender for T where T: SendMessage<HttpRequest, Result<HttpResponse, Error>> {}

impl<'a, T, R, S> SendMessage<T, R> for &'a S
where
    S: SendMessage<T, R>,
{
    fn send(&self, data: T) -> R {
        (**self).send(data)
    }
}
