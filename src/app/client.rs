use crate::configuration::command_line::{Limit, SuiteFilter};
use crate::configuration::constants::common::{TEST_CASE_PATH, TEST_SUITE_PATH};
use crate::connection::{HttpSender, SendMessage};
use crate::error::{Error, Result};
use crate::model::{ApiResponse, TestCase, TestSuite};
use derivative::*;
use http::header::AUTHORIZATION;
use http::{Method, Request, StatusCode};
use serde::de::DeserializeOwned;
use url::Url;

/// Talks to the `/test/suite` and `/test/case` listings of the reporting service.
#[derive(Derivative)]
#[derivative(Debug)]
pub struct QueryClient<S> {
    #[derivative(Debug = "ignore")]
    sender: S,
    base: Url,
    #[derivative(Debug = "ignore")]
    token: String,
}

impl<S> QueryClient<S>
where
    S: HttpSender,
{
    pub fn new(sender: S, base: Url, token: String) -> Self {
        Self {
            sender,
            base,
            token,
        }
    }

    /// Newest suites first, narrowed by whichever filters are set.
    pub fn fetch_suites(&self, filter: &SuiteFilter, limit: Limit) -> Result<Vec<TestSuite>> {
        self.get(TEST_SUITE_PATH, &suite_params(filter, limit))
    }

    pub fn fetch_cases(&self, suite_id: &str) -> Result<Vec<TestCase>> {
        self.get(TEST_CASE_PATH, &[("test_suite_id", suite_id.to_owned())])
    }

    fn get<T>(&self, path: &str, params: &[(&'static str, String)]) -> Result<Vec<T>>
    where
        T: DeserializeOwned,
    {
        let mut url = self.base.join(path)?;
        if !params.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(params.iter().map(|(k, v)| (*k, v.as_str())));
        }
        debug!("GET {}", url);
        let request = Request::builder()
            .method(Method::GET)
            .uri(url.as_str())
            .header(AUTHORIZATION, self.token.as_str())
            .body(Vec::new())?;

        let response = self.sender.send(request)?;
        if response.status() != StatusCode::OK {
            warn!("{} answered with status {}", url, response.status());
            return Err(Error::UnexpectedStatus(response.status()));
        }
        let listing: ApiResponse<T> = serde_json::from_slice(response.body())?;
        trace!("{} returned {} records", path, listing.result.len());
        Ok(listing.result)
    }
}

fn suite_params(filter: &SuiteFilter, limit: Limit) -> Vec<(&'static str, String)> {
    let mut params = vec![
        ("sort", "created_on".to_owned()),
        ("sort_order", "-1".to_owned()),
    ];
    if let Limit::Count(count) = limit {
        params.push(("limit", count.to_string()));
    }
    let filters = [
        ("name", &filter.name),
        ("board", &filter.board),
        ("defconfig_full", &filter.defconfig),
        ("job", &filter.tree),
        ("kernel", &filter.kernel),
    ];
    for (key, value) in filters.iter() {
        if let Some(value) = value {
            params.push((*key, value.clone()));
        }
    }
    params
}
