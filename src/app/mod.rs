pub(crate) mod client;
pub(crate) mod presenter;

use crate::app::client::QueryClient;
use crate::app::presenter::Presenter;
use crate::configuration::command_line::{Limit, Opt, SuiteFilter};
use crate::configuration::settings::Settings;
use crate::connection::HttpSender;
use crate::error::{Error, Result};
use std::io::Write;
use std::time::Instant;

pub struct App<S> {
    client: QueryClient<S>,
    filter: SuiteFilter,
    limit: Limit,
}

impl<S> App<S>
where
    S: HttpSender,
{
    pub fn new(options: Opt, settings: &Settings, sender: S) -> Result<Self> {
        let client = QueryClient::new(sender, settings.backend()?, options.token);
        Ok(App {
            client,
            filter: options.filter,
            limit: options.limit,
        })
    }

    /// One suite query, then one case query per suite, printing as it goes.
    pub fn run<W: Write>(&self, out: W) -> Result<()> {
        let mut presenter = Presenter::new(out);
        info!("Fetching up to {} test suites", self.limit);
        debug!("Using filter {:?}", self.filter);

        let now = Instant::now();
        let suites = match self.client.fetch_suites(&self.filter, self.limit) {
            Ok(suites) => suites,
            Err(Error::UnexpectedStatus(status)) => {
                presenter.suite_error(status)?;
                return Ok(());
            }
            Err(e) => return Err(e),
        };
        info!(
            "Received {} test suites in {} ms",
            suites.len(),
            now.elapsed().as_millis()
        );

        if suites.is_empty() {
            presenter.no_results()?;
            return Ok(());
        }

        for suite in &suites {
            presenter.suite(suite)?;
            match self.client.fetch_cases(&suite.id) {
                Ok(cases) => {
                    debug!("Suite {} has {} test cases", suite.id, cases.len());
                    presenter.cases(&cases)?;
                }
                Err(Error::UnexpectedStatus(status)) => {
                    error!("Failed to get test cases of suite {}: {}", suite.id, status);
                    presenter.cases_error()?;
                }
                Err(e) => return Err(e),
            }
            presenter.suite_footer()?;
        }
        Ok(())
    }
}
