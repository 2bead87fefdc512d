use std::fmt;

use crate::cli::Cli;
use crate::config::Config;
use crate::database::UserStore;
use crate::error::{InputError, PromoteError};
use crate::models::{PromotionRequest, UserRecord};
use crate::services::input;
use crate::services::Promoter;

/// Results for one request: one entry per matched account, or a single lookup error.
#[derive(Debug)]
pub struct RequestOutcome {
    pub request: PromotionRequest,
    pub results: Vec<Result<UserRecord, PromoteError>>,
}

impl RequestOutcome {
    pub fn processed(&self) -> impl Iterator<Item = &UserRecord> {
        self.results.iter().filter_map(|r| r.as_ref().ok())
    }

    pub fn errors(&self) -> impl Iterator<Item = &PromoteError> {
        self.results.iter().filter_map(|r| r.as_ref().err())
    }
}

/// Everything one run did, in request order.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub outcomes: Vec<RequestOutcome>,
}

impl BatchReport {
    /// Promoted accounts, one inner list per request.
    pub fn processed(&self) -> Vec<Vec<&UserRecord>> {
        self.outcomes.iter().map(|o| o.processed().collect()).collect()
    }

    pub fn failures(&self) -> impl Iterator<Item = (&PromotionRequest, &PromoteError)> {
        self.outcomes
            .iter()
            .flat_map(|o| o.errors().map(move |e| (&o.request, e)))
    }

    pub fn processed_count(&self) -> usize {
        self.outcomes.iter().map(|o| o.processed().count()).sum()
    }

    pub fn failure_count(&self) -> usize {
        self.failures().count()
    }

    /// No lookup, hash or save failed. Requests matching nobody still count as success.
    pub fn is_success(&self) -> bool {
        self.failure_count() == 0
    }
}

impl fmt::Display for BatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "processed [")?;
        for (i, outcome) in self.outcomes.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "[")?;
            for (j, user) in outcome.processed().enumerate() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{user}")?;
            }
            write!(f, "]")?;
        }
        write!(f, "]")
    }
}

/// Promote each request in order. Never stops early: failures stay in the report.
pub async fn run_batch<S: UserStore>(promoter: &Promoter<S>, requests: Vec<PromotionRequest>) -> BatchReport {
    let mut outcomes = Vec::with_capacity(requests.len());
    for request in requests {
        let results = promoter.try_promote(&request.email, request.password()).await;
        outcomes.push(RequestOutcome { request, results });
    }

    let report = BatchReport { outcomes };
    tracing::info!(
        requests = report.outcomes.len(),
        promoted = report.processed_count(),
        failed = report.failure_count(),
        "Promotion finished"
    );
    report
}

/// Resolve the batch source, then promote it against `store`.
/// Input errors are returned before the store is touched.
pub async fn run<S: UserStore>(cli: &Cli, config: &Config, store: S) -> Result<BatchReport, InputError> {
    let requests = input::resolve(cli, config.promote_to_admins.as_deref())?;
    let promoter = Promoter::new(store, config.bcrypt_cost);
    Ok(run_batch(&promoter, requests).await)
}
