//! Resolves the batch source for one run: `--email`, then `--userlist-path`, then the configured list.

use std::fs;
use std::path::Path;

use crate::cli::Cli;
use crate::error::InputError;
use crate::models::{parse_requests, PromotionRequest};

/// `configured` is the raw `PROMOTE_TO_ADMINS` value; it is parsed only when no other source is given.
pub fn resolve(cli: &Cli, configured: Option<&str>) -> Result<Vec<PromotionRequest>, InputError> {
    if let Some(email) = &cli.email {
        tracing::info!(email = %email, "Promoting a single user");
        return Ok(vec![PromotionRequest::new(email.clone(), cli.new_password.clone())]);
    }

    if cli.new_password.is_some() {
        tracing::warn!("--pass is only used together with --email, ignoring it");
    }

    let requests = match &cli.userlist_path {
        Some(path) => {
            let requests = load_userlist(path)?;
            tracing::info!(path = %path.display(), count = requests.len(), "Loaded user list");
            requests
        }
        None => {
            let requests = match configured {
                Some(raw) => parse_requests(raw).map_err(|source| InputError::Setting { source })?,
                None => Vec::new(),
            };
            tracing::info!(count = requests.len(), "Using PROMOTE_TO_ADMINS setting");
            requests
        }
    };

    if requests.is_empty() {
        tracing::warn!("No users to promote");
    }

    Ok(requests)
}

pub fn load_userlist(path: &Path) -> Result<Vec<PromotionRequest>, InputError> {
    let raw = fs::read_to_string(path).map_err(|source| InputError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    parse_requests(&raw).map_err(|source| InputError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
