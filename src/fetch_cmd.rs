//! Fetch command: exercise the list-data API and report recorded requests.

use std::time::Duration;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use dashkit_api::{ApiClient, AppState};

use crate::cli::FetchArgs;
use crate::config::Config;

/// Run a single fetch against `/data` (or `/data2` with `--second`).
pub fn run(args: FetchArgs) -> Result<()> {
    let _cmd = info_span!("fetch").entered();
    let config = Config::load(&args.config)?;
    let client = ApiClient::with_timeout(
        &config.api.base_url,
        Duration::from_secs(config.api.timeout_secs),
    );
    info!(base_url = client.base_url(), "client ready");

    let query = parse_query(&args.query)?;
    let mut state = AppState::new();

    let runtime = tokio::runtime::Runtime::new().context("failed to start async runtime")?;
    let body = runtime
        .block_on(async {
            if args.second {
                client.fetch_list2(&query, &mut state).await
            } else {
                client.fetch_list(&query, &mut state).await
            }
        })
        .context("fetch failed")?;

    println!("{}", serde_json::to_string_pretty(&body)?);
    for record in state.requests() {
        info!(url = %record.url, method = %record.method, "request recorded");
    }
    Ok(())
}

/// Splits repeated `key=value` arguments into query pairs.
fn parse_query(pairs: &[String]) -> Result<Vec<(String, String)>> {
    pairs
        .iter()
        .map(|pair| {
            pair.split_once('=')
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .ok_or_else(|| {
                    anyhow::anyhow!("query parameter must be key=value, got {pair:?}")
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_query_pairs() {
        let pairs = vec!["page=1".to_string(), "size=20".to_string()];
        assert_eq!(
            parse_query(&pairs).unwrap(),
            vec![
                ("page".to_string(), "1".to_string()),
                ("size".to_string(), "20".to_string())
            ]
        );
    }

    #[test]
    fn parse_query_keeps_later_equals_signs() {
        let pairs = vec!["filter=a=b".to_string()];
        assert_eq!(
            parse_query(&pairs).unwrap(),
            vec![("filter".to_string(), "a=b".to_string())]
        );
    }

    #[test]
    fn parse_query_rejects_bare_keys() {
        assert!(parse_query(&["page".to_string()]).is_err());
    }
}
