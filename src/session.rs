//! Search session: the invocation boundary between the presentation layer
//! and the artist search pipeline.
//!
//! A session debounces dispatches, hands every invocation its own
//! [`CancellationToken`], and cancels the previous invocation's token when a
//! newer query supersedes it. Each [`PendingSearch`] owns its query, token and
//! config, so it can be awaited in place or spawned onto a runtime.

use artist_search::{CancellationToken, SearchConfig, SearchResult};

use crate::config::ScopeConfig;
use crate::error::Result;
use crate::throttle::DispatchThrottle;

/// Per-surface search session.
#[derive(Debug)]
pub struct ScopeSession {
    search: SearchConfig,
    throttle: DispatchThrottle,
    active: Option<CancellationToken>,
}

impl ScopeSession {
    /// Create a session from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ScopeError::Search`] if the search section is invalid.
    pub fn new(config: &ScopeConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            search: config.search.clone(),
            throttle: DispatchThrottle::new(config.session.min_dispatch_interval()),
            active: None,
        })
    }

    /// Search configuration used for every dispatch.
    pub fn search_config(&self) -> &SearchConfig {
        &self.search
    }

    /// Wait for the throttle, supersede the previous invocation and return
    /// a new one ready to run.
    pub async fn dispatch(&mut self, query: Option<&str>) -> PendingSearch {
        self.throttle.wait_turn().await;

        let token = CancellationToken::new();
        if let Some(previous) = self.active.replace(token.clone()) {
            if !previous.is_cancelled() {
                tracing::debug!("superseding in-flight search");
                previous.cancel();
            }
        }

        PendingSearch {
            query: query.map(str::to_owned),
            token,
            config: self.search.clone(),
        }
    }

    /// Dispatch and run a search to completion.
    ///
    /// # Errors
    ///
    /// Only configuration problems surface; network failures yield an empty list.
    pub async fn search(&mut self, query: Option<&str>) -> Result<Vec<SearchResult>> {
        self.dispatch(query).await.run().await
    }

    /// Cancel the most recent invocation, if it is still running.
    pub fn cancel_active(&mut self) {
        if let Some(token) = self.active.take() {
            token.cancel();
        }
    }
}

/// One dispatched search invocation.
#[derive(Debug)]
pub struct PendingSearch {
    query: Option<String>,
    token: CancellationToken,
    config: SearchConfig,
}

impl PendingSearch {
    /// Token the presentation layer can cancel to stop this invocation at its
    /// next safe point.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.token.clone()
    }

    /// Run the pipeline.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ScopeError::Search`] if the HTTP client cannot be built.
    pub async fn run(self) -> Result<Vec<SearchResult>> {
        let results =
            artist_search::search(self.query.as_deref(), &self.token, &self.config).await?;
        tracing::debug!(
            count = results.len(),
            cancelled = self.token.is_cancelled(),
            "search invocation finished"
        );
        Ok(results)
    }
}
