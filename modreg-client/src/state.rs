//! Query state
//!
//! The lifecycle front ends render for each catalog call:
//! `Idle → Loading → Success | Error`. Success and Error stay put until the
//! caller starts a new invocation. Discarding results of superseded
//! invocations is left to the caller.

use std::future::Future;

use crate::error::CatalogError;

/// State of one catalog query as seen by presentation code
#[derive(Debug)]
pub enum QueryState<T, E = CatalogError> {
    /// Nothing requested yet
    Idle,
    /// Request in flight
    Loading,
    /// Request completed with data
    Success(T),
    /// Request failed; the error's message is shown to the user
    Error(E),
}

impl<T, E> Default for QueryState<T, E> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<T, E> QueryState<T, E> {
    /// Start a new invocation, discarding any previous outcome
    pub fn begin(&mut self) {
        *self = Self::Loading;
    }

    /// Record the outcome of the current invocation
    ///
    /// Only a `Loading` state accepts an outcome; returns whether it was applied.
    pub fn settle(&mut self, outcome: Result<T, E>) -> bool {
        if !self.is_loading() {
            return false;
        }

        *self = match outcome {
            Ok(data) => Self::Success(data),
            Err(err) => Self::Error(err),
        };
        true
    }

    /// Begin, await `query`, and settle with its outcome
    pub async fn run<F>(&mut self, query: F)
    where
        F: Future<Output = Result<T, E>>,
    {
        self.begin();
        let outcome = query.await;
        self.settle(outcome);
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Whether the state holds an outcome
    pub fn is_settled(&self) -> bool {
        matches!(self, Self::Success(_) | Self::Error(_))
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&E> {
        match self {
            Self::Error(err) => Some(err),
            _ => None,
        }
    }

    /// Consume the state, returning its outcome if settled
    pub fn into_result(self) -> Option<Result<T, E>> {
        match self {
            Self::Success(data) => Some(Ok(data)),
            Self::Error(err) => Some(Err(err)),
            Self::Idle | Self::Loading => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MODULE_NOT_FOUND;

    #[test]
    fn test_lifecycle() {
        let mut state: QueryState<Vec<String>> = QueryState::default();
        assert!(state.is_idle());

        state.begin();
        assert!(state.is_loading());
        assert!(!state.is_settled());

        assert!(state.settle(Ok(vec!["1.0.0".to_string()])));
        assert_eq!(state.data().map(Vec::len), Some(1));
        assert!(state.is_settled());
    }

    #[test]
    fn test_settled_state_is_terminal() {
        let mut state: QueryState<u32> = QueryState::default();
        assert!(!state.settle(Ok(1)));
        assert!(state.is_idle());

        state.begin();
        assert!(state.settle(Err(CatalogError::NotFound(MODULE_NOT_FOUND))));
        assert!(!state.settle(Ok(2)));
        assert_eq!(
            state.error().map(ToString::to_string),
            Some("Module not found".to_string())
        );

        state.begin();
        assert!(state.is_loading());
        assert!(state.settle(Ok(3)));
        assert!(matches!(state.into_result(), Some(Ok(3))));
    }

    #[tokio::test]
    async fn test_run_settles() {
        let mut state: QueryState<&str, String> = QueryState::Idle;
        state.run(async { Err("boom".to_string()) }).await;
        assert_eq!(state.error().map(String::as_str), Some("boom"));

        state.run(async { Ok("done") }).await;
        assert_eq!(state.data(), Some(&"done"));
    }
}
