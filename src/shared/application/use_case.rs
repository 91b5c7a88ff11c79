//! Base traits for command and query handlers following the CQS split:
//! commands mutate state, queries only read it. Each handler implements
//! exactly one of these for its input/output pair.

use async_trait::async_trait;

use crate::shared::errors::AppResult;

/// Base trait for use cases (command handlers)
#[async_trait]
pub trait UseCase<TCommand, TResult> {
    /// Execute the use case with the given command
    async fn execute(&self, command: TCommand) -> AppResult<TResult>;
}

/// Base trait for queries (query handlers)
#[async_trait]
pub trait Query<TQuery, TResult> {
    /// Execute the query
    async fn execute(&self, query: TQuery) -> AppResult<TResult>;
}
