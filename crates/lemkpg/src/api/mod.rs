//! Blocking and async entry points.
//!
//! Both adapters share one [`StatementBuilder`](crate::StatementBuilder) and
//! one [`Executor`](crate::Executor); [`LemkPgApi`] only adds a per-call
//! runtime around the futures of [`LemkPgAsyncApi`].

mod async_api;
mod blocking;

#[cfg(test)]
mod tests;

pub use async_api::LemkPgAsyncApi;
pub use blocking::LemkPgApi;
