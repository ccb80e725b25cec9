//! # marquee-api - TMDB client
//!
//! Stateless async wrappers around the TMDB v3 movie endpoints: one
//! operation per endpoint, each issuing exactly one HTTP GET and
//! deserializing the JSON body into the typed result from `marquee-core`.
//! No retries, no pagination past page one, no response transformation.
//!
//! Authentication is a static bearer token; every request also carries a
//! `language` query parameter.

mod client;
mod discover;
mod error;
mod genres;
mod movie;
mod search;
mod trending;

pub use client::TmdbClient;
pub use error::ApiError;

pub type Result<T> = std::result::Result<T, ApiError>;
