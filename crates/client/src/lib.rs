//! Client for the Rick and Morty REST API.
//!
//! This crate provides the request/response pipeline shared by anything that
//! talks to the upstream API: endpoint registry, request construction, raw
//! HTTP transport, in-memory response caching, and typed decoding.

pub mod api;
pub mod fetch;

pub use api::{
    ApiClient, ApiError, Character, CharacterGender, CharacterStatus, Endpoint, Episode, Location,
    LocationRef, Page, PageInfo, Request, RequestBuilder,
};

pub use fetch::{HttpTransport, Transport};
