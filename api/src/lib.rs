//! Client for the OpenAtlas data service.
//!
//! The service exposes two operations over HTTP: list every catalogued
//! [`DataEntry`] and create a new one from a [`NewEntry`]. [`DataClient`]
//! builds the URLs, interprets status codes and bodies, and maps every
//! failure into an [`ApiError`]. The actual I/O goes through the
//! [`Transport`] trait so the interpretation logic can be exercised
//! without a network.

mod client;
mod config;
mod endpoints;
mod entry;
mod error;
mod transport;

pub use client::DataClient;
pub use config::{ApiConfig, API_URL_ENV};
pub use endpoints::{create_url, list_url};
pub use entry::{DataEntry, NewEntry};
pub use error::ApiError;
pub use transport::{RawResponse, ReqwestTransport, Transport};
