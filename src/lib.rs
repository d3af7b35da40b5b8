#![warn(unreachable_pub, unused_qualifications)]

//! *A small Rust client for one-shot prompts against Google's Gemini API.*
//!
//! # Overview
//!
//! This library does one thing: send a single prompt — text, or text plus an
//! inline image — to the `generateContent` endpoint and hand back the first
//! generated text. There is no conversation history, no streaming, and no
//! retry machinery; each call is one HTTP round trip.
//!
//! # Authentication
//!
//! The client takes an API key at construction and sends it as a URL query
//! parameter on every call. Keep request URLs out of your logs.
//!
//! # Basic Usage
//!
//! ```rust,no_run
//! use gemini_oneshot::{Client, Model};
//!
//! #[tokio::main]
//! async fn main() -> gemini_oneshot::Result<()> {
//!     let client = Client::new("your-api-key");
//!
//!     if let Some(answer) = client
//!         .generate_text("What is Rust's ownership model?", Model::Gemini20Flash)
//!         .await?
//!     {
//!         println!("{answer}");
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Image prompts
//!
//! Attach an image either from disk (`.png`, `.jpg`, `.jpeg`, `.webp`) with
//! [`Client::generate_text_with_image_file`], or as pre-encoded base64 with
//! [`Client::generate_text_with_image_data`]. The transport is a shared
//! [`reqwest::Client`] that may be injected via [`Client::with_http_client`],
//! e.g. to configure timeouts.

mod client;
mod error;
mod model;
pub mod types;

pub type Result<T> = std::result::Result<T, Error>;

pub use client::Client;
pub use error::Error;
pub use model::Model;
