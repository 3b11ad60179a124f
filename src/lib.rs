//! A grab bag of general purpose utilities: sorted searching, concurrency limiting, functional
//! helpers, caching and a little geometry.
//!
//! # Purpose
//! Most of what's here started life as small helpers repeated across projects. Collecting them in
//! one crate means they get written once, documented once and tested properly.
//!
//! # Error Handling
//! Failures that a caller can reasonably act on are returned as [`Result`]s with strongly typed
//! errors: small structs (or enums of them) that implement [`Error`](std::error::Error) through
//! `derive_more`. Absence is never an error, so lookups return [`Option`]s instead. Panics are
//! reserved for broken invariants and are documented where they can happen.
//!
//! # Features
//! Each module sits behind a Cargo feature, all of which are enabled by default:
//! - `collections`: [`collections`], sorted binary search and grouping.
//! - `functional`: [`functional`], function combinators.
//! - `async`: `concurrent`, concurrency limiting built on `tokio` and `futures`.
//! - `cache`: `cache`, key-value stores using `serde` and `serde_json`.
//! - `geometry`: `geometry`, a two dimensional vector.
//!
//! The `demo` feature (off by default) only pulls in `tracing-subscriber` for the demo binary.
//!
//! The [`string`], [`number`] and [`defer`] modules are always available.
//!
//! # Logging
//! The crate emits [`tracing`] events at `trace` and `debug` level but never installs a
//! subscriber, leaving that to the application.
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "cache")]
pub mod cache;
#[cfg(feature = "collections")]
pub mod collections;
#[cfg(feature = "async")]
pub mod concurrent;
pub mod defer;
#[cfg(feature = "functional")]
pub mod functional;
#[cfg(feature = "geometry")]
pub mod geometry;
pub mod number;
pub mod string;

pub(crate) mod util;
