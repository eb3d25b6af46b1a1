//! InnerTube request context resolution.
//!
//! # Architecture
//!
//! - **Profiles** (`profile.rs`, `catalog.rs`) - immutable client identities and the fixed catalog
//! - **Locale overlay** (`locale.rs`) - adapts `hl`/`gl` to the caller's locale
//! - **Bootstrap DTOs** (`dto.rs`) - exact shape of the `ytcfg.set` document
//! - **Adapter** (`adapter.rs`) - page extraction and DTO -> domain conversion
//! - **Transport** (`traits.rs`, `client.rs`) - the fetch seam and its HTTP implementation
//! - **Fetcher** (`fetcher.rs`, `slot.rs`) - single-flight, cached-on-success configuration
//! - **Visitor ids** (`visitor.rs`) - fresh -> echoed -> static fallback
//! - **Decorator** (`decorator.rs`) - headers and query parameters for outgoing requests
//!
//! Fetch failures never escape the fetcher: callers see "value present" or
//! "value absent", and decoration always succeeds from static fields.
//!
//! # Usage
//!
//! ```ignore
//! use innertube_context::innertube::{ConfigurationFetcher, ProfileKind, SystemLocale, decorate_resolved};
//!
//! let fetcher = ConfigurationFetcher::http()?;
//! let profile = ProfileKind::Android.profile(&SystemLocale);
//!
//! let request = http.post("https://music.youtube.com/youtubei/v1/browse");
//! let request = decorate_resolved(&fetcher, &profile, request).await;
//! ```

pub mod adapter;
pub mod catalog;
pub mod client;
pub mod decorator;
pub mod domain;
pub mod dto;
pub mod fetcher;
pub mod locale;
pub mod profile;
pub mod slot;
pub mod traits;
pub mod visitor;

pub use catalog::{ProfileKind, default_web};
pub use client::HttpTransport;
pub use decorator::{RequestDecoration, decorate, decorate_resolved};
pub use domain::{FetchError, ResolvedConfiguration};
pub use fetcher::ConfigurationFetcher;
pub use locale::{Locale, LocaleProvider, SystemLocale, with_locale};
pub use profile::{ClientProfile, Context, ThirdParty, User};
pub use traits::BootstrapTransport;
pub use visitor::select_visitor_id;
