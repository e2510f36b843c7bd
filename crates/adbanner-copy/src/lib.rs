//! Banner ad copy: the records a copy-generation service returns, and the
//! plumbing around that service.
//!
//! The service itself (an LLM behind some provider API) is abstracted as
//! [`CopySource`]. [`CopyService`] wraps a source with a [`TtlCache`] and an
//! [`Analytics`] recorder, both passed in at construction, and always
//! produces presentable copy: when the source fails or returns something
//! unusable, theme-specific [fallback copy](fallback::fallback_response) is
//! used instead.
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`model`] | `Banner`, `BannerContent`, `BannerDesign`, `BannerResponse` |
//! | [`request`] | `CopyRequest`, `Language`, `Theme` |
//! | [`extract`] | JSON extraction from raw service output |
//! | [`fallback`] | canned copy per theme |
//! | [`cache`] | `TtlCache` |
//! | [`analytics`] | `Analytics`, `EventSink` |
//! | [`service`] | `CopySource`, `CopyService` |

pub mod analytics;
pub mod cache;
pub mod error;
pub mod extract;
pub mod fallback;
pub mod model;
pub mod request;
pub mod service;

pub use analytics::{Analytics, AnalyticsEvent, EventSink, LogSink};
pub use cache::TtlCache;
pub use error::CopyError;
pub use extract::extract_banners;
pub use model::{Banner, BannerContent, BannerDesign, BannerResponse};
pub use request::{CopyRequest, Language, Theme};
pub use service::{CopyService, CopySource, ServiceConfig};
