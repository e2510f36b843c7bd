//! Copy generation with caching, retries and guaranteed fallback.

use std::thread;
use std::time::{Duration, Instant};

use rand::Rng;
use serde_json::Value;

use crate::analytics::{Analytics, context};
use crate::cache::TtlCache;
use crate::error::CopyError;
use crate::extract::extract_banners;
use crate::fallback::fallback_response;
use crate::model::BannerResponse;
use crate::request::CopyRequest;

/// The external copy-generation service: returns raw text that should
/// contain a `{ "banners": [...] }` object.
pub trait CopySource {
    fn fetch(&self, request: &CopyRequest) -> Result<String, CopyError>;
}

impl<F> CopySource for F
where
    F: Fn(&CopyRequest) -> Result<String, CopyError>,
{
    fn fetch(&self, request: &CopyRequest) -> Result<String, CopyError> {
        self(request)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Total fetches per request; only transient failures are retried.
    pub max_attempts: u32,
    pub retry_delay: Duration,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self { max_attempts: 2, retry_delay: Duration::from_secs(2) }
    }
}

pub struct CopyService<S> {
    source: S,
    cache: TtlCache<BannerResponse>,
    analytics: Analytics,
    config: ServiceConfig,
}

impl<S: CopySource> CopyService<S> {
    pub fn new(source: S, cache: TtlCache<BannerResponse>, analytics: Analytics, config: ServiceConfig) -> Self {
        Self { source, cache, analytics, config }
    }

    pub fn cache(&self) -> &TtlCache<BannerResponse> {
        &self.cache
    }

    /// Banners for `request`. Never fails: cached copy when available,
    /// otherwise fresh copy, otherwise fallback copy for the request's theme.
    /// Only fresh copy is cached.
    pub fn generate_with<R: Rng + ?Sized>(&mut self, request: &CopyRequest, rng: &mut R) -> BannerResponse {
        let key = request.cache_key();
        if let Some(hit) = self.cache.get(&key) {
            log::debug!("copy cache hit for {key}");
            return hit;
        }

        self.analytics.banner_generation_started(&request.lob, request.theme.as_str(), request.language.as_str());
        let started = Instant::now();

        let response = match self.fetch_banners(request, rng) {
            Ok(response) => {
                self.cache.set(key, response.clone(), None);
                response
            }
            Err((err, attempts)) => {
                log::warn!("copy generation failed after {attempts} attempt(s): {err}; using fallback copy");
                self.analytics.error(
                    err.kind(),
                    &err.to_string(),
                    context([("attempts", Value::from(attempts)), ("theme", Value::from(request.theme.as_str()))]),
                );
                fallback_response(request.theme)
            }
        };

        self.analytics.banner_generation_completed(&request.lob, response.banners.len(), started.elapsed());
        response
    }

    pub fn generate(&mut self, request: &CopyRequest) -> BannerResponse {
        self.generate_with(request, &mut rand::thread_rng())
    }

    fn fetch_banners<R: Rng + ?Sized>(
        &self,
        request: &CopyRequest,
        rng: &mut R,
    ) -> Result<BannerResponse, (CopyError, u32)> {
        let mut attempt = 1;
        loop {
            let result = self.source.fetch(request).and_then(|raw| extract_banners(&raw, &mut *rng));
            match result {
                Ok(response) => return Ok(response),
                Err(err) if err.is_transient() && attempt < self.config.max_attempts => {
                    log::info!("copy attempt {attempt}/{} failed: {err}; retrying", self.config.max_attempts);
                    thread::sleep(self.config.retry_delay);
                    attempt += 1;
                }
                Err(err) => return Err((err, attempt)),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::sync::{Arc, Mutex};

    use rand::rngs::mock::StepRng;

    use super::*;
    use crate::analytics::{AnalyticsEvent, EventSink};
    use crate::request::{Language, Theme};

    const FIVE: &str = r#"{ "banners": [
        { "content": { "headline": "A", "description": "a", "ctaText": "Go" } },
        { "content": { "headline": "B", "description": "b", "ctaText": "Go" } },
        { "content": { "headline": "C", "description": "c", "ctaText": "Go" } },
        { "content": { "headline": "D", "description": "d", "ctaText": "Go" } },
        { "content": { "headline": "E", "description": "e", "ctaText": "Go" } }
    ] }"#;

    #[derive(Clone, Default)]
    struct Recorder(Arc<Mutex<Vec<AnalyticsEvent>>>);

    impl EventSink for Recorder {
        fn send(&self, event: &AnalyticsEvent) {
            self.0.lock().unwrap().push(event.clone());
        }
    }

    impl Recorder {
        fn actions(&self) -> Vec<String> {
            self.0.lock().unwrap().iter().map(|e| e.action.clone()).collect()
        }
    }

    /// Replays scripted results, then repeats the last one.
    struct Scripted {
        results: Vec<Result<String, CopyError>>,
        calls: Cell<usize>,
    }

    impl Scripted {
        fn new(results: Vec<Result<String, CopyError>>) -> Self {
            Self { results, calls: Cell::new(0) }
        }
    }

    impl CopySource for Scripted {
        fn fetch(&self, _: &CopyRequest) -> Result<String, CopyError> {
            let i = self.calls.get().min(self.results.len() - 1);
            self.calls.set(self.calls.get() + 1);
            self.results[i].clone()
        }
    }

    fn quick() -> ServiceConfig {
        ServiceConfig { max_attempts: 2, retry_delay: Duration::ZERO }
    }

    fn request() -> CopyRequest {
        CopyRequest::new("roadside assistance", Language::English, Theme::Urgency, "auto")
    }

    fn service<S: CopySource>(source: S, recorder: &Recorder) -> CopyService<S> {
        CopyService::new(source, TtlCache::new(), Analytics::new(true, recorder.clone()), quick())
    }

    #[test]
    fn fresh_copy_is_returned_and_cached() {
        let recorder = Recorder::default();
        let mut svc = service(Scripted::new(vec![Ok(FIVE.to_owned())]), &recorder);

        let first = svc.generate_with(&request(), &mut StepRng::new(0, 0));
        assert_eq!(first.banners[0].content.headline, "A");
        assert_eq!(svc.source.calls.get(), 1);

        let second = svc.generate_with(&request(), &mut StepRng::new(0, 0));
        assert_eq!(first, second);
        assert_eq!(svc.source.calls.get(), 1);
        assert_eq!(recorder.actions(), ["banner_generation_started", "banner_generation_completed"]);
    }

    #[test]
    fn transient_failure_is_retried() {
        let recorder = Recorder::default();
        let source = Scripted::new(vec![Err(CopyError::Transport("timeout".into())), Ok(FIVE.to_owned())]);
        let mut svc = service(source, &recorder);

        let response = svc.generate_with(&request(), &mut StepRng::new(0, 0));
        assert_eq!(response.banners[1].content.headline, "B");
        assert_eq!(svc.source.calls.get(), 2);
    }

    #[test]
    fn retries_stop_at_the_limit() {
        let recorder = Recorder::default();
        let source = Scripted::new(vec![Err(CopyError::Transport("down".into()))]);
        let mut svc = service(source, &recorder);

        let response = svc.generate_with(&request(), &mut StepRng::new(0, 0));
        assert_eq!(svc.source.calls.get(), 2);
        assert_eq!(response, fallback_response(Theme::Urgency));
    }

    #[test]
    fn bad_output_falls_back_without_retry() {
        let recorder = Recorder::default();
        let mut svc = service(Scripted::new(vec![Ok("I cannot help with that.".to_owned())]), &recorder);

        let response = svc.generate_with(&request(), &mut StepRng::new(0, 0));
        assert_eq!(svc.source.calls.get(), 1);
        assert_eq!(response.banners[0].content.headline, "Act Now!");
        assert_eq!(
            recorder.actions(),
            ["banner_generation_started", "error", "banner_generation_completed"]
        );
    }

    #[test]
    fn fallback_is_not_cached() {
        let recorder = Recorder::default();
        let source = Scripted::new(vec![Err(CopyError::Provider("quota".into())), Ok(FIVE.to_owned())]);
        let mut svc = service(source, &recorder);

        let first = svc.generate_with(&request(), &mut StepRng::new(0, 0));
        let second = svc.generate_with(&request(), &mut StepRng::new(0, 0));
        assert_eq!(first, fallback_response(Theme::Urgency));
        assert_eq!(second.banners[0].content.headline, "A");
        assert_eq!(svc.cache().stats().entries, 1);
    }

    #[test]
    fn closures_are_sources() {
        let recorder = Recorder::default();
        let mut svc = service(|_: &CopyRequest| Ok::<_, CopyError>(FIVE.to_owned()), &recorder);
        assert_eq!(svc.generate(&request()).banners.len(), 5);
    }
}
