//! End-to-end copy generation through the public API.

use std::cell::Cell;
use std::time::Duration;

use adbanner_copy::fallback::fallback_response;
use adbanner_copy::{
    Analytics, CopyError, CopyRequest, CopyService, Language, LogSink, ServiceConfig, Theme, TtlCache,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

const FENCED_REPLY: &str = r#"Sure! Here are your banners:
```json
{
  "banners": [
    {
      "design": { "template": "comparison", "layout": "split" },
      "content": {
        "headline": "Why switch?",
        "description": "See the difference",
        "ctaText": "Compare",
        "comparisonPoints": { "us": ["24/7 claims"], "them": ["Office hours"] }
      }
    },
    { "content": { "headline": "Save today", "description": "Quotes in minutes", "ctaText": "Get Quote" } },
    { "content": { "headline": "Drive easy", "description": "Roadside help included", "ctaText": "Learn More" } }
  ]
}
```"#;

fn config() -> ServiceConfig {
    ServiceConfig { max_attempts: 3, retry_delay: Duration::ZERO }
}

#[test]
fn fenced_reply_is_extracted_and_padded() {
    let source = |_: &CopyRequest| Ok::<_, CopyError>(FENCED_REPLY.to_owned());
    let mut service = CopyService::new(source, TtlCache::new(), Analytics::new(true, LogSink), config());
    let request = CopyRequest::new("Auto Insurance", Language::English, Theme::Value, "Auto");

    let response = service.generate_with(&request, &mut StdRng::seed_from_u64(5));

    assert_eq!(response.banners.len(), 5);
    assert!(response.banners[0].is_comparison());
    assert_eq!(response.banners[0].design.layout, "split");
    assert_eq!(response.banners[1].design.layout, "center");
    assert_eq!(service.cache().stats().entries, 1);
}

#[test]
fn same_topic_in_other_case_hits_cache() {
    let counter = Cell::new(0u32);
    let source = |_: &CopyRequest| {
        counter.set(counter.get() + 1);
        Ok::<_, CopyError>(FENCED_REPLY.to_owned())
    };
    let mut service = CopyService::new(source, TtlCache::new(), Analytics::disabled(), config());
    let mut rng = StdRng::seed_from_u64(9);

    for topic in ["Home Insurance", "  home insurance "] {
        let request = CopyRequest::new(topic, Language::English, Theme::Trust, "home");
        assert_eq!(service.generate_with(&request, &mut rng).banners.len(), 5);
    }
    assert_eq!(counter.get(), 1);
}

#[test]
fn refusal_yields_theme_fallback() {
    let source = |_: &CopyRequest| Ok::<_, CopyError>("I can't write ads about that.".to_owned());
    let mut service = CopyService::new(source, TtlCache::new(), Analytics::disabled(), config());
    let request = CopyRequest::new("anything", Language::Hindi, Theme::Community, "");

    let response = service.generate_with(&request, &mut StdRng::seed_from_u64(1));
    assert_eq!(response, fallback_response(Theme::Community));
    assert_eq!(service.cache().stats().entries, 0);
}
