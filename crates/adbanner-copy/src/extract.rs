//! Pulls banner records out of raw copy-service output.
//!
//! Services tend to wrap their JSON in prose or code fences, so everything
//! outside the outermost `{ ... }` is ignored.

use rand::Rng;

use crate::error::CopyError;
use crate::model::BannerResponse;

/// Fewer banners than this and the response is rejected.
pub const MIN_BANNERS: usize = 3;

/// Accepted responses are padded up to this many banners.
pub const TARGET_BANNERS: usize = 5;

/// Parses, checks the banner count, and pads short responses by repeating
/// randomly chosen banners.
pub fn extract_banners<R: Rng + ?Sized>(raw: &str, rng: &mut R) -> Result<BannerResponse, CopyError> {
    let start = raw.find('{').ok_or(CopyError::NoJson)?;
    let end = raw.rfind('}').filter(|&end| end > start).ok_or(CopyError::NoJson)?;

    let mut response: BannerResponse =
        serde_json::from_str(&raw[start..=end]).map_err(|e| CopyError::InvalidJson(e.to_string()))?;

    let found = response.banners.len();
    if found < MIN_BANNERS {
        log::warn!("copy response has only {found} banners");
        return Err(CopyError::TooFewBanners { found, required: MIN_BANNERS });
    }

    while response.banners.len() < TARGET_BANNERS {
        let pick = response.banners[rng.gen_range(0..found)].clone();
        response.banners.push(pick);
    }
    Ok(response)
}
