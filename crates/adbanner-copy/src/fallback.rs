//! Canned copy used whenever the copy service cannot deliver.

use crate::model::{Banner, BannerColors, BannerContent, BannerDesign, BannerResponse, BannerTemplate};
use crate::request::Theme;

/// `(headline, description, cta)` per banner.
type Line = (&'static str, &'static str, &'static str);

const FOMO: [Line; 5] = [
    ("Others are saving!", "Don't miss out", "Join Now"),
    ("Limited spots left", "Act before it's gone", "Secure Now"),
    ("Your neighbors saved", "Why haven't you?", "Start Now"),
    ("Missing great deals?", "Others aren't", "Get Yours"),
    ("Don't be left out", "Join thousands", "Sign Up"),
];

const URGENCY: [Line; 5] = [
    ("Act Now!", "Limited time offer", "Buy Today"),
    ("Expires Soon!", "Don't wait", "Get Now"),
    ("Final Hours!", "Offer ends tonight", "Hurry Up"),
    ("Time Running Out!", "Secure your spot", "Act Fast"),
    ("Today Only!", "Special pricing", "Buy Now"),
];

const EXCLUSIVITY: [Line; 5] = [
    ("VIP Access Only", "Exclusive offer", "Join VIP"),
    ("Members Only", "Special pricing", "Get Access"),
    ("Invitation Only", "Limited access", "Accept Now"),
    ("Premium Members", "Exclusive benefits", "Upgrade"),
    ("Select Customers", "Special treatment", "Qualify"),
];

const VALUE: [Line; 5] = [
    ("Best Price Guaranteed", "Save money today", "Save Now"),
    ("Cheapest Rates", "Compare & save", "Get Quote"),
    ("Huge Savings", "Up to 50% off", "Save Big"),
    ("Lowest Price", "Beat any quote", "Start Now"),
    ("Great Value", "More for less", "Compare"),
];

const TRUST: [Line; 5] = [
    ("Trusted by Millions", "5-star rated", "Join Us"),
    ("Secure & Reliable", "Your safety first", "Get Protected"),
    ("99.9% Uptime", "Always there", "Trust Us"),
    ("Award Winning", "Industry leader", "Choose Best"),
    ("Certified Safe", "Fully licensed", "Feel Safe"),
];

const COMMUNITY: [Line; 5] = [
    ("Join Our Community", "1M+ happy members", "Join Us"),
    ("Together We Save", "Community power", "Be Part"),
    ("Connect & Save", "Social benefits", "Connect"),
    ("Community Rates", "Group discounts", "Join Group"),
    ("Member Benefits", "Exclusive community", "Become Member"),
];

const BACKGROUNDS: [&str; 5] = ["#10B981", "#3B82F6", "#8B5CF6", "#EF4444", "#F59E0B"];
const CTA_FILLS: [&str; 5] = ["#F59E0B", "#10B981", "#F59E0B", "#FBBF24", "#10B981"];

fn lines_for(theme: Theme) -> &'static [Line; 5] {
    match theme {
        Theme::Fomo => &FOMO,
        Theme::Urgency => &URGENCY,
        Theme::Exclusivity => &EXCLUSIVITY,
        Theme::Value => &VALUE,
        Theme::Trust => &TRUST,
        Theme::Community => &COMMUNITY,
    }
}

/// Five standard banners for `theme`, white text on fixed colors.
pub fn fallback_banners(theme: Theme) -> Vec<Banner> {
    lines_for(theme)
        .iter()
        .zip(BACKGROUNDS.iter().zip(CTA_FILLS))
        .map(|(&(headline, description, cta_text), (&background, cta))| Banner {
            design: BannerDesign {
                template: BannerTemplate::Standard,
                layout: "center".to_owned(),
                colors: BannerColors {
                    background: Some(background.to_owned()),
                    text: Some("#FFFFFF".to_owned()),
                    cta: Some(cta.to_owned()),
                },
            },
            content: BannerContent {
                headline: headline.to_owned(),
                description: description.to_owned(),
                cta_text: cta_text.to_owned(),
                comparison_points: None,
            },
        })
        .collect()
}

pub fn fallback_response(theme: Theme) -> BannerResponse {
    BannerResponse { banners: fallback_banners(theme) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::TARGET_BANNERS;

    #[test]
    fn every_theme_fills_a_full_response() {
        for theme in Theme::ALL {
            let banners = fallback_banners(theme);
            assert_eq!(banners.len(), TARGET_BANNERS);
            assert!(banners.iter().all(|b| !b.content.headline.is_empty() && !b.content.cta_text.is_empty()));
        }
    }

    #[test]
    fn themes_have_their_own_copy() {
        let urgency = fallback_banners(Theme::Urgency);
        let trust = fallback_banners(Theme::Trust);
        assert_eq!(urgency[0].content.headline, "Act Now!");
        assert_eq!(trust[0].content.headline, "Trusted by Millions");
    }

    #[test]
    fn colors_follow_position() {
        let banners = fallback_banners(Theme::Value);
        assert_eq!(banners[1].design.colors.background.as_deref(), Some("#3B82F6"));
        assert_eq!(banners[3].design.colors.cta.as_deref(), Some("#FBBF24"));
        assert_eq!(banners[3].design.colors.text.as_deref(), Some("#FFFFFF"));
    }
}
