//! Banner copy records as exchanged with the copy-generation service (camelCase JSON).

use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BannerTemplate {
    /// Adds an us-versus-them feature matrix.
    Comparison,
    /// Headline, description, CTA. Unknown template names land here.
    #[default]
    #[serde(other)]
    Standard,
}

/// Colors the service suggests. Advisory only; the renderer styles banners
/// from a generated color set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BannerColors {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cta: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BannerDesign {
    #[serde(default)]
    pub template: BannerTemplate,
    #[serde(default = "default_layout")]
    pub layout: String,
    #[serde(default)]
    pub colors: BannerColors,
}

fn default_layout() -> String {
    "center".to_owned()
}

impl Default for BannerDesign {
    fn default() -> Self {
        Self { template: BannerTemplate::Standard, layout: default_layout(), colors: BannerColors::default() }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonPoints {
    #[serde(default)]
    pub us: Vec<String>,
    #[serde(default)]
    pub them: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BannerContent {
    #[serde(default)]
    pub headline: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub cta_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comparison_points: Option<ComparisonPoints>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Banner {
    #[serde(default)]
    pub design: BannerDesign,
    #[serde(default)]
    pub content: BannerContent,
}

impl Banner {
    pub fn is_comparison(&self) -> bool {
        self.design.template == BannerTemplate::Comparison || self.content.comparison_points.is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BannerResponse {
    #[serde(default)]
    pub banners: Vec<Banner>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_service_shape() {
        let json = r##"{
            "design": {
                "template": "comparison",
                "layout": "left",
                "colors": { "background": "#10B981", "text": "#FFFFFF", "cta": "#F59E0B" }
            },
            "content": {
                "headline": "Cover more for less",
                "description": "Compare plans side by side",
                "ctaText": "Get Quote",
                "comparisonPoints": { "us": ["24/7 claims"], "them": ["Office hours"] }
            }
        }"##;
        let banner: Banner = serde_json::from_str(json).unwrap();
        assert_eq!(banner.design.template, BannerTemplate::Comparison);
        assert_eq!(banner.design.colors.cta.as_deref(), Some("#F59E0B"));
        assert_eq!(banner.content.cta_text, "Get Quote");
        assert_eq!(banner.content.comparison_points.unwrap().them, vec!["Office hours"]);
    }

    #[test]
    fn missing_fields_take_defaults() {
        let banner: Banner = serde_json::from_str(r#"{ "content": { "headline": "Hi" } }"#).unwrap();
        assert_eq!(banner.design.template, BannerTemplate::Standard);
        assert_eq!(banner.design.layout, "center");
        assert_eq!(banner.content.headline, "Hi");
        assert!(banner.content.cta_text.is_empty());
        assert!(!banner.is_comparison());
    }

    #[test]
    fn unknown_template_is_standard() {
        let design: BannerDesign = serde_json::from_str(r#"{ "template": "hero" }"#).unwrap();
        assert_eq!(design.template, BannerTemplate::Standard);
    }

    #[test]
    fn template_names_are_lowercase() {
        assert_eq!(serde_json::to_value(BannerTemplate::Standard).unwrap(), "standard");
        assert_eq!(serde_json::to_value(BannerTemplate::Comparison).unwrap(), "comparison");

        let design: BannerDesign = serde_json::from_str(r#"{ "template": "standard" }"#).unwrap();
        assert_eq!(design.template, BannerTemplate::Standard);
        assert_eq!(BannerTemplate::default(), BannerTemplate::Standard);
    }

    #[test]
    fn writes_camel_case_and_skips_empty_options() {
        let banner = Banner {
            content: BannerContent { cta_text: "Join".into(), ..Default::default() },
            ..Default::default()
        };
        let json = serde_json::to_value(&banner).unwrap();
        assert_eq!(json["content"]["ctaText"], "Join");
        assert!(json["content"].get("comparisonPoints").is_none());
        assert!(json["design"]["colors"].get("cta").is_none());
    }
}
