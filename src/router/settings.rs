//! Settings widget values.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Theme {
    #[default]
    Light,
    Dark,
    System,
}

impl Theme {
    pub const ALL: [Self; 3] = [Self::Light, Self::Dark, Self::System];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
            Self::System => "System",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RefreshRate {
    #[default]
    #[serde(rename = "30s")]
    Seconds30,
    #[serde(rename = "1m")]
    Minutes1,
    #[serde(rename = "5m")]
    Minutes5,
    #[serde(rename = "15m")]
    Minutes15,
}

impl RefreshRate {
    pub const ALL: [Self; 4] = [
        Self::Seconds30,
        Self::Minutes1,
        Self::Minutes5,
        Self::Minutes15,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Seconds30 => "30s",
            Self::Minutes1 => "1m",
            Self::Minutes5 => "5m",
            Self::Minutes15 => "15m",
        }
    }
}

/// Dashboard tab of the settings view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardPreferences {
    pub theme: Theme,
    pub refresh_rate: RefreshRate,
    pub show_notifications: bool,
    pub compact_mode: bool,
}

impl Default for DashboardPreferences {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            refresh_rate: RefreshRate::Seconds30,
            show_notifications: true,
            compact_mode: false,
        }
    }
}

/// AI tab of the settings view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AiSettings {
    pub benefits_prediction: bool,
    pub risk_intelligence: bool,
    pub sustainability_analytics: bool,
    confidence_threshold: f64,
}

impl AiSettings {
    pub const DEFAULT_CONFIDENCE: f64 = 0.7;

    /// Build AI settings; the threshold is clamped into `0.0..=1.0`.
    #[must_use]
    pub fn new(
        benefits_prediction: bool,
        risk_intelligence: bool,
        sustainability_analytics: bool,
        confidence_threshold: f64,
    ) -> Self {
        let confidence_threshold = if confidence_threshold.is_nan() {
            Self::DEFAULT_CONFIDENCE
        } else {
            confidence_threshold.clamp(0.0, 1.0)
        };
        Self {
            benefits_prediction,
            risk_intelligence,
            sustainability_analytics,
            confidence_threshold,
        }
    }

    #[must_use]
    pub fn confidence_threshold(&self) -> f64 {
        self.confidence_threshold
    }
}

impl Default for AiSettings {
    fn default() -> Self {
        Self::new(true, true, true, Self::DEFAULT_CONFIDENCE)
    }
}
