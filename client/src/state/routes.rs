//! Site map: every routed page, its navigation label and home-page card.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// Navigation group a page is listed under.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavGroup {
    /// Top-level link.
    Main,
    Recommendations,
    Forecasts,
}

impl NavGroup {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Main => "",
            Self::Recommendations => "Recommendations",
            Self::Forecasts => "Forecasts",
        }
    }
}

/// One routed page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SitePage {
    pub path: &'static str,
    pub label: &'static str,
    pub group: NavGroup,
    /// Home-page card text; `None` keeps the page off the card grid.
    pub blurb: Option<&'static str>,
}

pub const HOME: &str = "/";

pub const PAGES: &[SitePage] = &[
    SitePage {
        path: HOME,
        label: "Home",
        group: NavGroup::Main,
        blurb: None,
    },
    SitePage {
        path: "/crop-recommendation",
        label: "Crop Yield Prediction",
        group: NavGroup::Recommendations,
        blurb: Some(
            "Predict crop yields based on various factors to optimize planning and resource allocation.",
        ),
    },
    SitePage {
        path: "/fertilizer-recommendation",
        label: "Fertilizer Recommendation",
        group: NavGroup::Recommendations,
        blurb: Some(
            "Precise fertilizer recommendations to optimize your crop yield and soil health.",
        ),
    },
    SitePage {
        path: "/soil-crop-recommendation",
        label: "Soil Crop Recommendation",
        group: NavGroup::Recommendations,
        blurb: Some("Get recommendations for crops based on your soil conditions."),
    },
    SitePage {
        path: "/disease-detection",
        label: "Disease Detection",
        group: NavGroup::Main,
        blurb: Some("Upload crop images to instantly detect diseases."),
    },
    SitePage {
        path: "/weather-forecast",
        label: "Weather Forecast",
        group: NavGroup::Forecasts,
        blurb: Some("Stay ahead with accurate weather predictions."),
    },
    SitePage {
        path: "/market-forecast",
        label: "Market Forecast",
        group: NavGroup::Forecasts,
        blurb: Some("Stay ahead with accurate market price forecasts."),
    },
    SitePage {
        path: "/contact",
        label: "Contact",
        group: NavGroup::Main,
        blurb: None,
    },
];

/// Pages listed under `group`, in site order.
pub fn in_group(group: NavGroup) -> impl Iterator<Item = &'static SitePage> {
    PAGES.iter().filter(move |page| page.group == group)
}

/// Pages shown as cards on the home page.
pub fn feature_cards() -> impl Iterator<Item = (&'static SitePage, &'static str)> {
    PAGES
        .iter()
        .filter_map(|page| page.blurb.map(|blurb| (page, blurb)))
}
