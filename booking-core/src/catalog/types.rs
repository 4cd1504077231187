//! Catalog types

use serde::{Deserialize, Serialize};

use super::currency::format_eur;

/// A piece of hardware that can be booked
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HardwareItem {
    /// Stable identifier, also used as the page anchor
    pub id: String,
    /// Display name
    pub name: String,
    /// Image path or URL
    pub image: String,
    /// Vendor or product page
    #[serde(default = "default_link")]
    pub link: String,
    /// Bullet points shown under the name
    #[serde(default)]
    pub specs: Vec<String>,
    /// Hourly rate in EUR
    #[serde(default)]
    pub price: Option<f64>,
    /// Whether the item appears on the listing
    #[serde(default = "default_show")]
    pub show: bool,
}

fn default_link() -> String {
    "#".to_string()
}

fn default_show() -> bool {
    true
}

impl HardwareItem {
    /// Hourly rate if one is set. A zero rate counts as unset.
    pub fn hourly_rate(&self) -> Option<f64> {
        self.price.filter(|p| *p != 0.0 && p.is_finite())
    }

    /// "Kosten pro Stunde 12,50 €", or `None` when no rate is set
    pub fn hourly_cost_label(&self) -> Option<String> {
        self.hourly_rate()
            .map(|rate| format!("Kosten pro Stunde {}", format_eur(rate)))
    }

    /// Cost of booking this item for `hours`
    pub fn cost_for(&self, hours: u32) -> Option<f64> {
        self.hourly_rate().map(|rate| rate * f64::from(hours))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(price: Option<f64>) -> HardwareItem {
        HardwareItem {
            id: "x".into(),
            name: "X".into(),
            image: "/x.png".into(),
            link: "#".into(),
            specs: vec![],
            price,
            show: true,
        }
    }

    #[test]
    fn cost_label_present_for_priced_item() {
        assert_eq!(
            item(Some(12.5)).hourly_cost_label().unwrap(),
            "Kosten pro Stunde 12,50\u{a0}€"
        );
    }

    #[test]
    fn cost_label_absent_without_price() {
        assert!(item(None).hourly_cost_label().is_none());
    }

    #[test]
    fn zero_price_counts_as_unset() {
        assert!(item(Some(0.0)).hourly_cost_label().is_none());
        assert!(item(Some(0.0)).cost_for(3).is_none());
    }

    #[test]
    fn cost_for_multiplies_rate() {
        assert_eq!(item(Some(8.0)).cost_for(3), Some(24.0));
    }

    #[test]
    fn defaults_fill_optional_fields() {
        let parsed: HardwareItem =
            toml::from_str("id = \"a\"\nname = \"A\"\nimage = \"/a.png\"").unwrap();
        assert_eq!(parsed.link, "#");
        assert!(parsed.specs.is_empty());
        assert!(parsed.price.is_none());
        assert!(parsed.show);
    }
}
