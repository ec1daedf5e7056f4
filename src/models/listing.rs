use serde::{Deserialize, Deserializer, Serialize};

pub const PRICE_NOT_LISTED: &str = "Price not listed";

/// A public directory entry. Rows arrive already filtered to approved vendors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VendorListing {
    #[serde(deserialize_with = "opaque_id")]
    pub id: String,
    pub business_name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub categories: Vec<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state_province: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub starting_price: Option<f64>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub is_verified: bool,
}

impl VendorListing {
    pub fn has_category(&self, category: &str) -> bool {
        self.categories.iter().any(|c| c == category)
    }

    /// `<currency> <amount>`, or [`PRICE_NOT_LISTED`] when no price is set.
    pub fn price_label(&self) -> String {
        match self.starting_price {
            Some(amount) => match self.currency.as_deref().map(str::trim) {
                Some(currency) if !currency.is_empty() => format!("{currency} {amount}"),
                _ => amount.to_string(),
            },
            None => PRICE_NOT_LISTED.to_string(),
        }
    }

    pub fn location_label(&self) -> String {
        let locality = [&self.city, &self.state_province]
            .into_iter()
            .filter_map(|part| non_blank(part))
            .collect::<Vec<_>>()
            .join(", ");

        match non_blank(&self.country) {
            Some(country) if locality.is_empty() => country.to_string(),
            Some(country) => format!("{locality} · {country}"),
            None => locality,
        }
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(serde_json::Number),
}

/// Primary keys may be text, uuid or `int8`; all render as text.
fn opaque_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(id) => id,
        RawId::Number(id) => id.to_string(),
    })
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn listing(value: serde_json::Value) -> VendorListing {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn parses_backend_row() {
        let row = listing(json!({
            "id": "7f3c",
            "business_name": "Royal Beats DJ",
            "categories": ["DJ / MC"],
            "city": "Edison",
            "state_province": "NJ",
            "country": "USA",
            "starting_price": 1500,
            "currency": "USD",
            "is_verified": true
        }));

        assert!(row.is_verified);
        assert!(row.has_category("DJ / MC"));
        assert!(!row.has_category("Decor"));
        assert_eq!(row.price_label(), "USD 1500");
        assert_eq!(row.location_label(), "Edison, NJ · USA");
    }

    #[test]
    fn numeric_id_is_kept_as_text() {
        let rows: Vec<VendorListing> = serde_json::from_value(json!([
            { "id": 42, "business_name": "Numbered Venue", "is_verified": true },
            { "id": "9b1d-uuid", "business_name": "Uuid Decor" }
        ]))
        .unwrap();

        assert_eq!(rows[0].id, "42");
        assert_eq!(rows[1].id, "9b1d-uuid");
    }

    #[test]
    fn absent_price_is_not_listed() {
        let row = listing(json!({
            "id": "1",
            "business_name": "Virk Decor Co.",
            "categories": null,
            "starting_price": null,
            "currency": "USD",
            "is_verified": false
        }));

        assert_eq!(row.price_label(), PRICE_NOT_LISTED);
        assert!(row.categories.is_empty());
    }

    #[test]
    fn fractional_price_keeps_decimals() {
        let row = listing(json!({
            "id": "2",
            "business_name": "Lens & Laavan",
            "starting_price": 2499.5,
            "currency": "CAD"
        }));

        assert_eq!(row.price_label(), "CAD 2499.5");
    }

    #[test]
    fn location_skips_missing_parts() {
        let row = listing(json!({
            "id": "3",
            "business_name": "Dhol Nation",
            "city": "Queens",
            "state_province": "",
            "country": null
        }));
        assert_eq!(row.location_label(), "Queens");

        let row = listing(json!({
            "id": "4",
            "business_name": "Ontario Mehndi",
            "country": "Canada"
        }));
        assert_eq!(row.location_label(), "Canada");
    }
}
