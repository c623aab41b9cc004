use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Free-form postal address, the shape most callers hold
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandardAddress {
    pub name: Option<String>,
    pub address1: Option<String>,
    pub address2: Option<String>,
    pub company: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub country: Option<String>,
    pub phone: Option<String>,
    pub fax: Option<String>,
}

/// Address already split into street and house number, as the processor stores it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredAddress {
    pub name: Option<String>,
    pub street: String,
    pub house_number_or_name: String,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub country: Option<String>,
}

/// Billing or delivery address
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Address {
    Standard(StandardAddress),
    /// Used when the processor must see the exact street/house split, e.g. AVS tests
    Structured(StructuredAddress),
}

impl Address {
    /// Processor representation: `city`, `street`, `houseNumberOrName`,
    /// `postalCode`, `stateOrProvince`, `country`
    pub fn to_wire(&self) -> Value {
        let (street, house, city, zip, state, country) = match self {
            Address::Standard(a) => {
                let full = format!(
                    "{} {}",
                    a.address1.as_deref().unwrap_or_default(),
                    a.address2.as_deref().unwrap_or_default()
                );
                let (street, house) = split_street(&full);
                (street, house, &a.city, &a.zip, &a.state, &a.country)
            }
            Address::Structured(a) => (
                a.street.clone(),
                a.house_number_or_name.clone(),
                &a.city,
                &a.zip,
                &a.state,
                &a.country,
            ),
        };

        let mut wire = Map::new();
        if let Some(city) = city {
            wire.insert("city".into(), city.clone().into());
        }
        wire.insert("street".into(), street.into());
        wire.insert("houseNumberOrName".into(), house.into());
        if let Some(zip) = zip {
            wire.insert("postalCode".into(), zip.clone().into());
        }
        if let Some(state) = state {
            wire.insert("stateOrProvince".into(), state.clone().into());
        }
        if let Some(country) = country {
            wire.insert("country".into(), country.clone().into());
        }
        Value::Object(wire)
    }
}

impl From<StandardAddress> for Address {
    fn from(address: StandardAddress) -> Self {
        Address::Standard(address)
    }
}

impl From<StructuredAddress> for Address {
    fn from(address: StructuredAddress) -> Self {
        Address::Structured(address)
    }
}

/// Splits a one-line address into (street, house number): words containing a
/// digit go to the house number, the rest to the street.
pub fn split_street(full: &str) -> (String, String) {
    let (house, street): (Vec<&str>, Vec<&str>) = full
        .split_whitespace()
        .partition(|word| word.chars().any(|c| c.is_ascii_digit()));
    (street.join(" "), house.join(" "))
}
