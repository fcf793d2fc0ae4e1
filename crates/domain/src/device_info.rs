//! Device descriptor handed to the host's device-registration sink.

use serde::{Deserialize, Serialize};

/// Describes an area controller as a logical device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceInfo {
    /// `(domain, identifier)` pairs the host uses to recognise the device.
    pub identifiers: Vec<(String, String)>,
    pub name: String,
    pub model: String,
    pub manufacturer: String,
    /// Area the host should place the device in.
    pub suggested_area: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_serialize_identifiers_as_pairs() {
        let info = DeviceInfo {
            identifiers: vec![("auto_areas".to_string(), "TBD".to_string())],
            name: "Auto Areas".to_string(),
            model: "0.1.0".to_string(),
            manufacturer: "Auto Areas".to_string(),
            suggested_area: "Kitchen".to_string(),
        };
        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["identifiers"], serde_json::json!([["auto_areas", "TBD"]]));
        assert_eq!(json["suggested_area"], "Kitchen");
    }
}
