//! Karnataka Location Resolution
//!
//! Static district table (`data/districts.json`) and PIN-code prefix table
//! (`data/pincode_prefixes.json`). Resolution never touches the network:
//! - district names are matched by key, by name, or by the first word of the query
//! - PIN codes are validated (56xxxx-59xxxx) and mapped by their 3-digit prefix
//! - coordinates inside the state bounding box keep their own position; the
//!   nearest district centre (haversine) only supplies a display name

use std::sync::OnceLock;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::{AdvisorError, Result};

const DISTRICTS_JSON: &str = include_str!("../data/districts.json");
const PINCODE_PREFIXES_JSON: &str = include_str!("../data/pincode_prefixes.json");

/// Mean Earth radius (km)
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Approximate geographic centre of Karnataka
pub const KARNATAKA_CENTER: (f64, f64) = (15.3173, 75.7139);

/// Approximate state bounding box: (south, north) latitude, (west, east) longitude
const KARNATAKA_LAT: (f64, f64) = (11.30, 18.45);
const KARNATAKA_LON: (f64, f64) = (74.05, 78.59);

static DISTRICTS: OnceLock<Vec<District>> = OnceLock::new();
static PINCODE_PREFIXES: OnceLock<FxHashMap<String, String>> = OnceLock::new();

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct District {
    /// Normalised key ("dakshina-kannada")
    pub key: String,
    pub name: String,
    pub lat: f64,
    pub lon: f64,
}

/// A place the analysis can run for
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedLocation {
    /// Display name ("Mandya (PIN: 571401)")
    pub name: String,
    /// District key when the location maps onto the district table
    pub district_key: Option<String>,
    pub district_name: String,
    pub lat: f64,
    pub lon: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pincode: Option<String>,
}

impl District {
    pub fn to_location(&self) -> ResolvedLocation {
        ResolvedLocation {
            name: self.name.clone(),
            district_key: Some(self.key.clone()),
            district_name: self.name.clone(),
            lat: self.lat,
            lon: self.lon,
            pincode: None,
        }
    }
}

pub fn districts() -> &'static [District] {
    DISTRICTS.get_or_init(|| {
        serde_json::from_str(DISTRICTS_JSON).unwrap_or_else(|e| {
            tracing::error!("Embedded district table is invalid: {}", e);
            Vec::new()
        })
    })
}

fn pincode_prefixes() -> &'static FxHashMap<String, String> {
    PINCODE_PREFIXES.get_or_init(|| {
        serde_json::from_str(PINCODE_PREFIXES_JSON).unwrap_or_else(|e| {
            tracing::error!("Embedded PIN prefix table is invalid: {}", e);
            FxHashMap::default()
        })
    })
}

/// "Dakshina Kannada" -> "dakshina-kannada"
pub fn normalize_district_key(name: &str) -> String {
    name.trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

pub fn district_by_key(key: &str) -> Option<&'static District> {
    districts().iter().find(|d| d.key == key)
}

/// Match a district by key, by full name, or by the first word of the query
///
/// The first-word rule is loose on purpose: "Bangalore" finds "Bangalore Urban".
pub fn find_district(query: &str) -> Option<&'static District> {
    let query = query.trim().to_lowercase();
    let first_word = query.split_whitespace().next()?;
    let key = normalize_district_key(&query);

    districts().iter().find(|d| {
        let name = d.name.to_lowercase();
        d.key == key || name == query || name.contains(first_word)
    })
}

pub fn require_district(query: &str) -> Result<&'static District> {
    find_district(query).ok_or_else(|| AdvisorError::UnknownDistrict(query.to_string()))
}

/// Six ASCII digits starting 56, 57, 58 or 59
pub fn is_karnataka_pincode(pin: &str) -> bool {
    let bytes = pin.as_bytes();
    bytes.len() == 6
        && bytes.iter().all(u8::is_ascii_digit)
        && bytes[0] == b'5'
        && (b'6'..=b'9').contains(&bytes[1])
}

/// Map a PIN code onto a district through its 3-digit prefix
///
/// Valid codes with an unmapped prefix resolve to the centre of the state.
pub fn resolve_pincode(pin: &str) -> Result<ResolvedLocation> {
    let pin = pin.trim();
    if !is_karnataka_pincode(pin) {
        return Err(AdvisorError::InvalidPincode(pin.to_string()));
    }

    let district = pincode_prefixes()
        .get(&pin[..3])
        .and_then(|key| district_by_key(key));

    let location = match district {
        Some(d) => ResolvedLocation {
            name: format!("{} (PIN: {})", d.name, pin),
            pincode: Some(pin.to_string()),
            ..d.to_location()
        },
        None => {
            tracing::debug!("PIN prefix {} not in table, using state centre", &pin[..3]);
            ResolvedLocation {
                name: format!("Karnataka (PIN: {})", pin),
                district_key: None,
                district_name: "Unknown".to_string(),
                lat: KARNATAKA_CENTER.0,
                lon: KARNATAKA_CENTER.1,
                pincode: Some(pin.to_string()),
            }
        }
    };
    Ok(location)
}

/// Resolve free-form input: a PIN code when it is all digits, otherwise a district name
pub fn resolve(query: &str) -> Result<ResolvedLocation> {
    let query = query.trim();
    if !query.is_empty() && query.bytes().all(|b| b.is_ascii_digit()) {
        resolve_pincode(query)
    } else {
        require_district(query).map(District::to_location)
    }
}

/// Inside the state bounding box (edges included)
pub fn is_in_karnataka(lat: f64, lon: f64) -> bool {
    (KARNATAKA_LAT.0..=KARNATAKA_LAT.1).contains(&lat)
        && (KARNATAKA_LON.0..=KARNATAKA_LON.1).contains(&lon)
}

/// A GPS position inside Karnataka
///
/// No district key is set, so soil comes from the coordinate estimate rather
/// than a district profile. The nearest district only names the place.
pub fn resolve_coordinates(lat: f64, lon: f64) -> Result<ResolvedLocation> {
    if !is_in_karnataka(lat, lon) {
        return Err(AdvisorError::OutsideKarnataka(lat, lon));
    }
    let district_name = nearest_district(lat, lon)
        .map_or_else(|| "Unknown".to_string(), |(d, _)| d.name.clone());

    Ok(ResolvedLocation {
        name: format!("{:.4}, {:.4}", lat, lon),
        district_key: None,
        district_name,
        lat,
        lon,
        pincode: None,
    })
}

/// Coordinates of a named district; state centre when the name is unknown
pub fn district_coordinates(name: &str) -> (f64, f64) {
    find_district(name).map_or(KARNATAKA_CENTER, |d| (d.lat, d.lon))
}

/// Great-circle distance in kilometres
pub fn haversine_km(a_lat: f64, a_lon: f64, b_lat: f64, b_lon: f64) -> f64 {
    let d_lat = (b_lat - a_lat).to_radians();
    let d_lon = (b_lon - a_lon).to_radians();
    let s1 = (d_lat / 2.0).sin();
    let s2 = (d_lon / 2.0).sin();
    let h = s1 * s1 + a_lat.to_radians().cos() * b_lat.to_radians().cos() * s2 * s2;
    2.0 * EARTH_RADIUS_KM * h.sqrt().min(1.0).asin()
}

/// Closest district centre and its distance (km)
pub fn nearest_district(lat: f64, lon: f64) -> Option<(&'static District, f64)> {
    districts()
        .iter()
        .map(|d| (d, haversine_km(lat, lon, d.lat, d.lon)))
        .min_by(|a, b| a.1.total_cmp(&b.1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_tables_load() {
        assert_eq!(districts().len(), 28);
        assert!(pincode_prefixes().len() >= 20);
    }

    #[test]
    fn test_normalize_key() {
        assert_eq!(normalize_district_key("  Dakshina   Kannada "), "dakshina-kannada");
        assert_eq!(normalize_district_key("Mandya"), "mandya");
    }

    #[test]
    fn test_find_district_variants() {
        assert_eq!(find_district("uttara kannada").unwrap().key, "uttara-kannada");
        assert_eq!(find_district("MYSORE").unwrap().key, "mysore");
        assert_eq!(find_district("Bangalore").unwrap().key, "bangalore");
        assert!(find_district("").is_none());
        assert!(find_district("Atlantis").is_none());
        assert!(matches!(require_district("Atlantis"), Err(AdvisorError::UnknownDistrict(_))));
    }

    #[test]
    fn test_pincode_validation() {
        assert!(is_karnataka_pincode("560001"));
        assert!(is_karnataka_pincode("591237"));
        assert!(!is_karnataka_pincode("550001"));
        assert!(!is_karnataka_pincode("5600011"));
        assert!(!is_karnataka_pincode("56000a"));
        assert!(!is_karnataka_pincode("600001"));
    }

    #[test]
    fn test_resolve_pincode() {
        let mandya = resolve_pincode("571401").unwrap();
        assert_eq!(mandya.district_key.as_deref(), Some("mandya"));
        assert_eq!(mandya.name, "Mandya (PIN: 571401)");

        let unmapped = resolve_pincode("599999").unwrap();
        assert_eq!(unmapped.district_name, "Unknown");
        assert_eq!((unmapped.lat, unmapped.lon), KARNATAKA_CENTER);

        assert!(matches!(resolve_pincode("110001"), Err(AdvisorError::InvalidPincode(_))));
    }

    #[test]
    fn test_resolve_dispatches_on_digits() {
        assert_eq!(resolve("560034").unwrap().district_key.as_deref(), Some("bangalore"));
        assert_eq!(resolve("Hassan").unwrap().lat, 13.0078);
        assert!(resolve("12345").is_err());
    }

    #[test]
    fn test_nearest_district() {
        let (d, km) = nearest_district(12.98, 77.60).unwrap();
        assert_eq!(d.key, "bangalore");
        assert!(km < 2.0);
        assert_eq!(district_coordinates("nowhere"), KARNATAKA_CENTER);
    }

    #[test]
    fn test_karnataka_bounding_box() {
        assert!(is_in_karnataka(12.30, 76.64));
        assert!(is_in_karnataka(11.30, 74.05));
        assert!(is_in_karnataka(18.45, 78.59));
        // Delhi, Chennai, Goa
        assert!(!is_in_karnataka(28.6, 77.2));
        assert!(!is_in_karnataka(13.08, 80.27));
        assert!(!is_in_karnataka(15.5, 73.8));
    }

    #[test]
    fn test_resolve_coordinates_keeps_position() {
        let gps = resolve_coordinates(12.30, 76.64).unwrap();
        assert_eq!(gps.district_key, None);
        assert_eq!(gps.district_name, "Mysore");
        assert_eq!(gps.name, "12.3000, 76.6400");
        assert_eq!((gps.lat, gps.lon), (12.30, 76.64));

        assert!(matches!(
            resolve_coordinates(28.6, 77.2),
            Err(AdvisorError::OutsideKarnataka(..))
        ));
    }

    #[test]
    fn test_haversine_known_distance() {
        // Bangalore to Mysore is roughly 128 km as the crow flies
        let km = haversine_km(12.9716, 77.5946, 12.2958, 76.6394);
        assert_relative_eq!(km, 128.0, epsilon = 3.0);
        assert_eq!(haversine_km(13.0, 77.0, 13.0, 77.0), 0.0);
    }
}
