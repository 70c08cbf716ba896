//! Crop Database
//!
//! Immutable table of crop definitions, parsed from JSON. The built-in table
//! (`data/crops.json`) is embedded at compile time and parsed once per process.
//!
//! Iteration order is the order of the source table, which is also the
//! tie-break order when analysis ranks crops by score.

use std::sync::OnceLock;

use rustc_hash::FxHashMap;

use super::definition::CropDefinition;
use crate::error::{AdvisorError, Result};

const BUILTIN_CROPS_JSON: &str = include_str!("../../data/crops.json");

static BUILTIN: OnceLock<CropDatabase> = OnceLock::new();

#[derive(Debug, Clone)]
pub struct CropDatabase {
    crops: Vec<CropDefinition>,
    index: FxHashMap<String, usize>,
}

impl CropDatabase {
    /// The embedded Karnataka crop table
    ///
    /// The embedded JSON is validated by the test suite, so a parse failure
    /// here is a build defect rather than a runtime condition.
    pub fn builtin() -> &'static CropDatabase {
        BUILTIN.get_or_init(|| match Self::from_json(BUILTIN_CROPS_JSON) {
            Ok(db) => {
                tracing::info!("Loaded built-in crop database ({} crops)", db.len());
                db
            }
            Err(e) => panic!("embedded crop table is invalid: {}", e),
        })
    }

    /// Parse and validate a crop table (JSON array of crop records)
    pub fn from_json(json: &str) -> Result<Self> {
        let crops: Vec<CropDefinition> = serde_json::from_str(json)?;
        Self::from_crops(crops)
    }

    pub fn from_crops(crops: Vec<CropDefinition>) -> Result<Self> {
        if crops.is_empty() {
            return Err(AdvisorError::InvalidDatabase("no crops defined".to_string()));
        }

        let mut index = FxHashMap::default();
        for (i, crop) in crops.iter().enumerate() {
            validate_crop(crop)?;
            if index.insert(crop.id.clone(), i).is_some() {
                return Err(AdvisorError::InvalidDatabase(format!(
                    "duplicate crop id '{}'",
                    crop.id
                )));
            }
        }

        Ok(Self { crops, index })
    }

    pub fn get(&self, id: &str) -> Option<&CropDefinition> {
        self.index.get(id).map(|&i| &self.crops[i])
    }

    /// Like `get`, but an unknown id is an error
    pub fn require(&self, id: &str) -> Result<&CropDefinition> {
        self.get(id).ok_or_else(|| AdvisorError::UnknownCrop(id.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &CropDefinition> {
        self.crops.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.crops.iter().map(|c| c.id.as_str())
    }

    pub fn len(&self) -> usize {
        self.crops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.crops.is_empty()
    }
}

fn validate_crop(crop: &CropDefinition) -> Result<()> {
    let invalid = |what: &str| {
        Err(AdvisorError::InvalidDatabase(format!("crop '{}': {}", crop.id, what)))
    };

    if crop.id.trim().is_empty() {
        return Err(AdvisorError::InvalidDatabase("crop with empty id".to_string()));
    }
    if crop.seasons.is_empty() {
        return invalid("no growing seasons");
    }
    if crop.soil_types.is_empty() {
        return invalid("no soil types");
    }

    for (label, range) in [
        ("temperature", &crop.temperature),
        ("humidity", &crop.humidity),
        ("ph", &crop.ph),
    ] {
        if !range.is_well_formed() {
            return invalid(format!("{} range is not min <= optimal <= max", label).as_str());
        }
    }

    if crop.rainfall.critical <= 0.0 || crop.rainfall.annual[0] > crop.rainfall.annual[1] {
        return invalid("rainfall requirement is malformed");
    }

    let months_ok = crop
        .planting_months
        .iter()
        .chain(crop.harvest_months.iter())
        .all(|m| (1..=12).contains(m));
    if !months_ok {
        return invalid("months must be between 1 and 12");
    }
    if crop.planting_months.is_empty() {
        return invalid("no planting months");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::season::Season;

    #[test]
    fn test_builtin_table_loads() {
        let db = CropDatabase::builtin();
        assert_eq!(db.len(), 8);
        let ids: Vec<&str> = db.ids().collect();
        assert_eq!(
            ids,
            vec!["rice", "wheat", "cotton", "sugarcane", "groundnut", "jowar", "ragi", "maize"]
        );
    }

    #[test]
    fn test_lookup() {
        let db = CropDatabase::builtin();
        let rice = db.get("rice").unwrap();
        assert_eq!(rice.name.en, "Rice");
        assert!(rice.grows_in(Season::Kharif));
        assert!(!rice.grows_in(Season::Rabi));
        assert!(db.get("quinoa").is_none());
        assert!(matches!(db.require("quinoa"), Err(AdvisorError::UnknownCrop(_))));
    }

    #[test]
    fn test_fuzzy_soil_match() {
        let db = CropDatabase::builtin();
        let wheat = db.get("wheat").unwrap(); // loam, clayloam, sandy
        assert!(wheat.accepts_soil("Sandy Loam"));
        assert!(wheat.accepts_soil("LOAM"));
        assert!(wheat.accepts_soil("clay")); // "clayloam" contains "clay"
        assert!(!wheat.accepts_soil("black"));
        assert!(!wheat.accepts_soil("   "));
    }

    #[test]
    fn test_rejects_empty_table() {
        assert!(matches!(
            CropDatabase::from_json("[]"),
            Err(AdvisorError::InvalidDatabase(_))
        ));
    }

    #[test]
    fn test_rejects_bad_months_and_duplicates() {
        let mut rice = CropDatabase::builtin().get("rice").unwrap().clone();
        rice.planting_months.push(13);
        assert!(CropDatabase::from_crops(vec![rice]).is_err());

        let rice = CropDatabase::builtin().get("rice").unwrap().clone();
        assert!(CropDatabase::from_crops(vec![rice.clone(), rice]).is_err());
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(matches!(
            CropDatabase::from_json("{\"rice\": 1}"),
            Err(AdvisorError::Json(_))
        ));
    }
}
