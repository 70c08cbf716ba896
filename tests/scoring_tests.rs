// Scoring Integration Tests
//
// Purpose: Scorer properties across the whole built-in crop table
// Run with: cargo test --test scoring_tests

use approx::assert_relative_eq;
use crop_advisor::{score, CropDatabase, Level, Rating, SoilSample, WeatherSample};

fn all_months() -> impl Iterator<Item = u32> {
    1..=12
}

#[test]
fn test_rice_july_and_wheat_july() {
    let db = CropDatabase::builtin();

    let rice = score(db.get("rice").unwrap(), None, None, 7);
    assert_relative_eq!(rice.total_score, 100.0);
    assert_eq!(rice.rating, Rating::Excellent);

    let wheat = score(db.get("wheat").unwrap(), None, None, 7);
    assert_eq!(wheat.factors.season.score, 0.0);
    assert_eq!(wheat.factors.timing.score, 10.0);
    assert_relative_eq!(wheat.total_score, 4.444_444, epsilon = 1e-5);
    assert_eq!(wheat.rating, Rating::Poor);
}

#[test]
fn test_season_factor_only_takes_extreme_values() {
    for crop in CropDatabase::builtin().iter() {
        for month in all_months() {
            let s = score(crop, None, None, month).factors.season.score;
            assert!(s == 0.0 || s == 100.0);
        }
    }
}

#[test]
fn test_total_stays_in_range_for_all_inputs() {
    let soils = [
        SoilSample::new("red", Some(6.2)),
        SoilSample::new("black", Some(8.4)),
        SoilSample::new("laterite", Some(5.1)),
        SoilSample::new("sandy loam", None),
    ];
    let weathers = [
        WeatherSample::current(12.0, 30.0),
        WeatherSample::current(27.0, 70.0).with_weekly_rainfall(25.0),
        WeatherSample::default(),
    ];
    for crop in CropDatabase::builtin().iter() {
        for month in all_months() {
            for soil in &soils {
                for weather in &weathers {
                    let r = score(crop, Some(soil), Some(weather), month);
                    assert!((0.0..=100.0).contains(&r.total_score));
                    assert!(r.factors.soil.as_ref().unwrap().score <= 100.0);
                    assert!(r.factors.weather.as_ref().unwrap().score <= 100.0);
                    assert_eq!(r.rating, Rating::from_score(r.total_score));
                }
            }
        }
    }
}

#[test]
fn test_skipped_factors_leave_the_denominator() {
    let maize = CropDatabase::builtin().get("maize").unwrap();
    let soil = SoilSample::new("loam", Some(6.5));

    let with_soil = score(maize, Some(&soil), None, 4);
    let f = &with_soil.factors;
    let expected = (f.season.score * 25.0 + f.soil.as_ref().unwrap().score * 25.0 + f.timing.score * 20.0) / 70.0;
    assert_relative_eq!(with_soil.total_score, expected, epsilon = 1e-9);
    assert_eq!(with_soil.confidence, 70.0);
}

#[test]
fn test_organic_matter_and_moisture_do_not_change_the_score() {
    let cotton = CropDatabase::builtin().get("cotton").unwrap();
    let mut dry = SoilSample::new("black", Some(7.2));
    dry.moisture = Level::Low;
    let mut wet = dry.clone();
    wet.moisture = Level::High;
    wet.organic_matter = Level::High;

    let a = score(cotton, Some(&dry), None, 6);
    let b = score(cotton, Some(&wet), None, 6);
    assert_eq!(a.total_score.to_bits(), b.total_score.to_bits());
}

#[test]
fn test_result_serializes_without_skipped_factors() {
    let ragi = CropDatabase::builtin().get("ragi").unwrap();
    let json = serde_json::to_value(score(ragi, None, None, 8)).unwrap();
    assert_eq!(json["rating"], "excellent");
    assert!(json["factors"].get("soil").is_none());
    assert!(json["factors"].get("weather").is_none());
    assert_eq!(json["factors"]["timing"]["weight"], 20.0);
}
