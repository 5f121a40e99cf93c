//! Unit tests for the attainment facade
//!
//! Cover the public types as seen through the facade re-exports.
//! Tests for private helpers remain in source files.

use attainment_facade::{
    AttainmentError, AttainmentRecord, Category, DatasetStage, ForecastConfig,
    ForecastConfigBuilder, LoadConfig, LoadConfigBuilder, MinDegree, RecordKey, Selector, Sex,
    YearRange,
};

// ============================================================================
// Enumeration Parsing Tests
// ============================================================================

#[test]
fn test_sex_codes_and_labels() {
    for (text, expected) in [("A", Sex::All), ("M", Sex::Male), ("F", Sex::Female), ("female", Sex::Female)] {
        assert_eq!(text.parse::<Sex>().unwrap(), expected);
    }
    assert!("X".parse::<Sex>().is_err());
}

#[test]
fn test_degree_labels() {
    let parsed: Vec<MinDegree> = ["high school", "associate's", "bachelor's", "master's"]
        .iter()
        .map(|s| s.parse().unwrap())
        .collect();
    assert_eq!(parsed, MinDegree::ALL.to_vec());
}

#[test]
fn test_category_headers() {
    for category in Category::ALL {
        assert_eq!(category.label().parse::<Category>().unwrap(), category);
    }
    assert_eq!(
        "american indian/alaska native".parse::<Category>().unwrap(),
        Category::AmericanIndianAlaskaNative
    );
}

// ============================================================================
// Record Tests
// ============================================================================

#[test]
fn test_record_values() {
    let record = AttainmentRecord::new(RecordKey::new(2018, Sex::Female, MinDegree::Masters))
        .with_value(Category::Total, Some(11.2));
    assert_eq!(record.get(Category::Total), Some(11.2));
    assert_eq!(record.missing_count(), Category::COUNT - 1);
    assert!(record.validate().is_ok());
}

#[test]
fn test_record_out_of_range() {
    let record = AttainmentRecord::new(RecordKey::new(2018, Sex::Female, MinDegree::Masters))
        .with_value(Category::Asian, Some(-0.5));
    assert!(matches!(record.validate(), Err(AttainmentError::ParseError { .. })));
}

#[test]
fn test_stage_default_is_raw() {
    assert_eq!(DatasetStage::default(), DatasetStage::Raw);
    assert_eq!(DatasetStage::Imputed.to_string(), "imputed");
}

// ============================================================================
// Configuration Tests
// ============================================================================

#[test]
fn test_load_config_builder() {
    let config = LoadConfigBuilder::new()
        .missing_token("NA")
        .build()
        .unwrap();
    assert_eq!(config.missing_token, "NA");
    assert_eq!(config.delimiter, LoadConfig::default().delimiter);
}

#[test]
fn test_forecast_config_builder() {
    let config = ForecastConfigBuilder::new().steps(10).build().unwrap();
    assert_eq!(config.steps, 10);
    assert_eq!(config.min_observations, ForecastConfig::default().min_observations);
    assert!(ForecastConfigBuilder::new().steps(0).build().is_err());
}

#[test]
fn test_config_json_roundtrip() {
    let config = ForecastConfig::with_steps(7);
    let json = serde_json::to_string(&config).unwrap();
    let back: ForecastConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, config);
}

// ============================================================================
// Selector Tests
// ============================================================================

#[test]
fn test_selectors() {
    assert!(Selector::<Sex>::All.matches(&Sex::Female));
    assert!(!Selector::One(Sex::Male).matches(&Sex::Female));
    assert!(Selector::many([Sex::Male, Sex::Female]).matches(&Sex::Female));
}

#[test]
fn test_year_range() {
    let range: YearRange = (1990..=2000).into();
    assert!(range.contains(1990) && range.contains(2000));
    assert!(!range.contains(2001));
    assert!(YearRange::all().contains(1920));
}

// ============================================================================
// Error Display Tests
// ============================================================================

#[test]
fn test_error_messages() {
    let err = AttainmentError::KeyNotFound {
        year: 1940,
        sex: Sex::Male,
        min_degree: MinDegree::Bachelors,
    };
    assert_eq!(err.to_string(), "No record for year 1940, sex Male, degree bachelor's");

    let parse = AttainmentError::parse("year 'x' is not an integer").at_line(5);
    assert_eq!(parse.to_string(), "Parse error at line 5: year 'x' is not an integer");
}
