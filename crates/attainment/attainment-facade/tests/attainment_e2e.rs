//! End-to-end tests for the attainment workflow
//!
//! Raw rows or CSV text in, comparisons, means and forecasts out.

mod fixtures;

use approx::assert_abs_diff_eq;
use attainment_facade::{
    compare_by_sex, impute, mean_by_degree, reindex, AttainmentError, AttainmentLoader,
    AttainmentStore, Category, Dataset, ForecastConfig, ForecastEngine, ForecastStage, LoadConfig,
    MinDegree, Sex,
};
use fixtures::*;

// ============================================================================
// Comparison Workflow
// ============================================================================

#[test]
fn test_compare_bachelors_by_sex_1980() {
    let raw = Dataset::load(scenario_a_rows(), &LoadConfig::default()).unwrap();
    let data = impute(&raw);

    let cmp = compare_by_sex(&data, 1980, MinDegree::Bachelors).unwrap();
    assert_eq!(
        cmp.to_pairs(),
        [(Sex::Male, Some(24.0)), (Sex::Female, Some(21.0))]
    );
}

#[test]
fn test_compare_by_sex_year_without_sex_rows() {
    let data = impute(&Dataset::load(scenario_a_rows(), &LoadConfig::default()).unwrap());
    let err = compare_by_sex(&data, 1940, MinDegree::Bachelors).unwrap_err();
    assert!(matches!(err, AttainmentError::KeyNotFound { year: 1940, .. }));
}

// ============================================================================
// Mean Workflow
// ============================================================================

#[test]
fn test_mean_by_degree_2000_to_2009() {
    let raw = AttainmentLoader::default()
        .load_reader(scenario_b_csv().as_bytes())
        .unwrap();
    assert_eq!(raw.len(), 10);
    let data = AttainmentStore::new(raw).imputed().clone();

    let means = mean_by_degree(&data, Some(2000), Some(2009), Category::Total);
    let degrees: Vec<MinDegree> = means.iter().map(|(d, _)| *d).collect();
    assert_eq!(degrees, MinDegree::ALL.to_vec());

    assert_abs_diff_eq!(means[0].1.unwrap(), 87.633333, epsilon = 1e-6);
    assert_abs_diff_eq!(means[1].1.unwrap(), 38.366667, epsilon = 1e-6);
    assert_abs_diff_eq!(means[2].1.unwrap(), 28.95, epsilon = 1e-6);
    assert_abs_diff_eq!(means[3].1.unwrap(), 7.4, epsilon = 1e-6);
}

#[test]
fn test_mean_by_degree_empty_window() {
    let raw = AttainmentLoader::default()
        .load_reader(scenario_b_csv().as_bytes())
        .unwrap();
    let means = mean_by_degree(&impute(&raw), Some(2001), Some(2004), Category::Total);
    assert!(means.iter().all(|(_, mean)| mean.is_none()));
}

// ============================================================================
// Forecast Workflow
// ============================================================================

#[test]
fn test_reindex_after_2018() {
    let points = reindex(&[36.0, 36.4, 36.9, 37.3, 37.8], 2018).unwrap();
    let years: Vec<i32> = points.iter().map(|p| p.year).collect();
    assert_eq!(years, vec![2019, 2020, 2021, 2022, 2023]);
}

#[test]
fn test_forecast_failure_is_isolated() {
    let mut records = total_series(MinDegree::Bachelors, 2009, &BACHELORS_TOTAL.map(Some));
    let mut masters = BACHELORS_TOTAL.map(|v| Some(v / 3.0));
    masters[0] = None;
    records.extend(total_series(MinDegree::Masters, 2009, &masters));
    let data = impute(&Dataset::from_records(records).unwrap());

    let engine = ForecastEngine::default();

    let err = engine.forecast(&data, MinDegree::Masters).unwrap_err();
    assert!(matches!(
        err,
        AttainmentError::ModelInputError { min_degree: MinDegree::Masters, .. }
    ));

    let result = engine.forecast(&data, MinDegree::Bachelors).unwrap();
    assert_eq!(result.min_degree, MinDegree::Bachelors);
    assert_eq!(result.years(), vec![2019, 2020, 2021, 2022, 2023]);
    assert!(result.values().iter().all(|v| v.is_finite()));
}

#[test]
fn test_full_pipeline_on_fixture() {
    let raw = AttainmentLoader::new(LoadConfig::strict())
        .load_path(fixture_path())
        .unwrap();
    let store = AttainmentStore::new(raw);

    let engine = ForecastEngine::new(ForecastConfig::with_steps(3));
    let outcomes = engine.run_all(store.imputed());
    assert_eq!(outcomes.len(), 4);

    for outcome in &outcomes[..3] {
        let forecast = outcome.forecast().unwrap();
        assert_eq!(forecast.years(), vec![2019, 2020, 2021]);
        assert_eq!(forecast.model.observations, 14);
        assert!(forecast.model.ar_coefficient.abs() <= 0.99);
        assert!(forecast.model.sigma2 > 0.0);
    }

    // Master's opens with a gap imputation cannot fill
    let masters = &outcomes[3];
    assert_eq!(masters.min_degree, MinDegree::Masters);
    let failure = masters.failure().unwrap();
    assert_eq!(failure.stage, ForecastStage::ExtractSeries);
    assert!(masters.diagnostic().starts_with("master's: extract series failed"));
}

#[test]
fn test_short_series_reports_threshold() {
    let records = total_series(MinDegree::HighSchool, 2016, &[Some(90.1), Some(91.2), Some(91.6)]);
    let data = impute(&Dataset::from_records(records).unwrap());

    let outcome = ForecastEngine::default().run(&data, MinDegree::HighSchool);
    let failure = outcome.failure().unwrap();
    assert_eq!(failure.stage, ForecastStage::FitModel);
    assert!(failure.error.to_string().contains("need at least 4 observations, got 3"));
}
