//! Read-only questions over a dataset.
//!
//! Results come back as ordered `(key, value)` pairs so a charting or
//! reporting layer can render them directly.

use crate::dataset::Dataset;
use attainment_api::YearRange;
use attainment_spi::{Category, MinDegree, Percent, Result, Sex};
use serde::Serialize;

/// Male and female Total attainment for one year and degree.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SexComparison {
    pub year: i32,
    pub min_degree: MinDegree,
    pub male: Percent,
    pub female: Percent,
}

impl SexComparison {
    /// `[(Male, value), (Female, value)]`.
    pub fn to_pairs(&self) -> [(Sex, Percent); 2] {
        [(Sex::Male, self.male), (Sex::Female, self.female)]
    }

    /// Male minus female, when both are known.
    pub fn gap(&self) -> Option<f64> {
        Some(self.male? - self.female?)
    }
}

/// Total attainment of men and women for `year` and `min_degree`.
pub fn compare_by_sex(dataset: &Dataset, year: i32, min_degree: MinDegree) -> Result<SexComparison> {
    let male = dataset.get(year, Sex::Male, min_degree, Category::Total)?;
    let female = dataset.get(year, Sex::Female, min_degree, Category::Total)?;
    Ok(SexComparison {
        year,
        min_degree,
        male,
        female,
    })
}

/// Mean of `category` per degree over `[start, end]` for both sexes combined.
///
/// Missing values are left out of the mean rather than counted as zero; a
/// degree with no value in range maps to `None`. Output follows
/// [`MinDegree::ALL`].
pub fn mean_by_degree(
    dataset: &Dataset,
    start: Option<i32>,
    end: Option<i32>,
    category: Category,
) -> Vec<(MinDegree, Percent)> {
    let years = YearRange::new(start, end);
    MinDegree::ALL
        .iter()
        .map(|&min_degree| {
            let (sum, count) = dataset
                .partition(Sex::All, min_degree)
                .filter(|r| years.contains(r.year()))
                .filter_map(|r| r.get(category))
                .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
            let mean = (count > 0).then(|| sum / count as f64);
            (min_degree, mean)
        })
        .collect()
}

/// `(year, value)` pairs of one partition and category, oldest first.
pub fn series(
    dataset: &Dataset,
    sex: Sex,
    min_degree: MinDegree,
    category: Category,
) -> Vec<(i32, Percent)> {
    dataset
        .partition(sex, min_degree)
        .map(|r| (r.year(), r.get(category)))
        .collect()
}

/// Male minus female Total per year.
///
/// Covers the years with a male row; a year lacking either value is `None`.
pub fn sex_gap_series(
    dataset: &Dataset,
    min_degree: MinDegree,
    years: impl Into<YearRange>,
) -> Vec<(i32, Option<f64>)> {
    let years = years.into();
    dataset
        .partition(Sex::Male, min_degree)
        .filter(|r| years.contains(r.year()))
        .map(|male| {
            let female = dataset
                .get(male.year(), Sex::Female, min_degree, Category::Total)
                .ok()
                .flatten();
            let gap = male.get(Category::Total).zip(female).map(|(m, f)| m - f);
            (male.year(), gap)
        })
        .collect()
}

/// `a` minus `b` per year within one partition.
pub fn category_gap_series(
    dataset: &Dataset,
    sex: Sex,
    min_degree: MinDegree,
    a: Category,
    b: Category,
    years: impl Into<YearRange>,
) -> Vec<(i32, Option<f64>)> {
    let years = years.into();
    dataset
        .partition(sex, min_degree)
        .filter(|r| years.contains(r.year()))
        .map(|r| (r.year(), r.get(a).zip(r.get(b)).map(|(x, y)| x - y)))
        .collect()
}
