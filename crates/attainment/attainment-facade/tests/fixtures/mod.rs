//! Shared fixtures for attainment facade tests.

#![allow(dead_code)]

use attainment_facade::{
    AttainmentLoader, AttainmentRecord, Category, Dataset, LoadConfig, MinDegree, RawRow,
    RecordKey, Sex,
};
use std::path::PathBuf;

/// Column header of the source table.
pub const HEADER: &str = "Year,Sex,Min degree,Total,White,Black,Hispanic,Asian,Pacific Islander,American Indian/Alaska Native,Two or more races";

/// Complete 2005-2018 grid with a few gaps:
/// - master's, Sex=A, Total missing in 2005 (leading gap)
/// - bachelor's, Sex=A, Total missing in 2010
/// - associate's, Sex=M, Black missing in 2007 and 2008
/// - Pacific Islander before 2012, American Indian/Alaska Native before 2008
///   and Two or more races before 2010 missing everywhere
pub fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("attainment.csv")
}

pub fn load_fixture() -> Dataset {
    AttainmentLoader::new(LoadConfig::strict())
        .load_path(fixture_path())
        .expect("fixture loads")
}

/// Rows for the 1940/1980 bachelor's comparison.
pub fn scenario_a_rows() -> Vec<RawRow> {
    vec![
        RawRow::new("1940", "A", "bachelor's")
            .with(Category::Total, "5.9")
            .at_line(2),
        RawRow::new("1980", "M", "bachelor's")
            .with(Category::Total, "24.0")
            .at_line(3),
        RawRow::new("1980", "F", "bachelor's")
            .with(Category::Total, "21.0")
            .at_line(4),
    ]
}

/// Ten Sex=A rows between 2000 and 2009; master's has no value before 2009.
pub fn scenario_b_csv() -> String {
    let rows = [
        "2000,A,high school,88.1,---,---,---,---,---,---,---",
        "2000,A,associate's,37.7,---,---,---,---,---,---,---",
        "2000,A,bachelor's,29.1,---,---,---,---,---,---,---",
        "2005,A,high school,86.2,---,---,---,---,---,---,---",
        "2005,A,associate's,38.2,---,---,---,---,---,---,---",
        "2005,A,bachelor's,28.8,---,---,---,---,---,---,---",
        "2005,A,master's,---,---,---,---,---,---,---,---",
        "2009,A,high school,88.6,---,---,---,---,---,---,---",
        "2009,A,associate's,39.2,---,---,---,---,---,---,---",
        "2009,A,master's,7.4,---,---,---,---,---,---,---",
    ];
    let mut text = String::from(HEADER);
    for row in rows {
        text.push('\n');
        text.push_str(row);
    }
    text.push('\n');
    text
}

/// Ten years of bachelor's Total, Sex=A.
pub const BACHELORS_TOTAL: [f64; 10] = [27.5, 28.4, 29.3, 28.7, 30.6, 31.7, 30.8, 32.2, 33.5, 33.7];

/// Sex=A Total series for one degree starting in `first_year`.
pub fn total_series(min_degree: MinDegree, first_year: i32, values: &[Option<f64>]) -> Vec<AttainmentRecord> {
    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            AttainmentRecord::new(RecordKey::new(first_year + i as i32, Sex::All, min_degree))
                .with_value(Category::Total, *v)
        })
        .collect()
}
