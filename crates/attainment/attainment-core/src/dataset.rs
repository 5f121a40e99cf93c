//! Indexed attainment grid.
//!
//! Records live in one vector ordered by year. A hash index resolves
//! composite keys and a per-partition index lists the positions of each
//! (sex, degree) time series in year order.

use attainment_api::{LoadConfig, Selector, YearRange};
use attainment_spi::{
    AttainmentError, AttainmentRecord, Category, DatasetStage, MinDegree, Percent, RawRow,
    RecordKey, Result, Sex,
};
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// The attainment table keyed by (year, sex, degree).
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<AttainmentRecord>,
    index: HashMap<RecordKey, usize>,
    partitions: BTreeMap<(Sex, MinDegree), Vec<usize>>,
    stage: DatasetStage,
}

impl Dataset {
    /// Build a raw dataset from typed records.
    ///
    /// Records are sorted by year; records sharing a year keep their input
    /// order. Fails on duplicate keys and out-of-range values.
    pub fn from_records(records: Vec<AttainmentRecord>) -> Result<Self> {
        let mut seen = BTreeSet::new();
        for record in &records {
            record.validate()?;
            if !seen.insert(record.key) {
                return Err(AttainmentError::parse(format!(
                    "duplicate record {}",
                    record.key
                )));
            }
        }
        Ok(Self::assemble(records, DatasetStage::Raw))
    }

    /// Parse flat rows into a raw dataset.
    pub fn load<I>(rows: I, config: &LoadConfig) -> Result<Self>
    where
        I: IntoIterator<Item = RawRow>,
    {
        let mut records = Vec::new();
        let mut seen = BTreeSet::new();

        for row in rows {
            let line = row.line;
            let record = parse_row(row, config).map_err(|e| attach_line(e, line))?;
            if !seen.insert(record.key) {
                return Err(attach_line(
                    AttainmentError::parse(format!("duplicate record {}", record.key)),
                    line,
                ));
            }
            records.push(record);
        }

        let dataset = Self::assemble(records, DatasetStage::Raw);

        if config.require_complete_grid {
            if let Some(gap) = dataset.grid_gaps().first() {
                return Err(AttainmentError::parse(format!(
                    "incomplete grid: no record for {}",
                    gap
                )));
            }
        }

        tracing::info!(
            records = dataset.len(),
            years = dataset.years().len(),
            missing = dataset.missing_count(),
            "attainment dataset loaded"
        );
        Ok(dataset)
    }

    fn assemble(mut records: Vec<AttainmentRecord>, stage: DatasetStage) -> Self {
        records.sort_by_key(|r| r.year());

        let mut index = HashMap::with_capacity(records.len());
        let mut partitions: BTreeMap<(Sex, MinDegree), Vec<usize>> = BTreeMap::new();
        for (pos, record) in records.iter().enumerate() {
            index.insert(record.key, pos);
            partitions.entry(record.key.partition()).or_default().push(pos);
        }

        Self {
            records,
            index,
            partitions,
            stage,
        }
    }

    /// Lifecycle stage of this dataset.
    pub fn stage(&self) -> DatasetStage {
        self.stage
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in dataset order.
    pub fn iter(&self) -> impl Iterator<Item = &AttainmentRecord> {
        self.records.iter()
    }

    /// Full record for a key triple.
    pub fn record(&self, year: i32, sex: Sex, min_degree: MinDegree) -> Result<&AttainmentRecord> {
        self.index
            .get(&RecordKey::new(year, sex, min_degree))
            .map(|&pos| &self.records[pos])
            .ok_or(AttainmentError::KeyNotFound {
                year,
                sex,
                min_degree,
            })
    }

    /// Single percentage; `Ok(None)` is a missing value in an existing row.
    pub fn get(
        &self,
        year: i32,
        sex: Sex,
        min_degree: MinDegree,
        category: Category,
    ) -> Result<Percent> {
        self.record(year, sex, min_degree).map(|r| r.get(category))
    }

    /// Sub-dataset of matching records in their original order.
    pub fn slice(
        &self,
        years: impl Into<YearRange>,
        sex: &Selector<Sex>,
        min_degree: &Selector<MinDegree>,
    ) -> Dataset {
        let years = years.into();
        let records = self
            .records
            .iter()
            .filter(|r| {
                years.contains(r.year()) && sex.matches(&r.sex()) && min_degree.matches(&r.min_degree())
            })
            .cloned()
            .collect();
        Self::assemble(records, self.stage)
    }

    /// Distinct years, ascending.
    pub fn years(&self) -> Vec<i32> {
        let mut years: Vec<i32> = self.records.iter().map(|r| r.year()).collect();
        years.dedup();
        years
    }

    /// (sex, degree) pairs present, in declaration order.
    pub fn partition_keys(&self) -> impl Iterator<Item = (Sex, MinDegree)> + '_ {
        self.partitions.keys().copied()
    }

    /// One (sex, degree) time series in year order.
    pub fn partition(
        &self,
        sex: Sex,
        min_degree: MinDegree,
    ) -> impl Iterator<Item = &AttainmentRecord> {
        self.partitions
            .get(&(sex, min_degree))
            .into_iter()
            .flatten()
            .map(move |&pos| &self.records[pos])
    }

    /// Number of missing cells across the grid.
    pub fn missing_count(&self) -> usize {
        self.records.iter().map(|r| r.missing_count()).sum()
    }

    /// Keys absent from the cross product of observed years and partitions.
    pub fn grid_gaps(&self) -> Vec<RecordKey> {
        let years = self.years();
        let mut gaps = Vec::new();
        for year in years {
            for &(sex, min_degree) in self.partitions.keys() {
                let key = RecordKey::new(year, sex, min_degree);
                if !self.index.contains_key(&key) {
                    gaps.push(key);
                }
            }
        }
        gaps
    }

    /// Copy of the dataset with every partition rewritten by `fill`.
    ///
    /// `fill` receives one partition at a time in year order and returns the
    /// number of cells it changed.
    pub(crate) fn map_partitions<F>(&self, stage: DatasetStage, fill: F) -> (Dataset, usize)
    where
        F: Fn(&mut [AttainmentRecord]) -> usize,
    {
        let mut records = self.records.clone();
        let mut changed = 0;

        for ((sex, min_degree), positions) in &self.partitions {
            let mut series: Vec<AttainmentRecord> =
                positions.iter().map(|&pos| records[pos].clone()).collect();
            let filled = fill(&mut series);
            tracing::debug!(sex = %sex, min_degree = %min_degree, filled, "partition processed");
            changed += filled;
            for (&pos, record) in positions.iter().zip(series) {
                records[pos] = record;
            }
        }

        (Self::assemble(records, stage), changed)
    }
}

impl PartialEq for Dataset {
    fn eq(&self, other: &Self) -> bool {
        self.stage == other.stage && self.records == other.records
    }
}

fn attach_line(error: AttainmentError, line: Option<usize>) -> AttainmentError {
    match line {
        Some(line) => error.at_line(line),
        None => error,
    }
}

fn parse_row(row: RawRow, config: &LoadConfig) -> Result<AttainmentRecord> {
    let year_text = row.year.trim();
    let year: i32 = year_text.parse().map_err(|_| {
        AttainmentError::parse(format!("year '{}' is not an integer", year_text))
    })?;
    let sex: Sex = row.sex.parse()?;
    let min_degree: MinDegree = row.min_degree.parse()?;

    let mut record = AttainmentRecord::new(RecordKey::new(year, sex, min_degree));
    let mut assigned = [false; Category::COUNT];
    for (category, cell) in &row.values {
        if std::mem::replace(&mut assigned[category.index()], true) {
            return Err(AttainmentError::parse(format!(
                "column '{}' given twice",
                category
            )));
        }
        record.set(*category, parse_percent(*category, cell, config)?);
    }

    record.validate()?;
    Ok(record)
}

fn parse_percent(category: Category, cell: &str, config: &LoadConfig) -> Result<Percent> {
    if config.is_missing(cell) {
        return Ok(None);
    }
    let cell = cell.trim();
    cell.parse::<f64>().map(Some).map_err(|_| {
        AttainmentError::parse(format!("{} value '{}' is not a number", category, cell))
    })
}
