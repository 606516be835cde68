//! Green Button style usage files: `timestamp,usage` CSV with one row per interval.

use std::{
    fmt::{Display, Formatter},
    fs::File,
    io::{Read, Write},
    path::Path,
    str::FromStr,
};

use chrono::NaiveDateTime;
use csv::{ReaderBuilder, Trim};
use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};

use crate::{core::UsageReading, prelude::*, quantity::energy::KilowattHours};

const TIMESTAMP_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];

#[derive(Copy, Clone)]
struct Timestamp(NaiveDateTime);

impl FromStr for Timestamp {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self> {
        TIMESTAMP_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
            .map(Self)
            .with_context(|| format!("unsupported timestamp `{text}`"))
    }
}

impl Display for Timestamp {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format(TIMESTAMP_FORMATS[0]))
    }
}

#[serde_as]
#[derive(Serialize, Deserialize)]
struct Record {
    #[serde_as(as = "DisplayFromStr")]
    timestamp: Timestamp,

    usage: f64,
}

impl TryFrom<Record> for UsageReading {
    type Error = Error;

    fn try_from(record: Record) -> Result<Self> {
        ensure!(
            record.usage.is_finite() && record.usage >= 0.0,
            "usage must be a non-negative number, got `{}`",
            record.usage,
        );
        Ok(Self::new(record.timestamp.0, KilowattHours::from(record.usage)))
    }
}

impl From<&UsageReading> for Record {
    fn from(reading: &UsageReading) -> Self {
        Self { timestamp: Timestamp(reading.timestamp), usage: reading.usage.0 }
    }
}

pub fn read_readings<R: Read>(reader: R) -> Result<Vec<UsageReading>> {
    ReaderBuilder::new()
        .trim(Trim::All)
        .from_reader(reader)
        .deserialize::<Record>()
        .enumerate()
        .map(|(index, record)| {
            record
                .map_err(Error::from)
                .and_then(UsageReading::try_from)
                .with_context(|| format!("invalid usage record #{}", index + 1))
        })
        .collect()
}

#[instrument(skip_all, fields(path = %path.display()))]
pub fn read_file(path: &Path) -> Result<Vec<UsageReading>> {
    let file =
        File::open(path).with_context(|| format!("failed to open `{}`", path.display()))?;
    let readings = read_readings(file)?;
    info!(n_readings = readings.len(), "read the usage file");
    Ok(readings)
}

pub fn write_readings<W: Write>(writer: W, readings: &[UsageReading]) -> Result {
    let mut writer = csv::Writer::from_writer(writer);
    for reading in readings {
        writer.serialize(Record::from(reading))?;
    }
    writer.flush()?;
    Ok(())
}

#[instrument(skip_all, fields(path = %path.display()))]
pub fn write_file(path: &Path, readings: &[UsageReading]) -> Result {
    let file =
        File::create(path).with_context(|| format!("failed to create `{}`", path.display()))?;
    write_readings(file, readings)?;
    info!(n_readings = readings.len(), "wrote the usage file");
    Ok(())
}
