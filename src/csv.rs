//! Utilities for writing CSV files.

use std::borrow::Cow;
use std::fs::File;
use std::io;
use std::io::{BufWriter, Write};
use std::iter;
use std::ops::{Index, IndexMut};
use std::path::Path;

use strum::{EnumCount, IntoEnumIterator};

use crate::readiness::{QuantileColumn, ReadinessQuantileSeries};

pub struct CsvWriter<W: Write> {
    writer: BufWriter<W>,
}
impl CsvWriter<File> {
    pub fn create(path: impl AsRef<Path>) -> Result<Self, io::Error> {
        let file = File::create(path)?;
        Ok(Self::new(file))
    }
}

impl<W: Write> CsvWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            writer: BufWriter::new(inner),
        }
    }

    pub fn append<R>(&mut self, record: R) -> Result<(), io::Error>
    where
        R: IntoIterator,
        R::Item: AsRef<str>,
    {
        let mut first = true;
        for datum in record.into_iter() {
            if first {
                first = false;
            } else {
                self.writer.write_all(b",")?;
            }
            self.writer.write_all(datum.as_ref().as_bytes())?;
        }
        self.writer.write_all(b"\n")?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<(), io::Error> {
        self.writer.flush()
    }

    pub fn into_inner(self) -> Result<W, io::Error> {
        self.writer.into_inner().map_err(|err| err.into_error())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    items: Vec<Cow<'static, str>>,
}
impl Record {
    pub fn with_capacity(capacity: usize) -> Self {
        let mut items = Vec::with_capacity(capacity);
        items.resize_with(capacity, || Cow::Borrowed(""));
        Self { items }
    }

    pub fn with_values<I>(values: I) -> Self
    where
        I: IntoIterator,
        I::Item: ToString,
    {
        let items = values
            .into_iter()
            .map(|value| Cow::Owned(value.to_string()))
            .collect();
        Self { items }
    }

    pub fn set(&mut self, ordinal: impl Into<usize>, value: impl ToString) {
        self.items[ordinal.into()] = Cow::Owned(value.to_string())
    }
}

impl IntoIterator for Record {
    type Item = Cow<'static, str>;
    type IntoIter = std::vec::IntoIter<Cow<'static, str>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<I: Into<usize>> Index<I> for Record {
    type Output = Cow<'static, str>;

    fn index(&self, index: I) -> &Self::Output {
        &self.items[index.into()]
    }
}

impl<I: Into<usize>> IndexMut<I> for Record {
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        &mut self.items[index.into()]
    }
}

/// Writes a header followed by one line per point of `series`. Missing statistics are left
/// blank.
pub fn write_quantiles<W: Write>(
    csv: &mut CsvWriter<W>,
    series: &ReadinessQuantileSeries,
) -> Result<(), io::Error> {
    csv.append(iter::once(Cow::Borrowed("date")).chain(Record::with_values(QuantileColumn::iter())))?;
    for (row, date) in series.index().iter().enumerate() {
        let mut record = Record::with_capacity(QuantileColumn::COUNT);
        for column in QuantileColumn::iter() {
            let value = series.column(column)[row];
            if !value.is_nan() {
                record.set(column, value);
            }
        }
        csv.append(iter::once(Cow::Owned(date.to_string())).chain(record))?;
    }
    csv.flush()
}
