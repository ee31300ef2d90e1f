mod error;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, info};

use crate::config::LedgerConfig;
use crate::models::{format_date, Category, Transaction, DATE_FORMAT, MAX_AMOUNT};

pub(crate) use error::LedgerError;

pub(crate) const COLUMNS: [&str; 4] = ["date", "amount", "category", "description"];

/// Append-only CSV ledger. Holds only the file location; every operation
/// opens, consumes and closes the file, so the file is the source of truth.
#[derive(Debug, Clone)]
pub(crate) struct Ledger {
    config: LedgerConfig,
}

impl Ledger {
    pub(crate) fn new(config: LedgerConfig) -> Self {
        Self { config }
    }

    pub(crate) fn path(&self) -> &Path {
        self.config.path()
    }

    /// Make sure the file exists and starts with the header row. Idempotent.
    pub(crate) fn initialize(&self) -> Result<()> {
        let path = self.path();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create ledger directory: {}", parent.display())
            })?;
        }

        let is_empty = match std::fs::metadata(path) {
            Ok(meta) => meta.len() == 0,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => true,
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("Failed to inspect ledger: {}", path.display()))
            }
        };
        if !is_empty {
            return Ok(());
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("Failed to create ledger: {}", path.display()))?;
        let mut wtr = csv::Writer::from_writer(file);
        wtr.write_record(COLUMNS)
            .context("Failed to write ledger header")?;
        wtr.flush().context("Failed to write ledger header")?;
        info!(path = %path.display(), "initialized ledger file");
        Ok(())
    }

    /// Write one record as the last line of the file.
    pub(crate) fn append(&self, txn: &Transaction) -> Result<()> {
        self.initialize()?;
        let path = self.path();
        let mut file = OpenOptions::new()
            .read(true)
            .append(true)
            .open(path)
            .with_context(|| format!("Failed to open ledger for append: {}", path.display()))?;
        terminate_last_line(&mut file).context("Failed to append ledger entry")?;
        let mut wtr = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        wtr.write_record([
            txn.formatted_date(),
            txn.amount.to_string(),
            txn.category.as_str().to_string(),
            txn.description.clone(),
        ])
        .context("Failed to append ledger entry")?;
        wtr.flush().context("Failed to append ledger entry")?;
        debug!(date = %txn.formatted_date(), amount = %txn.amount, category = %txn.category, "appended entry");
        Ok(())
    }

    /// Load every record in file order. Any malformed row fails the whole load.
    pub(crate) fn load(&self) -> Result<Vec<Transaction>> {
        let path = self.path();
        let mut rdr = csv::ReaderBuilder::new()
            .flexible(true)
            .has_headers(false)
            .from_path(path)
            .with_context(|| format!("Failed to open ledger: {}", path.display()))?;

        let mut records = rdr.records();
        let header = records
            .next()
            .ok_or(LedgerError::MissingHeader)?
            .context("Failed to read ledger header")?;
        let found: Vec<&str> = header.iter().map(str::trim).collect();
        if found != COLUMNS {
            return Err(LedgerError::BadHeader {
                found: found.join(","),
            }
            .into());
        }

        let mut transactions = Vec::new();
        for result in records {
            let record = result.context("Failed to read ledger record")?;
            let line = record.position().map_or(0, |p| p.line());
            transactions.push(parse_record(&record, line)?);
        }

        debug!(count = transactions.len(), path = %path.display(), "loaded ledger");
        Ok(transactions)
    }

    /// Records dated within `[start, end]`, inclusive, in file order.
    pub(crate) fn query(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<Transaction>> {
        self.initialize()?;
        let all = self.load()?;
        let filtered = filter_range(all, start, end);
        debug!(
            start = %format_date(start),
            end = %format_date(end),
            matched = filtered.len(),
            "queried ledger"
        );
        Ok(filtered)
    }
}

/// A hand-edited file may lack the final newline; add it so the next record
/// starts on its own line.
fn terminate_last_line(file: &mut File) -> std::io::Result<()> {
    if file.metadata()?.len() == 0 {
        return Ok(());
    }
    let mut last = [0u8; 1];
    file.seek(SeekFrom::End(-1))?;
    file.read_exact(&mut last)?;
    if last[0] != b'\n' {
        file.write_all(b"\n")?;
    }
    Ok(())
}

pub(crate) fn filter_range(
    records: Vec<Transaction>,
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<Transaction> {
    records
        .into_iter()
        .filter(|t| start <= t.date && t.date <= end)
        .collect()
}

fn parse_record(record: &csv::StringRecord, line: u64) -> Result<Transaction, LedgerError> {
    if record.len() != COLUMNS.len() {
        return Err(LedgerError::ColumnCount {
            line,
            found: record.len(),
        });
    }

    let date_str = record[0].trim();
    let date = NaiveDate::parse_from_str(date_str, DATE_FORMAT).map_err(|_| LedgerError::BadDate {
        line,
        value: date_str.to_string(),
    })?;

    let amount_str = record[1].trim();
    let amount = Decimal::from_str(amount_str)
        .ok()
        .filter(|a| *a > Decimal::ZERO && *a <= MAX_AMOUNT)
        .ok_or_else(|| LedgerError::BadAmount {
            line,
            value: amount_str.to_string(),
        })?;

    let category_str = record[2].trim();
    let category = Category::parse(category_str).ok_or_else(|| LedgerError::BadCategory {
        line,
        value: category_str.to_string(),
    })?;

    Ok(Transaction::new(
        date,
        amount,
        category,
        record[3].to_string(),
    ))
}
