use crate::domain::participant::ParticipantRecord;
use crate::error::{Result, SettleError};
use std::io::Read;

/// Positions of the `name` and `amount` columns in the header row.
#[derive(Debug, Clone, Copy)]
struct Columns {
    name: usize,
    amount: Option<usize>,
}

impl Columns {
    fn from_headers(headers: &csv::StringRecord) -> Result<Self> {
        let position = |column: &str| headers.iter().position(|h| h == column);
        let name = position("name").ok_or_else(|| {
            SettleError::ValidationError("Missing `name` column in header".to_string())
        })?;
        Ok(Self {
            name,
            amount: position("amount"),
        })
    }

    fn extract(&self, record: &csv::StringRecord) -> ParticipantRecord {
        let field = |idx: Option<usize>| idx.and_then(|i| record.get(i)).unwrap_or("");
        ParticipantRecord::new(field(Some(self.name)), field(self.amount))
    }
}

/// Reads participant rows from a CSV source with a `name,amount` header.
///
/// Fields are trimmed and short rows are accepted; a missing amount reads as
/// an empty string and is coerced to zero later.
pub struct ParticipantReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> ParticipantReader<R> {
    /// Creates a new `ParticipantReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads rows.
    ///
    /// A header without a `name` column yields a single error and no rows.
    pub fn participants(mut self) -> impl Iterator<Item = Result<ParticipantRecord>> {
        let (header_error, columns) = match self.columns() {
            Ok(columns) => (None, Some(columns)),
            Err(e) => (Some(Err(e)), None),
        };

        header_error
            .into_iter()
            .chain(self.reader.into_records().filter_map(move |row| {
                let columns = columns?;
                Some(
                    row.map(|record| columns.extract(&record))
                        .map_err(SettleError::from),
                )
            }))
    }

    fn columns(&mut self) -> Result<Columns> {
        Columns::from_headers(self.reader.headers()?)
    }
}
