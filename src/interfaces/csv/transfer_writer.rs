use crate::domain::settlement::Transfer;
use crate::error::Result;
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct TransferRow<'a> {
    from: &'a str,
    to: &'a str,
    amount: String,
}

/// Writes transfers as `from,to,amount` CSV rows, amounts in cents precision.
pub struct TransferWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> TransferWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    /// Writes the header and one row per transfer, then flushes.
    ///
    /// The header is written even when there are no transfers.
    pub fn write_transfers(&mut self, transfers: &[Transfer]) -> Result<()> {
        if transfers.is_empty() {
            self.writer.write_record(["from", "to", "amount"])?;
        }
        for transfer in transfers {
            self.writer.serialize(TransferRow {
                from: &transfer.from,
                to: &transfer.to,
                amount: transfer.amount.to_string(),
            })?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
