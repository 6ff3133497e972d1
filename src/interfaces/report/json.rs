use crate::domain::state::SettlementSnapshot;
use crate::error::Result;
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct ParticipantView<'a> {
    id: u32,
    name: &'a str,
    amount_paid: String,
}

#[derive(Serialize)]
struct TransferView<'a> {
    from: &'a str,
    to: &'a str,
    amount: String,
}

/// Serialized form of a snapshot. Amounts are cent-rounded strings.
#[derive(Serialize)]
struct SnapshotView<'a> {
    total: String,
    per_person_share: String,
    participants: Vec<ParticipantView<'a>>,
    transfers: Vec<TransferView<'a>>,
}

impl<'a> From<&'a SettlementSnapshot> for SnapshotView<'a> {
    fn from(snapshot: &'a SettlementSnapshot) -> Self {
        Self {
            total: snapshot.total.to_string(),
            per_person_share: snapshot.per_person_share.to_string(),
            participants: snapshot
                .participants
                .iter()
                .map(|p| ParticipantView {
                    id: p.id.0,
                    name: p.name.as_str(),
                    amount_paid: p.amount_paid.to_string(),
                })
                .collect(),
            transfers: snapshot
                .transfers
                .iter()
                .map(|t| TransferView {
                    from: &t.from,
                    to: &t.to,
                    amount: t.amount.to_string(),
                })
                .collect(),
        }
    }
}

/// Writes a snapshot as pretty-printed JSON.
pub struct SnapshotWriter<W: Write> {
    sink: W,
}

impl<W: Write> SnapshotWriter<W> {
    pub fn new(sink: W) -> Self {
        Self { sink }
    }

    pub fn write_snapshot(&mut self, snapshot: &SettlementSnapshot) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.sink, &SnapshotView::from(snapshot))?;
        writeln!(self.sink)?;
        self.sink.flush()?;
        Ok(())
    }
}
