//! Ordered record of live placements, used to age pieces.

use super::{Position, Side};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// One live placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Cell the piece sits on.
    pub position: Position,
    /// Owner of the piece.
    pub side: Side,
    /// Global placement order; lower is older.
    pub sequence: u64,
}

/// Append-only ledger of live placements.
///
/// Records are kept in placement order, so the first record of a side is
/// always that side's oldest piece. The sequence counter is never rewound:
/// clearing the ledger drops records but keeps counting, so sequence numbers
/// stay unique for the lifetime of the ledger.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveLedger {
    records: Vec<MoveRecord>,
    next_sequence: u64,
}

impl MoveLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record with a fresh sequence number.
    #[instrument(skip(self))]
    pub fn record(&mut self, position: Position, side: Side) -> MoveRecord {
        let record = MoveRecord {
            position,
            side,
            sequence: self.next_sequence,
        };
        self.next_sequence += 1;
        self.records.push(record);
        debug!(sequence = record.sequence, "Recorded placement");
        record
    }

    /// The oldest live record of `side`.
    pub fn oldest(&self, side: Side) -> Option<&MoveRecord> {
        self.for_side(side).next()
    }

    /// Removes and returns the oldest live record of `side`.
    #[instrument(skip(self))]
    pub fn remove_oldest(&mut self, side: Side) -> Option<MoveRecord> {
        let idx = self.records.iter().position(|r| r.side == side)?;
        Some(self.records.remove(idx))
    }

    /// Number of live records of `side`.
    pub fn count(&self, side: Side) -> usize {
        self.for_side(side).count()
    }

    /// Live records of `side`, oldest first.
    pub fn for_side(&self, side: Side) -> impl Iterator<Item = &MoveRecord> {
        self.records.iter().filter(move |r| r.side == side)
    }

    /// All live records in placement order.
    pub fn records(&self) -> &[MoveRecord] {
        &self.records
    }

    /// Sequence number the next record will receive.
    pub fn next_sequence(&self) -> u64 {
        self.next_sequence
    }

    /// Returns true when no piece is on the board.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Drops every record. The sequence counter keeps running.
    pub fn clear(&mut self) {
        self.records.clear();
    }
}
