//! Conversion from ResRobot board records to the normalized shape.

use crate::domain::{Departure, or_unknown};

use super::types::DepartureRecord;

/// Normalize a board into client-facing departures.
///
/// Pure function. Output order equals input order; the board is already
/// sorted by the provider and callers rely on that order being preserved.
pub fn normalize_board(records: Vec<DepartureRecord>) -> Vec<Departure> {
    records.into_iter().map(normalize_record).collect()
}

fn normalize_record(record: DepartureRecord) -> Departure {
    Departure {
        time: or_unknown(record.time),
        destination: or_unknown(record.direction),
        transport_type: or_unknown(record.product_at_stop.and_then(|p| p.cat_out)),
        route: or_unknown(record.name),
    }
}
