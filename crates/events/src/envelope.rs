use serde::{Deserialize, Serialize};

use crate::event::Event;

/// Envelope for an applied event, carrying stream metadata.
///
/// `sequence_number` is the aggregate version right after the payload was
/// applied, so it is strictly increasing per aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventEnvelope<E> {
    aggregate_type: String,
    event_type: String,
    schema_version: u32,
    sequence_number: u64,
    payload: E,
}

impl<E: Event> EventEnvelope<E> {
    /// Wrap `payload`, recording its type and schema version.
    pub fn new(aggregate_type: impl Into<String>, sequence_number: u64, payload: E) -> Self {
        Self {
            aggregate_type: aggregate_type.into(),
            event_type: payload.event_type().to_string(),
            schema_version: payload.version(),
            sequence_number,
            payload,
        }
    }
}

impl<E> EventEnvelope<E> {
    pub fn aggregate_type(&self) -> &str {
        &self.aggregate_type
    }

    pub fn event_type(&self) -> &str {
        &self.event_type
    }

    pub fn schema_version(&self) -> u32 {
        self.schema_version
    }

    pub fn sequence_number(&self) -> u64 {
        self.sequence_number
    }

    pub fn payload(&self) -> &E {
        &self.payload
    }

    pub fn into_payload(self) -> E {
        self.payload
    }
}
