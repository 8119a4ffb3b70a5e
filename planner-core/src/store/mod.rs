//! Event store: day buckets keyed by date.
//!
//! Every mutation is written through to the backend before it returns. If the
//! write fails the in-memory change is kept and `PlannerError::Persistence`
//! is returned so the caller can warn that the change may not be durable.

mod backend;

pub use backend::{Backend, FileBackend, MemoryBackend};

use std::collections::BTreeMap;

use crate::date_key::DateKey;
use crate::error::{PlannerError, PlannerResult};
use crate::event::Event;

type Buckets = BTreeMap<DateKey, Vec<Event>>;

pub struct EventStore<B: Backend> {
    buckets: Buckets,
    backend: B,
}

impl<B: Backend> EventStore<B> {
    /// Load the store from `backend`.
    ///
    /// A missing, unreadable or malformed blob yields an empty store.
    pub fn load(backend: B) -> Self {
        let buckets = match backend.load() {
            Ok(Some(blob)) => parse_blob(&blob).unwrap_or_else(|e| {
                tracing::warn!(error = %e, "stored events are malformed, starting empty");
                Buckets::new()
            }),
            Ok(None) => Buckets::new(),
            Err(e) => {
                tracing::warn!(error = %e, "failed to read stored events, starting empty");
                Buckets::new()
            }
        };

        EventStore { buckets, backend }
    }

    /// Events on `date` in insertion order; empty when the day has none.
    pub fn get(&self, date: DateKey) -> &[Event] {
        self.buckets.get(&date).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Days that have at least one event, in date order.
    pub fn dates(&self) -> impl Iterator<Item = DateKey> + '_ {
        self.buckets.keys().copied()
    }

    /// Append an already admitted event to its day.
    ///
    /// No overlap check happens here; see [`crate::admission::admit`].
    pub fn add(&mut self, date: DateKey, event: Event) -> PlannerResult<()> {
        self.buckets.entry(date).or_default().push(event);
        self.persist()
    }

    /// Remove the event at `index` on `date`.
    ///
    /// Returns `Ok(None)` without touching the backend when there is no such
    /// event. The bucket is dropped once its last event is removed.
    pub fn remove(&mut self, date: DateKey, index: usize) -> PlannerResult<Option<Event>> {
        let Some(bucket) = self.buckets.get_mut(&date) else {
            tracing::debug!(%date, index, "remove on empty day ignored");
            return Ok(None);
        };
        if index >= bucket.len() {
            tracing::debug!(%date, index, "remove with stale index ignored");
            return Ok(None);
        }

        let removed = bucket.remove(index);
        if bucket.is_empty() {
            self.buckets.remove(&date);
        }

        self.persist()?;
        Ok(Some(removed))
    }

    /// Flip the completed flag of the event at `index` on `date`.
    ///
    /// Returns the new flag, or `Ok(None)` when there is no such event.
    pub fn toggle_completed(&mut self, date: DateKey, index: usize) -> PlannerResult<Option<bool>> {
        let Some(event) = self
            .buckets
            .get_mut(&date)
            .and_then(|bucket| bucket.get_mut(index))
        else {
            tracing::debug!(%date, index, "toggle with stale index ignored");
            return Ok(None);
        };

        event.completed = !event.completed;
        let completed = event.completed;

        self.persist()?;
        Ok(Some(completed))
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    #[cfg(test)]
    pub(crate) fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    fn persist(&mut self) -> PlannerResult<()> {
        let blob = serde_json::to_string(&self.buckets)
            .map_err(|e| PlannerError::Serialization(e.to_string()))?;

        self.backend.save(&blob).map_err(|e| {
            tracing::error!(error = %e, "failed to save events");
            match e {
                PlannerError::Persistence(_) => e,
                other => PlannerError::Persistence(other.to_string()),
            }
        })
    }
}

fn parse_blob(blob: &str) -> PlannerResult<Buckets> {
    let mut buckets: Buckets =
        serde_json::from_str(blob).map_err(|e| PlannerError::Serialization(e.to_string()))?;
    buckets.retain(|_, events| !events.is_empty());
    Ok(buckets)
}
