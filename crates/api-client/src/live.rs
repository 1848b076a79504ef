use crate::{DashboardClient, error::ClientError};
use analyzer::{DashboardQuery, DashboardSnapshot, FilterPredicate, IndexView};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

/// Identifies one request in the order it was issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

impl Ticket {
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// What became of a response once it arrived.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    /// The response belonged to the newest request seen so far and was applied.
    Applied(T),
    /// A newer request had already been applied; the response was dropped.
    Superseded { ticket: Ticket },
}

impl<T> Outcome<T> {
    pub fn applied(self) -> Option<T> {
        match self {
            Outcome::Applied(value) => Some(value),
            Outcome::Superseded { .. } => None,
        }
    }

    pub fn is_superseded(&self) -> bool {
        matches!(self, Outcome::Superseded { .. })
    }
}

/// Orders overlapping requests so that a slow, older response can never
/// overwrite the result of a newer one.
///
/// Tickets are issued from an atomic counter. The highest applied ticket sits
/// behind a mutex, and the check against it and the state update it guards
/// happen under the same lock.
#[derive(Debug, Default)]
pub struct SequenceGuard {
    issued: AtomicU64,
    applied: Mutex<u64>,
}

impl SequenceGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hands out the next ticket. The first ticket is `1`.
    pub fn issue(&self) -> Ticket {
        Ticket(self.issued.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Runs `apply` only if `ticket` is newer than every ticket committed so far.
    pub fn commit<T>(&self, ticket: Ticket, apply: impl FnOnce() -> T) -> Option<T> {
        let mut applied = self.applied.lock().unwrap_or_else(PoisonError::into_inner);
        if ticket.0 <= *applied {
            return None;
        }
        *applied = ticket.0;
        Some(apply())
    }
}

/// One independently ordered stream of requests and its latest applied result.
struct Channel<T> {
    guard: SequenceGuard,
    latest: Mutex<Option<T>>,
}

impl<T: Clone> Channel<T> {
    fn new() -> Self {
        Self {
            guard: SequenceGuard::new(),
            latest: Mutex::new(None),
        }
    }

    fn latest(&self) -> Option<T> {
        self.latest
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn settle(
        &self,
        ticket: Ticket,
        result: Result<T, ClientError>,
    ) -> Result<Outcome<T>, ClientError> {
        let committed = self.guard.commit(ticket, || match result {
            Ok(value) => {
                *self.latest.lock().unwrap_or_else(PoisonError::into_inner) = Some(value.clone());
                Ok(value)
            }
            Err(e) => Err(e),
        });

        match committed {
            Some(Ok(value)) => Ok(Outcome::Applied(value)),
            Some(Err(e)) => {
                tracing::warn!(ticket = ticket.value(), error = %e, "Dashboard request failed.");
                Err(e)
            }
            None => {
                tracing::debug!(ticket = ticket.value(), "Discarding superseded response.");
                Ok(Outcome::Superseded { ticket })
            }
        }
    }
}

/// A dashboard session backed by a remote server.
///
/// Snapshots and filtered lists are separate streams, each with its own
/// tickets. Within a stream, whichever response lands last in issue order
/// wins, regardless of the order the responses arrive in. Errors from
/// superseded requests are dropped as well.
pub struct LiveDashboard<C> {
    client: Arc<C>,
    snapshot: Channel<DashboardSnapshot>,
    filtered: Channel<Vec<IndexView>>,
}

impl<C: DashboardClient> LiveDashboard<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self {
            client,
            snapshot: Channel::new(),
            filtered: Channel::new(),
        }
    }

    /// Fetches a snapshot for `query` and stores it if no newer request beat it.
    pub async fn refresh(
        &self,
        query: &DashboardQuery,
    ) -> Result<Outcome<DashboardSnapshot>, ClientError> {
        let ticket = self.snapshot.guard.issue();
        tracing::debug!(ticket = ticket.value(), "Requesting dashboard snapshot.");
        let result = self.client.dashboard(query).await;
        self.snapshot.settle(ticket, result)
    }

    /// Fetches the filtered list for `predicate` under the same ordering rules.
    pub async fn filter(
        &self,
        predicate: &FilterPredicate,
    ) -> Result<Outcome<Vec<IndexView>>, ClientError> {
        let ticket = self.filtered.guard.issue();
        tracing::debug!(ticket = ticket.value(), "Requesting filtered indices.");
        let result = self.client.filter(predicate).await;
        self.filtered.settle(ticket, result)
    }

    /// The most recently applied snapshot.
    pub fn snapshot(&self) -> Option<DashboardSnapshot> {
        self.snapshot.latest()
    }

    /// The most recently applied filtered list.
    pub fn filtered(&self) -> Option<Vec<IndexView>> {
        self.filtered.latest()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tickets_increase_from_one() {
        let guard = SequenceGuard::new();
        assert_eq!(guard.issue().value(), 1);
        assert_eq!(guard.issue().value(), 2);
    }

    #[test]
    fn older_ticket_is_rejected_after_newer_commit() {
        let guard = SequenceGuard::new();
        let first = guard.issue();
        let second = guard.issue();

        assert_eq!(guard.commit(second, || "second"), Some("second"));
        assert_eq!(guard.commit(first, || "first"), None);
    }

    #[test]
    fn in_order_commits_all_apply() {
        let guard = SequenceGuard::new();
        let first = guard.issue();
        let second = guard.issue();

        assert_eq!(guard.commit(first, || 1), Some(1));
        assert_eq!(guard.commit(second, || 2), Some(2));
    }

    #[test]
    fn ticket_commits_at_most_once() {
        let guard = SequenceGuard::new();
        let ticket = guard.issue();
        assert!(guard.commit(ticket, || ()).is_some());
        assert!(guard.commit(ticket, || ()).is_none());
    }

    #[test]
    fn channels_order_their_own_tickets_only() {
        let snapshots: Channel<u8> = Channel::new();
        let lists: Channel<u8> = Channel::new();
        let snapshot_ticket = snapshots.guard.issue();
        let list_ticket = lists.guard.issue();

        assert!(matches!(lists.settle(list_ticket, Ok(2)), Ok(Outcome::Applied(2))));
        assert!(matches!(
            snapshots.settle(snapshot_ticket, Ok(1)),
            Ok(Outcome::Applied(1))
        ));
        assert_eq!(snapshots.latest(), Some(1));
        assert_eq!(lists.latest(), Some(2));
    }

    #[test]
    fn outcome_accessors() {
        let applied: Outcome<u8> = Outcome::Applied(7);
        assert!(!applied.is_superseded());
        assert_eq!(applied.applied(), Some(7));

        let dropped: Outcome<u8> = Outcome::Superseded { ticket: Ticket(3) };
        assert!(dropped.is_superseded());
        assert_eq!(dropped.applied(), None);
    }
}
