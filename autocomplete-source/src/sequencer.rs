/// Ticket handed out when a request for fresh options is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestTicket(u64);

impl RequestTicket {
    pub fn get(self) -> u64 {
        self.0
    }
}

/// Orders responses for one option source.
///
/// Each fetch takes a ticket; a response is applied only when its ticket is
/// newer than the last applied one, so a slow stale response can never
/// overwrite fresher data.
#[derive(Debug, Default)]
pub struct RequestSequencer {
    issued: u64,
    applied: Option<u64>,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&mut self) -> RequestTicket {
        self.issued += 1;
        RequestTicket(self.issued)
    }

    /// Returns `true` if the response for `ticket` should be applied.
    pub fn accept(&mut self, ticket: RequestTicket) -> bool {
        if self.applied.is_some_and(|applied| ticket.0 <= applied) {
            log::debug!(
                "Dropping stale response #{} (already applied #{:?})",
                ticket.0,
                self.applied
            );
            return false;
        }
        self.applied = Some(ticket.0);
        true
    }

    pub fn latest_issued(&self) -> Option<RequestTicket> {
        (self.issued > 0).then_some(RequestTicket(self.issued))
    }
}

impl From<u64> for RequestTicket {
    fn from(raw: u64) -> Self {
        RequestTicket(raw)
    }
}
