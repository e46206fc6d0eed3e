//! # Load Guard
//!
//! Tracks which load a view is waiting for. Only the newest ticket of a
//! still-mounted view may apply its result; anything older is discarded.

/// Handle for one issued load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
}

impl LoadTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[derive(Debug, Clone)]
pub struct LoadGuard {
    generation: u64,
    mounted: bool,
}

impl LoadGuard {
    pub fn new() -> Self {
        Self {
            generation: 0,
            mounted: true,
        }
    }

    /// Issue a ticket that supersedes every earlier one
    pub fn issue(&mut self) -> LoadTicket {
        self.generation += 1;
        LoadTicket {
            generation: self.generation,
        }
    }

    /// Whether a result for `ticket` may still be applied
    pub fn accepts(&self, ticket: LoadTicket) -> bool {
        self.mounted && ticket.generation == self.generation
    }

    pub fn unmount(&mut self) {
        self.mounted = false;
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }
}

impl Default for LoadGuard {
    fn default() -> Self {
        Self::new()
    }
}
