//! A single server: at most one customer in service, at most one waiting.

use crate::{CustomerId, ServerId};

/// A serving resource. The id doubles as the server's index in the shop's
/// server array and never changes after construction. The waiting slot is
/// a FIFO of depth exactly one, not an unbounded queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Server {
    id: ServerId,
    current: Option<CustomerId>,
    waiting: Option<CustomerId>,
}

impl Server {
    pub fn new(id: ServerId) -> Server {
        Server {
            id,
            current: None,
            waiting: None,
        }
    }

    pub fn id(&self) -> ServerId {
        self.id
    }

    /// True when no customer is in service.
    pub fn is_idle(&self) -> bool {
        self.current.is_none()
    }

    /// True when a customer occupies the waiting slot.
    pub fn has_waiting_customer(&self) -> bool {
        self.waiting.is_some()
    }

    pub fn current_customer(&self) -> Option<CustomerId> {
        self.current
    }

    pub fn waiting_customer(&self) -> Option<CustomerId> {
        self.waiting
    }

    /// Start serving `customer`.
    pub fn serve(mut self, customer: CustomerId) -> Server {
        self.current = Some(customer);
        self
    }

    /// Put `customer` in the waiting slot. The caller checks
    /// `has_waiting_customer` first; the slot holds exactly one customer.
    pub fn ask_to_wait(mut self, customer: CustomerId) -> Server {
        self.waiting = Some(customer);
        self
    }

    /// Clear the waiting slot.
    pub fn remove_waiting_customer(mut self) -> Server {
        self.waiting = None;
        self
    }

    /// Finish service and become idle.
    pub fn make_idle(mut self) -> Server {
        self.current = None;
        self
    }
}
