//! Queueing-shop discrete-event simulation.
//!
//! Customers arrive at a shop with a fixed pool of servers. An arriving
//! customer is served at once by the first idle server, waits behind the
//! first server whose single waiting slot is free, or leaves when every
//! server is busy with someone already queued. Service takes a fixed
//! amount of time by default; [`service::ServiceTime`] is the seam for
//! swapping in a distribution.
//!
//! The core never prints. A run accumulates [`LogEntry`] records and
//! [`Statistics`]; the binary renders them afterwards.

pub mod event;
pub mod output;
pub mod server;
pub mod service;
pub mod shop;
pub mod simulator;
pub mod state;
pub mod stats;

use std::fmt;

pub use simulator::Simulator;
pub use state::SimState;
pub use stats::Statistics;

/// How long a server takes to serve one customer, in simulated time units.
pub const SERVICE_TIME: f64 = 1.0;

/// Index of a customer in the simulation's customer arena.
pub type CustomerId = usize;

/// Index of a server in the shop's server array.
pub type ServerId = usize;

/// An immutable customer record: who arrived, and when.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Customer {
    pub id: CustomerId,
    pub arrived_at: f64,
}

/// One state-transition notification, recorded in the order it happened.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogEntry {
    pub time: f64,
    pub customer: CustomerId,
    pub kind: LogKind,
}

/// What happened to the customer at that moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogKind {
    Arrives,
    WaitsFor(ServerId),
    ServedBy(ServerId),
    DoneServedBy(ServerId),
    Leaves,
}

impl fmt::Display for LogEntry {
    /// Renders `"{:6.3} C<id> <message>"`: time with three decimals,
    /// space-padded to width six.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:6.3} C{} ", self.time, self.customer)?;
        match self.kind {
            LogKind::Arrives => write!(f, "arrives"),
            LogKind::WaitsFor(server) => write!(f, "waits for S{server}"),
            LogKind::ServedBy(server) => write!(f, "served by S{server}"),
            LogKind::DoneServedBy(server) => write!(f, "done served by S{server}"),
            LogKind::Leaves => write!(f, "leaves"),
        }
    }
}
