//! Simulation events: tagged variants applied through a single dispatch.

use crate::state::SimState;
use crate::{CustomerId, ServerId};

/// A scheduled unit of deferred work. The variant carries everything
/// needed to resume, so a completion never looks anything up by time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// A new customer enters the shop.
    Arrival { time: f64 },
    /// `server` finishes serving `customer`.
    Completion {
        time: f64,
        server: ServerId,
        customer: CustomerId,
    },
}

impl Event {
    /// The simulated time this event fires at.
    pub fn time(&self) -> f64 {
        match *self {
            Event::Arrival { time } => time,
            Event::Completion { time, .. } => time,
        }
    }

    /// Apply this event to the state, producing the next state.
    pub fn apply(self, state: SimState) -> SimState {
        match self {
            Event::Arrival { time } => state.simulate_arrival(time),
            Event::Completion {
                time,
                server,
                customer,
            } => state.simulate_done(time, server, customer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_variant_reports_its_time() {
        assert_eq!(Event::Arrival { time: 0.25 }.time(), 0.25);
        let completion = Event::Completion {
            time: 1.25,
            server: 0,
            customer: 3,
        };
        assert_eq!(completion.time(), 1.25);
    }
}
