//! The run loop: a fold over the chronologically ordered event stream.

use crate::event::Event;
use crate::service::ServiceTime;
use crate::state::SimState;

/// Owns the initial state and drains the event queue to completion.
pub struct Simulator {
    state: SimState,
}

impl Simulator {
    /// A shop with `num_servers` servers and one arrival per timestamp,
    /// served with the fixed default service time. Input order does not
    /// matter; the event queue sorts by time.
    pub fn new(num_servers: usize, arrival_times: &[f64]) -> Simulator {
        Simulator::with_service(num_servers, arrival_times, ServiceTime::default())
    }

    pub fn with_service(
        num_servers: usize,
        arrival_times: &[f64],
        service: ServiceTime,
    ) -> Simulator {
        let mut state = SimState::with_service(num_servers, service);
        for &time in arrival_times {
            state = state.add_event(Event::Arrival { time });
        }
        Simulator { state }
    }

    /// Pop the earliest event, apply it, repeat until the queue is empty;
    /// return the final state. Completions always land strictly after the
    /// current time, so finite arrivals terminate.
    pub fn run(self) -> SimState {
        let mut state = self.state;
        while let Some(event) = state.next_event() {
            state = event.apply(state);
        }
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_drains_the_queue() {
        let state = Simulator::new(1, &[0.0, 0.5]).run();
        assert_eq!(state.pending_events(), 0);
    }

    #[test]
    fn no_arrivals_is_an_empty_run() {
        let state = Simulator::new(3, &[]).run();
        assert!(state.log().is_empty());
        assert_eq!(state.stats().served(), 0);
        assert_eq!(state.stats().lost(), 0);
    }

    #[test]
    fn arrival_input_order_is_irrelevant() {
        let sorted = Simulator::new(1, &[0.0, 0.2, 0.5]).run();
        let shuffled = Simulator::new(1, &[0.5, 0.0, 0.2]).run();
        assert_eq!(sorted.log(), shuffled.log());
        assert_eq!(sorted.stats(), shuffled.stats());
    }
}
