//! The simulation state and its transitions.
//!
//! Every transition consumes the current state and returns the next one.
//! The run loop threads a single owned value through the whole event
//! stream, so nothing can alias a stale state; the borrow checker enforces
//! the contract.

use des::EventQueue;

use crate::event::Event;
use crate::server::Server;
use crate::service::ServiceTime;
use crate::shop::Shop;
use crate::stats::Statistics;
use crate::{Customer, CustomerId, LogEntry, LogKind, ServerId};

/// Everything a transition reads or writes: the event queue, the shop,
/// the statistics, the customer arena, and the notification log.
#[derive(Debug)]
pub struct SimState {
    events: EventQueue<Event>,
    shop: Shop,
    stats: Statistics,
    customers: Vec<Customer>,
    log: Vec<LogEntry>,
    service: ServiceTime,
}

impl SimState {
    /// A fresh state with `num_servers` idle servers and the fixed default
    /// service time.
    pub fn new(num_servers: usize) -> SimState {
        SimState::with_service(num_servers, ServiceTime::default())
    }

    pub fn with_service(num_servers: usize, service: ServiceTime) -> SimState {
        SimState {
            events: EventQueue::new(),
            shop: Shop::new(num_servers),
            stats: Statistics::new(),
            customers: Vec::new(),
            log: Vec::new(),
            service,
        }
    }

    /// Schedule an event at its own timestamp.
    pub fn add_event(mut self, event: Event) -> SimState {
        self.events.push(event.time(), event);
        self
    }

    /// Pop the earliest pending event. `None` means the run is over.
    pub fn next_event(&mut self) -> Option<Event> {
        self.events.pop().map(|(_, event)| event)
    }

    pub fn stats(&self) -> Statistics {
        self.stats
    }

    /// The ordered state-transition notifications.
    pub fn log(&self) -> &[LogEntry] {
        &self.log
    }

    pub fn shop(&self) -> &Shop {
        &self.shop
    }

    /// Customers that have arrived so far, in arrival order.
    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn pending_events(&self) -> usize {
        self.events.len()
    }

    fn customer(&self, id: CustomerId) -> Customer {
        self.customers[id]
    }

    fn log_entry(mut self, time: f64, customer: CustomerId, kind: LogKind) -> SimState {
        self.log.push(LogEntry {
            time,
            customer,
            kind,
        });
        self
    }

    fn update_server(mut self, server: Server) -> SimState {
        self.shop = self.shop.update(server);
        self
    }

    fn update_statistics(mut self, stats: Statistics) -> SimState {
        self.stats = stats;
        self
    }

    /// A customer arrives at `time`: serve them at once, queue them behind
    /// a server, or turn them away.
    pub fn simulate_arrival(mut self, time: f64) -> SimState {
        let customer = Customer {
            id: self.customers.len(),
            arrived_at: time,
        };
        self.customers.push(customer);
        self.log_entry(time, customer.id, LogKind::Arrives)
            .served_or_leave(time, customer.id)
    }

    /// Strict priority, first matching server in stored order: an idle
    /// server serves immediately, else an empty waiting slot queues the
    /// customer, else the customer leaves. Never load-balances.
    fn served_or_leave(self, time: f64, customer: CustomerId) -> SimState {
        if let Some(server) = self.shop.find_idle_server() {
            self.serve_customer(time, server, customer)
        } else if let Some(server) = self.shop.find_server_with_no_waiting_customer() {
            self.make_customer_wait(time, server, customer)
        } else {
            self.customer_leaves(time, customer)
        }
    }

    /// `server` finishes serving `customer` at `time`: pick up the waiting
    /// customer if there is one, otherwise go idle.
    pub fn simulate_done(self, time: f64, server: ServerId, customer: CustomerId) -> SimState {
        self.log_entry(time, customer, LogKind::DoneServedBy(server))
            .serve_next_or_idle(time, server)
    }

    fn serve_next_or_idle(self, time: f64, server: ServerId) -> SimState {
        let current = self.shop.server(server);
        match current.waiting_customer() {
            // The waiting slot is cleared on the very value that starts
            // serving, so the slot is never doubly occupied.
            Some(next) => self.serve_customer(time, current.remove_waiting_customer(), next),
            None => self.update_server(current.make_idle()),
        }
    }

    /// Start service: schedule the completion, mark the server busy, and
    /// account for however long the customer waited.
    fn serve_customer(mut self, time: f64, server: Server, customer: CustomerId) -> SimState {
        let done_at = time + self.service.draw();
        let waited = time - self.customer(customer).arrived_at;
        let stats = self.stats.serve_one_customer().customer_waited_for(waited);
        self.add_event(Event::Completion {
            time: done_at,
            server: server.id(),
            customer,
        })
        .update_server(server.serve(customer))
        .update_statistics(stats)
        .log_entry(time, customer, LogKind::ServedBy(server.id()))
    }

    fn make_customer_wait(self, time: f64, server: Server, customer: CustomerId) -> SimState {
        self.log_entry(time, customer, LogKind::WaitsFor(server.id()))
            .update_server(server.ask_to_wait(customer))
    }

    fn customer_leaves(self, time: f64, customer: CustomerId) -> SimState {
        let stats = self.stats.lost_one_customer();
        self.update_statistics(stats)
            .log_entry(time, customer, LogKind::Leaves)
    }
}
