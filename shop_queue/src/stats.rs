//! Running counts for the end-of-run summary.

use std::fmt;

/// Additive accumulator: customers served, total waiting time of served
/// customers, customers lost. Fields only ever grow.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Statistics {
    served: u64,
    lost: u64,
    total_wait: f64,
}

impl Statistics {
    pub fn new() -> Statistics {
        Statistics::default()
    }

    pub fn serve_one_customer(mut self) -> Statistics {
        self.served += 1;
        self
    }

    pub fn customer_waited_for(mut self, wait: f64) -> Statistics {
        self.total_wait += wait;
        self
    }

    pub fn lost_one_customer(mut self) -> Statistics {
        self.lost += 1;
        self
    }

    pub fn served(&self) -> u64 {
        self.served
    }

    pub fn lost(&self) -> u64 {
        self.lost
    }

    pub fn total_wait(&self) -> f64 {
        self.total_wait
    }

    /// Mean waiting time of served customers; 0.0 when nobody was served.
    pub fn mean_wait(&self) -> f64 {
        if self.served == 0 {
            0.0
        } else {
            self.total_wait / self.served as f64
        }
    }
}

impl fmt::Display for Statistics {
    /// `"<mean wait> <served> <lost>"`, mean wait with three decimals.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3} {} {}", self.mean_wait(), self.served, self.lost)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn counts_accumulate_additively() {
        let stats = Statistics::new()
            .serve_one_customer()
            .customer_waited_for(0.5)
            .serve_one_customer()
            .customer_waited_for(0.0)
            .lost_one_customer();

        assert_eq!(stats.served(), 2);
        assert_eq!(stats.lost(), 1);
        assert_relative_eq!(stats.total_wait(), 0.5);
        assert_relative_eq!(stats.mean_wait(), 0.25);
    }

    #[test]
    fn mean_wait_of_nobody_served_is_zero() {
        let stats = Statistics::new().lost_one_customer();
        assert_eq!(stats.mean_wait(), 0.0);
    }

    #[test]
    fn display_renders_mean_served_lost() {
        let stats = Statistics::new()
            .serve_one_customer()
            .serve_one_customer()
            .customer_waited_for(1.0)
            .lost_one_customer();
        assert_eq!(stats.to_string(), "0.500 2 1");
    }
}
