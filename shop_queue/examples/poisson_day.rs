//! A randomly generated day at the shop: Poisson arrivals and exponential
//! service times, seeded for reproducibility.
//!
//! This is the distribution seam in action; the production binary keeps
//! the fixed service time.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand_distr::{Distribution, Exp};
use shop_queue::Simulator;
use shop_queue::service::ServiceTime;

const NUM_SERVERS: usize = 3;
const NUM_CUSTOMERS: usize = 25;
const ARRIVAL_RATE: f64 = 2.0; // customers per time unit
const SERVICE_RATE: f64 = 1.5; // mean service duration 1/1.5
const SEED: u64 = 42;

fn main() {
    let mut rng = StdRng::seed_from_u64(SEED);
    let interarrival = Exp::new(ARRIVAL_RATE).expect("rate is positive");

    let mut clock = 0.0;
    let arrivals: Vec<f64> = (0..NUM_CUSTOMERS)
        .map(|_| {
            clock += interarrival.sample(&mut rng);
            clock
        })
        .collect();

    let service = ServiceTime::exponential(SERVICE_RATE, SEED + 1).expect("rate is positive");
    let state = Simulator::with_service(NUM_SERVERS, &arrivals, service).run();

    for entry in state.log() {
        println!("{entry}");
    }
    println!("{}", state.stats());
}
