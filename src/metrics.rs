//! Process wide counters for the search, kept in a crate-local prometheus
//! registry. They accumulate over every solve in the process, unlike
//! [`EvaluationStats`](crate::solver::EvaluationStats) which is per solve.

use lazy_static::lazy_static;
use prometheus::{Encoder, IntCounter, Registry, TextEncoder};

fn counter(registry: &Registry, name: &str, help: &str) -> IntCounter {
    let counter = IntCounter::new(name, help).expect("counter names are valid");
    registry
        .register(Box::new(counter.clone()))
        .expect("counters are registered once");
    counter
}

lazy_static! {
    pub static ref REGISTRY: Registry = Registry::new();
    pub static ref SOLVES: IntCounter =
        counter(&REGISTRY, "dpllsat_solves_total", "Number of solver runs");
    pub static ref NODES_VISITED: IntCounter = counter(
        &REGISTRY,
        "dpllsat_nodes_visited_total",
        "Search tree nodes entered"
    );
    pub static ref DECISIONS: IntCounter = counter(
        &REGISTRY,
        "dpllsat_decisions_total",
        "Branching decisions taken"
    );
    pub static ref BACKTRACKS: IntCounter = counter(
        &REGISTRY,
        "dpllsat_backtracks_total",
        "Decisions flipped after a conflict"
    );
    pub static ref UNIT_PROPAGATIONS: IntCounter = counter(
        &REGISTRY,
        "dpllsat_unit_propagations_total",
        "Literals assigned by unit propagation"
    );
}

/// Renders every counter in the prometheus text exposition format.
pub fn gather_text() -> prometheus::Result<String> {
    // Counters register on first use, touch them so all of them show up
    lazy_static::initialize(&SOLVES);
    lazy_static::initialize(&NODES_VISITED);
    lazy_static::initialize(&DECISIONS);
    lazy_static::initialize(&BACKTRACKS);
    lazy_static::initialize(&UNIT_PROPAGATIONS);

    let mut buffer = vec![];
    TextEncoder::new().encode(&REGISTRY.gather(), &mut buffer)?;
    String::from_utf8(buffer).map_err(|err| prometheus::Error::Msg(err.to_string()))
}
