use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use itertools::Itertools;

use dpllsat::{
    dimacs,
    solver::{Heuristic, Instance, SolverConfig},
};

/// `pigeons` pigeons in `holes` holes, as DIMACS text
fn pigeonhole(pigeons: i64, holes: i64) -> String {
    let var = |p: i64, h: i64| p * holes + h + 1;
    let mut clauses = vec![];
    for p in 0..pigeons {
        clauses.push((0..holes).map(|h| var(p, h)).collect_vec());
    }
    for h in 0..holes {
        for (p, q) in (0..pigeons).tuple_combinations() {
            clauses.push(vec![-var(p, h), -var(q, h)]);
        }
    }
    let mut text = format!("p cnf {} {}\n", pigeons * holes, clauses.len());
    for clause in clauses {
        text.push_str(&format!("{} 0\n", clause.iter().join(" ")));
    }
    text
}

fn instance(text: &str) -> Instance {
    dimacs::parse_str(text).unwrap()
}

fn benchmark_sat_problems(c: &mut Criterion) {
    let mut group = c.benchmark_group("sat");

    for size in [4, 6, 8] {
        let problem = instance(&pigeonhole(size, size));
        for heuristic in [Heuristic::Mom, Heuristic::FirstUnassigned] {
            let config = SolverConfig {
                heuristic,
                ..SolverConfig::default()
            };
            group.bench_with_input(
                BenchmarkId::new(format!("pigeonhole-{}", heuristic), size),
                &problem,
                |b, problem| {
                    b.iter(|| {
                        let solution = black_box(problem).solve_with(&config).unwrap();
                        assert!(solution.is_satisfiable());
                        solution
                    })
                },
            );
        }
    }

    group.finish();
}

fn benchmark_unsat_problems(c: &mut Criterion) {
    let mut group = c.benchmark_group("unsat");
    group.sample_size(10);

    // These are known hard UNSAT instances for DPLL
    for holes in [3, 4, 5] {
        let problem = instance(&pigeonhole(holes + 1, holes));
        group.bench_with_input(BenchmarkId::new("pigeonhole", holes), &problem, |b, problem| {
            b.iter(|| {
                let solution = black_box(problem).solve();
                assert!(!solution.is_satisfiable());
                solution
            })
        });
    }

    group.finish();
}

fn benchmark_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");

    for holes in [10, 20, 40] {
        let text = pigeonhole(holes + 1, holes);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("pigeonhole", holes), &text, |b, text| {
            b.iter(|| dimacs::parse_str(black_box(text)).unwrap())
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_sat_problems,
    benchmark_unsat_problems,
    benchmark_parsing
);
criterion_main!(benches);
