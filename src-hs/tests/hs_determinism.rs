use harmony_search::functions::{Continuous, DiscreteXContinuousY};
use harmony_search::{HSConfig, HSConfigBuilder, harmony_search};

fn config(seed: u64, workers: usize) -> HSConfig {
    HSConfigBuilder::new()
        .maximize(true)
        .max_imp(5_000)
        .hms(30)
        .num_workers(workers)
        .seed(seed)
        .build()
}

#[test]
fn test_hs_single_worker_same_seed_same_result() {
    let a = harmony_search(&Continuous, config(42, 1)).unwrap();
    let b = harmony_search(&Continuous, config(42, 1)).unwrap();
    assert_eq!(a.best_fitness, b.best_fitness);
    assert_eq!(a.best_harmony, b.best_harmony);
    assert_eq!(a.workers[0].accepted, b.workers[0].accepted);
}

#[test]
fn test_hs_parallel_same_seed_same_result() {
    // each worker owns its generator, so thread scheduling does not matter
    let a = harmony_search(&DiscreteXContinuousY, config(9, 4)).unwrap();
    let b = harmony_search(&DiscreteXContinuousY, config(9, 4)).unwrap();
    for (wa, wb) in a.workers.iter().zip(&b.workers) {
        assert_eq!(wa.best, wb.best);
    }
    assert_eq!(a.best_worker, b.best_worker);
}

#[test]
fn test_hs_workers_search_independently() {
    let report = harmony_search(&Continuous, config(3, 4)).unwrap();
    let first = &report.workers[0].memory;
    for other in &report.workers[1..] {
        assert_ne!(first.harmonies(), other.memory.harmonies());
    }
}

#[test]
fn test_hs_different_seeds_differ() {
    let a = harmony_search(&Continuous, config(1, 1)).unwrap();
    let b = harmony_search(&Continuous, config(2, 1)).unwrap();
    assert_ne!(a.best_harmony, b.best_harmony);
}
