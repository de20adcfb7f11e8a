use harmony_search::functions::ContinuousFixedX;
use harmony_search::{HSConfigBuilder, HSError, harmony_search};
use ndarray::{Array2, array};

#[test]
fn test_hs_starts_from_initial_harmonies() {
    let initial = array![[0.5, -1.0], [0.5, 500.0], [0.5, -700.0]];
    let config = HSConfigBuilder::new()
        .maximize(true)
        .max_imp(0)
        .hms(3)
        .num_workers(2)
        .seed(1)
        .initial_harmonies(initial.clone())
        .build();

    let report = harmony_search(&ContinuousFixedX, config).unwrap();

    assert_eq!(report.best_fitness, 3.75);
    assert_eq!(report.best_harmony, array![0.5, -1.0]);
    for memory in report.harmony_memories() {
        assert_eq!(memory.harmonies(), &initial);
    }
    assert_eq!(report.nfev, 6);
}

#[test]
fn test_hs_rejects_bad_initial_harmonies() {
    let base = HSConfigBuilder::new().maximize(true).max_imp(10).hms(2).num_workers(1).seed(1);

    let wrong_rows = Array2::from_elem((3, 2), 0.5);
    let err = harmony_search(&ContinuousFixedX, base.initial_harmonies(wrong_rows).build());
    assert!(matches!(
        err,
        Err(HSError::Worker { worker: 0, ref source }) if matches!(**source, HSError::InitialHarmoniesShape { .. })
    ));

    let base = HSConfigBuilder::new().maximize(true).max_imp(10).hms(2).num_workers(1).seed(1);
    let out_of_bounds = array![[0.5, 0.0], [0.5, 2000.0]];
    let err = harmony_search(&ContinuousFixedX, base.initial_harmonies(out_of_bounds).build())
        .unwrap_err();
    match err {
        HSError::Worker { source, .. } => assert!(source.is_config_error()),
        other => panic!("unexpected error: {other}"),
    }
}
