use machine_learning::{
    dataset::Dataset,
    metrics::accuracy,
    training::{EpochReport, train_naive, train_pocket},
};
use proptest::prelude::*;

const LEARNING_RATE: f64 = 0.1;
const MAX_EPOCHS: usize = 100;

fn and2() -> Dataset {
    Dataset::from_records([
        [0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0],
        [1.0, 0.0, 0.0],
        [1.0, 1.0, 1.0],
    ])
    .unwrap()
}

fn xor2() -> Dataset {
    Dataset::from_records([
        [0.0, 0.0, 0.0],
        [0.0, 1.0, 1.0],
        [1.0, 0.0, 1.0],
        [1.0, 1.0, 0.0],
    ])
    .unwrap()
}

/// (1, 1) sits between (0, 0) and (2, 2) but has the other label, so no line separates it.
fn inseparable() -> Dataset {
    Dataset::from_records([
        [0.0, 1.0, 0.0],
        [2.0, 2.0, 0.0],
        [1.0, 0.0, 0.0],
        [0.0, 0.0, 0.0],
        [1.0, 1.0, 1.0],
    ])
    .unwrap()
}

fn best_accuracy(reports: &[EpochReport]) -> f64 {
    reports.iter().map(|r| r.accuracy).fold(0.0, f64::max)
}

#[test]
fn naive_converges_on_and() {
    let ds = and2();
    let mut reports: Vec<EpochReport> = Vec::new();

    let weights = train_naive(&ds, LEARNING_RATE, MAX_EPOCHS, &mut reports).unwrap();

    assert!(reports.len() < MAX_EPOCHS);
    assert_eq!(reports.last().unwrap().error_sum, 0.0);
    assert_eq!(accuracy(weights.view(), &ds).unwrap(), 100.0);
}

#[test]
fn pocket_converges_on_and() {
    let ds = and2();
    let mut reports: Vec<EpochReport> = Vec::new();

    let weights = train_pocket(&ds, LEARNING_RATE, MAX_EPOCHS, &mut reports).unwrap();

    assert!(reports.len() < MAX_EPOCHS);
    assert_eq!(accuracy(weights.view(), &ds).unwrap(), 100.0);
}

#[test]
fn both_modes_stop_on_the_same_epoch() {
    let ds = and2();
    let mut naive: Vec<EpochReport> = Vec::new();
    let mut pocket: Vec<EpochReport> = Vec::new();

    let naive_weights = train_naive(&ds, LEARNING_RATE, MAX_EPOCHS, &mut naive).unwrap();
    let pocket_weights = train_pocket(&ds, LEARNING_RATE, MAX_EPOCHS, &mut pocket).unwrap();

    assert_eq!(naive.len(), pocket.len());
    assert_eq!(naive_weights, pocket_weights);
}

#[test]
fn inseparable_data_runs_the_whole_budget() {
    let mut reports: Vec<EpochReport> = Vec::new();

    train_naive(&xor2(), LEARNING_RATE, MAX_EPOCHS, &mut reports).unwrap();

    assert_eq!(reports.len(), MAX_EPOCHS);
    assert!(reports.iter().all(|r| r.error_sum > 0.0));
}

#[test]
fn naive_may_end_worse_than_it_was() {
    let ds = inseparable();
    let mut reports: Vec<EpochReport> = Vec::new();

    let weights = train_naive(&ds, LEARNING_RATE, MAX_EPOCHS, &mut reports).unwrap();

    let last = accuracy(weights.view(), &ds).unwrap();
    assert!(last < best_accuracy(&reports));
}

#[test]
fn pocket_is_at_least_as_good_as_any_naive_epoch() {
    for ds in [and2(), xor2(), inseparable()] {
        let mut naive: Vec<EpochReport> = Vec::new();
        let mut pocket: Vec<EpochReport> = Vec::new();

        train_naive(&ds, LEARNING_RATE, MAX_EPOCHS, &mut naive).unwrap();
        let weights = train_pocket(&ds, LEARNING_RATE, MAX_EPOCHS, &mut pocket).unwrap();

        assert!(accuracy(weights.view(), &ds).unwrap() >= best_accuracy(&naive));
    }
}

#[test]
fn pocket_recovers_the_best_weights_on_inseparable_data() {
    let ds = inseparable();
    let mut naive: Vec<EpochReport> = Vec::new();
    let mut pocket: Vec<EpochReport> = Vec::new();

    let naive_weights = train_naive(&ds, LEARNING_RATE, MAX_EPOCHS, &mut naive).unwrap();
    let pocket_weights = train_pocket(&ds, LEARNING_RATE, MAX_EPOCHS, &mut pocket).unwrap();

    let naive_accuracy = accuracy(naive_weights.view(), &ds).unwrap();
    let pocket_accuracy = accuracy(pocket_weights.view(), &ds).unwrap();
    assert!(pocket_accuracy > naive_accuracy);
    assert_eq!(pocket_accuracy, best_accuracy(&naive));
}

#[test]
fn pocket_accuracy_never_decreases() {
    for ds in [and2(), xor2(), inseparable()] {
        let mut reports: Vec<EpochReport> = Vec::new();
        train_pocket(&ds, LEARNING_RATE, MAX_EPOCHS, &mut reports).unwrap();

        for pair in reports.windows(2) {
            assert!(pair[0].accuracy <= pair[1].accuracy);
        }
    }
}

#[test]
fn training_is_deterministic() {
    let ds = inseparable();

    let mut first: Vec<EpochReport> = Vec::new();
    let mut second: Vec<EpochReport> = Vec::new();
    let a = train_naive(&ds, LEARNING_RATE, MAX_EPOCHS, &mut first).unwrap();
    let b = train_naive(&ds, LEARNING_RATE, MAX_EPOCHS, &mut second).unwrap();
    assert_eq!(a, b);
    assert_eq!(first, second);

    let mut first: Vec<EpochReport> = Vec::new();
    let mut second: Vec<EpochReport> = Vec::new();
    let a = train_pocket(&ds, LEARNING_RATE, MAX_EPOCHS, &mut first).unwrap();
    let b = train_pocket(&ds, LEARNING_RATE, MAX_EPOCHS, &mut second).unwrap();
    assert_eq!(a, b);
    assert_eq!(first, second);
}

#[test]
fn zero_epochs_are_rejected() {
    assert!(train_naive(&and2(), LEARNING_RATE, 0, &mut ()).is_err());
    assert!(train_pocket(&and2(), LEARNING_RATE, 0, &mut ()).is_err());
}

fn records_and_weights() -> impl Strategy<Value = (Vec<Vec<f64>>, Vec<f64>)> {
    (1usize..5, 1usize..12).prop_flat_map(|(features, len)| {
        let record = (
            prop::collection::vec(-10.0f64..10.0, features),
            any::<bool>(),
        )
            .prop_map(|(mut xs, label)| {
                xs.push(if label { 1.0 } else { 0.0 });
                xs
            });

        (
            prop::collection::vec(record, len),
            prop::collection::vec(-5.0f64..5.0, features + 1),
        )
    })
}

proptest! {
    #[test]
    fn accuracy_is_a_percentage((records, weights) in records_and_weights()) {
        let ds = Dataset::from_records(&records).unwrap();
        let weights = ndarray::Array1::from(weights);

        let acc = accuracy(weights.view(), &ds).unwrap();
        prop_assert!((0.0..=100.0).contains(&acc));
    }

    #[test]
    fn pocket_dominates_naive((records, _) in records_and_weights()) {
        let ds = Dataset::from_records(&records).unwrap();
        let mut naive: Vec<EpochReport> = Vec::new();
        let mut pocket: Vec<EpochReport> = Vec::new();

        train_naive(&ds, LEARNING_RATE, 30, &mut naive).unwrap();
        let weights = train_pocket(&ds, LEARNING_RATE, 30, &mut pocket).unwrap();

        prop_assert!(accuracy(weights.view(), &ds).unwrap() >= best_accuracy(&naive));
        for pair in pocket.windows(2) {
            prop_assert!(pair[0].accuracy <= pair[1].accuracy);
        }
    }

    #[test]
    fn repeated_runs_agree((records, _) in records_and_weights()) {
        let ds = Dataset::from_records(&records).unwrap();
        let mut first: Vec<EpochReport> = Vec::new();
        let mut second: Vec<EpochReport> = Vec::new();

        let a = train_pocket(&ds, LEARNING_RATE, 20, &mut first).unwrap();
        let b = train_pocket(&ds, LEARNING_RATE, 20, &mut second).unwrap();

        prop_assert_eq!(a, b);
        prop_assert_eq!(first, second);
    }
}
