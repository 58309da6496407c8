use cpdag_core::errors::*;
use cpdag_core::VarPair;

#[test]
fn oracle_not_a_number_carries_query() {
    let err = OracleError::NotANumber {
        x: 3,
        y: 7,
        conditioning: vec![1, 2],
    };
    let msg = err.to_string();
    assert!(msg.contains('3') && msg.contains('7'));
    assert!(msg.contains("[1, 2]"), "conditioning set missing from: {msg}");
    assert!(msg.contains("NaN"));
}

#[test]
fn oracle_check_accepts_closed_unit_interval() {
    assert_eq!(OracleError::check(0, 1, &[], 0.0), Ok(0.0));
    assert_eq!(OracleError::check(0, 1, &[], 1.0), Ok(1.0));
    assert_eq!(OracleError::check(0, 1, &[2], 0.42), Ok(0.42));
}

#[test]
fn oracle_check_rejects_nan_and_out_of_range() {
    assert!(matches!(
        OracleError::check(0, 1, &[2], f64::NAN),
        Err(OracleError::NotANumber { x: 0, y: 1, .. })
    ));
    for bad in [-0.01, 1.01, f64::INFINITY, f64::NEG_INFINITY] {
        match OracleError::check(4, 5, &[6], bad) {
            Err(OracleError::OutOfRange {
                x, y, conditioning, ..
            }) => {
                assert_eq!((x, y), (4, 5));
                assert_eq!(conditioning, vec![6]);
            }
            other => panic!("expected OutOfRange for {bad}, got {other:?}"),
        }
    }
}

#[test]
fn input_errors_carry_shape() {
    let err = InputError::NonRectangular {
        row: 4,
        expected: 3,
        found: 2,
    };
    let msg = err.to_string();
    assert!(msg.contains("row 4"));
    assert!(msg.contains('3') && msg.contains('2'));

    let err = InputError::ShapeMismatch {
        rows: 2,
        cols: 5,
        len: 9,
    };
    assert!(err.to_string().contains("2x5"));
}

#[test]
fn significance_check_is_exclusive() {
    assert_eq!(InputError::check_significance(0.05), Ok(0.05));
    for bad in [0.0, 1.0, -0.5, 2.0, f64::NAN] {
        assert!(
            InputError::check_significance(bad).is_err(),
            "{bad} should be rejected"
        );
    }
}

#[test]
fn consistency_errors_name_the_pair() {
    let err = ConsistencyError::MissingSeparationSet {
        pair: VarPair::new(4, 1),
    };
    assert!(err.to_string().contains("{1, 4}"));

    let err = ConsistencyError::DirectedCycle {
        path: "0 -> 1 -> 2 -> 0".into(),
    };
    assert!(err.to_string().contains("0 -> 1 -> 2 -> 0"));
}

#[test]
fn config_error_carries_field() {
    let err = ConfigError::ValidationFailed {
        field: "skeleton.significance_level".into(),
        message: "must be strictly between 0.0 and 1.0".into(),
    };
    assert!(err.to_string().contains("skeleton.significance_level"));
}

#[test]
fn from_conversions_pick_the_right_variant() {
    let err: PcError = OracleError::EvaluationFailed {
        x: 0,
        y: 1,
        reason: "timeout".into(),
    }
    .into();
    assert!(matches!(err, PcError::Oracle(_)));
    assert!(err.to_string().contains("timeout"));

    let err: PcError = InputError::SignificanceOutOfRange { value: 1.5 }.into();
    assert!(matches!(err, PcError::Input(_)));

    let err: PcError = ConsistencyError::SelfLoop { var: 2 }.into();
    assert!(matches!(err, PcError::Consistency(_)));

    let err: PcError = ConfigError::FileNotFound {
        path: "pc.toml".into(),
    }
    .into();
    assert!(matches!(err, PcError::Config(_)));
}

#[test]
fn error_codes_are_stable() {
    let cases: Vec<(PcError, &str)> = vec![
        (
            OracleError::NotANumber {
                x: 0,
                y: 1,
                conditioning: vec![],
            }
            .into(),
            error_code::ORACLE_ERROR,
        ),
        (
            InputError::VariableOutOfRange {
                var: 9,
                num_variables: 3,
            }
            .into(),
            error_code::INPUT_ERROR,
        ),
        (
            ConsistencyError::EdgeAbsent {
                pair: VarPair::new(0, 1),
            }
            .into(),
            error_code::CONSISTENCY_ERROR,
        ),
        (
            ConfigError::ParseError {
                path: "<string>".into(),
                message: "bad".into(),
            }
            .into(),
            error_code::CONFIG_ERROR,
        ),
    ];
    for (err, code) in cases {
        assert_eq!(err.error_code(), code, "{err}");
    }
}

#[test]
fn only_consistency_errors_are_fatal_defects() {
    let defect: PcError = ConsistencyError::MissingSeparationSet {
        pair: VarPair::new(0, 2),
    }
    .into();
    assert!(defect.is_fatal_defect());

    let caller: PcError = InputError::SignificanceOutOfRange { value: 0.0 }.into();
    assert!(!caller.is_fatal_defect());
    let oracle: PcError = OracleError::EvaluationFailed {
        x: 0,
        y: 1,
        reason: "io".into(),
    }
    .into();
    assert!(!oracle.is_fatal_defect());
}
