use std::cell::Cell;
use std::rc::Rc;

use record_rail::mapping::{convert, lazy_convert, FieldValues};
use record_rail::stage::Stage;
use record_rail::types::{BuildError, StageError};

#[derive(Debug, Clone, PartialEq)]
struct Pair {
    left: i64,
    right: i64,
}

fn pair_factory(values: &FieldValues) -> Result<Pair, BuildError> {
    Ok(Pair {
        left: values.required("left")?,
        right: values.required("right")?,
    })
}

#[test]
fn test_convert_runs_the_build_eagerly() {
    let pair = convert(pair_factory, true, |b| {
        b.bind("left", Stage::just(1_i64))?;
        b.bind("right", Stage::lazy(|| 2_i64))?;
        Ok(())
    })
    .unwrap();

    assert_eq!(pair, Pair { left: 1, right: 2 });
}

#[test]
fn test_convert_surfaces_binding_block_errors() {
    let error = convert(pair_factory, true, |b| {
        b.bind("left", Stage::just(1_i64))?;
        b.bind("left", Stage::just(3_i64))?;
        Ok(())
    })
    .unwrap_err();

    assert!(matches!(error, BuildError::DuplicateBinding { field: "left" }));
}

#[test]
fn test_lazy_convert_defers_everything() {
    let runs = Rc::new(Cell::new(0));
    let counter = runs.clone();

    let staged = lazy_convert(pair_factory, false, move |b| {
        let inner = counter.clone();
        b.bind(
            "left",
            Stage::lazy(move || {
                inner.set(inner.get() + 1);
                10_i64
            }),
        )?;
        b.bind("right", Stage::just(20_i64))?;
        Ok(())
    });

    assert!(!staged.is_settled());
    assert_eq!(runs.get(), 0);

    assert_eq!(
        staged.calculate().unwrap_success(),
        Pair {
            left: 10,
            right: 20,
        }
    );
    assert_eq!(runs.get(), 1);

    // Memoized like any other stage.
    let _ = staged.calculate().unwrap_success();
    assert_eq!(runs.get(), 1);
}

#[test]
fn test_lazy_convert_keeps_validation_classification() {
    let staged = lazy_convert(pair_factory, false, |b| {
        b.bind(
            "left",
            Stage::try_lazy(|| Err::<i64, _>(StageError::invalid("too small"))),
        )?;
        b.bind("right", Stage::just(20_i64))?;
        Ok(())
    });

    let error = staged.calculate().unwrap_failure();
    assert!(error.is_validation());
    let invalid = error.into_invalid().unwrap();
    assert_eq!(invalid.reasons().len(), 1);
    assert_eq!(invalid.reasons()[0].message(), "too small");
}

#[test]
fn test_lazy_convert_nests_inside_an_outer_build() {
    let inner = lazy_convert(pair_factory, false, |b| {
        b.bind("left", Stage::just(3_i64))?;
        b.bind("right", Stage::just(4_i64))?;
        Ok(())
    });

    let total = convert(
        |values: &FieldValues| -> Result<i64, BuildError> {
            let pair: Pair = values.required("pair")?;
            Ok(pair.left + pair.right)
        },
        false,
        |b| {
            b.bind("pair", inner)?;
            Ok(())
        },
    )
    .unwrap();

    assert_eq!(total, 7);
}
