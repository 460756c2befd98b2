//! Integration test: nominal and collapsing capacitor runs.
//!
//! Bank: 1 m² array at 20% and 5 V open-circuit, 10 mF capacitor, 50 mC
//! initial charge, 1 V threshold, 1 s steps for 5 s.

use sc_core::{Tolerances, nearly_equal};
use sc_sim::{SimulationParameters, StopReason, run};

fn bank(load_w: f64) -> SimulationParameters {
    SimulationParameters::from_args(&[1.0, 0.2, 5.0, 0.01, 0.1, 0.05, load_w, 1.0, 1.0, 5.0])
}

#[test]
fn positive_net_power_charges_every_step() {
    let out = run(&bank(0.5)).expect("nominal run");

    assert_eq!(out.stop, StopReason::DurationElapsed);
    assert_eq!(out.samples.len(), 5);

    let tol = Tolerances {
        abs: 1e-9,
        rel: 1e-9,
    };
    for (i, s) in out.samples.iter().enumerate() {
        let step = (i + 1) as f64;
        assert!(nearly_equal(s.t_s, step, tol), "t at step {step}: {}", s.t_s);
        assert!(
            nearly_equal(s.volts, 5.0 + 50.0 * step, tol),
            "V at step {step}: {}",
            s.volts
        );
    }
    assert!(nearly_equal(out.samples[0].volts, 55.0, tol));
}

#[test]
fn heavy_load_collapses_on_first_step() {
    let out = run(&bank(10.0)).expect("collapsing run");

    assert!(out.samples.is_empty(), "breaching sample must not be kept");
    match out.stop {
        StopReason::ThresholdBreached { t_s, volts } => {
            assert_eq!(t_s, 0.0);
            assert!((volts - (-895.0)).abs() < 1e-6);
        }
        other => panic!("expected threshold breach, got {other:?}"),
    }
}

#[test]
fn collapse_partway_keeps_samples_above_threshold() {
    // 0.5 C on 10 mF is 50 V; a 0.1 W deficit drains 10 V per step.
    let p = SimulationParameters {
        q0_c: 0.5,
        load_w: 1.1,
        duration_s: 100.0,
        ..bank(0.5)
    };
    let out = run(&p).unwrap();

    // 40, 30, 20, 10 are kept; the fifth step lands at ~0 V and stops the run.
    assert_eq!(out.samples.len(), 4);
    assert_eq!(out.steps_taken, 5);
    assert!(out.samples.iter().all(|s| s.volts >= p.v_thresh_v));
    match out.stop {
        StopReason::ThresholdBreached { t_s, .. } => assert!((t_s - 4.0).abs() < 1e-9),
        other => panic!("expected threshold breach, got {other:?}"),
    }
}

#[test]
fn partial_final_step_is_dropped() {
    let p = SimulationParameters {
        dt_s: 1.5,
        duration_s: 4.0,
        ..bank(0.5)
    };
    let out = run(&p).unwrap();
    assert_eq!(out.samples.len(), 2);
    assert!((out.samples[1].t_s - 3.0).abs() < 1e-12);
}

#[test]
fn duration_shorter_than_step_yields_no_samples() {
    let p = SimulationParameters {
        dt_s: 2.0,
        duration_s: 1.0,
        ..bank(0.5)
    };
    let out = run(&p).unwrap();
    assert!(out.samples.is_empty());
    assert_eq!(out.stop, StopReason::DurationElapsed);
    assert_eq!(out.final_state.voltage_v, p.initial_voltage_v());
}

#[test]
fn threshold_is_checked_after_the_step_not_before() {
    // Initial voltage is below threshold, but the first step lifts it above.
    let p = SimulationParameters {
        q0_c: 0.0,
        v_thresh_v: 10.0,
        ..bank(0.5)
    };
    let out = run(&p).unwrap();
    assert_eq!(out.stop, StopReason::DurationElapsed);
    assert_eq!(out.samples.len(), 5);
}
