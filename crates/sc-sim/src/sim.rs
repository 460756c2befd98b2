//! Simulation runner and result recording.

use crate::capacitor::{CapacitorModel, ChargeState};
use crate::error::SimResult;
use crate::events::{StopReason, below_threshold};
use crate::integrator::{ForwardEuler, Integrator};
use crate::model::TransientModel;
use crate::params::SimulationParameters;
use sc_core::Sample;
use tracing::{debug, info, warn};

/// Step-local state, exposed as it stood when the run stopped.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationState {
    /// Stored charge (C)
    pub q_c: f64,
    /// Voltage derived from charge (V); forced to zero on a threshold breach
    pub voltage_v: f64,
    /// Elapsed simulation time (s)
    pub t_s: f64,
}

/// Everything a run produces.
#[derive(Clone, Debug)]
pub struct SimOutcome {
    /// Time-ascending samples; the step that breaches the threshold is not included
    pub samples: Vec<Sample>,
    pub stop: StopReason,
    pub final_state: SimulationState,
    /// Integration steps performed, including a breaching step
    pub steps_taken: usize,
}

/// Run a fixed-step forward Euler simulation of the capacitor bank.
///
/// Stops after `floor(duration / dt)` steps or at the first step whose
/// voltage falls below the threshold, whichever comes first.
pub fn run(params: &SimulationParameters) -> SimResult<SimOutcome> {
    params.validate()?;

    let dt = params.dt_s;
    let total_steps = params.total_steps();
    let mut model = CapacitorModel::new(params.clone());
    let integrator = ForwardEuler;

    debug!(
        total_steps,
        dt_s = dt,
        solar_power_w = params.solar_power_w(),
        net_power_w = params.net_power_w(),
        v0 = params.initial_voltage_v(),
        "starting capacitor run"
    );

    let mut t = 0.0;
    let mut x: ChargeState = model.initial_state();
    let mut voltage = model.voltage(&x);
    let mut samples = Vec::new();
    let mut stop = StopReason::DurationElapsed;
    let mut steps_taken = 0;

    for _ in 0..total_steps {
        x = integrator.step(&mut model, t, &x, dt)?;
        steps_taken += 1;
        voltage = model.voltage(&x);

        if below_threshold(voltage, params.v_thresh_v) {
            warn!(
                t_s = t,
                volts = voltage,
                threshold_v = params.v_thresh_v,
                "voltage dropped below threshold"
            );
            stop = StopReason::ThresholdBreached {
                t_s: t,
                volts: voltage,
            };
            voltage = 0.0;
            break;
        }

        t += dt;
        samples.push(Sample::new(t, voltage));
    }

    info!(
        steps_taken,
        samples = samples.len(),
        breached = stop.is_breach(),
        "capacitor run finished"
    );

    Ok(SimOutcome {
        samples,
        stop,
        final_state: SimulationState {
            q_c: x.q_c,
            voltage_v: voltage,
            t_s: t,
        },
        steps_taken,
    })
}
