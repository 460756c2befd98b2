//! Physical and numeric inputs for a run.

use crate::error::{SimError, SimResult};
use sc_core::{ensure_finite, ensure_positive};

/// Number of values a parameter set is built from, in command-line order.
pub const PARAM_COUNT: usize = 10;

/// Immutable inputs for one simulation run.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationParameters {
    /// Solar array area (m²)
    pub area_m2: f64,
    /// Solar array efficiency (fraction)
    pub efficiency: f64,
    /// Array open-circuit voltage (V)
    pub voc_v: f64,
    /// Capacitance (F)
    pub capacitance_f: f64,
    /// Equivalent series resistance (Ω). Carried through but not part of the
    /// voltage calculation.
    pub r_esr_ohm: f64,
    /// Initial stored charge (C)
    pub q0_c: f64,
    /// Constant load draw (W)
    pub load_w: f64,
    /// Minimum operating voltage (V)
    pub v_thresh_v: f64,
    /// Fixed time step (s)
    pub dt_s: f64,
    /// Total duration (s)
    pub duration_s: f64,
}

impl SimulationParameters {
    /// Build from values ordered `sa_m2 eff voc c_f r_esr q0_c p_on_w v_thresh dt_s dur_s`.
    pub fn from_args(v: &[f64; PARAM_COUNT]) -> Self {
        Self {
            area_m2: v[0],
            efficiency: v[1],
            voc_v: v[2],
            capacitance_f: v[3],
            r_esr_ohm: v[4],
            q0_c: v[5],
            load_w: v[6],
            v_thresh_v: v[7],
            dt_s: v[8],
            duration_s: v[9],
        }
    }

    /// Check preconditions before any arithmetic runs.
    ///
    /// All values must be finite; capacitance, time step and duration must be
    /// strictly positive, and the step count must fit in a `usize`.
    pub fn validate(&self) -> SimResult<()> {
        ensure_finite(self.area_m2, "area_m2")?;
        ensure_finite(self.efficiency, "efficiency")?;
        ensure_finite(self.voc_v, "voc_v")?;
        ensure_finite(self.r_esr_ohm, "r_esr_ohm")?;
        ensure_finite(self.q0_c, "q0_c")?;
        ensure_finite(self.load_w, "load_w")?;
        ensure_finite(self.v_thresh_v, "v_thresh_v")?;
        ensure_positive(self.capacitance_f, "capacitance_f")?;
        ensure_positive(self.dt_s, "dt_s")?;
        ensure_positive(self.duration_s, "duration_s")?;

        let steps = self.duration_s / self.dt_s;
        if !steps.is_finite() || steps >= usize::MAX as f64 {
            return Err(SimError::InvalidArg {
                what: "duration_s / dt_s exceeds the representable step count",
            });
        }
        Ok(())
    }

    /// Constant solar input: area × efficiency × open-circuit voltage.
    pub fn solar_power_w(&self) -> f64 {
        self.area_m2 * self.efficiency * self.voc_v
    }

    pub fn net_power_w(&self) -> f64 {
        self.solar_power_w() - self.load_w
    }

    /// Whole steps that fit in the duration; a trailing partial step is dropped.
    pub fn total_steps(&self) -> usize {
        (self.duration_s / self.dt_s).floor() as usize
    }

    pub fn initial_voltage_v(&self) -> f64 {
        self.q0_c / self.capacitance_f
    }
}
