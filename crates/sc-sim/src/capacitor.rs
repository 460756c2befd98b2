//! Capacitor bank charged by a constant-power solar array.

use crate::error::SimResult;
use crate::model::TransientModel;
use crate::params::SimulationParameters;

/// Integrated state: stored charge in coulombs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChargeState {
    pub q_c: f64,
}

/// Constant solar input minus constant load, feeding a single capacitor.
///
/// dq/dt = solar_power - load_power, V = q / C. The series resistance is not
/// applied.
#[derive(Clone, Debug)]
pub struct CapacitorModel {
    params: SimulationParameters,
}

impl CapacitorModel {
    pub fn new(params: SimulationParameters) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &SimulationParameters {
        &self.params
    }

    /// Terminal voltage for a given charge.
    pub fn voltage(&self, x: &ChargeState) -> f64 {
        x.q_c / self.params.capacitance_f
    }
}

impl TransientModel for CapacitorModel {
    type State = ChargeState;

    fn initial_state(&self) -> ChargeState {
        ChargeState {
            q_c: self.params.q0_c,
        }
    }

    fn rhs(&mut self, _t: f64, _x: &ChargeState) -> SimResult<ChargeState> {
        Ok(ChargeState {
            q_c: self.params.net_power_w(),
        })
    }

    fn add(&self, a: &ChargeState, b: &ChargeState) -> ChargeState {
        ChargeState { q_c: a.q_c + b.q_c }
    }

    fn scale(&self, a: &ChargeState, scale: f64) -> ChargeState {
        ChargeState { q_c: a.q_c * scale }
    }
}
