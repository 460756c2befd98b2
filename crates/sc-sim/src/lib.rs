//! Transient simulation of a solar-charged capacitor bank.
//!
//! Provides:
//! - Simulation parameters with precondition checks
//! - Capacitor charge model driven by constant solar input and constant load
//! - Fixed-step forward Euler integrator
//! - Run loop that stops on duration or on voltage collapse

pub mod capacitor;
pub mod error;
pub mod integrator;
pub mod model;
pub mod params;
pub mod sim;

// Internal modules
mod events;

// Re-exports for public API
pub use capacitor::{CapacitorModel, ChargeState};
pub use error::{SimError, SimResult};
pub use events::StopReason;
pub use integrator::{ForwardEuler, Integrator};
pub use model::TransientModel;
pub use params::SimulationParameters;
pub use sim::{SimOutcome, SimulationState, run};
