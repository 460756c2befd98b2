/// One point of the voltage time series.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    /// Elapsed simulation time (seconds)
    pub t_s: f64,
    /// Capacitor voltage (volts)
    pub volts: f64,
}

impl Sample {
    pub fn new(t_s: f64, volts: f64) -> Self {
        Self { t_s, volts }
    }
}
