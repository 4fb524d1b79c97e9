//! Disease parameters in tick units.

use epi_core::EpidemicConfig;

/// Per-tick probability of dying for an agent past incubation, such that
/// the chance of dying at some point during `symptomatic_ticks` equals
/// `lethality`:
///
/// ```text
/// 1 − (1 − p)^ticks = L   ⇒   p = 1 − (1 − L)^(1 / ticks)
/// ```
///
/// With zero symptomatic ticks the whole lethality applies at once.
pub fn death_risk_per_tick(lethality: f64, symptomatic_ticks: u64) -> f64 {
    let lethality = lethality.clamp(0.0, 1.0);
    if symptomatic_ticks == 0 {
        return lethality;
    }
    1.0 - (1.0 - lethality).powf(1.0 / symptomatic_ticks as f64)
}

/// Everything the infection phase needs, derived once from the config.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DiseaseParams {
    /// Half-side of the square contact neighborhood.
    pub infection_radius:  i32,
    /// Transmission chance per susceptible neighbor per tick.
    pub infection_risk:    f64,
    pub recovery_ticks:    u32,
    pub incubation_ticks:  u32,
    pub death_risk:        f64,
    /// Recovered agents stay immune; otherwise they become susceptible.
    pub acquired_immunity: bool,
}

impl DiseaseParams {
    pub fn from_config(config: &EpidemicConfig) -> Self {
        let to_u32 = |ticks: u64| u32::try_from(ticks).unwrap_or(u32::MAX);
        Self {
            infection_radius:  config.infection_radius,
            infection_risk:    config.infection_risk,
            recovery_ticks:    to_u32(config.recovery_ticks()),
            incubation_ticks:  to_u32(config.incubation_ticks()),
            death_risk:        death_risk_per_tick(config.lethality, config.symptomatic_ticks()),
            acquired_immunity: config.acquired_immunity,
        }
    }
}
