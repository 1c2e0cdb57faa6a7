//! Unit conversions used when scaling bus signals.

/// Kilometres per hour to metres per second.
pub const KPH_TO_MS: f32 = 1.0 / 3.6;
/// Metres per second to kilometres per hour.
pub const MS_TO_KPH: f32 = 3.6;
/// Metres per second to miles per hour.
pub const MS_TO_MPH: f32 = 3.6 / 1.609_344;
/// Miles per hour to metres per second.
pub const MPH_TO_MS: f32 = 1.609_344 / 3.6;

/// Cargo allowance added to every curb weight, in kilograms.
pub const STD_CARGO_KG: f32 = 136.0;
