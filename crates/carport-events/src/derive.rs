//! Condition derivation
//!
//! [`derive`] looks at one snapshot; [`derive_transitions`] compares two
//! consecutive snapshots for edge-triggered conditions. Both are total and
//! pure.

use carport_types::{GearShifter, VariantParams, VehicleState};

use crate::{Condition, ConditionSet};

/// Highest speed (m/s) at which control may stay engaged.
pub const MAX_CTRL_SPEED: f32 = 40.0;

/// A gas press below this speed (m/s) does not count as a pedal override.
pub const GAS_RESUME_SPEED: f32 = 2.0;

/// Level conditions of one snapshot.
pub fn derive(state: &VehicleState, params: &VariantParams) -> ConditionSet {
    let mut set = ConditionSet::new();

    set.set(Condition::BelowSteerSpeed, state.v_ego < params.min_steer_speed);
    set.set(Condition::SeatbeltNotLatched, state.seatbelt_unlatched);
    set.set(Condition::DoorOpen, state.door_open);
    set.set(
        Condition::ParkOrReverseGear,
        state.gear_shifter.is_park_or_reverse(),
    );
    set.set(Condition::SteerFault, state.steer_fault);
    set.set(Condition::ParkAssistFault, state.park_assist_fault);

    set.set(Condition::WrongGear, !state.gear_shifter.is_forward());
    set.set(
        Condition::ReverseGear,
        state.gear_shifter == GearShifter::Reverse,
    );
    set.set(Condition::EspDisabled, state.esp_disabled);
    set.set(Condition::GasPressed, state.gas_pressed);
    set.set(Condition::WrongCruiseMode, state.cruise_state.non_adaptive);
    set.set(Condition::CruiseUnavailable, !state.cruise_state.available);
    set.set(Condition::CanInvalid, !state.can_valid);
    set.set(Condition::SpeedTooHigh, state.v_ego > MAX_CTRL_SPEED);

    set
}

/// Edge conditions between the previous and the current snapshot.
pub fn derive_transitions(prev: &VehicleState, current: &VehicleState) -> ConditionSet {
    let mut set = ConditionSet::new();

    let gas_edge =
        current.gas_pressed && !prev.gas_pressed && current.v_ego > GAS_RESUME_SPEED;
    let brake = current.brake_pressed && (!prev.brake_pressed || !current.standstill);
    set.set(Condition::PedalPressed, gas_edge || brake);

    if !current.cruise_state.enabled {
        set.insert(Condition::PcmDisable);
    } else if !prev.cruise_state.enabled {
        set.insert(Condition::PcmEnable);
    }

    set
}
