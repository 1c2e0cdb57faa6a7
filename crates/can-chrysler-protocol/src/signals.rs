//! Signal names, grouped by message

pub mod brake_1 {
    pub const VEHICLE_SPEED_KPH: &str = "VEHICLE_SPEED_KPH";
    pub const BRAKE_VAL_TOTAL: &str = "BRAKE_VAL_TOTAL";
    pub const STANDSTILL: &str = "STANDSTILL";
}

pub mod brake_2 {
    pub const BRAKE_PEDAL: &str = "BRAKE_PEDAL";
    pub const BRAKE_LIGHT: &str = "BRAKE_LIGHT";
}

pub mod eps_status {
    pub const COUNTER: &str = "COUNTER";
    pub const TORQUE_DRIVER: &str = "TORQUE_DRIVER";
    pub const TORQUE_MOTOR: &str = "TORQUE_MOTOR";
    pub const LKAS_STEER_FAULT: &str = "LKAS_STEER_FAULT";
    pub const APA_STEER_FAULT: &str = "APA_STEER_FAULT";
    pub const APA_ACTIVE: &str = "APA_ACTIVE";
    pub const DRIVER_TAKEOVER: &str = "DRIVER_TAKEOVER";
}

pub mod wheel_speeds {
    pub const WHEEL_SPEED_FL: &str = "WHEEL_SPEED_FL";
    pub const WHEEL_SPEED_FR: &str = "WHEEL_SPEED_FR";
    pub const WHEEL_SPEED_RL: &str = "WHEEL_SPEED_RL";
    pub const WHEEL_SPEED_RR: &str = "WHEEL_SPEED_RR";
}

pub mod steering {
    pub const STEER_ANGLE: &str = "STEER_ANGLE";
    pub const STEERING_RATE: &str = "STEERING_RATE";
}

pub mod acc_2 {
    pub const ACC_ENABLED: &str = "ACC_ENABLED";
    pub const ACC_AVAILABLE: &str = "ACC_AVAILABLE";
    pub const ACC_STOP: &str = "ACC_STOP";
}

pub mod gear {
    pub const PRNDL: &str = "PRNDL";
}

pub mod accel_gas_22f {
    pub const GAS_PEDAL_POS: &str = "GAS_PEDAL_POS";
}

pub mod dashboard {
    pub const ACC_SPEED_CONFIG_KPH: &str = "ACC_SPEED_CONFIG_KPH";
    pub const CRUISE_STATE: &str = "CRUISE_STATE";
    pub const LEAD_DIST: &str = "LEAD_DIST";
}

pub mod steering_levers {
    pub const TURN_SIGNALS: &str = "TURN_SIGNALS";
    pub const HIGH_BEAM_FLASH: &str = "HIGH_BEAM_FLASH";
}

pub mod seatbelt_status {
    pub const SEATBELT_DRIVER_UNLATCHED: &str = "SEATBELT_DRIVER_UNLATCHED";
}

pub mod doors {
    pub const DOOR_OPEN_FL: &str = "DOOR_OPEN_FL";
    pub const DOOR_OPEN_FR: &str = "DOOR_OPEN_FR";
    pub const DOOR_OPEN_RL: &str = "DOOR_OPEN_RL";
    pub const DOOR_OPEN_RR: &str = "DOOR_OPEN_RR";
    pub const ALL: [&str; 4] = [DOOR_OPEN_FL, DOOR_OPEN_FR, DOOR_OPEN_RL, DOOR_OPEN_RR];
}

pub mod traction_button {
    pub const TRACTION_OFF: &str = "TRACTION_OFF";
}

pub mod blind_spot_warnings {
    pub const BLIND_SPOT_LEFT: &str = "BLIND_SPOT_LEFT";
    pub const BLIND_SPOT_RIGHT: &str = "BLIND_SPOT_RIGHT";
}

pub mod wheel_buttons {
    pub const COUNTER: &str = "COUNTER";
    pub const ACC_CANCEL: &str = "ACC_CANCEL";
    pub const ACC_RESUME: &str = "ACC_RESUME";
    pub const ACC_SPEED_INC: &str = "ACC_SPEED_INC";
    pub const ACC_SPEED_DEC: &str = "ACC_SPEED_DEC";
    pub const ACC_FOLLOW_INC: &str = "ACC_FOLLOW_INC";
    pub const ACC_FOLLOW_DEC: &str = "ACC_FOLLOW_DEC";
}

pub mod auto_park_request {
    pub const APA_ACTIVE: &str = "APA_ACTIVE";
}

pub mod hybrid_ecu {
    pub const VEH_ON: &str = "VEH_ON";
}

pub mod lkas_command {
    pub const LKAS_STEERING_TORQUE: &str = "LKAS_STEERING_TORQUE";
    pub const LKAS_HIGH_TORQUE: &str = "LKAS_HIGH_TORQUE";
    pub const COUNTER: &str = "COUNTER";
}

pub mod lkas_heartbit {
    pub const LKAS_BUTTON_LED: &str = "LKAS_BUTTON_LED";
}

pub mod lkas_hud {
    pub const LKAS_ICON_COLOR: &str = "LKAS_ICON_COLOR";
    pub const CAR_MODEL: &str = "CAR_MODEL";
    pub const LKAS_LANE_LINES: &str = "LKAS_LANE_LINES";
    pub const LKAS_ALERTS: &str = "LKAS_ALERTS";
}
