//! Snapshot tests for the frames one decode/encode cycle puts on the bus.
//!
//! Frames are rendered as `NAME bus=N SIGNAL=value ...` so a change in
//! order, bus or any signal value shows up as a one-line diff.

use can_chrysler_protocol::signals::{
    brake_1, dashboard, gear, lkas_command, lkas_hud, wheel_buttons,
};
use can_chrysler_protocol::{
    CAMERA_CHECKS, CarStateDecoder, ChryslerFrame, ChryslerVariant, CommandEncoder,
    EncoderConfig, EncoderInput, MessageId, POWERTRAIN_CHECKS,
};
use carport_can_common::{MessageSample, SignalFrame};
use carport_types::{ActuatorIntent, VisualAlert};

fn render(frames: &[ChryslerFrame]) -> Vec<String> {
    frames
        .iter()
        .map(|frame| {
            let signals: Vec<String> = frame
                .signals
                .iter()
                .map(|(name, value)| format!("{name}={value}"))
                .collect();
            format!("{} bus={} {}", frame.id, frame.bus, signals.join(" "))
        })
        .collect()
}

fn bus_frame(lkas_counter: f32, wheel_counter: f32) -> SignalFrame<MessageId> {
    let mut frame = SignalFrame::new(0);
    for check in POWERTRAIN_CHECKS.iter().chain(CAMERA_CHECKS.iter()) {
        frame.insert(check.id, MessageSample::new(0));
    }
    frame.insert(
        MessageId::Brake1,
        MessageSample::new(0).with_signal(brake_1::VEHICLE_SPEED_KPH, 72.0),
    );
    frame.insert(
        MessageId::Dashboard,
        MessageSample::new(0).with_signal(dashboard::ACC_SPEED_CONFIG_KPH, 100.0),
    );
    frame.insert(MessageId::Gear, MessageSample::new(0).with_signal(gear::PRNDL, 4.0));
    frame.insert(
        MessageId::LkasCommand,
        MessageSample::new(0).with_signal(lkas_command::COUNTER, lkas_counter),
    );
    frame.insert(
        MessageId::LkasHud,
        MessageSample::new(0).with_signal(lkas_hud::CAR_MODEL, 3.0),
    );
    frame.insert(
        MessageId::WheelButtons,
        MessageSample::new(0).with_signal(wheel_buttons::COUNTER, wheel_counter),
    );
    frame
}

#[test]
fn snapshot_first_engaged_cycle() {
    let mut decoder = CarStateDecoder::new(10.0);
    let mut encoder = CommandEncoder::new(
        ChryslerVariant::Pacifica2020.params(),
        EncoderConfig::default(),
    );

    let state = decoder.decode(&bus_frame(5.0, 2.0));
    assert!(state.can_valid);

    let input = EncoderInput::new(&state, decoder.car_state())
        .enabled(true)
        .with_actuators(ActuatorIntent {
            steer: 0.5,
            target_speed: 30.0,
        });
    let frames = encoder.encode(&input);

    insta::assert_debug_snapshot!(render(&frames), @r#"
    [
        "WHEEL_BUTTONS bus=0 ACC_SPEED_INC=1 COUNTER=3",
        "LKAS_HUD bus=0 CAR_MODEL=3 LKAS_ALERTS=1 LKAS_ICON_COLOR=2 LKAS_LANE_LINES=6",
        "LKAS_COMMAND bus=0 COUNTER=5 LKAS_HIGH_TORQUE=1 LKAS_STEERING_TORQUE=3",
    ]
    "#);
}

#[test]
fn snapshot_cancel_with_steer_required() {
    let mut decoder = CarStateDecoder::new(10.0);
    let mut encoder = CommandEncoder::new(
        ChryslerVariant::JeepCherokee2019.params(),
        EncoderConfig::default(),
    );

    let state = decoder.decode(&bus_frame(15.0, 15.0));
    let input = EncoderInput::new(&state, decoder.car_state())
        .enabled(true)
        .with_cancel(true)
        .with_alert(VisualAlert::SteerRequired);
    let frames = encoder.encode(&input);

    insta::assert_debug_snapshot!(render(&frames), @r#"
    [
        "WHEEL_BUTTONS bus=0 ACC_CANCEL=1 COUNTER=0",
        "LKAS_HUD bus=0 CAR_MODEL=0 LKAS_ALERTS=3 LKAS_ICON_COLOR=0 LKAS_LANE_LINES=0",
        "LKAS_COMMAND bus=0 COUNTER=15 LKAS_HIGH_TORQUE=1 LKAS_STEERING_TORQUE=0",
    ]
    "#);
}
