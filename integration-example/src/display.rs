//! Rendering helpers for subscription records and decoded events

use chrono::DateTime;
use switchbot_api::WebhookSubscription;
use switchbot_events::WebhookEvent;

/// Render a subscription record on one line
pub fn format_subscription(record: &WebhookSubscription) -> String {
    format!(
        "{} enable={} deviceList={} created={} updated={}",
        record.url,
        record.enable,
        record.device_list,
        format_time(record.create_time),
        format_time(record.last_update_time)
    )
}

/// Render epoch milliseconds as UTC, falling back to the raw number
fn format_time(millis: i64) -> String {
    match DateTime::from_timestamp_millis(millis) {
        Some(time) => time.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        None => millis.to_string(),
    }
}

/// One-line description of a decoded event
pub fn describe_event(event: &WebhookEvent) -> String {
    match event {
        WebhookEvent::MotionSensor(event) => format!(
            "{} {}: motion {}",
            event.context.device_type,
            event.context.device_mac,
            event.context.detection_state.as_str()
        ),
        WebhookEvent::ContactSensor(event) => format!(
            "{} {}: door {} ({}), motion {}, ambient {}",
            event.context.device_type,
            event.context.device_mac,
            event.context.open_state,
            event.context.door_mode.as_str(),
            event.context.detection_state.as_str(),
            event.context.brightness.as_str()
        ),
        WebhookEvent::Meter(event) | WebhookEvent::MeterPlus(event) => format!(
            "{} {}: {} {}, humidity {}%",
            event.context.device_type,
            event.context.device_mac,
            event.context.temperature,
            event.context.scale.as_str(),
            event.context.humidity
        ),
        WebhookEvent::Lock(event) => format!(
            "{} {}: {}",
            event.context.device_type,
            event.context.device_mac,
            event.context.lock_state.as_str()
        ),
        WebhookEvent::IndoorCam(event) | WebhookEvent::PanTiltCam(event) => format!(
            "{} {}: motion {}",
            event.context.device_type,
            event.context.device_mac,
            event.context.detection_state.as_str()
        ),
        WebhookEvent::ColorBulb(event) => format!(
            "{} {}: {} brightness={} color={} temperature={}K",
            event.context.device_type,
            event.context.device_mac,
            event.context.power_state.as_str(),
            event.context.brightness,
            event.context.color,
            event.context.color_temperature
        ),
        WebhookEvent::StripLight(event) => format!(
            "{} {}: {} brightness={} color={}",
            event.context.device_type,
            event.context.device_mac,
            event.context.power_state.as_str(),
            event.context.brightness,
            event.context.color
        ),
        WebhookEvent::PlugMiniUs(event) | WebhookEvent::PlugMiniJp(event) => format!(
            "{} {}: {}",
            event.context.device_type,
            event.context.device_mac,
            event.context.power_state.as_str()
        ),
        WebhookEvent::Sweeper(event) | WebhookEvent::SweeperPlus(event) => format!(
            "{} {}: {} ({}), battery {}%",
            event.context.device_type,
            event.context.device_mac,
            event.context.working_status.as_str(),
            event.context.online_status.as_str(),
            event.context.battery
        ),
        WebhookEvent::Ceiling(event) | WebhookEvent::CeilingPro(event) => format!(
            "{} {}: {} brightness={} temperature={}K",
            event.context.device_type,
            event.context.device_mac,
            event.context.power_state.as_str(),
            event.context.brightness,
            event.context.color_temperature
        ),
        WebhookEvent::Keypad(event) | WebhookEvent::KeypadTouch(event) => format!(
            "{} {}: {} {} -> {}",
            event.context.device_type,
            event.context.device_mac,
            event.context.event_name,
            event.context.command_id,
            event.context.result
        ),
        WebhookEvent::Unrecognized(event) => format!(
            "unrecognized category {}",
            event.device_type.as_deref().unwrap_or("<none>")
        ),
    }
}
