use contracts::enums::RideStatus;
use leptos::prelude::*;
use thaw::{Badge, BadgeAppearance, BadgeColor};

/// Green/red badge for boolean flags
pub fn flag_badge(flag: bool, on: &'static str, off: &'static str) -> AnyView {
    let (color, label) = if flag {
        (BadgeColor::Success, on)
    } else {
        (BadgeColor::Danger, off)
    };
    view! {
        <Badge appearance=BadgeAppearance::Tint color=color>{label}</Badge>
    }
    .into_any()
}

pub fn ride_status_color(status: RideStatus) -> BadgeColor {
    match status {
        RideStatus::Requested => BadgeColor::Informative,
        RideStatus::Assigned => BadgeColor::Brand,
        RideStatus::Ongoing => BadgeColor::Warning,
        RideStatus::Completed => BadgeColor::Success,
        RideStatus::Cancelled => BadgeColor::Danger,
    }
}

pub fn ride_status_badge(status: RideStatus) -> AnyView {
    view! {
        <Badge appearance=BadgeAppearance::Tint color=ride_status_color(status)>
            {status.display_name()}
        </Badge>
    }
    .into_any()
}
