//! Embedded badge assets, one SVG per status.
use canary_core::BadgeStatus;

const ERRORS_SVG: &str = include_str!("../assets/badges/errors.svg");
const INVALID_SVG: &str = include_str!("../assets/badges/invalid.svg");
const SUCCESS_SVG: &str = include_str!("../assets/badges/success.svg");
const NOT_FOUND_SVG: &str = include_str!("../assets/badges/not_found.svg");

pub fn asset(status: BadgeStatus) -> &'static str {
    match status {
        BadgeStatus::Errors => ERRORS_SVG,
        BadgeStatus::Invalid => INVALID_SVG,
        BadgeStatus::Success => SUCCESS_SVG,
        BadgeStatus::NotFound => NOT_FOUND_SVG,
    }
}
