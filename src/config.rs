use chrono::NaiveDateTime;

#[cfg(debug_assertions)]
pub fn get_store_url() -> &'static str {
    "http://localhost:54321"  // Local store stack when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_store_url() -> &'static str {
    "https://qkwpyjfrrzgfbdjhsypa.supabase.co"
}

#[cfg(debug_assertions)]
pub fn get_store_anon_key() -> &'static str {
    "sb_publishable_local-dev-key"
}

#[cfg(not(debug_assertions))]
pub fn get_store_anon_key() -> &'static str {
    "sb_publishable_h2mJq7VdXbN0yGkPw8RtSQ_7cFzL3aM"
}

// Countdown target, interpreted in local time.
const LAUNCH_DATE: &str = "2026-01-01T00:00:00";

pub fn launch_date() -> NaiveDateTime {
    NaiveDateTime::parse_from_str(LAUNCH_DATE, "%Y-%m-%dT%H:%M:%S").unwrap()
}
