//! Payload selection from the selector switches, sampled once at startup.

/// Script names, indexed by selector switch.
pub const PAYLOADS: [&str; 4] = ["payload.txt", "payload2.txt", "payload3.txt", "payload4.txt"];

/// The payload for the first active switch, or the first payload if none is
/// active. Switches past the fourth are ignored.
pub fn select_payload(switches: &[bool]) -> &'static str {
    let index = switches
        .iter()
        .take(PAYLOADS.len())
        .position(|&active| active)
        .unwrap_or(0);
    PAYLOADS[index]
}
