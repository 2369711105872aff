//! Scoring module - line-clear points and gravity speed tiers
//!
//! Scoring is a fixed table over the number of rows cleared by one
//! lock. "Speed" is a gravity divisor: the session attempts a descent
//! on every step whose counter is a multiple of it, so a lower value
//! means faster gravity.

/// Gravity divisor at the start of a session
pub const INITIAL_SPEED: u32 = 25;

/// (score threshold, speed) pairs, walked in order. The speed becomes
/// the tier of the last threshold the score strictly exceeds.
pub const SPEED_TIERS: [(u32, u32); 6] = [
    (0, 25),
    (10, 20),
    (100, 15),
    (250, 10),
    (500, 5),
    (1000, 1),
];

/// Points awarded for the rows cleared by a single lock
pub fn line_clear_points(rows: usize) -> u32 {
    match rows {
        1 => 1,
        2 => 3,
        3 => 7,
        4 => 15,
        _ => 0,
    }
}

/// Recompute the gravity divisor for a score
pub fn speed_for_score(score: u32) -> u32 {
    let mut speed = INITIAL_SPEED;
    for (threshold, tier) in SPEED_TIERS {
        if score > threshold {
            speed = tier;
        } else {
            break;
        }
    }
    speed
}
