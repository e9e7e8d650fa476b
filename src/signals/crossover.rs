//! Crossover detection over consecutive signal states

use crate::signals::state::SignalState;

/// A crossing event between two adjacent positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Crossing {
    Bullish,
    Bearish,
}

/// Classify the transition from `previous` to `current`.
///
/// Only a full swing between the two directional states counts as a
/// crossing (state-code delta of +2 or -2). Entering or leaving `Neutral`,
/// including the warm-up edge where the long mean first becomes defined,
/// is not a crossing.
pub fn detect_crossing(previous: SignalState, current: SignalState) -> Option<Crossing> {
    match current.code() - previous.code() {
        2 => Some(Crossing::Bullish),
        -2 => Some(Crossing::Bearish),
        _ => None,
    }
}

/// Count bullish and bearish crossings over a state series.
///
/// Position 0 has no predecessor and never records a transition, so at
/// most `len - 1` crossings can be reported.
pub fn count_crossings(states: &[SignalState]) -> (usize, usize) {
    let mut buys = 0;
    let mut sells = 0;
    for pair in states.windows(2) {
        match detect_crossing(pair[0], pair[1]) {
            Some(Crossing::Bullish) => buys += 1,
            Some(Crossing::Bearish) => sells += 1,
            None => {}
        }
    }
    (buys, sells)
}
