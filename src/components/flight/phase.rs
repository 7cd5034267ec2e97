use serde::{Deserialize, Serialize};
use std::fmt;

/// Flight phase state machine.
///
/// Transitions only ever move forward through
/// `TakingOff -> Airborne -> Landing -> Landed`; `Landed` is terminal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FlightPhase {
    #[default]
    TakingOff,
    Airborne,
    Landing,
    Landed,
}

impl FlightPhase {
    /// Manual control is only honored while airborne.
    pub fn accepts_manual_input(self) -> bool {
        matches!(self, FlightPhase::Airborne)
    }

    /// Whether the pan offset is advanced along the heading this tick.
    pub fn integrates_position(self) -> bool {
        matches!(self, FlightPhase::TakingOff | FlightPhase::Airborne)
    }

    /// Trail samples are recorded for every phase except the terminal one.
    pub fn records_trail(self) -> bool {
        !self.is_terminal()
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, FlightPhase::Landed)
    }

    /// A transition is valid when it moves exactly one phase forward.
    pub fn can_transition_to(self, next: FlightPhase) -> bool {
        matches!(
            (self, next),
            (FlightPhase::TakingOff, FlightPhase::Airborne)
                | (FlightPhase::Airborne, FlightPhase::Landing)
                | (FlightPhase::Landing, FlightPhase::Landed)
        )
    }
}

impl fmt::Display for FlightPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FlightPhase::TakingOff => "Taking off",
            FlightPhase::Airborne => "Airborne",
            FlightPhase::Landing => "Landing",
            FlightPhase::Landed => "Landed",
        };
        write!(f, "{}", label)
    }
}
