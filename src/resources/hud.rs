use bevy::prelude::*;
use crossbeam_channel::{unbounded, Receiver, Sender, TryRecvError};
use std::fmt;

use crate::components::{FlightPhase, FlightSnapshot};
use crate::utils::constants::{GROUND_ZOOM, TAKEOFF_ZOOM_CAP as CRUISE_ZOOM};
use crate::utils::rad_to_deg;

/// Map units per tick to knots.
pub const KNOTS_PER_SPEED_UNIT: f64 = 400_000.0;
pub const CRUISE_ALTITUDE_FT: f64 = 10_000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompassPoint {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

impl CompassPoint {
    const CLOCKWISE: [CompassPoint; 8] = [
        CompassPoint::N,
        CompassPoint::NE,
        CompassPoint::E,
        CompassPoint::SE,
        CompassPoint::S,
        CompassPoint::SW,
        CompassPoint::W,
        CompassPoint::NW,
    ];

    /// Nearest point for a clockwise bearing in degrees.
    pub fn from_bearing(bearing: f64) -> Self {
        let sector = ((bearing.rem_euclid(360.0) + 22.5) / 45.0).floor() as usize % 8;
        Self::CLOCKWISE[sector]
    }
}

impl fmt::Display for CompassPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Display quantities derived from one snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HudReadout {
    pub knots: f64,
    pub altitude_ft: f64,
    /// Clockwise bearing in `[0, 360)`.
    pub bearing: f64,
    pub compass: CompassPoint,
    pub phase: FlightPhase,
}

impl HudReadout {
    pub fn from_snapshot(snapshot: &FlightSnapshot) -> Self {
        // heading grows counter-clockwise
        let bearing = (360.0 - rad_to_deg(snapshot.heading)).rem_euclid(360.0);
        let altitude = (snapshot.zoom - GROUND_ZOOM) / (CRUISE_ZOOM - GROUND_ZOOM);

        Self {
            knots: snapshot.speed * KNOTS_PER_SPEED_UNIT,
            altitude_ft: (altitude * CRUISE_ALTITUDE_FT).max(0.0),
            bearing,
            compass: CompassPoint::from_bearing(bearing),
            phase: snapshot.phase,
        }
    }
}

impl fmt::Display for HudReadout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\nSpeed: {:.0} kts\nAltitude: {:.0} ft\nHeading: {:.0}° {}",
            self.phase,
            self.knots,
            self.altitude_ft,
            self.bearing.round() % 360.0,
            self.compass
        )
    }
}

/// Snapshot channel from the simulation to the HUD.
///
/// The sender side is dropped on teardown; the HUD keeps the last value it
/// drained.
#[derive(Resource)]
pub struct SnapshotFeed {
    sender: Option<Sender<FlightSnapshot>>,
    receiver: Receiver<FlightSnapshot>,
    latest: Option<FlightSnapshot>,
}

impl Default for SnapshotFeed {
    fn default() -> Self {
        let (sender, receiver) = unbounded();
        Self {
            sender: Some(sender),
            receiver,
            latest: None,
        }
    }
}

impl SnapshotFeed {
    /// Returns `false` once the feed is closed.
    pub fn publish(&self, snapshot: FlightSnapshot) -> bool {
        match &self.sender {
            Some(sender) => sender.send(snapshot).is_ok(),
            None => false,
        }
    }

    /// Drain everything queued and keep the newest snapshot.
    pub fn drain_latest(&mut self) -> Option<FlightSnapshot> {
        loop {
            match self.receiver.try_recv() {
                Ok(snapshot) => self.latest = Some(snapshot),
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        self.latest
    }

    pub fn latest(&self) -> Option<FlightSnapshot> {
        self.latest
    }

    pub fn close(&mut self) {
        self.sender = None;
    }

    pub fn is_closed(&self) -> bool {
        self.sender.is_none()
    }
}
