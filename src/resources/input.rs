use bevy::prelude::*;
use std::collections::{HashMap, HashSet};

/// Logical controls the simulation reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    TurnLeft,
    TurnRight,
    Accelerate,
    Decelerate,
    ZoomIn,
    ZoomOut,
    PauseToggle,
}

impl Control {
    pub const ALL: [Control; 7] = [
        Control::TurnLeft,
        Control::TurnRight,
        Control::Accelerate,
        Control::Decelerate,
        Control::ZoomIn,
        Control::ZoomOut,
        Control::PauseToggle,
    ];

    /// Key identifier the control is bound to by default.
    pub fn id(self) -> &'static str {
        match self {
            Control::TurnLeft => "ArrowLeft",
            Control::TurnRight => "ArrowRight",
            Control::Accelerate => "ArrowUp",
            Control::Decelerate => "ArrowDown",
            Control::ZoomIn => "KeyW",
            Control::ZoomOut => "KeyS",
            Control::PauseToggle => "Space",
        }
    }
}

/// Set of currently held controls plus edge-triggered presses.
///
/// Holding a control is level-triggered: the flight model reads it on every
/// tick. The pause toggle is edge-triggered and consumed by the render loop.
#[derive(Resource, Debug, Default, Clone)]
pub struct InputState {
    pressed: HashSet<Control>,
    just_pressed: HashSet<Control>,
}

impl InputState {
    /// Returns `true` when the control was not already held.
    pub fn press(&mut self, control: Control) -> bool {
        let newly = self.pressed.insert(control);
        if newly {
            self.just_pressed.insert(control);
        }
        newly
    }

    pub fn release(&mut self, control: Control) {
        self.pressed.remove(&control);
    }

    pub fn is_pressed(&self, control: Control) -> bool {
        self.pressed.contains(&control)
    }

    /// Consume a pending edge for `control`.
    pub fn take_just_pressed(&mut self, control: Control) -> bool {
        self.just_pressed.remove(&control)
    }

    pub fn clear(&mut self) {
        self.pressed.clear();
        self.just_pressed.clear();
    }

    pub fn snapshot(&self) -> InputSnapshot {
        InputSnapshot {
            turn_left: self.is_pressed(Control::TurnLeft),
            turn_right: self.is_pressed(Control::TurnRight),
            accelerate: self.is_pressed(Control::Accelerate),
            decelerate: self.is_pressed(Control::Decelerate),
            zoom_in: self.is_pressed(Control::ZoomIn),
            zoom_out: self.is_pressed(Control::ZoomOut),
        }
    }
}

/// Controls held during one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    pub turn_left: bool,
    pub turn_right: bool,
    pub accelerate: bool,
    pub decelerate: bool,
    pub zoom_in: bool,
    pub zoom_out: bool,
}

/// Keyboard keys mapped onto controls. Several keys may drive one control.
#[derive(Resource, Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyCode, Control>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::empty()
            .with(KeyCode::ArrowLeft, Control::TurnLeft)
            .with(KeyCode::ArrowRight, Control::TurnRight)
            .with(KeyCode::ArrowUp, Control::Accelerate)
            .with(KeyCode::ArrowDown, Control::Decelerate)
            .with(KeyCode::KeyW, Control::ZoomIn)
            .with(KeyCode::KeyS, Control::ZoomOut)
            .with(KeyCode::Space, Control::PauseToggle)
    }
}

impl KeyBindings {
    pub fn empty() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    pub fn with(mut self, key: KeyCode, control: Control) -> Self {
        self.bindings.insert(key, control);
        self
    }

    pub fn control_for(&self, key: KeyCode) -> Option<Control> {
        self.bindings.get(&key).copied()
    }
}
