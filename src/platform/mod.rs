//! Platform abstraction layer
//!
//! The scene only asks two questions about input: is a control held, and was
//! it pressed this frame. Hosts implement [`InputSource`]; [`InputState`] is a
//! headless implementation that derives press edges from held states.

/// The fixed set of controls the scene understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    Left,
    Right,
    Fire,
    Confirm,
}

impl Control {
    pub const ALL: [Control; 4] = [Control::Left, Control::Right, Control::Fire, Control::Confirm];

    /// Default keyboard binding. Unmapped keys have no effect.
    pub fn from_key_name(key: &str) -> Option<Self> {
        match key.to_lowercase().as_str() {
            "left" | "arrowleft" => Some(Control::Left),
            "right" | "arrowright" => Some(Control::Right),
            "space" | " " => Some(Control::Fire),
            "enter" | "return" => Some(Control::Confirm),
            _ => None,
        }
    }

    #[inline]
    fn bit(self) -> u8 {
        1 << self as u8
    }
}

/// Input capability consumed by the scene
pub trait InputSource {
    /// Control is down this frame
    fn is_held(&self, control: Control) -> bool;
    /// Control went down this frame (fires once per press)
    fn is_triggered(&self, control: Control) -> bool;
}

/// Held-state snapshot for the current and previous frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    current: u8,
    previous: u8,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_held(&mut self, control: Control, held: bool) {
        if held {
            self.current |= control.bit();
        } else {
            self.current &= !control.bit();
        }
    }

    pub fn press(&mut self, control: Control) {
        self.set_held(control, true);
    }

    pub fn release(&mut self, control: Control) {
        self.set_held(control, false);
    }

    /// Apply a host key event; unmapped keys are ignored
    pub fn key_event(&mut self, key: &str, down: bool) {
        match Control::from_key_name(key) {
            Some(control) => self.set_held(control, down),
            None => log::trace!("ignoring unmapped key {key:?}"),
        }
    }

    /// Roll the current held set into the previous frame. Call once per
    /// frame after the scene has consumed input.
    pub fn end_frame(&mut self) {
        self.previous = self.current;
    }
}

impl InputSource for InputState {
    fn is_held(&self, control: Control) -> bool {
        self.current & control.bit() != 0
    }

    fn is_triggered(&self, control: Control) -> bool {
        self.is_held(control) && self.previous & control.bit() == 0
    }
}
