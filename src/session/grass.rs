//! Grass screen: the three validity flags and the countdown they gate.

use tracing::{debug, trace};

use super::content::{DONT_CHEAT, HOLD_THE_GRASS, LOOK_AT_GRASS, RELAX, TOUCH_THE_GRASS};
use super::DeviceProfile;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrassMessage {
    LookAtGrass,
    DontCheat,
    Relax,
    TouchTheGrass,
    HoldTheGrass,
}

impl GrassMessage {
    pub fn text(self) -> &'static str {
        match self {
            GrassMessage::LookAtGrass => LOOK_AT_GRASS,
            GrassMessage::DontCheat => DONT_CHEAT,
            GrassMessage::Relax => RELAX,
            GrassMessage::TouchTheGrass => TOUCH_THE_GRASS,
            GrassMessage::HoldTheGrass => HOLD_THE_GRASS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownOutcome {
    /// Some condition failed; the countdown did not move.
    Held,
    Decremented,
    /// The countdown just reached zero.
    Expired,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grass {
    profile: DeviceProfile,
    remaining: u32,
    focused: bool,
    touching: bool,
    moving_too_much: bool,
    moves_in_window: u32,
    message: GrassMessage,
}

impl Grass {
    pub fn new(profile: DeviceProfile, seconds: u32, focused: bool) -> Self {
        Self {
            profile,
            remaining: seconds,
            focused,
            touching: false,
            moving_too_much: false,
            moves_in_window: 0,
            message: GrassMessage::LookAtGrass,
        }
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn message(&self) -> GrassMessage {
        self.message
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn is_touching(&self) -> bool {
        self.touching
    }

    pub fn is_moving_too_much(&self) -> bool {
        self.moving_too_much
    }

    pub fn is_valid(&self) -> bool {
        self.focused && !self.moving_too_much && self.touching
    }

    pub fn focus_changed(&mut self, focused: bool) {
        self.focused = focused;
        self.message = if focused {
            GrassMessage::LookAtGrass
        } else {
            GrassMessage::DontCheat
        };
    }

    pub fn pointer_moved(&mut self, threshold: u32) {
        self.moves_in_window = self.moves_in_window.saturating_add(1);
        if self.moves_in_window > threshold {
            if !self.moving_too_much {
                debug!(moves = self.moves_in_window, "pointer moving too much");
            }
            self.moving_too_much = true;
            self.message = GrassMessage::Relax;
        }
    }

    /// The movement window elapsed: start counting again.
    pub fn window_elapsed(&mut self) {
        self.moves_in_window = 0;
        self.moving_too_much = false;
    }

    /// Hover over the grass region. Only a pointer device reports this.
    pub fn pointer_over(&mut self, over: bool) {
        if self.profile == DeviceProfile::Pointer {
            self.touching = over;
        }
    }

    /// Finger on the grass region. Only a touch device reports this.
    pub fn touch(&mut self, down: bool) {
        if self.profile == DeviceProfile::Touch {
            self.touching = down;
        }
    }

    pub fn countdown_tick(&mut self) -> CountdownOutcome {
        self.message = self.priority_message();
        if !self.is_valid() {
            return CountdownOutcome::Held;
        }
        self.remaining = self.remaining.saturating_sub(1);
        trace!(remaining = self.remaining, "grass countdown");
        if self.remaining == 0 {
            CountdownOutcome::Expired
        } else {
            CountdownOutcome::Decremented
        }
    }

    fn priority_message(&self) -> GrassMessage {
        if !self.focused {
            GrassMessage::DontCheat
        } else if self.moving_too_much {
            GrassMessage::Relax
        } else if !self.touching {
            match self.profile {
                DeviceProfile::Touch => GrassMessage::HoldTheGrass,
                DeviceProfile::Pointer => GrassMessage::TouchTheGrass,
            }
        } else {
            GrassMessage::LookAtGrass
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const THRESHOLD: u32 = 40;

    fn touching(profile: DeviceProfile, seconds: u32) -> Grass {
        let mut grass = Grass::new(profile, seconds, true);
        grass.pointer_over(true);
        grass.touch(true);
        grass
    }

    #[test]
    fn test_decrements_only_when_all_conditions_hold() {
        let mut grass = touching(DeviceProfile::Pointer, 45);
        assert_eq!(grass.countdown_tick(), CountdownOutcome::Decremented);
        assert_eq!(grass.remaining(), 44);

        grass.focus_changed(false);
        assert_eq!(grass.countdown_tick(), CountdownOutcome::Held);
        grass.focus_changed(true);

        grass.pointer_over(false);
        assert_eq!(grass.countdown_tick(), CountdownOutcome::Held);
        grass.pointer_over(true);

        for _ in 0..=THRESHOLD {
            grass.pointer_moved(THRESHOLD);
        }
        assert_eq!(grass.countdown_tick(), CountdownOutcome::Held);
        assert_eq!(grass.remaining(), 44);
    }

    #[test]
    fn test_message_priority_focus_then_movement_then_touch() {
        let mut grass = Grass::new(DeviceProfile::Pointer, 45, false);
        for _ in 0..=THRESHOLD {
            grass.pointer_moved(THRESHOLD);
        }
        grass.countdown_tick();
        assert_eq!(grass.message(), GrassMessage::DontCheat);

        grass.focus_changed(true);
        grass.countdown_tick();
        assert_eq!(grass.message(), GrassMessage::Relax);

        grass.window_elapsed();
        grass.countdown_tick();
        assert_eq!(grass.message(), GrassMessage::TouchTheGrass);

        grass.pointer_over(true);
        grass.countdown_tick();
        assert_eq!(grass.message(), GrassMessage::LookAtGrass);
    }

    #[test]
    fn test_touch_profile_asks_to_hold() {
        let mut grass = Grass::new(DeviceProfile::Touch, 15, true);
        grass.countdown_tick();
        assert_eq!(grass.message(), GrassMessage::HoldTheGrass);
    }

    #[test]
    fn test_modalities_are_exclusive_per_profile() {
        let mut pointer = Grass::new(DeviceProfile::Pointer, 45, true);
        pointer.touch(true);
        assert!(!pointer.is_touching());
        pointer.pointer_over(true);
        assert!(pointer.is_touching());

        let mut touch = Grass::new(DeviceProfile::Touch, 15, true);
        touch.pointer_over(true);
        assert!(!touch.is_touching());
        touch.touch(true);
        assert!(touch.is_touching());
        touch.touch(false);
        assert!(!touch.is_touching());
    }

    #[test]
    fn test_movement_threshold_is_exclusive() {
        let mut grass = Grass::new(DeviceProfile::Pointer, 45, true);
        for _ in 0..THRESHOLD {
            grass.pointer_moved(THRESHOLD);
        }
        assert!(!grass.is_moving_too_much());

        grass.pointer_moved(THRESHOLD);
        assert!(grass.is_moving_too_much());
        assert_eq!(grass.message(), GrassMessage::Relax);

        grass.window_elapsed();
        assert!(!grass.is_moving_too_much());
        grass.pointer_moved(THRESHOLD);
        assert!(!grass.is_moving_too_much());
    }

    #[test]
    fn test_blur_and_focus_update_message_immediately() {
        let mut grass = touching(DeviceProfile::Pointer, 45);
        grass.focus_changed(false);
        assert_eq!(grass.message(), GrassMessage::DontCheat);
        grass.focus_changed(true);
        assert_eq!(grass.message(), GrassMessage::LookAtGrass);
    }

    #[test]
    fn test_expires_at_zero_and_never_goes_negative() {
        let mut grass = touching(DeviceProfile::Touch, 2);
        assert_eq!(grass.countdown_tick(), CountdownOutcome::Decremented);
        assert_eq!(grass.countdown_tick(), CountdownOutcome::Expired);
        assert_eq!(grass.remaining(), 0);
        assert_eq!(grass.countdown_tick(), CountdownOutcome::Expired);
        assert_eq!(grass.remaining(), 0);
    }
}
