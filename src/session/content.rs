//! Fixed copy shown on each screen.
//!
//! Everything the user reads comes from these lists. Selection from
//! `PROMPTS` and `RESPONSES` goes through a [`Picker`](super::picker::Picker),
//! so the lists must stay non-empty.

pub const TITLE: &str = "Touch Grass Simulator";
pub const TAGLINE: &str = "“An app for people who refuse to go outside.”";
pub const BEGIN_LABEL: &str = "Begin Healing";
pub const SUBMIT_LABEL: &str = "I’m Done Thinking";
pub const LEAVE_LABEL: &str = "Leave";

pub const SESSION_COMPLETE: &str = "Session Complete 🌱";
pub const GROUNDED: &str = "You are now 0.7% more grounded.";

pub const CALIBRATION_MESSAGES: &[&str] = &[
    "Calibrating your emotional state…",
    "Grabbing coffee…",
    "Pretending to work…",
    "Judging your browsing history…",
    "Almost there (that's a lie)…",
    "Forgot what I was doing…",
    "Realigning chakras…",
    "Buffering emotional damage…",
    "Do you really have nothing better to do?",
];

/// Shown when the progress bar jumps backwards.
pub const RECONSIDERING: &str = "Wait, nevermind…";
/// Shown on the single 100% frame.
pub const CLOSE_ENOUGH: &str = "Yeah okay close enough.";

pub const PROMPTS: &[&str] = &[
    "Who do you miss but pretend you don’t?",
    "What was the last time you felt normal?",
    "Name one person you should text but won’t.",
    "Be honest. Are you cooked?",
    "What version of you do you think about at night?",
    "Do you think they remember you?",
];

pub const RESPONSES: &[&str] = &[
    "Damn.",
    "Yeah.",
    "That tracks.",
    "Fair enough.",
    "Oof.",
    "Whatever.",
    "Sure.",
];

pub const LOOK_AT_GRASS: &str = "Look at this grass.";
pub const DONT_CHEAT: &str = "Don’t cheat.";
pub const RELAX: &str = "Relax.";
pub const TOUCH_THE_GRASS: &str = "Touch the grass.";
pub const HOLD_THE_GRASS: &str = "Hold the grass.";

/// The grass picture. Opaque to the state machine; only the UI draws it.
pub const GRASS_ART: &str = include_str!("../../assets/grass.txt");
