//! Transient notifications.
//!
//! A notification slides in, stays for `DISPLAY_MS`, slides out over
//! `EXIT_MS` and is then removed. Time is passed in explicitly as
//! milliseconds so the lifecycle can be driven by any clock.

/// How long a notification stays before it starts leaving.
pub const DISPLAY_MS: u64 = 3000;
/// Duration of the exit animation.
pub const EXIT_MS: u64 = 300;

/// Entry animation name.
pub const ANIMATION_IN: &str = "slideInRight";
/// Exit animation name.
pub const ANIMATION_OUT: &str = "slideOutRight";

/// Keyframes for both animations, injected once into the document head.
pub const KEYFRAMES_CSS: &str = r#"
    @keyframes slideInRight {
        from {
            transform: translateX(100%);
            opacity: 0;
        }
        to {
            transform: translateX(0);
            opacity: 1;
        }
    }

    @keyframes slideOutRight {
        from {
            transform: translateX(0);
            opacity: 1;
        }
        to {
            transform: translateX(100%);
            opacity: 0;
        }
    }
"#;

/// Visual kind of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationKind {
    #[default]
    Success,
    Error,
}

impl NotificationKind {
    /// Parse the kind names accepted by the page API; anything but `error`
    /// is treated as success.
    pub fn parse(name: &str) -> Self {
        match name {
            "error" => NotificationKind::Error,
            _ => NotificationKind::Success,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
        }
    }

    /// Background color of the banner.
    pub fn background(&self) -> &'static str {
        match self {
            NotificationKind::Success => "#4CAF50",
            NotificationKind::Error => "#f44336",
        }
    }

    /// CSS class list of the banner element.
    pub fn class_name(&self) -> String {
        format!("notification {}", self.name())
    }
}

/// A message to show to the visitor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
}

impl Notification {
    pub fn new(message: impl Into<String>, kind: NotificationKind) -> Self {
        Self {
            message: message.into(),
            kind,
        }
    }

    /// Inline style of the banner element.
    pub fn css_text(&self) -> String {
        format!(
            "position: fixed; top: 100px; right: 20px; background: {}; color: white; \
             padding: 1rem 2rem; border-radius: 5px; box-shadow: 0 4px 15px rgba(0, 0, 0, 0.2); \
             z-index: 1001; animation: {} 0.3s ease-out;",
            self.kind.background(),
            ANIMATION_IN
        )
    }
}

/// Handle to a shown notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(pub u32);

/// Lifecycle phase of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Sliding in or displayed.
    Entering,
    /// Playing the exit animation.
    Leaving,
    /// Gone from the document.
    Removed,
}

impl Phase {
    /// Phase of a notification shown at `shown_at` when the clock reads `now`.
    pub fn at(shown_at: u64, now: u64) -> Self {
        let elapsed = now.saturating_sub(shown_at);
        if elapsed < DISPLAY_MS {
            Phase::Entering
        } else if elapsed < DISPLAY_MS + EXIT_MS {
            Phase::Leaving
        } else {
            Phase::Removed
        }
    }
}

#[derive(Debug, Clone)]
struct Active {
    id: NotificationId,
    notification: Notification,
    shown_at: u64,
    phase: Phase,
}

/// Tracks every notification on screen.
#[derive(Debug, Clone, Default)]
pub struct NotificationCenter {
    next_id: u32,
    active: Vec<Active>,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a notification at time `now`.
    pub fn show(&mut self, notification: Notification, now: u64) -> NotificationId {
        let id = NotificationId(self.next_id);
        self.next_id += 1;
        log::debug!("notification {:?} ({})", id, notification.kind.name());
        self.active.push(Active {
            id,
            notification,
            shown_at: now,
            phase: Phase::Entering,
        });
        id
    }

    /// Advance every notification to time `now`, returning the phase changes.
    ///
    /// Removed notifications are forgotten after being reported once.
    pub fn tick(&mut self, now: u64) -> Vec<(NotificationId, Phase)> {
        let mut changes = Vec::new();
        for active in &mut self.active {
            let phase = Phase::at(active.shown_at, now);
            if phase != active.phase {
                active.phase = phase;
                changes.push((active.id, phase));
            }
        }
        self.active.retain(|a| a.phase != Phase::Removed);
        changes
    }

    /// Current phase of a notification; `Removed` once forgotten.
    pub fn phase(&self, id: NotificationId) -> Phase {
        self.active
            .iter()
            .find(|a| a.id == id)
            .map(|a| a.phase)
            .unwrap_or(Phase::Removed)
    }

    /// The notification behind a handle, while it is on screen.
    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.active
            .iter()
            .find(|a| a.id == id)
            .map(|a| &a.notification)
    }

    /// Number of notifications on screen.
    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}
