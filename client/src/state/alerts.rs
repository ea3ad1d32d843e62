//! Transient notification queue.
//!
//! SYSTEM CONTEXT
//! ==============
//! Any page or component pushes an `Alert`; the `AlertStack` component owns
//! the timers that age it through `Visible -> Disintegrating -> removed`.
//! State here is pure so the lifecycle is testable without a browser.

#[cfg(test)]
#[path = "alerts_test.rs"]
mod alerts_test;

/// How long an alert stays fully visible.
pub const ALERT_VISIBLE_MS: u64 = 5_000;
/// Length of the disintegrate animation before the alert is removed.
pub const DISINTEGRATE_MS: u64 = 1_500;
/// Decorative particles spawned when an alert disintegrates.
pub const PARTICLE_COUNT: usize = 50;
/// Particles start within this many seconds of each other.
pub const MAX_PARTICLE_DELAY_SECS: f64 = 0.3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Error,
    Warning,
    Info,
}

impl AlertKind {
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Success => "alert--success",
            Self::Error => "alert--error",
            Self::Warning => "alert--warning",
            Self::Info => "alert--info",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Success => "✓",
            Self::Error => "✕",
            Self::Warning => "!",
            Self::Info => "i",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AlertPhase {
    #[default]
    Visible,
    Disintegrating,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Alert {
    pub id: String,
    pub kind: AlertKind,
    pub message: String,
    pub phase: AlertPhase,
    /// Populated when the alert starts disintegrating.
    pub particles: Vec<Particle>,
}

/// One decorative fragment, positioned in CSS pixels relative to the alert.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub id: usize,
    pub x: f64,
    pub y: f64,
    pub delay_secs: f64,
}

/// Scatter `PARTICLE_COUNT` particles over a `width` x `height` box.
///
/// `rng` yields values in `[0, 1)`; the browser passes `Math.random`.
pub fn scatter_particles(width: f64, height: f64, mut rng: impl FnMut() -> f64) -> Vec<Particle> {
    (0..PARTICLE_COUNT)
        .map(|id| Particle { id, x: rng() * width, y: rng() * height, delay_secs: rng() * MAX_PARTICLE_DELAY_SECS })
        .collect()
}

/// Alerts currently on screen, oldest first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AlertsState {
    pub items: Vec<Alert>,
}

impl AlertsState {
    /// Queue a new alert and return its id.
    pub fn push(&mut self, kind: AlertKind, message: impl Into<String>) -> String {
        let id = uuid::Uuid::new_v4().to_string();
        self.items.push(Alert {
            id: id.clone(),
            kind,
            message: message.into(),
            phase: AlertPhase::Visible,
            particles: Vec::new(),
        });
        id
    }

    /// Move `id` into its disintegrate phase. Returns `false` when the alert is
    /// gone or already disintegrating.
    pub fn begin_dismiss(&mut self, id: &str, particles: Vec<Particle>) -> bool {
        let Some(alert) = self.items.iter_mut().find(|a| a.id == id) else {
            return false;
        };
        if alert.phase == AlertPhase::Disintegrating {
            return false;
        }
        alert.phase = AlertPhase::Disintegrating;
        alert.particles = particles;
        true
    }

    pub fn remove(&mut self, id: &str) {
        self.items.retain(|a| a.id != id);
    }
}
