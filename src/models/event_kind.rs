use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Created,
    CheckIn,
    CheckOut,
    Finish,
    Cancel,
    Comment,
}

impl EventKind {
    /// Convert enum → log token
    pub fn to_log_str(&self) -> &'static str {
        match self {
            EventKind::Created => "created",
            EventKind::CheckIn => "checkin",
            EventKind::CheckOut => "checkout",
            EventKind::Finish => "finish",
            EventKind::Cancel => "cancel",
            EventKind::Comment => "comment",
        }
    }

    /// Convert log token → enum
    pub fn from_log_str(s: &str) -> Option<Self> {
        match s {
            "created" => Some(EventKind::Created),
            "checkin" => Some(EventKind::CheckIn),
            "checkout" => Some(EventKind::CheckOut),
            "finish" => Some(EventKind::Finish),
            "cancel" => Some(EventKind::Cancel),
            "comment" => Some(EventKind::Comment),
            _ => None,
        }
    }

    /// Every kind except `Comment` moves the project to a new status.
    pub fn is_status_change(&self) -> bool {
        !matches!(self, EventKind::Comment)
    }

    /// Kinds that end a running session and give the lock back.
    pub fn releases_lock(&self) -> bool {
        matches!(
            self,
            EventKind::CheckOut | EventKind::Finish | EventKind::Cancel
        )
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.to_log_str())
    }
}
