//! Status code → marker icon and display label.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusCode {
    Pending,
    Done,
    Canceled,
}

pub const DEFAULT_ICON: &str = "images/default.png";
pub const DEFAULT_LABEL: &str = "Tanımsız";
/// Marks the user's own position, not a note.
pub const PERSON_ICON: &str = "images/person.png";

impl StatusCode {
    /// Order of the options in the creation form.
    pub const ALL: [StatusCode; 3] = [StatusCode::Pending, StatusCode::Done, StatusCode::Canceled];

    pub fn code(self) -> &'static str {
        match self {
            StatusCode::Pending => "pending",
            StatusCode::Done => "done",
            StatusCode::Canceled => "canceled",
        }
    }

    pub fn parse(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.code() == code)
    }

    pub fn icon(self) -> &'static str {
        match self {
            StatusCode::Pending => "images/pending.png",
            StatusCode::Done => "images/done.png",
            StatusCode::Canceled => "images/canceled.png",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StatusCode::Pending => "Beklemede",
            StatusCode::Done => "Tamamlandı",
            StatusCode::Canceled => "İptal Edildi",
        }
    }
}

pub fn icon_for(code: &str) -> &'static str {
    StatusCode::parse(code).map_or(DEFAULT_ICON, StatusCode::icon)
}

pub fn label_for(code: &str) -> &'static str {
    StatusCode::parse(code).map_or(DEFAULT_LABEL, StatusCode::label)
}
