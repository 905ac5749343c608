//! User-facing strings for the locales the admin UI ships (English, Spanish)

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use talentbook_domain::TalentBookError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Es,
}

impl Locale {
    /// Resolve a BCP 47 tag (`es`, `es-MX`, `en_US`) by its primary language,
    /// falling back to English for anything unsupported.
    pub fn from_tag(tag: &str) -> Self {
        tag.parse().unwrap_or_default()
    }

    /// Localized text for `message`.
    pub fn text(self, message: Message) -> &'static str {
        match (self, message) {
            (Self::En, Message::ConflictTitle) => "Edit conflict",
            (Self::En, Message::ConflictDescription) => {
                "This event was changed by someone else after you started editing. \
                 Reload to see the latest version, or overwrite it with your changes."
            }
            (Self::En, Message::ReloadAction) => "Reload",
            (Self::En, Message::OverwriteAction) => "Overwrite",
            (Self::Es, Message::ConflictTitle) => "Conflicto de edición",
            (Self::Es, Message::ConflictDescription) => {
                "Otra persona modificó este evento después de que comenzaste a editarlo. \
                 Recarga para ver la versión más reciente o sobrescríbelo con tus cambios."
            }
            (Self::Es, Message::ReloadAction) => "Recargar",
            (Self::Es, Message::OverwriteAction) => "Sobrescribir",
        }
    }
}

impl FromStr for Locale {
    type Err = TalentBookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let primary = s.trim().split(['-', '_']).next().unwrap_or_default();
        match primary.to_ascii_lowercase().as_str() {
            "en" => Ok(Self::En),
            "es" => Ok(Self::Es),
            _ => Err(TalentBookError::InvalidInput(format!("unsupported locale: {s:?}"))),
        }
    }
}

/// Keys of the strings this core raises
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Message {
    ConflictTitle,
    ConflictDescription,
    ReloadAction,
    OverwriteAction,
}
