//! User-facing reply texts and the menu button actions.

/// Sent to the originating chat when handling an update fails.
pub const FAILURE: &str = "❌ حدث خطأ. الرجاء المحاولة مرة أخرى.";

pub const INFO: &str = "ℹ️ هذا بوت بسيط يستقبل الرسائل والأزرار ويرد عليها.";

pub const HELP: &str = "❓ أرسل /start لعرض القائمة، أو اكتب أي رسالة وسأرد عليك.";

pub const UNKNOWN_OPTION: &str = "⚠️ خيار غير معروف.";

pub fn welcome(name: Option<&str>) -> String {
    match name {
        Some(name) => format!("👋 مرحباً {}!\nاختر أحد الخيارات أدناه:", name),
        None => "👋 مرحباً!\nاختر أحد الخيارات أدناه:".to_string(),
    }
}

pub fn text_received(text: &str) -> String {
    format!("📩 استلمت رسالتك: {}", text)
}

/// Action behind a menu button; `as_data` is what travels in the callback data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonAction {
    Info,
    Help,
}

impl ButtonAction {
    pub const ALL: [ButtonAction; 2] = [ButtonAction::Info, ButtonAction::Help];

    pub fn as_data(self) -> &'static str {
        match self {
            ButtonAction::Info => "info",
            ButtonAction::Help => "help",
        }
    }

    pub fn from_data(data: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.as_data() == data)
    }

    pub fn label(self) -> &'static str {
        match self {
            ButtonAction::Info => "ℹ️ معلومات",
            ButtonAction::Help => "❓ مساعدة",
        }
    }

    pub fn reply(self) -> &'static str {
        match self {
            ButtonAction::Info => INFO,
            ButtonAction::Help => HELP,
        }
    }
}
