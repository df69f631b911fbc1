//! Icon identifiers referenced by content files.
//!
//! Content names icons by string (`"FiShield"`). Names are resolved into
//! `IconName` while the content is deserialized; anything unrecognized falls
//! back to `IconName::Mail` so renderers only ever see a known icon.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::debug;

macro_rules! icon_names {
    ($($variant:ident => $label:literal),+ $(,)?) => {
        #[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
        pub enum IconName {
            $($variant),+
        }

        impl IconName {
            pub const ALL: &'static [IconName] = &[$(IconName::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $(IconName::$variant => $label),+
                }
            }

            /// Exact lookup without fallback.
            pub fn lookup(name: &str) -> Option<Self> {
                match name {
                    $($label => Some(IconName::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

icon_names! {
    Mail => "FiMail",
    Linkedin => "FiLinkedin",
    Facebook => "FiFacebook",
    Twitter => "FiTwitter",
    Send => "FiSend",
    Github => "FiGithub",
    ExternalLink => "FiExternalLink",
    Calendar => "FiCalendar",
    Tag => "FiTag",
    Filter => "FiFilter",
    Close => "FiX",
    Search => "FiSearch",
    Grid => "FiGrid",
    List => "FiList",
    ArrowRight => "FiArrowRight",
    Target => "FiTarget",
    Users => "FiUsers",
    TrendingUp => "FiTrendingUp",
    Award => "FiAward",
    Briefcase => "FiBriefcase",
    Clock => "FiClock",
    Eye => "FiEye",
    Shield => "FiShield",
    Server => "FiServer",
    Wifi => "FiWifi",
    Cpu => "FiCpu",
    Code => "FiCode",
    Tool => "FiTool",
    ArrowUp => "FiArrowUp",
    Home => "FiHome",
    User => "FiUser",
    Phone => "FiPhone",
    MapPin => "FiMapPin",
}

impl IconName {
    pub const FALLBACK: IconName = IconName::Mail;

    /// Resolve a content icon name, falling back to `FALLBACK`.
    pub fn resolve(name: &str) -> Self {
        Self::lookup(name).unwrap_or_else(|| {
            debug!(icon = name, fallback = Self::FALLBACK.as_str(), "unknown icon name");
            Self::FALLBACK
        })
    }
}

impl Default for IconName {
    fn default() -> Self {
        Self::FALLBACK
    }
}

impl Serialize for IconName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for IconName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(Self::resolve(&value))
    }
}
