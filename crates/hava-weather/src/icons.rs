//! Condition label to icon key lookup.
//!
//! Icon keys are Material Design icon names (`weather-*`).

/// Symbolic icon identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IconKey(&'static str);

impl IconKey {
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for IconKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

/// Fixed condition-label table with a fallback icon.
#[derive(Debug, Clone, Copy)]
pub struct ConditionIconTable {
    entries: &'static [(&'static str, IconKey)],
    default: IconKey,
}

impl ConditionIconTable {
    pub const fn new(entries: &'static [(&'static str, IconKey)], default: IconKey) -> Self {
        Self { entries, default }
    }

    /// Exact-match lookup; labels not in the table get the default icon.
    pub fn lookup(&self, label: &str) -> IconKey {
        self.entries
            .iter()
            .find(|(l, _)| *l == label)
            .map(|(_, icon)| *icon)
            .unwrap_or(self.default)
    }

    pub fn default_icon(&self) -> IconKey {
        self.default
    }

    pub fn entries(&self) -> &'static [(&'static str, IconKey)] {
        self.entries
    }
}

pub const DEFAULT_ICON: IconKey = IconKey::new("weather-partly-cloudy");

const CONDITION_ENTRIES: &[(&str, IconKey)] = &[
    ("Güneşli", IconKey::new("weather-sunny")),
    ("Parçalı Bulutlu", IconKey::new("weather-partly-cloudy")),
    ("Bulutlu", IconKey::new("weather-cloudy")),
    ("Yağmurlu", IconKey::new("weather-rainy")),
    ("Sağanak Yağışlı", IconKey::new("weather-pouring")),
    ("Karlı", IconKey::new("weather-snowy")),
    ("Sisli", IconKey::new("weather-fog")),
    ("Rüzgarlı", IconKey::new("weather-windy")),
];

pub const CONDITION_ICONS: ConditionIconTable =
    ConditionIconTable::new(CONDITION_ENTRIES, DEFAULT_ICON);

/// Icon for a condition label. Never fails.
pub fn icon_for(label: &str) -> IconKey {
    CONDITION_ICONS.lookup(label)
}
