use std::fmt;

/// User actions reported to analytics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnalyticsAction {
    /// The user gave a wallet a new name.
    NameWallet,
}

impl AnalyticsAction {
    /// Stable event name.
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalyticsAction::NameWallet => "name_wallet",
        }
    }
}

impl fmt::Display for AnalyticsAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
