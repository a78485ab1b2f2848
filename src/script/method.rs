use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;

/// How the generated script installs each application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum InstallMethod {
    /// winget, then Chocolatey, then direct download.
    #[default]
    Auto,
    Winget,
    Choco,
    Direct,
}

impl InstallMethod {
    pub const ALL: [InstallMethod; 4] = [
        InstallMethod::Auto,
        InstallMethod::Winget,
        InstallMethod::Choco,
        InstallMethod::Direct,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            InstallMethod::Auto => "auto",
            InstallMethod::Winget => "winget",
            InstallMethod::Choco => "choco",
            InstallMethod::Direct => "direct",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            InstallMethod::Auto => "Automatic",
            InstallMethod::Winget => "Winget only",
            InstallMethod::Choco => "Chocolatey only",
            InstallMethod::Direct => "Direct download only",
        }
    }

    pub fn uses_winget(&self) -> bool {
        matches!(self, InstallMethod::Auto | InstallMethod::Winget)
    }

    pub fn uses_choco(&self) -> bool {
        matches!(self, InstallMethod::Auto | InstallMethod::Choco)
    }

    pub fn next(&self) -> Self {
        let idx = Self::ALL.iter().position(|m| m == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }
}

impl fmt::Display for InstallMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InstallMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|method| method.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown install method '{s}' (expected auto, winget, choco or direct)"))
    }
}
