//! Display page definitions
//!
//! The display firmware addresses its screens by short page names.
//! Switching screens from the mainboard side is a `page <name>` text
//! command.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Screens of the stock display firmware
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum DisplayPage {
    Boot,
    Main,

    // File list
    FileListPage1,
    FileListPage2,
    FileListPage3,
    FileListPage4,
    FileListPage5,
    NoSdCard,
    NoFilament,

    // Printing
    PrintConfirmation,
    Printing,
    PrintComplete,
    PauseConfirmation,
    ResumeConfirmation,
    FilamentRefill,
    AdjustPrintTemperature,
    AdjustPrintSpeed,
    AdjustZOffset,

    // Manual control
    Preheat,
    ManualMovement,
    ManualExtrusion,

    // Settings
    Settings,
    FactorySettings,
    LanguageSettings,
    FilamentPresetSettings,
    FilamentPresetAdjust,
    AboutMachine,

    // Leveling
    AutolevelConfirmation,
    AutolevelPreheating,
    AutolevelMeasurements16,

    // Misc
    Wait,
    Autohoming,
    PowerLossContinuePrint,

    // Present in the firmware but not navigated to by the stock UI
    FilamentCheck,
    LanguageSettings2,
    LedControl,
}

impl DisplayPage {
    /// Page name as the display firmware knows it
    pub fn name(self) -> &'static str {
        match self {
            Self::Boot => "boot",
            Self::Main => "main",
            Self::FileListPage1 => "file1",
            Self::FileListPage2 => "file2",
            Self::FileListPage3 => "file3",
            Self::FileListPage4 => "file4",
            Self::FileListPage5 => "file5",
            Self::NoSdCard => "nosdcard",
            Self::NoFilament => "nofilament",
            Self::PrintConfirmation => "askprint",
            Self::Printing => "printpause",
            Self::PrintComplete => "printfinish",
            Self::PauseConfirmation => "pauseconfirm",
            Self::ResumeConfirmation => "resumeconfirm",
            Self::FilamentRefill => "filamentresume",
            Self::AdjustPrintTemperature => "adjusttemp",
            Self::AdjustPrintSpeed => "adjustspeed",
            Self::AdjustZOffset => "adjustzoffset",
            Self::Preheat => "pretemp",
            Self::ManualMovement => "premove",
            Self::ManualExtrusion => "prefilament",
            Self::Settings => "set",
            Self::FactorySettings => "factorysetting",
            Self::LanguageSettings => "language",
            Self::FilamentPresetSettings => "tempset",
            Self::FilamentPresetAdjust => "tempsetvalue",
            Self::AboutMachine => "information",
            Self::AutolevelConfirmation => "tips_level",
            Self::AutolevelPreheating => "leveling",
            Self::AutolevelMeasurements16 => "leveldata",
            Self::Wait => "wait",
            Self::Autohoming => "autohome",
            Self::PowerLossContinuePrint => "continueprint",
            Self::FilamentCheck => "filamentcheck",
            Self::LanguageSettings2 => "languageset",
            Self::LedControl => "ledcontrl",
        }
    }

    /// All known pages
    pub const ALL: &'static [DisplayPage] = &[
        Self::Boot,
        Self::Main,
        Self::FileListPage1,
        Self::FileListPage2,
        Self::FileListPage3,
        Self::FileListPage4,
        Self::FileListPage5,
        Self::NoSdCard,
        Self::NoFilament,
        Self::PrintConfirmation,
        Self::Printing,
        Self::PrintComplete,
        Self::PauseConfirmation,
        Self::ResumeConfirmation,
        Self::FilamentRefill,
        Self::AdjustPrintTemperature,
        Self::AdjustPrintSpeed,
        Self::AdjustZOffset,
        Self::Preheat,
        Self::ManualMovement,
        Self::ManualExtrusion,
        Self::Settings,
        Self::FactorySettings,
        Self::LanguageSettings,
        Self::FilamentPresetSettings,
        Self::FilamentPresetAdjust,
        Self::AboutMachine,
        Self::AutolevelConfirmation,
        Self::AutolevelPreheating,
        Self::AutolevelMeasurements16,
        Self::Wait,
        Self::Autohoming,
        Self::PowerLossContinuePrint,
        Self::FilamentCheck,
        Self::LanguageSettings2,
        Self::LedControl,
    ];
}

impl FromStr for DisplayPage {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|page| page.name() == s)
            .ok_or_else(|| Error::UnknownPage(s.to_string()))
    }
}

impl fmt::Display for DisplayPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_names() {
        assert_eq!(DisplayPage::Main.name(), "main");
        assert_eq!(DisplayPage::AutolevelConfirmation.name(), "tips_level");
        assert_eq!(DisplayPage::LedControl.name(), "ledcontrl");
    }

    #[test]
    fn test_from_str_round_trip() {
        for &page in DisplayPage::ALL {
            assert_eq!(page.name().parse::<DisplayPage>().unwrap(), page);
        }
    }

    #[test]
    fn test_from_str_unknown() {
        let result = "bogus".parse::<DisplayPage>();
        assert_eq!(result, Err(Error::UnknownPage("bogus".to_string())));
    }
}
