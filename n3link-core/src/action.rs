//! Semantic actions decoded from display telegrams
//!
//! Every recognized user interaction on the touch screen maps to one
//! variant here. Two shapes exist: signal actions (the press itself is
//! the whole event) and numeric-input actions (the operator typed a
//! value on screen). The variant set is the device's control surface;
//! an address/word pair missing from it makes that screen control
//! silently do nothing.

use std::fmt;

use crate::address::AddressKey;
use crate::command::Command;

/// A recognized user interaction on the display
///
/// Numeric-input variants carry the operator-facing value: the wire
/// word arrives with its bytes swapped and the classifier corrects it
/// exactly once on construction.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Action {
    // MAIN_PAGE
    OpenFileList,
    RemoveFileListMultilineFlag,
    SetFileListMultilineFlag,

    // TEMP_SCREEN
    /// 1°C / 0.1mm steps
    SetUnitMultiplier1,
    /// 5°C / 1mm steps
    SetUnitMultiplier2,
    /// 10°C / 10mm steps
    SetUnitMultiplier3,

    // COOL_SCREEN
    DisableNozzle0Heating,
    DisableBedHeating,
    PreheatPla,
    PreheatAbs,
    PreheatPetg,
    PreheatTpu,

    // SETTING_SCREEN
    TriggerAutohome,
    StopMotors,
    NavigateToPretempPage,
    NavigateToPrefilamentPage,

    // SETTING_BACK
    SaveSettings,
    /// Multi-word version report from the display firmware.
    ///
    /// Present in the taxonomy but not wired into the registry's
    /// dispatch paths; the default classifier never constructs it.
    SetLcdVersion { version: u16 },

    // BED_LEVEL_FUN
    RequestTemperatures,
    LcdRecovery,

    // AXIS_PAGE_SELECT
    HomeAll,
    HomeX,
    HomeY,
    HomeZ,

    // X/Y/Z_AXIS_MOVE
    MoveXAxisPlus,
    MoveXAxisMinus,
    MoveYAxisPlus,
    MoveYAxisMinus,
    MoveZAxisPlus,
    MoveZAxisMinus,

    // FILAMENT_LOAD
    UnloadFilament,
    LoadFilament,

    // HARDWARE_TEST
    DetectHardwareTest,

    // Numeric input
    SetNozzle0Temperature { value: u16 },
    SetBedTemperature { value: u16 },
    SetPrefilamentLoadLength { value: u16 },
    SetPrefilamentLoadSpeed { value: u16 },
}

impl Action {
    /// The command every incoming action originates from
    pub fn command(self) -> Command {
        Command::VarAddrRead
    }

    /// Protocol address this action belongs to
    pub fn address(self) -> AddressKey {
        match self {
            Self::OpenFileList
            | Self::RemoveFileListMultilineFlag
            | Self::SetFileListMultilineFlag => AddressKey::MainPage,

            Self::SetUnitMultiplier1 | Self::SetUnitMultiplier2 | Self::SetUnitMultiplier3 => {
                AddressKey::TempScreen
            }

            Self::DisableNozzle0Heating
            | Self::DisableBedHeating
            | Self::PreheatPla
            | Self::PreheatAbs
            | Self::PreheatPetg
            | Self::PreheatTpu => AddressKey::CoolScreen,

            Self::TriggerAutohome
            | Self::StopMotors
            | Self::NavigateToPretempPage
            | Self::NavigateToPrefilamentPage => AddressKey::SettingScreen,

            Self::SaveSettings | Self::SetLcdVersion { .. } => AddressKey::SettingBack,

            Self::RequestTemperatures | Self::LcdRecovery => AddressKey::BedLevelFun,

            Self::HomeAll | Self::HomeX | Self::HomeY | Self::HomeZ => AddressKey::AxisPageSelect,

            Self::MoveXAxisPlus | Self::MoveXAxisMinus => AddressKey::XAxisMove,
            Self::MoveYAxisPlus | Self::MoveYAxisMinus => AddressKey::YAxisMove,
            Self::MoveZAxisPlus | Self::MoveZAxisMinus => AddressKey::ZAxisMove,

            Self::UnloadFilament | Self::LoadFilament => AddressKey::FilamentLoad,

            Self::DetectHardwareTest => AddressKey::HardwareTest,

            Self::SetNozzle0Temperature { .. } => AddressKey::Heater0TempEnter,
            Self::SetBedTemperature { .. } => AddressKey::HotBedTempEnter,
            Self::SetPrefilamentLoadLength { .. } => AddressKey::Heater0LoadEnter,
            Self::SetPrefilamentLoadSpeed { .. } => AddressKey::Heater1LoadEnter,
        }
    }

    /// Operator-entered value, for numeric-input actions
    pub fn value(self) -> Option<u16> {
        match self {
            Self::SetNozzle0Temperature { value }
            | Self::SetBedTemperature { value }
            | Self::SetPrefilamentLoadLength { value }
            | Self::SetPrefilamentLoadSpeed { value } => Some(value),
            _ => None,
        }
    }

    /// Check if this action carries an operator-entered value
    pub fn is_numeric_input(self) -> bool {
        self.value().is_some()
    }

    /// Get action name
    pub fn name(self) -> &'static str {
        match self {
            Self::OpenFileList => "OpenFileList",
            Self::RemoveFileListMultilineFlag => "RemoveFileListMultilineFlag",
            Self::SetFileListMultilineFlag => "SetFileListMultilineFlag",
            Self::SetUnitMultiplier1 => "SetUnitMultiplier1",
            Self::SetUnitMultiplier2 => "SetUnitMultiplier2",
            Self::SetUnitMultiplier3 => "SetUnitMultiplier3",
            Self::DisableNozzle0Heating => "DisableNozzle0Heating",
            Self::DisableBedHeating => "DisableBedHeating",
            Self::PreheatPla => "PreheatPla",
            Self::PreheatAbs => "PreheatAbs",
            Self::PreheatPetg => "PreheatPetg",
            Self::PreheatTpu => "PreheatTpu",
            Self::TriggerAutohome => "TriggerAutohome",
            Self::StopMotors => "StopMotors",
            Self::NavigateToPretempPage => "NavigateToPretempPage",
            Self::NavigateToPrefilamentPage => "NavigateToPrefilamentPage",
            Self::SaveSettings => "SaveSettings",
            Self::SetLcdVersion { .. } => "SetLcdVersion",
            Self::RequestTemperatures => "RequestTemperatures",
            Self::LcdRecovery => "LcdRecovery",
            Self::HomeAll => "HomeAll",
            Self::HomeX => "HomeX",
            Self::HomeY => "HomeY",
            Self::HomeZ => "HomeZ",
            Self::MoveXAxisPlus => "MoveXAxisPlus",
            Self::MoveXAxisMinus => "MoveXAxisMinus",
            Self::MoveYAxisPlus => "MoveYAxisPlus",
            Self::MoveYAxisMinus => "MoveYAxisMinus",
            Self::MoveZAxisPlus => "MoveZAxisPlus",
            Self::MoveZAxisMinus => "MoveZAxisMinus",
            Self::UnloadFilament => "UnloadFilament",
            Self::LoadFilament => "LoadFilament",
            Self::DetectHardwareTest => "DetectHardwareTest",
            Self::SetNozzle0Temperature { .. } => "SetNozzle0Temperature",
            Self::SetBedTemperature { .. } => "SetBedTemperature",
            Self::SetPrefilamentLoadLength { .. } => "SetPrefilamentLoadLength",
            Self::SetPrefilamentLoadSpeed { .. } => "SetPrefilamentLoadSpeed",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::SetNozzle0Temperature { value }
            | Self::SetBedTemperature { value }
            | Self::SetPrefilamentLoadLength { value }
            | Self::SetPrefilamentLoadSpeed { value } => {
                write!(f, "{}(input={})", self.name(), value)
            }
            Self::SetLcdVersion { version } => write!(f, "{}(version={})", self.name(), version),
            _ => f.write_str(self.name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signal_action_address() {
        assert_eq!(Action::HomeAll.address(), AddressKey::AxisPageSelect);
        assert_eq!(Action::OpenFileList.address(), AddressKey::MainPage);
        assert_eq!(Action::DetectHardwareTest.address(), AddressKey::HardwareTest);
    }

    #[test]
    fn test_numeric_action_value() {
        let action = Action::SetNozzle0Temperature { value: 210 };
        assert_eq!(action.value(), Some(210));
        assert!(action.is_numeric_input());
        assert_eq!(action.address(), AddressKey::Heater0TempEnter);
    }

    #[test]
    fn test_signal_action_has_no_value() {
        assert_eq!(Action::HomeAll.value(), None);
        assert!(!Action::HomeAll.is_numeric_input());
    }

    #[test]
    fn test_command_is_always_var_addr_read() {
        assert_eq!(Action::HomeAll.command(), Command::VarAddrRead);
        assert_eq!(
            Action::SetBedTemperature { value: 60 }.command(),
            Command::VarAddrRead
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Action::HomeAll.to_string(), "HomeAll");
        assert_eq!(
            Action::SetNozzle0Temperature { value: 10 }.to_string(),
            "SetNozzle0Temperature(input=10)"
        );
        assert_eq!(
            Action::SetLcdVersion { version: 7 }.to_string(),
            "SetLcdVersion(version=7)"
        );
    }
}
