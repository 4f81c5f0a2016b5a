//! Display protocol address definitions
//!
//! Each address names the UI control or screen region a telegram talks
//! about. The table matches the variable space of the stock Neptune 3
//! Pro display firmware.

use std::fmt;

use crate::error::{Error, Result};

/// Protocol addresses of the display's variable space
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum AddressKey {
    MainPage = 0x1002,
    Adjustment = 0x1004,
    PrintSpeed = 0x1006,
    StopPrint = 0x1008,
    PausePrint = 0x100A,
    ResumePrint = 0x100C,
    ZOffset = 0x1026,
    TempScreen = 0x1030,
    CoolScreen = 0x1032,
    Heater0TempEnter = 0x1034,
    Heater1TempEnter = 0x1038,
    HotBedTempEnter = 0x103A,
    SettingScreen = 0x103E,
    SettingBack = 0x1040,
    BedLevelFun = 0x1044,
    AxisPageSelect = 0x1046,
    XAxisMove = 0x1048,
    YAxisMove = 0x104A,
    ZAxisMove = 0x104C,
    SelectExtruder = 0x104E,
    Heater0LoadEnter = 0x1054,
    FilamentLoad = 0x1056,
    Heater1LoadEnter = 0x1058,
    SelectLanguage = 0x105C,
    FilamentCheck = 0x105E,
    PowerContinuePrint = 0x105F,
    PrintSelectMode = 0x1090,
    XHotendOffset = 0x1092,
    YHotendOffset = 0x1094,
    ZHotendOffset = 0x1096,
    StoreMemory = 0x1098,
    ChangePage = 0x110E,
    PrintFile = 0x2198,
    SelectFile = 0x2199,
    SetPreNozzleTemp = 0x2200,
    SetPreBedTemp = 0x2201,
    HardwareTest = 0x2202,
    ErrControl = 0x2203,
    PrintFiles = 0x2204,
    PrintConfirm = 0x2205,
}

impl AddressKey {
    /// Get address name
    pub fn name(self) -> &'static str {
        match self {
            Self::MainPage => "MAIN_PAGE",
            Self::Adjustment => "ADJUSTMENT",
            Self::PrintSpeed => "PRINT_SPEED",
            Self::StopPrint => "STOP_PRINT",
            Self::PausePrint => "PAUSE_PRINT",
            Self::ResumePrint => "RESUME_PRINT",
            Self::ZOffset => "Z_OFFSET",
            Self::TempScreen => "TEMP_SCREEN",
            Self::CoolScreen => "COOL_SCREEN",
            Self::Heater0TempEnter => "HEATER_0_TEMP_ENTER",
            Self::Heater1TempEnter => "HEATER_1_TEMP_ENTER",
            Self::HotBedTempEnter => "HOT_BED_TEMP_ENTER",
            Self::SettingScreen => "SETTING_SCREEN",
            Self::SettingBack => "SETTING_BACK",
            Self::BedLevelFun => "BED_LEVEL_FUN",
            Self::AxisPageSelect => "AXIS_PAGE_SELECT",
            Self::XAxisMove => "X_AXIS_MOVE",
            Self::YAxisMove => "Y_AXIS_MOVE",
            Self::ZAxisMove => "Z_AXIS_MOVE",
            Self::SelectExtruder => "SELECT_EXTRUDER",
            Self::Heater0LoadEnter => "HEATER_0_LOAD_ENTER",
            Self::FilamentLoad => "FILAMENT_LOAD",
            Self::Heater1LoadEnter => "HEATER_1_LOAD_ENTER",
            Self::SelectLanguage => "SELECT_LANGUAGE",
            Self::FilamentCheck => "FILAMENT_CHECK",
            Self::PowerContinuePrint => "POWER_CONTINUE_PRINT",
            Self::PrintSelectMode => "PRINT_SELECT_MODE",
            Self::XHotendOffset => "X_HOTEND_OFFSET",
            Self::YHotendOffset => "Y_HOTEND_OFFSET",
            Self::ZHotendOffset => "Z_HOTEND_OFFSET",
            Self::StoreMemory => "STORE_MEMORY",
            Self::ChangePage => "CHANGE_PAGE",
            Self::PrintFile => "PRINT_FILE",
            Self::SelectFile => "SELECT_FILE",
            Self::SetPreNozzleTemp => "SET_PRE_NOZZLE_TEMP",
            Self::SetPreBedTemp => "SET_PRE_BED_TEMP",
            Self::HardwareTest => "HARDWARE_TEST",
            Self::ErrControl => "ERR_CONTROL",
            Self::PrintFiles => "PRINT_FILES",
            Self::PrintConfirm => "PRINT_CONFIRM",
        }
    }
}

impl From<AddressKey> for u16 {
    fn from(address: AddressKey) -> u16 {
        address as u16
    }
}

impl TryFrom<u16> for AddressKey {
    type Error = Error;

    fn try_from(value: u16) -> Result<Self> {
        match value {
            0x1002 => Ok(Self::MainPage),
            0x1004 => Ok(Self::Adjustment),
            0x1006 => Ok(Self::PrintSpeed),
            0x1008 => Ok(Self::StopPrint),
            0x100A => Ok(Self::PausePrint),
            0x100C => Ok(Self::ResumePrint),
            0x1026 => Ok(Self::ZOffset),
            0x1030 => Ok(Self::TempScreen),
            0x1032 => Ok(Self::CoolScreen),
            0x1034 => Ok(Self::Heater0TempEnter),
            0x1038 => Ok(Self::Heater1TempEnter),
            0x103A => Ok(Self::HotBedTempEnter),
            0x103E => Ok(Self::SettingScreen),
            0x1040 => Ok(Self::SettingBack),
            0x1044 => Ok(Self::BedLevelFun),
            0x1046 => Ok(Self::AxisPageSelect),
            0x1048 => Ok(Self::XAxisMove),
            0x104A => Ok(Self::YAxisMove),
            0x104C => Ok(Self::ZAxisMove),
            0x104E => Ok(Self::SelectExtruder),
            0x1054 => Ok(Self::Heater0LoadEnter),
            0x1056 => Ok(Self::FilamentLoad),
            0x1058 => Ok(Self::Heater1LoadEnter),
            0x105C => Ok(Self::SelectLanguage),
            0x105E => Ok(Self::FilamentCheck),
            0x105F => Ok(Self::PowerContinuePrint),
            0x1090 => Ok(Self::PrintSelectMode),
            0x1092 => Ok(Self::XHotendOffset),
            0x1094 => Ok(Self::YHotendOffset),
            0x1096 => Ok(Self::ZHotendOffset),
            0x1098 => Ok(Self::StoreMemory),
            0x110E => Ok(Self::ChangePage),
            0x2198 => Ok(Self::PrintFile),
            0x2199 => Ok(Self::SelectFile),
            0x2200 => Ok(Self::SetPreNozzleTemp),
            0x2201 => Ok(Self::SetPreBedTemp),
            0x2202 => Ok(Self::HardwareTest),
            0x2203 => Ok(Self::ErrControl),
            0x2204 => Ok(Self::PrintFiles),
            0x2205 => Ok(Self::PrintConfirm),
            _ => Err(Error::UnknownAddress(value)),
        }
    }
}

impl fmt::Display for AddressKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(0x{:04X})", self.name(), *self as u16)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_conversion() {
        assert_eq!(u16::from(AddressKey::MainPage), 0x1002);
        assert_eq!(AddressKey::try_from(0x1002).unwrap(), AddressKey::MainPage);
        assert_eq!(
            AddressKey::try_from(0x1046).unwrap(),
            AddressKey::AxisPageSelect
        );
        assert_eq!(
            AddressKey::try_from(0x2205).unwrap(),
            AddressKey::PrintConfirm
        );
    }

    #[test]
    fn test_unknown_address_is_error() {
        assert_eq!(
            AddressKey::try_from(0x0000),
            Err(Error::UnknownAddress(0x0000))
        );
        // One past the last file-screen address
        assert_eq!(
            AddressKey::try_from(0x2206),
            Err(Error::UnknownAddress(0x2206))
        );
    }

    #[test]
    fn test_address_display() {
        assert_eq!(
            AddressKey::AxisPageSelect.to_string(),
            "AXIS_PAGE_SELECT(0x1046)"
        );
    }
}
