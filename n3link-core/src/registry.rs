//! Action registry and telegram classification
//!
//! The registry is the device's control surface written down: a literal
//! table of `(address, data word)` pairs naming every parameterless
//! signal the display sends, plus a fixed dispatch for the four screens
//! where the operator types a number. It is built once on first use and
//! never mutated, so concurrent readers need no locking.

use std::collections::HashMap;
use std::sync::OnceLock;

use tracing::trace;

use crate::action::Action;
use crate::address::AddressKey;
use crate::command::Command;
use crate::error::{Error, Result};
use crate::telegram::Telegram;

/// Single-word signal table: one entry per parameterless screen control
const SIGNAL_ACTIONS: &[(AddressKey, u16, Action)] = &[
    // MAIN_PAGE
    (AddressKey::MainPage, 1, Action::OpenFileList),
    (AddressKey::MainPage, 8, Action::RemoveFileListMultilineFlag),
    (AddressKey::MainPage, 9, Action::SetFileListMultilineFlag),
    // TEMP_SCREEN
    (AddressKey::TempScreen, 5, Action::SetUnitMultiplier1),
    (AddressKey::TempScreen, 6, Action::SetUnitMultiplier2),
    (AddressKey::TempScreen, 7, Action::SetUnitMultiplier3),
    // COOL_SCREEN
    (AddressKey::CoolScreen, 1, Action::DisableNozzle0Heating),
    (AddressKey::CoolScreen, 2, Action::DisableBedHeating),
    (AddressKey::CoolScreen, 9, Action::PreheatPla),
    (AddressKey::CoolScreen, 10, Action::PreheatAbs),
    (AddressKey::CoolScreen, 11, Action::PreheatPetg),
    (AddressKey::CoolScreen, 12, Action::PreheatTpu),
    // SETTING_SCREEN
    (AddressKey::SettingScreen, 1, Action::TriggerAutohome),
    (AddressKey::SettingScreen, 6, Action::StopMotors),
    (AddressKey::SettingScreen, 9, Action::NavigateToPretempPage),
    (AddressKey::SettingScreen, 10, Action::NavigateToPrefilamentPage),
    // SETTING_BACK
    (AddressKey::SettingBack, 5, Action::SaveSettings),
    // BED_LEVEL_FUN
    (AddressKey::BedLevelFun, 11, Action::RequestTemperatures),
    (AddressKey::BedLevelFun, 12, Action::LcdRecovery),
    // AXIS_PAGE_SELECT
    (AddressKey::AxisPageSelect, 4, Action::HomeAll),
    (AddressKey::AxisPageSelect, 5, Action::HomeX),
    (AddressKey::AxisPageSelect, 6, Action::HomeY),
    (AddressKey::AxisPageSelect, 7, Action::HomeZ),
    // X_AXIS_MOVE
    (AddressKey::XAxisMove, 1, Action::MoveXAxisPlus),
    (AddressKey::XAxisMove, 2, Action::MoveXAxisMinus),
    // Y_AXIS_MOVE
    (AddressKey::YAxisMove, 1, Action::MoveYAxisPlus),
    (AddressKey::YAxisMove, 2, Action::MoveYAxisMinus),
    // Z_AXIS_MOVE
    (AddressKey::ZAxisMove, 1, Action::MoveZAxisPlus),
    (AddressKey::ZAxisMove, 2, Action::MoveZAxisMinus),
    // FILAMENT_LOAD
    (AddressKey::FilamentLoad, 1, Action::UnloadFilament),
    (AddressKey::FilamentLoad, 2, Action::LoadFilament),
    // HARDWARE_TEST
    (AddressKey::HardwareTest, 15, Action::DetectHardwareTest),
];

fn signal_map() -> &'static HashMap<(AddressKey, u16), Action> {
    static MAP: OnceLock<HashMap<(AddressKey, u16), Action>> = OnceLock::new();
    MAP.get_or_init(|| {
        SIGNAL_ACTIONS
            .iter()
            .map(|&(address, word, action)| ((address, word), action))
            .collect()
    })
}

/// Numeric-input dispatch for the value-entry screens
///
/// The wire word carries the operator's number with its bytes swapped;
/// the swap is corrected here, exactly once.
fn numeric_input(address: AddressKey, word: u16) -> Option<Action> {
    let value = word.swap_bytes();
    match address {
        AddressKey::Heater0TempEnter => Some(Action::SetNozzle0Temperature { value }),
        AddressKey::HotBedTempEnter => Some(Action::SetBedTemperature { value }),
        AddressKey::Heater0LoadEnter => Some(Action::SetPrefilamentLoadLength { value }),
        AddressKey::Heater1LoadEnter => Some(Action::SetPrefilamentLoadSpeed { value }),
        _ => None,
    }
}

/// Classify a decoded telegram into exactly one action
///
/// # Errors
///
/// Returns an error for any telegram that does not map to a recognized
/// interaction: wrong command, empty data, unknown address, or an
/// address/data combination outside the registry. Every rejection is
/// local; callers log it and keep consuming the stream.
///
/// # Examples
///
/// ```
/// use n3link_core::{classify, Action, Telegram};
///
/// let frame = [0x5A, 0xA5, 0x06, 0x83, 0x10, 0x46, 0x01, 0x00, 0x04];
/// let action = classify(&Telegram::from_frame(&frame)).unwrap();
/// assert_eq!(action, Action::HomeAll);
/// ```
pub fn classify(telegram: &Telegram) -> Result<Action> {
    let command = Command::try_from(telegram.command)?;
    if !command.is_actionable() {
        return Err(Error::UnsupportedCommand { command });
    }

    if telegram.data.is_empty() {
        return Err(Error::EmptyData {
            address: telegram.address,
        });
    }

    let address = AddressKey::try_from(telegram.address)?;

    if let [word] = telegram.data[..] {
        if let Some(action) = signal_map().get(&(address, word)) {
            trace!(%address, word, %action, "Matched signal action");
            return Ok(*action);
        }
        if let Some(action) = numeric_input(address, word) {
            trace!(%address, word, %action, "Matched numeric-input action");
            return Ok(action);
        }
    }

    Err(Error::Unrecognized {
        address,
        data: telegram.data.clone(),
    })
}
