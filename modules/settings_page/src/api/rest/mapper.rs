//! Mapper implementations for converting between DTOs and contract models

use super::dto::*;
use crate::contract;

// ===== Display mode conversions =====

impl From<contract::QuotesDisplayMode> for QuotesDisplayModeDto {
    fn from(mode: contract::QuotesDisplayMode) -> Self {
        match mode {
            contract::QuotesDisplayMode::PreWorkout => Self::PreWorkout,
            contract::QuotesDisplayMode::PostWorkout => Self::PostWorkout,
            contract::QuotesDisplayMode::RestTimer => Self::RestTimer,
            contract::QuotesDisplayMode::Dashboard => Self::Dashboard,
        }
    }
}

impl From<QuotesDisplayModeDto> for contract::QuotesDisplayMode {
    fn from(dto: QuotesDisplayModeDto) -> Self {
        match dto {
            QuotesDisplayModeDto::PreWorkout => Self::PreWorkout,
            QuotesDisplayModeDto::PostWorkout => Self::PostWorkout,
            QuotesDisplayModeDto::RestTimer => Self::RestTimer,
            QuotesDisplayModeDto::Dashboard => Self::Dashboard,
        }
    }
}

// ===== Page data conversions =====

impl From<contract::UserSettingsView> for UserSettingsDto {
    fn from(view: contract::UserSettingsView) -> Self {
        Self {
            motivational_quotes_enabled: view.motivational_quotes_enabled,
            quotes_display_modes: view
                .quotes_display_modes
                .into_vec()
                .into_iter()
                .map(Into::into)
                .collect(),
        }
    }
}

impl From<contract::SettingsViewModel> for SettingsPageDto {
    fn from(vm: contract::SettingsViewModel) -> Self {
        Self {
            has_error: vm.has_error,
            user_settings: vm.user_settings.into(),
            error_message: vm.error_message,
        }
    }
}

// ===== Update conversions =====

impl From<UpdateUserSettingsRequest> for contract::UserSettingsUpdate {
    fn from(req: UpdateUserSettingsRequest) -> Self {
        Self {
            motivational_quotes_enabled: req.motivational_quotes_enabled,
            quotes_display_modes: req
                .quotes_display_modes
                .into_iter()
                .map(Into::into)
                .collect(),
        }
    }
}
