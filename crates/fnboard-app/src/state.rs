// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::{NavMenu, context_id_from_path};

pub const ROOT_LOCATION: &str = "/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    pub location: String,
    pub menu: NavMenu,
    pub status_line: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            location: ROOT_LOCATION.to_owned(),
            menu: NavMenu::Collapsed,
            status_line: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppCommand {
    ToggleMenu,
    Navigate(String),
    SetStatus(String),
    ClearStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    MenuChanged(NavMenu),
    LocationChanged(String),
    StatusUpdated(String),
    StatusCleared,
}

impl AppState {
    pub fn at(location: impl Into<String>) -> Self {
        Self {
            location: normalize_location(location.into()),
            ..Self::default()
        }
    }

    pub fn context_id(&self) -> Option<&str> {
        context_id_from_path(&self.location)
    }

    pub fn dispatch(&mut self, command: AppCommand) -> Vec<AppEvent> {
        match command {
            AppCommand::ToggleMenu => {
                self.menu = self.menu.toggled();
                vec![AppEvent::MenuChanged(self.menu)]
            }
            AppCommand::Navigate(target) => {
                let target = normalize_location(target);
                if target == self.location {
                    return Vec::new();
                }
                self.location = target;
                vec![AppEvent::LocationChanged(self.location.clone())]
            }
            AppCommand::SetStatus(message) => vec![self.set_status(message)],
            AppCommand::ClearStatus => {
                self.status_line = None;
                vec![AppEvent::StatusCleared]
            }
        }
    }

    fn set_status(&mut self, message: String) -> AppEvent {
        self.status_line = Some(message.clone());
        AppEvent::StatusUpdated(message)
    }
}

fn normalize_location(location: String) -> String {
    if location.starts_with('/') {
        location
    } else {
        format!("/{location}")
    }
}

#[cfg(test)]
mod tests {
    use super::{AppCommand, AppEvent, AppState};
    use crate::NavMenu;

    #[test]
    fn toggle_menu_flips_and_reports() {
        let mut state = AppState::default();

        let opened = state.dispatch(AppCommand::ToggleMenu);
        assert_eq!(state.menu, NavMenu::Expanded);
        assert_eq!(opened, vec![AppEvent::MenuChanged(NavMenu::Expanded)]);

        let closed = state.dispatch(AppCommand::ToggleMenu);
        assert_eq!(state.menu, NavMenu::Collapsed);
        assert_eq!(closed, vec![AppEvent::MenuChanged(NavMenu::Collapsed)]);
    }

    #[test]
    fn navigate_changes_location_and_context() {
        let mut state = AppState::at("alexellis");
        assert_eq!(state.location, "/alexellis");
        assert_eq!(state.context_id(), Some("alexellis"));

        let events = state.dispatch(AppCommand::Navigate("/acme/figlet".to_owned()));
        assert_eq!(
            events,
            vec![AppEvent::LocationChanged("/acme/figlet".to_owned())]
        );
        assert_eq!(state.context_id(), Some("acme"));
    }

    #[test]
    fn navigate_to_current_location_is_silent() {
        let mut state = AppState::at("/alexellis");
        assert!(
            state
                .dispatch(AppCommand::Navigate("/alexellis".to_owned()))
                .is_empty()
        );
    }

    #[test]
    fn navigation_leaves_menu_alone() {
        let mut state = AppState::default();
        state.dispatch(AppCommand::ToggleMenu);
        state.dispatch(AppCommand::Navigate("/logout".to_owned()));
        assert_eq!(state.menu, NavMenu::Expanded);
    }

    #[test]
    fn status_set_and_clear() {
        let mut state = AppState::default();
        assert_eq!(
            state.dispatch(AppCommand::SetStatus("loaded".to_owned())),
            vec![AppEvent::StatusUpdated("loaded".to_owned())]
        );
        assert_eq!(state.status_line.as_deref(), Some("loaded"));

        assert_eq!(
            state.dispatch(AppCommand::ClearStatus),
            vec![AppEvent::StatusCleared]
        );
        assert_eq!(state.status_line, None);
    }

    #[test]
    fn default_location_has_no_context() {
        assert_eq!(AppState::default().context_id(), None);
    }
}
