/*
 * Encapsulates native menu creation and action routing. The declarative
 * `MenuItemConfig` tree from the UI description layer is turned into a muda
 * menu here; custom entries are registered in a registry mapping native menu
 * ids back to semantic `MenuAction`s, which the run loop consults when a menu
 * event arrives. Installation fully replaces the process-wide menu.
 */

use crate::core::constants;
use crate::platform_layer::error::{PlatformError, Result as PlatformResult};
use crate::platform_layer::types::{MenuAction, MenuItemConfig, MenuRole};

use muda::accelerator::Accelerator;
use std::collections::HashMap;

/// Owns the installed menu (keeping it alive) and the action mapping.
pub(crate) struct MenuRegistry {
    menu: Option<muda::Menu>,
    actions: HashMap<muda::MenuId, MenuAction>,
}

impl MenuRegistry {
    pub(crate) fn new() -> Self {
        MenuRegistry {
            menu: None,
            actions: HashMap::new(),
        }
    }

    pub(crate) fn action_for(&self, id: &muda::MenuId) -> Option<MenuAction> {
        self.actions.get(id).copied()
    }
}

/*
 * Builds the native menu from the template and installs it as the
 * process-wide application menu, replacing (not merging with) any previous
 * menu. The previous muda menu is dropped once the new one is in place.
 */
pub(crate) fn install_application_menu(
    registry: &mut MenuRegistry,
    window: &tao::window::Window,
    items: &[MenuItemConfig],
) -> PlatformResult<()> {
    let menu = muda::Menu::new();
    registry.actions.clear();

    for item in items {
        match item {
            MenuItemConfig::Submenu { text, children } => {
                let submenu = muda::Submenu::new(text, true);
                append_children(&submenu, children, &mut registry.actions)?;
                menu.append(&submenu)?;
            }
            other => {
                return Err(PlatformError::OperationFailed(format!(
                    "Top-level menu entry must be a submenu, got {:?}",
                    other
                )));
            }
        }
    }

    install_native(&menu, window)?;
    registry.menu = Some(menu);
    log::debug!(
        "Platform: Application menu installed with {} custom actions.",
        registry.actions.len()
    );
    Ok(())
}

fn append_children(
    parent: &muda::Submenu,
    children: &[MenuItemConfig],
    actions: &mut HashMap<muda::MenuId, MenuAction>,
) -> PlatformResult<()> {
    for child in children {
        match child {
            MenuItemConfig::Action {
                action,
                text,
                accelerator,
            } => {
                let accel = accelerator.as_deref().and_then(parse_accelerator);
                let item = muda::MenuItem::new(text, true, accel);
                actions.insert(item.id().clone(), *action);
                parent.append(&item)?;
            }
            MenuItemConfig::Native { role } => {
                parent.append(&predefined_for_role(*role))?;
            }
            MenuItemConfig::Separator => {
                parent.append(&muda::PredefinedMenuItem::separator())?;
            }
            MenuItemConfig::Submenu { text, children } => {
                let nested = muda::Submenu::new(text, true);
                append_children(&nested, children, actions)?;
                parent.append(&nested)?;
            }
        }
    }
    Ok(())
}

fn parse_accelerator(spec: &str) -> Option<Accelerator> {
    match spec.parse() {
        Ok(accel) => Some(accel),
        Err(e) => {
            log::warn!("Platform: Ignoring unparsable accelerator '{}': {}", spec, e);
            None
        }
    }
}

fn predefined_for_role(role: MenuRole) -> muda::PredefinedMenuItem {
    use muda::PredefinedMenuItem;
    match role {
        MenuRole::Cut => PredefinedMenuItem::cut(None),
        MenuRole::Copy => PredefinedMenuItem::copy(None),
        MenuRole::Paste => PredefinedMenuItem::paste(None),
        MenuRole::SelectAll => PredefinedMenuItem::select_all(None),
        MenuRole::Minimize => PredefinedMenuItem::minimize(None),
        MenuRole::CloseWindow => PredefinedMenuItem::close_window(None),
        MenuRole::Zoom => PredefinedMenuItem::maximize(Some("Zoom")),
        MenuRole::Front => PredefinedMenuItem::bring_all_to_front(None),
        MenuRole::About => PredefinedMenuItem::about(
            None,
            Some(muda::AboutMetadata {
                name: Some(constants::APP_DISPLAY_NAME.to_string()),
                ..Default::default()
            }),
        ),
        MenuRole::Services => PredefinedMenuItem::services(None),
        MenuRole::Hide => PredefinedMenuItem::hide(None),
        MenuRole::HideOthers => PredefinedMenuItem::hide_others(None),
        MenuRole::ShowAll => PredefinedMenuItem::show_all(None),
        MenuRole::Quit => PredefinedMenuItem::quit(None),
    }
}

fn install_native(menu: &muda::Menu, window: &tao::window::Window) -> PlatformResult<()> {
    #[cfg(target_os = "macos")]
    {
        // The macOS menu bar is application-wide, not per window.
        let _ = window;
        menu.init_for_nsapp();
    }

    #[cfg(target_os = "windows")]
    {
        use tao::platform::windows::WindowExtWindows;
        unsafe {
            menu.init_for_hwnd(window.hwnd() as isize)?;
        }
    }

    #[cfg(target_os = "linux")]
    {
        use gtk::prelude::*;
        use tao::platform::unix::WindowExtUnix;
        let gtk_window = window.gtk_window();
        menu.init_for_gtk_window(gtk_window.upcast_ref::<gtk::Window>(), None::<&gtk::Box>)?;
    }

    Ok(())
}
