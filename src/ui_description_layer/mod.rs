/*
 * This module is responsible for defining the static structure of the
 * application menu. It builds an ordered, declarative `MenuItemConfig` tree
 * as a pure function of the `Platform` tag; the platform layer turns the tree
 * into the native menu. Platform-conditional pieces (the macOS identity
 * submenu, the macOS Window submenu, accelerator modifiers) are composed into
 * the final template here rather than patched in afterwards.
 */

use crate::platform_layer::{MenuAction, MenuItemConfig, MenuRole, Platform};

/*
 * Builds the full application menu template. Top-level ordering is
 * {File, Edit, View, Window, Help, Developer}; on macOS an application
 * identity submenu labeled with the display name is prepended and the Window
 * submenu follows the macOS convention (close, minimize, zoom, front).
 * Called once per window-creation cycle; the result is installed wholesale.
 */
pub fn build_application_menu(platform: Platform, app_name: &str) -> Vec<MenuItemConfig> {
    let mut menu = Vec::new();
    if platform == Platform::MacOs {
        menu.push(app_identity_menu(app_name));
    }
    menu.push(file_menu(platform));
    menu.push(edit_menu());
    menu.push(view_menu());
    menu.push(window_menu(platform));
    menu.push(help_menu());
    menu.push(developer_menu(platform));
    menu
}

fn app_identity_menu(app_name: &str) -> MenuItemConfig {
    MenuItemConfig::Submenu {
        text: app_name.to_string(),
        children: vec![
            MenuItemConfig::Native {
                role: MenuRole::About,
            },
            MenuItemConfig::Separator,
            MenuItemConfig::Native {
                role: MenuRole::Services,
            },
            MenuItemConfig::Separator,
            MenuItemConfig::Native {
                role: MenuRole::Hide,
            },
            MenuItemConfig::Native {
                role: MenuRole::HideOthers,
            },
            MenuItemConfig::Native {
                role: MenuRole::ShowAll,
            },
            MenuItemConfig::Separator,
            MenuItemConfig::Native {
                role: MenuRole::Quit,
            },
        ],
    }
}

fn file_menu(platform: Platform) -> MenuItemConfig {
    let accelerator = match platform {
        Platform::MacOs => "Cmd+O",
        _ => "Ctrl+Shift+O",
    };
    MenuItemConfig::Submenu {
        text: "File".to_string(),
        children: vec![MenuItemConfig::Action {
            action: MenuAction::OpenFile,
            text: "Open File".to_string(),
            accelerator: Some(accelerator.to_string()),
        }],
    }
}

fn edit_menu() -> MenuItemConfig {
    MenuItemConfig::Submenu {
        text: "Edit".to_string(),
        children: vec![
            MenuItemConfig::Native {
                role: MenuRole::Cut,
            },
            MenuItemConfig::Native {
                role: MenuRole::Copy,
            },
            MenuItemConfig::Native {
                role: MenuRole::Paste,
            },
            MenuItemConfig::Native {
                role: MenuRole::SelectAll,
            },
        ],
    }
}

fn view_menu() -> MenuItemConfig {
    MenuItemConfig::Submenu {
        text: "View".to_string(),
        children: vec![
            MenuItemConfig::Action {
                action: MenuAction::ReloadContent,
                text: "Reload".to_string(),
                accelerator: None,
            },
            MenuItemConfig::Separator,
            MenuItemConfig::Action {
                action: MenuAction::ResetZoom,
                text: "Actual Size".to_string(),
                accelerator: None,
            },
            MenuItemConfig::Action {
                action: MenuAction::ZoomIn,
                text: "Zoom In".to_string(),
                accelerator: None,
            },
            MenuItemConfig::Action {
                action: MenuAction::ZoomOut,
                text: "Zoom Out".to_string(),
                accelerator: None,
            },
            MenuItemConfig::Separator,
            MenuItemConfig::Action {
                action: MenuAction::ToggleFullScreen,
                text: "Toggle Full Screen".to_string(),
                accelerator: None,
            },
        ],
    }
}

fn window_menu(platform: Platform) -> MenuItemConfig {
    let children = if platform == Platform::MacOs {
        vec![
            MenuItemConfig::Native {
                role: MenuRole::CloseWindow,
            },
            MenuItemConfig::Native {
                role: MenuRole::Minimize,
            },
            MenuItemConfig::Native {
                role: MenuRole::Zoom,
            },
            MenuItemConfig::Native {
                role: MenuRole::Front,
            },
        ]
    } else {
        vec![
            MenuItemConfig::Native {
                role: MenuRole::Minimize,
            },
            MenuItemConfig::Native {
                role: MenuRole::CloseWindow,
            },
        ]
    };
    MenuItemConfig::Submenu {
        text: "Window".to_string(),
        children,
    }
}

fn help_menu() -> MenuItemConfig {
    MenuItemConfig::Submenu {
        text: "Help".to_string(),
        children: vec![MenuItemConfig::Action {
            action: MenuAction::LearnMore,
            text: "Learn More".to_string(),
            accelerator: None,
        }],
    }
}

fn developer_menu(platform: Platform) -> MenuItemConfig {
    let accelerator = match platform {
        Platform::MacOs => "Alt+Cmd+I",
        _ => "Ctrl+Shift+I",
    };
    MenuItemConfig::Submenu {
        text: "Developer".to_string(),
        children: vec![MenuItemConfig::Action {
            action: MenuAction::ToggleDevTools,
            text: "Toggle Developer Tools".to_string(),
            accelerator: Some(accelerator.to_string()),
        }],
    }
}
