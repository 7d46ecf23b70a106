// SPDX-License-Identifier: GPL-3.0-only

use std::collections::HashMap;

use cosmic::iced::keyboard::Key;
use cosmic::iced::keyboard::key::Named;
use cosmic::widget::menu::key_bind::KeyBind;
use cosmic::widget::menu::key_bind::Modifier;

use crate::app::app_menu::MenuAction;

/// COSMIC handled keybinds
pub fn key_binds() -> HashMap<KeyBind, MenuAction> {
    let mut key_binds = HashMap::new();

    macro_rules! bind {
        ([$($modifier:ident),* $(,)?], $key:expr, $action:ident) => {{
            key_binds.insert(
                KeyBind {
                    modifiers: vec![$(Modifier::$modifier),*],
                    key: $key,
                },
                MenuAction::$action,
            );
        }};
    }

    bind!([], Key::Named(Named::ArrowLeft), PreviousCard);
    bind!([], Key::Named(Named::ArrowRight), NextCard);
    bind!([], Key::Named(Named::Home), FirstCard);
    bind!([], Key::Named(Named::End), LastCard);

    bind!([Ctrl], Key::Character(",".into()), Settings);
    bind!([Ctrl], Key::Character("i".into()), About);

    key_binds
}
