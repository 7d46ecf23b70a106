// SPDX-License-Identifier: GPL-3.0-only

use app::AppModel;
mod app;
mod config;
mod core;
mod flags;
mod icons;
mod key_binds;

/// The `cosmic::app::run()` function is the starting point of your application.
/// It takes two arguments:
/// - `settings` is a structure that contains everything relevant with your app's configuration, such as antialiasing, themes, icons, etc...
/// - `flags` is the data that your app needs to use before it starts.
///  If your app does not need any flags, you can pass in `()`.
fn main() -> cosmic::iced::Result {
    let (settings, flags) = core::settings::init();
    cosmic::app::run::<AppModel>(settings, flags)
}
