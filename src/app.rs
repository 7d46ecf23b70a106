// SPDX-License-Identifier: GPL-3.0-only

use std::collections::HashMap;
use std::sync::Arc;

use cosmic::app::{Core, Task, context_drawer};
use cosmic::cosmic_config;
use cosmic::iced::{Alignment, Event, Length, Subscription};
use cosmic::iced_core::keyboard::{Key, Modifiers};
use cosmic::widget::menu::Action;
use cosmic::widget::{self, menu};
use cosmic::{Application, ApplicationExt, Element, cosmic_theme, theme};

use crate::app::app_menu::MenuAction;
use crate::app::context_page::ContextPage;
use crate::app::core::catalog::PatternCatalog;
use crate::app::core::load_catalog;
use crate::app::screen::{PatternsScreen, patterns};
use crate::config::{AppTheme, PatternDeckConfig};
use crate::core::localization;
use crate::fl;
use crate::flags::Flags;
use crate::key_binds::key_binds;

pub mod app_menu;
pub mod context_page;
pub mod core;
pub mod screen;
pub mod widgets;

const REPOSITORY: &str = env!("CARGO_PKG_REPOSITORY");
const APP_ICON: &[u8] =
    include_bytes!("../res/icons/hicolor/256x256/apps/io.github.patterndeck.PatternDeck.svg");

/// The application model stores app-specific state used to describe its interface and
/// drive its logic.
pub struct AppModel {
    /// Application state which is managed by the COSMIC runtime.
    core: Core,
    /// Display a context drawer with the designated page if defined.
    context_page: ContextPage,
    /// Key bindings for the application's menu bar.
    key_binds: HashMap<menu::KeyBind, MenuAction>,
    /// Application Keyboard Modifiers (current state)
    modifiers: Modifiers,
    /// Handler to the application config file
    config_handler: Option<cosmic_config::Config>,
    /// Configuration data that persists between application runs.
    config: PatternDeckConfig,
    /// Application Themes
    app_themes: Vec<String>,
    /// Current state of the application
    state: State,
}

/// Current state of the application
pub enum State {
    Loading,
    Ready { screen: PatternsScreen },
}

/// Messages emitted by the application and its widgets.
#[derive(Debug, Clone)]
pub enum Message {
    OpenRepositoryUrl,
    ToggleContextPage(ContextPage),
    UpdateConfig(PatternDeckConfig),
    UpdateTheme(usize),
    Key(Modifiers, Key),
    Modifiers(Modifiers),
    MenuAction(MenuAction),

    CatalogLoaded(Arc<PatternCatalog>),

    Patterns(patterns::Message),
}

/// Create a COSMIC application from the app model
impl Application for AppModel {
    /// The async executor that will be used to run your application's commands.
    type Executor = cosmic::executor::Default;

    /// Data that your application receives to its init method.
    type Flags = Flags;

    /// Messages which the application and its widgets will emit.
    type Message = Message;

    /// Unique identifier in RDNN (reverse domain name notation) format.
    const APP_ID: &'static str = "io.github.patterndeck.PatternDeck";

    fn core(&self) -> &Core {
        &self.core
    }

    fn core_mut(&mut self) -> &mut Core {
        &mut self.core
    }

    /// Initializes the application with any given flags and startup commands.
    fn init(core: Core, flags: Self::Flags) -> (Self, Task<Self::Message>) {
        // Construct the app model with the runtime's core.
        let mut app = AppModel {
            core,
            context_page: ContextPage::default(),
            key_binds: key_binds(),
            modifiers: Modifiers::empty(),
            config_handler: flags.config_handler,
            config: flags.config,
            app_themes: vec![fl!("match-desktop"), fl!("dark"), fl!("light")],
            state: State::Loading,
        };

        let tasks = vec![
            app.update_title(),
            Task::perform(load_catalog(), |catalog| {
                cosmic::action::app(Message::CatalogLoaded(catalog))
            }),
        ];

        (app, Task::batch(tasks))
    }

    /// Elements to pack at the start of the header bar.
    fn header_start(&self) -> Vec<Element<Self::Message>> {
        let menu_bar = menu::bar(vec![
            menu::Tree::with_children(
                menu::root(fl!("go")),
                menu::items(
                    &self.key_binds,
                    vec![
                        menu::Item::Button(fl!("previous-card"), None, MenuAction::PreviousCard),
                        menu::Item::Button(fl!("next-card"), None, MenuAction::NextCard),
                        menu::Item::Button(fl!("first-card"), None, MenuAction::FirstCard),
                        menu::Item::Button(fl!("last-card"), None, MenuAction::LastCard),
                    ],
                ),
            ),
            menu::Tree::with_children(
                menu::root(fl!("view")),
                menu::items(
                    &self.key_binds,
                    vec![
                        menu::Item::Button(fl!("about"), None, MenuAction::About),
                        menu::Item::Button(fl!("settings"), None, MenuAction::Settings),
                    ],
                ),
            ),
        ])
        .item_height(menu::ItemHeight::Dynamic(40))
        .item_width(menu::ItemWidth::Uniform(270))
        .spacing(4.0);

        vec![menu_bar.into()]
    }

    /// Display a context drawer if the context page is requested.
    fn context_drawer(&self) -> Option<context_drawer::ContextDrawer<Self::Message>> {
        if !self.core.window.show_context {
            return None;
        }

        self.context_page.display(self)
    }

    fn view(&self) -> Element<Self::Message> {
        let content: Element<Message> = match &self.state {
            State::Loading => widget::container(widget::text(fl!("loading")))
                .center(Length::Fill)
                .into(),
            State::Ready { screen } => screen.view().map(Message::Patterns),
        };

        widget::Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    /// Register subscriptions for this application.
    ///
    /// Subscriptions are long-running async tasks running in the background which
    /// emit messages to the application through a channel. They are started at the
    /// beginning of the application, and persist through its lifetime.
    fn subscription(&self) -> Subscription<Self::Message> {
        let mut subscriptions = vec![
            // Watch for key_bind inputs and wheel scrolling over the deck
            cosmic::iced::event::listen_with(|event, status, _| match event {
                Event::Keyboard(cosmic::iced::keyboard::Event::KeyPressed {
                    key,
                    modifiers,
                    ..
                }) => match status {
                    cosmic::iced::event::Status::Ignored => Some(Message::Key(modifiers, key)),
                    cosmic::iced::event::Status::Captured => None,
                },
                Event::Keyboard(cosmic::iced::keyboard::Event::ModifiersChanged(modifiers)) => {
                    Some(Message::Modifiers(modifiers))
                }
                Event::Mouse(cosmic::iced::mouse::Event::WheelScrolled { delta }) => match status {
                    cosmic::iced::event::Status::Ignored => {
                        Some(Message::Patterns(patterns::Message::Wheel(delta)))
                    }
                    cosmic::iced::event::Status::Captured => None,
                },
                _ => None,
            }),
            // Watch for application configuration changes.
            self.core()
                .watch_config::<PatternDeckConfig>(Self::APP_ID)
                .map(|update| {
                    for why in update.errors {
                        tracing::error!(?why, "app config error");
                    }

                    Message::UpdateConfig(update.config)
                }),
        ];

        if let State::Ready { screen } = &self.state {
            subscriptions.push(screen.subscription().map(Message::Patterns));
        }

        Subscription::batch(subscriptions)
    }

    /// Handles messages emitted by the application and its widgets.
    ///
    /// Tasks may be returned for asynchronous execution of code in the background
    /// on the application's async runtime.
    fn update(&mut self, message: Self::Message) -> Task<Self::Message> {
        match message {
            Message::OpenRepositoryUrl => {
                _ = open::that_detached(REPOSITORY);
            }

            Message::ToggleContextPage(context_page) => {
                if self.context_page == context_page {
                    // Close the context drawer if the toggled context page is the same.
                    self.core.window.show_context = !self.core.window.show_context;
                } else {
                    // Open the context drawer to display the requested context page.
                    self.context_page = context_page;
                    self.core.window.show_context = true;
                }
            }

            Message::UpdateConfig(config) => {
                self.config = config;
            }

            Message::UpdateTheme(index) => {
                let app_theme = match index {
                    1 => AppTheme::Dark,
                    2 => AppTheme::Light,
                    _ => AppTheme::System,
                };

                if let Some(config_handler) = &self.config_handler {
                    if let Err(err) = self.config.set_app_theme(config_handler, app_theme) {
                        tracing::error!("failed to save the app theme: {err}");
                    }
                } else {
                    self.config.app_theme = app_theme;
                }

                return cosmic::app::command::set_theme(self.config.app_theme.theme());
            }

            Message::Key(modifiers, key) => {
                for (key_bind, action) in self.key_binds.iter() {
                    if key_bind.matches(modifiers, &key) {
                        return self.update(action.message());
                    }
                }
            }

            // Updates the current state of keyboard modifiers
            Message::Modifiers(modifiers) => {
                self.modifiers = modifiers;
            }

            Message::MenuAction(action) => match action {
                MenuAction::PreviousCard => {
                    return self.update(Message::Patterns(patterns::Message::PreviousCard));
                }
                MenuAction::NextCard => {
                    return self.update(Message::Patterns(patterns::Message::NextCard));
                }
                MenuAction::FirstCard => {
                    return self.update(Message::Patterns(patterns::Message::FirstCard));
                }
                MenuAction::LastCard => {
                    return self.update(Message::Patterns(patterns::Message::LastCard));
                }
                MenuAction::About => {
                    return self.update(Message::ToggleContextPage(ContextPage::About));
                }
                MenuAction::Settings => {
                    return self.update(Message::ToggleContextPage(ContextPage::Settings));
                }
            },

            // Sets the loaded catalog in the appstate
            Message::CatalogLoaded(catalog) => {
                self.state = State::Ready {
                    screen: PatternsScreen::new(catalog),
                };
                return self.update_title();
            }

            Message::Patterns(message) => {
                let State::Ready { screen } = &mut self.state else {
                    return Task::none();
                };

                match screen.update(message) {
                    patterns::Action::None => {}
                    patterns::Action::PageChanged => return self.update_title(),
                }
            }
        }

        Task::none()
    }
}

impl AppModel {
    /// The about page for this app.
    pub fn about(&self) -> Element<Message> {
        let cosmic_theme::Spacing { space_xxs, .. } = theme::active().cosmic().spacing;

        let icon = widget::svg(widget::svg::Handle::from_memory(APP_ICON));

        let title = widget::text::title3(fl!("app-title"));

        let link = widget::button::link(REPOSITORY)
            .on_press(Message::OpenRepositoryUrl)
            .padding(0);

        widget::column()
            .push(icon)
            .push(title)
            .push(link)
            .align_x(Alignment::Center)
            .spacing(space_xxs)
            .into()
    }

    /// Updates the header and window titles.
    pub fn update_title(&mut self) -> Task<Message> {
        let mut window_title = fl!("app-title");

        if let State::Ready { screen } = &self.state {
            if let Some(pattern) = screen.current_pattern() {
                window_title.push_str(" — ");
                window_title.push_str(&localization::text(pattern.name));
            }
        }

        if let Some(id) = self.core.main_window_id() {
            self.set_window_title(window_title, id)
        } else {
            Task::none()
        }
    }

    pub fn settings(&self) -> Element<Message> {
        let app_theme_selected = match self.config.app_theme {
            AppTheme::Dark => 1,
            AppTheme::Light => 2,
            AppTheme::System => 0,
        };

        widget::settings::view_column(vec![widget::settings::section()
            .title(fl!("appearance"))
            .add(
                widget::settings::item::builder(fl!("theme")).control(widget::dropdown(
                    &self.app_themes,
                    Some(app_theme_selected),
                    Message::UpdateTheme,
                )),
            )
            .into()])
        .into()
    }
}
