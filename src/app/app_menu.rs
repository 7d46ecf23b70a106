use crate::app::Message;
use cosmic::widget::menu;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MenuAction {
    PreviousCard,
    NextCard,
    FirstCard,
    LastCard,
    About,
    Settings,
}

impl menu::action::MenuAction for MenuAction {
    type Message = crate::app::Message;

    fn message(&self) -> Self::Message {
        match self {
            MenuAction::PreviousCard => Message::MenuAction(MenuAction::PreviousCard),
            MenuAction::NextCard => Message::MenuAction(MenuAction::NextCard),
            MenuAction::FirstCard => Message::MenuAction(MenuAction::FirstCard),
            MenuAction::LastCard => Message::MenuAction(MenuAction::LastCard),
            MenuAction::About => Message::MenuAction(MenuAction::About),
            MenuAction::Settings => Message::MenuAction(MenuAction::Settings),
        }
    }
}
