// SPDX-License-Identifier: MPL-2.0
//! Demo application showing the toast manager inside an Iced window.
//!
//! The `App` owns the toast manager and a diagnostics collector, feeds a
//! periodic tick to the manager and draws the toast overlay above a small
//! control panel.

mod message;

pub use message::{Flags, Message};

use crate::config;
use crate::diagnostics::{DiagnosticsCollector, WarningEvent, WarningType};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::notifications::{
    Container, EmbeddedMessages, FlashFile, Manager, MessageSource, Severity, Template, Toast,
};
use iced::widget::{button, column, row, stack, text, Container as Frame};
use iced::{time, window, Element, Length, Subscription, Task, Theme};
use std::fmt;
use std::time::Duration;

pub const WINDOW_DEFAULT_HEIGHT: u32 = 520;
pub const WINDOW_DEFAULT_WIDTH: u32 = 760;

/// Timer resolution of the demo; finer than the progress interval.
const TICK_INTERVAL: Duration = Duration::from_millis(16);

/// Root Iced application state.
pub struct App {
    toasts: Manager,
    diagnostics: DiagnosticsCollector,
    shown: usize,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("toasts", &self.toasts.len())
            .field("diagnostics", &self.diagnostics.len())
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires Fn for boot, flags are only consumed once
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (toast_config, config_warning) = match &flags.config_path {
            Some(path) => config::load_or_default(path),
            None => config::load(),
        };

        let diagnostics = DiagnosticsCollector::default();
        let mut toasts = Manager::with_settings(toast_config.settings());
        toasts.set_diagnostics(diagnostics.handle());

        let mut source: Box<dyn MessageSource> = match flags.flash_path {
            Some(path) => Box::new(FlashFile::new(path)),
            None => Box::new(EmbeddedMessages::empty()),
        };
        toasts.setup(
            Some(Container::new()),
            Some(Template::standard()),
            source.as_mut(),
        );

        if let Some(warning) = config_warning {
            diagnostics.handle().log_warning(WarningEvent::new(
                WarningType::ConfigurationIssue,
                warning.clone(),
            ));
            toasts.warning(warning, None);
        }

        let app = App {
            toasts,
            diagnostics,
            shown: 0,
        };
        (app, Task::none())
    }

    fn title(&self) -> String {
        format!("Iced Toasts ({} active)", self.toasts.len())
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Show(severity) => {
                self.shown += 1;
                let text = format!("{severity} notification #{}", self.shown);
                self.toasts.show(text, severity, None);
            }
            Message::ShowPersistent => {
                self.shown += 1;
                let text = format!("Persistent notification #{}", self.shown);
                self.toasts.info(text, Some(Duration::ZERO));
            }
            Message::DismissAll => {
                self.toasts.dismiss_all();
            }
            Message::Notification(message) => {
                self.toasts.handle_message(&message);
            }
            Message::Tick(_) => {
                self.toasts.poll();
                self.diagnostics.process_pending();
            }
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        let severity_buttons = row(Severity::ALL.into_iter().map(|severity| {
            button(text(severity.as_str()))
                .on_press(Message::Show(severity))
                .into()
        }))
        .spacing(spacing::XS);

        let controls = column![
            text("Toast notifications").size(typography::TITLE_MD),
            severity_buttons,
            row![
                button(text("persistent")).on_press(Message::ShowPersistent),
                button(text("dismiss all")).on_press(Message::DismissAll),
            ]
            .spacing(spacing::XS),
            text(format!(
                "{} active, {} diagnostic events",
                self.toasts.len(),
                self.diagnostics.len()
            )),
        ]
        .spacing(spacing::MD)
        .padding(spacing::LG);

        let overlay = match self.toasts.container() {
            Some(container) => Toast::view_overlay(container).map(Message::Notification),
            None => Frame::new(text("")).into(),
        };

        stack![
            Frame::new(controls).width(Length::Fill).height(Length::Fill),
            overlay
        ]
        .into()
    }

    fn subscription(&self) -> Subscription<Message> {
        time::every(TICK_INTERVAL).map(Message::Tick)
    }
}
