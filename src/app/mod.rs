// SPDX-License-Identifier: MPL-2.0
//! Application root state: a page whose body receives toasts.
//!
//! The `App` owns the document, shows toasts into it on request, and, when
//! auto-dismiss is enabled in the settings, sweeps expired toasts on a timer.
//! Startup flashes (CLI message, config warnings) are drained into the body
//! once the document is ready.

mod message;

pub use message::{Flags, Message};

use crate::config::{self, ThemeMode, SWEEP_INTERVAL_MS};
use crate::document::{Document, DocumentTree, NodeId};
use crate::notifications::{self, Category, Expiry, Flashes, DEFAULT_CATEGORY};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::stylesheet::Stylesheet;
use crate::ui::toast::{self, Toast};
use iced::widget::{button, column, row, text, text_input, Container, Stack};
use iced::{time, window, Element, Length, Subscription, Task, Theme};
use std::time::{Duration, Instant};

const WINDOW_DEFAULT_WIDTH: f32 = 720.0;
const WINDOW_DEFAULT_HEIGHT: f32 = 480.0;

/// Root Iced application state.
pub struct App {
    document: Document,
    stylesheet: Stylesheet,
    expiry: Option<Expiry>,
    theme_mode: ThemeMode,
    message_input: String,
    type_input: String,
    last_error: Option<String>,
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires an Fn boot closure; flags are consumed once
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window::Settings {
            size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
            ..window::Settings::default()
        })
        .subscription(App::subscription)
        .run()
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = match &flags.config_path {
            Some(path) => config::load_or_default(path),
            None => config::load(),
        };

        let mut flashes = Flashes::new();
        if let Some(warning) = config_warning {
            flashes.flash(format!("Settings ignored: {warning}"), "warning");
        }
        match (flags.message, flags.kind) {
            (Some(message), kind) => {
                let kind = kind.as_deref().unwrap_or(DEFAULT_CATEGORY);
                flashes.flash(message, kind);
            }
            (None, Some(kind)) => log::warn!("ignoring --type {kind:?} without --message"),
            (None, None) => {}
        }

        let mut app = App {
            document: Document::loading(),
            stylesheet: Stylesheet::default(),
            expiry: config
                .toast
                .auto_dismiss
                .then(|| Expiry::new(config.toast.dismiss_policy())),
            theme_mode: config.general.theme_mode,
            message_input: String::new(),
            type_input: "info".to_string(),
            last_error: None,
        };

        app.document.attach_body();
        let pending: Vec<Category> = flashes.peek().map(|n| n.category().clone()).collect();
        match flashes.drain_into(&mut app.document) {
            Ok(ids) => {
                let now = Instant::now();
                for (id, category) in ids.into_iter().zip(pending) {
                    app.track(id, &category, now);
                }
            }
            Err(err) => app.report(&err),
        }

        (app, Task::none())
    }

    fn title(&self) -> String {
        let count = self.document.body_children().len();
        if count == 0 {
            "Toast Notifier".to_string()
        } else {
            format!("Toast Notifier ({count})")
        }
    }

    fn theme(&self) -> Theme {
        match self.theme_mode {
            ThemeMode::Light => Theme::Light,
            ThemeMode::Dark => Theme::Dark,
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        if self.expiry.is_some() {
            time::every(Duration::from_millis(SWEEP_INTERVAL_MS)).map(Message::Tick)
        } else {
            Subscription::none()
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::MessageChanged(value) => self.message_input = value,
            Message::TypeChanged(value) => self.type_input = value,
            Message::Show => {
                let text = self.message_input.clone();
                let kind = self.type_input.clone();
                self.show(&text, &kind);
            }
            Message::Preset { message, kind } => self.show(message, kind),
            Message::Toast(toast::Message::Dismiss(id)) => self.dismiss(id),
            Message::Tick(now) => {
                if let Some(expiry) = self.expiry.as_mut() {
                    if let Err(err) = expiry.sweep(&mut self.document, now) {
                        log::error!("failed to sweep toasts: {}", err);
                        self.last_error = Some(err.to_string());
                    }
                }
            }
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        let inputs = row![
            text_input("Message", &self.message_input)
                .on_input(Message::MessageChanged)
                .on_submit(Message::Show)
                .width(Length::Fixed(sizing::INPUT_WIDTH)),
            text_input("Type", &self.type_input)
                .on_input(Message::TypeChanged)
                .on_submit(Message::Show)
                .width(Length::Fixed(sizing::INPUT_WIDTH / 2.0)),
            button(text("Show")).on_press(Message::Show),
        ]
        .spacing(spacing::XS);

        let presets = row![
            preset_button("Saved!", "success"),
            preset_button("Something went wrong. Try again.", "error"),
            preset_button("<script>x</script>", "info"),
        ]
        .spacing(spacing::XS);

        let mut page = column![text("Toast Notifier").size(typography::TITLE_MD), inputs, presets]
            .spacing(spacing::MD);
        if let Some(error) = &self.last_error {
            page = page.push(text(error).size(typography::BODY));
        }

        let page = Container::new(page)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(spacing::LG);

        Stack::new()
            .push(page)
            .push(Toast::view_body(&self.document, &self.stylesheet).map(Message::Toast))
            .into()
    }

    fn show(&mut self, message: &str, kind: &str) {
        match notifications::show_notification(&mut self.document, message, kind) {
            Ok(id) => {
                self.last_error = None;
                self.track(id, &Category::from(kind), Instant::now());
            }
            Err(err) => self.report(&err),
        }
    }

    fn dismiss(&mut self, id: NodeId) {
        let result = match self.expiry.as_mut() {
            Some(expiry) => expiry.dismiss(&mut self.document, id).map(|_| ()),
            None => match self.document.parent(id) {
                Some(parent) => self.document.remove_child(parent, id),
                None => Ok(()),
            },
        };
        if let Err(err) = result {
            self.report(&err);
        }
    }

    fn track(&mut self, id: NodeId, category: &Category, now: Instant) {
        if let Some(expiry) = self.expiry.as_mut() {
            expiry.track(id, category, now);
        }
    }

    fn report(&mut self, err: &crate::error::Error) {
        log::error!("toast failed: {}", err);
        self.last_error = Some(err.to_string());
    }
}

fn preset_button(message: &'static str, kind: &'static str) -> Element<'static, Message> {
    button(text(format!("{kind}: {message}")))
        .on_press(Message::Preset { message, kind })
        .into()
}
