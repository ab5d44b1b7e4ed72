// SPDX-License-Identifier: MPL-2.0
use std::path::PathBuf;
use toast_notifier::app::{self, Flags};

fn main() -> iced::Result {
    if let Err(err) = simple_logger::SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .with_colors(true)
        .env()
        .init()
    {
        eprintln!("failed to initialize logger: {err}");
    }

    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        message: args.opt_value_from_str("--message").unwrap_or_else(|err| {
            log::warn!("ignoring --message: {err}");
            None
        }),
        kind: args.opt_value_from_str("--type").unwrap_or_else(|err| {
            log::warn!("ignoring --type: {err}");
            None
        }),
        config_path: args
            .opt_value_from_os_str("--config", |s| Ok::<_, String>(PathBuf::from(s)))
            .unwrap_or_else(|err| {
                log::warn!("ignoring --config: {err}");
                None
            }),
    };

    for extra in args.finish() {
        log::warn!("ignoring unexpected argument {:?}", extra);
    }

    app::run(flags)
}
