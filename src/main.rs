// SPDX-License-Identifier: MPL-2.0
use iced_toasts::app::{self, Flags};
use std::path::PathBuf;

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let config_path = args
        .opt_value_from_str::<_, PathBuf>("--config")
        .unwrap_or_else(|err| {
            eprintln!("[WARN] Ignoring --config: {err}");
            None
        });
    let flash_path = args
        .opt_value_from_str::<_, PathBuf>("--flash")
        .unwrap_or_else(|err| {
            eprintln!("[WARN] Ignoring --flash: {err}");
            None
        });

    let remaining = args.finish();
    if !remaining.is_empty() {
        eprintln!("[WARN] Ignoring unexpected arguments: {remaining:?}");
    }

    app::run(Flags {
        config_path,
        flash_path,
    })
}
