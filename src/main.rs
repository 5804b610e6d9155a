// SPDX-License-Identifier: MPL-2.0
//! Binary entry point: parses CLI flags and launches the application loop.

use iced_vitrine::app::{self, paths, Flags};

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let lang = args.opt_value_from_str("--lang").unwrap_or(None);
    let data_dir = args.opt_value_from_str("--data-dir").unwrap_or(None);
    let config_dir = args.opt_value_from_str("--config-dir").unwrap_or(None);

    // Directory overrides must be in place before anything resolves a path.
    paths::init_cli_overrides(data_dir, config_dir);

    let gallery_dir = args
        .finish()
        .into_iter()
        .next()
        .and_then(|s| s.into_string().ok());

    app::run(Flags { lang, gallery_dir })
}
