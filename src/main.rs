use dictswap::app::{self, Flags};
use pico_args;

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        lang: args.opt_value_from_str("--lang").unwrap_or(None),
        settings_path: args.opt_value_from_str("--settings").unwrap_or(None),
    };

    app::run(flags)
}
