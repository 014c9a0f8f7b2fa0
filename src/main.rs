use home_iq::app::{self, paths, Flags};
use pico_args;

const HELP: &str = "\
HomeIQ - a smart home dashboard

USAGE:
  home_iq [OPTIONS]

OPTIONS:
  --lang <tag>         Display language for this session (en, de)
  --config-dir <path>  Directory holding settings.toml
  --data-dir <path>    Directory holding the persisted session state
  -h, --help           Print this help and exit
  -V, --version        Print the version and exit
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }
    if args.contains(["-V", "--version"]) {
        println!("home_iq {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang").unwrap(),
    };

    paths::install_cli_overrides(
        args.opt_value_from_str("--data-dir").unwrap(),
        args.opt_value_from_str("--config-dir").unwrap(),
    );

    app::run(flags)
}
