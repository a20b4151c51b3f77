// SPDX-License-Identifier: MPL-2.0
use agipocket::app::{paths, Flags};

const HELP: &str = "\
AGIPOCKET desktop landing page

USAGE:
  agipocket [OPTIONS]

OPTIONS:
  -h, --help               Print this help and exit
  -V, --version            Print the version and exit
      --lang <CODE>        Locale override in BCP-47 form (e.g. en, zh-CN)
      --i18n-dir <PATH>    Load Fluent catalogs from PATH instead of the embedded ones
      --config-dir <PATH>  Read and write settings.toml under PATH
";

fn main() -> iced::Result {
    let flags = match parse_flags() {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("Error: {err}.");
            std::process::exit(1);
        }
    };

    paths::init_cli_overrides(flags.config_dir.clone());

    agipocket::app::run(flags)
}

fn parse_flags() -> Result<Flags, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }
    if args.contains(["-V", "--version"]) {
        println!("agipocket {}", env!("CARGO_PKG_VERSION"));
        std::process::exit(0);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        i18n_dir: args.opt_value_from_str("--i18n-dir")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        eprintln!("Warning: unused arguments: {remaining:?}");
    }

    Ok(flags)
}
