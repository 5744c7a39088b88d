// SPDX-License-Identifier: MPL-2.0
use std::path::Path;
use std::process::ExitCode;
use video_time_controls::app::{self, Flags};
use video_time_controls::config;
use video_time_controls::controls::capture_time;
use video_time_controls::error::{Error, Result};
use video_time_controls::i18n::fluent::I18n;

const HELP: &str = "\
video-time-controls: frame-accurate playback controls demo

USAGE:
  video-time-controls [OPTIONS]

OPTIONS:
  -h, --help               Print this help
      --lang <LOCALE>      Interface language (e.g. en-US, fr)
      --fps <N>            Frames per second of the clip [default: 12]
      --duration <SECS>    Length of the synthetic clip [default: 20]
      --start-time-ms <MS> Start of synthesized capture times (ms since epoch)
      --captures <FILE>    Capture time labels, one per line
      --no-autoplay        Do not start playing on load
      --no-loop            Stop at the end of the clip
      --fill-screen        Fill the window instead of native fullscreen
      --hide-timestamps    Hide the capture time readout
      --hide-speed         Hide the speed toggles
      --hide-fullscreen    Hide the fullscreen button
      --user-agent <UA>    Pick the desktop or touch layout from a user agent
      --save-settings      Store the preference flags in settings.toml
";

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("video_time_controls=info")),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return ExitCode::SUCCESS;
    }

    let flags = match parse_flags(args) {
        Ok(flags) => flags,
        Err(err) => {
            report(&err);
            return ExitCode::FAILURE;
        }
    };

    match app::run(flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "application error");
            ExitCode::FAILURE
        }
    }
}

fn parse_flags(mut args: pico_args::Arguments) -> Result<Flags> {
    let arg_error = |err: pico_args::Error| Error::Config(err.to_string());

    let lang: Option<String> = args.opt_value_from_str("--lang").map_err(arg_error)?;
    let captures_path: Option<String> = args.opt_value_from_str("--captures").map_err(arg_error)?;
    let capture_times = captures_path
        .as_deref()
        .map(|path| capture_time::read_labels(Path::new(path)))
        .transpose()?;

    let flags = Flags {
        fps: args.opt_value_from_str("--fps").map_err(arg_error)?,
        duration: args.opt_value_from_str("--duration").map_err(arg_error)?,
        start_time_ms: args.opt_value_from_str("--start-time-ms").map_err(arg_error)?,
        capture_times,
        no_autoplay: args.contains("--no-autoplay"),
        no_loop: args.contains("--no-loop"),
        fill_screen: args.contains("--fill-screen"),
        hide_timestamps: args.contains("--hide-timestamps"),
        hide_speed: args.contains("--hide-speed"),
        hide_fullscreen: args.contains("--hide-fullscreen"),
        user_agent: args.opt_value_from_str("--user-agent").map_err(arg_error)?,
        save_settings: args.contains("--save-settings"),
        lang,
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unrecognized arguments");
    }

    Ok(flags)
}

/// Prints an error, localized when it maps to a message key.
fn report(err: &Error) {
    match err {
        Error::Surface(surface) => {
            let settings = config::load().unwrap_or_default();
            let i18n = I18n::new(None, &settings);
            eprintln!(
                "{}",
                i18n.tr_with_args(surface.i18n_key(), &[("path", surface.path())])
            );
            eprintln!("  {surface}");
        }
        other => eprintln!("{other}"),
    }
}
