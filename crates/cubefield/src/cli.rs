use std::ffi::OsString;

use clap::Parser;

/// Spellings accepted with a single dash for compatibility with older launch scripts.
const SINGLE_DASH_FLAGS: [(&str, &str); 2] = [("-display", "--display"), ("-info", "--info")];

/// Largest accepted `--cubes`. The instance buffer is sized from it.
const MAX_CUBES: i64 = 100_000;

#[derive(Debug, Parser)]
#[command(name = "cubefield", version, about = "A field of spinning cubes drifting away from the viewer")]
pub struct Cli {
    /// X11 display to open (sets DISPLAY and selects the X11 backend)
    #[arg(long, value_name = "NAME")]
    pub display: Option<String>,

    /// Print renderer information on startup
    #[arg(long)]
    pub info: bool,

    /// Number of cubes in the field
    #[arg(long, default_value_t = 50, value_parser = clap::value_parser!(u32).range(1..=MAX_CUBES))]
    pub cubes: u32,

    /// Seed for a reproducible field
    #[arg(long)]
    pub seed: Option<u64>,

    /// Initial window width in logical pixels
    #[arg(long, default_value_t = 300, value_parser = clap::value_parser!(u32).range(1..))]
    pub width: u32,

    /// Initial window height in logical pixels
    #[arg(long, default_value_t = 300, value_parser = clap::value_parser!(u32).range(1..))]
    pub height: u32,

    /// Log filter in env_logger syntax (overrides RUST_LOG)
    #[arg(long, value_name = "FILTER")]
    pub log: Option<String>,

    /// Log every cube's position and velocity each frame at trace level
    #[arg(long)]
    pub trace_cubes: bool,
}

impl Cli {
    /// Parses the process arguments.
    pub fn from_env() -> Self {
        Self::parse_from(normalize_args(std::env::args_os()))
    }
}

/// Rewrites the single-dash long flags to their `--` form. Everything else,
/// including option values, is passed through untouched.
pub fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut out = Vec::new();
    let mut prev_takes_value = false;

    for arg in args {
        let rewritten = if prev_takes_value {
            None
        } else {
            SINGLE_DASH_FLAGS
                .iter()
                .find(|(short, _)| arg == *short)
                .map(|(_, long)| OsString::from(*long))
        };

        let arg = rewritten.unwrap_or(arg);
        prev_takes_value = arg == "--display";
        out.push(arg);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(normalize_args(args.iter().map(OsString::from)))
    }

    // ── parsing ───────────────────────────────────────────────────────────

    #[test]
    fn command_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults() {
        let cli = parse(&["cubefield"]).unwrap();
        assert_eq!(cli.display, None);
        assert!(!cli.info);
        assert_eq!(cli.cubes, 50);
        assert_eq!((cli.width, cli.height), (300, 300));
        assert_eq!(cli.seed, None);
        assert!(!cli.trace_cubes);
    }

    #[test]
    fn single_dash_flags_are_accepted() {
        let cli = parse(&["cubefield", "-display", ":1", "-info"]).unwrap();
        assert_eq!(cli.display.as_deref(), Some(":1"));
        assert!(cli.info);
    }

    #[test]
    fn double_dash_flags_are_accepted() {
        let cli = parse(&["cubefield", "--display", "host:0", "--info", "--seed", "7"]).unwrap();
        assert_eq!(cli.display.as_deref(), Some("host:0"));
        assert!(cli.info);
        assert_eq!(cli.seed, Some(7));
    }

    #[test]
    fn display_value_is_never_rewritten() {
        let args = normalize_args(["cubefield", "-display", "-info"].map(OsString::from));
        assert_eq!(args, ["cubefield", "--display", "-info"].map(OsString::from));
    }

    #[test]
    fn unknown_flag_is_rejected() {
        assert!(parse(&["cubefield", "-bogus"]).is_err());
        assert!(parse(&["cubefield", "--bogus"]).is_err());
    }

    // ── bounds ────────────────────────────────────────────────────────────

    #[test]
    fn zero_cubes_is_rejected() {
        assert!(parse(&["cubefield", "--cubes", "0"]).is_err());
    }

    #[test]
    fn cube_count_is_capped() {
        assert_eq!(parse(&["cubefield", "--cubes", "100000"]).unwrap().cubes, 100_000);
        assert!(parse(&["cubefield", "--cubes", "100001"]).is_err());
        assert!(parse(&["cubefield", "--cubes", "4294967295"]).is_err());
    }

    #[test]
    fn zero_window_size_is_rejected() {
        assert!(parse(&["cubefield", "--width", "0"]).is_err());
        assert!(parse(&["cubefield", "--height", "0"]).is_err());

        let cli = parse(&["cubefield", "--width", "1", "--height", "640"]).unwrap();
        assert_eq!((cli.width, cli.height), (1, 640));
    }
}
