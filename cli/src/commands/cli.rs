use std::ffi::OsString;
use std::path::PathBuf;

use clap::builder::BoolishValueParser;
use clap::Parser;
use slothtest_core::config::AppConfig;

#[derive(Parser, Debug, Clone)]
#[command(
    version,
    about = "Go tests but sloooowly awesome",
    after_help = "Single-dash spellings (-watch, -emojis=false, -dance, -nofun) are accepted too."
)]
pub struct Args {
    /// Re-run the tests whenever a watched source file changes.
    #[arg(long)]
    pub watch: bool,

    /// Decorated output. `--emojis=false` switches to plain text.
    #[arg(
        long,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        value_parser = BoolishValueParser::new()
    )]
    pub emojis: Option<bool>,

    /// Victory dance when nothing failed.
    #[arg(long)]
    pub dance: bool,

    /// No emojis, no dance.
    #[arg(long)]
    pub nofun: bool,

    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Exit 1 when a single run does not come out clean.
    #[arg(long)]
    pub exit_nonzero_on_failure: bool,
}

/// Flags that also parse with a single leading dash.
const SINGLE_DASH_FLAGS: &[&str] = &["watch", "emojis", "dance", "nofun"];

/// Rewrites `-watch`, `-emojis=false`, ... to their `--` form. Everything
/// else passes through untouched.
pub fn normalize_single_dash<I>(argv: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    argv.into_iter()
        .map(|arg| {
            let single_dash = arg
                .to_str()
                .and_then(|s| s.strip_prefix('-'))
                .filter(|rest| !rest.starts_with('-'))
                .map(|rest| rest.split_once('=').map_or(rest, |(name, _)| name))
                .is_some_and(|name| SINGLE_DASH_FLAGS.contains(&name));
            if single_dash {
                let mut long = OsString::from("-");
                long.push(&arg);
                long
            } else {
                arg
            }
        })
        .collect()
}

impl Args {
    /// Flags win over file and environment. Unset flags leave `cfg` alone.
    pub fn overlay(&self, mut cfg: AppConfig) -> AppConfig {
        if let Some(emojis) = self.emojis {
            cfg.display.emojis = emojis;
        }
        if self.dance {
            cfg.display.dance = true;
        }
        if self.nofun {
            cfg.display.nofun = true;
        }
        if self.watch {
            cfg.watch.enabled = true;
        }
        if self.exit_nonzero_on_failure {
            cfg.exit.nonzero_on_failure = true;
        }
        cfg
    }
}
