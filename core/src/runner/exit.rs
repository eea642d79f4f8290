use crate::config::ExitConfig;

use super::run::RunReport;

pub fn normalize_exit(status: std::process::ExitStatus) -> i32 {
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(code) = status.code() {
            code
        } else if let Some(sig) = status.signal() {
            128 + sig
        } else {
            1
        }
    }
    #[cfg(windows)]
    {
        status.code().unwrap_or(1)
    }
}

/// Process exit code after a single run. Advisory by default: always 0
/// unless `nonzero_on_failure` is set.
pub fn process_exit_code(report: &RunReport, cfg: &ExitConfig) -> i32 {
    if cfg.nonzero_on_failure && !report.is_clean() {
        1
    } else {
        0
    }
}
