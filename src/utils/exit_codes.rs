//! Exit code utilities and mappings

use std::process::ExitStatus;

/// Get a human-readable description for an exit code
pub fn get_exit_code_description(exit_code: i32) -> &'static str {
    match exit_code {
        0 => "success",
        1 => "general error",
        2 => "shell builtin misuse",
        126 => "command invoked cannot execute",
        127 => "command not found",
        128 => "fatal git error",
        130 => "terminated by Control-C",
        131..=255 => "terminated by signal",
        _ => "error",
    }
}

/// Describe how an external process finished, e.g. `exit code 1 (general error)`
pub fn describe_exit_status(status: ExitStatus) -> String {
    match status.code() {
        Some(code) => format!("exit code {} ({})", code, get_exit_code_description(code)),
        None => "terminated by signal".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_exit_code_description() {
        assert_eq!(get_exit_code_description(0), "success");
        assert_eq!(get_exit_code_description(1), "general error");
        assert_eq!(get_exit_code_description(127), "command not found");
        assert_eq!(get_exit_code_description(128), "fatal git error");
        assert_eq!(get_exit_code_description(130), "terminated by Control-C");
        assert_eq!(get_exit_code_description(200), "terminated by signal");
        assert_eq!(get_exit_code_description(42), "error");
        assert_eq!(get_exit_code_description(-1), "error");
    }

    #[cfg(unix)]
    #[test]
    fn test_describe_exit_status() {
        let status = std::process::Command::new("sh")
            .args(["-c", "exit 1"])
            .status()
            .unwrap();
        assert_eq!(describe_exit_status(status), "exit code 1 (general error)");
    }
}
