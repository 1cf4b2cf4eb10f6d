// Error module - top-level error type surfaced at startup
//
// Runtime emulation never fails once a ROM has loaded (unknown opcodes become
// sized NOPs, out-of-range mapper writes are masked, unreadable PPU bits read
// back the open-bus latch). The only place errors can occur is at load time:
// bad ROM files, unsupported mappers, I/O failures, and host/window init
// failures. Those surface as `EmuError` and the caller decides what to do
// (the CLI in `main.rs` maps them to process exit codes).

use std::fmt;

/// Errors that can occur while loading a ROM or initializing the host.
#[derive(Debug)]
pub enum EmuError {
    /// The file is not a valid iNES image (bad magic, truncated header/body).
    RomInvalid(String),
    /// The file is a valid iNES image but uses a mapper or region this
    /// emulator does not implement.
    RomUnsupported(String),
    /// A filesystem operation failed while loading the ROM or config.
    IoError(std::io::Error),
    /// The window or audio host could not be initialized.
    HostUnavailable(String),
}

impl fmt::Display for EmuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmuError::RomInvalid(msg) => write!(f, "invalid ROM: {msg}"),
            EmuError::RomUnsupported(msg) => write!(f, "unsupported ROM: {msg}"),
            EmuError::IoError(err) => write!(f, "I/O error: {err}"),
            EmuError::HostUnavailable(msg) => write!(f, "host unavailable: {msg}"),
        }
    }
}

impl std::error::Error for EmuError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EmuError::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for EmuError {
    fn from(err: std::io::Error) -> Self {
        EmuError::IoError(err)
    }
}

/// Process exit code this error should map to, per the CLI contract:
/// 0 clean shutdown, 1 load failure, 2 unsupported mapper.
impl EmuError {
    pub fn exit_code(&self) -> i32 {
        match self {
            EmuError::RomUnsupported(_) => 2,
            EmuError::RomInvalid(_) | EmuError::IoError(_) | EmuError::HostUnavailable(_) => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_match_cli_contract() {
        assert_eq!(EmuError::RomInvalid("x".into()).exit_code(), 1);
        assert_eq!(EmuError::RomUnsupported("mapper 99".into()).exit_code(), 2);
        assert_eq!(EmuError::HostUnavailable("x".into()).exit_code(), 1);
    }

    #[test]
    fn io_error_conversion_preserves_source() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "nope");
        let err: EmuError = io_err.into();
        assert!(matches!(err, EmuError::IoError(_)));
        assert!(std::error::Error::source(&err).is_some());
    }
}
