//! Graceful shutdown handling for the application.
//!
//! Shares the driver's stop token, so a shutdown request lets the stepping
//! thread finish its current batch before handing the arena back.

use rochambeau_core::StopToken;

/// Exit code reported after an interrupted run.
pub const INTERRUPTED_EXIT_CODE: i32 = 130;

/// Manages graceful shutdown of the application.
#[derive(Debug, Clone, Default)]
pub struct ShutdownManager {
    token: StopToken,
}

impl ShutdownManager {
    /// Creates a new shutdown manager.
    pub fn new() -> Self {
        Self::default()
    }

    /// Token to hand to the stepping driver.
    pub fn token(&self) -> StopToken {
        self.token.clone()
    }

    /// Requests shutdown.
    pub fn request_shutdown(&self) {
        if !self.token.is_cancelled() {
            tracing::info!("Shutdown requested");
        }
        self.token.cancel();
    }

    /// Checks if shutdown has been requested.
    pub fn is_shutdown_requested(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Process exit code for the run.
    pub fn exit_code(&self) -> i32 {
        if self.is_shutdown_requested() {
            INTERRUPTED_EXIT_CODE
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shutdown_manager_new() {
        let manager = ShutdownManager::new();
        assert!(!manager.is_shutdown_requested());
        assert_eq!(manager.exit_code(), 0);
    }

    #[test]
    fn test_shutdown_request_reaches_token() {
        let manager = ShutdownManager::new();
        let token = manager.token();
        manager.request_shutdown();
        assert!(manager.is_shutdown_requested());
        assert!(token.is_cancelled());
        assert_eq!(manager.exit_code(), INTERRUPTED_EXIT_CODE);
    }

    #[test]
    fn test_clones_share_state() {
        let manager = ShutdownManager::new();
        let other = manager.clone();
        other.request_shutdown();
        assert!(manager.is_shutdown_requested());
    }
}
