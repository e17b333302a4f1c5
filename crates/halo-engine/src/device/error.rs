use wgpu::SurfaceError;

/// What the frame loop does after `get_current_texture` fails.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SurfaceErrorAction {
    /// The swapchain went stale and was configured again; draw next frame.
    Reconfigured,
    /// Drop this frame only.
    SkipFrame,
    /// Stop the event loop.
    Fatal,
}

impl SurfaceErrorAction {
    /// Classifies a surface error without touching the surface.
    pub fn for_error(err: &SurfaceError) -> Self {
        match err {
            SurfaceError::Lost | SurfaceError::Outdated => SurfaceErrorAction::Reconfigured,
            SurfaceError::OutOfMemory => SurfaceErrorAction::Fatal,
            SurfaceError::Timeout | SurfaceError::Other => SurfaceErrorAction::SkipFrame,
        }
    }

    #[inline]
    pub fn needs_reconfigure(self) -> bool {
        self == SurfaceErrorAction::Reconfigured
    }

    #[inline]
    pub fn ends_run(self) -> bool {
        self == SurfaceErrorAction::Fatal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stale_swapchain_is_reconfigured() {
        for err in [SurfaceError::Lost, SurfaceError::Outdated] {
            let action = SurfaceErrorAction::for_error(&err);
            assert!(action.needs_reconfigure(), "{err:?}");
            assert!(!action.ends_run());
        }
    }

    #[test]
    fn out_of_memory_ends_run() {
        let action = SurfaceErrorAction::for_error(&SurfaceError::OutOfMemory);
        assert_eq!(action, SurfaceErrorAction::Fatal);
        assert!(action.ends_run());
    }

    #[test]
    fn transient_errors_skip_one_frame() {
        for err in [SurfaceError::Timeout, SurfaceError::Other] {
            let action = SurfaceErrorAction::for_error(&err);
            assert_eq!(action, SurfaceErrorAction::SkipFrame, "{err:?}");
            assert!(!action.needs_reconfigure() && !action.ends_run());
        }
    }
}
