//! Debugging feature flags.
//!
//! Toggle individual diagnostics here; keep the noisy ones `false` by default.
//! Every use site is additionally gated by `cfg(debug_assertions)`.

pub struct DebugFlags {
    /// Emit a line per outbound request (url, file name, payload size).
    pub print_requests: bool,
    /// Emit chart create/dispose events.
    pub print_chart_lifecycle: bool,
    /// Emit summary/table writes as they are applied to the view.
    pub print_view_updates: bool,
    /// Emit responses dropped because a newer submission started.
    pub print_superseded: bool,
}

pub const DEBUG_FLAGS: DebugFlags = DebugFlags {
    print_requests: true,
    print_chart_lifecycle: false,
    print_view_updates: false,
    print_superseded: true,
};
