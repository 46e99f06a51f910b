//! Markup for the isolated scenario preview.
//!
//! Every render replaces the whole surface: the composed document depends on
//! the latest `(html, css)` pair only.

/// Neutral baseline applied before the scenario's own stylesheet.
pub const BASELINE_RESET: &str = r":host {
  display: block;
  width: 100%;
  height: 100%;
  background: white;
  font-family: system-ui, -apple-system, sans-serif;
  color: #333;
  overflow: hidden;
}
*, *::before, *::after {
  box-sizing: border-box;
}";

const WRAPPER_STYLE: &str = "padding: 24px; height: 100%; overflow: auto; position: relative;";

/// Builds the full surface content for one render.
#[must_use]
pub fn compose(html: &str, css: &str) -> String {
    format!(
        "<style>\n{BASELINE_RESET}\n\n{css}\n</style>\n<div style=\"{WRAPPER_STYLE}\">\n{html}\n</div>"
    )
}

/// How the surface is currently attached to the host page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SurfaceMode {
    /// Nothing rendered yet; the first render tries to isolate.
    #[default]
    Pending,
    Isolated,
    /// Isolation failed; content is written straight into the host.
    Degraded,
}

/// What the surface reported after applying a plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceReport {
    Isolated,
    Degraded { reason: String },
}

impl SurfaceReport {
    /// Parses the status string returned by the preview script.
    ///
    /// Only an explicit `isolated` counts as isolation; anything unrecognised
    /// is a degraded surface carrying the raw status as its reason.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        if raw == "isolated" {
            return SurfaceReport::Isolated;
        }
        let reason = match raw.strip_prefix("degraded") {
            Some(rest) => rest.strip_prefix(':').unwrap_or(rest).trim(),
            None => raw,
        };
        SurfaceReport::Degraded {
            reason: reason.to_string(),
        }
    }
}

/// A single full-replace write to the surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderPlan {
    pub isolate: bool,
    pub markup: String,
}

/// Per-preview surface state: acquired lazily, then rewritten on every change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreviewSurface {
    mode: SurfaceMode,
    renders: u64,
}

impl PreviewSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn mode(&self) -> SurfaceMode {
        self.mode
    }

    #[must_use]
    pub fn renders(&self) -> u64 {
        self.renders
    }

    /// Plans a render of `html` styled by `css`.
    pub fn plan(&mut self, html: &str, css: &str) -> RenderPlan {
        self.renders = self.renders.saturating_add(1);
        RenderPlan {
            isolate: self.mode != SurfaceMode::Degraded,
            markup: compose(html, css),
        }
    }

    /// Records what the surface did. Isolation failures are logged once and
    /// later plans skip the isolation attempt.
    pub fn confirm(&mut self, report: SurfaceReport) {
        match report {
            SurfaceReport::Isolated => {
                if self.mode == SurfaceMode::Pending {
                    self.mode = SurfaceMode::Isolated;
                }
            }
            SurfaceReport::Degraded { reason } => {
                if self.mode != SurfaceMode::Degraded {
                    tracing::warn!(%reason, "preview isolation unavailable, rendering inline");
                }
                self.mode = SurfaceMode::Degraded;
            }
        }
    }
}
