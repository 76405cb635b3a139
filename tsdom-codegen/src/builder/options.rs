//! Render options threaded through every emitter call.

use super::Indent;

/// What the emitter does with a node that has no rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnsupportedPolicy {
    /// Produce no text for the node and keep rendering its siblings.
    #[default]
    Omit,
    /// Abort the render with an error.
    Reject,
}

/// Rendering options: the current indentation depth plus global settings.
///
/// The value is never mutated while rendering. A nested scope renders with
/// [`RenderOptions::nested`], so returning from the scope restores the
/// caller's depth without any bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Indentation depth, in units.
    pub indent: usize,
    /// One indentation unit.
    pub unit: Indent,
    /// Handling of unsupported nodes.
    pub unsupported: UnsupportedPolicy,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            indent: 0,
            unit: Indent::STANDARD,
            unsupported: UnsupportedPolicy::Omit,
        }
    }
}

impl RenderOptions {
    /// Create options rejecting unsupported nodes.
    pub fn strict() -> Self {
        Self::default().with_unsupported(UnsupportedPolicy::Reject)
    }

    /// Set the base indentation depth.
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Set the indentation unit.
    pub fn with_unit(mut self, unit: Indent) -> Self {
        self.unit = unit;
        self
    }

    /// Set the unsupported-node policy.
    pub fn with_unsupported(mut self, policy: UnsupportedPolicy) -> Self {
        self.unsupported = policy;
        self
    }

    /// Get the current indentation string.
    pub fn indent_str(&self) -> String {
        self.unit.repeat(self.indent)
    }

    /// Get options for one nested level.
    pub fn nested(&self) -> Self {
        Self {
            indent: self.indent + 1,
            ..*self
        }
    }
}
