/// Capabilities / feature flags of a messenger implementation.
#[derive(Clone, Copy, Debug)]
pub struct MessagingCapabilities {
    /// Whether `send_html` interprets markup. When false, text is sent as-is
    /// and must not be HTML-escaped.
    pub supports_html: bool,
}
