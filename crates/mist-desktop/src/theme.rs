//! Theme configuration for the desktop shell

/// Color palette for the simulated desktop
#[derive(Debug, Clone, Copy)]
#[allow(dead_code)] // All colors defined for completeness, not all used yet
pub struct ColorPalette {
    pub desktop_bg: &'static str,
    pub glass_bg: &'static str,
    pub glass_border: &'static str,
    pub text_primary: &'static str,
    pub text_muted: &'static str,
    pub accent: &'static str,
    pub danger: &'static str,
    pub warning: &'static str,
    pub success: &'static str,
    pub tty_text: &'static str,
}

/// The glass-dark palette used across every screen
pub const PALETTE: ColorPalette = ColorPalette {
    desktop_bg: "linear-gradient(160deg, #1c2533 0%, #2b3a52 55%, #1a2230 100%)",
    glass_bg: "rgba(255, 255, 255, 0.08)",
    glass_border: "rgba(255, 255, 255, 0.18)",
    text_primary: "#e8eaed",
    text_muted: "#9aa0a6",
    accent: "#818cf8",
    danger: "#f87171",
    warning: "#fbbf24",
    success: "#4ade80",
    tty_text: "#c9d1d9",
};
