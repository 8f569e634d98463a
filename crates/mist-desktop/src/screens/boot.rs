//! Boot screen
//!
//! A terminal-styled screen playing a fixed timeline of log lines, then
//! handing off to the login screen. The sequence runs once per process.

use std::time::Duration;

use dioxus::prelude::*;
use tokio::time::sleep;

use crate::screens::Screen;
use crate::state::AppState;

/// Pause between consecutive log lines
const LINE_GAP_MS: u64 = 150;
/// Extra pause after lines marked as delayed
const EXTRA_PAUSE_MS: u64 = 220;
/// Per-character typing delay for command lines
const TYPE_MS: u64 = 55;
/// Per-character typing delay for fast-typed command lines
const FAST_TYPE_MS: u64 = 18;

/// How a boot log line is paced onto the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pacing {
    /// Printed instantly
    Instant,
    /// Printed instantly, then a pause before the next line
    Pause,
    /// A prompt whose command is typed character by character
    Type { fast: bool, pause_after: bool },
    /// The closing prompt; stays on screen with a blinking caret
    Blink,
}

/// One line of the boot log timeline
struct BootLine {
    text: &'static str,
    command: &'static str,
    pacing: Pacing,
}

const fn plain(text: &'static str) -> BootLine {
    BootLine {
        text,
        command: "",
        pacing: Pacing::Instant,
    }
}

const fn delayed(text: &'static str) -> BootLine {
    BootLine {
        text,
        command: "",
        pacing: Pacing::Pause,
    }
}

const fn typed(text: &'static str, command: &'static str, fast: bool, pause_after: bool) -> BootLine {
    BootLine {
        text,
        command,
        pacing: Pacing::Type { fast, pause_after },
    }
}

/// The fixed boot timeline
const BOOT_LOG: &[BootLine] = &[
    typed("[mist-shell:~]$ ", "bootctl", false, true),
    delayed("[ OK ] Boot sequence initialized..."),
    delayed("[0.000001] Mist Subsystem v0.1 build 114"),
    delayed("[0.000312] Kernel: hybrid compositor core detected"),
    delayed("[0.000913] Mounting volumes..."),
    delayed("[0.002101] /mnt/mistroot mounted as overlayfs"),
    plain("[0.002559] /dev/sda1 -> /Volumes/MIST_SYS"),
    plain("[ OK ] Filesystem check complete"),
    plain("[WARN ] Network adapter eno not responding, retrying..."),
    plain("[ OK ] Connected: 10.0.4.114"),
    delayed("[INFO] User profile loaded: guest"),
    delayed("[0.004833] Initializing GUI subsystem..."),
    plain("[0.005012] Launching glass compositor (compat mode)"),
    delayed("[ OK ] Display environment ready"),
    plain("[INFO] Starting shell instance for guest@mist.terminal"),
    plain("[ OK ] Environment variables loaded (PATH, SHELL)"),
    typed("[guest@mist.terminal:~]$ ", "uname -a", false, false),
    plain("Mist mist.local.guest 0.1.114-mist x86_64 GNU/Linux"),
    typed("[guest@mist.terminal:~]$ ", "whoami", false, false),
    plain("guest"),
    typed("[guest@mist.terminal:~]$ ", "echo Welcome to Mist", true, false),
    plain("Welcome to Mist"),
    BootLine {
        text: "[guest@mist.terminal:~]$ ",
        command: "",
        pacing: Pacing::Blink,
    },
];

/// Boot screen component
#[component]
pub fn BootScreen() -> Element {
    let mut state = use_context::<AppState>();
    let mut lines = use_signal(Vec::<String>::new);
    let mut finished = use_signal(|| false);

    use_future(move || async move {
        // Replaying the sequence on a revisit would be wrong; skip ahead.
        if !state.nav.begin(Screen::Boot) {
            state.nav.go(Screen::Login);
            return;
        }

        for line in BOOT_LOG {
            lines.write().push(line.text.to_string());

            match line.pacing {
                Pacing::Instant => {}
                Pacing::Pause => sleep(Duration::from_millis(EXTRA_PAUSE_MS)).await,
                Pacing::Type { fast, pause_after } => {
                    let delay = if fast { FAST_TYPE_MS } else { TYPE_MS };
                    for ch in line.command.chars() {
                        sleep(Duration::from_millis(delay)).await;
                        if let Some(last) = lines.write().last_mut() {
                            last.push(ch);
                        }
                    }
                    if pause_after {
                        sleep(Duration::from_millis(EXTRA_PAUSE_MS)).await;
                    }
                }
                Pacing::Blink => {
                    finished.set(true);
                    continue;
                }
            }

            sleep(Duration::from_millis(LINE_GAP_MS)).await;
        }

        sleep(Duration::from_millis(800)).await;
        state.nav.go(Screen::Login);
    });

    let printed = lines();
    let last_index = printed.len().saturating_sub(1);

    rsx! {
        div {
            class: "screen boot-screen fade-in",
            div {
                class: "tty",
                for (i, line) in printed.iter().enumerate() {
                    div {
                        key: "{i}",
                        class: "logs",
                        "{line}"
                        if i == last_index {
                            span {
                                class: if finished() { "caret blink" } else { "caret" },
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boot_log_ends_with_blinking_prompt() {
        let last = BOOT_LOG.last().unwrap();
        assert_eq!(last.pacing, Pacing::Blink);
        assert!(last.text.ends_with("$ "));
    }

    #[test]
    fn test_typed_lines_carry_a_command() {
        for line in BOOT_LOG {
            if matches!(line.pacing, Pacing::Type { .. }) {
                assert!(!line.command.is_empty(), "typed line {:?}", line.text);
            }
        }
    }
}
