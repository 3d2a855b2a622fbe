//! Top-level window enumeration.
//!
//! The game is located by window title text rather than by process handle:
//! the engine puts its counters straight into the title, so the title is
//! both the discovery mechanism and the data source.

/// Source of top-level window title texts.
///
/// The tracker only ever needs "every enumerable window's title"; keeping
/// that behind a trait lets tests drive the loop without a desktop session.
pub trait WindowTitles {
    /// Title text of every enumerable top-level window, in OS order.
    /// Windows with empty or unreadable titles are skipped.
    fn titles(&self) -> Vec<String>;

    /// First enumerated title containing `marker`, if any.
    fn find_title(&self, marker: &str) -> Option<String> {
        self.titles().into_iter().find(|t| t.contains(marker))
    }
}

/// Live OS-backed window enumerator.
///
/// Only meaningful on Windows; elsewhere it enumerates nothing, which the
/// tracker reports as the process never being found.
#[derive(Debug, Clone, Copy, Default)]
pub struct DesktopWindows;

#[cfg(target_os = "windows")]
impl WindowTitles for DesktopWindows {
    fn titles(&self) -> Vec<String> {
        enumerate_window_titles()
    }
}

#[cfg(not(target_os = "windows"))]
impl WindowTitles for DesktopWindows {
    fn titles(&self) -> Vec<String> {
        Vec::new()
    }
}

#[cfg(target_os = "windows")]
fn enumerate_window_titles() -> Vec<String> {
    use windows::Win32::Foundation::LPARAM;
    use windows::Win32::UI::WindowsAndMessaging::EnumWindows;

    let mut titles: Vec<String> = Vec::new();

    // SAFETY: EnumWindows calls the callback once per top-level window,
    // synchronously, before returning. The LPARAM carries a pointer to
    // `titles`, which outlives the whole enumeration.
    unsafe {
        let _ = EnumWindows(
            Some(collect_title),
            LPARAM(&mut titles as *mut Vec<String> as isize),
        );
    }

    titles
}

#[cfg(target_os = "windows")]
unsafe extern "system" fn collect_title(
    hwnd: windows::Win32::Foundation::HWND,
    lparam: windows::Win32::Foundation::LPARAM,
) -> windows::Win32::Foundation::BOOL {
    use windows::Win32::Foundation::BOOL;
    use windows::Win32::UI::WindowsAndMessaging::{GetWindowTextLengthW, GetWindowTextW};

    // SAFETY: the LPARAM was set up by `enumerate_window_titles` and points
    // at a Vec that stays alive for the duration of the enumeration.
    let titles = unsafe { &mut *(lparam.0 as *mut Vec<String>) };

    // SAFETY: GetWindowTextLengthW/GetWindowTextW are safe to call with any
    // HWND handed to the enumeration callback. A window whose text length
    // reports zero, or whose text cannot be copied, is skipped.
    let len = unsafe { GetWindowTextLengthW(hwnd) };
    if len > 0 {
        let mut buf = vec![0u16; len as usize + 1];
        let copied = unsafe { GetWindowTextW(hwnd, &mut buf) };
        if copied > 0 {
            titles.push(String::from_utf16_lossy(&buf[..copied as usize]));
        }
    }

    BOOL(1) // Continue enumeration.
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedWindows(Vec<&'static str>);

    impl WindowTitles for FixedWindows {
        fn titles(&self) -> Vec<String> {
            self.0.iter().map(|s| s.to_string()).collect()
        }
    }

    #[test]
    fn finds_first_title_containing_marker() {
        let windows = FixedWindows(vec![
            "Task Manager",
            "I Wanna Kill The Kamilia 3 Death:7 Time:1:02:03",
            "I Wanna Kill The Kamilia 3",
        ]);
        assert_eq!(
            windows.find_title("I Wanna Kill The Kamilia 3"),
            Some("I Wanna Kill The Kamilia 3 Death:7 Time:1:02:03".to_string())
        );
    }

    #[test]
    fn no_match_yields_none() {
        let windows = FixedWindows(vec!["Task Manager", "Notepad"]);
        assert_eq!(windows.find_title("I Wanna Kill The Kamilia 3"), None);
    }

    #[test]
    fn empty_enumeration_yields_none() {
        let windows = FixedWindows(vec![]);
        assert_eq!(windows.find_title("anything"), None);
    }
}
