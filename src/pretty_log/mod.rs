use crossterm::execute;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use std::error::Error;
use std::io::Write;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ThemeColor {
    Main,
    Second,
    Success,
    Warn,
    Error,
}

impl From<ThemeColor> for Color {
    fn from(value: ThemeColor) -> Self {
        match value {
            ThemeColor::Main => Color::Reset,
            ThemeColor::Second => Color::Grey,
            ThemeColor::Success => Color::Green,
            ThemeColor::Warn => Color::Yellow,
            ThemeColor::Error => Color::Red,
        }
    }
}

/// # colored println
///
/// Write one line to the build log in the given theme color.
/// Log output never fails the caller, write errors are dropped.
pub fn colored_println<W: Write>(log: &mut W, color: ThemeColor, content: &str) {
    let _ = execute!(
        log,
        SetForegroundColor(color.into()),
        Print(content),
        ResetColor,
        Print("\n"),
    );
}

/// # error detail println
///
/// Write the full detail of an error: its debug form and every source in the chain.
pub fn error_detail_println<W: Write>(log: &mut W, err: &(dyn Error + 'static)) {
    colored_println(log, ThemeColor::Second, &format!("{:#?}", err));

    let mut source = err.source();
    while let Some(cause) = source {
        colored_println(
            log,
            ThemeColor::Second,
            &formatx::formatx!(crate::constant::log::BUILD_REPORT_FAILED_CAUSED_BY, cause.to_string())
                .unwrap_or_default(),
        );
        source = cause.source();
    }
}
