use colored::Colorize;
use nbreset::api::{BatchReport, CmdMessage, MessageLevel};

/// Warnings and errors always go to stderr; info and success only when verbose.
pub(super) fn print_messages(messages: &[CmdMessage], verbose: bool) {
    for message in messages {
        match message.level {
            MessageLevel::Info if verbose => println!("{}", message.content.dimmed()),
            MessageLevel::Success if verbose => println!("{}", message.content.green()),
            MessageLevel::Info | MessageLevel::Success => {}
            MessageLevel::Warning => eprintln!("{}", message.content.yellow()),
            MessageLevel::Error => eprintln!("{}", message.content.red()),
        }
    }
}

pub(super) fn summary_line(report: &BatchReport, check: bool) -> String {
    if check {
        format!(
            "{} would change, {} unchanged, {} failed",
            report.would_change(),
            report.unchanged(),
            report.failed()
        )
    } else {
        format!(
            "{} renumbered, {} unchanged, {} failed",
            report.renumbered(),
            report.unchanged(),
            report.failed()
        )
    }
}

pub(super) fn print_summary(report: &BatchReport, check: bool) {
    println!("{}", summary_line(report, check).bold());
}
