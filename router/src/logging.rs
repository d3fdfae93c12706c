use colog::format::CologStyle;
use colored::Colorize;
use log::{Level, LevelFilter};

pub struct Logger;

impl Logger {
    pub fn init(level: LevelFilter) {
        let mut builder: env_logger::Builder = colog::default_builder();
        builder.format(colog::formatter(TimestampStyle));
        builder.target(env_logger::Target::Stderr);
        builder.filter_level(level);
        builder.init();
    }
}

/// colog's bracketed level prefix, preceded by a local wall-clock timestamp
struct TimestampStyle;

impl CologStyle for TimestampStyle {
    fn prefix_token(&self, level: &Level) -> String {
        let timestamp = chrono::Local::now().format("%H:%M:%S%.3f").to_string();
        format!(
            "{} {}{}{}",
            timestamp.dimmed(),
            "[".blue().bold(),
            self.level_color(level, self.level_token(level)),
            "]".blue().bold()
        )
    }
}
