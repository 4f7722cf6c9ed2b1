use env_logger::fmt::Formatter;
use log::{Record, Level};
use std::io::Write;
use chrono::Local;
use colored::*;

pub fn init_logger(log_level: &str) {
    let mut builder = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level));
    builder.format(format_log);

    // Filter out logs from actix_server and actix_web
    builder.filter(Some("actix_server"), log::LevelFilter::Warn);
    builder.filter(Some("actix_web"), log::LevelFilter::Warn);

    builder.init();
}

fn level_tag(level: Level) -> ColoredString {
    match level {
        Level::Error => "ERROR".truecolor(255, 0, 0),
        Level::Warn => "WARN".truecolor(255, 165, 0),
        Level::Info => "INFO".truecolor(0, 255, 255),
        Level::Debug => "DEBUG".truecolor(138, 43, 226),
        Level::Trace => "TRACE".truecolor(255, 105, 180),
    }
}

fn format_log(buf: &mut Formatter, record: &Record) -> std::io::Result<()> {
    writeln!(
        buf,
        "{} [{}] - {}",
        Local::now().format("%Y-%m-%d %H:%M:%S"),
        level_tag(record.level()),
        record.args()
    )
}

pub fn print_banner(host: &str, port: u16, workers: usize) {
    let border = "=".repeat(60);
    println!("{}", border.purple());
    println!("{}", "  modpreset".truecolor(63, 156, 255).bold());
    println!("{}", "  workshop preset -> steamcmd + launch line".truecolor(0, 230, 230));
    println!();
    println!("{}", format!("   - Address: http://{}:{}", host, port).cyan());
    println!("{}", format!("   - Upload:  POST http://{}:{}/upload", host, port).cyan());
    println!("{}", format!("   - Workers: {}", workers).cyan());
    println!("{}", border.purple());
}
