//! Debug logging
//!
//! The terminal belongs to the UI, so log records go to
//! `bookfind-debug.log` in the user cache directory. Only debug builds log.

#[cfg(debug_assertions)]
pub fn init() {
    use std::io::Write;

    let Some(dir) = dirs::cache_dir().map(|dir| dir.join("bookfind")) else {
        return;
    };
    if std::fs::create_dir_all(&dir).is_err() {
        return;
    }
    let Ok(file) = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join("bookfind-debug.log"))
    else {
        return;
    };

    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("bookfind=debug"),
    )
    .target(env_logger::Target::Pipe(Box::new(file)))
    .format(|buf, record| {
        writeln!(
            buf,
            "{} {:<5} {}: {}",
            chrono::Local::now().format("%H:%M:%S%.3f"),
            record.level(),
            record.target(),
            record.args()
        )
    })
    .try_init();
}

#[cfg(not(debug_assertions))]
pub fn init() {}
