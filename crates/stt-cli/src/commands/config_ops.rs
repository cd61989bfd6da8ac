use std::fs;
use std::process;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

pub fn settings_export() {
    print!("{}", stt_engine::settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(
        stt_engine::settings::parse_settings_toml(&content),
        "Error: {}"
    );
    println!(
        "OK: grouper.baseline={} entries, expansion.max_results={}",
        s.grouper.baseline.len(),
        s.expansion.max_results
    );
}
