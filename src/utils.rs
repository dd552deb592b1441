use std::time::Duration;

const SIZE_UNIT: i64 = 1024;
const SIZE_SUFFIXES: &[u8] = b"KMGTPE";

/// Format a byte count using binary units.
///
/// Values below 1 KiB (including negative values) are printed as whole bytes,
/// e.g. `512B`. Larger values get three decimals and a unit letter, e.g. `1.500K`.
pub fn human_size(bytes: i64) -> String {
    if bytes < SIZE_UNIT {
        return format!("{}B", bytes);
    }
    let mut div = SIZE_UNIT;
    let mut exp = 0;
    let mut n = bytes / SIZE_UNIT;
    while n >= SIZE_UNIT {
        div *= SIZE_UNIT;
        exp += 1;
        n /= SIZE_UNIT;
    }
    format!(
        "{:.3}{}",
        bytes as f64 / div as f64,
        SIZE_SUFFIXES[exp] as char
    )
}

/// Format a duration at the coarsest unit that keeps it readable:
/// whole microseconds under 1ms, whole milliseconds under 1s, tenths of a second above.
pub fn format_duration(d: Duration) -> String {
    if d < Duration::from_millis(1) {
        format!("{}µs", d.as_micros())
    } else if d < Duration::from_secs(1) {
        format!("{}ms", d.as_millis())
    } else {
        format!("{:.1}s", d.as_secs_f64())
    }
}

/// Short label for a commit count, e.g. `1M` or `50k`.
pub fn format_commit_count(count: u64) -> String {
    if count >= 1_000_000 && count % 1_000_000 == 0 {
        format!("{}M", count / 1_000_000)
    } else if count >= 1_000 && count % 1_000 == 0 {
        format!("{}k", count / 1_000)
    } else {
        count.to_string()
    }
}
