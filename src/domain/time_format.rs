//! Display formatting for WCA result times.

const ONE_MINUTE_MS: i64 = 60_000;

/// Format a result stored in centiseconds, e.g. `1234` -> `"12.34"`, `6789` -> `"1:07.89"`.
pub fn format_centiseconds(centiseconds: i64) -> String {
    format_millis(centiseconds.saturating_mul(10))
}

/// `M:SS.HH` above one minute, `SS.HH` up to and including it.
///
/// Sentinel values (0, -1 for DNF, -2 for DNS) are not special-cased.
pub fn format_millis(millis: i64) -> String {
    let abs = millis.unsigned_abs();
    let total_secs = abs / 1000;
    let hundredths = (abs % 1000) / 10;

    if millis > ONE_MINUTE_MS {
        format!("{}:{:02}.{:02}", total_secs / 60, total_secs % 60, hundredths)
    } else {
        let sign = if millis < 0 { "-" } else { "" };
        format!("{}{:02}.{:02}", sign, total_secs, hundredths)
    }
}
