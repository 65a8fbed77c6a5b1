//! Hardware probe output parsers
//!
//! Each parser takes the raw output of one shell command and returns `None`
//! when the output is not in the expected shape.

/// `MemTotal` from `/proc/meminfo`, in KiB
pub fn parse_meminfo_total(output: &str) -> Option<u64> {
    output
        .lines()
        .find_map(|line| line.strip_prefix("MemTotal:"))
        .and_then(|rest| rest.split_whitespace().next())
        .and_then(|kib| kib.parse().ok())
}

/// Total size column of `df -k <path>`, in KiB
pub fn parse_df_total(output: &str) -> Option<u64> {
    output
        .lines()
        .skip(1)
        .find_map(|line| line.split_whitespace().nth(1))
        .and_then(|kib| kib.parse().ok())
}

/// Resolution from `wm size`; an override wins over the physical size
pub fn parse_wm_size(output: &str) -> Option<String> {
    let find = |prefix: &str| {
        output
            .lines()
            .find_map(|line| line.trim().strip_prefix(prefix))
            .map(|size| size.trim().to_string())
    };

    find("Override size:").or_else(|| find("Physical size:"))
}

/// Battery design capacity from a power-supply sysfs node (µAh) in mAh
pub fn parse_charge_full_design(output: &str) -> Option<u32> {
    let micro_amp_hours: u64 = output.trim().parse().ok()?;
    let mah = micro_amp_hours / 1000;
    if mah == 0 {
        return None;
    }
    u32::try_from(mah).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meminfo() {
        let output = "MemTotal:        7759000 kB\nMemFree:          123456 kB\n";
        assert_eq!(parse_meminfo_total(output), Some(7_759_000));
        assert_eq!(parse_meminfo_total("MemFree: 1 kB"), None);
    }

    #[test]
    fn test_df() {
        let output = "Filesystem     1K-blocks     Used Available Use% Mounted on\n\
                      /dev/block/dm-48 115343360 40000000  75343360  35% /data\n";
        assert_eq!(parse_df_total(output), Some(115_343_360));
        assert_eq!(parse_df_total("df: /data: Permission denied"), None);
    }

    #[test]
    fn test_wm_size() {
        assert_eq!(
            parse_wm_size("Physical size: 1080x2400\n").as_deref(),
            Some("1080x2400")
        );
        assert_eq!(
            parse_wm_size("Physical size: 1440x3120\nOverride size: 1080x2340\n").as_deref(),
            Some("1080x2340")
        );
        assert_eq!(parse_wm_size(""), None);
    }

    #[test]
    fn test_charge_full_design() {
        assert_eq!(parse_charge_full_design("5000000\n"), Some(5000));
        assert_eq!(parse_charge_full_design("0"), None);
        assert_eq!(parse_charge_full_design("cat: No such file"), None);
    }
}
