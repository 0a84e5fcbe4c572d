use chrono::{DateTime, Utc};

pub fn format_account_date(datetime: &DateTime<Utc>) -> String {
    datetime.format("%Y-%m-%d").to_string()
}

/// `https://www.nytimes.com/2024/x` shows as `nytimes.com`.
pub fn host_name(url: &str) -> &str {
    let host = if url.contains("://") {
        url.split('/').nth(2).unwrap_or_default()
    } else {
        url.split('/').next().unwrap_or_default()
    };
    host.strip_prefix("www.").unwrap_or(host)
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn host_name_with_scheme() {
        assert_eq!(host_name("https://www.nytimes.com/2024/x"), "nytimes.com");
        assert_eq!(host_name("http://example.org"), "example.org");
        assert_eq!(host_name("ftp://files.example.org/pub/a"), "files.example.org");
    }

    #[test]
    fn host_name_without_scheme() {
        assert_eq!(host_name("example.org/path"), "example.org");
        assert_eq!(host_name("www.example.org/path/deeper"), "example.org");
        assert_eq!(host_name("example.org"), "example.org");
    }

    #[test]
    fn only_a_leading_www_label_is_stripped() {
        assert_eq!(host_name("https://news.www.example.com/"), "news.www.example.com");
        assert_eq!(host_name("https://wwwexample.com/"), "wwwexample.com");
    }

    #[test]
    fn account_date_is_the_calendar_day() {
        let created = Utc.with_ymd_and_hms(2019, 11, 22, 22, 1, 45).unwrap();
        assert_eq!(format_account_date(&created), "2019-11-22");
    }
}
