/// One audit event, as stored in the log file.
///
/// Serialized as a single tab-joined line:
/// `timestamp\tformatted\tip\tuser\tmessage\n`. The second field is a
/// human-readable duplicate of the timestamp and is ignored on read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    /// Seconds since the Unix epoch, set at write time.
    pub timestamp: i64,
    /// Origin address at write time.
    pub ip: String,
    /// Acting user. Never empty in a stored record.
    pub user: String,
    /// Canonical event phrase or free-form producer text.
    pub message: String,
}

impl LogRecord {
    /// Serialize to one log line, newline included.
    ///
    /// `formatted_time` is the human-readable timestamp column. The
    /// message is written verbatim; an embedded tab survives a
    /// round-trip (parsing keeps the tail in `message`) but an embedded
    /// newline splits the record (known format gap).
    pub fn to_line(&self, formatted_time: &str) -> String {
        format!(
            "{}\t{}\t{}\t{}\t{}\n",
            self.timestamp, formatted_time, self.ip, self.user, self.message
        )
    }

    /// Parse one log line. Returns `None` for lines with fewer than five
    /// fields, a non-numeric timestamp, or an empty user, which the
    /// reader skips rather than treating as an error.
    pub fn parse_line(line: &str) -> Option<Self> {
        let mut fields = line.splitn(5, '\t');
        let timestamp = fields.next()?.parse().ok()?;
        let _formatted = fields.next()?;
        let ip = fields.next()?;
        let user = fields.next()?;
        let message = fields.next()?;

        if user.is_empty() {
            return None;
        }

        Some(Self {
            timestamp,
            ip: ip.to_string(),
            user: user.to_string(),
            message: message.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_round_trip() {
        let record = LogRecord {
            timestamp: 1707307200,
            ip: "192.0.2.7".into(),
            user: "alice".into(),
            message: "logged in temporarily".into(),
        };

        let line = record.to_line("2024/02/07 12:00");
        assert_eq!(
            line,
            "1707307200\t2024/02/07 12:00\t192.0.2.7\talice\tlogged in temporarily\n"
        );

        let parsed = LogRecord::parse_line(line.trim_end()).unwrap();
        assert_eq!(parsed, record);
    }

    #[test]
    fn tabs_in_message_stay_in_message() {
        let parsed =
            LogRecord::parse_line("100\tx\t10.0.0.1\tbob\tcustom\tevent\twith tabs").unwrap();
        assert_eq!(parsed.message, "custom\tevent\twith tabs");
    }

    #[test]
    fn too_few_fields_is_none() {
        assert!(LogRecord::parse_line("").is_none());
        assert!(LogRecord::parse_line("100").is_none());
        assert!(LogRecord::parse_line("100\tx\t10.0.0.1\tbob").is_none());
    }

    #[test]
    fn non_numeric_timestamp_is_none() {
        assert!(LogRecord::parse_line("soon\tx\t10.0.0.1\tbob\tlogged off").is_none());
    }

    #[test]
    fn empty_user_is_none() {
        assert!(LogRecord::parse_line("100\tx\t10.0.0.1\t\tlogged off").is_none());
    }
}
