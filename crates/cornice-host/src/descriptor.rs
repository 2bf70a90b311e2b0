use cornice_common::HostError;

/// One entry of the configured applet list: the applet's source path and the
/// uid naming this instance of it.
///
/// The configured encoding is a single string, `"<source-path>::<uid>"`.
/// Only the first `::` separates; any further `::` stays part of the uid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppletDescriptor {
    pub path: String,
    pub uid: String,
}

impl AppletDescriptor {
    pub fn parse(entry: &str) -> Result<Self, HostError> {
        match entry.split_once("::") {
            Some((path, uid)) => Ok(Self {
                path: path.to_string(),
                uid: uid.to_string(),
            }),
            None => Err(HostError::BadDescriptor(entry.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_path_and_uid() {
        let d = AppletDescriptor::parse("/usr/share/applets/clock.desktop::clock-1").unwrap();
        assert_eq!(d.path, "/usr/share/applets/clock.desktop");
        assert_eq!(d.uid, "clock-1");
    }

    #[test]
    fn no_separator_is_an_error() {
        let err = AppletDescriptor::parse("badtoken").unwrap_err();
        assert!(matches!(err, HostError::BadDescriptor(ref s) if s == "badtoken"));
    }

    #[test]
    fn empty_string_is_an_error() {
        assert!(AppletDescriptor::parse("").is_err());
    }

    #[test]
    fn extra_separators_stay_in_the_uid() {
        let d = AppletDescriptor::parse("a::b::c").unwrap();
        assert_eq!(d.path, "a");
        assert_eq!(d.uid, "b::c");
    }

    #[test]
    fn empty_tokens_are_accepted() {
        // Degenerate but well-formed; an empty path fails later at spawn time.
        let d = AppletDescriptor::parse("::clock-1").unwrap();
        assert_eq!(d.path, "");
        assert_eq!(d.uid, "clock-1");

        let d = AppletDescriptor::parse("a::").unwrap();
        assert_eq!(d.uid, "");
    }

    #[test]
    fn single_colon_is_not_a_separator() {
        assert!(AppletDescriptor::parse("a:b").is_err());
    }
}
