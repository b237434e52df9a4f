use crate::constants::{MIN_DEVICE_MEMORY_GB, MIN_FULL_MOTION_WIDTH};

/// How much animation the current device should get.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MotionProfile {
    Full,
    /// Static page only: small screens, mobiles, low-memory devices and
    /// reduced-motion users.
    Minimal,
}

impl MotionProfile {
    /// `device_memory_gb` is `None` where the browser does not report it.
    pub fn detect(
        viewport_width: f32,
        prefers_reduced_motion: bool,
        mobile: bool,
        device_memory_gb: Option<f64>,
    ) -> Self {
        let low_memory = device_memory_gb.is_some_and(|gb| gb < MIN_DEVICE_MEMORY_GB);
        if prefers_reduced_motion
            || mobile
            || low_memory
            || viewport_width <= MIN_FULL_MOTION_WIDTH
        {
            MotionProfile::Minimal
        } else {
            MotionProfile::Full
        }
    }

    pub fn animates(self) -> bool {
        self == MotionProfile::Full
    }
}

/// Rough user-agent sniff for phones and tablets.
pub fn is_mobile_user_agent(ua: &str) -> bool {
    const MARKERS: [&str; 8] = [
        "Android",
        "webOS",
        "iPhone",
        "iPad",
        "iPod",
        "BlackBerry",
        "IEMobile",
        "Opera Mini",
    ];
    let ua = ua.to_ascii_lowercase();
    MARKERS
        .iter()
        .any(|m| ua.contains(&m.to_ascii_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_desktop_gets_full_motion() {
        assert_eq!(
            MotionProfile::detect(1440.0, false, false, None),
            MotionProfile::Full
        );
        assert_eq!(
            MotionProfile::detect(1440.0, false, false, Some(8.0)),
            MotionProfile::Full
        );
        assert!(MotionProfile::Full.animates());
    }

    #[test]
    fn narrow_or_reduced_gets_minimal() {
        use MotionProfile::Minimal;
        assert_eq!(MotionProfile::detect(768.0, false, false, None), Minimal);
        assert_eq!(MotionProfile::detect(1440.0, true, false, None), Minimal);
        assert_eq!(MotionProfile::detect(1440.0, false, true, None), Minimal);
        assert!(!Minimal.animates());
    }

    #[test]
    fn low_memory_gets_minimal() {
        assert_eq!(
            MotionProfile::detect(1440.0, false, false, Some(2.0)),
            MotionProfile::Minimal
        );
        assert_eq!(
            MotionProfile::detect(1440.0, false, false, Some(4.0)),
            MotionProfile::Full
        );
    }

    #[test]
    fn user_agent_sniff() {
        assert!(is_mobile_user_agent(
            "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X)"
        ));
        assert!(is_mobile_user_agent("Mozilla/5.0 (Linux; Android 14)"));
        assert!(!is_mobile_user_agent(
            "Mozilla/5.0 (X11; Linux x86_64; rv:128.0) Gecko/20100101 Firefox/128.0"
        ));
    }
}
