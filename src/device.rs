//! Device classification and mobile-redirect decisions.
//!
//! Everything here is pure: the browser-facing code in `wasm::redirect`
//! samples `navigator`/`location` into a [`ViewportSignals`] and asks this
//! module what to do, so the decision table stays host-testable.

/// Widths at or below this (with touch) classify as mobile.
pub const MOBILE_BREAKPOINT: f64 = 768.0;

/// Substrings of a lower-cased user agent that mark a mobile device.
pub const MOBILE_UA_KEYWORDS: &[&str] = &[
    "mobile",
    "android",
    "iphone",
    "ipad",
    "ipod",
    "blackberry",
    "opera mini",
    "windows phone",
    "silk",
    "kindle",
    "phone",
];

/// Environment signals sampled fresh on every check, never cached.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewportSignals {
    pub ua_mobile: bool,
    pub width: f64,
    pub has_touch: bool,
    pub on_mobile_page: bool,
    pub force_desktop: bool,
}

/// What the redirector should do for the current page load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationDecision {
    Stay,
    RedirectToMobile,
}

/// Which variant of the site the current document is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    Desktop,
    Mobile,
}

pub fn ua_matches_mobile(user_agent: &str) -> bool {
    let ua = user_agent.to_lowercase();
    MOBILE_UA_KEYWORDS.iter().any(|kw| ua.contains(kw))
}

impl ViewportSignals {
    /// Mobile user agent, or a narrow viewport that also has touch.
    pub fn is_mobile(&self) -> bool {
        self.ua_mobile || (self.width <= MOBILE_BREAKPOINT && self.has_touch)
    }
}

pub fn decide(signals: &ViewportSignals) -> NavigationDecision {
    if signals.force_desktop {
        return NavigationDecision::Stay;
    }
    if signals.is_mobile() && !signals.on_mobile_page {
        NavigationDecision::RedirectToMobile
    } else {
        NavigationDecision::Stay
    }
}

/// The mobile variant is marked by its path or by an explicit query flag.
pub fn on_mobile_page(pathname: &str, search: &str) -> bool {
    pathname.contains("mobile.html") || search.contains("mobile=true")
}

pub fn force_desktop(search: &str) -> bool {
    search.contains("force_desktop=true")
}

pub fn page_kind(pathname: &str, search: &str) -> PageKind {
    if on_mobile_page(pathname, search) {
        PageKind::Mobile
    } else {
        PageKind::Desktop
    }
}

/// Rewrite the current URL to its mobile equivalent, preserving the query
/// string and fragment verbatim.
///
/// Two rewrite branches, both kept deliberately: the first `index.html`
/// segment is substituted, and a trailing-slash path gets `mobile.html`
/// appended instead.
pub fn mobile_url(pathname: &str, search: &str, hash: &str) -> String {
    let mut url = pathname.replacen("index.html", "mobile.html", 1);
    if pathname.ends_with('/') {
        url.push_str("mobile.html");
    }
    url.push_str(search);
    url.push_str(hash);
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    fn desktop_signals() -> ViewportSignals {
        ViewportSignals {
            ua_mobile: false,
            width: 1280.0,
            has_touch: false,
            on_mobile_page: false,
            force_desktop: false,
        }
    }

    #[test]
    fn wide_viewport_without_touch_is_desktop() {
        for width in [769.0, 1024.0, 1920.0, 3840.0] {
            let signals = ViewportSignals {
                width,
                ..desktop_signals()
            };
            assert!(!signals.is_mobile(), "width {width} misclassified");
            assert_eq!(decide(&signals), NavigationDecision::Stay);
        }
    }

    #[test]
    fn mobile_user_agent_wins_regardless_of_width() {
        for ua in [
            "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X)",
            "Mozilla/5.0 (Linux; Android 14; Pixel 8)",
            "Opera/9.80 (J2ME/MIDP; Opera Mini/9.80)",
        ] {
            let signals = ViewportSignals {
                ua_mobile: ua_matches_mobile(ua),
                width: 2560.0,
                ..desktop_signals()
            };
            assert!(signals.is_mobile(), "ua {ua:?} misclassified");
        }
    }

    #[test]
    fn narrow_viewport_needs_touch() {
        let narrow = ViewportSignals {
            width: 600.0,
            ..desktop_signals()
        };
        assert!(!narrow.is_mobile());

        let narrow_touch = ViewportSignals {
            has_touch: true,
            ..narrow
        };
        assert!(narrow_touch.is_mobile());
    }

    #[test]
    fn force_desktop_suppresses_redirect() {
        let signals = ViewportSignals {
            ua_mobile: true,
            has_touch: true,
            width: 400.0,
            force_desktop: true,
            ..desktop_signals()
        };
        assert_eq!(decide(&signals), NavigationDecision::Stay);
    }

    #[test]
    fn already_on_mobile_page_stays() {
        let signals = ViewportSignals {
            ua_mobile: true,
            on_mobile_page: true,
            ..desktop_signals()
        };
        assert_eq!(decide(&signals), NavigationDecision::Stay);
    }

    #[test]
    fn mobile_device_on_desktop_page_redirects() {
        let signals = ViewportSignals {
            ua_mobile: true,
            ..desktop_signals()
        };
        assert_eq!(decide(&signals), NavigationDecision::RedirectToMobile);
    }

    #[test]
    fn rewrite_preserves_query_and_fragment() {
        assert_eq!(
            mobile_url("/x/index.html", "?a=1", "#b"),
            "/x/mobile.html?a=1#b"
        );
    }

    #[test]
    fn rewrite_appends_on_trailing_slash() {
        assert_eq!(mobile_url("/x/", "?a=1", "#b"), "/x/mobile.html?a=1#b");
        assert_eq!(mobile_url("/", "", ""), "/mobile.html");
    }

    #[test]
    fn rewrite_substitutes_only_first_segment() {
        assert_eq!(
            mobile_url("/index.html/index.html", "", ""),
            "/mobile.html/index.html"
        );
    }

    #[test]
    fn mobile_page_markers() {
        assert!(on_mobile_page("/x/mobile.html", ""));
        assert!(on_mobile_page("/x/index.html", "?mobile=true"));
        assert!(!on_mobile_page("/x/index.html", "?a=1"));
        assert_eq!(page_kind("/mobile.html", ""), PageKind::Mobile);
        assert_eq!(page_kind("/index.html", ""), PageKind::Desktop);
    }
}
