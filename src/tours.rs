// SPDX-License-Identifier: MPL-2.0
//! 360° room tour dispatcher.
//!
//! Deciding what to do with a tour URL is kept pure: [`dispatch`] merges the
//! caller's overrides over the default window geometry and returns either a
//! fully computed [`LaunchRequest`] or the placeholder path. Only
//! [`launch`] touches the outside world, by handing the URL to the platform
//! opener.

use crate::error::{Error, Result};
use url::Url;

pub const DEFAULT_WIDTH: u32 = 1200;
pub const DEFAULT_HEIGHT: u32 = 800;
pub const DEFAULT_TARGET: &str = "_blank";

/// Token marking a tour URL that has not been filled in yet.
const PLACEHOLDER_TOKEN: &str = "TOUR_URL";

/// Known 360° tour providers, detected from the URL host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    Matterport,
    Kuula,
    ThreeDVista,
    Roundme,
}

impl Provider {
    pub fn name(&self) -> &'static str {
        match self {
            Provider::Matterport => "Matterport",
            Provider::Kuula => "Kuula",
            Provider::ThreeDVista => "3DVista",
            Provider::Roundme => "Roundme",
        }
    }

    fn matches_host(&self, host: &str) -> bool {
        let domain = match self {
            Provider::Matterport => "matterport.com",
            Provider::Kuula => "kuula.co",
            Provider::ThreeDVista => "3dvista.com",
            Provider::Roundme => "roundme.com",
        };
        host == domain || host.ends_with(&format!(".{domain}"))
    }
}

const ALL_PROVIDERS: &[Provider] = &[
    Provider::Matterport,
    Provider::Kuula,
    Provider::ThreeDVista,
    Provider::Roundme,
];

/// Optional overrides merged over the default window geometry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WindowOverrides {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub target: Option<String>,
}

/// A fully computed request to present a tour in an external window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchRequest {
    pub url: String,
    pub target: String,
    pub width: u32,
    pub height: u32,
    /// Window feature string in the `width=W,height=H,...` form.
    pub features: String,
    pub provider: Option<Provider>,
}

/// Outcome of dispatching a tour URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// Open the tour with the computed window geometry.
    Launch(LaunchRequest),
    /// The URL is a placeholder; show the instructional message instead.
    Placeholder,
}

/// Detects the tour provider from the URL host.
///
/// Falls back to substring matching when the URL does not parse, so partial
/// links pasted into the config still resolve to a provider.
pub fn detect_provider(tour_url: &str) -> Option<Provider> {
    if let Ok(url) = Url::parse(tour_url) {
        if let Some(host) = url.host_str() {
            return ALL_PROVIDERS
                .iter()
                .copied()
                .find(|provider| provider.matches_host(host));
        }
    }
    ALL_PROVIDERS
        .iter()
        .copied()
        .find(|provider| match provider {
            Provider::Matterport => tour_url.contains("matterport.com"),
            Provider::Kuula => tour_url.contains("kuula.co"),
            Provider::ThreeDVista => tour_url.contains("3dvista.com"),
            Provider::Roundme => tour_url.contains("roundme.com"),
        })
}

fn window_features(width: u32, height: u32) -> String {
    format!("width={width},height={height},resizable=yes,scrollbars=yes")
}

/// Decides how to handle a tour URL.
///
/// Empty URLs and URLs containing the `TOUR_URL` token take the placeholder
/// path; everything else becomes a [`LaunchRequest`] with the overrides
/// merged over `{1200, 800, "_blank"}`.
pub fn dispatch(tour_url: &str, overrides: &WindowOverrides) -> Dispatch {
    if tour_url.trim().is_empty() || tour_url.contains(PLACEHOLDER_TOKEN) {
        return Dispatch::Placeholder;
    }

    let width = overrides.width.unwrap_or(DEFAULT_WIDTH);
    let height = overrides.height.unwrap_or(DEFAULT_HEIGHT);
    let target = overrides
        .target
        .clone()
        .unwrap_or_else(|| DEFAULT_TARGET.to_string());

    Dispatch::Launch(LaunchRequest {
        url: tour_url.to_string(),
        target,
        width,
        height,
        features: window_features(width, height),
        provider: detect_provider(tour_url),
    })
}

/// Hands the tour URL to the platform opener.
///
/// The spawned process owns the window from here on; failure to spawn is the
/// only error this can report.
pub fn launch(request: &LaunchRequest) -> Result<()> {
    open_in_browser(&request.url)
        .map_err(|err| Error::Launch(format!("{}: {}", request.url, err)))
}

#[cfg(target_os = "linux")]
fn open_in_browser(url: &str) -> std::io::Result<()> {
    std::process::Command::new("xdg-open").arg(url).spawn()?;
    Ok(())
}

#[cfg(target_os = "macos")]
fn open_in_browser(url: &str) -> std::io::Result<()> {
    std::process::Command::new("open").arg(url).spawn()?;
    Ok(())
}

#[cfg(target_os = "windows")]
fn open_in_browser(url: &str) -> std::io::Result<()> {
    std::process::Command::new("cmd")
        .args(["/C", "start", "", url])
        .spawn()?;
    Ok(())
}

#[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
fn open_in_browser(_url: &str) -> std::io::Result<()> {
    Err(std::io::Error::other("no platform opener available"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_url_takes_placeholder_path() {
        let dispatch = dispatch("https://PLACEHOLDER/TOUR_URL", &WindowOverrides::default());
        assert_eq!(dispatch, Dispatch::Placeholder);
    }

    #[test]
    fn empty_url_takes_placeholder_path() {
        assert_eq!(dispatch("", &WindowOverrides::default()), Dispatch::Placeholder);
        assert_eq!(
            dispatch("   ", &WindowOverrides::default()),
            Dispatch::Placeholder
        );
    }

    #[test]
    fn defaults_apply_when_no_overrides_given() {
        let result = dispatch(
            "https://my.matterport.com/show/?m=abc123",
            &WindowOverrides::default(),
        );
        let Dispatch::Launch(request) = result else {
            panic!("expected launch");
        };
        assert_eq!(request.width, DEFAULT_WIDTH);
        assert_eq!(request.height, DEFAULT_HEIGHT);
        assert_eq!(request.target, DEFAULT_TARGET);
        assert_eq!(
            request.features,
            "width=1200,height=800,resizable=yes,scrollbars=yes"
        );
    }

    #[test]
    fn overrides_merge_over_defaults() {
        let overrides = WindowOverrides {
            width: Some(640),
            height: None,
            target: Some("_self".to_string()),
        };
        let Dispatch::Launch(request) =
            dispatch("https://kuula.co/share/abc", &overrides)
        else {
            panic!("expected launch");
        };
        assert_eq!(request.width, 640);
        assert_eq!(request.height, DEFAULT_HEIGHT);
        assert_eq!(request.target, "_self");
        assert_eq!(
            request.features,
            "width=640,height=800,resizable=yes,scrollbars=yes"
        );
    }

    #[test]
    fn provider_detection_uses_url_host() {
        assert_eq!(
            detect_provider("https://my.matterport.com/show/?m=abc"),
            Some(Provider::Matterport)
        );
        assert_eq!(
            detect_provider("https://kuula.co/share/abc"),
            Some(Provider::Kuula)
        );
        assert_eq!(
            detect_provider("https://tours.3dvista.com/abc"),
            Some(Provider::ThreeDVista)
        );
        assert_eq!(
            detect_provider("https://roundme.com/tour/abc"),
            Some(Provider::Roundme)
        );
        assert_eq!(detect_provider("https://example.com/tour"), None);
    }

    #[test]
    fn provider_detection_ignores_lookalike_hosts() {
        // A host merely containing the provider name must not match.
        assert_eq!(detect_provider("https://notmatterport.com/x"), None);
        assert_eq!(
            detect_provider("https://matterport.com.evil.example/x"),
            None
        );
    }

    #[test]
    fn provider_detection_falls_back_to_substring_for_unparsable_urls() {
        assert_eq!(
            detect_provider("my.matterport.com/show/?m=abc"),
            Some(Provider::Matterport)
        );
    }

    #[test]
    fn provider_names_are_stable() {
        assert_eq!(Provider::Matterport.name(), "Matterport");
        assert_eq!(Provider::ThreeDVista.name(), "3DVista");
    }
}
