// SPDX-License-Identifier: MPL-2.0
//! End-to-end behavior tests across modules: lightbox navigation, tour
//! dispatching, consent persistence, and config-driven localization.

use iced_vitrine::app::persisted_state::{AppState, Consent};
use iced_vitrine::config::{self, Config};
use iced_vitrine::i18n::fluent::I18n;
use iced_vitrine::lightbox::{Direction, Lightbox};
use iced_vitrine::tours::{self, Dispatch, Provider, WindowOverrides};
use tempfile::tempdir;

fn sequence(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("room-{i}.jpg")).collect()
}

#[test]
fn browse_open_navigate_close() {
    let mut lightbox = Lightbox::new();
    lightbox.init(sequence(5));

    assert_eq!(lightbox.open(3), Some("room-3.jpg"));
    assert!(lightbox.is_open());

    assert_eq!(lightbox.change(Direction::Forward), Some("room-4.jpg"));
    assert_eq!(lightbox.change(Direction::Forward), Some("room-0.jpg"));
    assert_eq!(lightbox.change(Direction::Back), Some("room-4.jpg"));

    lightbox.close();
    assert!(!lightbox.is_open());
    // Position survives closing; reopening elsewhere is explicit.
    assert_eq!(lightbox.current_index(), 4);
}

#[test]
fn rescanning_the_gallery_resets_the_cursor() {
    let mut lightbox = Lightbox::new();
    lightbox.init(sequence(4));
    lightbox.open(2);

    lightbox.init(sequence(6));
    assert_eq!(lightbox.current_index(), 0);
    assert!(lightbox.is_open());

    lightbox.init(Vec::new());
    assert!(!lightbox.is_open());
    assert_eq!(lightbox.current_locator(), None);
}

#[test]
fn tour_dispatch_distinguishes_placeholder_and_real_links() {
    let overrides = WindowOverrides::default();

    assert_eq!(
        tours::dispatch("https://example.com/TOUR_URL", &overrides),
        Dispatch::Placeholder
    );

    let Dispatch::Launch(request) =
        tours::dispatch("https://my.matterport.com/show/?m=abc123", &overrides)
    else {
        panic!("expected a launch request");
    };
    assert_eq!(request.provider, Some(Provider::Matterport));
    assert_eq!(
        request.features,
        "width=1200,height=800,resizable=yes,scrollbars=yes"
    );
    assert_eq!(request.target, "_blank");
}

#[test]
fn consent_choice_survives_a_restart() {
    let dir = tempdir().expect("failed to create temp dir");
    let base = Some(dir.path().to_path_buf());

    // First visit: no answer on record.
    let (state, warning) = AppState::load_from(base.clone());
    assert_eq!(state.consent, None);
    assert_eq!(warning, None);

    // The visitor declines; a later session must see that choice.
    let answered = AppState {
        consent: Some(Consent::Declined),
    };
    assert_eq!(answered.save_to(base.clone()), None);

    let (reloaded, _) = AppState::load_from(base);
    assert_eq!(reloaded.consent, Some(Consent::Declined));
}

#[test]
fn language_change_via_config_file() {
    let dir = tempdir().expect("failed to create temp dir");
    let config_path = dir.path().join("settings.toml");

    let mut german = Config::default();
    german.general.language = Some("de".to_string());
    config::save_to_path(&german, &config_path).expect("failed to write config");

    let loaded = config::load_from_path(&config_path).expect("failed to load config");
    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "de");
    assert_eq!(i18n.tr("consent-accept"), "Akzeptieren");

    // A CLI override outranks the config file.
    let i18n = I18n::new(Some("en-US".to_string()), &loaded);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
    assert_eq!(i18n.tr("consent-accept"), "Accept");
}

#[test]
fn tour_entries_round_trip_through_the_config_file() {
    let dir = tempdir().expect("failed to create temp dir");
    let config_path = dir.path().join("settings.toml");

    let mut config = Config::default();
    config.tours = vec![
        iced_vitrine::config::TourEntry {
            label: "Penthouse".to_string(),
            url: "https://kuula.co/share/penthouse".to_string(),
        },
        iced_vitrine::config::TourEntry {
            label: "Lobby".to_string(),
            url: "https://example.com/TOUR_URL".to_string(),
        },
    ];
    config::save_to_path(&config, &config_path).expect("failed to write config");

    let loaded = config::load_from_path(&config_path).expect("failed to load config");
    assert_eq!(loaded.tours.len(), 2);
    assert_eq!(
        tours::dispatch(&loaded.tours[1].url, &WindowOverrides::default()),
        Dispatch::Placeholder
    );
    let Dispatch::Launch(request) =
        tours::dispatch(&loaded.tours[0].url, &WindowOverrides::default())
    else {
        panic!("expected a launch request");
    };
    assert_eq!(request.provider, Some(Provider::Kuula));
}
