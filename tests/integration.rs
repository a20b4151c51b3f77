// SPDX-License-Identifier: MPL-2.0
use agipocket::app::config::{self, Config};
use agipocket::i18n::fluent::I18n;
use agipocket::ui::splash;
use std::time::{Duration, Instant};
use tempfile::tempdir;

#[test]
fn language_change_via_config() {
    // Create a temporary directory for the config file
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join(config::CONFIG_FILE);

    // 1. Initial config: en
    config::save_to_path(&Config::with_language("en"), &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en");
    assert_eq!(i18n_en.tr("window-title"), "AGIPOCKET");

    // 2. Change config to zh-CN
    config::save_to_path(&Config::with_language("zh-CN"), &temp_config_file_path)
        .expect("Failed to write zh-CN config file");

    let loaded_chinese_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load zh-CN config from path");
    let i18n_zh = I18n::new(None, None, &loaded_chinese_config);
    assert_eq!(i18n_zh.current_locale().to_string(), "zh-CN");
    assert_ne!(i18n_zh.tr("hero-title"), i18n_en.tr("hero-title"));

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn cli_flag_overrides_saved_preference() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join(config::CONFIG_FILE);

    config::save_to_path(&Config::with_language("zh-TW"), &temp_config_file_path)
        .expect("Failed to write config file");

    let loaded_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load config from path");
    let i18n = I18n::new(Some("en".to_string()), None, &loaded_config);

    assert_eq!(i18n.current_locale().to_string(), "en");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn splash_reveals_page_after_display_and_fade() {
    let start = Instant::now();
    let mut state = splash::State::new_at(start);

    // 1. Still inside the display window
    state.tick(start + splash::DISPLAY_DURATION - Duration::from_millis(1));
    assert_eq!(state.phase(), splash::Phase::Loading);
    assert_eq!(state.opacity(), 1.0);

    // 2. Display window elapsed: the fade begins at full opacity
    let fade_start = start + splash::DISPLAY_DURATION;
    state.tick(fade_start);
    assert_eq!(state.phase(), splash::Phase::FadingOut);
    assert_eq!(state.opacity(), 1.0);

    // 3. Halfway through the fade the splash is partially transparent
    state.tick(fade_start + splash::FADE_DURATION / 2);
    assert_eq!(state.phase(), splash::Phase::FadingOut);
    assert!(state.opacity() > 0.0 && state.opacity() < 1.0);

    // 4. Fade elapsed: the page is revealed and stays revealed
    state.tick(fade_start + splash::FADE_DURATION);
    assert_eq!(state.phase(), splash::Phase::Revealed);
    assert_eq!(state.opacity(), 0.0);

    state.tick(fade_start + splash::FADE_DURATION + Duration::from_secs(3600));
    assert_eq!(state.phase(), splash::Phase::Revealed);
}

#[test]
fn close_during_intro_freezes_the_splash() {
    let start = Instant::now();
    let mut state = splash::State::new_at(start);

    state.dispose();
    state.tick(start + Duration::from_secs(60));

    assert_eq!(state.phase(), splash::Phase::Loading);
}

#[test]
fn footer_interpolates_current_year() {
    let i18n = I18n::new(Some("en".to_string()), None, &Config::default());

    let footer = i18n.tr_with_args("footer", &[("year", "2024")]);
    assert!(footer.contains("2024"));
    assert_ne!(footer, "footer");
}
