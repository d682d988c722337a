//! 설정 직렬화/역직렬화 회귀 테스트.
use farm_helper_toolbox::config::Config;
use farm_helper_toolbox::units::{AreaUnit, LengthUnit, VolumeUnit, WeightUnit};

#[test]
fn config_round_trips_through_toml() {
    let mut cfg = Config::default();
    cfg.language = "en".to_string();
    cfg.language_pack_dir = Some("locales".to_string());
    cfg.default_units.length = LengthUnit::Foot;
    cfg.default_units.area = AreaUnit::Acre;
    cfg.window_alpha = 0.8;

    let text = toml::to_string_pretty(&cfg).expect("serialize config");
    let parsed: Config = toml::from_str(&text).expect("parse config");

    assert_eq!(parsed.language, "en");
    assert_eq!(parsed.language_pack_dir.as_deref(), Some("locales"));
    assert_eq!(parsed.default_units.length, LengthUnit::Foot);
    assert_eq!(parsed.default_units.area, AreaUnit::Acre);
    assert_eq!(parsed.default_units.volume, VolumeUnit::Liter);
    assert_eq!(parsed.default_units.weight, WeightUnit::Kilogram);
    assert_eq!(parsed.window_alpha, 0.8);
}

#[test]
fn default_config_round_trips_unchanged() {
    let cfg = Config::default();
    let text = toml::to_string_pretty(&cfg).expect("serialize config");
    let parsed: Config = toml::from_str(&text).expect("parse config");

    assert_eq!(parsed.language, "auto");
    assert!(parsed.language_pack_dir.is_none());
    assert_eq!(parsed.default_units.area, AreaUnit::Hectare);
    assert_eq!(parsed.window_alpha, 1.0);
}
