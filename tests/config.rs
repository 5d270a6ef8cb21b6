//! 설정 파일 생성·로드 테스트.
use pump_sizing_toolbox::config::{Config, ReportFormat};

#[test]
fn missing_config_is_created_with_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    let cfg = Config::load_or_default(&path).unwrap();
    assert_eq!(cfg, Config::default());
    assert!(path.exists());
    assert_eq!(Config::load_or_default(&path).unwrap(), cfg);
}

#[test]
fn partial_config_fills_remaining_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "language = \"en\"\n[report]\nformat = \"markdown\"\n").unwrap();
    let cfg = Config::load_or_default(&path).unwrap();
    assert_eq!(cfg.language, "en");
    assert_eq!(cfg.report.format, ReportFormat::Markdown);
    assert_eq!(cfg.report.output_dir, std::path::PathBuf::from("."));
}

#[test]
fn saved_config_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    let mut cfg = Config::default();
    cfg.locale_dir = Some("locales".into());
    cfg.report.format = ReportFormat::Markdown;
    cfg.save(&path).unwrap();
    assert_eq!(Config::load_or_default(&path).unwrap(), cfg);
}

#[test]
fn malformed_config_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[report]\nformat = \"docx\"\n").unwrap();
    assert!(Config::load_or_default(&path).is_err());
}
