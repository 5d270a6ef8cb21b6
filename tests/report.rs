//! 계산서 문장 구성 및 저장 테스트.
use pump_sizing_toolbox::app::{self, calculate, RunOptions};
use pump_sizing_toolbox::config::{Config, ReportFormat};
use pump_sizing_toolbox::i18n::Translator;
use pump_sizing_toolbox::pump::{Field, RawPumpInput};
use pump_sizing_toolbox::report::{
    MarkdownReportWriter, ReportWriter, StatementRole, TextReportWriter,
};
use pump_sizing_toolbox::source::{InputSource, SourceError};

fn reference_raw() -> RawPumpInput {
    [
        (Field::PumpName, "P-101A/B"),
        (Field::FlowRate, "60"),
        (Field::PipeDiameter, "100"),
        (Field::StraightPipeLength, "30"),
        (Field::VerticalHead, "18"),
        (Field::DailyVolume, "720"),
        (Field::BallValves, "2"),
        (Field::CheckValves, "1"),
        (Field::Elbow90, "3"),
        (Field::YStrainer, "1"),
    ]
    .into_iter()
    .collect()
}

struct Fixed(RawPumpInput);

impl InputSource for Fixed {
    fn collect(&mut self) -> Result<RawPumpInput, SourceError> {
        Ok(self.0.clone())
    }
}

fn texts(raw: &RawPumpInput, lang: &str) -> Vec<String> {
    let calc = calculate(raw, &Translator::new(lang)).unwrap();
    calc.report.statements.into_iter().map(|s| s.text).collect()
}

#[test]
fn chinese_report_follows_calculation_sheet_layout() {
    assert_eq!(
        texts(&reference_raw(), "zh-tw"),
        vec![
            "泵浦計算書",
            "泵浦名稱：P-101A/B",
            "水量 = 60.0 CMH  管徑 = 100ψ  摩擦損失為 7.9 m/100m",
            "一、 揚程計算：",
            "等價管長 = 44.50 m",
            "摩擦損失 = 44.50 m * 7.9/100 = 3.52 m",
            "垂直揚程 = 18.0 m",
            "總揚程計算：3.52 + 18.0 + 0.0 = 21.52 m，實取 25 m",
            "二、 泵浦馬力：",
            "P = 0.163 * Q * H * K / E  ， K：傳動效率(1.1)，E：泵浦效率(0.7)",
            "馬力(KW) = 0.163 * 1.000 * 25 * 1.1 / 0.7 = 6.4 KW",
            "約等於 8.58 HP",
            "三、 泵浦運轉時間計算：",
            "每日處理水量 = 720.0 CMD",
            "泵浦運轉時間 = 720.0 / 60.0 = 12.0 hr",
        ]
    );
}

#[test]
fn roles_and_emphasis_are_assigned() {
    let calc = calculate(&reference_raw(), &Translator::new("zh-tw")).unwrap();
    let st = &calc.report.statements;
    assert_eq!(st[0].role, StatementRole::Title);
    assert!(st[2].emphasized);
    assert_eq!(st.iter().filter(|s| s.emphasized).count(), 1);
    assert_eq!(
        st.iter().filter(|s| s.role == StatementRole::Section).count(),
        3
    );
}

#[test]
fn extra_loss_line_only_when_positive() {
    let zh_extra = "外部單元壓損 = 4.5 m";
    assert!(!texts(&reference_raw(), "zh-tw").iter().any(|t| t.starts_with("外部單元壓損")));

    let mut raw = reference_raw();
    raw.set(Field::ExtraLoss, "4.5");
    let lines = texts(&raw, "zh-tw");
    let pos = lines.iter().position(|t| t == zh_extra).unwrap();
    assert!(lines[pos - 1].starts_with("垂直揚程"));
    assert!(lines[pos + 1].starts_with("總揚程計算：3.52 + 18.0 + 4.5 = 26.02 m，實取 25 m"));
}

#[test]
fn english_report_uses_same_values() {
    let lines = texts(&reference_raw(), "en");
    assert_eq!(lines[0], "Pump Calculation Sheet");
    assert!(lines.contains(&"Total head: 3.52 + 18.0 + 0.0 = 21.52 m, design 25 m".to_string()));
    assert!(lines.contains(&"approx. 8.58 HP".to_string()));
}

#[test]
fn invalid_input_aborts_before_report() {
    let mut raw = reference_raw();
    raw.set(Field::PipeDiameter, "abc");
    assert!(calculate(&raw, &Translator::new("zh-tw")).is_err());
}

#[test]
fn output_id_replaces_path_separators() {
    let calc = calculate(&reference_raw(), &Translator::new("zh-tw")).unwrap();
    assert_eq!(calc.report.output_id, "P-101A_B");
    assert_eq!(calc.report.file_name("txt"), "P-101A_B_計算書.txt");
}

#[test]
fn text_writer_saves_named_artifact() {
    let dir = tempfile::tempdir().unwrap();
    let calc = calculate(&reference_raw(), &Translator::new("zh-tw")).unwrap();
    let path = TextReportWriter
        .write_to_dir(&calc.report, dir.path())
        .unwrap();
    assert_eq!(path, dir.path().join("P-101A_B_計算書.txt"));
    let body = std::fs::read_to_string(&path).unwrap();
    let first = body.lines().next().unwrap();
    assert_eq!(first.trim(), "泵浦計算書");
    assert!(first.starts_with(' '));
    assert!(body.contains("約等於 8.58 HP"));
}

#[test]
fn markdown_writer_bolds_basic_spec() {
    let calc = calculate(&reference_raw(), &Translator::new("zh-tw")).unwrap();
    let mut out = Vec::new();
    MarkdownReportWriter.render(&calc.report, &mut out).unwrap();
    let md = String::from_utf8(out).unwrap();
    assert!(md.starts_with("<h1 align=\"center\">泵浦計算書</h1>"));
    assert!(md.contains("**水量 = 60.0 CMH  管徑 = 100ψ  摩擦損失為 7.9 m/100m**"));
    assert!(md.contains("## 二、 泵浦馬力："));
    assert!(md.contains(r"0.163 \* Q \* H"));
}

#[test]
fn run_writes_into_configured_directory() {
    let dir = tempfile::tempdir().unwrap();
    let mut cfg = Config::default();
    cfg.report.output_dir = dir.path().join("reports");
    cfg.report.format = ReportFormat::Markdown;
    let tr = Translator::new("zh-tw");
    let mut sink = Vec::new();
    let path = app::run(
        &cfg,
        &RunOptions::default(),
        &mut Fixed(reference_raw()),
        &tr,
        &mut sink,
    )
    .unwrap()
    .unwrap();
    assert_eq!(path, dir.path().join("reports").join("P-101A_B_計算書.md"));
    assert!(path.exists());
    assert!(sink.is_empty());
}

#[test]
fn run_to_stdout_skips_file() {
    let dir = tempfile::tempdir().unwrap();
    let options = RunOptions {
        format: Some(ReportFormat::Text),
        output_dir: Some(dir.path().to_path_buf()),
        to_stdout: true,
    };
    let mut sink = Vec::new();
    let saved = app::run(
        &Config::default(),
        &options,
        &mut Fixed(reference_raw()),
        &Translator::new("en"),
        &mut sink,
    )
    .unwrap();
    assert!(saved.is_none());
    assert!(String::from_utf8(sink).unwrap().contains("Pump Calculation Sheet"));
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn run_reports_validation_failure() {
    let mut raw = reference_raw();
    raw.set(Field::FlowRate, "");
    let err = app::run(
        &Config::default(),
        &RunOptions {
            to_stdout: true,
            ..RunOptions::default()
        },
        &mut Fixed(raw),
        &Translator::new("zh-tw"),
        &mut std::io::sink(),
    )
    .unwrap_err();
    assert!(matches!(err, app::AppError::Validation(_)));
    assert!(err.to_string().contains("flow_rate_cmh"));
}
