use jyutping_chapters::config::Config;
use jyutping_chapters::logger;
use jyutping_chapters::models::{load_all_chapter_files, CharacterRecord};
use jyutping_chapters::services::chapter_writer::write_json_atomic;
use jyutping_chapters::App;
use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// 在临时目录下准备 data/ 和日志文件
fn setup(chapters: &[(usize, Value)]) -> (TempDir, Config) {
    logger::init(false);

    let root = tempfile::tempdir().unwrap();
    let data_dir = root.path().join("data");
    fs::create_dir_all(&data_dir).unwrap();

    for (number, content) in chapters {
        let path = data_dir.join(format!("chapter_{}_characters.json", number));
        fs::write(path, serde_json::to_string_pretty(content).unwrap()).unwrap();
    }

    let config = Config {
        data_dir: data_dir.to_string_lossy().to_string(),
        output_log_file: root
            .path()
            .join("ranking_log.txt")
            .to_string_lossy()
            .to_string(),
        ..Config::default()
    };
    (root, config)
}

fn entry(c: &str, jyutping: &str, tone: u8) -> Value {
    json!({ "char": c, "jyutping": jyutping, "tone": tone, "frequency_rank": 9999 })
}

fn sample_chapters() -> Vec<(usize, Value)> {
    vec![
        (
            1,
            json!([entry("水", "seoi2", 2), entry("火", "fo2", 2), entry("的", "dik1", 1)]),
        ),
        (
            2,
            json!([
                entry("一", "jat1", 1),
                entry("龘", "daap6", 6),
                entry("人", "jan4", 4),
                entry("高", "gou1", 1)
            ]),
        ),
    ]
}

fn read_chapter(data_dir: &Path, number: usize) -> Vec<Value> {
    let path = data_dir.join(format!("chapter_{}_characters.json", number));
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

fn backup_dirs(data_dir: &Path) -> Vec<PathBuf> {
    fs::read_dir(data_dir)
        .unwrap()
        .map(|e| e.unwrap().path())
        .filter(|p| {
            p.is_dir()
                && p.file_name()
                    .unwrap()
                    .to_string_lossy()
                    .starts_with("backup_before_ranking_")
        })
        .collect()
}

fn snapshot(data_dir: &Path) -> Vec<(PathBuf, Vec<u8>)> {
    let mut files: Vec<_> = fs::read_dir(data_dir)
        .unwrap()
        .map(|e| e.unwrap().path())
        .filter(|p| p.is_file())
        .map(|p| {
            let bytes = fs::read(&p).unwrap();
            (p, bytes)
        })
        .collect();
    files.sort();
    files
}

#[tokio::test]
async fn test_rank_rewrites_chapters() {
    let (_root, mut config) = setup(&sample_chapters());
    config.chapter_count = 3;
    let data_dir = config.data_path();

    let app = App::initialize(config).unwrap();
    let summary = app.run_rank(false).await.unwrap();

    assert_eq!(summary.total_characters, 7);
    assert_eq!(summary.chapter_sizes, vec![3, 2, 2]);
    assert_eq!(summary.failed_files, 0);
    assert!(summary.removed.is_empty());

    // 全局排名 1..7 连续，的 排第一，一 排第二
    let ranks: Vec<u64> = (1..=3)
        .flat_map(|n| read_chapter(&data_dir, n))
        .map(|v| v["frequency_rank"].as_u64().unwrap())
        .collect();
    assert_eq!(ranks, (1..=7).collect::<Vec<u64>>());

    let first = read_chapter(&data_dir, 1);
    assert_eq!(first[0]["char"], "的");
    assert_eq!(first[1]["char"], "一");
    assert_eq!(first[0]["jyutping"], "dik1");

    // 备份目录中保留了原始文件
    let backups = backup_dirs(&data_dir);
    assert_eq!(backups.len(), 1);
    assert_eq!(summary.backup_dir.as_deref(), Some(backups[0].as_path()));
    let original: Value = serde_json::from_str(
        &fs::read_to_string(backups[0].join("chapter_2_characters.json.backup")).unwrap(),
    )
    .unwrap();
    assert_eq!(original, sample_chapters()[1].1);

    let report: Value =
        serde_json::from_str(&fs::read_to_string(data_dir.join("ranking_report.json")).unwrap())
            .unwrap();
    assert_eq!(report["total_characters"], 7);
    assert_eq!(report["chapters_summary"].as_array().unwrap().len(), 3);
    assert_eq!(report["top_chars"][0]["char"], "的");
}

#[tokio::test]
async fn test_rank_is_idempotent() {
    let (_root, config) = setup(&sample_chapters());
    let data_dir = config.data_path();
    let app = App::initialize(config).unwrap();

    app.run_rank(false).await.unwrap();
    let once: Vec<Value> = (1..=10).flat_map(|n| read_chapter(&data_dir, n)).collect();

    app.run_rank(false).await.unwrap();
    let twice: Vec<Value> = (1..=10).flat_map(|n| read_chapter(&data_dir, n)).collect();

    assert_eq!(once, twice);
    // 10 章 7 个字，后 3 章为空
    assert!(read_chapter(&data_dir, 10).is_empty());
}

#[tokio::test]
async fn test_zero_chapters_touches_nothing() {
    let (_root, mut config) = setup(&sample_chapters());
    config.chapter_count = 0;
    let data_dir = config.data_path();
    let log_file = PathBuf::from(&config.output_log_file);
    let before = snapshot(&data_dir);

    assert!(App::initialize(config).is_err());

    assert!(!log_file.exists());
    assert!(backup_dirs(&data_dir).is_empty());
    assert_eq!(snapshot(&data_dir), before);
}

#[tokio::test]
async fn test_back_to_back_runs_keep_both_backups() {
    let (_root, mut config) = setup(&sample_chapters());
    config.chapter_count = 3;
    let data_dir = config.data_path();
    let original = fs::read(data_dir.join("chapter_1_characters.json")).unwrap();

    let app = App::initialize(config).unwrap();
    let first = app.run_rank(false).await.unwrap();
    let after_first = fs::read(data_dir.join("chapter_1_characters.json")).unwrap();
    let second = app.run_rank(false).await.unwrap();

    let first_dir = first.backup_dir.unwrap();
    let second_dir = second.backup_dir.unwrap();
    assert_ne!(first_dir, second_dir);
    assert_eq!(backup_dirs(&data_dir).len(), 2);

    assert_eq!(
        fs::read(first_dir.join("chapter_1_characters.json.backup")).unwrap(),
        original
    );
    assert_eq!(
        fs::read(second_dir.join("chapter_1_characters.json.backup")).unwrap(),
        after_first
    );
}

#[tokio::test]
async fn test_stale_chapters_removed_after_backup() {
    let mut chapters = sample_chapters();
    chapters.push((3, json!([entry("山", "saan1", 1)])));
    let (_root, mut config) = setup(&chapters);
    config.chapter_count = 2;
    let data_dir = config.data_path();

    let app = App::initialize(config).unwrap();
    let summary = app.run_rank(false).await.unwrap();

    assert_eq!(summary.chapter_sizes, vec![4, 4]);
    assert_eq!(
        summary.removed,
        vec![data_dir.join("chapter_3_characters.json")]
    );
    assert!(!data_dir.join("chapter_3_characters.json").exists());

    let backups = backup_dirs(&data_dir);
    assert!(backups[0].join("chapter_3_characters.json.backup").exists());
}

#[tokio::test]
async fn test_broken_file_is_skipped() {
    let (_root, mut config) = setup(&sample_chapters()[..1]);
    config.chapter_count = 2;
    let data_dir = config.data_path();
    fs::write(data_dir.join("chapter_2_characters.json"), "not json").unwrap();

    let app = App::initialize(config).unwrap();
    let summary = app.run_rank(false).await.unwrap();

    assert_eq!(summary.failed_files, 1);
    assert_eq!(summary.total_characters, 3);
    assert_eq!(summary.chapter_sizes, vec![2, 1]);

    // 损坏的文件也被备份
    let backups = backup_dirs(&data_dir);
    assert_eq!(
        fs::read_to_string(backups[0].join("chapter_2_characters.json.backup")).unwrap(),
        "not json"
    );
}

#[tokio::test]
async fn test_dry_run_writes_nothing() {
    let (_root, mut config) = setup(&sample_chapters());
    config.chapter_count = 3;
    let data_dir = config.data_path();
    let before = snapshot(&data_dir);

    let app = App::initialize(config).unwrap();
    let summary = app.run_rank(true).await.unwrap();

    assert_eq!(summary.chapter_sizes, vec![3, 2, 2]);
    assert!(summary.backup_dir.is_none());
    assert!(summary.report.is_some());
    assert_eq!(snapshot(&data_dir), before);
    assert!(backup_dirs(&data_dir).is_empty());
}

#[tokio::test]
async fn test_missing_data_dir_fails() {
    let (root, mut config) = setup(&[]);
    config.data_dir = root.path().join("nope").to_string_lossy().to_string();

    let app = App::initialize(config).unwrap();
    assert!(app.run_rank(false).await.is_err());
}

#[tokio::test]
async fn test_empty_data_dir_is_a_no_op() {
    let (_root, config) = setup(&[]);
    let data_dir = config.data_path();

    let app = App::initialize(config).unwrap();
    let summary = app.run_rank(false).await.unwrap();

    assert_eq!(summary.total_characters, 0);
    assert!(summary.report.is_none());
    assert!(!data_dir.join("ranking_report.json").exists());
}

#[tokio::test]
async fn test_written_records_load_back() {
    let root = tempfile::tempdir().unwrap();
    let mut record = CharacterRecord::new('好', Some("hou2"));
    record.tone = 2;
    record.frequency_rank = 5;
    record
        .extra
        .insert("examples".to_string(), json!(["好人"]));

    write_json_atomic(
        &root.path().join("chapter_1_characters.json"),
        &vec![record.clone()],
    )
    .unwrap();

    let set = load_all_chapter_files(root.path()).await.unwrap();
    assert_eq!(set.chapters.len(), 1);
    assert_eq!(set.chapters[0].records, vec![record]);
}

#[tokio::test]
async fn test_validate_reports_errors() {
    let (_root, config) = setup(&[
        (1, json!([entry("一", "jat1", 1), entry("好", "hou2", 2)])),
        (2, json!([entry("人", "jan4", 9)])),
    ]);

    let app = App::initialize(config).unwrap();
    let report = app.run_validate().await.unwrap();

    assert!(!report.is_ok());
    assert_eq!(report.errors.len(), 1);
    assert_eq!(report.stats.total_records, 3);
    assert_eq!(report.stats.chapter_count, 2);
}

#[tokio::test]
async fn test_validate_clean_data() {
    let (_root, config) = setup(&[(1, json!([entry("一", "jat1", 1), entry("好", "hou2", 2)]))]);

    let app = App::initialize(config).unwrap();
    let report = app.run_validate().await.unwrap();

    assert!(report.is_ok());
    assert!(report.warnings.is_empty());
}
