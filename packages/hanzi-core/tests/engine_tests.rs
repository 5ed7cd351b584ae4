//! StudyEngine end to end: config file → loaded data → tiers and order

mod common;

use std::fs;

use common::*;
use hanzi_core::{CyclePolicy, EngineConfig, HanziError, Preset, StudyEngine, Tier};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn config_for(dir: &TempDir) -> EngineConfig {
    EngineConfig::preset(Preset::Strict)
        .data_dir(dir.path())
        .frequencies(dir.path().join("freq.csv"))
}

#[test]
fn test_from_config_loads_everything() {
    init_tracing();
    let dir = TempDir::new().unwrap();
    write_data_dir(dir.path());

    let engine = StudyEngine::from_config(config_for(&dir)).unwrap();
    assert_eq!(engine.build_report().inserted, 9);
    assert_eq!(engine.reference().len(), 9);
    assert_eq!(engine.frequencies().map(|f| f.len()), Some(6));
}

#[test]
fn test_yaml_configured_engine() {
    let dir = TempDir::new().unwrap();
    write_data_dir(dir.path());
    let yaml = format!(
        "version: 1\npreset: lenient\ndata:\n  ids: {ids}\n  reference_dir: {hsk}\nclassifier:\n  max_partition_length: 2\n",
        ids = dir.path().join("ids.txt").display(),
        hsk = dir.path().join("hsk").display(),
    );
    let config_path = dir.path().join("hanzi.yaml");
    fs::write(&config_path, yaml).unwrap();

    let engine = StudyEngine::from_config(EngineConfig::from_yaml(&config_path).unwrap()).unwrap();
    assert!(engine.frequencies().is_none());
    assert_eq!(
        engine.config().sequencer.cycle_policy,
        CyclePolicy::AppendUnresolved
    );
    assert_eq!(
        engine.classify_all(&["你好", "你好他"]),
        vec![Tier::Level(1), Tier::Uncatalogued]
    );
}

#[test]
fn test_classify_and_order_together() {
    let dir = TempDir::new().unwrap();
    write_data_dir(dir.path());
    let engine = StudyEngine::from_config(config_for(&dir)).unwrap();

    let words = ["妈妈", "他们", "众", "宀", "猫"];
    let tiers = engine.classify_all(&words);
    let labels: Vec<String> = tiers.iter().map(Tier::to_string).collect();
    assert_eq!(labels, vec!["HSK1", "HSK2", "HSK6", "HSK2-", "OTHER"]);

    let order = engine.study_order(&["你", "他", "好"]).unwrap();
    // components are all unknown to the table and tie on the penalty; 他 and
    // 好 jump ahead as soon as they become ready
    assert_eq!(order, vec!["也", "亻", "他", "女", "子", "好", "尔", "你"]);
}

#[test]
fn test_missing_data_is_an_error() {
    let dir = TempDir::new().unwrap();
    let result = StudyEngine::from_config(config_for(&dir));
    assert!(matches!(result, Err(HanziError::Decomposition(_))));

    fs::write(dir.path().join("ids.txt"), SAMPLE_IDS).unwrap();
    let result = StudyEngine::from_config(config_for(&dir));
    assert!(matches!(result, Err(HanziError::Reference(_))));
}
