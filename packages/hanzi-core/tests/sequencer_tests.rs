//! Dependency sequencer over the sample decomposition graph

mod common;

use common::*;
use hanzi_core::features::reference::{FrequencyTable, MISSING_FREQUENCY};
use hanzi_core::features::sequencer::{Sequencer, SequencerError};
use hanzi_core::CyclePolicy;
use pretty_assertions::assert_eq;

fn position(order: &[String], unit: &str) -> usize {
    order
        .iter()
        .position(|u| u == unit)
        .unwrap_or_else(|| panic!("{unit} missing from {order:?}"))
}

#[test]
fn test_words_follow_their_graphemes_and_components() {
    init_tracing();
    let graph = sample_graph();
    let mut seq = Sequencer::new(&graph);
    seq.add_all(["你好", "你", "好", "众"]);

    let order = seq.get_sorted_lexicographic().unwrap();
    assert!(position(&order, "亻") < position(&order, "你"));
    assert!(position(&order, "尔") < position(&order, "你"));
    assert!(position(&order, "你") < position(&order, "你好"));
    assert!(position(&order, "女") < position(&order, "好"));
    assert!(position(&order, "好") < position(&order, "你好"));
    assert!(position(&order, "人") < position(&order, "从"));
    assert!(position(&order, "从") < position(&order, "众"));
    assert_eq!(order.len(), seq.len());
}

#[test]
fn test_word_graphemes_are_not_expanded() {
    let graph = sample_graph();
    let mut seq = Sequencer::new(&graph);
    seq.add("你好");
    assert_eq!(seq.len(), 3);
    assert!(!seq.contains("亻"));
    assert_eq!(seq.prerequisites_of("你好"), vec!["你", "好"]);
}

#[test]
fn test_lexicographic_tie_break() {
    let graph = graph_of(&[('你', "⿰亻尔"), ('他', "⿰亻也")]);
    let mut seq = Sequencer::new(&graph);
    seq.add_all(["也", "亻", "他", "你", "尔"]);
    assert_eq!(
        seq.get_sorted_lexicographic().unwrap(),
        vec!["也", "亻", "他", "尔", "你"]
    );
}

#[test]
fn test_frequency_priority() {
    let graph = sample_graph();
    let table = FrequencyTable::from_pairs([("好", 0.24), ("你", 0.57), ("女", 0.3)]);
    let mut seq = Sequencer::new(&graph);
    seq.add_all(["你", "好"]);

    let order = seq.get_sorted(|u| table.priority(u)).unwrap();
    // 女 and 子 are ready first; 女 has a frequency, 子 falls back to the penalty
    assert_eq!(order[0], "女");
    assert_eq!(table.frequency("子"), Some(MISSING_FREQUENCY));
    assert!(position(&order, "好") < position(&order, "你"));
}

#[test]
fn test_repeated_sorting_is_stable() {
    let graph = sample_graph();
    let mut seq = Sequencer::new(&graph);
    seq.add_all(["字", "好", "妈"]);
    let first = seq.get_sorted_lexicographic().unwrap();
    let second = seq.get_sorted_lexicographic().unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_cycle_policies() {
    let graph = graph_of(&[('甲', "⿰乙口"), ('乙', "⿱甲口")]);

    let mut strict = Sequencer::new(&graph);
    strict.add("甲");
    assert_eq!(
        strict.cycles(),
        vec![vec!["乙".to_string(), "甲".to_string()]]
    );
    assert_eq!(
        strict.get_sorted_lexicographic(),
        Err(SequencerError::Cycle {
            members: vec!["乙".to_string(), "甲".to_string()]
        })
    );

    let mut lenient = Sequencer::new(&graph)
        .with_cycle_policy(CyclePolicy::AppendUnresolved);
    lenient.add("甲");
    let order = lenient
        .get_sorted(|u| if u == "甲" { Some(0.0) } else { None })
        .unwrap();
    assert_eq!(order, vec!["口", "甲", "乙"]);
}
