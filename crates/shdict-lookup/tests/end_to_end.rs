//! Lookups against a real in-memory index.

#![allow(clippy::tests_outside_test_module)]

use std::{sync::Arc, thread};

use shdict_index::{EntryIndex, TantivyProvider};
use shdict_lookup::{
    Dictionary, MAX_PAGE, Outcome, PAGE_SIZE, PagePayload, SearchKind, reconstruct,
};
use shdict_model::{Definition, Entry, SourceTable};

fn entry(source: &str, word: &str, readings: &[&str], meanings: &[&str]) -> Entry {
    Entry::new(
        source,
        word,
        vec![],
        vec![Definition::new(
            readings.iter().map(|r| r.to_string()).collect(),
            meanings.iter().map(|m| m.to_string()).collect(),
        )],
    )
}

fn provider(entries: &[Entry]) -> TantivyProvider {
    let index = EntryIndex::in_ram().unwrap();
    let mut writer = index.writer().unwrap();
    writer.add_entries(entries).unwrap();
    writer.commit().unwrap();
    index.provider().unwrap()
}

fn dictionary(entries: &[Entry]) -> Dictionary<TantivyProvider> {
    let sources = SourceTable::new([("c", "Crawford"), ("r", "Republican-era dictionary")]);
    Dictionary::new(provider(entries), sources)
}

fn hao_corpus() -> Vec<Entry> {
    (0..30)
        .map(|i| entry("c", &format!("好{i}"), &["hao"], &["good"]))
        .collect()
}

fn list(outcome: Outcome) -> shdict_lookup::ListView {
    match outcome {
        Outcome::List(view) => view,
        other => panic!("expected list, got {other:?}"),
    }
}

fn ids(view: &shdict_lookup::ListView) -> Vec<String> {
    view.items.iter().map(|i| i.value.clone()).collect()
}

#[test]
fn pages_through_thirty_matches() {
    let dict = dictionary(&hao_corpus());

    let first = list(dict.search("hao", None).unwrap());
    assert_eq!(first.total, 30);
    assert_eq!(first.items.len(), PAGE_SIZE);
    let controls = first.controls.as_ref().unwrap();
    assert!(controls.next.enabled);
    assert!(!controls.previous.enabled);

    let second = list(dict.handle_callback(&controls.next.token).unwrap().unwrap());
    assert_eq!(second.total, 30);
    assert_eq!(second.page, 1);
    assert_eq!(second.items.len(), 5);
    let controls = second.controls.as_ref().unwrap();
    assert!(!controls.next.enabled);
    assert_eq!(controls.placeholder, "Select from results 26 to 30");

    let mut all = ids(&first);
    all.extend(ids(&second));
    all.sort();
    all.dedup();
    assert_eq!(all.len(), 30);
}

#[test]
fn huge_page_callbacks_are_dropped() {
    let dict = dictionary(&hao_corpus());

    for page in ["400000000000000000", "9223372036854775807", "1e18"] {
        let token = format!(r#"shdef:goToPage|{{"query":"hao","page":{page}}}"#);
        assert!(dict.handle_callback(&token).is_none(), "{token}");
    }
}

#[test]
fn last_reachable_page_is_empty() {
    let dict = dictionary(&hao_corpus());
    let token = format!(r#"shdef:goToPage|{{"query":"hao","page":{MAX_PAGE}}}"#);

    let view = list(dict.handle_callback(&token).unwrap().unwrap());

    assert_eq!(view.total, 30);
    assert!(view.items.is_empty());
    assert!(!view.controls.unwrap().next.enabled);
}

#[test]
fn same_query_same_page() {
    let dict = dictionary(&hao_corpus());
    let payload = PagePayload::new("hao", Some("c"), 1);

    let a = list(dict.go_to_page(SearchKind::Definition, &payload).unwrap());
    let b = list(dict.go_to_page(SearchKind::Definition, &payload).unwrap());

    assert_eq!(ids(&a), ids(&b));
    assert_eq!(a.total, b.total);
}

#[test]
fn zero_matches_is_no_results() {
    let dict = dictionary(&hao_corpus());
    assert_eq!(
        dict.search("nothing-here", None).unwrap(),
        Outcome::NoResults {
            query: "nothing-here".into()
        }
    );
}

#[test]
fn source_filter_restricts_results() {
    let mut corpus = hao_corpus();
    corpus.push(entry("r", "好", &["hao"], &["good"]));
    let dict = dictionary(&corpus);

    let Outcome::Detail(view) = dict.search("hao", Some("r")).unwrap() else {
        panic!("expected detail");
    };
    assert_eq!(view.id, "r:好");
    assert_eq!(view.attribution, "Republican-era dictionary");
}

#[test]
fn lone_exact_word_opens_detail() {
    let dict = dictionary(&[
        entry("c", "阿拉", &["aq-la"], &["we"]),
        entry("c", "阿拉多", &["aq-la-tu"], &["we all"]),
    ]);

    let Outcome::Detail(view) = dict.search("阿拉", None).unwrap() else {
        panic!("expected detail");
    };
    assert_eq!(view.id, "c:阿拉");
    assert_eq!(view.title, "阿拉");
    assert_eq!(view.attribution, "Crawford");
}

#[test]
fn same_word_in_two_sources_lists() {
    let dict = dictionary(&[
        entry("c", "阿拉", &["aq-la"], &["we"]),
        entry("r", "阿拉", &["ah-lah"], &["we; us"]),
    ]);

    let view = list(dict.search("阿拉", None).unwrap());
    assert_eq!(view.title, "2 results for “阿拉”");
    let mut got = ids(&view);
    got.sort();
    assert_eq!(got, vec!["c:阿拉", "r:阿拉"]);
}

#[test]
fn matches_folded_readings() {
    let dict = dictionary(&[
        entry("c", "夜", &["iá"], &["night"]),
        entry("c", "也", &["ia"], &["also"]),
    ]);

    let Outcome::Detail(view) = dict.search("iaa", None).unwrap() else {
        panic!("expected detail");
    };
    assert_eq!(view.id, "c:夜");
}

#[test]
fn homophones_of_a_word() {
    let dict = dictionary(&[
        entry("c", "阿", &["aq"], &["prefix"]),
        entry("c", "拉", &["la"], &["pull"]),
        entry("c", "阿拉", &["aq la"], &["we"]),
        entry("c", "鴨拉", &["aq la"], &["duck pulls"]),
    ]);

    let view = list(
        dict.go_to_page(SearchKind::Homophone, &PagePayload::new("阿拉", None, 0))
            .unwrap(),
    );
    let mut got = ids(&view);
    got.sort();
    assert_eq!(got, vec!["c:阿拉", "c:鴨拉"]);
    assert!(view.items[0].token.starts_with("homophone:select|"));

    let Outcome::Detail(detail) = dict.homophones("阿拉", None).unwrap() else {
        panic!("expected detail");
    };
    assert_eq!(detail.id, "c:阿拉");
}

#[test]
fn homophones_of_unknown_characters() {
    let dict = dictionary(&[entry("c", "阿", &["aq"], &["prefix"])]);

    let none = Outcome::NoResults { query: "龘".into() };
    assert_eq!(dict.homophones("龘", None).unwrap(), none);
    assert_eq!(
        dict.homophones("阿龘", None).unwrap(),
        Outcome::NoResults {
            query: "阿龘".into()
        }
    );
}

#[test]
fn reconstructs_indexed_entries() {
    let original = Entry::new(
        "qianplus",
        "學堂",
        vec!["学堂".into()],
        vec![
            Definition::new(vec!["óq-dáon".into()], vec!["school".into()]),
            Definition::new(
                vec!["hoq-daon".into(), "ö'q".into()],
                vec!["academy".into(), "college".into()],
            ),
        ],
    );
    let provider = provider(&[original.clone()]);

    let rebuilt = reconstruct(&provider, &[original.id.clone()]).unwrap();

    assert_eq!(rebuilt, vec![original.clone()]);
    for (a, b) in rebuilt[0].definitions.iter().zip(&original.definitions) {
        let pairs_a: Vec<_> = a.readings.iter().zip(&a.readings_no_diacritics).collect();
        let pairs_b: Vec<_> = b.readings.iter().zip(&b.readings_no_diacritics).collect();
        assert_eq!(pairs_a, pairs_b);
    }
}

#[test]
fn shared_across_threads() {
    let dict = Arc::new(dictionary(&hao_corpus()));
    let expected = ids(&list(dict.search("hao", None).unwrap()));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let dict = Arc::clone(&dict);
            thread::spawn(move || ids(&list(dict.search("hao", None).unwrap())))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
