use hanzi_analysis::{COMBINED_LABEL, Direction, LearningParameters, StopReason};
use hanzi_config::{ExportConfig, ExportFiles, HanziMode, IndividualExport, StatisticsMode, StatisticsOptions};
use hanzi_report::{Event, TextBook, assemble, list_books};
use std::fs;

fn individual(files: ExportFiles, learning: LearningParameters) -> ExportConfig {
    ExportConfig {
        hanzi: HanziMode::Individual(IndividualExport {
            files,
            learning,
            ..IndividualExport::default()
        }),
        statistics: StatisticsMode::None,
    }
}

fn lopsided_book() -> String {
    format!("{}{}{}。", "的".repeat(30), "了".repeat(20), "是".repeat(5))
}

#[test]
fn shared_hanzi_of_two_books() {
    let sources = vec![TextBook::new("A", "甲乙丙。"), TextBook::new("B", "乙丙丁。乙！")];
    let config = ExportConfig {
        hanzi: HanziMode::Shared {
            frequency: Direction::Descending,
        },
        statistics: StatisticsMode::None,
    };
    let report = assemble(&sources, &config).unwrap();
    assert_eq!(report.tables().len(), 1);
    let table = report.table("shared-hanzi.csv").unwrap();
    assert_eq!(table.headers(), &["hanzi", "freq_total"]);
    assert_eq!(table.column("hanzi").unwrap(), vec!["乙", "丙"]);
    assert_eq!(table.column("freq_total").unwrap(), vec!["3", "2"]);
}

#[test]
fn shared_hanzi_needs_two_readable_books() {
    let sources = vec![TextBook::new("A", "甲乙丙。"), TextBook::new("B", "no hanzi at all")];
    let config = ExportConfig {
        hanzi: HanziMode::Shared {
            frequency: Direction::Descending,
        },
        statistics: StatisticsMode::None,
    };
    let report = assemble(&sources, &config).unwrap();
    assert!(report.tables().is_empty());
    assert_eq!(report.log().succeeded(), 1);
    assert_eq!(report.log().failed(), 1);
    assert!(
        report
            .log()
            .events()
            .iter()
            .any(|event| matches!(event, Event::Skipped { export: "shared hanzi", .. }))
    );
}

#[test]
fn failing_book_does_not_stop_the_others() {
    let sources = vec![TextBook::new("good", lopsided_book()), TextBook::new("bad", "")];
    let learning = LearningParameters {
        usage_examples: 1,
        comprehension_target: 90,
        frequency_threshold: 10,
    };
    let report = assemble(&sources, &individual(ExportFiles::LearningOnly, learning)).unwrap();
    let names: Vec<_> = report.tables().iter().map(|table| table.name()).collect();
    assert_eq!(names, vec!["good_learn.csv"]);

    let events = report.log().events();
    let Event::Failed { book, reason } = &events[1] else {
        panic!("expected the second book to fail");
    };
    assert_eq!(book, "bad");
    assert!(reason.contains("could not process \"bad\""), "{reason}");
    assert!(reason.contains("no hanzi found"), "{reason}");
    let Some(Event::Learning {
        selected,
        target,
        coverage,
        reason,
        ..
    }) = events.iter().find(|event| matches!(event, Event::Learning { .. }))
    else {
        panic!("no learning outcome logged");
    };
    assert_eq!((*selected, *target, *reason), (2, 90, StopReason::TargetReached));
    assert!((coverage - 5000.0 / 55.0).abs() < 1e-9);
}

#[test]
fn learning_list_can_fall_short_of_target() {
    let sources = vec![TextBook::new("book", lopsided_book())];
    let learning = LearningParameters {
        usage_examples: 0,
        comprehension_target: 98,
        frequency_threshold: 10,
    };
    let report = assemble(&sources, &individual(ExportFiles::Both, learning)).unwrap();
    assert_eq!(report.table("book_hanzi.csv").unwrap().len(), 3);
    assert_eq!(report.table("book_learn.csv").unwrap().column("hanzi").unwrap(), vec!["的", "了"]);
    assert!(report.log().events().iter().any(|event| matches!(
        event,
        Event::Learning {
            reason: StopReason::BelowThreshold,
            ..
        }
    )));
}

#[test]
fn combined_statistics_count_shared_characters_once() {
    let sources = vec![TextBook::new("A", "甲乙丙。"), TextBook::new("B", "乙丙丁。")];
    let config = ExportConfig {
        hanzi: HanziMode::None,
        statistics: StatisticsMode::Combined(StatisticsOptions { percentiles: true }),
    };
    let report = assemble(&sources, &config).unwrap();
    let table = report.table("combined-stats.csv").unwrap();
    assert_eq!(table.column("book").unwrap(), vec!["A", "B", COMBINED_LABEL]);
    assert_eq!(table.column("total_hanzi").unwrap(), vec!["3", "3", "6"]);
    assert_eq!(table.column("unique_hanzi").unwrap(), vec!["3", "3", "4"]);
    assert!(table.headers().contains(&"top_50%_count".to_string()));
}

#[test]
fn export_to_disk() {
    let books = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    fs::write(books.path().join("甲.txt"), "\u{FEFF}你好你好吗？你很好。").unwrap();
    fs::write(books.path().join("乙.txt"), [0xC3, 0x28]).unwrap();

    let sources = list_books(books.path()).unwrap();
    assert_eq!(sources.len(), 2);
    let learning = LearningParameters {
        usage_examples: 2,
        comprehension_target: 90,
        frequency_threshold: 10,
    };
    let mut report = assemble(&sources, &individual(ExportFiles::UniqueOnly, learning)).unwrap();
    assert_eq!(report.log().failed(), 1);

    let target = output.path().join("export");
    assert_eq!(report.write(&target), 1);
    let written = fs::read_to_string(target.join("甲_hanzi.csv")).unwrap();
    assert_eq!(
        written,
        "\u{FEFF}hanzi,freq,dist,ex1,ex2\r\n\
         好,3,3.00,你好你好吗？,你很好。\r\n\
         你,3,2.50,你好你好吗？,你很好。\r\n\
         吗,1,,你好你好吗？,\r\n\
         很,1,,你很好。,\r\n"
    );
    assert!(
        report
            .log()
            .events()
            .iter()
            .any(|event| matches!(event, Event::Written { rows: 4, .. }))
    );
    assert!(!target.join("乙_hanzi.csv").exists());
}
