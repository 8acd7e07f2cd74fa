//! The Report Assembler: turns a book selection and an [`ExportConfig`] into
//! the tables to export.

use crate::error::{ErrorKind, Result, describe};
use crate::log::{Event, RunLog};
use crate::pipeline::analyze_books;
use crate::source::BookSource;
use crate::table::{COMBINED_STATS_FILE, Table};
use crate::write::write_table;
use hanzi_analysis::{BookAnalysis, LearningList, SharedCharacterSet, Statistics};
use hanzi_config::{ExportConfig, HanziMode, IndividualExport, StatisticsMode};
use std::path::Path;
use tracing::instrument;

/// Tables produced by one export run, and what happened along the way.
#[derive(Debug, Clone, Default)]
pub struct Report {
    tables: Vec<Table>,
    log: RunLog,
}
impl Report {
    pub fn tables(&self) -> &[Table] {
        &self.tables
    }

    pub fn table(&self, name: &str) -> Option<&Table> {
        self.tables.iter().find(|table| table.name() == name)
    }

    pub fn log(&self) -> &RunLog {
        &self.log
    }

    pub fn into_log(self) -> RunLog {
        self.log
    }

    /// Writes every table into `dir`. A table that cannot be written is
    /// recorded in the log and does not stop the others.
    ///
    /// Returns the number of files written.
    #[instrument(skip(self), fields(tables = self.tables.len(), dir = %dir.display()))]
    pub fn write(&mut self, dir: &Path) -> usize {
        let mut written = 0;
        for table in &self.tables {
            match write_table(table, dir) {
                Ok(path) => {
                    written += 1;
                    self.log.push(Event::Written { path, rows: table.len() });
                },
                Err(err) => {
                    tracing::warn!(table = table.name(), error = ?err, "Could not write table");
                    self.log.push(Event::WriteFailed {
                        path: dir.join(table.name()),
                        reason: describe(&err),
                    });
                },
            }
        }
        written
    }
}

/// Analyses every source and builds the tables `config` asks for.
///
/// Books that cannot be read or analysed are logged and left out; the rest
/// of the run carries on without them.
///
/// # Errors
///
/// [`ErrorKind::EmptySelection`] if no books are selected.
#[instrument(skip_all, fields(books = sources.len()))]
pub fn assemble<S: BookSource>(sources: &[S], config: &ExportConfig) -> Result<Report> {
    if sources.is_empty() {
        exn::bail!(ErrorKind::EmptySelection {
            required: config.minimum_books(),
            selected: 0,
        });
    }
    let mut report = Report::default();
    let analyses = collect_analyses(sources, config.usage_examples(), &mut report.log);

    match config.hanzi {
        HanziMode::None => {},
        HanziMode::Individual(individual) => {
            for analysis in &analyses {
                individual_tables(analysis, &individual, &mut report);
            }
        },
        HanziMode::Shared { frequency } => match SharedCharacterSet::intersect(&analyses) {
            Some(shared) => {
                tracing::info!(books = shared.books().len(), shared = shared.len(), "Intersected books");
                report.tables.push(Table::shared_hanzi(&shared, frequency));
            },
            None => {
                let reason = ErrorKind::EmptySelection {
                    required: config.minimum_books(),
                    selected: analyses.len(),
                };
                tracing::warn!(%reason, "Skipping shared hanzi");
                report.log.push(Event::Skipped {
                    export: "shared hanzi",
                    reason: reason.to_string(),
                });
            },
        },
    }

    match config.statistics {
        StatisticsMode::None => {},
        StatisticsMode::Individual(options) => {
            for analysis in &analyses {
                let name = format!("{}_stats.csv", analysis.id());
                let table = Table::statistics(name, &[Statistics::individual(analysis)], options.percentiles);
                report.tables.push(table);
            }
        },
        StatisticsMode::Combined(options) => {
            // Each book gets its own row, followed by the aggregate.
            if let Some(combined) = Statistics::combined(&analyses) {
                let mut rows: Vec<Statistics> = analyses.iter().map(Statistics::individual).collect();
                rows.push(combined);
                report.tables.push(Table::statistics(COMBINED_STATS_FILE, &rows, options.percentiles));
            }
        },
    }

    tracing::info!(
        succeeded = report.log.succeeded(),
        failed = report.log.failed(),
        tables = report.tables.len(),
        "Assembled report"
    );
    Ok(report)
}

fn collect_analyses<S: BookSource>(sources: &[S], examples: usize, log: &mut RunLog) -> Vec<BookAnalysis> {
    let mut analyses = Vec::with_capacity(sources.len());
    for outcome in analyze_books(sources, examples) {
        match outcome.result {
            Ok(analysis) => {
                log.push(Event::Analysed {
                    book: outcome.id,
                    total_hanzi: analysis.total_hanzi(),
                    unique_hanzi: analysis.unique_hanzi(),
                });
                analyses.push(analysis);
            },
            Err(err) => {
                tracing::warn!(book = %outcome.id, error = ?err, "Skipping book");
                log.push(Event::Failed {
                    book: outcome.id,
                    reason: describe(&err),
                });
            },
        }
    }
    analyses
}

fn individual_tables(analysis: &BookAnalysis, individual: &IndividualExport, report: &mut Report) {
    let examples = individual.learning.usage_examples;
    if individual.files.unique() {
        report.tables.push(Table::unique_hanzi(analysis, individual.order, examples));
    }
    if individual.files.learning() {
        let list = LearningList::select(analysis, individual.learning);
        report.log.push(Event::Learning {
            book: analysis.id().to_string(),
            selected: list.len(),
            target: individual.learning.comprehension_target,
            coverage: list.coverage(),
            reason: list.stop_reason(),
        });
        report.tables.push(Table::hanzi_to_learn(&list, individual.order));
    }
}
