use std::sync::Mutex;

use displacers::simulation::engine::{simulate, RunOptions, Termination};
use displacers::simulation::params::Parameters;
use displacers::simulation::states::State;
use displacers::simulation::terrain::Terrain;

use log::{Level, LevelFilter, Log, Metadata, Record};

/// Logger that keeps every record in memory
struct CaptureLogger {
    records: Mutex<Vec<(Level, String)>>,
}

impl CaptureLogger {
    fn warnings(&self) -> Vec<String> {
        self.records
            .lock()
            .unwrap()
            .iter()
            .filter(|(level, _)| *level == Level::Warn)
            .map(|(_, msg)| msg.clone())
            .collect()
    }

    fn clear(&self) {
        self.records.lock().unwrap().clear();
    }
}

impl Log for CaptureLogger {
    fn enabled(&self, _: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        self.records
            .lock()
            .unwrap()
            .push((record.level(), record.args().to_string()));
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger {
    records: Mutex::new(Vec::new()),
};

// The logger is process-wide, so both flag values are checked in one test
#[test]
fn boundary_warning_follows_the_warn_flag() {
    log::set_logger(&LOGGER).unwrap();
    log::set_max_level(LevelFilter::Trace);

    // Slides down a 9 wide ramp and off the left edge
    let terrain = Terrain::from_fn(5, 9, |_, c| 10.0 * c as f64).unwrap();
    let params = Parameters {
        iterations: 100,
        ..Parameters::default()
    };
    let initial = State::at_rest(6.0, 2.0);

    let run = simulate(&terrain, initial, &params, &RunOptions { warn: true }).unwrap();
    let Termination::OutOfBounds { iteration } = run.termination else {
        panic!("expected the displacer to leave the terrain, got {:?}", run.termination);
    };
    let warnings = LOGGER.warnings();
    assert_eq!(warnings.len(), 1, "warnings: {:?}", warnings);
    assert!(
        warnings[0].contains(&format!("iteration {}", iteration)),
        "warning does not name the iteration: {}",
        warnings[0]
    );

    LOGGER.clear();
    let quiet_run = simulate(&terrain, initial, &params, &RunOptions { warn: false }).unwrap();
    assert_eq!(quiet_run, run);
    assert!(LOGGER.warnings().is_empty(), "warned with warn off: {:?}", LOGGER.warnings());

    // Runs that stay on the terrain never warn
    LOGGER.clear();
    let short = Parameters { iterations: 1, ..params };
    let run = simulate(&terrain, initial, &short, &RunOptions { warn: true }).unwrap();
    assert_eq!(run.termination, Termination::IterationLimit);
    assert!(LOGGER.warnings().is_empty());
}
