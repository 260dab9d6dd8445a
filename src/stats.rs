use sparselife::Board;
use std::time::Instant;

/// How often a progress report becomes available
const REPORT_MILLIS: u128 = 500;

pub trait Recorder {
    fn record(&mut self, board: &Board);

    fn has_report(&self) -> bool;
    fn report(&mut self) -> String;
}

/// Population and extent of a single generation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Snapshot {
    alive: usize,
    width: u32,
    height: u32,
}
impl Snapshot {
    fn of(board: &Board) -> Self {
        let (width, height) = board
            .bounds()
            .map(|b| (b.width(), b.height()))
            .unwrap_or_default();
        Self {
            alive: board.alive_count(),
            width,
            height,
        }
    }
}

pub struct SimpleRecord {
    gens: usize,
    last: Snapshot,
    gens_in_report: usize,
    last_report: Instant,
}
impl SimpleRecord {
    pub fn new(board: &Board) -> Self {
        Self {
            gens: 0,
            last: Snapshot::of(board),
            gens_in_report: 0,
            last_report: Instant::now(),
        }
    }
}
impl Recorder for SimpleRecord {
    fn record(&mut self, board: &Board) {
        self.gens += 1;
        self.gens_in_report += 1;
        self.last = Snapshot::of(board);
    }

    fn has_report(&self) -> bool {
        self.last_report.elapsed().as_millis() >= REPORT_MILLIS
    }
    fn report(&mut self) -> String {
        let gens_per_sec = self.gens_in_report as f64 / self.last_report.elapsed().as_secs_f64();
        // reset for the next window
        self.last_report = Instant::now();
        self.gens_in_report = 0;

        format!(
            "{:.02}gen/s gens:{}, alive:{}, extent:{}x{}",
            gens_per_sec, self.gens, self.last.alive, self.last.width, self.last.height
        )
    }
}

/// Keeps every generation's timing and snapshot for a CSV dump
pub struct CsvRecord {
    inner: SimpleRecord,
    data: Vec<(u128, Snapshot)>,
    last: Instant,
}
impl CsvRecord {
    pub fn new(board: &Board) -> Self {
        Self {
            inner: SimpleRecord::new(board),
            data: Vec::new(),
            last: Instant::now(),
        }
    }

    pub fn write_csv<W: std::io::Write>(&self, mut out: W) -> std::io::Result<()> {
        out.write_all(b"gen,delta_t,alive,width,height\n")?;
        for (i, (delta, snap)) in self.data.iter().enumerate() {
            writeln!(
                out,
                "{},{},{},{},{}",
                i + 1,
                delta,
                snap.alive,
                snap.width,
                snap.height
            )?;
        }
        out.flush()
    }

    pub fn save<P: AsRef<std::path::Path>>(&self, path: P) -> std::io::Result<()> {
        let file = std::fs::File::create(path)?;
        self.write_csv(std::io::BufWriter::new(file))
    }
}
impl Recorder for CsvRecord {
    fn record(&mut self, board: &Board) {
        let delta = self.last.elapsed().as_micros();
        self.last = Instant::now();

        self.data.push((delta, Snapshot::of(board)));
        self.inner.record(board);
    }

    fn has_report(&self) -> bool {
        self.inner.has_report()
    }
    fn report(&mut self) -> String {
        self.inner.report()
    }
}

pub enum SwitchRecorder {
    Csv(CsvRecord),
    Simple(SimpleRecord),
}
impl SwitchRecorder {
    pub fn new(board: &Board, csv: bool) -> Self {
        if csv {
            Self::Csv(CsvRecord::new(board))
        } else {
            Self::Simple(SimpleRecord::new(board))
        }
    }

    /// Writes the CSV if this recorder kept one
    pub fn save<P: AsRef<std::path::Path>>(&self, path: P) -> std::io::Result<bool> {
        match self {
            Self::Csv(r) => r.save(path).map(|_| true),
            Self::Simple(_) => Ok(false),
        }
    }
}
impl Recorder for SwitchRecorder {
    fn record(&mut self, board: &Board) {
        match self {
            Self::Csv(r) => r.record(board),
            Self::Simple(r) => r.record(board),
        }
    }
    fn has_report(&self) -> bool {
        match self {
            Self::Csv(r) => r.has_report(),
            Self::Simple(r) => r.has_report(),
        }
    }
    fn report(&mut self) -> String {
        match self {
            Self::Csv(r) => r.report(),
            Self::Simple(r) => r.report(),
        }
    }
}
