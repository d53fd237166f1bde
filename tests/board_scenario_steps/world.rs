//! Shared world state for board BDD scenarios.

use chrono::{DateTime, Duration, Local, TimeZone, Utc};
use mockable::Clock;
use rstest::fixture;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};
use tabula::board::adapters::memory::InMemoryBoardRepository;
use tabula::board::domain::{Task, TaskId};
use tabula::board::services::{BoardSession, BoardView};

/// Deterministic clock advancing one second per reading, so scenarios can
/// assert strict timestamp ordering.
pub struct SteppingClock {
    base: DateTime<Utc>,
    ticks: AtomicI64,
}

impl SteppingClock {
    fn new() -> Self {
        let base = Utc
            .with_ymd_and_hms(2026, 3, 1, 12, 0, 0)
            .single()
            .expect("valid base instant");
        Self {
            base,
            ticks: AtomicI64::new(0),
        }
    }
}

impl Clock for SteppingClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        let tick = self.ticks.fetch_add(1, Ordering::SeqCst);
        self.base + Duration::seconds(tick)
    }
}

/// Session type used by the BDD world.
pub type TestBoardSession = BoardSession<InMemoryBoardRepository, SteppingClock>;

/// Scenario world for board behaviour tests.
pub struct BoardWorld {
    pub session: TestBoardSession,
    pub tracked_task: Option<TaskId>,
    pub last_view: Option<BoardView>,
}

impl BoardWorld {
    /// Creates a world with an empty in-memory board.
    pub fn new() -> eyre::Result<Self> {
        let session = BoardSession::open(
            Arc::new(InMemoryBoardRepository::new()),
            Arc::new(SteppingClock::new()),
        )
        .map_err(|err| eyre::eyre!("open in-memory session: {err}"))?;

        Ok(Self {
            session,
            tracked_task: None,
            last_view: None,
        })
    }

    /// Returns the task the scenario is talking about.
    pub fn tracked(&self) -> eyre::Result<&Task> {
        let id = self
            .tracked_task
            .ok_or_else(|| eyre::eyre!("no task tracked by the scenario"))?;
        self.session
            .tasks()
            .iter()
            .find(|task| task.id() == id)
            .ok_or_else(|| eyre::eyre!("tracked task missing from the board"))
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardWorld {
    BoardWorld::new().expect("scenario world should construct")
}
