//! Chunked dictionary scan
//!
//! The attack is a plain linear scan. Each call to [`AttackSimulator::advance`]
//! tests at most `chunk_size` candidates so a frame never stalls on a large
//! word list; the scan is paced by the host's tick rate instead of threads.

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use super::state::{SimRng, Timestamp};
use crate::config::AttackConfig;
use crate::error::{EngineError, Result};

/// Telemetry for a scan that has not finished yet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttackProgress {
    /// Last candidate tested this chunk
    pub candidate: String,
    pub attempts: u64,
    /// Seconds since the run started (floored at `min_elapsed`)
    pub elapsed: f64,
    /// Attempts per second
    pub throughput: f64,
    /// Fraction of the list tested, 0-1
    pub progress: f32,
}

/// Outcome of one [`AttackSimulator::advance`] call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AdvanceResult {
    /// The secret was tested; `attempts` includes the match
    Found {
        candidate: String,
        attempts: u64,
        elapsed: f64,
    },
    /// Every candidate was tested without a match
    Exhausted { attempts: u64 },
    /// Chunk finished with candidates left
    InProgress(AttackProgress),
}

impl AdvanceResult {
    /// Found or Exhausted
    pub fn is_terminal(&self) -> bool {
        !matches!(self, AdvanceResult::InProgress(_))
    }

    pub fn attempts(&self) -> u64 {
        match self {
            AdvanceResult::Found { attempts, .. } | AdvanceResult::Exhausted { attempts } => {
                *attempts
            }
            AdvanceResult::InProgress(p) => p.attempts,
        }
    }
}

/// A single attack over a fixed, shuffled candidate list
#[derive(Debug, Clone)]
pub struct AttackRun {
    candidates: Vec<String>,
    secret: String,
    /// Next candidate to test; also the attempt count
    cursor: usize,
    start_time: Option<Timestamp>,
    running: bool,
}

impl AttackRun {
    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Always equal to the cursor: one attempt per candidate consumed
    pub fn attempts_made(&self) -> u64 {
        self.cursor as u64
    }

    pub fn start_time(&self) -> Option<Timestamp> {
        self.start_time
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Position of the secret in the run order, if present
    pub fn secret_index(&self) -> Option<usize> {
        self.candidates.iter().position(|c| *c == self.secret)
    }

    /// Fraction of the list consumed
    pub fn progress(&self) -> f32 {
        if self.candidates.is_empty() {
            0.0
        } else {
            (self.cursor as f64 / self.candidates.len() as f64) as f32
        }
    }
}

/// Insertion index for the secret in a list of `len` other candidates.
///
/// Uniform over `[len / 3, len - 1]`, so the secret never lands in the first
/// third of the run. An empty list leaves index 0 as the only choice.
pub fn secret_insert_index(len: usize, rng: &mut SimRng) -> usize {
    if len == 0 {
        return 0;
    }
    rng.random_range(len / 3..=len - 1)
}

/// Owns the current run and the last terminal outcome
#[derive(Debug, Clone, Default)]
pub struct AttackSimulator {
    config: AttackConfig,
    run: Option<AttackRun>,
    last_terminal: Option<AdvanceResult>,
}

impl AttackSimulator {
    pub fn new(config: AttackConfig) -> Self {
        Self {
            config,
            run: None,
            last_terminal: None,
        }
    }

    pub fn config(&self) -> &AttackConfig {
        &self.config
    }

    pub fn run(&self) -> Option<&AttackRun> {
        self.run.as_ref()
    }

    pub fn is_running(&self) -> bool {
        self.run.as_ref().is_some_and(|r| r.running)
    }

    /// Most recent Found/Exhausted result, cleared by `start` and `stop`
    pub fn last_terminal(&self) -> Option<&AdvanceResult> {
        self.last_terminal.as_ref()
    }

    /// Begin a new run over a shuffled copy of `candidates`.
    ///
    /// With `guarantee_secret` set, every copy of `secret` is pulled out and a
    /// single one is reinserted via [`secret_insert_index`].
    pub fn start(
        &mut self,
        candidates: &[String],
        secret: &str,
        now: Timestamp,
        rng: &mut SimRng,
    ) -> Result<&AttackRun> {
        if candidates.is_empty() {
            return Err(EngineError::InvalidInput(
                "cannot start an attack with an empty candidate list".to_string(),
            ));
        }

        let mut list = candidates.to_vec();
        list.shuffle(rng);

        if self.config.guarantee_secret {
            list.retain(|c| c != secret);
            let index = secret_insert_index(list.len(), rng);
            list.insert(index, secret.to_string());
            log::debug!("Secret placed at index {} of {}", index, list.len());
        }

        log::info!("Attack started over {} candidates", list.len());

        self.last_terminal = None;
        Ok(self.run.insert(AttackRun {
            candidates: list,
            secret: secret.to_string(),
            cursor: 0,
            start_time: Some(now),
            running: true,
        }))
    }

    /// Test up to `chunk_size` candidates (at least one).
    ///
    /// Once the run has terminated this returns the terminal result again
    /// without touching any state. Returns `None` when there is no run to
    /// report on (never started, or stopped).
    pub fn advance(&mut self, chunk_size: usize, now: Timestamp) -> Option<AdvanceResult> {
        let run = self.run.as_mut()?;
        if !run.running {
            return self.last_terminal.clone();
        }

        let start = *run.start_time.get_or_insert(now);
        let len = run.candidates.len();

        for _ in 0..chunk_size.max(1) {
            if run.cursor >= len {
                break;
            }
            let index = run.cursor;
            run.cursor += 1;

            if run.candidates[index] == run.secret {
                run.running = false;
                let result = AdvanceResult::Found {
                    candidate: run.candidates[index].clone(),
                    attempts: run.attempts_made(),
                    elapsed: now - start,
                };
                log::info!(
                    "Secret found after {} attempts ({:.2}s)",
                    run.attempts_made(),
                    now - start
                );
                self.last_terminal = Some(result.clone());
                return Some(result);
            }
        }

        if run.cursor >= len {
            run.running = false;
            let result = AdvanceResult::Exhausted {
                attempts: run.attempts_made(),
            };
            log::info!("Dictionary exhausted after {} attempts", run.attempts_made());
            self.last_terminal = Some(result.clone());
            return Some(result);
        }

        let elapsed = (now - start).max(self.config.min_elapsed);
        let attempts = run.attempts_made();
        Some(AdvanceResult::InProgress(AttackProgress {
            candidate: run.candidates[run.cursor - 1].clone(),
            attempts,
            elapsed,
            throughput: attempts as f64 / elapsed,
            progress: run.progress(),
        }))
    }

    /// Halt and rewind the run; the candidate list is kept
    pub fn stop(&mut self) {
        if let Some(run) = self.run.as_mut() {
            if run.running {
                log::info!("Attack stopped after {} attempts", run.attempts_made());
            }
            run.running = false;
            run.cursor = 0;
            run.start_time = None;
        }
        self.last_terminal = None;
    }
}
