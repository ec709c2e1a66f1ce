//! Face build scheduling: sequential, or spread over scoped worker threads.
//!
//! Faces never read each other's buffers, so parallel builds need no locks.
//! Workers pull jobs from a channel and send finished [`FaceGeometry`] back;
//! nothing is written into a [`FaceMesh`](terra_mesh::FaceMesh) until every
//! worker has joined.

use std::borrow::Cow;

use crossbeam_channel::{Receiver, SendError, Sender, unbounded};
use serde::{Deserialize, Serialize};
use terra_cubesphere::Direction;
use terra_mesh::FaceGeometry;
use terra_shape::ShapeEvaluator;
use tracing::warn;

/// How visible faces are rebuilt.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BuildMode {
    /// One face after another on the calling thread.
    #[default]
    Sequential,
    /// Faces built concurrently. `workers == 0` picks the CPU count.
    Parallel {
        /// Worker thread count, capped at six (one per face).
        workers: usize,
    },
}

impl BuildMode {
    /// Number of threads a parallel build would use for `jobs` faces.
    pub fn worker_count(self, jobs: usize) -> usize {
        match self {
            BuildMode::Sequential => 1,
            BuildMode::Parallel { workers } => {
                let requested = if workers == 0 { num_cpus::get() } else { workers };
                requested.min(6).min(jobs).max(1)
            }
        }
    }
}

/// One face to build from read-only inputs.
pub(crate) struct FaceJob<'a> {
    /// Slot of the face in the controller's array.
    pub slot: usize,
    pub direction: Direction,
    /// Target resolution of the build.
    pub resolution: u32,
    /// Index buffer for `resolution`, borrowed when the face already has it.
    pub indices: Cow<'a, [u32]>,
}

/// Geometry built for one slot, plus the index buffer if it had to be
/// generated for a new resolution.
pub(crate) struct BuiltFace {
    pub slot: usize,
    pub geometry: FaceGeometry,
    pub indices: Option<Vec<u32>>,
}

impl FaceJob<'_> {
    fn build(self, shape: &dyn ShapeEvaluator) -> BuiltFace {
        let geometry = FaceGeometry::build(self.direction, self.resolution, &self.indices, shape);
        let indices = match self.indices {
            Cow::Owned(indices) => Some(indices),
            Cow::Borrowed(_) => None,
        };
        BuiltFace {
            slot: self.slot,
            geometry,
            indices,
        }
    }
}

/// Build every job's geometry on `workers` threads, the caller included.
///
/// Returns built faces sorted by slot. All threads have joined when this
/// returns.
pub(crate) fn build_parallel(
    jobs: Vec<FaceJob<'_>>,
    shape: &dyn ShapeEvaluator,
    workers: usize,
) -> Vec<BuiltFace> {
    let (job_tx, job_rx) = unbounded();
    let (result_tx, result_rx) = unbounded();
    let mut results = enqueue_jobs(jobs, &job_tx, shape);
    drop(job_tx);

    std::thread::scope(|scope| {
        for _ in 1..workers {
            let job_rx = job_rx.clone();
            let result_tx = result_tx.clone();
            let spawned = std::thread::Builder::new()
                .name("face-build-worker".into())
                .spawn_scoped(scope, move || drain_jobs(&job_rx, &result_tx, shape));
            if let Err(e) = spawned {
                warn!("Failed to spawn face build worker, continuing with fewer: {e}");
                break;
            }
        }
        drain_jobs(&job_rx, &result_tx, shape);
    });
    drop(result_tx);

    results.extend(result_rx.try_iter());
    results.sort_by_key(|built| built.slot);
    results
}

/// Queue every job. A job the channel refuses is built on the spot, so
/// none is lost.
fn enqueue_jobs<'a>(
    jobs: Vec<FaceJob<'a>>,
    queue: &Sender<FaceJob<'a>>,
    shape: &dyn ShapeEvaluator,
) -> Vec<BuiltFace> {
    let mut built = Vec::new();
    for job in jobs {
        if let Err(SendError(job)) = queue.send(job) {
            warn!("Face job queue closed, building {} inline", job.direction);
            built.push(job.build(shape));
        }
    }
    built
}

fn drain_jobs(jobs: &Receiver<FaceJob<'_>>, results: &Sender<BuiltFace>, shape: &dyn ShapeEvaluator) {
    while let Ok(job) = jobs.try_recv() {
        if results.send(job.build(shape)).is_err() {
            break;
        }
    }
}
