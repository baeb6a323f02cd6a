// Copyright 2026 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Background visibility computation.
//!
//! [`VisibilityWorker`] runs a [`Culler`] on its own thread. The UI thread
//! sends immutable snapshots ([`WorkerRequest`]) and receives results
//! ([`WorkerResponse`]) over channels; no state is shared. Results arrive
//! asynchronously, so a frame may be painted with a set that is one camera
//! change old. That only delays mounting by a frame, it never breaks
//! correctness.
//!
//! When several visibility requests queue up while the worker is busy, only
//! the newest one is computed.
//!
//! ```rust
//! use std::time::Duration;
//!
//! use corkboard_camera::Camera;
//! use corkboard_cull::worker::VisibilityWorker;
//! use kurbo::{Rect, Size};
//!
//! let worker = VisibilityWorker::spawn(400.0).unwrap();
//! worker.init(vec![(7_u32, Rect::new(0.0, 0.0, 300.0, 280.0))]).unwrap();
//! worker.calculate(Camera::IDENTITY, Size::new(1000.0, 800.0)).unwrap();
//!
//! let update = worker.recv_timeout(Duration::from_secs(5)).unwrap().unwrap();
//! assert!(update.visible.contains(&7));
//! assert_eq!(update.camera, Camera::IDENTITY);
//! ```

use core::fmt;
use core::hash::Hash;
use std::io;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender, TryRecvError};
use std::thread::{self, JoinHandle};
use std::time::Duration;
use std::vec::Vec;

use corkboard_camera::Camera;
use kurbo::{Rect, Size};
use tracing::{debug, trace};

use crate::culler::Culler;
use crate::set::VisibilitySet;

/// Message sent to the worker thread.
#[derive(Clone, Debug)]
pub enum WorkerRequest<K> {
    /// Replace the worker's copy of the card geometry.
    Init(Vec<(K, Rect)>),
    /// Change the padding margin.
    SetPadding(f64),
    /// Compute visibility for a camera and viewport snapshot.
    CalculateVisibility {
        /// Camera at the time of the request.
        camera: Camera,
        /// Viewport size at the time of the request.
        viewport: Size,
    },
    /// Stop the thread.
    Shutdown,
}

/// Message sent back by the worker thread.
#[derive(Clone, Debug)]
pub enum WorkerResponse<K> {
    /// Visibility computed for the newest pending request.
    UpdateVisibility(VisibilityUpdate<K>),
}

/// A visibility set together with the snapshot it was computed for.
///
/// Comparing `camera` and `viewport` with the last request tells the caller
/// whether the result is current or one step stale.
#[derive(Clone, Debug)]
pub struct VisibilityUpdate<K> {
    /// Camera of the request this answers.
    pub camera: Camera,
    /// Viewport of the request this answers.
    pub viewport: Size,
    /// Keys visible under `camera` and `viewport`.
    pub visible: VisibilitySet<K>,
}

impl<K> VisibilityUpdate<K> {
    /// Returns `true` if this result answers a request for `camera` and `viewport`.
    #[must_use]
    pub fn answers(&self, camera: &Camera, viewport: Size) -> bool {
        self.camera == *camera && self.viewport == viewport
    }
}

/// Error returned when the worker cannot be started or reached.
#[derive(Debug)]
pub enum WorkerError {
    /// The operating system refused to start the thread.
    Spawn(io::Error),
    /// The worker thread has exited.
    Disconnected,
}

impl fmt::Display for WorkerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Spawn(err) => write!(f, "failed to spawn visibility worker: {err}"),
            Self::Disconnected => f.write_str("visibility worker has exited"),
        }
    }
}

impl core::error::Error for WorkerError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Spawn(err) => Some(err),
            Self::Disconnected => None,
        }
    }
}

/// Handle to a background visibility thread.
///
/// Dropping the handle shuts the thread down and joins it.
pub struct VisibilityWorker<K> {
    requests: Sender<WorkerRequest<K>>,
    responses: Receiver<WorkerResponse<K>>,
    handle: Option<JoinHandle<()>>,
}

impl<K> VisibilityWorker<K>
where
    K: Copy + Eq + Hash + Send + 'static,
{
    /// Starts the worker thread with the given padding margin.
    pub fn spawn(padding: f64) -> Result<Self, WorkerError> {
        let (request_tx, request_rx) = mpsc::channel();
        let (response_tx, response_rx) = mpsc::channel();
        let handle = thread::Builder::new()
            .name("corkboard-visibility".into())
            .spawn(move || run(&request_rx, &response_tx, padding))
            .map_err(WorkerError::Spawn)?;
        debug!(padding, "visibility worker started");
        Ok(Self {
            requests: request_tx,
            responses: response_rx,
            handle: Some(handle),
        })
    }

    /// Sends a raw request.
    pub fn send(&self, request: WorkerRequest<K>) -> Result<(), WorkerError> {
        self.requests
            .send(request)
            .map_err(|_| WorkerError::Disconnected)
    }

    /// Replaces the worker's card geometry.
    pub fn init(&self, items: Vec<(K, Rect)>) -> Result<(), WorkerError> {
        self.send(WorkerRequest::Init(items))
    }

    /// Changes the padding margin for subsequent computations.
    pub fn set_padding(&self, padding: f64) -> Result<(), WorkerError> {
        self.send(WorkerRequest::SetPadding(padding))
    }

    /// Asks for visibility under `camera` and `viewport`.
    pub fn calculate(&self, camera: Camera, viewport: Size) -> Result<(), WorkerError> {
        self.send(WorkerRequest::CalculateVisibility { camera, viewport })
    }

    /// Returns the newest result delivered so far, discarding older ones.
    ///
    /// `Ok(None)` means no new result is available yet.
    pub fn try_recv_latest(&self) -> Result<Option<VisibilityUpdate<K>>, WorkerError> {
        let mut latest = None;
        loop {
            match self.responses.try_recv() {
                Ok(WorkerResponse::UpdateVisibility(update)) => latest = Some(update),
                Err(TryRecvError::Empty) => return Ok(latest),
                Err(TryRecvError::Disconnected) => {
                    return match latest {
                        Some(update) => Ok(Some(update)),
                        None => Err(WorkerError::Disconnected),
                    };
                }
            }
        }
    }

    /// Waits up to `timeout` for the next result.
    ///
    /// `Ok(None)` means the timeout elapsed.
    pub fn recv_timeout(
        &self,
        timeout: Duration,
    ) -> Result<Option<VisibilityUpdate<K>>, WorkerError> {
        match self.responses.recv_timeout(timeout) {
            Ok(WorkerResponse::UpdateVisibility(update)) => Ok(Some(update)),
            Err(RecvTimeoutError::Timeout) => Ok(None),
            Err(RecvTimeoutError::Disconnected) => Err(WorkerError::Disconnected),
        }
    }

    /// Stops the thread and waits for it to exit.
    pub fn shutdown(mut self) {
        self.stop();
    }
}

impl<K> VisibilityWorker<K> {
    fn stop(&mut self) {
        let Some(handle) = self.handle.take() else {
            return;
        };
        // The thread may already be gone; joining still reaps it.
        let _ = self.requests.send(WorkerRequest::Shutdown);
        if handle.join().is_err() {
            tracing::warn!("visibility worker panicked");
        } else {
            debug!("visibility worker stopped");
        }
    }
}

impl<K> Drop for VisibilityWorker<K> {
    fn drop(&mut self) {
        self.stop();
    }
}

impl<K> fmt::Debug for VisibilityWorker<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VisibilityWorker")
            .field("running", &self.handle.is_some())
            .finish_non_exhaustive()
    }
}

fn run<K>(
    requests: &Receiver<WorkerRequest<K>>,
    responses: &Sender<WorkerResponse<K>>,
    padding: f64,
) where
    K: Copy + Eq + Hash,
{
    let mut culler = Culler::new(padding);
    while let Ok(request) = requests.recv() {
        let mut pending = None;
        let mut shutdown = false;
        apply(&mut culler, request, &mut pending, &mut shutdown);

        // Fold everything that queued up behind this request so that only
        // the newest snapshot is computed.
        while !shutdown {
            match requests.try_recv() {
                Ok(next) => apply(&mut culler, next, &mut pending, &mut shutdown),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    shutdown = true;
                }
            }
        }

        if let Some((camera, viewport)) = pending {
            let visible = culler.compute(&camera, viewport);
            trace!(visible = visible.len(), "visibility computed");
            let update = VisibilityUpdate {
                camera,
                viewport,
                visible,
            };
            if responses
                .send(WorkerResponse::UpdateVisibility(update))
                .is_err()
            {
                return;
            }
        }
        if shutdown {
            return;
        }
    }
}

fn apply<K>(
    culler: &mut Culler<K>,
    request: WorkerRequest<K>,
    pending: &mut Option<(Camera, Size)>,
    shutdown: &mut bool,
) where
    K: Copy + Eq + Hash,
{
    match request {
        WorkerRequest::Init(items) => {
            trace!(items = items.len(), "visibility worker init");
            culler.set_items(items);
        }
        WorkerRequest::SetPadding(padding) => culler.set_padding(padding),
        WorkerRequest::CalculateVisibility { camera, viewport } => {
            *pending = Some((camera, viewport));
        }
        WorkerRequest::Shutdown => *shutdown = true,
    }
}
