use std::marker::PhantomData;

use crate::error::BlurError;

/// The rectangle of the destination image one worker is responsible for.
///
/// Portions produced by [`partition_columns`] are pairwise disjoint and
/// together cover the whole destination grid, which is what makes the
/// lock-free concurrent writes of the worker pool sound.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WorkPortion {
    /// Leftmost column of the portion.
    pub x: usize,
    /// Topmost row of the portion.
    pub y: usize,
    /// Number of columns in the portion.
    pub w: usize,
    /// Number of rows in the portion.
    pub h: usize,
}

/// Divide an image width into per-worker column ranges.
///
/// Each portion spans the full image height; partitioning is column-only.
/// When the width is not divisible by the worker count, the remainder
/// columns go one each to the first portions. When there are fewer columns
/// than workers, each column becomes its own portion and the surplus
/// workers get none (and are never spawned).
///
/// # Arguments
///
/// * `width` - The image width in pixels.
/// * `height` - The image height in pixels.
/// * `workers` - The number of workers, must be > 0.
///
/// # Returns
///
/// At most `workers` non-empty portions covering every column in
/// `[0, width)` exactly once.
pub fn partition_columns(width: usize, height: usize, workers: usize) -> Vec<WorkPortion> {
    if width <= workers {
        return (0..width)
            .map(|x| WorkPortion {
                x,
                y: 0,
                w: 1,
                h: height,
            })
            .collect();
    }

    let offset = width / workers;
    let remainder = width - workers * offset;

    let mut portions = Vec::with_capacity(workers);
    let mut x = 0;
    for i in 0..workers {
        let w = offset + usize::from(i < remainder);
        portions.push(WorkPortion {
            x,
            y: 0,
            w,
            h: height,
        });
        x += w;
    }

    portions
}

/// A shared writable view of the destination pixel buffer.
///
/// Workers hold one view each and write through it without locking.
/// SAFETY contract: callers must only write indices inside their own
/// [`WorkPortion`]; portions are disjoint, so no two workers ever touch
/// the same element.
pub(crate) struct SharedSlice<'a, T> {
    ptr: *mut T,
    len: usize,
    _marker: PhantomData<&'a mut [T]>,
}

unsafe impl<T: Send> Send for SharedSlice<'_, T> {}
unsafe impl<T: Send> Sync for SharedSlice<'_, T> {}

impl<'a, T> SharedSlice<'a, T> {
    pub(crate) fn new(slice: &'a mut [T]) -> Self {
        Self {
            ptr: slice.as_mut_ptr(),
            len: slice.len(),
            _marker: PhantomData,
        }
    }

    /// Write a single element.
    ///
    /// # Safety
    ///
    /// `index` must be in bounds and owned by the calling worker's portion.
    pub(crate) unsafe fn write(&self, index: usize, value: T) {
        debug_assert!(index < self.len);
        *self.ptr.add(index) = value;
    }
}

/// Run one worker thread per portion and join them all.
///
/// All workers are spawned before any is joined. If a spawn fails, the
/// already-spawned workers still run to completion and are joined before
/// the error is surfaced; the scope guarantees no worker outlives the call.
pub fn run_portions<F>(portions: &[WorkPortion], f: F) -> Result<(), BlurError>
where
    F: Fn(&WorkPortion) + Send + Sync,
{
    run_portions_with(portions, f, |i| {
        std::thread::Builder::new().name(format!("blur-worker-{i}"))
    })
}

/// Same as [`run_portions`] but with an injectable thread builder per
/// worker index, so spawn failures can be exercised in tests.
fn run_portions_with<F, B>(portions: &[WorkPortion], f: F, builder: B) -> Result<(), BlurError>
where
    F: Fn(&WorkPortion) + Send + Sync,
    B: Fn(usize) -> std::thread::Builder,
{
    std::thread::scope(|scope| {
        let f = &f;
        let mut handles = Vec::with_capacity(portions.len());
        let mut spawn_error = None;

        for (i, portion) in portions.iter().enumerate() {
            match builder(i).spawn_scoped(scope, move || f(portion)) {
                Ok(handle) => handles.push(handle),
                Err(e) => {
                    spawn_error = Some(e);
                    break;
                }
            }
        }

        for handle in handles {
            // workers never panic on valid portions; a panic here is a bug
            // in the engine itself, so propagate it
            if let Err(payload) = handle.join() {
                std::panic::resume_unwind(payload);
            }
        }

        match spawn_error {
            Some(e) => Err(BlurError::ThreadSpawn(e)),
            None => Ok(()),
        }
    })
}

/// The default worker count, one per available logical processor.
pub fn default_workers() -> usize {
    std::thread::available_parallelism().map_or(1, |n| n.get())
}
