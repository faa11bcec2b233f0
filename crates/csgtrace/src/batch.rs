//! Parallel tracing of independent rays.

use csgtrace_csg::Geometry;
use csgtrace_raytrace::{Ray, TraceError};
use rayon::prelude::*;

use crate::history::{trace_history, TraceHistory};
use crate::settings::TraceSettings;

/// Trace every ray in `rays` through `geometry` in parallel.
///
/// Geometry is read-only and every query takes its point explicitly, so
/// rays share it without locking. Results come back in input order, one
/// per ray; a failed ray does not affect the others. Invalid settings fail
/// every ray with [`TraceError::InvalidSettings`].
pub fn trace_batch(
    rays: &[Ray],
    geometry: &Geometry,
    settings: &TraceSettings,
) -> Vec<Result<TraceHistory, TraceError>> {
    if let Err(e) = settings.validate() {
        let reason = e.to_string();
        return rays
            .iter()
            .map(|_| Err(TraceError::InvalidSettings(reason.clone())))
            .collect();
    }
    rays.par_iter()
        .map(|ray| trace_history(ray, geometry, settings))
        .collect()
}
