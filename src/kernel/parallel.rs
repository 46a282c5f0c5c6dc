use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::foundation::core::{CHANNELS, check_spans, pixel_len};
use crate::foundation::error::{LayerModeError, LayerModeResult};
use crate::kernel::{composite_span, composite_span_in_place};
use crate::modes::{LayerMode, with_law};

/// Threading and chunking controls for large kernel invocations.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KernelThreading {
    /// Split work across a rayon pool when `true`.
    pub parallel: bool,
    /// Pixels per work item.
    pub chunk_samples: usize,
    /// Optional explicit worker thread count.
    pub threads: Option<usize>,
}

impl Default for KernelThreading {
    fn default() -> Self {
        Self {
            parallel: false,
            chunk_samples: 64 * 1024,
            threads: None,
        }
    }
}

/// Kernel driver that owns a dedicated thread pool.
///
/// Build it once per graph (or tool session) and reuse it for every tile; the pool is not
/// cheap to create.
pub struct ParallelKernel {
    pool: rayon::ThreadPool,
    chunk_samples: usize,
}

impl std::fmt::Debug for ParallelKernel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParallelKernel")
            .field("threads", &self.threads())
            .field("chunk_samples", &self.chunk_samples)
            .finish()
    }
}

impl ParallelKernel {
    /// Build the pool described by `threading` (its `parallel` flag is not consulted).
    pub fn new(threading: &KernelThreading) -> LayerModeResult<Self> {
        let kernel = Self {
            pool: build_thread_pool(threading.threads)?,
            chunk_samples: normalized_chunk_samples(threading.chunk_samples),
        };
        tracing::debug!(
            threads = kernel.threads(),
            chunk_samples = kernel.chunk_samples,
            "built kernel thread pool"
        );
        Ok(kernel)
    }

    /// Number of worker threads in the pool.
    pub fn threads(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Parallel counterpart of [`crate::kernel::process`]; output is bit-identical.
    #[allow(clippy::too_many_arguments)]
    pub fn process(
        &self,
        mode: LayerMode,
        base: &[f32],
        layer: &[f32],
        mask: Option<&[f32]>,
        out: &mut [f32],
        opacity: f64,
        samples: usize,
    ) -> LayerModeResult<()> {
        check_spans(
            base.len(),
            layer.len(),
            out.len(),
            mask.map(<[f32]>::len),
            samples,
        )?;
        if samples == 0 {
            return Ok(());
        }

        let n = pixel_len(samples)?;
        let chunk = self.chunk_samples;
        let chunk_len = chunk.saturating_mul(CHANNELS);
        let (base, layer, out) = (&base[..n], &layer[..n], &mut out[..n]);

        self.pool.install(|| {
            with_law!(mode, law => {
                out.par_chunks_mut(chunk_len)
                    .zip(base.par_chunks(chunk_len))
                    .zip(layer.par_chunks(chunk_len))
                    .enumerate()
                    .for_each(|(ci, ((o, b), l))| {
                        let m = mask.map(|m| chunk_mask(m, ci, chunk, o.len()));
                        composite_span(b, l, m, o, opacity, law);
                    })
            })
        });
        Ok(())
    }

    /// Parallel counterpart of [`crate::kernel::process_in_place`].
    pub fn process_in_place(
        &self,
        mode: LayerMode,
        base_out: &mut [f32],
        layer: &[f32],
        mask: Option<&[f32]>,
        opacity: f64,
        samples: usize,
    ) -> LayerModeResult<()> {
        check_spans(
            base_out.len(),
            layer.len(),
            base_out.len(),
            mask.map(<[f32]>::len),
            samples,
        )?;
        if samples == 0 {
            return Ok(());
        }

        let n = pixel_len(samples)?;
        let chunk = self.chunk_samples;
        let chunk_len = chunk.saturating_mul(CHANNELS);
        let (base_out, layer) = (&mut base_out[..n], &layer[..n]);

        self.pool.install(|| {
            with_law!(mode, law => {
                base_out
                    .par_chunks_mut(chunk_len)
                    .zip(layer.par_chunks(chunk_len))
                    .enumerate()
                    .for_each(|(ci, (px, l))| {
                        let m = mask.map(|m| chunk_mask(m, ci, chunk, px.len()));
                        composite_span_in_place(px, l, m, opacity, law);
                    })
            })
        });
        Ok(())
    }
}

fn chunk_mask(mask: &[f32], chunk_index: usize, chunk: usize, span_len: usize) -> &[f32] {
    let start = chunk_index * chunk;
    &mask[start..start + span_len / CHANNELS]
}

fn build_thread_pool(threads: Option<usize>) -> LayerModeResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(LayerModeError::validation(
            "kernel threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| LayerModeError::validation(format!("failed to build rayon thread pool: {e}")))
}

fn normalized_chunk_samples(chunk_samples: usize) -> usize {
    if chunk_samples == 0 { 1 } else { chunk_samples }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/parallel.rs"]
mod tests;
